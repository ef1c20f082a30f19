mod mock_metadata_reader;
mod mock_output_presenter;

pub use mock_metadata_reader::MockMetadataReader;
pub use mock_output_presenter::MockOutputPresenter;
