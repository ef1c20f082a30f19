/// Filesystem adapters - File system implementations of the I/O ports
pub mod file_reader;
pub mod file_writer;

pub use file_reader::FileSystemReader;
pub use file_writer::FileSystemWriter;
