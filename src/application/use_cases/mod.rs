/// Use cases - Application services orchestrating the domain
pub mod generate_bom;

pub use generate_bom::GenerateBomUseCase;
