/// Outbound adapters - Concrete implementations of the outbound ports
pub mod filesystem;
pub mod formatters;
