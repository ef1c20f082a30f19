/// Application layer - Use cases and boundary DTOs
pub mod dto;
pub mod use_cases;
