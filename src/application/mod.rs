/// Application layer - Use cases, DTOs and factories
///
/// Use cases drive the descriptor compiler and publish its output through
/// the outbound ports.
pub mod dto;
pub mod factories;
pub mod use_cases;
