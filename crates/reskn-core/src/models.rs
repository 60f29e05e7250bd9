pub mod consent;
pub mod medical;
pub mod patient;
pub mod signature;
pub mod treatment;
