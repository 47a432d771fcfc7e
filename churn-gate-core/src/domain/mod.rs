pub mod dataset;
pub mod error;
pub mod quality;

pub use error::DomainError;
