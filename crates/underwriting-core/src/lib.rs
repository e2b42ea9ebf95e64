pub mod error;
pub mod explanation;
pub mod extraction;
pub mod matching;
pub mod pipeline;
pub mod ratios;
pub mod types;

pub use error::UnderwritingError;
pub use types::*;

/// Standard result type for all underwriting operations
pub type UnderwritingResult<T> = Result<T, UnderwritingError>;
