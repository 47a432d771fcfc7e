// churn-gate-core/src/infrastructure/checkers/mod.rs

pub mod fallback;
#[cfg(feature = "expectations")]
pub mod rich;

pub use fallback::FallbackChecker;
#[cfg(feature = "expectations")]
pub use rich::RichChecker;
