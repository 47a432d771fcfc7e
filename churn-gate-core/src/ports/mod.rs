pub mod checker;

pub use checker::DatasetChecker;
