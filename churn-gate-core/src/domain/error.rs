// churn-gate-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic, PartialEq)]
pub enum DomainError {
    #[error("Input Error: {0}")]
    #[diagnostic(
        code(churn_gate::domain::input),
        help("The dataset must be row/column shaped: unique column names and one value per column in every row.")
    )]
    InputError(String),
}
