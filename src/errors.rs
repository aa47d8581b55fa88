/// Domain-specific error types for the calculator.
/// The core logic has exactly one failure mode: a scenario probability
/// pair that does not sum to 1.0. It is caught at the collector
/// boundary and surfaced as a warning; it never reaches the evaluator.
/// Everything else here is ambient (config, export serialization).

/// A scenario probability pair failed the sum-to-1.0 check.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("probabilities must sum to 1.0, got {p1} + {p2} = {}", .p1 + .p2)]
pub struct InvalidProbabilityError {
    pub p1: f64,
    pub p2: f64,
}

/// Ambient failures. `InvalidProbabilityError` is deliberately not a
/// variant here: it is converted into a user-visible warning at the
/// collector boundary and never propagates.
#[derive(Debug, thiserror::Error)]
pub enum CalcError {
    #[error("config error: {0}")]
    Config(String),

    #[error("export error: {0}")]
    Export(String),
}

impl From<csv::Error> for CalcError {
    fn from(e: csv::Error) -> Self {
        CalcError::Export(e.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for CalcError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        CalcError::Export(e.to_string())
    }
}

pub type CalcResult<T> = Result<T, CalcError>;
