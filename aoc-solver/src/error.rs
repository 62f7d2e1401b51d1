//! Errors raised while parsing, solving and looking up puzzles

use thiserror::Error;

/// Puzzle input rejected by [`AocParser::parse`](crate::AocParser::parse)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid input: {0}")]
    InvalidFormat(String),
    #[error("missing input: {0}")]
    MissingData(String),
}

#[derive(Debug, Error)]
pub enum SolveError {
    /// Part numbers run from 1 to `Solver::PARTS`
    #[error("part {0} does not exist")]
    PartOutOfRange(u8),
    #[error("solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SolveError {
    pub fn failed<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::SolveFailed(Box::new(error))
    }
}

/// Failure to turn a (year, day) and its input into a solver
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("no solver registered for {year} day {day}")]
    NotFound { year: u16, day: u8 },
    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("{year} day {day} has more than one solver")]
    Duplicate { year: u16, day: u8 },
}
