//! Parsed puzzles behind an object-safe interface

use crate::error::{ParseError, SolveError};
use crate::solver::Solver;
use tracing::debug;

/// A parsed puzzle whose parts can be solved in any order, any number of times
pub trait DynSolver {
    fn parts(&self) -> u8;

    fn solve(&mut self, part: u8) -> Result<String, SolveError>;
}

struct SolverInstance<'a, S: Solver> {
    shared: S::SharedData<'a>,
}

impl<S: Solver> DynSolver for SolverInstance<'_, S> {
    fn parts(&self) -> u8 {
        S::PARTS
    }

    fn solve(&mut self, part: u8) -> Result<String, SolveError> {
        if !(1..=S::PARTS).contains(&part) {
            return Err(SolveError::PartOutOfRange(part));
        }
        let answer = S::solve_part(&mut self.shared, part)?;
        debug!(part, answer = %answer, "solved part");
        Ok(answer)
    }
}

/// Parse `input` with `S` and keep the result for later [`DynSolver::solve`] calls
pub fn instantiate<S>(input: &str) -> Result<Box<dyn DynSolver + '_>, ParseError>
where
    S: Solver + 'static,
{
    let shared = S::parse(input)?;
    Ok(Box::new(SolverInstance::<S> { shared }))
}
