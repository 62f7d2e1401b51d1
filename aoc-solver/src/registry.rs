//! Lookup from (year, day) to the puzzle that solves it

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, instantiate};
use crate::solver::Solver;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tracing::{debug, trace};

/// Parses input into a ready-to-solve puzzle
pub type CreateFn = for<'a> fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>;

/// A solver submitted at link time by `#[derive(AutoRegisterSolver)]`
pub struct SolverPlugin {
    pub year: u16,
    pub day: u8,
    pub parts: u8,
    pub create: CreateFn,
}

inventory::collect!(SolverPlugin);

/// Solvers keyed by (year, day)
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver, SolverRegistry};
///
/// struct Echo;
///
/// impl AocParser for Echo {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input)
///     }
/// }
///
/// impl Solver for Echo {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, _part: u8) -> Result<String, SolveError> {
///         Ok(shared.to_string())
///     }
/// }
///
/// let mut registry = SolverRegistry::new();
/// registry.register::<Echo>(2023, 1).unwrap();
///
/// let mut solver = registry.create_solver(2023, 1, "hello").unwrap();
/// assert_eq!(solver.solve(1).unwrap(), "hello");
/// ```
#[derive(Default)]
pub struct SolverRegistry {
    solvers: HashMap<(u16, u8), CreateFn>,
}

impl SolverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every solver linked into the binary through [`SolverPlugin`]
    pub fn with_plugins() -> Result<Self, RegistrationError> {
        inventory::iter::<SolverPlugin>().try_fold(Self::new(), |mut registry, plugin| {
            registry.insert(plugin.year, plugin.day, plugin.create)?;
            Ok(registry)
        })
    }

    /// Fails if another solver already answers for `year`/`day`
    pub fn register<S>(&mut self, year: u16, day: u8) -> Result<(), RegistrationError>
    where
        S: Solver + 'static,
    {
        self.insert(year, day, instantiate::<S>)
    }

    fn insert(&mut self, year: u16, day: u8, create: CreateFn) -> Result<(), RegistrationError> {
        match self.solvers.entry((year, day)) {
            Entry::Occupied(_) => Err(RegistrationError::Duplicate { year, day }),
            Entry::Vacant(slot) => {
                trace!(year, day, "registered solver");
                slot.insert(create);
                Ok(())
            }
        }
    }

    /// Parse `input` with the solver for `year`/`day`
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let create = self
            .solvers
            .get(&(year, day))
            .ok_or(SolverError::NotFound { year, day })?;
        let solver = create(input)?;
        debug!(year, day, parts = solver.parts(), "parsed puzzle input");
        Ok(solver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolveError;
    use crate::solver::AocParser;

    struct CountLines;

    impl AocParser for CountLines {
        type SharedData<'a> = Vec<&'a str>;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            if input.is_empty() {
                return Err(ParseError::MissingData("empty input".into()));
            }
            Ok(input.lines().collect())
        }
    }

    impl Solver for CountLines {
        const PARTS: u8 = 2;

        fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
            match part {
                1 => Ok(shared.len().to_string()),
                2 => Ok(shared.iter().map(|l| l.len()).sum::<usize>().to_string()),
                _ => Err(SolveError::PartOutOfRange(part)),
            }
        }
    }

    fn registry() -> SolverRegistry {
        let mut registry = SolverRegistry::new();
        registry.register::<CountLines>(2023, 1).unwrap();
        registry
    }

    #[test]
    fn test_create_and_solve() {
        let mut solver = registry().create_solver(2023, 1, "ab\ncde").unwrap();

        assert_eq!(solver.parts(), 2);
        assert_eq!(solver.solve(1).unwrap(), "2");
        assert_eq!(solver.solve(2).unwrap(), "5");
        assert!(matches!(solver.solve(3), Err(SolveError::PartOutOfRange(3))));
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = registry();
        assert_eq!(
            registry.register::<CountLines>(2023, 1),
            Err(RegistrationError::Duplicate { year: 2023, day: 1 })
        );
        // the same solver under another day is fine
        assert_eq!(registry.register::<CountLines>(2023, 2), Ok(()));
    }

    #[test]
    fn test_not_found_and_parse_error() {
        let registry = registry();

        assert!(matches!(
            registry.create_solver(2022, 1, "x"),
            Err(SolverError::NotFound { year: 2022, day: 1 })
        ));
        assert!(matches!(
            registry.create_solver(2023, 1, ""),
            Err(SolverError::Parse(ParseError::MissingData(_)))
        ));
    }

    #[test]
    fn test_without_plugins_nothing_is_found() {
        // this crate submits no plugins of its own
        let registry = SolverRegistry::with_plugins().unwrap();
        assert!(matches!(
            registry.create_solver(2023, 1, "x"),
            Err(SolverError::NotFound { .. })
        ));
    }
}
