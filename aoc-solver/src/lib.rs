//! Hosting for Advent of Code puzzles
//!
//! A puzzle parses its input once with [`AocParser`] and answers each part
//! through [`PartSolver<N>`]. `#[derive(AocSolver)]` joins the parts into a
//! [`Solver`], and `#[derive(AutoRegisterSolver)]` makes it reachable from
//! [`SolverRegistry::with_plugins`].
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, SolverRegistry};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! pub struct Sums;
//!
//! impl AocParser for Sums {
//!     type SharedData<'a> = Vec<i64>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|line| line.parse().map_err(|_| ParseError::InvalidFormat(line.to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Sums {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i64>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Sums {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().product::<i64>().to_string())
//!     }
//! }
//!
//! let mut registry = SolverRegistry::new();
//! registry.register::<Sums>(2023, 1).unwrap();
//!
//! let mut solver = registry.create_solver(2023, 1, "1\n2\n4").unwrap();
//! assert_eq!(solver.solve(1).unwrap(), "7");
//! assert_eq!(solver.solve(2).unwrap(), "8");
//! ```

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, instantiate};
pub use registry::{CreateFn, SolverPlugin, SolverRegistry};
pub use solver::{AocParser, PartSolver, Solver};

// `AutoRegisterSolver` expands to `inventory::submit!`
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
