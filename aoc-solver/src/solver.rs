//! Traits a puzzle implements: parse once, then answer parts by number

use crate::error::{ParseError, SolveError};

/// Turns raw puzzle input into the data every part works on
pub trait AocParser {
    /// Parsed input, free to borrow from the text it came from
    type SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Part `N` of a puzzle
///
/// ```
/// use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
///
/// struct Longest;
///
/// impl AocParser for Longest {
///     type SharedData<'a> = Vec<&'a str>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.lines().collect())
///     }
/// }
///
/// impl PartSolver<1> for Longest {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         let longest = shared.iter().map(|line| line.len()).max().unwrap_or(0);
///         Ok(longest.to_string())
///     }
/// }
///
/// let mut lines = Longest::parse("ab\nabcd\n").unwrap();
/// assert_eq!(<Longest as PartSolver<1>>::solve(&mut lines).unwrap(), "4");
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A puzzle with parts `1..=PARTS`
///
/// `#[derive(AocSolver)]` writes this impl, forwarding each part number to
/// its `PartSolver<N>` and answering anything else with
/// [`SolveError::PartOutOfRange`].
pub trait Solver: AocParser {
    const PARTS: u8;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}
