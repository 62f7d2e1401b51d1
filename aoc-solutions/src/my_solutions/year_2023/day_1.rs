//! Trebuchet calibration: first and last digit of every line

use crate::malformed::{
    MalformedLineError, MalformedLinePolicy, MalformedReason, numbered_lines, sum_lines,
    sum_numbered_lines,
};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use tracing::instrument;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 1)]
pub struct Solver;

/// Spelled-out digits, indexed by `value - 1`
const DIGIT_WORDS: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// A digit found in a line together with the bytes it was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitToken {
    pub value: u8,
    pub start: usize,
    pub len: usize,
}

/// Every digit occurrence in `line`, left to right
///
/// Each byte offset is tested on its own, so spelled-out digits that share
/// letters (`"eightwo"`) both produce a token. With `extended == false` only
/// ASCII digits count.
pub fn digit_tokens(line: &str, extended: bool) -> impl Iterator<Item = DigitToken> + '_ {
    let bytes = line.as_bytes();
    (0..bytes.len()).filter_map(move |start| {
        let b = bytes[start];
        if b.is_ascii_digit() {
            return Some(DigitToken {
                value: b - b'0',
                start,
                len: 1,
            });
        }
        if !extended {
            return None;
        }
        DIGIT_WORDS
            .iter()
            .zip(1u8..)
            .find(|(word, _)| bytes[start..].starts_with(word.as_bytes()))
            .map(|(word, value)| DigitToken {
                value,
                start,
                len: word.len(),
            })
    })
}

/// `first * 10 + last`, or `None` for a line without digits
pub fn calibration_value(line: &str, extended: bool) -> Option<u32> {
    let mut tokens = digit_tokens(line, extended);
    let first = tokens.next()?;
    let last = tokens.last().unwrap_or(first);
    Some(u32::from(first.value) * 10 + u32::from(last.value))
}

/// Sum of calibration values, failing on the first line without a digit
pub fn extract_calibration_sum<I>(lines: I, extended: bool) -> Result<u64, MalformedLineError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    extract_calibration_sum_with(lines, extended, MalformedLinePolicy::FailFast)
}

#[instrument(level = "debug", skip(lines))]
pub fn extract_calibration_sum_with<I>(
    lines: I,
    extended: bool,
    policy: MalformedLinePolicy,
) -> Result<u64, MalformedLineError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    sum_lines(lines, policy, |line| line_value(line, extended))
}

fn line_value(line: &str, extended: bool) -> Result<u64, MalformedReason> {
    calibration_value(line, extended)
        .map(u64::from)
        .ok_or(MalformedReason::NoDigit)
}

/// Fail-fast sum over lines paired with their position in the input
fn solve_numbered(lines: &[(usize, &str)], extended: bool) -> Result<String, SolveError> {
    sum_numbered_lines(lines.iter().copied(), MalformedLinePolicy::FailFast, |line| {
        line_value(line, extended)
    })
    .map(|sum| sum.to_string())
    .map_err(SolveError::failed)
}

impl AocParser for Solver {
    /// Non-blank lines with their line numbers in the input
    type SharedData<'a> = Vec<(usize, &'a str)>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let lines: Vec<_> = numbered_lines(input).collect();
        if lines.is_empty() {
            return Err(ParseError::MissingData("calibration document is empty".into()));
        }
        Ok(lines)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        solve_numbered(shared, false)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        solve_numbered(shared, true)
    }
}
