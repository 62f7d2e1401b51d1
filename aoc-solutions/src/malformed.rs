//! The single error kind raised for unparseable puzzle lines

use thiserror::Error;
use tracing::warn;

/// A puzzle line that could not be turned into a value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed line {line}: {reason}")]
pub struct MalformedLineError {
    /// 1-based position of the line in the input
    pub line: usize,
    pub reason: MalformedReason,
}

/// What was wrong with a malformed line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedReason {
    #[error("no digit found")]
    NoDigit,
    #[error("missing ':' separator")]
    MissingColon,
    #[error("expected `Game <id>`, got `{0}`")]
    InvalidGameLabel(String),
    #[error("invalid game id `{0}`")]
    InvalidGameId(String),
    #[error("invalid cube count `{0}`")]
    InvalidCount(String),
    #[error("expected `<count> <color>`, got `{0}`")]
    InvalidClause(String),
}

/// What to do when a line fails to parse
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedLinePolicy {
    /// Abort the whole computation with the first error
    #[default]
    FailFast,
    /// Leave the line out of the total and log a warning
    Skip,
}

/// Non-blank lines of `input`, each with its 1-based line number
pub(crate) fn numbered_lines(input: &str) -> impl Iterator<Item = (usize, &str)> {
    input
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line))
        .filter(|(_, line)| !line.trim().is_empty())
}

/// Sum `value_of(line)` over all lines, numbering lines from 1 for errors
pub(crate) fn sum_lines<I, F>(
    lines: I,
    policy: MalformedLinePolicy,
    value_of: F,
) -> Result<u64, MalformedLineError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    F: FnMut(&str) -> Result<u64, MalformedReason>,
{
    let numbered = lines.into_iter().enumerate().map(|(idx, line)| (idx + 1, line));
    sum_numbered_lines(numbered, policy, value_of)
}

/// Like [`sum_lines`], for lines that already carry their line number
pub(crate) fn sum_numbered_lines<I, L, F>(
    lines: I,
    policy: MalformedLinePolicy,
    mut value_of: F,
) -> Result<u64, MalformedLineError>
where
    I: IntoIterator<Item = (usize, L)>,
    L: AsRef<str>,
    F: FnMut(&str) -> Result<u64, MalformedReason>,
{
    lines.into_iter().try_fold(0u64, |total, (line, text)| {
        let reason = match value_of(text.as_ref()) {
            Ok(value) => return Ok(total + value),
            Err(reason) => reason,
        };
        let err = MalformedLineError { line, reason };
        match policy {
            MalformedLinePolicy::FailFast => Err(err),
            MalformedLinePolicy::Skip => {
                warn!(error = %err, "skipping malformed line");
                Ok(total)
            }
        }
    })
}
