//! Cube Conundrum: which games fit in a bag with a known cube count

use crate::malformed::{
    MalformedLineError, MalformedLinePolicy, MalformedReason, numbered_lines, sum_lines,
};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;
use tracing::{instrument, trace};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2023, day = 2)]
pub struct Solver;

/// The bag the puzzle asks about
pub const PUZZLE_LIMITS: Limits = Limits::new(12, 13, 14);

static GAME_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Game\s+(\S+)$").expect("game label pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CubeColor {
    Red,
    Green,
    Blue,
}

impl FromStr for CubeColor {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "red" => Ok(Self::Red),
            "green" => Ok(Self::Green),
            "blue" => Ok(Self::Blue),
            _ => Err(()),
        }
    }
}

/// Maximum number of cubes of each color in the bag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

impl Limits {
    pub const fn new(red: u32, green: u32, blue: u32) -> Self {
        Self { red, green, blue }
    }

    pub fn limit(&self, color: CubeColor) -> u32 {
        match color {
            CubeColor::Red => self.red,
            CubeColor::Green => self.green,
            CubeColor::Blue => self.blue,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observation {
    pub color: CubeColor,
    pub count: u32,
}

/// One handful of cubes shown during a game
pub type Reveal = Vec<Observation>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub id: u32,
    pub reveals: Vec<Reveal>,
}

impl GameRecord {
    /// Every observation stays within its color's limit
    ///
    /// A count equal to the limit still fits. Stops at the first violation.
    pub fn is_feasible(&self, limits: &Limits) -> bool {
        self.observations()
            .all(|obs| obs.count <= limits.limit(obs.color))
    }

    pub fn observations(&self) -> impl Iterator<Item = &Observation> + '_ {
        self.reveals.iter().flatten()
    }
}

impl FromStr for GameRecord {
    type Err = MalformedReason;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (label, body) = line.split_once(':').ok_or(MalformedReason::MissingColon)?;

        let label = label.trim();
        let id = GAME_LABEL
            .captures(label)
            .and_then(|caps| caps.get(1))
            .ok_or_else(|| MalformedReason::InvalidGameLabel(label.to_string()))?
            .as_str();
        let id: u32 = id
            .parse()
            .map_err(|_| MalformedReason::InvalidGameId(id.to_string()))?;

        let reveals = body
            .split(';')
            .map(parse_reveal)
            .collect::<Result<_, _>>()?;

        Ok(Self { id, reveals })
    }
}

fn parse_reveal(reveal: &str) -> Result<Reveal, MalformedReason> {
    let mut observations = Vec::new();
    for clause in reveal.split(',') {
        let mut tokens = clause.split_whitespace();
        let (Some(count), Some(color), None) = (tokens.next(), tokens.next(), tokens.next()) else {
            return Err(MalformedReason::InvalidClause(clause.trim().to_string()));
        };

        let count: u32 = count
            .parse()
            .map_err(|_| MalformedReason::InvalidCount(count.to_string()))?;

        match color.parse::<CubeColor>() {
            Ok(color) => observations.push(Observation { color, count }),
            Err(()) => trace!(color, count, "ignoring unknown cube color"),
        }
    }
    Ok(observations)
}

/// Parse a single `Game <id>: ...` line
pub fn parse_game(line: &str) -> Result<GameRecord, MalformedReason> {
    line.parse()
}

/// Sum of the ids of feasible games among already parsed records
pub fn feasible_id_sum<'a, I>(games: I, limits: &Limits) -> u64
where
    I: IntoIterator<Item = &'a GameRecord>,
{
    games
        .into_iter()
        .filter(|game| game.is_feasible(limits))
        .map(|game| u64::from(game.id))
        .sum()
}

/// Sum of the ids of feasible games, failing on the first malformed line
pub fn sum_feasible_game_ids<I>(lines: I, limits: &Limits) -> Result<u64, MalformedLineError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    sum_feasible_game_ids_with(lines, limits, MalformedLinePolicy::FailFast)
}

/// Each line is parsed in full before its feasibility is checked, so a
/// malformed clause is reported even when an earlier reveal already fails.
#[instrument(level = "debug", skip(lines))]
pub fn sum_feasible_game_ids_with<I>(
    lines: I,
    limits: &Limits,
    policy: MalformedLinePolicy,
) -> Result<u64, MalformedLineError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    sum_lines(lines, policy, |line| {
        let game = parse_game(line)?;
        Ok(if game.is_feasible(limits) {
            u64::from(game.id)
        } else {
            0
        })
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<GameRecord>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        numbered_lines(input)
            .map(|(line, text)| {
                parse_game(text).map_err(|reason| MalformedLineError { line, reason })
            })
            .collect::<Result<_, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(feasible_id_sum(shared.iter(), &PUZZLE_LIMITS).to_string())
    }
}
