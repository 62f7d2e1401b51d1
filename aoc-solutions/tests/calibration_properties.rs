//! Property tests for the 2023 day 1 calibration extractor

use aoc_solutions::my_solutions::year_2023::day_1::{
    calibration_value, digit_tokens, extract_calibration_sum,
};
use proptest::prelude::*;

/// Lines of lowercase letters and digits with at least one digit
fn line_with_digit() -> impl Strategy<Value = String> {
    ("[a-z0-9]{0,12}", 0u8..=9, "[a-z0-9]{0,12}")
        .prop_map(|(head, digit, tail)| format!("{head}{digit}{tail}"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn literal_sum_matches_first_and_last_digit(lines in prop::collection::vec(line_with_digit(), 1..20)) {
        let expected: u64 = lines
            .iter()
            .map(|line| {
                let digits: Vec<u64> = line
                    .chars()
                    .filter_map(|c| c.to_digit(10))
                    .map(u64::from)
                    .collect();
                digits[0] * 10 + digits[digits.len() - 1]
            })
            .sum();

        prop_assert_eq!(extract_calibration_sum(&lines, false), Ok(expected));
    }

    #[test]
    fn extended_tokens_superset_of_literal(line in "[a-z0-9]{0,24}") {
        let literal: Vec<_> = digit_tokens(&line, false).collect();
        let extended: Vec<_> = digit_tokens(&line, true).collect();

        for token in &literal {
            prop_assert!(extended.contains(token));
        }
        prop_assert!(extended.windows(2).all(|w| w[0].start < w[1].start));
    }

    #[test]
    fn token_spans_point_at_their_text(line in "[a-z0-9]{0,24}") {
        const WORDS: [&str; 9] = ["one", "two", "three", "four", "five", "six", "seven", "eight", "nine"];

        for token in digit_tokens(&line, true) {
            let text = &line[token.start..token.start + token.len];
            let expected = if token.len == 1 {
                token.value.to_string()
            } else {
                WORDS[usize::from(token.value) - 1].to_string()
            };
            prop_assert_eq!(text, expected);
        }
    }

    #[test]
    fn calibration_is_deterministic(line in line_with_digit(), extended in any::<bool>()) {
        prop_assert_eq!(calibration_value(&line, extended), calibration_value(&line, extended));
    }
}
