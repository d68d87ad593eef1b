//! Parsing of user-supplied number lists and traversal choices.

use tracing::{debug, instrument};

use crate::domain::{DomainError, TraversalOrder};

/// Outcome of parsing a number list, with every rejected token kept for reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedNumbers {
    /// Unique numbers in first-occurrence order
    pub accepted: Vec<i32>,
    /// Tokens that are not integers
    pub invalid: Vec<String>,
    /// Negative numbers, rejected unless explicitly allowed
    pub negative: Vec<String>,
    /// Repeated numbers dropped after their first occurrence
    pub duplicates: Vec<i32>,
}

impl ParsedNumbers {
    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty()
    }
}

/// Parses `8,4,9` or `8 4 9`.
///
/// Commas take precedence: if the text contains one, it is the only separator.
#[instrument(level = "debug")]
pub fn parse_numbers(text: &str, allow_negative: bool) -> ParsedNumbers {
    let text = text.trim();
    let mut parsed = ParsedNumbers::default();
    if text.is_empty() {
        return parsed;
    }

    let tokens: Vec<&str> = if text.contains(',') {
        text.split(',').map(str::trim).collect()
    } else {
        text.split_whitespace().collect()
    };

    for token in tokens {
        match token.parse::<i32>() {
            Ok(n) if n < 0 && !allow_negative => parsed.negative.push(token.to_string()),
            Ok(n) if parsed.accepted.contains(&n) => parsed.duplicates.push(n),
            Ok(n) => parsed.accepted.push(n),
            Err(_) => parsed.invalid.push(token.to_string()),
        }
    }
    debug!(?parsed, "parsed numbers");
    parsed
}

/// Accepts `1`-`4` as menu shortcuts or any order name, case-insensitively.
pub fn parse_order_choice(text: &str) -> Result<TraversalOrder, DomainError> {
    let text = text.trim();
    match text {
        "1" => Ok(TraversalOrder::PreOrder),
        "2" => Ok(TraversalOrder::InOrder),
        "3" => Ok(TraversalOrder::PostOrder),
        "4" => Ok(TraversalOrder::LevelOrder),
        other => other.parse(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_comma_list_when_parsing_then_accepts_in_order() {
        let parsed = parse_numbers("8,4,9,7,2,13,11,46", false);
        assert_eq!(parsed.accepted, vec![8, 4, 9, 7, 2, 13, 11, 46]);
        assert!(parsed.invalid.is_empty());
    }

    #[test]
    fn given_space_list_with_noise_when_parsing_then_sorts_rejections() {
        let parsed = parse_numbers("3  x 5 -2 3 7", false);
        assert_eq!(parsed.accepted, vec![3, 5, 7]);
        assert_eq!(parsed.invalid, vec!["x"]);
        assert_eq!(parsed.negative, vec!["-2"]);
        assert_eq!(parsed.duplicates, vec![3]);
    }

    #[test]
    fn given_negatives_allowed_when_parsing_then_accepted() {
        let parsed = parse_numbers("-1, 0, 1", true);
        assert_eq!(parsed.accepted, vec![-1, 0, 1]);
        assert!(parsed.negative.is_empty());
    }

    #[test]
    fn given_blank_input_when_parsing_then_empty() {
        assert!(parse_numbers("   ", false).is_empty());
    }

    #[test]
    fn given_menu_digit_when_parsing_choice_then_maps_to_order() {
        assert_eq!(parse_order_choice("4"), Ok(TraversalOrder::LevelOrder));
        assert_eq!(parse_order_choice(" PostOrder "), Ok(TraversalOrder::PostOrder));
        assert!(parse_order_choice("5").is_err());
    }
}
