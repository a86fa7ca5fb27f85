//! Input parsing and validation for the `play` command.
//!
//! Columns are numbered 1 to 7 for people and converted to 0-based engine
//! indices here. Numbers past the last column are passed through so the
//! engine can reject them like any other unplayable column.

/// Parsed interactive input line.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Drop a piece into this 0-based column
    Column(usize),
    /// Abandon the current game and start a fresh one
    NewGame,
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse a line typed during a game.
///
/// Accepts (case-insensitive):
/// - a column number `1`..`7`
/// - "n" or "new" for a new game
/// - "q" or "quit"
///
/// # Example
///
/// ```rust
/// # use connect4_cli::validation::{parse_game_input, ParseResult};
/// assert_eq!(parse_game_input("4"), ParseResult::Column(3));
/// assert_eq!(parse_game_input("NEW"), ParseResult::NewGame);
/// assert_eq!(parse_game_input("q"), ParseResult::Quit);
/// assert!(matches!(parse_game_input("left"), ParseResult::Invalid(_)));
/// ```
pub fn parse_game_input(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "" => ParseResult::Invalid("Empty input".to_string()),
        "q" | "quit" => ParseResult::Quit,
        "n" | "new" => ParseResult::NewGame,
        other => match parse_column(other) {
            Ok(column) => ParseResult::Column(column),
            Err(msg) => ParseResult::Invalid(msg),
        },
    }
}

/// Parse a comma-separated list of 1-based columns into engine indices.
///
/// # Example
///
/// ```rust
/// # use connect4_cli::validation::parse_move_list;
/// assert_eq!(parse_move_list("1, 7,1"), Ok(vec![0, 6, 0]));
/// assert!(parse_move_list("1,,2").is_err());
/// ```
pub fn parse_move_list(input: &str) -> Result<Vec<usize>, String> {
    input
        .split(',')
        .enumerate()
        .map(|(i, part)| parse_column(part.trim()).map_err(|e| format!("move {}: {}", i + 1, e)))
        .collect()
}

fn parse_column(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("Columns are numbered from 1".to_string()),
        Ok(n) => Ok(n - 1),
        Err(_) => Err(format!(
            "Unrecognized input '{}': enter a column number, n for a new game, or q to quit",
            s
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_numbers_are_one_based() {
        assert_eq!(parse_game_input("1"), ParseResult::Column(0));
        assert_eq!(parse_game_input(" 7 "), ParseResult::Column(6));
    }

    #[test]
    fn columns_past_the_board_are_passed_to_the_engine() {
        assert_eq!(parse_game_input("9"), ParseResult::Column(8));
    }

    #[test]
    fn zero_and_words_are_invalid() {
        assert!(matches!(parse_game_input("0"), ParseResult::Invalid(_)));
        assert!(matches!(parse_game_input("-1"), ParseResult::Invalid(_)));
        assert!(matches!(parse_game_input(""), ParseResult::Invalid(_)));
        match parse_game_input("undo") {
            ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
            other => panic!("expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn quit_and_new_game_aliases() {
        assert_eq!(parse_game_input("QUIT"), ParseResult::Quit);
        assert_eq!(parse_game_input("n"), ParseResult::NewGame);
    }

    #[test]
    fn move_list_reports_position_of_bad_entry() {
        let err = parse_move_list("1,2,x").unwrap_err();
        assert!(err.starts_with("move 3:"), "{}", err);
        assert!(parse_move_list("").is_err());
    }
}
