//! UCI command parsing.

use tempo_core::{Board, Square, create_move};

use crate::engine::{MAX_DEPTH, MIN_DEPTH};
use crate::error::UciError;

/// Parameters for the `go` command.
///
/// All fields are optional; a bare `go` searches at the configured depth.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoParams {
    /// Search to this depth instead of the configured one.
    pub depth: Option<u32>,
}

/// An option set through `setoption`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UciOption {
    /// Default search depth in plies.
    Depth(u32),
}

/// A parsed UCI command.
#[derive(Debug)]
pub enum Command {
    /// `uci` -- identify the engine.
    Uci,
    /// `isready` -- synchronization ping.
    IsReady,
    /// `ucinewgame` -- reset engine state.
    UciNewGame,
    /// `position` -- set up a board position with optional moves applied.
    Position(Board),
    /// `go` -- start searching with given parameters.
    Go(GoParams),
    /// `d` -- print the current board.
    Display,
    /// `setoption` -- change an engine option.
    SetOption(UciOption),
    /// `stop` -- acknowledged; searches run to completion.
    Stop,
    /// `quit` -- exit the engine.
    Quit,
    /// Unrecognized command (silently ignored per UCI spec).
    Unknown(String),
}

/// Parse a single line of UCI input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, UciError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    match tokens[0] {
        "uci" => Ok(Command::Uci),
        "isready" => Ok(Command::IsReady),
        "ucinewgame" => Ok(Command::UciNewGame),
        "d" => Ok(Command::Display),
        "stop" => Ok(Command::Stop),
        "quit" => Ok(Command::Quit),
        "position" => parse_position(&tokens[1..]),
        "go" => parse_go(&tokens[1..]),
        "setoption" => parse_setoption(&tokens[1..]),
        _ => Ok(Command::Unknown(tokens[0].to_string())),
    }
}

/// Parse the `position` command arguments.
///
/// Supports:
/// - `position startpos [moves e2e4 d7d5 ...]`
/// - `position fen <fen-string> [moves e2e4 d7d5 ...]`
fn parse_position(tokens: &[&str]) -> Result<Command, UciError> {
    if tokens.is_empty() {
        return Err(UciError::MalformedPosition);
    }

    let (mut board, rest) = if tokens[0] == "startpos" {
        (Board::starting_position(), &tokens[1..])
    } else if tokens[0] == "fen" {
        let end = tokens.iter().position(|t| *t == "moves").unwrap_or(tokens.len());
        let fen = tokens[1..end].join(" ");
        let board: Board = fen
            .parse()
            .map_err(|source| UciError::InvalidFen { fen: fen.clone(), source })?;
        (board, &tokens[end..])
    } else {
        return Err(UciError::MalformedPosition);
    };

    if rest.first() == Some(&"moves") {
        for uci_move in &rest[1..] {
            board = apply_move(&board, uci_move)?;
        }
    }

    Ok(Command::Position(board))
}

/// Play a coordinate move such as `e2e4` or `e7e8q` on `board`.
///
/// Only queen promotion exists, so `q` is the only accepted suffix.
pub fn apply_move(board: &Board, uci_move: &str) -> Result<Board, UciError> {
    let invalid = || UciError::InvalidMove { uci_move: uci_move.to_string() };

    let (squares, suffix) = match uci_move.len() {
        4 => (uci_move, None),
        5 if uci_move.is_char_boundary(4) => (&uci_move[..4], Some(&uci_move[4..])),
        _ => return Err(invalid()),
    };
    if !squares.is_char_boundary(2) {
        return Err(invalid());
    }
    let from = Square::from_algebraic(&squares[..2]).ok_or_else(invalid)?;
    let to = Square::from_algebraic(&squares[2..]).ok_or_else(invalid)?;

    let mv = create_move(board, from, to);
    match suffix {
        Some("q") if mv.is_promotion() => {}
        Some(_) => return Err(invalid()),
        None => {}
    }

    let transition = board.current_player().make_move(&mv);
    if transition.is_done() { Ok(transition.into_board()) } else { Err(invalid()) }
}

/// Parse the `go` command arguments.
///
/// Supports `depth`; other tokens are silently skipped.
fn parse_go(tokens: &[&str]) -> Result<Command, UciError> {
    let mut params = GoParams::default();

    let mut i = 0;
    while i < tokens.len() {
        match tokens[i] {
            "depth" => {
                params.depth = Some(parse_depth(tokens.get(i + 1), "depth")?);
                i += 2;
            }
            _ => {
                // Unknown token -- skip per UCI convention
                i += 1;
            }
        }
    }

    Ok(Command::Go(params))
}

/// Parse `setoption name <name> value <value>`.
fn parse_setoption(tokens: &[&str]) -> Result<Command, UciError> {
    let value_at = tokens.iter().position(|t| *t == "value");
    let name_end = value_at.unwrap_or(tokens.len());
    if tokens.first() != Some(&"name") || name_end < 2 {
        return Err(UciError::MissingValue { param: "name".to_string() });
    }
    let name = tokens[1..name_end].join(" ");

    if name.eq_ignore_ascii_case("depth") {
        let depth = parse_depth(value_at.and_then(|i| tokens.get(i + 1)), &name)?;
        Ok(Command::SetOption(UciOption::Depth(depth)))
    } else {
        Err(UciError::UnknownOption { name })
    }
}

/// Parse a search depth, which must lie within `MIN_DEPTH..=MAX_DEPTH`.
fn parse_depth(token: Option<&&str>, param: &str) -> Result<u32, UciError> {
    let depth: u32 = parse_int(token, param)?;
    if !(MIN_DEPTH..=MAX_DEPTH).contains(&depth) {
        return Err(UciError::InvalidValue { param: param.to_string(), value: depth.to_string() });
    }
    Ok(depth)
}

/// Parse an integer value from a token.
fn parse_int<T: std::str::FromStr>(token: Option<&&str>, param: &str) -> Result<T, UciError> {
    let value = token.ok_or_else(|| UciError::MissingValue { param: param.to_string() })?;
    value.parse().map_err(|_| UciError::InvalidValue {
        param: param.to_string(),
        value: value.to_string(),
    })
}
