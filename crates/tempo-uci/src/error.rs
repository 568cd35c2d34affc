//! UCI protocol errors.

use tempo_core::FenError;

/// Errors that can occur during UCI protocol handling.
#[derive(Debug, thiserror::Error)]
pub enum UciError {
    /// The `position` command is missing `startpos` or `fen` keyword.
    #[error("malformed position command: missing startpos or fen keyword")]
    MalformedPosition,

    /// Failed to parse a FEN string.
    #[error("invalid FEN \"{fen}\": {source}")]
    InvalidFen {
        /// The FEN string that failed to parse.
        fen: String,
        /// Why parsing failed.
        source: FenError,
    },

    /// A move in the `position` command is malformed or cannot be played.
    #[error("invalid move: {uci_move}")]
    InvalidMove {
        /// The move text as received.
        uci_move: String,
    },

    /// A command parameter is missing its value.
    #[error("missing value for {param}")]
    MissingValue {
        /// The parameter name.
        param: String,
    },

    /// A command parameter has a value that does not parse or is out of range.
    #[error("invalid value for {param}: {value}")]
    InvalidValue {
        /// The parameter name.
        param: String,
        /// The offending value.
        value: String,
    },

    /// `setoption` named an option this engine does not have.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name as received.
        name: String,
    },

    /// An I/O error occurred while reading from stdin.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
