/// Reasons a die term can't be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidTerm {
    #[error("number of dice must be greater than 0")]
    NoDice,

    #[error("number of sides must be greater than 1, got {0}")]
    TooFewSides(u32),

    #[error("at most {limit} dice can be rolled at once, got {count}")]
    TooManyDice { count: u32, limit: u32 },
}

/// Failure to parse a dice notation.
///
/// Positions are byte offsets into the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected {expected} at position {position}")]
    Expected {
        position: usize,
        expected: &'static str,
    },

    #[error("unexpected input {found:?} at position {position}")]
    TrailingInput { position: usize, found: String },

    #[error("too many {what} at position {position}, at most {limit} allowed")]
    TooLarge {
        position: usize,
        what: &'static str,
        limit: u64,
    },

    #[error("invalid die at position {position}: {source}")]
    InvalidTerm {
        position: usize,
        #[source]
        source: InvalidTerm,
    },
}

impl ParseError {
    pub fn position(&self) -> usize {
        match self {
            ParseError::Expected { position, .. }
            | ParseError::TrailingInput { position, .. }
            | ParseError::TooLarge { position, .. }
            | ParseError::InvalidTerm { position, .. } => *position,
        }
    }
}
