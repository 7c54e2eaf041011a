use crate::cards::Rank;
use thiserror::Error;

/// Everything that can go wrong between reading a board and ranking hands.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid rank {0:?}, expected one of 23456789TJQKA")]
    InvalidRank(String),

    #[error("invalid suit {0:?}, expected one of cdhs")]
    InvalidSuit(String),

    #[error("invalid card {0:?}, expected rank then suit")]
    InvalidCard(String),

    #[error("board needs at least {min} ranks, found {found}", min = crate::BOARD_MIN)]
    TooFewCards { found: usize },

    #[error("board holds more than four copies of {rank}")]
    TooManyCopies { rank: Rank },

    #[error("deck exhausted: need {needed} cards, {available} remain")]
    DeckExhausted { needed: usize, available: usize },

    #[error("simulation needs at least one iteration")]
    NoIterations,

    #[error("ranking cancelled")]
    Cancelled,

    #[error("invalid mode {0:?}, expected strength or equity")]
    InvalidMode(String),

    #[error("worker pool unavailable: {0}")]
    Pool(String),
}

pub type Result<T> = std::result::Result<T, Error>;
