//! Rank-only hand ranking on a partial board.
//!
//! A [`Board`] of 3 to 5 ranks fixes which [`Pocket`]s are legal. Each
//! pocket is ranked either by its suit-blind [`Score`] or by the equity a
//! [`Simulator`] estimates against one random opponent, and the
//! [`Leaderboard`] sorts the lot.
pub mod board;
pub use board::*;

pub mod category;
pub use category::*;

pub mod config;
pub use config::*;

pub mod leaderboard;
pub use leaderboard::*;

pub mod mode;
pub use mode::*;

pub mod pocket;
pub use pocket::*;

pub mod pockets;
pub use pockets::*;

pub mod score;
pub use score::*;

pub mod simulator;
pub use simulator::*;

pub mod tally;
pub use tally::*;
