//! Card primitives and the suit-aware showdown evaluator.
//!
//! - [`Rank`] and [`Suit`]: the two axes of a card
//! - [`Card`]: one card in one byte
//! - [`Hand`]: an unordered set of cards as a 52-bit mask
//! - [`Deck`]: the undealt remainder, drawn with a caller-supplied rng
//! - [`Evaluator`], [`Ranking`], [`Kickers`], [`Strength`]: full 5–7 card
//!   hand strength including flushes, used by the equity simulator
pub mod card;
pub use card::*;

pub mod deck;
pub use deck::*;

pub mod evaluator;
pub use evaluator::*;

pub mod hand;
pub use hand::*;

pub mod kicks;
pub use kicks::*;

pub mod rank;
pub use rank::*;

pub mod ranking;
pub use ranking::*;

pub mod strength;
pub use strength::*;

pub mod suit;
pub use suit::*;
