//! Rank every two-card starting hand on a partial board.
//!
//! [`cards`] holds the card primitives and the suit-aware showdown
//! evaluator. [`analysis`] holds the suit-blind classifier, pocket
//! enumeration, Monte Carlo equity, and the leaderboard that ties them
//! together. [`report`] renders a leaderboard for people.
pub mod analysis;
pub mod cards;
pub mod error;
pub mod report;

pub use error::Error;
pub use error::Result;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Win rates, equities, and their standard errors.
pub type Probability = f32;

// ============================================================================
// BOARD SHAPE
// ============================================================================
/// Fewest community ranks a board may show (the flop).
pub const BOARD_MIN: usize = 3;
/// Most community ranks a board may show (the river).
pub const BOARD_MAX: usize = 5;

// ============================================================================
// PRESENTATION
// ============================================================================
/// Entries shown when a leaderboard is cut down for display.
pub const LEADERBOARD_SIZE: usize = 20;

// ============================================================================
// SIMULATION
// ============================================================================
/// Monte Carlo iterations per pocket unless configured otherwise.
pub const ITERATIONS: usize = 500;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at the given level.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) -> std::result::Result<(), log::SetLoggerError> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
}
