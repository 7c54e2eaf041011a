use super::board::Board;
use super::config::Config;
use super::mode::Mode;
use super::pocket::Pocket;
use super::score::Score;
use super::simulator::Simulator;
use crate::Error;
use crate::Probability;
use crate::Result;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::prelude::*;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

pub type Equity = Probability;

/// One pocket and the metric it was ranked by.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "client", derive(serde::Serialize))]
pub struct Entry<M> {
    pocket: Pocket,
    metric: M,
}

impl<M: Copy> Entry<M> {
    pub fn pocket(&self) -> Pocket {
        self.pocket
    }
    pub fn metric(&self) -> M {
        self.metric
    }
}

impl<M> From<(Pocket, M)> for Entry<M> {
    fn from((pocket, metric): (Pocket, M)) -> Self {
        Self { pocket, metric }
    }
}

/// A complete ranking in whichever metric the mode asked for.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "client", derive(serde::Serialize))]
#[cfg_attr(feature = "client", serde(tag = "mode", content = "entries", rename_all = "lowercase"))]
pub enum Standings {
    Strength(Vec<Entry<Score>>),
    Equity(Vec<Entry<Equity>>),
}

impl Standings {
    pub fn mode(&self) -> Mode {
        match self {
            Self::Strength(_) => Mode::Strength,
            Self::Equity(_) => Mode::Equity,
        }
    }
    pub fn len(&self) -> usize {
        match self {
            Self::Strength(entries) => entries.len(),
            Self::Equity(entries) => entries.len(),
        }
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// pockets in ranked order
    pub fn pockets(&self) -> Vec<Pocket> {
        match self {
            Self::Strength(entries) => entries.iter().map(Entry::pocket).collect(),
            Self::Equity(entries) => entries.iter().map(Entry::pocket).collect(),
        }
    }
}

/// Scores every legal pocket on a board and sorts strongest first.
///
/// Entries with equal metrics fall back to the higher pocket, so the
/// order is fully deterministic. The whole list is returned; cutting it
/// down for display is up to the caller.
pub struct Leaderboard;

impl Leaderboard {
    pub fn rank(board: &Board, mode: Mode, config: &Config, cancel: &AtomicBool) -> Result<Standings> {
        match mode {
            Mode::Strength => Ok(Standings::Strength(Self::strength(board))),
            Mode::Equity => Self::equity(board, config, cancel).map(Standings::Equity),
        }
    }

    pub fn strength(board: &Board) -> Vec<Entry<Score>> {
        let mut entries = Pocket::enumerate(board)
            .into_iter()
            .map(|pocket| (pocket, Score::from(pocket.with(board).as_slice())))
            .map(Entry::from)
            .collect::<Vec<_>>();
        entries.sort_by(|a, b| {
            b.metric
                .cmp(&a.metric)
                .then_with(|| b.pocket.cmp(&a.pocket))
        });
        log::info!("ranked {} pockets by strength on {}", entries.len(), board);
        entries
    }

    /// Simulates every pocket in parallel on `config.threads()` workers.
    ///
    /// Candidate `i` draws from its own generator seeded with
    /// `seed + i`, so a seeded run gives the same numbers on any number
    /// of threads. `cancel` is polled before each candidate starts.
    pub fn equity(board: &Board, config: &Config, cancel: &AtomicBool) -> Result<Vec<Entry<Equity>>> {
        let start = std::time::Instant::now();
        let pockets = Pocket::enumerate(board);
        log::info!(
            "simulating {} pockets on {} ({} iterations, {} threads)",
            pockets.len(),
            board,
            config.iterations(),
            config.threads()
        );
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads())
            .build()
            .map_err(|e| Error::Pool(e.to_string()))?;
        let mut entries = pool.install(|| {
            pockets
                .par_iter()
                .enumerate()
                .map(|(i, pocket)| Self::candidate(i, *pocket, board, config, cancel))
                .collect::<Result<Vec<Entry<Equity>>>>()
        })?;
        entries.sort_by(|a, b| {
            b.metric
                .total_cmp(&a.metric)
                .then_with(|| b.pocket.cmp(&a.pocket))
        });
        log::info!(
            "ranked {} pockets by equity in {:.2?}",
            entries.len(),
            start.elapsed()
        );
        Ok(entries)
    }

    fn candidate(
        i: usize,
        pocket: Pocket,
        board: &Board,
        config: &Config,
        cancel: &AtomicBool,
    ) -> Result<Entry<Equity>> {
        if cancel.load(Ordering::Relaxed) {
            return Err(Error::Cancelled);
        }
        let ref mut rng = match config.stream(i) {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        };
        let tally = Simulator::try_from((pocket, board))?.simulate(config.iterations(), rng)?;
        log::debug!("{:>3} {} {}", i, pocket, tally);
        Ok(Entry::from((pocket, tally.equity())))
    }
}
