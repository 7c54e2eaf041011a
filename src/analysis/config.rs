/// Knobs for one equity ranking.
///
/// Every simulation reads these explicitly; there is no process-wide
/// seed or iteration count. `seed: None` draws fresh entropy per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    iterations: usize,
    seed: Option<u64>,
    threads: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            iterations: crate::ITERATIONS,
            seed: None,
            threads: num_cpus::get(),
        }
    }
}

impl Config {
    pub fn iterations(&self) -> usize {
        self.iterations
    }
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
    pub fn threads(&self) -> usize {
        self.threads
    }
    pub fn with_iterations(self, iterations: usize) -> Self {
        Self { iterations, ..self }
    }
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }
    /// zero falls back to one worker
    pub fn with_threads(self, threads: usize) -> Self {
        Self {
            threads: threads.max(1),
            ..self
        }
    }
    /// seed for the i-th candidate, stable regardless of scheduling
    pub fn stream(&self, i: usize) -> Option<u64> {
        self.seed.map(|s| s.wrapping_add(i as u64))
    }
}
