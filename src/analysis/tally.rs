use crate::Probability;
use std::cmp::Ordering;

/// Showdown outcomes accumulated over one simulation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Tally {
    wins: u32,
    ties: u32,
    loss: u32,
}

impl Tally {
    pub fn wins(&self) -> u32 {
        self.wins
    }
    pub fn ties(&self) -> u32 {
        self.ties
    }
    pub fn losses(&self) -> u32 {
        self.loss
    }
    pub fn total(&self) -> u32 {
        self.wins + self.ties + self.loss
    }
    /// win rate with ties counted half
    pub fn equity(&self) -> Probability {
        match self.total() {
            0 => 0.,
            n => (self.wins as Probability + 0.5 * self.ties as Probability) / n as Probability,
        }
    }
    /// binomial standard error of the equity estimate, sqrt(p(1-p)/n)
    pub fn error(&self) -> Probability {
        match self.total() {
            0 => 0.,
            n => {
                let p = self.equity();
                (p * (1. - p) / n as Probability).sqrt()
            }
        }
    }
    /// hero compared against villain
    pub fn record(&mut self, outcome: Ordering) {
        match outcome {
            Ordering::Greater => self.wins += 1,
            Ordering::Equal => self.ties += 1,
            Ordering::Less => self.loss += 1,
        }
    }
}

impl FromIterator<Ordering> for Tally {
    fn from_iter<I: IntoIterator<Item = Ordering>>(outcomes: I) -> Self {
        outcomes.into_iter().fold(Self::default(), |mut tally, o| {
            tally.record(o);
            tally
        })
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:.1}% ± {:.1}% ({}W {}T {}L)",
            self.equity() * 100.,
            self.error() * 100.,
            self.wins,
            self.ties,
            self.loss
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_count_half() {
        let tally = [Ordering::Greater, Ordering::Equal, Ordering::Less, Ordering::Less]
            .into_iter()
            .collect::<Tally>();
        assert_eq!(tally.total(), 4);
        assert!((tally.equity() - 0.375).abs() < 1e-6);
    }

    #[test]
    fn empty_tally() {
        assert_eq!(Tally::default().equity(), 0.);
        assert_eq!(Tally::default().error(), 0.);
    }

    #[test]
    fn certain_outcomes_have_no_error() {
        let tally = std::iter::repeat(Ordering::Greater).take(10).collect::<Tally>();
        assert_eq!(tally.equity(), 1.);
        assert_eq!(tally.error(), 0.);
    }
}
