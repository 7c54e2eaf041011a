use super::category::Category;
use crate::cards::Rank;

/// Suit-blind strength of a rank multiset.
///
/// Each variant carries exactly the tiebreak ranks its category needs.
/// Variants are declared in [`Category`] order, so the derived Ord
/// compares category first, then primary, then secondary rank.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Score {
    HighCard(Rank),
    Pair(Rank),
    TwoPair(Rank, Rank),
    Trips(Rank),
    Straight(Rank),
    Quads(Rank),
    FullHouse(Rank, Rank),
}

impl Score {
    pub fn category(&self) -> Category {
        match self {
            Self::HighCard(_) => Category::HighCard,
            Self::Pair(_) => Category::Pair,
            Self::TwoPair(..) => Category::TwoPair,
            Self::Trips(_) => Category::Trips,
            Self::Straight(_) => Category::Straight,
            Self::Quads(_) => Category::Quads,
            Self::FullHouse(..) => Category::FullHouse,
        }
    }
    pub fn primary(&self) -> Rank {
        match *self {
            Self::HighCard(r)
            | Self::Pair(r)
            | Self::TwoPair(r, _)
            | Self::Trips(r)
            | Self::Straight(r)
            | Self::Quads(r)
            | Self::FullHouse(r, _) => r,
        }
    }
    pub fn secondary(&self) -> Option<Rank> {
        match *self {
            Self::TwoPair(_, r) | Self::FullHouse(_, r) => Some(r),
            _ => None,
        }
    }
}

/// Classifies ranks in priority order: straight, quads, full house,
/// trips, two pair, pair, high card.
///
/// Straights are found by sliding a five-rank window over the fixed
/// deuce-to-ace order. The ace never plays low, so A-2-3-4-5 is not a
/// straight here.
struct Classifier([u8; Rank::COUNT]);

impl From<&[Rank]> for Classifier {
    fn from(ranks: &[Rank]) -> Self {
        let mut counts = [0u8; Rank::COUNT];
        ranks.iter().for_each(|r| counts[r.index()] += 1);
        Self(counts)
    }
}

impl Classifier {
    fn classify(&self) -> Score {
        None.or_else(|| self.straight())
            .or_else(|| self.quads())
            .or_else(|| self.full_house())
            .or_else(|| self.trips())
            .or_else(|| self.two_pair())
            .or_else(|| self.pair())
            .unwrap_or_else(|| self.high_card())
    }

    /// highest window whose five ranks are all present
    fn straight(&self) -> Option<Score> {
        self.0
            .windows(5)
            .rposition(|window| window.iter().all(|&n| n > 0))
            .map(|lo| Rank::from((lo + 4) as u8))
            .map(Score::Straight)
    }
    fn quads(&self) -> Option<Score> {
        self.highest(4, None).map(Score::Quads)
    }
    fn full_house(&self) -> Option<Score> {
        self.highest(3, None).and_then(|three| {
            self.highest(2, Some(three))
                .map(|pair| Score::FullHouse(three, pair))
        })
    }
    fn trips(&self) -> Option<Score> {
        self.highest(3, None).map(Score::Trips)
    }
    fn two_pair(&self) -> Option<Score> {
        self.highest(2, None).and_then(|hi| {
            self.highest(2, Some(hi))
                .map(|lo| Score::TwoPair(hi, lo))
        })
    }
    fn pair(&self) -> Option<Score> {
        self.highest(2, None).map(Score::Pair)
    }
    fn high_card(&self) -> Score {
        Score::HighCard(self.highest_present().unwrap_or(Rank::MIN))
    }

    /// highest rank held exactly n times, other than skip
    fn highest(&self, n: u8, skip: Option<Rank>) -> Option<Rank> {
        Rank::all()
            .into_iter()
            .rev()
            .filter(|rank| Some(*rank) != skip)
            .find(|rank| self.0[rank.index()] == n)
    }
    fn highest_present(&self) -> Option<Rank> {
        Rank::all()
            .into_iter()
            .rev()
            .find(|rank| self.0[rank.index()] > 0)
    }
}

impl From<&[Rank]> for Score {
    fn from(ranks: &[Rank]) -> Self {
        Classifier::from(ranks).classify()
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::HighCard(r) => write!(f, "High card {}", r),
            Self::Pair(r) => write!(f, "Pair of {}", r),
            Self::TwoPair(hi, lo) => write!(f, "Two pair {} and {}", hi, lo),
            Self::Trips(r) => write!(f, "Trips of {}", r),
            Self::Straight(r) => write!(f, "Straight to {}", r),
            Self::Quads(r) => write!(f, "Quads of {}", r),
            Self::FullHouse(three, pair) => write!(f, "Full house {} over {}", three, pair),
        }
    }
}
