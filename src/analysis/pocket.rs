use super::board::Board;
use super::pockets::PocketIterator;
use crate::cards::Rank;

/// A suit-blind two-card starting hand.
///
/// Stored high rank first, so `Pocket::from((Nine, Ace))` and
/// `Pocket::from((Ace, Nine))` are the same value. Ordering compares
/// the high rank, then the low rank.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Pocket {
    hi: Rank,
    lo: Rank,
}

impl Pocket {
    /// every pocket still legal on this board
    pub fn enumerate(board: &Board) -> Vec<Self> {
        PocketIterator::from(board).collect()
    }
    pub fn hi(&self) -> Rank {
        self.hi
    }
    pub fn lo(&self) -> Rank {
        self.lo
    }
    pub fn ranks(&self) -> [Rank; 2] {
        [self.hi, self.lo]
    }
    pub fn is_pair(&self) -> bool {
        self.hi == self.lo
    }
    /// pocket ranks followed by board ranks
    pub fn with(&self, board: &Board) -> Vec<Rank> {
        self.ranks()
            .into_iter()
            .chain(board.ranks().iter().copied())
            .collect()
    }
}

impl From<(Rank, Rank)> for Pocket {
    fn from((a, b): (Rank, Rank)) -> Self {
        Self {
            hi: a.max(b),
            lo: a.min(b),
        }
    }
}

impl TryFrom<&str> for Pocket {
    type Error = crate::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(a), Some(b), None) => Ok(Self::from((Rank::try_from(a)?, Rank::try_from(b)?))),
            _ => Err(crate::Error::InvalidRank(s.to_string())),
        }
    }
}

/// "AK", "77"
impl std::fmt::Display for Pocket {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.hi, self.lo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unordered() {
        assert_eq!(
            Pocket::from((Rank::Nine, Rank::Ace)),
            Pocket::from((Rank::Ace, Rank::Nine))
        );
        assert_eq!(Pocket::from((Rank::Nine, Rank::Ace)).to_string(), "A9");
    }

    #[test]
    fn parse() {
        assert_eq!(Pocket::try_from("ka").unwrap(), Pocket::from((Rank::King, Rank::Ace)));
        assert!(Pocket::try_from("77").unwrap().is_pair());
        assert!(Pocket::try_from("7").is_err());
        assert!(Pocket::try_from("7x").is_err());
    }

    #[test]
    fn order_by_high_then_low() {
        let aces = Pocket::try_from("AA").unwrap();
        let big = Pocket::try_from("AK").unwrap();
        let kings = Pocket::try_from("KK").unwrap();
        assert!(aces > big);
        assert!(big > kings);
    }

    #[test]
    fn combined_with_board() {
        let board = Board::try_from("Q T 9").unwrap();
        let pocket = Pocket::try_from("QT").unwrap();
        assert_eq!(
            pocket.with(&board),
            vec![Rank::Queen, Rank::Ten, Rank::Queen, Rank::Ten, Rank::Nine]
        );
    }
}
