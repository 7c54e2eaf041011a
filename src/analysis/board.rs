use crate::Error;
use crate::cards::Rank;

/// The known community ranks: flop, turn, river.
///
/// Always 3..=5 ranks once constructed. Extra ranks past the river are
/// dropped rather than rejected, and no rank may appear more than four
/// times. Order is kept for display but never affects scoring.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize))]
pub struct Board(Vec<Rank>);

impl Board {
    pub fn ranks(&self) -> &[Rank] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// cards still to come before the river
    pub fn missing(&self) -> usize {
        crate::BOARD_MAX - self.len()
    }
    /// copies of one rank already on the board
    pub fn count(&self, rank: Rank) -> usize {
        self.0.iter().filter(|r| **r == rank).count()
    }
}

impl TryFrom<Vec<Rank>> for Board {
    type Error = Error;
    fn try_from(mut ranks: Vec<Rank>) -> Result<Self, Self::Error> {
        ranks.truncate(crate::BOARD_MAX);
        if ranks.len() < crate::BOARD_MIN {
            return Err(Error::TooFewCards { found: ranks.len() });
        }
        match Rank::all()
            .into_iter()
            .find(|rank| ranks.iter().filter(|r| *r == rank).count() > 4)
        {
            Some(rank) => Err(Error::TooManyCopies { rank }),
            None => Ok(Self(ranks)),
        }
    }
}

/// free text like "Q T 9 2 a"
///
/// tokens that are not a single rank symbol are skipped,
/// and only the first five ranks are kept.
impl TryFrom<&str> for Board {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let ranks = s
            .split_whitespace()
            .filter_map(|token| Rank::try_from(token).ok())
            .take(crate::BOARD_MAX)
            .collect::<Vec<Rank>>();
        log::trace!("parsed {:?} into {} ranks", s, ranks.len());
        Self::try_from(ranks)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let symbols = self
            .0
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<String>>();
        write!(f, "{}", symbols.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flop() {
        let board = Board::try_from("Q T 9").unwrap();
        assert_eq!(board.ranks(), &[Rank::Queen, Rank::Ten, Rank::Nine]);
        assert_eq!(board.missing(), 2);
    }

    #[test]
    fn lowercase_and_junk_tokens() {
        let board = Board::try_from("q x t 10 9 ?").unwrap();
        assert_eq!(board.ranks(), &[Rank::Queen, Rank::Ten, Rank::Nine]);
    }

    #[test]
    fn truncates_past_river() {
        let board = Board::try_from("2 3 4 5 6 7 8").unwrap();
        assert_eq!(board.len(), 5);
        assert_eq!(board.to_string(), "2 3 4 5 6");
        assert_eq!(board.missing(), 0);
    }

    #[test]
    fn needs_a_flop() {
        assert_eq!(Board::try_from("A K"), Err(Error::TooFewCards { found: 2 }));
        assert_eq!(Board::try_from("A K zz"), Err(Error::TooFewCards { found: 2 }));
        assert_eq!(Board::try_from(""), Err(Error::TooFewCards { found: 0 }));
    }

    #[test]
    fn rejects_fifth_copy() {
        let ranks = vec![Rank::Ace; 5];
        assert_eq!(Board::try_from(ranks), Err(Error::TooManyCopies { rank: Rank::Ace }));
    }

    #[test]
    fn counts_copies() {
        let board = Board::try_from("7 7 2 7").unwrap();
        assert_eq!(board.count(Rank::Seven), 3);
        assert_eq!(board.count(Rank::Two), 1);
        assert_eq!(board.count(Rank::Ace), 0);
    }
}
