use super::board::Board;
use super::pocket::Pocket;
use crate::cards::Rank;

/// Lazily walks every starting hand that the board leaves room for.
///
/// Unpaired hands come first, ascending by low rank then high rank, and
/// are kept while the board shows fewer than two of each of their ranks.
/// Pocket pairs follow, ascending, and are kept only when the board shows
/// none of their rank.
pub struct PocketIterator {
    used: [usize; Rank::COUNT],
    lo: usize,
    hi: usize,
}

impl PocketIterator {
    /// unpaired combinations plus pairs, before any filtering
    pub const fn combinations() -> usize {
        Rank::COUNT * (Rank::COUNT - 1) / 2 + Rank::COUNT
    }
    fn allows(&self, lo: usize, hi: usize) -> bool {
        if lo == hi {
            self.used[lo] == 0
        } else {
            self.used[lo] < 2 && self.used[hi] < 2
        }
    }
    /// step the cursor: unpaired (lo < hi) first, then pairs (lo == hi)
    fn advance(&mut self) {
        if self.lo == self.hi {
            self.lo += 1;
            self.hi += 1;
        } else if self.hi + 1 < Rank::COUNT {
            self.hi += 1;
        } else if self.lo + 2 < Rank::COUNT {
            self.lo += 1;
            self.hi = self.lo + 1;
        } else {
            self.lo = 0;
            self.hi = 0;
        }
    }
    fn exhausted(&self) -> bool {
        self.lo >= Rank::COUNT
    }
}

impl From<&Board> for PocketIterator {
    fn from(board: &Board) -> Self {
        let mut used = [0; Rank::COUNT];
        board.ranks().iter().for_each(|r| used[r.index()] += 1);
        Self { used, lo: 0, hi: 1 }
    }
}

impl Iterator for PocketIterator {
    type Item = Pocket;
    fn next(&mut self) -> Option<Self::Item> {
        while !self.exhausted() {
            let (lo, hi) = (self.lo, self.hi);
            self.advance();
            if self.allows(lo, hi) {
                return Some(Pocket::from((Rank::from(lo as u8), Rank::from(hi as u8))));
            }
        }
        None
    }
}
