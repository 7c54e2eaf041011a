use super::rank::Rank;

/// A hand's kicker ranks as a 13-bit mask.
///
/// Kickers only break ties between equal Rankings. Comparing the masks
/// as integers compares the highest differing kicker first.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Kickers(u16);

impl From<Kickers> for u16 {
    fn from(k: Kickers) -> Self {
        k.0
    }
}
impl From<u16> for Kickers {
    fn from(n: u16) -> Self {
        Self(n & Rank::mask())
    }
}

/// Vec<Rank> isomorphism, lowest first
impl From<Kickers> for Vec<Rank> {
    fn from(k: Kickers) -> Self {
        Rank::all()
            .into_iter()
            .filter(|r| k.0 & u16::from(*r) != 0)
            .collect()
    }
}
impl From<Vec<Rank>> for Kickers {
    fn from(ranks: Vec<Rank>) -> Self {
        Self(ranks.into_iter().map(u16::from).fold(0u16, |a, b| a | b))
    }
}

impl std::fmt::Display for Kickers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for rank in Vec::<Rank>::from(*self).into_iter().rev() {
            write!(f, "{}", rank)?;
        }
        Ok(())
    }
}
