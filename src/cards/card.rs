use super::rank::Rank;
use super::suit::Suit;
use crate::Error;

/// A playing card encoded as a single byte, `rank * 4 + suit`.
///
/// Sorting by the byte sorts by rank first, then suit. The `u64`
/// form is the single bit this card occupies inside a [`Hand`].
///
/// [`Hand`]: super::hand::Hand
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / 4)
    }
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % 4)
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * 4 + u8::from(s))
    }
}

/// u8 isomorphism
/// Ts
/// 35
/// 0b00100011
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        assert!(n < 52, "invalid card u8: {}", n);
        Self(n)
    }
}

/// u64 representation
/// one bit turned on
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

/// two characters, rank then suit
impl TryFrom<&str> for Card {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None) => Ok(Card::from((Rank::try_from(r)?, Suit::try_from(s)?))),
            _ => Err(Error::InvalidCard(s.to_string())),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_rank_suit() {
        (0..52u8).map(Card::from).for_each(|card| {
            assert_eq!(card, Card::from((card.rank(), card.suit())));
        });
    }

    #[test]
    fn ten_of_spades() {
        let card = Card::try_from("Ts").unwrap();
        assert_eq!(card.rank(), Rank::Ten);
        assert_eq!(card.suit(), Suit::Spade);
        assert_eq!(u8::from(card), 35);
        assert_eq!(card.to_string(), "Ts");
    }

    #[test]
    fn malformed_cards() {
        assert!(Card::try_from("T").is_err());
        assert!(Card::try_from("Tsx").is_err());
        assert!(Card::try_from("Tx").is_err());
        assert!(Card::try_from("1s").is_err());
    }
}
