use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;
use crate::Error;

/// An unordered set of Cards packed into the 52 low bits of a u64.
///
/// Bit `rank * 4 + suit` is set when the card is present, so every rank
/// owns one nibble. Counting the bits in a nibble counts copies of that
/// rank, and masking with a [`Suit`] keeps one column of the deck.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u64);

impl Hand {
    pub const fn empty() -> Self {
        Self(0)
    }
    pub const fn full() -> Self {
        Self(Self::mask())
    }
    pub const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }

    /// disjoint union
    pub fn add(lhs: Self, rhs: Self) -> Self {
        debug_assert!(lhs.0 & rhs.0 == 0, "overlapping hands {} {}", lhs, rhs);
        Self(lhs.0 | rhs.0)
    }
    pub fn complement(&self) -> Self {
        Self(self.0 ^ Self::mask())
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }
    pub fn insert(&mut self, card: Card) {
        self.0 |= u64::from(card);
    }
    pub fn remove(&mut self, card: Card) {
        self.0 &= !u64::from(card);
    }
    /// every card in the deck that shares a rank with this one
    pub fn ranks(&self) -> Hand {
        Rank::all()
            .into_iter()
            .map(u64::from)
            .filter(|nibble| self.0 & nibble != 0)
            .fold(Hand::empty(), |hand, nibble| Hand(hand.0 | nibble))
    }
    /// cards of one suit
    pub fn of(&self, suit: &Suit) -> Hand {
        Self(self.0 & u64::from(*suit))
    }
    /// copies of one rank
    pub fn copies(&self, rank: Rank) -> usize {
        (self.0 & u64::from(rank)).count_ones() as usize
    }
}

/// we can empty a hand from low to high
/// by removing the lowest card until the hand is empty
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        match self.0 {
            0 => None,
            bits => {
                let card = Card::from(bits.trailing_zeros() as u8);
                self.remove(card);
                Some(card)
            }
        }
    }
}

/// u64 isomorphism
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

impl From<Card> for Hand {
    fn from(card: Card) -> Self {
        Self(u64::from(card))
    }
}

/// Vec<Card> isomorphism, up to ordering
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.into_iter().collect()
    }
}
impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(cards: I) -> Self {
        cards
            .into_iter()
            .fold(Hand::empty(), |mut hand, card| {
                hand.insert(card);
                hand
            })
    }
}

/// one-way conversion to a 13-bit rank mask, one bit per rank present
impl From<Hand> for u16 {
    fn from(h: Hand) -> Self {
        let mut x = u64::from(h);
        x |= x >> 1;
        x |= x >> 2;
        x &= 0x1111111111111;
        (0..Rank::COUNT)
            .map(|i| ((x >> (i * 4)) & 1) << i)
            .fold(0u64, |a, b| a | b) as u16
    }
}

/// whitespace separated cards, "As Kd 7c"
impl TryFrom<&str> for Hand {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.split_whitespace()
            .map(Card::try_from)
            .collect::<Result<Hand, Error>>()
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in *self {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_iteration() {
        let mut iter = Hand::try_from("Jc Ts 2c Js").unwrap().into_iter();
        assert_eq!(iter.next(), Card::try_from("2c").ok());
        assert_eq!(iter.next(), Card::try_from("Ts").ok());
        assert_eq!(iter.next(), Card::try_from("Jc").ok());
        assert_eq!(iter.next(), Card::try_from("Js").ok());
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn ranks_in_suit() {
        let hand = Hand::try_from("2c 3d 4h 5s 6c 7d 8h 9s Tc Jd Qh Ks Ac").unwrap();
        assert_eq!(u16::from(hand.of(&Suit::Club)), 0b_1000100010001);
        assert_eq!(u16::from(hand.of(&Suit::Diamond)), 0b_0001000100010);
        assert_eq!(u16::from(hand.of(&Suit::Heart)), 0b_0010001000100);
        assert_eq!(u16::from(hand.of(&Suit::Spade)), 0b_0100010001000);
    }

    #[test]
    fn rank_counts() {
        let hand = Hand::try_from("Qs Qh Qd 9c 2c").unwrap();
        assert_eq!(hand.copies(Rank::Queen), 3);
        assert_eq!(hand.copies(Rank::Nine), 1);
        assert_eq!(hand.copies(Rank::Ace), 0);
    }

    #[test]
    fn whole_ranks() {
        let hand = Hand::try_from("Qs 9c").unwrap().ranks();
        assert_eq!(hand.size(), 8);
        assert_eq!(hand.copies(Rank::Queen), 4);
        assert_eq!(hand.copies(Rank::Nine), 4);
    }

    #[test]
    fn complement_of_empty_is_deck() {
        assert_eq!(Hand::empty().complement(), Hand::full());
        assert_eq!(Hand::full().size(), 52);
    }
}
