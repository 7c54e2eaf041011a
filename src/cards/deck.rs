use super::card::Card;
use super::hand::Hand;
use rand::Rng;

/// The cards still available to be dealt.
///
/// Wraps a [`Hand`] of remaining cards. Draws are uniform over whatever
/// is left and take the random source from the caller, so a seeded
/// generator replays the same deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(Hand);

impl Deck {
    pub fn new() -> Self {
        Self(Hand::full())
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    /// remove a uniformly random card, or None once the deck is empty
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Option<Card> {
        match self.0.size() {
            0 => None,
            n => {
                let mut bits = u64::from(self.0);
                for _ in 0..rng.random_range(0..n) {
                    bits &= bits - 1;
                }
                let card = Card::from(bits.trailing_zeros() as u8);
                self.0.remove(card);
                Some(card)
            }
        }
    }
    /// remove n random cards as a Hand, or None if fewer than n remain
    pub fn deal<R: Rng>(&mut self, n: usize, rng: &mut R) -> Option<Hand> {
        if self.size() < n {
            return None;
        }
        (0..n)
            .map(|_| self.draw(rng))
            .collect::<Option<Vec<Card>>>()
            .map(Hand::from_iter)
    }
}

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
impl From<Hand> for Deck {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn draws_exhaust_without_repeats() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let mut deck = Deck::new();
        let mut seen = Hand::empty();
        while let Some(card) = deck.draw(rng) {
            assert!(!seen.contains(&card));
            seen.insert(card);
        }
        assert_eq!(seen, Hand::full());
        assert_eq!(deck.size(), 0);
    }

    #[test]
    fn deal_respects_size() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let mut deck = Deck::from(Hand::try_from("As Kd 7c").unwrap());
        assert!(deck.deal(4, rng).is_none());
        assert_eq!(deck.deal(3, rng).map(|h| h.size()), Some(3));
        assert_eq!(deck.size(), 0);
    }

    #[test]
    fn seeded_draws_replay() {
        let deal = |seed| Deck::new().deal(5, &mut SmallRng::seed_from_u64(seed));
        assert_eq!(deal(42), deal(42));
    }

    #[test]
    fn every_card_is_reachable() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let deck = Deck::from(Hand::try_from("2c 2d 2h").unwrap());
        let seen = (0..256)
            .filter_map(|_| {
                let mut deck = deck;
                deck.draw(rng)
            })
            .collect::<Hand>();
        assert_eq!(seen.size(), 3);
    }
}
