use super::board::Board;
use super::config::Config;
use super::pocket::Pocket;
use super::tally::Tally;
use crate::Error;
use crate::Result;
use crate::cards::Card;
use crate::cards::Deck;
use crate::cards::Hand;
use crate::cards::Rank;
use crate::cards::Strength;
use crate::cards::Suit;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::cmp::Ordering;

/// preference order when two suits are equally loaded
const SUITS: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Club];

/// Monte Carlo equity of one pocket against one random opponent.
///
/// Sampling happens over concrete cards: the deck holds every card whose
/// rank is not already on the board or in the pocket, and each iteration
/// deals the opponent two of them, then completes the board to five.
/// Suits are then reassigned across all nine cards before the showdown,
/// spread as evenly as the ranks allow, so seven-card hands do not
/// collect five of a suit. The full [`Strength`] evaluator stays
/// suit-aware, it just never sees a flush.
#[derive(Debug, Clone)]
pub struct Simulator {
    pocket: Pocket,
    board: Board,
    deck: Deck,
}

impl Simulator {
    /// seeds from the config, or from thread entropy when unseeded
    pub fn estimate(pocket: Pocket, board: &Board, config: &Config) -> Result<Tally> {
        let ref mut rng = match config.seed() {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        };
        Self::try_from((pocket, board))?.simulate(config.iterations(), rng)
    }

    /// cards that must come off the deck each iteration
    pub fn needed(&self) -> usize {
        2 + self.board.missing()
    }
    pub fn available(&self) -> usize {
        self.deck.size()
    }

    pub fn simulate<R: Rng>(&self, iterations: usize, rng: &mut R) -> Result<Tally> {
        if iterations == 0 {
            return Err(Error::NoIterations);
        }
        if self.available() < self.needed() {
            return Err(self.exhausted());
        }
        log::trace!(
            "simulating {} on {} over {} iterations from {} cards",
            self.pocket,
            self.board,
            iterations,
            self.available()
        );
        (0..iterations).try_fold(Tally::default(), |mut tally, _| {
            tally.record(self.showdown(rng)?);
            Ok(tally)
        })
    }

    /// hero against one sampled villain on one sampled runout
    fn showdown<R: Rng>(&self, rng: &mut R) -> Result<Ordering> {
        let mut deck = self.deck;
        let villain = deck.deal(2, rng).ok_or_else(|| self.exhausted())?;
        let runout = deck
            .deal(self.board.missing(), rng)
            .ok_or_else(|| self.exhausted())?;
        let ranks = std::iter::empty()
            .chain(self.board.ranks().iter().copied())
            .chain(runout.map(|c| c.rank()))
            .chain(self.pocket.ranks())
            .chain(villain.map(|c| c.rank()))
            .collect::<Vec<Rank>>();
        let cards = Self::dress(&ranks)?;
        let (public, private) = cards.split_at(crate::BOARD_MAX);
        let public = public.iter().copied().collect::<Hand>();
        let hero = private[..2].iter().copied().collect::<Hand>();
        let villain = private[2..].iter().copied().collect::<Hand>();
        let hero = Strength::from(Hand::add(hero, public));
        let villain = Strength::from(Hand::add(villain, public));
        Ok(hero.cmp(&villain))
    }

    /// give each rank the least used suit that rank has not taken yet
    fn dress(ranks: &[Rank]) -> Result<Vec<Card>> {
        let mut taken = Hand::empty();
        let mut load = [0usize; 4];
        ranks
            .iter()
            .map(|&rank| {
                let suit = SUITS
                    .into_iter()
                    .filter(|&suit| !taken.contains(&Card::from((rank, suit))))
                    .min_by_key(|&suit| load[u8::from(suit) as usize])
                    .ok_or(Error::TooManyCopies { rank })?;
                let card = Card::from((rank, suit));
                load[u8::from(suit) as usize] += 1;
                taken.insert(card);
                Ok(card)
            })
            .collect()
    }

    fn exhausted(&self) -> Error {
        Error::DeckExhausted {
            needed: self.needed(),
            available: self.available(),
        }
    }
}

/// fails if the pocket would claim a fifth copy of a board rank
impl TryFrom<(Pocket, &Board)> for Simulator {
    type Error = Error;
    fn try_from((pocket, board): (Pocket, &Board)) -> Result<Self> {
        let known = pocket.with(board);
        let seen = Self::dress(&known)?.into_iter().collect::<Hand>();
        Ok(Self {
            pocket,
            board: board.clone(),
            deck: Deck::from(seen.ranks().complement()),
        })
    }
}
