use super::hand::Hand;
use super::kicks::Kickers;
use super::rank::Rank;
use super::ranking::Ranking;
use super::suit::Suit;

const WHEEL: u16 = 0b_1000000001111;

/// A lazy, suit-aware evaluator for 5–7 card Hands.
///
/// Searches from the strongest category down and stops at the first
/// one the Hand makes, using bitwise rank masks and per-rank nibble counts.
/// This is the only place in the crate where suits change an outcome.
pub struct Evaluator(Hand);
impl From<Hand> for Evaluator {
    fn from(h: Hand) -> Self {
        Self(h)
    }
}

impl Evaluator {
    pub fn find_ranking(&self) -> Ranking {
        None.or_else(|| self.find_straight_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_3_oak_2_oak())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_oak_2_oak())
            .or_else(|| self.find_2_oak())
            .unwrap_or_else(|| self.find_1_oak())
    }
    pub fn find_kickers(&self, ranking: Ranking) -> Kickers {
        let pool = match ranking {
            Ranking::Flush(_) => self.find_suit_of_flush().map(|s| self.0.of(&s)).unwrap_or(self.0),
            _ => self.0,
        };
        let mut ranks = u16::from(pool) & !ranking.mask();
        while ranks.count_ones() as usize > ranking.n_kickers() {
            ranks &= ranks - 1;
        }
        Kickers::from(ranks)
    }

    fn find_1_oak(&self) -> Ranking {
        match u16::from(self.0) {
            0 => Ranking::HighCard(Rank::MIN),
            ranks => Ranking::HighCard(Rank::from(ranks)),
        }
    }
    fn find_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2, None).map(Ranking::OnePair)
    }
    fn find_3_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3, None).map(Ranking::ThreeOAK)
    }
    fn find_4_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(4, None).map(Ranking::FourOAK)
    }
    fn find_2_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2, None).and_then(|hi| {
            self.find_rank_of_n_oak(2, Some(hi))
                .map(|lo| Ranking::TwoPair(hi, lo))
        })
    }
    fn find_3_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3, None).and_then(|triple| {
            self.find_rank_of_n_oak(2, Some(triple))
                .map(|paired| Ranking::FullHouse(triple, paired))
        })
    }
    fn find_straight(&self) -> Option<Ranking> {
        Self::find_rank_of_straight(u16::from(self.0)).map(Ranking::Straight)
    }
    fn find_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush()
            .map(|suit| u16::from(self.0.of(&suit)))
            .map(Rank::from)
            .map(Ranking::Flush)
    }
    fn find_straight_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush()
            .map(|suit| u16::from(self.0.of(&suit)))
            .and_then(Self::find_rank_of_straight)
            .map(Ranking::StraightFlush)
    }

    fn find_rank_of_straight(ranks: u16) -> Option<Rank> {
        let mut bits = ranks;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        if bits & Rank::mask() > 0 {
            Some(Rank::from(bits))
        } else if WHEEL == WHEEL & ranks {
            Some(Rank::Five)
        } else {
            None
        }
    }
    fn find_suit_of_flush(&self) -> Option<Suit> {
        Suit::all()
            .into_iter()
            .find(|suit| self.0.of(suit).size() >= 5)
    }
    fn find_rank_of_n_oak(&self, n: usize, skip: Option<Rank>) -> Option<Rank> {
        Rank::all()
            .into_iter()
            .rev()
            .filter(|rank| Some(*rank) != skip)
            .find(|rank| self.0.copies(*rank) >= n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate(cards: &str) -> (Ranking, Kickers) {
        let eval = Evaluator::from(Hand::try_from(cards).unwrap());
        let ranking = eval.find_ranking();
        (ranking, eval.find_kickers(ranking))
    }

    #[rustfmt::skip]
    #[test]
    fn high_card() {
        let (ranking, kickers) = evaluate("As Kh Qd Jc 9s");
        assert_eq!(ranking, Ranking::HighCard(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King, Rank::Queen, Rank::Jack, Rank::Nine]));
    }

    #[test]
    fn one_pair() {
        let (ranking, kickers) = evaluate("As Ah Kd Qc Js");
        assert_eq!(ranking, Ranking::OnePair(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King, Rank::Queen, Rank::Jack]));
    }

    #[test]
    fn two_pair() {
        let (ranking, kickers) = evaluate("As Ah Kd Kc Qs");
        assert_eq!(ranking, Ranking::TwoPair(Rank::Ace, Rank::King));
        assert_eq!(kickers, Kickers::from(vec![Rank::Queen]));
    }

    #[test]
    fn three_pair() {
        let (ranking, kickers) = evaluate("As Ah Kd Kc Qs Qh Jd");
        assert_eq!(ranking, Ranking::TwoPair(Rank::Ace, Rank::King));
        assert_eq!(kickers, Kickers::from(vec![Rank::Queen]));
    }

    #[test]
    fn three_oak() {
        let (ranking, kickers) = evaluate("As Ah Ad Kc Qs");
        assert_eq!(ranking, Ranking::ThreeOAK(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King, Rank::Queen]));
    }

    #[test]
    fn straight() {
        let (ranking, kickers) = evaluate("Ts Jh Qd Kc As");
        assert_eq!(ranking, Ranking::Straight(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![]));
    }

    #[test]
    fn wheel_straight() {
        let (ranking, _) = evaluate("As 2h 3d 4c 5s");
        assert_eq!(ranking, Ranking::Straight(Rank::Five));
    }

    #[test]
    fn six_high_beats_wheel() {
        let (ranking, _) = evaluate("As 2s 3h 4d 5c 6s");
        assert_eq!(ranking, Ranking::Straight(Rank::Six));
    }

    #[test]
    fn flush() {
        let (ranking, kickers) = evaluate("As Ks Qs Js 9s 9h");
        assert_eq!(ranking, Ranking::Flush(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King, Rank::Queen, Rank::Jack, Rank::Nine]));
    }

    #[test]
    fn flush_over_straight() {
        let (ranking, _) = evaluate("4h 6h 7h 8h 9h Ts");
        assert_eq!(ranking, Ranking::Flush(Rank::Nine));
    }

    #[test]
    fn full_house() {
        let (ranking, kickers) = evaluate("2s 2h 2d 3c 3s");
        assert_eq!(ranking, Ranking::FullHouse(Rank::Two, Rank::Three));
        assert_eq!(kickers, Kickers::from(vec![]));
    }

    #[test]
    fn two_three_oak() {
        let (ranking, _) = evaluate("As Ah Ad Kc Ks Kh Qd");
        assert_eq!(ranking, Ranking::FullHouse(Rank::Ace, Rank::King));
    }

    #[test]
    fn full_house_over_flush() {
        let (ranking, _) = evaluate("Kh Ah Ad As Ks Qs Js");
        assert_eq!(ranking, Ranking::FullHouse(Rank::Ace, Rank::King));
    }

    #[test]
    fn four_oak() {
        let (ranking, kickers) = evaluate("As Ah Ad Ac Ks Kh Qd");
        assert_eq!(ranking, Ranking::FourOAK(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King]));
    }

    #[test]
    fn straight_flush() {
        let (ranking, _) = evaluate("Ts Js Qs Ks As Ah Ad");
        assert_eq!(ranking, Ranking::StraightFlush(Rank::Ace));
    }

    #[test]
    fn wheel_straight_flush() {
        let (ranking, _) = evaluate("As 2s 3s 4s 5s");
        assert_eq!(ranking, Ranking::StraightFlush(Rank::Five));
    }
}
