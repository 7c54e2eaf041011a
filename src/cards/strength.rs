use super::evaluator::Evaluator;
use super::hand::Hand;
use super::kicks::Kickers;
use super::ranking::Ranking;

/// A hand's full showdown strength.
///
/// Always built from a Hand, an unordered set of Cards. Ranking
/// decides first and Kickers break ties, so two Strengths compare
/// equal exactly when the hands split the pot.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Strength {
    value: Ranking,
    kicks: Kickers,
}

impl Strength {
    pub fn ranking(&self) -> Ranking {
        self.value
    }
    pub fn kickers(&self) -> Kickers {
        self.kicks
    }
}

impl From<Hand> for Strength {
    fn from(hand: Hand) -> Self {
        Self::from(Evaluator::from(hand))
    }
}

impl From<Evaluator> for Strength {
    fn from(evaluator: Evaluator) -> Self {
        let value = evaluator.find_ranking();
        let kicks = evaluator.find_kickers(value);
        Self { value, kicks }
    }
}

impl From<(Ranking, Kickers)> for Strength {
    fn from((value, kicks): (Ranking, Kickers)) -> Self {
        Self { value, kicks }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<18}{}", self.value, self.kicks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strength(cards: &str) -> Strength {
        Strength::from(Hand::try_from(cards).unwrap())
    }

    #[test]
    fn kicker_breaks_tie() {
        assert!(strength("As Ah Kd 7c 5s 3h 2d") > strength("Ac Ad Qd 7h 5d 3c 2s"));
    }

    #[test]
    fn board_plays_for_both() {
        assert_eq!(
            strength("2c 3d Ts Js Qs Ks 9h"),
            strength("4c 5d Ts Js Qs Ks 9h"),
        );
    }

    #[test]
    fn category_beats_kickers() {
        assert!(strength("2c 2d 3h 4s 6c") > strength("As Kd Qh Js 9c"));
    }
}
