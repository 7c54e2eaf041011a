/// Rank-only hand tiers, numbered so that a larger number is a stronger hand.
///
/// Flushes do not exist in a suit-blind model. Full house outranks quads.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    HighCard = 2,
    Pair = 3,
    TwoPair = 4,
    Trips = 5,
    Straight = 6,
    Quads = 7,
    FullHouse = 8,
}

impl Category {
    pub const fn all() -> [Self; 7] {
        [
            Self::HighCard,
            Self::Pair,
            Self::TwoPair,
            Self::Trips,
            Self::Straight,
            Self::Quads,
            Self::FullHouse,
        ]
    }
}

impl From<Category> for u8 {
    fn from(c: Category) -> u8 {
        c as u8
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::HighCard => write!(f, "High card"),
            Self::Pair => write!(f, "Pair"),
            Self::TwoPair => write!(f, "Two pair"),
            Self::Trips => write!(f, "Trips"),
            Self::Straight => write!(f, "Straight"),
            Self::Quads => write!(f, "Quads"),
            Self::FullHouse => write!(f, "Full house"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_order_matches_enum_order() {
        let all = Category::all();
        assert!(all.windows(2).all(|w| w[0] < w[1]));
        assert!(all.windows(2).all(|w| u8::from(w[0]) + 1 == u8::from(w[1])));
        assert_eq!(u8::from(Category::HighCard), 2);
        assert_eq!(u8::from(Category::FullHouse), 8);
    }
}
