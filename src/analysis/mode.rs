use crate::Error;

/// Which notion of "strongest" a ranking uses.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Mode {
    /// rank-only classification of pocket plus board
    #[default]
    Strength,
    /// Monte Carlo win rate against one random opponent
    Equity,
}

impl Mode {
    pub const fn all() -> [Self; 2] {
        [Self::Strength, Self::Equity]
    }
}

impl TryFrom<&str> for Mode {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "strength" | "s" => Ok(Self::Strength),
            "equity" | "e" => Ok(Self::Equity),
            _ => Err(Error::InvalidMode(s.to_string())),
        }
    }
}

impl std::str::FromStr for Mode {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Strength => write!(f, "strength"),
            Self::Equity => write!(f, "equity"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!("Equity".parse::<Mode>(), Ok(Mode::Equity));
        assert_eq!(Mode::try_from(" s "), Ok(Mode::Strength));
        assert_eq!(
            Mode::try_from("ev"),
            Err(Error::InvalidMode("ev".to_string()))
        );
    }

    #[test]
    fn display_round_trips() {
        Mode::all()
            .into_iter()
            .for_each(|mode| assert_eq!(mode.to_string().parse::<Mode>(), Ok(mode)));
    }
}
