use crate::analysis::Board;
use crate::analysis::Category;
use crate::analysis::Entry;
use crate::analysis::Equity;
use crate::analysis::Pocket;
use crate::analysis::Score;
use crate::analysis::Standings;

/// Categories worth a heading when a strength ranking is grouped.
const BUCKETS: [Category; 4] = [
    Category::TwoPair,
    Category::Trips,
    Category::Straight,
    Category::FullHouse,
];

/// One printable row of a leaderboard.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "client", derive(serde::Serialize))]
pub struct Line {
    position: usize,
    pocket: Pocket,
    label: String,
}

impl Line {
    pub fn position(&self) -> usize {
        self.position
    }
    pub fn pocket(&self) -> Pocket {
        self.pocket
    }
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// "87.4% equity"
fn percent(equity: Equity) -> String {
    format!("{:.1}% equity", equity * 100.)
}

impl From<(usize, &Entry<Score>)> for Line {
    fn from((position, entry): (usize, &Entry<Score>)) -> Self {
        Self {
            position,
            pocket: entry.pocket(),
            label: entry.metric().to_string(),
        }
    }
}
impl From<(usize, &Entry<Equity>)> for Line {
    fn from((position, entry): (usize, &Entry<Equity>)) -> Self {
        Self {
            position,
            pocket: entry.pocket(),
            label: percent(entry.metric()),
        }
    }
}

/// " 1. KJ  Straight to K"
impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:>2}. {}  {}", self.position, self.pocket, self.label)
    }
}

/// Pockets of one category, strongest first.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "client", derive(serde::Serialize))]
pub struct Group {
    category: Category,
    pockets: Vec<Pocket>,
}

impl Group {
    pub fn category(&self) -> Category {
        self.category
    }
    pub fn pockets(&self) -> &[Pocket] {
        &self.pockets
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let pockets = self
            .pockets
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<String>>();
        write!(f, "{:<10} {}", self.category, pockets.join(" "))
    }
}

/// Human-facing views of a finished ranking.
///
/// The leaderboard always hands over every pocket; a report decides
/// how much of it to show.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "client", derive(serde::Serialize))]
pub struct Report {
    board: Board,
    standings: Standings,
}

impl Report {
    pub fn new(board: Board, standings: Standings) -> Self {
        Self { board, standings }
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn standings(&self) -> &Standings {
        &self.standings
    }

    /// the first `n` entries, numbered from 1
    pub fn top(&self, n: usize) -> Vec<Line> {
        match &self.standings {
            Standings::Strength(entries) => Self::lines(entries, n),
            Standings::Equity(entries) => Self::lines(entries, n),
        }
    }

    /// Strength rankings bucketed into two pair, trips, straight and
    /// full house. Equity rankings have no categories to group by.
    pub fn grouped(&self) -> Option<Vec<Group>> {
        match &self.standings {
            Standings::Equity(_) => None,
            Standings::Strength(entries) => Some(
                BUCKETS
                    .into_iter()
                    .rev()
                    .map(|category| Group {
                        category,
                        pockets: entries
                            .iter()
                            .filter(|e| e.metric().category() == category)
                            .map(Entry::pocket)
                            .collect(),
                    })
                    .filter(|group| !group.pockets.is_empty())
                    .collect(),
            ),
        }
    }

    fn lines<'a, M>(entries: &'a [Entry<M>], n: usize) -> Vec<Line>
    where
        Line: From<(usize, &'a Entry<M>)>,
    {
        entries
            .iter()
            .take(n)
            .enumerate()
            .map(|(i, entry)| Line::from((i + 1, entry)))
            .collect()
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{} on {}", self.standings.mode(), self.board)?;
        for line in self.top(crate::LEADERBOARD_SIZE) {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
