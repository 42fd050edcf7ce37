//! Team identification and per-team score storage.
//!
//! ## TeamId
//!
//! Type-safe identifier for the two competing teams.
//!
//! ## TeamScores
//!
//! Signed per-team score counters, indexable by `TeamId`.
//! Scores can go negative: a lost round costs the active team a point.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two competing teams.
///
/// Teams are numbered 1 and 2 for display; `Team::One` always owns the
/// first round of a fresh session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamId {
    One,
    Two,
}

impl TeamId {
    /// Get the opposing team.
    ///
    /// ```
    /// use gallows::core::TeamId;
    ///
    /// assert_eq!(TeamId::One.other(), TeamId::Two);
    /// assert_eq!(TeamId::Two.other(), TeamId::One);
    /// ```
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            TeamId::One => TeamId::Two,
            TeamId::Two => TeamId::One,
        }
    }

    /// Get the 0-based storage index for this team.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            TeamId::One => 0,
            TeamId::Two => 1,
        }
    }

    /// Get the 1-based team number used for display.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            TeamId::One => 1,
            TeamId::Two => 2,
        }
    }

    /// Iterate over both team IDs in order.
    pub fn all() -> impl Iterator<Item = TeamId> {
        [TeamId::One, TeamId::Two].into_iter()
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Team {}", self.number())
    }
}

/// Per-team signed score counters with O(1) access.
///
/// Backed by a fixed two-element array, one entry per team.
///
/// ## Example
///
/// ```
/// use gallows::core::{TeamId, TeamScores};
///
/// let mut scores = TeamScores::new();
/// scores[TeamId::One] += 1;
/// scores[TeamId::Two] -= 1;
///
/// assert_eq!(scores[TeamId::One], 1);
/// assert_eq!(scores[TeamId::Two], -1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamScores {
    data: [i64; 2],
}

impl TeamScores {
    /// Create a new score board with both teams at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a team's score.
    #[must_use]
    pub fn get(&self, team: TeamId) -> i64 {
        self.data[team.index()]
    }

    /// Get both scores as a `[team 1, team 2]` array.
    #[must_use]
    pub fn as_array(&self) -> [i64; 2] {
        self.data
    }

    /// Iterate over (TeamId, score) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (TeamId, i64)> + '_ {
        TeamId::all().map(|t| (t, self.data[t.index()]))
    }
}

impl Index<TeamId> for TeamScores {
    type Output = i64;

    fn index(&self, team: TeamId) -> &Self::Output {
        &self.data[team.index()]
    }
}

impl IndexMut<TeamId> for TeamScores {
    fn index_mut(&mut self, team: TeamId) -> &mut Self::Output {
        &mut self.data[team.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_id_basics() {
        assert_eq!(TeamId::One.index(), 0);
        assert_eq!(TeamId::Two.index(), 1);
        assert_eq!(TeamId::One.number(), 1);
        assert_eq!(TeamId::Two.number(), 2);
        assert_eq!(format!("{}", TeamId::One), "Team 1");
        assert_eq!(format!("{}", TeamId::Two), "Team 2");
    }

    #[test]
    fn test_team_id_other() {
        assert_eq!(TeamId::One.other(), TeamId::Two);
        assert_eq!(TeamId::Two.other(), TeamId::One);
        assert_eq!(TeamId::One.other().other(), TeamId::One);
    }

    #[test]
    fn test_team_id_all() {
        let teams: Vec<_> = TeamId::all().collect();
        assert_eq!(teams, vec![TeamId::One, TeamId::Two]);
    }

    #[test]
    fn test_scores_start_at_zero() {
        let scores = TeamScores::new();
        assert_eq!(scores[TeamId::One], 0);
        assert_eq!(scores[TeamId::Two], 0);
    }

    #[test]
    fn test_scores_mutation() {
        let mut scores = TeamScores::new();

        scores[TeamId::One] += 2;
        scores[TeamId::Two] -= 1;

        assert_eq!(scores.get(TeamId::One), 2);
        assert_eq!(scores.get(TeamId::Two), -1);
        assert_eq!(scores.as_array(), [2, -1]);
    }

    #[test]
    fn test_scores_can_go_negative() {
        let mut scores = TeamScores::new();
        for _ in 0..5 {
            scores[TeamId::One] -= 1;
        }
        assert_eq!(scores[TeamId::One], -5);
    }

    #[test]
    fn test_scores_iter() {
        let mut scores = TeamScores::new();
        scores[TeamId::Two] = 3;

        let pairs: Vec<_> = scores.iter().collect();
        assert_eq!(pairs, vec![(TeamId::One, 0), (TeamId::Two, 3)]);
    }

    #[test]
    fn test_scores_serialization() {
        let mut scores = TeamScores::new();
        scores[TeamId::One] = -2;
        scores[TeamId::Two] = 4;

        let json = serde_json::to_string(&scores).unwrap();
        let deserialized: TeamScores = serde_json::from_str(&json).unwrap();
        assert_eq!(scores, deserialized);
    }
}
