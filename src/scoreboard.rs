use serde::{Deserialize, Serialize};

/// One finished game on the ranked list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerScore {
    pub username: String,
    pub score: u32,
}

/// Ranked list of past results, best first. Memory-resident for the
/// lifetime of the process; nothing is persisted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Scoreboard {
    entries: Vec<PlayerScore>,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a result and restores the descending order. Ties keep their
    /// insertion order; the same player may appear any number of times.
    pub fn add_score(&mut self, username: impl Into<String>, score: u32) {
        self.entries.push(PlayerScore {
            username: username.into(),
            score,
        });
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
    }

    pub fn entries(&self) -> &[PlayerScore] {
        &self.entries
    }

    pub fn best(&self) -> Option<&PlayerScore> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
