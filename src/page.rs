use std::fmt;

/// Numeric id of a board game page, taken from the third path segment of
/// `/boardgame/{id}/{slug}` style URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameId(u64);

impl GameId {
    /// Reads the candidate segment at path index 2 and keeps it only if it
    /// parses as an unsigned integer. Non-game pages fail here, which skips
    /// the whole flow without a diagnostic.
    pub fn from_path(path: &str) -> Option<Self> {
        let candidate = path.split('/').nth(2)?;
        candidate.parse().ok().map(GameId)
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
