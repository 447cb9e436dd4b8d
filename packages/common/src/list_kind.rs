use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the logical lists folded into a user's media rows.
///
/// Each kind selects one boolean flag and its paired timestamp on the same row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Watchlist,
    Favorites,
    Watched,
}

impl ListKind {
    /// All list kinds, in the order their flags appear on the row.
    pub const ALL: &'static [ListKind] = &[Self::Watchlist, Self::Favorites, Self::Watched];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Watchlist => "watchlist",
            Self::Favorites => "favorites",
            Self::Watched => "watched",
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseListKindError {
    pub invalid: String,
}

impl fmt::Display for ParseListKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid list '{}', expected one of: watchlist, favorites, watched",
            self.invalid
        )
    }
}

impl std::error::Error for ParseListKindError {}

impl FromStr for ListKind {
    type Err = ParseListKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "watchlist" => Ok(Self::Watchlist),
            "favorites" => Ok(Self::Favorites),
            "watched" => Ok(Self::Watched),
            _ => Err(ParseListKindError {
                invalid: s.to_string(),
            }),
        }
    }
}
