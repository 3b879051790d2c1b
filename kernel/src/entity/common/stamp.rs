use std::fmt::Display;
use std::str::FromStr;

/// Which timestamp of a book an update refreshes.
///
/// `InsertedAt` reproduces the catalog's observed behaviour: an update overwrites
/// `insertedAt` and leaves `updatedAt` at its creation value. `UpdatedAt` keeps
/// `insertedAt` immutable and refreshes `updatedAt` instead.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateStamp {
    #[default]
    InsertedAt,
    UpdatedAt,
}

impl Display for UpdateStamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpdateStamp::InsertedAt => write!(f, "inserted_at"),
            UpdateStamp::UpdatedAt => write!(f, "updated_at"),
        }
    }
}

impl FromStr for UpdateStamp {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inserted_at" | "insertedat" => Ok(Self::InsertedAt),
            "updated_at" | "updatedat" => Ok(Self::UpdatedAt),
            other => Err(format!("unknown update stamp `{other}`")),
        }
    }
}
