use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RegionClass {
    ForageSafe,
    RetreatOnly,
    Forbidden,
}

impl RegionClass {
    pub fn as_str(self) -> &'static str {
        match self {
            RegionClass::ForageSafe => "FORAGE_SAFE",
            RegionClass::RetreatOnly => "RETREAT_ONLY",
            RegionClass::Forbidden => "FORBIDDEN",
        }
    }
}

impl fmt::Display for RegionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
