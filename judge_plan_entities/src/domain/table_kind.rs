use std::fmt::{Display, Formatter};

use serde::{Serialize, Deserialize};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TableKind {
    #[serde(rename = "Geradeturnen ohne Musik")]
    StraightLine,
    #[serde(rename = "Geradeturnen auf Musik")]
    StraightLineMusic,
    #[serde(rename = "Spiraleturnen")]
    Spiral,
    #[serde(rename = "Sprung")]
    Vault,
}

impl TableKind {
    pub fn all() -> [TableKind; 4] {
        [TableKind::StraightLine, TableKind::StraightLineMusic, TableKind::Spiral, TableKind::Vault]
    }

    /// Music tables carry the artistry judges and need the larger print layout.
    pub fn is_music(&self) -> bool {
        matches!(self, TableKind::StraightLineMusic)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TableKind::StraightLine => "Geradeturnen ohne Musik",
            TableKind::StraightLineMusic => "Geradeturnen auf Musik",
            TableKind::Spiral => "Spiraleturnen",
            TableKind::Vault => "Sprung",
        }
    }
}

impl Display for TableKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
