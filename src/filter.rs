//! Filter modes and the predicate that derives the visible list.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::catalog::Extension;
use crate::error::ManagerError;

/// Which extensions the card list shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Active,
    Inactive,
}

impl Filter {
    /// Every filter, in the order the buttons are laid out.
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Inactive];

    /// Button caption.
    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Inactive => "Inactive",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Inactive => "inactive",
        }
    }

    /// Whether a single extension passes this filter.
    pub fn matches(self, extension: &Extension) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => extension.is_active,
            Filter::Inactive => !extension.is_active,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Filter {
    type Err = ManagerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Filter::All),
            "active" => Ok(Filter::Active),
            "inactive" => Ok(Filter::Inactive),
            _ => Err(ManagerError::InvalidFilter(s.to_string())),
        }
    }
}

/// Apply `filter` to `extensions`, keeping the original order.
pub fn apply(extensions: &[Extension], filter: Filter) -> Vec<&Extension> {
    extensions.iter().filter(|e| filter.matches(e)).collect()
}
