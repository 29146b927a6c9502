//! Category types for product organization.

use std::fmt;
use std::str::FromStr;

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// A product category. The set is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Exhaust,
    Brakes,
    Suspension,
    Engine,
    Bodywork,
    Wheels,
}

impl Category {
    /// Every category in display order.
    pub const ALL: [Category; 6] = [
        Category::Exhaust,
        Category::Brakes,
        Category::Suspension,
        Category::Engine,
        Category::Bodywork,
        Category::Wheels,
    ];

    /// The category name used in product records and filters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Exhaust => "Exhaust",
            Category::Brakes => "Brakes",
            Category::Suspension => "Suspension",
            Category::Engine => "Engine",
            Category::Bodywork => "Bodywork",
            Category::Wheels => "Wheels",
        }
    }

    /// Heading shown on category tiles.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Exhaust => "Exhaust Systems",
            Category::Brakes => "Brakes & Rotors",
            Category::Suspension => "Suspension",
            Category::Engine => "Engine Parts",
            Category::Bodywork => "Bodywork",
            Category::Wheels => "Wheels & Tires",
        }
    }
}

impl FromStr for Category {
    type Err = CommerceError;

    /// Parse an exact category name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CommerceError::UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
