//! Type-safe enumerations for catalog entries
//!
//! Categories, risk levels and priorities are closed sets in the catalog, so
//! they are modelled as enums rather than strings. Each one parses from and
//! displays as its lowercase name, which is also its JSON representation.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Broad category a technology belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TechCategory {
    Frontend,
    Backend,
    Database,
    Mobile,
    #[default]
    Other,
}

impl TechCategory {
    /// Heading used when grouping technologies for display
    pub fn label(&self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Database => "Database",
            Self::Mobile => "Mobile",
            Self::Other => "Other",
        }
    }
}

/// Sensitivity of a category of handled data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[derive(Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Check if this is the highest risk level
    pub fn is_high(&self) -> bool {
        matches!(self, Self::High)
    }
}

/// Priority of a single recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[derive(Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Badge text, e.g. "High Priority"
    pub fn badge(&self) -> &'static str {
        match self {
            Self::Low => "Low Priority",
            Self::Medium => "Medium Priority",
            Self::High => "High Priority",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_tech_category_parses_lowercase() {
        assert_eq!("database".parse::<TechCategory>().unwrap(), TechCategory::Database);
        assert!("Database".parse::<TechCategory>().is_err());
    }

    #[test]
    fn test_risk_level_ordering() {
        assert!(RiskLevel::High > RiskLevel::Medium);
        assert!(RiskLevel::Medium > RiskLevel::Low);
        assert!(RiskLevel::High.is_high());
        assert!(!RiskLevel::Medium.is_high());
    }

    #[test]
    fn test_priority_serializes_lowercase() {
        let json = serde_json::to_string(&Priority::High).unwrap();
        assert_eq!(json, "\"high\"");
        let parsed: Priority = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(parsed, Priority::Low);
    }

    #[test]
    fn test_display_matches_serde() {
        for priority in Priority::iter() {
            let json = serde_json::to_string(&priority).unwrap();
            assert_eq!(json, format!("\"{}\"", priority));
        }
        for category in TechCategory::iter() {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category));
        }
    }

    #[test]
    fn test_priority_badge() {
        assert_eq!(Priority::Medium.badge(), "Medium Priority");
    }
}
