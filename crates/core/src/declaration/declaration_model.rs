//! Declaration domain models.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, ValidationError};

/// One sourced item entering a parcel, priced at supplier cost.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeclarationItem {
    pub unit_cost: Decimal,
    pub quantity: u32,
}

/// How aggressively the parcel value is declared to customs.
///
/// Unknown tags are rejected both by serde and by [`FromStr`]; there is no
/// silent fallback to the accurate multiplier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationStrategy {
    Accurate,
    Reduced,
    Minimal,
}

impl DeclarationStrategy {
    pub const ALL: [DeclarationStrategy; 3] = [
        DeclarationStrategy::Accurate,
        DeclarationStrategy::Reduced,
        DeclarationStrategy::Minimal,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            DeclarationStrategy::Accurate => "accurate",
            DeclarationStrategy::Reduced => "reduced",
            DeclarationStrategy::Minimal => "minimal",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DeclarationStrategy::Accurate => "Accurate Declaration",
            DeclarationStrategy::Reduced => "Reduced Value",
            DeclarationStrategy::Minimal => "Minimal Value",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DeclarationStrategy::Accurate => {
                "Declare close to actual value with proper description"
            }
            DeclarationStrategy::Reduced => "Declare at 60-70% of actual value",
            DeclarationStrategy::Minimal => "Declare at minimum acceptable value",
        }
    }

    /// Fraction of the total item cost suggested for declaration.
    pub fn multiplier(&self) -> Decimal {
        match self {
            DeclarationStrategy::Accurate => Decimal::ONE,
            DeclarationStrategy::Reduced => dec!(0.65),
            DeclarationStrategy::Minimal => dec!(0.30),
        }
    }

    pub fn risk(&self) -> CustomsRisk {
        match self {
            DeclarationStrategy::Accurate => CustomsRisk::Low,
            DeclarationStrategy::Reduced => CustomsRisk::Medium,
            DeclarationStrategy::Minimal => CustomsRisk::High,
        }
    }

    pub fn recommended(&self) -> bool {
        matches!(self, DeclarationStrategy::Accurate)
    }

    pub fn info(&self) -> StrategyInfo {
        StrategyInfo {
            id: self.id().to_string(),
            name: self.display_name().to_string(),
            description: self.description().to_string(),
            risk: self.risk(),
            recommended: self.recommended(),
        }
    }
}

impl FromStr for DeclarationStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "accurate" => Ok(DeclarationStrategy::Accurate),
            "reduced" => Ok(DeclarationStrategy::Reduced),
            "minimal" => Ok(DeclarationStrategy::Minimal),
            other => Err(ValidationError::InvalidInput(format!(
                "unknown declaration strategy '{other}'"
            ))
            .into()),
        }
    }
}

impl fmt::Display for DeclarationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Customs attention level a strategy invites.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CustomsRisk {
    Low,
    Medium,
    High,
}

impl fmt::Display for CustomsRisk {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CustomsRisk::Low => write!(f, "Low"),
            CustomsRisk::Medium => write!(f, "Medium"),
            CustomsRisk::High => write!(f, "High"),
        }
    }
}

/// Strategy metadata for listing endpoints and pickers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StrategyInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub risk: CustomsRisk,
    pub recommended: bool,
}

/// Suggested customs value for a parcel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeclarationSuggestion {
    pub strategy: DeclarationStrategy,
    pub total_item_cost: Decimal,
    /// Whole-currency amount, never below the floor of 10.
    pub suggested_value: Decimal,
}
