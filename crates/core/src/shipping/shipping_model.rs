//! Shipping domain models.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A bookable shipping line with its cost and transit window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShippingMethod {
    pub id: String,
    pub name: String,
    pub carrier: String,
    pub base_cost: Decimal,
    pub transit_days_min: u32,
    pub transit_days_max: u32,
}

/// Where a parcel sits in its journey.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ShipmentStatus {
    Processing,
    InTransit,
    CustomsClearance,
    Delivered,
}

impl ShipmentStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ShipmentStatus::Delivered)
    }
}

impl fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ShipmentStatus::Processing => write!(f, "Processing"),
            ShipmentStatus::InTransit => write!(f, "In Transit"),
            ShipmentStatus::CustomsClearance => write!(f, "Customs Clearance"),
            ShipmentStatus::Delivered => write!(f, "Delivered"),
        }
    }
}

/// Snapshot of a tracked parcel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrackingStatus {
    pub tracking_number: String,
    pub carrier: String,
    pub status: ShipmentStatus,
    /// 0-100.
    pub progress_percent: u8,
    pub current_location: String,
    pub estimated_delivery: NaiveDate,
    pub item_count: u32,
    pub declared_value: Decimal,
}
