use async_trait::async_trait;
use chrono::NaiveDate;
use log::warn;
use rust_decimal_macros::dec;

use crate::errors::{Result, ValidationError};

use super::shipping_model::{ShipmentStatus, ShippingMethod, TrackingStatus};
use super::shipping_traits::CourierTracker;

/// Serves the built-in courier catalog and a fixed set of parcel fixtures.
/// Stands in for real tracking APIs until those integrations exist.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockCourierTracker;

impl MockCourierTracker {
    pub fn new() -> Self {
        MockCourierTracker
    }

    fn methods() -> Vec<ShippingMethod> {
        vec![
            ShippingMethod {
                id: "yanwen".to_string(),
                name: "Yanwen Special Line".to_string(),
                carrier: "Yanwen".to_string(),
                base_cost: dec!(18.75),
                transit_days_min: 10,
                transit_days_max: 15,
            },
            ShippingMethod {
                id: "4px-standard".to_string(),
                name: "4PX Standard".to_string(),
                carrier: "4PX".to_string(),
                base_cost: dec!(22.50),
                transit_days_min: 12,
                transit_days_max: 18,
            },
            ShippingMethod {
                id: "4px-economy".to_string(),
                name: "4PX Economy".to_string(),
                carrier: "4PX".to_string(),
                base_cost: dec!(19.99),
                transit_days_min: 15,
                transit_days_max: 25,
            },
            ShippingMethod {
                id: "gd-ems".to_string(),
                name: "GD-EMS".to_string(),
                carrier: "GD-EMS".to_string(),
                base_cost: dec!(35.00),
                transit_days_min: 7,
                transit_days_max: 12,
            },
            ShippingMethod {
                id: "china-post".to_string(),
                name: "China Post".to_string(),
                carrier: "China Post".to_string(),
                base_cost: dec!(15.50),
                transit_days_min: 20,
                transit_days_max: 40,
            },
        ]
    }

    fn shipments() -> Vec<TrackingStatus> {
        vec![
            TrackingStatus {
                tracking_number: "YW2024031501".to_string(),
                carrier: "Yanwen".to_string(),
                status: ShipmentStatus::InTransit,
                progress_percent: 65,
                current_location: "Shanghai Sorting Center".to_string(),
                estimated_delivery: NaiveDate::from_ymd_opt(2024, 3, 22).unwrap(),
                item_count: 3,
                declared_value: dec!(127.50),
            },
            TrackingStatus {
                tracking_number: "4PX2024031502".to_string(),
                carrier: "4PX".to_string(),
                status: ShipmentStatus::CustomsClearance,
                progress_percent: 80,
                current_location: "UK Customs".to_string(),
                estimated_delivery: NaiveDate::from_ymd_opt(2024, 3, 20).unwrap(),
                item_count: 1,
                declared_value: dec!(89.99),
            },
            TrackingStatus {
                tracking_number: "GD2024031503".to_string(),
                carrier: "GD-EMS".to_string(),
                status: ShipmentStatus::Delivered,
                progress_percent: 100,
                current_location: "Delivered".to_string(),
                estimated_delivery: NaiveDate::from_ymd_opt(2024, 3, 18).unwrap(),
                item_count: 2,
                declared_value: dec!(156.75),
            },
        ]
    }
}

#[async_trait]
impl CourierTracker for MockCourierTracker {
    async fn list_methods(&self) -> Result<Vec<ShippingMethod>> {
        Ok(Self::methods())
    }

    async fn track(&self, tracking_number: &str) -> Result<TrackingStatus> {
        Self::shipments()
            .into_iter()
            .find(|shipment| shipment.tracking_number == tracking_number)
            .ok_or_else(|| {
                warn!("tracking requested for unknown parcel '{tracking_number}'");
                ValidationError::InvalidInput(format!(
                    "unknown tracking number '{tracking_number}'"
                ))
                .into()
            })
    }
}
