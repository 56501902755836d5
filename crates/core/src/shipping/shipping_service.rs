use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::errors::Result;

use super::shipping_model::{ShippingMethod, TrackingStatus};
use super::shipping_traits::{CourierTracker, ShippingServiceTrait};

/// Exposes the courier catalog and parcel tracking through the tracker seam.
pub struct ShippingService {
    tracker: Arc<dyn CourierTracker>,
}

impl ShippingService {
    pub fn new(tracker: Arc<dyn CourierTracker>) -> Self {
        ShippingService { tracker }
    }
}

#[async_trait]
impl ShippingServiceTrait for ShippingService {
    async fn list_methods(&self) -> Result<Vec<ShippingMethod>> {
        self.tracker.list_methods().await
    }

    async fn track(&self, tracking_number: &str) -> Result<TrackingStatus> {
        let status = self.tracker.track(tracking_number).await?;
        debug!(
            "parcel {} is {} at {}%",
            status.tracking_number, status.status, status.progress_percent
        );
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use crate::shipping::shipping_model::ShipmentStatus;
    use crate::shipping::shipping_tracker::MockCourierTracker;

    fn service() -> ShippingService {
        ShippingService::new(Arc::new(MockCourierTracker::new()))
    }

    #[tokio::test]
    async fn catalog_lists_all_five_lines() {
        let methods = service().list_methods().await.unwrap();
        assert_eq!(methods.len(), 5);
        let ids: Vec<&str> = methods.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(
            ids,
            ["yanwen", "4px-standard", "4px-economy", "gd-ems", "china-post"]
        );
    }

    #[tokio::test]
    async fn transit_windows_are_well_formed() {
        for method in service().list_methods().await.unwrap() {
            assert!(method.transit_days_min <= method.transit_days_max);
        }
    }

    #[tokio::test]
    async fn known_parcel_reports_its_progress() {
        let status = service().track("YW2024031501").await.unwrap();
        assert_eq!(status.status, ShipmentStatus::InTransit);
        assert_eq!(status.progress_percent, 65);
        assert_eq!(status.current_location, "Shanghai Sorting Center");
        assert!(!status.status.is_terminal());
    }

    #[tokio::test]
    async fn delivered_parcel_is_terminal() {
        let status = service().track("GD2024031503").await.unwrap();
        assert!(status.status.is_terminal());
        assert_eq!(status.progress_percent, 100);
    }

    #[tokio::test]
    async fn unknown_parcel_is_a_validation_error() {
        let err = service().track("NOPE123").await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }
}
