//! Platforms module - marketplace fee schedules behind a connector seam.

mod platforms_connector;
mod platforms_model;
mod platforms_service;
mod platforms_traits;

pub use platforms_connector::MockMarketplaceConnector;
pub use platforms_model::{PlatformFeeSchedule, PlatformQuote};
pub use platforms_service::PlatformService;
pub use platforms_traits::{MarketplaceConnector, PlatformServiceTrait};
