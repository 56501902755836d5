//! Onboarding domain models.
//!
//! The setup wizard is a linear sequence of screens; its whole state is the
//! current index plus the answers collected so far, passed by value. The
//! index invariant `0 <= current_index < ORDER.len()` is enforced by keeping
//! the field private and saturating every transition.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Wizard screens, in presentation order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum OnboardingStep {
    Welcome,
    BusinessProfile,
    SourcingMethods,
    SellingPlatforms,
    ShippingPreferences,
    ProfitTargets,
    ResellMode,
    DashboardPreview,
}

impl OnboardingStep {
    pub const ORDER: [OnboardingStep; 8] = [
        OnboardingStep::Welcome,
        OnboardingStep::BusinessProfile,
        OnboardingStep::SourcingMethods,
        OnboardingStep::SellingPlatforms,
        OnboardingStep::ShippingPreferences,
        OnboardingStep::ProfitTargets,
        OnboardingStep::ResellMode,
        OnboardingStep::DashboardPreview,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            OnboardingStep::Welcome => "Welcome",
            OnboardingStep::BusinessProfile => "Business Profile",
            OnboardingStep::SourcingMethods => "Sourcing Methods",
            OnboardingStep::SellingPlatforms => "Selling Platforms",
            OnboardingStep::ShippingPreferences => "Shipping Preferences",
            OnboardingStep::ProfitTargets => "Profit Targets",
            OnboardingStep::ResellMode => "Resell Mode",
            OnboardingStep::DashboardPreview => "Dashboard Preview",
        }
    }
}

/// Interface intensity profile chosen during setup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResellMode {
    Study,
    Chill,
    Hustle,
}

/// Answers collected across the wizard. Everything is optional until the
/// flow completes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SetupAnswers {
    pub business_name: Option<String>,
    pub sourcing_methods: Vec<String>,
    pub selling_platforms: Vec<String>,
    pub shipping_preference: Option<String>,
    pub monthly_profit_target: Option<Decimal>,
    pub resell_mode: Option<ResellMode>,
}

/// The wizard's reducer state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OnboardingFlow {
    current_index: usize,
    pub answers: SetupAnswers,
}

impl OnboardingFlow {
    pub fn new() -> Self {
        OnboardingFlow::default()
    }

    pub fn current_step(&self) -> OnboardingStep {
        OnboardingStep::ORDER[self.current_index]
    }

    /// Moves to the next screen. Returns false (and stays put) on the last one.
    pub fn advance(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.current_index += 1;
        true
    }

    /// Moves to the previous screen. Returns false (and stays put) on the first one.
    pub fn back(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.current_index -= 1;
        true
    }

    /// Jumps straight to the final preview screen, as the skip button does.
    pub fn skip_to_preview(&mut self) {
        self.current_index = OnboardingStep::ORDER.len() - 1;
    }

    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    pub fn is_last(&self) -> bool {
        self.current_index == OnboardingStep::ORDER.len() - 1
    }

    /// Completion indicator shown above the step dots.
    pub fn progress_percent(&self) -> f64 {
        (self.current_index + 1) as f64 / OnboardingStep::ORDER.len() as f64 * 100.0
    }
}
