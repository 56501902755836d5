//! Onboarding module - the setup wizard reduced to a plain state machine.

mod onboarding_model;

pub use onboarding_model::{OnboardingFlow, OnboardingStep, ResellMode, SetupAnswers};
