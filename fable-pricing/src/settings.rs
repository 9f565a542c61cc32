use serde::{Deserialize, Serialize};

/// A linear fee model: `price = net * company_percentage + fixed_fee`
pub trait FeeSchedule {
    /// Multiplicative markup factor (1.2 means +20%)
    fn company_percentage(&self) -> f64;

    /// Flat amount added after the percentage markup
    fn fixed_fee(&self) -> f64;
}

/// Fee model for coaching sessions and packages sold on behalf of instructors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    pub company_percentage: f64,
    pub fixed_fee: f64,
}

impl PricingConfig {
    pub fn new(company_percentage: f64, fixed_fee: f64) -> Self {
        Self { company_percentage, fixed_fee }
    }
}

impl FeeSchedule for PricingConfig {
    fn company_percentage(&self) -> f64 {
        self.company_percentage
    }

    fn fixed_fee(&self) -> f64 {
        self.fixed_fee
    }
}

/// Fee model for library products supplied by publishers.
///
/// Same shape as [`PricingConfig`] but stored and edited as its own record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LibraryPricingSettings {
    pub company_percentage: f64,
    pub fixed_fee: f64,
}

impl LibraryPricingSettings {
    pub fn new(company_percentage: f64, fixed_fee: f64) -> Self {
        Self { company_percentage, fixed_fee }
    }
}

impl FeeSchedule for LibraryPricingSettings {
    fn company_percentage(&self) -> f64 {
        self.company_percentage
    }

    fn fixed_fee(&self) -> f64 {
        self.fixed_fee
    }
}
