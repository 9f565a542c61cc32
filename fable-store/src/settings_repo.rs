use async_trait::async_trait;
use fable_pricing::{FeeSchedule, LibraryPricingSettings, PricingConfig};
use tokio::sync::RwLock;
use tracing::info;

use crate::app_config::PricingSection;
use crate::{StoreError, StoreResult};

/// Where the admin-editable fee schedules live.
///
/// A schedule that was never saved reads back as `None`.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn pricing_config(&self) -> StoreResult<Option<PricingConfig>>;

    async fn update_pricing_config(&self, config: PricingConfig) -> StoreResult<PricingConfig>;

    async fn library_pricing_settings(&self) -> StoreResult<Option<LibraryPricingSettings>>;

    async fn update_library_pricing_settings(
        &self,
        settings: LibraryPricingSettings,
    ) -> StoreResult<LibraryPricingSettings>;
}

/// Rejects schedules the settings form must not save.
pub fn validate_fee_schedule(schedule: &impl FeeSchedule) -> StoreResult<()> {
    let percentage = schedule.company_percentage();
    if !percentage.is_finite() || percentage <= 0.0 {
        return Err(StoreError::InvalidSettings(format!(
            "company_percentage must be a positive number, got {}",
            percentage
        )));
    }

    let fee = schedule.fixed_fee();
    if !fee.is_finite() || fee < 0.0 {
        return Err(StoreError::InvalidSettings(format!(
            "fixed_fee must be zero or a positive number, got {}",
            fee
        )));
    }

    Ok(())
}

/// Process-wide settings held in memory for the lifetime of the server
#[derive(Debug, Default)]
pub struct InMemorySettingsStore {
    pricing: RwLock<Option<PricingConfig>>,
    library: RwLock<Option<LibraryPricingSettings>>,
}

impl InMemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from the `[pricing]` configuration section.
    ///
    /// Seeds go through the same checks as admin updates.
    pub fn seeded(section: &PricingSection) -> StoreResult<Self> {
        if let Some(service) = &section.service {
            validate_fee_schedule(service)?;
        }
        if let Some(library) = &section.library {
            validate_fee_schedule(library)?;
        }

        Ok(Self {
            pricing: RwLock::new(section.service),
            library: RwLock::new(section.library),
        })
    }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn pricing_config(&self) -> StoreResult<Option<PricingConfig>> {
        Ok(*self.pricing.read().await)
    }

    async fn update_pricing_config(&self, config: PricingConfig) -> StoreResult<PricingConfig> {
        validate_fee_schedule(&config)?;

        *self.pricing.write().await = Some(config);
        info!(
            company_percentage = config.company_percentage,
            fixed_fee = config.fixed_fee,
            "Pricing config updated"
        );
        Ok(config)
    }

    async fn library_pricing_settings(&self) -> StoreResult<Option<LibraryPricingSettings>> {
        Ok(*self.library.read().await)
    }

    async fn update_library_pricing_settings(
        &self,
        settings: LibraryPricingSettings,
    ) -> StoreResult<LibraryPricingSettings> {
        validate_fee_schedule(&settings)?;

        *self.library.write().await = Some(settings);
        info!(
            company_percentage = settings.company_percentage,
            fixed_fee = settings.fixed_fee,
            "Library pricing settings updated"
        );
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unseeded_store_is_empty() {
        let store = InMemorySettingsStore::new();

        assert!(store.pricing_config().await.unwrap().is_none());
        assert!(store.library_pricing_settings().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_seeded_store_returns_configured_schedules() {
        let section = PricingSection {
            service: Some(PricingConfig::new(1.2, 50.0)),
            library: None,
        };
        let store = InMemorySettingsStore::seeded(&section).unwrap();

        assert_eq!(store.pricing_config().await.unwrap(), Some(PricingConfig::new(1.2, 50.0)));
        assert!(store.library_pricing_settings().await.unwrap().is_none());
    }

    #[test]
    fn test_seeding_rejects_invalid_schedules() {
        let negative_markup = PricingSection {
            service: Some(PricingConfig::new(-1.0, 0.0)),
            library: None,
        };
        let err = InMemorySettingsStore::seeded(&negative_markup).unwrap_err();
        assert!(matches!(err, StoreError::InvalidSettings(_)));

        let negative_fee = PricingSection {
            service: Some(PricingConfig::new(1.2, 50.0)),
            library: Some(LibraryPricingSettings::new(1.1, -5.0)),
        };
        assert!(InMemorySettingsStore::seeded(&negative_fee).is_err());
    }

    #[tokio::test]
    async fn test_update_replaces_schedule() {
        let store = InMemorySettingsStore::new();

        store.update_pricing_config(PricingConfig::new(1.2, 50.0)).await.unwrap();
        store.update_pricing_config(PricingConfig::new(1.3, 0.0)).await.unwrap();
        store
            .update_library_pricing_settings(LibraryPricingSettings::new(1.1, 5.0))
            .await
            .unwrap();

        assert_eq!(store.pricing_config().await.unwrap(), Some(PricingConfig::new(1.3, 0.0)));
        assert_eq!(
            store.library_pricing_settings().await.unwrap(),
            Some(LibraryPricingSettings::new(1.1, 5.0))
        );
    }

    #[tokio::test]
    async fn test_invalid_update_keeps_previous_value() {
        let store = InMemorySettingsStore::new();
        store.update_pricing_config(PricingConfig::new(1.2, 50.0)).await.unwrap();

        let err = store.update_pricing_config(PricingConfig::new(0.0, 50.0)).await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidSettings(_)));

        let err = store.update_pricing_config(PricingConfig::new(1.2, -1.0)).await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidSettings(_)));

        assert_eq!(store.pricing_config().await.unwrap(), Some(PricingConfig::new(1.2, 50.0)));
    }

    #[test]
    fn test_validate_rejects_non_finite_values() {
        assert!(validate_fee_schedule(&PricingConfig::new(f64::NAN, 0.0)).is_err());
        assert!(validate_fee_schedule(&LibraryPricingSettings::new(1.1, f64::INFINITY)).is_err());
        assert!(validate_fee_schedule(&LibraryPricingSettings::new(1.0, 0.0)).is_ok());
    }
}
