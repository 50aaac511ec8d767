use crate::detailed::DetailedConfig;
use crate::error::AppError;
use crate::pricing::{ModelCatalog, PricingTable};
use crate::simplified::SimplifiedConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Estimator configuration: pricing assumptions plus default scenarios.
///
/// Everything has built-in defaults; a config file only needs the values it
/// wants to override.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct EstimatorConfig {
    pub pricing: PricingTable,
    pub catalog: ModelCatalog,
    pub detailed: DetailedConfig,
    pub simplified: SimplifiedConfig,
}

/// Load configuration from an optional file plus environment overrides
///
/// The file is not required; with no file and no environment the built-in
/// defaults apply. Environment variables use the `TICKET_ROI` prefix with
/// `__` as section separator, e.g. `TICKET_ROI__PRICING__SEAT_PRICE=49`.
pub fn load_config(path: &Path) -> Result<EstimatorConfig, AppError> {
    let config = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix("TICKET_ROI").separator("__"))
        .build()?;

    let cfg: EstimatorConfig = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &EstimatorConfig) -> Result<(), AppError> {
    if cfg.catalog.entries.is_empty() {
        return Err(AppError::InvalidConfig(
            "model catalog must contain at least one entry".to_string(),
        ));
    }

    for entry in &cfg.catalog.entries {
        if entry.name.is_empty() {
            return Err(AppError::InvalidConfig(
                "model name cannot be empty".to_string(),
            ));
        }
    }

    if cfg.catalog.lookup(&cfg.catalog.default_model).is_none() {
        return Err(AppError::InvalidConfig(format!(
            "default model '{}' is not in the catalog",
            cfg.catalog.default_model
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::{ModelEntry, ModelPricing};

    #[test]
    fn test_defaults_validate() {
        let cfg = EstimatorConfig::default();
        assert!(validate_config(&cfg).is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_catalog() {
        let mut cfg = EstimatorConfig::default();
        cfg.catalog.entries.clear();

        let result = validate_config(&cfg);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("at least one entry"));
    }

    #[test]
    fn test_validate_rejects_missing_default_model() {
        let mut cfg = EstimatorConfig::default();
        cfg.catalog.default_model = "Renamed Model".to_string();

        let result = validate_config(&cfg);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Renamed Model"));
    }

    #[test]
    fn test_validate_rejects_unnamed_entry() {
        let mut cfg = EstimatorConfig::default();
        cfg.catalog.entries.push(ModelEntry {
            name: String::new(),
            pricing: ModelPricing {
                vision_cost: 0.001,
                token_cost: 0.000001,
                base_prompt_output: 0.001,
                tokens_per_ticket: 1000.0,
            },
        });

        assert!(validate_config(&cfg).is_err());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let cfg = load_config(Path::new("definitely-not-here.toml")).unwrap();
        assert_eq!(cfg.pricing.seat_price, 39.0);
        assert_eq!(cfg.detailed.tickets, 1000.0);
        assert_eq!(cfg.simplified.langchain_seats, 2.0);
    }
}
