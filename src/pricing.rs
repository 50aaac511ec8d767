use serde::{Deserialize, Serialize};

/// Model used when a configured name is not in the catalog.
pub const DEFAULT_MODEL: &str = "Claude Sonnet 3.7 Vision";

/// Per-ticket pricing assumptions for one vision-capable model.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct ModelPricing {
    /// Cost to process one attached image (receipt/photo)
    pub vision_cost: f64,
    /// Cost per token
    pub token_cost: f64,
    /// Flat prompt/response output cost per ticket
    pub base_prompt_output: f64,
    /// Assumed tokens consumed per ticket
    pub tokens_per_ticket: f64,
}

/// A named catalog entry.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ModelEntry {
    pub name: String,
    #[serde(flatten)]
    pub pricing: ModelPricing,
}

/// How a model name was resolved against the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelResolution {
    /// The requested name was found in the catalog
    Exact,
    /// The requested name was unknown; the default entry was used
    Fallback,
}

/// Pricing catalog for the supported vision models.
///
/// Lookup is tagged: `lookup` tells the caller whether a name is known, and
/// `resolve` never fails, so the cost models stay total. Whether a fallback
/// is worth warning about is the caller's decision.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ModelCatalog {
    pub default_model: String,
    pub entries: Vec<ModelEntry>,
}

// Used when a catalog override removed the default entry itself.
static BUILTIN_DEFAULT: ModelPricing = ModelPricing {
    vision_cost: 0.004,
    token_cost: 0.000005,
    base_prompt_output: 0.002,
    tokens_per_ticket: 2000.0,
};

impl Default for ModelCatalog {
    fn default() -> Self {
        Self {
            default_model: DEFAULT_MODEL.to_string(),
            entries: vec![
                ModelEntry {
                    name: DEFAULT_MODEL.to_string(),
                    pricing: BUILTIN_DEFAULT,
                },
                ModelEntry {
                    name: "GPT-4o Vision".to_string(),
                    pricing: ModelPricing {
                        vision_cost: 0.005,
                        token_cost: 0.0000055,
                        base_prompt_output: 0.0022,
                        tokens_per_ticket: 2000.0,
                    },
                },
                ModelEntry {
                    name: "Gemini 1.5 Pro Vision".to_string(),
                    pricing: ModelPricing {
                        vision_cost: 0.0035,
                        token_cost: 0.0000048,
                        base_prompt_output: 0.002,
                        tokens_per_ticket: 2000.0,
                    },
                },
            ],
        }
    }
}

impl ModelCatalog {
    /// Look up a model by exact name
    pub fn lookup(&self, name: &str) -> Option<&ModelPricing> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.pricing)
    }

    /// Resolve a model name, falling back to the default entry
    ///
    /// Never fails: if the default entry itself has been removed by a config
    /// override, the built-in default pricing is used.
    pub fn resolve(&self, name: &str) -> (&ModelPricing, ModelResolution) {
        if let Some(pricing) = self.lookup(name) {
            return (pricing, ModelResolution::Exact);
        }

        let pricing = self.lookup(&self.default_model).unwrap_or(&BUILTIN_DEFAULT);
        (pricing, ModelResolution::Fallback)
    }

    /// Catalog model names in display order
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.name.as_str()).collect()
    }
}

/// Per-ticket rates for the missing-points workload tier (~20-step resolution)
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MissingPointsRates {
    pub ticket_resolution: f64,
    pub llm_call: f64,
    pub receipt_processing: f64,
}

impl Default for MissingPointsRates {
    fn default() -> Self {
        Self {
            ticket_resolution: 0.02,
            llm_call: 0.0003,
            receipt_processing: 0.004,
        }
    }
}

/// Per-ticket rates for all other tickets (short resolution path, no receipts)
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OtherTicketRates {
    pub ticket_resolution: f64,
    pub llm_call: f64,
}

impl Default for OtherTicketRates {
    fn default() -> Self {
        Self {
            ticket_resolution: 0.005,
            llm_call: 0.0003,
        }
    }
}

/// All non-model pricing assumptions, lifted into one table so the numbers
/// are a single point of change and can be overridden from the config file.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PricingTable {
    /// LangSmith / LangChain observability seat price per month
    pub seat_price: f64,
    /// Traces included in the base plan per month
    pub trace_quota: f64,
    /// Charge per 1k traces beyond the quota
    pub trace_overage_per_thousand: f64,
    /// Always-on production infrastructure, billed per minute
    pub uptime_rate_per_minute: f64,
    /// Billable minutes in a month (24h * 60min * 30d)
    pub uptime_minutes_per_month: f64,
    pub missing_points: MissingPointsRates,
    pub other_tickets: OtherTicketRates,
}

impl Default for PricingTable {
    fn default() -> Self {
        Self {
            seat_price: 39.0,
            trace_quota: 10_000.0,
            trace_overage_per_thousand: 0.5,
            uptime_rate_per_minute: 0.0036,
            uptime_minutes_per_month: 24.0 * 60.0 * 30.0,
            missing_points: MissingPointsRates::default(),
            other_tickets: OtherTicketRates::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_has_three_models() {
        let catalog = ModelCatalog::default();
        assert_eq!(
            catalog.names(),
            vec![
                "Claude Sonnet 3.7 Vision",
                "GPT-4o Vision",
                "Gemini 1.5 Pro Vision"
            ]
        );
        assert_eq!(catalog.default_model, DEFAULT_MODEL);
    }

    #[test]
    fn test_lookup_known_model() {
        let catalog = ModelCatalog::default();
        let pricing = catalog.lookup("GPT-4o Vision").unwrap();
        assert_eq!(pricing.vision_cost, 0.005);
        assert_eq!(pricing.token_cost, 0.0000055);
    }

    #[test]
    fn test_lookup_unknown_model_is_none() {
        let catalog = ModelCatalog::default();
        assert!(catalog.lookup("GPT-5 Vision").is_none());
        assert!(catalog.lookup("").is_none());
    }

    #[test]
    fn test_resolve_unknown_model_falls_back_to_default() {
        let catalog = ModelCatalog::default();
        let (pricing, resolution) = catalog.resolve("GPT-5 Vision");
        assert_eq!(resolution, ModelResolution::Fallback);
        assert_eq!(pricing, catalog.lookup(DEFAULT_MODEL).unwrap());
    }

    #[test]
    fn test_resolve_known_model_is_exact() {
        let catalog = ModelCatalog::default();
        let (pricing, resolution) = catalog.resolve("Gemini 1.5 Pro Vision");
        assert_eq!(resolution, ModelResolution::Exact);
        assert_eq!(pricing.vision_cost, 0.0035);
    }

    #[test]
    fn test_resolve_survives_missing_default_entry() {
        let catalog = ModelCatalog {
            default_model: "Removed Model".to_string(),
            entries: vec![],
        };
        let (pricing, resolution) = catalog.resolve("anything");
        assert_eq!(resolution, ModelResolution::Fallback);
        assert_eq!(pricing.vision_cost, 0.004);
    }

    #[test]
    fn test_default_pricing_table_constants() {
        let table = PricingTable::default();
        assert_eq!(table.seat_price, 39.0);
        assert_eq!(table.trace_quota, 10_000.0);
        assert_eq!(table.trace_overage_per_thousand, 0.5);
        assert_eq!(table.uptime_rate_per_minute, 0.0036);
        assert_eq!(table.uptime_minutes_per_month, 43_200.0);
        assert_eq!(table.missing_points.receipt_processing, 0.004);
        assert_eq!(table.other_tickets.ticket_resolution, 0.005);
    }
}
