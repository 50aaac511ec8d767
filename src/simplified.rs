use crate::pricing::PricingTable;
use serde::{Deserialize, Serialize};

/// Usage assumptions for the workload-tiered model.
///
/// Same permissive stance as [`crate::detailed::DetailedConfig`]: values are
/// not range-checked, a percentage over 100 drives `other_tickets` negative.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SimplifiedConfig {
    /// Tickets processed per month
    pub tickets_per_month: f64,
    /// Share of tickets that are missing-points cases (0-100)
    pub missing_points_percentage: f64,
    /// LangChain observability seats
    pub langchain_seats: f64,
}

impl Default for SimplifiedConfig {
    fn default() -> Self {
        Self {
            tickets_per_month: 1000.0,
            missing_points_percentage: 60.0,
            langchain_seats: 2.0,
        }
    }
}

/// Cost lines for the missing-points tier (long resolution path with
/// receipt processing).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct MissingPointsTier {
    pub ticket_resolution: f64,
    pub llm_calls: f64,
    pub receipt_processing: f64,
    pub subtotal: f64,
}

/// Cost lines for all other tickets (short resolution path).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct OtherTicketsTier {
    pub ticket_resolution: f64,
    pub llm_calls: f64,
    pub subtotal: f64,
}

/// Monthly cost breakdown tiered by ticket class.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SimplifiedBreakdown {
    pub tickets_per_month: f64,
    pub missing_points_tickets: f64,
    pub other_tickets: f64,
    pub langchain_cost: f64,
    pub production_uptime_cost: f64,
    pub missing_points: MissingPointsTier,
    pub other: OtherTicketsTier,
    pub total_monthly_cost: f64,
}

/// Simplified monthly operating-cost model, tiered by two ticket classes.
///
/// Independent of [`crate::detailed::DetailedCostModel`]: different input
/// shape, different cost taxonomy, only the seat price is shared via the
/// pricing table.
pub struct SimplifiedCostModel<'a> {
    pricing: &'a PricingTable,
}

impl<'a> SimplifiedCostModel<'a> {
    pub fn new(pricing: &'a PricingTable) -> Self {
        Self { pricing }
    }

    /// Compute the monthly breakdown for one configuration
    pub fn compute(&self, config: &SimplifiedConfig) -> SimplifiedBreakdown {
        let missing_points_tickets =
            (config.tickets_per_month * config.missing_points_percentage / 100.0).round();
        let other_tickets = config.tickets_per_month - missing_points_tickets;

        let langchain_cost = config.langchain_seats * self.pricing.seat_price;

        // Always-on infrastructure, independent of ticket volume.
        let production_uptime_cost =
            self.pricing.uptime_minutes_per_month * self.pricing.uptime_rate_per_minute;

        let rates = &self.pricing.missing_points;
        let missing_points = MissingPointsTier {
            ticket_resolution: missing_points_tickets * rates.ticket_resolution,
            llm_calls: missing_points_tickets * rates.llm_call,
            receipt_processing: missing_points_tickets * rates.receipt_processing,
            subtotal: missing_points_tickets * rates.ticket_resolution
                + missing_points_tickets * rates.llm_call
                + missing_points_tickets * rates.receipt_processing,
        };

        let rates = &self.pricing.other_tickets;
        let other = OtherTicketsTier {
            ticket_resolution: other_tickets * rates.ticket_resolution,
            llm_calls: other_tickets * rates.llm_call,
            subtotal: other_tickets * rates.ticket_resolution + other_tickets * rates.llm_call,
        };

        let total_monthly_cost =
            langchain_cost + production_uptime_cost + missing_points.subtotal + other.subtotal;

        SimplifiedBreakdown {
            tickets_per_month: config.tickets_per_month,
            missing_points_tickets,
            other_tickets,
            langchain_cost,
            production_uptime_cost,
            missing_points,
            other,
            total_monthly_cost,
        }
    }
}
