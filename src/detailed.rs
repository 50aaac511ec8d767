use crate::pricing::{ModelCatalog, PricingTable, DEFAULT_MODEL};
use serde::{Deserialize, Serialize};

/// Usage assumptions for the detailed cost model.
///
/// Fields are plain numbers and are not range-checked: negative counts or
/// percentages over 100 propagate into the breakdown unchanged. Defaults
/// mirror the scenario the estimator ships with.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DetailedConfig {
    /// Tickets processed per month
    pub tickets: f64,
    /// Percentage of tickets resolved without human intervention (0-100)
    pub automation_rate: f64,
    /// Catalog model name; unknown names resolve to the default entry
    pub model_name: String,
    /// LangSmith / LangGraph observability seats
    pub langsmith_users: f64,
    /// One-time build cost
    pub build_cost: f64,
    /// Months the build cost is amortized over
    pub amortization_months: f64,
    /// Cost of one manually handled ticket
    pub manual_cost_per_ticket: f64,
}

impl Default for DetailedConfig {
    fn default() -> Self {
        Self {
            tickets: 1000.0,
            automation_rate: 40.0,
            model_name: DEFAULT_MODEL.to_string(),
            langsmith_users: 1.0,
            build_cost: 75_000.0,
            amortization_months: 12.0,
            manual_cost_per_ticket: 6.0,
        }
    }
}

/// Monthly cost breakdown with manual-baseline comparison and payback.
///
/// `payback_months` is `f64::INFINITY` when the recurring savings never
/// recoup the build cost; renderers must show a "never" label for it, not a
/// number (see [`crate::format::payback_label`]).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DetailedBreakdown {
    pub tickets: f64,
    pub automation_rate: f64,
    pub automated_tickets: f64,
    pub model_name: String,
    pub cost_vision: f64,
    pub cost_text: f64,
    pub cost_langsmith: f64,
    pub trace_overage: f64,
    pub total_monthly_llm: f64,
    pub amortized_build_monthly: f64,
    pub agent_monthly_all_in: f64,
    pub manual_baseline_monthly: f64,
    pub manual_after_agent_monthly: f64,
    pub recurring_net_monthly_savings: f64,
    pub payback_months: f64,
}

/// Detailed monthly operating-cost model with ROI projection inputs.
///
/// Stateless: `compute` is a pure function of the configuration and the
/// pricing tables it borrows, and never fails.
pub struct DetailedCostModel<'a> {
    catalog: &'a ModelCatalog,
    pricing: &'a PricingTable,
}

impl<'a> DetailedCostModel<'a> {
    pub fn new(catalog: &'a ModelCatalog, pricing: &'a PricingTable) -> Self {
        Self { catalog, pricing }
    }

    /// Compute the monthly breakdown for one configuration
    pub fn compute(&self, config: &DetailedConfig) -> DetailedBreakdown {
        let (model, _resolution) = self.catalog.resolve(&config.model_name);

        let automated_tickets = (config.tickets * config.automation_rate / 100.0).round();

        let cost_vision = config.tickets * model.vision_cost;
        let cost_text = config.tickets
            * (model.tokens_per_ticket * model.token_cost + model.base_prompt_output);

        let cost_langsmith = config.langsmith_users * self.pricing.seat_price;

        // Base trace quota is included; overage billed per extra 1k traces.
        let extra_traces = (config.tickets - self.pricing.trace_quota).max(0.0);
        let trace_overage = extra_traces / 1000.0 * self.pricing.trace_overage_per_thousand;

        let total_monthly_llm = cost_vision + cost_text + cost_langsmith + trace_overage;

        // Guard: amortizing over less than one month would divide by zero.
        let amortized_build_monthly = config.build_cost / config.amortization_months.max(1.0);
        let agent_monthly_all_in = total_monthly_llm + amortized_build_monthly;

        let manual_baseline_monthly = config.tickets * config.manual_cost_per_ticket;
        let manual_after_agent_monthly =
            (config.tickets - automated_tickets) * config.manual_cost_per_ticket;

        // Amortization is excluded here: payback measures how fast recurring
        // savings recover the one-time cost, so the one-time cost must not
        // also be counted as a recurring expense.
        let recurring_net_monthly_savings =
            automated_tickets * config.manual_cost_per_ticket - total_monthly_llm;

        let payback_months = if recurring_net_monthly_savings > 0.0 {
            (config.build_cost / recurring_net_monthly_savings).ceil()
        } else {
            f64::INFINITY
        };

        DetailedBreakdown {
            tickets: config.tickets,
            automation_rate: config.automation_rate,
            automated_tickets,
            model_name: config.model_name.clone(),
            cost_vision,
            cost_text,
            cost_langsmith,
            trace_overage,
            total_monthly_llm,
            amortized_build_monthly,
            agent_monthly_all_in,
            manual_baseline_monthly,
            manual_after_agent_monthly,
            recurring_net_monthly_savings,
            payback_months,
        }
    }
}
