//! The parameter set driving the growth forecast.
//!
//! Field names match the service's wire format. Growth rates are stored as
//! decimal fractions (0.12 = 12% per month) and displayed multiplied by 100;
//! the same convention applies to the three revenue-fraction fields.

use serde::{Deserialize, Serialize};

/// Number of forecast years covered by each growth-rate sequence.
pub const GROWTH_YEARS: usize = 5;

/// The three populations the forecast model tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActorType {
    Client,
    Developer,
    Affiliate,
}

impl ActorType {
    pub const ALL: [ActorType; 3] = [ActorType::Client, ActorType::Developer, ActorType::Affiliate];

    pub fn label(&self) -> &'static str {
        match self {
            ActorType::Client => "Client",
            ActorType::Developer => "Developer",
            ActorType::Affiliate => "Affiliate",
        }
    }
}

/// Full set of model inputs for the forecast service.
///
/// The service is the system of record; this struct is the local working
/// copy a front end edits field-by-field before submitting it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    pub initial_clients: u32,
    pub initial_developers: u32,
    pub initial_affiliates: u32,

    /// Monthly growth rate per forecast year, always `GROWTH_YEARS` long.
    pub client_growth_rates: Vec<f64>,
    pub developer_growth_rates: Vec<f64>,
    pub affiliate_growth_rates: Vec<f64>,

    pub subscription_price: f64,
    pub affiliate_commission: f64,
    pub marketing_percentage: f64,
    pub infrastructure_cost_per_user: f64,
    pub other_expenses_percentage: f64,
    pub base_salary: f64,
    pub salary_increase: f64,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            initial_clients: 100,
            initial_developers: 50,
            initial_affiliates: 20,
            client_growth_rates: vec![0.08, 0.10, 0.12, 0.15, 0.18],
            developer_growth_rates: vec![0.05, 0.07, 0.09, 0.11, 0.13],
            affiliate_growth_rates: vec![0.07, 0.09, 0.12, 0.14, 0.16],
            subscription_price: 20.0,
            affiliate_commission: 5.0,
            marketing_percentage: 0.15,
            infrastructure_cost_per_user: 2.0,
            other_expenses_percentage: 0.10,
            base_salary: 7000.0,
            salary_increase: 0.05,
        }
    }
}

impl ParameterSet {
    /// Growth-rate sequence for one actor type.
    pub fn growth_rates(&self, actor: ActorType) -> &[f64] {
        match actor {
            ActorType::Client => &self.client_growth_rates,
            ActorType::Developer => &self.developer_growth_rates,
            ActorType::Affiliate => &self.affiliate_growth_rates,
        }
    }

    fn growth_rates_slot(&mut self, actor: ActorType) -> &mut Vec<f64> {
        match actor {
            ActorType::Client => &mut self.client_growth_rates,
            ActorType::Developer => &mut self.developer_growth_rates,
            ActorType::Affiliate => &mut self.affiliate_growth_rates,
        }
    }

    /// Stored rate for one actor/year, as the display percentage.
    pub fn growth_rate_percent(&self, actor: ActorType, year: usize) -> f64 {
        self.growth_rates(actor)[year] * 100.0
    }

    /// Replace a single year's rate from a percentage value.
    ///
    /// Only the addressed element changes; the sequence is rebuilt rather
    /// than patched in place, so the previous vector is never aliased by
    /// anything still holding it.
    pub fn set_growth_rate(&mut self, actor: ActorType, year: usize, percent: f64) {
        debug_assert!(year < GROWTH_YEARS, "year index out of range: {year}");
        let slot = self.growth_rates_slot(actor);
        let mut next = slot.clone();
        next[year] = percent / 100.0;
        *slot = next;
    }
}
