//! Descriptor table for the scalar form fields.
//!
//! Each entry binds a label to a getter/setter on [`ParameterSet`] plus the
//! display convention for its kind. Fraction fields are stored as decimals
//! and edited as percentages, so the table is the single place where the
//! ×100 / ÷100 conversion happens.

use std::num::ParseFloatError;

use growthcast_api::ParameterSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Non-negative whole population count.
    Count,
    /// Non-negative currency amount.
    Currency,
    /// Fraction in [0, 1], displayed and edited as a percentage.
    Fraction,
}

pub struct FieldSpec {
    pub label: &'static str,
    pub kind: FieldKind,
    get: fn(&ParameterSet) -> f64,
    set: fn(&mut ParameterSet, f64),
}

/// Initial population counts, in form order.
pub const INITIAL_FIELDS: [FieldSpec; 3] = [
    FieldSpec {
        label: "Initial Clients",
        kind: FieldKind::Count,
        get: |p| p.initial_clients as f64,
        set: |p, v| p.initial_clients = v as u32,
    },
    FieldSpec {
        label: "Initial Developers",
        kind: FieldKind::Count,
        get: |p| p.initial_developers as f64,
        set: |p, v| p.initial_developers = v as u32,
    },
    FieldSpec {
        label: "Initial Affiliates",
        kind: FieldKind::Count,
        get: |p| p.initial_affiliates as f64,
        set: |p, v| p.initial_affiliates = v as u32,
    },
];

/// Pricing and cost parameters, in form order.
pub const PRICING_FIELDS: [FieldSpec; 7] = [
    FieldSpec {
        label: "Subscription Price ($)",
        kind: FieldKind::Currency,
        get: |p| p.subscription_price,
        set: |p, v| p.subscription_price = v,
    },
    FieldSpec {
        label: "Affiliate Commission ($)",
        kind: FieldKind::Currency,
        get: |p| p.affiliate_commission,
        set: |p, v| p.affiliate_commission = v,
    },
    FieldSpec {
        label: "Marketing (% of Revenue)",
        kind: FieldKind::Fraction,
        get: |p| p.marketing_percentage,
        set: |p, v| p.marketing_percentage = v,
    },
    FieldSpec {
        label: "Other Expenses (% of Revenue)",
        kind: FieldKind::Fraction,
        get: |p| p.other_expenses_percentage,
        set: |p, v| p.other_expenses_percentage = v,
    },
    FieldSpec {
        label: "Infrastructure Cost per User ($)",
        kind: FieldKind::Currency,
        get: |p| p.infrastructure_cost_per_user,
        set: |p, v| p.infrastructure_cost_per_user = v,
    },
    FieldSpec {
        label: "Base Salary ($)",
        kind: FieldKind::Currency,
        get: |p| p.base_salary,
        set: |p, v| p.base_salary = v,
    },
    FieldSpec {
        label: "Annual Salary Increase (%)",
        kind: FieldKind::Fraction,
        get: |p| p.salary_increase,
        set: |p, v| p.salary_increase = v,
    },
];

impl FieldSpec {
    /// Value in display units (fractions come back as percentages).
    pub fn display_value(&self, params: &ParameterSet) -> f64 {
        match self.kind {
            FieldKind::Fraction => (self.get)(params) * 100.0,
            _ => (self.get)(params),
        }
    }

    /// Rendered value for the form.
    pub fn display(&self, params: &ParameterSet) -> String {
        let value = self.display_value(params);
        match self.kind {
            FieldKind::Count => format!("{}", value as u64),
            FieldKind::Currency => format!("{value:.2}"),
            FieldKind::Fraction => format!("{value:.1}"),
        }
    }

    /// Initial edit-buffer contents when the field enters editing.
    pub fn edit_value(&self, params: &ParameterSet) -> String {
        let value = self.display_value(params);
        match self.kind {
            FieldKind::Count => format!("{}", value as u64),
            // Shortest float form, so editing starts without padded zeros
            _ => format!("{value}"),
        }
    }

    /// Commit raw input in display units back into the parameter set.
    ///
    /// Only the widget-level constraints apply: counts round to whole
    /// numbers, currency floors at zero, percentages clamp to [0, 100] and
    /// divide down to the stored fraction.
    pub fn commit(&self, params: &mut ParameterSet, input: &str) -> Result<(), ParseFloatError> {
        let raw: f64 = input.trim().parse()?;
        let value = match self.kind {
            FieldKind::Count => raw.max(0.0).round(),
            FieldKind::Currency => raw.max(0.0),
            FieldKind::Fraction => raw.clamp(0.0, 100.0) / 100.0,
        };
        (self.set)(params, value);
        Ok(())
    }
}
