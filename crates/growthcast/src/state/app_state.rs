use growthcast_api::{GROWTH_YEARS, ParameterSet, YearlySummary};

use crate::fields::{INITIAL_FIELDS, PRICING_FIELDS};
use crate::state::Notification;
use crate::util::input::EditBuffer;

/// The three form sections, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    InitialValues,
    GrowthRates,
    Pricing,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::InitialValues, Section::GrowthRates, Section::Pricing];

    pub fn title(&self) -> &'static str {
        match self {
            Section::InitialValues => "Initial Values",
            Section::GrowthRates => "Monthly Growth Rates",
            Section::Pricing => "Pricing & Cost Parameters",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Section::InitialValues => 0,
            Section::GrowthRates => 1,
            Section::Pricing => 2,
        }
    }

    /// Number of focusable rows in this section. The growth section has one
    /// slider row per actor type per forecast year.
    pub fn row_count(&self) -> usize {
        match self {
            Section::InitialValues => INITIAL_FIELDS.len(),
            Section::GrowthRates => 3 * GROWTH_YEARS,
            Section::Pricing => PRICING_FIELDS.len(),
        }
    }

    pub fn next(&self) -> Section {
        Section::ALL[(self.index() + 1) % Section::ALL.len()]
    }

    pub fn prev(&self) -> Section {
        Section::ALL[(self.index() + Section::ALL.len() - 1) % Section::ALL.len()]
    }
}

/// Cursor and editing state for the parameter form.
#[derive(Debug)]
pub struct FormState {
    pub section: Section,
    /// Focused row within the section.
    pub row: usize,
    /// Per-section expanded flags, indexed by `Section::index`.
    pub expanded: [bool; 3],
    /// Inline edit buffer; `Some` while a scalar field is being typed into.
    pub editing: Option<EditBuffer>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            section: Section::InitialValues,
            row: 0,
            expanded: [true; 3],
            editing: None,
        }
    }
}

impl FormState {
    pub fn is_expanded(&self, section: Section) -> bool {
        self.expanded[section.index()]
    }

    pub fn toggle_expanded(&mut self) {
        self.expanded[self.section.index()] = !self.expanded[self.section.index()];
    }

    pub fn next_row(&mut self) {
        self.row = (self.row + 1) % self.section.row_count();
    }

    pub fn prev_row(&mut self) {
        let count = self.section.row_count();
        self.row = self.row.checked_sub(1).unwrap_or(count - 1);
    }

    pub fn next_section(&mut self) {
        self.section = self.section.next();
        self.row = 0;
    }

    pub fn prev_section(&mut self) {
        self.section = self.section.prev();
        self.row = 0;
    }
}

/// Main application state.
#[derive(Debug, Default)]
pub struct AppState {
    /// Local working copy of the model inputs. Overwritten wholesale when
    /// the startup fetch succeeds, otherwise these defaults stand.
    pub params: ParameterSet,
    pub form: FormState,
    pub notification: Notification,
    /// True while a submission is in flight; the submit key is ignored
    /// until the worker reports back.
    pub submitting: bool,
    /// Set on every edit, cleared when the service accepts a submission.
    pub dirty: bool,
    /// Latest forecast summary returned by the service.
    pub last_summary: Option<YearlySummary>,
    pub exit: bool,
}

impl AppState {
    /// Record a field edit for the unsaved-changes indicator.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
