//! Form Records
//!
//! One typed record per checklist, seeded from immutable templates and
//! reconciled field by field against fetched drafts.

mod checklist;
mod document;
mod expense;
mod mooring;
mod pre_transfer;
mod standing_orders;
mod timesheet;

pub use checklist::{reconcile_rows, rows_from_template, ChecklistRow, RowTemplate};
pub use document::DocumentInfo;
pub use expense::{ExpenseItem, ExpenseSheet, EXPENSE_ITEMS};
pub use mooring::{MooringReadiness, MOORING_ROWS};
pub use pre_transfer::{PreTransferChecklist, PRE_TRANSFER_ROWS};
pub use standing_orders::{StandingOrder, StandingOrders, STANDING_ORDER_TEXTS};
pub use timesheet::{Timesheet, TimesheetEntry, TIMESHEET_ACTIVITIES};

use serde_json::Value;

use crate::opref::FormMode;

/// Identifies one checklist form and its backend path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormKey {
    #[default]
    MooringReadiness,
    PreTransfer,
    Timesheet,
    ExpenseSheet,
    StandingOrders,
}

impl FormKey {
    pub const ALL: [FormKey; 5] = [
        FormKey::MooringReadiness,
        FormKey::PreTransfer,
        FormKey::Timesheet,
        FormKey::ExpenseSheet,
        FormKey::StandingOrders,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormKey::MooringReadiness => "mooring-readiness",
            FormKey::PreTransfer => "pre-transfer",
            FormKey::Timesheet => "timesheet",
            FormKey::ExpenseSheet => "expense-sheet",
            FormKey::StandingOrders => "standing-orders",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "pre-transfer" => FormKey::PreTransfer,
            "timesheet" => FormKey::Timesheet,
            "expense-sheet" => FormKey::ExpenseSheet,
            "standing-orders" => FormKey::StandingOrders,
            _ => FormKey::MooringReadiness,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            FormKey::MooringReadiness => "Mooring Readiness Checklist",
            FormKey::PreTransfer => "Pre-Transfer Cargo Checklist",
            FormKey::Timesheet => "Operation Timesheet",
            FormKey::ExpenseSheet => "Operation Expense Sheet",
            FormKey::StandingOrders => "Master's Standing Orders",
        }
    }
}

/// Seam every checklist record implements for the shared submission
/// life cycle.
pub trait FormRecord: Clone + 'static {
    const KEY: FormKey;

    /// Blank record seeded from the static template.
    fn blank() -> Self;

    /// Rebuild from a fetched draft, falling back to the template default
    /// for every missing or malformed field.
    fn from_draft(value: &Value) -> Self;

    fn operation_ref(&self) -> &str;
    fn set_operation_ref(&mut self, operation_ref: String);

    /// Outbound payload: empty dates as `null`, signature prefixes
    /// stripped, always `status: "DRAFT"`.
    fn to_payload(&self) -> Value;

    /// Post-submit reset. Update mode clears everything; create mode keeps
    /// the operation reference so a follow-up checklist can reuse it.
    fn reset_after_submit(&self, mode: FormMode) -> Self {
        let mut blank = Self::blank();
        if !mode.is_update() {
            blank.set_operation_ref(self.operation_ref().to_string());
        }
        blank
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_key_round_trip() {
        for key in FormKey::ALL {
            assert_eq!(FormKey::from_str(key.as_str()), key);
        }
        assert_eq!(FormKey::from_str("unknown"), FormKey::MooringReadiness);
    }

    #[test]
    fn test_reset_after_create_keeps_reference() {
        let mut record = MooringReadiness::blank();
        record.set_operation_ref("XYZ-1".to_string());
        record.location = "Gibraltar OPL".to_string();

        let reset = record.reset_after_submit(FormMode::Create);
        assert_eq!(reset.operation_ref(), "XYZ-1");
        assert_eq!(reset.location, "");
    }

    #[test]
    fn test_reset_after_update_clears_reference() {
        let mut record = MooringReadiness::blank();
        record.set_operation_ref("XYZ-1".to_string());

        let reset = record.reset_after_submit(FormMode::Update);
        assert_eq!(reset.operation_ref(), "");
    }
}
