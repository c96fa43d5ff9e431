//! Checklist Rows
//!
//! Row state with mutually exclusive affirmative / not-applicable toggles,
//! seeded from immutable templates and re-aligned by index on reload.

use serde::Serialize;
use serde_json::Value;

use crate::json::{bool_or, str_or};

/// Static definition of one checklist item. Templates are module constants
/// cloned into fresh per-instance state; instances never share rows.
pub struct RowTemplate {
    pub cl_number: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistRow {
    pub cl_number: String,
    pub description: String,
    pub checked: bool,
    pub not_applicable: bool,
    pub remarks: String,
}

impl ChecklistRow {
    pub fn from_template(template: &RowTemplate) -> Self {
        Self {
            cl_number: template.cl_number.to_string(),
            description: template.description.to_string(),
            checked: false,
            not_applicable: false,
            remarks: String::new(),
        }
    }

    /// Affirmative and not-applicable are mutually exclusive.
    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
        if checked {
            self.not_applicable = false;
        }
    }

    pub fn set_not_applicable(&mut self, not_applicable: bool) {
        self.not_applicable = not_applicable;
        if not_applicable {
            self.checked = false;
        }
    }
}

/// Clone a template into fresh per-instance row state.
pub fn rows_from_template(template: &[RowTemplate]) -> Vec<ChecklistRow> {
    template.iter().map(ChecklistRow::from_template).collect()
}

/// Re-align fetched rows against the template by index.
///
/// Row count, numbering and descriptions always come from the template;
/// only the editable status and remarks are taken from the draft, so a
/// short or corrupted backend array still yields a well-formed checklist.
pub fn reconcile_rows(template: &[RowTemplate], fetched: &[Value]) -> Vec<ChecklistRow> {
    template
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let mut row = ChecklistRow::from_template(item);
            if let Some(value) = fetched.get(index) {
                row.remarks = str_or(value, "remarks", "");
                row.set_not_applicable(bool_or(value, "notApplicable", false));
                row.set_checked(bool_or(value, "checked", false));
            }
            row
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const TEMPLATE: &[RowTemplate] = &[
        RowTemplate { cl_number: "1", description: "First item" },
        RowTemplate { cl_number: "2", description: "Second item" },
        RowTemplate { cl_number: "3", description: "Third item" },
    ];

    #[test]
    fn test_checked_clears_not_applicable() {
        let mut row = ChecklistRow::from_template(&TEMPLATE[0]);
        row.set_not_applicable(true);
        assert!(row.not_applicable);

        row.set_checked(true);
        assert!(row.checked);
        assert!(!row.not_applicable);
    }

    #[test]
    fn test_not_applicable_clears_checked() {
        let mut row = ChecklistRow::from_template(&TEMPLATE[0]);
        row.set_checked(true);

        row.set_not_applicable(true);
        assert!(row.not_applicable);
        assert!(!row.checked);
    }

    #[test]
    fn test_unchecking_leaves_other_flag_alone() {
        let mut row = ChecklistRow::from_template(&TEMPLATE[0]);
        row.set_not_applicable(true);
        row.set_checked(false);
        assert!(row.not_applicable);
    }

    #[test]
    fn test_rows_from_template_are_independent() {
        let mut first = rows_from_template(TEMPLATE);
        let second = rows_from_template(TEMPLATE);
        first[0].set_checked(true);
        assert!(!second[0].checked);
    }

    #[test]
    fn test_reconcile_short_backend_array() {
        let fetched = vec![json!({ "checked": true, "remarks": "ok" })];
        let rows = reconcile_rows(TEMPLATE, &fetched);

        assert_eq!(rows.len(), 3);
        assert!(rows[0].checked);
        assert_eq!(rows[0].remarks, "ok");
        assert!(!rows[1].checked);
        assert_eq!(rows[2].cl_number, "3");
    }

    #[test]
    fn test_reconcile_ignores_extra_backend_rows() {
        let fetched = vec![json!({}), json!({}), json!({}), json!({ "checked": true })];
        assert_eq!(reconcile_rows(TEMPLATE, &fetched).len(), 3);
    }

    #[test]
    fn test_reconcile_repairs_contradictory_flags() {
        // Backend claims both; affirmative wins and exclusion is restored.
        let fetched = vec![json!({ "checked": true, "notApplicable": true })];
        let rows = reconcile_rows(TEMPLATE, &fetched);
        assert!(rows[0].checked);
        assert!(!rows[0].not_applicable);
    }

    #[test]
    fn test_reconcile_template_owns_descriptions() {
        let fetched = vec![json!({ "clNumber": "99", "description": "tampered" })];
        let rows = reconcile_rows(TEMPLATE, &fetched);
        assert_eq!(rows[0].cl_number, "1");
        assert_eq!(rows[0].description, "First item");
    }
}
