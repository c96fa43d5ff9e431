//! Operation Timesheet
//!
//! Chronological log of the standard STS milestones, one row per activity.

use serde_json::{json, Value};

use crate::dates::{date_to_json, normalize_date};
use crate::forms::{DocumentInfo, FormKey, FormRecord};
use crate::json::{arr, obj, str_or};
use crate::opref::trim_operation_ref;
use crate::signature::signature_to_json;

const FORM_NO: &str = "STS-TS-01";
const ISSUE_DATE: &str = "2024-03-01";
const APPROVED_BY: &str = "Marine Operations Superintendent";

pub const TIMESHEET_ACTIVITIES: &[&str] = &[
    "POAC boarded",
    "Vessels commenced approach",
    "First line passed",
    "All fast alongside",
    "Hose connected",
    "Cargo transfer commenced",
    "Cargo transfer completed",
    "Hose drained and disconnected",
    "Vessels unmoored and clear",
    "POAC disembarked",
];

#[derive(Debug, Clone, PartialEq)]
pub struct TimesheetEntry {
    pub activity: String,
    pub date: String,
    pub time_from: String,
    pub time_to: String,
    pub remarks: String,
}

impl TimesheetEntry {
    fn from_template(activity: &str) -> Self {
        Self {
            activity: activity.to_string(),
            date: String::new(),
            time_from: String::new(),
            time_to: String::new(),
            remarks: String::new(),
        }
    }

    fn to_payload(&self) -> Value {
        json!({
            "activity": self.activity,
            "date": date_to_json(&self.date),
            "timeFrom": self.time_from,
            "timeTo": self.time_to,
            "remarks": self.remarks,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Timesheet {
    pub operation_ref: String,
    pub document_info: DocumentInfo,
    pub discharging_ship: String,
    pub receiving_ship: String,
    pub location: String,
    pub entries: Vec<TimesheetEntry>,
    pub prepared_by: String,
    pub signature: String,
    pub date: String,
}

fn default_document() -> DocumentInfo {
    DocumentInfo::new(FORM_NO, ISSUE_DATE, APPROVED_BY)
}

fn entries_from_template() -> Vec<TimesheetEntry> {
    TIMESHEET_ACTIVITIES
        .iter()
        .map(|activity| TimesheetEntry::from_template(activity))
        .collect()
}

/// Entries re-align by index like checklist rows: the activity column is
/// owned by the template, the timing columns come from the draft.
fn reconcile_entries(fetched: &[Value]) -> Vec<TimesheetEntry> {
    TIMESHEET_ACTIVITIES
        .iter()
        .enumerate()
        .map(|(index, activity)| {
            let mut entry = TimesheetEntry::from_template(activity);
            if let Some(value) = fetched.get(index) {
                entry.date = normalize_date(&str_or(value, "date", ""));
                entry.time_from = str_or(value, "timeFrom", "");
                entry.time_to = str_or(value, "timeTo", "");
                entry.remarks = str_or(value, "remarks", "");
            }
            entry
        })
        .collect()
}

impl FormRecord for Timesheet {
    const KEY: FormKey = FormKey::Timesheet;

    fn blank() -> Self {
        Self {
            operation_ref: String::new(),
            document_info: default_document(),
            discharging_ship: String::new(),
            receiving_ship: String::new(),
            location: String::new(),
            entries: entries_from_template(),
            prepared_by: String::new(),
            signature: String::new(),
            date: String::new(),
        }
    }

    fn from_draft(value: &Value) -> Self {
        let vessels = obj(value, "vessels");
        Self {
            operation_ref: trim_operation_ref(&str_or(value, "operationRef", "")),
            document_info: DocumentInfo::from_draft(obj(value, "documentInfo"), &default_document()),
            discharging_ship: str_or(vessels, "dischargingShip", ""),
            receiving_ship: str_or(vessels, "receivingShip", ""),
            location: str_or(value, "location", ""),
            entries: reconcile_entries(arr(value, "entries")),
            prepared_by: str_or(value, "preparedBy", ""),
            signature: str_or(value, "signature", ""),
            date: normalize_date(&str_or(value, "date", "")),
        }
    }

    fn operation_ref(&self) -> &str {
        &self.operation_ref
    }

    fn set_operation_ref(&mut self, operation_ref: String) {
        self.operation_ref = operation_ref;
    }

    fn to_payload(&self) -> Value {
        json!({
            "operationRef": self.operation_ref,
            "documentInfo": self.document_info.to_payload(),
            "vessels": {
                "dischargingShip": self.discharging_ship,
                "receivingShip": self.receiving_ship,
            },
            "location": self.location,
            "entries": self.entries.iter().map(TimesheetEntry::to_payload).collect::<Vec<_>>(),
            "preparedBy": self.prepared_by,
            "signature": signature_to_json(&self.signature),
            "date": date_to_json(&self.date),
            "status": "DRAFT",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_blank_has_one_entry_per_activity() {
        let record = Timesheet::blank();
        assert_eq!(record.entries.len(), TIMESHEET_ACTIVITIES.len());
        assert_eq!(record.entries[0].activity, "POAC boarded");
        assert!(record.entries[0].time_from.is_empty());
    }

    #[test]
    fn test_reconcile_entries_by_index() {
        let draft = json!({
            "entries": [
                { "date": "2024-05-10", "timeFrom": "06:00", "timeTo": "06:45" },
                { "timeFrom": "07:10" },
            ],
        });
        let record = Timesheet::from_draft(&draft);

        assert_eq!(record.entries.len(), TIMESHEET_ACTIVITIES.len());
        assert_eq!(record.entries[0].time_from, "06:00");
        assert_eq!(record.entries[0].date, "2024-05-10");
        assert_eq!(record.entries[1].time_from, "07:10");
        // Activity text always comes from the template.
        assert_eq!(record.entries[1].activity, "Vessels commenced approach");
        assert_eq!(record.entries[2].time_from, "");
    }

    #[test]
    fn test_payload_entry_dates_null_when_empty() {
        let payload = Timesheet::blank().to_payload();
        assert_eq!(payload["entries"][0]["date"], Value::Null);
        assert_eq!(payload["entries"][0]["timeFrom"], "");
        assert_eq!(payload["status"], "DRAFT");
    }
}
