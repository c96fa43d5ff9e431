//! Mooring Readiness Checklist
//!
//! Completed before run-in and mooring alongside. One vessel holds a
//! constant heading while the other manoeuvres.

use serde_json::{json, Value};

use crate::dates::{date_to_json, normalize_date};
use crate::forms::{
    reconcile_rows, rows_from_template, ChecklistRow, DocumentInfo, FormKey, FormRecord,
    RowTemplate,
};
use crate::json::{arr, obj, str_or};
use crate::opref::trim_operation_ref;
use crate::signature::signature_to_json;

const FORM_NO: &str = "STS-CL-02";
const ISSUE_DATE: &str = "2024-03-01";
const APPROVED_BY: &str = "Marine Operations Superintendent";

pub const MOORING_ROWS: &[RowTemplate] = &[
    RowTemplate {
        cl_number: "1",
        description: "Primary fenders positioned and secured as per the mooring plan",
    },
    RowTemplate {
        cl_number: "2",
        description: "Secondary fenders rigged where required",
    },
    RowTemplate {
        cl_number: "3",
        description: "Fender pennants and securing arrangements inspected and in good order",
    },
    RowTemplate {
        cl_number: "4",
        description: "Mooring lines prepared and flaked out as per the agreed mooring plan",
    },
    RowTemplate {
        cl_number: "5",
        description: "Messenger lines, rope stoppers and heaving lines ready at each station",
    },
    RowTemplate {
        cl_number: "6",
        description: "Crew briefed on the mooring sequence and standing by at stations",
    },
    RowTemplate {
        cl_number: "7",
        description: "Communications established and tested between both vessels",
    },
    RowTemplate {
        cl_number: "8",
        description: "Navigation signals and day shapes displayed as required",
    },
    RowTemplate {
        cl_number: "9",
        description: "Speed and course of approach agreed with the other ship",
    },
    RowTemplate {
        cl_number: "10",
        description: "Deck and overside lighting adequate for night operations",
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct MooringReadiness {
    pub operation_ref: String,
    pub document_info: DocumentInfo,
    pub constant_heading_ship: String,
    pub manoeuvring_ship: String,
    pub location: String,
    pub date: String,
    pub checklist: Vec<ChecklistRow>,
    pub remarks: String,
    pub master_name: String,
    pub master_signature: String,
}

fn default_document() -> DocumentInfo {
    DocumentInfo::new(FORM_NO, ISSUE_DATE, APPROVED_BY)
}

impl FormRecord for MooringReadiness {
    const KEY: FormKey = FormKey::MooringReadiness;

    fn blank() -> Self {
        Self {
            operation_ref: String::new(),
            document_info: default_document(),
            constant_heading_ship: String::new(),
            manoeuvring_ship: String::new(),
            location: String::new(),
            date: String::new(),
            checklist: rows_from_template(MOORING_ROWS),
            remarks: String::new(),
            master_name: String::new(),
            master_signature: String::new(),
        }
    }

    fn from_draft(value: &Value) -> Self {
        let vessels = obj(value, "vessels");
        Self {
            operation_ref: trim_operation_ref(&str_or(value, "operationRef", "")),
            document_info: DocumentInfo::from_draft(obj(value, "documentInfo"), &default_document()),
            constant_heading_ship: str_or(vessels, "constantHeadingShip", ""),
            manoeuvring_ship: str_or(vessels, "manoeuvringShip", ""),
            location: str_or(value, "location", ""),
            date: normalize_date(&str_or(value, "date", "")),
            checklist: reconcile_rows(MOORING_ROWS, arr(value, "checklist")),
            remarks: str_or(value, "remarks", ""),
            master_name: str_or(value, "masterName", ""),
            master_signature: str_or(value, "masterSignature", ""),
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
                "constantHeadingShip": self.constant_heading_ship,
                "manoeuvringShip": self.manoeuvring_ship,
            },
            "location": self.location,
            "date": date_to_json(&self.date),
            "checklist": self.checklist,
            "remarks": self.remarks,
            "masterName": self.master_name,
            "masterSignature": signature_to_json(&self.master_signature),
            "status": "DRAFT",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_blank_is_fully_seeded() {
        let record = MooringReadiness::blank();
        assert_eq!(record.checklist.len(), MOORING_ROWS.len());
        assert_eq!(record.document_info.form_no, FORM_NO);
        assert!(record.operation_ref.is_empty());
    }

    #[test]
    fn test_from_draft_tolerates_malformed_fields() {
        // Wrong types and missing sections everywhere.
        let draft = json!({
            "operationRef": "STS-77, ",
            "vessels": "not an object",
            "date": 20240301,
            "checklist": { "bogus": true },
            "remarks": ["a"],
        });
        let record = MooringReadiness::from_draft(&draft);

        assert_eq!(record.operation_ref, "STS-77");
        assert_eq!(record.constant_heading_ship, "");
        assert_eq!(record.date, "");
        assert_eq!(record.checklist.len(), MOORING_ROWS.len());
        assert_eq!(record.remarks, "");
        assert_eq!(record.document_info.approved_by, APPROVED_BY);
    }

    #[test]
    fn test_from_draft_copies_known_fields() {
        let draft = json!({
            "operationRef": "STS-42",
            "vessels": { "constantHeadingShip": "MT Aurora", "manoeuvringShip": "MT Borealis" },
            "location": "Skaw anchorage",
            "date": "2024-05-10T06:00:00Z",
            "checklist": [{ "checked": true, "remarks": "verified" }],
            "masterName": "J. Halvorsen",
        });
        let record = MooringReadiness::from_draft(&draft);

        assert_eq!(record.constant_heading_ship, "MT Aurora");
        assert_eq!(record.date, "2024-05-10");
        assert!(record.checklist[0].checked);
        assert_eq!(record.checklist[0].remarks, "verified");
        assert_eq!(record.master_name, "J. Halvorsen");
    }

    #[test]
    fn test_payload_shape() {
        let mut record = MooringReadiness::blank();
        record.operation_ref = "STS-42".to_string();
        record.master_signature = "data:image/png;base64,AAAA".to_string();
        let payload = record.to_payload();

        assert_eq!(payload["operationRef"], "STS-42");
        assert_eq!(payload["status"], "DRAFT");
        // Empty operation date goes out as null, not "".
        assert_eq!(payload["date"], Value::Null);
        assert_eq!(payload["masterSignature"], "AAAA");
        assert_eq!(payload["checklist"].as_array().map(Vec::len), Some(MOORING_ROWS.len()));
        assert_eq!(payload["checklist"][0]["clNumber"], "1");
        assert_eq!(payload["checklist"][0]["notApplicable"], false);
    }
}
