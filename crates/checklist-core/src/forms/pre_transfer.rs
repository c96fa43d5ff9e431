//! Pre-Transfer Cargo Checklist
//!
//! Completed by both vessels after mooring and before cargo transfer
//! commences.

use serde_json::{json, Value};

use crate::dates::{date_to_json, normalize_date};
use crate::forms::{
    reconcile_rows, rows_from_template, ChecklistRow, DocumentInfo, FormKey, FormRecord,
    RowTemplate,
};
use crate::json::{arr, obj, str_or};
use crate::opref::trim_operation_ref;
use crate::signature::signature_to_json;

const FORM_NO: &str = "STS-CL-04";
const ISSUE_DATE: &str = "2024-03-01";
const APPROVED_BY: &str = "Marine Operations Superintendent";

pub const PRE_TRANSFER_ROWS: &[RowTemplate] = &[
    RowTemplate {
        cl_number: "1",
        description: "Cargo hoses inspected, pressure tested and certificates sighted",
    },
    RowTemplate {
        cl_number: "2",
        description: "Hoses properly connected, supported and flanges fully bolted",
    },
    RowTemplate {
        cl_number: "3",
        description: "Cargo transfer plan agreed between both vessels",
    },
    RowTemplate {
        cl_number: "4",
        description: "Emergency shutdown and signal procedures agreed and tested",
    },
    RowTemplate {
        cl_number: "5",
        description: "Transfer rates, maximum manifold pressure and topping-off rate agreed",
    },
    RowTemplate {
        cl_number: "6",
        description: "Scuppers plugged and drip trays in position at manifolds",
    },
    RowTemplate {
        cl_number: "7",
        description: "Unused cargo and bunker manifolds blanked and fully bolted",
    },
    RowTemplate {
        cl_number: "8",
        description: "Fire-fighting equipment ready for immediate use at the manifold",
    },
    RowTemplate {
        cl_number: "9",
        description: "Communication tested between cargo control positions",
    },
    RowTemplate {
        cl_number: "10",
        description: "Tank venting arrangements agreed and closed-loading requirements met",
    },
    RowTemplate {
        cl_number: "11",
        description: "Smoking restrictions and designated smoking areas enforced",
    },
    RowTemplate {
        cl_number: "12",
        description: "Both vessels able to disconnect and unmoor at short notice",
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct PreTransferChecklist {
    pub operation_ref: String,
    pub document_info: DocumentInfo,
    pub discharging_ship: String,
    pub receiving_ship: String,
    pub cargo_name: String,
    pub cargo_quantity: String,
    pub transfer_rate: String,
    pub date: String,
    pub checklist: Vec<ChecklistRow>,
    pub remarks: String,
    pub discharging_master_signature: String,
    pub receiving_master_signature: String,
}

fn default_document() -> DocumentInfo {
    DocumentInfo::new(FORM_NO, ISSUE_DATE, APPROVED_BY)
}

impl FormRecord for PreTransferChecklist {
    const KEY: FormKey = FormKey::PreTransfer;

    fn blank() -> Self {
        Self {
            operation_ref: String::new(),
            document_info: default_document(),
            discharging_ship: String::new(),
            receiving_ship: String::new(),
            cargo_name: String::new(),
            cargo_quantity: String::new(),
            transfer_rate: String::new(),
            date: String::new(),
            checklist: rows_from_template(PRE_TRANSFER_ROWS),
            remarks: String::new(),
            discharging_master_signature: String::new(),
            receiving_master_signature: String::new(),
        }
    }

    fn from_draft(value: &Value) -> Self {
        let vessels = obj(value, "vessels");
        let transfer = obj(value, "transfer");
        let signatures = obj(value, "signatures");
        Self {
            operation_ref: trim_operation_ref(&str_or(value, "operationRef", "")),
            document_info: DocumentInfo::from_draft(obj(value, "documentInfo"), &default_document()),
            discharging_ship: str_or(vessels, "dischargingShip", ""),
            receiving_ship: str_or(vessels, "receivingShip", ""),
            cargo_name: str_or(transfer, "cargoName", ""),
            cargo_quantity: str_or(transfer, "cargoQuantity", ""),
            transfer_rate: str_or(transfer, "transferRate", ""),
            date: normalize_date(&str_or(value, "date", "")),
            checklist: reconcile_rows(PRE_TRANSFER_ROWS, arr(value, "checklist")),
            remarks: str_or(value, "remarks", ""),
            discharging_master_signature: str_or(signatures, "dischargingMaster", ""),
            receiving_master_signature: str_or(signatures, "receivingMaster", ""),
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
            "transfer": {
                "cargoName": self.cargo_name,
                "cargoQuantity": self.cargo_quantity,
                "transferRate": self.transfer_rate,
            },
            "date": date_to_json(&self.date),
            "checklist": self.checklist,
            "remarks": self.remarks,
            "signatures": {
                "dischargingMaster": signature_to_json(&self.discharging_master_signature),
                "receivingMaster": signature_to_json(&self.receiving_master_signature),
            },
            "status": "DRAFT",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_draft_reads_nested_sections() {
        let draft = json!({
            "operationRef": "STS-9",
            "transfer": { "cargoName": "Gasoil 0.1%S", "cargoQuantity": "28,500 MT" },
            "signatures": { "dischargingMaster": "AAAA" },
        });
        let record = PreTransferChecklist::from_draft(&draft);

        assert_eq!(record.cargo_name, "Gasoil 0.1%S");
        assert_eq!(record.cargo_quantity, "28,500 MT");
        assert_eq!(record.transfer_rate, "");
        assert_eq!(record.discharging_master_signature, "AAAA");
        assert_eq!(record.receiving_master_signature, "");
        assert_eq!(record.checklist.len(), PRE_TRANSFER_ROWS.len());
    }

    #[test]
    fn test_payload_signatures_default_to_null() {
        let record = PreTransferChecklist::blank();
        let payload = record.to_payload();
        assert_eq!(payload["signatures"]["dischargingMaster"], Value::Null);
        assert_eq!(payload["signatures"]["receivingMaster"], Value::Null);
        assert_eq!(payload["status"], "DRAFT");
    }
}
