//! Operation Expense Sheet
//!
//! Costs incurred during the transfer, one line per service. Amounts are
//! derived, never entered directly.

use serde_json::{json, Value};

use crate::dates::{date_to_json, normalize_date};
use crate::forms::{DocumentInfo, FormKey, FormRecord};
use crate::json::{arr, f64_or, obj, str_or};
use crate::opref::trim_operation_ref;
use crate::signature::signature_to_json;

const FORM_NO: &str = "STS-EX-01";
const ISSUE_DATE: &str = "2024-03-01";
const APPROVED_BY: &str = "Marine Operations Superintendent";
const DEFAULT_CURRENCY: &str = "USD";

pub const EXPENSE_ITEMS: &[&str] = &[
    "Fender hire",
    "Hose hire",
    "Support craft",
    "Mooring master attendance",
    "Agency fees",
    "Sundries",
];

#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseItem {
    pub description: String,
    pub quantity: f64,
    pub unit_cost: f64,
}

impl ExpenseItem {
    fn from_template(description: &str) -> Self {
        Self {
            description: description.to_string(),
            quantity: 0.0,
            unit_cost: 0.0,
        }
    }

    pub fn amount(&self) -> f64 {
        self.quantity * self.unit_cost
    }

    fn to_payload(&self) -> Value {
        json!({
            "description": self.description,
            "quantity": self.quantity,
            "unitCost": self.unit_cost,
            "amount": self.amount(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseSheet {
    pub operation_ref: String,
    pub document_info: DocumentInfo,
    pub currency: String,
    pub items: Vec<ExpenseItem>,
    pub approved_by: String,
    pub signature: String,
    pub date: String,
}

fn default_document() -> DocumentInfo {
    DocumentInfo::new(FORM_NO, ISSUE_DATE, APPROVED_BY)
}

fn items_from_template() -> Vec<ExpenseItem> {
    EXPENSE_ITEMS.iter().map(|d| ExpenseItem::from_template(d)).collect()
}

fn reconcile_items(fetched: &[Value]) -> Vec<ExpenseItem> {
    EXPENSE_ITEMS
        .iter()
        .enumerate()
        .map(|(index, description)| {
            let mut item = ExpenseItem::from_template(description);
            if let Some(value) = fetched.get(index) {
                item.quantity = f64_or(value, "quantity", 0.0);
                item.unit_cost = f64_or(value, "unitCost", 0.0);
            }
            item
        })
        .collect()
}

impl ExpenseSheet {
    pub fn total(&self) -> f64 {
        self.items.iter().map(ExpenseItem::amount).sum()
    }
}

impl FormRecord for ExpenseSheet {
    const KEY: FormKey = FormKey::ExpenseSheet;

    fn blank() -> Self {
        Self {
            operation_ref: String::new(),
            document_info: default_document(),
            currency: DEFAULT_CURRENCY.to_string(),
            items: items_from_template(),
            approved_by: String::new(),
            signature: String::new(),
            date: String::new(),
        }
    }

    fn from_draft(value: &Value) -> Self {
        Self {
            operation_ref: trim_operation_ref(&str_or(value, "operationRef", "")),
            document_info: DocumentInfo::from_draft(obj(value, "documentInfo"), &default_document()),
            currency: str_or(value, "currency", DEFAULT_CURRENCY),
            items: reconcile_items(arr(value, "items")),
            approved_by: str_or(value, "approvedBy", ""),
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
            "currency": self.currency,
            "items": self.items.iter().map(ExpenseItem::to_payload).collect::<Vec<_>>(),
            "total": self.total(),
            "approvedBy": self.approved_by,
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
    fn test_total_sums_line_amounts() {
        let mut sheet = ExpenseSheet::blank();
        sheet.items[0].quantity = 2.0;
        sheet.items[0].unit_cost = 1500.0;
        sheet.items[1].quantity = 1.0;
        sheet.items[1].unit_cost = 800.5;
        assert_eq!(sheet.total(), 3800.5);
    }

    #[test]
    fn test_reconcile_items_malformed_numbers_default_to_zero() {
        let draft = json!({
            "items": [
                { "quantity": "two", "unitCost": 100 },
                { "quantity": 3, "unitCost": 40 },
            ],
        });
        let sheet = ExpenseSheet::from_draft(&draft);

        assert_eq!(sheet.items.len(), EXPENSE_ITEMS.len());
        assert_eq!(sheet.items[0].quantity, 0.0);
        assert_eq!(sheet.items[0].unit_cost, 100.0);
        assert_eq!(sheet.items[1].amount(), 120.0);
        assert_eq!(sheet.currency, "USD");
    }

    #[test]
    fn test_payload_carries_derived_amounts_and_total() {
        let mut sheet = ExpenseSheet::blank();
        sheet.items[2].quantity = 4.0;
        sheet.items[2].unit_cost = 250.0;
        let payload = sheet.to_payload();

        assert_eq!(payload["items"][2]["amount"], 1000.0);
        assert_eq!(payload["total"], 1000.0);
        assert_eq!(payload["currency"], "USD");
    }
}
