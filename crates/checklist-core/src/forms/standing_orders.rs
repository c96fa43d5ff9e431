//! Master's Standing Orders
//!
//! Watch-keeping orders in force for the duration of the operation; each
//! order is acknowledged by the responsible officer's initials.

use serde::Serialize;
use serde_json::{json, Value};

use crate::dates::{date_to_json, normalize_date};
use crate::forms::{DocumentInfo, FormKey, FormRecord};
use crate::json::{arr, bool_or, obj, str_or};
use crate::opref::trim_operation_ref;
use crate::signature::signature_to_json;

const FORM_NO: &str = "STS-SO-01";
const ISSUE_DATE: &str = "2024-03-01";
const APPROVED_BY: &str = "Marine Operations Superintendent";

pub const STANDING_ORDER_TEXTS: &[&str] = &[
    "Maintain a continuous listening watch on the agreed VHF working channel",
    "Monitor mooring lines and fender condition at least once every hour",
    "Advise the POAC immediately of any equipment failure or alarm",
    "Stop cargo operations if relative movement between vessels becomes excessive",
    "Suspend transfer and close manifold valves in the event of an electrical storm",
    "Keep main engines at immediate readiness throughout the operation",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingOrder {
    pub order_no: String,
    pub text: String,
    pub acknowledged: bool,
    pub initials: String,
}

impl StandingOrder {
    fn from_template(index: usize, text: &str) -> Self {
        Self {
            order_no: (index + 1).to_string(),
            text: text.to_string(),
            acknowledged: false,
            initials: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StandingOrders {
    pub operation_ref: String,
    pub document_info: DocumentInfo,
    pub vessel_name: String,
    pub master_name: String,
    pub orders: Vec<StandingOrder>,
    pub date: String,
    pub master_signature: String,
}

fn default_document() -> DocumentInfo {
    DocumentInfo::new(FORM_NO, ISSUE_DATE, APPROVED_BY)
}

fn orders_from_template() -> Vec<StandingOrder> {
    STANDING_ORDER_TEXTS
        .iter()
        .enumerate()
        .map(|(index, text)| StandingOrder::from_template(index, text))
        .collect()
}

fn reconcile_orders(fetched: &[Value]) -> Vec<StandingOrder> {
    STANDING_ORDER_TEXTS
        .iter()
        .enumerate()
        .map(|(index, text)| {
            let mut order = StandingOrder::from_template(index, text);
            if let Some(value) = fetched.get(index) {
                order.acknowledged = bool_or(value, "acknowledged", false);
                order.initials = str_or(value, "initials", "");
            }
            order
        })
        .collect()
}

impl FormRecord for StandingOrders {
    const KEY: FormKey = FormKey::StandingOrders;

    fn blank() -> Self {
        Self {
            operation_ref: String::new(),
            document_info: default_document(),
            vessel_name: String::new(),
            master_name: String::new(),
            orders: orders_from_template(),
            date: String::new(),
            master_signature: String::new(),
        }
    }

    fn from_draft(value: &Value) -> Self {
        Self {
            operation_ref: trim_operation_ref(&str_or(value, "operationRef", "")),
            document_info: DocumentInfo::from_draft(obj(value, "documentInfo"), &default_document()),
            vessel_name: str_or(value, "vesselName", ""),
            master_name: str_or(value, "masterName", ""),
            orders: reconcile_orders(arr(value, "orders")),
            date: normalize_date(&str_or(value, "date", "")),
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
            "vesselName": self.vessel_name,
            "masterName": self.master_name,
            "orders": self.orders,
            "date": date_to_json(&self.date),
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
    fn test_orders_are_numbered_from_template() {
        let record = StandingOrders::blank();
        assert_eq!(record.orders.len(), STANDING_ORDER_TEXTS.len());
        assert_eq!(record.orders[0].order_no, "1");
        assert_eq!(record.orders[5].order_no, "6");
    }

    #[test]
    fn test_reconcile_keeps_order_text() {
        let draft = json!({
            "orders": [
                { "text": "tampered", "acknowledged": true, "initials": "CO" },
            ],
        });
        let record = StandingOrders::from_draft(&draft);

        assert_eq!(record.orders[0].text, STANDING_ORDER_TEXTS[0]);
        assert!(record.orders[0].acknowledged);
        assert_eq!(record.orders[0].initials, "CO");
        assert!(!record.orders[1].acknowledged);
    }

    #[test]
    fn test_payload_serializes_orders_camel_case() {
        let payload = StandingOrders::blank().to_payload();
        assert_eq!(payload["orders"][0]["orderNo"], "1");
        assert_eq!(payload["orders"][0]["acknowledged"], false);
        assert_eq!(payload["status"], "DRAFT");
    }
}
