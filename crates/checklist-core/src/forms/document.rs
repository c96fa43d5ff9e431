//! Shared Document-Control Header
//!
//! Every paper checklist carries the same control block: form number,
//! issue date, approving authority.

use serde_json::{json, Value};

use crate::dates::{date_to_json, normalize_date};
use crate::json::str_or;

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentInfo {
    pub form_no: String,
    pub issue_date: String,
    pub approved_by: String,
}

impl DocumentInfo {
    pub fn new(form_no: &str, issue_date: &str, approved_by: &str) -> Self {
        Self {
            form_no: form_no.to_string(),
            issue_date: issue_date.to_string(),
            approved_by: approved_by.to_string(),
        }
    }

    /// Rebuild from a draft's `documentInfo` object, keeping the template
    /// default for any missing field.
    pub fn from_draft(value: &Value, default: &DocumentInfo) -> Self {
        let issue_date = normalize_date(&str_or(value, "issueDate", &default.issue_date));
        Self {
            form_no: str_or(value, "formNo", &default.form_no),
            issue_date,
            approved_by: str_or(value, "approvedBy", &default.approved_by),
        }
    }

    pub fn to_payload(&self) -> Value {
        json!({
            "formNo": self.form_no,
            "issueDate": date_to_json(&self.issue_date),
            "approvedBy": self.approved_by,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn default() -> DocumentInfo {
        DocumentInfo::new("STS-CL-02", "2024-03-01", "Marine Operations Superintendent")
    }

    #[test]
    fn test_from_draft_keeps_defaults_for_missing_fields() {
        let info = DocumentInfo::from_draft(&json!({ "formNo": "STS-CL-02 Rev.5" }), &default());
        assert_eq!(info.form_no, "STS-CL-02 Rev.5");
        assert_eq!(info.issue_date, "2024-03-01");
        assert_eq!(info.approved_by, "Marine Operations Superintendent");
    }

    #[test]
    fn test_from_draft_normalizes_issue_date() {
        let info = DocumentInfo::from_draft(
            &json!({ "issueDate": "2024-03-05T00:00:00Z" }),
            &default(),
        );
        assert_eq!(info.issue_date, "2024-03-05");
    }

    #[test]
    fn test_payload_empty_issue_date_is_null() {
        let mut info = default();
        info.issue_date.clear();
        assert_eq!(info.to_payload()["issueDate"], Value::Null);
    }
}
