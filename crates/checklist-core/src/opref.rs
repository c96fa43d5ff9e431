//! Operation Reference Resolution
//!
//! Parses the page query string into the operation reference and form mode
//! consumed by every checklist page.

use percent_encoding::percent_decode_str;

/// Create vs update workflow mode.
///
/// Only the exact query value `mode=update` switches a page into update
/// mode; anything else (including an absent parameter) means create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Update,
}

impl FormMode {
    pub fn from_query(mode: Option<&str>) -> Self {
        match mode {
            Some("update") => FormMode::Update,
            _ => FormMode::Create,
        }
    }

    pub fn is_update(&self) -> bool {
        matches!(self, FormMode::Update)
    }
}

/// Trim surrounding whitespace and strip at most one trailing comma.
///
/// References arrive as `ABC-123,` when copied out of spreadsheet rows.
pub fn trim_operation_ref(raw: &str) -> String {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_suffix(',').unwrap_or(trimmed);
    trimmed.trim().to_string()
}

/// Query parameters consumed by the form pages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageQuery {
    /// Trimmed operation reference; `None` when empty after trimming.
    pub operation_ref: Option<String>,
    pub mode: FormMode,
}

impl PageQuery {
    /// Parse a raw query string, with or without the leading `?`.
    pub fn parse(search: &str) -> Self {
        let search = search.strip_prefix('?').unwrap_or(search);
        let mut operation_ref = None;
        let mut mode = None;

        for pair in search.split('&') {
            if pair.is_empty() {
                continue;
            }
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = value.replace('+', " ");
            let value = percent_decode_str(&value).decode_utf8_lossy().into_owned();
            match key {
                "operationRef" => {
                    let reference = trim_operation_ref(&value);
                    if !reference.is_empty() {
                        operation_ref = Some(reference);
                    }
                }
                "mode" => mode = Some(value),
                _ => {}
            }
        }

        Self {
            operation_ref,
            mode: FormMode::from_query(mode.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_strips_one_trailing_comma() {
        assert_eq!(trim_operation_ref("ABC-123,"), "ABC-123");
        assert_eq!(trim_operation_ref("  ABC-123 , "), "ABC-123");
        // Only one comma is stripped.
        assert_eq!(trim_operation_ref("ABC-123,,"), "ABC-123,");
    }

    #[test]
    fn test_trim_is_idempotent() {
        let once = trim_operation_ref("STS-2024-0042,");
        let twice = trim_operation_ref(&once);
        assert_eq!(once, twice);
        assert_eq!(trim_operation_ref("STS-2024-0042"), "STS-2024-0042");
    }

    #[test]
    fn test_trim_empty_input() {
        assert_eq!(trim_operation_ref(""), "");
        assert_eq!(trim_operation_ref(" , "), "");
    }

    #[test]
    fn test_parse_update_mode_with_comma() {
        let query = PageQuery::parse("?operationRef=ABC-123,&mode=update");
        assert_eq!(query.operation_ref.as_deref(), Some("ABC-123"));
        assert_eq!(query.mode, FormMode::Update);
    }

    #[test]
    fn test_parse_defaults_to_create() {
        assert_eq!(PageQuery::parse("").mode, FormMode::Create);
        assert_eq!(PageQuery::parse("?operationRef=X-1").mode, FormMode::Create);
        // Any non-literal mode value means create.
        assert_eq!(PageQuery::parse("?mode=edit").mode, FormMode::Create);
        assert_eq!(PageQuery::parse("?mode=UPDATE").mode, FormMode::Create);
    }

    #[test]
    fn test_parse_empty_ref_is_absent() {
        let query = PageQuery::parse("?operationRef=%20,%20&mode=update");
        assert_eq!(query.operation_ref, None);
        assert_eq!(query.mode, FormMode::Update);
    }

    #[test]
    fn test_parse_percent_encoded_ref() {
        let query = PageQuery::parse("?operationRef=STS%2F2024%2F7,");
        assert_eq!(query.operation_ref.as_deref(), Some("STS/2024/7"));
    }

    #[test]
    fn test_parse_plus_as_space() {
        let query = PageQuery::parse("operationRef=ABC+7");
        assert_eq!(query.operation_ref.as_deref(), Some("ABC 7"));
    }
}
