//! Static filter configuration supplied by the embedding page.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::filter_condition::FilterParseError;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FilterInputType {
    #[default]
    Select,
    Text,
}

/// Legal value domain of one query builder field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    pub field: String,
    pub options: Vec<String>,
    #[serde(default, rename = "type")]
    pub input_type: FilterInputType,
}

impl FilterConfig {
    pub fn select(field: impl Into<String>, options: &[&str]) -> Self {
        Self {
            field: field.into(),
            options: options.iter().map(|o| o.to_string()).collect(),
            input_type: FilterInputType::Select,
        }
    }

    pub fn list_from_json(json: &str) -> Result<Vec<Self>, FilterParseError> {
        let configs: Vec<Self> = serde_json::from_str(json)?;
        validate_unique_fields(configs.iter().map(|c| c.field.as_str()))?;
        Ok(configs)
    }

    /// Whether `value` may be used as a filter value for this field.
    /// Text fields accept anything non-empty.
    pub fn accepts(&self, value: &str) -> bool {
        match self.input_type {
            FilterInputType::Select => self.options.iter().any(|o| o == value),
            FilterInputType::Text => !value.trim().is_empty(),
        }
    }

    /// Options whose text contains `search_term`, ignoring case.
    pub fn options_matching(&self, search_term: &str) -> Vec<String> {
        let needle = search_term.to_lowercase();
        self.options
            .iter()
            .filter(|option| option.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}

pub fn find_config<'a>(configs: &'a [FilterConfig], field: &str) -> Option<&'a FilterConfig> {
    configs.iter().find(|c| c.field == field)
}


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOption {
    pub label: String,
    pub value: String,
}

/// One entry in the table toolbar's "Add filter" menu, bound to a grid column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnFilterDef {
    pub column_id: String,
    pub title: String,
    #[serde(default)]
    pub column_label: Option<String>,
    pub options: Vec<FilterOption>,
}

impl ColumnFilterDef {
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, FilterParseError> {
        let defs: Vec<Self> = serde_json::from_str(json)?;
        validate_unique_fields(defs.iter().map(|d| d.column_id.as_str()))?;
        Ok(defs)
    }

    pub fn label(&self) -> &str {
        self.column_label.as_deref().unwrap_or(&self.title)
    }

    pub fn option_for(&self, value: &str) -> Option<&FilterOption> {
        self.options.iter().find(|o| o.value == value)
    }

    pub fn options_matching(&self, search_term: &str) -> Vec<FilterOption> {
        let needle = search_term.to_lowercase();
        self.options
            .iter()
            .filter(|o| o.label.to_lowercase().contains(&needle) || o.value.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}

pub fn find_column_def<'a>(defs: &'a [ColumnFilterDef], column_id: &str) -> Option<&'a ColumnFilterDef> {
    defs.iter().find(|d| d.column_id == column_id)
}

pub fn validate_unique_fields<'a>(fields: impl IntoIterator<Item = &'a str>) -> Result<(), FilterParseError> {
    let mut seen = BTreeSet::new();
    for field in fields {
        if !seen.insert(field) {
            return Err(FilterParseError::DuplicateField(field.to_string()));
        }
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_defaults_to_select() {
        let configs = FilterConfig::list_from_json(r#"[{"field": "status", "options": ["active"]}]"#).unwrap();
        assert_eq!(configs[0].input_type, FilterInputType::Select);
        assert!(configs[0].accepts("active"));
        assert!(!configs[0].accepts("archived"));
    }

    #[test]
    fn text_fields_accept_free_values() {
        let config = FilterConfig { field: "title".into(), options: vec![], input_type: FilterInputType::Text };
        assert!(config.accepts("anything"));
        assert!(!config.accepts("   "));
    }

    #[test]
    fn rejects_duplicate_fields() {
        let err = FilterConfig::list_from_json(
            r#"[{"field": "status", "options": []}, {"field": "status", "options": [], "type": "text"}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, FilterParseError::DuplicateField(f) if f == "status"));
    }

    #[test]
    fn option_search_ignores_case() {
        let config = FilterConfig::select("status", &["Pending", "active", "inactive"]);
        assert_eq!(config.options_matching("ACT"), vec!["active".to_string(), "inactive".to_string()]);
        assert_eq!(config.options_matching("").len(), 3);
    }

    #[test]
    fn column_label_falls_back_to_title() {
        let def = ColumnFilterDef { column_id: "status".into(), title: "Status".into(), column_label: None, options: vec![] };
        assert_eq!(def.label(), "Status");
    }
}
