//! Ordered field -> entries mapping shared by both filter stores.
//!
//! A field never maps to an empty list: removing the last entry of a field
//! removes the field itself, so "no filters" is always the empty set.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, de};

use crate::filter_condition::FilterParseError;


#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ActiveFilterSet<E> {
    fields: IndexMap<String, Vec<E>>,
}

impl<E> Default for ActiveFilterSet<E> {
    fn default() -> Self {
        Self { fields: IndexMap::new() }
    }
}

impl<E> ActiveFilterSet<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Total number of entries across all fields.
    pub fn len(&self) -> usize {
        self.fields.values().map(Vec::len).sum()
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&[E]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    /// Fields in first-insertion order, each with its entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[E])> {
        self.fields.iter().map(|(field, entries)| (field.as_str(), entries.as_slice()))
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn entries(&self) -> impl Iterator<Item = &E> {
        self.fields.values().flatten()
    }

    pub fn push(&mut self, field: &str, entry: E) {
        match self.fields.get_mut(field) {
            Some(entries) => entries.push(entry),
            None => {
                self.fields.insert(field.to_string(), vec![entry]);
            }
        }
    }

    /// Removes the first entry of `field` matching `pred`.
    pub fn remove_first(&mut self, field: &str, pred: impl Fn(&E) -> bool) -> Option<E> {
        let entries = self.fields.get_mut(field)?;
        let idx = entries.iter().position(|e| pred(e))?;
        let removed = entries.remove(idx);
        if entries.is_empty() {
            self.fields.shift_remove(field);
        }
        Some(removed)
    }

    /// Removes the first entry in any field matching `pred`, returning its field.
    pub fn remove_first_anywhere(&mut self, pred: impl Fn(&E) -> bool) -> Option<(String, E)> {
        let field = self
            .fields
            .iter()
            .find(|(_, entries)| entries.iter().any(|e| pred(e)))
            .map(|(field, _)| field.clone())?;
        let removed = self.remove_first(&field, pred)?;
        Some((field, removed))
    }

    /// Applies `update` to the first entry of `field` matching `pred`.
    pub fn update_first(&mut self, field: &str, pred: impl Fn(&E) -> bool, update: impl FnOnce(&mut E)) -> bool {
        let Some(entries) = self.fields.get_mut(field) else { return false };
        let Some(entry) = entries.iter_mut().find(|e| pred(e)) else { return false };
        update(entry);
        true
    }

    pub fn remove_field(&mut self, field: &str) -> Option<Vec<E>> {
        self.fields.shift_remove(field)
    }

    pub fn clear(&mut self) {
        self.fields.clear();
    }
}

impl<E: Clone> ActiveFilterSet<E> {
    /// Entries of `field`, or `None` when the field is unfiltered.
    pub fn snapshot(&self, field: &str) -> Option<Vec<E>> {
        self.fields.get(field).cloned()
    }

    pub fn flatten(&self) -> Vec<E> {
        self.entries().cloned().collect()
    }
}

impl<'de, E: Deserialize<'de>> Deserialize<'de> for ActiveFilterSet<E> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = IndexMap::<String, Vec<E>>::deserialize(deserializer)?;
        if let Some((field, _)) = fields.iter().find(|(_, entries)| entries.is_empty()) {
            return Err(de::Error::custom(FilterParseError::EmptyField(field.clone())));
        }
        Ok(Self { fields })
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter_condition::FilterCondition;
    use crate::filter_entry::FilterItem;

    #[test]
    fn field_order_follows_first_insertion() {
        let mut set = ActiveFilterSet::new();
        set.push("status", 1);
        set.push("type", 2);
        set.push("status", 3);
        assert_eq!(set.fields().collect::<Vec<_>>(), vec!["status", "type"]);
        assert_eq!(set.flatten(), vec![1, 3, 2]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn removing_last_entry_drops_the_field() {
        let mut set = ActiveFilterSet::new();
        set.push("status", 1);
        set.push("type", 2);
        assert_eq!(set.remove_first("status", |e| *e == 1), Some(1));
        assert!(!set.contains_field("status"));
        assert!(set.get("status").is_none());
        assert_eq!(set.fields().collect::<Vec<_>>(), vec!["type"]);
    }

    #[test]
    fn remove_takes_exactly_one_match() {
        let mut set = ActiveFilterSet::new();
        set.push("status", 7);
        set.push("status", 7);
        set.remove_first("status", |e| *e == 7);
        assert_eq!(set.get("status"), Some(&[7][..]));
        assert!(set.remove_first("status", |e| *e == 8).is_none());
        assert!(set.remove_first("missing", |_| true).is_none());
    }

    #[test]
    fn remove_anywhere_reports_field() {
        let mut set = ActiveFilterSet::new();
        set.push("status", 1);
        set.push("type", 2);
        assert_eq!(set.remove_first_anywhere(|e| *e == 2), Some(("type".to_string(), 2)));
        assert!(set.remove_first_anywhere(|e| *e == 2).is_none());
    }

    #[test]
    fn serializes_as_ordered_map() {
        let mut set = ActiveFilterSet::new();
        set.push("type", "task");
        set.push("status", "active");
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"{"type":["task"],"status":["active"]}"#);
    }

    #[test]
    fn deserializing_rejects_empty_fields() {
        let err = serde_json::from_str::<ActiveFilterSet<FilterItem>>(r#"{"status": []}"#).unwrap_err();
        assert!(err.to_string().contains("status"));

        let set: ActiveFilterSet<FilterItem> =
            serde_json::from_str(r#"{"status": [{"value": "todo", "condition": "is not"}]}"#).unwrap();
        assert_eq!(set.get("status"), Some(&[FilterItem::new("todo", FilterCondition::IsNot)][..]));
    }
}
