//! Search and filter state for item listings

use crate::enums::SortOrder;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive date window. Either bound may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn is_open(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 1000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    pub search: String,
    pub category: String,
    pub status: String,
    pub date_range: DateRange,
    pub sort_by: String,
    pub sort_order: SortOrder,
    /// Unique; order of insertion is kept for display only.
    pub tags: Vec<String>,
    pub price: PriceRange,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: "all".to_string(),
            status: "all".to_string(),
            date_range: DateRange::default(),
            sort_by: "createdAt".to_string(),
            sort_order: SortOrder::Desc,
            tags: Vec::new(),
            price: PriceRange::default(),
        }
    }
}

impl Filters {
    /// Overwrite only the fields present in `patch`.
    pub fn apply(&mut self, patch: FilterPatch) {
        let FilterPatch {
            search,
            category,
            status,
            date_range,
            sort_by,
            sort_order,
            tags,
            price,
        } = patch;

        if let Some(search) = search {
            self.search = search;
        }
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(status) = status {
            self.status = status;
        }
        if let Some(date_range) = date_range {
            self.date_range = date_range;
        }
        if let Some(sort_by) = sort_by {
            self.sort_by = sort_by;
        }
        if let Some(sort_order) = sort_order {
            self.sort_order = sort_order;
        }
        if let Some(tags) = tags {
            self.tags.clear();
            for tag in tags {
                self.add_tag(tag);
            }
        }
        if let Some(price) = price {
            self.price = price;
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Returns `false` when the tag was already present.
    pub fn add_tag(&mut self, tag: String) -> bool {
        if self.has_tag(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }

    pub fn toggle_sort_order(&mut self) {
        self.sort_order = self.sort_order.flipped();
    }

    /// True when every field still holds its start-up value.
    pub fn is_pristine(&self) -> bool {
        *self == Filters::default()
    }
}

/// Partial update for [`Filters`]. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceRange>,
}

impl FilterPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn date_range(mut self, date_range: DateRange) -> Self {
        self.date_range = Some(date_range);
        self
    }

    pub fn sort_by(mut self, sort_by: impl Into<String>) -> Self {
        self.sort_by = Some(sort_by.into());
        self
    }

    pub fn sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = Some(sort_order);
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn price(mut self, price: PriceRange) -> Self {
        self.price = Some(price);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_overwrites_only_given_fields() {
        let mut filters = Filters::default();
        filters.apply(FilterPatch::new().category("hvac").status("open"));
        assert_eq!(filters.category, "hvac");
        assert_eq!(filters.status, "open");
        assert_eq!(filters.search, "");
        assert_eq!(filters.sort_by, "createdAt");
        assert_eq!(filters.price, PriceRange::new(0.0, 1000.0));
    }

    #[test]
    fn test_patched_tags_stay_unique() {
        let mut filters = Filters::default();
        filters.apply(FilterPatch::new().tags(["pump", "roof", "pump"]));
        assert_eq!(filters.tags, vec!["pump", "roof"]);
    }

    #[test]
    fn test_tag_set_semantics() {
        let mut filters = Filters::default();
        assert!(filters.add_tag("urgent".into()));
        assert!(!filters.add_tag("urgent".into()));
        assert_eq!(filters.tags.len(), 1);
        assert!(filters.remove_tag("urgent"));
        assert!(!filters.remove_tag("urgent"));
        assert!(filters.is_pristine());
    }

    #[test]
    fn test_patch_deserializes_partial_json() {
        let patch: FilterPatch =
            serde_json::from_str(r#"{"sortOrder":"asc","price":{"min":5,"max":50}}"#).unwrap();
        assert_eq!(patch.sort_order, Some(SortOrder::Asc));
        assert_eq!(patch.price, Some(PriceRange::new(5.0, 50.0)));
        assert!(patch.search.is_none());
    }
}
