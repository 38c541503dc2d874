use crate::{catalog::CatalogRecord, error::Error as FretboardError};
use std::{cmp::Ordering, str::FromStr};

/// Values that stand for "no constraint" in categorical filters.
const ANY_VALUE_SENTINELS: [&str; 2] = ["all", "todos"];

/// Checks whether the categorical filter value means "no constraint".
pub fn is_any_value(value: &str) -> bool {
    let value = value.trim();
    value.is_empty()
        || ANY_VALUE_SENTINELS
            .iter()
            .any(|sentinel| sentinel.eq_ignore_ascii_case(value))
}

/// Numeric field the filtered catalog can be sorted by.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SortKey {
    Price,
    Rating,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Sort applied as the last stage of the filtered view. Only one sort can be active at a time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CatalogSort {
    pub key: SortKey,
    pub order: SortOrder,
}

impl CatalogSort {
    pub fn new(key: SortKey, order: SortOrder) -> Self {
        Self { key, order }
    }

    /// Compares two records, records without rating are compared as if they were rated `0`.
    pub fn compare<R: CatalogRecord>(&self, left: &R, right: &R) -> Ordering {
        let (left, right) = match self.key {
            SortKey::Price => (left.price(), right.price()),
            SortKey::Rating => (
                left.rating().unwrap_or_default(),
                right.rating().unwrap_or_default(),
            ),
        };

        match self.order {
            SortOrder::Asc => left.total_cmp(&right),
            SortOrder::Desc => right.total_cmp(&left),
        }
    }
}

impl FromStr for CatalogSort {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (key, order) = match value {
            "price-asc" => (SortKey::Price, SortOrder::Asc),
            "price-desc" => (SortKey::Price, SortOrder::Desc),
            "rating-asc" => (SortKey::Rating, SortOrder::Asc),
            "rating-desc" => (SortKey::Rating, SortOrder::Desc),
            _ => {
                return Err(FretboardError::client(format!(
                    "Unknown sort ({value}), expected one of: price-asc, price-desc, rating-asc, rating-desc."
                ))
                .into());
            }
        };

        Ok(Self::new(key, order))
    }
}

/// Set of currently active search, filter and sort parameters of a catalog. Absent fields don't
/// constrain the view.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogFilter<R: CatalogRecord> {
    /// Case-insensitive term searched for in the record text fields.
    pub search: Option<String>,
    /// Categorical constraints, a record must contain the value for every listed dimension.
    pub dimensions: Vec<(R::Dimension, String)>,
    /// Visibility flags that must be set on the record.
    pub flags: Vec<R::Flag>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub sort: Option<CatalogSort>,
}

impl<R: CatalogRecord> Default for CatalogFilter<R> {
    fn default() -> Self {
        Self {
            search: None,
            dimensions: vec![],
            flags: vec![],
            min_price: None,
            max_price: None,
            sort: None,
        }
    }
}

impl<R: CatalogRecord> CatalogFilter<R> {
    pub fn with_search<T: Into<String>>(self, term: T) -> Self {
        let term = term.into();
        Self {
            search: if term.trim().is_empty() {
                None
            } else {
                Some(term)
            },
            ..self
        }
    }

    /// Constrains the dimension to the specified value, replacing the previous constraint. The
    /// "all" sentinels remove the constraint instead.
    pub fn with_dimension<V: Into<String>>(mut self, dimension: R::Dimension, value: V) -> Self {
        let value = value.into();
        self.dimensions.retain(|(existing, _)| *existing != dimension);
        if !is_any_value(&value) {
            self.dimensions.push((dimension, value));
        }
        self
    }

    pub fn with_flag(mut self, flag: R::Flag) -> Self {
        if !self.flags.contains(&flag) {
            self.flags.push(flag);
        }
        self
    }

    pub fn with_min_price(self, min_price: f64) -> Self {
        Self {
            min_price: Some(min_price),
            ..self
        }
    }

    pub fn with_max_price(self, max_price: f64) -> Self {
        Self {
            max_price: Some(max_price),
            ..self
        }
    }

    pub fn with_sort(self, sort: CatalogSort) -> Self {
        Self {
            sort: Some(sort),
            ..self
        }
    }

    /// Checks whether the filter lets every record through in the original order.
    pub fn is_unconstrained(&self) -> bool {
        self.search
            .as_deref()
            .is_none_or(|term| term.trim().is_empty())
            && self.dimensions.iter().all(|(_, value)| is_any_value(value))
            && self.flags.is_empty()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.sort.is_none()
    }
}
