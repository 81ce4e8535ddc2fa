//! Search filter for listings.

use serde::{Deserialize, Serialize};

use super::model::Home;
use super::property_type::PropertyType;

/// Optional, conjunctive search criteria. Price bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HomeFilter {
    /// Exact city match.
    pub city: Option<String>,
    /// Lowest acceptable price.
    pub min_price: Option<f64>,
    /// Highest acceptable price.
    pub max_price: Option<f64>,
    /// Property type match.
    pub property_type: Option<PropertyType>,
}

impl HomeFilter {
    /// Check a listing against every provided criterion.
    pub fn matches(&self, home: &Home) -> bool {
        self.city.as_ref().is_none_or(|city| &home.city == city)
            && self.min_price.is_none_or(|min| home.price >= min)
            && self.max_price.is_none_or(|max| home.price <= max)
            && self
                .property_type
                .is_none_or(|property_type| home.property_type == property_type)
    }
}
