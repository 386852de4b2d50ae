use serde::{Deserialize, Serialize};

use crate::models::propertymodel::Property;
use crate::services::pricing::normalize_price;

/// The search the listing grid runs against the property set. All fields
/// are optional; an absent field is "no constraint".
///
/// bedrooms/bathrooms/parking carry the raw UI strings: "Any", an exact
/// numeral ("3"), or an open-ended bucket ("5+").
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterSpec {
    pub location: Option<String>,
    pub price_min: Option<String>,
    pub price_max: Option<String>,
    pub bedrooms: Option<String>,
    pub bathrooms: Option<String>,
    pub parking: Option<String>,
}

/// "All" is the UI sentinel for an inactive location filter.
const LOCATION_ALL: &str = "all";
const RULE_ANY: &str = "any";

/// Evaluate one count rule ("Any" / "3" / "5+") against a feature value.
/// Unrecognized rule text never rejects a property.
fn feature_matches(value: u32, rule: &str) -> bool {
    let rule = rule.trim();
    if rule.is_empty() || rule.eq_ignore_ascii_case(RULE_ANY) {
        return true;
    }
    if let Some(prefix) = rule.strip_suffix('+') {
        return match prefix.trim().parse::<u32>() {
            Ok(min) => value >= min,
            Err(_) => true,
        };
    }
    match rule.parse::<u32>() {
        Ok(want) => value == want,
        Err(_) => true,
    }
}

fn location_matches(location_text: &str, rule: &str) -> bool {
    let rule = rule.trim();
    if rule.is_empty() || rule.eq_ignore_ascii_case(LOCATION_ALL) {
        return true;
    }
    // substring, not exact: "Kotham" matches "Kothamangalam"
    location_text.to_lowercase().contains(&rule.to_lowercase())
}

/// Pure inclusion predicate: does `property` pass every active rule of
/// `spec`? No cross-record state; safe to evaluate in any order.
pub fn matches(property: &Property, spec: &FilterSpec) -> bool {
    if let Some(location) = &spec.location {
        if !location_matches(&property.location_text, location) {
            return false;
        }
    }

    if let Some(rule) = &spec.bedrooms {
        if !feature_matches(property.features.bed, rule) {
            return false;
        }
    }
    if let Some(rule) = &spec.bathrooms {
        if !feature_matches(property.features.bath, rule) {
            return false;
        }
    }
    if let Some(rule) = &spec.parking {
        if !feature_matches(property.features.parking.unwrap_or(0), rule) {
            return false;
        }
    }

    let price = normalize_price(&property.price);
    if let Some(min) = spec.price_min.as_deref().filter(|v| !v.trim().is_empty()) {
        if price < normalize_price(min) {
            return false;
        }
    }
    if let Some(max) = spec.price_max.as_deref().filter(|v| !v.trim().is_empty()) {
        if price > normalize_price(max) {
            return false;
        }
    }

    true
}
