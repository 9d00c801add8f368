//! Named feature values produced by extraction.
//!
//! A [`Feature`] is a name/value pair. Composite names are built with
//! [`Feature::create_name`], which joins the non-null components with `_`.
//! Every context strategy uses the same rule, so a feature produced by
//! `Preceding(0, 3)` at position 1 from an extractor named `pos` is called
//! `Preceding_0_3_1_pos`.
//!
//! # Examples
//!
//! ```
//! use spanfeat::feature::{Feature, FeatureValue};
//!
//! let name = Feature::create_name([Some("Preceding_0_3"), Some("1"), None]);
//! assert_eq!(name, "Preceding_0_3_1");
//!
//! let feature = Feature::new(name, "walked");
//! assert_eq!(feature.value, FeatureValue::Text("walked".to_string()));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// The value carried by a feature.
///
/// Floats compare and hash by bit pattern so that features can be used as
/// map keys.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl FeatureValue {
    /// Get the value as text, if it is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FeatureValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Get the value as an integer, if it is an integer value.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FeatureValue::Integer(value) => Some(*value),
            _ => None,
        }
    }
}

impl PartialEq for FeatureValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FeatureValue::Bool(a), FeatureValue::Bool(b)) => a == b,
            (FeatureValue::Integer(a), FeatureValue::Integer(b)) => a == b,
            (FeatureValue::Float(a), FeatureValue::Float(b)) => a.to_bits() == b.to_bits(),
            (FeatureValue::Text(a), FeatureValue::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for FeatureValue {}

impl Hash for FeatureValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            FeatureValue::Bool(value) => value.hash(state),
            FeatureValue::Integer(value) => value.hash(state),
            FeatureValue::Float(value) => value.to_bits().hash(state),
            FeatureValue::Text(value) => value.hash(state),
        }
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureValue::Bool(value) => write!(f, "{value}"),
            FeatureValue::Integer(value) => write!(f, "{value}"),
            FeatureValue::Float(value) => write!(f, "{value}"),
            FeatureValue::Text(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for FeatureValue {
    fn from(value: &str) -> Self {
        FeatureValue::Text(value.to_string())
    }
}

impl From<String> for FeatureValue {
    fn from(value: String) -> Self {
        FeatureValue::Text(value)
    }
}

impl From<i64> for FeatureValue {
    fn from(value: i64) -> Self {
        FeatureValue::Integer(value)
    }
}

impl From<usize> for FeatureValue {
    fn from(value: usize) -> Self {
        FeatureValue::Integer(value as i64)
    }
}

impl From<f64> for FeatureValue {
    fn from(value: f64) -> Self {
        FeatureValue::Float(value)
    }
}

impl From<bool> for FeatureValue {
    fn from(value: bool) -> Self {
        FeatureValue::Bool(value)
    }
}

/// A single extracted feature.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Feature {
    /// The feature name, absent for anonymous base features
    pub name: Option<String>,

    /// The feature value
    pub value: FeatureValue,
}

impl Feature {
    /// Create a named feature.
    pub fn new<S: Into<String>, V: Into<FeatureValue>>(name: S, value: V) -> Self {
        Feature {
            name: Some(name.into()),
            value: value.into(),
        }
    }

    /// Create a feature without a name.
    pub fn unnamed<V: Into<FeatureValue>>(value: V) -> Self {
        Feature {
            name: None,
            value: value.into(),
        }
    }

    /// Get the feature name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Join the non-null, non-empty components with `_`.
    ///
    /// Null and empty components are both skipped, wherever they appear, so no
    /// leading, doubled or trailing separator is left. If nothing remains the
    /// result is empty.
    pub fn create_name<'a, I>(components: I) -> String
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let mut name = String::new();
        for component in components.into_iter().flatten().filter(|c| !c.is_empty()) {
            if !name.is_empty() {
                name.push('_');
            }
            name.push_str(component);
        }
        name
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{name}={}", self.value),
            None => write!(f, "{}", self.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_create_name_skips_null_components() {
        assert_eq!(
            Feature::create_name([Some("Bag"), None, Some("Preceding_0_2"), None]),
            "Bag_Preceding_0_2"
        );
        assert_eq!(Feature::create_name([None, None]), "");
        assert_eq!(Feature::create_name([Some("Focus")]), "Focus");
    }

    #[test]
    fn test_create_name_skips_empty_components() {
        assert_eq!(Feature::create_name([Some(""), Some("x")]), "x");
        assert_eq!(Feature::create_name([Some("x"), Some("")]), "x");
        assert_eq!(Feature::create_name([Some("x"), Some(""), Some("y")]), "x_y");
        assert_eq!(Feature::create_name([Some(""), None]), "");
    }

    #[test]
    fn test_feature_equality_combines_name_and_value() {
        let a = Feature::new("pos", "NN");
        let b = Feature::new("pos", "NN");
        let c = Feature::new("pos", "VB");
        let d = Feature::unnamed("NN");

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);

        let set: HashSet<Feature> = [a, b, c, d].into_iter().collect();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_float_values_hash_by_bits() {
        let mut set = HashSet::new();
        set.insert(FeatureValue::Float(0.5));
        set.insert(FeatureValue::Float(0.5));
        set.insert(FeatureValue::Integer(0));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_feature_display() {
        assert_eq!(Feature::new("Focus", "man").to_string(), "Focus=man");
        assert_eq!(Feature::unnamed(3_i64).to_string(), "3");
        assert_eq!(FeatureValue::from(true).to_string(), "true");
    }

    #[test]
    fn test_feature_json() {
        let feature = Feature::new("Count_Covered_the", 2_usize);
        let json = serde_json::to_string(&feature).unwrap();
        assert_eq!(json, r#"{"name":"Count_Covered_the","value":2}"#);

        let parsed: Feature = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, feature);
    }
}
