use super::report::Report;
use serde_json::Value;

/// The reporter is notified after this many processed features.
pub const PROGRESS_INTERVAL: usize = 10_000;

/// Selects features whose named property contains a region identifier.
#[derive(PartialEq, Debug, Clone)]
pub struct Selector {
    pub property: String,
    pub identifier: String,
}

impl Selector {
    pub fn new(property: &str, identifier: &str) -> Self {
        Selector {
            property: property.into(),
            identifier: identifier.into(),
        }
    }

    /// Name of the collection the kept features are gathered into.
    pub fn collection_name(&self) -> String {
        format!("{}_filtered_coastline", self.identifier)
    }

    fn matches(&self, name: &str) -> bool {
        name.to_lowercase().contains(&self.identifier.to_lowercase())
    }
}

/// Check a single feature against a [`Selector`].
///
/// A feature matches if it is an object carrying an object-valued
/// `properties` member whose selected property is a non-empty string
/// containing the identifier, case-insensitively. Anything else does
/// not match, it is never an error.
///
/// # Example
///
/// ```
/// use geojson_region_filter::filter::{Filter, Selector};
/// use serde_json::json;
///
/// let selector = Selector::new("STE_NAME21", "new south");
/// let feature = json!({
///     "type": "Feature",
///     "properties": { "STE_NAME21": "New South Wales" }
/// });
/// assert!(feature.filter(&selector));
/// ```
pub trait Filter {
    fn filter(&self, selector: &Selector) -> bool;
}

impl Filter for Value {
    fn filter(&self, selector: &Selector) -> bool {
        let properties = match self.get("properties").and_then(Value::as_object) {
            Some(properties) => properties,
            None => return false,
        };
        properties
            .get(&selector.property)
            .and_then(Value::as_str)
            .map(|name| !name.is_empty() && selector.matches(name))
            .unwrap_or(false)
    }
}

/// Run the filtering pass over the candidate features, in order.
///
/// Kept features are cloned verbatim, so the result is a subsequence
/// of the input with untouched content.
pub fn filter_features<'a>(
    features: impl Iterator<Item = &'a Value>,
    total: usize,
    selector: &Selector,
    report: &mut dyn Report,
) -> Vec<Value> {
    let mut kept = Vec::new();
    for (index, feature) in features.enumerate() {
        if (index + 1) % PROGRESS_INTERVAL == 0 {
            report.progress(index + 1, total);
        }
        if feature.filter(selector) {
            kept.push(feature.clone());
        }
    }
    report.finished(kept.len(), total);
    kept
}
