use super::error::Error;
use serde_json::Value;

/// Raw geometry types a GeoJSON document may have at its root. They
/// carry no properties, so filtering them yields an empty collection.
pub const GEOMETRY_TYPES: [&str; 4] = ["Polygon", "MultiPolygon", "LineString", "MultiLineString"];

/// Candidate features of a parsed document, per its root `type` tag.
#[derive(Debug, PartialEq)]
pub enum Shape<'a> {
    Collection(&'a [Value]),
    Single(&'a Value),
    Geometry(&'a str),
}

/// Determine which features of a parsed document are up for filtering.
///
/// A FeatureCollection contributes its `features` array, a single
/// Feature contributes itself, a bare geometry contributes nothing.
/// Any other root shape is an error.
pub fn classify(document: &Value) -> Result<Shape, Error> {
    let object = document.as_object().ok_or(Error::InvalidRoot)?;
    let doc_type = object.get("type").and_then(Value::as_str);
    match doc_type {
        Some("FeatureCollection") => {
            let features = object
                .get("features")
                .and_then(Value::as_array)
                .ok_or(Error::MalformedCollection)?;
            Ok(Shape::Collection(features))
        }
        Some("Feature") => Ok(Shape::Single(document)),
        Some(name) if GEOMETRY_TYPES.contains(&name) => Ok(Shape::Geometry(name)),
        _ => Err(Error::UnrecognizedType(doc_type.map(String::from))),
    }
}
