use self::document::{classify, Shape};
use self::error::Error;
use self::filter::{filter_features, Selector};
use self::geojson::Entity;
use self::output::Output;
use self::report::Report;
use serde_json::{from_reader, Value};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::iter::once;
use std::path::Path;

pub mod document;
pub mod error;
pub mod filter;
pub mod geojson;
pub mod output;
pub mod report;

/// Filter a parsed document down to the features matching `selector`.
///
/// The result is always a FeatureCollection named after the selector,
/// holding the kept features in their original order. It may be empty,
/// which is not an error.
pub fn filter_document(
    document: &Value,
    selector: &Selector,
    report: &mut dyn Report,
) -> Result<Entity, Error> {
    let features = match classify(document)? {
        Shape::Collection(features) => {
            report.collection(features.len());
            filter_features(features.iter(), features.len(), selector, report)
        }
        Shape::Single(feature) => {
            report.single_feature();
            filter_features(once(feature), 1, selector, report)
        }
        Shape::Geometry(geometry_type) => {
            report.geometry_only(geometry_type);
            Vec::new()
        }
    };
    Ok(Entity::FeatureCollection {
        name: selector.collection_name(),
        features,
    })
}

/// Parse a GeoJSON document from `file`, filter it and serialize the
/// resulting collection to `writer`.
pub fn process(
    file: impl Read,
    writer: &mut dyn Write,
    selector: &Selector,
    report: &mut dyn Report,
) -> Result<(), Error> {
    let document: Value = from_reader(file).map_err(Error::InputDecode)?;
    let collection = filter_document(&document, selector, report)?;
    collection.write_geojson(writer).map_err(Error::OutputWrite)
}

/// File-level wrapper around [`process`].
///
/// The output file is only created once the input has been parsed and
/// filtered, so a fatal error never leaves a file behind.
pub fn process_path(
    input: &Path,
    output: &Path,
    selector: &Selector,
    report: &mut dyn Report,
) -> Result<(), Error> {
    let file = File::open(input).map_err(|source| Error::InputNotFound {
        path: input.into(),
        source,
    })?;
    let document: Value = from_reader(BufReader::new(file)).map_err(Error::InputDecode)?;
    let collection = filter_document(&document, selector, report)?;

    let file = File::create(output).map_err(Error::OutputWrite)?;
    let mut writer = BufWriter::new(file);
    collection.write_geojson(&mut writer).map_err(Error::OutputWrite)?;
    writer.flush().map_err(Error::OutputWrite)
}

#[cfg(test)]
mod filter_document {
    use super::report::Silent;
    use super::*;
    use serde_json::json;

    #[test]
    fn keeps_matching_features_in_order() {
        let document = json!({
            "type": "FeatureCollection",
            "features": [
                { "type": "Feature", "properties": { "STE_NAME21": "New South Wales" }, "geometry": {} },
                { "type": "Feature", "properties": { "STE_NAME21": "Victoria" }, "geometry": {} }
            ]
        });
        let selector = Selector::new("STE_NAME21", "New South Wales");

        let collection = filter_document(&document, &selector, &mut Silent).unwrap();
        assert_eq!(collection.name(), "New South Wales_filtered_coastline");
        assert_eq!(collection.features().len(), 1);
        assert_eq!(collection.features()[0], document["features"][0]);
    }

    #[test]
    fn single_feature_document_matches_itself() {
        let document = json!({
            "type": "Feature",
            "properties": { "STE_NAME21": "nsw region" },
            "geometry": {}
        });
        let selector = Selector::new("STE_NAME21", "nsw");

        let collection = filter_document(&document, &selector, &mut Silent).unwrap();
        assert_eq!(collection.features().len(), 1);
        assert_eq!(collection.features()[0], document);
    }

    #[test]
    fn geometry_document_yields_empty_collection() {
        struct Warned {
            geometry_type: Option<String>,
        }

        impl Report for Warned {
            fn geometry_only(&mut self, geometry_type: &str) {
                self.geometry_type = Some(geometry_type.into());
            }
        }

        let document = json!({ "type": "Polygon", "coordinates": [] });
        let selector = Selector::new("STE_NAME21", "New South Wales");

        let mut warned = Warned {
            geometry_type: None,
        };
        let collection = filter_document(&document, &selector, &mut warned).unwrap();
        assert!(collection.features().is_empty());
        assert_eq!(collection.name(), "New South Wales_filtered_coastline");
        assert_eq!(warned.geometry_type.as_deref(), Some("Polygon"));
    }

    #[test]
    fn zero_matches_still_build_a_collection() {
        let document = json!({
            "type": "FeatureCollection",
            "features": [
                { "type": "Feature", "properties": { "STE_NAME21": "Victoria" }, "geometry": {} }
            ]
        });
        let selector = Selector::new("STE_NAME21", "Tasmania");

        let collection = filter_document(&document, &selector, &mut Silent).unwrap();
        assert_eq!(collection.name(), "Tasmania_filtered_coastline");
        assert!(collection.features().is_empty());
    }
}
