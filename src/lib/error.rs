use std::io;
use std::path::PathBuf;
use thiserror::Error as ThisError;

/// Fatal conditions of a filtering run.
///
/// Anything not listed here (malformed individual features, missing
/// properties, zero matches) is non-fatal and only excludes the
/// offending feature from the output.
#[derive(Debug, ThisError)]
pub enum Error {
    #[error("input file not found at {}: {}", .path.display(), .source)]
    InputNotFound { path: PathBuf, source: io::Error },
    #[error("could not decode JSON from the input: {0}")]
    InputDecode(serde_json::Error),
    #[error("root of the document is not a JSON object")]
    InvalidRoot,
    #[error("FeatureCollection is missing a 'features' array")]
    MalformedCollection,
    #[error("not a FeatureCollection or Feature (type: {})", .0.as_deref().unwrap_or("<missing>"))]
    UnrecognizedType(Option<String>),
    #[error("could not write the output file: {0}")]
    OutputWrite(io::Error),
}
