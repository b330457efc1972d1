use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found or could not be read: {0}")]
    IoError(#[from] std::io::Error),

    /// Any failure at the XML boundary: malformed input or a document that
    /// does not bind to the requested type.
    #[error("Failed to (de)serialize personas XML: {0}")]
    XmlError(String),

    #[error("Failed to (de)serialize personas JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to read or write personas CSV: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Failed to build persona model: {0}")]
    ModelConstructionError(String),

    #[error("Unsupported file format: '{0}' (expected xml, json or csv)")]
    UnsupportedFormat(String),
}

impl From<instant_xml::Error> for Error {
    fn from(e: instant_xml::Error) -> Self {
        Error::XmlError(e.to_string())
    }
}

impl From<xmlparser::Error> for Error {
    fn from(e: xmlparser::Error) -> Self {
        Error::XmlError(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
