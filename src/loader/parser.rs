use instant_xml::{FromXml, ToXml};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use xmlparser::{ElementEnd, Token};

use crate::domain::persona::{Persona, PersonaCsvRecord};
use crate::error::{Error, Result};

/// File formats personas can be imported from and exported to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Xml,
    Json,
    Csv,
}

impl FileFormat {
    /// Picks the format from the file extension, ignoring case.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path.extension().and_then(|e| e.to_str()).map(|e| e.to_lowercase());

        match extension.as_deref() {
            Some("xml") => Ok(FileFormat::Xml),
            Some("json") => Ok(FileFormat::Json),
            Some("csv") => Ok(FileFormat::Csv),
            _ => Err(Error::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Rejects input that is not a single complete XML document: unclosed or
/// mismatched elements, a second root, or content after the root.
///
/// The binding layer stops reading at the root's end tag, so this runs
/// before every XML bind.
pub fn check_well_formed(xml: &str) -> Result<()> {
    let mut open: Vec<(&str, &str)> = Vec::new();
    let mut root_closed = false;

    for token in xmlparser::Tokenizer::from(xml) {
        match token? {
            Token::ElementStart { prefix, local, .. } => {
                if root_closed {
                    return Err(Error::XmlError(format!("unexpected element '{}' after the root element", local.as_str())));
                }
                open.push((prefix.as_str(), local.as_str()));
            }
            Token::ElementEnd { end, .. } => {
                match end {
                    ElementEnd::Open => continue,
                    ElementEnd::Empty => {
                        open.pop();
                    }
                    ElementEnd::Close(prefix, local) => match open.pop() {
                        Some(name) if name == (prefix.as_str(), local.as_str()) => {}
                        Some((_, expected)) => {
                            return Err(Error::XmlError(format!(
                                "expected '</{}>', found '</{}>'",
                                expected,
                                local.as_str()
                            )));
                        }
                        None => {
                            return Err(Error::XmlError(format!("unmatched end tag '</{}>'", local.as_str())));
                        }
                    },
                }
                if open.is_empty() {
                    root_closed = true;
                }
            }
            Token::Text { text } if open.is_empty() && !text.as_str().trim().is_empty() => {
                return Err(Error::XmlError(format!("text outside the root element: '{}'", text.as_str().trim())));
            }
            _ => {}
        }
    }

    if let Some((_, unclosed)) = open.last() {
        return Err(Error::XmlError(format!("unexpected end of document, '<{}>' is not closed", unclosed)));
    }
    if !root_closed {
        return Err(Error::XmlError("document has no root element".to_string()));
    }
    Ok(())
}

/// Binds an XML document to `T` after checking it is well formed.
pub fn from_xml_str<T>(xml: &str) -> Result<T>
where
    T: for<'xml> FromXml<'xml>,
{
    check_well_formed(xml)?;
    let parsed_data: T = instant_xml::from_str(xml)?;
    Ok(parsed_data)
}

/// Parses an XML file into a given type `T`.
///
/// Errors are converted into `crate::error::Error` variants:
/// - `Error::IoError` if the file cannot be read.
/// - `Error::XmlError` if the document is malformed or does not bind to `T`.
pub fn parse_xml_file<T>(file_path: impl AsRef<Path>) -> Result<T>
where
    T: for<'xml> FromXml<'xml>,
{
    let data = fs::read_to_string(file_path)?;
    from_xml_str(&data)
}

pub fn write_xml_file<T: ToXml + ?Sized>(file_path: impl AsRef<Path>, value: &T) -> Result<()> {
    let xml = instant_xml::to_string(value)?;
    fs::write(file_path, xml)?;
    Ok(())
}

/// Parses a JSON file into a given type `T`.
///
/// Errors are converted into `crate::error::Error` variants:
/// - `Error::IoError` if the file cannot be read.
/// - `Error::JsonError` if the JSON is malformed.
pub fn parse_json_file<T: DeserializeOwned>(file_path: impl AsRef<Path>) -> Result<T> {
    let data = fs::read_to_string(file_path)?;
    let parsed_data: T = serde_json::from_str(&data)?;
    Ok(parsed_data)
}

pub fn write_json_file<T: Serialize + ?Sized>(file_path: impl AsRef<Path>, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(file_path, json)?;
    Ok(())
}

const CSV_HEADER: [&str; 5] = ["id", "nombre", "tipo", "edad", "modulo"];

/// Reads a CSV export with the header `id,nombre,tipo,edad,modulo`.
pub fn parse_csv_file(file_path: impl AsRef<Path>) -> Result<Vec<Persona>> {
    let mut reader = csv::Reader::from_path(file_path)?;

    let mut personas = Vec::new();
    for record in reader.deserialize::<PersonaCsvRecord>() {
        personas.push(Persona::try_from(record?)?);
    }
    Ok(personas)
}

pub fn write_csv_file(file_path: impl AsRef<Path>, personas: &[Persona]) -> Result<()> {
    // Header written by hand so an empty export still carries it.
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(file_path)?;
    writer.write_record(CSV_HEADER)?;
    for persona in personas {
        writer.serialize(persona.to_csv_record())?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(FileFormat::from_path("data/personas.XML").unwrap(), FileFormat::Xml);
        assert_eq!(FileFormat::from_path("personas.json").unwrap(), FileFormat::Json);
        assert_eq!(FileFormat::from_path("personas.csv").unwrap(), FileFormat::Csv);
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        assert!(matches!(FileFormat::from_path("personas.yaml"), Err(Error::UnsupportedFormat(_))));
        assert!(matches!(FileFormat::from_path("personas"), Err(Error::UnsupportedFormat(_))));
    }

    #[test]
    fn test_missing_csv_file_is_csv_error() {
        let result: Result<Vec<Persona>> = parse_csv_file("does/not/exist.csv");
        assert!(matches!(result, Err(Error::CsvError(_))));
    }

    #[test]
    fn test_missing_json_file_is_io_error() {
        let result: Result<serde_json::Value> = parse_json_file("does/not/exist.json");
        assert!(matches!(result, Err(Error::IoError(_))));
    }

    #[test]
    fn test_well_formed_documents_pass() {
        assert!(check_well_formed("<personas></personas>").is_ok());
        assert!(check_well_formed("<personas/>").is_ok());
        assert!(check_well_formed("<?xml version=\"1.0\"?>\n<personas>\n  <persona id=\"1\"/>\n</personas>\n").is_ok());
    }

    #[test]
    fn test_incomplete_documents_are_rejected() {
        let inputs = [
            "",
            "<personas>",
            "<personas><persona",
            "<personas><persona tipo=\"alumno\" id=\"1\"><nombre>A</nombre>",
            "<personas></persona>",
            "<personas></personas>trailing<junk",
            "<personas></personas>trailing",
            "<personas></personas><personas></personas>",
        ];

        for input in inputs {
            assert!(matches!(check_well_formed(input), Err(Error::XmlError(_))), "accepted: {input:?}");
        }
    }
}
