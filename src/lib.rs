use std::path::Path;

use crate::api::persona_dto::PersonasDto;
use crate::domain::persona::Persona;
use crate::error::Result;
use crate::loader::parser::{
    FileFormat, parse_csv_file, parse_json_file, parse_xml_file, write_csv_file, write_json_file, write_xml_file,
};
use crate::mapper::persona_mapper::{personas_from_dto, personas_to_dto};

pub mod api;
pub mod cli;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;
pub mod mapper;

/// Loads personas from an XML, JSON or CSV file, chosen by extension.
pub fn load_personas(file_path: impl AsRef<Path>) -> Result<Vec<Persona>> {
    let file_path = file_path.as_ref();
    let format = FileFormat::from_path(file_path)?;
    log::info!("Loading personas from '{}' as {:?}.", file_path.display(), format);

    let personas = match format {
        FileFormat::Xml => personas_from_dto(parse_xml_file::<PersonasDto>(file_path)?)?,
        FileFormat::Json => personas_from_dto(parse_json_file::<PersonasDto>(file_path)?)?,
        FileFormat::Csv => parse_csv_file(file_path)?,
    };

    log::info!("Loaded {} personas.", personas.len());
    Ok(personas)
}

/// Saves personas to an XML, JSON or CSV file, chosen by extension.
pub fn save_personas(file_path: impl AsRef<Path>, personas: &[Persona]) -> Result<()> {
    let file_path = file_path.as_ref();
    let format = FileFormat::from_path(file_path)?;
    log::info!("Saving {} personas to '{}' as {:?}.", personas.len(), file_path.display(), format);

    match format {
        FileFormat::Xml => write_xml_file(file_path, &personas_to_dto(personas)),
        FileFormat::Json => write_json_file(file_path, &personas_to_dto(personas)),
        FileFormat::Csv => write_csv_file(file_path, personas),
    }
}
