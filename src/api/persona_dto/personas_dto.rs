use instant_xml::{FromXml, ToXml};
use serde::{Deserialize, Serialize};

use crate::api::persona_dto::persona_dto::PersonaDto;
use crate::error::Result;
use crate::loader::parser::from_xml_str;

/// Root `<personas>` wrapper around an ordered list of [`PersonaDto`].
///
/// Each entry is written inline as a `<persona>` sibling directly under the
/// root; there is no intermediate list element. Order follows document order.
///
/// The list is owned by the wrapper and handed out by borrow, so reads never
/// copy it. There is no setter: the list fixed at construction can only be
/// changed in place through [`PersonasDto::personas_mut`].
#[derive(Serialize, Deserialize, FromXml, ToXml, Debug, Clone, Default, PartialEq, Eq)]
#[xml(rename = "personas")]
pub struct PersonasDto {
    #[serde(default)]
    personas: Vec<PersonaDto>,
}

impl PersonasDto {
    pub fn new(personas: Vec<PersonaDto>) -> Self {
        PersonasDto { personas }
    }

    pub fn personas(&self) -> &[PersonaDto] {
        &self.personas
    }

    pub fn personas_mut(&mut self) -> &mut Vec<PersonaDto> {
        &mut self.personas
    }

    pub fn into_personas(self) -> Vec<PersonaDto> {
        self.personas
    }

    pub fn len(&self) -> usize {
        self.personas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.personas.is_empty()
    }

    /// Serializes the wrapper into a `<personas>` document.
    pub fn to_xml(&self) -> Result<String> {
        let xml = instant_xml::to_string(self)?;
        log::debug!("Serialized {} personas to XML ({} bytes).", self.personas.len(), xml.len());
        Ok(xml)
    }

    /// Parses a `<personas>` document. Malformed or truncated input and any
    /// binding failure surface as `Error::XmlError`.
    pub fn from_xml(xml: &str) -> Result<Self> {
        let dto: PersonasDto = from_xml_str(xml)?;
        log::debug!("Parsed {} personas from XML.", dto.personas.len());
        Ok(dto)
    }
}

impl From<Vec<PersonaDto>> for PersonasDto {
    fn from(personas: Vec<PersonaDto>) -> Self {
        PersonasDto::new(personas)
    }
}
