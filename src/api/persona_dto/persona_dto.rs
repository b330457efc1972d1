use instant_xml::{FromXml, ToXml};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, FromXml, ToXml, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[xml(scalar, rename_all = "lowercase")]
pub enum TipoPersonaDto {
    Alumno,
    Profesor,
}

/// A single `<persona>` element.
///
/// `tipo` and `id` travel as attributes, the remaining fields as child
/// elements. `edad` is only set for alumnos and `modulo` only for profesores;
/// absent values are omitted from both XML and JSON output.
#[derive(Serialize, Deserialize, FromXml, ToXml, Debug, Clone, PartialEq, Eq)]
#[xml(rename = "persona")]
pub struct PersonaDto {
    #[xml(attribute)]
    pub tipo: TipoPersonaDto,
    #[xml(attribute)]
    pub id: i64,
    pub nombre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edad: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modulo: Option<String>,
}

impl PersonaDto {
    pub fn alumno(id: i64, nombre: impl Into<String>, edad: u32) -> Self {
        PersonaDto { tipo: TipoPersonaDto::Alumno, id, nombre: nombre.into(), edad: Some(edad), modulo: None }
    }

    pub fn profesor(id: i64, nombre: impl Into<String>, modulo: impl Into<String>) -> Self {
        PersonaDto { tipo: TipoPersonaDto::Profesor, id, nombre: nombre.into(), edad: None, modulo: Some(modulo.into()) }
    }
}
