use crate::api::persona_dto::{PersonaDto, PersonasDto, TipoPersonaDto};
use crate::domain::persona::{Persona, PersonaCsvRecord, PersonaKind};
use crate::error::{Error, Result};

impl TryFrom<PersonaDto> for Persona {
    type Error = Error;

    fn try_from(dto: PersonaDto) -> Result<Self> {
        let kind = match dto.tipo {
            TipoPersonaDto::Alumno => {
                let edad = dto.edad.ok_or_else(|| {
                    Error::ModelConstructionError(format!("Alumno '{}' is missing 'edad'.", dto.id))
                })?;
                PersonaKind::Alumno { edad }
            }
            TipoPersonaDto::Profesor => {
                let modulo = dto.modulo.ok_or_else(|| {
                    Error::ModelConstructionError(format!("Profesor '{}' is missing 'modulo'.", dto.id))
                })?;
                PersonaKind::Profesor { modulo }
            }
        };

        Ok(Persona { id: dto.id, nombre: dto.nombre, kind })
    }
}

impl From<&Persona> for PersonaDto {
    fn from(persona: &Persona) -> Self {
        match &persona.kind {
            PersonaKind::Alumno { edad } => PersonaDto::alumno(persona.id, persona.nombre.clone(), *edad),
            PersonaKind::Profesor { modulo } => PersonaDto::profesor(persona.id, persona.nombre.clone(), modulo.clone()),
        }
    }
}

impl TryFrom<PersonaCsvRecord> for Persona {
    type Error = Error;

    fn try_from(record: PersonaCsvRecord) -> Result<Self> {
        let tipo = match record.tipo.trim().to_lowercase().as_str() {
            "alumno" => TipoPersonaDto::Alumno,
            "profesor" => TipoPersonaDto::Profesor,
            other => {
                return Err(Error::ModelConstructionError(format!(
                    "Unknown tipo '{}' for persona '{}'.",
                    other, record.id
                )));
            }
        };

        Persona::try_from(PersonaDto { tipo, id: record.id, nombre: record.nombre, edad: record.edad, modulo: record.modulo })
    }
}

/// Builds the domain list from a parsed `<personas>` document, preserving order.
/// Fails on the first incomplete record.
pub fn personas_from_dto(dto: PersonasDto) -> Result<Vec<Persona>> {
    let personas = dto.into_personas().into_iter().map(Persona::try_from).collect::<Result<Vec<_>>>()?;
    log::debug!("Mapped {} persona DTOs to the domain model.", personas.len());
    Ok(personas)
}

pub fn personas_to_dto(personas: &[Persona]) -> PersonasDto {
    PersonasDto::new(personas.iter().map(PersonaDto::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alumno_without_edad_is_rejected() {
        let mut dto = PersonaDto::alumno(4, "Ana", 20);
        dto.edad = None;

        let result = Persona::try_from(dto);
        assert!(matches!(result, Err(Error::ModelConstructionError(_))));
    }

    #[test]
    fn test_profesor_without_modulo_is_rejected() {
        let mut dto = PersonaDto::profesor(5, "Luis", "Redes");
        dto.modulo = None;

        let result = Persona::try_from(dto);
        assert!(matches!(result, Err(Error::ModelConstructionError(_))));
    }

    #[test]
    fn test_foreign_field_is_ignored() {
        let mut dto = PersonaDto::profesor(9, "Luis", "Redes");
        dto.edad = Some(50);

        let persona = Persona::try_from(dto).unwrap();
        assert_eq!(persona, Persona::profesor(9, "Luis", "Redes"));
    }

    #[test]
    fn test_list_mapping_preserves_order() {
        let personas = vec![Persona::profesor(2, "Luis", "Redes"), Persona::alumno(1, "Ana", 20)];

        let dto = personas_to_dto(&personas);
        assert_eq!(dto.personas()[0].tipo, TipoPersonaDto::Profesor);

        assert_eq!(personas_from_dto(dto).unwrap(), personas);
    }

    #[test]
    fn test_csv_record_with_unknown_tipo() {
        let record = PersonaCsvRecord { id: 1, nombre: "X".to_string(), tipo: "bedel".to_string(), edad: None, modulo: None };
        assert!(matches!(Persona::try_from(record), Err(Error::ModelConstructionError(_))));
    }
}
