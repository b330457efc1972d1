use std::fmt;

use serde::{Deserialize, Serialize};

/// The specialisation a [`Persona`] belongs to, with the data only that
/// specialisation carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonaKind {
    /// A student, identified by age.
    Alumno { edad: u32 },
    /// A teacher, identified by the module they teach.
    Profesor { modulo: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Persona {
    pub id: i64,
    pub nombre: String,
    pub kind: PersonaKind,
}

/// Flat row written to and read from CSV exports.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PersonaCsvRecord {
    pub id: i64,
    pub nombre: String,
    pub tipo: String,
    pub edad: Option<u32>,
    pub modulo: Option<String>,
}

impl Persona {
    pub fn alumno(id: i64, nombre: impl Into<String>, edad: u32) -> Self {
        Persona { id, nombre: nombre.into(), kind: PersonaKind::Alumno { edad } }
    }

    pub fn profesor(id: i64, nombre: impl Into<String>, modulo: impl Into<String>) -> Self {
        Persona { id, nombre: nombre.into(), kind: PersonaKind::Profesor { modulo: modulo.into() } }
    }

    pub fn tipo(&self) -> &'static str {
        match self.kind {
            PersonaKind::Alumno { .. } => "alumno",
            PersonaKind::Profesor { .. } => "profesor",
        }
    }

    /// Returns a persona of the same kind with a new id and name.
    pub fn copy_with(&self, id: i64, nombre: impl Into<String>) -> Self {
        Persona { id, nombre: nombre.into(), kind: self.kind.clone() }
    }

    pub fn to_csv_record(&self) -> PersonaCsvRecord {
        let (edad, modulo) = match &self.kind {
            PersonaKind::Alumno { edad } => (Some(*edad), None),
            PersonaKind::Profesor { modulo } => (None, Some(modulo.clone())),
        };

        PersonaCsvRecord { id: self.id, nombre: self.nombre.clone(), tipo: self.tipo().to_string(), edad, modulo }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            PersonaKind::Alumno { edad } => write!(f, "Alumno #{} {} ({} años)", self.id, self.nombre, edad),
            PersonaKind::Profesor { modulo } => write!(f, "Profesor #{} {} [{}]", self.id, self.nombre, modulo),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_with_keeps_kind() {
        let profesor = Persona::profesor(1, "Luis", "Redes");
        let copy = profesor.copy_with(5, "Lucía");

        assert_eq!(copy.id, 5);
        assert_eq!(copy.nombre, "Lucía");
        assert_eq!(copy.kind, PersonaKind::Profesor { modulo: "Redes".to_string() });
        assert_eq!(profesor.id, 1);
    }

    #[test]
    fn test_csv_record_only_fills_own_fields() {
        let record = Persona::alumno(3, "Ana", 20).to_csv_record();

        assert_eq!(record.tipo, "alumno");
        assert_eq!(record.edad, Some(20));
        assert_eq!(record.modulo, None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Persona::profesor(2, "Luis", "Redes").to_string(), "Profesor #2 Luis [Redes]");
    }
}
