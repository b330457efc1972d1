pub mod persona_dto;
pub mod personas_dto;

pub use persona_dto::{PersonaDto, TipoPersonaDto};
pub use personas_dto::PersonasDto;
