pub mod persona_dto;
