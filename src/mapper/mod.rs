pub mod persona_mapper;
