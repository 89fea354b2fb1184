//! Translation Service Implementations

mod toml_table;

pub use toml_table::TomlTranslationService;
