//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) una sola vez y construye `AppConfig`
//! para los comandos del CLI. Valores no parseables son error de
//! configuración, no se ignoran.
use once_cell::sync::Lazy;
use std::env;

use crate::errors::CoreError;

/// Sufijo por defecto para assemblies cuando `build` no recibe uno.
pub const DEFAULT_ASSEMBLY_SUFFIX: &str = "_assembly";

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenvy::dotenv(); // ignora error si no existe .env
});

/// Configuración global de la aplicación.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Emitir JSON indentado (`MGU_PRETTY_JSON`).
    pub pretty_json: bool,
    /// Sufijo usado por `build` para `--bin` sin sufijo propio
    /// (`MGU_DEFAULT_ASSEMBLY_SUFFIX`).
    pub default_assembly_suffix: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { pretty_json: false,
               default_assembly_suffix: DEFAULT_ASSEMBLY_SUFFIX.to_string() }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, CoreError> {
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construye la configuración a partir de una función de búsqueda.
    /// Variables ausentes (o sufijo vacío) caen al default; un booleano no
    /// reconocido devuelve `CoreError::Config`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CoreError> {
        let defaults = Self::default();
        let pretty_json = match lookup("MGU_PRETTY_JSON") {
            None => defaults.pretty_json,
            Some(raw) => parse_bool(&raw).ok_or_else(|| {
                                              CoreError::Config(format!("MGU_PRETTY_JSON=`{raw}` no es un booleano"))
                                          })?,
        };
        let default_assembly_suffix = lookup("MGU_DEFAULT_ASSEMBLY_SUFFIX").filter(|v| !v.is_empty())
                                                                          .unwrap_or(defaults.default_assembly_suffix);
        Ok(Self { pretty_json, default_assembly_suffix })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
