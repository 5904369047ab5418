//! metagenome-utils
//!
//! Capa de aplicación alrededor de `mgu-core`:
//! - `config`: variables de entorno (.env) cargadas una vez.
//! - `errors`: errores de aplicación y su código de salida.
//! - `commands` / `cli`: front door que lee y escribe el formato de wire de
//!   `ExtractBinAsAssemblyParams`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;

pub use mgu_core;
