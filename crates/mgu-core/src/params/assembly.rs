//! Entradas de `extracted_assemblies`.
//!
//! Cada entrada es un mapa abierto string -> string. Por convención lleva
//! `bin_id` y `assembly_suffix`, pero no se exige: claves extra se conservan
//! tal cual y en su orden original.

use indexmap::IndexMap;

/// Bin objetivo a extraer.
pub const BIN_ID_KEY: &str = "bin_id";
/// Sufijo que se añade al nombre del assembly derivado.
pub const ASSEMBLY_SUFFIX_KEY: &str = "assembly_suffix";

/// Una solicitud de extracción (mapa abierto, orden preservado).
pub type AssemblyEntry = IndexMap<String, String>;

/// Construye una entrada convencional con `bin_id` primero.
pub fn assembly_entry(bin_id: impl Into<String>, assembly_suffix: impl Into<String>) -> AssemblyEntry {
    let mut entry = AssemblyEntry::new();
    entry.insert(BIN_ID_KEY.to_string(), bin_id.into());
    entry.insert(ASSEMBLY_SUFFIX_KEY.to_string(), assembly_suffix.into());
    entry
}

/// Vistas de sólo lectura sobre las claves convencionales.
pub trait AssemblyEntryExt {
    fn bin_id(&self) -> Option<&str>;
    fn assembly_suffix(&self) -> Option<&str>;
}

impl AssemblyEntryExt for AssemblyEntry {
    fn bin_id(&self) -> Option<&str> {
        self.get(BIN_ID_KEY).map(String::as_str)
    }

    fn assembly_suffix(&self) -> Option<&str> {
        self.get(ASSEMBLY_SUFFIX_KEY).map(String::as_str)
    }
}
