//! Modelo de parámetros de `extract_binned_contigs_as_assembly`.
//!
//! - `ExtractBinAsAssemblyParams`: registro con campos declarados + bag.
//! - `DeclaredField`: tabla de claves del esquema en orden de wire.
//! - `AssemblyEntry`: una solicitud de extracción (mapa abierto).

pub mod assembly;
mod codec;
pub mod extract_bin;
pub mod fields;

pub use assembly::{assembly_entry, AssemblyEntry, AssemblyEntryExt, ASSEMBLY_SUFFIX_KEY, BIN_ID_KEY};
pub use extract_bin::ExtractBinAsAssemblyParams;
pub use fields::DeclaredField;
