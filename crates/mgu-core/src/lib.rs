//! mgu-core: modelo de parámetros de MetagenomeUtils.
//!
//! Define el registro que cruza la frontera entre el front door (CLI/servicio)
//! y el ejecutor de extracción de bins. No hace I/O ni aplica reglas de
//! negocio: sólo forma de datos y un codec JSON sin pérdida.
pub mod errors;
pub mod params;

pub use errors::ParamsError;
pub use params::{assembly_entry, AssemblyEntry, AssemblyEntryExt, DeclaredField, ExtractBinAsAssemblyParams};
