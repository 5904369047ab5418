//! `ExtractBinAsAssemblyParams`: parámetros para extraer bins de un
//! BinnedContig y guardarlos como assemblies independientes.
//!
//! Es un contenedor de valores puro:
//! - Tres campos declarados, todos opcionales (ausencia = `None`).
//! - Un bag de propiedades adicionales que captura cualquier clave JSON fuera
//!   del esquema y la re-emite al serializar (compatibilidad hacia adelante).
//! - No valida contenido ni relaciona campos entre sí.
//!
//! Los métodos `with_*` mutan en sitio y devuelven la misma instancia
//! (`&mut Self`); no construyen copias.

use std::fmt;

use indexmap::IndexMap;
use serde_json::Value;

use super::assembly::{assembly_entry, AssemblyEntry, AssemblyEntryExt};
use super::fields::DeclaredField;
use crate::errors::ParamsError;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractBinAsAssemblyParams {
    pub(crate) binned_contig_obj_ref: Option<String>,
    pub(crate) extracted_assemblies: Option<Vec<AssemblyEntry>>,
    pub(crate) workspace_name: Option<String>,
    pub(crate) additional_properties: IndexMap<String, Value>,
}

impl ExtractBinAsAssemblyParams {
    pub fn new() -> Self {
        Self::default()
    }

    // ---------------- binned_contig_obj_ref ----------------

    /// Referencia al objeto BinnedContig de origen (opaca, sin validar).
    pub fn binned_contig_obj_ref(&self) -> Option<&str> {
        self.binned_contig_obj_ref.as_deref()
    }

    pub fn set_binned_contig_obj_ref(&mut self, value: Option<String>) {
        self.binned_contig_obj_ref = value;
    }

    pub fn with_binned_contig_obj_ref(&mut self, value: impl Into<String>) -> &mut Self {
        self.binned_contig_obj_ref = Some(value.into());
        self
    }

    // ---------------- extracted_assemblies ----------------

    /// Solicitudes de extracción en orden de procesamiento.
    pub fn extracted_assemblies(&self) -> Option<&Vec<AssemblyEntry>> {
        self.extracted_assemblies.as_ref()
    }

    pub fn extracted_assemblies_mut(&mut self) -> Option<&mut Vec<AssemblyEntry>> {
        self.extracted_assemblies.as_mut()
    }

    pub fn set_extracted_assemblies(&mut self, value: Option<Vec<AssemblyEntry>>) {
        self.extracted_assemblies = value;
    }

    pub fn with_extracted_assemblies(&mut self, value: Vec<AssemblyEntry>) -> &mut Self {
        self.extracted_assemblies = Some(value);
        self
    }

    /// Añade una entrada convencional (`bin_id` + `assembly_suffix`) al final
    /// de la lista, creándola si no existía.
    pub fn with_assembly(&mut self, bin_id: impl Into<String>, assembly_suffix: impl Into<String>) -> &mut Self {
        self.extracted_assemblies
            .get_or_insert_with(Vec::new)
            .push(assembly_entry(bin_id, assembly_suffix));
        self
    }

    /// `bin_id` de cada entrada, en orden. Entradas sin la clave dan `None`.
    pub fn bin_ids(&self) -> impl Iterator<Item = Option<&str>> + '_ {
        self.extracted_assemblies.iter().flatten().map(|e| e.bin_id())
    }

    // ---------------- workspace_name ----------------

    /// Workspace de destino de los assemblies.
    pub fn workspace_name(&self) -> Option<&str> {
        self.workspace_name.as_deref()
    }

    pub fn set_workspace_name(&mut self, value: Option<String>) {
        self.workspace_name = value;
    }

    pub fn with_workspace_name(&mut self, value: impl Into<String>) -> &mut Self {
        self.workspace_name = Some(value.into());
        self
    }

    // ---------------- additional properties ----------------

    pub fn additional_properties(&self) -> &IndexMap<String, Value> {
        &self.additional_properties
    }

    /// Vista viva del bag. Una clave declarada insertada por aquí nunca se
    /// serializa: el campo declarado siempre gana.
    pub fn additional_properties_mut(&mut self) -> &mut IndexMap<String, Value> {
        &mut self.additional_properties
    }

    /// Inserta o sobreescribe una propiedad adicional y devuelve el valor
    /// previo. Las claves declaradas se rechazan sin tocar el registro.
    pub fn set_additional_property(&mut self,
                                   name: impl Into<String>,
                                   value: impl Into<Value>)
                                   -> Result<Option<Value>, ParamsError> {
        let name = name.into();
        if DeclaredField::is_declared(&name) {
            return Err(ParamsError::ReservedProperty(name));
        }
        Ok(self.additional_properties.insert(name, value.into()))
    }

    pub fn with_additional_property(&mut self,
                                    name: impl Into<String>,
                                    value: impl Into<Value>)
                                    -> Result<&mut Self, ParamsError> {
        self.set_additional_property(name, value)?;
        Ok(self)
    }

    /// `true` si no hay ningún campo declarado ni propiedad adicional.
    pub fn is_empty(&self) -> bool {
        self.binned_contig_obj_ref.is_none()
        && self.extracted_assemblies.is_none()
        && self.workspace_name.is_none()
        && self.additional_properties.is_empty()
    }
}

fn write_opt_str(f: &mut fmt::Formatter<'_>, value: Option<&str>) -> fmt::Result {
    f.write_str(value.unwrap_or("null"))
}

/// Representación diagnóstica determinista; no es el formato de wire.
impl fmt::Display for ExtractBinAsAssemblyParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ExtractBinAsAssemblyParams [binned_contig_obj_ref=")?;
        write_opt_str(f, self.binned_contig_obj_ref())?;

        f.write_str(", extracted_assemblies=")?;
        match &self.extracted_assemblies {
            None => f.write_str("null")?,
            Some(entries) => {
                f.write_str("[")?;
                for (i, entry) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str("{")?;
                    for (j, (k, v)) in entry.iter().enumerate() {
                        if j > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{k}={v}")?;
                    }
                    f.write_str("}")?;
                }
                f.write_str("]")?;
            }
        }

        f.write_str(", workspace_name=")?;
        write_opt_str(f, self.workspace_name())?;

        f.write_str(", additional_properties={")?;
        for (i, (k, v)) in self.additional_properties.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}:{}", Value::from(k.as_str()), v)?;
        }
        f.write_str("}]")
    }
}
