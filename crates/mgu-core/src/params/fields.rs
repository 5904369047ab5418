//! Tabla de campos declarados de `ExtractBinAsAssemblyParams`.
//!
//! El orden de `DeclaredField::ALL` es el orden de serialización en el wire.
//! Cualquier clave que no aparezca aquí termina en el bag de propiedades
//! adicionales.

/// Campos declarados por el esquema, en orden de wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclaredField {
    BinnedContigObjRef,
    ExtractedAssemblies,
    WorkspaceName,
}

impl DeclaredField {
    /// Todos los campos declarados en el orden en que se emiten.
    pub const ALL: [DeclaredField; 3] = [DeclaredField::BinnedContigObjRef,
                                         DeclaredField::ExtractedAssemblies,
                                         DeclaredField::WorkspaceName];

    /// Clave JSON externa del campo.
    pub fn wire_name(self) -> &'static str {
        match self {
            DeclaredField::BinnedContigObjRef => "binned_contig_obj_ref",
            DeclaredField::ExtractedAssemblies => "extracted_assemblies",
            DeclaredField::WorkspaceName => "workspace_name",
        }
    }

    /// Tipo esperado, usado en los diagnósticos de `MalformedRequest`.
    pub fn expected(self) -> &'static str {
        match self {
            DeclaredField::BinnedContigObjRef | DeclaredField::WorkspaceName => "string or null",
            DeclaredField::ExtractedAssemblies => "array of string-to-string objects or null",
        }
    }

    /// Resuelve una clave del wire (case-sensitive).
    pub fn from_wire(key: &str) -> Option<DeclaredField> {
        Self::ALL.into_iter().find(|f| f.wire_name() == key)
    }

    pub fn is_declared(key: &str) -> bool {
        Self::from_wire(key).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_order_is_fixed() {
        let names: Vec<&str> = DeclaredField::ALL.iter().map(|f| f.wire_name()).collect();
        assert_eq!(names, vec!["binned_contig_obj_ref", "extracted_assemblies", "workspace_name"]);
    }

    #[test]
    fn from_wire_is_case_sensitive() {
        assert_eq!(DeclaredField::from_wire("workspace_name"), Some(DeclaredField::WorkspaceName));
        assert_eq!(DeclaredField::from_wire("Workspace_Name"), None);
        assert_eq!(DeclaredField::from_wire("workspaceName"), None);
        assert!(!DeclaredField::is_declared("note"));
    }
}
