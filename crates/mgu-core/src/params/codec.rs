//! Codec JSON de `ExtractBinAsAssemblyParams`.
//!
//! Decodificación: cada clave del objeto se compara (case-sensitive) contra
//! los campos declarados; si coincide se decodifica al tipo del campo, si no
//! va al bag tal cual, sin coerción.
//!
//! Codificación: campos declarados en orden fijo (omitidos si son `None`),
//! después el bag en orden de inserción.

use log::{debug, warn};
use serde::de::{self, DeserializeOwned};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::extract_bin::ExtractBinAsAssemblyParams;
use super::fields::DeclaredField;
use crate::errors::ParamsError;

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn decode_field<T: DeserializeOwned>(field: DeclaredField, value: Value) -> Result<T, ParamsError> {
    serde_json::from_value(value).map_err(|e| ParamsError::MalformedRequest { field: field.wire_name().to_string(),
                                                                              expected: field.expected(),
                                                                              reason: e.to_string() })
}

impl ExtractBinAsAssemblyParams {
    /// Decodifica desde un `Value` neutro. Falla sólo si la raíz no es un
    /// objeto o si un campo declarado trae un tipo incorrecto.
    pub fn from_json_value(value: Value) -> Result<Self, ParamsError> {
        let object = match value {
            Value::Object(map) => map,
            other => return Err(ParamsError::NotAnObject { found: json_kind(&other) }),
        };
        let mut params = Self::new();
        for (key, value) in object {
            match DeclaredField::from_wire(&key) {
                Some(field) => params.assign_declared(field, value)?,
                None => {
                    debug!("params: capturing additional property `{key}`");
                    params.additional_properties.insert(key, value);
                }
            }
        }
        Ok(params)
    }

    pub fn from_json_str(input: &str) -> Result<Self, ParamsError> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_json_value(value)
    }

    pub fn to_json_value(&self) -> Result<Value, ParamsError> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_json_string(&self) -> Result<String, ParamsError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_string_pretty(&self) -> Result<String, ParamsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn assign_declared(&mut self, field: DeclaredField, value: Value) -> Result<(), ParamsError> {
        match field {
            DeclaredField::BinnedContigObjRef => self.binned_contig_obj_ref = decode_field(field, value)?,
            DeclaredField::ExtractedAssemblies => self.extracted_assemblies = decode_field(field, value)?,
            DeclaredField::WorkspaceName => self.workspace_name = decode_field(field, value)?,
        }
        Ok(())
    }
}

impl Serialize for ExtractBinAsAssemblyParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let declared = [self.binned_contig_obj_ref.is_some(),
                        self.extracted_assemblies.is_some(),
                        self.workspace_name.is_some()];
        let extras: Vec<(&String, &Value)> = self.additional_properties
                                                 .iter()
                                                 .filter(|(k, _)| {
                                                     let shadowed = DeclaredField::is_declared(k);
                                                     if shadowed {
                                                         warn!("params: dropping additional property `{k}` shadowed by declared field");
                                                     }
                                                     !shadowed
                                                 })
                                                 .collect();
        let len = declared.iter().filter(|set| **set).count() + extras.len();

        let mut map = serializer.serialize_map(Some(len))?;
        if let Some(v) = &self.binned_contig_obj_ref {
            map.serialize_entry(DeclaredField::BinnedContigObjRef.wire_name(), v)?;
        }
        if let Some(v) = &self.extracted_assemblies {
            map.serialize_entry(DeclaredField::ExtractedAssemblies.wire_name(), v)?;
        }
        if let Some(v) = &self.workspace_name {
            map.serialize_entry(DeclaredField::WorkspaceName.wire_name(), v)?;
        }
        for (k, v) in extras {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ExtractBinAsAssemblyParams {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_json_value(value).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_declared_values_decode_to_none() {
        let p = ExtractBinAsAssemblyParams::from_json_value(json!({
            "binned_contig_obj_ref": null,
            "workspace_name": "ws"
        })).unwrap();
        assert_eq!(p.binned_contig_obj_ref(), None);
        assert_eq!(p.workspace_name(), Some("ws"));
        assert!(p.additional_properties().is_empty());
    }

    #[test]
    fn unset_fields_are_omitted_not_null() {
        let mut p = ExtractBinAsAssemblyParams::new();
        p.with_workspace_name("ws");
        assert_eq!(p.to_json_string().unwrap(), r#"{"workspace_name":"ws"}"#);
    }

    #[test]
    fn declared_fields_lead_extras_keep_input_order() {
        let input = r#"{"zeta":1,"workspace_name":"ws","alpha":[true],"binned_contig_obj_ref":"1/2/3"}"#;
        let p = ExtractBinAsAssemblyParams::from_json_str(input).unwrap();
        assert_eq!(p.to_json_string().unwrap(),
                   r#"{"binned_contig_obj_ref":"1/2/3","workspace_name":"ws","zeta":1,"alpha":[true]}"#);
    }

    #[test]
    fn declared_field_wins_over_shadowing_bag_entry() {
        let mut p = ExtractBinAsAssemblyParams::new();
        p.with_workspace_name("real");
        p.additional_properties_mut().insert("workspace_name".into(), json!("shadow"));
        p.additional_properties_mut().insert("note".into(), json!(1));
        assert_eq!(p.to_json_string().unwrap(), r#"{"workspace_name":"real","note":1}"#);
    }

    #[test]
    fn wrong_type_is_malformed_request() {
        let err = ExtractBinAsAssemblyParams::from_json_value(json!({"workspace_name": 5})).unwrap_err();
        match err {
            ParamsError::MalformedRequest { field, expected, .. } => {
                assert_eq!(field, "workspace_name");
                assert_eq!(expected, "string or null");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_object_root_is_rejected() {
        let err = ExtractBinAsAssemblyParams::from_json_value(json!([1, 2])).unwrap_err();
        assert!(matches!(err, ParamsError::NotAnObject { found: "array" }));
    }

    #[test]
    fn serde_json_entry_points_use_same_routing() {
        let p: ExtractBinAsAssemblyParams = serde_json::from_str(r#"{"workspace_name":"ws","x":{"b":1,"a":2}}"#).unwrap();
        assert_eq!(p.additional_properties()["x"], json!({"b": 1, "a": 2}));
        let err = serde_json::from_str::<ExtractBinAsAssemblyParams>(r#"{"extracted_assemblies":"bin_id"}"#).unwrap_err();
        assert!(err.to_string().contains("extracted_assemblies"));
    }
}
