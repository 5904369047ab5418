//! Implementación de los comandos del CLI.
//!
//! Cada comando recibe texto/argumentos ya leídos y devuelve la salida como
//! `String`; el I/O de proceso queda en `cli`/`main`.

use std::fs;
use std::io::Read;

use log::debug;
use mgu_core::ExtractBinAsAssemblyParams;
use serde_json::Value;

use crate::config::AppConfig;
use crate::errors::CoreError;

/// Lee el documento de entrada: `-` es stdin, cualquier otra cosa una ruta.
pub fn read_input(source: &str) -> Result<String, CoreError> {
    if source == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    Ok(fs::read_to_string(source)?)
}

fn encode(params: &ExtractBinAsAssemblyParams, pretty: bool) -> Result<String, CoreError> {
    let out = if pretty { params.to_json_string_pretty()? } else { params.to_json_string()? };
    Ok(out)
}

/// Re-emite un documento en orden de wire (declarados primero, sin nulls).
pub fn normalize(text: &str, config: &AppConfig) -> Result<String, CoreError> {
    let params = ExtractBinAsAssemblyParams::from_json_str(text)?;
    debug!("normalize: {} additional properties", params.additional_properties().len());
    encode(&params, config.pretty_json)
}

/// Línea de diagnóstico (`Display`) del registro.
pub fn show(text: &str) -> Result<String, CoreError> {
    let params = ExtractBinAsAssemblyParams::from_json_str(text)?;
    Ok(params.to_string())
}

/// Argumentos de `build`, ya separados por clap.
#[derive(Debug, Clone, Default)]
pub struct BuildRequest {
    pub obj_ref: Option<String>,
    pub workspace: Option<String>,
    /// `BIN_ID` o `BIN_ID:SUFFIX`.
    pub bins: Vec<String>,
    pub suffix: Option<String>,
    /// `KEY=JSON`; si JSON no parsea se toma como string.
    pub extras: Vec<String>,
}

fn parse_bin<'a>(arg: &'a str, default_suffix: &'a str) -> Result<(&'a str, &'a str), CoreError> {
    let (bin_id, suffix) = arg.split_once(':').unwrap_or((arg, default_suffix));
    if bin_id.is_empty() {
        return Err(CoreError::Usage(format!("--bin `{arg}` has an empty bin id")));
    }
    Ok((bin_id, suffix))
}

fn parse_extra(arg: &str) -> Result<(String, Value), CoreError> {
    let (key, raw) = arg.split_once('=')
                         .ok_or_else(|| CoreError::Usage(format!("--extra `{arg}` must be KEY=VALUE")))?;
    if key.is_empty() {
        return Err(CoreError::Usage(format!("--extra `{arg}` has an empty key")));
    }
    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}

/// Construye un registro con la API fluida y lo devuelve codificado.
pub fn build(request: &BuildRequest, config: &AppConfig) -> Result<String, CoreError> {
    let default_suffix = request.suffix.as_deref().unwrap_or(&config.default_assembly_suffix);
    let mut params = ExtractBinAsAssemblyParams::new();
    if let Some(r) = &request.obj_ref {
        params.with_binned_contig_obj_ref(r.as_str());
    }
    for arg in &request.bins {
        let (bin_id, suffix) = parse_bin(arg, default_suffix)?;
        params.with_assembly(bin_id, suffix);
    }
    if let Some(ws) = &request.workspace {
        params.with_workspace_name(ws.as_str());
    }
    for arg in &request.extras {
        let (key, value) = parse_extra(arg)?;
        params.set_additional_property(key, value)?;
    }
    debug!("build: {} bins requested", request.bins.len());
    encode(&params, config.pretty_json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bin_without_suffix_uses_default() {
        assert_eq!(parse_bin("bin.1", "_d").unwrap(), ("bin.1", "_d"));
        assert_eq!(parse_bin("bin.1:_x", "_d").unwrap(), ("bin.1", "_x"));
    }

    #[test]
    fn empty_bin_id_is_usage_error() {
        assert!(matches!(parse_bin(":_x", "_d"), Err(CoreError::Usage(_))));
        assert!(matches!(parse_bin("", "_d"), Err(CoreError::Usage(_))));
        let request = BuildRequest { bins: vec![":_x".into()],
                                     ..Default::default() };
        let err = build(&request, &AppConfig::default()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn extra_value_parses_json_or_falls_back_to_string() {
        assert_eq!(parse_extra("n=5").unwrap(), ("n".to_string(), json!(5)));
        assert_eq!(parse_extra("note=manual run").unwrap(), ("note".to_string(), json!("manual run")));
        assert_eq!(parse_extra("o={\"a\":1}").unwrap(), ("o".to_string(), json!({"a": 1})));
        assert!(matches!(parse_extra("novalue"), Err(CoreError::Usage(_))));
        assert!(matches!(parse_extra("=1"), Err(CoreError::Usage(_))));
    }
}
