//! Errores del modelo de parámetros.
//!
//! Los valores en sí nunca fallan; estos errores sólo salen del camino de
//! decodificación o de un intento de escribir una clave declarada en el bag.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("malformed request: field `{field}` expected {expected}: {reason}")]
    MalformedRequest {
        field: String,
        expected: &'static str,
        reason: String,
    },
    #[error("malformed request: expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },
    #[error("`{0}` is a declared field and cannot be stored as an additional property")]
    ReservedProperty(String),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

impl ParamsError {
    /// Nombre del campo que provocó el error, si aplica.
    pub fn field(&self) -> Option<&str> {
        match self {
            ParamsError::MalformedRequest { field, .. } => Some(field),
            ParamsError::ReservedProperty(name) => Some(name),
            _ => None,
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self,
                 ParamsError::MalformedRequest { .. } | ParamsError::NotAnObject { .. } | ParamsError::Json(_))
    }
}
