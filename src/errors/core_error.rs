use mgu_core::ParamsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Error en IO: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error de configuración: {0}")]
    Config(String),
    #[error("Uso inválido: {0}")]
    Usage(String),
    #[error("Parámetros inválidos: {0}")]
    Params(#[from] ParamsError),
}

impl CoreError {
    /// Código de salida del proceso: 2 uso/config, 4 request mal formado,
    /// 5 IO.
    pub fn exit_code(&self) -> i32 {
        match self {
            CoreError::Usage(_) | CoreError::Config(_) => 2,
            CoreError::Params(_) => 4,
            CoreError::Io(_) => 5,
        }
    }
}
