use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimulatorError {
    #[error("Por favor, escribe un prompt antes de generar")]
    EmptyPrompt,

    #[error("JSON Error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO Error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config Error: {0}")]
    ConfigError(String),
}
