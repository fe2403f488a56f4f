use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Malformed amount: {0:?}")]
    MalformedAmount(String),

    #[error("Invalid date: {0:?}")]
    InvalidDate(String),
}

impl serde::Serialize for EngineError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
