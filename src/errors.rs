use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, thiserror::Error, Serialize)]
pub enum ServiceError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Insufficient stock: {0}")]
    InsufficientStock(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Other error: {0}")]
    Other(
        #[from]
        #[serde(skip)]
        anyhow::Error,
    ),
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(err: validator::ValidationErrors) -> Self {
        ServiceError::ValidationError(err.to_string())
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        ServiceError::SerializationError(err.to_string())
    }
}

impl ServiceError {
    /// Stable machine-readable code, used by the CLI JSON output.
    pub fn codice(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::ValidationError(_) => "validation_error",
            Self::InvalidOperation(_) => "invalid_operation",
            Self::InvalidInput(_) => "invalid_input",
            Self::Conflict(_) => "conflict",
            Self::InsufficientStock(_) => "insufficient_stock",
            Self::SerializationError(_) => "serialization_error",
            Self::Other(_) => "internal_error",
        }
    }

    pub fn ordine_non_trovato(id: Uuid) -> Self {
        ServiceError::NotFound(format!("Ordine {} non trovato", id))
    }

    pub fn articolo_non_trovato(id: Uuid) -> Self {
        ServiceError::NotFound(format!("Articolo {} non presente in giacenza", id))
    }

    pub fn esaurito_non_trovato(id: Uuid) -> Self {
        ServiceError::NotFound(format!("Articolo esaurito {} non trovato", id))
    }

    pub fn fornitore_non_trovato(codice: &str) -> Self {
        ServiceError::NotFound(format!("Fornitore con codice '{}' non registrato", codice))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::{Validate, ValidationErrors};

    #[derive(Validate)]
    struct Campione {
        #[validate(length(min = 1))]
        codice: String,
    }

    #[test]
    fn validation_errors_map_to_validation_variant() {
        let errors: ValidationErrors = Campione {
            codice: String::new(),
        }
        .validate()
        .unwrap_err();

        let err: ServiceError = errors.into();
        assert_eq!(err.codice(), "validation_error");
        assert!(err.to_string().contains("codice"));
    }

    #[test]
    fn json_errors_map_to_serialization_variant() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let mapped = ServiceError::from(err);
        assert_eq!(mapped.codice(), "serialization_error");
    }

    #[test]
    fn unexpected_failures_keep_their_context() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "nessun file");
        let err: ServiceError = anyhow::Error::from(io).context("failed to read snapshot").into();
        assert_eq!(err.codice(), "internal_error");
        assert_eq!(err.to_string(), "Other error: failed to read snapshot");
    }

    #[test]
    fn not_found_helpers_name_the_missing_record() {
        let id = Uuid::new_v4();
        assert_eq!(
            ServiceError::ordine_non_trovato(id).to_string(),
            format!("Not found: Ordine {} non trovato", id)
        );
        assert_eq!(
            ServiceError::fornitore_non_trovato("CART01").to_string(),
            "Not found: Fornitore con codice 'CART01' non registrato"
        );
    }
}
