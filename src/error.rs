use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Not enough catalog items: {0}")]
    CatalogInsufficient(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl PlanError {
    /// Errors caused by the request itself rather than the host.
    ///
    /// A transport maps these to a 400-class response.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            PlanError::CatalogInsufficient(_) | PlanError::InvalidInput(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, PlanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_classification() {
        assert!(PlanError::CatalogInsufficient("drink".to_string()).is_client_error());
        assert!(PlanError::InvalidInput("tdee".to_string()).is_client_error());

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert!(!PlanError::from(io).is_client_error());
    }
}
