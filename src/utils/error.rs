use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("{0}")]
    Database(#[from] sqlx::Error),
}

impl SetupError {
    pub fn code(&self) -> &'static str {
        match self {
            SetupError::Config(_) => "CONFIG_ERROR",
            SetupError::Database(_) => "DATABASE_ERROR",
        }
    }

    pub fn log(&self, step: &str) {
        match self {
            SetupError::Config(msg) => {
                error!(code = self.code(), step, message = %msg, "Setup error");
            }
            SetupError::Database(e) => {
                error!(code = self.code(), step, error = ?e, "Database error");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(SetupError::Config("x".into()).code(), "CONFIG_ERROR");
        assert_eq!(
            SetupError::Database(sqlx::Error::RowNotFound).code(),
            "DATABASE_ERROR"
        );
    }

    #[test]
    fn test_database_error_displays_driver_message() {
        let err = SetupError::from(sqlx::Error::RowNotFound);
        assert_eq!(err.to_string(), sqlx::Error::RowNotFound.to_string());
    }
}
