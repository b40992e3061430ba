//! Shared error types and utilities for the mergington project.
pub use color_eyre::Report;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Failed to install color_eyre")]
    ColorEyre(#[from] color_eyre::Report),
    #[error("Failed to install tracing-subscriber")]
    TracingSubscriber(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Failures of the activity directory operations.
///
/// The display strings are what clients receive in the `detail` field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectoryError {
    #[error("Activity not found")]
    NotFound(String),
    #[error("Student is already signed up for this activity")]
    AlreadySignedUp { activity: String, email: String },
    #[error("Student is not signed up for this activity")]
    NotSignedUp { activity: String, email: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_error_messages() {
        let not_found = DirectoryError::NotFound("Robotics".to_string());
        assert_eq!(not_found.to_string(), "Activity not found");

        let duplicate = DirectoryError::AlreadySignedUp {
            activity: "Soccer Team".to_string(),
            email: "lucas@mergington.edu".to_string(),
        };
        assert!(duplicate.to_string().contains("already signed up"));

        let missing = DirectoryError::NotSignedUp {
            activity: "Soccer Team".to_string(),
            email: "nobody@mergington.edu".to_string(),
        };
        assert!(missing.to_string().contains("not signed up"));
    }
}
