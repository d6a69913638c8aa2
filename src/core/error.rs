use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Export was requested while the input field is empty.
    #[error("Please enter a URL first.")]
    MissingInput,

    #[error("QR encoding error: {0}")]
    Encode(#[from] qrcode::types::QrError),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Failed to open {target}: {reason}")]
    Launch { target: String, reason: String },
}

impl AppError {
    pub fn is_missing_input(&self) -> bool {
        matches!(self, AppError::MissingInput)
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_message() {
        let err = AppError::MissingInput;
        assert!(err.is_missing_input());
        assert_eq!(err.to_string(), "Please enter a URL first.");
    }

    #[test]
    fn test_encode_error_conversion() {
        let err: AppError = qrcode::types::QrError::DataTooLong.into();
        assert!(!err.is_missing_input());
        assert!(err.to_string().starts_with("QR encoding error"));
    }
}
