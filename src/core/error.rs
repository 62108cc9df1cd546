use rust_i18n::t;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    InvalidHexColor(String),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoreError::InvalidHexColor(text) => write!(f, "{}", t!("error.invalid_hex_color", text = text.to_string())),
        }
    }
}

impl std::error::Error for CoreError {}
pub type Result<T> = std::result::Result<T, CoreError>;
