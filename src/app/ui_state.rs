pub struct UiState {
    pub error_message: Option<String>,
    pub language: String,
    pub hex_input: String,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            error_message: None,
            language: "en".to_string(),
            hex_input: String::new(),
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
