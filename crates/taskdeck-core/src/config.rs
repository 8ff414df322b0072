#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    // Empty string means same-origin relative paths.
    pub api_base: String,
    pub page_size: usize,
    pub search_debounce_ms: u32,
    pub toast_dismiss_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            page_size: 10,
            search_debounce_ms: 300,
            toast_dismiss_ms: 3500,
        }
    }
}
