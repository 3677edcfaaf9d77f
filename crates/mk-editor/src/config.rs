use mk_core::MIN_ELEMENT_SIZE;

/// Placeholder drawn inside an empty text element.
pub const TEXT_PLACEHOLDER: &str = "Start typing...";

/// Editor tunables.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    /// Floor for width and height during resize.
    pub min_size: f32,
    /// What an empty text element shows on the canvas. Never emitted.
    pub text_placeholder: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            min_size: MIN_ELEMENT_SIZE,
            text_placeholder: TEXT_PLACEHOLDER.to_string(),
        }
    }
}
