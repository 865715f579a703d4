//! Input buffer bound to the text field.

/// Not-yet-submitted text typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    value: String,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole buffer. Any string is accepted, including empty.
    pub fn set_text(&mut self, new_value: impl Into<String>) {
        self.value = new_value.into();
    }

    /// Returns the latest value.
    pub fn current(&self) -> &str {
        self.value.as_str()
    }

    /// Moves the content out and leaves the buffer empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.value)
    }

    /// Whether the content is empty or whitespace-only.
    ///
    /// Display hint only; submit does not consult it.
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::InputBuffer;

    #[test]
    fn take_returns_content_and_clears() {
        let mut buffer = InputBuffer::new();
        buffer.set_text("stretch");

        assert_eq!(buffer.take(), "stretch");
        assert_eq!(buffer.current(), "");
    }

    #[test]
    fn set_text_keeps_surrounding_whitespace() {
        let mut buffer = InputBuffer::new();
        buffer.set_text("  padded \n");

        assert_eq!(buffer.current(), "  padded \n");
        assert!(!buffer.is_blank());
    }

    #[test]
    fn whitespace_only_is_blank() {
        let mut buffer = InputBuffer::new();
        assert!(buffer.is_blank());

        buffer.set_text(" \t ");
        assert!(buffer.is_blank());
    }
}
