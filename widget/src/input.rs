//! Input Field
//!
//! The text-input hook. The widget only needs to read the current value and
//! overwrite it; editing keystrokes are the surface's business.

use parking_lot::Mutex;

/// Read/write access to the surface's text input
pub trait InputField: Send + Sync {
    /// Current raw value (untrimmed)
    fn value(&self) -> String;

    /// Replace the value
    fn set_value(&self, value: String);
}

/// In-memory input value with the editing operations a text surface needs
#[derive(Debug, Default)]
pub struct InputBuffer {
    value: Mutex<String>,
}

impl InputBuffer {
    /// Create an empty buffer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a character at the end
    pub fn push(&self, c: char) {
        self.value.lock().push(c);
    }

    /// Remove the last character, if any
    pub fn pop(&self) -> Option<char> {
        self.value.lock().pop()
    }

    /// Empty the buffer
    pub fn clear(&self) {
        self.value.lock().clear();
    }

    /// Whether the buffer holds no characters at all (whitespace counts)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.lock().is_empty()
    }
}

impl InputField for InputBuffer {
    fn value(&self) -> String {
        self.value.lock().clone()
    }

    fn set_value(&self, value: String) {
        *self.value.lock() = value;
    }
}
