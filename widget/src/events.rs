//! Widget Events
//!
//! Events a surface forwards to the widget. Surfaces are "dumb" reporters:
//! they say what the user did, the widget decides whether it means "send".

/// A key as seen by the input field
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Enter / Return
    Enter,
    /// A printable character
    Char(char),
    /// Backspace
    Backspace,
    /// Escape
    Escape,
    /// Anything else
    Other,
}

/// Events from the surface's send-trigger hooks
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidgetEvent {
    /// The send button was activated
    SendClicked,
    /// A key was pressed while the input field had focus
    KeyPressed(Key),
}

impl WidgetEvent {
    /// Whether this event asks the widget to submit the current input
    #[must_use]
    pub fn is_submit(&self) -> bool {
        matches!(self, Self::SendClicked | Self::KeyPressed(Key::Enter))
    }
}
