//! Main Application
//!
//! The App struct manages the TUI lifecycle as a thin host for the chat
//! widget:
//! - Event loop (keyboard, mouse, resize)
//! - `ChatWidget` for the send flow
//! - Transcript and input buffer shared with the widget for rendering
//!
//! # Event Flow
//!
//! 1. Terminal events arrive on crossterm's `EventStream`
//! 2. Keys edit the input buffer, then go to the widget as `WidgetEvent`s
//! 3. Clicks on the send button become `WidgetEvent::SendClicked`
//! 4. Every frame prunes finished sends and redraws from the transcript

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{
    Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use futures::StreamExt;
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::{Frame, Terminal};
use unicode_width::UnicodeWidthStr;

use beru_widget::{
    ChatWidget, HttpBackend, InputBuffer, InputField, Key, Role, SendTask, TracingDiagnostics,
    Transcript, WidgetConfig, WidgetEvent,
};

use crate::theme::{
    send_button_style, BERU_MAGENTA, BERU_PREFIX, BUSY_CYAN, DIM_GRAY, FADE_GRAY, SCROLL_YELLOW,
    USER_GREEN, USER_PREFIX,
};

/// Input row height (separator plus wrapped text)
const INPUT_HEIGHT: u16 = 4;

/// Width of the send button column
const SEND_BUTTON_WIDTH: u16 = 10;

/// Label drawn inside the send button
const SEND_LABEL: &str = "[ Send ]";

/// Lines moved per mouse wheel notch
const WHEEL_STEP: usize = 3;

/// Frame tick when no terminal events arrive
const FRAME_DURATION: Duration = Duration::from_millis(50);

/// Map a crossterm key onto the widget's key model
///
/// Control and Alt chords never count as text.
pub fn widget_key(key: &KeyEvent) -> Key {
    match key.code {
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Esc => Key::Escape,
        KeyCode::Char(_)
            if key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Key::Other
        }
        KeyCode::Char(c) => Key::Char(c),
        _ => Key::Other,
    }
}

/// Main application state
pub struct App {
    // === Core State ===
    /// Is the app still running?
    running: bool,

    // === Widget Integration ===
    /// The chat component that owns the send flow
    widget: ChatWidget<HttpBackend>,
    /// Message-list hook, read back for rendering
    transcript: Arc<Transcript>,
    /// Text-input hook, edited by key presses
    input: Arc<InputBuffer>,
    /// Sends not yet finished
    in_flight: Vec<SendTask>,
    /// Where requests go, for the status bar
    endpoint: String,

    // === Layout State ===
    /// Scroll offset (lines from bottom, 0 = latest)
    scroll_offset: usize,
    /// Total rendered lines (for scroll bounds)
    total_lines: usize,
    /// Height of the conversation pane at the last draw
    conversation_height: u16,
    /// Click target of the send button at the last draw
    send_button: Rect,
}

impl App {
    /// Create an app talking to the configured backend
    pub fn new(config: &WidgetConfig) -> Self {
        let transcript = Arc::new(Transcript::new());
        let input = Arc::new(InputBuffer::new());
        let backend = HttpBackend::from_config(config);
        let endpoint = backend.chat_url();

        let widget = ChatWidget::new(
            backend,
            transcript.clone(),
            input.clone(),
            Arc::new(TracingDiagnostics),
        );

        Self {
            running: true,
            widget,
            transcript,
            input,
            in_flight: Vec::new(),
            endpoint,
            scroll_offset: 0,
            total_lines: 0,
            conversation_height: 0,
            send_button: Rect::default(),
        }
    }

    /// Is the app still running?
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Number of sends still awaiting a reply
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    /// Main event loop
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        let mut event_stream = EventStream::new();

        // Render initial frame immediately so user sees UI
        terminal.draw(|frame| self.draw(frame))?;

        while self.running {
            tokio::select! {
                biased;

                // Terminal events - highest priority
                maybe_event = event_stream.next() => match maybe_event {
                    Some(Ok(event)) => self.handle_terminal_event(event),
                    Some(Err(e)) => tracing::warn!(error = %e, "Terminal event error"),
                    None => self.running = false,
                },

                // Frame tick so replies show up without input
                () = tokio::time::sleep(FRAME_DURATION) => {}
            }

            self.update();
            terminal.draw(|frame| self.draw(frame))?;
        }

        if !self.in_flight.is_empty() {
            tracing::info!(
                in_flight = self.in_flight.len(),
                "Quitting with requests still in flight"
            );
        }

        Ok(())
    }

    /// Dispatch one terminal event
    pub fn handle_terminal_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(width, height) => {
                tracing::debug!(width, height, "Terminal resized");
            }
            _ => {}
        }
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only handle Press events (not Release or Repeat)
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            // Quit
            KeyCode::Esc => self.running = false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false;
            }

            // Conversation scrolling
            KeyCode::PageUp => self.scroll_up(self.page_size()),
            KeyCode::PageDown => self.scroll_down(self.page_size()),

            _ => {
                let key = widget_key(&key);
                match key {
                    Key::Char(c) => self.input.push(c),
                    Key::Backspace => {
                        self.input.pop();
                    }
                    _ => {}
                }
                self.dispatch(&WidgetEvent::KeyPressed(key));
            }
        }
    }

    /// Handle mouse input
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self
                    .send_button
                    .contains(Position::new(mouse.column, mouse.row))
                {
                    self.dispatch(&WidgetEvent::SendClicked);
                }
            }
            MouseEventKind::ScrollUp => self.scroll_up(WHEEL_STEP),
            MouseEventKind::ScrollDown => self.scroll_down(WHEEL_STEP),
            _ => {}
        }
    }

    /// Hand an event to the widget and track any send it starts
    fn dispatch(&mut self, event: &WidgetEvent) {
        if let Some(task) = self.widget.handle_event(event) {
            tracing::debug!(request = %task.id(), "Send started");
            self.in_flight.push(task);
            self.scroll_offset = 0;
        }
    }

    /// Drop finished sends
    fn update(&mut self) {
        self.in_flight.retain(|task| !task.is_finished());
    }

    fn page_size(&self) -> usize {
        usize::from((self.conversation_height / 2).max(1))
    }

    fn scroll_up(&mut self, lines: usize) {
        let max_scroll = self.total_lines.saturating_sub(1);
        self.scroll_offset = (self.scroll_offset + lines).min(max_scroll);
    }

    fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Draw the whole screen
    pub fn draw(&mut self, frame: &mut Frame) {
        let [conversation, input_row, status] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let [input, button] =
            Layout::horizontal([Constraint::Min(1), Constraint::Length(SEND_BUTTON_WIDTH)])
                .areas(input_row);

        self.render_conversation(frame, conversation);
        self.render_input(frame, input);
        self.render_send_button(frame, button);
        self.render_status(frame, status);
    }

    /// Render conversation pane
    fn render_conversation(&mut self, frame: &mut Frame, area: Rect) {
        self.conversation_height = area.height;
        let width = usize::from(area.width.saturating_sub(1));
        let height = usize::from(area.height);
        if width == 0 || height == 0 {
            return;
        }

        // Build wrapped lines from transcript messages
        let mut all_lines: Vec<(String, Style)> = Vec::new();
        for message in self.transcript.messages() {
            let (prefix, style) = match message.role() {
                Role::User => (USER_PREFIX, Style::default().fg(USER_GREEN)),
                Role::Assistant => (BERU_PREFIX, Style::default().fg(BERU_MAGENTA)),
            };
            let content = format!("{prefix}{}", message.text());
            for line in textwrap::wrap(&content, width) {
                all_lines.push((line.into_owned(), style));
            }
            all_lines.push((String::new(), Style::default()));
        }

        self.total_lines = all_lines.len();

        // Clamp scroll offset
        let max_scroll = self.total_lines.saturating_sub(height);
        self.scroll_offset = self.scroll_offset.min(max_scroll);

        // Calculate visible range
        let visible_end = self.total_lines.saturating_sub(self.scroll_offset);
        let visible_start = visible_end.saturating_sub(height);
        let has_content_above = visible_start > 0;

        let lines: Vec<Line> = all_lines[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(i, (text, style))| {
                // First line fades when there is more above
                let style = if has_content_above && i == 0 {
                    Style::default().fg(FADE_GRAY)
                } else {
                    *style
                };
                Line::styled(text.clone(), style)
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }

    /// Render input box
    fn render_input(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(DIM_GRAY));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let text_width = usize::from(inner.width.saturating_sub(1));
        let text_height = usize::from(inner.height);
        if text_width == 0 || text_height == 0 {
            return;
        }

        let full_input = format!("{USER_PREFIX}{}_", self.input.value());
        let wrapped: Vec<String> = textwrap::wrap(&full_input, text_width)
            .into_iter()
            .map(|s| s.into_owned())
            .collect();

        // Keep the tail (where the cursor is) in view
        let skip = wrapped.len().saturating_sub(text_height);
        let lines: Vec<Line> = wrapped[skip..]
            .iter()
            .map(|line| Line::styled(line.clone(), Style::default().fg(USER_GREEN)))
            .collect();
        frame.render_widget(Paragraph::new(lines), inner);

        if skip > 0 {
            frame.render_widget(
                Paragraph::new("^").style(Style::default().fg(SCROLL_YELLOW)),
                Rect::new(area.right().saturating_sub(2), area.y, 1, 1),
            );
        }
    }

    /// Render send button and remember where it is for clicks
    fn render_send_button(&mut self, frame: &mut Frame, area: Rect) {
        self.send_button = area;

        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(DIM_GRAY));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let label_width = u16::try_from(SEND_LABEL.width()).unwrap_or(inner.width);
        let x = inner.x + inner.width.saturating_sub(label_width) / 2;
        let label_area = Rect::new(x, inner.y, label_width.min(inner.width), inner.height.min(1));
        frame.render_widget(
            Paragraph::new(SEND_LABEL).style(send_button_style()),
            label_area,
        );
    }

    /// Render status bar
    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let busy = self.in_flight.len();
        let style = if busy > 0 {
            Style::default().fg(BUSY_CYAN)
        } else {
            Style::default().fg(DIM_GRAY)
        };

        let scroll_info = if self.scroll_offset > 0 {
            format!(" [^{} lines - PgDn to scroll]", self.scroll_offset)
        } else {
            String::new()
        };

        let status = format!(
            " {} | {busy} in flight | Enter send | PgUp/PgDn scroll | Esc quit{scroll_info}",
            self.endpoint
        );

        frame.render_widget(Paragraph::new(status).style(style), area);
    }
}
