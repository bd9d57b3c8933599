//! Main application state and event loop

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;

use crate::{
    editing,
    receipts::ReadReceipts,
    ui::{self, RenderState},
};

/// Messages that can be sent to the app from background tasks
#[derive(Debug)]
pub enum AppMessage {
    /// A sent message was acknowledged as read
    MessageRead(u64),
}

/// Delivery state of an outgoing message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStatus {
    /// Delivered, shown as a single tick
    Received,
    /// Seen by the peer, shown as a double tick
    Read,
}

/// A single message in the conversation
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: u64,
    pub body: String,
    pub sent_at: chrono::DateTime<chrono::Local>,
    pub status: MessageStatus,
}

/// Application state
pub struct App {
    /// Terminal handle
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// App bar title
    title: String,
    /// Conversation history for display
    messages: Vec<ChatMessage>,
    /// Current input text
    input: String,
    /// Input cursor position (byte offset, always on a char boundary)
    cursor_position: usize,
    /// Scroll offset for conversation view
    scroll_offset: usize,
    /// Input history
    input_history: Vec<String>,
    /// Current position in input history
    history_index: Option<usize>,
    /// Should quit
    should_quit: bool,
    /// Status message
    status_message: Option<String>,
    /// Read-receipt simulator
    receipts: ReadReceipts,
    /// App message receiver
    message_rx: mpsc::Receiver<AppMessage>,
}

impl App {
    pub fn new(title: String, read_delay_ms: u64) -> Result<Self> {
        // Set up terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        // Create message channel
        let (message_tx, message_rx) = mpsc::channel(100);
        let receipts = ReadReceipts::new(message_tx, Duration::from_millis(read_delay_ms));

        Ok(Self {
            terminal,
            title,
            messages: Vec::new(),
            input: String::new(),
            cursor_position: 0,
            scroll_offset: 0,
            input_history: Vec::new(),
            history_index: None,
            should_quit: false,
            status_message: None,
            receipts,
            message_rx,
        })
    }

    /// Main event loop
    pub async fn run(&mut self) -> Result<()> {
        loop {
            // Draw UI
            self.draw()?;

            // Handle events with timeout
            tokio::select! {
                // Check for terminal events
                _ = tokio::time::sleep(Duration::from_millis(16)) => {
                    if event::poll(Duration::from_millis(0))? {
                        if let Event::Key(key) = event::read()? {
                            self.handle_key_event(key);
                        }
                    }
                }

                // Check for app messages
                Some(msg) = self.message_rx.recv() => {
                    self.handle_app_message(msg);
                }
            }

            if self.should_quit {
                break;
            }
        }

        // Cleanup
        self.cleanup()?;
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        // Extract state for rendering
        let state = RenderState {
            title: &self.title,
            messages: &self.messages,
            input: &self.input,
            cursor_position: self.cursor_position,
            scroll_offset: self.scroll_offset,
            status_message: self.status_message.as_deref(),
        };

        // A layout failure is a composition error; it aborts the frame
        // and surfaces as a hard error from the run loop.
        let mut rendered = Ok(());
        self.terminal.draw(|frame| {
            rendered = ui::draw(frame, &state);
        })?;
        rendered
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            // Quit
            (KeyModifiers::CONTROL, KeyCode::Char('q')) => {
                self.should_quit = true;
            }
            // Clear input
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
                self.input.clear();
                self.cursor_position = 0;
            }
            // Word-wise editing
            (KeyModifiers::CONTROL, KeyCode::Char('w')) => {
                let (input, pos) = editing::delete_word_backward(&self.input, self.cursor_position);
                self.input = input;
                self.cursor_position = pos;
            }
            (KeyModifiers::CONTROL, KeyCode::Char('u')) => {
                self.input = editing::delete_to_start(&self.input, self.cursor_position);
                self.cursor_position = 0;
            }
            (KeyModifiers::CONTROL, KeyCode::Char('k')) => {
                self.input = editing::delete_to_end(&self.input, self.cursor_position);
            }
            // Submit input
            (_, KeyCode::Enter) => {
                if !self.input.is_empty() {
                    self.submit_input();
                }
            }
            // Character input
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
                self.input.insert(self.cursor_position, c);
                self.cursor_position += c.len_utf8();
            }
            // Backspace
            (_, KeyCode::Backspace) => {
                if self.cursor_position > 0 {
                    let start = editing::prev_char(&self.input, self.cursor_position);
                    self.input.drain(start..self.cursor_position);
                    self.cursor_position = start;
                }
            }
            // Delete
            (_, KeyCode::Delete) => {
                if self.cursor_position < self.input.len() {
                    let end = editing::next_char(&self.input, self.cursor_position);
                    self.input.drain(self.cursor_position..end);
                }
            }
            // Cursor movement
            (_, KeyCode::Left) => {
                self.cursor_position = editing::prev_char(&self.input, self.cursor_position);
            }
            (_, KeyCode::Right) => {
                self.cursor_position = editing::next_char(&self.input, self.cursor_position);
            }
            (_, KeyCode::Home) => {
                self.cursor_position = 0;
            }
            (_, KeyCode::End) => {
                self.cursor_position = self.input.len();
            }
            // History navigation
            (_, KeyCode::Up) => {
                self.navigate_history(-1);
            }
            (_, KeyCode::Down) => {
                self.navigate_history(1);
            }
            // Scroll conversation
            (_, KeyCode::PageUp) => {
                self.scroll_offset = self.scroll_offset.saturating_add(10);
            }
            (_, KeyCode::PageDown) => {
                self.scroll_offset = self.scroll_offset.saturating_sub(10);
            }
            _ => {}
        }
    }

    fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input);
        self.cursor_position = 0;

        // Save to history
        self.input_history.push(input.clone());
        self.history_index = None;

        if input.starts_with('/') {
            self.handle_slash_command(&input);
        } else {
            self.send_message(input);
        }
    }

    fn handle_slash_command(&mut self, input: &str) {
        let parts: Vec<&str> = input[1..].splitn(2, ' ').collect();
        let command = parts[0];

        match command {
            "quit" | "q" => {
                self.should_quit = true;
            }
            "clear" => {
                self.messages.clear();
                self.scroll_offset = 0;
            }
            "help" => {
                self.status_message = Some(
                    "/quit /clear · Ctrl+W delete word · Ctrl+U/K kill line · PgUp/PgDn scroll"
                        .to_string(),
                );
            }
            _ => {
                self.status_message = Some(format!("Unknown command: /{}", command));
            }
        }
    }

    fn send_message(&mut self, body: String) {
        let id = self.messages.len() as u64 + 1;
        tracing::debug!(id, "sending message");

        self.messages.push(ChatMessage {
            id,
            body,
            sent_at: chrono::Local::now(),
            status: MessageStatus::Received,
        });
        self.receipts.acknowledge(id);

        // Reset scroll to see new messages
        self.scroll_offset = 0;
        self.status_message = None;
    }

    fn navigate_history(&mut self, direction: i32) {
        if self.input_history.is_empty() {
            return;
        }

        let new_index = match self.history_index {
            None if direction < 0 => Some(self.input_history.len() - 1),
            Some(i) if direction < 0 && i > 0 => Some(i - 1),
            Some(i) if direction > 0 && i < self.input_history.len() - 1 => Some(i + 1),
            Some(_) if direction > 0 => None,
            idx => idx,
        };

        self.history_index = new_index;
        self.input = match new_index {
            Some(i) => self.input_history[i].clone(),
            None => String::new(),
        };
        self.cursor_position = self.input.len();
    }

    fn handle_app_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::MessageRead(id) => {
                if let Some(message) = self.messages.iter_mut().find(|m| m.id == id) {
                    message.status = MessageStatus::Read;
                    tracing::debug!(id, "message read");
                }
            }
        }
    }

    fn cleanup(&mut self) -> Result<()> {
        // Restore terminal
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}
