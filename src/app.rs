//! Application state and core logic

use crate::config::TuiConfig;
use crate::platform::SUBMIT_MODIFIER;
use crate::state::{AppState, Form, InputKind};
use crate::submit::{build_sink, SubmissionSink};
use crate::validation::Schema;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Rules checked on submit
    schema: Schema,
    /// Receives accepted records
    sink: Box<dyn SubmissionSink>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance from the user configuration
    pub fn new(config: &TuiConfig) -> Result<Self> {
        let schema = Schema::signup()?;
        let mut app = Self::with_sink(schema, build_sink(config.sink()));
        app.state.mask_passwords = config.mask_passwords();
        tracing::debug!(sink = app.sink.name(), "app initialised");
        Ok(app)
    }

    pub fn with_sink(schema: Schema, sink: Box<dyn SubmissionSink>) -> Self {
        Self {
            state: AppState::default(),
            schema,
            sink,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Name of the active submission sink
    pub fn sink_name(&self) -> &'static str {
        self.sink.name()
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        let kind = self.state.form.active_name().map(|name| name.input_kind());

        match key.code {
            KeyCode::Char('s')
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    || key.modifiers.contains(SUBMIT_MODIFIER) =>
            {
                self.submit().await;
            }
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            // Enter submits from any field, like a browser form
            KeyCode::Enter => self.submit().await,
            KeyCode::Esc => {
                self.state.form.reset();
                self.state.status_message = Some("Form cleared".to_string());
            }
            KeyCode::Left | KeyCode::Right if kind == Some(InputKind::Select) => {
                self.state.form.cycle_gender(key.code == KeyCode::Right);
            }
            KeyCode::Left | KeyCode::Right if kind == Some(InputKind::Checkboxes) => {
                self.state.form.move_interest_cursor(key.code == KeyCode::Right);
            }
            KeyCode::Char(' ') if kind == Some(InputKind::Checkboxes) => {
                self.state.form.toggle_cursor_interest();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.form.push_char(c);
            }
            KeyCode::Backspace => self.state.form.pop_char(),
            _ => {}
        }
        Ok(())
    }

    /// Validate the form and deliver it to the sink.
    ///
    /// Failures stay inside the form's error map. The form resets only after
    /// the sink has accepted the record.
    pub async fn submit(&mut self) {
        let Some(record) = self.state.form.submit(&self.schema) else {
            let errors = self.state.form.errors();
            let count = errors.len();
            let first = errors.fields().next().copied();
            tracing::debug!(failed = count, "submit rejected by validation");
            if let Some(first) = first {
                self.state.form.set_active_field(first.index());
            }
            self.state.status_message = Some(format!("{count} field(s) need attention"));
            return;
        };

        let id = record.id;
        match self.sink.accept(record).await {
            Ok(()) => {
                tracing::info!(%id, sink = self.sink.name(), "signup accepted");
                self.state.form.reset();
                self.state.accepted_count += 1;
                self.state.status_message = Some("Form submitted".to_string());
            }
            Err(err) => {
                tracing::warn!(%id, error = %err, "submission sink failed");
                self.push_error(format!("Failed to submit form: {err}"));
            }
        }
    }
}
