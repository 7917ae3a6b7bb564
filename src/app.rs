//! Application state and core logic

use crate::lead::{LeadConfig, LinkOpener};
use crate::state::{
    AppState, Form, LeadField, PendingSubmission, SubmissionStatus, View,
};
use crate::ui;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use tokio::sync::mpsc;
use tokio::time::Instant;

/// Events delivered back to the UI loop from background tasks
#[derive(Debug)]
pub enum AppEvent {
    /// The simulated transmission delay of a submission has elapsed
    SubmissionSettled(PendingSubmission),
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Settings for building lead links
    pub lead_config: LeadConfig,
    /// Opens deep links outside the terminal
    opener: Box<dyn LinkOpener>,
    events_tx: mpsc::UnboundedSender<AppEvent>,
    events_rx: mpsc::UnboundedReceiver<AppEvent>,
    /// Submissions whose delay has not elapsed yet
    in_flight: usize,
    /// Whether the app should quit
    quit: bool,
    /// Feedback shown in the status bar
    pub status_message: Option<String>,
    /// Terminal size for hit testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    /// Create a new App instance
    pub fn new(lead_config: LeadConfig, opener: Box<dyn LinkOpener>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(),
            lead_config,
            opener,
            events_tx,
            events_rx,
            in_flight: 0,
            quit: false,
            status_message: None,
            terminal_size: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether a submission is waiting on its delay
    pub fn has_pending_submission(&self) -> bool {
        self.in_flight > 0
    }

    /// Per-frame updates
    pub fn tick(&mut self) {
        self.state.hero.update();
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        if self.state.is_lead_form_focused() {
            self.handle_lead_form_key(key)
        } else {
            self.handle_page_key(key)
        }
    }

    /// Keys shared by every page while the form is not focused
    fn handle_page_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char(c @ '1'..='6') => {
                let idx = c as usize - '1' as usize;
                self.state.set_view(View::ALL[idx]);
            }
            KeyCode::Char('b') => self.state.set_view(View::Contact),
            KeyCode::Char('?') => self.state.set_view(View::Blueprint),
            KeyCode::Tab => self.state.focus_lead_form(),
            KeyCode::PageDown => {
                let limit = self.scroll_limit();
                self.state.scroll_down_page(limit);
            }
            KeyCode::PageUp => self.state.scroll_up_page(),
            _ => match self.state.current_view {
                View::Home => self.handle_home_key(key),
                View::Treatments => self.handle_treatments_key(key),
                View::Prices => self.handle_prices_key(key),
                View::About | View::Contact | View::Blueprint => self.handle_scroll_key(key),
            },
        }
        Ok(())
    }

    fn handle_scroll_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                let limit = self.scroll_limit();
                self.state.scroll_down(limit);
            }
            KeyCode::Up | KeyCode::Char('k') => self.state.scroll_up(),
            _ => {}
        }
    }

    /// Furthest scroll offset for the current page
    fn scroll_limit(&self) -> usize {
        ui::max_scroll(self.state.current_view)
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            // "Book New Patient Exam"
            KeyCode::Enter => self.state.set_view(View::Contact),
            KeyCode::Char('t') => self.state.set_view(View::Treatments),
            _ => self.handle_scroll_key(key),
        }
    }

    fn handle_treatments_key(&mut self, key: KeyEvent) {
        let count = self.state.visible_treatments().len();
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.state.move_selection_down(count),
            KeyCode::Up | KeyCode::Char('k') => self.state.move_selection_up(),
            KeyCode::Right | KeyCode::Char('f') => self.state.next_category(),
            KeyCode::Left | KeyCode::Char('F') => self.state.prev_category(),
            KeyCode::Enter => {
                let interest = self.state.selected_treatment().and_then(|t| t.interest);
                self.state.set_view_with_interest(View::Contact, interest);
            }
            _ => {}
        }
    }

    fn handle_prices_key(&mut self, key: KeyEvent) {
        match key.code {
            // "Check Eligibility"
            KeyCode::Enter => self.state.set_view(View::Contact),
            _ => self.handle_scroll_key(key),
        }
    }

    /// Keys while the contact form has focus
    fn handle_lead_form_key(&mut self, key: KeyEvent) -> Result<()> {
        let Some(status) = self.state.lead_form.as_ref().map(|f| f.status) else {
            return Ok(());
        };

        if key.code == KeyCode::Esc {
            self.state.focus.toggle();
            return Ok(());
        }

        match status {
            SubmissionStatus::Editing => self.handle_editing_key(key),
            // Controls are disabled until the delay elapses
            SubmissionStatus::Submitting => {}
            SubmissionStatus::Submitted => match key.code {
                KeyCode::Char('e') | KeyCode::Enter => self.reset_lead_form(),
                KeyCode::Char('y') if key.modifiers.contains(crate::platform::COPY_MODIFIER) => {
                    self.copy_last_link()?;
                }
                _ => {}
            },
        }
        Ok(())
    }

    fn handle_editing_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.submit();
            return;
        }

        let Some(form) = self.state.lead_form.as_mut() else {
            return;
        };
        let active = form.active_lead_field();

        match key.code {
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Left if active == Some(LeadField::TreatmentInterest) => {
                form.cycle_treatment_interest(false)
            }
            KeyCode::Right if active == Some(LeadField::TreatmentInterest) => {
                form.cycle_treatment_interest(true)
            }
            KeyCode::Enter => match active {
                None => self.submit(),
                // Enter in the message field adds a newline
                Some(LeadField::Message) => form.input_char('\n'),
                Some(_) => form.next_field(),
            },
            KeyCode::Backspace => form.backspace(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                form.input_char(c)
            }
            _ => {}
        }
    }

    /// Handle pasted text.
    ///
    /// Appends to the focused text field while editing. On the treatment
    /// field a pasted option label selects that option.
    pub fn handle_paste(&mut self, text: &str) {
        if !self.state.is_lead_form_focused() {
            return;
        }
        let Some(form) = self.state.lead_form.as_mut() else {
            return;
        };
        let Some(field) = form.active_lead_field() else {
            return;
        };
        let value = match field {
            LeadField::TreatmentInterest => text.to_string(),
            _ => format!("{}{text}", form.field(field)),
        };
        form.update_field(field, value);
    }

    /// Submit the contact form.
    ///
    /// With a required field empty nothing is sent; focus jumps to the first
    /// empty required field. Otherwise the form goes to `Submitting` and a
    /// timer task posts [`AppEvent::SubmissionSettled`] once the configured
    /// delay has elapsed.
    pub fn submit(&mut self) {
        let Some(form) = self.state.lead_form.as_mut() else {
            return;
        };

        let Some(pending) = form.begin_submit(&self.lead_config) else {
            if let Some(missing) = form.missing_fields().first() {
                if let Some(idx) = LeadField::ORDER.iter().position(|f| f == missing) {
                    form.set_active_field(idx);
                }
            }
            return;
        };

        let deadline = Instant::now() + pending.latency;
        let tx = self.events_tx.clone();
        self.in_flight += 1;
        tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            if tx.send(AppEvent::SubmissionSettled(pending)).is_err() {
                tracing::debug!("UI loop gone before submission settled");
            }
        });
    }

    /// Return the form to editing after a submission
    pub fn reset_lead_form(&mut self) {
        if let Some(form) = self.state.lead_form.as_mut() {
            form.reset_to_editing();
        }
    }

    /// Apply events posted by background tasks
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event);
        }
    }

    /// Wait for the next background event
    #[cfg(test)]
    pub async fn next_event(&mut self) -> Option<AppEvent> {
        self.events_rx.recv().await
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::SubmissionSettled(pending) => self.finish_submission(pending),
        }
    }

    /// Complete a settled submission and open its link exactly once
    fn finish_submission(&mut self, pending: PendingSubmission) {
        self.in_flight = self.in_flight.saturating_sub(1);

        // The form may have been unmounted by navigation in the meantime
        let mounted = match self.state.lead_form.as_mut() {
            Some(form) if form.instance_id == pending.form_id => {
                form.complete_submit();
                true
            }
            _ => false,
        };

        match self.opener.open(pending.link.as_str()) {
            Ok(()) => {
                tracing::debug!(form_id = %pending.form_id, "Opened lead link");
                self.status_message = Some("Opening WhatsApp...".to_string());
            }
            Err(e) => {
                tracing::warn!("Failed to open lead link: {e}");
                self.status_message = Some(format!(
                    "Could not open WhatsApp ({e}). {} copies the link.",
                    crate::platform::COPY_LINK_SHORTCUT
                ));
            }
        }

        if mounted {
            self.state.focus_lead_form();
        }
    }

    fn copy_last_link(&mut self) -> Result<()> {
        let link = self
            .state
            .lead_form
            .as_ref()
            .and_then(|f| f.last_link.as_ref())
            .map(|l| l.as_str().to_string());
        if let Some(link) = link {
            self.copy_to_clipboard(&link)?;
            self.status_message = Some("Link copied".to_string());
        }
        Ok(())
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }

    /// Handle a mouse event
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(view) = self.sidebar_view_at(mouse.column, mouse.row) {
                    self.state.set_view(view);
                }
            }
            MouseEventKind::ScrollDown => {
                let limit = self.scroll_limit();
                self.state.scroll_down(limit);
            }
            MouseEventKind::ScrollUp => self.state.scroll_up(),
            _ => {}
        }
        Ok(())
    }

    /// Sidebar button under a screen position
    fn sidebar_view_at(&self, column: u16, row: u16) -> Option<View> {
        let (height, width) = self.terminal_size?;
        let (sidebar, _) = ui::create_layout(Rect::new(0, 0, width, height));
        ui::sidebar_button_areas(sidebar)
            .into_iter()
            .position(|area| area.contains(Position::new(column, row)))
            .map(|idx| View::ALL[idx])
    }
}
