//! Layout components (sidebar, form column, status bar)

use super::components::{render_sidebar_button, BUTTON_HEIGHT};
use super::forms::LEAD_FORM_WIDTH;
use crate::app::App;
use crate::content::{CLINIC_ADDRESS, CLINIC_NAME, CLINIC_PHONE, CLINIC_TAGLINE};
use crate::platform::SEND_SHORTCUT;
use crate::state::{SubmissionStatus, View};
use chrono::Datelike;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Sidebar width in columns
const SIDEBAR_WIDTH: u16 = 20;

/// Brand header height at the top of the sidebar
const BRAND_HEIGHT: u16 = 3;

/// Create the main layout with sidebar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SIDEBAR_WIDTH), // Sidebar
            Constraint::Min(0),                // Main content
        ])
        .split(area);

    // Reserve bottom line for status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(chunks[1]);

    let sidebar_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Sidebar content
            Constraint::Length(1), // Status bar continuation
        ])
        .split(chunks[0]);

    (sidebar_chunks[0], main_chunks[0])
}

/// Split a page into content and the contact form column
pub fn split_form_column(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(LEAD_FORM_WIDTH)])
        .split(area);
    (chunks[0], chunks[1])
}

fn sidebar_chunks(area: Rect) -> std::rc::Rc<[Rect]> {
    let mut constraints = vec![Constraint::Length(BRAND_HEIGHT), Constraint::Min(0)];
    constraints.extend(View::ALL.iter().map(|_| Constraint::Length(BUTTON_HEIGHT)));
    constraints.push(Constraint::Min(0));

    Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area)
}

/// Areas of the sidebar buttons, one per view in [`View::ALL`] order
pub fn sidebar_button_areas(area: Rect) -> Vec<Rect> {
    sidebar_chunks(area)[2..2 + View::ALL.len()].to_vec()
}

/// Draw the sidebar with the brand and boxed navigation buttons
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = sidebar_chunks(area);

    let brand = Paragraph::new(vec![
        Line::from(Span::styled(
            CLINIC_NAME,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            CLINIC_TAGLINE,
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(brand, chunks[0]);

    for (idx, (view, button_area)) in View::ALL
        .iter()
        .zip(sidebar_button_areas(area))
        .enumerate()
    {
        let key = shortcut_for(idx);
        render_sidebar_button(
            frame,
            button_area,
            key,
            view.label(),
            app.state.current_view == *view,
        );
    }
}

fn shortcut_for(idx: usize) -> char {
    char::from_digit(idx as u32 + 1, 10).unwrap_or(' ')
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        format!(" ☎ {CLINIC_PHONE} "),
        Style::default().fg(Color::Cyan),
    )];

    // View-specific hints
    spans.push(Span::styled(
        get_view_hints(app),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Address and copyright on the right
    let footer = format!(
        " {}, {} · © {} {CLINIC_NAME} ",
        CLINIC_ADDRESS[0],
        CLINIC_ADDRESS[1],
        chrono::Local::now().year()
    );
    let footer_width = footer.chars().count() as u16;
    if footer_width * 2 < area.width {
        let footer_area = Rect {
            x: area.width.saturating_sub(footer_width),
            y: area.height.saturating_sub(1),
            width: footer_width,
            height: 1,
        };
        let footer_widget =
            Paragraph::new(footer).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
        frame.render_widget(footer_widget, footer_area);
    }
}

/// Get keyboard hints for the current view and focus
fn get_view_hints(app: &App) -> String {
    if app.state.is_lead_form_focused() {
        return match app.state.lead_form.as_ref().map(|f| f.status) {
            Some(SubmissionStatus::Submitting) => "Sending your request...".to_string(),
            Some(SubmissionStatus::Submitted) => "e:edit  Esc:page".to_string(),
            _ => format!("Tab:next  {SEND_SHORTCUT}:send  Esc:page"),
        };
    }

    match app.state.current_view {
        View::Home => "1-6:nav  Enter:book  t:treatments  Tab:form  j/k:scroll  q:quit".to_string(),
        View::Treatments => "j/k:select  ←/→:category  Enter:book  1-6:nav  q:quit".to_string(),
        View::Prices => "Enter:check eligibility  j/k:scroll  1-6:nav  q:quit".to_string(),
        View::Contact => "Tab:form  j/k:scroll  1-6:nav  q:quit".to_string(),
        View::About | View::Blueprint => "j/k:scroll  b:book  1-6:nav  q:quit".to_string(),
    }
}
