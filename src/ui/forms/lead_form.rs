//! Contact form panel shown on the home and contact pages

use super::field_renderer::{draw_choice_field, draw_field, draw_help_text};
use crate::content::{CONSENT_NOTE, FORM_INTRO, RESPONSE_TIME_NOTE};
use crate::platform::{COPY_LINK_SHORTCUT, SEND_SHORTCUT};
use crate::state::{LeadField, LeadFormState, SubmissionStatus};
use crate::ui::components::{render_cta_button, BUTTON_HEIGHT};
use crate::ui::widgets::{heading, muted, page_block};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Preferred width of the panel beside page content
pub const LEAD_FORM_WIDTH: u16 = 46;

/// Draw the contact form, or the confirmation once submitted
pub fn draw_lead_form(frame: &mut Frame, area: Rect, form: &LeadFormState, is_focused: bool) {
    let block = page_block("Request a Consultation", is_focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match form.status {
        SubmissionStatus::Submitted => draw_summary(frame, inner, form),
        SubmissionStatus::Editing | SubmissionStatus::Submitting => {
            draw_fields(frame, inner, form, is_focused)
        }
    }
}

fn draw_fields(frame: &mut Frame, area: Rect, form: &LeadFormState, is_focused: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Intro
            Constraint::Length(3),             // Name
            Constraint::Length(3),             // Phone
            Constraint::Length(3),             // Email
            Constraint::Length(3),             // Treatment interest
            Constraint::Min(4),                // Message
            Constraint::Length(3),             // Consent
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(1),             // Response time
            Constraint::Length(1),             // Help
        ])
        .split(area);

    frame.render_widget(Paragraph::new(muted(FORM_INTRO)), chunks[0]);
    let field_chunks = &chunks[1..6];

    let is_locked = !form.is_editing();
    let active = if is_focused {
        form.active_lead_field()
    } else {
        None
    };

    for (idx, field) in LeadField::ORDER.iter().enumerate() {
        let is_active = active == Some(*field);
        match form.text_field(*field) {
            Some(text) => {
                // Empty required fields turn yellow after a failed submit
                let flag_missing = form.validation_shown && text.is_missing();
                draw_field(frame, field_chunks[idx], text, is_active, is_locked, flag_missing)
            }
            None => draw_choice_field(
                frame,
                field_chunks[idx],
                field.label(),
                form.treatment_interest.label(),
                is_active,
                is_locked,
            ),
        }
    }

    let consent = Paragraph::new(Line::from(vec![
        Span::styled("✓ ", Style::default().fg(Color::Green)),
        Span::styled(CONSENT_NOTE, Style::default().fg(Color::DarkGray)),
    ]))
    .wrap(Wrap { trim: true });
    frame.render_widget(consent, chunks[6]);

    let label = match form.status {
        SubmissionStatus::Submitting => "Sending...",
        _ => "Send Request via WhatsApp",
    };
    render_cta_button(
        frame,
        chunks[7],
        label,
        is_focused && form.is_submit_button_active(),
        form.can_submit(),
    );

    let response_time = Paragraph::new(Line::from(Span::styled(
        RESPONSE_TIME_NOTE,
        Style::default().fg(Color::Gray),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(response_time, chunks[8]);

    let help = if is_locked {
        "Please wait...".to_string()
    } else {
        format!("Tab:next  ←/→:treatment  {SEND_SHORTCUT}:send  Esc:page")
    };
    draw_help_text(frame, chunks[9], &help);
}

fn draw_summary(frame: &mut Frame, area: Rect, form: &LeadFormState) {
    let sent_at = form
        .submitted_at
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_default();

    let mut lines = vec![
        Line::from(Span::styled(
            "✓ Request sent",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        muted(&format!("WhatsApp opened with your details at {sent_at}.")),
        Line::default(),
        heading("Message sent"),
    ];

    match &form.last_link {
        Some(link) => lines.extend(
            link.decoded_text()
                .lines()
                .map(|l| Line::from(l.to_string())),
        ),
        None => {
            for field in LeadField::ORDER {
                let value = form.field(field);
                if value.is_empty() {
                    continue;
                }
                lines.push(Line::from(vec![
                    Span::styled(format!("{}: ", field.label()), Style::default().fg(Color::Gray)),
                    Span::raw(value.to_string()),
                ]));
            }
        }
    }

    lines.push(Line::default());
    lines.push(muted("Nothing happened? Send again or copy the link."));
    lines.push(Line::from(Span::styled(
        format!("e:edit & resend  {COPY_LINK_SHORTCUT}:copy link"),
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}
