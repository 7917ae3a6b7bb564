//! Contact page: clinic details, opening hours and the contact form

use super::forms::draw_lead_form;
use super::layout::split_form_column;
use super::widgets::{heading, muted, page_block, scroll_rows};
use crate::app::App;
use crate::content::{CLINIC_ADDRESS, CLINIC_PHONE, OPENING_HOURS};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let details_area = match &app.state.lead_form {
        Some(form) => {
            let (details, form_area) = split_form_column(area);
            draw_lead_form(frame, form_area, form, app.state.is_lead_form_focused());
            details
        }
        None => area,
    };

    let paragraph = Paragraph::new(detail_lines())
        .wrap(Wrap { trim: false })
        .scroll((scroll_rows(app.state.scroll_offset), 0))
        .block(page_block("Contact", !app.state.is_lead_form_focused()));
    frame.render_widget(paragraph, details_area);
}

/// Phone, address, opening hours and the emergency note
pub fn detail_lines() -> Vec<Line<'static>> {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = vec![
        heading("Visit Our Clinic"),
        muted("Ready to transform your smile? Book your consultation today."),
        Line::default(),
        Line::from(Span::styled("Call Us", bold)),
        Line::from(Span::styled(CLINIC_PHONE, Style::default().fg(Color::Cyan))),
        Line::default(),
        Line::from(Span::styled("Location", bold)),
    ];
    lines.extend(CLINIC_ADDRESS.iter().map(|l| Line::from(*l)));

    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Opening Hours", bold)));
    for (days, hours) in OPENING_HOURS {
        lines.push(Line::from(vec![
            Span::styled(format!("{days:<18}"), Style::default().fg(Color::Gray)),
            Span::raw(hours),
        ]));
    }

    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled("Dental emergency? ", Style::default().fg(Color::Red)),
        Span::raw(format!("Call {CLINIC_PHONE} for same-day appointments.")),
    ]));
    lines
}
