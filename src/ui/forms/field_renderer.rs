//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn border_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Draw a text field; the placeholder shows while the field is empty.
///
/// `flag_missing` highlights the title of a required field left empty.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    is_locked: bool,
    flag_missing: bool,
) {
    let value_style = if is_locked {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };
    let cursor = if is_active && !is_locked { "▌" } else { "" };
    let cursor_span = Span::styled(cursor, Style::default().fg(Color::Cyan));

    let mut lines: Vec<Line> = if field.value.is_empty() {
        vec![Line::from(Span::styled(
            field.placeholder.clone(),
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        field
            .value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), value_style)))
            .collect()
    };

    if field.value.is_empty() {
        lines[0].spans.insert(0, cursor_span);
    } else if let Some(last) = lines.last_mut() {
        last.spans.push(cursor_span);
    }

    let title_style = if flag_missing {
        Style::default().fg(Color::Yellow)
    } else {
        border_style(is_active)
    };

    let block = Block::default()
        .title(Span::styled(format!(" {} ", field.display_label()), title_style))
        .borders(Borders::ALL)
        .border_style(border_style(is_active));

    let mut paragraph = Paragraph::new(lines).block(block);
    if field.is_multiline {
        paragraph = paragraph.wrap(Wrap { trim: false });
    }
    frame.render_widget(paragraph, area);
}

/// Draw a one-of-many selector cycled with the arrow keys
pub fn draw_choice_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    is_active: bool,
    is_locked: bool,
) {
    let arrow_style = if is_active && !is_locked {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let value_style = if is_locked {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    let line = Line::from(vec![
        Span::styled("◂ ", arrow_style),
        Span::styled(value.to_string(), value_style),
        Span::styled(" ▸", arrow_style),
    ]);

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style(is_active));

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Draw a single line of key hints below a form
pub fn draw_help_text(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text.to_string()).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
