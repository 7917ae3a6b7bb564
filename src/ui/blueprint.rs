//! Developer-facing design and marketing specifications

use super::widgets::{heading, muted, page_block, scroll_rows};
use crate::app::App;
use crate::content::{parse_hex_color, COLORS, CONVERSION_STRATEGY, META_TAGS, SEO_KEYWORDS, TYPOGRAPHY};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let paragraph = Paragraph::new(spec_lines())
        .wrap(Wrap { trim: false })
        .scroll((scroll_rows(app.state.scroll_offset), 0))
        .block(page_block("Blueprint", true));
    frame.render_widget(paragraph, area);
}

/// Palette, typography, SEO and conversion notes
pub fn spec_lines() -> Vec<Line<'static>> {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = vec![heading("Colour Palette")];

    for (name, hex) in COLORS {
        let swatch = match parse_hex_color(hex) {
            Some((r, g, b)) => Span::styled("    ", Style::default().bg(Color::Rgb(r, g, b))),
            None => Span::raw("    "),
        };
        lines.push(Line::from(vec![
            swatch,
            Span::raw(format!(" {name:<12}")),
            Span::styled(hex, Style::default().fg(Color::DarkGray)),
        ]));
    }

    lines.push(Line::default());
    lines.push(heading("Typography"));
    for (role, font, sample) in TYPOGRAPHY {
        lines.push(Line::from(vec![
            Span::styled(format!("{role}: "), Style::default().fg(Color::Gray)),
            Span::styled(font, bold),
        ]));
        lines.push(muted(sample));
    }

    lines.push(Line::default());
    lines.push(heading("SEO Keywords"));
    lines.push(Line::from(
        SEO_KEYWORDS
            .iter()
            .map(|k| Span::styled(format!("#{k}  "), Style::default().fg(Color::Cyan)))
            .collect::<Vec<_>>(),
    ));
    for (tag, value) in META_TAGS {
        lines.push(Line::from(Span::styled(tag, bold)));
        lines.push(muted(value));
    }

    lines.push(Line::default());
    lines.push(heading("Conversion Strategy"));
    for (strategy, note) in CONVERSION_STRATEGY {
        lines.push(Line::from(Span::styled(strategy, bold)));
        lines.push(muted(note));
    }
    lines
}
