//! Treatments page: category filter bar, treatment list and detail

use super::widgets::{muted, page_block, render_scrollable_list};
use crate::app::App;
use crate::state::{category_counts, CategoryFilter, Treatment, TREATMENTS};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    draw_filter_bar(frame, v_chunks[0], app.state.category_filter);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(v_chunks[1]);

    draw_list(frame, h_chunks[0], app);
    draw_detail(frame, h_chunks[1], app.state.selected_treatment());
}

/// One tab per category, with the number of treatments in it
fn draw_filter_bar(frame: &mut Frame, area: Rect, filter: CategoryFilter) {
    let tab = |label: String, is_active: bool| {
        let style = if is_active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        [Span::styled(format!(" {label} "), style), Span::raw(" ")]
    };

    let mut spans: Vec<Span> = tab(
        format!("All ({})", TREATMENTS.len()),
        filter == CategoryFilter::All,
    )
    .into();
    for (category, count) in category_counts(TREATMENTS) {
        spans.extend(tab(
            format!("{} ({count})", category.label()),
            filter == CategoryFilter::Only(category),
        ));
    }

    let bar = Paragraph::new(Line::from(spans)).block(page_block("Filter", false));
    frame.render_widget(bar, area);
}

fn draw_list(frame: &mut Frame, area: Rect, app: &App) {
    let treatments = app.state.visible_treatments();
    let title = format!("Treatments - {}", app.state.category_filter.label());

    if treatments.is_empty() {
        let empty = Paragraph::new("No treatments in this category.")
            .style(Style::default().fg(Color::DarkGray))
            .block(page_block(&title, true));
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = treatments
        .iter()
        .enumerate()
        .map(|(idx, treatment)| {
            let is_selected = idx == app.state.selected_index;
            let prefix = if is_selected { "▸ " } else { "  " };

            let style = if is_selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(format!("{} ", treatment.icon), style),
                Span::styled(treatment.title, style.add_modifier(Modifier::BOLD)),
                Span::styled(
                    format!("  {}", treatment.price_from),
                    style.fg(Color::Cyan),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(page_block(&title, true));
    render_scrollable_list(frame, area, list, app.state.selected_index);
}

fn draw_detail(frame: &mut Frame, area: Rect, treatment: Option<&Treatment>) {
    let Some(treatment) = treatment else {
        frame.render_widget(page_block("Details", false), area);
        return;
    };

    let mut lines = vec![
        Line::from(vec![
            Span::raw(format!("{} ", treatment.icon)),
            Span::styled(
                treatment.title,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            treatment.category.label(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::default(),
        Line::from(treatment.description),
        Line::default(),
    ];

    for feature in treatment.features {
        lines.push(Line::from(vec![
            Span::styled("✓ ", Style::default().fg(Color::Green)),
            Span::raw(*feature),
        ]));
    }

    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::raw("From "),
        Span::styled(
            treatment.price_from,
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::default());
    lines.push(match treatment.interest {
        Some(interest) => muted(&format!("Enter: book a {} consultation", interest.label())),
        None => muted("Enter: book a consultation"),
    });

    let detail = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(page_block("Details", false));
    frame.render_widget(detail, area);
}
