//! Fee table and finance note

use super::widgets::{muted, page_block};
use crate::app::App;
use crate::content::{FINANCE_NOTE, PRICE_LIST};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Row, Table, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(6)])
        .split(area);

    let rows: Vec<Row> = PRICE_LIST
        .iter()
        .skip(app.state.scroll_offset)
        .map(|(treatment, fee)| {
            Row::new(vec![
                Line::from(*treatment),
                Line::from(Span::styled(
                    format!("from {fee}"),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )),
            ])
        })
        .collect();

    let table = Table::new(rows, [Constraint::Min(20), Constraint::Length(14)])
        .header(
            Row::new(vec!["Treatment", "Fee"])
                .style(Style::default().fg(Color::DarkGray))
                .bottom_margin(1),
        )
        .block(page_block("Transparent Pricing", true));
    frame.render_widget(table, chunks[0]);

    let finance = Paragraph::new(vec![
        Line::from(Span::styled(
            "0% Finance Available",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        muted(FINANCE_NOTE),
        Line::from(Span::styled(
            " Enter: Check Eligibility ",
            Style::default().fg(Color::Black).bg(Color::Cyan),
        )),
    ])
    .wrap(Wrap { trim: true })
    .block(page_block("Finance", false));
    frame.render_widget(finance, chunks[1]);
}
