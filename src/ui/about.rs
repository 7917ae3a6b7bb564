//! About page with team cards

use super::widgets::{heading, muted, page_block};
use crate::app::App;
use crate::content::{TeamMember, TEAM};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const INTRO: &str = "For over two decades we have combined clinical excellence with a calm, \
                     patient-first approach in the heart of London.";

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = page_block("Meet Our Team", true);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(3)];
    constraints.extend(TEAM.iter().map(|_| Constraint::Length(7)));
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let intro = Paragraph::new(vec![heading("About London Dental"), muted(INTRO)])
        .wrap(Wrap { trim: true });
    frame.render_widget(intro, chunks[0]);

    // Cards scroll out of view from the top
    for (idx, member) in TEAM.iter().enumerate().skip(app.state.scroll_offset) {
        let slot = idx + 1 - app.state.scroll_offset;
        draw_member(frame, chunks[slot], member);
    }
}

fn draw_member(frame: &mut Frame, area: Rect, member: &TeamMember) {
    let specialties: Vec<Span> = member
        .specialties
        .iter()
        .flat_map(|s| {
            [
                Span::styled(format!("[{s}]"), Style::default().fg(Color::Cyan)),
                Span::raw(" "),
            ]
        })
        .collect();

    let lines = vec![
        Line::from(Span::styled(
            member.role,
            Style::default().fg(Color::Gray),
        )),
        Line::from(member.bio),
        Line::from(specialties),
    ];

    let card = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(Span::styled(
                format!(" {} ", member.name),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(card, area);
}
