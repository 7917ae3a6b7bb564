//! Home page: hero, trust bar, highlights, reviews and the contact form

use super::forms::draw_lead_form;
use super::layout::split_form_column;
use super::widgets::{heading, muted, page_block, scroll_rows};
use crate::app::App;
use crate::content::{parse_hex_color, COLORS, REVIEWS, TRUST_BADGES, WHY_CHOOSE_US};
use crate::state::{HeroState, TREATMENTS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Hero banner height including borders
const HERO_HEIGHT: u16 = 7;

/// Number of treatments featured on the home page
const HIGHLIGHTS: usize = 4;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let content_area = match &app.state.lead_form {
        Some(form) => {
            let (content, form_area) = split_form_column(area);
            draw_lead_form(frame, form_area, form, app.state.is_lead_form_focused());
            content
        }
        None => area,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(HERO_HEIGHT), Constraint::Min(0)])
        .split(content_area);

    draw_hero(frame, chunks[0], &app.state.hero);
    draw_sections(frame, chunks[1], app);
}

/// Blend the headline colour in from the page background
fn headline_color(fade: f32) -> Color {
    let accent = COLORS
        .iter()
        .find(|(name, _)| *name == "accent")
        .and_then(|(_, hex)| parse_hex_color(hex));
    let Some((r, g, b)) = accent else {
        return Color::White;
    };
    let lerp = |to: u8| (40.0 + (f32::from(to) - 40.0) * fade.clamp(0.0, 1.0)) as u8;
    Color::Rgb(lerp(r), lerp(g), lerp(b))
}

fn draw_hero(frame: &mut Frame, area: Rect, hero: &HeroState) {
    let lines = vec![
        Line::from(Span::styled(
            "★★★★★ 4.9/5 from 500+ Google reviews",
            Style::default().fg(Color::Yellow),
        )),
        Line::from(Span::styled(
            hero.headline(),
            Style::default()
                .fg(headline_color(hero.fade))
                .add_modifier(Modifier::BOLD),
        )),
        muted("Private and NHS dentistry on Harley Street."),
        Line::from(vec![
            Span::styled(
                " Enter: Book New Patient Exam ",
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ),
            Span::raw("  "),
            Span::styled(" t: View Treatments ", Style::default().fg(Color::Cyan)),
        ]),
    ];

    let hero_widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(page_block("Welcome", false));
    frame.render_widget(hero_widget, area);
}

fn draw_sections(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = !app.state.is_lead_form_focused();
    let paragraph = Paragraph::new(section_lines())
        .wrap(Wrap { trim: false })
        .scroll((scroll_rows(app.state.scroll_offset), 0))
        .block(page_block("London Dental", is_focused));
    frame.render_widget(paragraph, area);
}

/// Trust bar, highlights, reasons and reviews below the hero
pub fn section_lines() -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(
        TRUST_BADGES
            .iter()
            .flat_map(|badge| {
                [
                    Span::styled(format!("✓ {badge}"), Style::default().fg(Color::Green)),
                    Span::raw("   "),
                ]
            })
            .collect::<Vec<_>>(),
    )];

    lines.push(Line::default());
    lines.push(heading("Our Treatments"));
    for treatment in TREATMENTS.iter().take(HIGHLIGHTS) {
        lines.push(Line::from(vec![
            Span::raw(format!("{} ", treatment.icon)),
            Span::styled(treatment.title, Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("  from {}", treatment.price_from),
                Style::default().fg(Color::Cyan),
            ),
        ]));
        lines.push(muted(treatment.description));
    }

    lines.push(Line::default());
    lines.push(heading("Why Choose Us"));
    for (title, description) in WHY_CHOOSE_US {
        lines.push(Line::from(Span::styled(
            title,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(muted(description));
    }

    lines.push(Line::default());
    lines.push(heading("What Our Patients Say"));
    for review in REVIEWS.iter() {
        lines.push(Line::from(vec![
            Span::styled(review.stars(), Style::default().fg(Color::Yellow)),
            Span::raw(format!(" {} ", review.author)),
            Span::styled(review.date, Style::default().fg(Color::DarkGray)),
        ]));
        lines.push(muted(&format!("\"{}\"", review.text)));
    }
    lines
}
