//! UI module for rendering the TUI

mod about;
mod blueprint;
mod components;
mod contact;
mod forms;
mod home;
mod layout;
mod prices;
mod treatments;
mod widgets;

pub use layout::{create_layout, sidebar_button_areas};

use crate::app::App;
use crate::content::{PRICE_LIST, TEAM};
use crate::state::View;
use ratatui::Frame;

/// Furthest scroll offset a page allows, keeping its last line on screen
pub fn max_scroll(view: View) -> usize {
    let lines = match view {
        View::Home => home::section_lines().len(),
        View::Contact => contact::detail_lines().len(),
        View::Blueprint => blueprint::spec_lines().len(),
        View::About => TEAM.len(),
        View::Prices => PRICE_LIST.len(),
        // Selection drives the list instead
        View::Treatments => 0,
    };
    lines.saturating_sub(1)
}

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Draw the main layout with sidebar
    let (sidebar_area, main_area) = layout::create_layout(area);

    // Draw sidebar
    layout::draw_sidebar(frame, sidebar_area, app);

    // Draw main content based on current view
    match app.state.current_view {
        View::Home => home::draw(frame, main_area, app),
        View::Treatments => treatments::draw(frame, main_area, app),
        View::About => about::draw(frame, main_area, app),
        View::Prices => prices::draw(frame, main_area, app),
        View::Contact => contact::draw(frame, main_area, app),
        View::Blueprint => blueprint::draw(frame, main_area, app),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);
}
