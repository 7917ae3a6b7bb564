//! Application state definitions

use super::catalog::{filter_treatments, CategoryFilter, Treatment, TREATMENTS};
use super::hero_state::HeroState;
use super::lead_form::{LeadFormState, TreatmentInterest};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Treatments,
    About,
    Prices,
    Contact,
    /// Design and content specifications for developers
    Blueprint,
}

impl View {
    /// Views in sidebar order
    pub const ALL: [View; 6] = [
        Self::Home,
        Self::Treatments,
        Self::About,
        Self::Prices,
        Self::Contact,
        Self::Blueprint,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Treatments => "Treatments",
            Self::About => "About",
            Self::Prices => "Prices",
            Self::Contact => "Book Now",
            Self::Blueprint => "Specs",
        }
    }

    /// Views that embed the contact form
    pub fn hosts_lead_form(&self) -> bool {
        matches!(self, Self::Home | Self::Contact)
    }
}

/// Which part of the page receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageFocus {
    #[default]
    Content,
    LeadForm,
}

impl PageFocus {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Content => Self::LeadForm,
            Self::LeadForm => Self::Content,
        };
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub focus: PageFocus,
    pub scroll_offset: usize,

    // Treatments page
    pub category_filter: CategoryFilter,
    pub selected_index: usize,

    // Contact form, present only on views that host it
    pub lead_form: Option<LeadFormState>,

    pub hero: HeroState,
}

impl AppState {
    pub fn new() -> Self {
        let mut state = Self::default();
        state.set_view(View::Home);
        state
    }

    /// Switch the active view.
    ///
    /// Always succeeds, including for the view already shown. Scrolls back to
    /// the top; the contact view lands on its form instead.
    pub fn set_view(&mut self, view: View) {
        self.set_view_with_interest(view, None);
    }

    /// Switch view, preselecting a treatment interest on the new form
    pub fn set_view_with_interest(&mut self, view: View, interest: Option<TreatmentInterest>) {
        tracing::debug!("Navigating to {view:?}");
        self.current_view = view;
        self.scroll_offset = 0;
        self.selected_index = 0;

        // Leaving unmounts the form; entering a hosting view mounts a fresh one
        self.lead_form = if view.hosts_lead_form() {
            Some(match interest {
                Some(interest) => LeadFormState::with_interest(interest),
                None => LeadFormState::new(),
            })
        } else {
            None
        };

        self.focus = if view == View::Contact || interest.is_some() {
            PageFocus::LeadForm
        } else {
            PageFocus::Content
        };
    }

    /// Bring the contact form into view
    pub fn focus_lead_form(&mut self) {
        if self.lead_form.is_some() {
            self.focus = PageFocus::LeadForm;
        }
    }

    pub fn is_lead_form_focused(&self) -> bool {
        self.focus == PageFocus::LeadForm && self.lead_form.is_some()
    }

    /// Treatments visible under the current category filter
    pub fn visible_treatments(&self) -> Vec<&'static Treatment> {
        filter_treatments(TREATMENTS, self.category_filter)
    }

    pub fn selected_treatment(&self) -> Option<&'static Treatment> {
        self.visible_treatments().get(self.selected_index).copied()
    }

    pub fn next_category(&mut self) {
        self.category_filter = self.category_filter.next();
        self.reset_selection();
    }

    pub fn prev_category(&mut self) {
        self.category_filter = self.category_filter.prev();
        self.reset_selection();
    }

    /// Move selection down
    pub fn move_selection_down(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Reset selection
    pub fn reset_selection(&mut self) {
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    /// Scroll down, stopping at `max`
    pub fn scroll_down(&mut self, max: usize) {
        self.scroll_offset = self.scroll_offset.saturating_add(1).min(max);
    }

    /// Scroll up
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down a page (10 lines), stopping at `max`
    pub fn scroll_down_page(&mut self, max: usize) {
        self.scroll_offset = self.scroll_offset.saturating_add(10).min(max);
    }

    /// Scroll up a page (10 lines)
    pub fn scroll_up_page(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(10);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::catalog::TreatmentCategory;
    use crate::state::lead_form::LeadField;
    use pretty_assertions::assert_eq;

    mod view {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_is_home() {
            assert_eq!(View::default(), View::Home);
        }

        #[test]
        fn test_form_hosts() {
            let hosts: Vec<_> = View::ALL
                .into_iter()
                .filter(|v| v.hosts_lead_form())
                .collect();
            assert_eq!(hosts, vec![View::Home, View::Contact]);
        }
    }

    mod router {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_starts_home_with_form() {
            let state = AppState::new();
            assert_eq!(state.current_view, View::Home);
            assert!(state.lead_form.is_some());
            assert_eq!(state.focus, PageFocus::Content);
        }

        #[test]
        fn test_set_view_accepts_every_view() {
            let mut state = AppState::new();
            for view in View::ALL {
                state.set_view(view);
                assert_eq!(state.current_view, view);
            }
        }

        #[test]
        fn test_set_view_scrolls_to_top() {
            let mut state = AppState::new();
            state.scroll_down_page(20);
            state.set_view(View::Prices);
            assert_eq!(state.scroll_offset, 0);
        }

        #[test]
        fn test_contact_lands_on_form() {
            let mut state = AppState::new();
            state.set_view(View::Contact);
            assert_eq!(state.focus, PageFocus::LeadForm);
            assert!(state.is_lead_form_focused());
        }

        #[test]
        fn test_non_form_views_drop_form() {
            let mut state = AppState::new();
            state.set_view(View::About);
            assert!(state.lead_form.is_none());
            assert_eq!(state.focus, PageFocus::Content);
            state.focus_lead_form();
            assert!(!state.is_lead_form_focused());
        }

        #[test]
        fn test_same_view_is_accepted_and_recreates_form() {
            let mut state = AppState::new();
            state.set_view(View::Contact);
            if let Some(form) = state.lead_form.as_mut() {
                form.update_field(LeadField::Name, "Alex");
            }
            let first_id = state.lead_form.as_ref().map(|f| f.instance_id);

            state.set_view(View::Contact);

            assert_eq!(state.current_view, View::Contact);
            let form = state.lead_form.as_ref().unwrap();
            assert_ne!(Some(form.instance_id), first_id);
            assert_eq!(form.field(LeadField::Name), "");
        }

        #[test]
        fn test_set_view_with_interest_preselects() {
            let mut state = AppState::new();
            state.set_view_with_interest(View::Contact, Some(TreatmentInterest::DentalImplants));
            let form = state.lead_form.as_ref().unwrap();
            assert_eq!(form.treatment_interest, TreatmentInterest::DentalImplants);
        }
    }

    mod treatments {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_visible_treatments_follow_filter() {
            let mut state = AppState::new();
            state.set_view(View::Treatments);
            assert_eq!(state.visible_treatments().len(), TREATMENTS.len());

            state.next_category();
            assert_eq!(
                state.category_filter,
                CategoryFilter::Only(TreatmentCategory::General)
            );
            assert!(state
                .visible_treatments()
                .iter()
                .all(|t| t.category == TreatmentCategory::General));
        }

        #[test]
        fn test_category_change_resets_selection() {
            let mut state = AppState::new();
            state.selected_index = 3;
            state.next_category();
            assert_eq!(state.selected_index, 0);
            state.selected_index = 1;
            state.prev_category();
            assert_eq!(state.selected_index, 0);
            assert_eq!(state.category_filter, CategoryFilter::All);
        }

        #[test]
        fn test_selected_treatment() {
            let mut state = AppState::new();
            assert_eq!(state.selected_treatment().map(|t| t.id), Some(TREATMENTS[0].id));
            state.move_selection_down(state.visible_treatments().len());
            assert_eq!(state.selected_treatment().map(|t| t.id), Some(TREATMENTS[1].id));
        }

        #[test]
        fn test_selection_bounds() {
            let mut state = AppState::new();
            state.move_selection_up();
            assert_eq!(state.selected_index, 0);
            state.move_selection_down(2);
            state.move_selection_down(2);
            assert_eq!(state.selected_index, 1);
        }
    }

    mod scroll {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_scroll_saturates() {
            let mut state = AppState::new();
            state.scroll_up();
            state.scroll_up_page();
            assert_eq!(state.scroll_offset, 0);
            state.scroll_down(100);
            state.scroll_down_page(100);
            assert_eq!(state.scroll_offset, 11);
        }

        #[test]
        fn test_scroll_down_stops_at_limit() {
            let mut state = AppState::new();
            for _ in 0..50 {
                state.scroll_down_page(12);
            }
            assert_eq!(state.scroll_offset, 12);
            state.scroll_down(12);
            assert_eq!(state.scroll_offset, 12);
            state.scroll_down(0);
            assert_eq!(state.scroll_offset, 0);
        }
    }
}
