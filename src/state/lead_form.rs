//! Lead form state and submission lifecycle
//!
//! A form instance moves through `Editing -> Submitting -> Submitted` and back
//! to `Editing` only through [`LeadFormState::reset_to_editing`]. Field writes
//! are accepted only while editing.

use super::forms::{Form, FormField};
use crate::lead::{build_deep_link, DeepLink, LeadConfig, LeadMessage};
use chrono::{DateTime, Local};
use std::time::Duration;
use uuid::Uuid;

/// Lifecycle of one lead form instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

/// Service the prospective patient is interested in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreatmentInterest {
    #[default]
    GeneralCheckUp,
    Invisalign,
    DentalImplants,
    TeethWhitening,
    EmergencyCare,
}

impl TreatmentInterest {
    pub const ALL: [TreatmentInterest; 5] = [
        Self::GeneralCheckUp,
        Self::Invisalign,
        Self::DentalImplants,
        Self::TeethWhitening,
        Self::EmergencyCare,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::GeneralCheckUp => "General Check-up",
            Self::Invisalign => "Invisalign Transformation",
            Self::DentalImplants => "Dental Implants",
            Self::TeethWhitening => "Teeth Whitening",
            Self::EmergencyCare => "Emergency Care",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|i| i.label().eq_ignore_ascii_case(label.trim()))
    }

    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|i| i == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let idx = Self::ALL.iter().position(|i| i == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Addressable fields of the lead form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadField {
    Name,
    Phone,
    Email,
    TreatmentInterest,
    Message,
}

impl LeadField {
    /// Keyboard order of the fields; the submit button follows the last one
    pub const ORDER: [LeadField; 5] = [
        Self::Name,
        Self::Phone,
        Self::Email,
        Self::TreatmentInterest,
        Self::Message,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Phone => "Phone",
            Self::Email => "Email",
            Self::TreatmentInterest => "Treatment of Interest",
            Self::Message => "Message",
        }
    }
}

/// Index of the submit button in the focus cycle
pub const SUBMIT_BUTTON_INDEX: usize = LeadField::ORDER.len();

/// A submission waiting for its simulated transmission delay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub form_id: Uuid,
    pub link: DeepLink,
    pub latency: Duration,
}

#[derive(Debug, Clone)]
pub struct LeadFormState {
    pub instance_id: Uuid,
    pub name: FormField,
    pub phone: FormField,
    pub email: FormField,
    pub treatment_interest: TreatmentInterest,
    pub message: FormField,
    pub status: SubmissionStatus,
    pub active_field_index: usize,
    pub submitted_at: Option<DateTime<Local>>,
    pub last_link: Option<DeepLink>,
    /// Set by a submit attempt with required fields empty
    pub validation_shown: bool,
}

impl LeadFormState {
    pub fn new() -> Self {
        Self {
            instance_id: Uuid::new_v4(),
            name: FormField::text("Full Name", "e.g. James Bond").required(),
            phone: FormField::text("Phone Number", "07xxx xxxxxx").required(),
            email: FormField::text("Email Address", "name@email.com"),
            treatment_interest: TreatmentInterest::default(),
            message: FormField::multiline(
                "Your Message (Optional)",
                "Tell us about your goals or concerns...",
            ),
            status: SubmissionStatus::Editing,
            active_field_index: 0,
            submitted_at: None,
            last_link: None,
            validation_shown: false,
        }
    }

    /// New form with a preselected treatment interest
    pub fn with_interest(interest: TreatmentInterest) -> Self {
        Self {
            treatment_interest: interest,
            ..Self::new()
        }
    }

    pub fn is_editing(&self) -> bool {
        self.status == SubmissionStatus::Editing
    }

    fn text_field_mut(&mut self, field: LeadField) -> Option<&mut FormField> {
        match field {
            LeadField::Name => Some(&mut self.name),
            LeadField::Phone => Some(&mut self.phone),
            LeadField::Email => Some(&mut self.email),
            LeadField::Message => Some(&mut self.message),
            LeadField::TreatmentInterest => None,
        }
    }

    pub fn text_field(&self, field: LeadField) -> Option<&FormField> {
        match field {
            LeadField::Name => Some(&self.name),
            LeadField::Phone => Some(&self.phone),
            LeadField::Email => Some(&self.email),
            LeadField::Message => Some(&self.message),
            LeadField::TreatmentInterest => None,
        }
    }

    /// Current value of a field
    pub fn field(&self, field: LeadField) -> &str {
        match self.text_field(field) {
            Some(f) => f.as_text(),
            None => self.treatment_interest.label(),
        }
    }

    /// Write a field value. Ignored unless the form is being edited.
    ///
    /// For the treatment interest, `value` is matched against the option
    /// labels and unknown labels are ignored.
    pub fn update_field(&mut self, field: LeadField, value: impl Into<String>) {
        if !self.is_editing() {
            return;
        }
        let value = value.into();
        match self.text_field_mut(field) {
            Some(f) => f.set_text(value),
            None => {
                if let Some(interest) = TreatmentInterest::from_label(&value) {
                    self.treatment_interest = interest;
                }
            }
        }
    }

    pub fn set_treatment_interest(&mut self, interest: TreatmentInterest) {
        if self.is_editing() {
            self.treatment_interest = interest;
        }
    }

    pub fn cycle_treatment_interest(&mut self, forward: bool) {
        let next = if forward {
            self.treatment_interest.next()
        } else {
            self.treatment_interest.prev()
        };
        self.set_treatment_interest(next);
    }

    /// Field under keyboard focus, `None` on the submit button
    pub fn active_lead_field(&self) -> Option<LeadField> {
        LeadField::ORDER.get(self.active_field_index).copied()
    }

    pub fn is_submit_button_active(&self) -> bool {
        self.active_field_index == SUBMIT_BUTTON_INDEX
    }

    /// Type a character into the focused field
    pub fn input_char(&mut self, c: char) {
        if !self.is_editing() {
            return;
        }
        if let Some(field) = self.active_lead_field() {
            match self.text_field_mut(field) {
                Some(f) => f.push_char(c),
                None if c == ' ' => self.cycle_treatment_interest(true),
                None => {}
            }
        }
    }

    /// Delete the last character of the focused field
    pub fn backspace(&mut self) {
        if !self.is_editing() {
            return;
        }
        if let Some(field) = self.active_lead_field() {
            if let Some(f) = self.text_field_mut(field) {
                f.pop_char();
            }
        }
    }

    /// Required fields that are still empty
    pub fn missing_fields(&self) -> Vec<LeadField> {
        [LeadField::Name, LeadField::Phone]
            .into_iter()
            .filter(|f| self.text_field(*f).is_some_and(|field| field.is_missing()))
            .collect()
    }

    pub fn can_submit(&self) -> bool {
        self.is_editing() && self.missing_fields().is_empty()
    }

    /// Start a submission.
    ///
    /// Returns `None` and leaves the status alone when the form is not being
    /// edited, a required field is empty, or the link cannot be built. Empty
    /// required fields are marked for display from then on.
    pub fn begin_submit(&mut self, config: &LeadConfig) -> Option<PendingSubmission> {
        if !self.can_submit() {
            if self.is_editing() {
                self.validation_shown = true;
            }
            return None;
        }

        let message = LeadMessage {
            name: self.name.as_text(),
            phone: self.phone.as_text(),
            treatment: self.treatment_interest.label(),
            email: self.email.as_text(),
            message: self.message.as_text(),
        };
        let link = match build_deep_link(config, &message) {
            Ok(link) => link,
            Err(e) => {
                tracing::warn!("Could not build lead link: {e}");
                return None;
            }
        };

        self.status = SubmissionStatus::Submitting;
        self.last_link = Some(link.clone());
        tracing::debug!(form_id = %self.instance_id, "Lead submission started");

        Some(PendingSubmission {
            form_id: self.instance_id,
            link,
            latency: config.submit_latency,
        })
    }

    /// Finish the in-flight submission. Returns false when none was in flight.
    pub fn complete_submit(&mut self) -> bool {
        if self.status != SubmissionStatus::Submitting {
            return false;
        }
        self.status = SubmissionStatus::Submitted;
        self.submitted_at = Some(Local::now());
        true
    }

    /// Return to editing after a completed submission, keeping field values
    pub fn reset_to_editing(&mut self) {
        if self.status == SubmissionStatus::Submitted {
            self.status = SubmissionStatus::Editing;
            self.active_field_index = 0;
        }
    }
}

impl Default for LeadFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for LeadFormState {
    fn field_count(&self) -> usize {
        LeadField::ORDER.len() + 1 // fields + submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_BUTTON_INDEX);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled_form(name: &str, phone: &str) -> LeadFormState {
        let mut form = LeadFormState::new();
        form.update_field(LeadField::Name, name);
        form.update_field(LeadField::Phone, phone);
        form
    }

    mod treatment_interest {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_is_general_check_up() {
            assert_eq!(TreatmentInterest::default(), TreatmentInterest::GeneralCheckUp);
        }

        #[test]
        fn test_from_label_round_trips() {
            for interest in TreatmentInterest::ALL {
                assert_eq!(TreatmentInterest::from_label(interest.label()), Some(interest));
            }
            assert_eq!(
                TreatmentInterest::from_label("  dental implants "),
                Some(TreatmentInterest::DentalImplants)
            );
            assert_eq!(TreatmentInterest::from_label("Veneers"), None);
        }

        #[test]
        fn test_next_and_prev_wrap() {
            assert_eq!(
                TreatmentInterest::EmergencyCare.next(),
                TreatmentInterest::GeneralCheckUp
            );
            assert_eq!(
                TreatmentInterest::GeneralCheckUp.prev(),
                TreatmentInterest::EmergencyCare
            );
        }
    }

    mod fields {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_has_defaults() {
            let form = LeadFormState::new();
            assert_eq!(form.status, SubmissionStatus::Editing);
            assert_eq!(form.field(LeadField::Name), "");
            assert_eq!(form.field(LeadField::Phone), "");
            assert_eq!(form.field(LeadField::Email), "");
            assert_eq!(form.field(LeadField::Message), "");
            assert_eq!(form.field(LeadField::TreatmentInterest), "General Check-up");
            assert!(form.last_link.is_none());
        }

        #[test]
        fn test_instances_have_distinct_ids() {
            assert_ne!(LeadFormState::new().instance_id, LeadFormState::new().instance_id);
        }

        #[test]
        fn test_update_field_round_trip() {
            let values = ["X", "", "a&b", "100%", "k=v", "line1\nline2", "Zoë ✨"];
            for value in values {
                let mut form = LeadFormState::new();
                for field in [
                    LeadField::Name,
                    LeadField::Phone,
                    LeadField::Email,
                    LeadField::Message,
                ] {
                    form.update_field(field, value);
                    assert_eq!(form.field(field), value);
                }
            }
        }

        #[test]
        fn test_update_treatment_interest_by_label() {
            let mut form = LeadFormState::new();
            form.update_field(LeadField::TreatmentInterest, "Teeth Whitening");
            assert_eq!(form.treatment_interest, TreatmentInterest::TeethWhitening);
            form.update_field(LeadField::TreatmentInterest, "unknown");
            assert_eq!(form.treatment_interest, TreatmentInterest::TeethWhitening);
        }

        #[test]
        fn test_with_interest_preselects() {
            let form = LeadFormState::with_interest(TreatmentInterest::Invisalign);
            assert_eq!(form.treatment_interest, TreatmentInterest::Invisalign);
            assert_eq!(form.status, SubmissionStatus::Editing);
        }

        #[test]
        fn test_input_char_and_backspace_follow_focus() {
            let mut form = LeadFormState::new();
            form.input_char('A');
            form.next_field();
            form.input_char('0');
            form.input_char('7');
            form.backspace();
            assert_eq!(form.field(LeadField::Name), "A");
            assert_eq!(form.field(LeadField::Phone), "0");
        }

        #[test]
        fn test_space_on_interest_cycles_option() {
            let mut form = LeadFormState::new();
            form.set_active_field(3);
            assert_eq!(form.active_lead_field(), Some(LeadField::TreatmentInterest));
            form.input_char(' ');
            assert_eq!(form.treatment_interest, TreatmentInterest::Invisalign);
            form.input_char('x');
            assert_eq!(form.treatment_interest, TreatmentInterest::Invisalign);
        }

        #[test]
        fn test_focus_cycle_includes_submit_button() {
            let mut form = LeadFormState::new();
            assert_eq!(form.field_count(), 6);
            form.prev_field();
            assert!(form.is_submit_button_active());
            assert_eq!(form.active_lead_field(), None);
            form.next_field();
            assert_eq!(form.active_lead_field(), Some(LeadField::Name));
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = LeadFormState::new();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, SUBMIT_BUTTON_INDEX);
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_name_blocks_submit() {
            let mut form = filled_form("", "07123456789");
            assert_eq!(form.missing_fields(), vec![LeadField::Name]);
            assert!(form.begin_submit(&LeadConfig::default()).is_none());
            assert_eq!(form.status, SubmissionStatus::Editing);
            assert!(form.last_link.is_none());
        }

        #[test]
        fn test_failed_submit_marks_missing_fields() {
            let mut form = filled_form("Jane Doe", "");
            assert!(!form.validation_shown);
            assert!(form.begin_submit(&LeadConfig::default()).is_none());
            assert!(form.validation_shown);
        }

        #[test]
        fn test_complete_form_does_not_mark_missing_fields() {
            let mut form = filled_form("Jane Doe", "07123456789");
            assert!(form.begin_submit(&LeadConfig::default()).is_some());
            assert!(!form.validation_shown);
            // A second attempt while in flight is not a validation failure
            assert!(form.begin_submit(&LeadConfig::default()).is_none());
            assert!(!form.validation_shown);
        }

        #[test]
        fn test_empty_phone_blocks_submit() {
            let mut form = filled_form("Jane Doe", "");
            assert_eq!(form.missing_fields(), vec![LeadField::Phone]);
            assert!(form.begin_submit(&LeadConfig::default()).is_none());
            assert_eq!(form.status, SubmissionStatus::Editing);
        }

        #[test]
        fn test_both_empty_blocks_submit() {
            let mut form = LeadFormState::new();
            assert_eq!(form.missing_fields(), vec![LeadField::Name, LeadField::Phone]);
            assert!(!form.can_submit());
            assert!(form.begin_submit(&LeadConfig::default()).is_none());
        }

        #[test]
        fn test_begin_submit_moves_to_submitting() {
            let mut form = filled_form("Jane Doe", "07123456789");
            form.update_field(LeadField::TreatmentInterest, "Dental Implants");

            let pending = form.begin_submit(&LeadConfig::default()).unwrap();

            assert_eq!(form.status, SubmissionStatus::Submitting);
            assert_eq!(pending.form_id, form.instance_id);
            assert_eq!(pending.latency, Duration::from_millis(1200));
            assert_eq!(form.last_link.as_ref(), Some(&pending.link));

            let decoded = pending.link.decoded_text();
            let lines: Vec<&str> = decoded.lines().collect();
            assert!(lines.contains(&"Name: Jane Doe"));
            assert!(lines.contains(&"Phone: 07123456789"));
            assert!(lines.contains(&"Treatment: Dental Implants"));
        }

        #[test]
        fn test_second_begin_while_submitting_is_rejected() {
            let mut form = filled_form("Alex", "07000000000");
            assert!(form.begin_submit(&LeadConfig::default()).is_some());
            assert!(form.begin_submit(&LeadConfig::default()).is_none());
            assert_eq!(form.status, SubmissionStatus::Submitting);
        }

        #[test]
        fn test_invalid_host_leaves_form_editing() {
            let mut form = filled_form("Alex", "07000000000");
            let config = LeadConfig {
                messaging_host: "bad host".to_string(),
                ..LeadConfig::default()
            };
            assert!(form.begin_submit(&config).is_none());
            assert_eq!(form.status, SubmissionStatus::Editing);
        }

        #[test]
        fn test_fields_frozen_while_in_flight() {
            let mut form = filled_form("Alex", "07000000000");
            form.begin_submit(&LeadConfig::default());

            form.update_field(LeadField::Name, "Changed");
            form.input_char('!');
            form.backspace();
            form.cycle_treatment_interest(true);

            assert_eq!(form.field(LeadField::Name), "Alex");
            assert_eq!(form.treatment_interest, TreatmentInterest::GeneralCheckUp);

            form.complete_submit();
            form.update_field(LeadField::Name, "Changed");
            assert_eq!(form.field(LeadField::Name), "Alex");
        }

        #[test]
        fn test_complete_submit_only_from_submitting() {
            let mut form = filled_form("Alex", "07000000000");
            assert!(!form.complete_submit());
            assert_eq!(form.status, SubmissionStatus::Editing);

            form.begin_submit(&LeadConfig::default());
            assert!(form.complete_submit());
            assert_eq!(form.status, SubmissionStatus::Submitted);
            assert!(form.submitted_at.is_some());

            assert!(!form.complete_submit());
            assert_eq!(form.status, SubmissionStatus::Submitted);
        }

        #[test]
        fn test_reset_keeps_values() {
            let mut form = filled_form("Alex", "07000000000");
            form.begin_submit(&LeadConfig::default());
            form.complete_submit();

            form.reset_to_editing();

            assert_eq!(form.status, SubmissionStatus::Editing);
            assert_eq!(form.field(LeadField::Name), "Alex");
            assert_eq!(form.field(LeadField::Phone), "07000000000");
        }

        #[test]
        fn test_reset_is_noop_while_editing() {
            let mut form = filled_form("Alex", "07000000000");
            form.set_active_field(2);
            form.reset_to_editing();
            assert_eq!(form.status, SubmissionStatus::Editing);
            assert_eq!(form.active_field_index, 2);
            assert_eq!(form.field(LeadField::Name), "Alex");
        }

        #[test]
        fn test_reset_ignored_while_submitting() {
            let mut form = filled_form("Alex", "07000000000");
            form.begin_submit(&LeadConfig::default());
            form.reset_to_editing();
            assert_eq!(form.status, SubmissionStatus::Submitting);
        }

        #[test]
        fn test_resubmit_after_reset_builds_new_link() {
            let mut form = filled_form("Alex", "07000000000");
            let first = form.begin_submit(&LeadConfig::default()).unwrap();
            form.complete_submit();
            form.reset_to_editing();

            let second = form.begin_submit(&LeadConfig::default()).unwrap();

            assert_eq!(form.status, SubmissionStatus::Submitting);
            assert_eq!(first.link, second.link);
            assert_eq!(first.form_id, second.form_id);
        }

        #[test]
        fn test_optional_fields_reach_message() {
            let mut form = filled_form("Alex", "07000000000");
            form.update_field(LeadField::Email, "alex@example.com");
            form.update_field(LeadField::Message, "Nervous patient");
            let pending = form.begin_submit(&LeadConfig::default()).unwrap();
            let decoded = pending.link.decoded_text();
            assert!(decoded.contains("Email: alex@example.com"));
            assert!(decoded.contains("Message: Nervous patient"));
        }
    }
}
