//! Form rendering module
//!
//! - `field_renderer`: text and choice field rendering
//! - `lead_form`: the contact form panel and its confirmation

mod field_renderer;
mod lead_form;

pub use lead_form::{draw_lead_form, LEAD_FORM_WIDTH};
