//! Form domain layer
//!
//! Field value objects and the focus-cycling trait used by the lead form.

mod field;
mod form;

pub use field::FormField;
pub use form::Form;
