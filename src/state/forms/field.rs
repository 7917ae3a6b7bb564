//! Form field value objects

/// Represents a single text field with its configuration and value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub label: String,
    pub placeholder: String,
    pub value: String,
    pub is_multiline: bool,
    pub is_required: bool,
}

impl FormField {
    /// Create a new single-line text field
    pub fn text(label: &str, placeholder: &str) -> Self {
        Self {
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            value: String::new(),
            is_multiline: false,
            is_required: false,
        }
    }

    /// Create a new multi-line text field
    pub fn multiline(label: &str, placeholder: &str) -> Self {
        Self {
            is_multiline: true,
            ..Self::text(label, placeholder)
        }
    }

    /// Mark the field as required for submission
    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn set_text(&mut self, value: String) {
        self.value = value;
    }

    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// A required field with no content
    pub fn is_missing(&self) -> bool {
        self.is_required && self.value.is_empty()
    }

    /// Label with a required marker
    pub fn display_label(&self) -> String {
        if self.is_required {
            format!("{} *", self.label)
        } else {
            self.label.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_starts_empty() {
        let field = FormField::text("Full Name", "e.g. James Bond");
        assert_eq!(field.as_text(), "");
        assert!(!field.is_multiline);
        assert!(!field.is_required);
    }

    #[test]
    fn test_multiline_keeps_labels() {
        let field = FormField::multiline("Your Message", "Tell us...");
        assert!(field.is_multiline);
        assert_eq!(field.label, "Your Message");
        assert_eq!(field.placeholder, "Tell us...");
    }

    #[test]
    fn test_push_and_pop() {
        let mut field = FormField::text("Phone", "");
        field.push_char('0');
        field.push_char('7');
        assert_eq!(field.as_text(), "07");
        field.pop_char();
        assert_eq!(field.as_text(), "0");
        field.pop_char();
        field.pop_char();
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_pop_handles_multibyte() {
        let mut field = FormField::text("Name", "");
        field.set_text("Zoë".to_string());
        field.pop_char();
        assert_eq!(field.as_text(), "Zo");
    }

    #[test]
    fn test_is_missing_only_for_required() {
        let optional = FormField::text("Email", "");
        assert!(!optional.is_missing());

        let mut required = FormField::text("Name", "").required();
        assert!(required.is_missing());
        required.push_char('A');
        assert!(!required.is_missing());
    }

    #[test]
    fn test_display_label_marks_required() {
        let required = FormField::text("Full Name", "").required();
        assert_eq!(required.display_label(), "Full Name *");
        let optional = FormField::text("Email", "");
        assert_eq!(optional.display_label(), "Email");
    }
}
