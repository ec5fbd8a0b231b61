//! Text-entry state for the login, signup and forgot-password views.

/// Identifies a field within a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Email,
    Password,
    ConfirmPassword,
}

#[derive(Debug, Clone)]
pub struct Field {
    pub id: FieldId,
    pub label: &'static str,
    pub value: String,
    /// Rendered as bullets unless the form's reveal toggle is on.
    pub masked: bool,
}

impl Field {
    fn new(id: FieldId, label: &'static str, masked: bool) -> Self {
        Self {
            id,
            label,
            value: String::new(),
            masked,
        }
    }
}

/// A fixed set of fields with one focused at a time.
#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<Field>,
    focused: usize,
    reveal_passwords: bool,
}

impl Form {
    pub fn login() -> Self {
        Self::new(vec![
            Field::new(FieldId::Email, "Email", false),
            Field::new(FieldId::Password, "Password", true),
        ])
    }

    pub fn signup() -> Self {
        Self::new(vec![
            Field::new(FieldId::Email, "Email", false),
            Field::new(FieldId::Password, "Password", true),
            Field::new(FieldId::ConfirmPassword, "Confirm Password", true),
        ])
    }

    pub fn forgot() -> Self {
        Self::new(vec![Field::new(
            FieldId::Email,
            "Enter your registered Email",
            false,
        )])
    }

    fn new(fields: Vec<Field>) -> Self {
        Self {
            fields,
            focused: 0,
            reveal_passwords: false,
        }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % self.fields.len();
    }

    pub fn focus_prev(&mut self) {
        self.focused = if self.focused == 0 {
            self.fields.len() - 1
        } else {
            self.focused - 1
        };
    }

    pub fn insert_char(&mut self, c: char) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            field.value.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            field.value.pop();
        }
    }

    pub fn toggle_reveal(&mut self) {
        self.reveal_passwords = !self.reveal_passwords;
    }

    pub fn reveal_passwords(&self) -> bool {
        self.reveal_passwords
    }

    /// Current value of a field, empty if the form has no such field.
    pub fn value(&self, id: FieldId) -> &str {
        self.fields
            .iter()
            .find(|field| field.id == id)
            .map(|field| field.value.as_str())
            .unwrap_or("")
    }

    pub fn set_value(&mut self, id: FieldId, value: impl Into<String>) {
        if let Some(field) = self.fields.iter_mut().find(|field| field.id == id) {
            field.value = value.into();
        }
    }

    /// What the view should print for a field: the raw value, or bullets for
    /// masked fields while reveal is off.
    pub fn display_value(&self, field: &Field) -> String {
        if field.masked && !self.reveal_passwords {
            "\u{2022}".repeat(field.value.chars().count())
        } else {
            field.value.clone()
        }
    }
}
