//! Form state management for the signup form

use super::field::{FieldName, FieldValue, FormField, Gender, Interest};
use super::record::SignupRecord;
use crate::validation::{ErrorMap, Schema};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Index of the submit button row, after the last field
pub const SUBMIT_INDEX: usize = FieldName::ALL.len();

/// Current values and errors of the signup form.
///
/// Always holds one [`FormField`] per [`FieldName`], stored in
/// [`FieldName::ALL`] order.
#[derive(Debug, Clone)]
pub struct SignupForm {
    fields: Vec<FormField>,
    errors: ErrorMap,
    pub active_field_index: usize,
    /// Which interest checkbox the toggle key applies to
    pub interest_cursor: usize,
}

impl SignupForm {
    pub fn new() -> Self {
        Self {
            fields: FieldName::ALL.into_iter().map(FormField::new).collect(),
            errors: ErrorMap::new(),
            active_field_index: 0,
            interest_cursor: 0,
        }
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        &self.fields[name.index()]
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn value(&self, name: FieldName) -> &FieldValue {
        &self.field(name).value
    }

    /// Text of a field; empty for choice and tag fields
    pub fn text(&self, name: FieldName) -> &str {
        self.field(name).as_text()
    }

    pub fn interests(&self) -> impl Iterator<Item = Interest> + '_ {
        self.value(FieldName::Interests)
            .as_tags()
            .into_iter()
            .flatten()
            .copied()
    }

    pub fn has_interest(&self, tag: Interest) -> bool {
        self.value(FieldName::Interests)
            .as_tags()
            .is_some_and(|tags| tags.contains(&tag))
    }

    /// Replace the value of a field. Never validates.
    ///
    /// A value of the wrong shape for the field is dropped with a warning.
    pub fn set_field(&mut self, name: FieldName, value: impl Into<FieldValue>) {
        if !self.fields[name.index()].set_value(value.into()) {
            tracing::warn!(field = %name, "ignored value of the wrong kind");
        }
    }

    /// Add or remove an interest tag
    pub fn toggle_interest(&mut self, tag: Interest, selected: bool) {
        let field = &mut self.fields[FieldName::Interests.index()];
        if !matches!(field.value, FieldValue::Tags(_)) {
            field.value = FieldValue::Tags(Default::default());
        }
        if let FieldValue::Tags(tags) = &mut field.value {
            if selected {
                tags.insert(tag);
            } else {
                tags.remove(&tag);
            }
        }
    }

    /// Restore every field to its default and clear errors
    pub fn reset(&mut self) {
        *self = Self::new();
        tracing::debug!("signup form reset");
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error_for(&self, name: FieldName) -> Option<&str> {
        self.errors.get(name)
    }

    /// Validate the whole form and replace the error map.
    ///
    /// Returns the accepted record when every field passes. Values are left
    /// in place either way; the caller resets once the record is delivered.
    pub fn submit(&mut self, schema: &Schema) -> Option<SignupRecord> {
        let outcome = schema
            .validate(self)
            .and_then(|()| SignupRecord::try_from(&*self).map_err(ErrorMap::from));

        match outcome {
            Ok(record) => {
                self.errors.clear();
                Some(record)
            }
            Err(errors) => {
                tracing::debug!(failed = errors.len(), "signup form rejected");
                self.errors = errors;
                None
            }
        }
    }

    /// The focused field, or `None` when the submit button is focused
    pub fn active_name(&self) -> Option<FieldName> {
        FieldName::ALL.get(self.active_field_index).copied()
    }

    pub fn is_submit_active(&self) -> bool {
        self.active_field_index == SUBMIT_INDEX
    }

    /// Type into the focused field if it takes text
    pub fn push_char(&mut self, c: char) {
        if let Some(field) = self.fields.get_mut(self.active_field_index) {
            if field.kind.accepts_text() {
                field.push_char(c);
            }
        }
    }

    pub fn pop_char(&mut self) {
        if let Some(field) = self.fields.get_mut(self.active_field_index) {
            if field.kind.accepts_text() {
                field.pop_char();
            }
        }
    }

    pub fn cycle_gender(&mut self, forward: bool) {
        let current = self.value(FieldName::Gender).as_choice().unwrap_or_default();
        let next = if forward { current.next() } else { current.prev() };
        self.set_field(FieldName::Gender, next);
    }

    pub fn selected_gender(&self) -> Option<Gender> {
        self.value(FieldName::Gender).as_choice()
    }

    pub fn cursor_interest(&self) -> Interest {
        Interest::ALL[self.interest_cursor % Interest::ALL.len()]
    }

    pub fn move_interest_cursor(&mut self, forward: bool) {
        let count = Interest::ALL.len();
        self.interest_cursor = if forward {
            (self.interest_cursor + 1) % count
        } else {
            (self.interest_cursor + count - 1) % count
        };
    }

    /// Flip the checkbox under the interest cursor
    pub fn toggle_cursor_interest(&mut self) {
        let tag = self.cursor_interest();
        let selected = !self.has_interest(tag);
        self.toggle_interest(tag, selected);
    }
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for SignupForm {
    fn field_count(&self) -> usize {
        SUBMIT_INDEX + 1 // fields + submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_INDEX);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeSet;

    fn schema() -> Schema {
        Schema::signup().unwrap()
    }

    fn fill_valid(form: &mut SignupForm) {
        form.set_field(FieldName::FirstName, "Ann");
        form.set_field(FieldName::LastName, "Lee");
        form.set_field(FieldName::Username, "annlee");
        form.set_field(FieldName::Email, "a@b.com");
        form.set_field(FieldName::PhoneNumber, "1234567890");
        form.set_field(FieldName::Password, "Abcdef1!");
        form.set_field(FieldName::ConfirmPassword, "Abcdef1!");
        form.set_field(FieldName::Age, "25");
        form.toggle_interest(Interest::Coding, true);
        form.set_field(FieldName::BirthDate, "1999-04-12");
        form.set_field(FieldName::City, "Pune");
        form.set_field(FieldName::State, "MH");
        form.set_field(FieldName::Zipcode, "411001");
        form.set_field(FieldName::Address, "1 Main Road");
    }

    mod container {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_has_every_field_with_defaults() {
            let form = SignupForm::new();
            assert_eq!(form.fields().len(), FieldName::ALL.len());
            for (field, name) in form.fields().iter().zip(FieldName::ALL) {
                assert_eq!(field.name, name);
            }
            assert_eq!(form.selected_gender(), Some(Gender::Male));
            assert_eq!(form.interests().count(), 0);
            assert_eq!(form.text(FieldName::Email), "");
            assert!(form.errors().is_empty());
        }

        #[test]
        fn test_set_field_replaces_without_validating() {
            let mut form = SignupForm::new();
            form.set_field(FieldName::Email, "not-an-email");
            assert_eq!(form.text(FieldName::Email), "not-an-email");
            assert!(form.errors().is_empty());
            form.set_field(FieldName::Email, "a@b.com");
            assert_eq!(form.text(FieldName::Email), "a@b.com");
        }

        #[test]
        fn test_set_field_keeps_gender_typed() {
            let mut form = SignupForm::new();
            fill_valid(&mut form);
            form.set_field(FieldName::Gender, "Male");
            assert_eq!(form.selected_gender(), Some(Gender::Male));
            let record = form.submit(&schema()).expect("gender name is accepted");
            assert_eq!(record.gender, Gender::Male);

            form.set_field(FieldName::Gender, "robot");
            assert!(form.submit(&schema()).is_none());
            assert_eq!(form.error_for(FieldName::Gender), Some("Gender is required"));
        }

        #[test]
        fn test_set_field_ignores_wrong_kind() {
            let mut form = SignupForm::new();
            form.set_field(FieldName::Age, "30");
            form.set_field(FieldName::Age, Gender::Female);
            assert_eq!(form.text(FieldName::Age), "30");
        }

        #[test]
        fn test_toggle_interest_is_idempotent() {
            let mut form = SignupForm::new();
            form.toggle_interest(Interest::Singing, true);
            form.toggle_interest(Interest::Singing, true);
            assert_eq!(form.interests().collect::<Vec<_>>(), vec![Interest::Singing]);

            form.toggle_interest(Interest::Sports, false);
            assert_eq!(form.interests().count(), 1);
        }

        #[test]
        fn test_toggle_on_then_off_restores_set() {
            let mut form = SignupForm::new();
            form.toggle_interest(Interest::Dancing, true);
            let before: BTreeSet<_> = form.interests().collect();

            form.toggle_interest(Interest::Coding, true);
            form.toggle_interest(Interest::Coding, false);

            assert_eq!(form.interests().collect::<BTreeSet<_>>(), before);
        }

        #[test]
        fn test_reset_restores_defaults_and_clears_errors() {
            let mut form = SignupForm::new();
            form.set_field(FieldName::City, "Pune");
            form.set_field(FieldName::Gender, Gender::Other);
            form.toggle_interest(Interest::Coding, true);
            form.active_field_index = 4;
            assert!(form.submit(&schema()).is_none());
            assert!(!form.errors().is_empty());

            form.reset();

            assert_eq!(form.text(FieldName::City), "");
            assert_eq!(form.selected_gender(), Some(Gender::Male));
            assert_eq!(form.interests().count(), 0);
            assert_eq!(form.active_field_index, 0);
            assert!(form.errors().is_empty());
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_failed_submit_keeps_values() {
            let mut form = SignupForm::new();
            fill_valid(&mut form);
            form.set_field(FieldName::Age, "17");

            assert!(form.submit(&schema()).is_none());
            assert_eq!(form.errors().len(), 1);
            assert_eq!(
                form.error_for(FieldName::Age),
                Some("You must be at least 18 years old")
            );
            assert_eq!(form.text(FieldName::FirstName), "Ann");
        }

        #[test]
        fn test_resubmit_reproduces_errors() {
            let mut form = SignupForm::new();
            form.set_field(FieldName::Email, "bad");
            assert!(form.submit(&schema()).is_none());
            let first = form.errors().clone();
            assert!(form.submit(&schema()).is_none());
            assert_eq!(form.errors(), &first);
        }

        #[test]
        fn test_errors_are_recomputed_not_merged() {
            let mut form = SignupForm::new();
            fill_valid(&mut form);
            form.set_field(FieldName::City, "");
            assert!(form.submit(&schema()).is_none());
            assert!(form.errors().contains(FieldName::City));

            form.set_field(FieldName::City, "Pune");
            form.set_field(FieldName::State, "");
            assert!(form.submit(&schema()).is_none());
            assert!(!form.errors().contains(FieldName::City));
            assert!(form.errors().contains(FieldName::State));
        }

        #[test]
        fn test_valid_submit_yields_record_and_clears_errors() {
            let mut form = SignupForm::new();
            form.set_field(FieldName::Email, "bad");
            assert!(form.submit(&schema()).is_none());

            fill_valid(&mut form);
            let record = form.submit(&schema()).expect("valid form is accepted");
            assert!(form.errors().is_empty());
            assert_eq!(record.first_name, "Ann");
            assert_eq!(record.age, 25.0);
            // values stay until the caller resets
            assert_eq!(form.text(FieldName::FirstName), "Ann");
        }
    }

    mod focus {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_field_count_includes_submit() {
            let form = SignupForm::new();
            assert_eq!(form.field_count(), 16);
        }

        #[test]
        fn test_next_field_wraps() {
            let mut form = SignupForm::new();
            for _ in 0..form.field_count() {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_wraps_to_submit() {
            let mut form = SignupForm::new();
            form.prev_field();
            assert!(form.is_submit_active());
            assert_eq!(form.active_name(), None);
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = SignupForm::new();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, SUBMIT_INDEX);
        }

        #[test]
        fn test_typing_goes_to_active_text_field() {
            let mut form = SignupForm::new();
            form.set_active_field(FieldName::Username.index());
            for c in "ann".chars() {
                form.push_char(c);
            }
            form.pop_char();
            assert_eq!(form.text(FieldName::Username), "an");
        }

        #[test]
        fn test_typing_ignored_on_gender_and_submit() {
            let mut form = SignupForm::new();
            form.set_active_field(FieldName::Gender.index());
            form.push_char('x');
            form.pop_char();
            assert_eq!(form.selected_gender(), Some(Gender::Male));

            form.set_active_field(SUBMIT_INDEX);
            form.push_char('x');
            assert!(form.fields().iter().all(|f| f.as_text().is_empty()));
        }

        #[test]
        fn test_cycle_gender() {
            let mut form = SignupForm::new();
            form.cycle_gender(true);
            assert_eq!(form.selected_gender(), Some(Gender::Female));
            form.cycle_gender(false);
            form.cycle_gender(false);
            assert_eq!(form.selected_gender(), Some(Gender::Other));
        }

        #[test]
        fn test_interest_cursor_toggles() {
            let mut form = SignupForm::new();
            form.move_interest_cursor(false);
            assert_eq!(form.cursor_interest(), Interest::Sports);
            form.toggle_cursor_interest();
            assert!(form.has_interest(Interest::Sports));
            form.toggle_cursor_interest();
            assert!(!form.has_interest(Interest::Sports));
        }
    }
}
