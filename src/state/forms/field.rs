//! Form field value objects

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Every field of the signup form, in display order.
///
/// The derived ordering follows declaration order, so maps keyed by
/// `FieldName` iterate the way the form is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FirstName,
    LastName,
    Username,
    Email,
    PhoneNumber,
    Age,
    City,
    State,
    Zipcode,
    Address,
    BirthDate,
    Password,
    ConfirmPassword,
    Gender,
    Interests,
}

impl FieldName {
    pub const ALL: [FieldName; 15] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Username,
        FieldName::Email,
        FieldName::PhoneNumber,
        FieldName::Age,
        FieldName::City,
        FieldName::State,
        FieldName::Zipcode,
        FieldName::Address,
        FieldName::BirthDate,
        FieldName::Password,
        FieldName::ConfirmPassword,
        FieldName::Gender,
        FieldName::Interests,
    ];

    /// Position of this field in [`FieldName::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Key used in serialized records and error maps
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Username => "username",
            Self::Email => "email",
            Self::PhoneNumber => "phoneNumber",
            Self::Age => "age",
            Self::City => "city",
            Self::State => "state",
            Self::Zipcode => "zipcode",
            Self::Address => "address",
            Self::BirthDate => "birthDate",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::Gender => "gender",
            Self::Interests => "interests",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Username => "Username",
            Self::Email => "Email",
            Self::PhoneNumber => "Phone Number",
            Self::Age => "Age",
            Self::City => "City",
            Self::State => "State",
            Self::Zipcode => "ZipCode",
            Self::Address => "Address",
            Self::BirthDate => "Date Of Birth",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
            Self::Gender => "Gender",
            Self::Interests => "Interests",
        }
    }

    pub fn input_kind(self) -> InputKind {
        match self {
            Self::Email => InputKind::Email,
            Self::Age => InputKind::Number,
            Self::BirthDate => InputKind::Date,
            Self::Password | Self::ConfirmPassword => InputKind::Password,
            Self::Gender => InputKind::Select,
            Self::Interests => InputKind::Checkboxes,
            _ => InputKind::Text,
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a field is edited and rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Number,
    Date,
    Password,
    Select,
    Checkboxes,
}

impl InputKind {
    /// Whether typed characters go into this field
    pub fn accepts_text(self) -> bool {
        !matches!(self, Self::Select | Self::Checkboxes)
    }

    /// Placeholder shown while the field is empty
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Date => "YYYY-MM-DD",
            _ => "(empty)",
        }
    }
}

/// Gender selector options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn next(&self) -> Self {
        match self {
            Self::Male => Self::Female,
            Self::Female => Self::Other,
            Self::Other => Self::Male,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Male => Self::Other,
            Self::Female => Self::Male,
            Self::Other => Self::Female,
        }
    }

    /// Case-insensitive lookup by display name
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(name))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

/// Interest tags offered as checkboxes
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Interest {
    Coding,
    Singing,
    Dancing,
    Sports,
}

impl Interest {
    pub const ALL: [Interest; 4] = [
        Interest::Coding,
        Interest::Singing,
        Interest::Dancing,
        Interest::Sports,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Coding => "coding",
            Self::Singing => "singing",
            Self::Dancing => "dancing",
            Self::Sports => "sports",
        }
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Choice(Option<Gender>),
    Tags(BTreeSet<Interest>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    /// Get the text value (returns empty string for choice and tag values)
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Choice(_) | FieldValue::Tags(_) => "",
        }
    }

    pub fn as_choice(&self) -> Option<Gender> {
        match self {
            FieldValue::Choice(g) => *g,
            _ => None,
        }
    }

    pub fn as_tags(&self) -> Option<&BTreeSet<Interest>> {
        match self {
            FieldValue::Tags(tags) => Some(tags),
            _ => None,
        }
    }

    /// True for an empty string, an unset choice or an empty tag set
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Choice(g) => g.is_none(),
            FieldValue::Tags(tags) => tags.is_empty(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<Gender> for FieldValue {
    fn from(value: Gender) -> Self {
        FieldValue::Choice(Some(value))
    }
}

impl From<BTreeSet<Interest>> for FieldValue {
    fn from(value: BTreeSet<Interest>) -> Self {
        FieldValue::Tags(value)
    }
}

/// A single form field with its declared default and current value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: FieldName,
    pub label: &'static str,
    pub kind: InputKind,
    pub value: FieldValue,
}

impl FormField {
    /// Create a field holding its declared default
    pub fn new(name: FieldName) -> Self {
        let kind = name.input_kind();
        let value = match kind {
            InputKind::Select => FieldValue::Choice(Some(Gender::default())),
            InputKind::Checkboxes => FieldValue::Tags(BTreeSet::new()),
            _ => FieldValue::Text(String::new()),
        };
        Self {
            name,
            label: name.label(),
            kind,
            value,
        }
    }

    pub fn as_text(&self) -> &str {
        self.value.as_text()
    }

    /// Store `value` if it fits this field's kind.
    ///
    /// Text given to the gender selector is read as a gender name; an unknown
    /// name leaves the choice unset. Any other mismatch is refused and the
    /// current value kept.
    pub fn set_value(&mut self, value: FieldValue) -> bool {
        let value = match (self.kind, value) {
            (InputKind::Select, FieldValue::Text(name)) => {
                FieldValue::Choice(Gender::from_name(&name))
            }
            (InputKind::Select, value @ FieldValue::Choice(_)) => value,
            (InputKind::Checkboxes, value @ FieldValue::Tags(_)) => value,
            (kind, value @ FieldValue::Text(_)) if kind.accepts_text() => value,
            _ => return false,
        };
        self.value = value;
        true
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) = &mut self.value {
            s.push(c);
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self, mask_passwords: bool) -> String {
        match &self.value {
            FieldValue::Text(s) if mask_passwords && self.kind == InputKind::Password => {
                "•".repeat(s.chars().count())
            }
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice(Some(g)) => g.as_str().to_string(),
            FieldValue::Choice(None) => String::new(),
            FieldValue::Tags(tags) => tags
                .iter()
                .map(Interest::as_str)
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_name_index_matches_all_order() {
        for (i, name) in FieldName::ALL.iter().enumerate() {
            assert_eq!(name.index(), i);
        }
    }

    #[test]
    fn test_field_name_serializes_camel_case() {
        let json = serde_json::to_string(&FieldName::PhoneNumber).unwrap();
        assert_eq!(json, "\"phoneNumber\"");
    }

    #[test]
    fn test_gender_cycles() {
        assert_eq!(Gender::Other.next(), Gender::Male);
        assert_eq!(Gender::Male.prev(), Gender::Other);
        assert_eq!(Gender::default(), Gender::Male);
    }

    #[test]
    fn test_new_field_defaults() {
        assert_eq!(
            FormField::new(FieldName::Gender).value,
            FieldValue::Choice(Some(Gender::Male))
        );
        assert!(FormField::new(FieldName::Interests).value.is_empty());
        assert_eq!(FormField::new(FieldName::Email).as_text(), "");
    }

    #[test]
    fn test_push_and_pop_char() {
        let mut field = FormField::new(FieldName::City);
        field.push_char('L');
        field.push_char('A');
        field.pop_char();
        assert_eq!(field.as_text(), "L");
    }

    #[test]
    fn test_push_char_ignored_for_choice() {
        let mut field = FormField::new(FieldName::Gender);
        field.push_char('x');
        assert_eq!(field.value, FieldValue::Choice(Some(Gender::Male)));
    }

    #[test]
    fn test_set_value_reads_gender_names() {
        let mut field = FormField::new(FieldName::Gender);
        assert!(field.set_value(FieldValue::from(" female ")));
        assert_eq!(field.value, FieldValue::Choice(Some(Gender::Female)));
        assert!(field.set_value(FieldValue::from("unknown")));
        assert_eq!(field.value, FieldValue::Choice(None));
    }

    #[test]
    fn test_set_value_refuses_mismatched_kind() {
        let mut city = FormField::new(FieldName::City);
        city.set_value(FieldValue::from("Pune"));
        assert!(!city.set_value(FieldValue::from(Gender::Male)));
        assert!(!city.set_value(FieldValue::Tags(BTreeSet::new())));
        assert_eq!(city.as_text(), "Pune");

        let mut interests = FormField::new(FieldName::Interests);
        assert!(!interests.set_value(FieldValue::from("coding")));
        assert_eq!(interests.value, FieldValue::Tags(BTreeSet::new()));
    }

    #[test]
    fn test_display_value_masks_passwords() {
        let mut field = FormField::new(FieldName::Password);
        field.value = FieldValue::from("secret");
        assert_eq!(field.display_value(true), "••••••");
        assert_eq!(field.display_value(false), "secret");
    }

    #[test]
    fn test_display_value_joins_tags() {
        let mut field = FormField::new(FieldName::Interests);
        field.value = FieldValue::from(BTreeSet::from([Interest::Sports, Interest::Coding]));
        assert_eq!(field.display_value(true), "coding, sports");
    }
}
