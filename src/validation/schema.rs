//! The signup validation schema

use super::error::{ErrorMap, FieldValidationError};
use super::rules::FieldRules;
use crate::state::{FieldName, SignupForm};

const PHONE_PATTERN: &str = r"^[0-9]{10}$";
const SYMBOL_PATTERN: &str = r#"[!@#$%^&*(),.?":{}|<>]"#;
const DIGIT_PATTERN: &str = "[0-9]";
const UPPERCASE_PATTERN: &str = "[A-Z]";
const LOWERCASE_PATTERN: &str = "[a-z]";

const MIN_PASSWORD_LEN: usize = 8;
const ZIPCODE_LEN: usize = 6;
const MIN_AGE: f64 = 18.0;
const MAX_AGE: f64 = 100.0;

/// Per-field rule lists evaluated against a whole form
#[derive(Debug)]
pub struct Schema {
    fields: Vec<FieldRules>,
}

impl Schema {
    pub fn new(fields: Vec<FieldRules>) -> Self {
        Self { fields }
    }

    /// The rules of the signup form
    pub fn signup() -> Result<Self, regex::Error> {
        use FieldName::*;

        Ok(Self::new(vec![
            FieldRules::new(FirstName).required("First name is required"),
            FieldRules::new(LastName).required("Last name is required"),
            FieldRules::new(Email)
                .required("Email is required")
                .email("Invalid email format")?,
            FieldRules::new(Username).required("Username is required"),
            FieldRules::new(PhoneNumber)
                .matches(PHONE_PATTERN, "Phone number must be 10 digits")?
                .required("Phone number is required"),
            FieldRules::new(Password)
                .min_len(
                    MIN_PASSWORD_LEN,
                    format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
                )
                .matches(SYMBOL_PATTERN, "Password must contain at least one symbol")?
                .matches(DIGIT_PATTERN, "Password must contain at least one number")?
                .matches(
                    UPPERCASE_PATTERN,
                    "Password must contain at least one uppercase letter",
                )?
                .matches(
                    LOWERCASE_PATTERN,
                    "Password must contain at least one lowercase letter",
                )?
                .required("Password is required"),
            FieldRules::new(ConfirmPassword)
                .equals_field(Password, "Passwords must match")
                .required("Confirm password is required"),
            FieldRules::new(Age)
                .number("Age must be a number")
                .min_value(MIN_AGE, "You must be at least 18 years old")
                .max_value(MAX_AGE, "You cannot be older than 100 years")
                .positive("Age cannot be negative")
                .required("Age is required"),
            FieldRules::new(Gender).required("Gender is required"),
            FieldRules::new(Interests)
                .min_items(1, "Select at least one interest")
                .required("Select at least one interest"),
            FieldRules::new(BirthDate)
                .required("Birth date is required")
                .date("Birth date must be a valid date"),
            FieldRules::new(City).required("City is required"),
            FieldRules::new(State).required("State is required"),
            FieldRules::new(Zipcode)
                .min_len(ZIPCODE_LEN, "Zip code must be 6 characters long")
                .max_len(ZIPCODE_LEN, "Zip code must be 6 characters long")
                .required("Zip code is required"),
            FieldRules::new(Address).required("Address is required"),
        ]))
    }

    pub fn field_rules(&self, field: FieldName) -> Option<&FieldRules> {
        self.fields.iter().find(|rules| rules.field() == field)
    }

    /// Check a single field against the current form
    #[allow(dead_code)]
    pub fn validate_field(&self, field: FieldName, form: &SignupForm) -> Option<FieldValidationError> {
        self.field_rules(field).and_then(|rules| rules.evaluate(form))
    }

    /// Check every field; all failing fields are reported
    pub fn validate(&self, form: &SignupForm) -> Result<(), ErrorMap> {
        let errors: ErrorMap = self
            .fields
            .iter()
            .filter_map(|rules| rules.evaluate(form))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
