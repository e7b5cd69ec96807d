//! Accepted signup records

use super::field::{FieldName, Gender, Interest};
use super::form_state::SignupForm;
use crate::validation::rules::{parse_date, parse_number, NumberInput};
use crate::validation::FieldValidationError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Typed copy of a form that passed validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRecord {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub confirm_password: String,
    pub age: f64,
    pub gender: Gender,
    pub interests: BTreeSet<Interest>,
    pub birth_date: NaiveDate,
    pub city: String,
    pub state: String,
    pub zipcode: String,
    pub address: String,
}

impl SignupRecord {
    /// JSON with both password fields masked, for logs
    pub fn to_redacted_json(&self) -> serde_json::Result<String> {
        let mut value = serde_json::to_value(self)?;
        if let Some(obj) = value.as_object_mut() {
            for key in [FieldName::Password, FieldName::ConfirmPassword] {
                if let Some(v) = obj.get_mut(key.as_str()) {
                    *v = serde_json::Value::from("********");
                }
            }
        }
        serde_json::to_string(&value)
    }
}

impl TryFrom<&SignupForm> for SignupRecord {
    type Error = FieldValidationError;

    fn try_from(form: &SignupForm) -> Result<Self, Self::Error> {
        let text = |name: FieldName| form.text(name).to_string();

        let age = match parse_number(form.text(FieldName::Age)) {
            NumberInput::Number(n) => n,
            NumberInput::Absent | NumberInput::Invalid => {
                return Err(FieldValidationError::new(
                    FieldName::Age,
                    "Age must be a number",
                ))
            }
        };
        let birth_date = parse_date(form.text(FieldName::BirthDate)).ok_or_else(|| {
            FieldValidationError::new(FieldName::BirthDate, "Birth date must be a valid date")
        })?;
        let gender = form
            .selected_gender()
            .ok_or_else(|| FieldValidationError::new(FieldName::Gender, "Gender is required"))?;

        Ok(Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            first_name: text(FieldName::FirstName),
            last_name: text(FieldName::LastName),
            username: text(FieldName::Username),
            email: text(FieldName::Email),
            phone_number: text(FieldName::PhoneNumber),
            password: text(FieldName::Password),
            confirm_password: text(FieldName::ConfirmPassword),
            age,
            gender,
            interests: form.interests().collect(),
            birth_date,
            city: text(FieldName::City),
            state: text(FieldName::State),
            zipcode: text(FieldName::Zipcode),
            address: text(FieldName::Address),
        })
    }
}
