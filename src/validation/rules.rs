//! Field rules: named predicates evaluated in declared order

use super::error::FieldValidationError;
use crate::state::{FieldName, SignupForm};
use chrono::NaiveDate;
use regex::Regex;

/// Format accepted for date inputs
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Type alias for rule predicates; `true` means the rule holds.
type Predicate = Box<dyn Fn(&SignupForm) -> bool + Send + Sync>;

/// A single named check plus the message reported when it fails
pub struct Rule {
    code: &'static str,
    message: String,
    check: Predicate,
}

impl Rule {
    pub fn new<F>(code: &'static str, message: impl Into<String>, check: F) -> Self
    where
        F: Fn(&SignupForm) -> bool + Send + Sync + 'static,
    {
        Self {
            code,
            message: message.into(),
            check: Box::new(check),
        }
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn passes(&self, form: &SignupForm) -> bool {
        (self.check)(form)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("code", &self.code)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Result of reading a numeric input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberInput {
    /// Nothing entered
    Absent,
    Number(f64),
    /// Something entered that is not a finite number
    Invalid,
}

/// Parse a numeric input, ignoring whitespace
pub fn parse_number(raw: &str) -> NumberInput {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return NumberInput::Absent;
    }
    match compact.parse::<f64>() {
        Ok(n) if n.is_finite() => NumberInput::Number(n),
        _ => NumberInput::Invalid,
    }
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

/// The ordered rules for one field
#[derive(Debug)]
pub struct FieldRules {
    field: FieldName,
    rules: Vec<Rule>,
}

impl FieldRules {
    pub fn new(field: FieldName) -> Self {
        Self {
            field,
            rules: Vec::new(),
        }
    }

    pub fn field(&self) -> FieldName {
        self.field
    }

    #[allow(dead_code)]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Add a custom rule
    pub fn rule<F>(mut self, code: &'static str, message: impl Into<String>, check: F) -> Self
    where
        F: Fn(&SignupForm) -> bool + Send + Sync + 'static,
    {
        self.rules.push(Rule::new(code, message, check));
        self
    }

    /// Fails on an empty string, an unset choice or an empty set
    pub fn required(self, message: impl Into<String>) -> Self {
        let field = self.field;
        self.rule("required", message, move |form| !form.value(field).is_empty())
    }

    /// Text must match `pattern`; the empty string is tested like any other value
    pub fn matches(self, pattern: &str, message: impl Into<String>) -> Result<Self, regex::Error> {
        let re = Regex::new(pattern)?;
        let field = self.field;
        Ok(self.rule("matches", message, move |form| re.is_match(form.text(field))))
    }

    /// Non-empty text must look like an e-mail address
    pub fn email(self, message: impl Into<String>) -> Result<Self, regex::Error> {
        let re = Regex::new(EMAIL_PATTERN)?;
        let field = self.field;
        Ok(self.rule("email", message, move |form| {
            let value = form.text(field);
            value.is_empty() || re.is_match(value)
        }))
    }

    /// At least `min` characters
    pub fn min_len(self, min: usize, message: impl Into<String>) -> Self {
        let field = self.field;
        self.rule("min_length", message, move |form| {
            form.text(field).chars().count() >= min
        })
    }

    /// At most `max` characters
    pub fn max_len(self, max: usize, message: impl Into<String>) -> Self {
        let field = self.field;
        self.rule("max_length", message, move |form| {
            form.text(field).chars().count() <= max
        })
    }

    /// Must equal the current value of `other`
    pub fn equals_field(self, other: FieldName, message: impl Into<String>) -> Self {
        let field = self.field;
        self.rule("equals", message, move |form| {
            form.text(field) == form.text(other)
        })
    }

    /// Text must parse as a finite number. Blank input is not a number.
    pub fn number(self, message: impl Into<String>) -> Self {
        let field = self.field;
        self.rule("number", message, move |form| {
            matches!(parse_number(form.text(field)), NumberInput::Number(_))
        })
    }

    pub fn min_value(self, min: f64, message: impl Into<String>) -> Self {
        self.numeric("min", message, move |n| n >= min)
    }

    pub fn max_value(self, max: f64, message: impl Into<String>) -> Self {
        self.numeric("max", message, move |n| n <= max)
    }

    pub fn positive(self, message: impl Into<String>) -> Self {
        self.numeric("positive", message, |n| n > 0.0)
    }

    /// Applies `check` only when a number was entered
    fn numeric<F>(self, code: &'static str, message: impl Into<String>, check: F) -> Self
    where
        F: Fn(f64) -> bool + Send + Sync + 'static,
    {
        let field = self.field;
        self.rule(code, message, move |form| match parse_number(form.text(field)) {
            NumberInput::Number(n) => check(n),
            NumberInput::Absent | NumberInput::Invalid => true,
        })
    }

    /// The tag set must hold at least `min` entries
    pub fn min_items(self, min: usize, message: impl Into<String>) -> Self {
        let field = self.field;
        self.rule("min_items", message, move |form| {
            form.value(field).as_tags().map_or(0, |tags| tags.len()) >= min
        })
    }

    /// Non-empty text must be a `YYYY-MM-DD` calendar date
    pub fn date(self, message: impl Into<String>) -> Self {
        let field = self.field;
        self.rule("date", message, move |form| {
            let value = form.text(field);
            value.is_empty() || parse_date(value).is_some()
        })
    }

    /// First failing rule, if any
    pub fn evaluate(&self, form: &SignupForm) -> Option<FieldValidationError> {
        let failed = self.rules.iter().find(|rule| !rule.passes(form))?;
        tracing::trace!(field = %self.field, rule = failed.code(), "rule failed");
        Some(FieldValidationError::new(self.field, failed.message()))
    }
}

/// WHATWG "valid e-mail address"
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with(field: FieldName, value: &str) -> SignupForm {
        let mut form = SignupForm::new();
        form.set_field(field, value);
        form
    }

    mod parsing {
        use super::*;

        #[test]
        fn test_parse_number() {
            assert_eq!(parse_number(""), NumberInput::Absent);
            assert_eq!(parse_number("   "), NumberInput::Absent);
            assert_eq!(parse_number(" 2 5 "), NumberInput::Number(25.0));
            assert_eq!(parse_number("-3.5"), NumberInput::Number(-3.5));
            assert_eq!(parse_number("abc"), NumberInput::Invalid);
            assert_eq!(parse_number("inf"), NumberInput::Invalid);
            assert_eq!(parse_number("NaN"), NumberInput::Invalid);
        }

        #[test]
        fn test_parse_date() {
            assert_eq!(
                parse_date("1990-02-28"),
                NaiveDate::from_ymd_opt(1990, 2, 28)
            );
            assert!(parse_date("1990-02-30").is_none());
            assert!(parse_date("28/02/1990").is_none());
            assert!(parse_date("").is_none());
        }
    }

    mod builders {
        use super::*;

        #[test]
        fn test_required_text() {
            let rules = FieldRules::new(FieldName::City).required("City is required");
            assert!(rules.evaluate(&form_with(FieldName::City, "")).is_some());
            assert!(rules.evaluate(&form_with(FieldName::City, "Pune")).is_none());
        }

        #[test]
        fn test_required_tags() {
            let rules = FieldRules::new(FieldName::Interests).required("pick one");
            let mut form = SignupForm::new();
            assert!(rules.evaluate(&form).is_some());
            form.toggle_interest(crate::state::Interest::Dancing, true);
            assert!(rules.evaluate(&form).is_none());
        }

        #[test]
        fn test_matches_tests_empty_string() {
            let rules = FieldRules::new(FieldName::PhoneNumber)
                .matches(r"^\d{10}$", "ten digits")
                .unwrap();
            assert!(rules.evaluate(&form_with(FieldName::PhoneNumber, "")).is_some());
            assert!(rules
                .evaluate(&form_with(FieldName::PhoneNumber, "0123456789"))
                .is_none());
        }

        #[test]
        fn test_matches_rejects_bad_pattern() {
            assert!(FieldRules::new(FieldName::Email).matches("(", "x").is_err());
        }

        #[test]
        fn test_email_format() {
            let rules = FieldRules::new(FieldName::Email).email("bad").unwrap();
            for ok in ["a@b.com", "first.last+tag@sub.example.org", "a@b", ""] {
                assert!(rules.evaluate(&form_with(FieldName::Email, ok)).is_none(), "{ok}");
            }
            for bad in ["plain", "a@", "@b.com", "a b@c.com", "a@-b.com"] {
                assert!(rules.evaluate(&form_with(FieldName::Email, bad)).is_some(), "{bad}");
            }
        }

        #[test]
        fn test_length_counts_chars() {
            let rules = FieldRules::new(FieldName::Zipcode)
                .min_len(6, "six")
                .max_len(6, "six");
            assert!(rules.evaluate(&form_with(FieldName::Zipcode, "ééééé")).is_some());
            assert!(rules.evaluate(&form_with(FieldName::Zipcode, "éééééé")).is_none());
        }

        #[test]
        fn test_numeric_rules_skip_absent_and_invalid() {
            let rules = FieldRules::new(FieldName::Age)
                .min_value(18.0, "too young")
                .positive("negative");
            assert!(rules.evaluate(&form_with(FieldName::Age, "")).is_none());
            assert!(rules.evaluate(&form_with(FieldName::Age, "x")).is_none());
            assert!(rules.evaluate(&form_with(FieldName::Age, "17")).is_some());
        }

        #[test]
        fn test_number_rejects_blank_input() {
            let rules = FieldRules::new(FieldName::Age)
                .number("not a number")
                .required("required");
            for raw in ["", "   ", "abc"] {
                let err = rules.evaluate(&form_with(FieldName::Age, raw)).unwrap();
                assert_eq!(err.message, "not a number", "{raw:?}");
            }
            assert!(rules.evaluate(&form_with(FieldName::Age, " 42 ")).is_none());
        }

        #[test]
        fn test_date_rule() {
            let rules = FieldRules::new(FieldName::BirthDate).date("not a date");
            assert!(rules.evaluate(&form_with(FieldName::BirthDate, "")).is_none());
            assert!(rules
                .evaluate(&form_with(FieldName::BirthDate, "2000-13-01"))
                .is_some());
            assert!(rules
                .evaluate(&form_with(FieldName::BirthDate, "2000-12-01"))
                .is_none());
        }

        #[test]
        fn test_evaluate_reports_first_failure() {
            let rules = FieldRules::new(FieldName::Username)
                .min_len(3, "short")
                .required("required");
            let err = rules.evaluate(&form_with(FieldName::Username, "")).unwrap();
            assert_eq!(err.message, "short");
            assert_eq!(err.field, FieldName::Username);
        }

        #[test]
        fn test_rule_codes_in_order() {
            let rules = FieldRules::new(FieldName::Password)
                .min_len(8, "a")
                .required("b");
            let codes: Vec<_> = rules.rules().iter().map(Rule::code).collect();
            assert_eq!(codes, vec!["min_length", "required"]);
        }
    }
}
