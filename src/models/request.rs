//! Prediction request model

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

/// Field names in form order
pub const FIELD_NAMES: [&str; 8] = [
    "like_count",
    "comment_count",
    "duration_seconds",
    "tag_count",
    "category_id",
    "publish_hour",
    "publish_day_of_week",
    "channel_title",
];

/// Raw field values exactly as read from the input controls
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionForm {
    pub like_count: String,
    pub comment_count: String,
    pub duration_seconds: String,
    pub tag_count: String,
    pub category_id: String,
    pub publish_hour: String,
    pub publish_day_of_week: String,
    pub channel_title: String,
}

/// Body posted to the prediction endpoint.
///
/// Numeric fields that could not be parsed are `None` and go over the wire
/// as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PredictionRequest {
    #[validate(required(message = "must be a whole number"), range(min = 0, message = "must not be negative"))]
    pub like_count: Option<i64>,

    #[validate(required(message = "must be a whole number"), range(min = 0, message = "must not be negative"))]
    pub comment_count: Option<i64>,

    #[validate(required(message = "must be a whole number"), range(min = 0, message = "must not be negative"))]
    pub duration_seconds: Option<i64>,

    #[validate(required(message = "must be a whole number"), range(min = 0, message = "must not be negative"))]
    pub tag_count: Option<i64>,

    #[validate(required(message = "must be a whole number"), range(min = 0, message = "must not be negative"))]
    pub category_id: Option<i64>,

    #[validate(required(message = "must be a whole number"), range(min = 0, max = 23, message = "must be between 0 and 23"))]
    pub publish_hour: Option<i64>,

    #[validate(required(message = "must be a whole number"), range(min = 0, max = 6, message = "must be between 0 and 6"))]
    pub publish_day_of_week: Option<i64>,

    pub channel_title: String,
}

/// Inline error for one form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// How raw numeric text is turned into request values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputPolicy {
    /// Browser `parseInt` semantics; anything unparseable is sent as `null`
    #[default]
    Lenient,
    /// Whole text must be an integer; invalid submissions are rejected
    Strict,
}

impl InputPolicy {
    pub fn parse(self, text: &str) -> Option<i64> {
        match self {
            Self::Strict => parse_int_strict(text),
            Self::Lenient => parse_int_lenient(text),
        }
    }

    pub fn validates(self) -> bool {
        self == Self::Strict
    }
}

impl FromStr for InputPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            other => Err(format!("unknown input policy: {}", other)),
        }
    }
}

/// Base-10 parse of the trimmed text
pub fn parse_int_strict(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}

/// Base-10 parse of the longest leading integer, ignoring trailing junk.
///
/// `"  42px"` is 42, `"-7.9"` is -7, `"abc"` and `""` have no value.
pub fn parse_int_lenient(text: &str) -> Option<i64> {
    let s = text.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    // Overflowing magnitudes count as unparseable
    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

impl PredictionRequest {
    /// Convert raw form text using the given policy
    pub fn from_form(form: &PredictionForm, policy: InputPolicy) -> Self {
        Self {
            like_count: policy.parse(&form.like_count),
            comment_count: policy.parse(&form.comment_count),
            duration_seconds: policy.parse(&form.duration_seconds),
            tag_count: policy.parse(&form.tag_count),
            category_id: policy.parse(&form.category_id),
            publish_hour: policy.parse(&form.publish_hour),
            publish_day_of_week: policy.parse(&form.publish_day_of_week),
            channel_title: form.channel_title.clone(),
        }
    }

    /// Run field rules, reporting failures in form order
    pub fn check(&self) -> Result<(), Vec<FieldError>> {
        self.validate().map_err(|errors| field_errors(&errors))
    }
}

fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut fields: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errs)| {
            let first = errs.first()?;
            let message = first
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| first.code.to_string());
            Some(FieldError {
                field: field.to_string(),
                message,
            })
        })
        .collect();

    fields.sort_by_key(|e| {
        FIELD_NAMES
            .iter()
            .position(|name| *name == e.field)
            .unwrap_or(usize::MAX)
    });
    fields
}
