//! Typed default values and their text codec.
//!
//! Every default is persisted as a string; `TypedValue` is the decoded,
//! tagged form served to the record-creation path. The codec table is fixed
//! per field kind: booleans store `"True"`/`"False"`, temporals use fixed
//! formats, numerics keep an exact decimal string, and the empty string is a
//! sentinel (zero for numbers, false for booleans, none for temporals).

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use fieldpreset_fields::FieldKind;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const TIME_FORMAT: &str = "%H:%M:%S";

/// A decoded default value, tagged by field kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum TypedValue {
    Boolean(bool),
    Char(String),
    Integer(i64),
    Text(String),
    Float(f64),
    Numeric(Decimal),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Time(NaiveTime),
    /// Record id of the related model, kept as a string end-to-end
    Many2One(String),
    Selection(String),
    Reference(String),
}

/// Conversion failure while decoding stored text
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("invalid integer: {0}")]
    Integer(#[from] std::num::ParseIntError),

    #[error("invalid float: {0}")]
    Float(#[from] std::num::ParseFloatError),

    #[error("invalid decimal: {0}")]
    Decimal(#[from] rust_decimal::Error),

    #[error("invalid date or time: {0}")]
    Temporal(#[from] chrono::ParseError),

    #[error("kind {0} cannot hold a default value")]
    Unsupported(&'static str),
}

impl TypedValue {
    /// The kind tag this value belongs to.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Boolean(_) => "boolean",
            Self::Char(_) => "char",
            Self::Integer(_) => "integer",
            Self::Text(_) => "text",
            Self::Float(_) => "float",
            Self::Numeric(_) => "numeric",
            Self::Date(_) => "date",
            Self::DateTime(_) => "datetime",
            Self::Time(_) => "time",
            Self::Many2One(_) => "many2one",
            Self::Selection(_) => "selection",
            Self::Reference(_) => "reference",
        }
    }

    /// Whether this value can be stored on a field of the given kind.
    pub fn matches_kind(&self, kind: &FieldKind) -> bool {
        self.kind_name() == kind.name()
    }

    /// Serialize to the stored text form.
    pub fn encode(&self) -> String {
        match self {
            Self::Boolean(true) => "True".into(),
            Self::Boolean(false) => "False".into(),
            Self::Char(s) | Self::Text(s) | Self::Selection(s) | Self::Reference(s) => s.clone(),
            Self::Integer(n) => n.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Numeric(d) => d.to_string(),
            Self::Date(d) => d.format(DATE_FORMAT).to_string(),
            Self::DateTime(dt) => dt.format(DATETIME_FORMAT).to_string(),
            Self::Time(t) => t.format(TIME_FORMAT).to_string(),
            Self::Many2One(id) => id.clone(),
        }
    }

    /// Deserialize stored text for a field of the given kind.
    ///
    /// The empty string is a sentinel: zero for numeric kinds, false for
    /// booleans, none for temporals. String-like kinds pass through as-is.
    pub fn decode(kind: &FieldKind, text: &str) -> Result<Option<Self>, CodecError> {
        let value = match kind {
            FieldKind::Boolean => Self::Boolean(text == "True"),
            FieldKind::Char => Self::Char(text.into()),
            FieldKind::Text => Self::Text(text.into()),
            FieldKind::Selection { .. } => Self::Selection(text.into()),
            FieldKind::Reference => Self::Reference(text.into()),
            FieldKind::Many2One { .. } => Self::Many2One(text.into()),
            FieldKind::Integer => {
                if text.is_empty() {
                    Self::Integer(0)
                } else {
                    Self::Integer(text.parse()?)
                }
            }
            FieldKind::Float => {
                if text.is_empty() {
                    Self::Float(0.0)
                } else {
                    Self::Float(text.parse()?)
                }
            }
            FieldKind::Numeric => {
                if text.is_empty() {
                    Self::Numeric(Decimal::ZERO)
                } else {
                    Self::Numeric(text.parse()?)
                }
            }
            FieldKind::Date => {
                if text.is_empty() {
                    return Ok(None);
                }
                Self::Date(NaiveDate::parse_from_str(text, DATE_FORMAT)?)
            }
            FieldKind::DateTime => {
                if text.is_empty() {
                    return Ok(None);
                }
                Self::DateTime(NaiveDateTime::parse_from_str(text, DATETIME_FORMAT)?)
            }
            FieldKind::Time => {
                if text.is_empty() {
                    return Ok(None);
                }
                Self::Time(NaiveTime::parse_from_str(text, TIME_FORMAT)?)
            }
            FieldKind::Computed { .. } => return Err(CodecError::Unsupported("computed")),
        };
        Ok(Some(value))
    }

    /// The value as it appears in a created record (JSON form).
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::{json, Value};
        match self {
            Self::Boolean(b) => json!(b),
            Self::Integer(n) => json!(n),
            Self::Float(f) => json!(f),
            // Exact decimals travel as strings
            Self::Numeric(d) => Value::String(d.to_string()),
            Self::Char(s) | Self::Text(s) | Self::Selection(s) | Self::Reference(s) => json!(s),
            Self::Many2One(id) => json!(id),
            Self::Date(d) => Value::String(d.format(DATE_FORMAT).to_string()),
            Self::DateTime(dt) => Value::String(dt.format(DATETIME_FORMAT).to_string()),
            Self::Time(t) => Value::String(t.format(TIME_FORMAT).to_string()),
        }
    }
}
