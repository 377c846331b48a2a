use std::{error::Error, fmt};

pub type TypeResult<T> = Result<T, TypeError>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeError {
    UnknownType {
        name: String,
    },
    CyclicTypedef {
        chain: Vec<String>,
    },
    InvalidFieldSpec {
        field: String,
        reason: &'static str,
    },
    SizeMismatch {
        field: String,
        expected: usize,
        actual: usize,
        unit: &'static str,
    },
    BufferTooShort {
        field: String,
        needed: usize,
        remaining: usize,
    },
    InvalidValue {
        ty: &'static str,
        details: String,
    },
    UnknownTarget(String),
}

impl TypeError {
    pub(crate) fn unknown(name: impl Into<String>) -> Self {
        TypeError::UnknownType { name: name.into() }
    }

    pub(crate) fn invalid_field(field: impl Into<String>, reason: &'static str) -> Self {
        TypeError::InvalidFieldSpec {
            field: field.into(),
            reason,
        }
    }

    /// Rewrites the field label on errors raised below the template layer.
    pub(crate) fn in_field(self, name: &str) -> Self {
        match self {
            TypeError::SizeMismatch {
                expected,
                actual,
                unit,
                ..
            } => TypeError::SizeMismatch {
                field: name.to_owned(),
                expected,
                actual,
                unit,
            },
            TypeError::BufferTooShort {
                needed, remaining, ..
            } => TypeError::BufferTooShort {
                field: name.to_owned(),
                needed,
                remaining,
            },
            other => other,
        }
    }
}

impl fmt::Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeError::UnknownType { name } => write!(f, "unknown type '{name}'"),
            TypeError::CyclicTypedef { chain } => {
                write!(f, "cyclic typedef chain: {}", chain.join(" -> "))
            }
            TypeError::InvalidFieldSpec { field, reason } => {
                write!(f, "invalid field '{field}': {reason}")
            }
            TypeError::SizeMismatch {
                field,
                expected,
                actual,
                unit,
            } => write!(
                f,
                "field '{field}' expected {expected} {unit} but got {actual}"
            ),
            TypeError::BufferTooShort {
                field,
                needed,
                remaining,
            } => write!(
                f,
                "field '{field}' needs {needed} byte(s) but only {remaining} remain"
            ),
            TypeError::InvalidValue { ty, details } => {
                write!(f, "invalid value for {ty}: {details}")
            }
            TypeError::UnknownTarget(target) => write!(f, "unknown target '{target}'"),
        }
    }
}

impl Error for TypeError {}
