//! Error types produced while reading a scene description.

use crate::raytracer::config::object_builder::ObjectKind;
use crate::raytracer::config::scanner::MAX_STRING_LEN;
use std::io;
use thiserror::Error;

/// A malformed token, reported together with its line by [`SceneError::Syntax`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("expected '{0}'")]
    Expected(char),

    #[error("expected string")]
    ExpectedString,

    #[error("strings with escape codes are not supported")]
    EscapeSequence,

    #[error("strings may contain only printable ascii characters")]
    NonAscii,

    #[error("strings longer than {} characters are not supported", MAX_STRING_LEN)]
    StringTooLong,

    #[error("invalid number \"{0}\"")]
    InvalidNumber(String),

    #[error("expected \"type\" as the first key of an object")]
    ExpectedTypeKey,

    #[error("expected ',' or a closing bracket")]
    ExpectedSeparator,
}

#[derive(Debug, Error)]
pub enum SceneError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("unexpected end of file on line {line}")]
    UnexpectedEof { line: usize },

    #[error("{kind} on line {line}")]
    Syntax { kind: SyntaxError, line: usize },

    #[error("unknown {kind} property \"{key}\" on line {line}")]
    UnknownField {
        kind: ObjectKind,
        key: String,
        line: usize,
    },

    #[error("{kind} {key} has already been set (line {line})")]
    DuplicateField {
        kind: ObjectKind,
        key: String,
        line: usize,
    },

    #[error("{kind} {key}, {value}, is invalid on line {line}")]
    InvalidFieldValue {
        kind: ObjectKind,
        key: String,
        value: String,
        line: usize,
    },

    #[error("{kind} ending on line {line} is missing {}", .fields.join(", "))]
    MissingRequiredField {
        kind: ObjectKind,
        fields: Vec<&'static str>,
        line: usize,
    },

    #[error("unknown type \"{value}\" on line {line}")]
    UnknownObjectType { value: String, line: usize },

    #[error("scene contains no objects")]
    EmptyScene,

    #[error("a camera has already been given, second camera on line {line}")]
    DuplicateCamera { line: usize },
}

impl SceneError {
    /// Line the error was detected on, if it refers to a position in the input.
    pub fn line(&self) -> Option<usize> {
        match self {
            SceneError::Io(_) | SceneError::EmptyScene => None,
            SceneError::UnexpectedEof { line }
            | SceneError::Syntax { line, .. }
            | SceneError::UnknownField { line, .. }
            | SceneError::DuplicateField { line, .. }
            | SceneError::InvalidFieldValue { line, .. }
            | SceneError::MissingRequiredField { line, .. }
            | SceneError::UnknownObjectType { line, .. }
            | SceneError::DuplicateCamera { line } => Some(*line),
        }
    }
}

pub type SceneResult<T> = Result<T, SceneError>;
