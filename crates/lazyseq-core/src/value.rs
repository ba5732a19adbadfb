//! Dynamic JSON values as sources.
//!
//! A `serde_json::Value` is only pull-capable when it is an array (items) or a
//! string (one single-char string per character). Everything else is rejected
//! with `Error::Construction`, which is how `select_many` over JSON documents
//! discovers a non-collection lazily.

use serde_json::Value;

use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::source::{IntoSource, SliceCursor, SliceSource, Source, StrCursor, StrSource};

/// Short name of a JSON value's type, used in construction errors.
pub fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[derive(Clone)]
pub enum ValueSource {
    Items(SliceSource<Value>),
    Chars(StrSource),
}

impl Source for ValueSource {
    type Item = Value;
    type Cursor = ValueCursor;

    fn cursor(&self) -> Self::Cursor {
        match self {
            ValueSource::Items(items) => ValueCursor::Items(items.cursor()),
            ValueSource::Chars(chars) => ValueCursor::Chars(chars.cursor()),
        }
    }
}

pub enum ValueCursor {
    Items(SliceCursor<Value>),
    Chars(StrCursor),
}

impl Cursor for ValueCursor {
    type Item = Value;

    fn pull(&mut self) -> Result<Option<Value>> {
        match self {
            ValueCursor::Items(items) => items.pull(),
            ValueCursor::Chars(chars) => Ok(chars.pull()?.map(|ch| Value::String(ch.to_string()))),
        }
    }

    fn release(&mut self) {
        match self {
            ValueCursor::Items(items) => items.release(),
            ValueCursor::Chars(chars) => chars.release(),
        }
    }
}

impl IntoSource for Value {
    type Item = Value;
    type Source = ValueSource;

    fn into_source(self) -> Result<Self::Source> {
        match self {
            Value::Array(items) => Ok(ValueSource::Items(SliceSource::new(items))),
            Value::String(text) => Ok(ValueSource::Chars(StrSource::new(text))),
            other => Err(Error::not_iterable(describe(&other))),
        }
    }
}

impl IntoSource for &Value {
    type Item = Value;
    type Source = ValueSource;

    fn into_source(self) -> Result<Self::Source> {
        match self {
            Value::Array(items) => Ok(ValueSource::Items(SliceSource::new(items.as_slice()))),
            Value::String(text) => Ok(ValueSource::Chars(StrSource::new(text.as_str()))),
            other => Err(Error::not_iterable(describe(other))),
        }
    }
}
