//! Per-cell value rendering
//!
//! Turns one track field into one output cell. Every input maps to
//! some string (possibly empty); rendering never fails.

use super::fields::{FieldColumn, LOCATION_KEY, TOTAL_TIME_KEY};
use super::rewrite::PathRewrite;
use crate::model::Track;
use chrono::{DateTime, Utc};
use plist::Value;
use std::time::SystemTime;

/// Render one field mapping entry for one track record
///
/// Rules, in precedence order:
/// 1. the duration field stored as integer milliseconds renders as
///    whole seconds (truncated);
/// 2. timestamps render as `DD/MM/YYYY, HH:MM`;
/// 3. the location column is percent-decoded, stripped of its
///    `file://` prefix, and passed through the rewrite policy;
///    a present but non-string location renders empty;
/// 4. anything else renders in its natural string form, absent
///    values as the empty string.
pub fn field_value(track: &Track, column: &FieldColumn, rewrite: &dyn PathRewrite) -> String {
    let value = match track.field(&column.source) {
        Some(value) => value,
        None => return String::new(),
    };

    if column.source == TOTAL_TIME_KEY {
        if let Some(millis) = value.as_signed_integer() {
            return (millis / 1000).to_string();
        }
    }

    if let Value::Date(date) = value {
        return format_timestamp(date);
    }

    if column.source == LOCATION_KEY {
        return match value.as_string() {
            Some(uri) => rewrite.rewrite(&decode_location(uri)),
            None => String::new(),
        };
    }

    display_value(value)
}

/// Remove characters that are invalid for filenames
///
/// Strips `\ / * ? : " < > |`; whitespace and unicode pass through.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '\\' | '/' | '*' | '?' | ':' | '"' | '<' | '>' | '|'))
        .collect()
}

/// Percent-decode a location URI and strip the `file://` prefix
///
/// Only the literal scheme prefix is removed; this is not a general
/// URI parse. Undecodable input passes through unchanged.
fn decode_location(uri: &str) -> String {
    let decoded = match urlencoding::decode(uri) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => uri.to_string(),
    };

    match decoded.strip_prefix("file://") {
        Some(stripped) => stripped.to_string(),
        None => decoded,
    }
}

/// Format a property-list date as `DD/MM/YYYY, HH:MM`
///
/// The stored instant is formatted as carried (UTC), with no
/// timezone conversion.
fn format_timestamp(date: &plist::Date) -> String {
    let system_time: SystemTime = date.clone().into();
    let datetime: DateTime<Utc> = system_time.into();
    datetime.format("%d/%m/%Y, %H:%M").to_string()
}

/// Natural string form of a scalar value; composites render empty
fn display_value(value: &Value) -> String {
    if let Some(s) = value.as_string() {
        return s.to_string();
    }
    if let Some(n) = value.as_signed_integer() {
        return n.to_string();
    }
    if let Some(n) = value.as_unsigned_integer() {
        return n.to_string();
    }
    if let Some(r) = value.as_real() {
        return r.to_string();
    }
    if let Some(b) = value.as_boolean() {
        return b.to_string();
    }
    String::new()
}
