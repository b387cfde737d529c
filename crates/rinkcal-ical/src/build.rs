//! iCalendar serialisation (RFC 5545 §3.1, §3.3).
//!
//! Content lines are `NAME:VALUE`, text values escaped, every line folded
//! at 75 octets with a single-space continuation, CRLF endings.

use chrono::Duration;

use crate::model::{Component, Property, Value};

/// Maximum octets per content line before folding (RFC 5545 §3.1).
const FOLD_LIMIT: usize = 75;

/// Serialises a component tree to iCalendar text.
#[must_use]
pub fn serialize(root: &Component) -> String {
    let mut out = String::new();
    write_component(root, &mut out);
    out
}

fn write_component(component: &Component, out: &mut String) {
    push_line(out, &format!("BEGIN:{}", component.kind));
    for property in &component.properties {
        push_line(out, &property_line(property));
    }
    for child in &component.children {
        write_component(child, out);
    }
    push_line(out, &format!("END:{}", component.kind));
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(&fold_line(line));
    out.push_str("\r\n");
}

fn property_line(property: &Property) -> String {
    format!("{}:{}", property.name, format_value(&property.value))
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Text(text) => escape_text(text),
        Value::DateTime(dt) => dt.format("%Y%m%dT%H%M%S").to_string(),
        Value::Utc(dt) => dt.format("%Y%m%dT%H%M%SZ").to_string(),
        Value::Duration(duration) => format_duration(*duration),
        Value::Integer(n) => n.to_string(),
    }
}

/// Escapes a TEXT value (RFC 5545 §3.3.11): backslash, semicolon, comma and
/// newline become escape sequences; bare carriage returns are dropped.
#[must_use]
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            ';' => escaped.push_str("\\;"),
            ',' => escaped.push_str("\\,"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            other => escaped.push(other),
        }
    }
    escaped
}

/// Folds a content line at 75 octets (RFC 5545 §3.1).
///
/// Continuation lines begin with one space, which counts against their
/// budget. Splits stay on UTF-8 character boundaries, so a line may come up
/// a few octets short of the limit rather than cut a character in half.
#[must_use]
pub fn fold_line(line: &str) -> String {
    if line.len() <= FOLD_LIMIT {
        return line.to_string();
    }

    let mut parts: Vec<String> = Vec::new();
    let mut current = String::new();
    // First physical line holds 75 octets; continuations lead with a space.
    let mut budget = FOLD_LIMIT;
    for c in line.chars() {
        if current.len() + c.len_utf8() > budget {
            parts.push(std::mem::take(&mut current));
            budget = FOLD_LIMIT - 1;
        }
        current.push(c);
    }
    if !current.is_empty() {
        parts.push(current);
    }
    parts.join("\r\n ")
}

/// Formats a DURATION value (RFC 5545 §3.3.6), e.g. `-PT1H` or `PT10M`.
fn format_duration(duration: Duration) -> String {
    let negative = duration < Duration::zero();
    let mut seconds = duration.num_seconds().unsigned_abs();

    let days = seconds / 86_400;
    seconds %= 86_400;
    let hours = seconds / 3_600;
    seconds %= 3_600;
    let minutes = seconds / 60;
    seconds %= 60;

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push('P');
    if days > 0 {
        out.push_str(&format!("{days}D"));
    }
    if hours > 0 || minutes > 0 || seconds > 0 || days == 0 {
        out.push('T');
        if hours > 0 {
            out.push_str(&format!("{hours}H"));
        }
        if minutes > 0 {
            out.push_str(&format!("{minutes}M"));
        }
        if seconds > 0 || (hours == 0 && minutes == 0) {
            out.push_str(&format!("{seconds}S"));
        }
    }
    out
}
