//! iCalendar (RFC 5545) emission for the fixtures calendar.
//!
//! `rinkcal-core` produces abstract event records; this crate turns them
//! into VCALENDAR/VEVENT/VALARM components and serialises those to the
//! iCalendar text format (content lines, text escaping, 75-octet folding,
//! CRLF). Emission only — nothing here parses calendar text back.

pub mod build;
pub mod events;
pub mod model;

pub use build::serialize;
pub use events::{to_calendar, to_ics};
pub use model::{Component, ComponentKind, Property, Value};
