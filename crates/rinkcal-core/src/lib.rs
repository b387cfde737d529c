//! Domain core for the club fixtures calendar generator.
//!
//! Everything in this crate is a pure function of immutable inputs: a season
//! of fixtures and a team directory are built once from their raw file
//! mappings, and the event / display layers derive values from them without
//! touching the filesystem or the terminal. File discovery, YAML parsing and
//! output rendering live in `rinkcal-app`; iCalendar text encoding lives in
//! `rinkcal-ical`.

pub mod constants;
pub mod display;
pub mod error;
pub mod event;
pub mod fixture;
pub mod input;
pub mod league;
pub mod team;

pub use display::{DisplayRow, format_row, format_rows};
pub use error::{CoreError, CoreResult};
pub use event::{Alarm, CalendarEvent, build_event, build_events};
pub use fixture::{Fixture, Outcome, Reschedule, Venue};
pub use league::League;
pub use team::{OpponentName, Team, TeamDirectory};
