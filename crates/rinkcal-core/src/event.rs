//! Calendar event synthesis.
//!
//! Builds the abstract event record for each playable fixture; the
//! iCalendar text encoding is `rinkcal-ical`'s job. Everything here is a
//! pure function of (fixture, league, directory, now) — `now` only feeds
//! the DTSTAMP field, never a scheduling decision.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};

use crate::constants::{CALENDAR_DOMAIN, CLUB_INTERNAL_PREFIX};
use crate::fixture::Fixture;
use crate::league::League;
use crate::team::{OpponentName, TeamDirectory};

/// Arrive-early buffer applied to the event start.
const PRE_START_BUFFER_MINUTES: i64 = 10;
/// The reminder fires this long before the event starts.
const ALARM_LEAD_HOURS: i64 = 1;
const EVENT_PRIORITY: u8 = 5;

pub const ALARM_ACTION: &str = "DISPLAY";
pub const ALARM_DESCRIPTION: &str = "Reminder";

/// The single reminder attached to every event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alarm {
    pub action: String,
    pub description: String,
    /// Offset from the event start; negative means before.
    pub trigger: Duration,
}

impl Default for Alarm {
    fn default() -> Self {
        Self {
            action: ALARM_ACTION.to_string(),
            description: ALARM_DESCRIPTION.to_string(),
            trigger: Duration::hours(-ALARM_LEAD_HOURS),
        }
    }
}

/// One calendar event, derived per run and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    /// Stable identity: built from the original (pre-reschedule) instant so
    /// moving a match updates the existing event instead of duplicating it.
    pub uid: String,
    pub location: String,
    pub summary: String,
    pub description: String,
    /// Floating local times; the calendar carries a single zone label.
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Generation timestamp (DTSTAMP).
    pub timestamp: DateTime<Utc>,
    pub priority: u8,
    pub alarm: Alarm,
}

/// Builds the calendar event for one fixture.
///
/// Returns `None` when the fixture has no decided date — such matches stay
/// out of the calendar on purpose while the results table still lists them.
#[must_use]
pub fn build_event(
    fixture: &Fixture,
    league: &League,
    directory: &TeamDirectory,
    now: DateTime<Utc>,
) -> Option<CalendarEvent> {
    let scheduled = fixture.scheduled_datetime()?;

    let my_team = directory.get(&league.my_team_id);
    let opponent = directory.opponent_name(fixture);

    Some(CalendarEvent {
        uid: event_uid(fixture, &league.my_team_id),
        location: resolve_location(fixture, directory, &my_team.location),
        summary: summary_text(fixture, &my_team.name, &opponent),
        description: description_text(fixture, &opponent),
        start: scheduled - Duration::minutes(PRE_START_BUFFER_MINUTES),
        end: scheduled + league.event_duration(),
        timestamp: now,
        priority: EVENT_PRIORITY,
        alarm: Alarm::default(),
    })
}

/// Builds events for every playable fixture in the league, in season order.
#[must_use]
pub fn build_events(
    league: &League,
    directory: &TeamDirectory,
    now: DateTime<Utc>,
) -> Vec<CalendarEvent> {
    league
        .fixtures
        .iter()
        .filter_map(|fixture| {
            let event = build_event(fixture, league, directory, now);
            if event.is_none() {
                tracing::debug!(
                    opponent = %fixture.opponent_id,
                    "skipping match with undecided date"
                );
            }
            event
        })
        .collect()
}

/// Stable UID for a fixture.
///
/// Uses the original date/time, never the rescheduled one, so a moved match
/// keeps its identity in downstream calendar clients. The label
/// disambiguates two fixtures against the same opponent on the same
/// original date (league and cup double-headers).
fn event_uid(fixture: &Fixture, my_team_id: &str) -> String {
    let team = my_team_id.replace(' ', "");
    let stamp = fixture.original_datetime().format("%Y%m%d%H%M");
    let label = fixture.label.replace(' ', "");
    format!("{team}-{stamp}{label}@{CALENDAR_DOMAIN}")
}

fn resolve_location(fixture: &Fixture, directory: &TeamDirectory, my_location: &str) -> String {
    if let Some(neutral_id) = &fixture.neutral_venue_id {
        let neutral = directory.get(neutral_id);
        tracing::debug!(location = %neutral.location, "neutral venue");
        return neutral.location;
    }
    if fixture.is_home() {
        my_location.to_string()
    } else {
        directory.get(&fixture.opponent_id).location
    }
}

fn summary_text(fixture: &Fixture, my_name: &str, opponent: &OpponentName) -> String {
    // Club-internal comps have no opposing side to phrase a "v" against.
    if fixture.opponent_id.starts_with(CLUB_INTERNAL_PREFIX) {
        return fixture.opponent_id.clone();
    }

    let names = if fixture.is_home() {
        format!("{my_name} v ({})", opponent.text)
    } else {
        format!("({}) v {my_name}", opponent.text)
    };

    match fixture.score_display() {
        None => format!("{names} {}", fixture.label).trim_end().to_string(),
        Some((ours, theirs)) => {
            let code = fixture.outcome().code();
            format!("{names} {code} ({ours}-{theirs}) {}", fixture.label)
                .trim_end()
                .to_string()
        }
    }
}

fn description_text(fixture: &Fixture, opponent: &OpponentName) -> String {
    let venue_label = if fixture.neutral_venue_id.is_some() {
        "neutral"
    } else {
        fixture.venue.as_str()
    };
    format!(
        "{} {venue_label} ({})",
        fixture.outcome().code(),
        opponent.text
    )
    .trim()
    .to_string()
}
