//! Mapping from core event records to iCalendar components.

use rinkcal_core::CalendarEvent;
use rinkcal_core::constants::{CALENDAR_PRODID, CALENDAR_TIMEZONE};

use crate::build;
use crate::model::{Component, Property};

/// Builds the VCALENDAR for a season's events.
///
/// The calendar-level headers are fixed and attached once regardless of
/// match content; an empty season still yields a valid header-only
/// calendar.
#[must_use]
pub fn to_calendar(events: &[CalendarEvent]) -> Component {
    if events.is_empty() {
        tracing::warn!("no scheduled matches, calendar will be empty");
    }

    let mut cal = Component::calendar();
    cal.add_property(Property::text("PRODID", CALENDAR_PRODID));
    cal.add_property(Property::text("VERSION", "2.0"));
    cal.add_property(Property::text("CALSCALE", "GREGORIAN"));
    cal.add_property(Property::text("X-WR-TIMEZONE", CALENDAR_TIMEZONE));

    for event in events {
        cal.add_child(event_component(event));
    }
    cal
}

/// Serialises a season's events straight to iCalendar text.
#[must_use]
pub fn to_ics(events: &[CalendarEvent]) -> String {
    build::serialize(&to_calendar(events))
}

fn event_component(event: &CalendarEvent) -> Component {
    let mut component = Component::event();
    component.add_property(Property::text("UID", &event.uid));
    component.add_property(Property::text("LOCATION", &event.location));
    component.add_property(Property::integer("PRIORITY", i32::from(event.priority)));
    component.add_property(Property::text("SUMMARY", &event.summary));
    component.add_property(Property::text("DESCRIPTION", &event.description));
    component.add_property(Property::datetime("DTSTART", event.start));
    component.add_property(Property::datetime("DTEND", event.end));
    component.add_property(Property::utc("DTSTAMP", event.timestamp));

    let mut alarm = Component::alarm();
    alarm.add_property(Property::text("ACTION", &event.alarm.action));
    alarm.add_property(Property::text("DESCRIPTION", &event.alarm.description));
    alarm.add_property(Property::duration("TRIGGER", event.alarm.trigger));
    component.add_child(alarm);

    component
}
