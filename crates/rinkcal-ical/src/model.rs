//! iCalendar component and property types (RFC 5545 §3.4-3.6).
//!
//! Only the pieces this calendar actually emits: a VCALENDAR wrapping
//! VEVENTs which nest VALARMs, with text, date-time, duration and integer
//! property values.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};

/// Component kind for iCalendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// VCALENDAR wrapper component.
    Calendar,
    /// VEVENT component.
    Event,
    /// VALARM component (nested within VEVENT).
    Alarm,
}

impl ComponentKind {
    /// Returns the string name for this component kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Calendar => "VCALENDAR",
            Self::Event => "VEVENT",
            Self::Alarm => "VALARM",
        }
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A property value.
///
/// Date-times are either floating local values (the calendar carries a
/// single zone label) or UTC instants for generation timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    DateTime(NaiveDateTime),
    Utc(DateTime<Utc>),
    Duration(Duration),
    Integer(i32),
}

/// A single property on a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Property name (normalised to uppercase).
    pub name: String,
    pub value: Value,
}

impl Property {
    /// Creates a property with a text value.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            value: Value::Text(value.into()),
        }
    }

    /// Creates a property with a floating date-time value.
    #[must_use]
    pub fn datetime(name: impl Into<String>, value: NaiveDateTime) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            value: Value::DateTime(value),
        }
    }

    /// Creates a property with a UTC date-time value.
    #[must_use]
    pub fn utc(name: impl Into<String>, value: DateTime<Utc>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            value: Value::Utc(value),
        }
    }

    /// Creates a property with a duration value.
    #[must_use]
    pub fn duration(name: impl Into<String>, value: Duration) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            value: Value::Duration(value),
        }
    }

    /// Creates a property with an integer value.
    #[must_use]
    pub fn integer(name: impl Into<String>, value: i32) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            value: Value::Integer(value),
        }
    }

    /// Returns the value as text if it is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match &self.value {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// An iCalendar component: properties plus nested sub-components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub kind: ComponentKind,
    /// Properties in order of emission.
    pub properties: Vec<Property>,
    pub children: Vec<Component>,
}

impl Component {
    /// Creates a new empty component of the given kind.
    #[must_use]
    pub const fn new(kind: ComponentKind) -> Self {
        Self {
            kind,
            properties: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates a VCALENDAR component.
    #[must_use]
    pub const fn calendar() -> Self {
        Self::new(ComponentKind::Calendar)
    }

    /// Creates a VEVENT component.
    #[must_use]
    pub const fn event() -> Self {
        Self::new(ComponentKind::Event)
    }

    /// Creates a VALARM component.
    #[must_use]
    pub const fn alarm() -> Self {
        Self::new(ComponentKind::Alarm)
    }

    /// Adds a property to this component.
    pub fn add_property(&mut self, property: Property) {
        self.properties.push(property);
    }

    /// Adds a child component.
    pub fn add_child(&mut self, child: Component) {
        self.children.push(child);
    }

    /// Returns the first property with the given name.
    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&Property> {
        let name_upper = name.to_ascii_uppercase();
        self.properties.iter().find(|p| p.name == name_upper)
    }

    /// Returns children of a specific kind.
    #[must_use]
    pub fn children_of_kind(&self, kind: ComponentKind) -> Vec<&Component> {
        self.children.iter().filter(|c| c.kind == kind).collect()
    }

    /// Returns all VEVENT children.
    #[must_use]
    pub fn events(&self) -> Vec<&Component> {
        self.children_of_kind(ComponentKind::Event)
    }

    /// Returns all VALARM children.
    #[must_use]
    pub fn alarms(&self) -> Vec<&Component> {
        self.children_of_kind(ComponentKind::Alarm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_names_normalise_to_uppercase() {
        let prop = Property::text("summary", "Match");
        assert_eq!(prop.name, "SUMMARY");
        assert_eq!(prop.as_text(), Some("Match"));
    }

    #[test]
    fn component_property_lookup() {
        let mut event = Component::event();
        event.add_property(Property::text("UID", "uid-1"));
        event.add_property(Property::integer("PRIORITY", 5));

        assert_eq!(
            event.get_property("uid").and_then(Property::as_text),
            Some("uid-1")
        );
        assert!(event.get_property("DTSTART").is_none());
        // Non-text values are not text.
        assert_eq!(
            event.get_property("PRIORITY").and_then(Property::as_text),
            None
        );
    }

    #[test]
    fn children_filter_by_kind() {
        let mut cal = Component::calendar();
        let mut event = Component::event();
        event.add_child(Component::alarm());
        cal.add_child(event);

        assert_eq!(cal.events().len(), 1);
        assert_eq!(cal.alarms().len(), 0);
        assert_eq!(cal.events()[0].alarms().len(), 1);
    }
}
