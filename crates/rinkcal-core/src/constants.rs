/// Domain the calendar UIDs and product identifier are anchored to.
pub const CALENDAR_DOMAIN: &str = "mc-williams.co.uk";
pub const CALENDAR_PRODID: &str =
    const_str::concat!("-//Bowling Calendar//", CALENDAR_DOMAIN, "//");
pub const CALENDAR_TIMEZONE: &str = "Europe/London";

/// Team ids starting with this prefix are club-internal competitions, not
/// external opponents. They all resolve to the single `CLUB_INTERNAL_KEY`
/// directory entry.
pub const CLUB_INTERNAL_PREFIX: &str = "Club";
pub const CLUB_INTERNAL_KEY: &str = "CLUBCOMP";

/// Season-file value for a rescheduled match whose new date is not yet known.
pub const TBD_DATE_VALUE: &str = "tbd";
/// Table cell shown for such a match.
pub const TBD_DATE_DISPLAY: &str = "-date-TBD-";

/// Location reported for teams missing from the directory.
pub const UNKNOWN_TEAM_LOCATION: &str = "TBD";

/// Kickoff times in season files are written as HH:MM.
pub const TIME_INPUT_FORMAT: &str = "%H:%M";
