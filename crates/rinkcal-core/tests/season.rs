//! End-to-end tests: raw YAML through league construction to table rows and
//! calendar events.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rinkcal_core::input::{SeasonFile, TeamEntries};
use rinkcal_core::{League, TeamDirectory, build_events, format_rows};

const TEAMS_YAML: &str = "
MYTEAM:
  name: My Club
  location: Ground A
OPP1:
  name: Rivals
  location: Ground B
NEUTRAL:
  name: Third Club
  location: Ground C
CLUBCOMP:
  name: Club Championship
  location: Ground A
";

fn directory() -> TeamDirectory {
    let entries: TeamEntries = serde_yaml::from_str(TEAMS_YAML).expect("teams yaml parses");
    TeamDirectory::from_entries(entries)
}

fn league(matches_yaml: &str) -> League {
    let yaml = format!(
        "
me: MYTEAM
duration: 3
day: Tue
start_time: '18:00'
matches:
{matches_yaml}"
    );
    let season: SeasonFile = serde_yaml::from_str(&yaml).expect("season yaml parses");
    League::from_season(season).expect("season is valid")
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
        .single()
        .expect("valid instant")
}

#[test]
fn scheduled_unplayed_match() {
    let league = league(
        "  - home: OPP1
    date: 2024-05-14
",
    );
    let directory = directory();

    let rows = format_rows(&league, &directory);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].result, " ");
    assert_eq!(rows[0].date, "    14-May");

    let events = build_events(&league, &directory, now());
    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.summary, "My Club v (Rivals)");
    assert_eq!(
        event.start,
        NaiveDate::from_ymd_opt(2024, 5, 14)
            .expect("valid date")
            .and_hms_opt(17, 50, 0)
            .expect("valid time")
    );
    assert_eq!(
        event.end,
        NaiveDate::from_ymd_opt(2024, 5, 14)
            .expect("valid date")
            .and_hms_opt(21, 0, 0)
            .expect("valid time")
    );
}

#[test]
fn played_match_shows_win() {
    let league = league(
        "  - home: OPP1
    date: 2024-05-14
    our_score: 5
    opp_score: 2
",
    );
    let directory = directory();

    let rows = format_rows(&league, &directory);
    assert_eq!(rows[0].result, "W");
    assert_eq!(rows[0].our_score, "5");
    assert_eq!(rows[0].opponent_score, "2");

    let events = build_events(&league, &directory, now());
    assert_eq!(events[0].summary, "My Club v (Rivals) W (5-2)");
}

#[test]
fn tbd_match_stays_in_table_but_out_of_calendar() {
    let league = league(
        "  - away: OPP1
    date: 2024-05-14
    newdate: tbd
",
    );
    let directory = directory();

    let rows = format_rows(&league, &directory);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].date, "-date-TBD-");

    assert!(build_events(&league, &directory, now()).is_empty());
}

#[test]
fn neutral_venue_relocates_the_event() {
    let league = league(
        "  - away: OPP1
    date: 2024-05-14
    location: NEUTRAL
",
    );
    let events = build_events(&league, &directory(), now());
    assert_eq!(events[0].location, "Ground C");
    assert_eq!(events[0].description, "neutral (Rivals)");
}

#[test]
fn unknown_opponent_is_flagged_but_processable() {
    let league = league(
        "  - home: NEWCOMERS
    date: 2024-05-14
",
    );
    let directory = directory();

    let rows = format_rows(&league, &directory);
    assert_eq!(rows[0].opponent, "***NEWCOMERS***");

    let events = build_events(&league, &directory, now());
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].summary, "My Club v (NEWCOMERS)");
    // Home match, so our own ground still hosts it.
    assert_eq!(events[0].location, "Ground A");
}

#[test]
fn rescheduled_match_moves_but_keeps_identity() {
    let moved = league(
        "  - home: OPP1
    date: 2024-05-14
    newdate: '2024-06-01'
    newtime: '19:30'
",
    );
    let original = league(
        "  - home: OPP1
    date: 2024-05-14
",
    );
    let directory = directory();

    let moved_events = build_events(&moved, &directory, now());
    let original_events = build_events(&original, &directory, now());
    let moved_event = &moved_events[0];
    let original_event = &original_events[0];
    assert_eq!(moved_event.uid, original_event.uid);
    assert_eq!(
        moved_event.start,
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .expect("valid date")
            .and_hms_opt(19, 20, 0)
            .expect("valid time")
    );

    // Saturday and a non-default kickoff, so neither is suppressed.
    let rows = format_rows(&moved, &directory);
    assert_eq!(rows[0].date, "Sat 01-Jun 19:30");
}

#[test]
fn malformed_entry_fails_the_season() {
    let yaml = "
me: MYTEAM
duration: 3
day: Tue
start_time: '18:00'
matches:
  - date: 2024-05-14
";
    let season: SeasonFile = serde_yaml::from_str(yaml).expect("season yaml parses");
    assert!(League::from_season(season).is_err());
}

#[test]
fn missing_team_name_is_an_input_error() {
    let broken = "
OPP1:
  location: Ground B
";
    assert!(serde_yaml::from_str::<TeamEntries>(broken).is_err());
}
