//! Raw file shapes as they appear in the YAML sources.
//!
//! These types carry no derived state; `League::from_season` and
//! `TeamDirectory::from_entries` turn them into the validated domain model.
//! Required fields (a team's `name`/`location`, a match's `date`) are
//! enforced here by deserialization, so a malformed file fails before any
//! domain object exists.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Deserialize;

/// One entry in the team directory file, keyed by team id.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TeamEntry {
    pub name: String,
    pub location: String,
}

/// The team directory file: `{ team_id: {name, location}, ... }`.
pub type TeamEntries = BTreeMap<String, TeamEntry>;

/// The season file for one team's league year.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeasonFile {
    /// Our own team id in this league.
    pub me: String,
    /// Default match length in hours.
    pub duration: f64,
    /// Weekday abbreviation matches are normally played on, e.g. "Tue".
    pub day: String,
    /// Default kickoff time, HH:MM.
    pub start_time: String,
    #[serde(default)]
    pub matches: Vec<MatchEntry>,
}

/// One fixture as written in the season file.
///
/// Exactly one of `home`/`away` names the opponent; which one it is decides
/// the venue. Scores stay absent (or zero) until the match is played.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatchEntry {
    pub home: Option<String>,
    pub away: Option<String>,
    pub date: NaiveDate,
    /// Kickoff override, HH:MM. Falls back to the season default.
    pub start_time: Option<String>,
    pub our_score: Option<f64>,
    pub opp_score: Option<f64>,
    /// Rescheduled date: YYYY-MM-DD, or "tbd" when the new date is unknown.
    pub newdate: Option<String>,
    /// Rescheduled kickoff, HH:MM.
    pub newtime: Option<String>,
    /// Which of the opponent's sides we face, e.g. "A" or "B".
    pub team: Option<String>,
    /// Free-text annotation (cup round, note).
    pub label: Option<String>,
    /// Team id whose ground hosts the match instead of either side's own.
    pub location: Option<String>,
}
