//! One team's season in one league.

use chrono::{Duration, NaiveTime};

use crate::error::CoreResult;
use crate::fixture::{Fixture, parse_time};
use crate::input::SeasonFile;

/// A season of fixtures plus the league-wide defaults that drive display
/// suppression and event length. Built once from the season file and
/// read-only afterwards.
#[derive(Debug, Clone)]
pub struct League {
    pub my_team_id: String,
    /// Default match length in hours.
    pub duration_hours: f64,
    /// Weekday abbreviation matches are normally played on, e.g. "Tue".
    /// Rows only show a weekday when it differs from this.
    pub default_day: String,
    /// Default kickoff. Rows only show a time when it differs from this.
    pub default_time: NaiveTime,
    pub fixtures: Vec<Fixture>,
}

impl League {
    /// Builds a league from the parsed season file.
    ///
    /// The whole season fails on the first malformed entry; no partial
    /// league is produced.
    ///
    /// ## Errors
    /// Returns an error if the default kickoff time or any match entry is
    /// invalid.
    pub fn from_season(season: SeasonFile) -> CoreResult<Self> {
        let default_time = parse_time(&season.start_time)?;
        let fixtures = season
            .matches
            .into_iter()
            .map(|entry| Fixture::from_entry(entry, default_time))
            .collect::<CoreResult<Vec<_>>>()?;

        Ok(Self {
            my_team_id: season.me,
            duration_hours: season.duration,
            default_day: season.day,
            default_time,
            fixtures,
        })
    }

    /// Length of one match as a duration.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "match lengths are a handful of hours; minutes fit easily"
    )]
    pub fn event_duration(&self) -> Duration {
        Duration::minutes((self.duration_hours * 60.0).round() as i64)
    }
}
