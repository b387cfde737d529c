//! A single fixture and the rules that resolve it.
//!
//! The original date/time of a fixture never changes after construction;
//! reschedules are layered on top so the stable calendar identity (built
//! from the original instant) survives a match being moved.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::constants::{TBD_DATE_VALUE, TIME_INPUT_FORMAT};
use crate::error::{CoreError, CoreResult};
use crate::input::MatchEntry;

/// Which side's ground nominally hosts the match.
///
/// A fixture is always exactly home or away; a neutral ground is a separate
/// overlay (`Fixture::neutral_venue_id`) and does not change the venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Venue {
    Home,
    Away,
}

impl Venue {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Away => "away",
        }
    }
}

impl std::fmt::Display for Venue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rescheduled date, which may be known or still undecided ("tbd" in the
/// season file). Undecided is distinct from no reschedule at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reschedule {
    Date(NaiveDate),
    Undecided,
}

/// Match outcome from our side's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
    Draw,
    /// Not yet played.
    Undecided,
}

impl Outcome {
    /// Single-character result code for summaries and table rows.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Win => "W",
            Self::Loss => "L",
            Self::Draw => "D",
            Self::Undecided => " ",
        }
    }
}

/// One scheduled or played league match.
#[derive(Debug, Clone, PartialEq)]
pub struct Fixture {
    pub venue: Venue,
    /// Opponent team id, a key into the team directory.
    pub opponent_id: String,
    /// Original schedule as first entered. Never updated; the basis of the
    /// stable calendar UID.
    pub original_date: NaiveDate,
    pub original_time: NaiveTime,
    /// Both absent (or both exactly zero) means the match is unplayed; a
    /// genuine 0-0 result is not possible in bowls.
    pub our_score: Option<f64>,
    pub opponent_score: Option<f64>,
    pub rescheduled_date: Option<Reschedule>,
    pub rescheduled_time: Option<NaiveTime>,
    /// Which of the opponent's sides we face, e.g. "A" or "B".
    pub sub_team: Option<String>,
    /// Free-text annotation (cup round, note).
    pub label: String,
    /// Team id whose ground is used instead of either side's own.
    pub neutral_venue_id: Option<String>,
}

impl Fixture {
    /// Builds a fixture from its season-file entry.
    ///
    /// `default_time` is the league's kickoff time, used when the entry has
    /// no `start_time` of its own.
    ///
    /// ## Errors
    /// Returns an error if the entry does not name exactly one of
    /// `home`/`away`, or if a time or rescheduled date fails to parse.
    pub fn from_entry(entry: MatchEntry, default_time: NaiveTime) -> CoreResult<Self> {
        let (venue, opponent_id) = match (entry.home, entry.away) {
            (Some(id), None) => (Venue::Home, id),
            (None, Some(id)) => (Venue::Away, id),
            (Some(_), Some(_)) => {
                return Err(CoreError::InvalidEntry(
                    "match entry names both home and away".into(),
                ));
            }
            (None, None) => {
                return Err(CoreError::InvalidEntry(
                    "match entry names neither home nor away".into(),
                ));
            }
        };

        let original_time = match entry.start_time {
            Some(raw) => parse_time(&raw)?,
            None => default_time,
        };

        let rescheduled_date = entry.newdate.as_deref().map(parse_reschedule).transpose()?;
        let rescheduled_time = entry.newtime.as_deref().map(parse_time).transpose()?;

        Ok(Self {
            venue,
            opponent_id,
            original_date: entry.date,
            original_time,
            our_score: entry.our_score,
            opponent_score: entry.opp_score,
            rescheduled_date,
            rescheduled_time,
            sub_team: entry.team,
            label: entry.label.unwrap_or_default(),
            neutral_venue_id: entry.location,
        })
    }

    #[must_use]
    pub const fn is_home(&self) -> bool {
        matches!(self.venue, Venue::Home)
    }

    /// Whether the match has been played.
    ///
    /// Unplayed means both scores are absent or both are exactly zero — the
    /// only representation of "not played yet" in the season file.
    #[must_use]
    #[expect(
        clippy::float_cmp,
        reason = "the 0-0 unplayed sentinel is an exact value, never computed"
    )]
    pub fn played(&self) -> bool {
        match (self.our_score, self.opponent_score) {
            (None, None) => false,
            (Some(ours), Some(theirs)) => !(ours == 0.0 && theirs == 0.0),
            // A lone score still counts as played; the season files always
            // record both together.
            _ => true,
        }
    }

    /// Win/loss/draw from our side, or `Undecided` while unplayed.
    ///
    /// Scores may be fractional (league points are sometimes split), so the
    /// comparison runs over the raw values rather than integers.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        if !self.played() {
            return Outcome::Undecided;
        }
        let ours = self.our_score.unwrap_or_default();
        let theirs = self.opponent_score.unwrap_or_default();
        if ours > theirs {
            Outcome::Win
        } else if ours < theirs {
            Outcome::Loss
        } else {
            Outcome::Draw
        }
    }

    /// The date the match will actually be played, or `None` while a
    /// rescheduled date is still undecided.
    #[must_use]
    pub fn effective_date(&self) -> Option<NaiveDate> {
        match self.rescheduled_date {
            Some(Reschedule::Undecided) => None,
            Some(Reschedule::Date(date)) => Some(date),
            None => Some(self.original_date),
        }
    }

    /// The time the match will actually start.
    #[must_use]
    pub fn effective_time(&self) -> NaiveTime {
        self.rescheduled_time.unwrap_or(self.original_time)
    }

    /// Combined effective date and time.
    ///
    /// `None` exactly when the effective date is undecided, so callers can
    /// skip unscheduled matches rather than fail on them.
    #[must_use]
    pub fn scheduled_datetime(&self) -> Option<NaiveDateTime> {
        self.effective_date()
            .map(|date| date.and_time(self.effective_time()))
    }

    /// The original (pre-reschedule) date and time. Only used for calendar
    /// identity, which must not change when a match is moved.
    #[must_use]
    pub fn original_datetime(&self) -> NaiveDateTime {
        self.original_date.and_time(self.original_time)
    }

    /// Score pair formatted for output, or `None` while unplayed.
    ///
    /// Whole numbers lose their trailing ".0" ("5" not "5.0"); genuine
    /// fractions keep their digit ("0.5").
    #[must_use]
    pub fn score_display(&self) -> Option<(String, String)> {
        if !self.played() {
            return None;
        }
        Some((
            format_score(self.our_score.unwrap_or_default()),
            format_score(self.opponent_score.unwrap_or_default()),
        ))
    }

    /// Any label text attached to the match.
    #[must_use]
    pub fn notes(&self) -> &str {
        &self.label
    }
}

/// Parses an HH:MM kickoff time from a season file.
///
/// ## Errors
/// Returns an error if the value is not a valid HH:MM time.
pub fn parse_time(value: &str) -> CoreResult<NaiveTime> {
    NaiveTime::parse_from_str(value, TIME_INPUT_FORMAT).map_err(|_| CoreError::InvalidTime {
        value: value.to_string(),
    })
}

fn parse_reschedule(value: &str) -> CoreResult<Reschedule> {
    if value == TBD_DATE_VALUE {
        return Ok(Reschedule::Undecided);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(Reschedule::Date)
        .map_err(|_| CoreError::InvalidRescheduledDate {
            value: value.to_string(),
        })
}

fn format_score(score: f64) -> String {
    let formatted = format!("{score:.1}");
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn fixture() -> Fixture {
        Fixture {
            venue: Venue::Home,
            opponent_id: "OPP1".to_string(),
            original_date: NaiveDate::from_ymd_opt(2024, 5, 14).expect("valid date"),
            original_time: NaiveTime::from_hms_opt(18, 0, 0).expect("valid time"),
            our_score: None,
            opponent_score: None,
            rescheduled_date: None,
            rescheduled_time: None,
            sub_team: None,
            label: String::new(),
            neutral_venue_id: None,
        }
    }

    #[test]
    fn unplayed_when_scores_absent() {
        let f = fixture();
        assert!(!f.played());
        assert_eq!(f.outcome(), Outcome::Undecided);
        assert_eq!(f.outcome().code(), " ");
    }

    #[test]
    fn unplayed_when_scores_both_zero() {
        let mut f = fixture();
        f.our_score = Some(0.0);
        f.opponent_score = Some(0.0);
        assert!(!f.played());
        assert_eq!(f.score_display(), None);
    }

    #[test]
    fn fractional_zero_zero_is_still_unplayed() {
        // Points-sharing rules make 0.0-0.0 theoretically possible, but it
        // is indistinguishable from the unplayed sentinel and stays that way.
        let mut f = fixture();
        f.our_score = Some(0.0);
        f.opponent_score = Some(0.0);
        assert_eq!(f.outcome(), Outcome::Undecided);
    }

    #[test]
    fn win_loss_draw() {
        let mut f = fixture();
        f.our_score = Some(5.0);
        f.opponent_score = Some(2.0);
        assert_eq!(f.outcome(), Outcome::Win);

        f.our_score = Some(1.0);
        f.opponent_score = Some(4.0);
        assert_eq!(f.outcome(), Outcome::Loss);

        f.our_score = Some(3.0);
        f.opponent_score = Some(3.0);
        assert_eq!(f.outcome(), Outcome::Draw);
    }

    #[test]
    fn outcome_is_antisymmetric() {
        let pairs = [(5.0, 2.0), (0.5, 5.5), (3.0, 3.0), (2.5, 2.5)];
        for (ours, theirs) in pairs {
            let mut f = fixture();
            f.our_score = Some(ours);
            f.opponent_score = Some(theirs);
            let forward = f.outcome();

            f.our_score = Some(theirs);
            f.opponent_score = Some(ours);
            let swapped = f.outcome();

            match forward {
                Outcome::Win => assert_eq!(swapped, Outcome::Loss),
                Outcome::Loss => assert_eq!(swapped, Outcome::Win),
                Outcome::Draw => assert_eq!(swapped, Outcome::Draw),
                Outcome::Undecided => panic!("played match cannot be undecided"),
            }
        }
    }

    #[test]
    fn fractional_scores_compare_correctly() {
        let mut f = fixture();
        f.our_score = Some(0.5);
        f.opponent_score = Some(5.5);
        assert_eq!(f.outcome(), Outcome::Loss);
        assert_eq!(
            f.score_display(),
            Some(("0.5".to_string(), "5.5".to_string()))
        );
    }

    #[test]
    fn score_display_strips_trailing_zero() {
        let mut f = fixture();
        f.our_score = Some(5.0);
        f.opponent_score = Some(2.0);
        assert_eq!(f.score_display(), Some(("5".to_string(), "2".to_string())));
    }

    #[test]
    fn score_display_round_trips() {
        for score in [5.0, 0.5, 12.0, 3.5] {
            let formatted = format_score(score);
            let parsed: f64 = formatted.parse().expect("formatted score parses back");
            assert!((parsed - score).abs() < f64::EPSILON, "{score} -> {formatted}");
        }
    }

    #[test]
    fn effective_date_prefers_reschedule() {
        let mut f = fixture();
        let moved = NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date");
        f.rescheduled_date = Some(Reschedule::Date(moved));
        assert_eq!(f.effective_date(), Some(moved));
    }

    #[test]
    fn undecided_reschedule_clears_schedule() {
        let mut f = fixture();
        f.rescheduled_date = Some(Reschedule::Undecided);
        assert_eq!(f.effective_date(), None);
        assert_eq!(f.scheduled_datetime(), None);
    }

    #[test]
    fn effective_time_prefers_reschedule() {
        let mut f = fixture();
        let moved = NaiveTime::from_hms_opt(19, 30, 0).expect("valid time");
        f.rescheduled_time = Some(moved);
        assert_eq!(f.effective_time(), moved);
        let scheduled = f.scheduled_datetime().expect("date is decided");
        assert_eq!(scheduled.time(), moved);
    }

    #[test]
    fn original_datetime_ignores_reschedule() {
        let mut f = fixture();
        let before = f.original_datetime();
        f.rescheduled_date = Some(Reschedule::Date(
            NaiveDate::from_ymd_opt(2024, 7, 2).expect("valid date"),
        ));
        f.rescheduled_time = Some(NaiveTime::from_hms_opt(20, 0, 0).expect("valid time"));
        assert_eq!(f.original_datetime(), before);

        f.rescheduled_date = Some(Reschedule::Undecided);
        assert_eq!(f.original_datetime(), before);
    }

    #[test]
    fn parse_time_rejects_garbage() {
        assert!(parse_time("25:99").is_err());
        assert!(parse_time("sometime").is_err());
    }

    #[test]
    fn parse_reschedule_handles_sentinel_and_dates() {
        assert_eq!(
            parse_reschedule("tbd").expect("sentinel parses"),
            Reschedule::Undecided
        );
        assert_eq!(
            parse_reschedule("2024-06-01").expect("date parses"),
            Reschedule::Date(NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date"))
        );
        assert!(parse_reschedule("next week").is_err());
    }
}
