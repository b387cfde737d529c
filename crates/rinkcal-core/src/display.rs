//! Plain table-row formatting.
//!
//! Produces unstyled strings only; colour and column layout belong to the
//! renderer in `rinkcal-app`. Unlike the calendar, the table includes
//! matches whose rescheduled date is still undecided — it is the
//! at-a-glance status view.

use crate::constants::TBD_DATE_DISPLAY;
use crate::fixture::Fixture;
use crate::league::League;
use crate::team::TeamDirectory;

/// One table row, all cells plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    /// "W"/"L"/"D", or a single space while undecided.
    pub result: String,
    /// "home" or "away".
    pub venue: String,
    /// Empty while unplayed — never "0".
    pub our_score: String,
    pub opponent_score: String,
    /// Unknown opponents keep the `***` marker so the renderer can
    /// highlight them.
    pub opponent: String,
    pub date: String,
    pub notes: String,
}

/// Formats one fixture as a table row.
#[must_use]
pub fn format_row(fixture: &Fixture, league: &League, directory: &TeamDirectory) -> DisplayRow {
    let (our_score, opponent_score) = fixture
        .score_display()
        .unwrap_or((String::new(), String::new()));

    let opponent = directory.opponent_name(fixture);
    let opponent_cell = if opponent.unknown {
        format!("***{}***", opponent.text)
    } else {
        opponent.text
    };

    DisplayRow {
        result: fixture.outcome().code().to_string(),
        venue: fixture.venue.to_string(),
        our_score,
        opponent_score,
        opponent: opponent_cell,
        date: date_cell(fixture, league),
        notes: fixture.notes().to_string(),
    }
}

/// Formats every fixture in the league, in season order.
#[must_use]
pub fn format_rows(league: &League, directory: &TeamDirectory) -> Vec<DisplayRow> {
    league
        .fixtures
        .iter()
        .map(|fixture| format_row(fixture, league, directory))
        .collect()
}

/// Date cell with the suppression rules.
///
/// The weekday only appears when it differs from the league's usual match
/// day (blank-padded otherwise to keep columns aligned); the time only
/// appears when it differs from the default kickoff (simply omitted
/// otherwise).
fn date_cell(fixture: &Fixture, league: &League) -> String {
    let Some(scheduled) = fixture.scheduled_datetime() else {
        return TBD_DATE_DISPLAY.to_string();
    };

    let weekday = scheduled.format("%a").to_string();
    let day_prefix = if weekday == league.default_day {
        "   ".to_string()
    } else {
        weekday
    };

    let mut cell = format!("{day_prefix} {}", scheduled.format("%d-%b"));
    if fixture.effective_time() != league.default_time {
        cell.push_str(&scheduled.format(" %H:%M").to_string());
    }
    cell
}
