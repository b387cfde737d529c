//! Team directory lookups.
//!
//! Lookups are total: an id missing from the directory yields a tagged
//! placeholder instead of an error, so a season file can be processed
//! before every opponent's details are finalised.

use std::collections::BTreeMap;

use crate::constants::{CLUB_INTERNAL_KEY, CLUB_INTERNAL_PREFIX, UNKNOWN_TEAM_LOCATION};
use crate::fixture::Fixture;
use crate::input::TeamEntries;

/// A team and its home ground.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub team_id: String,
    pub name: String,
    /// Address/location string used for event placement.
    pub location: String,
    /// True only for records synthesised for ids missing from the directory.
    pub placeholder: bool,
}

/// Opponent name resolved for output, shared by event text and table rows.
///
/// `unknown` is set when the opponent id had no directory entry; each
/// consumer applies its own emphasis (the table re-wraps the name in the
/// `***` marker, event text uses the bare name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpponentName {
    pub text: String,
    pub unknown: bool,
}

/// All known teams for a season, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct TeamDirectory {
    teams: BTreeMap<String, Team>,
}

impl TeamDirectory {
    /// Builds the directory from the parsed teams file.
    #[must_use]
    pub fn from_entries(entries: TeamEntries) -> Self {
        let teams = entries
            .into_iter()
            .map(|(team_id, entry)| {
                let team = Team {
                    team_id: team_id.clone(),
                    name: entry.name,
                    location: entry.location,
                    placeholder: false,
                };
                (team_id, team)
            })
            .collect();
        Self { teams }
    }

    /// Looks up a team by id. Total: never fails.
    ///
    /// Club-internal competition ids are normalised to the single
    /// `CLUBCOMP` entry first. Unknown ids get a placeholder whose name
    /// wraps the id in the `***` not-found marker and whose location is
    /// "TBD", so the rest of a run keeps working.
    #[must_use]
    pub fn get(&self, team_id: &str) -> Team {
        let lookup_id = if team_id.starts_with(CLUB_INTERNAL_PREFIX) {
            CLUB_INTERNAL_KEY
        } else {
            team_id
        };
        self.teams.get(lookup_id).cloned().unwrap_or_else(|| {
            tracing::debug!(team_id, "team not in directory, using placeholder");
            Team {
                team_id: team_id.to_string(),
                name: format!("***{team_id}***"),
                location: UNKNOWN_TEAM_LOCATION.to_string(),
                placeholder: true,
            }
        })
    }

    /// Resolves the opponent display name for a fixture.
    ///
    /// Club-internal fixtures have no real opponent; the competition id is
    /// the content. Known external opponents get the sub-team suffix when
    /// the club fields more than one side.
    #[must_use]
    pub fn opponent_name(&self, fixture: &Fixture) -> OpponentName {
        if fixture.opponent_id.starts_with(CLUB_INTERNAL_PREFIX) {
            return OpponentName {
                text: fixture.opponent_id.clone(),
                unknown: false,
            };
        }

        let team = self.get(&fixture.opponent_id);
        if team.placeholder {
            return OpponentName {
                text: fixture.opponent_id.clone(),
                unknown: true,
            };
        }

        let text = match &fixture.sub_team {
            Some(sub_team) => format!("{} {sub_team}", team.name),
            None => team.name,
        };
        OpponentName {
            text,
            unknown: false,
        }
    }
}
