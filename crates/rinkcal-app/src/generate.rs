//! Season skeleton generator.
//!
//! Expands a terse plain-text schedule into a season YAML file with zeroed
//! scores. The schedule's header lines are, in order: team id, output file
//! stem, match duration, start date as `year,month,day`, kickoff time. Each
//! remaining line is `home|away OPPONENT day-delta`, where the delta is the
//! number of days since the previous fixture.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Duration, NaiveDate};

use crate::error::{AppError, AppResult};

#[derive(Debug)]
struct Schedule {
    me: String,
    file_stem: String,
    duration: String,
    start_date: NaiveDate,
    start_time: String,
    fixtures: Vec<(String, String, NaiveDate)>,
}

/// Expands `schedule_path` and writes the season YAML next to it.
///
/// Returns the path of the written file.
///
/// ## Errors
/// Returns an error if the schedule cannot be read, is structurally
/// incomplete, or the output cannot be written.
pub fn write_season_skeleton(schedule_path: &Path) -> AppResult<PathBuf> {
    let text = fs::read_to_string(schedule_path)?;
    let schedule = parse_schedule(&text)?;

    let target = schedule_path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(format!("{}.yml", schedule.file_stem));
    fs::write(&target, render_season(&schedule))?;

    tracing::info!(path = %target.display(), fixtures = schedule.fixtures.len(), "season skeleton written");
    Ok(target)
}

fn parse_schedule(text: &str) -> AppResult<Schedule> {
    let mut lines = text.lines();
    let me = required_line(&mut lines, "team id")?;
    let file_stem = required_line(&mut lines, "output name")?;
    let duration = required_line(&mut lines, "duration")?;
    let start_date = parse_start_date(&required_line(&mut lines, "start date")?)?;
    let start_time = required_line(&mut lines, "kickoff time")?;

    let mut fixtures = Vec::new();
    let mut current = start_date;
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();
        let [venue, opponent, delta] = parts.as_slice() else {
            return Err(AppError::InvalidSchedule(format!(
                "expected \"home|away OPPONENT day-delta\", got {line:?}"
            )));
        };
        if *venue != "home" && *venue != "away" {
            return Err(AppError::InvalidSchedule(format!(
                "venue must be home or away, got {venue:?}"
            )));
        }
        let days: i64 = delta.parse().map_err(|_| {
            AppError::InvalidSchedule(format!("day-delta must be a number, got {delta:?}"))
        })?;
        current += Duration::days(days);
        fixtures.push(((*venue).to_string(), (*opponent).to_string(), current));
    }

    Ok(Schedule {
        me,
        file_stem,
        duration,
        start_date,
        start_time,
        fixtures,
    })
}

fn required_line(lines: &mut std::str::Lines<'_>, what: &str) -> AppResult<String> {
    lines
        .next()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .ok_or_else(|| AppError::InvalidSchedule(format!("missing {what} line")))
}

fn parse_start_date(value: &str) -> AppResult<NaiveDate> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(AppError::InvalidSchedule(format!(
            "start date must be year,month,day, got {value:?}"
        )));
    };
    let numeric = |what: &str| {
        AppError::InvalidSchedule(format!("start date must be numeric, got {what:?}"))
    };
    let year: i32 = year.parse().map_err(|_| numeric(value))?;
    let month: u32 = month.parse().map_err(|_| numeric(value))?;
    let day: u32 = day.parse().map_err(|_| numeric(value))?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        AppError::InvalidSchedule(format!("start date is not a real date: {value:?}"))
    })
}

fn render_season(schedule: &Schedule) -> String {
    let mut out = String::new();
    out.push_str(&format!("me: {}\n", schedule.me));
    out.push_str(&format!("start_time: '{}'\n", schedule.start_time));
    out.push_str(&format!("duration: {}\n", schedule.duration));
    out.push_str(&format!(
        "day: {}\n",
        schedule.start_date.format("%a")
    ));
    out.push_str("matches:\n");
    for (venue, opponent, date) in &schedule.fixtures {
        out.push_str(&format!("- {venue}: {opponent}\n"));
        out.push_str(&format!("  date: '{date}'\n"));
        out.push_str("  our_score: 0\n");
        out.push_str("  opp_score: 0\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEDULE: &str = "FALLS\nfalls_games_2024\n3\n2024,5,7\n18:00\nhome OPP1 0\naway OPP2 7\n";

    #[test]
    fn parses_cumulative_day_deltas() {
        let schedule = parse_schedule(SCHEDULE).expect("schedule parses");
        assert_eq!(schedule.me, "FALLS");
        assert_eq!(schedule.fixtures.len(), 2);
        assert_eq!(
            schedule.fixtures[0].2,
            NaiveDate::from_ymd_opt(2024, 5, 7).expect("valid date")
        );
        assert_eq!(
            schedule.fixtures[1].2,
            NaiveDate::from_ymd_opt(2024, 5, 14).expect("valid date")
        );
    }

    #[test]
    fn rejects_unknown_venue() {
        let bad = SCHEDULE.replace("home OPP1", "neutral OPP1");
        assert!(parse_schedule(&bad).is_err());
    }

    #[test]
    fn rejects_truncated_header() {
        assert!(parse_schedule("FALLS\nfalls_games_2024\n").is_err());
    }

    #[test]
    fn rendered_skeleton_is_a_loadable_season() {
        let schedule = parse_schedule(SCHEDULE).expect("schedule parses");
        let yaml = render_season(&schedule);
        let season: rinkcal_core::input::SeasonFile =
            serde_yaml::from_str(&yaml).expect("skeleton parses as a season");
        assert_eq!(season.me, "FALLS");
        assert_eq!(season.matches.len(), 2);
        assert_eq!(season.day, "Tue");
        // Zeroed scores read back as the unplayed sentinel.
        let league = rinkcal_core::League::from_season(season).expect("season is valid");
        assert!(!league.fixtures[0].played());
    }

    #[test_log::test]
    fn writes_next_to_the_schedule_file() {
        let tmp = tempfile::tempdir().expect("temp dir");
        let schedule_path = tmp.path().join("matches.txt");
        fs::write(&schedule_path, SCHEDULE).expect("schedule written");
        let written = write_season_skeleton(&schedule_path).expect("skeleton written");
        assert_eq!(written, tmp.path().join("falls_games_2024.yml"));
        assert!(written.exists());
    }
}
