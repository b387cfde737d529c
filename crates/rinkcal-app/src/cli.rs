use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Turn a club's season schedule into a results table and an iCalendar file.
#[derive(Debug, Parser)]
#[command(name = "rinkcal", version, about)]
pub struct Cli {
    /// Team name used to locate the season file, e.g. "fallsindoor".
    #[arg(short, long)]
    pub team: Option<String>,

    /// Season year, e.g. "2024" or "2024-25".
    #[arg(short, long)]
    pub year: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Expand a terse schedule file into a season YAML skeleton with zeroed
    /// scores, ready for editing as results come in.
    Generate {
        /// Schedule file: team id, output name, duration, start date
        /// (y,m,d), kickoff, then one "home|away OPPONENT day-delta" line
        /// per fixture.
        schedule: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_team_and_year() {
        let cli = Cli::parse_from(["rinkcal", "--team", "falls", "--year", "2024"]);
        assert_eq!(cli.team.as_deref(), Some("falls"));
        assert_eq!(cli.year.as_deref(), Some("2024"));
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_generate_subcommand() {
        let cli = Cli::parse_from(["rinkcal", "generate", "matches.txt"]);
        match cli.command {
            Some(Commands::Generate { schedule }) => {
                assert_eq!(schedule, PathBuf::from("matches.txt"));
            }
            _ => panic!("expected generate subcommand"),
        }
    }
}
