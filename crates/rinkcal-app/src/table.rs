//! Coloured console table for a season's results.
//!
//! The core supplies plain row strings; this module owns column layout and
//! colour. Rendering returns the finished text so callers decide where it
//! goes — nothing here writes to stdout.

use colored::Colorize;

use rinkcal_core::{DisplayRow, League, TeamDirectory, format_rows};

const COLUMNS: usize = 7;
/// Unknown-opponent cells arrive from the core wrapped in this marker.
const UNKNOWN_MARKER: &str = "***";

/// Renders the whole season as an aligned, coloured table.
#[must_use]
pub fn render(league: &League, directory: &TeamDirectory) -> String {
    let rows = format_rows(league, directory);
    if rows.is_empty() {
        return "No results found.".to_string();
    }

    let date_header = format!("Date       {}", league.default_time.format("%H-%M"));
    let headers: [&str; COLUMNS] = ["R", "Venue", "Us", "Opp", "Opponent", &date_header, "Note"];

    let cells: Vec<[String; COLUMNS]> = rows.iter().map(plain_cells).collect();

    let mut widths: [usize; COLUMNS] = headers.map(str::len);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(cells.len() + 2);
    lines.push(
        headers
            .iter()
            .zip(widths.iter())
            .map(|(header, &width)| pad(header, width).magenta().bold().to_string())
            .collect::<Vec<_>>()
            .join("  "),
    );
    lines.push(
        widths
            .iter()
            .map(|&width| "-".repeat(width))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for row in &cells {
        lines.push(styled_row(row, &widths));
    }

    lines.join("\n")
}

/// Plain (uncoloured) cell contents, used for width calculation.
fn plain_cells(row: &DisplayRow) -> [String; COLUMNS] {
    let result = if row.result == "W" {
        // Wins get a check mark alongside the code.
        "W \u{2714}".to_string()
    } else {
        row.result.clone()
    };
    [
        result,
        row.venue.clone(),
        row.our_score.clone(),
        row.opponent_score.clone(),
        row.opponent.clone(),
        row.date.clone(),
        row.notes.clone(),
    ]
}

fn styled_row(cells: &[String; COLUMNS], widths: &[usize; COLUMNS]) -> String {
    cells
        .iter()
        .zip(widths.iter())
        .enumerate()
        .map(|(column, (cell, &width))| {
            let padded = pad(cell, width);
            match column {
                0 if cell.starts_with('W') => padded.green().to_string(),
                0 if cell == "L" => padded.red().to_string(),
                1 if cell == "home" => padded.red().to_string(),
                1 if cell == "away" => padded.blue().to_string(),
                4 if cell.starts_with(UNKNOWN_MARKER) => padded.red().to_string(),
                _ => padded,
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn pad(cell: &str, width: usize) -> String {
    let len = cell.chars().count();
    let mut padded = String::with_capacity(width);
    padded.push_str(cell);
    padded.extend(std::iter::repeat_n(' ', width.saturating_sub(len)));
    padded
}
