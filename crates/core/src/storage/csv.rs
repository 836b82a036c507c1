//! Catalog loader and writer for the delimited flat-file format.
//!
//! Two row layouts are accepted:
//!
//! - 7 fields: `GameID,Title,MinPlayers,MaxPlayers,MaxPlaytime,MinPlaytime,Year`
//! - 6 fields (raw exports without IDs): the same minus the leading ID;
//!   IDs are generated as `G` + zero-padded sequence (`G001`, `G002`, ...).
//!
//! Note the column order quirk inherited from the source data: max playtime
//! comes before min playtime. Blank and malformed rows are skipped with a
//! warning, never fatal to the load.

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::{info, warn};

use crate::catalog::GameRecord;

/// Errors for catalog file access.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Catalog file error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read the catalog file, skipping the header and any unusable rows.
pub fn load_catalog(path: &Path) -> Result<Vec<GameRecord>, StorageError> {
    let content = fs::read_to_string(path)?;

    let mut games = Vec::new();
    let mut auto_id_counter = 1u32;
    let mut skipped = 0usize;

    for line in content.lines().skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_row(line, &mut auto_id_counter) {
            Some(game) => games.push(game),
            None => {
                skipped += 1;
                warn!(row = line, "skipping malformed catalog row");
            }
        }
    }

    info!(loaded = games.len(), skipped, "catalog file read");
    Ok(games)
}

/// Write the catalog back in the 7-field layout, IDs included.
pub fn save_catalog(path: &Path, games: &[GameRecord]) -> Result<(), StorageError> {
    let mut out = String::from(
        "GameID,Title,MinPlayers,MaxPlayers,MaxPlaytime,MinPlaytime,YearPublished\n",
    );
    for game in games {
        out.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            game.id,
            quote_field(&game.title),
            game.min_players,
            game.max_players,
            game.max_playtime,
            game.min_playtime,
            game.year_published
        ));
    }
    fs::write(path, out)?;
    info!(written = games.len(), path = %path.display(), "catalog saved");
    Ok(())
}

/// Parse one data row into a record; `None` means skip it.
fn parse_row(line: &str, auto_id_counter: &mut u32) -> Option<GameRecord> {
    let fields = split_fields(line);

    // 7 populated fields carry an explicit ID; 6 mean the raw export
    // format without one.
    let (explicit_id, rest) = if fields.len() >= 7 && !fields[6].is_empty() {
        (Some(fields[0].clone()), &fields[1..7])
    } else if fields.len() >= 6 {
        (None, &fields[0..6])
    } else {
        return None;
    };

    let title = strip_quotes(&rest[0]);
    let min_players: u32 = rest[1].parse().ok()?;
    let max_players: u32 = rest[2].parse().ok()?;
    let max_playtime: u32 = rest[3].parse().ok()?;
    let min_playtime: u32 = rest[4].parse().ok()?;
    let year: i32 = rest[5].parse().ok()?;

    // Generated IDs are only consumed by rows that actually load; the
    // counter advances after validation succeeds.
    let generated = explicit_id.is_none();
    let id = explicit_id.unwrap_or_else(|| format!("G{:03}", auto_id_counter));

    let game = GameRecord::new(
        id,
        title,
        min_players,
        max_players,
        min_playtime,
        max_playtime,
        year,
    )
    .ok()?;

    if generated {
        *auto_id_counter += 1;
    }
    Some(game)
}

/// Split a row on commas, keeping commas inside double quotes.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                current.push(c);
            }
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current = String::new();
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());
    fields
}

/// Drop surrounding double quotes from a field, if present.
fn strip_quotes(field: &str) -> String {
    let field = field.trim();
    if field.len() >= 2 && field.starts_with('"') && field.ends_with('"') {
        field[1..field.len() - 1].to_string()
    } else {
        field.to_string()
    }
}

/// Quote a field for output when it contains a comma.
fn quote_field(field: &str) -> String {
    if field.contains(',') {
        format!("\"{}\"", field)
    } else {
        field.to_string()
    }
}
