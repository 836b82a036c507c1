//! Fixed-width rendering for catalog listings, transactions and reviews.

use ludoteca_core::{BorrowRecord, GameRecord, Review};

const TITLE_WIDTH: usize = 35;
const RULE: &str =
    "--------------------------------------------------------------------------------";

/// Render a listing in the catalog table layout.
pub fn game_table(games: &[GameRecord]) -> String {
    let mut out = String::new();
    out.push_str(RULE);
    out.push('\n');
    out.push_str("No | GameID | Title                               | Year | Borrows | Status\n");
    out.push_str(RULE);
    out.push('\n');

    for (i, game) in games.iter().enumerate() {
        out.push_str(&format!(
            "{:<2} | {:<6} | {:<width$} | {:<5} | {:<7} | {}\n",
            i + 1,
            game.id,
            truncate(&game.title),
            game.year_published,
            game.borrow_count,
            game.status.as_str(),
            width = TITLE_WIDTH,
        ));
    }

    out.push_str(RULE);
    out
}

/// One-line rendering of a game outside table context.
pub fn game_line(game: &GameRecord) -> String {
    let holder = match &game.borrowed_by {
        Some(member) => format!(" | Borrowed by: {}", member),
        None => String::new(),
    };
    format!(
        "{} | {} | {}-{} players | {}-{} min | {}{}",
        game.id,
        game.title,
        game.min_players,
        game.max_players,
        game.min_playtime,
        game.max_playtime,
        game.year_published,
        holder
    )
}

/// One-line rendering of a borrow transaction.
pub fn record_line(record: &BorrowRecord) -> String {
    match record.return_date {
        Some(returned) => format!(
            "{} | borrowed {} | returned {}",
            record.game_id, record.borrow_date, returned
        ),
        None => format!("{} | borrowed {} | still out", record.game_id, record.borrow_date),
    }
}

/// Multi-line rendering of a review.
pub fn review_block(review: &Review) -> String {
    format!(
        "{} rated {}/10 on {}\n  {}",
        review.member_name, review.rating, review.date, review.text
    )
}

fn truncate(title: &str) -> String {
    if title.chars().count() > TITLE_WIDTH {
        let cut: String = title.chars().take(TITLE_WIDTH - 3).collect();
        format!("{}...", cut)
    } else {
        title.to_string()
    }
}
