//! Member session: borrow, return, search and reviews for one logged-in
//! member.

use chrono::NaiveDate;
use ludoteca_core::{Library, SortOrder};
use tracing::debug;

use crate::input::{read_line, read_number};
use crate::render;

/// Prompt for a member ID and run their session menu. Dates for borrow,
/// return and review entries come from `today`.
pub fn run(library: &mut Library, today: NaiveDate) {
    let member_id = read_line("Member ID: ");
    let name = match library.roster().get(&member_id) {
        Ok(member) => member.name.clone(),
        Err(err) => {
            println!("{}", err);
            return;
        }
    };
    println!("Welcome, {}.", name);

    loop {
        println!();
        println!("=== Member: {} ===", name);
        println!("1. Borrow a game");
        println!("2. Return a game");
        println!("3. My borrowed games");
        println!("4. Search by player count");
        println!("5. Write a review");
        println!("6. Read reviews");
        println!("7. My history");
        println!("0. Back");

        match read_line("> ").as_str() {
            "1" => borrow(library, &member_id, today),
            "2" => return_game(library, today),
            "3" => my_borrowed(library, &member_id),
            "4" => search(library),
            "5" => write_review(library, &member_id, today),
            "6" => read_reviews(library),
            "7" => history(library, &member_id),
            "0" | "" => return,
            other => {
                debug!(choice = other, "unknown member menu choice");
                println!("Unknown choice.");
            }
        }
    }
}

fn borrow(library: &mut Library, member_id: &str, today: NaiveDate) {
    let game_id = read_line("Game ID to borrow: ");
    if game_id.is_empty() {
        return;
    }
    match library.borrow_game(member_id, &game_id, today) {
        Ok(()) => println!("Borrowed {}.", game_id),
        Err(err) => println!("Could not borrow: {}", err),
    }
}

fn return_game(library: &mut Library, today: NaiveDate) {
    let game_id = read_line("Game ID to return: ");
    if game_id.is_empty() {
        return;
    }
    match library.return_game(&game_id, today) {
        Ok(()) => println!("Returned {}.", game_id),
        Err(err) => println!("Could not return: {}", err),
    }
}

fn my_borrowed(library: &Library, member_id: &str) {
    let member = match library.roster().get(member_id) {
        Ok(member) => member,
        Err(err) => {
            println!("{}", err);
            return;
        }
    };
    if member.borrowed.is_empty() {
        println!("You have nothing borrowed.");
        return;
    }
    for game_id in member.borrowed.iter() {
        match library.catalog().get(game_id) {
            Ok(game) => println!("{}", render::game_line(game)),
            Err(_) => println!("{} (no longer in the catalog)", game_id),
        }
    }
}

fn search(library: &Library) {
    let Some(players) = read_number::<u32>("How many players? ") else {
        println!("Not a number.");
        return;
    };

    let matches = library.search_by_player_count(players, SortOrder::YearAsc);
    if matches.is_empty() {
        println!("No game fits {} players.", players);
    } else {
        println!("{}", render::game_table(&matches));
    }
}

fn write_review(library: &mut Library, member_id: &str, today: NaiveDate) {
    let game_id = read_line("Game ID to review: ");
    if game_id.is_empty() {
        return;
    }
    let Some(rating) = read_number::<u8>("Rating (1-10): ") else {
        println!("Not a number.");
        return;
    };
    let text = read_line("Your review: ");

    match library.add_review(member_id, &game_id, rating, &text, today) {
        Ok(()) => println!("Review recorded."),
        Err(err) => println!("Could not record review: {}", err),
    }
}

fn read_reviews(library: &Library) {
    let game_id = read_line("Game ID: ");
    if game_id.is_empty() {
        return;
    }
    let reviews = library.reviews_for(&game_id);
    if reviews.is_empty() {
        println!("No reviews yet for {}.", game_id);
        return;
    }
    for review in reviews {
        println!("{}", render::review_block(review));
    }
}

fn history(library: &Library, member_id: &str) {
    match library.member_history(member_id) {
        Ok(records) if records.is_empty() => println!("No history yet."),
        Ok(records) => {
            for record in records {
                println!("{}", render::record_line(record));
            }
        }
        Err(err) => println!("{}", err),
    }
}
