//! Administrator menu: catalog upkeep, member registration, listings.

use ludoteca_core::{GameRecord, Library, Member, SortOrder};
use tracing::debug;

use crate::input::{read_line, read_number};
use crate::render;

/// Run the admin menu until the user backs out.
pub fn run(library: &mut Library) {
    loop {
        println!();
        println!("=== Admin ===");
        println!("1. Add game");
        println!("2. Remove game");
        println!("3. Register member");
        println!("4. List catalog");
        println!("5. Currently borrowed");
        println!("6. Summary");
        println!("0. Back");

        match read_line("> ").as_str() {
            "1" => add_game(library),
            "2" => remove_game(library),
            "3" => register_member(library),
            "4" => list_catalog(library),
            "5" => currently_borrowed(library),
            "6" => summary(library),
            "0" | "" => return,
            other => {
                debug!(choice = other, "unknown admin menu choice");
                println!("Unknown choice.");
            }
        }
    }
}

fn add_game(library: &mut Library) {
    let id = read_line("Game ID (e.g. G001): ");
    let title = read_line("Title: ");
    let Some(min_players) = read_number::<u32>("Min players: ") else {
        println!("Not a number.");
        return;
    };
    let Some(max_players) = read_number::<u32>("Max players: ") else {
        println!("Not a number.");
        return;
    };
    let Some(min_playtime) = read_number::<u32>("Min playtime (minutes): ") else {
        println!("Not a number.");
        return;
    };
    let Some(max_playtime) = read_number::<u32>("Max playtime (minutes): ") else {
        println!("Not a number.");
        return;
    };
    let Some(year) = read_number::<i32>("Year published (negative for BCE): ") else {
        println!("Not a number.");
        return;
    };

    let record = match GameRecord::new(
        &id,
        &title,
        min_players,
        max_players,
        min_playtime,
        max_playtime,
        year,
    ) {
        Ok(record) => record,
        Err(err) => {
            println!("Invalid game: {}", err);
            return;
        }
    };

    match library.add_game(record) {
        Ok(()) => println!("Added {}.", id),
        Err(err) => println!("Could not add game: {}", err),
    }
}

fn remove_game(library: &mut Library) {
    let id = read_line("Game ID to remove: ");
    if id.is_empty() {
        return;
    }
    match library.remove_game(&id) {
        Ok(removed) => println!("Removed {} ({}).", removed.id, removed.title),
        Err(err) => println!("Could not remove game: {}", err),
    }
}

fn register_member(library: &mut Library) {
    let id = read_line("Member ID (e.g. M001): ");
    let name = read_line("Name: ");
    let email = read_line("Email: ");

    let member = match Member::new(&id, &name, &email) {
        Ok(member) => member,
        Err(err) => {
            println!("Invalid member: {}", err);
            return;
        }
    };

    match library.add_member(member) {
        Ok(()) => println!("Registered {}.", id),
        Err(err) => println!("Could not register member: {}", err),
    }
}

fn list_catalog(library: &Library) {
    println!("Sort by:");
    println!("1. Title A-Z");
    println!("2. Title Z-A");
    println!("3. Most borrowed first");
    println!("4. Least borrowed first");
    println!("5. Year published");

    let order = match read_line("> ").as_str() {
        "1" => SortOrder::TitleAsc,
        "2" => SortOrder::TitleDesc,
        "3" => SortOrder::BorrowCountDesc,
        "4" => SortOrder::BorrowCountAsc,
        "5" => SortOrder::YearAsc,
        _ => {
            println!("Unknown choice.");
            return;
        }
    };

    let listing = library.listing(order);
    if listing.is_empty() {
        println!("The catalog is empty.");
    } else {
        println!("{}", render::game_table(&listing));
    }
}

fn currently_borrowed(library: &Library) {
    let out = library.currently_borrowed();
    if out.is_empty() {
        println!("Nothing is borrowed right now.");
        return;
    }
    for game in out {
        println!("{}", render::game_line(game));
    }
}

fn summary(library: &Library) {
    let s = library.summary();
    println!("Games in catalog:   {}", s.total_games);
    println!("Borrowed right now: {}", s.borrowed_now);
    println!("Available:          {}", s.available_now);
    println!("Borrow events ever: {}", s.total_borrow_events);
    println!("Registered members: {}", library.roster().len());
}
