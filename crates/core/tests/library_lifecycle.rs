//! Library lifecycle integration tests.
//!
//! These cover the cross-structure invariants:
//! - Index-store consistency across insert/delete sequences
//! - Sort engine determinism (permutation, total order, idempotence)
//! - Borrow/return round trips and their transaction records
//! - Deletion guard for borrowed games

use chrono::NaiveDate;

use ludoteca_core::{
    GameRecord, GameStatus, Library, LibraryError, Member, SortOrder,
};

fn date(s: &str) -> NaiveDate {
    s.parse().expect("valid test date")
}

fn game(
    id: &str,
    title: &str,
    min_players: u32,
    max_players: u32,
    min_playtime: u32,
    max_playtime: u32,
    year: i32,
) -> GameRecord {
    GameRecord::new(id, title, min_players, max_players, min_playtime, max_playtime, year)
        .expect("valid test game")
}

fn member(id: &str, name: &str) -> Member {
    Member::new(id, name, format!("{}@example.com", name.to_lowercase())).expect("valid member")
}

/// The catalog scenario from the requirements: two inserts, a keyed lookup,
/// a title listing, a delete, then lookups against the rebuilt index.
#[test]
fn catalog_insert_delete_rebuild_scenario() {
    let mut lib = Library::new(1000, 100);
    lib.add_game(game("G001", "Catan", 3, 4, 60, 90, 1995)).unwrap();
    lib.add_game(game("G002", "Go", 2, 2, 30, 30, -2200)).unwrap();

    assert_eq!(lib.catalog().position_of("G002"), Some(1));

    let listing = lib.listing(SortOrder::TitleAsc);
    let titles: Vec<&str> = listing.iter().map(|g| g.title.as_str()).collect();
    assert_eq!(titles, vec!["Catan", "Go"]);

    lib.remove_game("G001").unwrap();
    assert_eq!(lib.catalog().position_of("G001"), None);
    assert_eq!(lib.catalog().position_of("G002"), Some(0));
}

/// The borrow scenario from the requirements: borrow, conflicting borrow
/// reporting the holder, then a return restoring availability.
#[test]
fn borrow_conflict_and_return_scenario() {
    let mut lib = Library::new(1000, 100);
    lib.add_game(game("G002", "Go", 2, 2, 30, 30, -2200)).unwrap();
    lib.add_member(member("M001", "Ada")).unwrap();
    lib.add_member(member("M002", "Grace")).unwrap();

    lib.borrow_game("M001", "G002", date("2026-08-30")).unwrap();
    {
        let g = lib.catalog().get("G002").unwrap();
        assert_eq!(g.status, GameStatus::Borrowed);
        assert_eq!(g.borrow_count, 1);
    }

    let err = lib.borrow_game("M002", "G002", date("2026-08-30")).unwrap_err();
    assert_eq!(
        err,
        LibraryError::AlreadyBorrowed {
            game_id: "G002".to_string(),
            borrower: "M001".to_string(),
        }
    );

    lib.return_game("G002", date("2026-09-01")).unwrap();
    assert!(lib.catalog().get("G002").unwrap().is_available());
}

#[test]
fn index_stays_consistent_under_churn() {
    let mut lib = Library::new(1000, 100);
    for i in 1..=20 {
        lib.add_game(game(
            &format!("G{:03}", i),
            &format!("Game {}", i),
            2,
            4,
            30,
            60,
            2000 + i,
        ))
        .unwrap();
    }

    // Delete from the front, middle and back, checking every survivor's
    // indexed position after each shift.
    for removed in ["G001", "G010", "G020", "G002", "G011"] {
        lib.remove_game(removed).unwrap();
        assert_eq!(lib.catalog().position_of(removed), None);

        for (pos, g) in lib.catalog().games().iter().enumerate() {
            assert_eq!(
                lib.catalog().position_of(&g.id),
                Some(pos),
                "stale index entry for {} after removing {}",
                g.id,
                removed
            );
        }
    }
    assert_eq!(lib.catalog().len(), 15);
}

#[test]
fn listings_are_total_orders_and_idempotent() {
    let mut lib = Library::new(1000, 100);
    // Duplicate titles, years and counts to stress the tie-breaks.
    lib.add_game(game("G004", "catan", 3, 4, 60, 90, 1995)).unwrap();
    lib.add_game(game("G002", "Catan", 3, 4, 60, 90, 1995)).unwrap();
    lib.add_game(game("G003", "Azul", 2, 4, 30, 45, 2017)).unwrap();
    lib.add_game(game("G001", "Brass", 2, 4, 60, 120, 2007)).unwrap();

    let orders = [
        SortOrder::TitleAsc,
        SortOrder::TitleDesc,
        SortOrder::BorrowCountAsc,
        SortOrder::BorrowCountDesc,
        SortOrder::YearAsc,
    ];

    for order in orders {
        let listing = lib.listing(order);

        // Permutation of the catalog.
        assert_eq!(listing.len(), lib.catalog().len());
        let mut ids: Vec<&str> = listing.iter().map(|g| g.id.as_str()).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec!["G001", "G002", "G003", "G004"]);

        // Strictly ordered under the comparator: no adjacent pair equal or
        // inverted.
        for pair in listing.windows(2) {
            assert_eq!(
                order.compare(&pair[0], &pair[1]),
                std::cmp::Ordering::Less,
                "{:?} listing not strictly ordered",
                order
            );
        }

        // Idempotent: a listing of the same catalog is identical.
        assert_eq!(listing, lib.listing(order));
    }
}

#[test]
fn borrow_count_ordering_reflects_history() {
    let mut lib = Library::new(1000, 100);
    lib.add_game(game("G001", "Catan", 3, 4, 60, 90, 1995)).unwrap();
    lib.add_game(game("G002", "Go", 2, 2, 30, 30, -2200)).unwrap();
    lib.add_game(game("G003", "Azul", 2, 4, 30, 45, 2017)).unwrap();
    lib.add_member(member("M001", "Ada")).unwrap();

    // Go: 2 borrows, Azul: 1, Catan: 0.
    for (g, d1, d2) in [("G002", "2026-01-01", "2026-01-02"), ("G003", "2026-01-03", "2026-01-04")]
    {
        lib.borrow_game("M001", g, date(d1)).unwrap();
        lib.return_game(g, date(d2)).unwrap();
    }
    lib.borrow_game("M001", "G002", date("2026-01-05")).unwrap();
    lib.return_game("G002", date("2026-01-06")).unwrap();

    let desc_listing = lib.listing(SortOrder::BorrowCountDesc);
    let desc: Vec<&str> = desc_listing.iter().map(|g| g.id.as_str()).collect();
    assert_eq!(desc, vec!["G002", "G003", "G001"]);

    let asc_listing = lib.listing(SortOrder::BorrowCountAsc);
    let asc: Vec<&str> = asc_listing.iter().map(|g| g.id.as_str()).collect();
    assert_eq!(asc, vec!["G001", "G003", "G002"]);
}

#[test]
fn borrow_return_round_trip_leaves_one_resolved_record() {
    let mut lib = Library::new(1000, 100);
    lib.add_game(game("G001", "Catan", 3, 4, 60, 90, 1995)).unwrap();
    lib.add_member(member("M001", "Ada")).unwrap();

    lib.borrow_game("M001", "G001", date("2026-08-30")).unwrap();
    lib.return_game("G001", date("2026-09-02")).unwrap();

    let game = lib.catalog().get("G001").unwrap();
    assert_eq!(game.status, GameStatus::Available);
    assert!(game.borrowed_by.is_none());

    let records: Vec<_> = lib
        .log()
        .records()
        .iter()
        .filter(|r| r.game_id == "G001" && r.member_id == "M001")
        .collect();
    assert_eq!(records.len(), 1);
    assert!(records[0].returned);
    assert_eq!(records[0].borrow_date, date("2026-08-30"));
    assert_eq!(records[0].return_date, Some(date("2026-09-02")));
}

#[test]
fn deleting_a_borrowed_game_changes_nothing() {
    let mut lib = Library::new(1000, 100);
    lib.add_game(game("G001", "Catan", 3, 4, 60, 90, 1995)).unwrap();
    lib.add_game(game("G002", "Go", 2, 2, 30, 30, -2200)).unwrap();
    lib.add_member(member("M001", "Ada")).unwrap();
    lib.borrow_game("M001", "G002", date("2026-08-30")).unwrap();

    let err = lib.remove_game("G002").unwrap_err();
    assert_eq!(
        err,
        LibraryError::GameCurrentlyBorrowed {
            game_id: "G002".to_string(),
            borrower: "M001".to_string(),
        }
    );

    // Store and index untouched.
    assert_eq!(lib.catalog().len(), 2);
    assert_eq!(lib.catalog().position_of("G001"), Some(0));
    assert_eq!(lib.catalog().position_of("G002"), Some(1));
    assert_eq!(lib.catalog().get("G002").unwrap().borrowed_by.as_deref(), Some("M001"));
}

#[test]
fn player_count_search_feeds_the_sort_engine() {
    let mut lib = Library::new(1000, 100);
    lib.add_game(game("G001", "Catan", 3, 4, 60, 90, 1995)).unwrap();
    lib.add_game(game("G002", "Go", 2, 2, 30, 30, -2200)).unwrap();
    lib.add_game(game("G003", "Azul", 2, 4, 30, 45, 2017)).unwrap();
    lib.add_game(game("G004", "Twilight Struggle", 2, 2, 120, 180, 2005)).unwrap();

    let result = lib.search_by_player_count(2, SortOrder::YearAsc);
    let ids: Vec<&str> = result.iter().map(|g| g.id.as_str()).collect();
    assert_eq!(ids, vec!["G002", "G004", "G003"]);

    assert!(lib.search_by_player_count(9, SortOrder::YearAsc).is_empty());
}

#[test]
fn member_summary_after_mixed_activity() {
    let mut lib = Library::new(1000, 100);
    lib.add_game(game("G001", "Catan", 3, 4, 60, 90, 1995)).unwrap();
    lib.add_game(game("G002", "Go", 2, 2, 30, 30, -2200)).unwrap();
    lib.add_member(member("M001", "Ada")).unwrap();

    lib.borrow_game("M001", "G001", date("2026-01-01")).unwrap();
    lib.borrow_game("M001", "G002", date("2026-01-02")).unwrap();
    lib.return_game("G001", date("2026-01-05")).unwrap();

    let summary = lib.summary();
    assert_eq!(summary.total_games, 2);
    assert_eq!(summary.borrowed_now, 1);
    assert_eq!(summary.available_now, 1);
    assert_eq!(summary.total_borrow_events, 2);

    let history = lib.member_history("M001").unwrap();
    assert_eq!(history.len(), 2);
    assert!(history[0].returned);
    assert!(!history[1].returned);
}
