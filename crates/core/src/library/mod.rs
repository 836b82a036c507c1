//! The library facade - every user-facing operation goes through here.
//!
//! `Library` owns the catalog store, the member roster, the transaction log
//! and the review collection, and keeps them mutually consistent: borrow
//! and return each touch the game record, the member's list and the log in
//! one call. Guards run before any mutation, so a failed operation leaves
//! no partial state behind.

use chrono::NaiveDate;
use tracing::info;

use crate::catalog::{find_by_player_count, sorted, CatalogStore, GameRecord, GameStatus, SortOrder};
use crate::error::LibraryError;
use crate::lending::{BorrowRecord, LendingLog};
use crate::member::{Member, MemberRoster};
use crate::review::Review;

/// Aggregate counts for the admin summary view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibrarySummary {
    pub total_games: usize,
    pub borrowed_now: usize,
    pub available_now: usize,
    /// Cumulative borrow events across all games, returned or not.
    pub total_borrow_events: u64,
}

/// The whole in-memory system: catalog, roster, transaction log, reviews.
#[derive(Debug)]
pub struct Library {
    catalog: CatalogStore,
    roster: MemberRoster,
    log: LendingLog,
    reviews: Vec<Review>,
}

impl Library {
    /// Create an empty library with the given fixed capacities.
    pub fn new(max_games: usize, max_members: usize) -> Self {
        Self {
            catalog: CatalogStore::new(max_games),
            roster: MemberRoster::new(max_members),
            log: LendingLog::new(),
            reviews: Vec::new(),
        }
    }

    // ========================================================================
    // Catalog administration
    // ========================================================================

    /// Add a game to the catalog.
    pub fn add_game(&mut self, record: GameRecord) -> Result<(), LibraryError> {
        let id = record.id.clone();
        self.catalog.insert(record)?;
        info!(id = %id, total = self.catalog.len(), "game added");
        Ok(())
    }

    /// Remove a game. Fails while the game is borrowed.
    pub fn remove_game(&mut self, game_id: &str) -> Result<GameRecord, LibraryError> {
        self.catalog.remove(game_id)
    }

    /// Register a member.
    pub fn add_member(&mut self, member: Member) -> Result<(), LibraryError> {
        self.roster.add(member)
    }

    // ========================================================================
    // Borrow / return state machine
    // ========================================================================

    /// Borrow a game for a member.
    ///
    /// Requires that the member exists, the game exists and the game is
    /// available. On success the game flips to `Borrowed`, its counter
    /// increments, the member's list gains the ID and an open
    /// [`BorrowRecord`] is appended. Nothing changes on failure.
    pub fn borrow_game(
        &mut self,
        member_id: &str,
        game_id: &str,
        today: NaiveDate,
    ) -> Result<(), LibraryError> {
        if !self.roster.contains(member_id) {
            return Err(LibraryError::MemberNotFound(member_id.to_string()));
        }

        {
            let game = self.catalog.get(game_id)?;
            if let Some(borrower) = &game.borrowed_by {
                return Err(LibraryError::AlreadyBorrowed {
                    game_id: game_id.to_string(),
                    borrower: borrower.clone(),
                });
            }
        }

        let game = self.catalog.get_mut(game_id)?;
        game.status = GameStatus::Borrowed;
        game.borrowed_by = Some(member_id.to_string());
        game.borrow_count += 1;

        let member = self.roster.get_mut(member_id)?;
        member.borrowed.add(game_id);

        self.log
            .append(BorrowRecord::new(game_id, member_id, today));
        info!(member = member_id, game = game_id, %today, "game borrowed");
        Ok(())
    }

    /// Return a borrowed game.
    ///
    /// Requires that the game exists and is borrowed. On success the game
    /// flips to `Available`, the borrower's list drops the first matching
    /// entry and the newest unresolved log record for the pair is marked
    /// returned with today's date.
    pub fn return_game(&mut self, game_id: &str, today: NaiveDate) -> Result<(), LibraryError> {
        let member_id = {
            let game = self.catalog.get(game_id)?;
            game.borrowed_by
                .clone()
                .ok_or_else(|| LibraryError::NotCurrentlyBorrowed(game_id.to_string()))?
        };

        let game = self.catalog.get_mut(game_id)?;
        game.status = GameStatus::Available;
        game.borrowed_by = None;

        if let Ok(member) = self.roster.get_mut(&member_id) {
            member.borrowed.remove_first(game_id);
        }
        self.log.resolve(game_id, &member_id, today);
        info!(member = %member_id, game = game_id, %today, "game returned");
        Ok(())
    }

    // ========================================================================
    // Reviews
    // ========================================================================

    /// Record a review. The member and game must both exist.
    pub fn add_review(
        &mut self,
        member_id: &str,
        game_id: &str,
        rating: u8,
        text: &str,
        today: NaiveDate,
    ) -> Result<(), LibraryError> {
        let member_name = self.roster.get(member_id)?.name.clone();
        self.catalog.get(game_id)?;

        let review = Review::new(game_id, member_id, member_name, rating, text, today)?;
        self.reviews.push(review);
        Ok(())
    }

    /// All reviews for a game, oldest first.
    pub fn reviews_for(&self, game_id: &str) -> Vec<&Review> {
        self.reviews
            .iter()
            .filter(|r| r.game_id == game_id)
            .collect()
    }

    // ========================================================================
    // Views
    // ========================================================================

    /// A sorted copy of the whole catalog.
    pub fn listing(&self, order: SortOrder) -> Vec<GameRecord> {
        sorted(self.catalog.games(), order)
    }

    /// Games playable by `players` people, sorted per `order`.
    pub fn search_by_player_count(&self, players: u32, order: SortOrder) -> Vec<GameRecord> {
        let matches = find_by_player_count(self.catalog.games(), players);
        sorted(&matches, order)
    }

    /// Aggregate borrow/availability counts.
    pub fn summary(&self) -> LibrarySummary {
        let borrowed_now = self
            .catalog
            .iter()
            .filter(|g| g.status == GameStatus::Borrowed)
            .count();
        LibrarySummary {
            total_games: self.catalog.len(),
            borrowed_now,
            available_now: self.catalog.len() - borrowed_now,
            total_borrow_events: self.catalog.iter().map(|g| u64::from(g.borrow_count)).sum(),
        }
    }

    /// Games currently out, in catalog order.
    pub fn currently_borrowed(&self) -> Vec<&GameRecord> {
        self.catalog
            .iter()
            .filter(|g| g.status == GameStatus::Borrowed)
            .collect()
    }

    /// A member's full transaction history, oldest first.
    pub fn member_history(&self, member_id: &str) -> Result<Vec<&BorrowRecord>, LibraryError> {
        self.roster.get(member_id)?;
        Ok(self.log.for_member(member_id))
    }

    // ========================================================================
    // Accessors for the front end
    // ========================================================================

    /// The catalog store.
    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// The member roster.
    pub fn roster(&self) -> &MemberRoster {
        &self.roster
    }

    /// The transaction log.
    pub fn log(&self) -> &LendingLog {
        &self.log
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn library() -> Library {
        let mut lib = Library::new(100, 10);
        lib.add_game(GameRecord::new("G001", "Catan", 3, 4, 60, 90, 1995).unwrap())
            .unwrap();
        lib.add_game(GameRecord::new("G002", "Go", 2, 2, 30, 30, -2200).unwrap())
            .unwrap();
        lib.add_member(Member::new("M001", "Ada", "ada@example.com").unwrap())
            .unwrap();
        lib.add_member(Member::new("M002", "Grace", "grace@example.com").unwrap())
            .unwrap();
        lib
    }

    #[test]
    fn test_borrow_updates_game_member_and_log() {
        let mut lib = library();
        lib.borrow_game("M001", "G002", date("2026-08-30")).unwrap();

        let game = lib.catalog().get("G002").unwrap();
        assert_eq!(game.status, GameStatus::Borrowed);
        assert_eq!(game.borrowed_by.as_deref(), Some("M001"));
        assert_eq!(game.borrow_count, 1);

        assert!(lib.roster().get("M001").unwrap().has_borrowed("G002"));
        assert_eq!(lib.log().len(), 1);
        assert!(lib.log().records()[0].is_open());
    }

    #[test]
    fn test_double_borrow_reports_current_borrower() {
        let mut lib = library();
        lib.borrow_game("M001", "G002", date("2026-08-30")).unwrap();

        let err = lib
            .borrow_game("M002", "G002", date("2026-08-30"))
            .unwrap_err();
        assert_eq!(
            err,
            LibraryError::AlreadyBorrowed {
                game_id: "G002".to_string(),
                borrower: "M001".to_string(),
            }
        );
        // No state change on failure.
        assert_eq!(lib.catalog().get("G002").unwrap().borrow_count, 1);
        assert!(!lib.roster().get("M002").unwrap().has_borrowed("G002"));
        assert_eq!(lib.log().len(), 1);
    }

    #[test]
    fn test_borrow_unknown_member_changes_nothing() {
        let mut lib = library();
        let err = lib
            .borrow_game("M404", "G001", date("2026-08-30"))
            .unwrap_err();
        assert_eq!(err, LibraryError::MemberNotFound("M404".to_string()));
        assert!(lib.catalog().get("G001").unwrap().is_available());
        assert!(lib.log().is_empty());
    }

    #[test]
    fn test_borrow_unknown_game() {
        let mut lib = library();
        let err = lib
            .borrow_game("M001", "G404", date("2026-08-30"))
            .unwrap_err();
        assert_eq!(err, LibraryError::GameNotFound("G404".to_string()));
    }

    #[test]
    fn test_return_round_trip_resolves_exactly_one_record() {
        let mut lib = library();
        lib.borrow_game("M001", "G002", date("2026-08-30")).unwrap();
        lib.return_game("G002", date("2026-09-05")).unwrap();

        let game = lib.catalog().get("G002").unwrap();
        assert_eq!(game.status, GameStatus::Available);
        assert!(game.borrowed_by.is_none());
        assert_eq!(game.borrow_count, 1);
        assert!(!lib.roster().get("M001").unwrap().has_borrowed("G002"));

        let records = lib.log().records();
        assert_eq!(records.len(), 1);
        assert!(records[0].returned);
        assert_eq!(records[0].borrow_date, date("2026-08-30"));
        assert_eq!(records[0].return_date, Some(date("2026-09-05")));
    }

    #[test]
    fn test_return_available_game_fails() {
        let mut lib = library();
        let err = lib.return_game("G001", date("2026-08-30")).unwrap_err();
        assert_eq!(err, LibraryError::NotCurrentlyBorrowed("G001".to_string()));
    }

    #[test]
    fn test_remove_borrowed_game_guard() {
        let mut lib = library();
        lib.borrow_game("M001", "G001", date("2026-08-30")).unwrap();

        let err = lib.remove_game("G001").unwrap_err();
        assert!(matches!(err, LibraryError::GameCurrentlyBorrowed { .. }));
        assert_eq!(lib.catalog().len(), 2);
    }

    #[test]
    fn test_reborrow_after_return() {
        let mut lib = library();
        lib.borrow_game("M001", "G002", date("2026-01-01")).unwrap();
        lib.return_game("G002", date("2026-01-10")).unwrap();
        lib.borrow_game("M002", "G002", date("2026-02-01")).unwrap();

        let game = lib.catalog().get("G002").unwrap();
        assert_eq!(game.borrowed_by.as_deref(), Some("M002"));
        assert_eq!(game.borrow_count, 2);
        assert_eq!(lib.log().len(), 2);
    }

    #[test]
    fn test_summary_counts() {
        let mut lib = library();
        lib.borrow_game("M001", "G001", date("2026-08-30")).unwrap();

        let summary = lib.summary();
        assert_eq!(summary.total_games, 2);
        assert_eq!(summary.borrowed_now, 1);
        assert_eq!(summary.available_now, 1);
        assert_eq!(summary.total_borrow_events, 1);
        assert_eq!(lib.currently_borrowed()[0].id, "G001");
    }

    #[test]
    fn test_review_requires_member_and_game() {
        let mut lib = library();
        assert!(matches!(
            lib.add_review("M404", "G001", 8, "nice", date("2026-08-30")),
            Err(LibraryError::MemberNotFound(_))
        ));
        assert!(matches!(
            lib.add_review("M001", "G404", 8, "nice", date("2026-08-30")),
            Err(LibraryError::GameNotFound(_))
        ));

        lib.add_review("M001", "G001", 8, "nice", date("2026-08-30"))
            .unwrap();
        let reviews = lib.reviews_for("G001");
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].member_name, "Ada");
        assert!(lib.reviews_for("G002").is_empty());
    }

    #[test]
    fn test_search_by_player_count_sorted_by_year() {
        let mut lib = library();
        lib.add_game(GameRecord::new("G003", "Azul", 2, 4, 30, 45, 2017).unwrap())
            .unwrap();

        let result = lib.search_by_player_count(2, SortOrder::YearAsc);
        let ids: Vec<&str> = result.iter().map(|g| g.id.as_str()).collect();
        // Go (-2200) before Azul (2017); Catan needs 3+ players.
        assert_eq!(ids, vec!["G002", "G003"]);
    }

    #[test]
    fn test_member_history() {
        let mut lib = library();
        lib.borrow_game("M001", "G001", date("2026-01-01")).unwrap();
        lib.borrow_game("M001", "G002", date("2026-01-02")).unwrap();
        lib.return_game("G001", date("2026-01-03")).unwrap();

        let history = lib.member_history("M001").unwrap();
        assert_eq!(history.len(), 2);
        assert!(history[0].returned);
        assert!(history[1].is_open());

        assert!(lib.member_history("M404").is_err());
    }
}
