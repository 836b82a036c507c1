//! Member roster - a fixed-capacity member collection.
//!
//! Members are looked up by linear scan; only games get a hash index. The
//! roster is small (hundreds at most) and member lookups are rare compared
//! to game lookups.

use tracing::info;

use crate::error::LibraryError;

use super::types::Member;

/// Registered members with a fixed maximum.
#[derive(Debug)]
pub struct MemberRoster {
    members: Vec<Member>,
    max_members: usize,
}

impl MemberRoster {
    /// Create an empty roster with a fixed capacity.
    pub fn new(max_members: usize) -> Self {
        Self {
            members: Vec::new(),
            max_members,
        }
    }

    /// Register a new member.
    pub fn add(&mut self, member: Member) -> Result<(), LibraryError> {
        if self.members.len() >= self.max_members {
            return Err(LibraryError::CapacityExceeded {
                what: "member",
                max: self.max_members,
            });
        }
        if self.members.iter().any(|m| m.id == member.id) {
            return Err(LibraryError::DuplicateMemberId(member.id));
        }
        info!(id = %member.id, "member registered");
        self.members.push(member);
        Ok(())
    }

    /// Look up a member by ID.
    pub fn get(&self, id: &str) -> Result<&Member, LibraryError> {
        self.members
            .iter()
            .find(|m| m.id == id)
            .ok_or_else(|| LibraryError::MemberNotFound(id.to_string()))
    }

    /// Mutable lookup by ID.
    pub fn get_mut(&mut self, id: &str) -> Result<&mut Member, LibraryError> {
        self.members
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| LibraryError::MemberNotFound(id.to_string()))
    }

    /// Whether a member with this ID exists.
    pub fn contains(&self, id: &str) -> bool {
        self.members.iter().any(|m| m.id == id)
    }

    /// Iterate registered members.
    pub fn iter(&self) -> impl Iterator<Item = &Member> {
        self.members.iter()
    }

    /// Number of registered members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True when nobody is registered.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: &str) -> Member {
        Member::new(id, format!("Member {}", id), format!("{}@example.com", id)).unwrap()
    }

    #[test]
    fn test_add_and_get() {
        let mut roster = MemberRoster::new(10);
        roster.add(member("M001")).unwrap();
        assert_eq!(roster.get("M001").unwrap().id, "M001");
        assert!(roster.contains("M001"));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut roster = MemberRoster::new(10);
        roster.add(member("M001")).unwrap();
        let err = roster.add(member("M001")).unwrap_err();
        assert_eq!(err, LibraryError::DuplicateMemberId("M001".to_string()));
    }

    #[test]
    fn test_capacity_enforced() {
        let mut roster = MemberRoster::new(1);
        roster.add(member("M001")).unwrap();
        let err = roster.add(member("M002")).unwrap_err();
        assert!(matches!(err, LibraryError::CapacityExceeded { .. }));
    }

    #[test]
    fn test_get_missing_member() {
        let roster = MemberRoster::new(10);
        assert!(matches!(
            roster.get("M404"),
            Err(LibraryError::MemberNotFound(_))
        ));
    }
}
