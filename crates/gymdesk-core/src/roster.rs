//! Student directory
//!
//! Read-only roster of enrolled members. The billing engine walks it to
//! generate monthly dues and the delinquency rollup pulls contact data
//! from it.

use serde::{Deserialize, Serialize};

/// An enrolled member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterMember {
    pub id: u32,
    pub name: String,
}

/// Contact details for a member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub phone: String,
}

/// Source of enrolled members and their contact data
pub trait StudentDirectory {
    /// All currently enrolled members
    fn members(&self) -> Vec<RosterMember>;
    /// Contact details for a member, `None` when unknown
    fn contact(&self, id: u32) -> Option<Contact>;
}

/// Placeholder contact for people the directory does not know.
///
/// Email follows the name (lowercased, spaces to dots); the phone is
/// derived from the id so repeated report runs agree.
pub fn placeholder_contact(id: u32, name: &str) -> Contact {
    let email = format!("{}@email.com", name.to_lowercase().replace(' ', "."));
    let prefix = 1000 + (id as u64 * 37) % 9000;
    let suffix = 1000 + (id as u64 * 73) % 9000;
    Contact {
        email,
        phone: format!("(11) 9{}-{}", prefix, suffix),
    }
}

/// Fixed in-memory roster
#[derive(Debug, Clone)]
pub struct StaticRoster {
    members: Vec<(RosterMember, Contact)>,
}

impl StaticRoster {
    pub fn new(members: Vec<(RosterMember, Contact)>) -> Self {
        Self { members }
    }

    /// The five demo students the sample dataset references
    pub fn sample() -> Self {
        let entries = [
            (101, "João Silva", "joao.silva@email.com", "(11) 98765-4321"),
            (
                102,
                "Maria Oliveira",
                "maria.oliveira@email.com",
                "(11) 97654-3210",
            ),
            (
                103,
                "Pedro Santos",
                "pedro.santos@email.com",
                "(11) 96543-2109",
            ),
            (104, "Ana Costa", "ana.costa@email.com", "(11) 95432-1098"),
            (
                105,
                "Ricardo Gomes",
                "ricardo.gomes@email.com",
                "(11) 94321-0987",
            ),
        ];
        Self {
            members: entries
                .into_iter()
                .map(|(id, name, email, phone)| {
                    (
                        RosterMember {
                            id,
                            name: name.to_string(),
                        },
                        Contact {
                            email: email.to_string(),
                            phone: phone.to_string(),
                        },
                    )
                })
                .collect(),
        }
    }
}

impl StudentDirectory for StaticRoster {
    fn members(&self) -> Vec<RosterMember> {
        self.members.iter().map(|(m, _)| m.clone()).collect()
    }

    fn contact(&self, id: u32) -> Option<Contact> {
        self.members
            .iter()
            .find(|(m, _)| m.id == id)
            .map(|(_, c)| c.clone())
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_roster() {
        let roster = StaticRoster::sample();
        assert_eq!(roster.members().len(), 5);
        let contact = roster.contact(104).unwrap();
        assert_eq!(contact.email, "ana.costa@email.com");
        assert!(roster.contact(999).is_none());
    }

    #[test]
    fn test_placeholder_contact_is_deterministic() {
        let a = placeholder_contact(104, "Ana Costa");
        let b = placeholder_contact(104, "Ana Costa");
        assert_eq!(a, b);
        assert_eq!(a.email, "ana.costa@email.com");
        assert!(a.phone.starts_with("(11) 9"));
    }
}
