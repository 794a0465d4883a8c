//! Team rosters: two player slots, each a registered user or a guest placeholder.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

/// Players per Spades team.
pub const TEAM_SIZE: usize = 2;

/// Opaque team key supplied by the roster collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(String);

impl TeamId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TeamId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Member {
    Registered {
        user_id: String,
        display_name: String,
    },
    Guest {
        guest_id: String,
        display_name: String,
    },
}

impl Member {
    pub fn registered(user_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Member::Registered {
            user_id: user_id.into(),
            display_name: display_name.into(),
        }
    }

    pub fn guest(guest_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Member::Guest {
            guest_id: guest_id.into(),
            display_name: display_name.into(),
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Member::Registered { display_name, .. } | Member::Guest { display_name, .. } => {
                display_name
            }
        }
    }

    /// Registered user id or guest id.
    pub fn key(&self) -> &str {
        match self {
            Member::Registered { user_id, .. } => user_id,
            Member::Guest { guest_id, .. } => guest_id,
        }
    }

    pub fn is_guest(&self) -> bool {
        matches!(self, Member::Guest { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSlot {
    /// 1-based slot number.
    pub slot: u8,
    pub member: Member,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTeam")]
pub struct Team {
    id: TeamId,
    label: String,
    members: [MemberSlot; TEAM_SIZE],
}

#[derive(Deserialize)]
struct RawTeam {
    id: TeamId,
    #[serde(default)]
    label: String,
    members: [MemberSlot; TEAM_SIZE],
}

impl TryFrom<RawTeam> for Team {
    type Error = DomainError;

    fn try_from(raw: RawTeam) -> Result<Self, Self::Error> {
        Team::from_slots(raw.id, &raw.label, raw.members)
    }
}

impl Team {
    /// Build a team with `players` in slots 1 and 2.
    ///
    /// A blank label falls back to the players' names ("A & B").
    pub fn new(
        id: TeamId,
        label: &str,
        players: [Member; TEAM_SIZE],
    ) -> Result<Self, DomainError> {
        let [first, second] = players;
        Self::from_slots(
            id,
            label,
            [
                MemberSlot {
                    slot: 1,
                    member: first,
                },
                MemberSlot {
                    slot: 2,
                    member: second,
                },
            ],
        )
    }

    /// Build a team from explicit slots; slots must be exactly 1 and 2.
    pub fn from_slots(
        id: TeamId,
        label: &str,
        slots: [MemberSlot; TEAM_SIZE],
    ) -> Result<Self, DomainError> {
        if id.as_str().trim().is_empty() {
            return Err(DomainError::validation(
                ValidationKind::InvalidTeam,
                "team id must not be empty",
            ));
        }

        let mut members = slots;
        members.sort_by_key(|s| s.slot);
        if members[0].slot != 1 || members[1].slot != 2 {
            return Err(DomainError::validation(
                ValidationKind::InvalidTeam,
                format!(
                    "team {id} must fill slots 1 and 2, got {} and {}",
                    members[0].slot, members[1].slot
                ),
            ));
        }
        for slot in &members {
            if slot.member.key().trim().is_empty() {
                return Err(DomainError::validation(
                    ValidationKind::InvalidTeam,
                    format!("team {id} slot {} has no member id", slot.slot),
                ));
            }
        }
        if members[0].member.key() == members[1].member.key() {
            return Err(DomainError::validation(
                ValidationKind::InvalidTeam,
                format!(
                    "team {id} lists {} in both slots",
                    members[0].member.key()
                ),
            ));
        }

        let mut team = Self {
            id,
            label: String::new(),
            members,
        };
        let trimmed = label.trim();
        team.label = if trimmed.is_empty() {
            team.display_name()
        } else {
            trimmed.to_string()
        };
        Ok(team)
    }

    pub fn id(&self) -> &TeamId {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn members(&self) -> &[MemberSlot; TEAM_SIZE] {
        &self.members
    }

    pub fn member(&self, slot: u8) -> Option<&Member> {
        self.members
            .iter()
            .find(|s| s.slot == slot)
            .map(|s| &s.member)
    }

    /// "A & B" from the members' display names.
    pub fn display_name(&self) -> String {
        format!(
            "{} & {}",
            self.members[0].member.display_name().trim(),
            self.members[1].member.display_name().trim()
        )
    }

    /// Rename the team. A blank label falls back to `Team {position}`
    /// where `position` is the 1-based seat of the team in its match.
    pub fn rename(&mut self, label: &str, position: usize) {
        let trimmed = label.trim();
        self.label = if trimmed.is_empty() {
            format!("Team {position}")
        } else {
            trimmed.to_string()
        };
    }

    /// Replace a guest placeholder with a registered user, keeping its slot.
    ///
    /// Returns the slot number that was converted.
    pub fn convert_guest(
        &mut self,
        guest_id: &str,
        user_id: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Result<u8, DomainError> {
        let user_id = user_id.into();
        if self.has_member(&user_id) {
            return Err(DomainError::validation(
                ValidationKind::InvalidTeam,
                format!("{user_id} is already on team {}", self.id),
            ));
        }
        let slot = self
            .members
            .iter_mut()
            .find(|s| matches!(&s.member, Member::Guest { guest_id: g, .. } if g == guest_id))
            .ok_or_else(|| {
                DomainError::not_found(
                    NotFoundKind::Guest,
                    format!("guest {guest_id} is not on team {}", self.id),
                )
            })?;
        slot.member = Member::registered(user_id, display_name);
        Ok(slot.slot)
    }

    pub fn has_member(&self, key: &str) -> bool {
        self.members.iter().any(|s| s.member.key() == key)
    }
}
