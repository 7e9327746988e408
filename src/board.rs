//! Board
//!
//! The groups and members shown on the admin page, plus the rules the
//! controller checks locally before talking to the server. Nothing in
//! here is applied before the server has confirmed it.

use thiserror::Error;

use crate::models::{Group, Member};

/// Why a drop was refused without contacting the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveRejection {
    /// Dropped back onto its own group
    #[error("member is already in this group")]
    SameGroup,
    #[error("该小组已达到最大人数限制（5人）")]
    TargetFull,
    #[error("unknown member {0}")]
    UnknownMember(u32),
    #[error("unknown group {0}")]
    UnknownGroup(u32),
}

impl MoveRejection {
    /// Only a full target is worth telling the user about
    pub fn is_silent(&self) -> bool {
        !matches!(self, MoveRejection::TargetFull)
    }
}

/// A move that passed the local checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovePlan {
    pub member_id: u32,
    pub source_group_id: u32,
    pub target_group_id: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    groups: Vec<Group>,
}

impl Board {
    pub fn new(groups: Vec<Group>) -> Self {
        Self { groups }
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn group(&self, group_id: u32) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == group_id)
    }

    pub fn ungrouped(&self) -> Option<&Group> {
        self.groups.iter().find(|g| g.is_ungrouped)
    }

    pub fn regular_groups(&self) -> impl Iterator<Item = &Group> {
        self.groups.iter().filter(|g| !g.is_ungrouped)
    }

    /// Group currently holding the member
    pub fn group_of(&self, member_id: u32) -> Option<u32> {
        self.groups
            .iter()
            .find(|g| g.members.iter().any(|m| m.id == member_id))
            .map(|g| g.id)
    }

    pub fn member(&self, member_id: u32) -> Option<&Member> {
        self.groups
            .iter()
            .flat_map(|g| g.members.iter())
            .find(|m| m.id == member_id)
    }

    /// Check a drop of `member_id` onto `target_group_id`
    pub fn plan_move(&self, member_id: u32, target_group_id: u32) -> Result<MovePlan, MoveRejection> {
        let source_group_id = self
            .group_of(member_id)
            .ok_or(MoveRejection::UnknownMember(member_id))?;
        if source_group_id == target_group_id {
            return Err(MoveRejection::SameGroup);
        }
        let target = self
            .group(target_group_id)
            .ok_or(MoveRejection::UnknownGroup(target_group_id))?;
        if target.is_full() {
            return Err(MoveRejection::TargetFull);
        }
        Ok(MovePlan { member_id, source_group_id, target_group_id })
    }

    /// Move a member to the end of the target group.
    /// Returns false if either side no longer exists.
    pub fn apply_move(&mut self, member_id: u32, target_group_id: u32) -> bool {
        if self.group(target_group_id).is_none() {
            return false;
        }
        let Some(member) = self.take_member(member_id) else {
            return false;
        };
        if let Some(target) = self.groups.iter_mut().find(|g| g.id == target_group_id) {
            target.members.push(member);
        }
        true
    }

    pub fn set_status(&mut self, member_id: u32, completed: bool) -> bool {
        match self
            .groups
            .iter_mut()
            .flat_map(|g| g.members.iter_mut())
            .find(|m| m.id == member_id)
        {
            Some(member) => {
                member.completed = completed;
                true
            }
            None => false,
        }
    }

    /// Remove a member, returning the group it was in
    pub fn remove_member(&mut self, member_id: u32) -> Option<u32> {
        let group_id = self.group_of(member_id)?;
        self.take_member(member_id).map(|_| group_id)
    }

    pub fn rename_group(&mut self, group_id: u32, name: &str) -> bool {
        match self.groups.iter_mut().find(|g| g.id == group_id) {
            Some(group) => {
                group.name = name.to_string();
                true
            }
            None => false,
        }
    }

    fn take_member(&mut self, member_id: u32) -> Option<Member> {
        for group in self.groups.iter_mut() {
            if let Some(pos) = group.members.iter().position(|m| m.id == member_id) {
                return Some(group.members.remove(pos));
            }
        }
        None
    }
}
