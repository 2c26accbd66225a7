// ABOUTME: Household model holding the account holder, family members and the active selection
// ABOUTME: The active profile feeds every safety evaluator; no selection means permissive checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafePlate

//! # Household
//!
//! Safety checks run against whichever profile is active. Switching to a family
//! member makes every check use that member's allergies instead of the account
//! holder's.

use safeplate_core::errors::{AppError, AppResult};
use safeplate_core::models::{FamilyMember, Profile, UserProfile};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Which profile safety checks currently run against
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ActiveProfile {
    /// Nobody selected
    None,
    /// The account holder
    #[default]
    User,
    /// A family member, by id
    Member(String),
}

/// The account holder plus the family members they manage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Household {
    /// Account holder
    pub user: UserProfile,
    /// Managed family members
    #[serde(default, alias = "familyMembers")]
    pub family: Vec<FamilyMember>,
    #[serde(skip)]
    active: ActiveProfile,
}

impl Household {
    /// Household with the account holder selected
    #[must_use]
    pub const fn new(user: UserProfile) -> Self {
        Self {
            user,
            family: Vec::new(),
            active: ActiveProfile::User,
        }
    }

    /// Add a family member
    #[must_use]
    pub fn with_member(mut self, member: FamilyMember) -> Self {
        self.family.push(member);
        self
    }

    /// Look up a family member by id
    #[must_use]
    pub fn member(&self, id: &str) -> Option<&FamilyMember> {
        self.family.iter().find(|member| member.id == id)
    }

    /// Current selection
    #[must_use]
    pub const fn active(&self) -> &ActiveProfile {
        &self.active
    }

    /// The profile safety checks should use, if any
    ///
    /// A member selection whose id no longer exists resolves to `None`.
    #[must_use]
    pub fn active_profile(&self) -> Option<Profile<'_>> {
        match &self.active {
            ActiveProfile::None => None,
            ActiveProfile::User => Some(Profile::User(&self.user)),
            ActiveProfile::Member(id) => self.member(id).map(Profile::FamilyMember),
        }
    }

    /// Run checks against the account holder
    pub fn select_user(&mut self) {
        info!(user = %self.user.name, "Switched active profile to account holder");
        self.active = ActiveProfile::User;
    }

    /// Run checks against a family member
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no member has this id; the selection is unchanged
    pub fn select_member(&mut self, id: &str) -> AppResult<()> {
        let member = self
            .member(id)
            .ok_or_else(|| AppError::not_found(format!("Family member {id}")))?;
        info!(member = %member.name, "Switched active profile to family member");
        self.active = ActiveProfile::Member(id.to_owned());
        Ok(())
    }

    /// Drop the selection; checks become permissive
    pub fn clear_selection(&mut self) {
        self.active = ActiveProfile::None;
    }

    /// Remove a family member, falling back to the account holder if they were active
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no member has this id
    pub fn remove_member(&mut self, id: &str) -> AppResult<FamilyMember> {
        let position = self
            .family
            .iter()
            .position(|member| member.id == id)
            .ok_or_else(|| AppError::not_found(format!("Family member {id}")))?;
        if self.active == ActiveProfile::Member(id.to_owned()) {
            self.active = ActiveProfile::User;
        }
        Ok(self.family.remove(position))
    }
}
