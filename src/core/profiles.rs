use std::collections::HashSet;

use super::profile::{Profile, ProfileDraft, ProfileId};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Profile not found: {0}")]
    NotFound(ProfileId),
}

pub type Result<T> = std::result::Result<T, ProfileError>;

/// Ordered list of profiles. Order is display order and ids are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileList {
    profiles: Vec<Profile>,
}

impl ProfileList {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self { profiles }
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn get(&self, id: ProfileId) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    /// Equals `len() + 1` until something is deleted. Once the largest id
    /// reaches `ProfileId::MAX`, the lowest unused id is handed out instead.
    pub fn next_id(&self) -> ProfileId {
        let max = self.profiles.iter().map(|p| p.id).max().unwrap_or(0);
        max.checked_add(1).unwrap_or_else(|| self.lowest_free_id())
    }

    fn lowest_free_id(&self) -> ProfileId {
        let used: HashSet<ProfileId> = self.profiles.iter().map(|p| p.id).collect();
        // fewer profiles than ids, so a gap always exists
        (1..=ProfileId::MAX)
            .find(|id| !used.contains(id))
            .unwrap_or(ProfileId::MAX)
    }

    pub fn add(&mut self, draft: ProfileDraft) -> ProfileId {
        let id = self.next_id();
        self.profiles.push(Profile {
            id,
            name: draft.name,
            favourite_color: draft.favourite_color,
            favourite_food: draft.favourite_food,
            likes: 0,
        });
        id
    }

    pub fn edit(&mut self, id: ProfileId, draft: ProfileDraft) -> Result<()> {
        let profile = self.get_mut(id)?;
        profile.name = draft.name;
        profile.favourite_color = draft.favourite_color;
        profile.favourite_food = draft.favourite_food;
        Ok(())
    }

    pub fn like(&mut self, id: ProfileId) -> Result<u32> {
        let profile = self.get_mut(id)?;
        profile.likes = profile.likes.saturating_add(1);
        Ok(profile.likes)
    }

    pub fn delete(&mut self, id: ProfileId) -> Result<Profile> {
        let index = self
            .profiles
            .iter()
            .position(|p| p.id == id)
            .ok_or(ProfileError::NotFound(id))?;
        Ok(self.profiles.remove(index))
    }

    fn get_mut(&mut self, id: ProfileId) -> Result<&mut Profile> {
        self.profiles
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ProfileError::NotFound(id))
    }
}
