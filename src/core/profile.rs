use serde::{Deserialize, Serialize};

pub type ProfileId = u32;

/// A single student, stored under the `profiles` key as a camelCase JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: ProfileId,
    pub name: String,
    pub favourite_color: String,
    pub favourite_food: String,
    #[serde(default)]
    pub likes: u32,
}

impl Profile {
    pub fn to_draft(&self) -> ProfileDraft {
        ProfileDraft::new(
            self.name.clone(),
            self.favourite_color.clone(),
            self.favourite_food.clone(),
        )
    }
}

/// The editable part of a profile, as typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub name: String,
    pub favourite_color: String,
    pub favourite_food: String,
}

impl ProfileDraft {
    pub fn new(
        name: impl Into<String>,
        favourite_color: impl Into<String>,
        favourite_food: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            favourite_color: favourite_color.into(),
            favourite_food: favourite_food.into(),
        }
    }
}

/// Shown on first launch, or whenever the stored list can't be read.
pub fn seed_profiles() -> Vec<Profile> {
    [
        ("Mehak", "Black", "French Fries"),
        ("Nikhil", "Red", "Burger"),
        ("Srinivas", "Purple", "Pizza"),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, color, food), id)| Profile {
        id,
        name: name.into(),
        favourite_color: color.into(),
        favourite_food: food.into(),
        likes: 0,
    })
    .collect()
}
