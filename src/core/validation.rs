use std::sync::LazyLock;

use regex::Regex;

use super::profile::ProfileDraft;

static LETTERS_AND_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s]+$").expect("static pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    FavouriteColor,
    FavouriteFood,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::FavouriteColor, Field::FavouriteFood];

    fn value(self, draft: &ProfileDraft) -> &str {
        match self {
            Field::Name => &draft.name,
            Field::FavouriteColor => &draft.favourite_color,
            Field::FavouriteFood => &draft.favourite_food,
        }
    }

    fn required_message(self) -> &'static str {
        match self {
            Field::Name => "Name is required!",
            Field::FavouriteColor => "Favorite color is required!",
            Field::FavouriteFood => "Favorite food is required!",
        }
    }

    fn pattern_message(self) -> &'static str {
        match self {
            Field::Name => "Name can only contain letters and spaces!",
            Field::FavouriteColor => "Color can only contain letters!",
            Field::FavouriteFood => "Food can only contain letters!",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Name => write!(f, "Name"),
            Field::FavouriteColor => write!(f, "Favorite Color"),
            Field::FavouriteFood => write!(f, "Favorite Food"),
        }
    }
}

/// Per-field messages from the last failed submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub favourite_color: Option<&'static str>,
    pub favourite_food: Option<&'static str>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Name => self.name,
            Field::FavouriteColor => self.favourite_color,
            Field::FavouriteFood => self.favourite_food,
        }
    }

    fn set(&mut self, field: Field, message: &'static str) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::FavouriteColor => &mut self.favourite_color,
            Field::FavouriteFood => &mut self.favourite_food,
        };
        *slot = Some(message);
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_none())
    }
}

/// Checks every field, reporting all failures at once.
pub fn validate(draft: &ProfileDraft) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    for field in Field::ALL {
        let value = field.value(draft);
        if value.trim().is_empty() {
            errors.set(field, field.required_message());
        } else if !LETTERS_AND_SPACES.is_match(value) {
            errors.set(field, field.pattern_message());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_letters_and_spaces() {
        let draft = ProfileDraft::new("Mary Jane", "Sky Blue", "French Fries");
        assert_eq!(validate(&draft), Ok(()));
    }

    #[test]
    fn empty_and_whitespace_are_required() {
        let errors = validate(&ProfileDraft::new("", "   ", "\t")).unwrap_err();

        assert_eq!(errors.name, Some("Name is required!"));
        assert_eq!(errors.favourite_color, Some("Favorite color is required!"));
        assert_eq!(errors.favourite_food, Some("Favorite food is required!"));
    }

    #[test]
    fn digits_and_symbols_are_rejected_per_field() {
        let errors = validate(&ProfileDraft::new("R2D2", "Red", "Pizza!")).unwrap_err();

        assert_eq!(
            errors.name,
            Some("Name can only contain letters and spaces!")
        );
        assert_eq!(errors.favourite_color, None);
        assert_eq!(errors.favourite_food, Some("Food can only contain letters!"));
    }

    #[test]
    fn color_pattern_message() {
        let errors = validate(&ProfileDraft::new("Ana", "Red 2", "Rice")).unwrap_err();
        assert_eq!(errors.get(Field::FavouriteColor), Some("Color can only contain letters!"));
        assert_eq!(errors.get(Field::Name), None);
    }

    #[test]
    fn non_ascii_letters_fail_the_pattern() {
        let errors = validate(&ProfileDraft::new("José", "Red", "Rice")).unwrap_err();
        assert!(errors.name.is_some());
    }

    #[test]
    fn surrounding_whitespace_is_allowed() {
        assert!(validate(&ProfileDraft::new(" Ana ", "Red ", " Rice")).is_ok());
    }
}
