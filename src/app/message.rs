use crate::core::profile::ProfileId;

use super::ViewMode;

#[derive(Debug, Clone)]
pub enum Message {
    SetView(ViewMode),
    ToggleDarkMode,

    Like(ProfileId),
    Edit(ProfileId),
    Delete(ProfileId),
    OpenAddForm,

    Form(FormMessage),

    DismissError,
}

#[derive(Debug, Clone)]
pub enum FormMessage {
    NameChanged(String),
    FavouriteColorChanged(String),
    FavouriteFoodChanged(String),
    Submit,
    Cancel,
}
