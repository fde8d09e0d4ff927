pub mod message;

use iced::{
    Alignment, Element, Length, Task,
    widget::{
        button, center, column, container, mouse_area, opaque, row, scrollable, space, stack,
        text,
    },
};

use crate::{
    config::StudentConnectConfig,
    core::{
        profile::seed_profiles,
        profiles::ProfileList,
    },
    storage::{self, FileStore, KeyValueStore, MemoryStore},
    styles::{self, font_size, spacing},
    theme::resolve_theme,
    views::{
        self,
        profile_form::{ProfileFormState, Submission},
    },
};

pub use message::{FormMessage, Message};

pub const APP_NAME: &str = "Student Connect";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Cards,
    Table,
}

impl ViewMode {
    pub const ALL: [ViewMode; 2] = [ViewMode::Cards, ViewMode::Table];
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewMode::Cards => write!(f, "Cards"),
            ViewMode::Table => write!(f, "Table"),
        }
    }
}

pub struct App {
    profiles: ProfileList,
    view_mode: ViewMode,
    dark_mode: bool,
    form: Option<ProfileFormState>,
    store: Box<dyn KeyValueStore>,
    error: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        let config = StudentConnectConfig::load();
        let store = open_store(&config);
        Self::with_store(&config, store)
    }

    pub fn with_store(config: &StudentConnectConfig, store: Box<dyn KeyValueStore>) -> Self {
        let profiles = match storage::load_profiles(store.as_ref()) {
            Some(profiles) => profiles,
            None if config.seed_profiles() => {
                log::info!("No stored profiles, starting from the seed list");
                seed_profiles()
            }
            None => Vec::new(),
        };
        log::info!("Loaded {} profile(s)", profiles.len());

        Self {
            profiles: ProfileList::new(profiles),
            view_mode: config.startup_view(),
            dark_mode: storage::load_dark_mode(store.as_ref()),
            form: None,
            store,
            error: None,
        }
    }

    pub fn title(&self) -> String {
        format!("{APP_NAME} - {}", self.view_mode)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SetView(mode) => {
                self.view_mode = mode;
            }
            Message::ToggleDarkMode => {
                self.dark_mode = !self.dark_mode;
                log::debug!("Dark mode {}", if self.dark_mode { "on" } else { "off" });
                if let Err(e) = storage::save_dark_mode(self.store.as_mut(), self.dark_mode) {
                    self.report_error(format!("Failed to save theme: {e}"));
                }
            }
            Message::Like(id) => match self.profiles.like(id) {
                Ok(likes) => {
                    log::debug!("Profile {id} now has {likes} like(s)");
                    self.persist_profiles();
                }
                Err(e) => log::warn!("Like ignored: {e}"),
            },
            Message::Edit(id) => match self.profiles.get(id) {
                Some(profile) => self.form = Some(ProfileFormState::edit(profile)),
                None => log::warn!("Edit ignored: profile {id} not found"),
            },
            Message::Delete(id) => match self.profiles.delete(id) {
                Ok(removed) => {
                    log::info!("Deleted profile {id} ({})", removed.name);
                    self.persist_profiles();
                }
                Err(e) => log::warn!("Delete ignored: {e}"),
            },
            Message::OpenAddForm => {
                self.form = Some(ProfileFormState::add());
            }
            Message::Form(FormMessage::Cancel) => {
                self.form = None;
            }
            Message::Form(msg) => {
                let submission = self.form.as_mut().and_then(|form| form.update(msg));
                if let Some(submission) = submission {
                    self.form = None;
                    self.apply_submission(submission);
                }
            }
            Message::DismissError => {
                self.error = None;
            }
        }
        Task::none()
    }

    fn apply_submission(&mut self, submission: Submission) {
        match submission {
            Submission::Add(draft) => {
                let id = self.profiles.add(draft);
                log::info!("Added profile {id}");
            }
            Submission::Edit(id, draft) => {
                if let Err(e) = self.profiles.edit(id, draft) {
                    self.report_error(format!("Failed to update profile: {e}"));
                    return;
                }
                log::info!("Updated profile {id}");
            }
        }
        self.persist_profiles();
    }

    fn persist_profiles(&mut self) {
        if let Err(e) = storage::save_profiles(self.store.as_mut(), self.profiles.profiles()) {
            self.report_error(format!("Failed to save profiles: {e}"));
        }
    }

    fn report_error(&mut self, error: String) {
        log::error!("{error}");
        self.error = Some(error);
    }

    pub fn view(&self) -> Element<'_, Message> {
        let navbar = views::navbar::view(self.view_mode, self.dark_mode);

        let header = row![
            column![
                text("My Classmates").size(font_size::DISPLAY),
                text(format!("{} profile(s)", self.profiles.len())).size(font_size::SMALL),
            ]
            .spacing(spacing::XXS),
            space().width(Length::Fill),
            button(text("Add Profile").size(font_size::BODY))
                .padding([spacing::SM, spacing::LG])
                .style(button::primary)
                .on_press(Message::OpenAddForm),
        ]
        .align_y(Alignment::Center);

        let mut content = column![header].spacing(spacing::LG).width(Length::Fill);

        if let Some(ref err) = self.error {
            content = content.push(error_banner(err));
        }

        let body: Element<'_, Message> = if self.profiles.is_empty() {
            container(text("No profiles yet").size(font_size::BODY))
                .padding(spacing::XXL)
                .center_x(Length::Fill)
                .into()
        } else {
            match self.view_mode {
                ViewMode::Cards => views::cards::view(self.profiles.profiles()),
                ViewMode::Table => views::table::view(self.profiles.profiles()),
            }
        };
        content = content.push(body);

        let page = column![
            navbar,
            scrollable(container(content).padding(spacing::XL)).height(Length::Fill),
        ]
        .width(Length::Fill)
        .height(Length::Fill);

        if let Some(ref form) = self.form {
            modal(
                page,
                views::profile_form::view(form),
                Message::Form(FormMessage::Cancel),
            )
        } else {
            page.into()
        }
    }

    pub fn theme(&self) -> Option<iced::Theme> {
        Some(resolve_theme(self.dark_mode))
    }
}

fn open_store(config: &StudentConnectConfig) -> Box<dyn KeyValueStore> {
    let path = match config.storage_path() {
        Some(path) => path,
        None => match FileStore::default_path() {
            Ok(path) => path,
            Err(e) => {
                log::warn!("{e}, profiles will not be saved");
                return Box::new(MemoryStore::default());
            }
        },
    };
    let store = FileStore::open(path);
    log::info!("Using store at {}", store.path().display());
    Box::new(store)
}

fn error_banner(err: &str) -> Element<'_, Message> {
    container(
        row![
            text(err).size(font_size::SMALL),
            space().width(Length::Fill),
            button(text("Dismiss").size(font_size::CAPTION))
                .padding([spacing::XXS, spacing::MD])
                .style(button::secondary)
                .on_press(Message::DismissError),
        ]
        .spacing(spacing::SM)
        .align_y(Alignment::Center),
    )
    .padding([spacing::SM, spacing::MD])
    .width(Length::Fill)
    .style(styles::error_banner)
    .into()
}

fn modal<'a>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message> {
    stack![
        base.into(),
        opaque(
            mouse_area(center(opaque(content)).style(styles::modal_backdrop)).on_press(on_blur)
        )
    ]
    .into()
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::core::profile::{Profile, ProfileId};
    use crate::storage::{DARK_MODE_KEY, PROFILES_KEY, StorageError};

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get_item(&self, _key: &str) -> Option<String> {
            None
        }

        fn set_item(&mut self, _key: &str, _value: String) -> storage::Result<()> {
            Err(StorageError::Io(std::io::Error::other("disk full")))
        }
    }

    fn app_at(path: &Path) -> App {
        App::with_store(
            &StudentConnectConfig::default(),
            Box::new(FileStore::open(path)),
        )
    }

    fn send(app: &mut App, message: Message) {
        let _ = app.update(message);
    }

    fn submit_add(app: &mut App, name: &str, color: &str, food: &str) {
        send(app, Message::OpenAddForm);
        send(app, Message::Form(FormMessage::NameChanged(name.into())));
        send(app, Message::Form(FormMessage::FavouriteColorChanged(color.into())));
        send(app, Message::Form(FormMessage::FavouriteFoodChanged(food.into())));
        send(app, Message::Form(FormMessage::Submit));
    }

    fn stored_profiles(path: &Path) -> Vec<Profile> {
        storage::load_profiles(&FileStore::open(path)).unwrap_or_default()
    }

    #[test]
    fn starts_from_seed_when_store_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_at(&dir.path().join("store.json"));

        assert_eq!(app.profiles.profiles(), seed_profiles().as_slice());
        assert!(!app.dark_mode);
        assert_eq!(app.view_mode, ViewMode::Cards);
    }

    #[test]
    fn starts_empty_when_seeding_disabled() {
        let config = StudentConnectConfig {
            seed_profiles: Some(false),
            startup_view: Some("table".into()),
            ..Default::default()
        };
        let app = App::with_store(&config, Box::new(MemoryStore::default()));

        assert!(app.profiles.is_empty());
        assert_eq!(app.view_mode, ViewMode::Table);
    }

    #[test]
    fn valid_add_is_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        let mut app = app_at(&path);

        submit_add(&mut app, "Asha", "Green", "Dosa");

        assert!(app.form.is_none());
        assert_eq!(app.profiles.len(), 4);
        let stored = stored_profiles(&path);
        assert_eq!(stored.len(), 4);
        assert_eq!(stored[3].id, 4);
        assert_eq!(stored[3].name, "Asha");
        assert_eq!(stored[3].likes, 0);
    }

    #[test]
    fn add_after_max_stored_id_gets_a_fresh_id() {
        let mut store = MemoryStore::default();
        store
            .set_item(
                PROFILES_KEY,
                r#"[{"id":4294967295,"name":"Asha","favouriteColor":"Green","favouriteFood":"Dosa","likes":0}]"#
                    .into(),
            )
            .unwrap();
        let mut app = App::with_store(&StudentConnectConfig::default(), Box::new(store));

        submit_add(&mut app, "Bela", "Blue", "Idli");
        submit_add(&mut app, "Chen", "Red", "Noodles");

        let ids: Vec<ProfileId> = app.profiles.profiles().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![ProfileId::MAX, 1, 2]);
        assert!(app.error.is_none());
    }

    #[test]
    fn invalid_add_keeps_form_open_and_list_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        let mut app = app_at(&path);

        submit_add(&mut app, "Asha 2", "Green", "");

        let form = app.form.as_ref().unwrap();
        assert_eq!(form.errors.name, Some("Name can only contain letters and spaces!"));
        assert_eq!(form.errors.favourite_food, Some("Favorite food is required!"));
        assert_eq!(app.profiles.len(), 3);
        assert!(!path.exists());
    }

    #[test]
    fn edit_replaces_fields_and_keeps_id() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        let mut app = app_at(&path);

        send(&mut app, Message::Like(3));
        send(&mut app, Message::Edit(3));
        send(&mut app, Message::Form(FormMessage::NameChanged("Srini".into())));
        send(&mut app, Message::Form(FormMessage::Submit));

        let stored = stored_profiles(&path);
        assert_eq!(stored[2].id, 3);
        assert_eq!(stored[2].name, "Srini");
        assert_eq!(stored[2].favourite_color, "Purple");
        assert_eq!(stored[2].likes, 1);
        assert_eq!(app.profiles.profiles(), stored.as_slice());
    }

    #[test]
    fn like_and_delete_are_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        let mut app = app_at(&path);

        send(&mut app, Message::Like(1));
        send(&mut app, Message::Like(1));
        send(&mut app, Message::Delete(2));

        let stored = stored_profiles(&path);
        let summary: Vec<(ProfileId, u32)> = stored.iter().map(|p| (p.id, p.likes)).collect();
        assert_eq!(summary, vec![(1, 2), (3, 0)]);
    }

    #[test]
    fn cancel_discards_the_form() {
        let mut app = App::with_store(
            &StudentConnectConfig::default(),
            Box::new(MemoryStore::default()),
        );

        send(&mut app, Message::Edit(1));
        send(&mut app, Message::Form(FormMessage::NameChanged("Changed".into())));
        send(&mut app, Message::Form(FormMessage::Cancel));

        assert!(app.form.is_none());
        assert_eq!(app.profiles.profiles(), seed_profiles().as_slice());
    }

    #[test]
    fn dark_mode_survives_restart_but_view_mode_does_not() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut app = app_at(&path);
        send(&mut app, Message::ToggleDarkMode);
        send(&mut app, Message::SetView(ViewMode::Table));
        assert_eq!(app.title(), "Student Connect - Table");

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get_item(DARK_MODE_KEY).as_deref(), Some("true"));
        assert_eq!(reopened.get_item(PROFILES_KEY), None);

        let app = app_at(&path);
        assert!(app.dark_mode);
        assert_eq!(app.view_mode, ViewMode::Cards);
        assert!(app.theme().is_some());
    }

    #[test]
    fn save_failures_surface_and_keep_state() {
        let mut app = App::with_store(&StudentConnectConfig::default(), Box::new(FailingStore));

        send(&mut app, Message::Like(2));

        assert_eq!(app.profiles.get(2).map(|p| p.likes), Some(1));
        assert!(app.error.as_deref().unwrap().contains("disk full"));

        send(&mut app, Message::DismissError);
        assert!(app.error.is_none());
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut app = App::with_store(
            &StudentConnectConfig::default(),
            Box::new(MemoryStore::default()),
        );

        send(&mut app, Message::Like(99));
        send(&mut app, Message::Delete(99));
        send(&mut app, Message::Edit(99));

        assert!(app.form.is_none());
        assert!(app.error.is_none());
        assert_eq!(app.profiles.profiles(), seed_profiles().as_slice());
    }
}
