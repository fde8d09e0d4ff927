use iced::{
    Alignment, Element, Length,
    widget::{button, column, container, row, space, text, text_input},
};

use crate::{
    app::message::{FormMessage, Message},
    core::{
        profile::{Profile, ProfileDraft, ProfileId},
        validation::{self, Field, FieldErrors},
    },
    styles::{self, font_size, spacing},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit(ProfileId),
}

/// What a valid submit asks the container to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Add(ProfileDraft),
    Edit(ProfileId, ProfileDraft),
}

#[derive(Debug, Clone)]
pub struct ProfileFormState {
    pub mode: FormMode,
    pub draft: ProfileDraft,
    pub errors: FieldErrors,
}

impl ProfileFormState {
    pub fn add() -> Self {
        Self {
            mode: FormMode::Add,
            draft: ProfileDraft::default(),
            errors: FieldErrors::default(),
        }
    }

    pub fn edit(profile: &Profile) -> Self {
        Self {
            mode: FormMode::Edit(profile.id),
            draft: profile.to_draft(),
            errors: FieldErrors::default(),
        }
    }

    /// Applies a field edit. Returns a submission once the draft validates;
    /// on failure the messages are kept for display.
    pub fn update(&mut self, msg: FormMessage) -> Option<Submission> {
        match msg {
            FormMessage::NameChanged(value) => self.draft.name = value,
            FormMessage::FavouriteColorChanged(value) => self.draft.favourite_color = value,
            FormMessage::FavouriteFoodChanged(value) => self.draft.favourite_food = value,
            FormMessage::Submit => return self.submit(),
            FormMessage::Cancel => {}
        }
        None
    }

    fn submit(&mut self) -> Option<Submission> {
        match validation::validate(&self.draft) {
            Ok(()) => {
                self.errors = FieldErrors::default();
                let draft = self.draft.clone();
                Some(match self.mode {
                    FormMode::Add => Submission::Add(draft),
                    FormMode::Edit(id) => Submission::Edit(id, draft),
                })
            }
            Err(errors) => {
                log::debug!("Profile form rejected: {errors:?}");
                self.errors = errors;
                None
            }
        }
    }
}

pub fn view(state: &ProfileFormState) -> Element<'_, Message> {
    let (title, submit_label) = match state.mode {
        FormMode::Add => ("Add Profile", "Add"),
        FormMode::Edit(_) => ("Edit Profile", "Update"),
    };

    let header = row![
        text(title).size(font_size::TITLE),
        space().width(Length::Fill),
        button(text("\u{d7}").size(font_size::BODY))
            .style(button::text)
            .on_press(Message::Form(FormMessage::Cancel)),
    ]
    .align_y(Alignment::Center);

    let fields = Field::ALL.map(|field| {
        let (value, on_input): (&str, fn(String) -> FormMessage) = match field {
            Field::Name => (state.draft.name.as_str(), FormMessage::NameChanged),
            Field::FavouriteColor => (
                state.draft.favourite_color.as_str(),
                FormMessage::FavouriteColorChanged,
            ),
            Field::FavouriteFood => (
                state.draft.favourite_food.as_str(),
                FormMessage::FavouriteFoodChanged,
            ),
        };
        form_field(field, value, state.errors.get(field), on_input)
    });

    let footer = row![
        space().width(Length::Fill),
        button(text("Cancel").size(font_size::SMALL))
            .padding([spacing::SM, spacing::LG])
            .style(button::secondary)
            .on_press(Message::Form(FormMessage::Cancel)),
        button(text(submit_label).size(font_size::SMALL))
            .padding([spacing::SM, spacing::LG])
            .style(button::primary)
            .on_press(Message::Form(FormMessage::Submit)),
    ]
    .spacing(spacing::SM);

    container(
        column![header, column(fields).spacing(spacing::MD), footer]
            .spacing(spacing::LG)
            .padding(spacing::XXL),
    )
    .style(styles::modal_card)
    .width(420)
    .into()
}

fn form_field<'a>(
    field: Field,
    value: &'a str,
    error: Option<&'static str>,
    on_input: fn(String) -> FormMessage,
) -> Element<'a, Message> {
    let mut input = text_input("", value)
        .on_input(move |s| Message::Form(on_input(s)))
        .on_submit(Message::Form(FormMessage::Submit))
        .padding(spacing::SM)
        .size(font_size::BODY);
    if error.is_some() {
        input = input.style(styles::invalid_input);
    }

    let mut content = column![text(field.to_string()).size(font_size::SMALL), input]
        .spacing(spacing::XXS);
    if let Some(message) = error {
        content = content.push(
            text(message)
                .size(font_size::CAPTION)
                .style(text::danger),
        );
    }
    content.into()
}
