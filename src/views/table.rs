use iced::{
    Alignment, Element, Length,
    widget::{button, column, container, row, text},
};

use crate::{
    app::message::Message,
    core::profile::Profile,
    styles::{self, font_size, spacing},
};

const COLUMNS: [(&str, u16); 6] = [
    ("ID", 1),
    ("Name", 3),
    ("Favorite Color", 3),
    ("Favorite Food", 3),
    ("Likes", 1),
    ("Actions", 3),
];

pub fn view(profiles: &[Profile]) -> Element<'_, Message> {
    let header: Element<'_, Message> = container(row(COLUMNS.map(|(label, portion)| {
        cell(text(label).size(font_size::SMALL).into(), portion)
    })))
    .style(styles::table_header)
    .into();

    let rows = profiles
        .iter()
        .enumerate()
        .map(|(index, profile)| {
            container(profile_row(profile))
                .width(Length::Fill)
                .style(styles::table_row(index))
                .into()
        });

    column(std::iter::once(header).chain(rows))
        .width(Length::Fill)
        .into()
}

fn profile_row(profile: &Profile) -> Element<'_, Message> {
    let actions = row![
        button(text("Edit").size(font_size::CAPTION))
            .padding([spacing::XXS, spacing::SM])
            .style(styles::edit_button)
            .on_press(Message::Edit(profile.id)),
        button(text("Delete").size(font_size::CAPTION))
            .padding([spacing::XXS, spacing::SM])
            .style(styles::delete_button)
            .on_press(Message::Delete(profile.id)),
    ]
    .spacing(spacing::XXS);

    let values = [
        text(profile.id.to_string()),
        text(&profile.name),
        text(&profile.favourite_color),
        text(&profile.favourite_food),
        text(profile.likes.to_string()),
    ];

    let cells = values
        .into_iter()
        .zip(COLUMNS)
        .map(|(value, (_, portion))| cell(value.size(font_size::BODY).into(), portion))
        .chain(std::iter::once(cell(actions.into(), COLUMNS[5].1)));

    row(cells).align_y(Alignment::Center).into()
}

fn cell(content: Element<'_, Message>, portion: u16) -> Element<'_, Message> {
    container(content)
        .padding([spacing::SM, spacing::MD])
        .width(Length::FillPortion(portion))
        .into()
}
