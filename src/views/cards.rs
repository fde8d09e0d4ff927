use iced::{
    Element, Length,
    widget::{button, column, container, row, space, text},
};

use crate::{
    app::message::Message,
    core::profile::Profile,
    styles::{self, font_size, spacing},
};

const CARDS_PER_ROW: usize = 3;

pub fn view(profiles: &[Profile]) -> Element<'_, Message> {
    let rows = profiles.chunks(CARDS_PER_ROW).map(|chunk| {
        let mut cells: Vec<Element<'_, Message>> = chunk.iter().map(profile_card).collect();
        // keep the last row's cards the same width as the others
        cells.resize_with(CARDS_PER_ROW, || space().width(Length::Fill).into());
        row(cells).spacing(spacing::MD).into()
    });

    column(rows).spacing(spacing::MD).width(Length::Fill).into()
}

fn profile_card(profile: &Profile) -> Element<'_, Message> {
    let details = column![
        text(&profile.name).size(font_size::HEADING),
        text(format!("Favourite Color: {}", profile.favourite_color)).size(font_size::BODY),
        text(format!("Favourite Food: {}", profile.favourite_food)).size(font_size::BODY),
    ]
    .spacing(spacing::XS);

    let actions = row![
        button(text(format!("Like ({})", profile.likes)).size(font_size::SMALL))
            .padding([spacing::XS, spacing::MD])
            .style(styles::like_button)
            .on_press(Message::Like(profile.id)),
        space().width(Length::Fill),
        button(text("Edit").size(font_size::SMALL))
            .padding([spacing::XS, spacing::MD])
            .style(styles::edit_button)
            .on_press(Message::Edit(profile.id)),
        button(text("Delete").size(font_size::SMALL))
            .padding([spacing::XS, spacing::MD])
            .style(styles::delete_button)
            .on_press(Message::Delete(profile.id)),
    ]
    .spacing(spacing::SM);

    container(column![details, actions].spacing(spacing::LG))
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::profile_card)
        .into()
}
