use iced::{
    Alignment, Element, Length,
    widget::{button, container, row, space, text},
};

use crate::{
    app::{APP_NAME, ViewMode, message::Message},
    styles::{self, font_size, spacing},
};

pub fn view<'a>(current: ViewMode, dark_mode: bool) -> Element<'a, Message> {
    let toggles = row(ViewMode::ALL.map(|mode| -> Element<'a, Message> {
        button(text(format!("View as {mode}")).size(font_size::SMALL))
            .padding([spacing::XS, spacing::MD])
            .style(styles::view_toggle_button(mode == current))
            .on_press(Message::SetView(mode))
            .into()
    }))
    .spacing(spacing::XXS);

    let theme_label = if dark_mode { "Light Mode" } else { "Dark Mode" };
    let theme_toggle = button(text(theme_label).size(font_size::SMALL))
        .padding([spacing::XS, spacing::MD])
        .style(button::secondary)
        .on_press(Message::ToggleDarkMode);

    container(
        row![
            text(APP_NAME).size(font_size::TITLE),
            space().width(Length::Fill),
            toggles,
            theme_toggle,
        ]
        .spacing(spacing::MD)
        .align_y(Alignment::Center),
    )
    .padding([spacing::MD, spacing::XL])
    .width(Length::Fill)
    .style(styles::navbar_container)
    .into()
}
