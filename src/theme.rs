use iced::Theme;

pub fn resolve_theme(dark_mode: bool) -> Theme {
    if dark_mode { Theme::Dark } else { Theme::Light }
}

pub fn is_dark(theme: &Theme) -> bool {
    theme.extended_palette().background.base.color.r < 0.5
}
