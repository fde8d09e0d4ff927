use iced::{
    Border, Color, Shadow, Theme, Vector,
    widget::{button, container, text_input},
};

use crate::theme::is_dark;

pub mod font_size {
    pub const DISPLAY: f32 = 28.0;
    pub const TITLE: f32 = 20.0;
    pub const HEADING: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const SMALL: f32 = 13.0;
    pub const CAPTION: f32 = 11.0;
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 6.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 12.0;
    pub const LG: f32 = 16.0;
    pub const XL: f32 = 20.0;
    pub const XXL: f32 = 24.0;
}

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 6.0;
    pub const LG: f32 = 8.0;
}

/// Bootstrap 5 palette, matching the web version of the app.
pub mod bootstrap {
    use iced::Color;

    pub const INFO: Color = Color::from_rgb8(0x0d, 0xca, 0xf0);
    pub const WARNING: Color = Color::from_rgb8(0xff, 0xc1, 0x07);
    pub const DANGER: Color = Color::from_rgb8(0xdc, 0x35, 0x45);
    pub const SECONDARY: Color = Color::from_rgb8(0x6c, 0x75, 0x7d);
    pub const LIGHT: Color = Color::from_rgb8(0xf8, 0xf9, 0xfa);
    pub const DARK: Color = Color::from_rgb8(0x21, 0x25, 0x29);
}

// --- Navbar ---

pub fn navbar_container(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let background = if is_dark(theme) {
        palette.background.weak.color
    } else {
        palette.primary.base.color
    };
    container::Style {
        background: Some(background.into()),
        text_color: Some(Color::WHITE),
        border: Border {
            width: 1.0,
            color: palette.background.strong.color,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Segment of the Cards/Table switch. The selected one is filled.
pub fn view_toggle_button(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let filled = active || matches!(status, button::Status::Pressed);
        let hovered = matches!(status, button::Status::Hovered);
        button::Style {
            background: if filled {
                Some(Color::WHITE.into())
            } else if hovered {
                Some(Color { a: 0.15, ..Color::WHITE }.into())
            } else {
                None
            },
            text_color: if filled {
                Color::from_rgb(0.1, 0.1, 0.1)
            } else {
                Color::WHITE
            },
            border: Border {
                radius: radius::MD.into(),
                width: 1.0,
                color: Color::WHITE,
            },
            ..Default::default()
        }
    }
}

// --- Cards ---

/// Bootstrap `bg-light` / `bg-secondary` card with a small shadow.
pub fn profile_card(theme: &Theme) -> container::Style {
    let (background, text_color) = if is_dark(theme) {
        (bootstrap::SECONDARY, Color::WHITE)
    } else {
        (bootstrap::LIGHT, bootstrap::DARK)
    };
    container::Style {
        background: Some(background.into()),
        text_color: Some(text_color),
        border: Border {
            radius: radius::LG.into(),
            width: 1.0,
            color: Color {
                a: 0.175,
                ..Color::BLACK
            },
        },
        shadow: Shadow {
            color: Color {
                a: 0.075,
                ..Color::BLACK
            },
            offset: Vector::new(0.0, 2.0),
            blur_radius: 4.0,
        },
        ..Default::default()
    }
}

// --- Table ---

pub fn table_header(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.strong.color.into()),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn table_row(index: usize) -> impl Fn(&Theme) -> container::Style {
    move |theme| {
        let palette = theme.extended_palette();
        let background = if index % 2 == 0 {
            palette.background.weak.color
        } else {
            palette.background.base.color
        };
        container::Style {
            background: Some(background.into()),
            border: Border {
                width: 1.0,
                color: palette.background.strong.color,
                radius: radius::NONE.into(),
            },
            ..Default::default()
        }
    }
}

// --- Form ---

pub fn invalid_input(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let palette = theme.extended_palette();
    let base = text_input::default(theme, status);
    text_input::Style {
        border: Border {
            width: 1.0,
            color: palette.danger.base.color,
            ..base.border
        },
        ..base
    }
}

// --- Modal ---

pub fn modal_backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(
            Color {
                a: 0.5,
                ..Color::BLACK
            }
            .into(),
        ),
        ..Default::default()
    }
}

pub fn modal_card(theme: &Theme) -> container::Style {
    let (background, text_color) = if is_dark(theme) {
        (bootstrap::DARK, bootstrap::LIGHT)
    } else {
        (bootstrap::LIGHT, bootstrap::DARK)
    };
    container::Style {
        background: Some(background.into()),
        text_color: Some(text_color),
        border: Border {
            radius: radius::LG.into(),
            width: 1.0,
            color: Color {
                a: 0.175,
                ..Color::BLACK
            },
        },
        shadow: Shadow {
            color: Color {
                a: 0.15,
                ..Color::BLACK
            },
            offset: Vector::new(0.0, 8.0),
            blur_radius: 16.0,
        },
        ..Default::default()
    }
}

// --- Error Banner ---

/// Bootstrap `alert-danger`.
pub fn error_banner(theme: &Theme) -> container::Style {
    let (background, border, text_color) = if is_dark(theme) {
        (
            Color::from_rgb8(0x2c, 0x0b, 0x0e),
            Color::from_rgb8(0x84, 0x20, 0x29),
            Color::from_rgb8(0xea, 0x86, 0x8f),
        )
    } else {
        (
            Color::from_rgb8(0xf8, 0xd7, 0xda),
            Color::from_rgb8(0xf5, 0xc2, 0xc7),
            Color::from_rgb8(0x84, 0x20, 0x29),
        )
    };
    container::Style {
        background: Some(background.into()),
        text_color: Some(text_color),
        border: Border {
            width: 1.0,
            color: border,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

// --- Card and table actions ---

/// Bootstrap `btn-outline-info`, used for Like.
pub fn like_button(_theme: &Theme, status: button::Status) -> button::Style {
    let filled = matches!(status, button::Status::Hovered | button::Status::Pressed);
    button::Style {
        background: filled.then(|| bootstrap::INFO.into()),
        text_color: if filled { bootstrap::DARK } else { bootstrap::INFO },
        border: Border {
            radius: radius::MD.into(),
            width: 1.0,
            color: bootstrap::INFO,
        },
        ..Default::default()
    }
}

/// Bootstrap `btn-warning`, used for Edit.
pub fn edit_button(_theme: &Theme, status: button::Status) -> button::Style {
    solid_button(bootstrap::WARNING, bootstrap::DARK, status)
}

/// Bootstrap `btn-danger`, used for Delete.
pub fn delete_button(_theme: &Theme, status: button::Status) -> button::Style {
    solid_button(bootstrap::DANGER, Color::WHITE, status)
}

fn solid_button(fill: Color, text_color: Color, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => darken(fill, 0.1),
        button::Status::Pressed => darken(fill, 0.2),
        button::Status::Disabled => Color { a: 0.65, ..fill },
        button::Status::Active => fill,
    };
    button::Style {
        background: Some(background.into()),
        text_color,
        border: Border {
            radius: radius::MD.into(),
            width: 1.0,
            color: background,
        },
        ..Default::default()
    }
}

fn darken(color: Color, amount: f32) -> Color {
    let scale = 1.0 - amount;
    Color {
        r: color.r * scale,
        g: color.g * scale,
        b: color.b * scale,
        ..color
    }
}
