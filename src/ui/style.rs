//! Custom styles for the extensions manager widgets.

use super::theme::Palette;
use iced::widget::{button, container, scrollable, toggler};
use iced::{Background, Border, Color};

/// Style for the window background.
pub fn main_container(palette: &Palette) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette.background)),
        text_color: Some(palette.text),
        ..Default::default()
    }
}

/// Style for the header bar holding the logo and theme toggle.
pub fn header_bar(palette: &Palette) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette.surface)),
        border: Border {
            color: palette.border,
            width: if palette.mode.is_dark() { 0.0 } else { 1.0 },
            radius: 20.0.into(),
        },
        ..Default::default()
    }
}

/// Style for an extension card.
pub fn card(palette: &Palette) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette.surface)),
        border: Border {
            color: palette.border,
            width: 1.0,
            radius: 20.0.into(),
        },
        ..Default::default()
    }
}

/// Square behind a logo, also used for the monogram fallback.
pub fn logo_badge(palette: &Palette) -> container::Style {
    container::Style {
        background: Some(Background::Color(Palette::with_alpha(palette.accent, 0.15))),
        text_color: Some(palette.accent),
        border: Border {
            radius: 10.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Style for one filter button; the selected one is filled with the accent.
pub fn filter_button(palette: &Palette, selected: bool, status: button::Status) -> button::Style {
    let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);

    if selected {
        button::Style {
            background: Some(Background::Color(if hovered {
                Palette::with_alpha(palette.accent, 0.85)
            } else {
                palette.accent
            })),
            text_color: palette.accent_text,
            border: Border {
                radius: 20.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    } else {
        button::Style {
            background: Some(Background::Color(if hovered {
                Palette::with_alpha(palette.text, 0.1)
            } else {
                palette.surface
            })),
            text_color: palette.text,
            border: Border {
                color: palette.border,
                width: 1.0,
                radius: 20.0.into(),
            },
            ..Default::default()
        }
    }
}

/// Style for the "Remove" button on a card.
pub fn remove_button(palette: &Palette, status: button::Status) -> button::Style {
    let (background, text_color, border_color) = match status {
        button::Status::Hovered | button::Status::Pressed => {
            (palette.accent, palette.accent_text, palette.accent)
        }
        _ => (Color::TRANSPARENT, palette.text, palette.border),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: 20.0.into(),
        },
        ..Default::default()
    }
}

/// Style for the round theme toggle in the header.
pub fn theme_toggle(palette: &Palette, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => 0.2,
        _ => 0.1,
    };

    button::Style {
        background: Some(Background::Color(Palette::with_alpha(palette.text, alpha))),
        text_color: palette.text,
        border: Border {
            radius: 12.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Style for the active switch on a card.
pub fn active_switch(palette: &Palette, is_active: bool) -> toggler::Style {
    toggler::Style {
        background: if is_active {
            palette.accent
        } else {
            palette.toggle_off
        },
        background_border_width: 0.0,
        background_border_color: Color::TRANSPARENT,
        foreground: Color::WHITE,
        foreground_border_width: 0.0,
        foreground_border_color: Color::TRANSPARENT,
    }
}

/// Style for the scrollable card grid.
pub fn cards_scrollable(palette: &Palette) -> scrollable::Style {
    scrollable::Style {
        container: container::Style::default(),
        vertical_rail: scroll_rail(palette),
        horizontal_rail: scroll_rail(palette),
        gap: None,
    }
}

fn scroll_rail(palette: &Palette) -> scrollable::Rail {
    scrollable::Rail {
        background: None,
        border: Border::default(),
        scroller: scrollable::Scroller {
            color: Palette::with_alpha(palette.subtext, 0.3),
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
        },
    }
}
