// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action button.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(palette::GRAY_200)),
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Overlay controls (lightbox dismiss, previous, next).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Invisible button wrapping a grid thumbnail.
pub fn thumbnail(_theme: &Theme, status: button::Status) -> button::Style {
    let border = match status {
        button::Status::Hovered | button::Status::Pressed => Border {
            color: palette::PRIMARY_400,
            width: 2.0,
            radius: radius::MD.into(),
        },
        _ => Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
    };

    button::Style {
        background: None,
        text_color: palette::GRAY_900,
        border,
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Navbar entry; highlighted when its screen is active.
pub fn navbar(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let extended = theme.extended_palette();

        if active {
            return button::Style {
                background: Some(Background::Color(palette::PRIMARY_500)),
                text_color: WHITE,
                border: Border {
                    radius: radius::SM.into(),
                    ..Default::default()
                },
                shadow: shadow::NONE,
                snap: true,
            };
        }

        match status {
            button::Status::Hovered => button::Style {
                background: Some(extended.background.strong.color.into()),
                text_color: extended.background.base.text,
                border: Border {
                    radius: radius::SM.into(),
                    ..Default::default()
                },
                shadow: shadow::NONE,
                snap: true,
            },
            _ => button::Style {
                background: None,
                text_color: extended.background.base.text,
                border: Border::default(),
                shadow: shadow::NONE,
                snap: true,
            },
        }
    }
}
