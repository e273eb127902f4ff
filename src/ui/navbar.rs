// SPDX-License-Identifier: MPL-2.0
//! Top navigation bar with one entry per screen.
//!
//! The active screen's entry is highlighted; pressing an entry emits an
//! event the application translates into a screen switch.

use crate::app::Screen;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Container, Row, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length,
};

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ScreenSelected(Screen),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    SwitchScreen(Screen),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, current: Screen) -> Event {
    match message {
        Message::ScreenSelected(target) => {
            if target == current {
                Event::None
            } else {
                Event::SwitchScreen(target)
            }
        }
    }
}

/// Render the navigation bar.
pub fn view(current: Screen) -> Element<'static, Message> {
    let brand = Text::new("Calico Aquatics").size(typography::TITLE_SM);

    let mut row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(Container::new(brand).padding([0.0, spacing::SM]));

    for screen in Screen::ALL {
        row = row.push(nav_entry(screen, screen == current));
    }

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Left)
        .style(styles::container::navbar)
        .into()
}

/// Build a single navigation entry.
fn nav_entry(screen: Screen, active: bool) -> Element<'static, Message> {
    button(Text::new(screen.label()).size(typography::BODY))
        .on_press(Message::ScreenSelected(screen))
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::navbar(active))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_view_renders_for_each_screen() {
        for screen in Screen::ALL {
            let _element = view(screen);
        }
    }

    #[test]
    fn selecting_other_screen_emits_switch() {
        let event = update(Message::ScreenSelected(Screen::Shop), Screen::Gallery);
        assert!(matches!(event, Event::SwitchScreen(Screen::Shop)));
    }

    #[test]
    fn selecting_current_screen_is_noop() {
        let event = update(Message::ScreenSelected(Screen::Gallery), Screen::Gallery);
        assert!(matches!(event, Event::None));
    }
}
