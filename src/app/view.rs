// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the navbar, the current screen, and the toast overlay stacked
//! on top.

use super::{Message, Screen};
use crate::contact;
use crate::gallery;
use crate::hours::{ShopStatus, WeeklySchedule};
use crate::shop;
use crate::ui::about;
use crate::ui::navbar;
use crate::ui::notifications::{Manager, Toast};
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub screen: Screen,
    pub gallery: &'a gallery::State,
    pub shop: &'a shop::State,
    pub contact: &'a contact::State,
    pub schedule: &'a WeeklySchedule,
    pub shop_status: ShopStatus,
    pub notifications: &'a Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Gallery => gallery::pane::view(ctx.gallery).map(Message::Gallery),
        Screen::Shop => shop::pane::view(ctx.shop).map(Message::Shop),
        Screen::About => about::view(ctx.schedule, ctx.shop_status),
        Screen::Contact => contact::pane::view(ctx.contact).map(Message::Contact),
    };

    let navbar_view = navbar::view(ctx.screen).map(Message::Navbar);

    let screen_column = Column::new().push(navbar_view).push(
        Container::new(current_view)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    let toast_overlay = Toast::view_overlay(ctx.notifications).map(Message::Notification);

    Stack::new()
        .push(screen_column)
        .push(toast_overlay)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
