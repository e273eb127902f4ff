// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::contact;
use crate::gallery;
use crate::shop;
use crate::ui::navbar;
use crate::ui::notifications;
use std::time::Instant;

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Shop(shop::Message),
    Contact(contact::Message),
    Navbar(navbar::Message),
    SwitchScreen(Screen),
    Notification(notifications::NotificationMessage),
    /// Frame tick while a reveal pass is pending.
    RevealTick(Instant),
    /// Minute tick refreshing the about screen's status chip.
    MinuteTick(Instant),
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
    /// A keyboard key was pressed while no widget captured it.
    KeyPressed(iced::keyboard::Key),
    /// The window was resized.
    WindowResized(iced::Size),
}
