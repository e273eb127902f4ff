// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together the domains (gallery, shop, contact,
//! opening hours) and translates messages into side effects like HTTP
//! fetches or notifications. Policy decisions (window sizing, which screens
//! get keyboard events, when subscriptions run) live close to the main
//! update loop so user-facing behavior is easy to audit.

pub mod config;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod view;

pub use message::Message;
pub use screen::Screen;

use crate::contact;
use crate::gallery;
use crate::hours::{ShopStatus, WeeklySchedule};
use crate::media::PrefetchConfig;
use crate::shop;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::{Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 750;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Root Iced application state bridging the screens and persisted
/// preferences.
pub struct App {
    screen: Screen,
    gallery: gallery::State,
    shop: shop::State,
    contact: contact::State,
    schedule: WeeklySchedule,
    shop_status: ShopStatus,
    theme_mode: ThemeMode,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("gallery_len", &self.gallery.image_set().len())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> iced::window::Settings {
    iced::window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..iced::window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
///
/// CLI overrides must already be registered via [`paths::init_cli_overrides`].
pub fn run() -> iced::Result {
    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from the loaded configuration and kicks
    /// off the gallery directory scan.
    fn new() -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();

        let gallery_dir = paths::get_gallery_dir(config.gallery.gallery_dir.as_ref())
            .unwrap_or_else(|| PathBuf::from("."));
        let prefetch_config = PrefetchConfig::new(
            config.gallery.prefetch_cache_mb() as usize * 1024 * 1024,
            config.gallery.prefetch_max_images() as usize,
        );
        let (gallery, gallery_task) = gallery::State::new(gallery_dir, prefetch_config);

        let schedule = WeeklySchedule::default();
        let shop_status = schedule.status_now();

        let mut app = App {
            screen: Screen::Gallery,
            gallery,
            shop: shop::State::new(
                config.shop.proxy_base_url.clone(),
                config.shop.seller.clone(),
                config.shop.limit(),
            ),
            contact: contact::State::new(config.contact.endpoint.clone()),
            schedule,
            shop_status,
            theme_mode: config.general.theme_mode,
            notifications: notifications::Manager::new(),
        };

        if let Some(warning) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(warning));
        }

        (app, gallery_task.map(Message::Gallery))
    }

    fn title(&self) -> String {
        format!("{} - Calico Aquatics", self.screen.label())
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(self.screen, self.gallery.is_lightbox_open()),
            subscription::create_reveal_subscription(self.gallery.reveal_pass_pending()),
            subscription::create_minute_subscription(self.screen),
            subscription::create_notification_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(msg) => self.handle_gallery(msg),
            Message::Shop(msg) => self.shop.handle(msg).map(Message::Shop),
            Message::Contact(msg) => self.contact.handle(msg).map(Message::Contact),
            Message::Navbar(msg) => match navbar::update(msg, self.screen) {
                navbar::Event::SwitchScreen(target) => self.switch_screen(target),
                navbar::Event::None => Task::none(),
            },
            Message::SwitchScreen(target) => self.switch_screen(target),
            Message::Notification(msg) => {
                self.notifications.handle_message(&msg);
                Task::none()
            }
            Message::RevealTick(_instant) => self.handle_gallery(gallery::Message::RevealTick),
            Message::MinuteTick(_instant) => {
                self.shop_status = self.schedule.status_now();
                Task::none()
            }
            Message::Tick(_instant) => {
                self.notifications.tick();
                Task::none()
            }
            Message::KeyPressed(key) => {
                if self.screen == Screen::Gallery {
                    let (_consumed, task) = self.gallery.handle_key(&key);
                    task.map(Message::Gallery)
                } else {
                    Task::none()
                }
            }
            Message::WindowResized(size) => {
                // The grid layout stays current even when resized on another
                // screen, so returning to the gallery never shows stale rows.
                self.gallery.handle_resize(size.width, size.height);
                Task::none()
            }
        }
    }

    fn handle_gallery(&mut self, message: gallery::Message) -> Task<Message> {
        let (effect, task) = self.gallery.handle(message);
        if let gallery::Effect::Warn(text) = effect {
            self.notifications
                .push(notifications::Notification::warning(text));
        }
        task.map(Message::Gallery)
    }

    fn switch_screen(&mut self, target: Screen) -> Task<Message> {
        self.screen = target;
        match target {
            Screen::Shop => self.shop.fetch_if_needed().map(Message::Shop),
            Screen::About => {
                self.shop_status = self.schedule.status_now();
                Task::none()
            }
            Screen::Gallery | Screen::Contact => Task::none(),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            screen: self.screen,
            gallery: &self.gallery,
            shop: &self.shop,
            contact: &self.contact,
            schedule: &self.schedule,
            shop_status: self.shop_status,
            notifications: &self.notifications,
        })
    }
}
