// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together the domains (content, localization,
//! gallery browsing, contact draft, notifications) and translates
//! messages into state changes and config persistence. Policy decisions
//! (window sizing, locale resolution order, what a locale switch
//! resets) stay close to the main update loop so user-facing behavior
//! is easy to audit.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::defaults::{
    MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH,
};
use crate::config::{self, Config};
use crate::content::ContentStore;
use crate::gallery::GalleryState;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Manager};
use crate::ui::{contact, theming::ThemeMode};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state bridging UI components, localization,
/// content, and persisted preferences.
pub struct App {
    pub i18n: I18n,
    content: ContentStore,
    config: Config,
    /// Where config changes are persisted; `None` disables persistence.
    config_path: Option<PathBuf>,
    screen: Screen,
    gallery: GalleryState,
    contact: contact::State,
    theme_mode: ThemeMode,
    notifications: Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("locale", &self.i18n.current_locale().to_string())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait
    // requirement while only consuming flags once (iced 0.14 requires
    // Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from config, CLI flags, and the
    /// embedded content datasets.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load();
        let i18n = I18n::new(flags.lang, &config);
        let theme_mode = config.theme_mode;

        let mut app_notifications = Manager::new();
        let content = match ContentStore::load() {
            Ok(store) => store,
            Err(_) => {
                app_notifications
                    .push(notifications::Notification::error("notification-content-load-error"));
                ContentStore::fallback()
            }
        };

        let gallery = GalleryState::from_profile(content.profile(i18n.current_locale()));

        let app = App {
            i18n,
            content,
            config,
            config_path: config::default_path(),
            screen: Screen::Home,
            gallery,
            contact: contact::State::default(),
            theme_mode,
            notifications: app_notifications,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        let profile = self.content.profile(self.i18n.current_locale());
        match &profile.tagline {
            Some(tagline) => format!("{} — {}", profile.name, tagline),
            None => profile.name.clone(),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            profile: self.content.profile(self.i18n.current_locale()),
            gallery: &self.gallery,
            contact: &self.contact,
            notifications: &self.notifications,
        })
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }

    /// State for update-loop tests: English locale, embedded content,
    /// and no config persistence.
    #[cfg(test)]
    pub(crate) fn for_tests() -> Self {
        let config = Config::default();
        let i18n = I18n::new(Some("en".to_string()), &config);
        let content = ContentStore::load().unwrap_or_else(|_| ContentStore::fallback());
        let gallery = GalleryState::from_profile(content.profile(i18n.current_locale()));
        App {
            i18n,
            content,
            config,
            config_path: None,
            screen: Screen::Home,
            gallery,
            contact: contact::State::default(),
            theme_mode: ThemeMode::Light,
            notifications: Manager::new(),
        }
    }
}
