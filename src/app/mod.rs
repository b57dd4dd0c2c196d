// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the auth and home
//! screens.
//!
//! The `App` struct wires together the domains (session storage, backend
//! client, localization, notifications) and translates messages into side
//! effects such as HTTP requests or storage writes.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::api::ApiClient;
use crate::auth::AuthController;
use crate::config::{self, Config};
use crate::i18n::I18n;
use crate::session;
use crate::storage::{FileStore, KeyValueStore, MemoryStore};
use crate::ui::home;
use crate::ui::notifications::{self, Severity};
use crate::ui::particles::ParticleField;
use crate::ui::theming::{self, ThemeMode};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    config: Config,
    screen: Screen,
    storage: Box<dyn KeyValueStore>,
    api: ApiClient,
    auth: AuthController,
    home: home::State,
    particles: ParticleField,
    notifications: notifications::Manager,
    /// Effective theme, re-read while following the system.
    is_dark: bool,
    /// Origin of the particle animation clock.
    started_at: Instant,
    /// Time of the last tick or frame, used when rendering fades.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("api_url", &self.api.base_url())
            .field("is_dark", &self.is_dark)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1080;
pub const MIN_WINDOW_HEIGHT: u32 = 640;
pub const MIN_WINDOW_WIDTH: u32 = 820;

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
    // iced 0.14 requires a `Fn` boot closure; later calls start from the
    // same flags.
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Opens the file-backed store, falling back to memory when no data
/// directory is available.
fn open_storage(data_dir: Option<&str>) -> Box<dyn KeyValueStore> {
    match FileStore::open_in(data_dir.map(PathBuf::from)) {
        Some(store) => {
            tracing::debug!(path = %store.path().display(), "using file storage");
            Box::new(store)
        }
        None => {
            tracing::warn!("no data directory available, storage will not persist");
            Box::new(MemoryStore::new())
        }
    }
}

impl App {
    /// Initializes application state from the configuration and `Flags`.
    ///
    /// A stored session opens the home screen directly.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let api_url = flags
            .api_url
            .clone()
            .unwrap_or_else(|| config.backend.api_url.clone());
        let now = Instant::now();

        let mut app = App {
            i18n,
            screen: Screen::Login,
            storage: open_storage(flags.data_dir.as_deref()),
            api: ApiClient::new(api_url),
            auth: AuthController::new(now),
            home: home::State::default(),
            particles: ParticleField::new(),
            notifications: notifications::Manager::with_default_duration(
                config.notifications.toast_duration(),
            ),
            is_dark: config.general.theme_mode.is_dark(),
            started_at: now,
            now,
            config,
        };
        tracing::info!(api_url = %app.api.base_url(), locale = %app.i18n.current_locale(), "starting");

        if let Some(key) = config_warning {
            app.notifications.notify(app.i18n.tr(&key), Severity::Error);
        }

        let task = if session::token(&*app.storage).is_some() {
            update::enter_home(&mut app.update_context())
        } else {
            Task::none()
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.screen {
            Screen::Login if self.auth.register_active() => {
                format!("{} - {app_name}", self.i18n.tr("register-title"))
            }
            Screen::Login => format!("{} - {app_name}", self.i18n.tr("login-title")),
            Screen::Home => app_name,
        }
    }

    fn theme(&self) -> Theme {
        theming::iced_theme(self.is_dark)
    }

    fn particles_enabled(&self) -> bool {
        self.config.login.particles
    }

    fn subscription(&self) -> Subscription<Message> {
        let tick_sub = subscription::create_tick_subscription(
            self.screen,
            self.notifications.has_notifications(),
        );
        let frame_sub =
            subscription::create_frame_subscription(self.screen, self.particles_enabled());
        let theme_sub = subscription::create_theme_subscription(
            self.config.general.theme_mode == ThemeMode::System,
        );

        Subscription::batch([tick_sub, frame_sub, theme_sub])
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &self.i18n,
            screen: &mut self.screen,
            storage: &*self.storage,
            api: &self.api,
            auth: &mut self.auth,
            home: &mut self.home,
            notifications: &mut self.notifications,
            now: self.now,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick(now) => {
                self.now = now;
                update::handle_tick(&mut self.update_context())
            }
            Message::Frame(now) => {
                self.now = now;
                let elapsed_ms = now.duration_since(self.started_at).as_secs_f64() * 1000.0;
                self.particles.update(elapsed_ms);
                Task::none()
            }
            Message::ThemePoll(_) => {
                let is_dark = self.config.general.theme_mode.is_dark();
                if is_dark != self.is_dark {
                    tracing::debug!(is_dark, "system theme changed");
                    self.is_dark = is_dark;
                }
                Task::none()
            }
            Message::Particles(particle_message) => {
                self.particles.handle_message(particle_message);
                Task::none()
            }
            Message::Notification(notification_message) => {
                self.notifications
                    .handle_message(&notification_message, Instant::now());
                Task::none()
            }
            Message::Auth(auth_message) => {
                self.now = Instant::now();
                update::handle_auth_message(&mut self.update_context(), auth_message)
            }
            Message::Home(home_message) => {
                self.now = Instant::now();
                update::handle_home_message(&mut self.update_context(), home_message)
            }
            Message::LoginFinished(result) => {
                self.now = Instant::now();
                update::handle_login_finished(&mut self.update_context(), result)
            }
            Message::RegisterFinished(result) => {
                self.now = Instant::now();
                update::handle_register_finished(&mut self.update_context(), result)
            }
            Message::UserFetched(result) => {
                update::handle_user_fetched(&mut self.update_context(), result)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            auth: &self.auth,
            home: &self.home,
            particles: self.particles_enabled().then_some(&self.particles),
            notifications: &self.notifications,
            now: self.now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{LoginSuccess, UserProfile};
    use crate::storage::keys;
    use std::time::Duration;

    fn test_app() -> App {
        let config = Config::default();
        let now = Instant::now();
        App {
            i18n: I18n::new(Some("es".into()), &config),
            screen: Screen::Login,
            storage: Box::new(MemoryStore::new()),
            api: ApiClient::new(config.backend.api_url.clone()),
            auth: AuthController::new(now),
            home: home::State::default(),
            particles: ParticleField::seeded(1),
            notifications: notifications::Manager::new(),
            is_dark: true,
            started_at: now,
            now,
            config,
        }
    }

    #[test]
    fn title_follows_the_auth_pane() {
        let mut app = test_app();
        let login_title = app.title();
        let _ = app.update(Message::Auth(crate::auth::Message::ShowRegister));
        assert_ne!(app.title(), login_title);
        assert!(app.auth.register_active());
    }

    #[test]
    fn login_finished_switches_to_home() {
        let mut app = test_app();
        let user = UserProfile {
            id: Some("5".into()),
            name: Some("Ana".into()),
            ..UserProfile::default()
        };
        let _ = app.update(Message::LoginFinished(Ok(LoginSuccess {
            token: "user-5".into(),
            user: Some(user),
        })));

        assert_eq!(app.screen, Screen::Home);
        assert!(app.storage.get_item(keys::USER_DATA).unwrap().is_some());
        assert_eq!(app.home.display_name.as_deref(), Some("Ana"));
    }

    #[test]
    fn frames_advance_particles_once_sized() {
        let mut app = test_app();
        let _ = app.update(Message::Particles(
            crate::ui::particles::ParticleMessage::Resized(iced::Size::new(400.0, 300.0)),
        ));
        let before = app.particles.particles().to_vec();

        let _ = app.update(Message::Frame(app.started_at + Duration::from_millis(16)));

        assert_ne!(app.particles.particles(), before.as_slice());
    }

    #[test]
    fn tick_expires_toasts() {
        let mut app = test_app();
        let start = Instant::now();
        app.notifications
            .notify_at(start, "hola", Severity::Info, Duration::from_millis(1000));

        let _ = app.update(Message::Tick(start + Duration::from_millis(1100)));
        let _ = app.update(Message::Tick(
            start + Duration::from_millis(1100) + notifications::EXIT_TRANSITION,
        ));

        assert_eq!(app.notifications.visible_count(), 0);
    }

    #[test]
    fn fixed_theme_mode_ignores_theme_polls() {
        let mut app = test_app();
        app.config.general.theme_mode = ThemeMode::Light;
        app.is_dark = false;
        let _ = app.update(Message::ThemePoll(Instant::now()));
        assert!(!app.is_dark);
        assert_eq!(app.theme(), Theme::Light);
    }
}
