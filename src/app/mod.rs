// SPDX-License-Identifier: MPL-2.0
//! Application root state for the banner demo window.
//!
//! The `App` struct wires together localization, persisted preferences and
//! the single active banner, and translates messages into banner calls and
//! config persistence.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::banner::{self, Banner, BannerConfiguration, BannerImage, Host, Position};
use crate::ui::design_tokens::palette;
use crate::ui::icons;
use crate::ui::navbar;
use crate::ui::theming::ThemeMode;
use chrono::{DateTime, Local};
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_WIDTH: f32 = 420.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 720.0;
pub const MIN_WINDOW_WIDTH: f32 = 320.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// i18n key shown when settings cannot be written.
const CONFIG_SAVE_ERROR_KEY: &str = "notification-config-save-error";

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    config: Config,
    /// Explicit settings directory; `None` follows the usual path resolution.
    config_dir: Option<PathBuf>,
    theme_mode: ThemeMode,
    host: Host,
    banner: Option<Banner>,
    banner_duration: Duration,
    swipe_threshold: f32,
    /// Banner taps seen since startup.
    tap_count: u32,
    now: Instant,
    clock: DateTime<Local>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("host", &self.host)
            .field("banner", &self.banner)
            .field("tap_count", &self.tap_count)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced calls boot through `Fn`, flags are only consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || App::new(boot_state.borrow_mut().take().unwrap_or_default());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let mut app = Self::from_parts(config, i18n, None, flags.duration_secs);

        if let Some(key) = config_warning {
            app.present_notice(&key, Instant::now());
        }

        (app, Task::none())
    }

    /// Builds the state without touching the file system.
    fn from_parts(
        config: Config,
        i18n: I18n,
        config_dir: Option<PathBuf>,
        duration_secs: Option<f64>,
    ) -> Self {
        let mut banner_settings = config.banner.clone();
        if duration_secs.is_some() {
            banner_settings.duration_secs = duration_secs;
        }

        let host = Host::new(
            Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            banner_settings.status_bar_height(),
            banner_settings.navigation_bar_height(),
        );

        Self {
            theme_mode: config.general.theme_mode,
            banner_duration: banner_settings.duration(),
            swipe_threshold: banner_settings.swipe_threshold(),
            i18n,
            config,
            config_dir,
            host,
            banner: None,
            tap_count: 0,
            now: Instant::now(),
            clock: Local::now(),
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create(self.banner.as_ref().is_some_and(Banner::needs_tick))
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let now = match message {
            Message::Tick(at) => at,
            _ => Instant::now(),
        };
        self.handle(message, now);
        Task::none()
    }

    fn handle(&mut self, message: Message, now: Instant) {
        self.now = now;

        match message {
            Message::ShowBanner(position) => {
                self.present(self.demo_configuration(position), now);
            }
            Message::HideBanner(position) => {
                if let Some(banner) = self
                    .banner
                    .as_mut()
                    .filter(|banner| banner.configuration().position == position)
                {
                    banner.hide_at(now);
                }
            }
            Message::Banner(message) => {
                let Some(banner) = self.banner.as_mut() else {
                    return;
                };
                if banner.update(message, now) == banner::Event::Tapped {
                    self.tap_count += 1;
                }
            }
            Message::Navbar(message) => self.handle_navbar(message, now),
            Message::Tick(_) => {
                self.clock = Local::now();
                let event = self
                    .banner
                    .as_mut()
                    .map_or(banner::Event::None, |banner| banner.tick(now));
                if event == banner::Event::Detached {
                    self.banner = None;
                }
            }
            Message::WindowResized(size) => {
                self.host = self.host.with_size(size);
                if let Some(banner) = self.banner.as_mut() {
                    banner.resize(&self.host);
                }
            }
        }
    }

    fn handle_navbar(&mut self, message: navbar::Message, now: Instant) {
        match navbar::update(message, self.theme_mode) {
            navbar::Event::ThemeModeChanged(mode) => {
                self.theme_mode = mode;
                self.config.general.theme_mode = mode;
            }
            navbar::Event::NextLanguage => {
                let Some(locale) = self.i18n.next_locale() else {
                    return;
                };
                self.config.general.language = Some(locale.to_string());
                self.i18n.set_locale(locale);
            }
        }
        self.persist(now);
    }

    fn persist(&mut self, now: Instant) {
        if let Err(err) = config::save_with_override(&self.config, self.config_dir.clone()) {
            tracing::warn!(%err, "failed to save settings");
            self.present_notice(CONFIG_SAVE_ERROR_KEY, now);
        }
    }

    /// Replaces the current banner with a new one and starts showing it.
    fn present(&mut self, configuration: BannerConfiguration, now: Instant) {
        let mut banner =
            Banner::new(configuration, &self.host).with_swipe_threshold(self.swipe_threshold);
        banner.set_did_tap_banner(|| tracing::info!("did tap banner"));
        banner.show_at(now);
        self.banner = Some(banner);
    }

    fn present_notice(&mut self, key: &str, now: Instant) {
        let configuration = BannerConfiguration::new()
            .with_duration(self.banner_duration)
            .with_title(self.i18n.tr(key))
            .with_title_color(palette::BLACK)
            .with_image(BannerImage::Svg(icons::warning()))
            .with_image_color(palette::BLACK)
            .with_background_color(palette::WARNING_500);
        self.present(configuration, now);
    }

    fn demo_configuration(&self, position: Position) -> BannerConfiguration {
        let configuration = BannerConfiguration::new()
            .with_duration(self.banner_duration)
            .with_position(position);

        match position {
            Position::NavigationBar => configuration
                .with_title(self.i18n.tr("banner-network-title"))
                .with_title_color(palette::WHITE)
                .with_description(self.i18n.tr("banner-network-description"))
                .with_description_color(palette::WHITE)
                .with_image(BannerImage::Svg(icons::info()))
                .with_background_color(palette::NETWORK_RED),
            Position::StatusBar => configuration
                .with_title(self.i18n.tr("banner-message-title"))
                .with_title_color(palette::BLACK)
                .with_description(self.i18n.tr("banner-message-description"))
                .with_description_color(palette::BLACK)
                .with_image(BannerImage::Svg(icons::message()))
                .with_image_color(palette::BLACK)
                .with_background_color(palette::MESSAGE_YELLOW),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            host: self.host,
            theme_mode: self.theme_mode,
            banner: self.banner.as_ref(),
            now: self.now,
            clock: self.clock,
            tap_count: self.tap_count,
        })
    }
}
