// SPDX-License-Identifier: MPL-2.0
use iced::{Point, Size};
use iced_banner::config::{self, Config};
use iced_banner::i18n::fluent::I18n;
use iced_banner::ui::banner::{
    Banner, BannerConfiguration, Event, Host, Message, Phase, Pointer, Position,
};
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn host() -> Host {
    Host::new(Size::new(420.0, 720.0), 20.0, 44.0)
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut initial = Config::default();
    initial.general.language = Some("en-US".to_string());
    config::save_to_path(&initial, &path).expect("Failed to write initial config file");

    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    let mut french = loaded.clone();
    french.general.language = Some("fr".to_string());
    config::save_to_path(&french, &path).expect("Failed to write french config file");

    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
}

#[test]
fn test_banner_settings_survive_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut settings = Config::default();
    settings.banner.duration_secs = Some(1.25);
    settings.banner.swipe_threshold = Some(40.0);
    config::save_with_override(&settings, Some(dir.path().to_path_buf()))
        .expect("Failed to save config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded.banner.duration(), Duration::from_millis(1250));
    assert_eq!(loaded.banner.swipe_threshold(), 40.0);
}

#[test]
fn test_corrupt_config_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[banner\nduration_secs = ")
        .expect("Failed to write corrupt config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some(config::CONFIG_LOAD_ERROR_KEY));

    let i18n = I18n::new(Some("en-US".into()), &loaded);
    assert!(!i18n.tr(config::CONFIG_LOAD_ERROR_KEY).starts_with("MISSING"));
}

#[test]
fn test_banner_full_lifecycle() {
    let start = Instant::now();
    let configuration = BannerConfiguration::new()
        .with_title("New Message")
        .with_description("You have a new message")
        .with_position(Position::StatusBar)
        .with_duration(Duration::from_millis(300));
    let mut banner = Banner::new(configuration, &host());

    let taps = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&taps);
    banner.set_did_tap_banner(move || counter.set(counter.get() + 1));

    assert!(banner.show_at(start));
    let mut now = start;
    let mut events = Vec::new();
    while banner.needs_tick() {
        now += Duration::from_millis(16);
        events.push(banner.tick(now));
    }
    assert_eq!(events.last(), Some(&Event::Shown));
    assert_eq!(banner.phase(), Phase::Visible);

    let at = Point::new(100.0, 30.0);
    banner.update(Message::Pointer(Pointer::Pressed(at)), now);
    assert_eq!(
        banner.update(Message::Pointer(Pointer::Released(at)), now),
        Event::Tapped
    );
    assert_eq!(taps.get(), 1);

    let mut detached = 0;
    while banner.needs_tick() {
        now += Duration::from_millis(16);
        if banner.tick(now) == Event::Detached {
            detached += 1;
        }
    }
    assert_eq!(detached, 1);
    assert!(banner.is_detached());
    assert_eq!(taps.get(), 1);
}

#[test]
fn test_interrupted_show_hides_quickly() {
    let start = Instant::now();
    let mut banner = Banner::new(BannerConfiguration::new(), &host());

    banner.show_at(start);
    let reverse_at = start + Duration::from_millis(100);
    banner.hide_at(reverse_at);

    // Only a fifth of the distance was covered, so undoing it takes about
    // a fifth of the duration rather than the full 500ms.
    assert_eq!(
        banner.tick(reverse_at + Duration::from_millis(50)),
        Event::None
    );
    assert_eq!(
        banner.tick(reverse_at + Duration::from_millis(110)),
        Event::Detached
    );
}
