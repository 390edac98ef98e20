// SPDX-License-Identifier: MPL-2.0
//! Fluent bundles embedded at compile time.
//!
//! One bundle per `assets/i18n/<locale>.ftl` file. The active locale is
//! resolved from the command line, then the config file, then the OS, and
//! falls back to `en-US`.

use crate::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::{langid, LanguageIdentifier};

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const DEFAULT_LOCALE: LanguageIdentifier = langid!("en-US");

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish_non_exhaustive()
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = filename
                .strip_suffix(".ftl")
                .and_then(|stem| stem.parse::<LanguageIdentifier>().ok())
            else {
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };

            let source = String::from_utf8_lossy(content.data.as_ref()).into_owned();
            let resource = match FluentResource::try_new(source) {
                Ok(resource) => resource,
                Err((resource, errors)) => {
                    tracing::warn!(%locale, count = errors.len(), "translation file has syntax errors");
                    resource
                }
            };

            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            // Isolation marks render as boxes in some fonts.
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(resource) {
                tracing::warn!(%locale, count = errors.len(), "duplicate translation entries");
            }
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }
        available_locales.sort_by_key(ToString::to_string);

        let current_locale = resolve_locale(
            cli_lang,
            config.general.language.as_deref(),
            sys_locale::get_locale(),
            &available_locales,
        )
        .unwrap_or(DEFAULT_LOCALE);
        tracing::debug!(locale = %current_locale, "locale selected");

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    #[must_use]
    pub fn available_locales(&self) -> &[LanguageIdentifier] {
        &self.available_locales
    }

    /// Switches language. Unknown locales are ignored.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    /// The locale after the current one, wrapping around.
    #[must_use]
    pub fn next_locale(&self) -> Option<LanguageIdentifier> {
        let index = self
            .available_locales
            .iter()
            .position(|locale| locale == &self.current_locale)?;
        let next = (index + 1) % self.available_locales.len();
        self.available_locales.get(next).cloned()
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        let pattern = self
            .bundles
            .get(&self.current_locale)
            .and_then(|bundle| Some((bundle, bundle.get_message(key)?.value()?)));

        if let Some((bundle, pattern)) = pattern {
            let mut errors = vec![];
            let value = bundle.format_pattern(pattern, args, &mut errors);
            if errors.is_empty() {
                return value.into_owned();
            }
        }
        format!("MISSING: {key}")
    }
}

fn resolve_locale(
    cli_lang: Option<String>,
    config_lang: Option<&str>,
    os_lang: Option<String>,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let supported = |candidate: &str| {
        candidate
            .parse::<LanguageIdentifier>()
            .ok()
            .filter(|lang| available.contains(lang))
    };

    cli_lang
        .as_deref()
        .and_then(supported)
        .or_else(|| config_lang.and_then(supported))
        .or_else(|| os_lang.as_deref().and_then(supported))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn available() -> Vec<LanguageIdentifier> {
        vec![langid!("en-US"), langid!("fr")]
    }

    #[test]
    fn cli_language_wins() {
        let lang = resolve_locale(Some("fr".into()), Some("en-US"), None, &available());
        assert_eq!(lang, Some(langid!("fr")));
    }

    #[test]
    fn config_language_used_without_cli() {
        let lang = resolve_locale(None, Some("fr"), Some("en-US".into()), &available());
        assert_eq!(lang, Some(langid!("fr")));
    }

    #[test]
    fn unsupported_languages_are_skipped() {
        let lang = resolve_locale(Some("de".into()), Some("xx-YY"), Some("fr".into()), &available());
        assert_eq!(lang, Some(langid!("fr")));
        assert_eq!(resolve_locale(None, None, Some("ja".into()), &available()), None);
    }

    #[test]
    fn bundled_locales_are_loaded() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        assert!(i18n.available_locales().contains(&langid!("en-US")));
        assert!(i18n.available_locales().contains(&langid!("fr")));
        assert_eq!(i18n.current_locale(), &langid!("en-US"));
    }

    #[test]
    fn translates_and_reports_missing_keys() {
        let mut i18n = I18n::new(Some("en-US".into()), &Config::default());
        assert_eq!(i18n.tr("button-hide-status"), "Hide banner for status bar");
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");

        i18n.set_locale(langid!("fr"));
        assert_eq!(i18n.tr("button-hide-status"), "Masquer la bannière sur la barre d'état");
    }

    #[test]
    fn arguments_are_substituted() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        assert_eq!(
            i18n.tr_with_args("status-taps", &[("count", "3")]),
            "Taps: 3"
        );
    }

    #[test]
    fn next_locale_wraps_around() {
        let mut i18n = I18n::new(Some("fr".into()), &Config::default());
        assert_eq!(i18n.next_locale(), Some(langid!("en-US")));
        i18n.set_locale(langid!("en-US"));
        assert_eq!(i18n.next_locale(), Some(langid!("fr")));
    }
}
