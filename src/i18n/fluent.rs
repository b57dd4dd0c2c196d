// SPDX-License-Identifier: MPL-2.0
//! Fluent bundles embedded at build time from `assets/i18n/*.ftl`.
//!
//! Locale resolution order: CLI flag, then `general.language` from the
//! config, then [`DEFAULT_LOCALE`]. The OS locale is only consulted when
//! the flag or the config asks for [`SYSTEM_LOCALE`].

use crate::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

/// Locale used when nothing else matches.
pub const DEFAULT_LOCALE: &str = "es";

/// Language value that selects the OS locale.
pub const SYSTEM_LOCALE: &str = "system";

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
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
            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let resource = match FluentResource::try_new(source) {
                Ok(resource) => resource,
                Err((resource, errors)) => {
                    tracing::warn!(file = filename, count = errors.len(), "FTL parse errors");
                    resource
                }
            };
            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(resource) {
                tracing::warn!(file = filename, count = errors.len(), "duplicate FTL messages");
            }
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }
        available_locales.sort_by_key(ToString::to_string);

        let default_locale: LanguageIdentifier = DEFAULT_LOCALE
            .parse()
            .unwrap_or_default();
        let current_locale = resolve_locale(
            cli_lang,
            config.general.language.as_deref(),
            sys_locale::get_locale,
            &available_locales,
        )
        .unwrap_or(default_locale);
        tracing::debug!(locale = %current_locale, "locale resolved");

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    #[must_use]
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(pattern) = bundle.get_message(key).and_then(|m| m.value()) {
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, args, &mut errors);
                if errors.is_empty() {
                    return value.to_string();
                }
            }
        }
        format!("MISSING: {key}")
    }
}

fn resolve_locale(
    cli_lang: Option<String>,
    config_lang: Option<&str>,
    os_lang: impl Fn() -> Option<String>,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let candidates = [cli_lang.as_deref(), config_lang];
    candidates.into_iter().flatten().find_map(|candidate| {
        let candidate = if candidate.eq_ignore_ascii_case(SYSTEM_LOCALE) {
            os_lang()?
        } else {
            candidate.to_string()
        };
        let lang = candidate.parse::<LanguageIdentifier>().ok()?;
        if available.contains(&lang) {
            return Some(lang);
        }
        // "es-CO" falls back to a bundle for its language alone.
        available
            .iter()
            .find(|locale| locale.language == lang.language && locale.region.is_none())
            .cloned()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn available() -> Vec<LanguageIdentifier> {
        vec!["en-US".parse().unwrap(), "es".parse().unwrap()]
    }

    fn english_os() -> Option<String> {
        Some("en-US".into())
    }

    #[test]
    fn cli_wins_over_config() {
        let lang = resolve_locale(Some("en-US".into()), Some("es"), english_os, &available());
        assert_eq!(lang, Some("en-US".parse().unwrap()));
    }

    #[test]
    fn config_used_when_cli_unknown() {
        let lang = resolve_locale(Some("fr".into()), Some("en-US"), english_os, &available());
        assert_eq!(lang, Some("en-US".parse().unwrap()));
    }

    #[test]
    fn os_locale_is_ignored_unless_requested() {
        assert_eq!(resolve_locale(None, None, english_os, &available()), None);
        let i18n = I18n::new(None, &Config::default());
        assert_eq!(i18n.current_locale().to_string(), DEFAULT_LOCALE);
        assert_eq!(i18n.tr("toast-title-info"), "Información");
    }

    #[test]
    fn system_value_follows_the_os_locale() {
        let lang = resolve_locale(None, Some("system"), english_os, &available());
        assert_eq!(lang, Some("en-US".parse().unwrap()));
    }

    #[test]
    fn regional_os_locale_falls_back_to_language() {
        let lang = resolve_locale(Some("system".into()), None, || Some("es-CO".into()), &available());
        assert_eq!(lang, Some("es".parse().unwrap()));
    }

    #[test]
    fn nothing_matches() {
        assert_eq!(resolve_locale(Some("system".into()), None, || Some("de-DE".into()), &available()), None);
    }

    #[test]
    fn spanish_toast_titles() {
        let i18n = I18n::new(Some("es".into()), &Config::default());
        assert_eq!(i18n.tr("toast-title-info"), "Información");
        assert_eq!(i18n.tr("toast-title-success"), "Éxito");
        assert_eq!(i18n.tr("toast-title-error"), "Error");
    }

    #[test]
    fn spanish_alerts_match_web_client() {
        let i18n = I18n::new(Some("es".into()), &Config::default());
        assert_eq!(
            i18n.tr("alert-login-missing-fields"),
            "Por favor completa todos los campos para iniciar sesión."
        );
        assert_eq!(
            i18n.tr("alert-register-password-mismatch"),
            "Las contraseñas no coinciden."
        );
    }

    #[test]
    fn args_are_interpolated() {
        let i18n = I18n::new(Some("es".into()), &Config::default());
        assert_eq!(
            i18n.tr_with_args("home-greeting", &[("name", "Ana")]),
            "Hola, Ana"
        );
    }

    #[test]
    fn missing_key_is_marked() {
        let i18n = I18n::new(Some("es".into()), &Config::default());
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }
}
