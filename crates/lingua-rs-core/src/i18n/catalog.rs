//! Translation catalog storage and loading.
//!
//! The catalog stores translations in a global, thread-safe registry keyed by
//! locale identifier. It is written during startup (file loading or
//! programmatic registration) and only read afterwards; request handling
//! never mutates it.
//!
//! ## JSON Format
//!
//! One file per locale, named `<locale>.json`:
//!
//! ```json
//! {
//!   "messages": {
//!     "Hello": "Hola",
//!     "Goodbye": "Adiós"
//!   },
//!   "plurals": {
//!     "item": { "singular": "elemento", "plural": "elementos" }
//!   }
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::sync::RwLock;

use once_cell::sync::Lazy;

use crate::error::{LocaleError, LocaleResult};

/// A translation catalog for a single locale.
#[derive(Debug, Clone, Default)]
struct Catalog {
    /// Simple message translations: msgid -> translated string.
    messages: HashMap<String, String>,
    /// Plural translations: singular msgid -> (singular, plural) forms.
    plurals: HashMap<String, (String, String)>,
}

/// The global catalog registry, keyed by locale identifier.
static CATALOGS: Lazy<RwLock<HashMap<String, Catalog>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

fn with_catalog<F, R>(locale: &str, f: F) -> Option<R>
where
    F: FnOnce(&Catalog) -> Option<R>,
{
    let catalogs = CATALOGS.read().expect("catalog lock poisoned");
    catalogs.get(locale).and_then(f)
}

#[allow(clippy::significant_drop_tightening)]
fn with_catalog_mut<F>(locale: &str, f: F)
where
    F: FnOnce(&mut Catalog),
{
    let mut catalogs = CATALOGS.write().expect("catalog lock poisoned");
    let catalog = catalogs.entry(locale.to_string()).or_default();
    f(catalog);
}

// ── Registration API ─────────────────────────────────────────────────────

/// Registers simple message translations for a locale.
///
/// Each entry is a `(msgid, translated)` pair. Entries merge with any already
/// registered for the locale, overwriting duplicates.
///
/// # Examples
///
/// ```
/// use lingua_rs_core::i18n::catalog;
///
/// catalog::register_translations("fr", vec![
///     ("Hello", "Bonjour"),
///     ("Goodbye", "Au revoir"),
/// ]);
/// ```
pub fn register_translations(locale: &str, entries: Vec<(&str, &str)>) {
    with_catalog_mut(locale, |catalog| {
        for (msgid, translated) in entries {
            catalog
                .messages
                .insert(msgid.to_string(), translated.to_string());
        }
    });
}

/// Registers plural translations for a locale.
///
/// Each entry is `(singular_msgid, translated_singular, translated_plural)`.
pub fn register_plural_translations(locale: &str, entries: Vec<(&str, &str, &str)>) {
    with_catalog_mut(locale, |catalog| {
        for (singular, trans_singular, trans_plural) in entries {
            catalog.plurals.insert(
                singular.to_string(),
                (trans_singular.to_string(), trans_plural.to_string()),
            );
        }
    });
}

/// Loads translations for a locale from a JSON string.
///
/// Both top-level keys (`messages`, `plurals`) are optional.
///
/// # Errors
///
/// Returns [`LocaleError::CatalogError`] if the JSON is invalid.
pub fn load_from_json(locale: &str, json_str: &str) -> LocaleResult<()> {
    let value: serde_json::Value = serde_json::from_str(json_str)
        .map_err(|e| LocaleError::CatalogError(format!("invalid JSON for {locale}: {e}")))?;

    with_catalog_mut(locale, |catalog| {
        if let Some(messages) = value.get("messages").and_then(|v| v.as_object()) {
            for (msgid, translated) in messages {
                if let Some(t) = translated.as_str() {
                    catalog.messages.insert(msgid.clone(), t.to_string());
                }
            }
        }

        if let Some(plurals) = value.get("plurals").and_then(|v| v.as_object()) {
            for (singular_msgid, forms) in plurals {
                if let (Some(singular), Some(plural)) = (
                    forms.get("singular").and_then(|v| v.as_str()),
                    forms.get("plural").and_then(|v| v.as_str()),
                ) {
                    catalog.plurals.insert(
                        singular_msgid.clone(),
                        (singular.to_string(), plural.to_string()),
                    );
                }
            }
        }
    });

    Ok(())
}

/// Loads `<locale>.json` from `directory` for every configured locale.
///
/// A missing file for a locale is tolerated (that locale simply has no
/// translations, lookups fall back to the msgid); an unreadable or invalid
/// file is an error.
///
/// # Errors
///
/// Returns [`LocaleError::IoError`] on read failures other than "not found"
/// and [`LocaleError::CatalogError`] on invalid JSON.
pub fn load_directory(directory: &Path, locales: &[String]) -> LocaleResult<()> {
    for locale in locales {
        let path = directory.join(format!("{locale}.json"));
        match std::fs::read_to_string(&path) {
            Ok(content) => load_from_json(locale, &content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(locale = %locale, path = %path.display(), "no catalog file");
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

// ── Lookup API ───────────────────────────────────────────────────────────

/// Looks up a simple translation in the catalog.
pub fn translate(locale: &str, msgid: &str) -> Option<String> {
    with_catalog(locale, |catalog| catalog.messages.get(msgid).cloned())
}

/// Looks up a plural translation in the catalog.
///
/// Returns the singular form if `count == 1`, otherwise the plural form.
pub fn translate_plural(locale: &str, singular: &str, count: u64) -> Option<String> {
    with_catalog(locale, |catalog| {
        catalog
            .plurals
            .get(singular)
            .map(|(s, p)| if count == 1 { s.clone() } else { p.clone() })
    })
}

/// Returns `true` if translations are registered for the given locale.
pub fn has_locale(locale: &str) -> bool {
    let catalogs = CATALOGS.read().expect("catalog lock poisoned");
    catalogs.contains_key(locale)
}

/// Clears all translations for a given locale.
pub fn clear_locale(locale: &str) {
    let mut catalogs = CATALOGS.write().expect("catalog lock poisoned");
    catalogs.remove(locale);
}
