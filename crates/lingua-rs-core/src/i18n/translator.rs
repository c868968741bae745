//! The per-request translation handle.

use std::fmt;

use super::catalog;

/// A translation handle bound to exactly one locale.
///
/// A `Translator` is the request-scoped capability handlers use to look up
/// localized strings. One is constructed per request by the binding
/// middleware; it is cheap to clone, owns no shared mutable state, and once
/// resolution completes its locale never changes.
///
/// # Examples
///
/// ```
/// use lingua_rs_core::i18n::{catalog, Translator};
///
/// catalog::register_translations("de", vec![("Yes", "Ja")]);
///
/// let t = Translator::new("de");
/// assert_eq!(t.locale(), "de");
/// assert_eq!(t.gettext("Yes"), "Ja");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Translator {
    locale: String,
}

impl Translator {
    /// Creates a translator bound to the given locale.
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
        }
    }

    /// Returns the locale this translator is bound to.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Rebinds this translator to a different locale.
    ///
    /// Called by the binding middleware while resolution is in progress;
    /// after resolution the translator is only read.
    pub fn rebind(&mut self, locale: impl Into<String>) {
        self.locale = locale.into();
    }

    /// Translates a message.
    ///
    /// Returns the original `msgid` if no translation is registered. The
    /// empty msgid translates to the empty string.
    pub fn gettext(&self, msgid: &str) -> String {
        if msgid.is_empty() {
            return String::new();
        }
        catalog::translate(&self.locale, msgid).unwrap_or_else(|| msgid.to_string())
    }

    /// Translates a message with plural support.
    ///
    /// Returns the singular form if `count == 1`, otherwise the plural form.
    /// Falls back to the appropriate untranslated form when the catalog has
    /// no entry.
    pub fn ngettext(&self, singular: &str, plural: &str, count: u64) -> String {
        catalog::translate_plural(&self.locale, singular, count).unwrap_or_else(|| {
            if count == 1 {
                singular.to_string()
            } else {
                plural.to_string()
            }
        })
    }
}

impl fmt::Debug for Translator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translator")
            .field("locale", &self.locale)
            .finish()
    }
}
