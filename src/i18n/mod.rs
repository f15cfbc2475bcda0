//! # Translation Lookup
//!
//! Static dictionaries for English, Chinese and Thai plus the [`Translator`]
//! that resolves keys against the active language.
//!
//! Lookup never fails: a key missing from the dictionary falls back to the
//! caller's fallback text, and without one to the key itself.

mod en;
mod th;
mod zh;

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::domain::Language;
use crate::infrastructure::storage::{keys, KeyValueStore};
use crate::shared::error::AppError;

/// Dictionary for a language.
pub fn dictionary(lang: Language) -> &'static HashMap<&'static str, &'static str> {
    match lang {
        Language::En => &en::EN,
        Language::Zh => &zh::ZH,
        Language::Th => &th::TH,
    }
}

/// Active-language translator. The language is persisted under `lang`.
pub struct Translator {
    store: Arc<dyn KeyValueStore>,
    lang: RwLock<Language>,
}

impl Translator {
    /// Restore the language from storage, falling back to `default` when the
    /// stored code is missing, unreadable, or not one of `en`/`zh`/`th`.
    pub fn load(store: Arc<dyn KeyValueStore>, default: Language) -> Self {
        let lang = match store.get(keys::LANGUAGE) {
            Ok(Some(code)) => Language::from_code(&code).unwrap_or_else(|| {
                debug!(code = %code, "Ignoring unknown stored language");
                default
            }),
            Ok(None) => default,
            Err(e) => {
                warn!(error = %e, "Could not read stored language");
                default
            }
        };

        Self {
            store,
            lang: RwLock::new(lang),
        }
    }

    pub fn lang(&self) -> Language {
        *self.lang.read()
    }

    /// Translate `key`: dictionary value if non-empty, else `fallback` if
    /// non-empty, else the key itself.
    pub fn t(&self, key: &str, fallback: Option<&str>) -> String {
        lookup(self.lang(), key, fallback)
    }

    /// Switch to `next`, or cycle en -> zh -> th -> en when `None`, and
    /// persist the result.
    pub fn change_lang(&self, next: Option<Language>) -> Result<Language, AppError> {
        let mut lang = self.lang.write();
        let target = next.unwrap_or_else(|| lang.next());

        self.store.set(keys::LANGUAGE, target.code())?;
        *lang = target;

        debug!(lang = %target, "Language changed");
        Ok(target)
    }

    /// Use `lang` until the process exits without touching storage.
    pub fn override_lang(&self, lang: Language) {
        *self.lang.write() = lang;
    }
}

/// Stateless lookup against a given language.
pub fn lookup(lang: Language, key: &str, fallback: Option<&str>) -> String {
    dictionary(lang)
        .get(key)
        .copied()
        .filter(|value| !value.is_empty())
        .or(fallback.filter(|f| !f.is_empty()))
        .unwrap_or(key)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::MemoryStore;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    // ==========================================================================
    // Helpers
    // ==========================================================================

    fn create_test_translator(stored: Option<&str>) -> (Arc<MemoryStore>, Translator) {
        let store = Arc::new(match stored {
            Some(code) => MemoryStore::with_entries([(keys::LANGUAGE, code)]),
            None => MemoryStore::new(),
        });
        let translator = Translator::load(store.clone(), Language::En);
        (store, translator)
    }

    // ==========================================================================
    // Lookup
    // ==========================================================================

    #[test_case(Language::En ; "english")]
    #[test_case(Language::Zh ; "chinese")]
    #[test_case(Language::Th ; "thai")]
    fn test_shared_keys_are_non_empty(lang: Language) {
        let shared = en::EN
            .keys()
            .filter(|k| zh::ZH.contains_key(*k) && th::TH.contains_key(*k));

        for key in shared {
            let value = lookup(lang, key, None);
            assert!(!value.is_empty(), "{} is empty in {}", key, lang);
            assert_ne!(value, *key, "{} untranslated in {}", key, lang);
        }
    }

    #[test]
    fn test_dictionaries_cover_same_keys() {
        for key in en::EN.keys() {
            assert!(zh::ZH.contains_key(key), "zh is missing {}", key);
            assert!(th::TH.contains_key(key), "th is missing {}", key);
        }
        assert_eq!(en::EN.len(), zh::ZH.len());
        assert_eq!(en::EN.len(), th::TH.len());
    }

    #[test_case(Language::En ; "english")]
    #[test_case(Language::Zh ; "chinese")]
    #[test_case(Language::Th ; "thai")]
    fn test_unknown_key_falls_back(lang: Language) {
        assert_eq!(lookup(lang, "no.such.key", Some("Fallback")), "Fallback");
        assert_eq!(lookup(lang, "no.such.key", Some("")), "no.such.key");
        assert_eq!(lookup(lang, "no.such.key", None), "no.such.key");
    }

    #[test]
    fn test_known_key_wins_over_fallback() {
        assert_eq!(lookup(Language::Zh, "cart.title", Some("Shopping Cart")), "购物车");
    }

    // ==========================================================================
    // Language state
    // ==========================================================================

    #[test_case(None, Language::En ; "nothing stored")]
    #[test_case(Some("th"), Language::Th ; "stored thai")]
    #[test_case(Some("fr"), Language::En ; "unknown code")]
    #[test_case(Some("ZH"), Language::En ; "codes are case sensitive")]
    fn test_load_language(stored: Option<&str>, expected: Language) {
        let (_, translator) = create_test_translator(stored);
        assert_eq!(translator.lang(), expected);
    }

    #[test]
    fn test_change_lang_cycles_and_persists() {
        let (store, translator) = create_test_translator(None);

        assert_eq!(translator.change_lang(None).unwrap(), Language::Zh);
        assert_eq!(translator.change_lang(None).unwrap(), Language::Th);
        assert_eq!(translator.change_lang(None).unwrap(), Language::En);
        assert_eq!(store.get(keys::LANGUAGE).unwrap().as_deref(), Some("en"));
    }

    #[test]
    fn test_change_lang_explicit_target() {
        let (store, translator) = create_test_translator(Some("zh"));

        assert_eq!(translator.change_lang(Some(Language::Th)).unwrap(), Language::Th);
        assert_eq!(translator.t("cart.title", None), "ตะกร้าสินค้า");
        assert_eq!(store.get(keys::LANGUAGE).unwrap().as_deref(), Some("th"));
    }

    #[test]
    fn test_override_is_not_persisted() {
        let (store, translator) = create_test_translator(Some("zh"));

        translator.override_lang(Language::En);

        assert_eq!(translator.lang(), Language::En);
        assert_eq!(store.get(keys::LANGUAGE).unwrap().as_deref(), Some("zh"));
    }
}
