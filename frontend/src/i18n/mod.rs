use std::collections::HashMap;
use std::rc::Rc;

use leptos::*;
use navigation::{Language, LocaleStore, LocalizationStore, Subscription};

/// Translation data loaded from JSON files
type Translations = HashMap<String, String>;

/// I18n context shared by every localized component.
///
/// The active language lives in a [`LocaleStore`]; the signals mirror it so
/// views re-render on change.
#[derive(Clone)]
pub struct I18nContext {
    store: LocaleStore,
    language: RwSignal<Language>,
    translations: RwSignal<Translations>,
    _sync: Rc<Subscription>,
}

impl I18nContext {
    /// Create a new I18nContext with the specified language
    pub fn new(language: Language) -> Self {
        let store = LocaleStore::new(language);
        let language_signal = create_rw_signal(language);
        let translations = create_rw_signal(load_translations(language.code()));

        let sync = store.subscribe(Rc::new(move |next: Language| {
            translations.set(load_translations(next.code()));
            language_signal.set(next);
        }));

        Self {
            store,
            language: language_signal,
            translations,
            _sync: Rc::new(sync),
        }
    }

    /// Translate a key to the current language
    /// Returns the key itself if translation is not found
    pub fn t(&self, key: &str) -> String {
        self.translations
            .get()
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Reactive read of the current language
    pub fn language(&self) -> Language {
        self.language.get()
    }
}

impl LocalizationStore for I18nContext {
    fn current_language(&self) -> Language {
        self.store.current_language()
    }

    fn set_language(&self, language: Language) {
        self.store.set_language(language);
    }

    fn subscribe(&self, listener: Rc<dyn Fn(Language)>) -> Subscription {
        self.store.subscribe(listener)
    }
}

/// Load translations for a language from embedded JSON
fn load_translations(code: &str) -> Translations {
    let json = match code {
        "ge" => include_str!("../../translations/ge.json"),
        _ => include_str!("../../translations/en.json"),
    };

    serde_json::from_str(json).unwrap_or_default()
}

/// Provide I18n context to the application
pub fn provide_i18n(language: Language) {
    let ctx = I18nContext::new(language);
    provide_context(ctx);
}

/// Use the I18n context from within a component
pub fn use_i18n() -> I18nContext {
    expect_context::<I18nContext>()
}
