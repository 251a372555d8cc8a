use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::subscription::Subscription;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ge")]
    Georgian,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Georgian];

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Georgian => "ge",
        }
    }

    /// Short label shown on the toggle button.
    pub fn label(&self) -> &'static str {
        match self {
            Language::English => "ENG",
            Language::Georgian => "GEO",
        }
    }

    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Georgian => "ქართული",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Language::English => Language::Georgian,
            Language::Georgian => Language::English,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageError {
    #[error("unsupported language code: {0}")]
    Unsupported(String),
}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Language::English),
            "ge" | "ka" => Ok(Language::Georgian),
            other => Err(LanguageError::Unsupported(other.to_string())),
        }
    }
}

/// Process-wide holder of the active language.
///
/// Listeners are notified after every change, including changes made by
/// parties other than the navigation bar.
pub trait LocalizationStore {
    fn current_language(&self) -> Language;

    fn set_language(&self, language: Language);

    fn subscribe(&self, listener: Rc<dyn Fn(Language)>) -> Subscription;
}

type Listener = Rc<dyn Fn(Language)>;

struct StoreInner {
    language: Language,
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// In-process [`LocalizationStore`]. Clones share the same state.
#[derive(Clone)]
pub struct LocaleStore {
    inner: Rc<RefCell<StoreInner>>,
}

impl LocaleStore {
    pub fn new(language: Language) -> Self {
        Self {
            inner: Rc::new(RefCell::new(StoreInner {
                language,
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl Default for LocaleStore {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl LocalizationStore for LocaleStore {
    fn current_language(&self) -> Language {
        self.inner.borrow().language
    }

    fn set_language(&self, language: Language) {
        let listeners: Vec<Listener> = {
            let mut inner = self.inner.borrow_mut();
            if inner.language == language {
                return;
            }
            inner.language = language;
            inner.listeners.iter().map(|(_, l)| l.clone()).collect()
        };

        log::info!("language changed to {}", language);
        for listener in listeners {
            listener(language);
        }
    }

    fn subscribe(&self, listener: Rc<dyn Fn(Language)>) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, listener));
            id
        };

        let inner = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
            }
        })
    }
}

/// Two-state language switch bound to a [`LocalizationStore`].
///
/// The displayed value is a projection of the store, refreshed on every
/// store notification, never an independent copy.
pub struct LanguageToggle<L: LocalizationStore> {
    store: L,
    view: Rc<Cell<Language>>,
    _subscription: Subscription,
}

impl<L: LocalizationStore> LanguageToggle<L> {
    pub fn new(store: L, on_change: impl Fn(Language) + 'static) -> Self {
        let view = Rc::new(Cell::new(store.current_language()));
        let projection = view.clone();
        let subscription = store.subscribe(Rc::new(move |language: Language| {
            projection.set(language);
            on_change(language);
        }));

        Self {
            store,
            view,
            _subscription: subscription,
        }
    }

    pub fn current(&self) -> Language {
        self.view.get()
    }

    pub fn label(&self) -> &'static str {
        self.current().label()
    }

    /// Switch the store to the other language and return it.
    pub fn toggle(&self) -> Language {
        let next = self.store.current_language().toggled();
        self.store.set_language(next);
        // Stores may defer notifications; the write is still visible here.
        self.view.set(self.store.current_language());
        self.current()
    }
}
