//! Platform-independent state machines behind the site navigation bar.

pub mod config;
pub mod contact;
pub mod language;
pub mod layout;
pub mod menu;
pub mod navigation;
pub mod scheduler;
pub mod scroll;
pub mod subscription;

pub use config::{ConfigError, NavConfig, NavLink, PhoneContact, SocialLink};
pub use contact::ContactModal;
pub use language::{Language, LanguageError, LanguageToggle, LocaleStore, LocalizationStore};
pub use layout::{Layer, NavVariant};
pub use menu::{MenuController, MenuState, DEFAULT_SETTLE_DELAY};
pub use navigation::{NavEvent, Navigation};
pub use scheduler::Scheduler;
pub use scroll::{ScrollDirection, ScrollDirectionTracker, ScrollSample};
pub use subscription::Subscription;
