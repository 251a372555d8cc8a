use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config::{NavConfig, NavLink};
use crate::contact::ContactModal;
use crate::language::{Language, LanguageToggle, LocalizationStore};
use crate::menu::{MenuController, MenuState};
use crate::scheduler::Scheduler;
use crate::scroll::{ScrollDirection, ScrollDirectionTracker};

/// Observable change emitted by [`Navigation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    Scrolled(ScrollDirection),
    Menu(MenuState),
    Contact(bool),
    Language(Language),
}

/// The navigation bar controller: scroll tracking, slide-out menu, contact
/// modal and language switch behind one owner.
pub struct Navigation<S: Scheduler, L: LocalizationStore> {
    scroll: RefCell<ScrollDirectionTracker>,
    menu: MenuController<S>,
    contact: Cell<ContactModal>,
    language: LanguageToggle<L>,
    hidden_offset_px: u32,
    on_change: Rc<dyn Fn(NavEvent)>,
}

impl<S: Scheduler, L: LocalizationStore> Navigation<S, L> {
    pub fn new(
        config: &NavConfig,
        scheduler: S,
        store: L,
        on_change: impl Fn(NavEvent) + 'static,
    ) -> Self {
        let on_change: Rc<dyn Fn(NavEvent)> = Rc::new(on_change);

        let menu_events = on_change.clone();
        let menu = MenuController::new(scheduler, config.settle_delay(), move |state| {
            menu_events(NavEvent::Menu(state))
        });

        let language_events = on_change.clone();
        let language = LanguageToggle::new(store, move |language| {
            language_events(NavEvent::Language(language))
        });

        Self {
            scroll: RefCell::new(ScrollDirectionTracker::new()),
            menu,
            contact: Cell::new(ContactModal::new()),
            language,
            hidden_offset_px: config.hidden_offset_px,
            on_change,
        }
    }

    pub fn direction(&self) -> ScrollDirection {
        self.scroll.borrow().direction()
    }

    pub fn menu_state(&self) -> MenuState {
        self.menu.state()
    }

    pub fn contact_visible(&self) -> bool {
        self.contact.get().is_visible()
    }

    pub fn language(&self) -> Language {
        self.language.current()
    }

    /// Vertical offset of the bar: pushed off screen while scrolling down.
    /// Independent of the menu, so an open menu can sit under a hidden bar.
    pub fn bar_offset_px(&self) -> i32 {
        self.direction().bar_offset_px(self.hidden_offset_px)
    }

    pub fn on_scroll(&self, offset: f64) -> ScrollDirection {
        let (before, after) = {
            let mut tracker = self.scroll.borrow_mut();
            let before = tracker.direction();
            (before, tracker.observe(offset))
        };
        if before != after {
            (self.on_change)(NavEvent::Scrolled(after));
        }
        after
    }

    pub fn toggle_menu(&self) -> MenuState {
        self.menu.toggle()
    }

    pub fn close_menu(&self) -> MenuState {
        self.menu.close()
    }

    /// Close the menu for a link selection and hand back the route to
    /// navigate to.
    pub fn follow_link<'a>(&self, link: &'a NavLink) -> &'a str {
        log::debug!("following nav link {}", link.path);
        self.menu.close();
        &link.path
    }

    pub fn open_contact(&self) {
        self.update_contact(ContactModal::open);
    }

    pub fn close_contact(&self) {
        self.update_contact(ContactModal::close);
    }

    pub fn toggle_language(&self) -> Language {
        self.language.toggle()
    }

    fn update_contact(&self, action: fn(&mut ContactModal) -> bool) {
        let mut modal = self.contact.get();
        if action(&mut modal) {
            self.contact.set(modal);
            log::debug!("contact modal visible={}", modal.is_visible());
            (self.on_change)(NavEvent::Contact(modal.is_visible()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::LocaleStore;
    use crate::scheduler::manual::ManualScheduler;
    use std::time::Duration;

    struct Fixture {
        scheduler: ManualScheduler,
        store: LocaleStore,
        nav: Navigation<ManualScheduler, LocaleStore>,
        events: Rc<RefCell<Vec<NavEvent>>>,
    }

    fn fixture() -> Fixture {
        let _ = env_logger::builder().is_test(true).try_init();
        let scheduler = ManualScheduler::new();
        let store = LocaleStore::new(Language::English);
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        let nav = Navigation::new(
            &NavConfig::default(),
            scheduler.clone(),
            store.clone(),
            move |event| sink.borrow_mut().push(event),
        );
        Fixture {
            scheduler,
            store,
            nav,
            events,
        }
    }

    #[test]
    fn test_scroll_hides_and_shows_bar() {
        let f = fixture();
        assert_eq!(f.nav.bar_offset_px(), 0);

        f.nav.on_scroll(50.0);
        f.nav.on_scroll(120.0);
        assert_eq!(f.nav.bar_offset_px(), -120);

        f.nav.on_scroll(90.0);
        assert_eq!(f.nav.bar_offset_px(), 0);

        assert_eq!(
            *f.events.borrow(),
            vec![
                NavEvent::Scrolled(ScrollDirection::Down),
                NavEvent::Scrolled(ScrollDirection::Up),
            ]
        );
    }

    #[test]
    fn test_hidden_bar_keeps_menu_open() {
        let f = fixture();
        f.nav.toggle_menu();
        f.nav.on_scroll(400.0);
        assert!(f.nav.direction().hides_bar());
        assert!(f.nav.menu_state().is_open);
    }

    #[test]
    fn test_toggle_then_delayed_icon_reset() {
        let f = fixture();
        let open = f.nav.toggle_menu();
        assert!(open.is_open && open.is_rotated);

        let closing = f.nav.toggle_menu();
        assert!(!closing.is_open && closing.is_rotated);

        f.scheduler.advance(Duration::from_millis(300));
        assert_eq!(f.nav.menu_state(), MenuState::default());
        assert_eq!(
            f.events.borrow().last(),
            Some(&NavEvent::Menu(MenuState::default()))
        );
    }

    #[test]
    fn test_follow_link_closes_immediately() {
        let f = fixture();
        f.nav.toggle_menu();
        let link = NavLink::new("nav.services", "/services");

        let path = f.nav.follow_link(&link);
        assert_eq!(path, "/services");
        assert_eq!(f.nav.menu_state(), MenuState::default());
        assert_eq!(f.scheduler.pending(), 0);
    }

    #[test]
    fn test_contact_independent_of_menu() {
        let f = fixture();
        f.nav.toggle_menu();
        f.nav.open_contact();
        assert!(f.nav.contact_visible());
        assert!(f.nav.menu_state().is_open);

        f.nav.close_menu();
        assert!(f.nav.contact_visible());

        f.nav.close_contact();
        assert!(!f.nav.contact_visible());
    }

    #[test]
    fn test_contact_events_only_on_change() {
        let f = fixture();
        f.nav.open_contact();
        f.nav.open_contact();
        f.nav.close_contact();
        f.nav.close_contact();
        assert_eq!(
            *f.events.borrow(),
            vec![NavEvent::Contact(true), NavEvent::Contact(false)]
        );
    }

    #[test]
    fn test_language_toggle_and_external_change() {
        let f = fixture();
        assert_eq!(f.nav.toggle_language(), Language::Georgian);
        assert_eq!(f.store.current_language(), Language::Georgian);

        f.store.set_language(Language::English);
        assert_eq!(f.nav.language(), Language::English);
        assert_eq!(
            *f.events.borrow(),
            vec![
                NavEvent::Language(Language::Georgian),
                NavEvent::Language(Language::English),
            ]
        );
    }

    #[test]
    fn test_drop_releases_timer_and_store_listener() {
        let f = fixture();
        f.nav.toggle_menu();
        f.nav.toggle_menu();
        assert_eq!(f.scheduler.pending(), 1);
        assert_eq!(f.store.listener_count(), 1);

        let Fixture {
            scheduler,
            store,
            nav,
            events,
        } = f;
        drop(nav);
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(store.listener_count(), 0);

        let seen = events.borrow().len();
        scheduler.advance(Duration::from_secs(1));
        store.set_language(Language::Georgian);
        assert_eq!(events.borrow().len(), seen);
    }
}
