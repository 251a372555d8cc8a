use std::rc::Rc;

use leptos::*;
use navigation::{
    Language, Layer, LocalizationStore, MenuState, NavConfig, NavEvent, NavLink, NavVariant,
    Navigation, ScrollDirection,
};

use crate::components::contact_modal::ContactModal;
use crate::components::desktop_nav::DesktopNav;
use crate::components::responsive_nav::ResponsiveNav;
use crate::i18n::{use_i18n, I18nContext};
use crate::platform::{self, TimeoutScheduler};

type SiteNavigation = Navigation<TimeoutScheduler, I18nContext>;

/// Handle to the mounted navigation controller and the signals it drives.
///
/// The controller is reached through a stored value, so calls made after
/// the navigation has been unmounted are silently ignored.
#[derive(Clone, Copy)]
pub struct NavContext {
    controller: StoredValue<Rc<SiteNavigation>>,
    config: StoredValue<NavConfig>,
    pub direction: RwSignal<ScrollDirection>,
    pub menu: RwSignal<MenuState>,
    pub contact_visible: RwSignal<bool>,
    pub language: RwSignal<Language>,
    pub variant: RwSignal<NavVariant>,
}

impl NavContext {
    pub fn new(config: NavConfig, i18n: I18nContext) -> Self {
        let direction = create_rw_signal(ScrollDirection::default());
        let menu = create_rw_signal(MenuState::default());
        let contact_visible = create_rw_signal(false);
        let language = create_rw_signal(i18n.current_language());
        let variant = create_rw_signal(NavVariant::for_viewport(
            platform::viewport_width(),
            config.breakpoint_px,
        ));

        let controller =
            Navigation::new(&config, TimeoutScheduler, i18n, move |event| match event {
                NavEvent::Scrolled(next) => direction.set(next),
                NavEvent::Menu(next) => menu.set(next),
                NavEvent::Contact(visible) => contact_visible.set(visible),
                NavEvent::Language(next) => language.set(next),
            });

        Self {
            controller: store_value(Rc::new(controller)),
            config: store_value(config),
            direction,
            menu,
            contact_visible,
            language,
            variant,
        }
    }

    fn with_nav<R>(&self, f: impl FnOnce(&SiteNavigation) -> R) -> Option<R> {
        // Clone the Rc out first; handlers may unmount views that own stored values.
        self.controller.try_get_value().map(|nav| f(&nav))
    }

    pub fn config(&self) -> NavConfig {
        self.config.get_value()
    }

    pub fn toggle_menu(&self) {
        self.with_nav(|nav| nav.toggle_menu());
    }

    pub fn close_menu(&self) {
        self.with_nav(|nav| nav.close_menu());
    }

    pub fn follow_link(&self, link: &NavLink) {
        self.with_nav(|nav| {
            nav.follow_link(link);
        });
    }

    pub fn open_contact(&self) {
        self.with_nav(|nav| nav.open_contact());
    }

    pub fn close_contact(&self) {
        self.with_nav(|nav| nav.close_contact());
    }

    pub fn toggle_language(&self) {
        self.with_nav(|nav| nav.toggle_language());
    }

    fn on_scroll(&self) {
        self.with_nav(|nav| nav.on_scroll(platform::scroll_offset()));
    }

    fn on_resize(&self) {
        let breakpoint = self.config.with_value(|c| c.breakpoint_px);
        let next = NavVariant::for_viewport(platform::viewport_width(), breakpoint);
        if self.variant.get_untracked() != next {
            log::debug!("switching navigation variant to {:?}", next);
            // The other rendering starts from a closed menu.
            self.close_menu();
            self.variant.set(next);
        }
    }

    /// Inline style for the bar: slides up while scrolling down.
    pub fn bar_style(&self) -> String {
        let hidden_offset = self.config.with_value(|c| c.hidden_offset_px);
        format!(
            "top: {}px; z-index: {};",
            self.direction.get().bar_offset_px(hidden_offset),
            Layer::NavBar.z_index()
        )
    }
}

pub fn use_nav() -> NavContext {
    expect_context::<NavContext>()
}

/// Navigation bar with its contact overlay. Picks the compact or full
/// rendering from the viewport width and switches on resize.
#[component]
pub fn SiteNav(config: NavConfig) -> impl IntoView {
    let ctx = NavContext::new(config, use_i18n());
    provide_context(ctx);
    let variant = ctx.variant;

    let scroll_listener = platform::listen_window("scroll", move || ctx.on_scroll());
    let resize_listener = platform::listen_window("resize", move || ctx.on_resize());
    on_cleanup(move || {
        drop(scroll_listener);
        drop(resize_listener);
    });

    view! {
        {move || match variant.get() {
            NavVariant::Compact => view! { <ResponsiveNav /> }.into_view(),
            NavVariant::Full => view! { <DesktopNav /> }.into_view(),
        }}
        <ContactModal />
    }
}
