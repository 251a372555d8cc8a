use leptos::*;
use navigation::{Layer, NavConfig};

use crate::components::language_toggle::LanguageToggle;
use crate::components::nav_links::NavLinks;
use crate::components::site_nav::use_nav;
use crate::i18n::use_i18n;
use crate::platform;

/// Compact bar: logo, phone button and a hamburger that opens the slide-out
/// menu. The menu is only mounted while open.
#[component]
pub fn ResponsiveNav() -> impl IntoView {
    let nav = use_nav();
    let i18n_stored = store_value(use_i18n());
    let NavConfig { logo_src, links, .. } = nav.config();
    let menu_style = format!("z-index: {};", Layer::SlideOutMenu.z_index());

    let on_logo = move |_| {
        nav.close_menu();
        platform::scroll_to_top();
    };

    view! {
        <nav class="navbar navbar-compact" class:navbar-hidden=move || nav.direction.get().hides_bar() style=move || nav.bar_style()>
            <a href="/" class="navbar-brand" on:click=on_logo>
                <img class="nav-icon" src=logo_src alt="nav-icon" />
            </a>

            <ul class="nav-actions">
                <li>
                    <button
                        class="nav-phone"
                        aria-label=move || i18n_stored.get_value().t("nav.call_us")
                        on:click=move |_| nav.open_contact()
                    >
                        <img src="./icons/phone-icon.png" alt="" />
                    </button>
                </li>
                <li>
                    <button
                        class="nav-toggler"
                        class:rotated=move || nav.menu.get().is_rotated
                        aria-expanded=move || nav.menu.get().is_open.to_string()
                        aria-label=move || i18n_stored.get_value().t(nav.menu.get().toggle_label_key())
                        on:click=move |_| nav.toggle_menu()
                    >
                        {move || nav.menu.get().glyph()}
                    </button>
                </li>
            </ul>

            <Show when=move || nav.menu.get().is_open fallback=|| ()>
                <div class="nav-items" style=menu_style.clone()>
                    <NavLinks links=links.clone() />
                    <LanguageToggle />
                </div>
            </Show>
        </nav>
    }
}
