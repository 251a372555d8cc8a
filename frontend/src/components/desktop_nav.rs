use leptos::*;
use navigation::NavConfig;

use crate::components::language_toggle::LanguageToggle;
use crate::components::nav_links::NavLinks;
use crate::components::site_nav::use_nav;
use crate::i18n::use_i18n;
use crate::platform;

/// Full-width bar with inline links, social links, phone button and the
/// language switch.
#[component]
pub fn DesktopNav() -> impl IntoView {
    let nav = use_nav();
    let i18n_stored = store_value(use_i18n());
    let NavConfig {
        logo_src,
        links,
        social,
        ..
    } = nav.config();

    view! {
        <nav class="navbar navbar-full" class:navbar-hidden=move || nav.direction.get().hides_bar() style=move || nav.bar_style()>
            <div class="nav-group">
                <a href="/" class="navbar-brand" on:click=|_| platform::scroll_to_top()>
                    <img class="nav-icon nav-icon-large" src=logo_src alt="nav-icon" />
                </a>
                <NavLinks links=links />
            </div>

            <ul class="nav-social">
                {social.into_iter().map(|social| {
                    view! {
                        <li>
                            <a href=social.url aria-label=social.name target="_blank" rel="noopener noreferrer">
                                <i class=social.icon_class></i>
                            </a>
                        </li>
                    }
                }).collect_view()}
                <li>
                    <button
                        class="nav-phone"
                        aria-label=move || i18n_stored.get_value().t("nav.call_us")
                        on:click=move |_| nav.open_contact()
                    >
                        <img src="./icons/phone-icon.png" alt="modal-toggle" />
                    </button>
                </li>
                <li>
                    <LanguageToggle />
                </li>
            </ul>
        </nav>
    }
}
