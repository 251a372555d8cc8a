use leptos::*;
use leptos_router::*;
use navigation::NavLink;

use crate::components::site_nav::use_nav;
use crate::i18n::use_i18n;

/// Router links of the bar. Selecting one closes the menu in the same click
/// that starts the navigation.
#[component]
pub fn NavLinks(links: Vec<NavLink>) -> impl IntoView {
    let nav = use_nav();
    let i18n_stored = store_value(use_i18n());
    let pathname = use_location().pathname;

    view! {
        <ul class="nav-links">
            {links.into_iter().map(|link| {
                let href = link.path.clone();
                let label_key = link.label_key.clone();
                let active_link = link.clone();
                let is_active = move || active_link.matches(&pathname.get());
                view! {
                    <li class="nav-item">
                        <a
                            href=href
                            class="nav-link"
                            class:active=is_active
                            on:click=move |_| nav.follow_link(&link)
                        >
                            {move || i18n_stored.get_value().t(&label_key)}
                        </a>
                    </li>
                }
            }).collect_view()}
        </ul>
    }
}
