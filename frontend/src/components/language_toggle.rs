use leptos::*;

use crate::components::site_nav::use_nav;

/// ENG/GEO switch. The label is driven by the localization store's
/// notifications, so it also follows changes made elsewhere.
#[component]
pub fn LanguageToggle() -> impl IntoView {
    let nav = use_nav();

    view! {
        <button
            class="btn btn-outline-primary language-toggle"
            title=move || nav.language.get().toggled().native_name()
            on:click=move |_| nav.toggle_language()
        >
            {move || nav.language.get().label()}
        </button>
    }
}
