use leptos::*;
use navigation::Layer;

use crate::components::site_nav::use_nav;
use crate::i18n::use_i18n;

/// "Call us" overlay. Only the close button dismisses it; the backdrop does
/// not react to clicks.
#[component]
pub fn ContactModal() -> impl IntoView {
    let nav = use_nav();
    let i18n_stored = store_value(use_i18n());
    let phone = nav.config().phone;
    let tel_href = phone.tel_href();
    let display = phone.display;

    let backdrop_style = format!("z-index: {};", Layer::ContactBackdrop.z_index());
    let dialog_style = format!("z-index: {};", Layer::ContactDialog.z_index());

    view! {
        <Show when=move || nav.contact_visible.get() fallback=|| ()>
            <div class="modal-backdrop contact-backdrop" style=backdrop_style.clone()>
                <div
                    class="modal contact-modal"
                    role="dialog"
                    aria-modal="true"
                    style=dialog_style.clone()
                >
                    <a class="contact-phone" href=tel_href.clone()>{display.clone()}</a>
                    <button class="btn btn-danger" on:click=move |_| nav.close_contact()>
                        {move || i18n_stored.get_value().t("contact.close")}
                    </button>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_contact_layers_above_navigation() {
        assert!(Layer::ContactBackdrop > Layer::SlideOutMenu);
        assert!(Layer::ContactDialog > Layer::ContactBackdrop);
    }
}
