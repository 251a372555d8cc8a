use leptos::*;
use leptos_router::*;
use navigation::{Language, NavConfig};

use crate::components::site_nav::SiteNav;
use crate::i18n::{provide_i18n, use_i18n};

const NAV_CONFIG: &str = include_str!("../config/nav.json");

/// Load the embedded navigation config, falling back to the built-in
/// defaults if it does not validate.
pub fn load_nav_config() -> NavConfig {
    match NavConfig::from_json(NAV_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("using default navigation config: {}", e);
            NavConfig::default()
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_i18n(Language::default());

    let config = load_nav_config();
    provide_context(config.clone());

    view! {
        <Router>
            <SiteNav config=config />
            <main class="container page-content">
                <Routes>
                    <Route path="/*any" view=SectionHeading />
                </Routes>
            </main>
        </Router>
    }
}

/// Title of the section the current route belongs to. Page bodies are
/// rendered by the catalog pages, not here.
#[component]
fn SectionHeading() -> impl IntoView {
    let i18n = use_i18n();
    let config = expect_context::<NavConfig>();
    let pathname = use_location().pathname;

    let title = move || {
        let key = config
            .active_link(&pathname.get())
            .map(|link| link.label_key.clone())
            .unwrap_or_else(|| "page.not_found".to_string());
        i18n.t(&key)
    };

    view! { <h1 class="section-title">{title}</h1> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = NavConfig::from_json(NAV_CONFIG).unwrap();
        assert_eq!(config.settle_delay_ms, 300);
        assert_eq!(config.breakpoint_px, 1300);
        assert_eq!(config.phone.tel_href(), "tel:595850777");
    }

    #[test]
    fn test_embedded_config_matches_defaults() {
        assert_eq!(load_nav_config(), NavConfig::default());
    }
}
