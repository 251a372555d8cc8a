pub mod contact_modal;
pub mod desktop_nav;
pub mod language_toggle;
pub mod nav_links;
pub mod responsive_nav;
pub mod site_nav;
