use serde::{Deserialize, Serialize};

/// Stacking order of the navigation's layered elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Layer {
    NavBar,
    SlideOutMenu,
    ContactBackdrop,
    ContactDialog,
}

impl Layer {
    pub fn z_index(&self) -> i32 {
        match self {
            Layer::NavBar => 1,
            Layer::SlideOutMenu => 2,
            Layer::ContactBackdrop => 4,
            Layer::ContactDialog => 5,
        }
    }
}

/// Which rendering of the bar fits the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavVariant {
    /// Hamburger button with a slide-out menu.
    Compact,
    /// Inline links and social icons.
    Full,
}

impl NavVariant {
    pub fn for_viewport(width: f64, breakpoint_px: u32) -> Self {
        if width <= f64::from(breakpoint_px) {
            NavVariant::Compact
        } else {
            NavVariant::Full
        }
    }

    pub fn is_compact(&self) -> bool {
        matches!(self, NavVariant::Compact)
    }
}
