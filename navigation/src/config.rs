use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::menu::DEFAULT_SETTLE_DELAY;

pub const DEFAULT_BREAKPOINT_PX: u32 = 1300;
pub const DEFAULT_HIDDEN_OFFSET_PX: u32 = 120;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid navigation config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid value for {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

/// Router target shown in the bar, labelled through a translation key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label_key: String,
    pub path: String,
}

impl NavLink {
    pub fn new(label_key: &str, path: &str) -> Self {
        Self {
            label_key: label_key.to_string(),
            path: path.to_string(),
        }
    }

    /// Whether this link is the best match for the given route.
    pub fn matches(&self, route: &str) -> bool {
        if self.path == "/" {
            route == "/" || route.is_empty()
        } else {
            route == self.path || route.starts_with(&format!("{}/", self.path))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    pub icon_class: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneContact {
    /// Human readable number, e.g. "+995 595 850 777".
    pub display: String,
    /// Digits handed to the dialer.
    pub dial: String,
}

impl PhoneContact {
    pub fn tel_href(&self) -> String {
        format!("tel:{}", self.dial)
    }
}

impl Default for PhoneContact {
    fn default() -> Self {
        Self {
            display: "+995 595 850 777".to_string(),
            dial: "595850777".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub settle_delay_ms: u64,
    pub breakpoint_px: u32,
    pub hidden_offset_px: u32,
    pub logo_src: String,
    pub phone: PhoneContact,
    pub links: Vec<NavLink>,
    pub social: Vec<SocialLink>,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: DEFAULT_SETTLE_DELAY.as_millis() as u64,
            breakpoint_px: DEFAULT_BREAKPOINT_PX,
            hidden_offset_px: DEFAULT_HIDDEN_OFFSET_PX,
            logo_src: "./icons/TOTALTECH Down.png".to_string(),
            phone: PhoneContact::default(),
            links: vec![
                NavLink::new("nav.home", "/"),
                NavLink::new("nav.services", "/services"),
                NavLink::new("nav.shop", "/accessories"),
                NavLink::new("nav.contact", "/contact"),
            ],
            social: vec![
                SocialLink {
                    name: "Facebook".to_string(),
                    url: "https://www.facebook.com/profile.php?id=61566252152735".to_string(),
                    icon_class: "fab fa-facebook-f".to_string(),
                },
                SocialLink {
                    name: "Instagram".to_string(),
                    url: "https://www.instagram.com/totaltech.company".to_string(),
                    icon_class: "fab fa-instagram".to_string(),
                },
                SocialLink {
                    name: "TikTok".to_string(),
                    url: "https://www.tiktok.com/@totaltech.company".to_string(),
                    icon_class: "fab fa-tiktok".to_string(),
                },
            ],
        }
    }
}

impl NavConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: NavConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    /// The link for the given route, if any.
    pub fn active_link(&self, route: &str) -> Option<&NavLink> {
        self.links.iter().find(|link| link.matches(route))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.settle_delay_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "settle_delay_ms",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.links.is_empty() {
            return Err(ConfigError::Invalid {
                field: "links",
                reason: "at least one link is required".to_string(),
            });
        }
        if let Some(link) = self.links.iter().find(|l| !l.path.starts_with('/')) {
            return Err(ConfigError::Invalid {
                field: "links",
                reason: format!("path {:?} must start with '/'", link.path),
            });
        }
        if self.phone.dial.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "phone.dial",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
