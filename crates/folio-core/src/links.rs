//! Project card data and outbound link construction.

use crate::constants::CARD_REVEAL_STEP_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Cyan,
    Magenta,
    Purple,
}

#[derive(Clone, Debug)]
pub struct ProjectLink {
    pub title: String,
    pub url: String,
    pub description: String,
    pub accent: Accent,
    pub index: usize,
}

/// Strip a leading scheme for display. This is a plain prefix strip with no
/// validation or fallback; anything without a scheme passes through.
pub fn display_domain(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}

/// Outbound href: always https, built from the displayed domain.
pub fn href(url: &str) -> String {
    format!("https://{}", display_domain(url))
}

/// Entrance animation delay for card `index`.
pub fn reveal_delay_ms(index: usize) -> u32 {
    index as u32 * CARD_REVEAL_STEP_MS
}

impl ProjectLink {
    pub fn display_domain(&self) -> &str {
        display_domain(&self.url)
    }

    pub fn href(&self) -> String {
        href(&self.url)
    }

    pub fn reveal_delay_ms(&self) -> u32 {
        reveal_delay_ms(self.index)
    }
}
