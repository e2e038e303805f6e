//! HTML fragments written into the listing area.

mod card;
mod stars;

use crate::config::DisplaySettings;
use crate::error::Result;
use crate::models::Vendor;

pub use card::{rating_line, render_card};
pub use stars::stars;

pub const LOADING_HTML: &str = r#"<div class="text-center py-4">
  <div class="spinner-border text-primary" role="status">
    <span class="visually-hidden">Loading...</span>
  </div>
</div>"#;

pub const EMPTY_HTML: &str = r#"<p class="text-muted text-center">No vendors found.</p>"#;

pub const FAILED_HTML: &str = r#"<p class="text-danger text-center">Failed to load vendor list.</p>"#;

/// Cards for `vendors` in the given order, or the empty-result message.
pub fn render_listing(vendors: &[Vendor], display: &DisplaySettings) -> Result<String> {
    if vendors.is_empty() {
        return Ok(EMPTY_HTML.to_string());
    }

    let cards = vendors
        .iter()
        .map(|vendor| render_card(vendor, display))
        .collect::<Result<Vec<_>>>()?;

    Ok(cards.join(""))
}
