use askama::Template;
use crate::config::DisplaySettings;
use crate::error::Result;
use crate::models::Vendor;
use crate::render::stars;

const NOT_AVAILABLE: &str = "N/A";
const NO_ADDRESS: &str = "Not provided";
const NO_RATING: &str = "No rating yet";

/// Markup for one vendor card. Every field is HTML-escaped by the template;
/// path segments are percent-encoded before they reach it.
#[derive(Template)]
#[template(path = "vendor_card.html")]
struct VendorCardTemplate<'a> {
    uploads_path: &'a str,
    photo: String,
    name: &'a str,
    phone: &'a str,
    phone_segment: String,
    phone_prefix: &'a str,
    top_rated: bool,
    city: &'a str,
    category: &'a str,
    rating: String,
    address: String,
}

/// `"⭐⭐⭐⭐✩ (4.5/5, 12 reviews)"`, or the unrated marker.
pub fn rating_line(vendor: &Vendor) -> String {
    match vendor.rating() {
        Some(rating) => format!(
            "{} ({}/5, {} reviews)",
            stars(rating),
            rating,
            vendor.review_count
        ),
        None => NO_RATING.to_string(),
    }
}

pub fn render_card(vendor: &Vendor, display: &DisplaySettings) -> Result<String> {
    let photo = vendor
        .primary_photo()
        .unwrap_or(display.default_photo.as_str());
    let address = vendor.address();

    let card = VendorCardTemplate {
        uploads_path: display.uploads_path.trim_end_matches('/'),
        photo: urlencoding::encode(photo).into_owned(),
        name: vendor.business_name.as_deref().unwrap_or_default(),
        phone: &vendor.phone,
        phone_segment: urlencoding::encode(&vendor.phone).into_owned(),
        phone_prefix: &display.phone_prefix,
        top_rated: vendor.is_top_rated(),
        city: vendor.city.as_deref().unwrap_or(NOT_AVAILABLE),
        category: vendor.category.as_deref().unwrap_or(NOT_AVAILABLE),
        rating: rating_line(vendor),
        address: if address.is_empty() {
            NO_ADDRESS.to_string()
        } else {
            address
        },
    };

    Ok(card.render()?)
}
