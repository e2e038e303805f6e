use crate::models::Vendor;

/// Vendors rated below this are hidden; unrated vendors are always shown.
pub const MIN_LISTED_RATING: f64 = 4.0;

/// Drops low-rated vendors and orders the rest best-first.
///
/// Unrated vendors sort as 0. The sort is stable, so equal ratings keep the
/// backend's order.
pub fn filter_and_sort(vendors: Vec<Vendor>) -> Vec<Vendor> {
    let mut listed: Vec<Vendor> = vendors
        .into_iter()
        .filter(|vendor| vendor.rating().is_none_or(|r| r >= MIN_LISTED_RATING))
        .collect();

    listed.sort_by(|a, b| b.sort_key().total_cmp(&a.sort_key()));
    listed
}
