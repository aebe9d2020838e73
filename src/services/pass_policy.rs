//! Pass thresholds per exam category.
//!
//! Two tiers only. A category gets the lower tier when its name contains one
//! of [`LOWER_TIER_FRAGMENTS`] (case-insensitive); everything else, unknown
//! names included, needs [`DEFAULT_THRESHOLD`].

pub const LOWER_TIER_THRESHOLD: f64 = 50.0;
pub const DEFAULT_THRESHOLD: f64 = 75.0;

/// Lowercase name fragments of categories that pass at 50%.
pub const LOWER_TIER_FRAGMENTS: &[&str] = &["trainee", "pursuit", "погон", "swat"];

pub fn passing_threshold(category_name: &str) -> f64 {
    let name = category_name.to_lowercase();
    if LOWER_TIER_FRAGMENTS
        .iter()
        .any(|fragment| name.contains(fragment))
    {
        LOWER_TIER_THRESHOLD
    } else {
        DEFAULT_THRESHOLD
    }
}

pub fn is_passed(percentage: f64, category_name: &str) -> bool {
    percentage >= passing_threshold(category_name)
}
