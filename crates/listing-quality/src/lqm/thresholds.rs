use serde::{Deserialize, Serialize};

/// Numeric bounds the rule catalog compares against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub min_general_description_chars: usize,
    pub min_nature_description_chars: usize,
    /// Preferred description length quoted in recommendations.
    pub preferred_description_chars: usize,
    /// General text must be longer than this before an identical-text check applies.
    pub identical_text_min_chars: usize,
    pub capslock_word_min_len: usize,
    pub capslock_max_words: usize,
    pub photo_count_min: u32,
    pub photo_count_max: u32,
    pub min_photo_width: u32,
    pub min_photo_height: u32,
    /// A CTR at or below this value means no tracking data.
    pub ctr_no_data: f64,
    pub ctr_poor: f64,
    /// Ratings are judged only with more reviews than this.
    pub min_reviews_for_rating: u32,
    pub rating_threshold_ten_scale: f64,
    pub rating_threshold_five_scale: f64,
    pub ical_bonus_cap: i32,
    pub recent_update_months: u32,
    pub stale_update_months: u32,
    pub max_accommodation_types: usize,
    pub baby_facilities_mismatch: u32,
    pub overwhelming_house_themes: u32,
    /// Quiet hours ending in this hour range are probably swapped with their start.
    pub swapped_silence_end_hours: (u32, u32),
}

impl Thresholds {
    pub fn standard() -> Self {
        Self {
            min_general_description_chars: 275,
            min_nature_description_chars: 200,
            preferred_description_chars: 550,
            identical_text_min_chars: 75,
            capslock_word_min_len: 8,
            capslock_max_words: 2,
            photo_count_min: 11,
            photo_count_max: 50,
            min_photo_width: 600,
            min_photo_height: 400,
            ctr_no_data: 0.0001,
            ctr_poor: 0.003,
            min_reviews_for_rating: 3,
            rating_threshold_ten_scale: 8.0,
            rating_threshold_five_scale: 4.0,
            ical_bonus_cap: 8,
            recent_update_months: 6,
            stale_update_months: 12,
            max_accommodation_types: 2,
            baby_facilities_mismatch: 2,
            overwhelming_house_themes: 6,
            swapped_silence_end_hours: (12, 22),
        }
    }

    /// Rating a listing must reach on the given scale, if the scale is recognised.
    pub fn rating_threshold(&self, scale_max: u8) -> Option<f64> {
        match scale_max {
            10 => Some(self.rating_threshold_ten_scale),
            5 => Some(self.rating_threshold_five_scale),
            _ => None,
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::standard()
    }
}
