use serde::{Deserialize, Serialize};

/// Attributes harvested from a listing page. Every field is independently optional:
/// `None` means the value is unknown, which is never the same as `false` or `0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingData {
    // Description
    pub general_description: Option<String>,
    pub nature_description: Option<String>,
    pub days_since_last_update: Option<u32>,

    // Impact
    pub sustainability_impact_level_leaves: Option<u8>,

    // Location
    pub postcode: Option<String>,
    pub place: Option<String>,
    pub country: Option<String>,

    // Availability
    pub allow_instant_booking: Option<bool>,
    pub channel_manager_type: Option<String>,
    pub nr_icals_error: Option<u32>,
    pub nr_icals_total: Option<u32>,
    pub fully_blocked: Option<bool>,
    pub fully_nonbookable: Option<bool>,
    pub fully_available: Option<bool>,
    pub only_weeks_possible: Option<bool>,
    pub only_other_stays_possible: Option<bool>,
    pub has_short_stay_types: Option<bool>,
    pub years_platform: Option<f64>,
    pub months_updated_priceplan: Option<u32>,
    pub months_last_update_blocks: Option<u32>,
    pub months_updated: Option<u32>,

    // Photos
    pub photo_count: Option<u32>,
    /// Click-through rate as a fraction (0.02 means 2%).
    pub ctr: Option<f64>,
    /// Alt-text heuristic on the cover photo.
    pub cover_photo_suggests_nature: Option<bool>,
    /// Alt-text heuristic: first photo shows the house rather than an interior.
    pub first_photo_house_not_interior: Option<bool>,
    pub first_photo_width: Option<u32>,
    pub first_photo_height: Option<u32>,
    /// Image-analysis verdicts on the first photo.
    pub vision_is_exterior: Option<bool>,
    pub vision_has_watermark: Option<bool>,
    pub vision_is_collage: Option<bool>,

    // Guest opinion
    pub nr_reviews: Option<u32>,
    pub nr_reviews_past6months: Option<u32>,
    pub average_rating: Option<f64>,
    /// Maximum of the rating scale, 5 or 10.
    pub rating_scale_max: Option<u8>,

    // Filters
    pub max_babies: Option<u32>,
    pub baby_facilities_count: Option<u32>,
    pub max_animals: Option<u32>,
    pub has_pet_related_features: Option<bool>,
    pub total_house_attributes: Option<u32>,
    /// Comma separated, e.g. "villa, bungalow".
    pub accommodation_type_string: Option<String>,
    pub allow_fireworks: Option<bool>,
    pub allow_groups: Option<bool>,
    pub allow_smoking: Option<bool>,
    pub allow_parties: Option<bool>,
    pub number_of_bedrooms: Option<u32>,
    pub max_persons: Option<u32>,
    pub nr_house_themes: Option<u32>,
    pub theme_coastal: Option<bool>,
    pub region_inland: Option<bool>,

    // Time settings
    /// Raw arrival/departure moments, e.g. `["14:00:00", "10:00:00"]`.
    pub arrival_departure_times: Option<Vec<String>>,
    pub silence_start: Option<String>,
    pub silence_end: Option<String>,
}

impl ListingData {
    /// True when any field read by the point-scoring categories is known. Advisory inputs
    /// and the channel manager type do not count, so they never switch the absence
    /// penalties on.
    pub fn has_scored_inputs(&self) -> bool {
        let scored = Self {
            general_description: None,
            nature_description: None,
            days_since_last_update: None,
            channel_manager_type: None,
            photo_count: None,
            ctr: None,
            cover_photo_suggests_nature: None,
            first_photo_house_not_interior: None,
            first_photo_width: None,
            first_photo_height: None,
            vision_is_exterior: None,
            vision_has_watermark: None,
            vision_is_collage: None,
            nr_reviews: None,
            nr_reviews_past6months: None,
            average_rating: None,
            rating_scale_max: None,
            ..self.clone()
        };
        scored != Self::default()
    }

    /// Exterior-vs-interior verdict for the first photo. An image-analysis verdict wins
    /// over the alt-text heuristic when both are known.
    pub fn first_photo_exterior(&self) -> Option<(bool, VerdictSource)> {
        match (self.vision_is_exterior, self.first_photo_house_not_interior) {
            (Some(verdict), _) => Some((verdict, VerdictSource::ImageAnalysis)),
            (None, Some(verdict)) => Some((verdict, VerdictSource::AltText)),
            (None, None) => None,
        }
    }

    pub fn channel_manager(&self) -> ChannelManager {
        ChannelManager::classify(self.channel_manager_type.as_deref())
    }
}

/// Where a derived photo verdict came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictSource {
    ImageAnalysis,
    AltText,
}

impl VerdictSource {
    pub const fn label(self) -> &'static str {
        match self {
            Self::ImageAnalysis => "beeldanalyse",
            Self::AltText => "alt-tekst",
        }
    }
}

/// Channel-manager integrations with special meaning for availability rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelManager {
    Unknown,
    OpenGds,
    Smoobu,
    Other,
}

impl ChannelManager {
    pub fn classify(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None => Self::Unknown,
            Some(value) if value.eq_ignore_ascii_case("OPENGDS") => Self::OpenGds,
            Some(value) if value.eq_ignore_ascii_case("SMOOBU") => Self::Smoobu,
            Some(_) => Self::Other,
        }
    }

    /// Availability is managed externally through the GDS integration.
    pub const fn manages_availability(self) -> bool {
        matches!(self, Self::OpenGds)
    }

    /// Calendar feeds are synchronised by the integration, so feed errors are not ours to judge.
    pub const fn manages_calendar_feeds(self) -> bool {
        matches!(self, Self::OpenGds | Self::Smoobu)
    }
}

/// The eight fixed groupings of the rule catalog, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Description,
    Impact,
    Location,
    Availability,
    Photos,
    #[serde(rename = "Guest Opinion")]
    GuestOpinion,
    Filters,
    #[serde(rename = "Time Settings")]
    TimeSettings,
}

impl Category {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Description,
            Self::Impact,
            Self::Location,
            Self::Availability,
            Self::Photos,
            Self::GuestOpinion,
            Self::Filters,
            Self::TimeSettings,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Description => "Description",
            Self::Impact => "Impact",
            Self::Location => "Location",
            Self::Availability => "Availability",
            Self::Photos => "Photos",
            Self::GuestOpinion => "Guest Opinion",
            Self::Filters => "Filters",
            Self::TimeSettings => "Time Settings",
        }
    }

    /// Advisory categories yield verdicts and recommendations instead of points.
    pub const fn is_advisory(self) -> bool {
        matches!(self, Self::Description | Self::Photos | Self::GuestOpinion)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreKind {
    Bonus,
    Malus,
    Advisory,
}

impl ScoreKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bonus => "bonus",
            Self::Malus => "malus",
            Self::Advisory => "advisory",
        }
    }
}

/// One evaluated rule. Only the engine creates items; callers read them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreItem {
    attribute: &'static str,
    category: Category,
    score: i32,
    #[serde(rename = "type")]
    kind: ScoreKind,
    reason: String,
    not_applicable: bool,
    passed: Option<bool>,
    recommendation: Option<String>,
}

impl ScoreItem {
    pub(crate) fn not_applicable(
        attribute: &'static str,
        category: Category,
        kind: ScoreKind,
        reason: String,
    ) -> Self {
        Self {
            attribute,
            category,
            score: 0,
            kind,
            reason,
            not_applicable: true,
            passed: None,
            recommendation: None,
        }
    }

    pub(crate) fn points(
        attribute: &'static str,
        category: Category,
        kind: ScoreKind,
        score: i32,
        reason: String,
    ) -> Self {
        let score = match kind {
            ScoreKind::Bonus => score.max(0),
            ScoreKind::Malus => score.min(0),
            ScoreKind::Advisory => 0,
        };
        Self {
            attribute,
            category,
            score,
            kind,
            reason,
            not_applicable: false,
            passed: None,
            recommendation: None,
        }
    }

    pub(crate) fn verdict(
        attribute: &'static str,
        category: Category,
        passed: bool,
        reason: String,
        recommendation: Option<String>,
    ) -> Self {
        Self {
            attribute,
            category,
            score: 0,
            kind: ScoreKind::Advisory,
            reason,
            not_applicable: false,
            passed: Some(passed),
            recommendation: if passed { None } else { recommendation },
        }
    }

    pub fn attribute(&self) -> &'static str {
        self.attribute
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn kind(&self) -> ScoreKind {
        self.kind
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn is_not_applicable(&self) -> bool {
        self.not_applicable
    }

    pub fn passed(&self) -> Option<bool> {
        self.passed
    }

    pub fn recommendation(&self) -> Option<&str> {
        self.recommendation.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scored_inputs_ignore_advisory_fields_and_channel_manager() {
        assert!(!ListingData::default().has_scored_inputs());

        let advisory_only = ListingData {
            general_description: Some("Ruim vakantiehuis.".to_string()),
            photo_count: Some(12),
            nr_reviews: Some(4),
            average_rating: Some(8.5),
            rating_scale_max: Some(10),
            channel_manager_type: Some("OpenGDS".to_string()),
            ..ListingData::default()
        };
        assert!(!advisory_only.has_scored_inputs());

        let data = ListingData {
            allow_fireworks: Some(false),
            ..ListingData::default()
        };
        assert!(data.has_scored_inputs());
    }

    #[test]
    fn image_analysis_verdict_wins_over_alt_text() {
        let data = ListingData {
            vision_is_exterior: Some(false),
            first_photo_house_not_interior: Some(true),
            ..ListingData::default()
        };
        assert_eq!(
            data.first_photo_exterior(),
            Some((false, VerdictSource::ImageAnalysis))
        );

        let heuristic_only = ListingData {
            first_photo_house_not_interior: Some(true),
            ..ListingData::default()
        };
        assert_eq!(
            heuristic_only.first_photo_exterior(),
            Some((true, VerdictSource::AltText))
        );
    }

    #[test]
    fn channel_manager_is_case_insensitive() {
        assert_eq!(ChannelManager::classify(Some("openGDS")), ChannelManager::OpenGds);
        assert_eq!(ChannelManager::classify(Some(" Smoobu ")), ChannelManager::Smoobu);
        assert_eq!(ChannelManager::classify(Some("Lodgify")), ChannelManager::Other);
        assert_eq!(ChannelManager::classify(None), ChannelManager::Unknown);
    }

    #[test]
    fn points_are_clamped_to_their_kind() {
        let bonus = ScoreItem::points("b", Category::Impact, ScoreKind::Bonus, -4, String::new());
        let malus = ScoreItem::points("m", Category::Impact, ScoreKind::Malus, 4, String::new());
        assert_eq!(bonus.score(), 0);
        assert_eq!(malus.score(), 0);
    }

    #[test]
    fn passing_verdict_drops_recommendation() {
        let item = ScoreItem::verdict(
            "v",
            Category::Photos,
            true,
            "ok".to_string(),
            Some("unused".to_string()),
        );
        assert_eq!(item.passed(), Some(true));
        assert!(item.recommendation().is_none());
    }
}
