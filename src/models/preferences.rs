use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Countries a user can pick as their viewing location (sorted)
pub const COUNTRIES: &[&str] = &[
    "Australia",
    "Brazil",
    "Canada",
    "China",
    "France",
    "Germany",
    "Global",
    "India",
    "Italy",
    "Japan",
    "Mexico",
    "Nigeria",
    "Russia",
    "South Korea",
    "Spain",
    "Turkey",
    "UK",
    "USA",
];

/// Mood filters offered to the user
pub const MOODS: &[&str] = &[
    ANY,
    "Light / Comedy",
    "Emotional / Drama",
    "Thriller / Mystery",
    "Family / Kids",
    "Action / High Energy",
    "Horror / Dark",
];

const ANY: &str = "Any";

/// Location that receives the regional streaming platforms
const REGIONAL_PLATFORM_COUNTRY: &str = "India";

/// How much time the viewer has
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum RuntimeBucket {
    #[default]
    Normal,
    Short,
    Long,
}

impl RuntimeBucket {
    pub const ALL: [RuntimeBucket; 3] = [Self::Normal, Self::Short, Self::Long];

    /// Label shown in the UI and embedded in the prompt
    pub fn label(&self) -> &'static str {
        match self {
            RuntimeBucket::Normal => "Normal (2-3 hrs)",
            RuntimeBucket::Short => "Short (< 90 mins)",
            RuntimeBucket::Long => "Long (> 3 hrs)",
        }
    }
}

/// Returns true if `location` is one of the selectable countries
pub fn is_supported_location(location: &str) -> bool {
    COUNTRIES.contains(&location)
}

/// Film industries to offer for a location, most specific first.
///
/// Total over every string: an empty location has no options, known countries
/// get their curated list, anything else gets a generic national fallback.
pub fn industry_options_for(location: &str) -> Vec<String> {
    let known: &[&str] = match location {
        "" => return Vec::new(),
        "India" => &[
            "Bollywood (Hindi)",
            "Tollywood (Telugu)",
            "Kollywood (Tamil)",
            "Mollywood (Malayalam)",
            "Sandalwood (Kannada)",
            "Marathi Cinema",
            "Bhojpuri Cinema",
            "Pollywood (Punjabi)",
            "Bengali Cinema",
        ],
        "USA" => &["Hollywood (California)", "Independent Cinema"],
        "South Korea" => &["Hallyu (K-Cinema)", "Independent"],
        "Nigeria" => &["Nollywood (English/Local)"],
        "Japan" => &["Anime", "J-Cinema (Japanese)"],
        "UK" => &["British Cinema", "BBC Films"],
        "France" => &["French New Wave Style", "Modern French Cinema"],
        other => {
            return vec![
                format!("{} National Cinema", other),
                "Hollywood (International)".to_string(),
                "Regional Indie".to_string(),
            ]
        }
    };

    known.iter().map(|s| s.to_string()).collect()
}

/// Streaming platforms to offer for a location
pub fn platform_options_for(location: &str) -> Vec<String> {
    let mut platforms = vec![ANY, "Netflix", "Prime Video", "Disney+"];
    if location == REGIONAL_PLATFORM_COUNTRY {
        platforms.extend(["Hotstar", "JioCinema"]);
    }
    platforms.extend(["Apple TV+", "Theatre"]);
    platforms.into_iter().map(str::to_string).collect()
}

/// A single edit to the preference panel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum PreferenceChange {
    Location(String),
    Industry(String),
    Platform(String),
    /// Free-text genre filter. The panel has no genre selector, so this is
    /// only settable over the API; it defaults to "Any" and is sent with the
    /// prompt either way.
    Genre(String),
    Mood(String),
    Time(RuntimeBucket),
}

/// Filters the user has selected in the preference panel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PreferenceModel {
    pub location: String,
    pub industry: String,
    pub platform: String,
    pub genre: String,
    pub mood: String,
    pub time: RuntimeBucket,
}

impl Default for PreferenceModel {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceModel {
    /// Creates preferences with no location and permissive defaults
    pub fn new() -> Self {
        Self {
            location: String::new(),
            industry: String::new(),
            platform: ANY.to_string(),
            genre: ANY.to_string(),
            mood: ANY.to_string(),
            time: RuntimeBucket::default(),
        }
    }

    /// An analysis may only be requested once a location is chosen
    pub fn is_ready(&self) -> bool {
        !self.location.is_empty()
    }

    /// Sets the location, clearing every field that depends on it
    pub fn set_location(&mut self, location: &str) -> AppResult<()> {
        *self = self.apply(PreferenceChange::Location(location.to_string()))?;
        Ok(())
    }

    pub fn industry_options(&self) -> Vec<String> {
        industry_options_for(&self.location)
    }

    pub fn platform_options(&self) -> Vec<String> {
        platform_options_for(&self.location)
    }

    /// Returns the preferences that result from applying `change`.
    ///
    /// `self` is left untouched; an invalid change yields `InvalidInput`.
    pub fn apply(&self, change: PreferenceChange) -> AppResult<Self> {
        let mut next = self.clone();

        match change {
            PreferenceChange::Location(location) => {
                if !is_supported_location(&location) {
                    return Err(AppError::InvalidInput(format!(
                        "Unsupported location: {}",
                        location
                    )));
                }
                next.industry.clear();
                if !platform_options_for(&location).contains(&next.platform) {
                    next.platform = ANY.to_string();
                }
                next.location = location;
            }
            PreferenceChange::Industry(industry) => {
                if !self.is_ready() {
                    return Err(AppError::InvalidInput(
                        "Please select a location first.".to_string(),
                    ));
                }
                if !self.industry_options().contains(&industry) {
                    return Err(AppError::InvalidInput(format!(
                        "Industry '{}' is not available for {}",
                        industry, self.location
                    )));
                }
                next.industry = industry;
            }
            PreferenceChange::Platform(platform) => {
                if !self.platform_options().contains(&platform) {
                    return Err(AppError::InvalidInput(format!(
                        "Unsupported platform: {}",
                        platform
                    )));
                }
                next.platform = platform;
            }
            PreferenceChange::Genre(genre) => {
                let genre = genre.trim();
                if genre.is_empty() {
                    return Err(AppError::InvalidInput("Genre cannot be empty".to_string()));
                }
                next.genre = genre.to_string();
            }
            PreferenceChange::Mood(mood) => {
                if !MOODS.contains(&mood.as_str()) {
                    return Err(AppError::InvalidInput(format!("Unsupported mood: {}", mood)));
                }
                next.mood = mood;
            }
            PreferenceChange::Time(time) => next.time = time,
        }

        Ok(next)
    }
}
