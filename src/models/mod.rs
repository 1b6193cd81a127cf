pub mod analysis;
pub mod card;
pub mod preferences;

pub use analysis::{
    AnalysisRecord, AnalysisResult, Overview, Ratings, Recommendation, Review, Sentiment, Verdict,
};
pub use card::{ReviewCard, VerdictTone};
pub use preferences::{
    industry_options_for, is_supported_location, platform_options_for, PreferenceChange,
    PreferenceModel, RuntimeBucket, COUNTRIES, MOODS,
};
