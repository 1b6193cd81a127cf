use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::PreferenceModel;

/// Structured movie analysis returned by the completion provider.
///
/// Field names mirror the response schema exactly, so the type round-trips
/// through the provider's JSON without renaming.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    pub overview: Overview,
    pub ratings: Ratings,
    pub review: Review,
    pub sentiment: Sentiment,
    pub verdict: Verdict,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<Recommendation>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub title: String,
    pub industry: String,
    pub genre: String,
    pub runtime: String,
    pub available_on: String,
}

/// Ratings are free-form text ("8.8/10", "~87%"), not numbers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ratings {
    pub overall: String,
    pub audience: String,
    pub critic: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub summary: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub who_watch: String,
    pub who_skip: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Sentiment {
    pub positive_themes: Vec<String>,
    pub complaints: Vec<String>,
    pub mood: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub worth: String,
    pub best_for: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub reason: String,
}

impl AnalysisResult {
    /// Recommendations, treating an absent list and an empty one alike
    pub fn recommendations(&self) -> &[Recommendation] {
        self.recommendations.as_deref().unwrap_or_default()
    }
}

/// The most recent successful analysis held by the session
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRecord {
    pub query: String,
    pub preferences: PreferenceModel,
    pub analysis: AnalysisResult,
    pub analyzed_at: DateTime<Utc>,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn inception() -> AnalysisResult {
        AnalysisResult {
            overview: Overview {
                title: "Inception".to_string(),
                industry: "Hollywood (California)".to_string(),
                genre: "Sci-Fi Thriller".to_string(),
                runtime: "2h 28m".to_string(),
                available_on: "Netflix (USA)".to_string(),
            },
            ratings: Ratings {
                overall: "8.7/10".to_string(),
                audience: "91%".to_string(),
                critic: "87%".to_string(),
            },
            review: Review {
                summary: "A layered heist through dreams.".to_string(),
                strengths: vec!["Visual effects".to_string(), "Score".to_string()],
                weaknesses: vec!["Exposition heavy".to_string()],
                who_watch: "Fans of puzzle films".to_string(),
                who_skip: "Viewers wanting a light watch".to_string(),
            },
            sentiment: Sentiment {
                positive_themes: vec!["Originality".to_string()],
                complaints: vec!["Confusing ending".to_string()],
                mood: "Overwhelmingly Positive".to_string(),
            },
            verdict: Verdict {
                worth: "Yes".to_string(),
                best_for: "A focused evening watch".to_string(),
            },
            recommendations: Some(vec![
                Recommendation {
                    title: "Interstellar".to_string(),
                    reason: "Same director, same ambition".to_string(),
                },
                Recommendation {
                    title: "Tenet".to_string(),
                    reason: "Time-bending action".to_string(),
                },
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_schema_field_names() {
        let json = serde_json::to_value(fixtures::inception()).unwrap();
        assert_eq!(json["overview"]["availableOn"], "Netflix (USA)");
        assert_eq!(json["review"]["whoWatch"], "Fans of puzzle films");
        assert_eq!(json["review"]["whoSkip"], "Viewers wanting a light watch");
        assert_eq!(json["sentiment"]["positiveThemes"][0], "Originality");
        assert_eq!(json["verdict"]["bestFor"], "A focused evening watch");
    }

    #[test]
    fn test_absent_recommendations_skipped() {
        let mut analysis = fixtures::inception();
        analysis.recommendations = None;
        let json = serde_json::to_value(&analysis).unwrap();
        assert!(json.get("recommendations").is_none());
        assert!(analysis.recommendations().is_empty());
    }
}
