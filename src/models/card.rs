use serde::Serialize;
use std::fmt::{self, Display};

use super::{AnalysisResult, Recommendation};

/// Colour cue for the verdict pill
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VerdictTone {
    Yes,
    Maybe,
    No,
}

impl VerdictTone {
    pub fn from_worth(worth: &str) -> Self {
        let worth = worth.to_lowercase();
        if worth.contains("yes") {
            VerdictTone::Yes
        } else if worth.contains("maybe") {
            VerdictTone::Maybe
        } else {
            VerdictTone::No
        }
    }
}

/// Fill level of the audience mood bar, in percent
pub fn mood_gauge(mood: &str) -> u8 {
    let mood = mood.to_lowercase();
    if mood.contains("positive") {
        90
    } else if mood.contains("mixed") {
        50
    } else if mood.contains("divisive") {
        65
    } else {
        30
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RatingTile {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CardHeader {
    pub title: String,
    pub badges: Vec<String>,
    pub available_on: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReviewSection {
    pub summary: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub watch_if: String,
    pub skip_if: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VerdictSection {
    pub worth: String,
    pub best_for: String,
    pub tone: VerdictTone,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SentimentSection {
    pub mood: String,
    pub gauge_percent: u8,
    pub positive_themes: Vec<String>,
    pub grievances: Vec<String>,
}

/// Render model for the review card shown under the search box
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReviewCard {
    pub header: CardHeader,
    pub ratings: Vec<RatingTile>,
    pub review: ReviewSection,
    pub verdict: VerdictSection,
    pub sentiment: SentimentSection,
    /// `None` hides the section; never `Some` of an empty list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<Recommendation>>,
}

impl From<&AnalysisResult> for ReviewCard {
    fn from(analysis: &AnalysisResult) -> Self {
        let overview = &analysis.overview;
        let recommendations = analysis.recommendations();

        Self {
            header: CardHeader {
                title: overview.title.clone(),
                badges: vec![
                    overview.industry.clone(),
                    overview.genre.clone(),
                    overview.runtime.clone(),
                ],
                available_on: overview.available_on.clone(),
            },
            ratings: vec![
                RatingTile {
                    label: "Overall AI Score",
                    value: analysis.ratings.overall.clone(),
                },
                RatingTile {
                    label: "Audience Pulse",
                    value: analysis.ratings.audience.clone(),
                },
                RatingTile {
                    label: "Critic Consensus",
                    value: analysis.ratings.critic.clone(),
                },
            ],
            review: ReviewSection {
                summary: analysis.review.summary.clone(),
                strengths: analysis.review.strengths.clone(),
                weaknesses: analysis.review.weaknesses.clone(),
                watch_if: analysis.review.who_watch.clone(),
                skip_if: analysis.review.who_skip.clone(),
            },
            verdict: VerdictSection {
                worth: analysis.verdict.worth.clone(),
                best_for: analysis.verdict.best_for.clone(),
                tone: VerdictTone::from_worth(&analysis.verdict.worth),
            },
            sentiment: SentimentSection {
                mood: analysis.sentiment.mood.clone(),
                gauge_percent: mood_gauge(&analysis.sentiment.mood),
                positive_themes: analysis.sentiment.positive_themes.clone(),
                grievances: analysis.sentiment.complaints.clone(),
            },
            recommendations: (!recommendations.is_empty()).then(|| recommendations.to_vec()),
        }
    }
}

fn write_bullets(f: &mut fmt::Formatter<'_>, heading: &str, items: &[String]) -> fmt::Result {
    writeln!(f, "{}:", heading)?;
    for item in items {
        writeln!(f, "  • {}", item)?;
    }
    Ok(())
}

impl Display for ReviewCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header.title)?;
        writeln!(f, "[{}]", self.header.badges.join("] ["))?;
        writeln!(f, "Available on: {}", self.header.available_on)?;
        writeln!(f)?;

        for tile in &self.ratings {
            writeln!(f, "{}: {}", tile.label, tile.value)?;
        }
        writeln!(f)?;

        writeln!(f, "AI Review")?;
        writeln!(f, "\"{}\"", self.review.summary)?;
        write_bullets(f, "Strengths", &self.review.strengths)?;
        write_bullets(f, "Weaknesses", &self.review.weaknesses)?;
        writeln!(f, "Watch if: {}", self.review.watch_if)?;
        writeln!(f, "Skip if: {}", self.review.skip_if)?;
        writeln!(f)?;

        writeln!(f, "AI Verdict: {}", self.verdict.worth)?;
        writeln!(f, "Best for: {}", self.verdict.best_for)?;
        writeln!(f)?;

        writeln!(
            f,
            "Audience Sentiment: {} ({}%)",
            self.sentiment.mood, self.sentiment.gauge_percent
        )?;
        write_bullets(f, "Positive Themes", &self.sentiment.positive_themes)?;
        write_bullets(f, "Common Grievances", &self.sentiment.grievances)?;

        if let Some(recommendations) = &self.recommendations {
            writeln!(f)?;
            writeln!(f, "Recommendations")?;
            for rec in recommendations {
                writeln!(f, "  {} - {}", rec.title, rec.reason)?;
            }
        }

        Ok(())
    }
}
