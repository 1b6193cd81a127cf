use crate::models::PreferenceModel;

/// Standing instruction sent with every analysis request
pub const SYSTEM_INSTRUCTION: &str = "You are an AI-powered Movie Review and Recommendation Assistant.
Role: Analyze movies using patterns from IMDb, Rotten Tomatoes, and Metacritic.
Rules:
1. Aggregate and normalize ratings internally.
2. Weight consistent opinions and repeated themes higher.
3. Reduce extreme review bias.
4. Detect sentiment accurately.
5. Strict output format as JSON.
6. Be neutral and unbiased. Use approximate ranges for data.
7. CRITICAL: Check movie availability specifically for the user's selected location and streaming platforms.
8. If data is limited, say \"Based on available signals\".";

/// Builds the per-request prompt.
///
/// The query and every preference are embedded verbatim; nothing is escaped
/// beyond what JSON transport does.
pub fn build_prompt(query: &str, prefs: &PreferenceModel) -> String {
    format!(
        r#"User Query: "{query}"
Context:
- User Location: {location}
- Industry: {industry}
- Platform: {platform}
- Preferred Genre: {genre}
- Preferred Mood: {mood}
- Time Available: {time}

Instructions:
- Provide a detailed overview.
- If the query is about availability, ensure the "availableOn" field reflects the "{location}" market.
- If recommending, include 3-5 suggestions matching the region and industry.
Always provide the analysis in a structured JSON format."#,
        query = query,
        location = prefs.location,
        industry = prefs.industry,
        platform = prefs.platform,
        genre = prefs.genre,
        mood = prefs.mood,
        time = prefs.time.label(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PreferenceChange;

    fn usa_prefs() -> PreferenceModel {
        PreferenceModel::new()
            .apply(PreferenceChange::Location("USA".into()))
            .unwrap()
            .apply(PreferenceChange::Industry("Hollywood (California)".into()))
            .unwrap()
    }

    #[test]
    fn test_prompt_embeds_every_preference() {
        let prompt = build_prompt("Inception", &usa_prefs());
        assert!(prompt.starts_with("User Query: \"Inception\""));
        assert!(prompt.contains("- User Location: USA"));
        assert!(prompt.contains("- Industry: Hollywood (California)"));
        assert!(prompt.contains("- Platform: Any"));
        assert!(prompt.contains("- Preferred Genre: Any"));
        assert!(prompt.contains("- Preferred Mood: Any"));
        assert!(prompt.contains("- Time Available: Normal (2-3 hrs)"));
    }

    #[test]
    fn test_prompt_scopes_availability_to_location() {
        let prompt = build_prompt("Inception", &usa_prefs());
        assert!(prompt.contains(r#"the "availableOn" field reflects the "USA" market"#));
        assert!(prompt.contains("3-5 suggestions"));
    }

    #[test]
    fn test_query_is_not_escaped() {
        let prompt = build_prompt(r#"Review "Animal" movie"#, &usa_prefs());
        assert!(prompt.contains(r#"User Query: "Review "Animal" movie""#));
    }

    #[test]
    fn test_instruction_covers_location_and_fallback_phrase() {
        assert!(SYSTEM_INSTRUCTION.contains("selected location"));
        assert!(SYSTEM_INSTRUCTION.contains("Based on available signals"));
    }
}
