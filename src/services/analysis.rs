use std::sync::Arc;

use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    models::{AnalysisResult, PreferenceModel},
    services::{
        prompt::{build_prompt, SYSTEM_INSTRUCTION},
        providers::{CompletionProvider, CompletionRequest, JSON_MIME_TYPE},
        schema,
    },
};

/// Turns a query plus preferences into a provider request and validates the answer.
///
/// Callers are expected to have checked that the query is non-empty and a
/// location is selected; the translator forwards whatever it is given.
#[derive(Clone)]
pub struct AnalysisTranslator {
    provider: Arc<dyn CompletionProvider>,
}

impl AnalysisTranslator {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Builds the instruction, prompt and response contract for one analysis
    pub fn build_request(&self, query: &str, prefs: &PreferenceModel) -> CompletionRequest {
        CompletionRequest {
            instruction: SYSTEM_INSTRUCTION.to_string(),
            prompt: build_prompt(query, prefs),
            response_schema: schema::analysis_schema(),
            response_mime_type: JSON_MIME_TYPE,
        }
    }

    /// Runs one analysis against the provider
    pub async fn analyze(&self, query: &str, prefs: &PreferenceModel) -> AppResult<AnalysisResult> {
        let request = self.build_request(query, prefs);

        tracing::info!(
            provider = self.provider.name(),
            location = %prefs.location,
            industry = %prefs.industry,
            "Requesting movie analysis"
        );

        let raw = self.provider.generate(&request).await?;
        let analysis = parse_analysis(&raw, &request.response_schema)?;

        tracing::info!(
            provider = self.provider.name(),
            title = %analysis.overview.title,
            recommendations = analysis.recommendations().len(),
            "Movie analysis parsed"
        );

        Ok(analysis)
    }
}

/// Parses provider text into an `AnalysisResult`, rejecting anything that
/// does not satisfy `schema` rather than returning a partial result
pub fn parse_analysis(raw: &str, schema: &Value) -> AppResult<AnalysisResult> {
    let value: Value = serde_json::from_str(raw.trim()).map_err(|e| {
        tracing::error!(error = %e, response = %raw, "Provider response is not valid JSON");
        AppError::ResponseValidation(format!("response is not valid JSON: {}", e))
    })?;

    schema::validate(&value, schema).map_err(|violation| {
        tracing::error!(violation = %violation, "Provider response violates the schema");
        AppError::ResponseValidation(violation.to_string())
    })?;

    serde_json::from_value(value).map_err(|e| {
        tracing::error!(error = %e, "Provider response could not be mapped");
        AppError::ResponseValidation(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{analysis::fixtures, PreferenceChange};
    use crate::services::providers::MockCompletionProvider;
    use tokio_test::{assert_err, assert_ok};

    fn usa_prefs() -> PreferenceModel {
        PreferenceModel::new()
            .apply(PreferenceChange::Location("USA".into()))
            .unwrap()
            .apply(PreferenceChange::Industry("Hollywood (California)".into()))
            .unwrap()
    }

    fn translator_returning(result: AppResult<String>) -> AnalysisTranslator {
        let mut provider = MockCompletionProvider::new();
        provider.expect_name().return_const("mock");
        provider
            .expect_generate()
            .times(1)
            .return_once(move |_| result);
        AnalysisTranslator::new(Arc::new(provider))
    }

    #[test]
    fn test_build_request_contract() {
        let translator = AnalysisTranslator::new(Arc::new(MockCompletionProvider::new()));
        let request = translator.build_request("Inception", &usa_prefs());

        assert_eq!(request.instruction, SYSTEM_INSTRUCTION);
        assert!(request.prompt.contains("USA"));
        assert_eq!(request.response_mime_type, "application/json");
        assert_eq!(request.response_schema, schema::analysis_schema());
        assert!(request.response_schema["properties"]["overview"]["properties"]["availableOn"]
            .is_object());
    }

    #[tokio::test]
    async fn test_analyze_round_trip() {
        let expected = fixtures::inception();
        let raw = serde_json::to_string(&expected).unwrap();

        let mut provider = MockCompletionProvider::new();
        provider.expect_name().return_const("mock");
        provider
            .expect_generate()
            .withf(|request| {
                request.prompt.contains("- User Location: USA")
                    && request.prompt.contains(r#""USA" market"#)
            })
            .times(1)
            .return_once(move |_| Ok(raw));

        let translator = AnalysisTranslator::new(Arc::new(provider));
        let analysis = assert_ok!(translator.analyze("Inception", &usa_prefs()).await);
        assert_eq!(analysis, expected);
    }

    #[tokio::test]
    async fn test_missing_required_field_is_validation_error() {
        let mut json = serde_json::to_value(fixtures::inception()).unwrap();
        json["ratings"].as_object_mut().unwrap().remove("critic");

        let translator = translator_returning(Ok(json.to_string()));
        let err = assert_err!(translator.analyze("Inception", &usa_prefs()).await);
        assert!(matches!(err, AppError::ResponseValidation(msg) if msg.contains("ratings.critic")));
    }

    #[tokio::test]
    async fn test_non_json_is_validation_error() {
        let translator = translator_returning(Ok("Sorry, I cannot help with that.".to_string()));
        let err = assert_err!(translator.analyze("Inception", &usa_prefs()).await);
        assert!(matches!(err, AppError::ResponseValidation(_)));
    }

    #[tokio::test]
    async fn test_empty_object_is_validation_error() {
        let translator = translator_returning(Ok("{}".to_string()));
        let err = assert_err!(translator.analyze("Inception", &usa_prefs()).await);
        assert!(matches!(err, AppError::ResponseValidation(msg) if msg.contains("overview")));
    }

    #[tokio::test]
    async fn test_provider_error_propagates() {
        let translator =
            translator_returning(Err(AppError::Provider("quota exceeded".to_string())));
        let err = assert_err!(translator.analyze("Inception", &usa_prefs()).await);
        assert!(matches!(err, AppError::Provider(msg) if msg == "quota exceeded"));
    }

    #[test]
    fn test_parse_analysis_without_recommendations() {
        let mut json = serde_json::to_value(fixtures::inception()).unwrap();
        json.as_object_mut().unwrap().remove("recommendations");

        let analysis = parse_analysis(&json.to_string(), &schema::analysis_schema()).unwrap();
        assert!(analysis.recommendations.is_none());
    }

    #[test]
    fn test_parse_analysis_ignores_surrounding_whitespace() {
        let raw = format!("\n  {}  \n", serde_json::to_string(&fixtures::inception()).unwrap());
        assert!(parse_analysis(&raw, &schema::analysis_schema()).is_ok());
    }

    #[test]
    fn test_parse_analysis_keeps_partial_recommendation() {
        let mut json = serde_json::to_value(fixtures::inception()).unwrap();
        json["recommendations"] = serde_json::json!([{ "title": "Memento" }]);

        let analysis = parse_analysis(&json.to_string(), &schema::analysis_schema()).unwrap();
        let recs = analysis.recommendations();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].title, "Memento");
        assert_eq!(recs[0].reason, "");
    }
}
