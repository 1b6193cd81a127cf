pub mod analysis;
pub mod prompt;
pub mod providers;
pub mod schema;

pub use analysis::AnalysisTranslator;
