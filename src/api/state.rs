use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::models::{AnalysisRecord, PreferenceModel};
use crate::services::AnalysisTranslator;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub translator: AnalysisTranslator,
    pub session: Arc<RwLock<Session>>,
    /// Held for the duration of a provider call; one analysis at a time
    pub analysis_slot: Arc<Mutex<()>>,
}

/// What the UI session owns: its filters and the outcome of the last query
#[derive(Debug, Default)]
pub struct Session {
    pub preferences: PreferenceModel,
    pub latest: Option<AnalysisRecord>,
    pub last_error: Option<String>,
}

impl AppState {
    /// Creates a fresh session backed by `translator`
    pub fn new(translator: AnalysisTranslator) -> Self {
        Self {
            translator,
            session: Arc::new(RwLock::new(Session::default())),
            analysis_slot: Arc::new(Mutex::new(())),
        }
    }
}
