pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

use crate::application::analyze::AnalyzeUseCase;
use crate::domain::entities::report::Analysis;
use crate::domain::entities::snapshot::MarketSnapshot;
use crate::domain::error::DomainError;
use crate::domain::ports::renderer::ReportRenderer;
use crate::domain::values::profile::ScoringProfile;
use crate::infrastructure::render::markdown::MarkdownRenderer;

/// Facade over the scoring engine, parameterized by one threshold profile.
pub struct SentimentEngine {
    analyze_uc: AnalyzeUseCase,
}

impl SentimentEngine {
    pub fn new(profile: ScoringProfile) -> Result<Self, DomainError> {
        Ok(Self {
            analyze_uc: AnalyzeUseCase::new(profile)?,
        })
    }

    /// Engine with a built-in profile by name (revised, classic).
    pub fn from_name(name: &str) -> Result<Self, DomainError> {
        Self::new(name.parse()?)
    }

    pub fn profile(&self) -> &ScoringProfile {
        self.analyze_uc.profile()
    }

    /// Run the full spot + futures analysis for one snapshot.
    pub fn analyze(&self, snapshot: &MarketSnapshot) -> Result<Analysis, DomainError> {
        self.analyze_uc.execute(snapshot)
    }

    /// Analyze and render with the default markdown presentation.
    pub fn render_markdown(&self, snapshot: &MarketSnapshot) -> Result<String, DomainError> {
        let analysis = self.analyze(snapshot)?;
        Ok(MarkdownRenderer.render(&analysis))
    }
}

impl Default for SentimentEngine {
    fn default() -> Self {
        // The built-in revised profile always validates.
        Self::new(ScoringProfile::revised()).expect("built-in profile is valid")
    }
}
