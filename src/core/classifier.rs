use crate::core::vocabulary::{PET_KEYWORDS, PET_PATTERNS};
use crate::domain::model::ClassificationResult;
use crate::utils::error::Result;
use regex::{Regex, RegexBuilder};

pub const DEFAULT_RELEVANCE_THRESHOLD: f64 = 0.3;

pub const KEYWORD_WEIGHT: f64 = 0.1;
pub const KEYWORD_SCORE_CAP: f64 = 0.6;
pub const PATTERN_WEIGHT: f64 = 0.2;
pub const PATTERN_SCORE_CAP: f64 = 0.4;

/// Scores how pet-related a message is from keyword and pattern hits.
///
/// Immutable once built, so one instance can be shared by every request.
#[derive(Debug, Clone)]
pub struct RelevanceClassifier {
    keywords: &'static [&'static str],
    patterns: Vec<Regex>,
    threshold: f64,
}

impl RelevanceClassifier {
    pub fn new() -> Result<Self> {
        Self::with_threshold(DEFAULT_RELEVANCE_THRESHOLD)
    }

    pub fn with_threshold(threshold: f64) -> Result<Self> {
        let patterns = PET_PATTERNS
            .iter()
            .map(|pattern| RegexBuilder::new(pattern).case_insensitive(true).build())
            .collect::<std::result::Result<Vec<_>, _>>()?;

        tracing::debug!(
            "Relevance classifier ready: {} keywords, {} patterns, threshold {:.2}",
            PET_KEYWORDS.len(),
            patterns.len(),
            threshold
        );

        Ok(Self {
            keywords: PET_KEYWORDS,
            patterns,
            threshold,
        })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// 計算 0.0 到 1.0 之間的相關分數
    pub fn score_relevance(&self, message: &str) -> f64 {
        let message_lower = message.to_lowercase();

        let keyword_score =
            (self.keyword_hits(&message_lower) as f64 * KEYWORD_WEIGHT).min(KEYWORD_SCORE_CAP);
        let pattern_score =
            (self.pattern_hits(&message_lower) as f64 * PATTERN_WEIGHT).min(PATTERN_SCORE_CAP);

        (keyword_score + pattern_score).clamp(0.0, 1.0)
    }

    fn keyword_hits(&self, message_lower: &str) -> usize {
        self.keywords
            .iter()
            .filter(|keyword| message_lower.contains(*keyword))
            .count()
    }

    fn pattern_hits(&self, message_lower: &str) -> usize {
        self.patterns
            .iter()
            .filter(|pattern| pattern.is_match(message_lower))
            .count()
    }

    pub fn classify(&self, message: &str) -> ClassificationResult {
        self.classify_with_threshold(message, self.threshold)
    }

    pub fn classify_with_threshold(&self, message: &str, threshold: f64) -> ClassificationResult {
        let confidence_score = self.score_relevance(message);
        ClassificationResult {
            is_related: confidence_score >= threshold,
            confidence_score,
        }
    }
}
