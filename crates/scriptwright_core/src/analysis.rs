//! Competitor analysis and packaging suggestions.

use serde::{Deserialize, Serialize};

/// One labelled segment of the reference video's structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralSegment {
    /// Segment label, e.g. "Hook"
    #[serde(rename = "phan_doan")]
    pub label: String,
    /// What happens in the segment
    #[serde(rename = "mo_ta")]
    pub description: String,
}

/// Breakdown of the reference video.
///
/// # Examples
///
/// ```
/// use scriptwright_core::CompetitorAnalysis;
///
/// let placeholder = CompetitorAnalysis::not_applicable();
/// assert!(placeholder.is_placeholder());
/// assert_eq!(placeholder.structural_analysis[0].label, "N/A");
/// assert!(placeholder.content_gaps.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorAnalysis {
    /// Ordered structural segments
    pub structural_analysis: Vec<StructuralSegment>,
    /// What the reference does well
    pub strengths: Vec<String>,
    /// What the reference does poorly
    pub weaknesses: Vec<String>,
    /// Opportunities the reference misses
    pub content_gaps: Vec<String>,
}

impl CompetitorAnalysis {
    /// Placeholder emitted for continuation episodes, where no analysis is performed.
    pub fn not_applicable() -> Self {
        Self {
            structural_analysis: vec![StructuralSegment {
                label: "N/A".to_string(),
                description: "Not applicable for series continuation.".to_string(),
            }],
            strengths: Vec::new(),
            weaknesses: Vec::new(),
            content_gaps: Vec::new(),
        }
    }

    /// Whether this is the continuation placeholder shape.
    pub fn is_placeholder(&self) -> bool {
        self.structural_analysis.len() == 1
            && self.structural_analysis[0].label == "N/A"
            && self.strengths.is_empty()
            && self.weaknesses.is_empty()
            && self.content_gaps.is_empty()
    }
}

/// Packaging candidates for the finished video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestions {
    /// Title candidates
    pub titles: Vec<String>,
    /// Thumbnail concepts
    #[serde(rename = "thumbnailIdeas")]
    pub thumbnail_ideas: Vec<String>,
}
