//! Post-generation scene audit.
//!
//! The audit never changes a result. By default its findings are only logged; strict
//! mode turns the blocking ones into contract violations.

use crate::schema::{CONTENT_GAP_COUNT, DIALOGUE_CHAR_LIMIT, DIALOGUE_WORD_LIMIT, SUGGESTION_COUNT};
use scriptwright_core::{
    CompetitorAnalysis, GenerationResult, SceneBudget, Script, ScriptMode, Suggestions,
};

/// One rule a generated script broke.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum AuditFinding {
    /// Scene numbers skip, repeat or do not start at 1
    #[display("scene at position {} is numbered {} instead of {}", position, found, position)]
    NonContiguous {
        /// 1-based position in playback order
        position: usize,
        /// Number the model wrote
        found: u32,
    },
    /// Total scene count is outside the budget
    #[display("{} scenes is outside the budget of {}..={}", count, min, max)]
    OutOfBudget {
        /// Scenes generated
        count: usize,
        /// Lower bound
        min: u32,
        /// Upper bound
        max: u32,
    },
    /// Dialogue longer than one scene allows
    #[display("scene {} dialogue has {} words / {} characters", scene, words, chars)]
    DialogueTooLong {
        /// Scene number
        scene: u32,
        /// Word count
        words: usize,
        /// Character count
        chars: usize,
    },
    /// Image prompt does not open with the visual style
    #[display("scene {} image prompt does not start with the visual style", scene)]
    VisualStyleMissing {
        /// Scene number
        scene: u32,
    },
    /// Wrong number of suggestions
    #[display("{} {} instead of {}", count, field, expected)]
    SuggestionCount {
        /// "titles" or "thumbnail ideas"
        field: &'static str,
        /// Count received
        count: usize,
        /// Count required
        expected: u32,
    },
    /// Wrong number of content gaps in a fresh analysis
    #[display("{} content gaps instead of {}", count, expected)]
    ContentGapCount {
        /// Count received
        count: usize,
        /// Count required
        expected: u32,
    },
}

impl AuditFinding {
    /// Whether strict mode rejects a script with this finding.
    pub fn is_blocking(&self) -> bool {
        matches!(
            self,
            AuditFinding::NonContiguous { .. } | AuditFinding::OutOfBudget { .. }
        )
    }
}

/// Everything the audit found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditReport {
    findings: Vec<AuditFinding>,
}

impl AuditReport {
    /// All findings, in the order they were detected.
    pub fn findings(&self) -> &[AuditFinding] {
        &self.findings
    }

    /// Whether nothing was found.
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// Findings strict mode rejects.
    pub fn blocking(&self) -> impl Iterator<Item = &AuditFinding> {
        self.findings.iter().filter(|f| f.is_blocking())
    }

    /// Whether any finding is blocking.
    pub fn has_blocking(&self) -> bool {
        self.blocking().next().is_some()
    }
}

/// Checks a script's scene numbering, scene count, dialogue length and visual-style prefix.
///
/// `visual_style` is the canonical style every image prompt must open with: the series
/// bible's style, not whatever the script's own overview claims.
///
/// # Examples
///
/// ```
/// use scriptwright_core::SceneBudget;
/// use scriptwright_director::audit_script;
/// # use scriptwright_core::{Script, ScriptOverview, SeoInfo};
/// # let script = Script {
/// #     overview: ScriptOverview {
/// #         summary: String::new(), setting: String::new(), characters: vec![],
/// #         tone: String::new(), visual_style: "Clay".to_string(),
/// #     },
/// #     seo: SeoInfo {
/// #         title: String::new(), primary_keywords: vec![], secondary_keywords: vec![],
/// #         related_keywords: vec![],
/// #     },
/// #     intro: vec![], body: vec![], outro: vec![],
/// # };
///
/// let report = audit_script(&script, SceneBudget::for_minutes(1), "Clay");
/// assert!(report.has_blocking());
/// ```
pub fn audit_script(script: &Script, budget: SceneBudget, visual_style: &str) -> AuditReport {
    let mut findings = Vec::new();
    let style = visual_style.trim();

    for (index, scene) in script.scenes().enumerate() {
        let position = index + 1;
        if scene.scene_number as usize != position {
            findings.push(AuditFinding::NonContiguous {
                position,
                found: scene.scene_number,
            });
        }

        let words = scene.dialogue_words();
        let chars = scene.dialogue_chars();
        if words > DIALOGUE_WORD_LIMIT || chars > DIALOGUE_CHAR_LIMIT {
            findings.push(AuditFinding::DialogueTooLong {
                scene: scene.scene_number,
                words,
                chars,
            });
        }

        if !style.is_empty() && !scene.image_prompt.trim_start().starts_with(style) {
            findings.push(AuditFinding::VisualStyleMissing {
                scene: scene.scene_number,
            });
        }
    }

    let count = script.scene_count();
    if !budget.contains(count) {
        findings.push(AuditFinding::OutOfBudget {
            count,
            min: budget.min(),
            max: budget.max(),
        });
    }

    AuditReport { findings }
}

/// Checks suggestion counts, and the content-gap count of a fresh analysis.
///
/// Continuation episodes carry no real analysis, so their gaps are never counted.
pub fn audit_packaging(
    mode: ScriptMode,
    analysis: &CompetitorAnalysis,
    suggestions: &Suggestions,
) -> AuditReport {
    let mut findings = Vec::new();
    let expected = SUGGESTION_COUNT as usize;

    if suggestions.titles.len() != expected {
        findings.push(AuditFinding::SuggestionCount {
            field: "titles",
            count: suggestions.titles.len(),
            expected: SUGGESTION_COUNT,
        });
    }
    if suggestions.thumbnail_ideas.len() != expected {
        findings.push(AuditFinding::SuggestionCount {
            field: "thumbnail ideas",
            count: suggestions.thumbnail_ideas.len(),
            expected: SUGGESTION_COUNT,
        });
    }
    if mode == ScriptMode::FreshAnalysis
        && analysis.content_gaps.len() != CONTENT_GAP_COUNT as usize
    {
        findings.push(AuditFinding::ContentGapCount {
            count: analysis.content_gaps.len(),
            expected: CONTENT_GAP_COUNT,
        });
    }

    AuditReport { findings }
}

/// Audits a finished result: its scenes against its own series bible, then its packaging.
pub fn audit_result(mode: ScriptMode, result: &GenerationResult, budget: SceneBudget) -> AuditReport {
    audit_script(&result.script, budget, &result.series_bible.visual_style).merge(
        audit_packaging(mode, &result.competitor_analysis, &result.suggestions),
    )
}

impl AuditReport {
    /// Appends another report's findings.
    pub fn merge(mut self, other: AuditReport) -> Self {
        self.findings.extend(other.findings);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scriptwright_core::{MotionPrompt, Scene, ScriptOverview, SeoInfo, StructuralSegment};

    const STYLE: &str = "Soft pastel 3D animation";

    fn scene(number: u32, dialogue: &str) -> Scene {
        Scene {
            scene_number: number,
            setting: "Meadow".to_string(),
            image_prompt: format!("{}, a kitten in a meadow", STYLE),
            negative_image_prompt: "blurry".to_string(),
            motion_prompt: MotionPrompt {
                character: "Miu".to_string(),
                setting: "Meadow".to_string(),
                lighting: "Golden hour".to_string(),
                action: "Miu jumps".to_string(),
                dialogue: dialogue.to_string(),
                camera_movement: "Slow pan".to_string(),
                sound_effects: "Birdsong".to_string(),
                background_music: "Gentle piano".to_string(),
                secondary_character_details: None,
                visuals_notes: String::new(),
                negative_motion_prompt: "jitter".to_string(),
            },
        }
    }

    fn script(body: Vec<Scene>) -> Script {
        Script {
            overview: ScriptOverview {
                summary: "A kitten explores.".to_string(),
                setting: "A meadow".to_string(),
                characters: vec![],
                tone: "Warm".to_string(),
                visual_style: STYLE.to_string(),
            },
            seo: SeoInfo {
                title: "Miu".to_string(),
                primary_keywords: vec![],
                secondary_keywords: vec![],
                related_keywords: vec![],
            },
            intro: vec![],
            body,
            outro: vec![],
        }
    }

    fn eight_scenes() -> Vec<Scene> {
        (1..=8).map(|n| scene(n, "Hello there.")).collect()
    }

    fn suggestions(titles: usize, thumbnails: usize) -> Suggestions {
        Suggestions {
            titles: (0..titles).map(|i| format!("Title {}", i)).collect(),
            thumbnail_ideas: (0..thumbnails).map(|i| format!("Thumb {}", i)).collect(),
        }
    }

    fn analysis(gaps: usize) -> CompetitorAnalysis {
        CompetitorAnalysis {
            structural_analysis: vec![StructuralSegment {
                label: "Hook".to_string(),
                description: "Fast open".to_string(),
            }],
            strengths: vec!["Pacing".to_string()],
            weaknesses: vec!["Flat ending".to_string()],
            content_gaps: (0..gaps).map(|i| format!("Gap {}", i)).collect(),
        }
    }

    #[test]
    fn clean_script_has_no_findings() {
        let report = audit_script(&script(eight_scenes()), SceneBudget::for_minutes(1), STYLE);
        assert!(report.is_clean(), "{:?}", report);
    }

    #[test]
    fn twenty_one_words_is_too_long() {
        let mut scenes = eight_scenes();
        scenes[2] = scene(3, &vec!["meo"; 21].join(" "));
        let report = audit_script(&script(scenes), SceneBudget::for_minutes(1), STYLE);

        assert_eq!(
            report.findings(),
            &[AuditFinding::DialogueTooLong {
                scene: 3,
                words: 21,
                chars: 83,
            }]
        );
        assert!(!report.has_blocking());
    }

    #[test]
    fn twenty_words_is_within_limit() {
        let mut scenes = eight_scenes();
        scenes[0] = scene(1, &vec!["meo"; 20].join(" "));
        let report = audit_script(&script(scenes), SceneBudget::for_minutes(1), STYLE);
        assert!(report.is_clean());
    }

    #[test]
    fn hundred_and_one_characters_is_too_long() {
        let mut scenes = eight_scenes();
        let dialogue = "a".repeat(101);
        scenes[4] = scene(5, &dialogue);
        let report = audit_script(&script(scenes), SceneBudget::for_minutes(1), STYLE);

        assert_eq!(
            report.findings(),
            &[AuditFinding::DialogueTooLong {
                scene: 5,
                words: 1,
                chars: 101,
            }]
        );
    }

    #[test]
    fn prompt_without_style_prefix_is_reported() {
        let mut scenes = eight_scenes();
        scenes[6].image_prompt = "A kitten in a meadow, soft pastel colors".to_string();
        let report = audit_script(&script(scenes), SceneBudget::for_minutes(1), STYLE);

        assert_eq!(report.findings(), &[AuditFinding::VisualStyleMissing { scene: 7 }]);
        assert!(!report.has_blocking());
    }

    #[test]
    fn style_is_checked_against_the_given_style() {
        let mut drifted = script(eight_scenes());
        drifted.overview.visual_style = "Flat 2D".to_string();
        for scene in drifted.body.iter_mut() {
            scene.image_prompt = "Flat 2D, a kitten".to_string();
        }

        let report = audit_script(&drifted, SceneBudget::for_minutes(1), STYLE);
        assert_eq!(report.findings().len(), 8);
        assert!(
            report
                .findings()
                .iter()
                .all(|f| matches!(f, AuditFinding::VisualStyleMissing { .. }))
        );
    }

    #[test]
    fn duplicate_number_is_blocking() {
        let mut scenes = eight_scenes();
        scenes[3].scene_number = 3;
        let report = audit_script(&script(scenes), SceneBudget::for_minutes(1), STYLE);

        assert_eq!(
            report.findings(),
            &[AuditFinding::NonContiguous { position: 4, found: 3 }]
        );
        assert!(report.has_blocking());
    }

    #[test]
    fn four_titles_is_reported() {
        let report = audit_packaging(ScriptMode::FreshAnalysis, &analysis(3), &suggestions(4, 5));
        assert_eq!(
            report.findings(),
            &[AuditFinding::SuggestionCount {
                field: "titles",
                count: 4,
                expected: 5,
            }]
        );
        assert!(!report.has_blocking());
    }

    #[test]
    fn two_gaps_in_fresh_analysis_is_reported() {
        let report = audit_packaging(ScriptMode::FreshAnalysis, &analysis(2), &suggestions(5, 5));
        assert_eq!(
            report.findings(),
            &[AuditFinding::ContentGapCount {
                count: 2,
                expected: 3,
            }]
        );
    }

    #[test]
    fn continuation_gaps_are_not_counted() {
        let placeholder = CompetitorAnalysis::not_applicable();
        let report = audit_packaging(ScriptMode::Continuation, &placeholder, &suggestions(5, 5));
        assert!(report.is_clean());

        // A relabelled placeholder is still a continuation.
        let mut relabelled = analysis(2);
        relabelled.structural_analysis[0].label = "Not applicable".to_string();
        let report = audit_packaging(ScriptMode::Continuation, &relabelled, &suggestions(5, 5));
        assert!(report.is_clean());
    }
}
