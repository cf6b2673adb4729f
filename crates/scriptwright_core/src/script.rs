//! Script records: overview, SEO block, scenes and motion prompts.

use serde::{Deserialize, Serialize};

/// A recurring character, keyed by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterProfile {
    /// Character name, the identity key
    pub name: String,
    /// Narrative description (role, background)
    pub description: String,
    /// Visual appearance used verbatim in image directives
    pub appearance: String,
    /// Personality traits
    pub personality: String,
    /// Tone, pitch, speed and style of the character's voice
    pub voice_profile: String,
}

impl CharacterProfile {
    /// Narrative and appearance descriptions joined, as image directives embed them.
    pub fn full_description(&self) -> String {
        format!("{} {}", self.description.trim(), self.appearance.trim())
    }
}

/// Production-level summary of a script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptOverview {
    /// Story summary
    #[serde(rename = "tom_tat")]
    pub summary: String,
    /// Shared setting of the story
    #[serde(rename = "boi_canh")]
    pub setting: String,
    /// Every character appearing in the script
    #[serde(rename = "ho_so_nhan_vat")]
    pub characters: Vec<CharacterProfile>,
    /// Canonical tonal style
    #[serde(rename = "tong_giong")]
    pub tone: String,
    /// Canonical visual style, leading every image directive
    #[serde(rename = "phong_cach_hinh_anh")]
    pub visual_style: String,
}

/// Title and keyword tiers for search optimization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoInfo {
    /// Video title
    #[serde(rename = "tieu_de")]
    pub title: String,
    /// Primary keywords
    #[serde(rename = "tu_khoa_chinh")]
    pub primary_keywords: Vec<String>,
    /// Secondary keywords
    #[serde(rename = "tu_khoa_phu")]
    pub secondary_keywords: Vec<String>,
    /// Related keywords
    #[serde(rename = "tu_khoa_lien_quan")]
    pub related_keywords: Vec<String>,
}

/// Video-generation directive for one scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotionPrompt {
    /// Characters present, led by their full profile descriptions
    pub character: String,
    /// Where the scene takes place
    pub setting: String,
    /// Lighting description
    pub lighting: String,
    /// What happens
    pub action: String,
    /// Spoken lines, prefixed by speaker when several characters talk
    pub dialogue: String,
    /// Camera movement
    pub camera_movement: String,
    /// Sound effects
    pub sound_effects: String,
    /// Music mood
    pub background_music: String,
    /// Notes on secondary characters, when any appear
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_character_details: Option<String>,
    /// Production notes
    pub visuals_notes: String,
    /// What the motion model must avoid
    #[serde(rename = "negativeMotionPrompt")]
    pub negative_motion_prompt: String,
}

/// One numbered scene of a script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    /// Position in the whole script, starting at 1
    pub scene_number: u32,
    /// Setting text
    pub setting: String,
    /// Image-generation directive
    pub image_prompt: String,
    /// Negative image-generation directive
    pub negative_image_prompt: String,
    /// Video-generation directive
    pub motion_prompt: MotionPrompt,
}

impl Scene {
    /// Number of whitespace-separated words in the dialogue.
    pub fn dialogue_words(&self) -> usize {
        self.motion_prompt.dialogue.split_whitespace().count()
    }

    /// Number of characters in the dialogue.
    pub fn dialogue_chars(&self) -> usize {
        self.motion_prompt.dialogue.chars().count()
    }
}

/// A complete script: overview, SEO block and three scene sequences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    /// Production overview
    pub overview: ScriptOverview,
    /// SEO block
    pub seo: SeoInfo,
    /// Opening scenes
    pub intro: Vec<Scene>,
    /// Main scenes
    pub body: Vec<Scene>,
    /// Closing scenes
    pub outro: Vec<Scene>,
}

impl Script {
    /// All scenes in playback order: intro, body, outro.
    pub fn scenes(&self) -> impl Iterator<Item = &Scene> {
        self.intro.iter().chain(&self.body).chain(&self.outro)
    }

    /// Total number of scenes.
    pub fn scene_count(&self) -> usize {
        self.intro.len() + self.body.len() + self.outro.len()
    }

    /// The final scene, which seeds the next episode of a series.
    pub fn last_scene(&self) -> Option<&Scene> {
        self.scenes().last()
    }
}
