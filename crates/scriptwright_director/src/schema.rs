//! Output-schema contracts.
//!
//! The same contract is used for both generation modes. Field languages are fixed here:
//! descriptive and prompt fields are written in [`DESCRIPTIVE_LANGUAGE`], narrative and
//! production fields in [`NARRATIVE_LANGUAGE`]. Only dialogue follows the request.

use scriptwright_core::Schema;

/// Language of image/motion directives and other descriptive fields.
pub const DESCRIPTIVE_LANGUAGE: &str = "English";

/// Language of overview, SEO, analysis, suggestions and production notes.
pub const NARRATIVE_LANGUAGE: &str = "Vietnamese";

/// Content gaps required from a fresh analysis.
pub const CONTENT_GAP_COUNT: u32 = 3;

/// Title and thumbnail candidates required in every result.
pub const SUGGESTION_COUNT: u32 = 5;

/// Dialogue ceiling per scene, in words.
pub const DIALOGUE_WORD_LIMIT: usize = 20;

/// Dialogue ceiling per scene, in characters.
pub const DIALOGUE_CHAR_LIMIT: usize = 100;

fn descriptive(text: &str) -> Schema {
    Schema::string().describe(format!("{} Written in {}.", text, DESCRIPTIVE_LANGUAGE))
}

fn narrative(text: &str) -> Schema {
    Schema::string().describe(format!("{} Written in {}.", text, NARRATIVE_LANGUAGE))
}

fn narrative_list(text: &str) -> Schema {
    Schema::array(Schema::string())
        .describe(format!("{} Written in {}.", text, NARRATIVE_LANGUAGE))
}

/// Contract for one scene's motion directive.
pub fn motion_prompt_schema() -> Schema {
    Schema::object()
        .property(
            "character",
            descriptive(
                "Every character in the scene. Must begin with the full description \
                 (description followed by appearance) of each present character's profile.",
            ),
        )
        .property(
            "setting",
            descriptive("Detailed immediate environment: objects, furniture, atmosphere."),
        )
        .property("lighting", descriptive("Lighting that sets the scene's mood."))
        .property("action", descriptive("Specific, evocative character actions."))
        .property(
            "dialogue",
            Schema::string().describe(format!(
                "Spoken lines in the requested dialogue language only. When several characters \
                 speak, prefix each line with the speaker's name ('Name: line'). At most {} words \
                 (about {} characters) so the scene fits 8 seconds. Match each speaker's \
                 voice_profile.",
                DIALOGUE_WORD_LIMIT, DIALOGUE_CHAR_LIMIT
            )),
        )
        .property("camera_movement", descriptive("Camera movement supporting the action."))
        .property("sound_effects", descriptive("Sound effects, including subtle ambience."))
        .property("background_music", descriptive("Style or mood of the background music."))
        .optional_property(
            "secondary_character_details",
            descriptive("Optional. Appearance and reactions of secondary characters in this scene."),
        )
        .property(
            "visuals_notes",
            narrative("Key production or visual notes for this scene."),
        )
        .property(
            "negativeMotionPrompt",
            descriptive("Everything the motion model must avoid (shaky camera, flicker, inconsistent faces...)."),
        )
}

/// Contract for one scene.
pub fn scene_schema() -> Schema {
    Schema::object()
        .property(
            "sceneNumber",
            Schema::integer().describe(
                "Position of the scene, starting at 1 and increasing by 1 across intro, body and outro.",
            ),
        )
        .property("setting", narrative("Location of the scene."))
        .property(
            "imagePrompt",
            descriptive(
                "Image-generation prompt composed, in order, of: the visual style copied verbatim; \
                 the full description (description followed by appearance) of every character \
                 present; the setting, lighting, action and secondary character details of this \
                 scene's motion prompt.",
            ),
        )
        .property(
            "negativeImagePrompt",
            descriptive("Negative prompt for the image model (deformed, blurry, extra limbs...)."),
        )
        .property("motionPrompt", motion_prompt_schema())
}

/// Contract for a character profile.
pub fn character_profile_schema() -> Schema {
    Schema::object()
        .property("name", Schema::string().describe("Character name."))
        .property("description", narrative("Who the character is: role and background."))
        .property("appearance", narrative("Very detailed look: face, hair, signature outfit."))
        .property("personality", narrative("Core personality."))
        .property(
            "voice_profile",
            narrative("Voice in detail: tone, pitch, speed and speaking style."),
        )
}

/// Contract for the script overview.
pub fn overview_schema() -> Schema {
    Schema::object()
        .property("tom_tat", narrative("Short summary of the script."))
        .property("boi_canh", narrative("Shared setting of the video."))
        .property(
            "ho_so_nhan_vat",
            Schema::array(character_profile_schema()).describe(
                "One detailed profile per character, main and secondary. The only source of character facts.",
            ),
        )
        .property("tong_giong", narrative("Overall tone and style (funny, serious, inspiring...)."))
        .property(
            "phong_cach_hinh_anh",
            narrative("Single visual style for the whole video, copied into every image prompt."),
        )
}

/// Contract for the SEO block.
pub fn seo_schema() -> Schema {
    Schema::object()
        .property("tieu_de", narrative("Compelling, search-optimized video title."))
        .property("tu_khoa_chinh", narrative_list("2-3 primary keywords."))
        .property("tu_khoa_phu", narrative_list("4-5 secondary keywords supporting the primary ones."))
        .property("tu_khoa_lien_quan", narrative_list("Related (LSI) keywords."))
}

/// Contract for the script.
pub fn script_schema() -> Schema {
    Schema::object()
        .property("overview", overview_schema())
        .property("seo", seo_schema())
        .property(
            "intro",
            Schema::array(scene_schema()).describe("Opening scenes that hook the viewer."),
        )
        .property(
            "body",
            Schema::array(scene_schema()).describe("Main scenes building to the climax."),
        )
        .property(
            "outro",
            Schema::array(scene_schema()).describe("Closing scenes with summary and call to action."),
        )
}

/// Contract for the competitor analysis.
pub fn competitor_analysis_schema() -> Schema {
    Schema::object()
        .property(
            "structuralAnalysis",
            Schema::array(
                Schema::object()
                    .property(
                        "phan_doan",
                        Schema::string().describe("Segment name and timestamps, e.g. 'Hook (0:00 - 0:25)'."),
                    )
                    .property("mo_ta", narrative("What the segment does and why.")),
            )
            .describe(format!(
                "Segment-by-segment structure of the reference video. Written in {}.",
                NARRATIVE_LANGUAGE
            )),
        )
        .property("strengths", narrative_list("Main strengths of the reference video."))
        .property("weaknesses", narrative_list("Weaknesses and missed opportunities of the reference video."))
        .property(
            "contentGaps",
            narrative_list(&format!(
                "Exactly {} angles the reference video leaves unexplored.",
                CONTENT_GAP_COUNT
            )),
        )
}

/// Contract for packaging suggestions.
pub fn suggestions_schema() -> Schema {
    Schema::object()
        .property(
            "titles",
            narrative_list(&format!("{} search-optimized title candidates.", SUGGESTION_COUNT))
                .exactly(SUGGESTION_COUNT),
        )
        .property(
            "thumbnailIdeas",
            narrative_list(&format!("{} curiosity-driving thumbnail concepts.", SUGGESTION_COUNT))
                .exactly(SUGGESTION_COUNT),
        )
}

/// The full response contract for script generation.
///
/// # Examples
///
/// ```
/// use scriptwright_director::response_contract;
///
/// let contract = response_contract();
/// assert_eq!(
///     contract.required(),
///     ["competitorAnalysis", "optimizedScript", "suggestions"]
/// );
/// ```
pub fn response_contract() -> Schema {
    Schema::object()
        .property("competitorAnalysis", competitor_analysis_schema())
        .property("optimizedScript", script_schema())
        .property("suggestions", suggestions_schema())
}

/// Contract for keyword suggestion: a plain list of strings.
pub fn keyword_contract() -> Schema {
    Schema::array(Schema::string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_requires_contract_fields() {
        let scene = scene_schema();
        assert_eq!(
            scene.required(),
            ["sceneNumber", "setting", "imagePrompt", "negativeImagePrompt", "motionPrompt"]
        );
    }

    #[test]
    fn secondary_details_are_optional() {
        let motion = motion_prompt_schema();
        assert!(motion.get("secondary_character_details").is_some());
        assert!(
            !motion
                .required()
                .iter()
                .any(|f| f == "secondary_character_details")
        );
        assert_eq!(motion.required().len(), 10);
    }

    #[test]
    fn field_languages_are_fixed() {
        let scene = scene_schema();
        let image = scene.get("imagePrompt").and_then(|s| s.description()).unwrap();
        assert!(image.contains(DESCRIPTIVE_LANGUAGE));
        let notes = scene
            .get("motionPrompt")
            .and_then(|m| m.get("visuals_notes"))
            .and_then(|s| s.description())
            .unwrap();
        assert!(notes.contains(NARRATIVE_LANGUAGE));
    }

    #[test]
    fn suggestions_are_exactly_five() {
        let suggestions = suggestions_schema();
        assert_eq!(suggestions.get("titles").and_then(|s| s.exact_items()), Some(5));
        assert_eq!(
            suggestions.get("thumbnailIdeas").and_then(|s| s.exact_items()),
            Some(5)
        );
    }
}
