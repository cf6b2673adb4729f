//! Directive assembly: instruction text plus output contract for one generation call.

use crate::schema::{
    CONTENT_GAP_COUNT, DESCRIPTIVE_LANGUAGE, DIALOGUE_CHAR_LIMIT, DIALOGUE_WORD_LIMIT,
    NARRATIVE_LANGUAGE, SUGGESTION_COUNT, keyword_contract, response_contract,
};
use scriptwright_core::{
    CompetitorAnalysis, ContinuationRequest, FreshAnalysisRequest, GenerationMode,
    GenerationRequest, ProductionParams, SECONDS_PER_SCENE, SceneBudget, Schema,
};
use std::fmt::Write;

/// Everything sent to the model for one call, apart from reference images.
#[derive(Debug, Clone, PartialEq, derive_getters::Getters)]
pub struct Directive {
    /// Standing role instructions
    system: String,
    /// The task itself
    instruction: String,
    /// Output contract
    schema: Schema,
}

impl Directive {
    /// Splits the directive into its parts.
    pub fn into_parts(self) -> (String, String, Schema) {
        (self.system, self.instruction, self.schema)
    }
}

const ANALYST_ROLE: &str = "You are a master content strategist and screenwriter for short-form \
    video. You answer with a single JSON object that follows the response schema exactly, with no \
    markdown and no commentary.";

const SERIES_ROLE: &str = "You are a master screenwriter who writes the next episode of an \
    existing video series while keeping every established fact consistent. You answer with a \
    single JSON object that follows the response schema exactly, with no markdown and no \
    commentary.";

const KEYWORD_ROLE: &str = "You are a video SEO researcher. You answer with a JSON array of \
    strings and nothing else.";

/// Builds the directive for a generation request.
///
/// The request should already be validated; the assembler trusts its fields.
pub fn assemble(request: &GenerationRequest, budget: SceneBudget) -> Directive {
    let (system, instruction) = match &request.mode {
        GenerationMode::FreshAnalysis(fresh) => (
            ANALYST_ROLE,
            fresh_analysis_instruction(&request.common, fresh, budget),
        ),
        GenerationMode::Continuation(continuation) => (
            SERIES_ROLE,
            continuation_instruction(&request.common, continuation, budget),
        ),
    };

    Directive {
        system: system.to_string(),
        instruction,
        schema: response_contract(),
    }
}

/// Builds the keyword-suggestion directive for a reference video.
pub fn assemble_keywords(reference_video: &str) -> Directive {
    let instruction = format!(
        "Analyze the video at {}. From its title, description and inferable content, produce \
         10 to 15 primary and secondary keywords that would help create new, related content. \
         Return them as a JSON array of strings only.",
        reference_video
    );

    Directive {
        system: KEYWORD_ROLE.to_string(),
        instruction,
        schema: keyword_contract(),
    }
}

fn fresh_analysis_instruction(
    common: &ProductionParams,
    request: &FreshAnalysisRequest,
    budget: SceneBudget,
) -> String {
    let mut out = String::new();

    out.push_str("## Inputs\n");
    let _ = writeln!(out, "- Reference video to analyze: {}", request.reference_video);
    if let Some(channel) = &request.channel {
        let _ = writeln!(out, "- My own video/channel, for style reference: {}", channel);
    }
    if !request.images.is_empty() {
        let _ = writeln!(
            out,
            "- {} attached reference image(s) showing the desired style.",
            request.images.len()
        );
    }
    production_lines(&mut out, common);
    let _ = writeln!(out, "- My competitive angle: \"{}\"", request.competitive_angle);
    if !request.target_keywords.is_empty() {
        let _ = writeln!(
            out,
            "- TARGET SEO KEYWORDS (mandatory, the script and SEO block must be optimized for them): {}",
            request.target_keywords.join(", ")
        );
    }
    if !request.suggested_keywords.is_empty() {
        let _ = writeln!(
            out,
            "- Suggested keywords (reference only): {}",
            request.suggested_keywords.join(", ")
        );
    }
    out.push('\n');

    visual_style_family(&mut out, common);

    out.push_str("## Phase 1: competitor analysis\n");
    out.push_str(
        "1. Break the reference video into logical segments (hook, problem, solution, climax, \
         conclusion, ...) with timestamps and the purpose of each.\n",
    );
    out.push_str(
        "2. Identify exactly what it does well (story, visuals, pacing) and what it does poorly \
         or misses (implausible beats, clichéd lines, weak ending).\n",
    );
    let _ = writeln!(
        out,
        "3. Propose exactly {} content gaps: angles the reference leaves unexplored.",
        CONTENT_GAP_COUNT
    );
    out.push_str("4. Put all of this in `competitorAnalysis`.\n\n");

    out.push_str("## Phase 2: a superior replacement script\n");
    out.push_str(
        "1. Using the whole analysis, my competitive angle and the style of the reference images \
         and my channel (when given), write a completely new script in the same genre. Keep the \
         strengths, fix every weakness and fill all the content gaps. It must be more gripping, \
         more logical and more dramatic: an upgrade in every respect.\n",
    );
    if !request.target_keywords.is_empty() {
        out.push_str("   Center the content on the target SEO keywords.\n");
    }
    out.push_str(
        "2. In `overview.ho_so_nhan_vat` write a detailed profile for every character with name, \
         description, appearance, personality and voice_profile (tone, pitch, speed, style). \
         These profiles anchor the consistency of the whole series.\n",
    );
    out.push_str(
        "3. Direct every scene: each motion prompt is a vivid picture of mood and atmosphere, \
         with production notes in `visuals_notes`.\n",
    );
    suggestions_line(&mut out, "this new script");
    out.push_str("5. Put the script in `optimizedScript` and the suggestions in `suggestions`.\n\n");

    consistency_rules(&mut out, common, "the overview");
    scene_budget_rules(&mut out, common, budget);
    closing(&mut out);
    out
}

fn continuation_instruction(
    common: &ProductionParams,
    request: &ContinuationRequest,
    budget: SceneBudget,
) -> String {
    let mut out = String::new();

    out.push_str(
        "You are writing the NEXT EPISODE of an existing series and must stay fully consistent \
         with the episodes before it.\n\n",
    );
    out.push_str("## Core inputs\n");
    let _ = writeln!(
        out,
        "1. SERIES BIBLE (the rules of the series):\n{}\n   Every character, visual-style and \
         tone claim in the new script must conform to this bible.",
        request.series_bible.trim()
    );
    let _ = writeln!(
        out,
        "2. LAST SCENE OF THE PREVIOUS EPISODE:\n{}\n   The first scene of the new episode must \
         continue directly and logically from this scene's action and dialogue.",
        request.last_scene.trim()
    );
    let _ = writeln!(out, "3. TOPIC OF THE NEW EPISODE: \"{}\"\n", request.topic);

    out.push_str("## Production\n");
    production_lines(&mut out, common);
    out.push('\n');

    out.push_str("## Process\n");
    out.push_str("1. Study the series bible, the last scene and the new topic.\n");
    out.push_str(
        "2. Write a completely new, engaging episode about the topic. Its opening scene picks up \
         right after the previous episode's last scene. Apply the bible strictly to every scene.\n",
    );
    out.push_str(
        "3. Direct every scene: each motion prompt matches the established tone, with production \
         notes in `visuals_notes`.\n",
    );
    suggestions_line(&mut out, "this episode");
    let placeholder = serde_json::to_string(&CompetitorAnalysis::not_applicable())
        .unwrap_or_else(|_| "{}".to_string());
    let _ = writeln!(
        out,
        "5. Skip competitor analysis: this is a continuation. Fill `competitorAnalysis` with \
         exactly this placeholder: {}\n",
        placeholder
    );

    consistency_rules(&mut out, common, "the series bible");
    scene_budget_rules(&mut out, common, budget);
    closing(&mut out);
    out
}

fn production_lines(out: &mut String, common: &ProductionParams) {
    let _ = writeln!(out, "- Genre: {}", common.genre);
    let _ = writeln!(out, "- Target length: {} minutes", common.minutes);
    let _ = writeln!(out, "- Dialogue language: **{}**", common.dialogue_language);
    let _ = writeln!(out, "- Narration voice: **{}**", common.voice);
}

fn visual_style_family(out: &mut String, common: &ProductionParams) {
    out.push_str("## Visual style (critical)\n");
    if common.wants_3d() {
        out.push_str(
            "- `phong_cach_hinh_anh` MUST be a detailed 3D animation style (for example \
             'Pixar-style 3D animation, vibrant colors, soft textures, cinematic lighting'). \
             Never write photorealistic image prompts.\n\n",
        );
    } else {
        out.push_str(
            "- `phong_cach_hinh_anh` MUST be a cinematic, realistic style (for example \
             'Cinematic, realistic 8K photo, dramatic lighting, sharp focus, hyper-detailed'). \
             Never write animated or cartoon image prompts.\n\n",
        );
    }
}

fn suggestions_line(out: &mut String, subject: &str) {
    let _ = writeln!(
        out,
        "4. Create {} title candidates and {} thumbnail concepts, search-optimized and \
         compelling, for {}.",
        SUGGESTION_COUNT, SUGGESTION_COUNT, subject
    );
}

fn consistency_rules(out: &mut String, common: &ProductionParams, canon: &str) {
    out.push_str("## Consistency rules (never break these)\n");
    let _ = writeln!(
        out,
        "1. VISUAL UNITY: copy the `phong_cach_hinh_anh` string from {} verbatim as the FIRST \
         segment of EVERY `imagePrompt`.",
        canon
    );
    let _ = writeln!(
        out,
        "2. CHARACTER INTEGRITY: for EVERY scene, find the profile in `ho_so_nhan_vat` from {} of \
         ALL characters present. Right after the visual style in `imagePrompt`, insert each one's \
         full description (the `description` string followed by the `appearance` string). The \
         motion prompt's `character` field must START with the same full descriptions.",
        canon
    );
    out.push_str(
        "3. VOICE CONSISTENCY: write all dialogue in the style of the speaking character's \
         `voice_profile`. When several characters speak in one scene, format every line as \
         'NAME: line'.\n",
    );
    let _ = writeln!(
        out,
        "4. LANGUAGE DISCIPLINE: `dialogue` is written ONLY in {}. Every other field keeps its \
         fixed language: descriptive and prompt fields in {}, narrative and production fields \
         in {}.",
        common.dialogue_language, DESCRIPTIVE_LANGUAGE, NARRATIVE_LANGUAGE
    );
    out.push_str(
        "5. SCENE CONTINUITY: each scene opens as the direct, logical continuation of the end of \
         the previous one. No unexplained jumps in time or place unless clearly intended as a \
         montage or flashback.\n\n",
    );
}

fn scene_budget_rules(out: &mut String, common: &ProductionParams, budget: SceneBudget) {
    out.push_str("## Scene count (most important rule)\n");
    let _ = writeln!(
        out,
        "- For {} minutes the total number of scenes across intro, body and outro MUST be between \
         **{} and {}** (ideally {}). Anything outside this range is a failure.",
        common.minutes,
        budget.min(),
        budget.max(),
        budget.target()
    );
    out.push_str(
        "- Design the story to fit this count by pacing, extending or tightening beats. Do not \
         write the story first and count afterwards.\n",
    );
    out.push_str(
        "- Distribute the scenes sensibly across intro, body and outro. `sceneNumber` starts at 1 \
         and increases by 1 without resetting between sections.\n\n",
    );

    out.push_str("## Dialogue length\n");
    let _ = writeln!(
        out,
        "- Each scene lasts at most {} seconds, so `dialogue` must NEVER exceed {} words \
         (about {} characters).\n",
        SECONDS_PER_SCENE, DIALOGUE_WORD_LIMIT, DIALOGUE_CHAR_LIMIT
    );
}

fn closing(out: &mut String) {
    out.push_str("Return one valid JSON object that follows the schema and nothing else.\n");
}
