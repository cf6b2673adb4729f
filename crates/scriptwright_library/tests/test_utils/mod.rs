//! Shared fixtures for library tests.

use scriptwright_core::{
    CharacterProfile, CompetitorAnalysis, GenerationResult, MotionPrompt, Scene, Script,
    ScriptOverview, SeoInfo, SeriesBible, Suggestions,
};

/// A small but complete result with the given id and title.
pub fn sample_result(id: &str, title: &str) -> GenerationResult {
    let overview = ScriptOverview {
        summary: "Hai anh em đi tìm kho báu".to_string(),
        setting: "Một hòn đảo nhiệt đới".to_string(),
        characters: vec![CharacterProfile {
            name: "Lan".to_string(),
            description: "The older sister, a map reader.".to_string(),
            appearance: "Red scarf, braided hair.".to_string(),
            personality: "Brave".to_string(),
            voice_profile: "Clear, medium pitch, steady".to_string(),
        }],
        tone: "Adventurous".to_string(),
        visual_style: "Stylized 3D animation".to_string(),
    };

    let scene = Scene {
        scene_number: 1,
        setting: "Bãi biển".to_string(),
        image_prompt: "Stylized 3D animation. The older sister, a map reader.".to_string(),
        negative_image_prompt: "low quality".to_string(),
        motion_prompt: MotionPrompt {
            character: "Lan".to_string(),
            setting: "Beach".to_string(),
            lighting: "Noon sun".to_string(),
            action: "Lan unrolls the map".to_string(),
            dialogue: "Lan: This way!".to_string(),
            camera_movement: "Pan left".to_string(),
            sound_effects: "Gulls".to_string(),
            background_music: "Upbeat".to_string(),
            secondary_character_details: None,
            visuals_notes: "Ánh sáng rực rỡ".to_string(),
            negative_motion_prompt: "flicker".to_string(),
        },
    };

    GenerationResult {
        id: id.to_string(),
        competitor_analysis: CompetitorAnalysis::not_applicable(),
        series_bible: SeriesBible::from_overview(&overview),
        script: Script {
            overview,
            seo: SeoInfo {
                title: title.to_string(),
                primary_keywords: vec!["treasure".to_string()],
                secondary_keywords: vec!["island".to_string()],
                related_keywords: vec!["kids".to_string()],
            },
            intro: vec![scene],
            body: Vec::new(),
            outro: Vec::new(),
        },
        suggestions: Suggestions {
            titles: vec![title.to_string(); 5],
            thumbnail_ideas: vec!["Map close-up".to_string(); 5],
        },
    }
}
