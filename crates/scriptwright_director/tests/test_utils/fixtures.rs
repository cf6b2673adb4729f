//! Request and response fixtures.

use scriptwright_core::{
    CharacterProfile, ContinuationRequest, FreshAnalysisRequest, GenerationRequest,
    ProductionParams, ReferenceImage, SeriesBible,
};
use serde_json::{Value, json};

pub const VISUAL_STYLE: &str = "Soft pastel 3D animation";

/// Production parameters for a clip of the given length.
pub fn params(minutes: u32) -> ProductionParams {
    ProductionParams {
        minutes,
        genre: "3D animation".to_string(),
        dialogue_language: "Vietnamese".to_string(),
        voice: "Warm female narrator".to_string(),
    }
}

/// A valid fresh-analysis request carrying `images`.
pub fn fresh_request(minutes: u32, images: Vec<ReferenceImage>) -> GenerationRequest {
    let fresh = FreshAnalysisRequest::builder()
        .reference_video("https://youtu.be/reference")
        .channel("https://youtube.com/@mychannel")
        .images(images)
        .competitive_angle("Stronger emotional payoff")
        .target_keywords(vec!["bedtime story".to_string()])
        .build()
        .expect("fixture request builds");
    GenerationRequest::fresh_analysis(params(minutes), fresh)
}

/// A bible with two characters.
pub fn sample_bible() -> SeriesBible {
    SeriesBible {
        characters: vec![
            character("Miu", "A curious kitten.", "Orange fur, blue bell collar."),
            character("Bong", "A sleepy owl.", "Grey feathers, round glasses."),
        ],
        visual_style: VISUAL_STYLE.to_string(),
        tone: "Gentle".to_string(),
        shared_setting: "A forest village".to_string(),
    }
}

/// A valid continuation request for `bible`.
pub fn continuation_request(minutes: u32, bible: &SeriesBible) -> GenerationRequest {
    GenerationRequest::continuation(
        params(minutes),
        ContinuationRequest {
            series_bible: serde_json::to_string(bible).expect("bible serializes"),
            last_scene: "Miu waves goodbye to Bong at the bridge.".to_string(),
            topic: "Miu finds a lost key".to_string(),
        },
    )
}

fn character(name: &str, description: &str, appearance: &str) -> CharacterProfile {
    CharacterProfile {
        name: name.to_string(),
        description: description.to_string(),
        appearance: appearance.to_string(),
        personality: "Kind".to_string(),
        voice_profile: "Soft, high pitch, slow".to_string(),
    }
}

fn scene(number: usize) -> Value {
    json!({
        "sceneNumber": number,
        "setting": "Khu rừng",
        "imagePrompt": format!("{}. A curious kitten. Orange fur, blue bell collar.", VISUAL_STYLE),
        "negativeImagePrompt": "blurry",
        "motionPrompt": {
            "character": "A curious kitten. Orange fur, blue bell collar.",
            "setting": "Forest path",
            "lighting": "Golden hour",
            "action": "Miu hops over a root",
            "dialogue": "Miu: Xin chào!",
            "camera_movement": "Slow dolly in",
            "sound_effects": "Leaves rustling",
            "background_music": "Soft piano",
            "visuals_notes": "Ánh sáng ấm",
            "negativeMotionPrompt": "jitter"
        }
    })
}

/// A contract-conforming response with `scenes` contiguous scenes.
///
/// The overview's characters, style, tone and setting match [`sample_bible`].
pub fn payload(scenes: usize, analysis: Value) -> Value {
    let all: Vec<Value> = (1..=scenes).map(scene).collect();
    let intro_len = scenes.min(2);
    let outro_len = scenes.saturating_sub(intro_len).min(2);
    let body_end = scenes - outro_len;

    json!({
        "competitorAnalysis": analysis,
        "optimizedScript": {
            "overview": {
                "tom_tat": "Miu đi tìm chìa khóa",
                "boi_canh": "A forest village",
                "ho_so_nhan_vat": serde_json::to_value(&sample_bible().characters).expect("characters serialize"),
                "tong_giong": "Gentle",
                "phong_cach_hinh_anh": VISUAL_STYLE
            },
            "seo": {
                "tieu_de": "Miu và chiếc chìa khóa",
                "tu_khoa_chinh": ["bedtime story"],
                "tu_khoa_phu": ["kitten"],
                "tu_khoa_lien_quan": ["kids cartoon"]
            },
            "intro": &all[..intro_len],
            "body": &all[intro_len..body_end],
            "outro": &all[body_end..]
        },
        "suggestions": {
            "titles": ["T1", "T2", "T3", "T4", "T5"],
            "thumbnailIdeas": ["I1", "I2", "I3", "I4", "I5"]
        }
    })
}

/// A full fresh-analysis analysis block.
pub fn analysis() -> Value {
    json!({
        "structuralAnalysis": [
            {"phan_doan": "Hook", "mo_ta": "Mở đầu bằng câu hỏi"},
            {"phan_doan": "Payoff", "mo_ta": "Kết thúc bất ngờ"}
        ],
        "strengths": ["Nhịp nhanh"],
        "weaknesses": ["Nhân vật mờ nhạt"],
        "contentGaps": ["Gap 1", "Gap 2", "Gap 3"]
    })
}

/// The continuation placeholder analysis block.
pub fn placeholder_analysis() -> Value {
    serde_json::to_value(scriptwright_core::CompetitorAnalysis::not_applicable())
        .expect("placeholder serializes")
}

/// [`payload`] rendered to response text.
pub fn payload_text(scenes: usize, analysis: Value) -> String {
    payload(scenes, analysis).to_string()
}
