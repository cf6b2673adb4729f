mod test_utils;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use scriptwright_core::{
    Input, MediaSource, ReferenceImage, Role, SceneBudget, SchemaType, ScriptMode, SeriesBible,
};
use scriptwright_director::{AuditFinding, ScriptOrchestrator, ScriptwrightConfig, audit_result};
use scriptwright_error::{
    ContractErrorKind, GeminiErrorKind, RequestErrorKind, ScriptwrightErrorKind,
};
use scriptwright_interface::ScriptLibrary;
use scriptwright_library::InMemoryLibrary;
use test_utils::{
    MockDriver, MockResponse, VISUAL_STYLE, analysis, continuation_request, fresh_request,
    payload, payload_text, placeholder_analysis, sample_bible,
};

fn orchestrator(driver: MockDriver) -> ScriptOrchestrator<MockDriver> {
    ScriptOrchestrator::new(driver, ScriptwrightConfig::default())
}

fn strict(driver: MockDriver) -> ScriptOrchestrator<MockDriver> {
    let config = ScriptwrightConfig {
        strict_scene_audit: true,
        ..Default::default()
    };
    ScriptOrchestrator::new(driver, config)
}

#[tokio::test]
async fn test_fresh_analysis_derives_bible_from_overview() -> anyhow::Result<()> {
    let driver = MockDriver::new_success(payload_text(8, analysis()));
    let orchestrator = orchestrator(driver.clone());

    let result = orchestrator.generate_script(&fresh_request(1, vec![])).await?;

    assert!(result.id.starts_with("analysis_"));
    assert_eq!(result.series_bible.characters, result.script.overview.characters);
    assert_eq!(result.series_bible.visual_style, VISUAL_STYLE);
    assert_eq!(result.series_bible.shared_setting, result.script.overview.setting);
    assert_eq!(result.script.scene_count(), 8);
    assert_eq!(result.competitor_analysis.content_gaps.len(), 3);
    assert_eq!(driver.call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_continuation_returns_input_bible_unchanged() -> anyhow::Result<()> {
    // The model's overview drifts from the canon; the bible must not.
    let mut response = payload(8, placeholder_analysis());
    response["optimizedScript"]["overview"]["phong_cach_hinh_anh"] = "Watercolor".into();
    response["optimizedScript"]["overview"]["ho_so_nhan_vat"] = serde_json::json!([]);

    let driver = MockDriver::new_success(response.to_string());
    let orchestrator = orchestrator(driver);
    let bible = sample_bible();

    let result = orchestrator
        .generate_script(&continuation_request(1, &bible))
        .await?;

    assert!(result.id.starts_with("series_"));
    assert_eq!(result.series_bible, bible);
    assert!(result.competitor_analysis.is_placeholder());
    Ok(())
}

#[tokio::test]
async fn test_continuation_style_drift_is_audited_against_bible() -> anyhow::Result<()> {
    // Overview and prompts drift together, so only the bible exposes the change.
    let mut response = payload(8, placeholder_analysis());
    response["optimizedScript"]["overview"]["phong_cach_hinh_anh"] = "Watercolor".into();
    for section in ["intro", "body", "outro"] {
        for scene in response["optimizedScript"][section]
            .as_array_mut()
            .unwrap()
            .iter_mut()
        {
            scene["imagePrompt"] = "Watercolor. A curious kitten.".into();
        }
    }

    let orchestrator = orchestrator(MockDriver::new_success(response.to_string()));
    let bible = sample_bible();
    let result = orchestrator
        .generate_script(&continuation_request(1, &bible))
        .await?;

    let report = audit_result(ScriptMode::Continuation, &result, SceneBudget::for_minutes(1));
    let drifted = report
        .findings()
        .iter()
        .filter(|f| matches!(f, AuditFinding::VisualStyleMissing { .. }))
        .count();
    assert_eq!(drifted, 8);
    assert_eq!(report.findings().len(), 8);
    Ok(())
}

#[tokio::test]
async fn test_fresh_result_audits_clean() -> anyhow::Result<()> {
    let orchestrator = orchestrator(MockDriver::new_success(payload_text(8, analysis())));
    let result = orchestrator.generate_script(&fresh_request(1, vec![])).await?;

    let report = audit_result(ScriptMode::FreshAnalysis, &result, SceneBudget::for_minutes(1));
    assert!(report.is_clean(), "{:?}", report);
    Ok(())
}

#[tokio::test]
async fn test_missing_suggestions_is_contract_violation() -> anyhow::Result<()> {
    let mut response = payload(8, analysis());
    response.as_object_mut().unwrap().remove("suggestions");
    let orchestrator = orchestrator(MockDriver::new_success(response.to_string()));

    let err = orchestrator
        .generate_script(&fresh_request(1, vec![]))
        .await
        .unwrap_err();

    assert!(err.is_contract_violation());
    match err.kind() {
        ScriptwrightErrorKind::Contract(contract) => {
            assert!(matches!(contract.kind, ContractErrorKind::InvalidResponse { .. }));
            assert!(contract.to_string().contains("suggestions"));
            assert!(!contract.to_string().contains("Miu"));
        }
        other => panic!("expected contract error, got {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_non_json_response_is_contract_violation() -> anyhow::Result<()> {
    let orchestrator = orchestrator(MockDriver::new_success("Sorry, I can't help with that."));

    let err = orchestrator
        .generate_script(&fresh_request(1, vec![]))
        .await
        .unwrap_err();

    assert!(err.is_contract_violation());
    Ok(())
}

#[tokio::test]
async fn test_fenced_response_is_accepted() -> anyhow::Result<()> {
    let fenced = format!("```json\n{}\n```", payload_text(8, analysis()));
    let orchestrator = orchestrator(MockDriver::new_success(fenced));

    let result = orchestrator.generate_script(&fresh_request(1, vec![])).await?;

    assert_eq!(result.script.scene_count(), 8);
    Ok(())
}

#[tokio::test]
async fn test_empty_response_is_contract_violation() -> anyhow::Result<()> {
    let orchestrator = orchestrator(MockDriver::new_empty());

    let err = orchestrator
        .generate_script(&fresh_request(1, vec![]))
        .await
        .unwrap_err();

    match err.kind() {
        ScriptwrightErrorKind::Contract(contract) => {
            assert!(matches!(contract.kind, ContractErrorKind::EmptyResponse(_)));
        }
        other => panic!("expected contract error, got {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_request_errors_precede_model_call() -> anyhow::Result<()> {
    let driver = MockDriver::new_success(payload_text(8, analysis()));
    let orchestrator = orchestrator(driver.clone());

    let mut zero = fresh_request(1, vec![]);
    zero.common.minutes = 0;
    let err = orchestrator.generate_script(&zero).await.unwrap_err();
    assert!(err.is_request_error());

    let mut blank_voice = fresh_request(1, vec![]);
    blank_voice.common.voice = "   ".to_string();
    assert!(orchestrator.generate_script(&blank_voice).await.unwrap_err().is_request_error());

    let mut bad_bible = continuation_request(1, &sample_bible());
    if let scriptwright_core::GenerationMode::Continuation(ref mut c) = bad_bible.mode {
        c.series_bible = "{not json".to_string();
    }
    let err = orchestrator.generate_script(&bad_bible).await.unwrap_err();
    match err.kind() {
        ScriptwrightErrorKind::Request(request) => {
            assert!(matches!(request.kind, RequestErrorKind::InvalidSeriesBible(_)));
        }
        other => panic!("expected request error, got {:?}", other),
    }

    let bad_image = ReferenceImage {
        mime_type: "text/plain".to_string(),
        data: b"hello".to_vec(),
    };
    let err = orchestrator
        .generate_script(&fresh_request(1, vec![bad_image]))
        .await
        .unwrap_err();
    assert!(err.is_request_error());

    assert_eq!(driver.call_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_driver_errors_propagate_unmodified() -> anyhow::Result<()> {
    let driver = MockDriver::new_error(GeminiErrorKind::HttpError {
        status_code: 429,
        message: "Resource exhausted".to_string(),
    });
    let orchestrator = orchestrator(driver.clone());

    let err = orchestrator
        .generate_script(&fresh_request(1, vec![]))
        .await
        .unwrap_err();

    match err.kind() {
        ScriptwrightErrorKind::Gemini(gemini) => assert!(gemini.kind.is_quota_or_auth()),
        other => panic!("expected gemini error, got {:?}", other),
    }
    assert_eq!(driver.call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_request_shape_sent_to_driver() -> anyhow::Result<()> {
    let images = vec![
        ReferenceImage {
            mime_type: "image/png".to_string(),
            data: vec![1, 2, 3],
        },
        ReferenceImage {
            mime_type: "image/jpeg".to_string(),
            data: vec![4, 5, 6, 7],
        },
    ];
    let driver = MockDriver::new_success(payload_text(8, analysis()));
    let orchestrator = orchestrator(driver.clone());

    orchestrator.generate_script(&fresh_request(1, images)).await?;

    let sent = driver.last_request();
    assert_eq!(sent.model.as_deref(), Some("gemini-2.5-pro"));
    assert_eq!(sent.temperature, Some(0.8));
    let schema = sent.response_schema.as_ref().expect("schema sent");
    assert_eq!(schema.kind(), SchemaType::Object);
    assert!(schema.required().iter().any(|f| f == "suggestions"));

    assert_eq!(sent.messages.len(), 2);
    assert_eq!(sent.messages[0].role, Role::System);
    let user = &sent.messages[1];
    assert_eq!(user.role, Role::User);
    assert!(matches!(&user.content[0], Input::Text(text) if text.contains("https://youtu.be/reference")));

    let encoded: Vec<(String, String)> = user.content[1..]
        .iter()
        .map(|input| match input {
            Input::Image {
                mime,
                source: MediaSource::Base64(data),
            } => (mime.clone(), data.clone()),
            other => panic!("expected base64 image, got {:?}", other),
        })
        .collect();
    assert_eq!(
        encoded,
        vec![
            ("image/png".to_string(), STANDARD.encode([1, 2, 3])),
            ("image/jpeg".to_string(), STANDARD.encode([4, 5, 6, 7])),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_continuation_sends_bible_and_no_images() -> anyhow::Result<()> {
    let driver = MockDriver::new_success(payload_text(8, placeholder_analysis()));
    let orchestrator = orchestrator(driver.clone());

    orchestrator
        .generate_script(&continuation_request(1, &sample_bible()))
        .await?;

    let sent = driver.last_request();
    let user = &sent.messages[1];
    assert_eq!(user.content.len(), 1);
    match &user.content[0] {
        Input::Text(text) => {
            assert!(text.contains("Miu waves goodbye to Bong at the bridge."));
            assert!(text.contains("Miu finds a lost key"));
            assert!(text.contains(VISUAL_STYLE));
        }
        other => panic!("expected text, got {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_out_of_budget_script_passes_by_default() -> anyhow::Result<()> {
    let orchestrator = orchestrator(MockDriver::new_success(payload_text(3, analysis())));

    let result = orchestrator.generate_script(&fresh_request(5, vec![])).await?;

    assert_eq!(result.script.scene_count(), 3);
    Ok(())
}

#[tokio::test]
async fn test_strict_audit_rejects_out_of_budget_script() -> anyhow::Result<()> {
    let orchestrator = strict(MockDriver::new_success(payload_text(3, analysis())));

    let err = orchestrator
        .generate_script(&fresh_request(5, vec![]))
        .await
        .unwrap_err();

    match err.kind() {
        ScriptwrightErrorKind::Contract(contract) => match &contract.kind {
            ContractErrorKind::SceneAudit(summary) => assert!(summary.contains("30..=45")),
            other => panic!("expected scene audit, got {:?}", other),
        },
        other => panic!("expected contract error, got {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_strict_audit_rejects_broken_numbering() -> anyhow::Result<()> {
    let mut response = payload(8, analysis());
    response["optimizedScript"]["intro"][1]["sceneNumber"] = 5.into();
    let orchestrator = strict(MockDriver::new_success(response.to_string()));

    let err = orchestrator
        .generate_script(&fresh_request(1, vec![]))
        .await
        .unwrap_err();

    assert!(err.is_contract_violation());
    Ok(())
}

#[tokio::test]
async fn test_strict_audit_accepts_conforming_script() -> anyhow::Result<()> {
    let orchestrator = strict(MockDriver::new_success(payload_text(38, analysis())));

    let result = orchestrator.generate_script(&fresh_request(5, vec![])).await?;

    assert_eq!(result.script.scene_count(), 38);
    let numbers: Vec<u32> = result.script.scenes().map(|s| s.scene_number).collect();
    assert_eq!(numbers, (1..=38).collect::<Vec<_>>());
    Ok(())
}

#[tokio::test]
async fn test_ids_are_unique_and_results_save_to_library() -> anyhow::Result<()> {
    let driver = MockDriver::new_sequence(vec![
        MockResponse::Text(payload_text(8, analysis())),
        MockResponse::Text(payload_text(8, placeholder_analysis())),
    ]);
    let orchestrator = orchestrator(driver);
    let library = InMemoryLibrary::new();

    let first = orchestrator.generate_script(&fresh_request(1, vec![])).await?;
    let bible: SeriesBible = first.series_bible.clone();
    let second = orchestrator
        .generate_script(&continuation_request(1, &bible))
        .await?;
    assert_ne!(first.id, second.id);

    library.save(&first).await?;
    library.save(&second).await?;

    let listed = library.list().await?;
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, second.id);
    assert_eq!(library.get(&first.id).await?, Some(first));
    Ok(())
}

#[tokio::test]
async fn test_suggest_keywords_uses_keyword_model() -> anyhow::Result<()> {
    let driver = MockDriver::new_success(r#"["bedtime story", "kitten cartoon", "lullaby"]"#);
    let orchestrator = orchestrator(driver.clone());

    let keywords = orchestrator.suggest_keywords("https://youtu.be/reference").await?;

    assert_eq!(keywords, vec!["bedtime story", "kitten cartoon", "lullaby"]);
    let sent = driver.last_request();
    assert_eq!(sent.model.as_deref(), Some("gemini-2.5-flash"));
    let schema = sent.response_schema.as_ref().expect("schema sent");
    assert_eq!(schema.kind(), SchemaType::Array);
    Ok(())
}

#[tokio::test]
async fn test_suggest_keywords_rejects_blank_video() -> anyhow::Result<()> {
    let driver = MockDriver::new_success("[]");
    let orchestrator = orchestrator(driver.clone());

    let err = orchestrator.suggest_keywords("  ").await.unwrap_err();

    assert!(err.is_request_error());
    assert_eq!(driver.call_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_suggest_keywords_rejects_object_response() -> anyhow::Result<()> {
    let orchestrator = orchestrator(MockDriver::new_success(r#"{"keywords": ["a"]}"#));

    let err = orchestrator
        .suggest_keywords("https://youtu.be/reference")
        .await
        .unwrap_err();

    assert!(err.is_contract_violation());
    Ok(())
}
