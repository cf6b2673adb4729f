//! Generation command handlers.

use super::commands::{AnalyzeArgs, ContinueArgs, ProductionArgs};
use super::media::{load_reference_images, read_text};
use super::output::emit_json;
use super::library::{find_entry, open_library};
use scriptwright::{
    BuilderError, ContinuationRequest, FreshAnalysisRequest, GeminiClient, GenerationRequest, ProductionParams,
    RequestError, ScriptLibrary, ScriptOrchestrator, ScriptwrightConfig, ScriptwrightResult,
};
use tracing::{info, instrument};

fn orchestrator(config: &ScriptwrightConfig) -> ScriptwrightResult<ScriptOrchestrator<GeminiClient>> {
    let client = GeminiClient::new()?.with_model(config.generation_model.clone());
    Ok(ScriptOrchestrator::new(client, config.clone()))
}

fn production_params(args: &ProductionArgs) -> ProductionParams {
    ProductionParams {
        minutes: args.minutes,
        genre: args.genre.clone(),
        dialogue_language: args.dialogue_language.clone(),
        voice: args.voice.clone(),
    }
}

/// Run a fresh competitive analysis.
#[instrument(skip_all, fields(video = %args.video, images = args.images.len()))]
pub async fn run_analyze(args: AnalyzeArgs, config: &ScriptwrightConfig) -> ScriptwrightResult<()> {
    let images = load_reference_images(&args.images).await?;

    let mut builder = FreshAnalysisRequest::builder();
    builder
        .reference_video(args.video)
        .images(images)
        .competitive_angle(args.angle)
        .target_keywords(args.target_keywords)
        .suggested_keywords(args.suggested_keywords);
    if let Some(channel) = args.channel {
        builder.channel(channel);
    }
    let fresh = builder.build().map_err(BuilderError::from)?;
    let request = GenerationRequest::fresh_analysis(production_params(&args.production), fresh);

    generate(&request, &args.production, config).await
}

/// Continue an existing series.
#[instrument(skip_all, fields(from = ?args.from))]
pub async fn run_continue(args: ContinueArgs, config: &ScriptwrightConfig) -> ScriptwrightResult<()> {
    let continuation = match &args.from {
        Some(id) => {
            let library = open_library(config).await?;
            find_entry(&library, id).await?.next_episode(args.topic.clone())?
        }
        None => {
            let bible = args
                .bible
                .as_deref()
                .ok_or_else(|| RequestError::missing("series", "series bible"))?;
            let last_scene = args
                .last_scene
                .as_deref()
                .ok_or_else(|| RequestError::missing("series", "last scene"))?;
            ContinuationRequest {
                series_bible: read_text(bible).await?,
                last_scene: read_text(last_scene).await?,
                topic: args.topic.clone(),
            }
        }
    };
    let request =
        GenerationRequest::continuation(production_params(&args.production), continuation);

    generate(&request, &args.production, config).await
}

async fn generate(
    request: &GenerationRequest,
    production: &ProductionArgs,
    config: &ScriptwrightConfig,
) -> ScriptwrightResult<()> {
    let result = orchestrator(config)?.generate_script(request).await?;

    if production.save {
        let library = open_library(config).await?;
        library.save(&result).await?;
        info!(id = %result.id, path = %library.path().display(), "Saved result to library");
    }

    emit_json(&result, production.output.as_deref()).await
}

/// Suggest SEO keywords for a video, one per line.
#[instrument(skip(config))]
pub async fn run_keywords(video: &str, config: &ScriptwrightConfig) -> ScriptwrightResult<()> {
    let keywords = orchestrator(config)?.suggest_keywords(video).await?;
    for keyword in keywords {
        println!("{}", keyword);
    }
    Ok(())
}
