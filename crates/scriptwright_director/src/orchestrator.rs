//! End-to-end generation: validate, assemble, call the model, map, audit.

use crate::audit::{AuditReport, audit_result};
use crate::config::ScriptwrightConfig;
use crate::continuity::resolve_bible;
use crate::directive::{Directive, assemble, assemble_keywords};
use crate::ids::IdGenerator;
use crate::images::encode_images;
use crate::response::{parse_keywords, parse_payload};
use scriptwright_core::{
    GenerateRequest, GenerationMode, GenerationRequest, GenerationResult, Input, Message,
};
use scriptwright_error::{ContractError, ContractErrorKind, RequestError, ScriptwrightResult};
use scriptwright_interface::ScriptwrightDriver;
use tracing::{debug, info, instrument, warn};

/// Turns generation requests into validated, identified results.
///
/// One orchestrator owns one driver and one identifier generator; ids it issues are
/// unique for its lifetime.
#[derive(Debug)]
pub struct ScriptOrchestrator<D: ScriptwrightDriver> {
    driver: D,
    config: ScriptwrightConfig,
    ids: IdGenerator,
}

impl<D: ScriptwrightDriver> ScriptOrchestrator<D> {
    /// Create an orchestrator around a driver.
    pub fn new(driver: D, config: ScriptwrightConfig) -> Self {
        Self {
            driver,
            config,
            ids: IdGenerator::new(),
        }
    }

    /// The underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Active configuration.
    pub fn config(&self) -> &ScriptwrightConfig {
        &self.config
    }

    /// Generate a script for either mode.
    ///
    /// # Errors
    ///
    /// - Request errors for missing mode fields, zero duration or an unparsable bible,
    ///   raised before the model is called
    /// - Driver errors, unmodified
    /// - Contract errors when the response is empty or not the contracted structure,
    ///   and in strict mode when the scene audit finds blocking problems
    #[instrument(
        skip_all,
        fields(
            mode = %request.tag(),
            minutes = request.common.minutes,
            model = %self.config.generation_model,
        )
    )]
    pub async fn generate_script(
        &self,
        request: &GenerationRequest,
    ) -> ScriptwrightResult<GenerationResult> {
        request.validate()?;

        let budget = request.common.budget();
        debug!(
            target_scenes = budget.target(),
            min_scenes = budget.min(),
            max_scenes = budget.max(),
            "Computed scene budget"
        );

        let images = match &request.mode {
            GenerationMode::FreshAnalysis(fresh) => encode_images(&fresh.images).await?,
            GenerationMode::Continuation(_) => Vec::new(),
        };

        let directive = assemble(request, budget);
        let generate = self.build_request(
            directive,
            images,
            &self.config.generation_model,
            Some(self.config.temperature),
        );

        let response = self.driver.generate(&generate).await?;
        let raw = response
            .text()
            .ok_or_else(|| ContractError::new(ContractErrorKind::EmptyResponse("script".into())))?;

        let payload = parse_payload(&raw)?;
        let series_bible = resolve_bible(&request.mode, &payload)?;

        let result = GenerationResult {
            id: self.ids.next(request.tag()),
            competitor_analysis: payload.competitor_analysis,
            script: payload.optimized_script,
            suggestions: payload.suggestions,
            series_bible,
        };
        self.enforce(&audit_result(request.tag(), &result, budget))?;

        info!(
            id = %result.id,
            scenes = result.script.scene_count(),
            "Generated script"
        );
        Ok(result)
    }

    /// Suggest SEO keywords for a reference video.
    ///
    /// Returns the keywords in the order the model gave them.
    #[instrument(skip_all, fields(model = %self.config.keyword_model))]
    pub async fn suggest_keywords(&self, reference_video: &str) -> ScriptwrightResult<Vec<String>> {
        if reference_video.trim().is_empty() {
            return Err(RequestError::missing("keywords", "reference video").into());
        }

        let directive = assemble_keywords(reference_video);
        let generate = self.build_request(directive, Vec::new(), &self.config.keyword_model, None);

        let response = self.driver.generate(&generate).await?;
        let raw = response.text().ok_or_else(|| {
            ContractError::new(ContractErrorKind::EmptyResponse("keywords".into()))
        })?;

        let keywords = parse_keywords(&raw)?;
        debug!(count = keywords.len(), "Parsed keyword suggestions");
        Ok(keywords)
    }

    fn build_request(
        &self,
        directive: Directive,
        images: Vec<Input>,
        model: &str,
        temperature: Option<f32>,
    ) -> GenerateRequest {
        let (system, instruction, schema) = directive.into_parts();

        let mut content = Vec::with_capacity(images.len() + 1);
        content.push(Input::Text(instruction));
        content.extend(images);

        GenerateRequest {
            messages: vec![Message::system(system), Message::user(content)],
            temperature,
            model: Some(model.to_string()),
            response_schema: Some(schema),
            ..Default::default()
        }
    }

    fn enforce(&self, report: &AuditReport) -> Result<(), ContractError> {
        for finding in report.findings() {
            warn!(finding = %finding, blocking = finding.is_blocking(), "Scene audit finding");
        }

        if self.config.strict_scene_audit && report.has_blocking() {
            let summary = report
                .blocking()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(ContractError::new(ContractErrorKind::SceneAudit(summary)));
        }
        Ok(())
    }
}

