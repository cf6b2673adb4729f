//! Reference-image preparation.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use futures::future::join_all;
use scriptwright_core::{Input, MediaSource, ReferenceImage};
use scriptwright_error::{RequestError, RequestErrorKind, ScriptwrightResult};
use tracing::{debug, instrument};

/// Encodes reference images as inline base64 inputs.
///
/// Conversions run concurrently on the blocking pool; the output keeps input order.
///
/// # Errors
///
/// Returns a request error if an image has no image MIME type, carries no bytes, or its
/// conversion task fails.
#[instrument(skip(images), fields(count = images.len()))]
pub async fn encode_images(images: &[ReferenceImage]) -> ScriptwrightResult<Vec<Input>> {
    for (index, image) in images.iter().enumerate() {
        if !image.mime_type.starts_with("image/") {
            return Err(RequestError::new(RequestErrorKind::ImageEncoding {
                index,
                reason: format!("unsupported MIME type '{}'", image.mime_type),
            })
            .into());
        }
        if image.data.is_empty() {
            return Err(RequestError::new(RequestErrorKind::ImageEncoding {
                index,
                reason: "image has no data".to_string(),
            })
            .into());
        }
    }

    let tasks = images.iter().cloned().map(|image| {
        tokio::task::spawn_blocking(move || {
            let encoded = STANDARD.encode(&image.data);
            Input::Image {
                mime: image.mime_type,
                source: MediaSource::Base64(encoded),
            }
        })
    });

    let mut inputs = Vec::with_capacity(images.len());
    for (index, joined) in join_all(tasks).await.into_iter().enumerate() {
        let input = joined.map_err(|e| {
            RequestError::new(RequestErrorKind::ImageEncoding {
                index,
                reason: e.to_string(),
            })
        })?;
        inputs.push(input);
    }

    debug!(count = inputs.len(), "Encoded reference images");
    Ok(inputs)
}
