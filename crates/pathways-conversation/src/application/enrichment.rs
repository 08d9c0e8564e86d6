//! Image enrichment fan-out.
//!
//! Illustrates a batch of generated items by issuing one image request per
//! item concurrently and joining on all of them. Results come back in input
//! order whatever the completion order. A failed request only affects its
//! own slot, which holds an [`ErrorMarker`] instead of a URL.

use std::sync::Arc;

use futures::future::join_all;
use pathways_core::generation::{ImageGenerator, ImageRequest};
use tracing::{debug, warn};

use crate::domain::entries::{EnrichedItem, ErrorMarker, Illustrated, ImageSlot};

/// Fans illustration requests out to the image collaborator.
#[derive(Clone)]
pub struct ImageEnrichment {
    generator: Arc<dyn ImageGenerator>,
}

impl std::fmt::Debug for ImageEnrichment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageEnrichment").finish_non_exhaustive()
    }
}

impl ImageEnrichment {
    /// Creates a fan-out over `generator`.
    #[must_use]
    pub fn new(generator: Arc<dyn ImageGenerator>) -> Self {
        Self { generator }
    }

    /// Illustrates every item. Always returns one result per input item, in
    /// input order, once every request has settled.
    pub async fn enrich<T: Illustrated>(&self, items: Vec<T>) -> Vec<EnrichedItem<T>> {
        let slots = join_all(
            items
                .iter()
                .enumerate()
                .map(|(index, item)| self.settle(index, item.image_description())),
        )
        .await;

        let failed = slots.iter().filter(|slot| slot.is_error()).count();
        debug!(items = slots.len(), failed, "image enrichment batch settled");

        items
            .into_iter()
            .zip(slots)
            .map(|(item, image)| EnrichedItem { item, image })
            .collect()
    }

    async fn settle(&self, index: usize, description: &str) -> ImageSlot {
        if description.trim().is_empty() {
            warn!(index, "item has no image description; substituting error marker");
            return ImageSlot::Error(ErrorMarker::image_failure());
        }

        let request = ImageRequest::for_description(description);
        match self.generator.generate_image(&request).await {
            Ok(url) => ImageSlot::Url(url),
            Err(err) => {
                warn!(index, error = %err, "image enrichment failed; substituting error marker");
                ImageSlot::Error(ErrorMarker::image_failure())
            }
        }
    }
}
