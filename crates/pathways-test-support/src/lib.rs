//! Shared test fakes and utilities for the Pathways service.

mod clock;
mod fixtures;
mod image;
mod text;

pub use clock::{FixedClock, ManualClock};
pub use fixtures::{detail_document, paths_document, timeline_document};
pub use image::{FailingImageGenerator, SelectiveImageGenerator, StaticImageGenerator, image_url_for};
pub use text::{FailingTextGenerator, ScriptedTextGenerator};
