//! HTTP adapters implementing the generation ports against the hosted
//! content and image services.

pub mod client;
pub mod content;
pub mod image;

pub use client::{WorqhatConfig, build_http_client};
pub use content::WorqhatTextGenerator;
pub use image::WorqhatImageGenerator;
