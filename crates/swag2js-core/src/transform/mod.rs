pub mod definitions;
pub mod identifiers;
pub mod normalizer;
pub mod spec_to_client;
pub mod synthesizer;
pub mod type_translator;
pub mod url_template;

pub use spec_to_client::{TransformOptions, transform, transform_with_options};
