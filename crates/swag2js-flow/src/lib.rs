pub mod emitters;
pub mod generator;
pub mod renderer;

pub use emitters::scaffold::PackageOptions;
pub use generator::{FlowClientGenerator, FlowConfig, GeneratorError};
