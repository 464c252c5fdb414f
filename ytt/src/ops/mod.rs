mod generate;

pub use generate::{GenerationReport, ModuleReport, generate};
