//! Diseases: colors, cube supply, cure and eradication status.

pub mod color;
pub mod registry;

pub use color::{Color, PerColor};
pub use registry::{DiseaseRegistry, DiseaseStatus};
