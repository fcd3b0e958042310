//! Service middleware and extractors

pub mod cors;
pub mod resource;

pub use resource::Subject;
