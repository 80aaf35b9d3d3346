//! Topic and tag catalog

pub mod model;
pub mod repository;

pub use model::{Tag, Topic};
pub use repository::TaxonomyRepository;
