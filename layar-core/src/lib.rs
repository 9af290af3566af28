pub mod brand;
pub mod domain;
pub mod error;
pub mod facets;
pub mod filter;
pub mod lookup;
pub mod normalize;
mod serde_util;
pub mod video;
pub mod view;

pub use brand::BrandClassifier;
pub use domain::{Cinema, Movie};
pub use error::{DataError, Result};
pub use facets::Facets;
pub use filter::FilterCriteria;
