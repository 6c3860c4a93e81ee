pub mod domain;
pub mod snapshot;
pub mod mock;
pub mod prelude;

pub use domain::EntityError;
