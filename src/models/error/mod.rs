mod api;
pub use api::*;

mod repository;
pub use repository::*;

mod kitten;
pub use kitten::*;
