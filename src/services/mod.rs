pub mod compare;
pub mod error;
pub mod object_name;
pub mod search;

pub use compare::CompareService;
pub use error::ServiceError;
pub use search::SearchService;
