//! Business logic between the HTTP layer and the task store
//!
//! Both services hold the injected store handle; neither keeps state of its own.

pub mod error;
pub mod listing;
pub mod mutation;
pub mod validation;

pub use error::{ServiceError, ServiceResult};
pub use listing::{ListingService, TodoPage};
pub use mutation::MutationService;
