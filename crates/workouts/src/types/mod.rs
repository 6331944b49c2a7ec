//! Wire types: the persisted record shape and API request/response bodies.
//!
//! Kept apart from the domain model so field names can stay fixed for
//! compatibility while the model evolves.

mod requests;
mod responses;
pub mod stored;

pub use requests::*;
pub use responses::*;
pub use stored::StoredWorkout;
