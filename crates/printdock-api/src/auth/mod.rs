//! Bearer-token authentication: JWT issuing/verification and the middleware
//! that resolves a request's token to a `User` row.

pub mod middleware;
pub mod token;

pub use middleware::{auth_middleware, AuthState, CurrentUser};
