//! Authentication module
//!
//! Validates bearer JWTs issued by the identity service. Passwords and
//! sign-up never pass through this service.

mod jwt;
mod middleware;

pub use jwt::{Claims, JwtKeys, JwtService};
pub use middleware::AuthUser;
