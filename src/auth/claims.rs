use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session token payload. Self-contained: verification needs only the
/// signature and the clock, never a store lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,     // user ID
    pub email: String, // user email
    pub iat: usize,    // issued at (unix timestamp)
    pub exp: usize,    // expires at (unix timestamp)
}
