use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::api::cart::dto::CartBadgeResponse;

/// Where the session is and what it holds.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct SessionResponse {
    /// Page the session is on; a backend 401 moves it to the login page.
    pub current_route: String,
    /// Whether a producer credential is stored.
    pub authenticated: bool,
    pub cart: CartBadgeResponse,
}

/// Where a form submission sent the session.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct RedirectResponse {
    pub route: String,
}
