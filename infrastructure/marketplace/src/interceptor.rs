use business::domain::auth::credential_store::CredentialStore;
use business::domain::auth::navigator::{LOGIN_ROUTE, Navigator};
use business::domain::logger::Logger;

/// Endpoints that answer 401 for bad input rather than for an expired session.
/// Matched by substring so both trailing-slash variants and sub-resources count.
pub const PUBLIC_ENDPOINTS: [&str; 4] = [
    "/api/producers/",
    "/api/producers",
    "/auth/login",
    "/auth/registration",
];

pub fn is_public_endpoint(path: &str) -> bool {
    PUBLIC_ENDPOINTS
        .iter()
        .any(|public| path.contains(public))
}

/// `Authorization` header value for the stored credential, if any.
pub fn authorization_value(scheme: &str, credentials: &dyn CredentialStore) -> Option<String> {
    credentials
        .access_token()
        .map(|token| format!("{scheme} {token}"))
}

/// Reaction to a 401 on `path`: drop the credential and send the session
/// to the login page. Returns whether the session was reset.
pub fn handle_unauthorized(
    path: &str,
    credentials: &dyn CredentialStore,
    navigator: &dyn Navigator,
    logger: &dyn Logger,
) -> bool {
    if is_public_endpoint(path) {
        logger.debug(&format!("401 on public endpoint {path}, session kept"));
        return false;
    }

    logger.warn(&format!(
        "401 on {path}: credential rejected, clearing session"
    ));
    if credentials.clear().is_err() {
        logger.error("Could not clear stored credentials");
    }

    if !navigator.is_on_login_page() {
        navigator.navigate(LOGIN_ROUTE);
    }
    true
}
