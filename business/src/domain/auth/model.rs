/// What the producer types into the login form.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginCredentials {
    pub cpf_cnpj: String,
    pub email: String,
    pub password: String,
}

/// Producer sign-up form.
#[derive(Debug, Clone, PartialEq)]
pub struct ProducerRegistration {
    pub name: String,
    pub cpf_cnpj: String,
    pub phone: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Stored session credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthTokens {
    pub access: String,
    pub refresh: Option<String>,
}

/// Raw login response. Depending on the backend auth flavour the access token
/// arrives as `access_token`, `access` (JWT) or `key` (DRF token).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssuedTokens {
    pub access_token: Option<String>,
    pub access: Option<String>,
    pub key: Option<String>,
    pub refresh_token: Option<String>,
    pub refresh: Option<String>,
}

impl IssuedTokens {
    /// `None` when no access token was issued.
    pub fn into_tokens(self) -> Option<AuthTokens> {
        let access = non_empty(self.access_token)
            .or_else(|| non_empty(self.access))
            .or_else(|| non_empty(self.key))?;
        let refresh = non_empty(self.refresh_token).or_else(|| non_empty(self.refresh));

        Some(AuthTokens { access, refresh })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
