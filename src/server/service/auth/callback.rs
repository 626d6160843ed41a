use oauth2::{
    basic::BasicTokenType, AuthorizationCode, EmptyExtraTokenFields, StandardTokenResponse,
    TokenResponse,
};
use serde::Deserialize;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    state::AccessPolicy,
};

use super::DiscordAuthService;

/// Identity fields returned by Discord's `users/@me` endpoint.
#[derive(Deserialize, Clone)]
pub struct DiscordIdentity {
    pub id: String,
    pub username: String,
    /// Server-agnostic display name, present for migrated accounts.
    pub global_name: Option<String>,
}

impl DiscordIdentity {
    fn display_name(&self) -> String {
        self.global_name
            .clone()
            .unwrap_or_else(|| self.username.clone())
    }
}

impl<'a> DiscordAuthService<'a> {
    /// Completes the OAuth flow: exchanges the authorization code, fetches the
    /// Discord identity, checks it against the membership policy, and upserts
    /// the local user row.
    ///
    /// The master admin is (re-)granted the admin flag on every login; other
    /// accounts keep whatever flag they already carry.
    ///
    /// # Arguments
    /// - `authorization_code` - Code from the OAuth callback query
    /// - `access` - Membership allow-list and master admin
    ///
    /// # Returns
    /// - `Ok(Model)` - The logged-in user
    /// - `Err(AppError::AuthErr)` - Token exchange failed or account not approved
    pub async fn callback(
        &self,
        authorization_code: String,
        access: &AccessPolicy,
    ) -> Result<entity::user::Model, AppError> {
        let user_repo = UserRepository::new(self.db);

        let auth_code = AuthorizationCode::new(authorization_code);

        let token = self
            .oauth_client
            .exchange_code(auth_code)
            .request_async(self.http_client)
            .await
            .map_err(|err| AuthError::TokenExchange(err.to_string()))?;

        let identity = self.fetch_discord_user(&token).await?;

        if !access.is_allowed(&identity.id) {
            return Err(AuthError::MembershipDenied(identity.id).into());
        }

        let is_admin = if identity.id == access.master_admin_id {
            Some(true)
        } else {
            None
        };

        let user = user_repo
            .upsert(identity.id.clone(), identity.display_name(), is_admin)
            .await?;

        Ok(user)
    }

    /// Retrieves the Discord user's identity using the provided access token
    async fn fetch_discord_user(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<DiscordIdentity, AppError> {
        let access_token = token.access_token().secret();

        let identity = self
            .http_client
            .get("https://discord.com/api/users/@me")
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?
            .json::<DiscordIdentity>()
            .await?;

        Ok(identity)
    }
}
