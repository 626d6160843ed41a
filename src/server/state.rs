//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction. All fields use
//! cheap-to-clone types: `DatabaseConnection` is a connection pool,
//! `reqwest::Client` wraps an `Arc` internally, and the configuration
//! snapshots are reference-counted.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::config::RosterConfig;

/// Type alias for the OAuth2 client configured for Discord authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Membership policy consulted during login: who may enter and who is the
/// standing admin.
pub struct AccessPolicy {
    /// Base URL the OAuth callback redirects back to.
    pub app_url: String,
    /// Discord ID always admitted and granted admin.
    pub master_admin_id: String,
    /// Discord IDs admitted to the roster. Empty admits everyone.
    pub allowed_member_ids: Vec<String>,
}

impl AccessPolicy {
    /// Whether the Discord ID may log into the roster at all.
    pub fn is_allowed(&self, discord_id: &str) -> bool {
        discord_id == self.master_admin_id
            || self.allowed_member_ids.is_empty()
            || self.allowed_member_ids.iter().any(|id| id == discord_id)
    }
}

/// Application state containing shared resources and dependencies.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for Discord API requests. Configured without redirects.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the Discord authentication flow.
    pub oauth_client: OAuth2Client,

    /// Valid job/team/group identifiers and policy switches.
    pub roster: Arc<RosterConfig>,

    /// Login allow-list and master admin.
    pub access: Arc<AccessPolicy>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        roster: RosterConfig,
        access: AccessPolicy,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            roster: Arc::new(roster),
            access: Arc::new(access),
        }
    }
}
