use crate::server::error::{config::ConfigError, AppError};

const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";

/// Job archetypes of the game-class roster, used when `ROSTER_JOBS` is unset.
const DEFAULT_JOBS: &[&str] = &["素問", "血河", "九靈", "龍吟", "碎夢", "神相", "鐵衣"];

/// Team names per group, used when `ROSTER_TEAMS` is unset.
const DEFAULT_TEAMS: &[&str] = &["進攻隊", "防守隊", "機動隊"];

/// Default group labels for newly opened battles.
const DEFAULT_GROUPS: &[&str] = &["1", "2"];

pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub app_url: String,

    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_redirect_url: String,

    pub discord_auth_url: String,
    pub discord_token_url: String,

    /// Discord ID that is always admitted and granted admin on login.
    pub master_admin_id: String,
    /// Discord IDs admitted to the guild roster. Empty admits everyone.
    pub allowed_member_ids: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            app_url: std::env::var("APP_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            discord_client_id: std::env::var("DISCORD_CLIENT_ID")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_CLIENT_ID".to_string()))?,
            discord_client_secret: std::env::var("DISCORD_CLIENT_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_CLIENT_SECRET".to_string()))?,
            discord_redirect_url: std::env::var("DISCORD_REDIRECT_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_REDIRECT_URL".to_string()))?,
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            discord_token_url: DISCORD_TOKEN_URL.to_string(),
            master_admin_id: std::env::var("MASTER_ADMIN_ID")
                .map_err(|_| ConfigError::MissingEnvVar("MASTER_ADMIN_ID".to_string()))?,
            allowed_member_ids: std::env::var("ALLOWED_MEMBER_IDS")
                .map(|ids| {
                    ids.split(',')
                        .map(|id| id.trim().to_string())
                        .filter(|id| !id.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
        })
    }
}

/// Roster configuration: the valid job and team identifiers and the policy
/// switches. Resolved once at startup and injected through `AppState`, so
/// every assignment boundary validates against a single source instead of
/// re-declared lists.
#[derive(Clone, Debug)]
pub struct RosterConfig {
    /// Valid job archetypes.
    pub jobs: Vec<String>,
    /// Valid team names inside each group.
    pub teams: Vec<String>,
    /// Group labels a new battle starts with unless the open request
    /// overrides them.
    pub default_groups: Vec<String>,
    /// Whether non-admin members may submit proxy registrations.
    pub allow_member_proxy: bool,
}

impl RosterConfig {
    pub fn from_env() -> Self {
        Self {
            jobs: list_from_env("ROSTER_JOBS", DEFAULT_JOBS),
            teams: list_from_env("ROSTER_TEAMS", DEFAULT_TEAMS),
            default_groups: list_from_env("ROSTER_GROUPS", DEFAULT_GROUPS),
            allow_member_proxy: std::env::var("ALLOW_MEMBER_PROXY")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
        }
    }

    pub fn is_valid_job(&self, job: &str) -> bool {
        self.jobs.iter().any(|j| j == job)
    }

    pub fn is_valid_team(&self, team: &str) -> bool {
        self.teams.iter().any(|t| t == team)
    }
}

fn list_from_env(var: &str, default: &[&str]) -> Vec<String> {
    std::env::var(var)
        .map(|v| {
            v.split(',')
                .map(|item| item.trim().to_string())
                .filter(|item| !item.is_empty())
                .collect()
        })
        .unwrap_or_else(|_| default.iter().map(|s| s.to_string()).collect())
}

#[cfg(test)]
mod test {
    use super::RosterConfig;

    #[test]
    fn default_roster_accepts_known_identifiers() {
        let roster = RosterConfig {
            jobs: super::DEFAULT_JOBS.iter().map(|s| s.to_string()).collect(),
            teams: super::DEFAULT_TEAMS.iter().map(|s| s.to_string()).collect(),
            default_groups: super::DEFAULT_GROUPS.iter().map(|s| s.to_string()).collect(),
            allow_member_proxy: true,
        };

        assert!(roster.is_valid_job("鐵衣"));
        assert!(!roster.is_valid_job("missing"));
        assert!(roster.is_valid_team("進攻隊"));
        assert!(!roster.is_valid_team("missing"));
    }
}
