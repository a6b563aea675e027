use std::path::PathBuf;
use std::time::Duration;

use crate::error::{InvadersError, InvadersResult};

/// Login charted when none is given on the command line.
pub const DEFAULT_LOGIN: &str = "MeviDiRaizel";

/// Default output document path.
pub const DEFAULT_OUTPUT: &str = "contribution_space_invader.svg";

/// Environment variable holding the GitHub API credential. Read once at the
/// binary boundary; library code only ever sees the resolved value.
pub const TOKEN_ENV_VAR: &str = "GH_TOKEN";

/// Resolved run configuration. Credential presence is checked at
/// construction, before any network activity.
#[derive(Clone, Debug)]
pub struct Config {
    pub login: String,
    pub token: String,
    pub output: PathBuf,
    /// Starfield seed; pinned for reproducible documents.
    pub seed: u64,
    pub timeout: Duration,
}

impl Config {
    pub fn new(
        login: String,
        token: Option<String>,
        output: PathBuf,
        seed: u64,
        timeout: Duration,
    ) -> InvadersResult<Self> {
        if login.trim().is_empty() {
            return Err(InvadersError::config("login must be non-empty"));
        }
        let token = match token {
            Some(t) if !t.trim().is_empty() => t,
            _ => {
                return Err(InvadersError::config(format!(
                    "{TOKEN_ENV_VAR} must be set to a GitHub API token"
                )));
            }
        };
        if timeout.is_zero() {
            return Err(InvadersError::config("timeout must be > 0"));
        }
        Ok(Self {
            login,
            token,
            output,
            seed,
            timeout,
        })
    }
}
