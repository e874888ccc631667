//! Host environment lookups: the root boundary, path resolution and the account name.

pub mod paths;

/// Environment variables consulted for the login name, in order.
const LOGIN_ENV_VARS: [&str; 4] = ["LOGNAME", "USER", "LNAME", "USERNAME"];

/// Returns the login name of the user running this process.
///
/// The first non-empty of `LOGNAME`, `USER`, `LNAME` and `USERNAME` wins, so an overridden
/// environment (or `sudo` preserving it) is honoured; otherwise the account database is asked.
/// Used as the redaction needle for captured process output.
pub fn current_username() -> String {
  LOGIN_ENV_VARS
    .iter()
    .filter_map(|name| std::env::var(name).ok())
    .find(|value| !value.is_empty())
    .unwrap_or_else(whoami::username)
}
