//! Browser session bootstrap.
//!
//! A web page that receives a user back from the Authdog login flow finds the
//! session token and application UUID either in its query string or in
//! session storage. The functions here take the page location and a storage
//! snapshot as plain values and describe what should happen next (storage
//! writes, a navigation) instead of touching any browser global, so the host
//! decides how to apply the effects.
//!
//! ```rust
//! use authdog::session::{initialize_session, Navigation, SessionSnapshot};
//! use url::Url;
//!
//! let location = Url::parse("https://app.example.com/home?token=t1&application_uuid=a1").unwrap();
//! let mut storage = SessionSnapshot::default();
//!
//! let boot = initialize_session(&location, &storage).unwrap();
//! assert_eq!(boot.credentials.authorization, "t1");
//! assert_eq!(boot.navigation, Navigation::Replace("https://app.example.com/home".to_string()));
//!
//! storage.apply(&boot.mutations);
//! assert_eq!(storage.get(authdog::session::SESSION_ID_KEY), Some("t1"));
//! ```

mod uri;

pub use uri::get_param_from_uri;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use url::Url;

/// Storage key holding the session token.
pub const SESSION_ID_KEY: &str = "adog.sid";
/// Storage key holding the application UUID.
pub const APP_ID_KEY: &str = "adog.appId";

const TOKEN_PARAM: &str = "token";
const APPLICATION_UUID_PARAM: &str = "application_uuid";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// Neither the URL nor storage carried both a token and an application UUID.
    #[error("unauthorized")]
    Unauthorized,
}

/// Credentials recovered for the current page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Raw session token, sent as the `Authorization` header value.
    pub authorization: String,
    pub application_uuid: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum StorageMutation {
    Set { key: String, value: String },
    Remove { key: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "action", content = "target", rename_all = "snake_case")]
pub enum Navigation {
    #[default]
    None,
    /// Replace the current history entry with this URL.
    Replace(String),
    /// Reload the current page.
    Reload,
}

/// In-memory view of session storage.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionSnapshot(BTreeMap<String, String>);

impl SessionSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn apply(&mut self, mutations: &[StorageMutation]) {
        for mutation in mutations {
            match mutation {
                StorageMutation::Set { key, value } => {
                    self.0.insert(key.clone(), value.clone());
                }
                StorageMutation::Remove { key } => {
                    self.0.remove(key);
                }
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SessionSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Result of a successful [`initialize_session`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionBootstrap {
    pub credentials: Credentials,
    pub mutations: Vec<StorageMutation>,
    pub navigation: Navigation,
}

/// Storage writes plus navigation, without credentials.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionEffects {
    pub mutations: Vec<StorageMutation>,
    pub navigation: Navigation,
}

/// Recover credentials for the page at `location`.
///
/// Query parameters take precedence over storage. When either value came from
/// the query string, the returned navigation strips it by replacing the
/// location with origin and path only.
pub fn initialize_session(
    location: &Url,
    storage: &SessionSnapshot,
) -> Result<SessionBootstrap, SessionError> {
    let query = location.query().map(|q| format!("?{q}")).unwrap_or_default();

    let token_from_uri = non_empty(get_param_from_uri(&query, TOKEN_PARAM));
    let app_from_uri = non_empty(get_param_from_uri(&query, APPLICATION_UUID_PARAM));

    let token = token_from_uri
        .clone()
        .or_else(|| non_empty(storage.get(SESSION_ID_KEY).map(str::to_string)));
    let application_uuid = app_from_uri
        .clone()
        .or_else(|| non_empty(storage.get(APP_ID_KEY).map(str::to_string)));

    let (Some(token), Some(application_uuid)) = (token, application_uuid) else {
        tracing::debug!(url.path = location.path(), "no session credentials available");
        return Err(SessionError::Unauthorized);
    };

    let mutations = vec![
        StorageMutation::Set { key: SESSION_ID_KEY.to_string(), value: token.clone() },
        StorageMutation::Set { key: APP_ID_KEY.to_string(), value: application_uuid.clone() },
    ];

    let navigation = if token_from_uri.is_some() || app_from_uri.is_some() {
        Navigation::Replace(clean_location(location))
    } else {
        Navigation::None
    };

    Ok(SessionBootstrap {
        credentials: Credentials { authorization: token, application_uuid },
        mutations,
        navigation,
    })
}

/// Mutations that forget the stored session.
pub fn clear_session() -> Vec<StorageMutation> {
    [SESSION_ID_KEY, APP_ID_KEY]
        .into_iter()
        .map(|key| StorageMutation::Remove { key: key.to_string() })
        .collect()
}

/// Forget the stored session and reload the page.
///
/// The tenant is only recorded in the log; the service has no logout
/// endpoint for this flow yet.
pub fn logout(tenant_uri: &str) -> SessionEffects {
    tracing::info!(tenant = tenant_uri, "clearing authdog session");
    SessionEffects { mutations: clear_session(), navigation: Navigation::Reload }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn clean_location(location: &Url) -> String {
    format!("{}{}", location.origin().ascii_serialization(), location.path())
}
