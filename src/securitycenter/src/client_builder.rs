// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Provide types for client construction.
//!
//! Some applications need to construct clients with custom configuration, for
//! example, they may need to override the endpoint or the authentication
//! credentials. Applications should not create builders directly, instead use
//! [SecurityCenter::builder()][crate::client::SecurityCenter::builder].
//!
//! ## Example: create a client with the default configuration.
//!
//! ```no_run
//! # use securitycenter_assets::client::SecurityCenter;
//! # async fn sample() -> anyhow::Result<()> {
//! let client = SecurityCenter::builder().build().await?;
//! # Ok(()) }
//! ```
//!
//! ## Example: create a client with a different endpoint
//!
//! ```no_run
//! # use securitycenter_assets::client::SecurityCenter;
//! # async fn sample() -> anyhow::Result<()> {
//! let client = SecurityCenter::builder()
//!     .with_endpoint("https://private.googleapis.com")
//!     .build()
//!     .await?;
//! # Ok(()) }
//! ```

use crate::client::SecurityCenter;

/// The result type for this module.
pub type Result<T> = std::result::Result<T, Error>;

/// Indicates a problem while constructing a client.
///
/// # Examples
/// ```no_run
/// # use securitycenter_assets::client::SecurityCenter;
/// use securitycenter_assets::client_builder::Error;
/// # async fn sample() -> Result<(), Error> {
/// let client = match SecurityCenter::builder().build().await {
///     Ok(c) => c,
///     Err(e) if e.is_default_credentials() => {
///         println!("error during client initialization: {e}");
///         println!("troubleshoot using https://cloud.google.com/docs/authentication/client-libraries");
///         return Err(e);
///     }
///     Err(e) => {
///         println!("error during client initialization {e}");
///         return Err(e);
///     }
/// };
/// # Ok(()) }
/// ```
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// If true, the client could not initialize the default credentials.
    pub fn is_default_credentials(&self) -> bool {
        matches!(&self.0, ErrorKind::DefaultCredentials(_))
    }

    /// If true, the client could not initialize the transport client.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, ErrorKind::Transport(_))
    }

    /// If true, the configured endpoint is not a valid `http` or `https` URL.
    pub fn is_endpoint(&self) -> bool {
        matches!(&self.0, ErrorKind::Endpoint { .. })
    }

    pub(crate) fn cred<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::DefaultCredentials(source.into()))
    }

    pub(crate) fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }

    pub(crate) fn endpoint<T: Into<BoxError>>(endpoint: &str, source: T) -> Self {
        Self(ErrorKind::Endpoint {
            endpoint: endpoint.to_string(),
            source: source.into(),
        })
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("could not create default credentials")]
    DefaultCredentials(#[source] BoxError),
    #[error("could not initialize transport client")]
    Transport(#[source] BoxError),
    #[error("invalid endpoint {endpoint:?}")]
    Endpoint {
        endpoint: String,
        #[source]
        source: BoxError,
    },
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The default endpoint for the Security Command Center API.
pub const DEFAULT_ENDPOINT: &str = "https://securitycenter.googleapis.com";

/// Configuration gathered by [ClientBuilder].
#[derive(Clone, Debug, Default)]
pub(crate) struct ClientConfig {
    pub(crate) endpoint: Option<String>,
    pub(crate) cred: Option<auth::credentials::Credentials>,
    pub(crate) tracing: bool,
    pub(crate) user_agent: Option<String>,
}

/// A builder for [SecurityCenter].
///
/// # Example
/// ```no_run
/// # use securitycenter_assets::client::SecurityCenter;
/// # async fn sample() -> anyhow::Result<()> {
/// let builder = SecurityCenter::builder();
/// let client = builder
///     .with_endpoint("https://securitycenter.googleapis.com")
///     .build()
///     .await?;
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct ClientBuilder {
    pub(crate) config: ClientConfig,
}

impl ClientBuilder {
    pub(crate) fn new() -> Self {
        Self {
            config: ClientConfig::default(),
        }
    }

    /// Creates a new client.
    ///
    /// Fails if the endpoint is not a valid URL, if the default credentials
    /// cannot be created, or if the HTTP client cannot be initialized.
    pub async fn build(self) -> Result<SecurityCenter> {
        SecurityCenter::new_with_config(self.config).await
    }

    /// Sets the endpoint.
    ///
    /// # Example
    /// ```no_run
    /// # use securitycenter_assets::client::SecurityCenter;
    /// # async fn sample() -> anyhow::Result<()> {
    /// let client = SecurityCenter::builder()
    ///     .with_endpoint("https://private.googleapis.com")
    ///     .build()
    ///     .await?;
    /// # Ok(()) }
    /// ```
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Enables tracing.
    ///
    /// The client can be dynamically instrumented with the Tokio [tracing]
    /// framework. Setting this flag enables this instrumentation.
    ///
    /// [tracing]: https://docs.rs/tracing/latest/tracing/
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }

    /// Configure the authentication credentials.
    ///
    /// By default the client uses [Application Default Credentials]. More
    /// information about valid credentials types can be found in the
    /// [google-cloud-auth] crate documentation.
    ///
    /// [Application Default Credentials]: https://cloud.google.com/docs/authentication/application-default-credentials
    /// [google-cloud-auth]: https://docs.rs/google-cloud-auth
    pub fn with_credentials<V: Into<auth::credentials::Credentials>>(mut self, v: V) -> Self {
        self.config.cred = Some(v.into());
        self
    }

    /// Prefix the default `User-Agent` header with an application-specific
    /// value.
    pub fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.config.user_agent = Some(v.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let builder = ClientBuilder::new();
        assert!(builder.config.endpoint.is_none(), "{builder:?}");
        assert!(builder.config.cred.is_none(), "{builder:?}");
        assert!(!builder.config.tracing, "{builder:?}");
        assert!(builder.config.user_agent.is_none(), "{builder:?}");
    }

    #[test]
    fn setters() {
        let builder = ClientBuilder::new()
            .with_endpoint("http://localhost:8080")
            .with_tracing()
            .with_user_agent("my-app/1.0")
            .with_credentials(auth::credentials::anonymous::Builder::new().build());
        assert_eq!(
            builder.config.endpoint.as_deref(),
            Some("http://localhost:8080")
        );
        assert!(builder.config.cred.is_some(), "{builder:?}");
        assert!(builder.config.tracing, "{builder:?}");
        assert_eq!(builder.config.user_agent.as_deref(), Some("my-app/1.0"));
    }

    #[test]
    fn error_predicates() {
        let e = Error::cred("no credentials");
        assert!(e.is_default_credentials(), "{e:?}");
        assert!(!e.is_transport(), "{e:?}");
        assert!(!e.is_endpoint(), "{e:?}");

        let e = Error::transport("no tls");
        assert!(e.is_transport(), "{e:?}");

        let e = Error::endpoint("not-a-url", "relative URL without a base");
        assert!(e.is_endpoint(), "{e:?}");
        assert!(e.to_string().contains("not-a-url"), "{e}");
    }
}
