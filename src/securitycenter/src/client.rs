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

use crate::client_builder::{ClientBuilder, ClientConfig, Result as BuilderResult};
use std::sync::Arc;

/// Implements a client for the Security Command Center API.
///
/// # Example
/// ```no_run
/// # use securitycenter_assets::client::SecurityCenter;
/// # use securitycenter_assets::filter;
/// # async fn sample() -> anyhow::Result<()> {
/// let client = SecurityCenter::builder().build().await?;
/// let mut items = client
///     .list_assets("organizations/123456")
///     .set_filter(filter::resource_type_equals(filter::PROJECT))
///     .by_item();
/// while let Some(result) = items.next().await {
///     let result = result?;
///     println!("{result:?}");
/// }
/// # Ok(()) }
/// ```
///
/// # Service Description
///
/// Security Command Center reports on the assets and findings of a Google
/// Cloud organization. This client only exposes the asset inventory.
///
/// # Configuration
///
/// To configure `SecurityCenter` use the `with_*` methods in the type returned
/// by [builder()][SecurityCenter::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://securitycenter.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks may want to override this
///   default.
/// * [with_credentials()]: by default this client uses
///   [Application Default Credentials]. Applications using custom
///   authentication may need to override this default.
///
/// # Pooling and Cloning
///
/// `SecurityCenter` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `SecurityCenter` in
/// an [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an `Arc`
/// internally.
///
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication#adc
/// [with_endpoint()]: ClientBuilder::with_endpoint
/// [with_credentials()]: ClientBuilder::with_credentials
#[derive(Clone, Debug)]
pub struct SecurityCenter {
    inner: Arc<dyn super::stub::dynamic::SecurityCenter>,
}

impl SecurityCenter {
    /// Returns a builder for [SecurityCenter].
    ///
    /// ```no_run
    /// # use securitycenter_assets::client::SecurityCenter;
    /// # async fn sample() -> anyhow::Result<()> {
    /// let client = SecurityCenter::builder().build().await?;
    /// # Ok(()) }
    /// ```
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Creates a new client with the default configuration.
    pub async fn new() -> BuilderResult<Self> {
        Self::builder().build().await
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::SecurityCenter + 'static,
    {
        Self {
            inner: Arc::new(stub),
        }
    }

    pub(crate) async fn new_with_config(config: ClientConfig) -> BuilderResult<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        config: ClientConfig,
    ) -> BuilderResult<Arc<dyn super::stub::dynamic::SecurityCenter>> {
        if config.tracing {
            return Ok(Arc::new(Self::build_with_tracing(config).await?));
        }
        Ok(Arc::new(Self::build_transport(config).await?))
    }

    async fn build_transport(
        config: ClientConfig,
    ) -> BuilderResult<impl super::stub::SecurityCenter> {
        super::transport::SecurityCenter::new(config).await
    }

    async fn build_with_tracing(
        config: ClientConfig,
    ) -> BuilderResult<impl super::stub::SecurityCenter> {
        Self::build_transport(config)
            .await
            .map(super::tracing::SecurityCenter::new)
    }

    /// Lists an organization's assets.
    ///
    /// `parent` is the name of the organization, in the form
    /// `organizations/{organization_id}`.
    ///
    /// ```no_run
    /// # use securitycenter_assets::client::SecurityCenter;
    /// # async fn sample(client: &SecurityCenter) -> anyhow::Result<()> {
    /// let response = client
    ///     .list_assets("organizations/123456")
    ///     .set_page_size(100)
    ///     .send()
    ///     .await?;
    /// println!("first page has {} assets", response.list_assets_results.len());
    /// # Ok(()) }
    /// ```
    pub fn list_assets<T: Into<String>>(&self, parent: T) -> super::builder::ListAssets {
        super::builder::ListAssets::new(self.inner.clone()).set_parent(parent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ListAssetsRequest, ListAssetsResponse};
    use gax::options::RequestOptions;
    use gax::response::Response;

    mockall::mock! {
        #[derive(Debug)]
        SecurityCenter {}
        impl crate::stub::SecurityCenter for SecurityCenter {
            async fn list_assets(&self, req: ListAssetsRequest, _options: RequestOptions) -> crate::Result<Response<ListAssetsResponse>>;
        }
    }

    fn test_credentials() -> auth::credentials::Credentials {
        auth::credentials::anonymous::Builder::new().build()
    }

    #[tokio::test]
    async fn build_with_endpoint() -> anyhow::Result<()> {
        let _client = SecurityCenter::builder()
            .with_endpoint("http://127.0.0.1:1")
            .with_credentials(test_credentials())
            .build()
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn build_with_tracing() -> anyhow::Result<()> {
        let _client = SecurityCenter::builder()
            .with_endpoint("http://127.0.0.1:1")
            .with_credentials(test_credentials())
            .with_tracing()
            .build()
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn build_bad_endpoint() {
        let err = SecurityCenter::builder()
            .with_endpoint("not a url")
            .with_credentials(test_credentials())
            .build()
            .await
            .unwrap_err();
        assert!(err.is_endpoint(), "{err:?}");
    }

    #[tokio::test]
    async fn list_assets_sets_parent() -> anyhow::Result<()> {
        let mut mock = MockSecurityCenter::new();
        mock.expect_list_assets()
            .withf(|r, _| r.parent == "organizations/123")
            .return_once(|_, _| Ok(Response::from(ListAssetsResponse::default())));
        let client = SecurityCenter::from_stub(mock);
        let response = client.list_assets("organizations/123").send().await?;
        assert_eq!(response, ListAssetsResponse::default());
        Ok(())
    }
}
