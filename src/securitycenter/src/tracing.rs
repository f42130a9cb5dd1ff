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

use crate::Result;

/// Implements a [SecurityCenter](super::stub::SecurityCenter) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct SecurityCenter<T>
where
    T: super::stub::SecurityCenter + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> SecurityCenter<T>
where
    T: super::stub::SecurityCenter + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::SecurityCenter for SecurityCenter<T>
where
    T: super::stub::SecurityCenter + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(level = "info", skip(self), err)]
    async fn list_assets(
        &self,
        req: crate::model::ListAssetsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListAssetsResponse>> {
        let response = self.inner.list_assets(req, options).await?;
        tracing::debug!(
            results = response.body().list_assets_results.len(),
            next_page_token = response.body().next_page_token,
            "ListAssets page received"
        );
        Ok(response)
    }
}
