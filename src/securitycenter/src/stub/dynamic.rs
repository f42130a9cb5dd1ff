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

use crate::model::{ListAssetsRequest, ListAssetsResponse};
use gax::options::RequestOptions;
use gax::response::Response;

/// A dyn-compatible, crate-private version of [super::SecurityCenter].
#[async_trait::async_trait]
pub trait SecurityCenter: std::fmt::Debug + Send + Sync {
    async fn list_assets(
        &self,
        req: ListAssetsRequest,
        options: RequestOptions,
    ) -> crate::Result<Response<ListAssetsResponse>>;
}

/// All implementations of [super::SecurityCenter] also implement [SecurityCenter].
#[async_trait::async_trait]
impl<T: super::SecurityCenter> SecurityCenter for T {
    async fn list_assets(
        &self,
        req: ListAssetsRequest,
        options: RequestOptions,
    ) -> crate::Result<Response<ListAssetsResponse>> {
        T::list_assets(self, req, options).await
    }
}
