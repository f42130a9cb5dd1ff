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

//! Request builders for [SecurityCenter][crate::client::SecurityCenter].

use crate::model::{ListAssetsRequest, ListAssetsResponse};
use crate::paginator::{ItemPaginator, Paginator};
use gax::error::Error;
use gax::options::RequestOptions;
use std::sync::Arc;

/// The request builder for [SecurityCenter::list_assets][crate::client::SecurityCenter::list_assets] calls.
///
/// # Example
/// ```no_run
/// # use securitycenter_assets::builder::ListAssets;
/// # async fn sample(builder: ListAssets) -> anyhow::Result<()> {
/// let mut items = builder.by_item();
/// while let Some(result) = items.next().await {
///   let item = result?;
/// }
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct ListAssets {
    stub: Arc<dyn crate::stub::dynamic::SecurityCenter>,
    request: ListAssetsRequest,
    options: RequestOptions,
}

impl ListAssets {
    pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::SecurityCenter>) -> Self {
        Self {
            stub,
            request: ListAssetsRequest::default(),
            options: RequestOptions::default(),
        }
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<ListAssetsRequest>>(mut self, v: V) -> Self {
        self.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
        self.options = v.into();
        self
    }

    /// Sends the request, returning only the first page of results.
    pub async fn send(self) -> crate::Result<ListAssetsResponse> {
        self.stub
            .list_assets(self.request, self.options)
            .await
            .map(gax::response::Response::into_body)
    }

    /// Streams each page in the collection.
    ///
    /// The `page_token` in the request, if any, selects the first page.
    pub fn by_page(self) -> Paginator<ListAssetsResponse, Error> {
        let token = self.request.page_token.clone();
        let execute = move |token: String| {
            let builder = self.clone().set_page_token(token);
            builder.send()
        };
        Paginator::new(token, execute)
    }

    /// Streams each item in the collection.
    pub fn by_item(self) -> ItemPaginator<ListAssetsResponse, Error> {
        self.by_page().items()
    }

    /// Sets the value of [parent][ListAssetsRequest::parent].
    ///
    /// This is a **required** field for requests.
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.request.parent = v.into();
        self
    }

    /// Sets the value of [filter][ListAssetsRequest::filter].
    pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
        self.request.filter = v.into();
        self
    }

    /// Sets the value of [order_by][ListAssetsRequest::order_by].
    pub fn set_order_by<T: Into<String>>(mut self, v: T) -> Self {
        self.request.order_by = v.into();
        self
    }

    /// Sets the value of [read_time][ListAssetsRequest::read_time].
    pub fn set_read_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.request.read_time = Some(v.into());
        self
    }

    /// Sets or clears the value of [read_time][ListAssetsRequest::read_time].
    pub fn set_or_clear_read_time<T: Into<wkt::Timestamp>>(mut self, v: Option<T>) -> Self {
        self.request.read_time = v.map(Into::into);
        self
    }

    /// Sets the value of [compare_duration][ListAssetsRequest::compare_duration].
    pub fn set_compare_duration<T: Into<wkt::Duration>>(mut self, v: T) -> Self {
        self.request.compare_duration = Some(v.into());
        self
    }

    /// Sets the value of [field_mask][ListAssetsRequest::field_mask].
    pub fn set_field_mask<T: Into<wkt::FieldMask>>(mut self, v: T) -> Self {
        self.request.field_mask = Some(v.into());
        self
    }

    /// Sets the value of [page_token][ListAssetsRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.request.page_token = v.into();
        self
    }

    /// Sets the value of [page_size][ListAssetsRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.request.page_size = v.into();
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for ListAssets {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}
