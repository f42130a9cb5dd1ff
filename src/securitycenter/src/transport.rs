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
use crate::client_builder::{ClientConfig, DEFAULT_ENDPOINT, Error as BuilderError};
use crate::model::{ListAssetsRequest, ListAssetsResponse};
use auth::credentials::{CacheableResource, Credentials};
use gax::error::Error;
use gax::options::RequestOptions;
use gax::response::{Parts, Response};
use http::Extensions;

const DEFAULT_USER_AGENT: &str = concat!("securitycenter-assets/", env!("CARGO_PKG_VERSION"));
const API_CLIENT_HEADER: &str = concat!(
    "gl-rust/",
    env!("CARGO_PKG_RUST_VERSION"),
    " gccl/",
    env!("CARGO_PKG_VERSION")
);

/// Implements [crate::stub::SecurityCenter] using HTTP and JSON.
#[derive(Clone, Debug)]
pub struct SecurityCenter {
    inner: reqwest::Client,
    cred: Credentials,
    endpoint: String,
}

impl SecurityCenter {
    pub(crate) async fn new(config: ClientConfig) -> crate::client_builder::Result<Self> {
        let endpoint = parse_endpoint(config.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT))?;
        let cred = Self::make_credentials(&config)?;
        let user_agent = match &config.user_agent {
            Some(prefix) => format!("{prefix} {DEFAULT_USER_AGENT}"),
            None => DEFAULT_USER_AGENT.to_string(),
        };
        let mut headers = http::HeaderMap::new();
        headers.insert(
            "x-goog-api-client",
            http::HeaderValue::from_static(API_CLIENT_HEADER),
        );
        let inner = reqwest::Client::builder()
            .user_agent(user_agent)
            .default_headers(headers)
            .build()
            .map_err(BuilderError::transport)?;
        Ok(Self {
            inner,
            cred,
            endpoint,
        })
    }

    fn make_credentials(config: &ClientConfig) -> crate::client_builder::Result<Credentials> {
        if let Some(c) = config.cred.clone() {
            return Ok(c);
        }
        auth::credentials::Builder::default()
            .build()
            .map_err(BuilderError::cred)
    }

    async fn execute<O: serde::de::DeserializeOwned + Default>(
        &self,
        mut builder: reqwest::RequestBuilder,
        options: &RequestOptions,
    ) -> Result<Response<O>> {
        if let Some(user_agent) = options.user_agent() {
            builder = builder.header(
                reqwest::header::USER_AGENT,
                reqwest::header::HeaderValue::from_str(user_agent).map_err(Error::ser)?,
            );
        }
        if let Some(timeout) = options.attempt_timeout() {
            builder = builder.timeout(*timeout);
        }
        let cached_auth_headers = self
            .cred
            .headers(Extensions::new())
            .await
            .map_err(Error::authentication)?;
        let auth_headers = match cached_auth_headers {
            CacheableResource::New { data, .. } => data,
            CacheableResource::NotModified => {
                unreachable!("headers are not cached");
            }
        };
        for (key, value) in auth_headers.iter() {
            builder = builder.header(key, value);
        }
        let response = builder.send().await.map_err(map_send_error)?;
        if !response.status().is_success() {
            return to_http_error(response).await;
        }
        to_http_response(response).await
    }
}

impl crate::stub::SecurityCenter for SecurityCenter {
    async fn list_assets(
        &self,
        req: ListAssetsRequest,
        options: RequestOptions,
    ) -> Result<Response<ListAssetsResponse>> {
        if req.parent.is_empty() {
            return Err(Error::binding(
                "missing required field `parent` in ListAssetsRequest",
            ));
        }
        let parent = try_match_parent(&req.parent).ok_or_else(|| {
            Error::binding(format!(
                "`parent` in ListAssetsRequest does not match any of {PARENT_TEMPLATES:?}: {}",
                req.parent
            ))
        })?;
        let path = format!("/v1/{parent}/assets");
        tracing::debug!(path, page_token = req.page_token, "sending ListAssets request");
        let builder = self
            .inner
            .get(format!("{}{path}", self.endpoint))
            .query(&[("alt", "json")])
            .query(&query_parameters(&req));
        self.execute(builder, &options).await
    }
}

const PARENT_TEMPLATES: [&str; 3] = ["organizations/", "folders/", "projects/"];

/// Checks `parent` against the `{organizations,folders,projects}/*` templates.
///
/// The id must be a single non-empty segment, without any characters that
/// would change the request path or query.
fn try_match_parent(parent: &str) -> Option<&str> {
    let id = PARENT_TEMPLATES
        .iter()
        .find_map(|prefix| parent.strip_prefix(prefix))?;
    if id.is_empty() || id.contains(['/', '?', '#']) {
        return None;
    }
    Some(parent)
}

/// Maps the optional fields in `req` to query parameters.
///
/// Fields with default values are omitted.
pub(crate) fn query_parameters(req: &ListAssetsRequest) -> Vec<(&'static str, String)> {
    let strings = [
        ("filter", &req.filter),
        ("orderBy", &req.order_by),
        ("pageToken", &req.page_token),
    ];
    let mut params = strings
        .into_iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(k, v)| (k, v.clone()))
        .collect::<Vec<_>>();
    if let Some(t) = req.read_time {
        params.push(("readTime", String::from(t)));
    }
    if let Some(d) = req.compare_duration {
        params.push(("compareDuration", String::from(d)));
    }
    if let Some(m) = req.field_mask.as_ref().filter(|m| !m.paths.is_empty()) {
        params.push(("fieldMask", m.paths.join(",")));
    }
    if req.page_size != 0 {
        params.push(("pageSize", req.page_size.to_string()));
    }
    params
}

fn parse_endpoint(endpoint: &str) -> crate::client_builder::Result<String> {
    let url = url::Url::parse(endpoint).map_err(|e| BuilderError::endpoint(endpoint, e))?;
    match url.scheme() {
        "http" | "https" if url.has_host() => Ok(endpoint.trim_end_matches('/').to_string()),
        scheme => Err(BuilderError::endpoint(
            endpoint,
            format!("unsupported scheme {scheme:?} or missing host"),
        )),
    }
}

fn map_send_error(err: reqwest::Error) -> Error {
    match err {
        e if e.is_timeout() => Error::timeout(e),
        e => Error::io(e),
    }
}

async fn to_http_error<O>(response: reqwest::Response) -> Result<O> {
    let status_code = response.status().as_u16();
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?
        .to_bytes();

    let error = match gax::error::rpc::Status::try_from(&body) {
        Ok(status) => {
            Error::service_with_http_metadata(status, Some(status_code), Some(parts.headers))
        }
        Err(_) => Error::http(status_code, parts.headers, body),
    };
    tracing::debug!(status_code, "ListAssets request failed: {error}");
    Err(error)
}

async fn to_http_response<O: serde::de::DeserializeOwned + Default>(
    response: reqwest::Response,
) -> Result<Response<O>> {
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?;

    let response = match body.to_bytes() {
        content if content.is_empty() => O::default(),
        content => serde_json::from_slice::<O>(&content).map_err(Error::deser)?,
    };

    Ok(Response::from_parts(
        Parts::new().set_headers(parts.headers),
        response,
    ))
}
