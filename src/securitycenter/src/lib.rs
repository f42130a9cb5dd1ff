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

//! Google Cloud Client Libraries for Rust - Security Command Center Assets
//!
//! **WARNING:** this crate is under active development. We expect multiple
//! breaking changes in the upcoming releases. Testing is also incomplete, we do
//! **not** recommend that you use this crate in production. We welcome feedback
//! about the APIs, documentation, missing features, bugs, etc.
//!
//! This crate contains traits, types, and functions to list the assets tracked
//! by [Security Command Center], optionally as of a point in the past.
//!
//! ```no_run
//! # use securitycenter_assets::client::SecurityCenter;
//! # use securitycenter_assets::filter;
//! # async fn sample() -> anyhow::Result<()> {
//! let client = SecurityCenter::builder().build().await?;
//! let mut items = client
//!     .list_assets("organizations/123456")
//!     .set_filter(filter::resource_type_equals(filter::PROJECT))
//!     .by_item();
//! while let Some(item) = items.next().await {
//!     let item = item?;
//!     println!("{:?}", item.asset.map(|a| a.name));
//! }
//! # Ok(()) }
//! ```
//!
//! [Security Command Center]: https://cloud.google.com/security-command-center

pub use gax::Result;
pub use gax::error::Error;

pub mod builder;
pub mod client;
pub mod client_builder;
pub mod filter;
pub mod model;
pub mod paginator;
pub mod stub;

pub(crate) mod tracing;
pub(crate) mod transport;
