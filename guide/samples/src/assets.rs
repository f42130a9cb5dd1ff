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

//! Samples listing the assets in an organization.

pub mod list_project_assets_at_time;

pub use list_project_assets_at_time::{
    list_all_project_assets_at_time, list_project_assets_at_time, report_project_assets,
};

/// The result type for the samples in this module.
pub type Result<T> = std::result::Result<T, Error>;

/// The errors returned by the asset listing samples.
///
/// The variants are ordered as the failures can occur: the client is created
/// first, then the snapshot time is converted, and finally the assets are
/// listed and written.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The client could not be created.
    #[error("error initializing the Security Command Center client: {0}")]
    ClientInit(#[source] securitycenter_assets::client_builder::Error),

    /// The snapshot time is outside the range of a protobuf timestamp.
    #[error("cannot convert {as_of} to a protobuf timestamp: {source}")]
    TimestampConversion {
        as_of: time::OffsetDateTime,
        #[source]
        source: wkt::TimestampError,
    },

    /// Fetching a page of assets failed.
    ///
    /// Any assets received before the failure have already been written.
    #[error("error listing assets: {0}")]
    Iteration(#[from] gax::error::Error),

    /// Writing an asset to the output failed.
    #[error("error writing asset report: {0}")]
    Output(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn display() {
        let e = Error::from(gax::error::Error::io("connection reset"));
        assert!(e.to_string().starts_with("error listing assets: "), "{e}");

        let as_of = datetime!(0000-06-01 0:00 UTC);
        let source = wkt::Timestamp::try_from(as_of).unwrap_err();
        let e = Error::TimestampConversion { as_of, source };
        assert!(e.to_string().contains("protobuf timestamp"), "{e}");

        let e = Error::from(std::io::Error::other("disk full"));
        assert!(matches!(e, Error::Output(_)), "{e:?}");
    }
}
