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

//! Lists the projects in an organization as they were at a point in time.

use super::{Error, Result};
use securitycenter_assets::client::SecurityCenter;
use securitycenter_assets::client_builder::ClientBuilder;
use securitycenter_assets::filter;
use securitycenter_assets::model::ListAssetsResult;
use std::io::Write;
use time::OffsetDateTime;

// [START list_project_assets_at_time]
/// Writes one line per project asset in `organization_id`, as of `as_of`.
///
/// Returns the number of assets written.
///
/// # Parameters
/// - `output`: where the report is written.
/// - `organization_id`: the numeric id of a Google Cloud organization.
///   For example: `123456789`.
/// - `as_of`: the time of the inventory snapshot.
pub async fn list_all_project_assets_at_time<W>(
    output: &mut W,
    organization_id: &str,
    as_of: OffsetDateTime,
) -> Result<usize>
where
    W: Write,
{
    list_project_assets_at_time(SecurityCenter::builder(), output, organization_id, as_of).await
}
// [END list_project_assets_at_time]

/// Like [list_all_project_assets_at_time], with a client created from
/// `builder`.
///
/// Use this function to change the endpoint, the credentials, or to enable
/// tracing in the client.
pub async fn list_project_assets_at_time<W>(
    builder: ClientBuilder,
    output: &mut W,
    organization_id: &str,
    as_of: OffsetDateTime,
) -> Result<usize>
where
    W: Write,
{
    let client = builder.build().await.map_err(|e| {
        tracing::error!("error initializing the Security Command Center client: {e}");
        Error::ClientInit(e)
    })?;
    let read_time = wkt::Timestamp::try_from(as_of).map_err(|source| {
        tracing::error!("cannot convert {as_of} to a protobuf timestamp: {source}");
        Error::TimestampConversion { as_of, source }
    })?;
    report_project_assets(&client, output, organization_id, read_time).await
}

/// Writes one line per project asset in `organization_id` using `client`.
///
/// `read_time` selects the inventory snapshot.
pub async fn report_project_assets<W>(
    client: &SecurityCenter,
    output: &mut W,
    organization_id: &str,
    read_time: wkt::Timestamp,
) -> Result<usize>
where
    W: Write,
{
    let mut items = client
        .list_assets(format!("organizations/{organization_id}"))
        .set_filter(filter::resource_type_equals(filter::PROJECT))
        .set_read_time(read_time)
        .by_item();
    let mut count = 0_usize;
    while let Some(result) = items.next().await.transpose()? {
        write_asset(output, &result)?;
        count += 1;
    }
    tracing::debug!(organization_id, count, "listed project assets");
    Ok(count)
}

fn write_asset<W: Write>(output: &mut W, result: &ListAssetsResult) -> std::io::Result<()> {
    let (name, resource_name, resource_type) = match &result.asset {
        None => ("", "", ""),
        Some(asset) => match &asset.security_center_properties {
            None => (asset.name.as_str(), "", ""),
            Some(p) => (
                asset.name.as_str(),
                p.resource_name.as_str(),
                p.resource_type.as_str(),
            ),
        },
    };
    writeln!(
        output,
        "Asset Name: {name}, Resource Name {resource_name}, Resource Type {resource_type}"
    )
}
