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

//! The messages and enums used by the Security Command Center `ListAssets`
//! RPC.
//!
//! The types follow the proto3 JSON mapping: field names are camelCase,
//! fields with default values are omitted, and well-known types such as
//! [Timestamp][wkt::Timestamp] use their canonical string representation.

use std::collections::HashMap;

/// Request message for `SecurityCenter.ListAssets`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListAssetsRequest {
    /// Required. The name of the parent resource that contains the assets.
    ///
    /// The value must be an organization, folder, or project, for example
    /// `organizations/123`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub parent: String,

    /// Expression that defines the filter to apply across assets.
    ///
    /// See [filter][crate::filter] for helpers to build these expressions.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub filter: String,

    /// Expression that defines what fields and order to use for sorting.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub order_by: String,

    /// Time used as a reference point when filtering assets.
    ///
    /// The filter is limited to assets existing at the supplied time and their
    /// values are those at that specific time. Absence of this field will
    /// default to the API's version of NOW.
    pub read_time: Option<wkt::Timestamp>,

    /// When set, the response includes a `state_change` for each asset,
    /// computed over the period `[read_time - compare_duration, read_time]`.
    pub compare_duration: Option<wkt::Duration>,

    /// A field mask to specify the asset fields to be listed in the response.
    pub field_mask: Option<wkt::FieldMask>,

    /// The value returned by the last `ListAssetsResponse`; indicates that
    /// this is a continuation of a prior `ListAssets` call.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub page_token: String,

    /// The maximum number of results to return in a single response. Default
    /// is 10, minimum is 1, maximum is 1000.
    #[serde(skip_serializing_if = "is_zero")]
    pub page_size: i32,
}

impl ListAssetsRequest {
    /// Sets the value of `parent`.
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of `filter`.
    pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
        self.filter = v.into();
        self
    }

    /// Sets the value of `order_by`.
    pub fn set_order_by<T: Into<String>>(mut self, v: T) -> Self {
        self.order_by = v.into();
        self
    }

    /// Sets the value of `read_time`.
    pub fn set_read_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.read_time = Some(v.into());
        self
    }

    /// Sets or clears the value of `read_time`.
    pub fn set_or_clear_read_time<T: Into<wkt::Timestamp>>(mut self, v: Option<T>) -> Self {
        self.read_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of `compare_duration`.
    pub fn set_compare_duration<T: Into<wkt::Duration>>(mut self, v: T) -> Self {
        self.compare_duration = Some(v.into());
        self
    }

    /// Sets the value of `field_mask`.
    pub fn set_field_mask<T: Into<wkt::FieldMask>>(mut self, v: T) -> Self {
        self.field_mask = Some(v.into());
        self
    }

    /// Sets the value of `page_token`.
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }

    /// Sets the value of `page_size`.
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }
}

/// Response message for `SecurityCenter.ListAssets`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListAssetsResponse {
    /// Assets matching the list request.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub list_assets_results: Vec<ListAssetsResult>,

    /// Time used for executing the list request.
    pub read_time: Option<wkt::Timestamp>,

    /// Token to retrieve the next page of results, or empty if there are no
    /// more results.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub next_page_token: String,

    /// The total number of assets matching the query.
    #[serde(skip_serializing_if = "is_zero")]
    pub total_size: i32,
}

impl ListAssetsResponse {
    /// Sets the value of `list_assets_results`.
    pub fn set_list_assets_results<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ListAssetsResult>,
    {
        self.list_assets_results = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of `read_time`.
    pub fn set_read_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.read_time = Some(v.into());
        self
    }

    /// Sets the value of `next_page_token`.
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }

    /// Sets the value of `total_size`.
    pub fn set_total_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.total_size = v.into();
        self
    }
}

impl crate::paginator::PageableResponse for ListAssetsResponse {
    type PageItem = ListAssetsResult;

    fn items(self) -> Vec<Self::PageItem> {
        self.list_assets_results
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }
}

/// Result containing the Asset and its State.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListAssetsResult {
    /// Asset matching the search request.
    pub asset: Option<Asset>,

    /// State change of the asset between the points in time.
    #[serde(skip_serializing_if = "StateChange::is_default")]
    pub state_change: StateChange,
}

impl ListAssetsResult {
    /// Sets the value of `asset`.
    pub fn set_asset<T: Into<Asset>>(mut self, v: T) -> Self {
        self.asset = Some(v.into());
        self
    }

    /// Sets the value of `state_change`.
    pub fn set_state_change<T: Into<StateChange>>(mut self, v: T) -> Self {
        self.state_change = v.into();
        self
    }
}

impl From<Asset> for ListAssetsResult {
    fn from(asset: Asset) -> Self {
        Self::default().set_asset(asset)
    }
}

/// The change in state of the asset.
///
/// When querying across two points in time this describes the change between
/// the two points: `ADDED`, `REMOVED`, or `ACTIVE`. If there was no
/// `compare_duration` supplied in the request the state change will be
/// `UNUSED`.
///
/// Values not known to this library are preserved as-is.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub struct StateChange(String);

impl StateChange {
    /// Creates a new value from a string.
    pub fn new<T: Into<String>>(v: T) -> Self {
        Self(v.into())
    }

    /// Gets the enum value.
    ///
    /// Returns [state_change::UNUSED] when the service did not set the field.
    pub fn value(&self) -> &str {
        if self.0.is_empty() {
            state_change::UNUSED
        } else {
            &self.0
        }
    }

    fn is_default(&self) -> bool {
        self.value() == state_change::UNUSED
    }
}

impl From<&str> for StateChange {
    fn from(v: &str) -> Self {
        Self::new(v)
    }
}

/// Useful constants to work with [StateChange].
pub mod state_change {
    /// State change is unused, this is the canonical default for this enum.
    pub const UNUSED: &str = "UNUSED";

    /// Asset was added between the points in time.
    pub const ADDED: &str = "ADDED";

    /// Asset was removed between the points in time.
    pub const REMOVED: &str = "REMOVED";

    /// Asset was present at both point(s) in time.
    pub const ACTIVE: &str = "ACTIVE";
}

/// Security Command Center representation of a Google Cloud resource.
///
/// The Asset is a Security Command Center resource that captures information
/// about a single Google Cloud resource. All modifications to an Asset are
/// only within the context of Security Command Center and don't affect the
/// referenced Google Cloud resource.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Asset {
    /// The relative resource name of this asset, for example
    /// `organizations/{organization_id}/assets/{asset_id}`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Security Command Center managed properties.
    pub security_center_properties: Option<SecurityCenterProperties>,

    /// Resource managed properties, as reported by the resource's service.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub resource_properties: HashMap<String, serde_json::Value>,

    /// User specified security marks.
    pub security_marks: Option<SecurityMarks>,

    /// The time at which the asset was created in Security Command Center.
    pub create_time: Option<wkt::Timestamp>,

    /// The time at which the asset was last updated or added in Cloud SCC.
    pub update_time: Option<wkt::Timestamp>,

    /// Cloud IAM Policy information associated with the Google Cloud resource
    /// described by the Security Command Center asset.
    pub iam_policy: Option<IamPolicy>,

    /// The canonical name of the resource, for example
    /// `projects/{project_number}/assets/{asset_id}`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub canonical_name: String,
}

impl Asset {
    /// Sets the value of `name`.
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of `security_center_properties`.
    pub fn set_security_center_properties<T: Into<SecurityCenterProperties>>(
        mut self,
        v: T,
    ) -> Self {
        self.security_center_properties = Some(v.into());
        self
    }

    /// Sets the value of `resource_properties`.
    pub fn set_resource_properties<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<serde_json::Value>,
    {
        self.resource_properties = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of `security_marks`.
    pub fn set_security_marks<T: Into<SecurityMarks>>(mut self, v: T) -> Self {
        self.security_marks = Some(v.into());
        self
    }

    /// Sets the value of `create_time`.
    pub fn set_create_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.create_time = Some(v.into());
        self
    }

    /// Sets the value of `update_time`.
    pub fn set_update_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.update_time = Some(v.into());
        self
    }

    /// Sets the value of `iam_policy`.
    pub fn set_iam_policy<T: Into<IamPolicy>>(mut self, v: T) -> Self {
        self.iam_policy = Some(v.into());
        self
    }

    /// Sets the value of `canonical_name`.
    pub fn set_canonical_name<T: Into<String>>(mut self, v: T) -> Self {
        self.canonical_name = v.into();
        self
    }
}

/// Security Command Center managed properties. These properties are managed
/// by Security Command Center and cannot be modified by the user.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SecurityCenterProperties {
    /// The full resource name of the Google Cloud resource this asset
    /// represents.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub resource_name: String,

    /// The type of the Google Cloud resource, for example
    /// `google.cloud.resourcemanager.Project`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub resource_type: String,

    /// The full resource name of the immediate parent of the resource.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub resource_parent: String,

    /// The full resource name of the project the resource belongs to.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub resource_project: String,

    /// Owners of the Google Cloud resource.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resource_owners: Vec<String>,

    /// The user defined display name for this resource.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub resource_display_name: String,

    /// The user defined display name for the parent of this resource.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub resource_parent_display_name: String,

    /// The user defined display name for the project of this resource.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub resource_project_display_name: String,

    /// Contains a Folder message for each folder in the assets ancestry.
    /// The first folder is the deepest nested folder, and the last folder is
    /// the folder directly under the Organization.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub folders: Vec<Folder>,
}

impl SecurityCenterProperties {
    /// Sets the value of `resource_name`.
    pub fn set_resource_name<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_name = v.into();
        self
    }

    /// Sets the value of `resource_type`.
    pub fn set_resource_type<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_type = v.into();
        self
    }

    /// Sets the value of `resource_parent`.
    pub fn set_resource_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_parent = v.into();
        self
    }

    /// Sets the value of `resource_project`.
    pub fn set_resource_project<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_project = v.into();
        self
    }

    /// Sets the value of `resource_owners`.
    pub fn set_resource_owners<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.resource_owners = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of `resource_display_name`.
    pub fn set_resource_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_display_name = v.into();
        self
    }

    /// Sets the value of `resource_parent_display_name`.
    pub fn set_resource_parent_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_parent_display_name = v.into();
        self
    }

    /// Sets the value of `resource_project_display_name`.
    pub fn set_resource_project_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_project_display_name = v.into();
        self
    }

    /// Sets the value of `folders`.
    pub fn set_folders<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Folder>,
    {
        self.folders = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Message that contains the resource name and display name of a folder
/// resource.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Folder {
    /// Full resource name of this folder.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub resource_folder: String,

    /// The user defined display name for this folder.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub resource_folder_display_name: String,
}

impl Folder {
    /// Sets the value of `resource_folder`.
    pub fn set_resource_folder<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_folder = v.into();
        self
    }

    /// Sets the value of `resource_folder_display_name`.
    pub fn set_resource_folder_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_folder_display_name = v.into();
        self
    }
}

/// User specified security marks that are attached to the parent Security
/// Command Center resource.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SecurityMarks {
    /// The relative resource name of the SecurityMarks.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Mutable user specified security marks belonging to the parent resource.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub marks: HashMap<String, String>,

    /// The canonical name of the marks.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub canonical_name: String,
}

impl SecurityMarks {
    /// Sets the value of `name`.
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of `marks`.
    pub fn set_marks<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.marks = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

/// Cloud IAM Policy information associated with the Google Cloud resource.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct IamPolicy {
    /// The JSON representation of the Policy associated with the asset.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub policy_blob: String,
}

impl IamPolicy {
    /// Sets the value of `policy_blob`.
    pub fn set_policy_blob<T: Into<String>>(mut self, v: T) -> Self {
        self.policy_blob = v.into();
        self
    }
}

fn is_zero(v: &i32) -> bool {
    *v == 0
}
