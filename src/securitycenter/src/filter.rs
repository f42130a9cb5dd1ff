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

//! Helpers to build `ListAssets` filter expressions.
//!
//! The service accepts a small expression language over asset fields, for
//! example:
//!
//! ```
//! # use securitycenter_assets::filter;
//! let f = filter::resource_type_equals(filter::PROJECT);
//! assert_eq!(
//!     f,
//!     r#"security_center_properties.resource_type="google.cloud.resourcemanager.Project""#
//! );
//! ```
//!
//! See the [ListAssets] reference for the full grammar.
//!
//! [ListAssets]: https://cloud.google.com/security-command-center/docs/reference/rest/v1/organizations.assets/list

/// The resource type of Google Cloud projects.
pub const PROJECT: &str = "google.cloud.resourcemanager.Project";
/// The resource type of Google Cloud folders.
pub const FOLDER: &str = "google.cloud.resourcemanager.Folder";
/// The resource type of Google Cloud organizations.
pub const ORGANIZATION: &str = "google.cloud.resourcemanager.Organization";
/// The resource type of Compute Engine VM instances.
pub const COMPUTE_INSTANCE: &str = "google.compute.Instance";
/// The resource type of Cloud Storage buckets.
pub const STORAGE_BUCKET: &str = "google.cloud.storage.Bucket";

const RESOURCE_TYPE_FIELD: &str = "security_center_properties.resource_type";

/// Matches assets whose resource type is exactly `resource_type`.
pub fn resource_type_equals(resource_type: &str) -> String {
    field_equals(RESOURCE_TYPE_FIELD, resource_type)
}

/// Matches assets where the string `field` is exactly `value`.
///
/// ```
/// # use securitycenter_assets::filter;
/// assert_eq!(
///     filter::field_equals("security_center_properties.resource_parent", "organizations/123"),
///     r#"security_center_properties.resource_parent="organizations/123""#
/// );
/// ```
pub fn field_equals(field: &str, value: &str) -> String {
    format!("{field}={}", quote(value))
}

/// Joins the expressions with `AND`.
///
/// ```
/// # use securitycenter_assets::filter;
/// let f = filter::and([
///     filter::resource_type_equals(filter::PROJECT),
///     filter::field_equals("security_center_properties.resource_parent", "organizations/123"),
/// ]);
/// assert!(f.contains(" AND "));
/// ```
pub fn and<I, S>(exprs: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    join(exprs, " AND ")
}

/// Joins the expressions with `OR`.
pub fn or<I, S>(exprs: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    join(exprs, " OR ")
}

fn join<I, S>(exprs: I, separator: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    exprs
        .into_iter()
        .filter(|e| !e.as_ref().is_empty())
        .map(|e| e.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Returns `value` as a quoted string literal.
///
/// Embedded quotes and backslashes are escaped.
pub fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        if matches!(c, '"' | '\\') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn project_filter() {
        assert_eq!(
            resource_type_equals(PROJECT),
            "security_center_properties.resource_type=\"google.cloud.resourcemanager.Project\""
        );
    }

    #[test_case("abc", r#""abc""#)]
    #[test_case("", r#""""#)]
    #[test_case(r#"a"b"#, r#""a\"b""#)]
    #[test_case(r"a\b", r#""a\\b""#)]
    #[test_case(r#"\""#, r#""\\\"""#)]
    fn quoting(input: &str, want: &str) {
        assert_eq!(quote(input), want);
    }

    #[test]
    fn and_or() {
        let a = resource_type_equals(PROJECT);
        let b = resource_type_equals(FOLDER);
        assert_eq!(and([&a, &b]), format!("{a} AND {b}"));
        assert_eq!(or([&a, &b]), format!("{a} OR {b}"));
    }

    #[test]
    fn and_or_skip_empty() {
        let a = resource_type_equals(STORAGE_BUCKET);
        assert_eq!(and([a.as_str(), ""]), a);
        assert_eq!(or(["", a.as_str()]), a);
        assert_eq!(and(Vec::<String>::new()), "");
    }

    #[test]
    fn nested() {
        let f = and([
            resource_type_equals(COMPUTE_INSTANCE),
            format!("({})", or([field_equals("name", "a"), field_equals("name", "b")])),
        ]);
        assert_eq!(
            f,
            r#"security_center_properties.resource_type="google.compute.Instance" AND (name="a" OR name="b")"#
        );
    }

    #[test]
    fn organization() {
        assert!(resource_type_equals(ORGANIZATION).ends_with("Organization\""));
    }
}
