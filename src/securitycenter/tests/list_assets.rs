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

//! These tests run the client against a local HTTP server. They verify the
//! requests sent for each page, and how responses and errors are decoded.

#[cfg(test)]
mod tests {
    use auth::credentials::anonymous::Builder as Anonymous;
    use gax::error::rpc::Code;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use securitycenter_assets::client::SecurityCenter;
    use securitycenter_assets::filter;
    use serde_json::json;

    type Result<T> = anyhow::Result<T>;

    const PATH: &str = "/v1/organizations/123/assets";
    const PROJECT_FILTER: &str =
        r#"security_center_properties.resource_type="google.cloud.resourcemanager.Project""#;

    async fn test_client(server: &Server) -> Result<SecurityCenter> {
        let client = SecurityCenter::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(Anonymous::new().build())
            .build()
            .await?;
        Ok(client)
    }

    fn asset(id: &str) -> serde_json::Value {
        json!({
            "asset": {
                "name": format!("organizations/123/assets/{id}"),
                "securityCenterProperties": {
                    "resourceName": format!("//cloudresourcemanager.googleapis.com/projects/{id}"),
                    "resourceType": "google.cloud.resourcemanager.Project",
                    "resourceParent": "//cloudresourcemanager.googleapis.com/organizations/123",
                },
                "createTime": "2025-01-01T00:00:00Z",
            },
            "stateChange": "UNUSED",
        })
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn by_item_across_pages() -> Result<()> {
        let server = Server::run();
        let project_filter = filter::resource_type_equals(filter::PROJECT);
        assert_eq!(project_filter, PROJECT_FILTER);
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", PATH),
                request::query(url_decoded(contains(("filter", PROJECT_FILTER)))),
                request::query(url_decoded(contains(("readTime", "2025-05-16T09:46:12Z")))),
                request::query(url_decoded(contains(("alt", "json")))),
                request::query(url_decoded(not(contains(key("pageToken"))))),
            ])
            .respond_with(json_encoded(json!({
                "listAssetsResults": [asset("p1"), asset("p2")],
                "readTime": "2025-05-16T09:46:12Z",
                "nextPageToken": "token2",
                "totalSize": 3,
            }))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", PATH),
                request::query(url_decoded(contains(("filter", PROJECT_FILTER)))),
                request::query(url_decoded(contains(("pageToken", "token2")))),
            ])
            .respond_with(json_encoded(json!({
                "listAssetsResults": [asset("p3")],
                "totalSize": 3,
            }))),
        );

        let client = test_client(&server).await?;
        let mut items = client
            .list_assets("organizations/123")
            .set_filter(project_filter)
            .set_read_time(wkt::Timestamp::new(1747388772, 0)?)
            .by_item();
        let mut names = Vec::new();
        while let Some(item) = items.next().await {
            let asset = item?.asset.unwrap_or_default();
            let properties = asset.security_center_properties.unwrap_or_default();
            assert_eq!(properties.resource_type, filter::PROJECT);
            names.push(asset.name);
        }
        assert_eq!(
            names,
            vec![
                "organizations/123/assets/p1",
                "organizations/123/assets/p2",
                "organizations/123/assets/p3",
            ]
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn empty_response() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", PATH))
                .respond_with(json_encoded(json!({}))),
        );

        let client = test_client(&server).await?;
        let mut items = client.list_assets("organizations/123").by_item();
        assert!(items.next().await.is_none());
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn sends_user_agent() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", PATH),
                request::headers(contains((
                    "user-agent",
                    matches("^my-app/1.0 securitycenter-assets/")
                ))),
                request::headers(contains(key("x-goog-api-client"))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = SecurityCenter::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(Anonymous::new().build())
            .with_user_agent("my-app/1.0")
            .build()
            .await?;
        let response = client.list_assets("organizations/123").send().await?;
        assert!(response.list_assets_results.is_empty(), "{response:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn service_error() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", PATH)).respond_with(
                status_code(404).body(
                    json!({"error": {
                        "code": 404,
                        "message": "organization not found",
                        "status": "NOT_FOUND",
                    }})
                    .to_string(),
                ),
            ),
        );

        let client = test_client(&server).await?;
        let err = client
            .list_assets("organizations/123")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(404));
        let status = err.status().expect("the error should carry a status");
        assert_eq!(status.code, Code::NotFound);
        assert_eq!(status.message, "organization not found");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn error_after_first_page() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", PATH),
                request::query(url_decoded(not(contains(key("pageToken"))))),
            ])
            .respond_with(json_encoded(json!({
                "listAssetsResults": [asset("p1")],
                "nextPageToken": "token2",
            }))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", PATH),
                request::query(url_decoded(contains(("pageToken", "token2")))),
            ])
            .respond_with(status_code(503).body("try again later")),
        );

        let client = test_client(&server).await?;
        let mut items = client.list_assets("organizations/123").by_item();
        let first = items.next().await.transpose()?;
        assert!(first.is_some(), "{first:?}");
        let err = items.next().await.transpose().unwrap_err();
        assert_eq!(err.http_status_code(), Some(503));
        assert!(err.status().is_none(), "{err:?}");
        assert!(items.next().await.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn invalid_endpoint() {
        let err = SecurityCenter::builder()
            .with_endpoint("securitycenter.googleapis.com")
            .with_credentials(Anonymous::new().build())
            .build()
            .await
            .unwrap_err();
        assert!(err.is_endpoint(), "{err:?}");
    }
}
