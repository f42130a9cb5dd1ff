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

#[cfg(all(test, feature = "run-integration-tests"))]
mod driver {
    use time::OffsetDateTime;

    #[tokio::test(flavor = "multi_thread")]
    async fn list_all_project_assets_at_time() -> anyhow::Result<()> {
        let organization_id = std::env::var("GOOGLE_CLOUD_ORGANIZATION").unwrap();
        let as_of = OffsetDateTime::now_utc() - time::Duration::days(1);
        let mut output = Vec::new();
        let count = securitycenter_samples::assets::list_all_project_assets_at_time(
            &mut output,
            &organization_id,
            as_of,
        )
        .await?;
        let output = String::from_utf8(output)?;
        assert_eq!(output.lines().count(), count, "{output}");
        assert!(
            output
                .lines()
                .all(|l| l.ends_with("Resource Type google.cloud.resourcemanager.Project")),
            "{output}"
        );
        Ok(())
    }
}
