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

//! Prints the projects in an organization as they were at a point in time.

use clap::Parser;
use securitycenter_assets::client::SecurityCenter;
use securitycenter_samples::assets::list_project_assets_at_time;
use std::io::Write;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

const DESCRIPTION: &str = concat!(
    "Lists the project assets in a Google Cloud organization, as recorded by",
    " Security Command Center at a point in time.",
    " Each asset is printed on its own line."
);

/// Configuration options for the sample.
#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = DESCRIPTION)]
struct Args {
    /// The numeric id of the organization.
    #[arg(long, env = "GOOGLE_CLOUD_ORGANIZATION")]
    organization: String,

    /// The time of the inventory snapshot, in RFC 3339 format.
    ///
    /// For example `2025-05-16T09:46:12Z`. Defaults to the current time.
    #[arg(long, env = "SCC_AS_OF", value_parser = parse_rfc3339)]
    as_of: Option<OffsetDateTime>,

    /// Override the default Security Command Center endpoint.
    #[arg(long, env = "SCC_ENDPOINT")]
    endpoint: Option<String>,

    /// Trace each request made by the client.
    #[arg(long, default_value_t = false)]
    tracing: bool,
}

fn parse_rfc3339(value: &str) -> Result<OffsetDateTime, time::error::Parse> {
    OffsetDateTime::parse(value, &Rfc3339)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    enable_tracing()?;
    tracing::info!("Configuration: {args:?}");

    let builder = SecurityCenter::builder().with_user_agent("list_project_assets_at_time");
    let builder = match &args.endpoint {
        Some(endpoint) => builder.with_endpoint(endpoint),
        None => builder,
    };
    let builder = if args.tracing {
        builder.with_tracing()
    } else {
        builder
    };
    let as_of = args.as_of.unwrap_or_else(OffsetDateTime::now_utc);

    let mut stdout = std::io::stdout();
    let count = list_project_assets_at_time(builder, &mut stdout, &args.organization, as_of).await?;
    stdout.flush()?;
    tracing::info!("Found {count} project assets");
    Ok(())
}

fn enable_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::filter::LevelFilter;

    let subscriber = tracing_subscriber::fmt()
        .with_level(true)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use time::macros::datetime;

    #[test]
    fn command() {
        Args::command().debug_assert();
    }

    #[test]
    fn parse_args() -> anyhow::Result<()> {
        let args = Args::try_parse_from([
            "list_project_assets_at_time",
            "--organization",
            "123456",
            "--as-of",
            "2025-05-16T09:46:12Z",
            "--endpoint",
            "http://localhost:8080",
            "--tracing",
        ])?;
        assert_eq!(args.organization, "123456");
        assert_eq!(args.as_of, Some(datetime!(2025-05-16 09:46:12 UTC)));
        assert_eq!(args.endpoint.as_deref(), Some("http://localhost:8080"));
        assert!(args.tracing);
        Ok(())
    }

    #[test]
    fn parse_bad_timestamp() {
        let err = Args::try_parse_from([
            "list_project_assets_at_time",
            "--organization",
            "123456",
            "--as-of",
            "yesterday",
        ]);
        assert!(err.is_err(), "{err:?}");
    }

    #[test]
    fn rfc3339_offset() -> anyhow::Result<()> {
        let got = parse_rfc3339("2025-05-16T11:46:12+02:00")?;
        assert_eq!(got, datetime!(2025-05-16 09:46:12 UTC));
        Ok(())
    }
}
