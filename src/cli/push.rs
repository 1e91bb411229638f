//! Push command - seal and write every secret in a .env file.

use std::path::Path;

use tracing::info;

use crate::cli::{input, output, PushArgs};
use crate::core::config::{Config, Overrides, Settings};
use crate::core::domain::{Resource, RunResult, SyncReport};
use crate::core::remote::GitHubClient;
use crate::core::sync::Syncer;
use crate::error::{Error, Result};

/// Push secrets to a repository.
pub fn execute(args: PushArgs, config_path: Option<&Path>) -> Result<()> {
    let json = args.json;

    match run(args, config_path) {
        Ok(report) => {
            let result = RunResult::from(&report);
            if json {
                print_json(&result)?;
            } else {
                print_report(&report);
            }

            if report.overall_success() {
                Ok(())
            } else {
                Err(Error::Incomplete {
                    failed: report.failures().len(),
                    total: report.total(),
                })
            }
        }
        Err(e) => {
            if json {
                print_json(&RunResult::from(&e))?;
            }
            Err(e)
        }
    }
}

fn run(args: PushArgs, config_path: Option<&Path>) -> Result<SyncReport> {
    let resource: Resource = args.resource.parse()?;
    let token = input::resolve_token(args.token, args.file.is_some())?;
    let env_text = input::read_env(args.file.as_deref())?;

    let cwd = std::env::current_dir()?;
    let settings = Config::load(config_path, &cwd)?.sealenv.apply(Overrides {
        api_url: args.api_url,
        timeout_secs: args.timeout,
        max_retries: args.retries,
        concurrency: args.concurrency,
    })?;

    info!(%resource, concurrency = settings.concurrency, "pushing secrets");
    sync(&resource, &token, &env_text, &settings)
}

/// Run one sync on a dedicated runtime.
fn sync(resource: &Resource, token: &str, env_text: &str, settings: &Settings) -> Result<SyncReport> {
    let client = GitHubClient::new(token, settings)?;
    let syncer = Syncer::new(client).with_concurrency(settings.concurrency);

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| Error::Unknown(format!("failed to create runtime: {}", e)))?;

    rt.block_on(syncer.run(resource, env_text))
}

fn print_json(result: &RunResult) -> Result<()> {
    let doc = serde_json::to_string(result).map_err(|e| Error::Unknown(e.to_string()))?;
    println!("{}", doc);
    Ok(())
}

fn print_report(report: &SyncReport) {
    if report.total() == 0 {
        output::dimmed("no secrets found in input");
        return;
    }

    output::section("Secrets");
    for key in report.succeeded_keys() {
        output::key_ok(key);
    }
    for failure in report.failures() {
        output::key_failed(&failure.key, &failure.reason);
    }
    println!();

    if report.overall_success() {
        output::success(&format!("pushed {} secrets", report.total()));
    } else {
        output::kv("succeeded:", report.succeeded_keys().len());
        output::kv("failed:", report.failures().len());
        output::warn("some secrets were not written");
    }
}
