//! Main test runner that executes scenarios in declared order

use std::path::PathBuf;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use petcheck_common::PetId;

use crate::config::HarnessConfig;
use crate::error::E2eResult;
use crate::scenario::{Scenario, ScenarioContext};

/// Result of running a single scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub name: String,
    pub success: bool,
    pub skipped: bool,
    pub duration_ms: u64,
    pub error: Option<String>,
}

/// Result of running a list of scenarios
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteResult {
    /// Pet id shared by every scenario in the run
    pub pet_id: PetId,
    pub started_at: String,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub duration_ms: u64,
    pub results: Vec<ScenarioResult>,
}

impl SuiteResult {
    pub fn success(&self) -> bool {
        self.failed == 0
    }
}

/// Sequential scenario runner
pub struct TestRunner {
    context: ScenarioContext,
    skip_ui: bool,
    output_dir: PathBuf,
}

impl TestRunner {
    /// Set up a run, drawing a fresh pet id
    pub fn new(config: HarnessConfig) -> E2eResult<Self> {
        Self::with_pet_id(config, PetId::random())
    }

    /// Set up a run against a known pet id
    pub fn with_pet_id(config: HarnessConfig, pet_id: PetId) -> E2eResult<Self> {
        let context = ScenarioContext::new(&config, pet_id)?;
        info!(
            "Run pet id {} against {} ({} schema)",
            pet_id,
            context.client.base_url(),
            config.schema
        );

        Ok(Self {
            context,
            skip_ui: config.skip_ui,
            output_dir: config.output_dir,
        })
    }

    pub fn context(&self) -> &ScenarioContext {
        &self.context
    }

    /// Run every scenario
    pub async fn run_all(&self) -> SuiteResult {
        self.run_scenarios(&Scenario::ALL).await
    }

    /// Run one scenario by name
    pub async fn run_named(&self, name: &str) -> E2eResult<SuiteResult> {
        let scenario = Scenario::from_name(name)?;
        Ok(self.run_scenarios(&[scenario]).await)
    }

    /// Run scenarios one after another.
    ///
    /// A failing scenario is recorded and the next one still runs; later
    /// scenarios that depend on remote state will fail on their own.
    pub async fn run_scenarios(&self, scenarios: &[Scenario]) -> SuiteResult {
        let started_at = chrono::Utc::now().to_rfc3339();
        let start = Instant::now();
        let mut results = Vec::with_capacity(scenarios.len());
        let mut passed = 0;
        let mut failed = 0;
        let mut skipped = 0;

        info!("Running {} scenario(s)...", scenarios.len());

        for scenario in scenarios {
            let result = self.run_scenario(*scenario).await;
            if result.skipped {
                skipped += 1;
                info!("- {} (skipped)", result.name);
            } else if result.success {
                passed += 1;
                info!("✓ {} ({} ms)", result.name, result.duration_ms);
            } else {
                failed += 1;
                error!(
                    "✗ {} - {}",
                    result.name,
                    result.error.as_deref().unwrap_or("unknown error")
                );
            }
            results.push(result);
        }

        let duration_ms = start.elapsed().as_millis() as u64;

        info!(
            "Results: {} passed, {} failed, {} skipped ({} ms)",
            passed, failed, skipped, duration_ms
        );

        SuiteResult {
            pet_id: self.context.pet_id(),
            started_at,
            total: scenarios.len(),
            passed,
            failed,
            skipped,
            duration_ms,
            results,
        }
    }

    /// Run a single scenario
    pub async fn run_scenario(&self, scenario: Scenario) -> ScenarioResult {
        if self.skip_ui && scenario.needs_browser() {
            return ScenarioResult {
                name: scenario.name().to_string(),
                success: true,
                skipped: true,
                duration_ms: 0,
                error: None,
            };
        }

        debug!("Running scenario: {}", scenario);
        let start = Instant::now();
        let outcome = scenario.run(&self.context).await;
        let duration_ms = start.elapsed().as_millis() as u64;

        ScenarioResult {
            name: scenario.name().to_string(),
            success: outcome.is_ok(),
            skipped: false,
            duration_ms,
            error: outcome.err().map(|e| e.to_string()),
        }
    }

    /// Write results to `test-results.json` in the output directory
    pub fn write_results(&self, results: &SuiteResult) -> E2eResult<PathBuf> {
        std::fs::create_dir_all(&self.output_dir)?;

        let path = self.output_dir.join("test-results.json");
        let json = serde_json::to_string_pretty(results)?;
        std::fs::write(&path, json)?;

        info!("Results written to: {}", path.display());
        Ok(path)
    }
}
