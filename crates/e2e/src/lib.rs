//! Petcheck E2E Test Framework
//!
//! This crate drives the pet-store API and a public web page:
//! - Sends fixtures built from `petcheck-common` through a JSON HTTP client
//! - Compares responses with assertion pipes, field by field
//! - Runs the scenarios in a fixed order against one shared pet id
//! - Controls Playwright via a generated Node script for the UI check
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    E2E Test Runner (Rust)                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  TestRunner                                                 │
//! │    ├── ScenarioContext { client, factory(pet_id), browser } │
//! │    ├── run_scenarios([Scenario]) -> SuiteResult             │
//! │    └── write_results(SuiteResult) -> test-results.json      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Scenario                                                   │
//! │    ├── PetFactory -> PetBuilder -> Pet                      │
//! │    ├── PetstoreClient::{create,update,get}_pet              │
//! │    ├── ApiResponse::expect_status -> json::<T>()            │
//! │    └── AssertPipe::run(expected, observed)                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod pipes;
pub mod playwright;
pub mod runner;
pub mod scenario;

pub use client::{ApiResponse, PetstoreClient};
pub use config::{ApiConfig, HarnessConfig};
pub use error::{E2eError, E2eResult};
pub use runner::{ScenarioResult, SuiteResult, TestRunner};
pub use scenario::{Scenario, ScenarioContext};
