// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2025 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! The logging framework for Sextant systems.

pub mod logger;

use std::{
    env,
    sync::atomic::{AtomicBool, Ordering},
};

use sextant_core::UUID4;
use sextant_model::identifiers::TraderId;
use tracing_subscriber::EnvFilter;

pub use self::logger::{Logger, LoggerConfig};

pub const RECV: &str = "<--";
pub const SENT: &str = "-->";
pub const CMD: &str = "[CMD]";
pub const EVT: &str = "[EVT]";
pub const RPT: &str = "[RPT]";
pub const REQ: &str = "[REQ]";
pub const RES: &str = "[RES]";

static LOGGING_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Returns whether the core logger is enabled.
#[must_use]
pub fn logging_is_initialized() -> bool {
    LOGGING_INITIALIZED.load(Ordering::Relaxed)
}

/// Initialize tracing.
///
/// Tracing is meant to be used to trace/debug async Rust code. It can be
/// configured to filter modules and write up to a specific level by passing
/// a configuration using the `RUST_LOG` environment variable.
///
/// # Safety
///
/// Should only be called once during an applications run, ideally at the
/// beginning of the run.
///
/// # Errors
///
/// Returns an error if the tracing subscriber fails to initialize.
pub fn init_tracing() -> anyhow::Result<()> {
    // Skip tracing initialization if `RUST_LOG` is not set
    if let Ok(v) = env::var("RUST_LOG") {
        let env_filter = EnvFilter::new(v.clone());

        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize tracing subscriber: {e}"))?;

        println!("Initialized tracing logs with RUST_LOG={v}");
    }
    Ok(())
}

/// Initialize logging.
///
/// Logging should be used for sync Rust logic, which is most of the
/// components in the system.
///
/// # Safety
///
/// Callable once per process; subsequent calls return an error.
///
/// # Errors
///
/// Returns an error if logging has already been initialized, or if the
/// global logger cannot be set.
pub fn init_logging(
    trader_id: TraderId,
    instance_id: UUID4,
    config: LoggerConfig,
) -> anyhow::Result<()> {
    if LOGGING_INITIALIZED.swap(true, Ordering::SeqCst) {
        anyhow::bail!("Logging already initialized");
    }

    Logger::init_with_config(trader_id, instance_id, config)
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_init_logging_is_once_per_process() {
        let trader_id = TraderId::default();

        let first = init_logging(trader_id, UUID4::new(), LoggerConfig::default());
        let second = init_logging(trader_id, UUID4::new(), LoggerConfig::default());

        assert!(first.is_ok());
        assert!(logging_is_initialized());
        assert_eq!(
            second.unwrap_err().to_string(),
            "Logging already initialized"
        );
    }
}
