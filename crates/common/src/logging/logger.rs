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

use std::{
    fmt::Debug,
    io::{self, Write},
    str::FromStr,
};

use log::{Level, LevelFilter, Log, Metadata, Record};
use sextant_core::{UUID4, datetime::unix_nanos_to_iso8601, time::get_atomic_clock_realtime};
use sextant_model::identifiers::TraderId;

use crate::enums::LogColor;

/// Configuration for the logger.
///
/// A spec string is a semicolon-separated list of `key=value` options, e.g.
/// `"stdout=Debug;is_colored"`. Supported options:
///
/// - `stdout=<level>` sets the maximum level written to stdout.
/// - `is_colored` enables ANSI color codes.
/// - `print_config` prints the logger configuration on initialization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Maximum log level written to stdout.
    pub stdout_level: LevelFilter,
    /// If ANSI color codes are written.
    pub is_colored: bool,
    /// If the configuration should be printed to stdout at initialization.
    pub print_config: bool,
}

impl Default for LoggerConfig {
    /// Creates a new default [`LoggerConfig`] instance.
    fn default() -> Self {
        Self {
            stdout_level: LevelFilter::Info,
            is_colored: false,
            print_config: false,
        }
    }
}

impl LoggerConfig {
    /// Creates a new [`LoggerConfig`] instance from the given `spec` string.
    ///
    /// # Errors
    ///
    /// Returns an error if an option in the spec is unrecognized or invalid.
    pub fn from_spec(spec: &str) -> anyhow::Result<Self> {
        let mut config = Self::default();
        for kv in spec.split(';').filter(|kv| !kv.is_empty()) {
            match kv {
                "is_colored" => config.is_colored = true,
                "print_config" => config.print_config = true,
                _ => match kv.split_once('=') {
                    Some(("stdout", level)) => {
                        config.stdout_level = LevelFilter::from_str(level)
                            .map_err(|e| anyhow::anyhow!("Invalid log level '{level}': {e}"))?;
                    }
                    _ => anyhow::bail!("Invalid logging config option '{kv}'"),
                },
            }
        }
        Ok(config)
    }

    /// Creates a new [`LoggerConfig`] instance from the `SEXTANT_LOG`
    /// environment variable, falling back to defaults when unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable holds an invalid spec.
    pub fn from_env() -> anyhow::Result<Self> {
        match std::env::var("SEXTANT_LOG") {
            Ok(spec) => Self::from_spec(&spec),
            Err(_) => Ok(Self::default()),
        }
    }
}

/// A logger writing structured, optionally colored lines to stdout.
///
/// Lines have the form `<timestamp> [<level>] <trader_id>.<target>: <message>`
/// with the timestamp in ISO 8601 at nanosecond precision.
pub struct Logger {
    config: LoggerConfig,
    trader_id: TraderId,
    instance_id: UUID4,
}

impl Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(stringify!(Logger))
            .field("config", &self.config)
            .field("trader_id", &self.trader_id)
            .field("instance_id", &self.instance_id)
            .finish()
    }
}

impl Logger {
    /// Initializes the global logger with the given `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if a global logger was already installed.
    pub fn init_with_config(
        trader_id: TraderId,
        instance_id: UUID4,
        config: LoggerConfig,
    ) -> anyhow::Result<()> {
        let print_config = config.print_config;
        let max_level = config.stdout_level;
        let logger = Self {
            config,
            trader_id,
            instance_id,
        };

        if print_config {
            println!("Initialized logging: {logger:?}");
        }

        log::set_boxed_logger(Box::new(logger))
            .map_err(|e| anyhow::anyhow!("Failed to set logger: {e}"))?;
        log::set_max_level(max_level);
        Ok(())
    }

    const fn color_for_level(level: Level) -> LogColor {
        match level {
            Level::Error => LogColor::Red,
            Level::Warn => LogColor::Yellow,
            _ => LogColor::Normal,
        }
    }

    const fn level_label(level: Level) -> &'static str {
        match level {
            Level::Error => "ERR",
            Level::Warn => "WRN",
            Level::Info => "INF",
            Level::Debug => "DBG",
            Level::Trace => "TRC",
        }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.config.stdout_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let ts = unix_nanos_to_iso8601(get_atomic_clock_realtime().get_time_ns());
        let label = Self::level_label(record.level());
        let line = format!(
            "{ts} [{label}] {}.{}: {}",
            self.trader_id,
            record.target(),
            record.args(),
        );

        let mut stdout = io::stdout().lock();
        let result = if self.config.is_colored {
            let color = Self::color_for_level(record.level());
            writeln!(stdout, "{}{line}\x1b[0m", color.as_ansi())
        } else {
            writeln!(stdout, "{line}")
        };

        if let Err(e) = result {
            eprintln!("Error writing log line: {e}");
        }
    }

    fn flush(&self) {
        let _ = io::stdout().lock().flush();
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_logger_config_default() {
        let config = LoggerConfig::default();
        assert_eq!(config.stdout_level, LevelFilter::Info);
        assert!(!config.is_colored);
        assert!(!config.print_config);
    }

    #[rstest]
    fn test_logger_config_from_spec() {
        let config = LoggerConfig::from_spec("stdout=Debug;is_colored").unwrap();
        assert_eq!(config.stdout_level, LevelFilter::Debug);
        assert!(config.is_colored);
        assert!(!config.print_config);
    }

    #[rstest]
    fn test_logger_config_from_spec_print_config() {
        let config = LoggerConfig::from_spec("print_config").unwrap();
        assert!(config.print_config);
    }

    #[rstest]
    #[case("stdout=NotALevel")]
    #[case("unknown_option")]
    fn test_logger_config_from_spec_invalid(#[case] spec: &str) {
        assert!(LoggerConfig::from_spec(spec).is_err());
    }

    #[rstest]
    fn test_level_labels() {
        assert_eq!(Logger::level_label(Level::Error), "ERR");
        assert_eq!(Logger::level_label(Level::Warn), "WRN");
        assert_eq!(Logger::level_label(Level::Info), "INF");
        assert_eq!(Logger::level_label(Level::Debug), "DBG");
    }
}
