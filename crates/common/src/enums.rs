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

//! Enumerations for common components.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, FromRepr};

/// The state of a component within the system.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    AsRefStr,
    FromRepr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComponentState {
    /// When a component is instantiated, but not yet ready to fulfill its specification.
    #[default]
    PreInitialized = 0,
    /// When a component is able to be started.
    Ready = 1,
    /// When a component is executing its actions on `start`.
    Starting = 2,
    /// When a component is operating normally and can fulfill its specification.
    Running = 3,
    /// When a component is executing its actions on `stop`.
    Stopping = 4,
    /// When a component has successfully stopped.
    Stopped = 5,
    /// When a component is started again after its initial start.
    Resuming = 6,
    /// When a component is executing its actions on `reset`.
    Resetting = 7,
    /// When a component is executing its actions on `dispose`.
    Disposing = 8,
    /// When a component has successfully shut down and released all of its resources.
    Disposed = 9,
    /// When a component is executing its actions on `degrade`.
    Degrading = 10,
    /// When a component has successfully degraded and may not meet its full specification.
    Degraded = 11,
    /// When a component is executing its actions on `fault`.
    Faulting = 12,
    /// When a component has successfully shut down due to a detected fault.
    Faulted = 13,
}

impl ComponentState {
    /// Returns whether the state is terminal (no further transitions are possible).
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Disposed | Self::Faulted)
    }
}

/// A trigger condition for a component within the system.
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    AsRefStr,
    FromRepr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComponentTrigger {
    /// A trigger for the component to initialize.
    Initialize = 1,
    /// A trigger for the component to start.
    Start = 2,
    /// A trigger when the component has successfully started.
    StartCompleted = 3,
    /// A trigger for the component to stop.
    Stop = 4,
    /// A trigger when the component has successfully stopped.
    StopCompleted = 5,
    /// A trigger for the component to resume (after being stopped).
    Resume = 6,
    /// A trigger when the component has successfully resumed.
    ResumeCompleted = 7,
    /// A trigger for the component to reset.
    Reset = 8,
    /// A trigger when the component has successfully reset.
    ResetCompleted = 9,
    /// A trigger for the component to dispose and release resources.
    Dispose = 10,
    /// A trigger when the component has successfully disposed.
    DisposeCompleted = 11,
    /// A trigger for the component to degrade.
    Degrade = 12,
    /// A trigger when the component has successfully degraded.
    DegradeCompleted = 13,
    /// A trigger for the component to fault.
    Fault = 14,
    /// A trigger when the component has successfully faulted.
    FaultCompleted = 15,
}

/// The log level for log messages.
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    AsRefStr,
    FromRepr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// The **DBG** debug log level.
    #[strum(serialize = "DBG", serialize = "DEBUG")]
    Debug = 10,
    /// The **INF** info log level.
    #[strum(serialize = "INF", serialize = "INFO")]
    Info = 20,
    /// The **WRN** warning log level.
    #[strum(serialize = "WRN", serialize = "WARNING")]
    Warning = 30,
    /// The **ERR** error log level.
    #[strum(serialize = "ERR", serialize = "ERROR")]
    Error = 40,
}

/// The log color for log messages.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    AsRefStr,
    FromRepr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogColor {
    /// The default/normal log color.
    #[default]
    Normal = 0,
    /// The green log color, typically used with [`LogLevel::Info`] log levels and associated with success events.
    Green = 1,
    /// The blue log color, typically used with [`LogLevel::Info`] log levels and associated with user actions.
    Blue = 2,
    /// The magenta log color, typically used with [`LogLevel::Info`] log levels.
    Magenta = 3,
    /// The cyan log color, typically used with [`LogLevel::Info`] log levels.
    Cyan = 4,
    /// The yellow log color, typically used with [`LogLevel::Warning`] log levels.
    Yellow = 5,
    /// The red log color, typically used with [`LogLevel::Error`] level.
    Red = 6,
}

impl LogColor {
    /// Returns the ANSI escape code corresponding to the log color.
    #[must_use]
    pub const fn as_ansi(&self) -> &str {
        match self {
            Self::Normal => "",
            Self::Green => "\x1b[92m",
            Self::Blue => "\x1b[94m",
            Self::Magenta => "\x1b[35m",
            Self::Cyan => "\x1b[36m",
            Self::Yellow => "\x1b[1;33m",
            Self::Red => "\x1b[1;31m",
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(ComponentState::PreInitialized, "PRE_INITIALIZED")]
    #[case(ComponentState::Ready, "READY")]
    #[case(ComponentState::Running, "RUNNING")]
    #[case(ComponentState::Disposed, "DISPOSED")]
    fn test_component_state_display(#[case] state: ComponentState, #[case] expected: &str) {
        assert_eq!(state.to_string(), expected);
    }

    #[rstest]
    fn test_component_state_terminal() {
        assert!(ComponentState::Disposed.is_terminal());
        assert!(ComponentState::Faulted.is_terminal());
        assert!(!ComponentState::Stopped.is_terminal());
    }

    #[rstest]
    #[case("START", ComponentTrigger::Start)]
    #[case("START_COMPLETED", ComponentTrigger::StartCompleted)]
    fn test_component_trigger_from_str(#[case] input: &str, #[case] expected: ComponentTrigger) {
        assert_eq!(ComponentTrigger::from_str(input).unwrap(), expected);
    }

    #[rstest]
    fn test_log_level_values() {
        assert_eq!(LogLevel::Debug as u8, 10);
        assert_eq!(LogLevel::Info as u8, 20);
        assert_eq!(LogLevel::Warning as u8, 30);
        assert_eq!(LogLevel::Error as u8, 40);
    }

    #[rstest]
    fn test_log_level_from_str_abbreviations() {
        assert_eq!(LogLevel::from_str("DBG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("INFO").unwrap(), LogLevel::Info);
    }

    #[rstest]
    fn test_log_color_ansi() {
        assert_eq!(LogColor::Normal.as_ansi(), "");
        assert_eq!(LogColor::Red.as_ansi(), "\x1b[1;31m");
    }
}
