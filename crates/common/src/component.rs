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

//! The component lifecycle state machine.

use std::{any::Any, cell::RefCell, fmt::Debug, rc::Rc};

use sextant_model::identifiers::ComponentId;

use crate::{
    enums::{ComponentState, ComponentTrigger},
    msgbus::{self, MessageBus, switchboard::MessagingSwitchboard},
    timer::TimeEvent,
};

/// Common trait for lifecycle-managed components.
pub trait Component: Debug {
    /// Returns the unique identifier for this component.
    fn id(&self) -> ComponentId;

    /// Returns the current state of the component.
    fn state(&self) -> ComponentState;

    /// Returns whether the component is currently running.
    fn is_running(&self) -> bool {
        self.state() == ComponentState::Running
    }

    /// Returns whether the component is stopped.
    fn is_stopped(&self) -> bool {
        self.state() == ComponentState::Stopped
    }

    /// Returns whether the component is degraded.
    fn is_degraded(&self) -> bool {
        self.state() == ComponentState::Degraded
    }

    /// Returns whether the component has been disposed.
    fn is_disposed(&self) -> bool {
        self.state() == ComponentState::Disposed
    }

    /// Returns whether the component has faulted.
    fn is_faulted(&self) -> bool {
        self.state() == ComponentState::Faulted
    }

    /// Starts the component.
    ///
    /// # Errors
    ///
    /// Returns an error if the component fails to start.
    fn start(&mut self) -> anyhow::Result<()>;

    /// Stops the component.
    ///
    /// # Errors
    ///
    /// Returns an error if the component fails to stop.
    fn stop(&mut self) -> anyhow::Result<()>;

    /// Resumes the component (after being stopped).
    ///
    /// # Errors
    ///
    /// Returns an error if the component fails to resume.
    fn resume(&mut self) -> anyhow::Result<()>;

    /// Resets the component to its initial state.
    ///
    /// # Errors
    ///
    /// Returns an error if the component fails to reset.
    fn reset(&mut self) -> anyhow::Result<()>;

    /// Disposes of the component, releasing any resources.
    ///
    /// # Errors
    ///
    /// Returns an error if the component fails to dispose.
    fn dispose(&mut self) -> anyhow::Result<()>;

    /// Degrades the component.
    ///
    /// # Errors
    ///
    /// Returns an error if the component fails to degrade.
    fn degrade(&mut self) -> anyhow::Result<()>;

    /// Faults the component.
    ///
    /// # Errors
    ///
    /// Returns an error if the component fails to fault.
    fn fault(&mut self) -> anyhow::Result<()>;

    /// Handles a time event.
    fn handle_event(&mut self, event: TimeEvent);
}

#[rustfmt::skip]
impl ComponentState {
    /// Transitions the state machine with the component `trigger`.
    ///
    /// # Errors
    ///
    /// Returns an error if `trigger` is invalid for the current state
    /// (the state is left unchanged).
    pub fn transition(&self, trigger: &ComponentTrigger) -> anyhow::Result<Self> {
        let new_state = match (self, trigger) {
            (Self::PreInitialized, ComponentTrigger::Initialize) => Self::Ready,
            (Self::Ready, ComponentTrigger::Start) => Self::Starting,
            (Self::Starting, ComponentTrigger::StartCompleted) => Self::Running,
            (Self::Running, ComponentTrigger::Stop) => Self::Stopping,
            (Self::Running, ComponentTrigger::Degrade) => Self::Degrading,
            (Self::Stopping, ComponentTrigger::StopCompleted) => Self::Stopped,
            (Self::Stopped, ComponentTrigger::Resume) => Self::Resuming,
            (Self::Stopped, ComponentTrigger::Reset) => Self::Resetting,
            (Self::Resuming, ComponentTrigger::ResumeCompleted) => Self::Running,
            (Self::Resetting, ComponentTrigger::ResetCompleted) => Self::Ready,
            (Self::Degrading, ComponentTrigger::DegradeCompleted) => Self::Degraded,
            (Self::Degraded, ComponentTrigger::Reset) => Self::Resetting,
            (state, ComponentTrigger::Dispose) if !state.is_terminal() => Self::Disposing,
            (Self::Disposing, ComponentTrigger::DisposeCompleted) => Self::Disposed,
            (state, ComponentTrigger::Fault) if !state.is_terminal() => Self::Faulting,
            (Self::Faulting, ComponentTrigger::FaultCompleted) => Self::Faulted,
            _ => anyhow::bail!("Invalid state trigger {self} -> {trigger}"),
        };
        Ok(new_state)
    }
}

/// A reusable lifecycle core for components.
///
/// Owns the component ID and state, drives transitions, and publishes a
/// `events.system.component.<component_id>.<new_state>` topic on the attached
/// message bus after every successful transition.
#[derive(Debug)]
pub struct ComponentCore {
    /// The unique identifier for the component.
    pub component_id: ComponentId,
    state: ComponentState,
    trigger: Option<ComponentTrigger>,
    msgbus: Option<Rc<RefCell<MessageBus>>>,
}

impl ComponentCore {
    /// Creates a new [`ComponentCore`] instance in the `PreInitialized` state.
    #[must_use]
    pub const fn new(component_id: ComponentId, msgbus: Option<Rc<RefCell<MessageBus>>>) -> Self {
        Self {
            component_id,
            state: ComponentState::PreInitialized,
            trigger: None,
            msgbus,
        }
    }

    /// Returns the current state of the component.
    #[must_use]
    pub const fn state(&self) -> ComponentState {
        self.state
    }

    /// Returns the last trigger processed by the component.
    #[must_use]
    pub const fn last_trigger(&self) -> Option<ComponentTrigger> {
        self.trigger
    }

    /// Processes the component `trigger`, publishing the state transition.
    ///
    /// # Errors
    ///
    /// Returns an error if `trigger` is invalid for the current state;
    /// the state remains unchanged.
    pub fn transition(&mut self, trigger: ComponentTrigger) -> anyhow::Result<ComponentState> {
        let new_state = self.state.transition(&trigger)?;
        self.state = new_state;
        self.trigger = Some(trigger);

        log::debug!("{} {new_state}", self.component_id);

        if let Some(msgbus) = &self.msgbus {
            let topic = MessagingSwitchboard::topic_component_state(self.component_id, new_state);
            msgbus::publish(msgbus, topic, &new_state as &dyn Any);
        }

        Ok(new_state)
    }

    /// Transitions through `Initialize` to the `Ready` state.
    ///
    /// # Errors
    ///
    /// Returns an error on an invalid transition.
    pub fn initialize(&mut self) -> anyhow::Result<()> {
        self.transition(ComponentTrigger::Initialize)?;
        Ok(())
    }

    /// Transitions through `Start` and `StartCompleted` to the `Running` state.
    ///
    /// # Errors
    ///
    /// Returns an error on an invalid transition.
    pub fn start(&mut self) -> anyhow::Result<()> {
        self.transition(ComponentTrigger::Start)?;
        self.transition(ComponentTrigger::StartCompleted)?;
        Ok(())
    }

    /// Transitions through `Stop` and `StopCompleted` to the `Stopped` state.
    ///
    /// # Errors
    ///
    /// Returns an error on an invalid transition.
    pub fn stop(&mut self) -> anyhow::Result<()> {
        self.transition(ComponentTrigger::Stop)?;
        self.transition(ComponentTrigger::StopCompleted)?;
        Ok(())
    }

    /// Transitions through `Resume` and `ResumeCompleted` to the `Running` state.
    ///
    /// # Errors
    ///
    /// Returns an error on an invalid transition.
    pub fn resume(&mut self) -> anyhow::Result<()> {
        self.transition(ComponentTrigger::Resume)?;
        self.transition(ComponentTrigger::ResumeCompleted)?;
        Ok(())
    }

    /// Transitions through `Reset` and `ResetCompleted` to the `Ready` state.
    ///
    /// # Errors
    ///
    /// Returns an error on an invalid transition.
    pub fn reset(&mut self) -> anyhow::Result<()> {
        self.transition(ComponentTrigger::Reset)?;
        self.transition(ComponentTrigger::ResetCompleted)?;
        Ok(())
    }

    /// Transitions through `Dispose` and `DisposeCompleted` to the terminal
    /// `Disposed` state.
    ///
    /// # Errors
    ///
    /// Returns an error on an invalid transition.
    pub fn dispose(&mut self) -> anyhow::Result<()> {
        self.transition(ComponentTrigger::Dispose)?;
        self.transition(ComponentTrigger::DisposeCompleted)?;
        Ok(())
    }

    /// Transitions through `Degrade` and `DegradeCompleted` to the `Degraded` state.
    ///
    /// # Errors
    ///
    /// Returns an error on an invalid transition.
    pub fn degrade(&mut self) -> anyhow::Result<()> {
        self.transition(ComponentTrigger::Degrade)?;
        self.transition(ComponentTrigger::DegradeCompleted)?;
        Ok(())
    }

    /// Transitions through `Fault` and `FaultCompleted` to the terminal
    /// `Faulted` state.
    ///
    /// # Errors
    ///
    /// Returns an error on an invalid transition.
    pub fn fault(&mut self) -> anyhow::Result<()> {
        self.transition(ComponentTrigger::Fault)?;
        self.transition(ComponentTrigger::FaultCompleted)?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use rstest::rstest;
    use sextant_core::UUID4;
    use sextant_model::identifiers::TraderId;

    use super::*;
    use crate::msgbus::{ShareableMessageHandler, TypedMessageHandler};

    #[rstest]
    #[case(ComponentState::PreInitialized, ComponentTrigger::Initialize, ComponentState::Ready)]
    #[case(ComponentState::Ready, ComponentTrigger::Start, ComponentState::Starting)]
    #[case(ComponentState::Starting, ComponentTrigger::StartCompleted, ComponentState::Running)]
    #[case(ComponentState::Running, ComponentTrigger::Stop, ComponentState::Stopping)]
    #[case(ComponentState::Stopping, ComponentTrigger::StopCompleted, ComponentState::Stopped)]
    #[case(ComponentState::Stopped, ComponentTrigger::Resume, ComponentState::Resuming)]
    #[case(ComponentState::Resuming, ComponentTrigger::ResumeCompleted, ComponentState::Running)]
    #[case(ComponentState::Stopped, ComponentTrigger::Reset, ComponentState::Resetting)]
    #[case(ComponentState::Degraded, ComponentTrigger::Reset, ComponentState::Resetting)]
    #[case(ComponentState::Resetting, ComponentTrigger::ResetCompleted, ComponentState::Ready)]
    #[case(ComponentState::Running, ComponentTrigger::Degrade, ComponentState::Degrading)]
    #[case(ComponentState::Degrading, ComponentTrigger::DegradeCompleted, ComponentState::Degraded)]
    #[case(ComponentState::Ready, ComponentTrigger::Dispose, ComponentState::Disposing)]
    #[case(ComponentState::Stopped, ComponentTrigger::Dispose, ComponentState::Disposing)]
    #[case(ComponentState::Disposing, ComponentTrigger::DisposeCompleted, ComponentState::Disposed)]
    #[case(ComponentState::Running, ComponentTrigger::Fault, ComponentState::Faulting)]
    #[case(ComponentState::Faulting, ComponentTrigger::FaultCompleted, ComponentState::Faulted)]
    fn test_legal_transitions(
        #[case] state: ComponentState,
        #[case] trigger: ComponentTrigger,
        #[case] expected: ComponentState,
    ) {
        assert_eq!(state.transition(&trigger).unwrap(), expected);
    }

    #[rstest]
    #[case(ComponentState::PreInitialized, ComponentTrigger::Start)]
    #[case(ComponentState::Ready, ComponentTrigger::StartCompleted)]
    #[case(ComponentState::Stopped, ComponentTrigger::Start)]
    #[case(ComponentState::Running, ComponentTrigger::Resume)]
    #[case(ComponentState::Disposed, ComponentTrigger::Dispose)]
    #[case(ComponentState::Disposed, ComponentTrigger::Fault)]
    #[case(ComponentState::Faulted, ComponentTrigger::Start)]
    fn test_illegal_transitions_error(
        #[case] state: ComponentState,
        #[case] trigger: ComponentTrigger,
    ) {
        let result = state.transition(&trigger);
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Invalid state trigger")
        );
    }

    #[rstest]
    fn test_illegal_trigger_leaves_core_state_unchanged() {
        let mut core = ComponentCore::new(ComponentId::new("RiskEngine"), None);
        core.initialize().unwrap();
        core.start().unwrap();
        core.stop().unwrap();

        // STOPPED does not accept START
        let result = core.transition(ComponentTrigger::Start);
        assert!(result.is_err());
        assert_eq!(core.state(), ComponentState::Stopped);

        // Then a legal reset and restart succeeds
        core.transition(ComponentTrigger::Reset).unwrap();
        assert_eq!(core.state(), ComponentState::Resetting);
        core.transition(ComponentTrigger::ResetCompleted).unwrap();
        assert_eq!(core.state(), ComponentState::Ready);
        core.transition(ComponentTrigger::Start).unwrap();
        assert_eq!(core.state(), ComponentState::Starting);
    }

    #[rstest]
    fn test_full_lifecycle_via_core() {
        let mut core = ComponentCore::new(ComponentId::new("RiskEngine"), None);
        core.initialize().unwrap();
        assert_eq!(core.state(), ComponentState::Ready);

        core.start().unwrap();
        assert_eq!(core.state(), ComponentState::Running);

        core.degrade().unwrap();
        assert_eq!(core.state(), ComponentState::Degraded);

        core.reset().unwrap();
        assert_eq!(core.state(), ComponentState::Ready);

        core.start().unwrap();
        core.stop().unwrap();
        assert_eq!(core.state(), ComponentState::Stopped);

        core.resume().unwrap();
        assert_eq!(core.state(), ComponentState::Running);

        core.fault().unwrap();
        assert_eq!(core.state(), ComponentState::Faulted);
        assert!(core.state().is_terminal());
    }

    #[rstest]
    fn test_transitions_publish_component_state_topics() {
        let msgbus = MessageBus::new(TraderId::default(), UUID4::new(), None).into_shared();

        let received = Rc::new(RefCell::new(Vec::new()));
        let received_clone = received.clone();
        let handler = ShareableMessageHandler::from(TypedMessageHandler::with_id(
            "state-recorder",
            move |state: &ComponentState| received_clone.borrow_mut().push(*state),
        ));
        let handler_id = msgbus.borrow_mut().register_handler(handler);
        msgbus
            .borrow_mut()
            .subscribe(
                "events.system.component.RiskEngine.*",
                handler_id,
                None,
            )
            .unwrap();

        let mut core =
            ComponentCore::new(ComponentId::new("RiskEngine"), Some(msgbus.clone()));
        core.initialize().unwrap();
        core.start().unwrap();

        assert_eq!(
            *received.borrow(),
            vec![
                ComponentState::Ready,
                ComponentState::Starting,
                ComponentState::Running,
            ]
        );
        assert_eq!(msgbus.borrow().counters().published, 3);
    }
}
