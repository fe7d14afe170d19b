//! Three-phase display configuration transaction
//!
//! `Idle -> ConfigBegun -> ModeConfigured -> Committed`, where any phase may short-circuit to
//! `Failed`. Each state only knows how to run its own phase, so a later phase can never be
//! attempted once an earlier one has failed.

use core::fmt;

use crate::{DisplayBackend, DisplayHandle, NativeStatus};

/// A phase of the configuration transaction
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Phase {
    Begin,
    Configure,
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Begin => write!(f, "begin"),
            Phase::Configure => write!(f, "configure"),
            Phase::Complete => write!(f, "complete"),
        }
    }
}

/// State of a [`ModeTransaction`]
#[derive(Debug)]
pub enum TransactionState<C> {
    Idle,
    ConfigBegun(C),
    ModeConfigured(C),
    Committed,
    Failed { phase: Phase, status: NativeStatus },
}

impl<C> TransactionState<C> {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TransactionState::Committed | TransactionState::Failed { .. }
        )
    }
}

/// Applies a single mode to a single display
pub struct ModeTransaction<'a, B: DisplayBackend> {
    backend: &'a B,
    display: DisplayHandle,
    mode: &'a B::Mode,
    state: TransactionState<B::Config>,
}

impl<'a, B: DisplayBackend> ModeTransaction<'a, B> {
    pub fn new(backend: &'a B, display: DisplayHandle, mode: &'a B::Mode) -> Self {
        Self {
            backend,
            display,
            mode,
            state: TransactionState::Idle,
        }
    }

    pub fn state(&self) -> &TransactionState<B::Config> {
        &self.state
    }

    /// Runs the next phase; terminal states stay where they are
    pub fn step(&mut self) {
        let state = std::mem::replace(&mut self.state, TransactionState::Committed);
        self.state = match state {
            TransactionState::Idle => match self.backend.begin_configuration() {
                Ok(config) => TransactionState::ConfigBegun(config),
                Err(status) => Self::fail(Phase::Begin, status),
            },
            TransactionState::ConfigBegun(mut config) => {
                match self
                    .backend
                    .configure_mode(&mut config, self.display, self.mode)
                {
                    Ok(()) => TransactionState::ModeConfigured(config),
                    Err(status) => Self::fail(Phase::Configure, status),
                }
            }
            TransactionState::ModeConfigured(config) => {
                match self.backend.complete_configuration(config) {
                    Ok(()) => TransactionState::Committed,
                    Err(status) => Self::fail(Phase::Complete, status),
                }
            }
            terminal => terminal,
        };
    }

    /// Steps until a terminal state is reached
    pub fn run(mut self) -> Result<(), (Phase, NativeStatus)> {
        loop {
            match &self.state {
                TransactionState::Committed => return Ok(()),
                TransactionState::Failed { phase, status } => return Err((*phase, *status)),
                _ => {}
            }
            self.step();
        }
    }

    fn fail(phase: Phase, status: NativeStatus) -> TransactionState<B::Config> {
        log::error!("Display configuration failed in the {} phase: {}", phase, status);
        TransactionState::Failed { phase, status }
    }
}
