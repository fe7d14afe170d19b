#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use displix::{DisplayBackend, DisplayHandle, DisplayListScope, DisplayMode, NativeStatus, Phase};

/// A mode of the scripted backend
#[derive(Debug, Clone, PartialEq)]
pub struct FakeMode {
    pub width: u64,
    pub height: u64,
    pub refresh_rate: f64,
    pub id: i32,
    pub duplicate_low_res: bool,
}

fn mode(width: u64, height: u64, refresh_rate: f64, id: i32) -> FakeMode {
    FakeMode {
        width,
        height,
        refresh_rate,
        id,
        duplicate_low_res: false,
    }
}

fn low_res(width: u64, height: u64, refresh_rate: f64, id: i32) -> FakeMode {
    FakeMode {
        duplicate_low_res: true,
        ..mode(width, height, refresh_rate, id)
    }
}

/// Native calls seen by the scripted backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CountDisplays(DisplayListScope),
    FetchDisplays(DisplayListScope, usize),
    Begin,
    Configure(DisplayHandle, i32),
    Complete(u32),
}

/// An open transaction of the scripted backend
#[derive(Debug)]
pub struct FakeConfig {
    token: u32,
    pending: Vec<(DisplayHandle, i32)>,
}

/// In-memory display services
///
/// Modes are reported in the order they are stored, which is deliberately not sorted by id.
#[derive(Default)]
pub struct FakeBackend {
    pub online: Vec<DisplayHandle>,
    pub active: Vec<DisplayHandle>,
    pub main: DisplayHandle,
    pub modes: HashMap<DisplayHandle, Vec<FakeMode>>,
    pub current: RefCell<HashMap<DisplayHandle, i32>>,
    pub count_failure: Option<NativeStatus>,
    pub fetch_failure: Option<NativeStatus>,
    pub phase_failure: Option<(Phase, NativeStatus)>,
    pub calls: RefCell<Vec<Call>>,
    next_token: Cell<u32>,
}

impl FakeBackend {
    /// A built-in panel (1), an external monitor (2) and a connected but idle display (3)
    pub fn desk() -> Self {
        let mut modes = HashMap::new();
        modes.insert(
            DisplayHandle(1),
            vec![
                mode(1440, 900, 60.0, 9),
                mode(2880, 1800, 60.0, 3),
                mode(1280, 800, 60.0, 5),
                low_res(1024, 640, 60.0, 7),
                mode(1680, 1050, 59.94, 1),
                low_res(720, 450, 60.0, 11),
            ],
        );
        modes.insert(
            DisplayHandle(2),
            vec![
                mode(1600, 900, 60.0, 24),
                mode(3840, 2160, 30.0, 22),
                mode(1920, 1080, 60.0, 20),
                mode(1280, 720, 60.0, 23),
                mode(2560, 1440, 60.0, 21),
            ],
        );

        let mut current = HashMap::new();
        current.insert(DisplayHandle(1), 9);
        current.insert(DisplayHandle(2), 20);

        Self {
            online: vec![DisplayHandle(1), DisplayHandle(2), DisplayHandle(3)],
            active: vec![DisplayHandle(1), DisplayHandle(2)],
            main: DisplayHandle(1),
            modes,
            current: RefCell::new(current),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn transaction_calls(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|call| {
                matches!(call, Call::Begin | Call::Configure(..) | Call::Complete(_))
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn fails_in(&self, phase: Phase) -> Option<NativeStatus> {
        match self.phase_failure {
            Some((failing, status)) if failing == phase => Some(status),
            _ => None,
        }
    }

    fn to_display_mode(mode: &FakeMode) -> DisplayMode<FakeMode> {
        DisplayMode::new(
            mode.width,
            mode.height,
            mode.refresh_rate,
            mode.id,
            mode.clone(),
        )
    }
}

impl DisplayBackend for FakeBackend {
    type Mode = FakeMode;
    type Config = FakeConfig;

    fn get_display_list(
        &self,
        scope: DisplayListScope,
        buffer: Option<&mut [DisplayHandle]>,
    ) -> Result<u32, NativeStatus> {
        let displays = match scope {
            DisplayListScope::Online => &self.online,
            DisplayListScope::Active => &self.active,
        };

        match buffer {
            None => {
                self.record(Call::CountDisplays(scope));
                match self.count_failure {
                    Some(status) => Err(status),
                    None => Ok(displays.len() as u32),
                }
            }
            Some(buffer) => {
                self.record(Call::FetchDisplays(scope, buffer.len()));
                if let Some(status) = self.fetch_failure {
                    return Err(status);
                }
                let n = buffer.len().min(displays.len());
                buffer[..n].copy_from_slice(&displays[..n]);
                Ok(n as u32)
            }
        }
    }

    fn main_display(&self) -> DisplayHandle {
        self.main
    }

    fn current_mode(&self, display: DisplayHandle) -> Option<DisplayMode<FakeMode>> {
        let id = *self.current.borrow().get(&display)?;
        self.modes
            .get(&display)?
            .iter()
            .find(|mode| mode.id == id)
            .map(Self::to_display_mode)
    }

    fn all_modes(
        &self,
        display: DisplayHandle,
        include_duplicate_low_res: bool,
    ) -> Vec<DisplayMode<FakeMode>> {
        self.modes
            .get(&display)
            .map(|modes| {
                modes
                    .iter()
                    .filter(|mode| include_duplicate_low_res || !mode.duplicate_low_res)
                    .map(Self::to_display_mode)
                    .collect()
            })
            .unwrap_or_default()
    }

    fn begin_configuration(&self) -> Result<FakeConfig, NativeStatus> {
        self.record(Call::Begin);
        if let Some(status) = self.fails_in(Phase::Begin) {
            return Err(status);
        }

        let token = self.next_token.get() + 1;
        self.next_token.set(token);
        Ok(FakeConfig {
            token,
            pending: Vec::new(),
        })
    }

    fn configure_mode(
        &self,
        config: &mut FakeConfig,
        display: DisplayHandle,
        mode: &FakeMode,
    ) -> Result<(), NativeStatus> {
        self.record(Call::Configure(display, mode.id));
        if let Some(status) = self.fails_in(Phase::Configure) {
            return Err(status);
        }

        config.pending.push((display, mode.id));
        Ok(())
    }

    fn complete_configuration(&self, config: FakeConfig) -> Result<(), NativeStatus> {
        self.record(Call::Complete(config.token));
        if let Some(status) = self.fails_in(Phase::Complete) {
            return Err(status);
        }

        let mut current = self.current.borrow_mut();
        for (display, id) in config.pending {
            current.insert(display, id);
        }
        Ok(())
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
