use core::fmt;

use thiserror::Error;

use crate::{
    DisplayBackend, DisplayHandle, DisplayListScope, DisplayMode, NativeStatus,
    transaction::{ModeTransaction, Phase},
};

/// Error type for the display module
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DisplayError {
    #[error("Failed to query the {scope} display list: {status}")]
    DisplayQuery {
        scope: DisplayListScope,
        status: NativeStatus,
    },
    #[error("Display {0} is not available")]
    InvalidDisplay(DisplayHandle),
    #[error("Display configuration failed in the {phase} phase: {status}")]
    Configuration { phase: Phase, status: NativeStatus },
}

impl DisplayError {
    /// The native status code behind this error, if any
    pub fn status(&self) -> Option<NativeStatus> {
        match self {
            DisplayError::DisplayQuery { status, .. } => Some(*status),
            DisplayError::Configuration { status, .. } => Some(*status),
            DisplayError::InvalidDisplay(_) => None,
        }
    }
}

type Result<T = ()> = std::result::Result<T, DisplayError>;

/// A single display, borrowed from the set it was enumerated in
pub struct Display<'a, B: DisplayBackend> {
    handle: DisplayHandle,
    display_set: &'a DisplaySet<B>,
}

impl<B: DisplayBackend> Clone for Display<'_, B> {
    fn clone(&self) -> Self {
        Self {
            handle: self.handle,
            display_set: self.display_set,
        }
    }
}

impl<B: DisplayBackend> fmt::Debug for Display<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Display")
            .field("handle", &self.handle)
            .field("main", &self.is_main())
            .finish()
    }
}

impl<'a, B: DisplayBackend> Display<'a, B> {
    pub fn handle(&self) -> DisplayHandle {
        self.handle
    }

    /// Position of this display in the enumerated list
    pub fn index(&self) -> Option<usize> {
        self.display_set.position(self.handle)
    }

    pub fn is_main(&self) -> bool {
        self.display_set.main == self.handle
    }

    fn backend(&self) -> &'a B {
        &self.display_set.backend
    }

    /// The mode the display is currently driven with
    pub fn current_mode(&self) -> Result<DisplayMode<B::Mode>> {
        self.backend()
            .current_mode(self.handle)
            .ok_or(DisplayError::InvalidDisplay(self.handle))
    }

    /// All modes this display advertises, sorted by mode identifier
    ///
    /// The order is stable across calls with the same `include_duplicate_low_res`, so positions in
    /// the returned list can be used to select a mode.
    pub fn available_modes(&self, include_duplicate_low_res: bool) -> Vec<DisplayMode<B::Mode>> {
        let mut modes = self
            .backend()
            .all_modes(self.handle, include_duplicate_low_res);
        modes.sort_by_key(|mode| mode.id);

        log::debug!(
            "Display {}: {} modes (duplicate low resolution modes: {})",
            self.handle,
            modes.len(),
            include_duplicate_low_res
        );

        modes
    }

    /// Returns the mode at `index` of [`Display::available_modes`]
    pub fn mode_at(
        &self,
        include_duplicate_low_res: bool,
        index: usize,
    ) -> Option<DisplayMode<B::Mode>> {
        self.available_modes(include_duplicate_low_res)
            .into_iter()
            .nth(index)
    }

    /// Switches this display to `mode` for the current session
    pub fn apply_mode(&self, mode: &DisplayMode<B::Mode>) -> Result {
        log::debug!("Applying mode {} to display {}", mode, self.handle);

        ModeTransaction::new(self.backend(), self.handle, mode.native())
            .run()
            .map_err(|(phase, status)| DisplayError::Configuration { phase, status })?;

        log::info!("Display {} switched to {}", self.handle, mode.resolution);
        Ok(())
    }
}

/// The displays known to the system at the time of the query
pub struct DisplaySet<B: DisplayBackend> {
    backend: B,
    scope: DisplayListScope,
    handles: Vec<DisplayHandle>,
    main: DisplayHandle,
}

impl<B: DisplayBackend> fmt::Debug for DisplaySet<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplaySet")
            .field("scope", &self.scope)
            .field("handles", &self.handles)
            .field("main", &self.main)
            .finish()
    }
}

impl<B: DisplayBackend> DisplaySet<B> {
    /// Iterates over the displays in this set
    pub fn displays(&self) -> impl ExactSizeIterator<Item = Display<'_, B>> {
        self.handles.iter().map(|&handle| Display {
            handle,
            display_set: self,
        })
    }

    /// Returns display for the given `index`
    pub fn get(&self, index: usize) -> Option<Display<'_, B>> {
        self.handles.get(index).map(|&handle| Display {
            handle,
            display_set: self,
        })
    }

    /// Returns the display with the given `handle`, whether or not it is part of this set
    pub fn display(&self, handle: DisplayHandle) -> Display<'_, B> {
        Display {
            handle,
            display_set: self,
        }
    }

    /// Returns the main display
    pub fn main(&self) -> Display<'_, B> {
        self.display(self.main)
    }

    pub fn handles(&self) -> &[DisplayHandle] {
        &self.handles
    }

    pub fn scope(&self) -> DisplayListScope {
        self.scope
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn position(&self, handle: DisplayHandle) -> Option<usize> {
        self.handles.iter().position(|&h| h == handle)
    }
}

impl<B: DisplayBackend> fmt::Display for DisplaySet<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DisplaySet {{ scope: {}, displays: [", self.scope)?;
        for (i, handle) in self.handles.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", handle)?;
            if *handle == self.main {
                write!(f, " (main)")?;
            }
        }
        write!(f, "] }}")
    }
}

/// Returns the identifiers of all displays in `scope`, in the order the system reports them.
pub fn list_displays<B: DisplayBackend>(
    backend: &B,
    scope: DisplayListScope,
) -> Result<Vec<DisplayHandle>> {
    let query_error = |status| DisplayError::DisplayQuery { scope, status };

    // Step 1: Get the count
    let count = backend
        .get_display_list(scope, None)
        .map_err(query_error)?;

    log::debug!("Display list ({}): {} displays", scope, count);

    // Step 2: Fetch into a buffer of that size
    let mut handles = vec![DisplayHandle::default(); count as usize];
    let written = backend
        .get_display_list(scope, Some(handles.as_mut_slice()))
        .map_err(query_error)?;

    // Truncate to actual returned count
    handles.truncate(written as usize);

    Ok(handles)
}

/// Queries the displays in `scope` and keeps the backend for later per-display calls.
pub fn query_displays<B: DisplayBackend>(
    backend: B,
    scope: DisplayListScope,
) -> Result<DisplaySet<B>> {
    let handles = list_displays(&backend, scope)?;
    let main = backend.main_display();

    for (index, handle) in handles.iter().enumerate() {
        log::debug!(
            "Display {}: {} (main={})",
            index,
            handle,
            *handle == main
        );
    }

    Ok(DisplaySet {
        backend,
        scope,
        handles,
        main,
    })
}
