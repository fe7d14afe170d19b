use crate::{DisplayBackend, DisplayHandle, DisplaySet};

/// What a single invocation should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Include duplicate low resolution modes
    pub show_low_res: bool,
    /// The selected display
    pub display: DisplayHandle,
    /// Mode to apply; `None` only lists
    pub mode_index: Option<usize>,
}

impl Settings {
    /// Resolves raw flag values against the enumerated displays
    ///
    /// A negative or out-of-range `display_index` keeps the main display selected. A negative
    /// `mode_index` means "no change".
    pub fn resolve<B: DisplayBackend>(
        display_set: &DisplaySet<B>,
        show_low_res: bool,
        display_index: Option<i64>,
        mode_index: Option<i64>,
    ) -> Self {
        let display = display_index
            .and_then(|index| usize::try_from(index).ok())
            .and_then(|index| display_set.get(index))
            .map(|display| display.handle())
            .unwrap_or_else(|| {
                if let Some(index) = display_index {
                    log::debug!("Display index {} not found, using the main display", index);
                }
                display_set.main().handle()
            });

        Self {
            show_low_res,
            display,
            mode_index: mode_index.and_then(|index| usize::try_from(index).ok()),
        }
    }
}
