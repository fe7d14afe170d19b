//! The seam between `displix` and the native display-configuration API

use crate::{DisplayHandle, DisplayListScope, DisplayMode, NativeStatus};

/// Calls into the operating system's display-configuration subsystem
///
/// Implementations translate native status codes into [`NativeStatus`] and do nothing else:
/// ordering, count/fetch handling and the transaction sequencing live in the library.
pub trait DisplayBackend {
    /// Native mode object handed back when configuring a display
    type Mode;
    /// Handle of an open configuration transaction
    type Config;

    /// Enumerates the displays in `scope`
    ///
    /// Without a buffer only the number of displays is returned. With a buffer at most
    /// `buffer.len()` identifiers are written and their number is returned.
    fn get_display_list(
        &self,
        scope: DisplayListScope,
        buffer: Option<&mut [DisplayHandle]>,
    ) -> Result<u32, NativeStatus>;

    /// The main (primary) display
    fn main_display(&self) -> DisplayHandle;

    /// The mode `display` is currently driven with, `None` for a stale handle
    fn current_mode(&self, display: DisplayHandle) -> Option<DisplayMode<Self::Mode>>;

    /// All modes `display` advertises, in native order
    fn all_modes(
        &self,
        display: DisplayHandle,
        include_duplicate_low_res: bool,
    ) -> Vec<DisplayMode<Self::Mode>>;

    fn begin_configuration(&self) -> Result<Self::Config, NativeStatus>;

    fn configure_mode(
        &self,
        config: &mut Self::Config,
        display: DisplayHandle,
        mode: &Self::Mode,
    ) -> Result<(), NativeStatus>;

    /// Commits the transaction for the current session only
    fn complete_configuration(&self, config: Self::Config) -> Result<(), NativeStatus>;
}

impl<B: DisplayBackend + ?Sized> DisplayBackend for &B {
    type Mode = B::Mode;
    type Config = B::Config;

    fn get_display_list(
        &self,
        scope: DisplayListScope,
        buffer: Option<&mut [DisplayHandle]>,
    ) -> Result<u32, NativeStatus> {
        (**self).get_display_list(scope, buffer)
    }

    fn main_display(&self) -> DisplayHandle {
        (**self).main_display()
    }

    fn current_mode(&self, display: DisplayHandle) -> Option<DisplayMode<Self::Mode>> {
        (**self).current_mode(display)
    }

    fn all_modes(
        &self,
        display: DisplayHandle,
        include_duplicate_low_res: bool,
    ) -> Vec<DisplayMode<Self::Mode>> {
        (**self).all_modes(display, include_duplicate_low_res)
    }

    fn begin_configuration(&self) -> Result<Self::Config, NativeStatus> {
        (**self).begin_configuration()
    }

    fn configure_mode(
        &self,
        config: &mut Self::Config,
        display: DisplayHandle,
        mode: &Self::Mode,
    ) -> Result<(), NativeStatus> {
        (**self).configure_mode(config, display, mode)
    }

    fn complete_configuration(&self, config: Self::Config) -> Result<(), NativeStatus> {
        (**self).complete_configuration(config)
    }
}
