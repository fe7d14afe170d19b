//! CoreGraphics implementation of [`DisplayBackend`]

use std::ptr;

use core_foundation::base::TCFType;
use core_foundation::boolean::CFBoolean;
use core_foundation::dictionary::CFDictionary;
use core_foundation::string::{CFString, CFStringRef};
use core_graphics::base::CGError;
use core_graphics::display::{
    CGConfigureOption, CGDirectDisplayID, CGDisplay, CGDisplayConfigRef, CGDisplayMode,
};

use crate::{DisplayBackend, DisplayHandle, DisplayListScope, DisplayMode, NativeStatus};

#[link(name = "CoreGraphics", kind = "framework")]
unsafe extern "C" {
    static kCGDisplayShowDuplicateLowResolutionModes: CFStringRef;

    fn CGGetOnlineDisplayList(
        max_displays: u32,
        online_displays: *mut CGDirectDisplayID,
        display_count: *mut u32,
    ) -> CGError;

    fn CGGetActiveDisplayList(
        max_displays: u32,
        active_displays: *mut CGDirectDisplayID,
        display_count: *mut u32,
    ) -> CGError;
}

type DisplayListFn = unsafe extern "C" fn(u32, *mut CGDirectDisplayID, *mut u32) -> CGError;

/// Talks to the CoreGraphics display services
#[derive(Debug, Default, Clone, Copy)]
pub struct CoreGraphicsBackend;

impl CoreGraphicsBackend {
    pub fn new() -> Self {
        Self
    }

    fn to_display_mode(mode: CGDisplayMode) -> DisplayMode<CGDisplayMode> {
        DisplayMode::new(
            mode.width(),
            mode.height(),
            mode.refresh_rate(),
            mode.io_display_mode_id(),
            mode,
        )
    }
}

impl DisplayBackend for CoreGraphicsBackend {
    type Mode = CGDisplayMode;
    type Config = CGDisplayConfigRef;

    fn get_display_list(
        &self,
        scope: DisplayListScope,
        buffer: Option<&mut [DisplayHandle]>,
    ) -> Result<u32, NativeStatus> {
        let list: DisplayListFn = match scope {
            DisplayListScope::Online => CGGetOnlineDisplayList,
            DisplayListScope::Active => CGGetActiveDisplayList,
        };

        let mut count: u32 = 0;
        // `DisplayHandle` is a transparent wrapper around `CGDirectDisplayID`
        let err = match buffer {
            None => unsafe { list(u32::MAX, ptr::null_mut(), &mut count) },
            Some(buffer) => unsafe {
                list(
                    u32::try_from(buffer.len()).unwrap_or(u32::MAX),
                    buffer.as_mut_ptr().cast::<CGDirectDisplayID>(),
                    &mut count,
                )
            },
        };

        NativeStatus::check(err)?;
        Ok(count)
    }

    fn main_display(&self) -> DisplayHandle {
        DisplayHandle(CGDisplay::main().id)
    }

    fn current_mode(&self, display: DisplayHandle) -> Option<DisplayMode<CGDisplayMode>> {
        CGDisplay::new(display.id())
            .display_mode()
            .map(Self::to_display_mode)
    }

    fn all_modes(
        &self,
        display: DisplayHandle,
        include_duplicate_low_res: bool,
    ) -> Vec<DisplayMode<CGDisplayMode>> {
        let modes = if include_duplicate_low_res {
            let key = unsafe {
                CFString::wrap_under_get_rule(kCGDisplayShowDuplicateLowResolutionModes)
            };
            let options = CFDictionary::from_CFType_pairs(&[(key, CFBoolean::true_value())]);
            CGDisplayMode::all_display_modes(display.id(), options.as_concrete_TypeRef())
        } else {
            CGDisplayMode::all_display_modes(display.id(), ptr::null())
        };

        modes
            .unwrap_or_default()
            .into_iter()
            .map(Self::to_display_mode)
            .collect()
    }

    fn begin_configuration(&self) -> Result<CGDisplayConfigRef, NativeStatus> {
        CGDisplay::main()
            .begin_configuration()
            .map_err(NativeStatus::from_code)
    }

    fn configure_mode(
        &self,
        config: &mut CGDisplayConfigRef,
        display: DisplayHandle,
        mode: &CGDisplayMode,
    ) -> Result<(), NativeStatus> {
        CGDisplay::new(display.id())
            .configure_display_with_display_mode(config, mode)
            .map_err(NativeStatus::from_code)
    }

    fn complete_configuration(&self, config: CGDisplayConfigRef) -> Result<(), NativeStatus> {
        CGDisplay::main()
            .complete_configuration(&config, CGConfigureOption::ConfigureForSession)
            .map_err(NativeStatus::from_code)
    }
}
