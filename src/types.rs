use core::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Identifier the operating system assigned to a display
///
/// Only valid for the current view of the hardware topology; it is not stable across reboots or
/// reconnects.
#[repr(transparent)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DisplayHandle(pub u32);

impl DisplayHandle {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for DisplayHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Selects which displays the registry enumerates
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DisplayListScope {
    /// Physically connected
    #[default]
    Online,
    /// Connected and currently driven
    Active,
}

impl fmt::Display for DisplayListScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayListScope::Online => write!(f, "online"),
            DisplayListScope::Active => write!(f, "active"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ParseDisplayListScopeError {
    #[error("Unknown display list scope: {0}. Allowed values: `online`, `active`")]
    UnknownScope(String),
}

impl FromStr for DisplayListScope {
    type Err = ParseDisplayListScopeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "online" => Ok(DisplayListScope::Online),
            "active" => Ok(DisplayListScope::Active),
            _ => Err(ParseDisplayListScopeError::UnknownScope(s.to_string())),
        }
    }
}

/// Contains the resolution of a display mode
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Resolution {
    pub width: u64,
    pub height: u64,
}

impl Resolution {
    /// Creates a new resolution
    pub fn new(width: u64, height: u64) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Refresh rate in Hz
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd)]
pub struct RefreshRate(pub f64);

impl RefreshRate {
    pub fn new(hz: f64) -> Self {
        Self(hz)
    }
}

impl fmt::Display for RefreshRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // always keep a fractional digit: `60.0`, `59.94`
        if self.0.fract() == 0.0 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// One mode a display advertises
///
/// `M` is the backend's native mode object, kept so the exact mode can be handed back when
/// configuring the display. The `id` only orders and distinguishes modes returned by the same
/// query.
#[derive(Debug, Clone)]
pub struct DisplayMode<M> {
    pub resolution: Resolution,
    pub refresh_rate: RefreshRate,
    pub id: i32,
    native: M,
}

impl<M> DisplayMode<M> {
    pub fn new(width: u64, height: u64, refresh_rate: f64, id: i32, native: M) -> Self {
        Self {
            resolution: Resolution::new(width, height),
            refresh_rate: RefreshRate::new(refresh_rate),
            id,
            native,
        }
    }

    pub fn width(&self) -> u64 {
        self.resolution.width
    }

    pub fn height(&self) -> u64 {
        self.resolution.height
    }

    /// The backend's own representation of this mode
    pub fn native(&self) -> &M {
        &self.native
    }
}

impl<M> fmt::Display for DisplayMode<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} @ {} Hz",
            self.id, self.resolution, self.refresh_rate
        )
    }
}
