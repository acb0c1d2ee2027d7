//! Window extents.

use std::fmt;

/// A width/height pair in pixels (or cells for terminal windows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Extent {
    /// Width.
    pub width: u32,
    /// Height.
    pub height: u32,
}

impl Extent {
    /// Creates a new extent.
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns an extent at least as large as `min` in both dimensions.
    #[inline]
    pub fn clamp_min(self, min: Extent) -> Self {
        Self {
            width: self.width.max(min.width),
            height: self.height.max(min.height),
        }
    }

    /// Returns true if either dimension is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl From<(u32, u32)> for Extent {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}
