// Copyright 2026 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport, breakpoints, and layout configuration.

use kurbo::{Insets, Size};

/// Smallest outer width a hosting surface is laid out at.
pub const MIN_OUTER_WIDTH: f64 = 320.0;

/// Smallest outer height a hosting surface is laid out at.
pub const MIN_OUTER_HEIGHT: f64 = 400.0;

/// On desktop the main axis never drops below this, so deep trees keep
/// room to grow rightwards even in a squeezed window.
pub const DESKTOP_MIN_WIDTH: f64 = 1280.0;

/// Device class selected from the outer main-axis size.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Breakpoint {
    /// Outer width below 768.
    Mobile,
    /// Outer width in 768..=1023.
    Tablet,
    /// Outer width 1024 and up.
    Desktop,
}

impl Breakpoint {
    /// Breakpoint for an outer width in logical pixels.
    pub fn of(width: f64) -> Self {
        if width < 768.0 {
            Self::Mobile
        } else if width < 1024.0 {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }

    /// Margins around the drawing area. The left margin is the widest to
    /// leave room for labels placed before their node.
    pub fn margins(self) -> Insets {
        match self {
            Self::Mobile => Insets::new(70.0, 12.0, 60.0, 12.0),
            Self::Tablet => Insets::new(100.0, 16.0, 90.0, 16.0),
            Self::Desktop => Insets::new(140.0, 20.0, 120.0, 20.0),
        }
    }

    /// Main-axis distance between consecutive depth levels.
    pub fn level_spacing(self) -> f64 {
        match self {
            Self::Mobile => 120.0,
            Self::Tablet => 150.0,
            Self::Desktop => 180.0,
        }
    }
}

/// Tunables for one layout pass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Main-axis distance between consecutive depth levels. Overrides any
    /// natural packed sizing: level `d` sits at `d * level_spacing` no
    /// matter how many nodes it holds.
    pub level_spacing: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            level_spacing: Breakpoint::Desktop.level_spacing(),
        }
    }
}

impl LayoutConfig {
    /// Config with the spacing constants of `breakpoint`.
    pub fn for_breakpoint(breakpoint: Breakpoint) -> Self {
        Self {
            level_spacing: breakpoint.level_spacing(),
        }
    }
}

/// Inner drawing area for one layout pass.
///
/// `width` bounds the main axis (depth growth), `height` the cross axis
/// (sibling spread). Both must be positive; [`layout`](crate::layout)
/// rejects anything else with [`LayoutError::InvalidViewport`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    /// Main-axis extent.
    pub width: f64,
    /// Cross-axis extent.
    pub height: f64,
}

impl Viewport {
    /// Derive the drawing area from the hosting surface's outer size.
    ///
    /// Clamps each axis to its floor, applies the desktop-only main-axis
    /// minimum, and subtracts the breakpoint margins.
    pub fn from_outer(outer: Size) -> Self {
        let mut width = outer.width.max(MIN_OUTER_WIDTH);
        let height = outer.height.max(MIN_OUTER_HEIGHT);
        let breakpoint = Breakpoint::of(width);
        if breakpoint == Breakpoint::Desktop {
            width = width.max(DESKTOP_MIN_WIDTH);
        }
        let m = breakpoint.margins();
        Self {
            width: width - (m.x0 + m.x1),
            height: height - (m.y0 + m.y1),
        }
    }

    /// True if both dimensions are positive.
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Errors produced by a layout pass.
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// A viewport dimension was zero or negative. Fatal to this pass only;
    /// whatever the surface rendered last stays up.
    #[error("invalid viewport {width}x{height}")]
    InvalidViewport {
        /// Offending main-axis extent.
        width: f64,
        /// Offending cross-axis extent.
        height: f64,
    },
}
