// Copyright 2026 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip visibility as a single declarative value.
//!
//! The render surface draws the tooltip purely from this state, which makes
//! the "at most one tooltip" invariant structural: showing a new tooltip
//! replaces the value, hiding clears it, and there is nothing else to leak.
//! Transitions are instant on both edges — tooltip visibility tracks pointer
//! state exactly, with no delay or fade.

use alloc::string::String;
use kurbo::Point;

/// The current tooltip, if any.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum TooltipState {
    /// No tooltip is shown.
    #[default]
    Hidden,
    /// One tooltip is shown near the pointer.
    Showing {
        /// Full, untruncated node name.
        text: String,
        /// Pointer-anchored position in surface coordinates.
        position: Point,
    },
}

impl TooltipState {
    /// True if a tooltip is currently shown.
    pub fn is_showing(&self) -> bool {
        matches!(self, Self::Showing { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn default_is_hidden() {
        assert_eq!(TooltipState::default(), TooltipState::Hidden);
        assert!(!TooltipState::Hidden.is_showing());
    }

    #[test]
    fn showing_replaces_wholesale() {
        let mut state = TooltipState::Showing {
            text: "Goal A".to_string(),
            position: Point::new(10.0, 20.0),
        };
        assert!(state.is_showing());

        // Assigning a new value is the whole "replace previous tooltip" story.
        state = TooltipState::Showing {
            text: "Goal B".to_string(),
            position: Point::new(30.0, 40.0),
        };
        assert_eq!(
            state,
            TooltipState::Showing {
                text: "Goal B".to_string(),
                position: Point::new(30.0, 40.0),
            }
        );
    }
}
