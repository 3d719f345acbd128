//! Responsive layout rules. Flags are derived from the current viewport
//! width on demand; nothing here holds state.

use serde::Deserialize;

/// Viewport widths (CSS px) where the layout changes
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Breakpoints {
    /// Sidebar shown above this width; list pages stack at or below it
    pub sidebar_breakpoint: f64,
    /// Login card switches to its small layout below this width
    pub small_device_breakpoint: f64,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            sidebar_breakpoint: 768.0,
            small_device_breakpoint: 500.0,
        }
    }
}

impl Breakpoints {
    /// Wide enough for the fixed sidebar
    pub fn is_wide(&self, width: f64) -> bool {
        width > self.sidebar_breakpoint
    }

    /// Stacked header / full-width modal on list pages
    pub fn is_compact(&self, width: f64) -> bool {
        !self.is_wide(width)
    }

    pub fn is_small_device(&self, width: f64) -> bool {
        width < self.small_device_breakpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidebar_breakpoint_is_exclusive() {
        let bp = Breakpoints::default();
        assert!(!bp.is_wide(768.0));
        assert!(bp.is_compact(768.0));
        assert!(bp.is_wide(769.0));
        assert!(!bp.is_compact(1280.0));
    }

    #[test]
    fn test_small_device() {
        let bp = Breakpoints::default();
        assert!(bp.is_small_device(499.0));
        assert!(!bp.is_small_device(500.0));
    }
}
