use log::debug;

/// Widths below this many logical pixels render as cards.
pub const NARROW_BREAKPOINT: f32 = 768.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Table,
    Cards,
}

impl ViewMode {
    /// `None` for widths that are not a real measurement.
    pub fn for_width(width: f32) -> Option<Self> {
        if !width.is_finite() || width <= 0.0 {
            None
        } else if width < NARROW_BREAKPOINT {
            Some(Self::Cards)
        } else {
            Some(Self::Table)
        }
    }
}

/// Tracks the view mode across frames.
///
/// Until the first valid measurement the layout stays in table mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResponsiveLayout {
    mode: ViewMode,
    measured: bool,
}

impl ResponsiveLayout {
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn is_narrow(&self) -> bool {
        self.mode == ViewMode::Cards
    }

    pub fn is_measured(&self) -> bool {
        self.measured
    }

    /// Feeds the current viewport width and returns the resulting mode.
    pub fn observe(&mut self, width: f32) -> ViewMode {
        if let Some(mode) = ViewMode::for_width(width) {
            if mode != self.mode {
                debug!("View mode {:?} -> {mode:?} at width {width}", self.mode);
            }
            self.mode = mode;
            self.measured = true;
        }
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_table_before_measurement() {
        let layout = ResponsiveLayout::default();
        assert_eq!(layout.mode(), ViewMode::Table);
        assert!(!layout.is_measured());
    }

    #[test]
    fn switches_at_breakpoint() {
        let mut layout = ResponsiveLayout::default();
        assert_eq!(layout.observe(767.9), ViewMode::Cards);
        assert!(layout.is_narrow());
        assert_eq!(layout.observe(768.0), ViewMode::Table);
        assert_eq!(layout.observe(375.0), ViewMode::Cards);
    }

    #[test]
    fn ignores_invalid_widths() {
        let mut layout = ResponsiveLayout::default();
        layout.observe(400.0);
        assert_eq!(layout.observe(f32::NAN), ViewMode::Cards);
        assert_eq!(layout.observe(0.0), ViewMode::Cards);
        assert_eq!(layout.observe(f32::INFINITY), ViewMode::Cards);
    }
}
