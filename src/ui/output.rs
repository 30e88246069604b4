//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show everything, including detail lines.
    Verbose,
    /// Show the summary.
    #[default]
    Normal,
    /// Show findings and final status only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows detail lines.
    pub fn shows_detail(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows the environment summary.
    pub fn shows_summary(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }
}
