/// Line numbers in diagnostics are moved back by this much by default.
pub const DEFAULT_LINE_OFFSET: usize = 0;

/// Runtime configuration of an evaluation context.
///
/// ## Example
/// ```
/// use brainrot::interpreter::settings::Settings;
///
/// let settings = Settings::default().with_symbol_capacity(16).with_line_offset(1);
/// assert_eq!(settings.symbol_capacity, Some(16));
/// assert_eq!(settings.line_offset, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Maximum number of distinct variables; `None` means unbounded.
    pub symbol_capacity: Option<usize>,
    /// Subtracted from the line of every user-visible error.
    pub line_offset:     usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self { symbol_capacity: None,
               line_offset:     DEFAULT_LINE_OFFSET, }
    }
}

impl Settings {
    /// Limits the symbol table to `capacity` variables.
    #[must_use]
    pub const fn with_symbol_capacity(mut self, capacity: usize) -> Self {
        self.symbol_capacity = Some(capacity);
        self
    }

    /// Sets the line adjustment applied to diagnostics.
    #[must_use]
    pub const fn with_line_offset(mut self, offset: usize) -> Self {
        self.line_offset = offset;
        self
    }
}
