/// Knobs that change how the scanner classifies input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Emit `OR` (lexeme `o`) for any lowercase `o` directly followed by `r`, before
    /// identifier scanning. The `r` starts the next lexeme, so `orange` scans as `OR`
    /// followed by the identifier `range`.
    pub or_shortcut: bool,
}

impl ScannerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_or_shortcut(mut self, enabled: bool) -> Self {
        self.or_shortcut = enabled;
        self
    }
}
