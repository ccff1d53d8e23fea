use std::fmt;

/// Where the shell is in the select → generate → view flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShellState {
    #[default]
    NoDirectory,
    DirectorySelected,
    ReportGenerated,
}

impl ShellState {
    #[must_use]
    pub const fn can_generate(self) -> bool {
        !matches!(self, Self::NoDirectory)
    }

    #[must_use]
    pub const fn can_view(self) -> bool {
        matches!(self, Self::ReportGenerated)
    }
}

impl fmt::Display for ShellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDirectory => write!(f, "No directory"),
            Self::DirectorySelected => write!(f, "Directory selected"),
            Self::ReportGenerated => write!(f, "Report ready"),
        }
    }
}

/// Whether keys drive commands or edit the directory field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    EditingDirectory,
}

/// Severity of the status-line message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusKind {
    #[default]
    Info,
    Success,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_selected_states_can_generate() {
        assert!(!ShellState::NoDirectory.can_generate());
        assert!(ShellState::DirectorySelected.can_generate());
        assert!(ShellState::ReportGenerated.can_generate());
    }

    #[test]
    fn only_generated_state_can_view() {
        assert!(!ShellState::NoDirectory.can_view());
        assert!(!ShellState::DirectorySelected.can_view());
        assert!(ShellState::ReportGenerated.can_view());
    }

    #[test]
    fn state_display() {
        assert_eq!(ShellState::ReportGenerated.to_string(), "Report ready");
        assert_eq!(ShellState::default(), ShellState::NoDirectory);
        assert_eq!(InputMode::default(), InputMode::Normal);
    }
}
