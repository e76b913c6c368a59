use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum MinimizeState {
    #[default]
    Expanded,
    Minimized,
}

impl MinimizeState {
    /// Anything other than a stored `"minimized"` means expanded.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("minimized") => Self::Minimized,
            _ => Self::Expanded,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Expanded => Self::Minimized,
            Self::Minimized => Self::Expanded,
        }
    }

    /// Glyph on the toggle control: minimize while expanded, expand while minimized.
    pub fn control_title(self) -> &'static str {
        match self {
            Self::Expanded => "Minimize",
            Self::Minimized => "Restore",
        }
    }
}
