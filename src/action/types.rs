/// Actions that can be performed in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Switch focus between the grid and the tag bar
    FocusNext,
    /// Grid: select and copy the swatch; tag bar: toggle the tag
    Select,

    // Palette
    ToggleFavorite,
    ToggleFavoritesFilter,
    CycleLayout,
    CycleFormat,
    ToggleNames,
    Export,
    ClearTags,
    ClearFavorites,

    // Dialog
    Confirm,
    Cancel,

    // Other
    ToggleHelp,
    Quit,
    ForceQuit,
}

impl Action {
    /// Parse action from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "MoveUp" => Some(Action::MoveUp),
            "MoveDown" => Some(Action::MoveDown),
            "MoveLeft" => Some(Action::MoveLeft),
            "MoveRight" => Some(Action::MoveRight),
            "FocusNext" => Some(Action::FocusNext),
            "Select" => Some(Action::Select),
            "ToggleFavorite" => Some(Action::ToggleFavorite),
            "ToggleFavoritesFilter" => Some(Action::ToggleFavoritesFilter),
            "CycleLayout" => Some(Action::CycleLayout),
            "CycleFormat" => Some(Action::CycleFormat),
            "ToggleNames" => Some(Action::ToggleNames),
            "Export" => Some(Action::Export),
            "ClearTags" => Some(Action::ClearTags),
            "ClearFavorites" => Some(Action::ClearFavorites),
            "Confirm" => Some(Action::Confirm),
            "Cancel" => Some(Action::Cancel),
            "ToggleHelp" => Some(Action::ToggleHelp),
            "Quit" => Some(Action::Quit),
            "ForceQuit" => Some(Action::ForceQuit),
            "None" => None, // Disables a default binding
            _ => None,
        }
    }

    /// Short label for the help overlay
    pub fn description(&self) -> &'static str {
        match self {
            Action::MoveUp => "Move up",
            Action::MoveDown => "Move down",
            Action::MoveLeft => "Move left",
            Action::MoveRight => "Move right",
            Action::FocusNext => "Switch grid / tags",
            Action::Select => "Copy swatch / toggle tag",
            Action::ToggleFavorite => "Favorite swatch",
            Action::ToggleFavoritesFilter => "Favorites only",
            Action::CycleLayout => "Switch layout",
            Action::CycleFormat => "Switch format",
            Action::ToggleNames => "Show names",
            Action::Export => "Export JSON",
            Action::ClearTags => "Clear tags",
            Action::ClearFavorites => "Clear favorites",
            Action::Confirm => "Confirm",
            Action::Cancel => "Cancel",
            Action::ToggleHelp => "Help",
            Action::Quit => "Quit",
            Action::ForceQuit => "Force quit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===================
    // Parsing
    // ===================

    #[test]
    fn test_action_from_str_navigation() {
        assert_eq!(Action::from_str("MoveUp"), Some(Action::MoveUp));
        assert_eq!(Action::from_str("MoveLeft"), Some(Action::MoveLeft));
        assert_eq!(Action::from_str("FocusNext"), Some(Action::FocusNext));
        assert_eq!(Action::from_str("Select"), Some(Action::Select));
    }

    #[test]
    fn test_action_from_str_palette() {
        assert_eq!(Action::from_str("ToggleFavorite"), Some(Action::ToggleFavorite));
        assert_eq!(
            Action::from_str("ToggleFavoritesFilter"),
            Some(Action::ToggleFavoritesFilter)
        );
        assert_eq!(Action::from_str("CycleLayout"), Some(Action::CycleLayout));
        assert_eq!(Action::from_str("Export"), Some(Action::Export));
        assert_eq!(Action::from_str("ClearFavorites"), Some(Action::ClearFavorites));
    }

    // ===================
    // Special cases
    // ===================

    #[test]
    fn test_action_from_str_none() {
        assert_eq!(Action::from_str("None"), None);
    }

    #[test]
    fn test_action_from_str_unknown() {
        assert_eq!(Action::from_str("UnknownAction"), None);
        assert_eq!(Action::from_str(""), None);
        assert_eq!(Action::from_str("moveup"), None); // case sensitive
    }
}
