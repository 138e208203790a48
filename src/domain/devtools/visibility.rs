use serde::{Deserialize, Serialize};

/// How much of the devtools panel is on screen.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DevToolMode {
    #[default]
    None,
    Normal,
    Expanded,
}

impl DevToolMode {
    pub fn show(self) -> Self {
        match self {
            DevToolMode::None => DevToolMode::Normal,
            other => other,
        }
    }

    pub fn expand(self) -> Self {
        DevToolMode::Expanded
    }

    pub fn close(self) -> Self {
        DevToolMode::None
    }

    pub fn toggle(self) -> Self {
        match self {
            DevToolMode::None => DevToolMode::Normal,
            _ => DevToolMode::None,
        }
    }

    pub fn cycle(self) -> Self {
        match self {
            DevToolMode::None => DevToolMode::Normal,
            DevToolMode::Normal => DevToolMode::Expanded,
            DevToolMode::Expanded => DevToolMode::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DevToolAction {
    Show,
    Expand,
    Close,
    Toggle,
    Cycle,
}

impl DevToolAction {
    pub fn apply(self, mode: DevToolMode) -> DevToolMode {
        match self {
            DevToolAction::Show => mode.show(),
            DevToolAction::Expand => mode.expand(),
            DevToolAction::Close => mode.close(),
            DevToolAction::Toggle => mode.toggle(),
            DevToolAction::Cycle => mode.cycle(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_visits_every_mode_and_wraps() {
        let mut mode = DevToolMode::default();
        let mut seen = Vec::new();
        for _ in 0..6 {
            mode = mode.cycle();
            seen.push(mode);
        }
        assert_eq!(
            seen,
            vec![
                DevToolMode::Normal,
                DevToolMode::Expanded,
                DevToolMode::None,
                DevToolMode::Normal,
                DevToolMode::Expanded,
                DevToolMode::None,
            ]
        );
    }

    #[test]
    fn toggle_flips_between_hidden_and_normal() {
        assert_eq!(DevToolMode::None.toggle(), DevToolMode::Normal);
        assert_eq!(DevToolMode::Normal.toggle(), DevToolMode::None);
        assert_eq!(DevToolMode::Expanded.toggle(), DevToolMode::None);
    }

    #[test]
    fn show_does_not_collapse_an_expanded_panel() {
        assert_eq!(DevToolMode::None.show(), DevToolMode::Normal);
        assert_eq!(DevToolMode::Expanded.show(), DevToolMode::Expanded);
        assert_eq!(DevToolAction::Close.apply(DevToolMode::Expanded), DevToolMode::None);
        assert_eq!(DevToolAction::Expand.apply(DevToolMode::Normal), DevToolMode::Expanded);
    }
}
