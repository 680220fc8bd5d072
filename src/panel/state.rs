use std::rc::Rc;

use yew::Reducible;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PanelState {
    #[default]
    Collapsed,
    Expanded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    Toggle,
}

impl PanelState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }

    pub fn is_expanded(self) -> bool {
        self == Self::Expanded
    }

    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Collapsed => "▶",
            Self::Expanded => "▼",
        }
    }
}

// Reducer dispatch so two clicks queued before a re-render still flip twice.
impl Reducible for PanelState {
    type Action = PanelAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            PanelAction::Toggle => Rc::new(self.toggled()),
        }
    }
}
