// Which full-screen panel is on display.
//
// The page shows at most one panel at a time. `PanelSequencer` owns the
// current panel and every change goes through `PanelSequencer::show`, which
// returns the full set of visibility changes the DOM side has to apply.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Panel {
    NoneActive,
    Question1,
    Question2,
    Question3,
    Celebration,
}

impl Panel {
    pub const ALL: [Panel; 4] = [
        Panel::Question1,
        Panel::Question2,
        Panel::Question3,
        Panel::Celebration,
    ];

    pub fn element_id(self) -> Option<&'static str> {
        match self {
            Panel::NoneActive => None,
            Panel::Question1 => Some("question1"),
            Panel::Question2 => Some("question2"),
            Panel::Question3 => Some("question3"),
            Panel::Celebration => Some("celebration"),
        }
    }

    /// Class that starts the panel's entrance transition.
    pub fn visible_class(self) -> &'static str {
        match self {
            Panel::Celebration => "celebration-visible",
            _ => "visible",
        }
    }
}

/// Visibility changes produced by a single panel switch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelTransition {
    pub from: Panel,
    pub to: Panel,
    /// Every panel other than `to`; each gets hidden and loses its visible class.
    pub hide: Vec<Panel>,
    /// The secret answer only lives alongside question 1.
    pub secret_visible: bool,
}

#[derive(Clone, Debug)]
pub struct PanelSequencer {
    current: Panel,
}

impl Default for PanelSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelSequencer {
    pub fn new() -> Self {
        Self {
            current: Panel::NoneActive,
        }
    }

    pub fn current(&self) -> Panel {
        self.current
    }

    pub fn show(&mut self, to: Panel) -> PanelTransition {
        let from = std::mem::replace(&mut self.current, to);
        PanelTransition {
            from,
            to,
            hide: Panel::ALL.into_iter().filter(|p| *p != to).collect(),
            secret_visible: to == Panel::Question1,
        }
    }
}
