//! Mobile navigation menu and its hamburger icon.

/// Class carried by the menu while it is open.
pub const ACTIVE_CLASS: &str = "active";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    /// Inline styles for the three icon bars, top to bottom.
    pub fn bar_styles(self) -> [BarStyle; 3] {
        match self {
            MenuState::Open => [
                BarStyle {
                    transform: Some("rotate(45deg) translate(6px, 6px)"),
                    opacity: None,
                },
                BarStyle {
                    transform: None,
                    opacity: Some("0"),
                },
                BarStyle {
                    transform: Some("rotate(-45deg) translate(6px, -6px)"),
                    opacity: None,
                },
            ],
            MenuState::Closed => [BarStyle::NEUTRAL; 3],
        }
    }
}

/// Style writes for one icon bar. `None` leaves the property untouched.
///
/// An empty `transform` clears the inline value so the stylesheet applies again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BarStyle {
    pub transform: Option<&'static str>,
    pub opacity: Option<&'static str>,
}

impl BarStyle {
    pub const NEUTRAL: BarStyle = BarStyle {
        transform: Some(""),
        opacity: Some("1"),
    };
}
