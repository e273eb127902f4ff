// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Gallery,
    Shop,
    About,
    Contact,
}

impl Screen {
    /// All screens, in navbar order.
    pub const ALL: [Screen; 4] = [Screen::Gallery, Screen::Shop, Screen::About, Screen::Contact];

    /// Navbar label for this screen.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Screen::Gallery => "Gallery",
            Screen::Shop => "Shop",
            Screen::About => "About",
            Screen::Contact => "Contact",
        }
    }
}
