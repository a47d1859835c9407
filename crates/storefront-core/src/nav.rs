//! Navigation bar UI state.
//!
//! At most one dropdown is open at a time; [`Dropdown`] makes that a
//! property of the type instead of a convention between flags.

/// Which navbar dropdown is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dropdown {
    #[default]
    None,
    /// Product categories menu.
    Products,
    /// Account / sign-in menu.
    Account,
}

impl Dropdown {
    pub fn is_open(&self) -> bool {
        *self != Dropdown::None
    }
}

/// Everything the navbar toggles.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavState {
    pub dropdown: Dropdown,
    pub mobile_menu_open: bool,
    pub search_expanded: bool,
    pub search_query: String,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `menu` is the open dropdown.
    pub fn is_open(&self, menu: Dropdown) -> bool {
        menu.is_open() && self.dropdown == menu
    }

    /// Click on a dropdown trigger: open it, or close it if already open.
    pub fn toggle(&mut self, menu: Dropdown) {
        self.dropdown = if self.dropdown == menu {
            Dropdown::None
        } else {
            menu
        };
    }

    /// Pointer entered a dropdown trigger.
    pub fn hover(&mut self, menu: Dropdown) {
        if menu.is_open() {
            self.dropdown = menu;
        }
    }

    /// Pointer left the dropdown area. Keyboard focus inside the navbar
    /// keeps it open.
    pub fn leave(&mut self, focus_inside: bool) {
        if !focus_inside {
            self.dropdown = Dropdown::None;
        }
    }

    pub fn close_dropdown(&mut self) {
        self.dropdown = Dropdown::None;
    }

    /// Click landed outside the navbar.
    pub fn click_outside(&mut self) {
        self.search_expanded = false;
        self.dropdown = Dropdown::None;
    }

    /// Navigation happened; collapse everything.
    pub fn route_changed(&mut self) {
        self.mobile_menu_open = false;
        self.search_expanded = false;
        self.dropdown = Dropdown::None;
    }

    pub fn open_mobile_menu(&mut self) {
        self.mobile_menu_open = true;
        self.dropdown = Dropdown::None;
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    pub fn expand_search(&mut self) {
        self.search_expanded = true;
        self.dropdown = Dropdown::None;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Whether the search box has any text (drives the clear button).
    pub fn has_query(&self) -> bool {
        !self.search_query.is_empty()
    }

    pub fn clear_query(&mut self) {
        self.search_query.clear();
    }

    /// Submit the search box.
    ///
    /// Returns the listing route for a non-blank query and resets the
    /// search UI; a blank query changes nothing.
    pub fn submit_search(&mut self) -> Option<String> {
        let term = self.search_query.trim();
        if term.is_empty() {
            return None;
        }
        let route = search_route(term);
        self.search_query.clear();
        self.search_expanded = false;
        self.mobile_menu_open = false;
        Some(route)
    }
}

/// Product listing route for a search term.
pub fn search_route(term: &str) -> String {
    format!("/products?search={}", urlencoding::encode(term))
}
