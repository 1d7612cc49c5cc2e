/// Scroll offset in px past which the navbar switches to its solid look.
pub const SCROLL_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarMode {
    /// Over the hero, no background.
    Transparent,
    /// Scrolled into the page, solid background and shadow.
    Solid,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NavbarState {
    scroll_offset: f64,
    menu_open: bool,
}

impl NavbarState {
    /// Every scroll event lands here, no debouncing.
    pub fn on_scroll(&mut self, offset: f64) {
        self.scroll_offset = offset;
    }

    pub fn scrolled(&self) -> bool {
        self.scroll_offset > SCROLL_THRESHOLD
    }

    pub fn mode(&self) -> NavbarMode {
        if self.scrolled() {
            NavbarMode::Solid
        } else {
            NavbarMode::Transparent
        }
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Following any nav link closes the mobile menu.
    pub fn on_nav_link(&mut self) {
        self.menu_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_threshold() {
        let mut nav = NavbarState::default();
        assert!(!nav.scrolled());

        for (offset, expected) in [
            (0.0, false),
            (49.0, false),
            (50.0, false),
            (50.5, true),
            (51.0, true),
            (1200.0, true),
            (10.0, false),
        ] {
            nav.on_scroll(offset);
            assert_eq!(nav.scrolled(), expected, "offset {offset}");
        }
    }

    #[test]
    fn test_mode_follows_last_offset() {
        let mut nav = NavbarState::default();
        assert_eq!(nav.mode(), NavbarMode::Transparent);
        nav.on_scroll(51.0);
        assert_eq!(nav.mode(), NavbarMode::Solid);
        nav.on_scroll(50.0);
        assert_eq!(nav.mode(), NavbarMode::Transparent);
    }

    #[test]
    fn test_menu_toggle() {
        let mut nav = NavbarState::default();
        assert!(!nav.menu_open());
        nav.toggle_menu();
        assert!(nav.menu_open());
        nav.toggle_menu();
        assert!(!nav.menu_open());
    }

    #[test]
    fn test_nav_link_closes_menu() {
        let mut nav = NavbarState::default();
        nav.toggle_menu();
        nav.on_nav_link();
        assert!(!nav.menu_open());

        // already closed stays closed
        nav.on_nav_link();
        assert!(!nav.menu_open());
    }

    #[test]
    fn test_scroll_leaves_menu_alone() {
        let mut nav = NavbarState::default();
        nav.toggle_menu();
        nav.on_scroll(400.0);
        assert!(nav.menu_open());
    }
}
