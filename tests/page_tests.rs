use emberfield::page::{HeaderShadow, NavMenu, PageScroll, Reveal, Section, SmoothScroll};

#[cfg(test)]
mod nav_menu_tests {
    use super::*;

    #[test]
    fn test_menu_starts_closed() {
        let menu = NavMenu::new();
        assert!(!menu.is_open());
        assert!(!menu.scroll_locked());
    }

    #[test]
    fn test_open_then_close() {
        let mut menu = NavMenu::new();

        menu.open();
        assert!(menu.is_open());
        assert!(menu.scroll_locked());

        menu.close();
        assert!(!menu.is_open());
        assert!(!menu.scroll_locked());
    }

    #[test]
    fn test_escape_closes_open_menu() {
        let mut menu = NavMenu::new();
        menu.open();

        menu.on_escape();
        assert!(!menu.is_open());

        // Escape on a closed menu is a no-op.
        menu.on_escape();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_outside_click_closes_open_menu() {
        let mut menu = NavMenu::new();
        menu.open();

        menu.on_document_click(false, false);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_inside_click_keeps_menu_open() {
        let mut menu = NavMenu::new();
        menu.open();

        menu.on_document_click(true, false);
        assert!(menu.is_open());

        menu.on_document_click(false, true);
        assert!(menu.is_open());
    }

    #[test]
    fn test_click_on_closed_menu_is_noop() {
        let mut menu = NavMenu::new();

        menu.on_document_click(false, false);
        assert!(!menu.is_open());
    }
}

#[cfg(test)]
mod page_scroll_tests {
    use super::*;

    #[test]
    fn test_scroll_top_visibility_toggles_at_threshold() {
        let mut scroll = PageScroll::new();
        assert!(!scroll.scroll_top_visible());

        scroll.set_offset(501.);
        assert!(scroll.scroll_top_visible());

        scroll.set_offset(499.);
        assert!(!scroll.scroll_top_visible());

        // Repeated updates on the same side must not accumulate anything.
        scroll.set_offset(600.);
        scroll.set_offset(700.);
        assert!(scroll.scroll_top_visible());
        scroll.set_offset(0.);
        assert!(!scroll.scroll_top_visible());
    }

    #[test]
    fn test_header_shadow_raises_past_threshold() {
        let mut scroll = PageScroll::new();
        assert_eq!(scroll.header_shadow(), HeaderShadow::Resting);

        scroll.set_offset(51.);
        assert_eq!(scroll.header_shadow(), HeaderShadow::Raised);

        scroll.set_offset(50.);
        assert_eq!(scroll.header_shadow(), HeaderShadow::Resting);
    }

    #[test]
    fn test_hero_parallax_follows_offset() {
        let mut scroll = PageScroll::new();

        scroll.set_offset(300.);
        assert!((scroll.hero_translate() - 150.).abs() < 1e-6);
        assert!((scroll.hero_opacity() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_hero_opacity_clamps() {
        let mut scroll = PageScroll::new();

        scroll.set_offset(0.);
        assert_eq!(scroll.hero_opacity(), 1.);

        scroll.set_offset(900.);
        assert_eq!(scroll.hero_opacity(), 0.);
    }

    #[test]
    fn test_offset_clamps_at_zero() {
        let mut scroll = PageScroll::new();
        scroll.set_offset(-25.);
        assert_eq!(scroll.offset(), 0.);
    }

    #[test]
    fn test_active_section_matches_offset() {
        let sections = [
            Section {
                top: 0.,
                height: 400.,
            },
            Section {
                top: 400.,
                height: 600.,
            },
            Section {
                top: 1000.,
                height: 500.,
            },
        ];
        let mut scroll = PageScroll::new();

        scroll.set_offset(0.);
        assert_eq!(scroll.active_section(&sections), Some(0));

        scroll.set_offset(450.);
        assert_eq!(scroll.active_section(&sections), Some(1));

        scroll.set_offset(1499.);
        assert_eq!(scroll.active_section(&sections), Some(2));

        scroll.set_offset(2000.);
        assert_eq!(scroll.active_section(&sections), None);
    }
}

#[cfg(test)]
mod reveal_tests {
    use super::*;

    #[test]
    fn test_reveal_latches_once() {
        let mut reveal = Reveal::default();
        assert!(!reveal.is_revealed());

        assert!(!reveal.observe(0.05));
        assert!(!reveal.is_revealed());

        assert!(reveal.observe(0.1));
        assert!(reveal.is_revealed());

        // Further crossings report nothing new.
        assert!(!reveal.observe(0.9));
        assert!(reveal.is_revealed());
    }

    #[test]
    fn test_reveal_never_unreveals() {
        let mut reveal = Reveal::new(0.3);
        reveal.observe(0.5);

        assert!(!reveal.observe(0.0));
        assert!(reveal.is_revealed());
    }
}

#[cfg(test)]
mod smooth_scroll_tests {
    use super::*;

    #[test]
    fn test_converges_to_target() {
        let mut scroll = SmoothScroll::at(0.);
        scroll.scroll_to(800.);
        assert!(!scroll.done());

        for _ in 0..100 {
            scroll.tick();
        }

        assert!(scroll.done());
        assert_eq!(scroll.position(), 800.);
    }

    #[test]
    fn test_approach_is_monotonic() {
        let mut scroll = SmoothScroll::at(0.);
        scroll.scroll_to(800.);

        let mut last = scroll.position();
        while !scroll.done() {
            scroll.tick();
            assert!(scroll.position() > last || scroll.done());
            assert!(scroll.position() <= 800.);
            last = scroll.position();
        }
    }

    #[test]
    fn test_target_clamps_at_zero() {
        let mut scroll = SmoothScroll::at(100.);
        scroll.scroll_to(-50.);

        for _ in 0..100 {
            scroll.tick();
        }

        assert_eq!(scroll.position(), 0.);
    }
}
