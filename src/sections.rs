//! The home page's named anchor regions and the scroll-spy that tracks them.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Named anchor regions of the home page, in scroll-spy priority order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Section {
    Home,
    About,
    Services,
    Advantages,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Services,
        Section::Advantages,
        Section::Contact,
    ];

    /// DOM id of the section's anchor element.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Services => "services",
            Section::Advantages => "advantages",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Services => "Services",
            Section::Advantages => "Advantages",
            Section::Contact => "Contact",
        }
    }
}

/// Viewport reference line the spy checks sections against, in px from the top.
pub const SPY_LINE_PX: f64 = 150.0;

/// First section whose bounding box straddles the reference line.
///
/// `boxes` are `(top, bottom)` pairs in `Section::ALL` order. Returns `None`
/// when nothing straddles the line; the caller keeps its previous section.
pub fn active_section(boxes: &[(f64, f64)]) -> Option<Section> {
    Section::ALL
        .into_iter()
        .zip(boxes.iter())
        .find(|&(_, &(top, bottom))| top <= SPY_LINE_PX && bottom >= SPY_LINE_PX)
        .map(|(section, _)| section)
}

/// Smooth-scrolls the section's anchor element into view. Warns when the
/// anchor is missing from the current document.
pub fn scroll_into_view(section: Section) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.id()));
    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => gloo_console::warn!("missing section anchor:", section.id()),
    }
}

/// One-shot "scroll to this section once home is mounted" message.
///
/// The navbar fills it right before navigating to the home route; the home
/// page consumes it exactly once on mount. Shared through a context so the
/// request survives the route change without any global state.
#[derive(Clone, Default)]
pub struct ScrollIntent {
    target: Rc<RefCell<Option<Section>>>,
}

impl ScrollIntent {
    pub fn request(&self, section: Section) {
        *self.target.borrow_mut() = Some(section);
    }

    /// Consumes the pending target, leaving the cell empty.
    pub fn take(&self) -> Option<Section> {
        self.target.borrow_mut().take()
    }
}

// Interior mutation must not look like a context change, so equality is
// handle identity rather than cell contents.
impl PartialEq for ScrollIntent {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.target, &other.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxes_for(heights: &[(f64, f64)]) -> Vec<(f64, f64)> {
        heights.to_vec()
    }

    #[test]
    fn picks_the_section_straddling_the_reference_line() {
        // Home has scrolled past; About spans the 150px line.
        let boxes = boxes_for(&[
            (-800.0, 100.0),
            (100.0, 900.0),
            (900.0, 1700.0),
            (1700.0, 2500.0),
            (2500.0, 3300.0),
        ]);
        assert_eq!(active_section(&boxes), Some(Section::About));
    }

    #[test]
    fn first_match_in_priority_order_wins() {
        // Two sections overlap the line; the earlier one is reported.
        let boxes = boxes_for(&[
            (0.0, 200.0),
            (120.0, 1000.0),
            (1000.0, 1800.0),
            (1800.0, 2600.0),
            (2600.0, 3400.0),
        ]);
        assert_eq!(active_section(&boxes), Some(Section::Home));
    }

    #[test]
    fn no_straddling_section_yields_none() {
        // A very short page where everything sits below the line.
        let boxes = boxes_for(&[
            (200.0, 300.0),
            (300.0, 400.0),
            (400.0, 500.0),
            (500.0, 600.0),
            (600.0, 700.0),
        ]);
        assert_eq!(active_section(&boxes), None);
    }

    #[test]
    fn missing_anchors_never_match() {
        let nan = f64::NAN;
        let boxes = boxes_for(&[(nan, nan); 5]);
        assert_eq!(active_section(&boxes), None);
    }

    #[test]
    fn section_ids_are_stable_and_ordered() {
        let ids: Vec<_> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, ["home", "about", "services", "advantages", "contact"]);
    }

    #[test]
    fn scroll_intent_is_consumed_exactly_once() {
        let intent = ScrollIntent::default();
        assert_eq!(intent.take(), None);

        intent.request(Section::Contact);
        assert_eq!(intent.take(), Some(Section::Contact));
        assert_eq!(intent.take(), None);

        // A later request replaces, not queues.
        intent.request(Section::About);
        intent.request(Section::Services);
        assert_eq!(intent.take(), Some(Section::Services));
    }
}
