//! Page navigation and the page-number window shown under the result list.

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageNav {
    First,
    Previous,
    Next,
    Last,
    Jump(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EllipsisSlot {
    BeforeCurrent,
    AfterCurrent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageWindowItem {
    Page { number: u64, active: bool },
    Ellipsis(EllipsisSlot),
}

impl PageWindowItem {
    pub fn render_key(&self) -> String {
        match self {
            PageWindowItem::Page { number, .. } => format!("page-{number}"),
            PageWindowItem::Ellipsis(EllipsisSlot::BeforeCurrent) => "dots1".to_string(),
            PageWindowItem::Ellipsis(EllipsisSlot::AfterCurrent) => "dots2".to_string(),
        }
    }
}

/// Page reached from `page` by `nav`. Never returns 0, even when there are no pages.
pub fn navigate(page: u64, total_pages: u64, nav: PageNav) -> u64 {
    let last = total_pages.max(1);
    let next = match nav {
        PageNav::First => 1,
        PageNav::Last => last,
        PageNav::Next => {
            if page < total_pages { page + 1 } else { page }
        }
        PageNav::Previous => {
            if page > 1 { page - 1 } else { page }
        }
        PageNav::Jump(n) => n.clamp(1, last),
    };
    next.max(1)
}

/// Boundary buttons are disabled exactly when the page already sits on that boundary.
pub fn is_nav_disabled(page: u64, total_pages: u64, nav: PageNav) -> bool {
    match nav {
        PageNav::First | PageNav::Previous => page == 1,
        PageNav::Next | PageNav::Last => page == total_pages,
        PageNav::Jump(_) => false,
    }
}

/// Builds the page-number window.
///
/// Pages 1 and 2 are always present, followed by an ellipsis once the
/// current page is past 3, the current page itself when it is away from both
/// ends, a second ellipsis while the current page is more than two pages from
/// the end, and finally the last two pages (only those numbered above 3).
///
/// Small page counts are not special-cased: with 3 pages the third one is
/// never listed, and with a single page the button for page 2 still shows.
pub fn page_window(page: u64, total_pages: u64) -> Vec<PageWindowItem> {
    let current = page as i64;
    let total = total_pages as i64;
    let mut items = Vec::with_capacity(7);

    for number in 1..=2_i64 {
        items.push(PageWindowItem::Page { number: number as u64, active: current == number });
    }

    if current > 3 {
        items.push(PageWindowItem::Ellipsis(EllipsisSlot::BeforeCurrent));
    }

    if current > 3 && current < total - 2 {
        items.push(PageWindowItem::Page { number: page, active: true });
    }

    if current < total - 2 {
        items.push(PageWindowItem::Ellipsis(EllipsisSlot::AfterCurrent));
    }

    for number in (total - 1)..=total {
        if number > 3 {
            items.push(PageWindowItem::Page { number: number as u64, active: current == number });
        }
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn describe(items: &[PageWindowItem]) -> String {
        items
            .iter()
            .map(|item| match item {
                PageWindowItem::Page { number, active: true } => format!("[{number}]"),
                PageWindowItem::Page { number, active: false } => number.to_string(),
                PageWindowItem::Ellipsis(_) => "...".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn window_in_the_middle() {
        assert_eq!(describe(&page_window(5, 10)), "1 2 ... [5] ... 9 10");
    }

    #[test]
    fn window_at_the_start() {
        assert_eq!(describe(&page_window(1, 10)), "[1] 2 ... 9 10");
        assert_eq!(describe(&page_window(3, 10)), "1 2 ... 9 10");
    }

    #[test]
    fn window_near_the_end() {
        assert_eq!(describe(&page_window(8, 10)), "1 2 ... 9 10");
        assert_eq!(describe(&page_window(10, 10)), "1 2 ... 9 [10]");
        assert_eq!(describe(&page_window(7, 10)), "1 2 ... [7] ... 9 10");
    }

    #[test]
    fn window_for_three_pages_skips_page_three() {
        assert_eq!(describe(&page_window(1, 3)), "[1] 2");
        assert_eq!(describe(&page_window(3, 3)), "1 2");
    }

    #[test]
    fn window_for_tiny_page_counts_is_literal() {
        assert_eq!(describe(&page_window(1, 1)), "[1] 2");
        assert_eq!(describe(&page_window(1, 0)), "[1] 2");
        assert_eq!(describe(&page_window(2, 4)), "1 [2] 4");
        assert_eq!(describe(&page_window(1, 5)), "[1] 2 ... 4 5");
    }

    #[test]
    fn ellipsis_keys_are_distinct() {
        let items = page_window(5, 10);
        let keys = items.iter().map(|i| i.render_key()).collect::<std::collections::BTreeSet<_>>();
        assert_eq!(keys.len(), items.len());
    }

    #[test]
    fn transitions_stay_within_bounds() {
        for total in 1..=12_u64 {
            for page in 1..=total {
                for nav in [PageNav::First, PageNav::Previous, PageNav::Next, PageNav::Last, PageNav::Jump(0), PageNav::Jump(total + 5)] {
                    let next = navigate(page, total, nav);
                    assert!((1..=total).contains(&next), "{nav:?} from {page}/{total} gave {next}");
                }
            }
        }
    }

    #[test]
    fn next_and_previous_step_by_one() {
        assert_eq!(navigate(4, 10, PageNav::Next), 5);
        assert_eq!(navigate(10, 10, PageNav::Next), 10);
        assert_eq!(navigate(4, 10, PageNav::Previous), 3);
        assert_eq!(navigate(1, 10, PageNav::Previous), 1);
        assert_eq!(navigate(4, 10, PageNav::Jump(9)), 9);
    }

    #[test]
    fn first_and_last_are_idempotent_and_disabled_at_their_boundary() {
        assert_eq!(navigate(1, 10, PageNav::First), 1);
        assert_eq!(navigate(10, 10, PageNav::Last), 10);
        assert!(is_nav_disabled(1, 10, PageNav::First));
        assert!(is_nav_disabled(1, 10, PageNav::Previous));
        assert!(!is_nav_disabled(2, 10, PageNav::First));
        assert!(is_nav_disabled(10, 10, PageNav::Last));
        assert!(is_nav_disabled(10, 10, PageNav::Next));
        assert!(!is_nav_disabled(9, 10, PageNav::Last));
    }

    #[test]
    fn no_pages_never_lands_on_zero() {
        assert_eq!(navigate(1, 0, PageNav::Last), 1);
        assert_eq!(navigate(1, 0, PageNav::Next), 1);
    }
}
