//! Page-button window for result navigation.

/// Default number of page buttons shown at once.
pub const MAX_PAGE_BUTTONS: u32 = 7;

/// Compute the page numbers to show as buttons around `page`.
///
/// The window is centered on `page` except near either end, never has more
/// than `max_buttons` entries and never leaves `[1, total_pages]`. With no
/// pages the window is empty.
pub fn page_window(page: u32, total_pages: u32, max_buttons: u32) -> Vec<u32> {
    if total_pages == 0 || max_buttons == 0 {
        return Vec::new();
    }

    let page = page.clamp(1, total_pages);
    let start = page.saturating_sub(max_buttons / 2).max(1);
    let end = total_pages.min(start.saturating_add(max_buttons - 1));
    let start = end.saturating_sub(max_buttons - 1).max(1);

    (start..=end).collect()
}

/// Page buttons plus previous/next enablement for the current page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageControls {
    pub page: u32,
    pub total_pages: u32,
    pub pages: Vec<u32>,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl PageControls {
    pub fn new(page: u32, total_pages: u32) -> Self {
        Self {
            page,
            total_pages,
            pages: page_window(page, total_pages, MAX_PAGE_BUTTONS),
            prev_enabled: page > 1,
            next_enabled: page < total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_total_covers_everything() {
        let controls = PageControls::new(2, 3);
        assert_eq!(controls.pages, vec![1, 2, 3]);
        assert!(controls.prev_enabled);
        assert!(controls.next_enabled);
    }

    #[test]
    fn test_first_page_of_many() {
        let controls = PageControls::new(1, 20);
        assert_eq!(controls.pages, vec![1, 2, 3, 4, 5, 6, 7]);
        assert!(!controls.prev_enabled);
        assert!(controls.next_enabled);
    }

    #[test]
    fn test_centered_in_the_middle() {
        assert_eq!(page_window(10, 20, 7), vec![7, 8, 9, 10, 11, 12, 13]);
    }

    #[test]
    fn test_clamped_at_the_end() {
        let controls = PageControls::new(20, 20);
        assert_eq!(controls.pages, vec![14, 15, 16, 17, 18, 19, 20]);
        assert!(controls.prev_enabled);
        assert!(!controls.next_enabled);
    }

    #[test]
    fn test_no_pages() {
        let controls = PageControls::new(1, 0);
        assert!(controls.pages.is_empty());
        assert!(!controls.prev_enabled);
        assert!(!controls.next_enabled);
    }

    #[test]
    fn test_even_button_count() {
        assert_eq!(page_window(5, 10, 4), vec![3, 4, 5, 6]);
        assert_eq!(page_window(10, 10, 4), vec![7, 8, 9, 10]);
    }

    #[test]
    fn test_huge_page_counts() {
        let last = u32::MAX;
        assert_eq!(page_window(last, last, 7), ((last - 6)..=last).collect::<Vec<_>>());
        assert_eq!(page_window(last - 1, last, 7).len(), 7);

        let controls = PageControls::new(1, last);
        assert_eq!(controls.pages, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_window_properties_hold_for_all_pages() {
        for total in 0..=40u32 {
            for page in 1..=total {
                let window = page_window(page, total, MAX_PAGE_BUTTONS);
                assert_eq!(window.len() as u32, total.min(MAX_PAGE_BUTTONS));
                assert!(window.contains(&page), "page {page} of {total}");
                assert!(window.iter().all(|p| (1..=total).contains(p)));
                assert!(window.windows(2).all(|w| w[1] == w[0] + 1));
            }
        }
    }
}
