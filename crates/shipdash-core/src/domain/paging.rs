//! Bounded, ellipsis-compressed page-index windows for pagination controls.

use serde::ser::Serializer;
use serde::Serialize;

pub const DEFAULT_MAX_VISIBLE: usize = 5;

pub const DEFAULT_EDGE_THRESHOLD: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    Page(usize),
    Ellipsis,
}

// Page numbers serialize as numbers, gaps as the literal "ellipsis", so the
// presentation layer can render the token list directly.
impl Serialize for PageToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageToken::Page(n) => serializer.serialize_u64(*n as u64),
            PageToken::Ellipsis => serializer.serialize_str("ellipsis"),
        }
    }
}

pub fn page_window(total_pages: usize, current_page: usize) -> Vec<PageToken> {
    page_window_with(
        total_pages,
        current_page,
        DEFAULT_MAX_VISIBLE,
        DEFAULT_EDGE_THRESHOLD,
    )
}

/// Computes the token list for pagination controls. Assumes `current_page`
/// is within `[1, total_pages]`; the page-change handler rejects anything
/// else before it gets here.
///
/// Below `max_visible + 2 * edge_threshold` total pages the full list is
/// returned. Above it, pages 1 and `total_pages` are always anchored, a
/// window around `current_page` is clamped to `[2, total_pages - 1]` and
/// shifted off-center near either edge, and gaps wider than one page
/// collapse to an ellipsis.
pub fn page_window_with(
    total_pages: usize, current_page: usize, max_visible: usize, edge_threshold: usize,
) -> Vec<PageToken> {
    if total_pages == 0 {
        return Vec::new();
    }

    if total_pages <= max_visible + 2 * edge_threshold {
        return (1..=total_pages).map(PageToken::Page).collect();
    }

    let half = max_visible / 2;
    let mut start = current_page.saturating_sub(half).max(2);
    let mut end = (current_page + half).min(total_pages - 1);

    if current_page.saturating_sub(1) <= edge_threshold {
        end = max_visible;
    }
    if total_pages - current_page <= edge_threshold {
        start = total_pages - max_visible + 1;
    }

    let mut tokens = Vec::with_capacity(max_visible + 4);
    tokens.push(PageToken::Page(1));

    if start > 2 {
        tokens.push(PageToken::Ellipsis);
    }

    for page in start..=end {
        tokens.push(PageToken::Page(page));
    }

    if end < total_pages - 1 {
        tokens.push(PageToken::Ellipsis);
    }

    tokens.push(PageToken::Page(total_pages));
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(tokens: &[PageToken]) -> Vec<usize> {
        tokens
            .iter()
            .filter_map(|t| match t {
                PageToken::Page(n) => Some(*n),
                PageToken::Ellipsis => None,
            })
            .collect()
    }

    fn assert_window_invariants(tokens: &[PageToken]) {
        // No adjacent ellipses
        for pair in tokens.windows(2) {
            assert!(
                !(pair[0] == PageToken::Ellipsis && pair[1] == PageToken::Ellipsis),
                "adjacent ellipses in {:?}",
                tokens
            );
        }

        // Page numbers strictly increasing, hence no duplicates
        let nums = pages(tokens);
        for pair in nums.windows(2) {
            assert!(pair[0] < pair[1], "non-increasing pages in {:?}", tokens);
        }
    }

    #[test]
    fn test_small_page_counts_list_everything() {
        assert_eq!(
            page_window(3, 1),
            vec![
                PageToken::Page(1),
                PageToken::Page(2),
                PageToken::Page(3),
            ]
        );
        assert_eq!(page_window(0, 1), Vec::new());
        // 9 == max_visible + 2 * edge_threshold is still below the cutoff
        assert_eq!(pages(&page_window(9, 5)), (1..=9).collect::<Vec<_>>());
    }

    #[test]
    fn test_centered_window_has_both_flanking_ellipses() {
        let tokens = page_window(20, 10);
        assert_window_invariants(&tokens);

        let nums = pages(&tokens);
        assert!(nums.contains(&1));
        assert!(nums.contains(&20));
        assert!(nums.contains(&10));

        let ellipses = tokens
            .iter()
            .filter(|t| **t == PageToken::Ellipsis)
            .count();
        assert_eq!(ellipses, 2);

        assert_eq!(tokens[1], PageToken::Ellipsis);
        assert_eq!(tokens[tokens.len() - 2], PageToken::Ellipsis);
    }

    #[test]
    fn test_window_near_start_extends_forward() {
        let tokens = page_window(20, 2);
        assert_window_invariants(&tokens);
        assert_eq!(pages(&tokens), vec![1, 2, 3, 4, 5, 20]);

        let ellipses = tokens
            .iter()
            .filter(|t| **t == PageToken::Ellipsis)
            .count();
        assert_eq!(ellipses, 1);
    }

    #[test]
    fn test_window_near_end_extends_backward() {
        let tokens = page_window(20, 19);
        assert_window_invariants(&tokens);
        assert_eq!(pages(&tokens), vec![1, 16, 17, 18, 19, 20]);
    }

    #[test]
    fn test_first_and_last_page_window() {
        let tokens = page_window(20, 1);
        assert_window_invariants(&tokens);
        assert_eq!(pages(&tokens), vec![1, 2, 3, 4, 5, 20]);

        let tokens = page_window(20, 20);
        assert_window_invariants(&tokens);
        assert_eq!(pages(&tokens), vec![1, 16, 17, 18, 19, 20]);
    }

    #[test]
    fn test_invariants_hold_across_positions() {
        for total in [10, 11, 15, 37, 100] {
            for current in 1..=total {
                let tokens = page_window(total, current);
                assert_window_invariants(&tokens);

                let nums = pages(&tokens);
                assert_eq!(nums.first(), Some(&1));
                assert_eq!(nums.last(), Some(&total));
                assert!(nums.contains(&current));
            }
        }
    }

    #[test]
    fn test_custom_window_tuning() {
        let tokens = page_window_with(50, 25, 7, 3);
        assert_window_invariants(&tokens);

        let nums = pages(&tokens);
        assert!(nums.contains(&22));
        assert!(nums.contains(&28));
    }

    #[test]
    fn test_token_serialization() {
        let json = serde_json::to_string(&page_window(20, 10)).unwrap();
        assert!(json.starts_with("[1,\"ellipsis\""));
        assert!(json.ends_with("\"ellipsis\",20]"));
    }
}
