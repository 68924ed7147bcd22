//! Property-based tests for the visibility decision
//!
//! Uses proptest to check the display formula against real widgets.
//! Reference: https://lib.rs/crates/proptest

use std::rc::Rc;

use proptest::prelude::*;
use ratatui::text::Text;

use emptyset::host::{GridView, HostWidget, ListView, Section, SectionedItems};
use emptyset::model::VisibilityDecision;
use emptyset::resolver;
use emptyset::{EmptyDataSetDelegate, EmptyDataSetExt, EmptyDataSetSource};

struct Source;

impl EmptyDataSetSource for Source {
    fn title(&self, _view: &dyn HostWidget) -> Option<Text<'static>> {
        Some(Text::from("Empty"))
    }
}

struct Policy {
    display: Option<bool>,
    forced: Option<bool>,
}

impl EmptyDataSetDelegate for Policy {
    fn should_display(&self, _view: &dyn HostWidget) -> Option<bool> {
        self.display
    }

    fn should_be_forced_to_display(&self, _view: &dyn HostWidget) -> Option<bool> {
        self.forced
    }
}

// =============================================================================
// Strategy generators
// =============================================================================

/// Item counts per section, between one and four sections
fn section_counts_strategy() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..6, 1..5)
}

fn sections(counts: &[usize]) -> Vec<Section> {
    counts
        .iter()
        .map(|&count| Section::new(None, (0..count).map(|i| format!("row {i}")).collect()))
        .collect()
}

/// Bind a list to `counts` and the given policy, reload, report visibility
fn list_visible(counts: &[usize], display: Option<bool>, forced: Option<bool>) -> bool {
    let source: Rc<dyn EmptyDataSetSource> = Rc::new(Source);
    let delegate: Rc<dyn EmptyDataSetDelegate> = Rc::new(Policy { display, forced });

    let mut list = ListView::new("List");
    list.set_content(Some(Rc::new(SectionedItems::new(sections(counts)))));
    list.set_empty_delegate(Some(Rc::downgrade(&delegate)));
    list.set_empty_data_source(Some(Rc::downgrade(&source))).unwrap();
    list.reload_data();
    list.is_empty_data_set_visible()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Items present and nothing forced: never shown
    #[test]
    fn hidden_when_items_present(
        counts in section_counts_strategy().prop_filter("non-empty", |c| c.iter().sum::<usize>() > 0),
    ) {
        prop_assert!(!list_visible(&counts, Some(true), Some(false)));
    }

    /// No items and display allowed: shown whatever the force flag says
    #[test]
    fn shown_when_empty(sections in 1usize..5, forced in any::<Option<bool>>()) {
        let counts = vec![0; sections];
        prop_assert!(list_visible(&counts, Some(true), forced));
    }

    /// Forced: shown whatever the content and display flag
    #[test]
    fn shown_when_forced(counts in section_counts_strategy(), display in any::<Option<bool>>()) {
        prop_assert!(list_visible(&counts, display, Some(true)));
    }

    /// The widget-level result always matches the formula
    #[test]
    fn matches_formula(
        counts in section_counts_strategy(),
        display in any::<Option<bool>>(),
        forced in any::<Option<bool>>(),
    ) {
        let expected = VisibilityDecision::new(
            counts.iter().sum(),
            display.unwrap_or(true),
            forced.unwrap_or(false),
        )
        .is_visible();
        prop_assert_eq!(list_visible(&counts, display, forced), expected);
    }

    /// Item count sums every section the content reports
    #[test]
    fn item_count_sums_sections(counts in section_counts_strategy()) {
        let items = Rc::new(SectionedItems::new(sections(&counts)));
        let mut grid = GridView::new("Grid", 3);
        grid.set_content(Some(items));
        prop_assert_eq!(resolver::item_count(&grid), counts.iter().sum::<usize>());
    }

    /// Content without a section count is read as its first section only
    #[test]
    fn item_count_defaults_to_one_section(counts in section_counts_strategy()) {
        let items = Rc::new(SectionedItems::flat(Vec::new()));
        items.set_sections(sections(&counts));
        let mut list = ListView::new("List");
        list.set_content(Some(items));
        prop_assert_eq!(resolver::item_count(&list), counts[0]);
    }
}
