//! Document-model contract over the `scraper` HTML tree.
//!
//! Extractors lean on a small closed set of traversals: select by static
//! selector, text of a subtree, closest ancestor by tag, previous element
//! sibling, and class tests. Any HTML library providing that set is
//! interchangeable.

use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

// Selectors for the layout signatures of the summary emails. All of them are
// known-good; a parse failure here is a bug, not an input condition.

pub static INNER_TABLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table.inner-table").expect("inner-table selector"));

pub static TD: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").expect("td selector"));

pub static PARAGRAPH: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p").expect("p selector"));

pub static ANY: LazyLock<Selector> = LazyLock::new(|| Selector::parse("*").expect("* selector"));

/// White header text: studio name, class date/time, instructor.
pub static TEXT_WHITE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p.text-white").expect("text-white selector"));

pub static STUDIO_NAME: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p.header-studio-name").expect("studio-name selector"));

/// Metric card label (the row BELOW its value).
pub static METRIC_LABEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p.h2.text-gray").expect("metric-label selector"));

/// Metric card value.
pub static METRIC_VALUE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p.h1.text-gray.text-bold").expect("metric-value selector"));

/// Inline value span used by the Total Distance cells.
pub static SPAN_VALUE: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("span.h1.text-gray.text-bold").expect("span-value selector")
});

/// Zone minute bars. "bar-bumber" is the class name the sender actually
/// ships, typo included.
pub static ZONE_BAR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p.bar-bumber").expect("zone-bar selector"));

/// Concatenated text of a subtree, entities already resolved by the parser.
pub fn text_of(el: ElementRef) -> String {
    el.text().collect()
}

pub fn trimmed_text(el: ElementRef) -> String {
    text_of(el).trim().to_string()
}

/// Nearest ancestor with the given tag name, self excluded.
pub fn closest<'a>(el: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|a| a.value().name() == tag)
}

/// Immediately preceding element sibling, skipping text nodes.
pub fn prev_element_sibling(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.prev_siblings().filter_map(ElementRef::wrap).next()
}

pub fn has_class(el: ElementRef, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}

/// Tag + class-list test for elements reached by traversal rather than by
/// selector.
pub fn is_element(el: ElementRef, tag: &str, classes: &[&str]) -> bool {
    el.value().name() == tag && classes.iter().all(|c| has_class(el, c))
}
