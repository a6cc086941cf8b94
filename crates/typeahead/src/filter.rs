//! The match engine: query extraction and prefix filtering.
//!
//! Filtering is a pure function of the current text and the dataset. The
//! query is the text fragment being typed right now: in multi-select mode
//! that is whatever follows the last `", "` separator, in single-select
//! mode it is the whole text. An item matches when its display text starts
//! with the query, subject to the configured case folding.

use crate::item::Listable;

/// The literal separator between rendered selections in multi-select mode.
pub const SEPARATOR: &str = ", ";

/// Whether the field replaces or accumulates selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// At most one selected item; each pick replaces the previous one.
    #[default]
    Single,
    /// Picks toggle membership; the text renders the comma-joined set.
    Multi,
}

/// Controls how completion matching handles letter case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseSensitivity {
    /// Case-sensitive matching (e.g., "App" won't match "apple").
    CaseSensitive,
    /// Case-insensitive matching (e.g., "App" will match "apple").
    #[default]
    CaseInsensitive,
}

/// Extract the query fragment from the current text.
///
/// In [`SelectionMode::Multi`] the query is the segment after the last
/// separator (the fragment being typed for the *next* selection); in
/// [`SelectionMode::Single`] the whole text is the query.
pub fn query_fragment(text: &str, mode: SelectionMode) -> &str {
    match mode {
        SelectionMode::Single => text,
        SelectionMode::Multi => text.rsplit(SEPARATOR).next().unwrap_or(text),
    }
}

/// Filter the dataset down to the items whose display text starts with the
/// current query.
///
/// The result preserves the dataset's relative order (stable filter, no
/// resorting). An empty query matches everything; an empty dataset yields
/// an empty result. Pure function of its inputs.
pub fn filter_items<T>(
    items: &[T],
    text: &str,
    mode: SelectionMode,
    case_sensitivity: CaseSensitivity,
) -> Vec<T>
where
    T: Listable + Clone,
{
    let query = query_fragment(text, mode);

    let matches: Vec<T> = match case_sensitivity {
        CaseSensitivity::CaseSensitive => items
            .iter()
            .filter(|item| item.display_text().starts_with(query))
            .cloned()
            .collect(),
        CaseSensitivity::CaseInsensitive => {
            let query_lower = query.to_lowercase();
            items
                .iter()
                .filter(|item| item.display_text().to_lowercase().starts_with(&query_lower))
                .cloned()
                .collect()
        }
    };

    tracing::trace!(
        target: "typeahead::filter",
        query,
        candidates = items.len(),
        matches = matches.len(),
        "filtered dataset"
    );

    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::TextItem;

    fn fruit() -> Vec<TextItem> {
        vec![
            TextItem::new("1", "Apple"),
            TextItem::new("2", "Apricot"),
            TextItem::new("3", "Banana"),
        ]
    }

    fn displays(items: &[TextItem]) -> Vec<&str> {
        items.iter().map(|i| i.text()).collect()
    }

    #[test]
    fn test_query_fragment_single_mode_is_whole_text() {
        assert_eq!(query_fragment("Apple, Ban", SelectionMode::Single), "Apple, Ban");
    }

    #[test]
    fn test_query_fragment_multi_mode_takes_last_segment() {
        assert_eq!(query_fragment("Apple, Ban", SelectionMode::Multi), "Ban");
        assert_eq!(query_fragment("Apple, ", SelectionMode::Multi), "");
        assert_eq!(query_fragment("Ap", SelectionMode::Multi), "Ap");
        assert_eq!(query_fragment("", SelectionMode::Multi), "");
    }

    #[test]
    fn test_filter_prefix_match_preserves_order() {
        let results = filter_items(
            &fruit(),
            "ap",
            SelectionMode::Single,
            CaseSensitivity::CaseInsensitive,
        );
        assert_eq!(displays(&results), ["Apple", "Apricot"]);
    }

    #[test]
    fn test_filter_case_sensitive() {
        let results = filter_items(
            &fruit(),
            "ap",
            SelectionMode::Single,
            CaseSensitivity::CaseSensitive,
        );
        assert!(results.is_empty());

        let results = filter_items(
            &fruit(),
            "Ap",
            SelectionMode::Single,
            CaseSensitivity::CaseSensitive,
        );
        assert_eq!(displays(&results), ["Apple", "Apricot"]);
    }

    #[test]
    fn test_filter_empty_query_returns_all() {
        let results = filter_items(
            &fruit(),
            "",
            SelectionMode::Single,
            CaseSensitivity::CaseInsensitive,
        );
        assert_eq!(displays(&results), ["Apple", "Apricot", "Banana"]);
    }

    #[test]
    fn test_filter_empty_dataset_returns_empty() {
        let empty: Vec<TextItem> = Vec::new();
        let results = filter_items(
            &empty,
            "anything",
            SelectionMode::Multi,
            CaseSensitivity::CaseInsensitive,
        );
        assert!(results.is_empty());
    }

    #[test]
    fn test_filter_multi_mode_matches_segment_after_separator() {
        let results = filter_items(
            &fruit(),
            "Apple, Ban",
            SelectionMode::Multi,
            CaseSensitivity::CaseInsensitive,
        );
        assert_eq!(displays(&results), ["Banana"]);
    }

    #[test]
    fn test_filter_multi_mode_trailing_separator_matches_all() {
        let results = filter_items(
            &fruit(),
            "Apple, ",
            SelectionMode::Multi,
            CaseSensitivity::CaseInsensitive,
        );
        assert_eq!(displays(&results), ["Apple", "Apricot", "Banana"]);
    }

    #[test]
    fn test_filter_no_matches() {
        let results = filter_items(
            &fruit(),
            "Cherry",
            SelectionMode::Single,
            CaseSensitivity::CaseInsensitive,
        );
        assert!(results.is_empty());
    }
}
