//! Case-insensitive card search.

use crate::navigation::ChapterCard;

/// Normalize a raw search box value
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Whether `text` contains the already-normalized `query`
pub fn text_matches_search(text: &str, query: &str) -> bool {
    query.is_empty() || text.to_lowercase().contains(query)
}

/// Whether a card's title or summary matches; an empty query matches everything.
pub fn matches_search(card: &ChapterCard, query: &str) -> bool {
    let query = normalize_query(query);
    text_matches_search(&card.title, &query)
        || card
            .summary
            .as_deref()
            .is_some_and(|summary| text_matches_search(summary, &query))
}

/// Cards that remain visible for `query`, in their rendered order
pub fn filter_cards<'a>(cards: &'a [ChapterCard], query: &str) -> Vec<&'a ChapterCard> {
    cards.iter().filter(|card| matches_search(card, query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Section;

    fn card(title: &str, summary: Option<&str>) -> ChapterCard {
        ChapterCard {
            section: Section::Poetry,
            index: 0,
            title: title.to_string(),
            author: None,
            summary: summary.map(str::to_string),
        }
    }

    #[test]
    fn test_empty_query_matches_all() {
        assert!(matches_search(&card("Ozymandias", None), ""));
        assert!(matches_search(&card("Ozymandias", None), "   "));
    }

    #[test]
    fn test_title_match_is_case_insensitive() {
        assert!(matches_search(&card("Ozymandias", None), "OZYM"));
        assert!(!matches_search(&card("Ozymandias", None), "sonnet"));
    }

    #[test]
    fn test_summary_match() {
        let c = card("Ozymandias", Some("A Petrarchan sonnet about decay"));
        assert!(matches_search(&c, " sonnet "));
    }

    #[test]
    fn test_filter_preserves_order() {
        let cards = vec![
            card("The Tempest", None),
            card("Ozymandias", Some("tyrant")),
            card("Tempest notes", None),
        ];
        let titles: Vec<_> = filter_cards(&cards, "tempest")
            .into_iter()
            .map(|c| c.title.as_str())
            .collect();
        assert_eq!(titles, vec!["The Tempest", "Tempest notes"]);
    }
}
