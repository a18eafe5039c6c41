//! Plain-text rendering of the three result panes.
//!
//! The view layer only reads controller state. Each pane heading follows
//! the service's frontend copy; each item renders its title, its
//! validated URL (when it parses), and the disclosed snippet text.

use crate::disclosure::ResultDisclosure;
use crate::types::{ResultSet, Source};

/// Loading indicator line, shown while a request is in flight.
pub const LOADING_LINE: &str = "Loading results...";

/// Render one pane: heading, count, and one block per result.
pub fn render_pane(source: Source, disclosures: &[ResultDisclosure]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} ({})\n", source.label(), disclosures.len()));

    if disclosures.is_empty() {
        out.push_str("  (no results)\n");
        return out;
    }

    for disclosure in disclosures {
        out.push_str(&format!("  * {}\n", disclosure.title()));
        if let Some(link) = disclosure.link() {
            out.push_str(&format!("    {link}\n"));
        }
        out.push_str(&format!("    {}\n", disclosure.text()));
    }
    out
}

/// Render all three panes from a result set.
///
/// Builds one [`ResultDisclosure`] per item. With `expand_all` set, every
/// long snippet is toggled open — the non-interactive equivalent of
/// activating each "Read more" control.
pub fn render_result_set(results: &ResultSet, expand_all: bool) -> String {
    let mut panes = Vec::with_capacity(Source::all().len());

    for source in Source::all() {
        let disclosures: Vec<ResultDisclosure> = results
            .pane(*source)
            .iter()
            .map(|result| {
                let mut disclosure = ResultDisclosure::new(result);
                if expand_all && disclosure.is_long() {
                    disclosure.toggle();
                }
                disclosure
            })
            .collect();
        panes.push(render_pane(*source, &disclosures));
    }

    panes.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SearchResult;

    fn result(title: &str, url: &str, snippet: &str) -> SearchResult {
        SearchResult {
            title: title.into(),
            url: url.into(),
            snippet: snippet.into(),
        }
    }

    fn long_snippet() -> String {
        (1..=31).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn empty_result_set_renders_three_empty_panes() {
        let rendered = render_result_set(&ResultSet::default(), false);
        assert!(rendered.contains("Custom Results (0)"));
        assert!(rendered.contains("Google Results (0)"));
        assert!(rendered.contains("Bing Results (0)"));
        assert_eq!(rendered.matches("(no results)").count(), 3);
    }

    #[test]
    fn pane_renders_title_url_and_snippet() {
        let set = ResultSet {
            custom: vec![result("Anarchism", "https://example.org/a", "brief text")],
            ..Default::default()
        };
        let rendered = render_result_set(&set, false);
        assert!(rendered.contains("Custom Results (1)"));
        assert!(rendered.contains("* Anarchism"));
        assert!(rendered.contains("https://example.org/a"));
        assert!(rendered.contains("brief text"));
    }

    #[test]
    fn invalid_url_is_omitted_from_output() {
        let set = ResultSet {
            bing: vec![result("Broken", "not a url", "text")],
            ..Default::default()
        };
        let rendered = render_result_set(&set, false);
        assert!(rendered.contains("* Broken"));
        assert!(!rendered.contains("not a url"));
    }

    #[test]
    fn long_snippet_collapsed_by_default() {
        let set = ResultSet {
            custom: vec![result("A", "http://a", &long_snippet())],
            ..Default::default()
        };
        let rendered = render_result_set(&set, false);
        assert!(rendered.contains("... Read more"));
        assert!(!rendered.contains("w31"));
    }

    #[test]
    fn expand_all_shows_full_snippets() {
        let set = ResultSet {
            custom: vec![result("A", "http://a", &long_snippet())],
            ..Default::default()
        };
        let rendered = render_result_set(&set, true);
        assert!(rendered.contains("w31"));
        assert!(rendered.contains("Read less"));
        assert!(!rendered.contains("Read more"));
    }

    #[test]
    fn panes_keep_service_order() {
        let set = ResultSet {
            custom: vec![result("C", "http://c", "c")],
            google: vec![result("G", "http://g", "g")],
            bing: vec![result("B", "http://b", "b")],
        };
        let rendered = render_result_set(&set, false);
        let custom_at = rendered.find("Custom Results").expect("custom pane");
        let google_at = rendered.find("Google Results").expect("google pane");
        let bing_at = rendered.find("Bing Results").expect("bing pane");
        assert!(custom_at < google_at);
        assert!(google_at < bing_at);
    }
}
