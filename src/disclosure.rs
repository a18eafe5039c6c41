//! Per-result snippet disclosure: truncate long snippets, allow expansion.
//!
//! One [`ResultDisclosure`] exists per rendered result. Each instance
//! owns its own expand/collapse flag, independent of every other
//! instance, and is discarded when the result list is replaced.

use url::Url;

use crate::types::SearchResult;

/// Number of whitespace-delimited words shown while collapsed.
pub const PREVIEW_WORDS: usize = 30;

/// Toggle label shown after a collapsed long snippet.
pub const READ_MORE: &str = " Read more";
/// Toggle label shown after an expanded long snippet.
pub const READ_LESS: &str = " Read less";

/// Disclosure state and derived text for a single result.
///
/// The preview and length classification are computed once at
/// construction. Word-boundary truncation: the preview is the first
/// [`PREVIEW_WORDS`] whitespace-delimited words rejoined with single
/// spaces, never a character cut.
#[derive(Debug, Clone)]
pub struct ResultDisclosure {
    title: String,
    snippet: String,
    /// Parsed link target. `None` when the result URL does not parse.
    link: Option<Url>,
    preview: String,
    is_long: bool,
    expanded: bool,
}

impl ResultDisclosure {
    /// Build the disclosure view of one result. Starts collapsed.
    pub fn new(result: &SearchResult) -> Self {
        let words: Vec<&str> = result.snippet.split_whitespace().collect();
        let is_long = words.len() > PREVIEW_WORDS;
        let preview = words
            .iter()
            .take(PREVIEW_WORDS)
            .copied()
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            title: result.title.clone(),
            snippet: result.snippet.clone(),
            link: Url::parse(&result.url).ok(),
            preview,
            is_long,
            expanded: false,
        }
    }

    /// The result title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The validated link target, if the result URL parsed.
    pub fn link(&self) -> Option<&Url> {
        self.link.as_ref()
    }

    /// True iff the snippet exceeds [`PREVIEW_WORDS`] words.
    pub fn is_long(&self) -> bool {
        self.is_long
    }

    /// Current disclosure state.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Flip between collapsed and expanded. No other side effects.
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// The snippet text as currently disclosed.
    ///
    /// Expanded or short snippets render verbatim; a collapsed long
    /// snippet renders as the preview followed by a literal `"..."`.
    pub fn body(&self) -> String {
        if self.expanded || !self.is_long {
            self.snippet.clone()
        } else {
            format!("{}...", self.preview)
        }
    }

    /// Toggle label to render immediately after the body, present only
    /// for long snippets.
    pub fn toggle_label(&self) -> Option<&'static str> {
        if !self.is_long {
            None
        } else if self.expanded {
            Some(READ_LESS)
        } else {
            Some(READ_MORE)
        }
    }

    /// The body with its toggle label appended, as rendered in a pane.
    pub fn text(&self) -> String {
        match self.toggle_label() {
            Some(label) => format!("{}{label}", self.body()),
            None => self.body(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with_snippet(snippet: &str) -> SearchResult {
        SearchResult {
            title: "Title".into(),
            url: "https://example.org/page".into(),
            snippet: snippet.into(),
        }
    }

    fn words(n: usize) -> String {
        (1..=n).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn short_snippet_is_not_long_and_renders_verbatim() {
        let snippet = words(30);
        let mut disclosure = ResultDisclosure::new(&result_with_snippet(&snippet));
        assert!(!disclosure.is_long());
        assert_eq!(disclosure.body(), snippet);
        assert!(disclosure.toggle_label().is_none());

        // Expanded state is irrelevant for short snippets.
        disclosure.toggle();
        assert_eq!(disclosure.body(), snippet);
        assert!(disclosure.toggle_label().is_none());
    }

    #[test]
    fn long_snippet_collapses_to_thirty_words_with_ellipsis() {
        let snippet = words(31);
        let disclosure = ResultDisclosure::new(&result_with_snippet(&snippet));
        assert!(disclosure.is_long());
        assert_eq!(disclosure.body(), format!("{}...", words(30)));
        assert_eq!(disclosure.toggle_label(), Some(" Read more"));
    }

    #[test]
    fn toggle_round_trip_restores_collapsed_rendering() {
        let snippet = words(40);
        let mut disclosure = ResultDisclosure::new(&result_with_snippet(&snippet));
        let collapsed = disclosure.text();

        disclosure.toggle();
        assert!(disclosure.is_expanded());
        assert_eq!(disclosure.body(), snippet);
        assert_eq!(disclosure.toggle_label(), Some(" Read less"));
        assert_ne!(disclosure.text(), collapsed);

        disclosure.toggle();
        assert!(!disclosure.is_expanded());
        assert_eq!(disclosure.text(), collapsed);
    }

    #[test]
    fn irregular_whitespace_counts_words_not_characters() {
        // 31 words separated by mixed whitespace; preview rejoins with
        // single spaces.
        let snippet = (1..=31)
            .map(|i| format!("w{i}"))
            .collect::<Vec<_>>()
            .join("\t \n");
        let disclosure = ResultDisclosure::new(&result_with_snippet(&snippet));
        assert!(disclosure.is_long());
        assert_eq!(disclosure.body(), format!("{}...", words(30)));
    }

    #[test]
    fn empty_snippet_is_short() {
        let disclosure = ResultDisclosure::new(&result_with_snippet(""));
        assert!(!disclosure.is_long());
        assert_eq!(disclosure.body(), "");
        assert!(disclosure.toggle_label().is_none());
    }

    #[test]
    fn valid_url_parses_into_link() {
        let disclosure = ResultDisclosure::new(&result_with_snippet("text"));
        let link = disclosure.link().expect("should parse");
        assert_eq!(link.as_str(), "https://example.org/page");
    }

    #[test]
    fn invalid_url_yields_no_link() {
        let result = SearchResult {
            title: "T".into(),
            url: "not a url".into(),
            snippet: "s".into(),
        };
        assert!(ResultDisclosure::new(&result).link().is_none());
    }

    #[test]
    fn instances_are_independent() {
        let snippet = words(35);
        let result = result_with_snippet(&snippet);
        let mut first = ResultDisclosure::new(&result);
        let second = ResultDisclosure::new(&result);

        first.toggle();
        assert!(first.is_expanded());
        assert!(!second.is_expanded());
    }
}
