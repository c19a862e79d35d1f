/// Display-ready outcome of one encyclopedia lookup.
///
/// An empty `url` marks a result that does not point at a page, which is how
/// ambiguous and missing terms are reported.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub summary: String,
    pub additional_info: Option<String>,
}

impl SearchResult {
    pub fn found(title: String, url: String, summary: String) -> Self {
        Self {
            title,
            url,
            summary,
            additional_info: None,
        }
    }

    pub fn ambiguous(term: &str, options: &[String]) -> Self {
        let summary = format!(
            "The term '{}' is ambiguous. Try being more specific. Suggested options:\n{}",
            term,
            options.join("\n")
        );

        Self {
            title: term.to_string(),
            url: String::new(),
            summary,
            additional_info: None,
        }
    }

    pub fn not_found(term: &str) -> Self {
        Self {
            title: term.to_string(),
            url: String::new(),
            summary: format!("No page was found for the term '{}'.", term),
            additional_info: None,
        }
    }

    pub fn with_additional_info(mut self, info: String) -> Self {
        self.additional_info = Some(info);
        self
    }

    pub fn is_page_result(&self) -> bool {
        !self.url.is_empty()
    }

    pub fn render_display_text(&self) -> String {
        let mut display_text = format!("Title: {}\n", self.title);

        if self.is_page_result() {
            display_text.push_str(&format!("URL: {}\n", self.url));
        }

        display_text.push_str(&format!("\nSummary:\n{}", self.summary));

        if let Some(info) = &self.additional_info {
            display_text.push_str(&format!("\n\n{}", info));
        }

        display_text
    }
}
