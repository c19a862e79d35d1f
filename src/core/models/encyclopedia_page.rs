#[derive(Debug, Clone, PartialEq)]
pub struct EncyclopediaPage {
    pub title: String,
    pub url: String,
    pub summary: String,
}

/// Outcome of asking the encyclopedia for a single page.
#[derive(Debug, Clone, PartialEq)]
pub enum PageLookup {
    Found(EncyclopediaPage),
    Ambiguous { options: Vec<String> },
    Missing,
}
