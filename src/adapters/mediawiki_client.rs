use std::collections::{HashMap, HashSet};

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::core::interfaces::adapters::EncyclopediaClient;
use crate::core::models::{EncyclopediaPage, PageLookup};
use crate::global_constants;

#[derive(Debug, Deserialize)]
struct ApiResponse<Q> {
    query: Option<Q>,
    error: Option<ApiError>,
    #[serde(rename = "continue")]
    continuation: Option<HashMap<String, serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: String,
    #[serde(default)]
    info: String,
}

#[derive(Debug, Default, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: Vec<SearchHit>,
    searchinfo: Option<SearchInfo>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    title: String,
}

#[derive(Debug, Deserialize)]
struct SearchInfo {
    suggestion: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct PagesQuery {
    #[serde(default)]
    pages: Vec<PageEntry>,
}

#[derive(Debug, Deserialize)]
struct PageEntry {
    #[serde(default)]
    title: String,
    #[serde(default)]
    missing: bool,
    #[serde(default)]
    invalid: bool,
    fullurl: Option<String>,
    pageprops: Option<HashMap<String, serde_json::Value>>,
    #[serde(default)]
    links: Vec<LinkEntry>,
    extract: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LinkEntry {
    title: String,
}

impl PageEntry {
    fn is_missing(&self) -> bool {
        self.missing || self.invalid
    }

    fn is_disambiguation(&self) -> bool {
        self.pageprops
            .as_ref()
            .is_some_and(|props| props.contains_key("disambiguation"))
    }
}

#[derive(Debug, PartialEq)]
enum TitleResolution {
    Search,
    Direct(String),
    Unusable,
}

/// `|` separates titles in the API, so a term containing it cannot name one page.
fn plan_title_resolution(term: &str, auto_suggest: bool) -> TitleResolution {
    if auto_suggest {
        return TitleResolution::Search;
    }

    let title = term.trim();
    if title.is_empty() || title.contains('|') {
        TitleResolution::Unusable
    } else {
        TitleResolution::Direct(title.to_string())
    }
}

#[derive(Debug, PartialEq)]
enum PageDecision {
    Missing,
    Disambiguation { title: String },
    Article { title: String, url: String },
}

fn classify_page(page: Option<PageEntry>) -> PageDecision {
    match page {
        Some(page) if page.is_missing() => PageDecision::Missing,
        Some(page) if page.is_disambiguation() => {
            PageDecision::Disambiguation { title: page.title }
        }
        Some(page) => PageDecision::Article {
            url: page.fullurl.unwrap_or_default(),
            title: page.title,
        },
        None => PageDecision::Missing,
    }
}

fn select_search_title(query: &SearchQuery) -> Option<String> {
    let suggestion = query
        .searchinfo
        .as_ref()
        .and_then(|info| info.suggestion.clone())
        .filter(|suggestion| !suggestion.trim().is_empty());

    suggestion.or_else(|| query.search.first().map(|hit| hit.title.clone()))
}

fn collect_link_titles(
    pages: &[PageEntry],
    seen: &mut HashSet<String>,
    options: &mut Vec<String>,
) {
    for link in pages.iter().flat_map(|page| page.links.iter()) {
        if seen.insert(link.title.clone()) {
            options.push(link.title.clone());
        }
    }
}

fn continuation_params(continuation: &HashMap<String, serde_json::Value>) -> Vec<(String, String)> {
    continuation
        .iter()
        .map(|(key, value)| {
            let value = match value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (key.clone(), value)
        })
        .collect()
}

fn is_valid_language_code(language: &str) -> bool {
    !language.is_empty()
        && language
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Talks to a Wikipedia edition through the MediaWiki action API.
pub struct MediaWikiClient {
    http_client: reqwest::Client,
    api_url: String,
    auto_suggest: bool,
}

impl MediaWikiClient {
    pub fn build(language: &str, auto_suggest: bool) -> Result<Self> {
        if !is_valid_language_code(language) {
            anyhow::bail!("Invalid encyclopedia language code: '{}'", language);
        }

        let api_url = global_constants::WIKIPEDIA_API_URL_TEMPLATE.replace("{}", language);
        Self::build_with_api_url(api_url, auto_suggest)
    }

    pub fn build_with_api_url(api_url: String, auto_suggest: bool) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(global_constants::HTTP_USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        log::info!("[WIKIPEDIA] Using API endpoint {}", api_url);

        Ok(Self {
            http_client,
            api_url,
            auto_suggest,
        })
    }

    fn construct_query_url(&self, params: &[(String, String)]) -> String {
        let mut url = format!("{}?action=query&format=json&formatversion=2", self.api_url);

        for (key, value) in params {
            url.push('&');
            url.push_str(&urlencoding::encode(key));
            if !value.is_empty() {
                url.push('=');
                url.push_str(&urlencoding::encode(value));
            }
        }

        url
    }

    async fn fetch_query<Q: DeserializeOwned>(
        &self,
        params: &[(String, String)],
    ) -> Result<ApiResponse<Q>> {
        let url = self.construct_query_url(params);
        log::debug!("[WIKIPEDIA] GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await?
            .error_for_status()?;

        let api_response: ApiResponse<Q> = response
            .json()
            .await
            .context("Failed to decode MediaWiki response")?;

        if let Some(error) = &api_response.error {
            anyhow::bail!("MediaWiki API error '{}': {}", error.code, error.info);
        }

        Ok(api_response)
    }

    async fn resolve_title(&self, term: &str) -> Result<Option<String>> {
        let params = vec![
            ("list".to_string(), "search".to_string()),
            ("srsearch".to_string(), term.to_string()),
            ("srlimit".to_string(), "1".to_string()),
            ("srinfo".to_string(), "suggestion".to_string()),
            ("srprop".to_string(), String::new()),
        ];

        let response: ApiResponse<SearchQuery> = self.fetch_query(&params).await?;
        let query = response.query.unwrap_or_default();

        Ok(select_search_title(&query))
    }

    async fn load_page_info(&self, title: &str) -> Result<Option<PageEntry>> {
        let params = vec![
            ("prop".to_string(), "info|pageprops".to_string()),
            ("inprop".to_string(), "url".to_string()),
            ("ppprop".to_string(), "disambiguation".to_string()),
            ("redirects".to_string(), String::new()),
            ("titles".to_string(), title.to_string()),
        ];

        let response: ApiResponse<PagesQuery> = self.fetch_query(&params).await?;

        Ok(response
            .query
            .unwrap_or_default()
            .pages
            .into_iter()
            .next())
    }

    async fn load_disambiguation_options(&self, title: &str) -> Result<Vec<String>> {
        let mut options = Vec::new();
        let mut seen = HashSet::new();
        let mut continuation: Vec<(String, String)> = Vec::new();

        loop {
            let mut params = vec![
                ("prop".to_string(), "links".to_string()),
                ("plnamespace".to_string(), "0".to_string()),
                ("pllimit".to_string(), "max".to_string()),
                ("titles".to_string(), title.to_string()),
            ];
            params.extend(continuation.iter().cloned());

            let response: ApiResponse<PagesQuery> = self.fetch_query(&params).await?;
            let pages = response.query.unwrap_or_default().pages;
            collect_link_titles(&pages, &mut seen, &mut options);

            match response.continuation {
                Some(next) => continuation = continuation_params(&next),
                None => break,
            }
        }

        log::debug!(
            "[WIKIPEDIA] '{}' is a disambiguation page with {} options",
            title,
            options.len()
        );

        Ok(options)
    }

    async fn load_intro_extract(&self, title: &str) -> Result<String> {
        let params = vec![
            ("prop".to_string(), "extracts".to_string()),
            ("exintro".to_string(), String::new()),
            ("explaintext".to_string(), String::new()),
            ("titles".to_string(), title.to_string()),
        ];

        let response: ApiResponse<PagesQuery> = self.fetch_query(&params).await?;

        let extract = response
            .query
            .unwrap_or_default()
            .pages
            .into_iter()
            .find_map(|page| page.extract)
            .unwrap_or_default();

        Ok(extract.trim().to_string())
    }
}

#[async_trait]
impl EncyclopediaClient for MediaWikiClient {
    async fn lookup_page(&self, term: &str) -> Result<PageLookup> {
        let title = match plan_title_resolution(term, self.auto_suggest) {
            TitleResolution::Search => match self.resolve_title(term).await? {
                Some(title) => title,
                None => {
                    log::info!("[WIKIPEDIA] No search hits for '{}'", term);
                    return Ok(PageLookup::Missing);
                }
            },
            TitleResolution::Direct(title) => title,
            TitleResolution::Unusable => {
                log::info!("[WIKIPEDIA] '{}' is not a valid page title", term);
                return Ok(PageLookup::Missing);
            }
        };

        log::debug!("[WIKIPEDIA] Resolved '{}' to title '{}'", term, title);

        match classify_page(self.load_page_info(&title).await?) {
            PageDecision::Missing => {
                log::info!("[WIKIPEDIA] Page '{}' does not exist", title);
                Ok(PageLookup::Missing)
            }
            PageDecision::Disambiguation { title } => {
                let options = self.load_disambiguation_options(&title).await?;
                Ok(PageLookup::Ambiguous { options })
            }
            PageDecision::Article { title, url } => {
                let summary = self.load_intro_extract(&title).await?;

                log::info!("[WIKIPEDIA] Found page '{}' at {}", title, url);

                Ok(PageLookup::Found(EncyclopediaPage {
                    title,
                    url,
                    summary,
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse<Q: DeserializeOwned>(value: serde_json::Value) -> ApiResponse<Q> {
        serde_json::from_value(value).unwrap()
    }

    fn create_test_client() -> MediaWikiClient {
        MediaWikiClient::build_with_api_url("https://xx.example.org/w/api.php".to_string(), true)
            .unwrap()
    }

    #[test]
    fn test_build_rejects_invalid_language_code() {
        assert!(MediaWikiClient::build("pt/../evil", true).is_err());
        assert!(MediaWikiClient::build("", true).is_err());
    }

    #[test]
    fn test_build_uses_language_subdomain() {
        let client = MediaWikiClient::build("pt", true).unwrap();

        assert_eq!(client.api_url, "https://pt.wikipedia.org/w/api.php");
    }

    #[test]
    fn test_construct_query_url_encodes_values_and_keeps_flags() {
        let client = create_test_client();

        let url = client.construct_query_url(&[
            ("titles".to_string(), "C++ & Rust".to_string()),
            ("redirects".to_string(), String::new()),
        ]);

        assert!(url.starts_with(
            "https://xx.example.org/w/api.php?action=query&format=json&formatversion=2"
        ));
        assert!(url.contains("&titles=C%2B%2B%20%26%20Rust"));
        assert!(url.ends_with("&redirects"));
    }

    #[test]
    fn test_select_search_title_prefers_suggestion() {
        let response: ApiResponse<SearchQuery> = parse(json!({
            "query": {
                "searchinfo": { "suggestion": "albert einstein" },
                "search": [{ "ns": 0, "title": "Albert Einstein Medal" }]
            }
        }));

        let title = select_search_title(&response.query.unwrap());

        assert_eq!(title.as_deref(), Some("albert einstein"));
    }

    #[test]
    fn test_select_search_title_falls_back_to_first_hit() {
        let response: ApiResponse<SearchQuery> = parse(json!({
            "query": {
                "searchinfo": {},
                "search": [{ "ns": 0, "title": "Lisboa" }, { "ns": 0, "title": "Porto" }]
            }
        }));

        let title = select_search_title(&response.query.unwrap());

        assert_eq!(title.as_deref(), Some("Lisboa"));
    }

    #[test]
    fn test_select_search_title_without_hits_is_none() {
        let response: ApiResponse<SearchQuery> = parse(json!({
            "query": { "searchinfo": { "totalhits": 0 }, "search": [] }
        }));

        assert!(select_search_title(&response.query.unwrap()).is_none());
    }

    #[test]
    fn test_page_entry_detects_missing_and_invalid_pages() {
        let response: ApiResponse<PagesQuery> = parse(json!({
            "query": {
                "pages": [
                    { "ns": 0, "title": "Qwxzlpt", "missing": true },
                    { "title": "<bad>", "invalid": true, "invalidreason": "bad title" }
                ]
            }
        }));

        let pages = response.query.unwrap().pages;

        assert!(pages[0].is_missing());
        assert!(pages[1].is_missing());
    }

    #[test]
    fn test_page_entry_detects_disambiguation() {
        let response: ApiResponse<PagesQuery> = parse(json!({
            "query": {
                "pages": [{
                    "pageid": 19005,
                    "ns": 0,
                    "title": "Mercury",
                    "fullurl": "https://en.wikipedia.org/wiki/Mercury",
                    "pageprops": { "disambiguation": "" }
                }]
            }
        }));

        let page = &response.query.unwrap().pages[0];

        assert!(!page.is_missing());
        assert!(page.is_disambiguation());
    }

    #[test]
    fn test_regular_page_is_not_disambiguation() {
        let response: ApiResponse<PagesQuery> = parse(json!({
            "query": {
                "pages": [{
                    "ns": 0,
                    "title": "Rust (programming language)",
                    "fullurl": "https://en.wikipedia.org/wiki/Rust_(programming_language)"
                }]
            }
        }));

        let page = &response.query.unwrap().pages[0];

        assert!(!page.is_disambiguation());
        assert_eq!(
            page.fullurl.as_deref(),
            Some("https://en.wikipedia.org/wiki/Rust_(programming_language)")
        );
    }

    #[test]
    fn test_collect_link_titles_preserves_order_and_skips_duplicates() {
        let first: ApiResponse<PagesQuery> = parse(json!({
            "continue": { "plcontinue": "19005|0|Mercury_(planet)", "continue": "||" },
            "query": {
                "pages": [{
                    "title": "Mercury",
                    "links": [
                        { "ns": 0, "title": "Mercury (element)" },
                        { "ns": 0, "title": "Mercury (mythology)" }
                    ]
                }]
            }
        }));
        let second: ApiResponse<PagesQuery> = parse(json!({
            "query": {
                "pages": [{
                    "title": "Mercury",
                    "links": [
                        { "ns": 0, "title": "Mercury (mythology)" },
                        { "ns": 0, "title": "Mercury (planet)" }
                    ]
                }]
            }
        }));

        let mut seen = HashSet::new();
        let mut options = Vec::new();
        collect_link_titles(&first.query.unwrap().pages, &mut seen, &mut options);
        collect_link_titles(&second.query.unwrap().pages, &mut seen, &mut options);

        assert_eq!(
            options,
            vec!["Mercury (element)", "Mercury (mythology)", "Mercury (planet)"]
        );
    }

    #[test]
    fn test_continuation_params_flatten_to_strings() {
        let response: ApiResponse<PagesQuery> = parse(json!({
            "continue": { "plcontinue": "19005|0|Venus", "continue": "||" },
            "query": { "pages": [] }
        }));

        let mut params = continuation_params(&response.continuation.unwrap());
        params.sort();

        assert_eq!(
            params,
            vec![
                ("continue".to_string(), "||".to_string()),
                ("plcontinue".to_string(), "19005|0|Venus".to_string()),
            ]
        );
    }

    fn first_page(value: serde_json::Value) -> Option<PageEntry> {
        parse::<PagesQuery>(value)
            .query
            .unwrap_or_default()
            .pages
            .into_iter()
            .next()
    }

    #[test]
    fn test_plan_title_resolution_searches_when_auto_suggest_is_on() {
        assert_eq!(plan_title_resolution("lisbon", true), TitleResolution::Search);
    }

    #[test]
    fn test_plan_title_resolution_uses_term_when_auto_suggest_is_off() {
        assert_eq!(
            plan_title_resolution("  Lisboa ", false),
            TitleResolution::Direct("Lisboa".to_string())
        );
    }

    #[test]
    fn test_plan_title_resolution_rejects_multi_title_terms() {
        assert_eq!(
            plan_title_resolution("Lisboa|Porto", false),
            TitleResolution::Unusable
        );
        assert_eq!(plan_title_resolution("   ", false), TitleResolution::Unusable);
    }

    #[test]
    fn test_classify_page_without_result_is_missing() {
        assert_eq!(classify_page(None), PageDecision::Missing);
        assert_eq!(
            classify_page(first_page(json!({ "query": { "pages": [] } }))),
            PageDecision::Missing
        );
    }

    #[test]
    fn test_classify_page_missing_and_invalid_are_missing() {
        let missing = first_page(json!({
            "query": { "pages": [{ "ns": 0, "title": "Qwxzlpt", "missing": true }] }
        }));
        let invalid = first_page(json!({
            "query": { "pages": [{ "title": "<bad>", "invalid": true }] }
        }));

        assert_eq!(classify_page(missing), PageDecision::Missing);
        assert_eq!(classify_page(invalid), PageDecision::Missing);
    }

    #[test]
    fn test_classify_page_disambiguation_keeps_canonical_title() {
        let page = first_page(json!({
            "query": {
                "redirects": [{ "from": "mercury", "to": "Mercury" }],
                "pages": [{
                    "ns": 0,
                    "title": "Mercury",
                    "fullurl": "https://en.wikipedia.org/wiki/Mercury",
                    "pageprops": { "disambiguation": "" }
                }]
            }
        }));

        assert_eq!(
            classify_page(page),
            PageDecision::Disambiguation {
                title: "Mercury".to_string()
            }
        );
    }

    #[test]
    fn test_classify_page_article_carries_title_and_url() {
        let page = first_page(json!({
            "query": {
                "pages": [{
                    "ns": 0,
                    "title": "Lisboa",
                    "fullurl": "https://pt.wikipedia.org/wiki/Lisboa"
                }]
            }
        }));

        assert_eq!(
            classify_page(page),
            PageDecision::Article {
                title: "Lisboa".to_string(),
                url: "https://pt.wikipedia.org/wiki/Lisboa".to_string(),
            }
        );
    }

    #[test]
    fn test_api_error_is_parsed() {
        let response: ApiResponse<PagesQuery> = parse(json!({
            "error": { "code": "badvalue", "info": "Unrecognized value" }
        }));

        let error = response.error.unwrap();

        assert_eq!(error.code, "badvalue");
        assert!(response.query.is_none());
    }
}
