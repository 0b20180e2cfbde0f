//! Fetching website text for profiles.
//!
//! Plain HTTP plus regex-based HTML handling, good enough for server-rendered
//! shop pages. JavaScript-heavy sites are out of scope.

use tracing::{debug, warn};
use url::Url;

use crate::error::{FetchError, FetchResult};

/// Fetches page text and product links over HTTP.
///
/// # Example
///
/// ```rust,ignore
/// use copywriter::fetch::PageFetcher;
///
/// let fetcher = PageFetcher::new();
/// let about = fetcher.page_text("https://example.dk/om-os").await?;
/// let links = fetcher.collection_links("https://example.dk/shop", "/products/").await?;
/// ```
pub struct PageFetcher {
    client: reqwest::Client,
    user_agent: String,
}

impl Default for PageFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl PageFetcher {
    /// Create a fetcher with default settings.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
            user_agent: "CopysmithBot/1.0".to_string(),
        }
    }

    /// Set a custom user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Fetch a URL and return its raw HTML plus the final URL after redirects.
    async fn fetch_html(&self, url: &str) -> FetchResult<(String, Url)> {
        Url::parse(url).map_err(|_| FetchError::InvalidUrl { url: url.to_string() })?;

        debug!(url = %url, "HTTP fetch starting");
        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "HTTP request failed");
                FetchError::Http(Box::new(e))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let final_url = response.url().clone();
        let html = response
            .text()
            .await
            .map_err(|e| FetchError::Http(Box::new(e)))?;

        Ok((html, final_url))
    }

    /// Fetch a page and return its visible text, scripts and styles removed.
    pub async fn page_text(&self, url: &str) -> FetchResult<String> {
        let (html, _) = self.fetch_html(url).await?;
        Ok(html_to_text(&html))
    }

    /// Collect same-host links whose path starts with `path_prefix`.
    ///
    /// Relative hrefs are resolved against the final URL after redirects.
    /// Order of first appearance is kept; duplicates are dropped.
    pub async fn collection_links(&self, url: &str, path_prefix: &str) -> FetchResult<Vec<String>> {
        let (html, final_url) = self.fetch_html(url).await?;

        let mut seen = std::collections::HashSet::new();
        let mut links = Vec::new();
        for href in extract_hrefs(&html) {
            let Ok(resolved) = final_url.join(&href) else {
                continue;
            };
            if resolved.host_str() != final_url.host_str() {
                continue;
            }
            if !resolved.path().starts_with(path_prefix) {
                continue;
            }
            let link = resolved.to_string();
            if seen.insert(link.clone()) {
                links.push(link);
            }
        }

        debug!(url = %url, prefix = %path_prefix, count = links.len(), "collected links");
        Ok(links)
    }

    /// Fetch page text for each URL, sequentially, skipping failures.
    pub async fn fetch_texts(&self, urls: &[String]) -> Vec<String> {
        let mut texts = Vec::with_capacity(urls.len());
        for url in urls {
            match self.page_text(url).await {
                Ok(text) => texts.push(text),
                Err(e) => {
                    warn!(url = %url, error = %e, "Failed to fetch page");
                }
            }
        }
        texts
    }
}

/// Extract anchor hrefs from HTML, skipping anchors, javascript and contact
/// schemes.
fn extract_hrefs(html: &str) -> Vec<String> {
    let href_pattern = regex::Regex::new(r#"href\s*=\s*["']([^"']+)["']"#).unwrap();

    href_pattern
        .captures_iter(html)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .filter(|href| {
            !href.starts_with('#')
                && !href.starts_with("javascript:")
                && !href.starts_with("mailto:")
                && !href.starts_with("tel:")
        })
        .collect()
}

/// Strip HTML down to visible text.
pub fn html_to_text(html: &str) -> String {
    let mut text = html.to_string();

    // Remove scripts and styles
    let script_pattern = regex::Regex::new(r"(?is)<script[^>]*>.*?</script>").unwrap();
    let style_pattern = regex::Regex::new(r"(?is)<style[^>]*>.*?</style>").unwrap();
    text = script_pattern.replace_all(&text, "").to_string();
    text = style_pattern.replace_all(&text, "").to_string();

    // Block-level closings become line breaks
    let break_pattern =
        regex::Regex::new(r"(?i)</(p|div|li|h1|h2|h3|h4|h5|h6|tr)>|<br\s*/?>").unwrap();
    text = break_pattern.replace_all(&text, "\n").to_string();

    // Remove remaining tags
    let tag_pattern = regex::Regex::new(r"<[^>]+>").unwrap();
    text = tag_pattern.replace_all(&text, "").to_string();

    // Decode HTML entities
    text = text
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'");

    // Clean up whitespace
    let multi_newline = regex::Regex::new(r"\n{3,}").unwrap();
    text = multi_newline.replace_all(&text, "\n\n").to_string();

    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_to_text_strips_scripts_and_styles() {
        let html = r#"
            <html><head>
            <style>body { color: red; }</style>
            <script>alert("hej");</script>
            </head><body>
            <h1>Om os</h1>
            <p>Vi laver keramik i &#39;Jylland&#39; &amp; sælger online.</p>
            </body></html>
        "#;

        let text = html_to_text(html);

        assert!(text.contains("Om os"));
        assert!(text.contains("Vi laver keramik i 'Jylland' & sælger online."));
        assert!(!text.contains("alert"));
        assert!(!text.contains("color: red"));
        assert!(!text.contains('<'));
    }

    #[test]
    fn test_html_to_text_collapses_blank_lines() {
        let html = "<p>en</p><div></div><div></div><div></div><p>to</p>";
        let text = html_to_text(html);
        assert!(!text.contains("\n\n\n"));
        assert!(text.starts_with("en"));
        assert!(text.ends_with("to"));
    }

    #[test]
    fn test_extract_hrefs_skips_non_content_schemes() {
        let html = r##"
            <a href="/products/krus">Krus</a>
            <a href="https://example.dk/products/skaal">Skål</a>
            <a href="#top">Top</a>
            <a href="javascript:void(0)">JS</a>
            <a href="mailto:hej@example.dk">Mail</a>
            <a href="tel:+4512345678">Ring</a>
        "##;

        let hrefs = extract_hrefs(html);

        assert_eq!(
            hrefs,
            vec!["/products/krus", "https://example.dk/products/skaal"]
        );
    }
}
