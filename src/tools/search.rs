//! Web search tool backed by DuckDuckGo HTML search.

use async_trait::async_trait;
use serde_json::{json, Value};

use super::Tool;

/// How many search results to return to the agent.
const MAX_RESULTS: usize = 3;

/// Search the web via DuckDuckGo's HTML endpoint (no API key needed).
pub struct WebSearch {
    client: reqwest::Client,
}

impl WebSearch {
    pub fn new() -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("Mozilla/5.0 (compatible; IdeaEnhancer/1.0)")
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Tool for WebSearch {
    fn name(&self) -> &str {
        "web_search"
    }

    fn description(&self) -> &str {
        "Search for recent information to enhance ideas. Returns search results with titles and snippets."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The search query"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, args: Value) -> anyhow::Result<String> {
        let query = args["query"]
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("Missing 'query' argument"))?;

        let encoded_query = urlencoding::encode(query);
        let url = format!("https://html.duckduckgo.com/html/?q={}", encoded_query);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(anyhow::anyhow!("Search request failed: HTTP {}", status));
        }

        let html = response.text().await?;
        let results = extract_ddg_results(&html);

        if results.is_empty() {
            Ok(format!("No results found for: {}", query))
        } else {
            Ok(results.join("\n\n"))
        }
    }
}

/// Extract search results from DuckDuckGo HTML.
fn extract_ddg_results(html: &str) -> Vec<String> {
    let mut results = Vec::new();

    for chunk in html.split("class=\"result__body\"").skip(1) {
        if results.len() == MAX_RESULTS {
            break;
        }

        // Extract title
        let title = chunk
            .split("class=\"result__a\"")
            .nth(1)
            .and_then(|s| s.split('>').nth(1))
            .and_then(|s| s.split('<').next())
            .unwrap_or("No title");

        // Extract snippet
        let snippet = chunk
            .split("class=\"result__snippet\"")
            .nth(1)
            .and_then(|s| s.split('>').nth(1))
            .and_then(|s| s.split('<').next())
            .unwrap_or("No snippet");

        // Extract URL
        let url = chunk
            .split("class=\"result__url\"")
            .nth(1)
            .and_then(|s| s.split('>').nth(1))
            .and_then(|s| s.split('<').next())
            .map(|s| s.trim())
            .unwrap_or("");

        if !title.is_empty() && title != "No title" {
            results.push(format!(
                "**{}**\n{}\nURL: {}",
                html_decode(title),
                html_decode(snippet),
                url
            ));
        }
    }

    results
}

/// Basic HTML entity decoding.
fn html_decode(s: &str) -> String {
    s.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_block(title: &str, snippet: &str, url: &str) -> String {
        format!(
            r##"<div class="result__body">
                <a class="result__a" href="#">{title}</a>
                <a class="result__snippet" href="#">{snippet}</a>
                <span class="result__url">  {url}  </span>
            </div>"##
        )
    }

    #[test]
    fn test_extract_results() {
        let html = result_block("Plant App", "A plant care app.", "example.com");
        let results = extract_ddg_results(&html);

        assert_eq!(results.len(), 1);
        assert!(results[0].contains("**Plant App**"));
        assert!(results[0].contains("A plant care app."));
        assert!(results[0].contains("URL: example.com"));
    }

    #[test]
    fn test_extract_caps_result_count() {
        let html: String = (0..6)
            .map(|i| result_block(&format!("Result {}", i), "snippet", "example.com"))
            .collect();

        let results = extract_ddg_results(&html);
        assert_eq!(results.len(), MAX_RESULTS);
    }

    #[test]
    fn test_extract_no_results() {
        let results = extract_ddg_results("<html><body>no matches here</body></html>");
        assert!(results.is_empty());
    }

    #[test]
    fn test_html_decode() {
        assert_eq!(
            html_decode("Ben &amp; Jerry&#39;s &lt;b&gt;"),
            "Ben & Jerry's <b>"
        );
    }
}
