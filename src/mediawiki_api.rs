use async_recursion::async_recursion;
use futures::future;
use itertools::Itertools;
use std::str::FromStr;
use url::{ParseError, Url};

use crate::{
    definitions::{FetchError, SearchHit, WikiPage, WikiResponse},
    reqwest_client::WikiClient,
    wikitext::Article,
};

/// Default revision-content endpoint. Overridable through the `WIKI_API`
/// environment variable so the reader can point at any MediaWiki install.
const WIKI_API: &str = "https://en.wikipedia.org/w/api.php";

/// The API rejects more than 50 titles in one request.
const MAX_TITLES_PER_REQUEST: usize = 50;

fn api_endpoint() -> String {
    std::env::var("WIKI_API").unwrap_or_else(|_| WIKI_API.to_owned())
}

/// Build the basic wiki api url of everything we need.
fn build_wiki_url() -> Result<Url, ParseError> {
    let mut url = Url::from_str(&api_endpoint())?;
    url.query_pairs_mut()
        .append_pair("action", "query")
        .append_pair("format", "json")
        .append_pair("formatversion", "2")
        .finish();
    Ok(url)
}

/// Join titles into `|`-separated batches the API will accept.
fn batch_titles<S: AsRef<str>>(titles: &[S]) -> Vec<String> {
    titles
        .chunks(MAX_TITLES_PER_REQUEST)
        .map(|chunk| chunk.iter().map(|s| s.as_ref()).join("|"))
        .collect()
}

async fn fetch_batch(client: &WikiClient, titles: &str) -> Result<Vec<WikiPage>, FetchError> {
    let mut url = build_wiki_url()?;
    url.query_pairs_mut()
        .append_pair("prop", "revisions")
        .append_pair("titles", titles)
        .append_pair("rvprop", "content")
        .append_pair("rvslots", "main")
        .append_pair("redirects", "1")
        .finish();

    let response = client.get(url).send().await?.json::<WikiResponse>().await?;
    Ok(response.query.pages)
}

/// Fetch the raw markup of every requested title. Oversized requests are
/// split into batches which run concurrently; the first failing batch wins.
pub async fn get_pages<S: AsRef<str>>(
    client: &WikiClient,
    titles: &[S],
) -> Result<Vec<WikiPage>, FetchError> {
    let batches = batch_titles(titles);
    let results =
        future::join_all(batches.iter().map(|batch| fetch_batch(client, batch))).await;

    let mut pages = Vec::new();
    for result in results {
        pages.extend(result?);
    }
    Ok(pages)
}

/// Full-text search, at most `limit` hits (the API caps a single request at
/// 50).
pub async fn search<S: AsRef<str>>(
    client: &WikiClient,
    terms: S,
    limit: u16,
) -> Result<Vec<SearchHit>, FetchError> {
    let mut url = build_wiki_url()?;
    url.query_pairs_mut()
        .append_pair("list", "search")
        .append_pair("srsearch", terms.as_ref())
        .append_pair("srlimit", &limit.clamp(1, 50).to_string())
        .finish();

    let response = client.get(url).send().await?.json::<WikiResponse>().await?;
    Ok(response.query.search)
}

/// Resolve a title to an [`Article`].
///
/// Tries the exact title first (redirects are followed server side). When the
/// page is missing and `fall_back` is set, runs a search and recursively
/// tries the top hits, without a second level of fallback.
#[async_recursion]
pub async fn resolve_article(
    client: WikiClient,
    title: String,
    fall_back: bool,
) -> Result<Article, FetchError> {
    log::debug!("Resolving {:?}", title);
    let pages = get_pages(&client, &[title.as_str()]).await?;
    if let Some(page) = pages.iter().find(|p| !p.missing)
        && let Some(content) = page.content()
    {
        let mut article = Article::new(content);
        article.set_title(Some(page.title.clone()));
        return Ok(article);
    }

    if fall_back {
        log::debug!("No page named {:?}, searching instead", title);
        for hit in search(&client, &title, 3).await? {
            match resolve_article(client.clone(), hit.title, false).await {
                Ok(article) => return Ok(article),
                Err(e) => log::debug!("Search candidate failed: {:?}", e),
            }
        }
    }

    Err(format!("No article found for {:?}", title).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wiki_url_carries_the_query_basics() {
        let url = build_wiki_url().unwrap();
        let query = url.query().unwrap();
        assert!(query.contains("action=query"));
        assert!(query.contains("format=json"));
        assert!(query.contains("formatversion=2"));
    }

    #[test]
    fn small_title_lists_stay_one_batch() {
        let batches = batch_titles(&["Rust", "Wikipedia", "Tokio"]);
        assert_eq!(batches, vec!["Rust|Wikipedia|Tokio".to_owned()]);
    }

    #[test]
    fn oversized_title_lists_are_split() {
        let titles: Vec<String> = (0..60).map(|i| format!("Page_{}", i)).collect();
        let batches = batch_titles(&titles);
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].split('|').count(), 50);
        assert_eq!(batches[1].split('|').count(), 10);
    }
}
