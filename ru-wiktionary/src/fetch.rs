//! Page retrieval from ru.wiktionary.org.

use rand::seq::IndexedRandom;
use reqwest::Url;

const BASE_URL: &str = "https://ru.wiktionary.org/wiki/";

// Wiktionary quietly drops requests from the default client user agent, so
// each request borrows a browser identity.
const USER_AGENTS: [&str; 10] = [
    "Mozilla/5.0 (Windows; U; Windows NT 5.1; it; rv:1.8.1.11) Gecko/20071127 Firefox/2.0.0.11",
    "Opera/9.25 (Windows NT 5.1; U; en)",
    "Mozilla/4.0 (compatible; MSIE 6.0; Windows NT 5.1; SV1; .NET CLR 1.1.4322; .NET CLR 2.0.50727)",
    "Mozilla/5.0 (compatible; Konqueror/3.5; Linux) KHTML/3.5.5 (like Gecko) (Kubuntu)",
    "Mozilla/5.0 (Windows NT 5.1) AppleWebKit/535.19 (KHTML, like Gecko) Chrome/18.0.1025.142 Safari/535.19",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.7; rv:11.0) Gecko/20100101 Firefox/11.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.6; rv:8.0.1) Gecko/20100101 Firefox/8.0.1",
    "Mozilla/5.0 (Windows NT 6.1; WOW64) AppleWebKit/535.19 (KHTML, like Gecko) Chrome/18.0.1025.151 Safari/535.19",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/42.0.2311.135 Safari/537.36 Edge/12.246",
    "Mozilla/5.0 (X11; CrOS x86_64 8172.45.0) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/51.0.2704.64 Safari/537.36",
];

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("could not build a page url for {lemma:?}")]
    BadUrl { lemma: String },
    #[error("page unavailable: {0}")]
    Unavailable(#[from] reqwest::Error),
}

/// The dictionary page URL for a lemma, with the lemma percent-encoded.
pub fn page_url(lemma: &str) -> Result<Url, FetchError> {
    Url::parse(BASE_URL)
        .and_then(|base| base.join(lemma))
        .map_err(|_| FetchError::BadUrl {
            lemma: lemma.to_string(),
        })
}

/// Downloads the dictionary page for a lemma and returns its raw HTML.
pub async fn fetch_page(lemma: &str) -> Result<String, FetchError> {
    let url = page_url(lemma)?;
    let agent = USER_AGENTS
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(USER_AGENTS[0]);
    let client = reqwest::Client::builder().user_agent(agent).build()?;
    log::debug!("fetching {url}");
    let response = client.get(url).send().await?.error_for_status()?;
    Ok(response.text().await?)
}
