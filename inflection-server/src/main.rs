use axum::{extract::Path, routing::get, Json, Router};
use ru_grammar::InflectionCodes;
use ru_wiktionary::{fetch, InflectionReport, WiktionaryPage};
use std::sync::LazyLock;
use tower_http::cors::{Any, CorsLayer};

const PORT: u16 = 43561;

static CODES: LazyLock<InflectionCodes> = LazyLock::new(InflectionCodes::embedded);

/// Looks a lemma up on Wiktionary and returns its inflection report.
///
/// Fetch and parse failures both surface as the not-found report rather
/// than an HTTP error, so clients only ever deal with one error shape.
async fn serve_forms(Path(word): Path<String>) -> Json<InflectionReport> {
    let html = match fetch::fetch_page(&word).await {
        Ok(html) => html,
        Err(err) => {
            log::warn!("fetch failed for {word:?}: {err}");
            return Json(InflectionReport::not_found(&word));
        }
    };
    // The HTML tree is not Send, so all parsing happens after the fetch.
    let page = WiktionaryPage::from_html(&word, &html);
    Json(InflectionReport::from_page(&page, &CODES))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/forms/{word}", get(serve_forms))
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", PORT)).await?;
    println!("Listening on port {PORT}");
    axum::serve(listener, app).await?;
    Ok(())
}
