//! Scenario tests against the live archive
//!
//! Ignored by default: they need network access and depend on two works
//! staying up. Run with `cargo test -- --ignored` when online.

use ao3_fetch::batch::fetch_work;
use ao3_fetch::config::FetcherConfig;
use ao3_fetch::fetch::build_http_client;
use ao3_fetch::site;

#[tokio::test]
#[ignore]
async fn test_live_single_chapter_work() -> anyhow::Result<()> {
    let client = build_http_client(&FetcherConfig::default())?;
    let work = fetch_work(&client, site::SITE_ORIGIN, "79906886").await?;

    assert_eq!(work.chapters_fetched, 1);
    assert_eq!(work.total_chapters, 1);
    assert!(!work.title.is_empty());
    assert!(!work.author.is_empty());

    Ok(())
}

#[tokio::test]
#[ignore]
async fn test_live_two_chapter_work() -> anyhow::Result<()> {
    let client = build_http_client(&FetcherConfig::default())?;
    let work = fetch_work(&client, site::SITE_ORIGIN, "79779056").await?;

    assert_eq!(work.chapters_fetched, 2);
    assert_eq!(work.total_chapters, 2);

    let ids: Vec<&str> = work.chapters.iter().map(|c| c.chapter_id.as_str()).collect();
    assert_eq!(ids, ["1", "2"]);

    Ok(())
}
