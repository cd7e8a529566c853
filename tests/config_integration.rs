//! Integration tests for the fourfold-config crate.

use std::fs;
use std::time::{Duration, Instant};

use fourfold_config::{Config, ConfigError};
use fourfold_protocol::{ArticleTable, Slideshow, WordOmitter};
use tempfile::TempDir;

#[tokio::test]
async fn config_load_from_json5_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("fourfold.json5");

    fs::write(
        &config_path,
        r#"
        {
            // Configuration for fourfold
            word_omitter: {
                debounce_ms: 300,
                stop_words: ["The", "of", "a"],
            },
            slideshow: {
                transition_ms: 100,
                settle_ms: 20,
                slides: [
                    { title: "Intro", text: "Hello" },
                    { title: "Outro", text: "Bye" },
                ],
            },
            articles: [
                { title: "Old", upvotes: 50, date: "2023-01-05" },
                { title: "New", upvotes: 10, date: "2024-11-30" },
            ],
        }
        "#,
    )
    .unwrap();

    let config = Config::load_from(&config_path).unwrap();

    assert_eq!(config.word_omitter.debounce_ms, 300);
    assert_eq!(config.word_omitter.settle_ms, 50);
    assert_eq!(config.slideshow.slides.len(), 2);
    assert_eq!(config.articles.len(), 2);
    assert!(!config.logging.is_enabled());
}

#[tokio::test]
async fn configured_data_drives_widgets() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.json");

    fs::write(
        &config_path,
        r#"{
            "word_omitter": { "debounce_ms": 300, "stop_words": ["The", "of"] },
            "slideshow": { "transition_ms": 100, "settle_ms": 20, "slides": [
                { "title": "Intro", "text": "Hello" },
                { "title": "Outro", "text": "Bye" }
            ] },
            "articles": [
                { "title": "Old", "upvotes": 50, "date": "2023-01-05" },
                { "title": "New", "upvotes": 10, "date": "2024-11-30" }
            ]
        }"#,
    )
    .unwrap();
    let config = Config::load_from(&config_path).unwrap();

    let mut table = ArticleTable::new(config.articles.clone());
    assert_eq!(table.displayed().next().unwrap().title, "Old");
    table.sort_by_date();
    assert_eq!(table.displayed().next().unwrap().title, "New");

    let start = Instant::now();
    let mut omitter =
        WordOmitter::with_delays(config.word_omitter.stop_words(), config.word_omitter.delays());
    omitter.set_input("the state of the art", start);
    assert!(!omitter.tick(start + Duration::from_millis(299)));
    assert!(omitter.tick(start + Duration::from_millis(300)));
    assert_eq!(omitter.output(), "state art");

    let mut show =
        Slideshow::with_delays(config.slideshow.slides.clone(), config.slideshow.delays())
            .unwrap();
    assert!(show.next(start));
    show.tick(start + Duration::from_millis(100));
    assert_eq!(show.current_slide().title, "Outro");
    assert!(show.is_transitioning());
    show.tick(start + Duration::from_millis(120));
    assert!(!show.is_transitioning());
}

#[tokio::test]
async fn config_load_nonexistent_file_fails() {
    let dir = TempDir::new().unwrap();
    let result = Config::load_from(dir.path().join("missing.json5"));

    assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
}

#[tokio::test]
async fn config_invalid_json5_fails() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("invalid.json5");

    fs::write(&config_path, "{ this is not valid json5 }").unwrap();

    let result = Config::load_from(&config_path);
    assert!(matches!(result, Err(ConfigError::ParseJson5(_))));
}

#[tokio::test]
async fn config_zero_delay_fails_validation() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.json5");

    fs::write(&config_path, "{ slideshow: { transition_ms: 0 } }").unwrap();

    let err = Config::load_from(&config_path).unwrap_err();
    assert!(err.to_string().contains("slideshow.transition_ms"));
}

#[tokio::test]
async fn config_accepts_negative_upvotes() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.json5");

    fs::write(
        &config_path,
        r#"{ articles: [
            { title: "Buried", upvotes: -3, date: "2024-02-01" },
            { title: "Fresh", upvotes: 0, date: "2024-01-01" },
        ] }"#,
    )
    .unwrap();

    let config = Config::load_from(&config_path).unwrap();
    assert_eq!(config.articles[0].upvotes, -3);

    let table = ArticleTable::new(config.articles.clone());
    let titles: Vec<&str> = table.displayed().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, ["Fresh", "Buried"]);
}
