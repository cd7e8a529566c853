//! Article list with re-derivable sort orders.
//!
//! The table keeps the articles exactly as supplied and exposes a displayed
//! ordering on top of them. Every sort command recomputes that ordering from
//! the untouched source list, so the result never depends on which sort ran
//! before.

use std::cmp::Reverse;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ProtocolError, Result};

/// Date format accepted by [`Article::new`].
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single article row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Article {
    /// Article title.
    pub title: String,
    /// Number of upvotes.
    pub upvotes: i64,
    /// Publication date.
    pub date: NaiveDate,
}

impl Article {
    /// Creates an article, parsing `date` as a `YYYY-MM-DD` calendar date.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::InvalidDate`] if the date cannot be parsed.
    ///
    /// # Examples
    ///
    /// ```
    /// use fourfold_protocol::Article;
    ///
    /// let article = Article::new("Hello", 3, "2024-03-15").unwrap();
    /// assert_eq!(article.date.to_string(), "2024-03-15");
    /// assert!(Article::new("Broken", 1, "15/03/2024").is_err());
    /// ```
    pub fn new(title: impl Into<String>, upvotes: i64, date: &str) -> Result<Self> {
        let parsed =
            NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|source| {
                ProtocolError::InvalidDate {
                    value: date.to_owned(),
                    source,
                }
            })?;
        Ok(Self::with_date(title, upvotes, parsed))
    }

    /// Creates an article from an already parsed date.
    #[must_use]
    pub fn with_date(title: impl Into<String>, upvotes: i64, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            upvotes,
            date,
        }
    }
}

/// The key the displayed ordering is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Most upvoted first.
    #[default]
    Upvotes,
    /// Most recent first.
    Date,
}

impl SortKey {
    /// Returns the button label for this key.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Upvotes => "Most Upvoted",
            Self::Date => "Most Recent",
        }
    }
}

/// The article sort widget state.
///
/// # Examples
///
/// ```
/// use fourfold_protocol::{Article, ArticleTable};
///
/// let mut table = ArticleTable::new(vec![
///     Article::new("Old but popular", 10, "2024-01-01").unwrap(),
///     Article::new("New", 2, "2024-02-01").unwrap(),
/// ]);
/// assert_eq!(table.displayed().next().unwrap().title, "Old but popular");
///
/// table.sort_by_date();
/// assert_eq!(table.displayed().next().unwrap().title, "New");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTable {
    original: Vec<Article>,
    /// Permutation of indices into `original`.
    order: Vec<usize>,
    sort_key: SortKey,
}

impl ArticleTable {
    /// Creates a table from the caller's articles, sorted by upvotes.
    #[must_use]
    pub fn new(articles: Vec<Article>) -> Self {
        let mut table = Self {
            order: Vec::with_capacity(articles.len()),
            original: articles,
            sort_key: SortKey::Upvotes,
        };
        table.sort_by(SortKey::Upvotes);
        table
    }

    /// Re-sorts the displayed ordering by upvotes, descending.
    pub fn sort_by_upvotes(&mut self) {
        self.sort_by(SortKey::Upvotes);
    }

    /// Re-sorts the displayed ordering by date, most recent first.
    pub fn sort_by_date(&mut self) {
        self.sort_by(SortKey::Date);
    }

    /// Re-derives the displayed ordering from the source list.
    ///
    /// The sort is stable with respect to the source order.
    pub fn sort_by(&mut self, key: SortKey) {
        let original = &self.original;
        let mut order: Vec<usize> = (0..original.len()).collect();
        match key {
            SortKey::Upvotes => order.sort_by_key(|&i| Reverse(original[i].upvotes)),
            SortKey::Date => order.sort_by_key(|&i| Reverse(original[i].date)),
        }
        self.order = order;
        self.sort_key = key;
        debug!(?key, rows = self.order.len(), "articles re-sorted");
    }

    /// Returns the key of the current ordering.
    #[must_use]
    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    /// Returns the articles as supplied at construction.
    #[must_use]
    pub fn original(&self) -> &[Article] {
        &self.original
    }

    /// Iterates the articles in displayed order.
    pub fn displayed(&self) -> impl ExactSizeIterator<Item = &Article> + '_ {
        self.order.iter().map(|&i| &self.original[i])
    }

    /// Returns the number of articles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.original.len()
    }

    /// Returns whether the table has no articles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }
}

const fn sample_date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid sample article date"),
    }
}

const SAMPLE_ARTICLES: [(&str, i64, NaiveDate); 6] = [
    ("Understanding React Hooks", 245, sample_date(2024, 3, 15)),
    ("JavaScript ES6 Features", 189, sample_date(2024, 3, 20)),
    ("CSS Grid vs Flexbox", 156, sample_date(2024, 3, 12)),
    ("Node.js Best Practices", 298, sample_date(2024, 3, 18)),
    ("TypeScript for Beginners", 167, sample_date(2024, 3, 22)),
    ("Building RESTful APIs", 203, sample_date(2024, 3, 10)),
];

/// Returns the sample articles shown when no data is configured.
#[must_use]
pub fn sample_articles() -> Vec<Article> {
    SAMPLE_ARTICLES
        .into_iter()
        .map(|(title, upvotes, date)| Article::with_date(title, upvotes, date))
        .collect()
}
