//! Splits a legacy rules blob into raw rule records.
//!
//! A record starts at an occurrence of the sentinel and runs up to the next
//! occurrence (or the end of the buffer). Text before the first sentinel is
//! header noise and never emitted. Records matching any [`SkipPredicate`] are
//! dropped before the caller sees them.

use tracing::debug;

use crate::config::SegmenterConfig;
use crate::error::{MigrationError, Result};

/// Decides whether a raw record should be left out of the migration.
pub trait SkipPredicate {
    /// Short description for logging.
    fn name(&self) -> &str;

    /// Whether `record` should be skipped.
    fn should_skip(&self, record: &str) -> bool;
}

/// Skips records containing a literal token anywhere in their text.
#[derive(Debug, Clone)]
pub struct ContainsToken {
    token: String,
}

impl ContainsToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl SkipPredicate for ContainsToken {
    fn name(&self) -> &str {
        &self.token
    }

    fn should_skip(&self, record: &str) -> bool {
        record.contains(&self.token)
    }
}

/// Build the skip predicates described by the config.
pub fn configured_predicates(config: &SegmenterConfig) -> Vec<Box<dyn SkipPredicate>> {
    if !config.skip_experimental {
        return Vec::new();
    }
    config
        .skip_tokens
        .iter()
        .map(|token| Box::new(ContainsToken::new(token.as_str())) as Box<dyn SkipPredicate>)
        .collect()
}

/// Lazy, single-pass iterator over the accepted raw records of a buffer.
///
/// Yields `Err` once if the scan fails to move forward, then stops.
pub struct Segmenter<'a> {
    input: &'a str,
    sentinel: String,
    predicates: Vec<Box<dyn SkipPredicate>>,
    /// Start of the next record; `None` until the first sentinel is found
    cursor: Option<usize>,
    started: bool,
    finished: bool,
    skipped: usize,
}

impl<'a> Segmenter<'a> {
    /// Create a segmenter without skip predicates.
    pub fn new(input: &'a str, sentinel: impl Into<String>) -> Self {
        Self {
            input,
            sentinel: sentinel.into(),
            predicates: Vec::new(),
            cursor: None,
            started: false,
            finished: false,
            skipped: 0,
        }
    }

    /// Create a segmenter from the segmenter config section.
    pub fn from_config(input: &'a str, config: &SegmenterConfig) -> Self {
        Self::new(input, config.sentinel.as_str()).with_predicates(configured_predicates(config))
    }

    /// Replace the skip predicates.
    pub fn with_predicates(mut self, predicates: Vec<Box<dyn SkipPredicate>>) -> Self {
        self.predicates = predicates;
        self
    }

    /// Number of records dropped by skip predicates so far.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Next raw record before skip filtering.
    fn next_raw(&mut self) -> Option<Result<&'a str>> {
        if self.finished {
            return None;
        }

        let input = self.input;
        if !self.started {
            self.started = true;
            self.cursor = input.find(self.sentinel.as_str());
        }

        let Some(cursor) = self.cursor else {
            self.finished = true;
            return None;
        };

        let from = cursor + self.sentinel.len();
        let next = input
            .get(from..)
            .and_then(|rest| rest.find(self.sentinel.as_str()))
            .map(|offset| from + offset);

        match next {
            Some(next) if next <= cursor => {
                self.finished = true;
                Some(Err(MigrationError::SentinelStalled {
                    sentinel: self.sentinel.clone(),
                    cursor,
                }))
            }
            Some(next) => {
                self.cursor = Some(next);
                Some(Ok(&input[cursor..next]))
            }
            None => {
                self.finished = true;
                Some(Ok(&input[cursor..]))
            }
        }
    }

    fn skip_reason(&self, record: &str) -> Option<&str> {
        self.predicates
            .iter()
            .find(|predicate| predicate.should_skip(record))
            .map(|predicate| predicate.name())
    }
}

impl<'a> Iterator for Segmenter<'a> {
    type Item = Result<&'a str>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let record = match self.next_raw()? {
                Ok(record) => record,
                Err(e) => return Some(Err(e)),
            };

            match self.skip_reason(record) {
                Some(reason) => {
                    debug!(reason, len = record.len(), "skipping legacy rule");
                    self.skipped += 1;
                }
                None => return Some(Ok(record)),
            }
        }
    }
}

impl std::iter::FusedIterator for Segmenter<'_> {}
