use chrono::NaiveDateTime;
use derive_more::Display;
use regex::Regex;
use std::{cmp::Reverse, sync::LazyLock};

use crate::{
    errors::TimestampError,
    invariants::{Hour, Percentage},
    models::LogEntry,
};

pub const TIMESTAMP_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

static IMAGE_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(jpg|gif|png)$").expect("valid image pattern"));

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Browser {
    Firefox,
    Chrome,
    Safari,
    #[display("Internet Explorer")]
    InternetExplorer,
}

impl Browser {
    /// Declaration order doubles as match priority and tie-break order.
    pub const ALL: [Browser; 4] = [
        Self::Firefox,
        Self::Chrome,
        Self::Safari,
        Self::InternetExplorer,
    ];

    pub fn try_from_user_agent(agent: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|browser| agent.contains(browser.marker()))
    }
    fn marker(self) -> &'static str {
        match self {
            Self::Firefox => "Firefox",
            Self::Chrome => "Chrome",
            Self::Safari => "Safari",
            Self::InternetExplorer => "MSIE",
        }
    }
    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Default)]
pub struct ImageHits {
    images: usize,
    total: usize,
}

impl ImageHits {
    pub fn record_path(&mut self, path: &str) {
        self.total += 1;
        if IMAGE_PATH.is_match(path) {
            self.images += 1;
        }
    }
    pub fn images(&self) -> usize {
        self.images
    }
    pub fn percentage(&self) -> Percentage {
        Percentage::of(self.images, self.total)
    }
}

#[derive(Debug, Default)]
pub struct BrowserTally {
    counts: [usize; Browser::ALL.len()],
}

impl BrowserTally {
    pub fn record_user_agent(&mut self, agent: &str) {
        if let Some(browser) = Browser::try_from_user_agent(agent) {
            self.counts[browser.index()] += 1;
        }
    }
    pub fn count(&self, browser: Browser) -> usize {
        self.counts[browser.index()]
    }
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
    pub fn most_popular(&self) -> Browser {
        let mut best = Browser::Firefox;
        for browser in Browser::ALL {
            if self.count(browser) > self.count(best) {
                best = browser;
            }
        }
        best
    }
}

#[derive(Debug, Default)]
pub struct HourlyHits {
    counts: [usize; Hour::COUNT],
    rejected: Vec<TimestampError>,
}

impl HourlyHits {
    pub fn record_timestamp(&mut self, row: usize, raw: &str) {
        match NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT) {
            Ok(moment) => self.counts[Hour::from(moment).index()] += 1,
            Err(reason) => self.rejected.push(TimestampError {
                row,
                raw: raw.to_string(),
                reason,
            }),
        }
    }
    pub fn count(&self, hour: Hour) -> usize {
        self.counts[hour.index()]
    }
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
    pub fn rejected(&self) -> &[TimestampError] {
        &self.rejected
    }
    /// Every hour with its count, busiest first. Equal counts stay in hour order.
    pub fn ranked(&self) -> Vec<(Hour, usize)> {
        let mut hours: Vec<_> = Hour::all().map(|h| (h, self.count(h))).collect();
        hours.sort_by_key(|(_, count)| Reverse(*count));
        hours
    }
}

#[derive(Debug, Default)]
pub struct Analytics {
    entries: usize,
    image_hits: ImageHits,
    browsers: BrowserTally,
    hourly: HourlyHits,
}

impl Analytics {
    pub fn from_entries(entries: &[LogEntry]) -> Self {
        let mut analytics = Self::default();
        for (i, entry) in entries.iter().enumerate() {
            analytics.record(i + 1, entry);
        }
        analytics
    }
    pub fn record(&mut self, row: usize, entry: &LogEntry) {
        self.entries += 1;
        self.image_hits.record_path(&entry.path);
        self.browsers.record_user_agent(&entry.browser);
        self.hourly.record_timestamp(row, &entry.datetime);
    }

    pub fn entries(&self) -> usize {
        self.entries
    }
    pub fn image_hits(&self) -> &ImageHits {
        &self.image_hits
    }
    pub fn browsers(&self) -> &BrowserTally {
        &self.browsers
    }
    pub fn hourly(&self) -> &HourlyHits {
        &self.hourly
    }
}
