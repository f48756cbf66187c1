//! Test doubles and fixtures shared by the integration suites.

#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use essential_feed::observability::FeedMetrics;
use essential_feed::{
    CachedFeed, Error, FeedImage, FeedStore, HttpClient, HttpResponse, LocalFeedImage, Result,
};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;
use url::Url;
use uuid::Uuid;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn any_url() -> Url {
    Url::parse("https://any-url.com").expect("valid url")
}

pub fn any_error() -> Error {
    Error::StoreError("any error".to_string())
}

pub fn unique_image() -> FeedImage {
    FeedImage::new(
        Uuid::new_v4(),
        Some("any".to_string()),
        Some("any".to_string()),
        any_url(),
    )
}

/// Two unique images as models plus their storage representation.
pub fn unique_image_feed() -> (Vec<FeedImage>, Vec<LocalFeedImage>) {
    let models = vec![unique_image(), unique_image()];
    let locals = models.iter().map(LocalFeedImage::from).collect();
    (models, locals)
}

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 1, 31, 12, 0, 0).unwrap()
}

pub fn minus_feed_cache_max_age(date: DateTime<Utc>) -> DateTime<Utc> {
    date - Duration::days(7)
}

/// Clock that only moves when told to.
#[derive(Clone)]
pub struct TestClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl TestClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        TestClock {
            now: Arc::new(Mutex::new(now)),
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }

    pub fn advance(&self, by: Duration) {
        *self.now.lock().unwrap() += by;
    }

    pub fn closure(&self) -> impl Fn() -> DateTime<Utc> + Send + Sync + 'static {
        let clock = self.clone();
        move || clock.now()
    }
}

// ============================================================================
// HTTP doubles
// ============================================================================

type Completion = oneshot::Sender<Result<HttpResponse>>;

/// Records every request and leaves it pending until the test completes it.
#[derive(Clone, Default)]
pub struct HttpClientSpy {
    messages: Arc<Mutex<Vec<(Url, Option<Completion>)>>>,
}

impl HttpClientSpy {
    pub fn requested_urls(&self) -> Vec<Url> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .map(|(url, _)| url.clone())
            .collect()
    }

    /// Wait until request number `index` (0-based) has been issued.
    pub async fn wait_for_request(&self, index: usize) {
        while self.messages.lock().unwrap().len() <= index {
            tokio::task::yield_now().await;
        }
    }

    pub fn complete_with_error(&self, index: usize) {
        self.complete(index, Err(Error::Other("transport down".to_string())));
    }

    pub fn complete_with_status(&self, code: u16, data: Vec<u8>, index: usize) {
        self.complete(index, Ok(HttpResponse::new(code, data)));
    }

    fn complete(&self, index: usize, result: Result<HttpResponse>) {
        let sender = self.messages.lock().unwrap()[index].1.take();
        if let Some(sender) = sender {
            // The receiving load may be gone already
            let _ = sender.send(result);
        }
    }
}

impl HttpClient for HttpClientSpy {
    async fn get(&self, url: &Url) -> Result<HttpResponse> {
        let (tx, rx) = oneshot::channel();
        self.messages.lock().unwrap().push((url.clone(), Some(tx)));
        rx.await
            .unwrap_or_else(|_| Err(Error::Other("request abandoned".to_string())))
    }
}

/// Answers requests immediately from a queue of stubbed results.
#[derive(Clone, Default)]
pub struct HttpClientStub {
    results: Arc<Mutex<VecDeque<Result<HttpResponse>>>>,
    calls: Arc<AtomicUsize>,
}

impl HttpClientStub {
    pub fn with_results(results: Vec<Result<HttpResponse>>) -> Self {
        HttpClientStub {
            results: Arc::new(Mutex::new(results.into())),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl HttpClient for HttpClientStub {
    async fn get(&self, _url: &Url) -> Result<HttpResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(Error::Other("no stubbed response".to_string())))
    }
}

pub fn make_item(
    description: Option<&str>,
    location: Option<&str>,
    image_url: &str,
) -> (FeedImage, serde_json::Value) {
    let item = FeedImage::new(
        Uuid::new_v4(),
        description.map(str::to_string),
        location.map(str::to_string),
        Url::parse(image_url).expect("valid url"),
    );

    let mut json = serde_json::Map::new();
    json.insert("id".to_string(), item.id.to_string().into());
    if let Some(description) = &item.description {
        json.insert("description".to_string(), description.clone().into());
    }
    if let Some(location) = &item.location {
        json.insert("location".to_string(), location.clone().into());
    }
    json.insert("image".to_string(), item.url.to_string().into());

    (item, serde_json::Value::Object(json))
}

pub fn make_items_json(items: Vec<serde_json::Value>) -> Vec<u8> {
    serde_json::to_vec(&serde_json::json!({ "items": items })).expect("valid json")
}

// ============================================================================
// Store double
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub enum ReceivedMessage {
    DeleteCachedFeed,
    Insert(Vec<LocalFeedImage>, DateTime<Utc>),
    Retrieve,
}

/// Records store messages in order and answers with stubbed results.
///
/// Unstubbed operations succeed; retrieval defaults to an empty cache.
#[derive(Default)]
pub struct FeedStoreSpy {
    received: Mutex<Vec<ReceivedMessage>>,
    deletion_error: Mutex<Option<Error>>,
    insertion_error: Mutex<Option<Error>>,
    retrieval: Mutex<Option<Result<Option<CachedFeed>>>>,
}

impl FeedStoreSpy {
    pub fn received_messages(&self) -> Vec<ReceivedMessage> {
        self.received.lock().unwrap().clone()
    }

    pub fn stub_deletion_error(&self, error: Error) {
        *self.deletion_error.lock().unwrap() = Some(error);
    }

    pub fn stub_insertion_error(&self, error: Error) {
        *self.insertion_error.lock().unwrap() = Some(error);
    }

    pub fn stub_retrieval_error(&self, error: Error) {
        *self.retrieval.lock().unwrap() = Some(Err(error));
    }

    pub fn stub_retrieval_with_empty_cache(&self) {
        *self.retrieval.lock().unwrap() = Some(Ok(None));
    }

    pub fn stub_retrieval(&self, feed: Vec<LocalFeedImage>, timestamp: DateTime<Utc>) {
        *self.retrieval.lock().unwrap() = Some(Ok(Some(CachedFeed::new(feed, timestamp))));
    }

    fn record(&self, message: ReceivedMessage) {
        self.received.lock().unwrap().push(message);
    }
}

impl FeedStore for FeedStoreSpy {
    async fn delete_cached_feed(&self) -> Result<()> {
        self.record(ReceivedMessage::DeleteCachedFeed);
        match self.deletion_error.lock().unwrap().clone() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    async fn insert(&self, feed: Vec<LocalFeedImage>, timestamp: DateTime<Utc>) -> Result<()> {
        self.record(ReceivedMessage::Insert(feed, timestamp));
        match self.insertion_error.lock().unwrap().clone() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    async fn retrieve(&self) -> Result<Option<CachedFeed>> {
        self.record(ReceivedMessage::Retrieve);
        self.retrieval.lock().unwrap().clone().unwrap_or(Ok(None))
    }
}

// ============================================================================
// Metrics double
// ============================================================================

#[derive(Clone, Default)]
pub struct CountingMetrics {
    pub hits: Arc<AtomicUsize>,
    pub misses: Arc<AtomicUsize>,
    pub expired: Arc<AtomicUsize>,
    pub saves: Arc<AtomicUsize>,
    pub evictions: Arc<AtomicUsize>,
    pub remote_loads: Arc<AtomicUsize>,
    pub errors: Arc<Mutex<Vec<String>>>,
}

impl FeedMetrics for CountingMetrics {
    fn record_cache_hit(&self, _images: usize, _duration: std::time::Duration) {
        self.hits.fetch_add(1, Ordering::SeqCst);
    }

    fn record_cache_miss(&self, _duration: std::time::Duration) {
        self.misses.fetch_add(1, Ordering::SeqCst);
    }

    fn record_cache_expired(&self, _age: Duration) {
        self.expired.fetch_add(1, Ordering::SeqCst);
    }

    fn record_save(&self, _images: usize, _duration: std::time::Duration) {
        self.saves.fetch_add(1, Ordering::SeqCst);
    }

    fn record_eviction(&self, _reason: &str) {
        self.evictions.fetch_add(1, Ordering::SeqCst);
    }

    fn record_remote_load(&self, _images: usize, _duration: std::time::Duration) {
        self.remote_loads.fetch_add(1, Ordering::SeqCst);
    }

    fn record_error(&self, operation: &str, _error: &str) {
        self.errors.lock().unwrap().push(operation.to_string());
    }
}
