#![allow(dead_code)]

use mcp_sonarr::{SonarrClient, SonarrConfig};
use serde_json::{json, Value};
use std::io;
use std::sync::{Arc, Mutex};
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "0123456789abcdef0123456789abcdef";

pub struct TestEnvironment {
    pub server: MockServer,
    pub client: SonarrClient,
}

impl TestEnvironment {
    /// Mock Sonarr plus a client configured against it.
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let config = SonarrConfig::new(server.uri(), TEST_API_KEY).with_debug(true);
        Self {
            client: SonarrClient::new(config),
            server,
        }
    }

    /// Mock Sonarr with a client built from `build(mock_uri)`.
    pub async fn with_config(build: impl FnOnce(String) -> SonarrConfig) -> Self {
        let server = MockServer::start().await;
        let config = build(server.uri());
        Self {
            client: SonarrClient::new(config),
            server,
        }
    }

    pub async fn received_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or(0)
    }
}

/// Base URL nothing listens on.
pub fn unreachable_config() -> SonarrConfig {
    SonarrConfig::new("http://127.0.0.1:1", TEST_API_KEY)
}

pub fn sample_series() -> Value {
    json!({
        "id": 133,
        "title": "Breaking Bad",
        "sortTitle": "breaking bad",
        "status": "ended",
        "ended": true,
        "overview": "A high school chemistry teacher turned methamphetamine producer.",
        "network": "AMC",
        "airTime": "21:00",
        "images": [
            { "coverType": "poster", "url": "/MediaCover/133/poster.jpg", "remoteUrl": "https://artworks.thetvdb.com/banners/posters/81189-10.jpg" }
        ],
        "seasons": [
            { "seasonNumber": 0, "monitored": false },
            { "seasonNumber": 1, "monitored": true, "statistics": { "episodeFileCount": 7, "episodeCount": 7, "totalEpisodeCount": 7, "sizeOnDisk": 10737418240i64, "percentOfEpisodes": 100.0 } }
        ],
        "year": 2008,
        "path": "/tv/Breaking Bad",
        "qualityProfileId": 1,
        "seasonFolder": true,
        "monitored": true,
        "runtime": 47,
        "tvdbId": 81189,
        "tvRageId": 18164,
        "tvMazeId": 169,
        "imdbId": "tt0903747",
        "seriesType": "standard",
        "genres": ["Crime", "Drama", "Thriller"],
        "tags": [1, 3],
        "added": "2021-03-14T09:26:53Z",
        "ratings": { "votes": 31714, "value": 9.4 },
        "statistics": { "seasonCount": 5, "episodeFileCount": 62, "episodeCount": 62, "sizeOnDisk": 96636764160i64, "percentOfEpisodes": 100.0 },
        "certification": null
    })
}

/// Collects formatted tracing output for the current thread.
#[derive(Clone, Default)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    /// Starts capturing at debug level until the guard is dropped.
    pub fn start() -> (Self, DefaultGuard) {
        let capture = Self::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(capture.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);
        (capture, guard)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().unwrap()).into_owned()
    }

    pub fn count_lines(&self, needle: &str) -> usize {
        self.contents().lines().filter(|line| line.contains(needle)).count()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

pub fn init_test_logging() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}
