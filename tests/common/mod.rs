#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use itembank::detail::DetailRecord;
use itembank::remote::{FilterCatalog, HealthStatus, LabeledKey, ListResponse, RowProjection};
use itembank::{ExplorerError, ItemSource, QueryPair, Result, to_query_string};
use parking_lot::Mutex;
use tempfile::TempDir;

/// In-memory item source.
///
/// Serves `total` synthetic rows, records every list query and can be
/// scripted to delay or fail responses. Each row's `name` is the query
/// string that produced it, so tests can tell which response landed.
pub struct FakeSource {
    total: Mutex<u64>,
    queries: Mutex<Vec<Vec<QueryPair>>>,
    delays: Mutex<VecDeque<Duration>>,
    failing: AtomicBool,
    details: Mutex<HashMap<i64, DetailRecord>>,
}

impl FakeSource {
    pub fn new(total: u64) -> Arc<Self> {
        Arc::new(Self {
            total: Mutex::new(total),
            queries: Mutex::new(Vec::new()),
            delays: Mutex::new(VecDeque::new()),
            failing: AtomicBool::new(false),
            details: Mutex::new(HashMap::new()),
        })
    }

    pub fn set_total(&self, total: u64) {
        *self.total.lock() = total;
    }

    /// Delay the next list responses, one entry per call.
    pub fn script_delays(&self, delays: &[Duration]) {
        self.delays.lock().extend(delays.iter().copied());
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn add_detail(&self, record: DetailRecord) {
        self.details.lock().insert(record.id, record);
    }

    pub fn list_calls(&self) -> usize {
        self.queries.lock().len()
    }

    pub fn last_query(&self) -> Vec<QueryPair> {
        self.queries.lock().last().cloned().unwrap_or_default()
    }

    pub fn last_query_string(&self) -> String {
        to_query_string(&self.last_query())
    }

    pub fn query_strings(&self) -> Vec<String> {
        self.queries.lock().iter().map(|q| to_query_string(q)).collect()
    }
}

pub fn param<'a>(query: &'a [QueryPair], key: &str) -> Option<&'a str> {
    query
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v.as_str())
}

pub fn params<'a>(query: &'a [QueryPair], key: &str) -> Vec<&'a str> {
    query
        .iter()
        .filter(|(k, _)| *k == key)
        .map(|(_, v)| v.as_str())
        .collect()
}

fn server_error(path: &str) -> ExplorerError {
    ExplorerError::Status {
        status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        url: format!("http://fake{path}"),
        message: String::new(),
    }
}

impl ItemSource for FakeSource {
    async fn list_items(&self, query: &[QueryPair]) -> Result<ListResponse> {
        self.queries.lock().push(query.to_vec());
        let delay = self.delays.lock().pop_front();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(server_error("/api/items"));
        }

        let page: u64 = param(query, "page").and_then(|p| p.parse().ok()).unwrap_or(1);
        let size: u64 = param(query, "page_size")
            .and_then(|p| p.parse().ok())
            .unwrap_or(25);
        let total = *self.total.lock();
        let first = (page - 1) * size + 1;
        let last = (page * size).min(total);
        let marker = to_query_string(query);

        let items = (first..=last)
            .map(|id| RowProjection {
                id: id as i64,
                label: Some(format!("M{id}")),
                name: Some(marker.clone()),
                source: Some("PISA".to_string()),
                item_type: Some("MC".to_string()),
                level: Some("G6".to_string()),
                dominant_content_area: None,
                meanp: Some(0.5),
                a_irt: Some(1.0),
                meanrit: Some(0.4),
            })
            .collect();

        Ok(ListResponse {
            page: Some(page as u32),
            page_size: Some(size as u32),
            total,
            total_pages: None,
            items,
        })
    }

    async fn fetch_item(&self, id: i64) -> Result<DetailRecord> {
        let record = self.details.lock().get(&id).cloned();
        record.ok_or_else(|| ExplorerError::Status {
            status: reqwest::StatusCode::NOT_FOUND,
            url: format!("http://fake/api/items/{id}"),
            message: "Item not found".to_string(),
        })
    }

    async fn fetch_filters(&self) -> Result<FilterCatalog> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(server_error("/api/filters"));
        }
        Ok(FilterCatalog {
            item_types: vec!["MC".to_string(), "OE".to_string()],
            hierarchical_levels: vec!["G3".to_string(), "G6".to_string()],
            nuta_skill_levels: vec!["1".to_string(), "2".to_string()],
            sources: vec!["PISA".to_string()],
            content_areas: vec![LabeledKey {
                key: "s2".to_string(),
                label: "S2 Numbers & Operations".to_string(),
            }],
            target_areas: vec![],
        })
    }

    async fn health(&self) -> Result<HealthStatus> {
        Ok(HealthStatus {
            status: "ok".to_string(),
            detail: None,
        })
    }
}

/// Let spawned tasks run without advancing time.
pub async fn settle() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}

/// Runs the `itembank` binary against an isolated config and data directory.
pub struct ItembankTest {
    pub temp_dir: TempDir,
    binary_path: PathBuf,
}

impl ItembankTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let storage = temp_dir.path().join("data");
        fs::write(
            temp_dir.path().join("config.yaml"),
            format!(
                "api_url: http://127.0.0.1:9\nrequest_timeout: 2\nstorage_dir: {}\n",
                storage.display()
            ),
        )
        .expect("Failed to write config");

        ItembankTest {
            temp_dir,
            binary_path: PathBuf::from(env!("CARGO_BIN_EXE_itembank")),
        }
    }

    pub fn storage_file(&self) -> PathBuf {
        self.temp_dir.path().join("data").join("itembank.filters.v1.json")
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(&self.binary_path)
            .args(args)
            .env("ITEMBANK_CONFIG", self.temp_dir.path().join("config.yaml"))
            .env_remove("ITEMBANK_API_URL")
            .env_remove("RUST_LOG")
            .current_dir(self.temp_dir.path())
            .output()
            .expect("Failed to execute itembank command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Command {:?} should have failed\nstdout: {}",
            args,
            String::from_utf8_lossy(&output.stdout)
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }
}
