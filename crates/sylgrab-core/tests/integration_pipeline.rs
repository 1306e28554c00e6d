//! End-to-end pipeline tests against a local HTTP server.

mod common;

use common::page_server::{self, Route};
use std::collections::HashMap;
use std::fs;
use std::io::{Cursor, Read};
use std::path::Path;
use sylgrab_core::config::SylgrabConfig;
use sylgrab_core::download::DownloadStatus;
use sylgrab_core::error::PipelineError;
use sylgrab_core::pipeline::{run_pipeline, ProgressEvent};
use zip::ZipArchive;

const CSE101: &[u8] = b"%PDF-1.4 cse101 body";
const CSE102: &[u8] = b"%PDF-1.4 cse102 body";

fn routes(page: &str) -> HashMap<String, Route> {
    let mut routes = HashMap::new();
    routes.insert("/".to_string(), Route::ok(page.as_bytes().to_vec()));
    routes.insert("/docs/CSE101.pdf".to_string(), Route::ok(CSE101.to_vec()));
    routes.insert("/docs/CSE102.pdf".to_string(), Route::ok(CSE102.to_vec()));
    routes.insert("/docs/CSE404.pdf".to_string(), Route::status(404));
    routes
}

fn config(base: &str, dir: &Path) -> SylgrabConfig {
    SylgrabConfig {
        source_url: base.to_string(),
        download_dir: dir.to_path_buf(),
        keyword: "cse".to_string(),
        timeout_secs: 5,
        pause_millis: 0,
    }
}

fn archive_names(bytes: &[u8]) -> Vec<String> {
    let mut archive = ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
    let mut names: Vec<String> = (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect();
    names.sort();
    names
}

#[test]
fn full_run_downloads_and_archives() {
    let page = r#"
        <html><body>
          <a href="/docs/CSE101.pdf">CSE 101</a>
          <a href="/docs/ME201.pdf">ME 201</a>
          <a href="/docs/CSE404.pdf">CSE 404</a>
          <a href="/docs/CSE102.pdf">CSE 102</a>
          <a href="notes.txt">notes</a>
        </body></html>
    "#;
    let base = page_server::start(routes(page));
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("store");
    let cfg = config(&base, &dir);

    let mut events = Vec::new();
    let report = run_pipeline(&cfg, |event| {
        events.push(match event {
            ProgressEvent::LinksFound { count } => format!("found:{count}"),
            ProgressEvent::FileDone { index, total, outcome } => {
                format!("file:{index}/{total}:{:?}", outcome.status)
            }
        });
    })
    .unwrap();

    // ME201 and notes.txt are filtered out; document order is preserved.
    assert_eq!(report.links.len(), 3);
    assert_eq!(report.outcomes[0].status, DownloadStatus::Downloaded);
    assert_eq!(report.outcomes[1].status, DownloadStatus::Failed);
    assert_eq!(report.outcomes[2].status, DownloadStatus::Downloaded);
    assert_eq!(report.failed_count(), 1);
    assert!(report.outcomes[1].message.contains("HTTP 404"));

    // The failed file wrote nothing; successes are on disk, byte-identical.
    assert!(!dir.join("CSE404.pdf").exists());
    assert_eq!(fs::read(dir.join("CSE101.pdf")).unwrap(), CSE101);
    assert_eq!(fs::read(dir.join("CSE102.pdf")).unwrap(), CSE102);

    // Prior successes still make it into the archive despite the failure.
    let archive = report.archive.as_deref().expect("archive present");
    assert_eq!(
        archive_names(archive),
        ["cse_syllabus_pdfs/CSE101.pdf", "cse_syllabus_pdfs/CSE102.pdf"]
    );

    assert_eq!(
        events,
        [
            "found:3",
            "file:0/3:Downloaded",
            "file:1/3:Failed",
            "file:2/3:Downloaded"
        ]
    );
}

#[test]
fn second_run_short_circuits_on_presence() {
    let page = r#"<a href="/docs/CSE101.pdf">x</a>"#;
    let base = page_server::start(routes(page));
    let tmp = tempfile::tempdir().unwrap();
    let cfg = config(&base, tmp.path());

    let first = run_pipeline(&cfg, |_| {}).unwrap();
    assert_eq!(first.outcomes[0].status, DownloadStatus::Downloaded);

    let second = run_pipeline(&cfg, |_| {}).unwrap();
    assert_eq!(second.outcomes[0].status, DownloadStatus::AlreadyExists);
    assert_eq!(fs::read(tmp.path().join("CSE101.pdf")).unwrap(), CSE101);
    // An existing file still counts as available for archiving.
    assert!(second.archive.is_some());
}

#[test]
fn no_matching_links_halts_with_zero_downloads() {
    let page = r#"<a href="/docs/ME201.pdf">x</a><a href="notes.txt">y</a>"#;
    let base = page_server::start(routes(page));
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("store");
    let cfg = config(&base, &dir);

    let mut called = false;
    let err = run_pipeline(&cfg, |_| called = true).unwrap_err();
    assert!(matches!(err, PipelineError::NoMatchingLinks));
    assert!(!called);
    // The store dir was created but nothing was written or archived.
    assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);
}

#[test]
fn unreachable_page_is_a_fetch_error() {
    let mut routes = HashMap::new();
    routes.insert("/".to_string(), Route::status(503));
    let base = page_server::start(routes);
    let tmp = tempfile::tempdir().unwrap();
    let cfg = config(&base, tmp.path());

    let err = run_pipeline(&cfg, |_| {}).unwrap_err();
    match err {
        PipelineError::Fetch { url, source } => {
            assert_eq!(url, base);
            assert_eq!(source.to_string(), "HTTP 503");
        }
        other => panic!("expected Fetch error, got {other:?}"),
    }
}
