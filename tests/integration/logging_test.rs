//! Capability tokens stay out of the logs.

use std::io;
use std::sync::{Arc, Mutex};

use http::StatusCode;
use tracing::Level;

use crate::helpers::{TestApp, path_of};

/// In-memory log sink shared with the subscriber
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).to_string()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_signed_requests_never_log_token() {
    let logs = LogBuffer::default();
    let sink = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_ansi(false)
        .with_writer(move || sink.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let app = TestApp::new();
    let data = app.submit_job("Engineer", "poster@acme.example").await;
    let edit_url = data["edit_url"].as_str().unwrap().to_string();
    let token = edit_url.split_once("token=").unwrap().1.to_string();
    let job_id = data["job"]["id"].as_str().unwrap().to_string();

    let response = app.get(path_of(&edit_url)).await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .get(&format!("/jobs/{job_id}/edit?token=forged-capability-value"))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let output = logs.contents();
    assert!(output.contains(&format!("/jobs/{job_id}/edit")), "{output}");
    assert!(!output.contains(&token), "{output}");
    assert!(!output.contains("forged-capability-value"), "{output}");
}
