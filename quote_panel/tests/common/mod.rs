//! One-shot HTTP server answering a single request with a canned response.
#![allow(dead_code)]

use crossbeam_channel::{Receiver, unbounded};
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

/// Serve one request with `status` (e.g. `"200 OK"`) and a JSON `body`.
///
/// Returns the base URL and a channel yielding the request line that was
/// received.
pub fn serve_once(status: &str, body: &str) -> (String, Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let (request_tx, request_rx) = unbounded();
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let size = stream.read(&mut chunk).unwrap();
            if size == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..size]);
            if request.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        let request = String::from_utf8_lossy(&request);
        let request_line = request.lines().next().unwrap_or_default().to_string();
        let _ = request_tx.send(request_line);
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
    });

    (base_url, request_rx)
}

/// Base URL of a port nobody listens on.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// HTTP source for `base_url` that ignores any proxy configured in the
/// environment.
pub fn local_source(base_url: &str) -> quote_panel::HttpQuoteSource {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    quote_panel::HttpQuoteSource::with_client(client, base_url).unwrap()
}
