//! Minimal HTTP/1.1 server for integration tests.
//!
//! Answers GET with a fixed status per raw request path (404 for anything
//! unknown) and records every request line path and Cookie header. Bytes
//! that are not a plain-text request (e.g. a TLS ClientHello) get a 400,
//! like a real plain-HTTP server would send.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeenRequest {
    pub method: String,
    pub path: String,
    pub cookie: Option<String>,
}

pub struct StatusServer {
    /// `127.0.0.1:<port>`
    pub host: String,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

impl StatusServer {
    pub fn seen(&self) -> Vec<SeenRequest> {
        self.seen.lock().unwrap().clone()
    }

    pub fn seen_paths(&self) -> Vec<String> {
        self.seen().into_iter().map(|r| r.path).collect()
    }
}

/// Starts a server in a background thread. `routes` maps request paths (as
/// sent on the wire, i.e. percent-encoded) to a status line such as
/// `"200 OK"`. The server runs until the process exits.
pub fn start(routes: &[(&str, &str)]) -> StatusServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes: Arc<HashMap<String, String>> = Arc::new(
        routes
            .iter()
            .map(|(p, s)| (p.to_string(), s.to_string()))
            .collect(),
    );
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_srv = Arc::clone(&seen);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            let seen = Arc::clone(&seen_srv);
            thread::spawn(move || handle(stream, &routes, &seen));
        }
    });
    StatusServer {
        host: format!("127.0.0.1:{}", port),
        seen,
    }
}

fn handle(
    mut stream: std::net::TcpStream,
    routes: &HashMap<String, String>,
    seen: &Mutex<Vec<SeenRequest>>,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) if s.starts_with(|c: char| c.is_ascii_uppercase()) => s,
        _ => {
            let _ = stream.write_all(
                b"HTTP/1.1 400 Bad Request\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            );
            return;
        }
    };
    let req = parse_request(request);
    let status = routes
        .get(&req.path)
        .cloned()
        .unwrap_or_else(|| "404 Not Found".to_string());
    seen.lock().unwrap().push(req);

    let body: &[u8] = if status.starts_with('2') {
        b"backup contents\n"
    } else {
        b""
    };
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(body);
}

fn parse_request(request: &str) -> SeenRequest {
    let mut lines = request.lines();
    let mut first = lines.next().unwrap_or("").split_whitespace();
    let method = first.next().unwrap_or("").to_string();
    let path = first.next().unwrap_or("").to_string();
    let mut cookie = None;
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("cookie") {
                cookie = Some(value.trim().to_string());
            }
        }
    }
    SeenRequest {
        method,
        path,
        cookie,
    }
}
