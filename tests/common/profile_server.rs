//! Minimal HTTP/1.1 server serving canned profile pages for integration tests.
//!
//! Each request path is looked up in a fixed route table; unknown paths get a
//! 404. Every requested path is recorded so tests can count lookups.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Route {
    pub status: u16,
    pub charset: &'static str,
    pub body: Vec<u8>,
}

impl Route {
    pub fn page(body: impl Into<String>) -> Self {
        Self::encoded(body.into().into_bytes(), "utf-8")
    }

    /// Raw body bytes served with the given `Content-Type` charset.
    pub fn encoded(body: Vec<u8>, charset: &'static str) -> Self {
        Self {
            status: 200,
            charset,
            body,
        }
    }

    pub fn profile(name: &str) -> Self {
        Self::page(format!(
            "<html><body><h1 class=\"project_title\"><a class=\"project_link\" href=\"#\">{name}</a></h1></body></html>"
        ))
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            charset: "utf-8",
            body: Vec::new(),
        }
    }
}

pub struct ProfileServer {
    pub base_url: String,
    hits: Arc<Mutex<Vec<String>>>,
}

impl ProfileServer {
    /// Paths requested so far, in arrival order.
    pub fn hits(&self) -> Vec<String> {
        self.hits.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread. Routes are keyed by request path
/// (e.g. "/users/alice"); `base_url` points at "/users/".
pub fn start(routes: Vec<(&str, Route)>) -> ProfileServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes: Arc<HashMap<String, Route>> = Arc::new(
        routes
            .into_iter()
            .map(|(path, route)| (path.to_string(), route))
            .collect(),
    );
    let hits = Arc::new(Mutex::new(Vec::new()));

    let server_hits = Arc::clone(&hits);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            let hits = Arc::clone(&server_hits);
            thread::spawn(move || handle(stream, &routes, &hits));
        }
    });

    ProfileServer {
        base_url: format!("http://127.0.0.1:{port}/users/"),
        hits,
    }
}

/// A base URL on a port nothing listens on.
pub fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}/users/")
}

fn handle(mut stream: TcpStream, routes: &HashMap<String, Route>, hits: &Mutex<Vec<String>>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));

    let mut request = Vec::new();
    let mut buf = [0u8; 4096];
    while !request.windows(4).any(|window| window == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }

    let request = String::from_utf8_lossy(&request);
    let Some(path) = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
    else {
        return;
    };
    hits.lock().unwrap().push(path.to_string());

    let route = routes.get(path).cloned().unwrap_or(Route::status(404));
    let reason = if route.status == 200 { "OK" } else { "Error" };
    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: text/html; charset={}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        route.status,
        reason,
        route.charset,
        route.body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&route.body);
    let _ = stream.flush();
}
