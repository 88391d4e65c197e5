// Fermata
// Copyright (c) 2024 The Fermata Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Loopback tests of the HTTP session over a real socket set.

use std::io::{Read, Write};
use std::net::TcpStream;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use fermata_net::http::server::{is_authenticated, serve_file_chunked, serve_files, HttpServer};
use fermata_net::mux::{SocketFlags, SocketSet, SweepEvent};
use fermata_net::Step;

const CLIENTS: usize = 4;

struct TestServer {
    port: u16,
    stop: Arc<AtomicBool>,
    thread: Option<std::thread::JoinHandle<()>>,
    root: PathBuf,
}

impl TestServer {
    /// Starts a static-file server over a fresh scratch root on an ephemeral port.
    fn start(name: &str) -> TestServer {
        TestServer::start_inner(name, false)
    }

    /// Same, but responses use chunked transfer encoding.
    fn start_chunked(name: &str) -> TestServer {
        TestServer::start_inner(name, true)
    }

    fn start_inner(name: &str, chunked: bool) -> TestServer {
        let root = std::env::temp_dir().join(format!("fermata-http-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(root.join("hello.txt"), b"hello over http\n").unwrap();
        std::fs::write(root.join("index.html"), b"<html>home</html>").unwrap();

        let count = CLIENTS + 1;
        let mut set = SocketSet::open(count).unwrap();
        set.open_server(CLIENTS, 0, false).unwrap();
        set.register(CLIENTS).unwrap();
        let port = set.local_port(CLIENTS).unwrap();

        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);
        let serve_root = root.clone();

        let thread = std::thread::spawn(move || {
            let mut server = HttpServer::new(CLIENTS);

            while !stop_flag.load(Ordering::Relaxed) {
                let event = match set.next() {
                    Ok(Step::Ready((index, mode))) => SweepEvent::Ready { index, mode },
                    Ok(Step::Repeat) => SweepEvent::Repeat,
                    Err(_) => continue,
                };

                let request = match server.next(&mut set, 0, count, &event) {
                    Ok(Some(request)) => request,
                    _ => continue,
                };

                let index = request.session;
                let session = server.session_mut(index);

                let served = is_authenticated(session, &request, b"admin", b"nimda")
                    .and_then(|ok| {
                        if !ok {
                            Ok(())
                        }
                        else if chunked {
                            serve_file_chunked(session, &serve_root, &request)
                        }
                        else {
                            serve_files(session, &serve_root, &request)
                        }
                    });

                if served.is_ok() && server.session_mut(index).has_pending_writes() {
                    set.socket_mut(index).flags.insert(SocketFlags::WRITING);
                }
            }
        });

        TestServer { port, stop, thread: Some(thread), root }
    }

    /// Sends one raw request and reads until the peer stops sending for a while.
    fn roundtrip(&self, request: &[u8]) -> Vec<u8> {
        let mut stream = TcpStream::connect(("127.0.0.1", self.port)).unwrap();
        stream.set_read_timeout(Some(Duration::from_millis(500))).unwrap();
        stream.write_all(request).unwrap();

        let mut response = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            match stream.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => response.extend_from_slice(&buf[..n]),
                Err(_) => break,
            }
        }
        response
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
        let _ = std::fs::remove_dir_all(&self.root);
    }
}

const AUTH: &str = "Authorization: Basic YWRtaW46bmltZGE=\r\n";

#[test]
fn get_serves_exact_file_bytes() {
    let server = TestServer::start("get");

    let response = server.roundtrip(
        format!("GET /hello.txt HTTP/1.1\r\nHost: x\r\n{}\r\n", AUTH).as_bytes(),
    );

    let text = String::from_utf8_lossy(&response);
    assert!(text.starts_with("HTTP/1.1 200 OK\r\n"), "got: {}", text);
    assert!(text.contains("Content-Length: 16\r\n"));
    assert!(text.contains("Content-Type: text/plain\r\n"));

    let split = response.windows(4).position(|w| w == b"\r\n\r\n").unwrap();
    assert_eq!(&response[split + 4..], b"hello over http\n");
}

#[test]
fn root_maps_to_index_html() {
    let server = TestServer::start("root");

    let response =
        server.roundtrip(format!("GET / HTTP/1.1\r\nHost: x\r\n{}\r\n", AUTH).as_bytes());

    let text = String::from_utf8_lossy(&response);
    assert!(text.starts_with("HTTP/1.1 200 OK\r\n"), "got: {}", text);
    assert!(text.contains("Content-Type: text/html\r\n"));
    assert!(text.ends_with("<html>home</html>"));
}

#[test]
fn missing_credentials_get_challenged() {
    let server = TestServer::start("auth");

    let response = server.roundtrip(b"GET /hello.txt HTTP/1.1\r\nHost: x\r\n\r\n");

    let text = String::from_utf8_lossy(&response);
    assert!(text.starts_with("HTTP/1.1 401 Unauthorized\r\n"), "got: {}", text);
    assert!(text.contains("WWW-Authenticate: Basic realm=\"User Visible Realm\"\r\n"));
}

#[test]
fn parent_traversal_is_refused() {
    let server = TestServer::start("dotdot");

    let response = server
        .roundtrip(format!("GET /../secret HTTP/1.1\r\nHost: x\r\n{}\r\n", AUTH).as_bytes());

    let text = String::from_utf8_lossy(&response);
    assert!(text.starts_with("HTTP/1.1 405 Not Allowed\r\n"), "got: {}", text);
}

#[test]
fn missing_file_is_404() {
    let server = TestServer::start("missing");

    let response = server
        .roundtrip(format!("GET /nope.txt HTTP/1.1\r\nHost: x\r\n{}\r\n", AUTH).as_bytes());

    let text = String::from_utf8_lossy(&response);
    assert!(text.starts_with("HTTP/1.1 404 Not Found\r\n"), "got: {}", text);
}

#[test]
fn chunked_transfer_frames_the_file() {
    let server = TestServer::start_chunked("chunked");

    let response = server.roundtrip(
        format!("GET /hello.txt HTTP/1.1\r\nHost: x\r\n{}\r\n", AUTH).as_bytes(),
    );

    let text = String::from_utf8_lossy(&response);
    assert!(text.starts_with("HTTP/1.1 200 OK\r\n"), "got: {}", text);
    assert!(text.contains("Transfer-Encoding: chunked\r\n"));
    // 16 payload bytes fit one chunk: hex length, data, and the terminating zero chunk.
    assert!(text.ends_with("10\r\nhello over http\n\r\n0\r\n\r\n"), "got: {}", text);
}

#[test]
fn post_is_not_implemented() {
    let server = TestServer::start("post");

    let response = server.roundtrip(
        format!(
            "POST /hello.txt HTTP/1.1\r\nHost: x\r\n{}Content-Length: 2\r\n\r\nhi",
            AUTH
        )
        .as_bytes(),
    );

    let text = String::from_utf8_lossy(&response);
    assert!(text.starts_with("HTTP/1.1 501 Not Implemented\r\n"), "got: {}", text);
}
