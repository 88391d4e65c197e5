// Fermata
// Copyright (c) 2024 The Fermata Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Loopback tests of the FTP control + data channels over a real socket set.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpStream;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use fermata_net::ftp::{FtpServer, SOCKETS_PER_CLIENT};
use fermata_net::mux::{SocketSet, SweepEvent};
use fermata_net::Step;

const CLIENTS: usize = 2;

fn read_reply(reader: &mut BufReader<TcpStream>) -> String {
    let mut line = String::new();
    reader.read_line(&mut line).unwrap();
    line
}

#[test]
fn login_browse_and_retrieve() {
    let root =
        std::env::temp_dir().join(format!("fermata-ftp-test-{}", std::process::id()));
    std::fs::create_dir_all(&root).unwrap();
    std::fs::write(root.join("abc"), b"abc").unwrap();

    let count = SOCKETS_PER_CLIENT * CLIENTS + 1;
    let mut set = SocketSet::open(count).unwrap();
    set.open_server(count - 1, 0, false).unwrap();
    set.register(count - 1).unwrap();
    let port = set.local_port(count - 1).unwrap();

    let stop = Arc::new(AtomicBool::new(false));
    let stop_flag = Arc::clone(&stop);
    let serve_root = root.clone();

    let thread = std::thread::spawn(move || {
        let mut server = FtpServer::new(CLIENTS, serve_root, b"admin", b"nimda");

        while !stop_flag.load(Ordering::Relaxed) {
            let event = match set.next() {
                Ok(Step::Ready((index, mode))) => SweepEvent::Ready { index, mode },
                Ok(Step::Repeat) => SweepEvent::Repeat,
                Err(_) => continue,
            };
            server.next(&mut set, 0, count, &event);
        }
    });

    let control = TcpStream::connect(("127.0.0.1", port)).unwrap();
    control.set_read_timeout(Some(Duration::from_secs(2))).unwrap();
    let mut reader = BufReader::new(control.try_clone().unwrap());
    let mut control = control;

    assert_eq!(read_reply(&mut reader), "220 FTP Server ready.\r\n");

    // Commands before login are refused.
    control.write_all(b"PWD\r\n").unwrap();
    assert_eq!(read_reply(&mut reader), "530 Not logged in\r\n");

    control.write_all(b"USER admin\r\n").unwrap();
    assert_eq!(read_reply(&mut reader), "331 Password required for login\r\n");

    control.write_all(b"PASS nimda\r\n").unwrap();
    assert_eq!(read_reply(&mut reader), "230 User logged in\r\n");

    control.write_all(b"PWD\r\n").unwrap();
    assert_eq!(read_reply(&mut reader), "257 \"/\" is current directory\r\n");

    control.write_all(b"SYST\r\n").unwrap();
    assert_eq!(read_reply(&mut reader), "215 Windows_NT\r\n");

    control.write_all(b"TYPE I\r\n").unwrap();
    assert_eq!(read_reply(&mut reader), "200 Type set\r\n");

    control.write_all(b"SIZE abc\r\n").unwrap();
    assert_eq!(read_reply(&mut reader), "213 3\r\n");

    // Passive mode: the session data port is deterministic.
    control.write_all(b"EPSV\r\n").unwrap();
    let reply = read_reply(&mut reader);
    assert!(reply.starts_with("229 Entering Extended Passive Mode (|||"), "got: {}", reply);
    let data_port: u16 = reply
        .trim_start_matches("229 Entering Extended Passive Mode (|||")
        .trim_end_matches("|)\r\n")
        .parse()
        .unwrap();
    assert_eq!(data_port, 60000 - CLIENTS as u16);

    // RETR: 150 on control, the file bytes on the data channel, then 226 on control.
    let mut data = TcpStream::connect(("127.0.0.1", data_port)).unwrap();
    data.set_read_timeout(Some(Duration::from_secs(2))).unwrap();

    control.write_all(b"RETR abc\r\n").unwrap();
    assert_eq!(read_reply(&mut reader), "150 Opening data connection\r\n");

    let mut payload = Vec::new();
    data.read_to_end(&mut payload).unwrap();
    assert_eq!(payload, b"abc");

    assert_eq!(read_reply(&mut reader), "226 Transfer complete\r\n");

    // LIST over a fresh data connection.
    let mut data = TcpStream::connect(("127.0.0.1", data_port)).unwrap();
    data.set_read_timeout(Some(Duration::from_secs(2))).unwrap();

    control.write_all(b"LIST\r\n").unwrap();
    assert_eq!(read_reply(&mut reader), "150 Opening data connection\r\n");

    let mut listing = Vec::new();
    data.read_to_end(&mut listing).unwrap();
    let listing = String::from_utf8_lossy(&listing);
    assert!(listing.contains("rw-rw-rw- jschartner"), "got: {}", listing);
    assert!(listing.contains(" abc\r\n"), "got: {}", listing);

    assert_eq!(read_reply(&mut reader), "226 Transfer complete\r\n");

    // STOR: bytes sunk from the data channel into a new file, EOF completes.
    let mut data = TcpStream::connect(("127.0.0.1", data_port)).unwrap();
    control.write_all(b"STOR upload.bin\r\n").unwrap();
    assert_eq!(read_reply(&mut reader), "150 Opening data connection\r\n");

    data.write_all(b"uploaded-bytes").unwrap();
    drop(data);
    assert_eq!(read_reply(&mut reader), "226 Transfer complete\r\n");
    assert_eq!(std::fs::read(root.join("upload.bin")).unwrap(), b"uploaded-bytes");

    // Unknown-but-benign commands.
    control.write_all(b"noop\r\n").unwrap();
    assert_eq!(read_reply(&mut reader), "500 What?\r\n");

    stop.store(true, Ordering::Relaxed);
    let _ = thread.join();
    let _ = std::fs::remove_dir_all(&root);
}
