// Fermata
// Copyright (c) 2024 The Fermata Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `fttp` serves one directory over HTTP (Basic auth + static files) and FTP at the same
//! time, multiplexing every connection of both protocols on a single socket set in a single
//! thread.

#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]

use std::path::PathBuf;

use clap::{App, Arg};
use log::{error, info, warn};

use fermata_net::ftp::{FtpServer, SOCKETS_PER_CLIENT as FTP_SOCKETS_PER_CLIENT};
use fermata_net::http::server::{is_authenticated, serve_files, HttpServer};
use fermata_net::mux::{SocketFlags, SocketSet, SweepEvent};
use fermata_net::{NetError, Step};

fn main() {
    pretty_env_logger::init();

    let matches = App::new("fttp")
        .version("1.0")
        .about("Serve a directory over HTTP and FTP from one socket set")
        .arg(
            Arg::with_name("root")
                .long("root")
                .value_name("DIR")
                .default_value("./rsc/")
                .help("Directory to serve"),
        )
        .arg(
            Arg::with_name("http-port")
                .long("http-port")
                .value_name("PORT")
                .default_value("8080")
                .help("HTTP listening port"),
        )
        .arg(
            Arg::with_name("ftp-port")
                .long("ftp-port")
                .value_name("PORT")
                .default_value("8021")
                .help("FTP control listening port"),
        )
        .arg(
            Arg::with_name("clients")
                .long("clients")
                .value_name("N")
                .default_value("64")
                .help("Maximum concurrent clients per protocol"),
        )
        .arg(
            Arg::with_name("user")
                .long("user")
                .value_name("NAME")
                .default_value("admin")
                .help("Username for HTTP Basic auth and FTP login"),
        )
        .arg(
            Arg::with_name("pass")
                .long("pass")
                .value_name("PASSWORD")
                .default_value("nimda")
                .help("Password for HTTP Basic auth and FTP login"),
        )
        .get_matches();

    let root = PathBuf::from(matches.value_of("root").unwrap_or("./rsc/"));
    let http_port: u16 = parse_or_die(matches.value_of("http-port"), "http-port");
    let ftp_port: u16 = parse_or_die(matches.value_of("ftp-port"), "ftp-port");
    let clients: usize = parse_or_die(matches.value_of("clients"), "clients");
    let user = matches.value_of("user").unwrap_or("admin").as_bytes().to_vec();
    let pass = matches.value_of("pass").unwrap_or("nimda").as_bytes().to_vec();

    if let Err(e) = run(root, http_port, ftp_port, clients, &user, &pass) {
        error!("fatal: {}", e);
        std::process::exit(1);
    }
}

fn parse_or_die<T: std::str::FromStr>(value: Option<&str>, name: &str) -> T {
    match value.and_then(|v| v.parse().ok()) {
        Some(v) => v,
        None => {
            eprintln!("invalid value for --{}", name);
            std::process::exit(2);
        }
    }
}

fn run(
    root: PathBuf,
    http_port: u16,
    ftp_port: u16,
    clients: usize,
    user: &[u8],
    pass: &[u8],
) -> Result<(), NetError> {
    // Slot layout: the HTTP range first, the FTP range after it, each with its listener in
    // the range's last slot.
    let http_count = clients + 1;
    let ftp_count = FTP_SOCKETS_PER_CLIENT * clients + 1;

    let mut sockets = SocketSet::open(http_count + ftp_count)?;

    sockets.open_server(http_count - 1, http_port, false)?;
    sockets.register(http_count - 1)?;

    sockets.open_server(http_count + ftp_count - 1, ftp_port, false)?;
    sockets.register(http_count + ftp_count - 1)?;

    let mut http = HttpServer::new(clients);
    let mut ftp = FtpServer::new(clients, root.clone(), user, pass);

    info!("serving {} on http://localhost:{}", root.display(), http_port);
    info!("serving {} on ftp://localhost:{}", root.display(), ftp_port);

    loop {
        let (event, http_range) = match sockets.next() {
            Ok(Step::Ready((index, mode))) => {
                (SweepEvent::Ready { index, mode }, index < http_count)
            }
            Ok(Step::Repeat) => (SweepEvent::Repeat, true),
            Err(e) => {
                warn!("sweep error: {}", e);
                continue;
            }
        };

        if http_range {
            match http.next(&mut sockets, 0, http_count, &event) {
                Ok(Some(request)) => {
                    let index = request.session;
                    let session = http.session_mut(index);

                    let result = is_authenticated(session, &request, user, pass).and_then(|ok| {
                        if ok {
                            serve_files(session, &root, &request)
                        }
                        else {
                            Ok(())
                        }
                    });

                    match result {
                        Ok(()) => {
                            if http.session_mut(index).has_pending_writes() {
                                sockets.socket_mut(index).flags.insert(SocketFlags::WRITING);
                            }
                        }
                        Err(e) => {
                            warn!("http [{}]: dropping session: {}", index, e);
                            let _ = sockets.unregister(index);
                            sockets.close(index);
                            sockets.force_resweep();
                        }
                    }
                }
                Ok(None) => {}
                Err(NetError::SocketOverflow) => warn!("http: all client slots busy"),
                Err(e) => warn!("http: {}", e),
            }
        }
        else {
            ftp.next(&mut sockets, http_count, ftp_count, &event);
        }
    }
}
