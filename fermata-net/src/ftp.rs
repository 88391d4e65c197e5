// Fermata
// Copyright (c) 2024 The Fermata Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The FTP server: a control-channel command machine plus an on-demand passive data channel
//! per session.
//!
//! Each session owns three slots of the shared socket set: its control connection, a data
//! listener opened on the first PASV/EPSV, and the accepted data peer. With `n` clients the
//! server's slot range is laid out `[control x n | listener x n | peer x n | control
//! listener]`, so a session's data listener and peer sit at fixed offsets from its control
//! slot. A data transfer starts only after the `150` control reply has fully flushed,
//! whichever of the reply flush or the data-peer accept happens last.

use std::net::Ipv4Addr;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Datelike, Local, Timelike};
use log::{debug, info, warn};

use crate::errors::{NetError, Step};
use crate::http::server::ServedFile;
use crate::mux::{local_ipv4, Mode, SocketFlags, SocketSet, SweepEvent};

pub const SOCKETS_PER_CLIENT: usize = 3;

const WINDOW_SIZE: usize = 1024;
const REQUEST_CAP: usize = 64;

/// What a session's data channel carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ActionKind {
    /// A prepared text payload: control replies, or LIST output on the data channel.
    Message,
    /// Stream a file to the peer (RETR).
    WriteFile,
    /// Sink peer bytes into a file (STOR).
    ReadFile,
}

struct Session {
    /// Logical working directory relative to the server root: "./"-rooted, '/'-delimited,
    /// with a trailing delimiter.
    dir: Vec<u8>,

    logged_in: bool,

    request: [u8; REQUEST_CAP],
    request_len: usize,

    /// The in-flight payload of the socket currently writing, and its cursor.
    message: Vec<u8>,
    message_off: usize,

    /// What the socket currently being written is doing.
    response_kind: ActionKind,
    /// What the data channel should do once it connects.
    data_kind: ActionKind,
    look_for_data_connection: bool,

    /// Prepared LIST output awaiting the data connection.
    payload: Vec<u8>,

    /// RETR source.
    file: Option<ServedFile>,
    /// STOR sink.
    upload: Option<std::fs::File>,
    /// RNFR source path, voided by any command other than the RNTO that consumes it.
    rename_from: Option<PathBuf>,

    window: [u8; WINDOW_SIZE],
}

impl Session {
    fn new() -> Self {
        Session {
            dir: b"./".to_vec(),
            logged_in: false,
            request: [0; REQUEST_CAP],
            request_len: 0,
            message: Vec::new(),
            message_off: 0,
            response_kind: ActionKind::Message,
            data_kind: ActionKind::Message,
            look_for_data_connection: false,
            payload: Vec::new(),
            file: None,
            upload: None,
            rename_from: None,
            window: [0; WINDOW_SIZE],
        }
    }

    fn set_message(&mut self, text: &[u8]) {
        self.message.clear();
        self.message.extend_from_slice(text);
        self.message_off = 0;
        self.response_kind = ActionKind::Message;
    }

    fn message_pending(&self) -> bool {
        self.message_off < self.message.len()
    }

    /// Promotes the prepared data action into the active one. Returns true when the data
    /// socket should be armed for writing.
    fn fill_for_data(&mut self) -> bool {
        let arm = match self.data_kind {
            ActionKind::Message => {
                self.message = std::mem::take(&mut self.payload);
                self.message_off = 0;
                self.response_kind = ActionKind::Message;
                true
            }
            ActionKind::WriteFile => {
                self.response_kind = ActionKind::WriteFile;
                self.message.clear();
                self.message_off = 0;
                true
            }
            ActionKind::ReadFile => {
                self.response_kind = ActionKind::ReadFile;
                false
            }
        };

        self.look_for_data_connection = false;
        arm
    }
}

pub struct FtpServer {
    sessions: Vec<Session>,
    clients: usize,
    root: PathBuf,
    username: Vec<u8>,
    password: Vec<u8>,
    /// Local IPv4 with the dots already turned into commas, as the PASV reply wants it.
    pasv_ip: Vec<u8>,
}

impl FtpServer {
    pub fn new(clients: usize, root: PathBuf, username: &[u8], password: &[u8]) -> FtpServer {
        let ip = local_ipv4().unwrap_or(Ipv4Addr::LOCALHOST);
        let pasv_ip = ip.to_string().replace('.', ",").into_bytes();

        let mut sessions = Vec::with_capacity(clients);
        for _ in 0..clients {
            sessions.push(Session::new());
        }

        FtpServer {
            sessions,
            clients,
            root,
            username: username.to_vec(),
            password: password.to_vec(),
            pasv_ip,
        }
    }

    /// Handles one sweep event for the slot range `[off, off + len)` where
    /// `len == 3 * clients + 1`.
    pub fn next(&mut self, set: &mut SocketSet, off: usize, len: usize, event: &SweepEvent) {
        let (index, mode) = match *event {
            SweepEvent::Repeat => return,
            SweepEvent::Ready { index, mode } => (index, mode),
        };

        if set.socket(index).is_server() {
            if index - off == len - 1 {
                self.accept_control(set, off);
            }
            else {
                self.accept_data(set, off, index);
            }
            return;
        }

        let is_data = index - off >= 2 * self.clients;
        let (session_index, text_index, data_index) = if is_data {
            (index - off - 2 * self.clients, index - 2 * self.clients, index)
        }
        else {
            (index - off, index, index + 2 * self.clients)
        };

        match mode {
            Mode::Read => {
                if is_data {
                    self.data_read(set, index, text_index, session_index);
                }
                else {
                    self.control_read(set, off, index, session_index);
                }
            }
            Mode::Write => self.write(set, index, text_index, data_index, is_data, session_index),
            Mode::Disconnect => {
                let _ = set.unregister(index);
                set.close(index);
                set.force_resweep();
            }
        }
    }

    fn accept_control(&mut self, set: &mut SocketSet, off: usize) {
        let client = match set.find_invalid(off..off + self.clients) {
            Some(slot) => slot,
            None => {
                warn!("ftp: no free session slot");
                return;
            }
        };

        match set.accept(off + 3 * self.clients, client) {
            Ok(Step::Ready(addr)) => debug!("ftp [{}]: accepted {}", client - off, addr),
            Ok(Step::Repeat) => return,
            Err(e) => {
                warn!("ftp: accept failed: {}", e);
                return;
            }
        }
        if let Err(e) = set.register(client) {
            warn!("ftp: register failed: {}", e);
            set.close(client);
            return;
        }

        let session = &mut self.sessions[client - off];
        *session = Session::new();
        session.set_message(b"220 FTP Server ready.\r\n");
        set.socket_mut(client).flags.insert(SocketFlags::WRITING);
    }

    fn accept_data(&mut self, set: &mut SocketSet, off: usize, listener: usize) {
        let session_index = listener - off - self.clients;
        let peer = listener + self.clients;

        match set.accept(listener, peer) {
            Ok(Step::Ready(addr)) => debug!("ftp [{}]: data peer {}", session_index, addr),
            Ok(Step::Repeat) => return,
            Err(e) => {
                warn!("ftp [{}]: data accept failed: {}", session_index, e);
                return;
            }
        }
        if let Err(e) = set.register(peer) {
            warn!("ftp [{}]: data register failed: {}", session_index, e);
            set.close(peer);
            return;
        }

        let session = &mut self.sessions[session_index];
        if session.look_for_data_connection && !session.message_pending() && session.fill_for_data()
        {
            set.socket_mut(peer).flags.insert(SocketFlags::WRITING);
        }
    }

    /// Data-channel bytes arriving from the peer: an upload, or the end-of-transfer EOF.
    fn data_read(
        &mut self,
        set: &mut SocketSet,
        index: usize,
        text_index: usize,
        session_index: usize,
    ) {
        let session = &mut self.sessions[session_index];

        loop {
            match set.read(index, &mut session.window) {
                Ok(Step::Repeat) => return,
                Ok(Step::Ready(count)) => match session.response_kind {
                    ActionKind::ReadFile => {
                        use std::io::Write;
                        if let Some(file) = session.upload.as_mut() {
                            if let Err(e) = file.write_all(&session.window[..count]) {
                                warn!("ftp [{}]: upload write failed: {}", session_index, e);
                            }
                        }
                    }
                    _ => {
                        // Stray data on a channel this side is sending on.
                        let _ = set.unregister(index);
                        set.close(index);
                        set.force_resweep();
                        return;
                    }
                },
                Err(NetError::ConnectionClosed) | Err(NetError::ConnectionAborted) => {
                    // Peer EOF ends the transfer.
                    let _ = set.unregister(index);
                    set.close(index);
                    set.force_resweep();

                    session.upload = None;
                    session.file = None;
                    session.request_len = 0;
                    session.set_message(b"226 Transfer complete\r\n");
                    set.socket_mut(text_index).flags.insert(SocketFlags::WRITING);
                    return;
                }
                Err(e) => {
                    warn!("ftp [{}]: data read failed: {}", session_index, e);
                    let _ = set.unregister(index);
                    set.close(index);
                    set.force_resweep();
                    return;
                }
            }
        }
    }

    fn control_read(
        &mut self,
        set: &mut SocketSet,
        off: usize,
        index: usize,
        session_index: usize,
    ) {
        loop {
            let session = &mut self.sessions[session_index];
            if session.request_len == REQUEST_CAP {
                // Command line too long for the fixed accumulator.
                let _ = set.unregister(index);
                set.close(index);
                set.force_resweep();
                return;
            }

            match set.read(index, &mut session.request[session.request_len..]) {
                Ok(Step::Repeat) => return,
                Ok(Step::Ready(count)) => session.request_len += count,
                Err(_) => {
                    let _ = set.unregister(index);
                    set.close(index);
                    set.force_resweep();
                    return;
                }
            }

            let session = &self.sessions[session_index];
            if session.request_len >= 2
                && session.request[session.request_len - 2] == b'\r'
                && session.request[session.request_len - 1] == b'\n'
            {
                let request = session.request[..session.request_len - 2].to_vec();
                info!(
                    "ftp [{}/{}]: '{}'",
                    session_index,
                    self.clients,
                    String::from_utf8_lossy(&request)
                );

                self.handle_command(set, off, index, session_index, &request);

                let session = &mut self.sessions[session_index];
                session.request_len = 0;
                set.socket_mut(index).flags.insert(SocketFlags::WRITING);
                return;
            }
        }
    }

    fn handle_command(
        &mut self,
        set: &mut SocketSet,
        off: usize,
        index: usize,
        session_index: usize,
        request: &[u8],
    ) {
        let FtpServer { sessions, clients, root, username, password, pasv_ip } = self;
        let session = &mut sessions[session_index];

        session.look_for_data_connection = false;

        if !session.logged_in {
            if let Some(user) = request.strip_prefix(b"USER ") {
                if user == b"anonymous" {
                    session.set_message(b"530 Not logged in\r\n");
                }
                else if user == &username[..] {
                    session.set_message(b"331 Password required for login\r\n");
                }
                else {
                    session.set_message(b"530 Not logged in\r\n");
                }
            }
            else if let Some(pass) = request.strip_prefix(b"PASS ") {
                if pass == &password[..] {
                    session.logged_in = true;
                    session.set_message(b"230 User logged in\r\n");
                }
                else {
                    session.set_message(b"530 Not logged in\r\n");
                }
            }
            else {
                session.set_message(b"530 Not logged in\r\n");
            }
            return;
        }

        // Only an immediately preceding RNFR arms RNTO.
        let rename_from = session.rename_from.take();

        if request == b"SYST" || request == b"syst" {
            session.set_message(b"215 Windows_NT\r\n");
        }
        else if request == b"AUTH TLS" || request == b"AUTH SSL" {
            session.set_message(b"530 Not logged in\r\n");
        }
        else if request == b"FEAT" {
            session.set_message(b"211-Extensions supported\r\n211 End\r\n");
        }
        else if request == b"PWD" {
            // Report the CWD without its leading '.', '/'-delimited.
            let mut reply = b"257 \"".to_vec();
            reply.extend_from_slice(&session.dir[1..]);
            reply.extend_from_slice(b"\" is current directory\r\n");
            session.set_message(&reply);
        }
        else if request == b"TYPE I" {
            session.set_message(b"200 Type set\r\n");
        }
        else if request == b"TYPE A" {
            session.set_message(b"500 Type not supported\r\n");
        }
        else if request.starts_with(b"EPRT") {
            session.set_message(b"500 This not supported\r\n");
        }
        else if request == b"EPSV" || request == b"PASV" {
            let port = 60000 - *clients as u16 + (index - off) as u16;

            if request == b"EPSV" {
                session.set_message(
                    format!("229 Entering Extended Passive Mode (|||{}|)\r\n", port).as_bytes(),
                );
            }
            else {
                let mut reply = b"227 Entering Passive Mode (".to_vec();
                reply.extend_from_slice(pasv_ip);
                reply.extend_from_slice(format!(",{},{})\r\n", port / 256, port % 256).as_bytes());
                session.set_message(&reply);
            }

            // One data listener per session, opened on first use and kept.
            let listener = index + *clients;
            if !set.socket(listener).is_valid() {
                let opened = set
                    .open_server(listener, port, true)
                    .and_then(|_| set.register(listener));
                if let Err(e) = opened {
                    warn!("ftp [{}]: data listener failed: {}", session_index, e);
                    set.close(listener);
                    session.set_message(b"500 Cannot open data connection\r\n");
                }
            }
        }
        else if request == b"LIST" {
            match list_directory(root, &session.dir) {
                Ok(payload) => {
                    session.payload = payload;
                    session.data_kind = ActionKind::Message;
                    session.look_for_data_connection = true;
                    session.set_message(b"150 Opening data connection\r\n");
                }
                Err(_) => session.set_message(b"500 Cannot list directory\r\n"),
            }
        }
        else if let Some(arg) = request.strip_prefix(b"SIZE ") {
            match ServedFile::open(&resolve(root, &session.dir, arg)) {
                Ok(file) => session.set_message(format!("213 {}\r\n", file.size()).as_bytes()),
                Err(_) => session.set_message(b"500 Cannot retrieve filesize\r\n"),
            }
        }
        else if let Some(arg) = request.strip_prefix(b"RETR ") {
            match ServedFile::open(&resolve(root, &session.dir, arg)) {
                Ok(file) => {
                    session.file = Some(file);
                    session.data_kind = ActionKind::WriteFile;
                    session.look_for_data_connection = true;
                    session.set_message(b"150 Opening data connection\r\n");
                }
                Err(_) => session.set_message(b"500 Cannot open file for reading\r\n"),
            }
        }
        else if let Some(arg) = request.strip_prefix(b"STOR ") {
            match std::fs::File::create(resolve(root, &session.dir, arg)) {
                Ok(file) => {
                    session.upload = Some(file);
                    session.data_kind = ActionKind::ReadFile;
                    session.look_for_data_connection = true;
                    session.set_message(b"150 Opening data connection\r\n");
                }
                Err(_) => session.set_message(b"500 Cannot store file\r\n"),
            }
        }
        else if let Some(arg) = request.strip_prefix(b"CWD ") {
            change_directory(root, session, arg);
        }
        else if request == b"CDUP" {
            session.dir = b"./".to_vec();
            session.set_message(b"250 command successful\r\n");
        }
        else if let Some(arg) = request.strip_prefix(b"DELE ") {
            let ok = std::fs::remove_file(resolve(root, &session.dir, arg)).is_ok();
            simple_result(session, ok);
        }
        else if let Some(arg) = request.strip_prefix(b"MKD ") {
            let ok = std::fs::create_dir(resolve(root, &session.dir, arg)).is_ok();
            simple_result(session, ok);
        }
        else if let Some(arg) = request.strip_prefix(b"RMD ") {
            let ok = std::fs::remove_dir(resolve(root, &session.dir, arg)).is_ok();
            simple_result(session, ok);
        }
        else if let Some(arg) = request.strip_prefix(b"RNFR ") {
            session.rename_from = Some(resolve(root, &session.dir, arg));
            session.set_message(b"350 continue\r\n");
        }
        else if let Some(arg) = request.strip_prefix(b"RNTO ") {
            match rename_from {
                Some(from) => {
                    let to = resolve(root, &session.dir, arg);
                    let ok = std::fs::rename(from, to).is_ok();
                    simple_result(session, ok);
                }
                None => session.set_message(b"421 You did not send RNFR before\r\n"),
            }
        }
        else {
            // noop, opts utf8 on, site help, PORT, REST, and anything else harmless.
            session.set_message(b"500 What?\r\n");
        }
    }

    /// Write readiness on either channel.
    fn write(
        &mut self,
        set: &mut SocketSet,
        index: usize,
        text_index: usize,
        data_index: usize,
        is_data: bool,
        session_index: usize,
    ) {
        let session = &mut self.sessions[session_index];

        loop {
            match session.response_kind {
                ActionKind::Message => {
                    if !session.message_pending() {
                        set.socket_mut(index).flags.remove(SocketFlags::WRITING);

                        if is_data {
                            // The data payload went out whole; close the channel and confirm
                            // on the control connection.
                            let _ = set.unregister(index);
                            set.close(index);
                            set.force_resweep();

                            session.request_len = 0;
                            session.set_message(b"226 Transfer complete\r\n");
                            set.socket_mut(text_index).flags.insert(SocketFlags::WRITING);
                        }
                        else if session.look_for_data_connection
                            && set.socket(data_index).is_valid()
                            && session.fill_for_data()
                        {
                            // The 150 reply flushed and the peer is already connected.
                            set.socket_mut(data_index).flags.insert(SocketFlags::WRITING);
                        }
                        return;
                    }

                    match set.write(index, &session.message[session.message_off..]) {
                        Ok(Step::Ready(n)) => session.message_off += n,
                        Ok(Step::Repeat) => return,
                        Err(e) => {
                            warn!("ftp [{}]: write failed: {}", session_index, e);
                            let _ = set.unregister(index);
                            set.close(index);
                            set.force_resweep();
                            return;
                        }
                    }
                }

                ActionKind::WriteFile => {
                    // RETR: pump the file through the window buffer.
                    if session.message_off == session.message.len() {
                        session.message.clear();
                        session.message_off = 0;

                        let mut done = true;
                        if let Some(file) = session.file.as_mut() {
                            let mut buf = [0u8; WINDOW_SIZE];
                            match file.read(&mut buf) {
                                Ok(0) => {}
                                Ok(n) => {
                                    session.message.extend_from_slice(&buf[..n]);
                                    done = false;
                                }
                                Err(e) => {
                                    warn!("ftp [{}]: file read failed: {}", session_index, e);
                                }
                            }
                        }

                        if done {
                            session.file = None;
                            let _ = set.unregister(index);
                            set.close(index);
                            set.force_resweep();

                            session.request_len = 0;
                            session.set_message(b"226 Transfer complete\r\n");
                            set.socket_mut(text_index).flags.insert(SocketFlags::WRITING);
                            return;
                        }
                    }

                    match set.write(index, &session.message[session.message_off..]) {
                        Ok(Step::Ready(n)) => session.message_off += n,
                        Ok(Step::Repeat) => return,
                        Err(e) => {
                            warn!("ftp [{}]: data write failed: {}", session_index, e);
                            session.file = None;
                            let _ = set.unregister(index);
                            set.close(index);
                            set.force_resweep();
                            return;
                        }
                    }
                }

                ActionKind::ReadFile => {
                    // STOR sinks reads; write readiness on this channel means nothing.
                    set.socket_mut(index).flags.remove(SocketFlags::WRITING);
                    return;
                }
            }
        }
    }
}

/// Joins root + CWD + a raw argument into a filesystem path. A leading '/' in the argument
/// is taken relative to the root, never the host filesystem.
fn resolve(root: &Path, dir: &[u8], arg: &[u8]) -> PathBuf {
    let mut arg = arg;
    while arg.first() == Some(&b'/') {
        arg = &arg[1..];
    }

    let mut path = root.to_path_buf();
    path.push(String::from_utf8_lossy(&dir[2..]).as_ref());
    path.push(String::from_utf8_lossy(arg).as_ref());
    path
}

fn simple_result(session: &mut Session, ok: bool) {
    if ok {
        session.set_message(b"250 command successful\r\n");
    }
    else {
        session.set_message(b"500 command was not successful\r\n");
    }
}

/// CWD: normalize the requested directory against the session CWD, collapsing doubled
/// delimiters and forcing a trailing one, then require that it exists and is a directory.
fn change_directory(root: &Path, session: &mut Session, arg: &[u8]) {
    let mut candidate: Vec<u8> = if arg.first() == Some(&b'/') {
        b"./".to_vec()
    }
    else {
        session.dir.clone()
    };

    for &c in arg {
        if c == b'/' && candidate.last() == Some(&b'/') {
            continue;
        }
        candidate.push(c);
    }
    if candidate.last() != Some(&b'/') {
        candidate.push(b'/');
    }

    let mut path = root.to_path_buf();
    path.push(String::from_utf8_lossy(&candidate[2..]).as_ref());

    if path.is_dir() {
        session.dir = candidate;
        session.set_message(b"250 CWD command successful\r\n");
    }
    else {
        session.set_message(b"500 Does not exists\r\n");
    }
}

/// Builds the LIST payload for a directory: one `[d|-]rw-rw-rw-` line per entry with size,
/// modification time, and name.
fn list_directory(root: &Path, dir: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut path = root.to_path_buf();
    path.push(String::from_utf8_lossy(&dir[2..]).as_ref());

    let mut payload = Vec::new();
    for entry in std::fs::read_dir(&path)? {
        let entry = entry?;
        let meta = entry.metadata()?;

        let kind = if meta.is_dir() { 'd' } else { '-' };
        let modified: DateTime<Local> =
            meta.modified().map(DateTime::from).unwrap_or_else(|_| Local::now());

        payload.extend_from_slice(
            format!(
                "{}rw-rw-rw- jschartner {:8} {:02}-{:02}-{:04} {:02}:{:02} {}\r\n",
                kind,
                meta.len(),
                modified.month(),
                modified.day(),
                modified.year(),
                modified.hour(),
                modified.minute(),
                entry.file_name().to_string_lossy(),
            )
            .as_bytes(),
        );
    }

    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_resolve_joins_under_root() {
        let p = resolve(Path::new("/srv/ftp"), b"./music/", b"song.aac");
        assert_eq!(p, Path::new("/srv/ftp/music/song.aac"));

        // A leading slash is relative to the root, not the filesystem.
        let p = resolve(Path::new("/srv/ftp"), b"./music/", b"/top/readme");
        assert_eq!(p, Path::new("/srv/ftp/music/top/readme"));
    }

    #[test]
    fn verify_cwd_normalization() {
        let mut session = Session::new();

        // Nonexistent directories are refused and the CWD is unchanged.
        change_directory(Path::new("/nonexistent-root"), &mut session, b"a//b");
        assert_eq!(session.dir, b"./");
        assert!(session.message.starts_with(b"500"));

        // Against a real root: "." always exists.
        let tmp = std::env::temp_dir();
        change_directory(&tmp, &mut session, b".");
        assert_eq!(session.dir, b"././");
        assert!(session.message.starts_with(b"250"));
    }

    #[test]
    fn verify_rename_requires_preceding_rnfr() {
        let session = Session::new();
        assert!(session.rename_from.is_none());
    }
}
