// Fermata
// Copyright (c) 2024 The Fermata Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The per-connection HTTP server session and the static-file application helpers.
//!
//! Each session owns a parser, one growable byte builder holding the request path, the
//! accumulated `|key:value|...` header list, and the body, and a bounded FIFO of pending
//! writes. Reading is suppressed while writes are queued, which is the only backpressure
//! mechanism. A session idle for [`IDLE_LIMIT`] sweeps is force-closed.

use std::collections::VecDeque;
use std::io::Read;
use std::path::PathBuf;

use log::{debug, info, warn};

use crate::errors::{NetError, Result, Step};
use crate::http::parser::{eq_ignorecase, Event, HeaderEvent, Method, Parser};
use crate::mux::{Mode, SocketFlags, SocketSet, SweepEvent};

pub const WRITE_QUEUE_CAP: usize = 8;
pub const IDLE_LIMIT: u64 = 512;

/// Delimiters of the serialized header list.
pub const HEADERS_PAIR_DELIM: u8 = b'|';
pub const HEADERS_KEY_VALUE_DELIM: u8 = b':';

const SB_BUFFER_SIZE: usize = 1024;
const FILE_CHUNK_LEN: u64 = 2 << 13;
const CHUNK_STAGING_CAP: usize = 32;

/// A byte range within a session's builder.
#[derive(Clone, Copy, Debug, Default)]
pub struct Span {
    pub start: usize,
    pub len: usize,
}

/// One parsed request, as spans into the owning session's builder. The spans are valid until
/// the session next reads or resets.
#[derive(Clone, Copy, Debug)]
pub struct Request {
    pub session: usize,
    pub method: Method,
    pub path: Span,
    /// Everything after the first '?' of the request target.
    pub params: Span,
    pub body: Span,
    /// The serialized header list, `|key:value|key:value...`.
    pub headers: Span,
}

/// An open file being streamed to a peer, with its size and read position.
pub struct ServedFile {
    file: std::fs::File,
    size: u64,
    pos: u64,
}

impl ServedFile {
    pub fn open(path: &std::path::Path) -> std::io::Result<ServedFile> {
        let file = std::fs::File::open(path)?;
        let meta = file.metadata()?;
        if !meta.is_file() {
            return Err(std::io::Error::from(std::io::ErrorKind::NotFound));
        }
        Ok(ServedFile { file, size: meta.len(), pos: 0 })
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn remaining(&self) -> u64 {
        self.size - self.pos
    }

    pub(crate) fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = self.file.read(buf)?;
        self.pos += n as u64;
        Ok(n)
    }
}

enum Write {
    /// A fully materialized response fragment.
    Fixed { data: Vec<u8>, off: usize },
    /// A file copied verbatim after its header block.
    File { file: ServedFile },
    /// A file wrapped in chunked transfer encoding, with a small staging buffer for the
    /// `<len>\r\n` framing lines.
    FileChunked {
        file: ServedFile,
        to_write: u64,
        staging: [u8; CHUNK_STAGING_CAP],
        staging_off: usize,
        staging_len: usize,
    },
}

pub struct Session {
    parser: Parser,
    /// Path, serialized headers, then body; followed by the rented file buffer while writing.
    sb: Vec<u8>,
    path_len: usize,
    header_mark: usize,
    value_mark: usize,
    body_mark: usize,

    queue: VecDeque<Write>,

    // File-buffer rental state while a file write is in flight.
    buf_off: usize,
    buf_len: usize,
    started_to_write: bool,

    idle_cycles: u64,
}

impl Session {
    fn new() -> Self {
        Session {
            parser: Parser::new(),
            sb: Vec::new(),
            path_len: 0,
            header_mark: 0,
            value_mark: 0,
            body_mark: 0,
            queue: VecDeque::new(),
            buf_off: 0,
            buf_len: 0,
            started_to_write: false,
            idle_cycles: 0,
        }
    }

    fn reset(&mut self) {
        self.parser = Parser::new();
        self.sb.clear();
        self.path_len = 0;
        self.header_mark = 0;
        self.value_mark = 0;
        self.body_mark = 0;
        self.started_to_write = false;
    }

    /// The bytes of a request span.
    pub fn text(&self, span: Span) -> &[u8] {
        &self.sb[span.start..span.start + span.len]
    }

    pub fn has_pending_writes(&self) -> bool {
        !self.queue.is_empty()
    }

    fn enqueue(&mut self, write: Write) -> Result<()> {
        if self.queue.len() >= WRITE_QUEUE_CAP {
            return Err(NetError::WriteQueueFull);
        }
        self.queue.push_back(write);
        Ok(())
    }

    /// Queues a verbatim response fragment.
    pub fn enqueue_fixed(&mut self, data: Vec<u8>) -> Result<()> {
        self.enqueue(Write::Fixed { data, off: 0 })
    }

    /// Queues a whole file to be copied to the peer.
    pub fn enqueue_file(&mut self, file: ServedFile) -> Result<()> {
        self.enqueue(Write::File { file })
    }

    /// Queues a file wrapped in chunked transfer encoding.
    pub fn enqueue_file_chunked(&mut self, file: ServedFile) -> Result<()> {
        self.enqueue(Write::FileChunked {
            file,
            to_write: 0,
            staging: [0; CHUNK_STAGING_CAP],
            staging_off: CHUNK_STAGING_CAP,
            staging_len: 0,
        })
    }

}

/// The HTTP server: one session per client slot. Slot `off + i` of the shared socket set maps
/// to session `i`; the listener occupies the last slot of the server's range.
pub struct HttpServer {
    sessions: Vec<Session>,
    read_buf: [u8; 1024],
}

impl HttpServer {
    pub fn new(clients: usize) -> HttpServer {
        let mut sessions = Vec::with_capacity(clients);
        for _ in 0..clients {
            sessions.push(Session::new());
        }
        HttpServer { sessions, read_buf: [0; 1024] }
    }

    pub fn session_mut(&mut self, index: usize) -> &mut Session {
        &mut self.sessions[index]
    }

    /// Handles one sweep event for the slot range `[off, off + len)`. Returns a complete
    /// request when one arrived; the application must enqueue its whole response before the
    /// next call, because the request spans die on the next read.
    pub fn next(
        &mut self,
        set: &mut SocketSet,
        off: usize,
        len: usize,
        event: &SweepEvent,
    ) -> Result<Option<Request>> {
        // Age every live session, reaping the ones idle too long.
        for i in 0..len - 1 {
            if !set.socket(off + i).is_valid() {
                continue;
            }

            let session = &mut self.sessions[i];
            if session.idle_cycles >= IDLE_LIMIT {
                debug!("http [{}]: closing idle session", i);
                let _ = set.unregister(off + i);
                set.close(off + i);
                set.force_resweep();
            }
            else {
                session.idle_cycles += 1;
            }
        }

        let (index, mode) = match *event {
            SweepEvent::Repeat => return Ok(None),
            SweepEvent::Ready { index, mode } => (index, mode),
        };

        if set.socket(index).is_server() {
            return self.accept(set, off, len);
        }

        let session_index = index - off;
        self.sessions[session_index].idle_cycles = 0;

        match mode {
            Mode::Read => self.on_read(set, index, session_index),
            Mode::Write => {
                self.on_write(set, index, session_index)?;
                Ok(None)
            }
            Mode::Disconnect => {
                let _ = set.unregister(index);
                set.close(index);
                set.force_resweep();
                Ok(None)
            }
        }
    }

    fn accept(&mut self, set: &mut SocketSet, off: usize, len: usize) -> Result<Option<Request>> {
        let client = match set.find_invalid(off..off + len - 1) {
            Some(slot) => slot,
            None => return Err(NetError::SocketOverflow),
        };

        match set.accept(off + len - 1, client)? {
            Step::Ready(addr) => {
                debug!("http [{}]: accepted {}", client - off, addr);
            }
            Step::Repeat => return Ok(None),
        }
        set.register(client)?;

        let session = &mut self.sessions[client - off];
        session.reset();
        session.queue.clear();
        session.idle_cycles = 0;

        Ok(None)
    }

    fn on_read(
        &mut self,
        set: &mut SocketSet,
        index: usize,
        session_index: usize,
    ) -> Result<Option<Request>> {
        let session = &mut self.sessions[session_index];

        // Backpressure: don't consume more requests while responses are still queued.
        if session.has_pending_writes() {
            return Ok(None);
        }

        loop {
            let count = match set.read(index, &mut self.read_buf) {
                Ok(Step::Ready(n)) => n,
                Ok(Step::Repeat) => return Ok(None),
                Err(NetError::ConnectionClosed) | Err(NetError::ConnectionAborted) => {
                    set.close(index);
                    set.force_resweep();
                    return Ok(None);
                }
                Err(e) => return Err(e),
            };

            let mut bad_request = false;
            let mut buf = &self.read_buf[..count];

            // Bytes past the end of a complete message are dropped: responses are never
            // pipelined, so a well-behaved client has nothing there.
            while !bad_request && !buf.is_empty() && !session.parser.is_done() {
                match session.parser.process(&mut buf) {
                    Event::Error => bad_request = true,
                    Event::Key(key) => {
                        if session.sb.len() == session.header_mark {
                            session.sb.push(HEADERS_PAIR_DELIM);
                        }
                        session.sb.extend_from_slice(key);
                        session.value_mark = session.sb.len();
                    }
                    Event::Value(value) => {
                        if session.sb.len() == session.value_mark {
                            session.sb.push(HEADERS_KEY_VALUE_DELIM);
                        }
                        session.sb.extend_from_slice(value);
                    }
                    Event::Body(body) => {
                        session.sb.extend_from_slice(body);
                    }
                    Event::Process => {
                        // The builder holds "...|key:value" since the last mark; the '|' and
                        // ':' separators themselves are skipped. A line that produced no key
                        // bytes yields an empty key, which process_header rejects.
                        let key_lo = session.header_mark + 1;
                        let key_hi = session.value_mark;
                        let key: &[u8] = if key_lo <= key_hi && key_hi <= session.sb.len() {
                            &session.sb[key_lo..key_hi]
                        }
                        else {
                            &[]
                        };
                        let value: &[u8] = if session.value_mark + 1 <= session.sb.len() {
                            &session.sb[session.value_mark + 1..]
                        }
                        else {
                            &[]
                        };

                        match session.parser.process_header(key, value) {
                            HeaderEvent::Error => bad_request = true,
                            HeaderEvent::Path(path) => {
                                let path = path.to_vec();
                                session.sb.clear();
                                session.sb.extend_from_slice(&path);
                                session.path_len = session.sb.len();
                            }
                            HeaderEvent::Nothing => {}
                        }

                        session.header_mark = session.sb.len();
                        session.body_mark = session.sb.len();
                    }
                    Event::Nothing => {}
                }
            }

            if bad_request {
                info!("http [{}]: bad request", session_index);
                session.enqueue_fixed(
                    b"HTTP/1.1 400 Bad Request\r\n\
                      Content-Type: text/plain\r\n\
                      Content-Length: 11\r\n\
                      \r\n\
                      Bad Request"
                        .to_vec(),
                )?;
                set.socket_mut(index).flags.insert(SocketFlags::WRITING);
                return Ok(None);
            }

            if !session.parser.is_done() {
                continue;
            }

            // The message is complete: carve the request out of the builder.
            let target = &session.sb[..session.path_len];
            let question = target.iter().position(|&c| c == b'?');
            let (path, params) = match question {
                Some(q) => (
                    Span { start: 0, len: q },
                    Span { start: q + 1, len: session.path_len - q - 1 },
                ),
                None => (Span { start: 0, len: session.path_len }, Span::default()),
            };

            let request = Request {
                session: session_index,
                method: session.parser.method,
                path,
                params,
                body: Span {
                    start: session.body_mark,
                    len: session.sb.len() - session.body_mark,
                },
                headers: Span { start: 0, len: session.body_mark },
            };

            info!(
                "http [{}]: {} {}",
                session_index,
                request.method.name(),
                String::from_utf8_lossy(session.text(request.path)),
            );

            return Ok(Some(request));
        }
    }

    fn on_write(&mut self, set: &mut SocketSet, index: usize, session_index: usize) -> Result<()> {
        let session = &mut self.sessions[session_index];

        let mut keep_writing = true;
        while keep_writing {
            let write = match session.queue.front_mut() {
                Some(write) => write,
                None => break,
            };

            match write {
                Write::Fixed { data, off } => {
                    if *off < data.len() {
                        match set.write(index, &data[*off..]) {
                            Ok(Step::Ready(n)) => *off += n,
                            Ok(Step::Repeat) => keep_writing = false,
                            Err(e) => {
                                return abort_session(set, index, session, e);
                            }
                        }
                    }

                    if *off == data.len() {
                        session.queue.pop_front();
                    }
                }

                Write::File { file } => {
                    if !session.started_to_write {
                        session.buf_off = session.sb.len();
                        session.sb.resize(session.buf_off + SB_BUFFER_SIZE, 0);
                        session.buf_len = 0;
                        session.started_to_write = true;
                    }

                    // Top the buffer up from the file, then push it to the socket.
                    if file.remaining() > 0 && session.buf_len < SB_BUFFER_SIZE {
                        let start = session.buf_off + session.buf_len;
                        let end = session.buf_off + SB_BUFFER_SIZE;
                        match file.read(&mut session.sb[start..end]) {
                            Ok(n) => session.buf_len += n,
                            Err(e) => {
                                warn!("http [{}]: file read failed: {}", session_index, e);
                                return abort_session(set, index, session, e.into());
                            }
                        }
                    }

                    if session.buf_len > 0 {
                        let start = session.buf_off;
                        match set.write(index, &session.sb[start..start + session.buf_len]) {
                            Ok(Step::Ready(n)) => {
                                session.sb.copy_within(start + n..start + session.buf_len, start);
                                session.buf_len -= n;
                            }
                            Ok(Step::Repeat) => keep_writing = false,
                            Err(e) => {
                                return abort_session(set, index, session, e);
                            }
                        }
                    }
                    else {
                        // Buffer empty and file exhausted: this write is done.
                        session.queue.pop_front();
                    }
                }

                Write::FileChunked { file, to_write, staging, staging_off, staging_len } => {
                    if !session.started_to_write {
                        session.buf_off = session.sb.len();
                        session.sb.resize(session.buf_off + SB_BUFFER_SIZE, 0);
                        session.buf_len = 0;
                        session.started_to_write = true;
                    }

                    // First visit: stage the opening chunk-size line.
                    if *staging_off == CHUNK_STAGING_CAP {
                        *to_write = file.remaining().min(FILE_CHUNK_LEN);
                        let line = if *to_write == 0 {
                            b"0\r\n\r\n".to_vec()
                        }
                        else {
                            format!("{:x}\r\n", to_write).into_bytes()
                        };
                        staging[..line.len()].copy_from_slice(&line);
                        *staging_off = 0;
                        *staging_len = line.len();
                    }

                    // Interleave staged framing lines and file data into the buffer.
                    while (*staging_len > 0 || file.remaining() > 0)
                        && session.buf_len < SB_BUFFER_SIZE
                    {
                        while *staging_len > 0 && session.buf_len < SB_BUFFER_SIZE {
                            session.sb[session.buf_off + session.buf_len] = staging[*staging_off];
                            *staging_off += 1;
                            *staging_len -= 1;
                            session.buf_len += 1;
                        }

                        if session.buf_len == SB_BUFFER_SIZE || file.remaining() == 0 {
                            break;
                        }

                        let room = SB_BUFFER_SIZE - session.buf_len;
                        let take = (*to_write).min(room as u64) as usize;
                        let start = session.buf_off + session.buf_len;
                        let count = match file.read(&mut session.sb[start..start + take]) {
                            Ok(n) => n,
                            Err(e) => {
                                warn!("http [{}]: file read failed: {}", session_index, e);
                                return abort_session(set, index, session, e.into());
                            }
                        };
                        session.buf_len += count;
                        *to_write -= count as u64;

                        if *to_write == 0 {
                            *to_write = file.remaining().min(FILE_CHUNK_LEN);
                            let line = if *to_write == 0 {
                                b"\r\n0\r\n\r\n".to_vec()
                            }
                            else {
                                format!("\r\n{:x}\r\n", to_write).into_bytes()
                            };
                            staging[..line.len()].copy_from_slice(&line);
                            *staging_off = 0;
                            *staging_len = line.len();
                        }
                    }

                    if session.buf_len > 0 {
                        let start = session.buf_off;
                        match set.write(index, &session.sb[start..start + session.buf_len]) {
                            Ok(Step::Ready(n)) => {
                                session.sb.copy_within(start + n..start + session.buf_len, start);
                                session.buf_len -= n;
                            }
                            Ok(Step::Repeat) => keep_writing = false,
                            Err(e) => {
                                return abort_session(set, index, session, e);
                            }
                        }
                    }
                    else {
                        session.queue.pop_front();
                    }
                }
            }
        }

        if session.queue.is_empty() {
            // The response went out whole; rearm for the next request on this connection.
            session.reset();
            set.socket_mut(index).flags.remove(SocketFlags::WRITING);
        }

        Ok(())
    }
}

fn abort_session(
    set: &mut SocketSet,
    index: usize,
    session: &mut Session,
    err: NetError,
) -> Result<()> {
    match err {
        NetError::ConnectionAborted | NetError::ConnectionClosed => {
            session.queue.clear();
            set.close(index);
            set.force_resweep();
            Ok(())
        }
        other => Err(other),
    }
}

/// Case-insensitive lookup in a serialized `|key:value|...` header list.
pub fn headers_find<'a>(headers: &'a [u8], name: &[u8]) -> Option<&'a [u8]> {
    for pair in headers.split(|&c| c == HEADERS_PAIR_DELIM) {
        if let Some(colon) = pair.iter().position(|&c| c == HEADERS_KEY_VALUE_DELIM) {
            if eq_ignorecase(&pair[..colon], name) {
                return Some(&pair[colon + 1..]);
            }
        }
    }
    None
}

/// Checks HTTP Basic credentials; on failure the 401 challenge is queued and `false`
/// returned. HEAD requests get the challenge without a body.
pub fn is_authenticated(
    session: &mut Session,
    request: &Request,
    username: &[u8],
    password: &[u8],
) -> Result<bool> {
    let mut authenticated = false;

    let headers = session.text(request.headers);
    if let Some(authorization) = headers_find(headers, b"Authorization") {
        // "Basic <base64(user:pass)>"
        let mut words = authorization.splitn(2, |&c| c == b' ');
        let scheme = words.next().unwrap_or(b"");
        let credentials = words.next().unwrap_or(b"");

        if eq_ignorecase(scheme, b"Basic") {
            if let Ok(decoded) = base64::decode(credentials) {
                if let Some(colon) = decoded.iter().position(|&c| c == b':') {
                    authenticated =
                        &decoded[..colon] == username && &decoded[colon + 1..] == password;
                }
            }
        }
    }

    if !authenticated {
        if request.method == Method::Head {
            session.enqueue_fixed(
                b"HTTP/1.1 401 Unauthorized\r\n\
                  WWW-Authenticate: Basic realm=\"User Visible Realm\"\r\n\
                  \r\n"
                    .to_vec(),
            )?;
        }
        else {
            session.enqueue_fixed(
                b"HTTP/1.1 401 Unauthorized\r\n\
                  WWW-Authenticate: Basic realm=\"User Visible Realm\"\r\n\
                  Content-Type: text/plain\r\n\
                  Content-Length: 12\r\n\
                  \r\n\
                  Unauthorized"
                    .to_vec(),
            )?;
        }
        return Ok(false);
    }

    Ok(true)
}

/// Serves `GET` and `HEAD` from `root`; everything else gets a 501.
pub fn serve_files(session: &mut Session, root: &std::path::Path, request: &Request) -> Result<()> {
    match request.method {
        Method::Get => serve_files_get(session, root, request),
        Method::Head => serve_files_head(session, root, request),
        _ => session.enqueue_fixed(
            b"HTTP/1.1 501 Not Implemented\r\n\
              Content-Type: text/plain\r\n\
              Content-Length: 15\r\n\
              \r\n\
              Not Implemented"
                .to_vec(),
        ),
    }
}

fn serve_files_get(session: &mut Session, root: &std::path::Path, request: &Request) -> Result<()> {
    let path = match translate_path(session, root, request)? {
        Some(path) => path,
        None => return Ok(()),
    };

    let file = match open_file(session, &path)? {
        Some(file) => file,
        None => return Ok(()),
    };

    let content_type = guess_content_type(&path);
    session.enqueue_fixed(
        format!(
            "HTTP/1.1 200 OK\r\n\
             Content-Length: {}\r\n\
             Content-Type: {}\r\n\
             \r\n",
            file.size(),
            content_type
        )
        .into_bytes(),
    )?;
    session.enqueue_file(file)
}

fn serve_files_head(
    session: &mut Session,
    root: &std::path::Path,
    request: &Request,
) -> Result<()> {
    let path = match translate_path(session, root, request)? {
        Some(path) => path,
        None => return Ok(()),
    };

    let file = match open_file(session, &path)? {
        Some(file) => file,
        None => return Ok(()),
    };

    let content_type = guess_content_type(&path);
    session.enqueue_fixed(
        format!(
            "HTTP/1.1 200 OK\r\n\
             Content-Length: {}\r\n\
             Content-Type: {}\r\n\
             \r\n",
            file.size(),
            content_type
        )
        .into_bytes(),
    )
    // Dropping the file closes it; HEAD sends no body.
}

/// Serves a file with chunked transfer encoding instead of a Content-Length.
pub fn serve_file_chunked(
    session: &mut Session,
    root: &std::path::Path,
    request: &Request,
) -> Result<()> {
    let path = match translate_path(session, root, request)? {
        Some(path) => path,
        None => return Ok(()),
    };

    let file = match open_file(session, &path)? {
        Some(file) => file,
        None => return Ok(()),
    };

    let content_type = guess_content_type(&path);
    session.enqueue_fixed(
        format!(
            "HTTP/1.1 200 OK\r\n\
             Transfer-Encoding: chunked\r\n\
             Content-Type: {}\r\n\
             \r\n",
            content_type
        )
        .into_bytes(),
    )?;
    session.enqueue_file_chunked(file)
}

/// Maps the request target onto the filesystem. `/` becomes `/index.html`; any target
/// containing `/..` is refused with a 405 and `None`.
fn translate_path(
    session: &mut Session,
    root: &std::path::Path,
    request: &Request,
) -> Result<Option<PathBuf>> {
    let raw = session.text(request.path);

    if raw.windows(3).any(|w| w == b"/..") {
        session.enqueue_fixed(
            b"HTTP/1.1 405 Not Allowed\r\n\
              Content-Type: text/plain\r\n\
              Content-Length: 11\r\n\
              \r\n\
              Not Allowed"
                .to_vec(),
        )?;
        return Ok(None);
    }

    let raw: &[u8] = if raw == b"/" { b"/index.html" } else { raw };

    let mut path = root.to_path_buf();
    for part in raw.split(|&c| c == b'/') {
        if part.is_empty() {
            continue;
        }
        path.push(String::from_utf8_lossy(part).as_ref());
    }

    Ok(Some(path))
}

/// Opens a file for serving; on failure queues the 404/500 response and returns `None`.
fn open_file(session: &mut Session, path: &std::path::Path) -> Result<Option<ServedFile>> {
    match ServedFile::open(path) {
        Ok(file) => Ok(Some(file)),
        Err(ref e)
            if e.kind() == std::io::ErrorKind::NotFound
                || e.kind() == std::io::ErrorKind::PermissionDenied =>
        {
            session.enqueue_fixed(
                b"HTTP/1.1 404 Not Found\r\n\
                  Content-Length: 9\r\n\
                  Content-Type: text/plain\r\n\
                  \r\n\
                  Not Found"
                    .to_vec(),
            )?;
            Ok(None)
        }
        Err(_) => {
            session.enqueue_fixed(
                b"HTTP/1.1 500 Internal Server Error\r\n\
                  Content-Length: 21\r\n\
                  Content-Type: text/plain\r\n\
                  \r\n\
                  Internal Server Error"
                    .to_vec(),
            )?;
            Ok(None)
        }
    }
}

/// Guesses a Content-Type from the extension; `application/octet-stream` when in doubt.
fn guess_content_type(path: &std::path::Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") => "text/html",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_headers_find() {
        let headers = b"/|Host:localhost|Content-Type:text/plain|X-Empty:";
        assert_eq!(headers_find(headers, b"host"), Some(&b"localhost"[..]));
        assert_eq!(headers_find(headers, b"CONTENT-TYPE"), Some(&b"text/plain"[..]));
        assert_eq!(headers_find(headers, b"x-empty"), Some(&b""[..]));
        assert_eq!(headers_find(headers, b"missing"), None);
    }

    #[test]
    fn verify_headers_find_keeps_colons_in_values() {
        let headers = b"|Referer:http://x/y";
        assert_eq!(headers_find(headers, b"referer"), Some(&b"http://x/y"[..]));
    }

    #[test]
    fn verify_write_queue_bound() {
        let mut session = Session::new();
        for _ in 0..WRITE_QUEUE_CAP {
            session.enqueue_fixed(b"x".to_vec()).unwrap();
        }
        assert!(matches!(
            session.enqueue_fixed(b"overflow".to_vec()),
            Err(NetError::WriteQueueFull)
        ));
    }

    #[test]
    fn verify_guess_content_type() {
        use std::path::Path;
        assert_eq!(guess_content_type(Path::new("a/index.html")), "text/html");
        assert_eq!(guess_content_type(Path::new("notes.txt")), "text/plain");
        assert_eq!(guess_content_type(Path::new("blob.bin")), "application/octet-stream");
        assert_eq!(guess_content_type(Path::new("no_extension")), "application/octet-stream");
    }
}
