// Fermata
// Copyright (c) 2024 The Fermata Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;
use std::io;
use std::result;

/// Errors surfaced by the socket layer and the protocol sessions built on it.
///
/// A socket that would block is never an error: those operations return [`Step::Repeat`]
/// instead.
#[derive(Debug)]
pub enum NetError {
    /// Host name resolution produced no usable address.
    UnknownHostname,
    /// Every client slot of the socket set is in use.
    SocketOverflow,
    /// A session's bounded write queue is full; the response must be dropped or the session
    /// closed.
    WriteQueueFull,
    /// The peer shut the connection down in an orderly fashion.
    ConnectionClosed,
    ConnectionRefused,
    ConnectionAborted,
    /// The slot does not hold a usable socket.
    InvalidSlot,
    IoError(io::Error),
}

impl fmt::Display for NetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            NetError::UnknownHostname => write!(f, "unknown hostname"),
            NetError::SocketOverflow => write!(f, "no free socket slot"),
            NetError::WriteQueueFull => write!(f, "session write queue is full"),
            NetError::ConnectionClosed => write!(f, "connection closed by peer"),
            NetError::ConnectionRefused => write!(f, "connection refused"),
            NetError::ConnectionAborted => write!(f, "connection aborted"),
            NetError::InvalidSlot => write!(f, "socket slot is not in use"),
            NetError::IoError(ref err) => write!(f, "io error: {}", err),
        }
    }
}

impl std::error::Error for NetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            NetError::IoError(ref err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for NetError {
    fn from(err: io::Error) -> NetError {
        match err.kind() {
            io::ErrorKind::ConnectionReset => NetError::ConnectionClosed,
            io::ErrorKind::BrokenPipe => NetError::ConnectionClosed,
            io::ErrorKind::ConnectionAborted => NetError::ConnectionAborted,
            io::ErrorKind::ConnectionRefused => NetError::ConnectionRefused,
            _ => NetError::IoError(err),
        }
    }
}

pub type Result<T> = result::Result<T, NetError>;

/// Outcome of one non-blocking step: either it made progress, or the socket was not ready and
/// the exact same call may be repeated later. `Repeat` promises that nothing observable
/// changed.
#[derive(Debug)]
pub enum Step<T> {
    Ready(T),
    Repeat,
}

impl<T> Step<T> {
    pub fn is_repeat(&self) -> bool {
        matches!(self, Step::Repeat)
    }
}
