// Fermata
// Copyright (c) 2024 The Fermata Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Single-threaded cooperative networking: a readiness-driven socket set, an incremental
//! HTTP/1.1 request parser, and per-connection HTTP and FTP server state machines that share
//! one socket set.
//!
//! Nothing here spawns a thread. A driver loop pulls readiness events from
//! [`mux::SocketSet::next`] and dispatches each to the session owning the slot; sessions do
//! bounded work and yield whenever a socket would block.

pub mod errors;
pub mod ftp;
pub mod http;
pub mod mux;

pub use errors::{NetError, Result, Step};
