// Fermata
// Copyright (c) 2024 The Fermata Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP/1.1: the incremental request parser and the per-connection server session.

pub mod parser;
pub mod server;

pub use parser::{Event, HeaderEvent, Method, Parser};
pub use server::{HttpServer, Request, ServedFile, Session, Span};
