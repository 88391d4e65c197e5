// Fermata
// Copyright (c) 2024 The Fermata Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The socket multiplexer: a dense array of flagged socket slots plus a readiness backend.
//!
//! On Linux the backend is `epoll(7)`, edge triggered, draining up to twelve buffered events
//! one readiness mode at a time. Elsewhere it is `select(2)`, rebuilding the fd sets on every
//! sweep and iterating the slots with a resumable read-then-write cursor. Both deliver
//! `(slot, mode)` pairs; ordering within one sweep is stable, across sweeps unspecified.
//!
//! All sockets a server touches are non-blocking; [`SocketSet::open_client`] is the only call
//! that blocks (name resolution and connect).

use std::net::{Ipv4Addr, SocketAddr, ToSocketAddrs, UdpSocket};

use socket2::{Domain, Protocol, Type};

use crate::errors::{NetError, Result, Step};

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct SocketFlags: u32 {
        const VALID    = 0x01;
        const CLIENT   = 0x02;
        const SERVER   = 0x04;
        const BLOCKING = 0x08;
        /// The owner wants `Mode::Write` events for this slot.
        const WRITING  = 0x10;
    }
}

/// Readiness modes reported by [`SocketSet::next`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Read,
    Write,
    Disconnect,
}

/// One sweep outcome as the driver loop hands it to the protocol servers.
#[derive(Clone, Copy, Debug)]
pub enum SweepEvent {
    /// The multiplexer found nothing ready; sessions still age their idle counters.
    Repeat,
    Ready { index: usize, mode: Mode },
}

/// One socket slot. Invalid slots carry no descriptor and empty flags, and are freely reused.
pub struct Socket {
    inner: Option<socket2::Socket>,
    pub flags: SocketFlags,
}

impl Socket {
    fn invalid() -> Self {
        Socket { inner: None, flags: SocketFlags::empty() }
    }

    pub fn is_valid(&self) -> bool {
        self.flags.contains(SocketFlags::VALID)
    }

    pub fn is_server(&self) -> bool {
        self.flags.contains(SocketFlags::SERVER)
    }
}

pub struct SocketSet {
    sockets: Vec<Socket>,
    backend: Backend,
}

impl SocketSet {
    /// Allocates a set of `n` invalid slots.
    pub fn open(n: usize) -> Result<SocketSet> {
        let mut sockets = Vec::with_capacity(n);
        for _ in 0..n {
            sockets.push(Socket::invalid());
        }
        Ok(SocketSet { sockets, backend: Backend::open()? })
    }

    pub fn len(&self) -> usize {
        self.sockets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sockets.is_empty()
    }

    pub fn socket(&self, index: usize) -> &Socket {
        &self.sockets[index]
    }

    pub fn socket_mut(&mut self, index: usize) -> &mut Socket {
        &mut self.sockets[index]
    }

    /// The first invalid slot in `range`, if any.
    pub fn find_invalid(&self, range: std::ops::Range<usize>) -> Option<usize> {
        self.sockets[range.clone()].iter().position(|s| !s.is_valid()).map(|p| range.start + p)
    }

    /// Resolves `host` and connects. Blocks for the duration of both; the socket is left in
    /// blocking mode until the caller says otherwise.
    pub fn open_client(&mut self, index: usize, host: &str, port: u16) -> Result<()> {
        let addr = (host, port)
            .to_socket_addrs()
            .map_err(|_| NetError::UnknownHostname)?
            .find(|a| a.is_ipv4())
            .ok_or(NetError::UnknownHostname)?;

        let socket = socket2::Socket::new(Domain::IPV4, Type::STREAM, Some(Protocol::TCP))?;
        socket.connect(&addr.into())?;

        self.sockets[index] = Socket {
            inner: Some(socket),
            flags: SocketFlags::VALID | SocketFlags::CLIENT | SocketFlags::BLOCKING,
        };
        Ok(())
    }

    /// Binds and listens on `port` (0 picks an ephemeral port; see [`SocketSet::local_port`]).
    pub fn open_server(&mut self, index: usize, port: u16, blocking: bool) -> Result<()> {
        let socket = socket2::Socket::new(Domain::IPV4, Type::STREAM, Some(Protocol::TCP))?;
        socket.set_reuse_address(true)?;
        #[cfg(unix)]
        socket.set_reuse_port(true)?;

        let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
        socket.bind(&addr.into())?;
        socket.set_nonblocking(!blocking)?;
        socket.listen(128)?;

        let mut flags = SocketFlags::VALID | SocketFlags::SERVER;
        if blocking {
            flags |= SocketFlags::BLOCKING;
        }
        self.sockets[index] = Socket { inner: Some(socket), flags };
        Ok(())
    }

    /// Accepts a pending connection on `server` into `client`. The client inherits the
    /// server's blocking mode.
    pub fn accept(&mut self, server: usize, client: usize) -> Result<Step<SocketAddr>> {
        let listener = self.sockets[server].inner.as_ref().ok_or(NetError::InvalidSlot)?;

        let (socket, addr) = match listener.accept() {
            Ok(pair) => pair,
            Err(ref e) if e.kind() == std::io::ErrorKind::WouldBlock => return Ok(Step::Repeat),
            Err(e) => return Err(e.into()),
        };

        let blocking = self.sockets[server].flags.contains(SocketFlags::BLOCKING);
        socket.set_nonblocking(!blocking)?;

        let mut flags = SocketFlags::VALID | SocketFlags::CLIENT;
        if blocking {
            flags |= SocketFlags::BLOCKING;
        }
        self.sockets[client] = Socket { inner: Some(socket), flags };

        let addr = addr.as_socket().ok_or(NetError::InvalidSlot)?;
        Ok(Step::Ready(addr))
    }

    pub fn read(&mut self, index: usize, buf: &mut [u8]) -> Result<Step<usize>> {
        use std::io::Read;

        let mut socket = self.sockets[index].inner.as_ref().ok_or(NetError::InvalidSlot)?;
        match socket.read(buf) {
            Ok(0) => Err(NetError::ConnectionClosed),
            Ok(n) => Ok(Step::Ready(n)),
            Err(ref e) if e.kind() == std::io::ErrorKind::WouldBlock => Ok(Step::Repeat),
            Err(e) => Err(e.into()),
        }
    }

    pub fn write(&mut self, index: usize, buf: &[u8]) -> Result<Step<usize>> {
        use std::io::Write;

        let mut socket = self.sockets[index].inner.as_ref().ok_or(NetError::InvalidSlot)?;
        match socket.write(buf) {
            Ok(0) => Err(NetError::ConnectionClosed),
            Ok(n) => Ok(Step::Ready(n)),
            Err(ref e) if e.kind() == std::io::ErrorKind::WouldBlock => Ok(Step::Repeat),
            Err(e) => Err(e.into()),
        }
    }

    pub fn set_blocking(&mut self, index: usize, blocking: bool) -> Result<()> {
        let socket = self.sockets[index].inner.as_ref().ok_or(NetError::InvalidSlot)?;
        socket.set_nonblocking(!blocking)?;
        if blocking {
            self.sockets[index].flags.insert(SocketFlags::BLOCKING);
        }
        else {
            self.sockets[index].flags.remove(SocketFlags::BLOCKING);
        }
        Ok(())
    }

    /// The peer address of a connected slot.
    pub fn peer_addr(&self, index: usize) -> Result<SocketAddr> {
        let socket = self.sockets[index].inner.as_ref().ok_or(NetError::InvalidSlot)?;
        let addr = socket.peer_addr()?;
        addr.as_socket().ok_or(NetError::InvalidSlot)
    }

    /// The locally bound port of a listener; useful after binding port 0.
    pub fn local_port(&self, index: usize) -> Result<u16> {
        let socket = self.sockets[index].inner.as_ref().ok_or(NetError::InvalidSlot)?;
        let addr = socket.local_addr()?;
        addr.as_socket().map(|a| a.port()).ok_or(NetError::InvalidSlot)
    }

    /// Subscribes the slot to the readiness backend.
    pub fn register(&mut self, index: usize) -> Result<()> {
        self.backend.register(&self.sockets[index], index)
    }

    pub fn unregister(&mut self, index: usize) -> Result<()> {
        self.backend.unregister(&self.sockets[index])
    }

    /// Closes the slot's socket and marks the slot invalid.
    pub fn close(&mut self, index: usize) {
        self.sockets[index] = Socket::invalid();
    }

    /// Forces the next [`SocketSet::next`] call to start a fresh readiness sweep. Sessions
    /// call this after tearing a connection down mid-sweep.
    pub fn force_resweep(&mut self) {
        self.backend.force_resweep();
    }

    /// The next ready (slot, mode) pair, or `Repeat` when the current sweep is drained. The
    /// caller is expected to keep looping.
    pub fn next(&mut self) -> Result<Step<(usize, Mode)>> {
        self.backend.next(&self.sockets)
    }
}

/// The local IPv4 address used for outbound traffic, for protocol replies that embed it.
pub fn local_ipv4() -> Result<Ipv4Addr> {
    let probe = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0))?;
    probe.connect(("8.8.8.8", 80))?;
    match probe.local_addr()? {
        SocketAddr::V4(a) => Ok(*a.ip()),
        SocketAddr::V6(_) => Err(NetError::UnknownHostname),
    }
}

#[cfg(target_os = "linux")]
use self::epoll::Backend;
#[cfg(not(target_os = "linux"))]
use self::select::Backend;

#[cfg(target_os = "linux")]
mod epoll {
    use std::os::fd::{AsRawFd, RawFd};

    use crate::errors::{NetError, Result, Step};

    use super::{Mode, Socket, SocketFlags};

    const MAX_EVENTS: usize = 12;

    pub struct Backend {
        epfd: RawFd,
        events: [libc::epoll_event; MAX_EVENTS],
        /// Ready events not yet fully delivered; -1 requests a new `epoll_wait`.
        pending: i32,
        offset: usize,
    }

    impl Backend {
        pub fn open() -> Result<Backend> {
            let epfd = unsafe { libc::epoll_create1(libc::EPOLL_CLOEXEC) };
            if epfd < 0 {
                return Err(std::io::Error::last_os_error().into());
            }
            Ok(Backend {
                epfd,
                events: [libc::epoll_event { events: 0, u64: 0 }; MAX_EVENTS],
                pending: -1,
                offset: 0,
            })
        }

        pub fn register(&mut self, socket: &Socket, index: usize) -> Result<()> {
            let fd = socket.inner.as_ref().ok_or(NetError::InvalidSlot)?.as_raw_fd();

            // Servers only ever accept; clients get the full readiness mask up front and the
            // WRITING flag decides whether Write events are delivered.
            let interest = if socket.is_server() {
                libc::EPOLLIN as u32 | libc::EPOLLET as u32
            }
            else {
                libc::EPOLLIN as u32
                    | libc::EPOLLET as u32
                    | libc::EPOLLRDHUP as u32
                    | libc::EPOLLHUP as u32
                    | libc::EPOLLOUT as u32
            };

            let mut event = libc::epoll_event { events: interest, u64: index as u64 };
            if unsafe { libc::epoll_ctl(self.epfd, libc::EPOLL_CTL_ADD, fd, &mut event) } != 0 {
                return Err(std::io::Error::last_os_error().into());
            }
            Ok(())
        }

        pub fn unregister(&mut self, socket: &Socket) -> Result<()> {
            let fd = socket.inner.as_ref().ok_or(NetError::InvalidSlot)?.as_raw_fd();
            if unsafe {
                libc::epoll_ctl(self.epfd, libc::EPOLL_CTL_DEL, fd, std::ptr::null_mut())
            } != 0
            {
                return Err(std::io::Error::last_os_error().into());
            }
            Ok(())
        }

        pub fn force_resweep(&mut self) {
            // Buffered edge-triggered events must not be dropped; stale events for closed
            // slots are filtered at delivery instead.
        }

        pub fn next(&mut self, sockets: &[Socket]) -> Result<Step<(usize, Mode)>> {
            if self.pending < 0 {
                let n = unsafe {
                    libc::epoll_wait(self.epfd, self.events.as_mut_ptr(), MAX_EVENTS as i32, 10)
                };
                if n < 0 {
                    let err = std::io::Error::last_os_error();
                    if err.kind() == std::io::ErrorKind::Interrupted {
                        return Ok(Step::Repeat);
                    }
                    return Err(err.into());
                }
                self.pending = n;
                self.offset = 0;
            }

            loop {
                if self.pending == 0 {
                    self.pending = -1;
                    return Ok(Step::Repeat);
                }

                let event = &mut self.events[self.offset];
                let index = event.u64 as usize;

                // The slot may have been torn down after this event was buffered.
                if index >= sockets.len() || !sockets[index].is_valid() {
                    self.offset += 1;
                    self.pending -= 1;
                    continue;
                }

                let hup =
                    libc::EPOLLRDHUP as u32 | libc::EPOLLHUP as u32 | libc::EPOLLERR as u32;
                if event.events & hup != 0 {
                    event.events &= !hup;
                    return Ok(Step::Ready((index, Mode::Disconnect)));
                }

                if event.events & libc::EPOLLIN as u32 != 0 {
                    event.events &= !(libc::EPOLLIN as u32);
                    return Ok(Step::Ready((index, Mode::Read)));
                }

                if event.events & libc::EPOLLOUT as u32 != 0 {
                    event.events &= !(libc::EPOLLOUT as u32);

                    if sockets[index].flags.contains(SocketFlags::WRITING) {
                        return Ok(Step::Ready((index, Mode::Write)));
                    }
                }

                self.offset += 1;
                self.pending -= 1;
            }
        }
    }

    impl Drop for Backend {
        fn drop(&mut self) {
            unsafe {
                libc::close(self.epfd);
            }
        }
    }
}

#[cfg(not(target_os = "linux"))]
mod select {
    use std::mem;
    use std::os::fd::AsRawFd;

    use crate::errors::{Result, Step};

    use super::{Mode, Socket, SocketFlags};

    pub struct Backend {
        read_set: libc::fd_set,
        write_set: libc::fd_set,
        /// Ready descriptors not yet delivered; -1 requests a fresh `select`.
        pending: i32,
        offset: usize,
    }

    impl Backend {
        pub fn open() -> Result<Backend> {
            let (read_set, write_set) = unsafe {
                let mut r = mem::zeroed::<libc::fd_set>();
                let mut w = mem::zeroed::<libc::fd_set>();
                libc::FD_ZERO(&mut r);
                libc::FD_ZERO(&mut w);
                (r, w)
            };
            Ok(Backend { read_set, write_set, pending: -1, offset: 0 })
        }

        pub fn register(&mut self, _socket: &Socket, _index: usize) -> Result<()> {
            // The fd sets are rebuilt from the slot flags on every sweep.
            Ok(())
        }

        pub fn unregister(&mut self, _socket: &Socket) -> Result<()> {
            Ok(())
        }

        pub fn force_resweep(&mut self) {
            self.pending = -1;
        }

        pub fn next(&mut self, sockets: &[Socket]) -> Result<Step<(usize, Mode)>> {
            if self.pending < 0 {
                let mut nfds = 0;
                let mut writers = 0;

                unsafe {
                    libc::FD_ZERO(&mut self.read_set);
                    libc::FD_ZERO(&mut self.write_set);
                }

                for socket in sockets.iter() {
                    let fd = match socket.inner.as_ref() {
                        Some(s) if socket.is_valid() => s.as_raw_fd(),
                        _ => continue,
                    };

                    unsafe { libc::FD_SET(fd, &mut self.read_set) };
                    nfds = nfds.max(fd + 1);

                    if !socket.is_server() && socket.flags.contains(SocketFlags::WRITING) {
                        unsafe { libc::FD_SET(fd, &mut self.write_set) };
                        writers += 1;
                    }
                }

                // Poll with a whisker of a timeout unless a writer is waiting.
                let mut timeout = libc::timeval {
                    tv_sec: 0,
                    tv_usec: (writers == 0) as libc::suseconds_t,
                };

                let n = unsafe {
                    libc::select(
                        nfds,
                        &mut self.read_set,
                        &mut self.write_set,
                        std::ptr::null_mut(),
                        &mut timeout,
                    )
                };
                if n < 0 {
                    let err = std::io::Error::last_os_error();
                    if err.kind() == std::io::ErrorKind::Interrupted {
                        return Ok(Step::Repeat);
                    }
                    return Err(err.into());
                }
                self.pending = n;
                self.offset = 0;
            }

            if self.pending == 0 {
                self.pending = -1;
                return Ok(Step::Repeat);
            }

            // Walk the slots in two phases, read then write, resuming where the previous call
            // left off.
            while self.offset < sockets.len() * 2 {
                let i = self.offset / 2;
                let socket = &sockets[i];

                let fd = match socket.inner.as_ref() {
                    Some(s) if socket.is_valid() => s.as_raw_fd(),
                    _ => {
                        self.offset = (i + 1) * 2;
                        continue;
                    }
                };

                if self.offset % 2 == 0 {
                    self.offset += 1;

                    if unsafe { libc::FD_ISSET(fd, &self.read_set) } {
                        self.pending -= 1;
                        return Ok(Step::Ready((i, Mode::Read)));
                    }
                }
                self.offset += 1;

                if !socket.is_server()
                    && socket.flags.contains(SocketFlags::WRITING)
                    && unsafe { libc::FD_ISSET(fd, &self.write_set) }
                {
                    self.pending -= 1;
                    return Ok(Step::Ready((i, Mode::Write)));
                }
            }

            self.pending = -1;
            Ok(Step::Repeat)
        }
    }
}
