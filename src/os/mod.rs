//! Operating system entropy layer
//!
//! This module provides a unified, platform-independent interface to the
//! operating system's cryptographically secure random source.
//!
//! Platform-specific implementations are selected at compile time using
//! conditional compilation. Each submodule exposes the same
//! `sys_random(&mut [u8]) -> Result<(), Error>` function, so the rest of the
//! crate never has to know which kernel interface it is talking to.
//!
//! Failures are reported, not panicked on: the caller decides that an
//! unreadable entropy source ends the process.

#[cfg(target_os = "macos")]
pub(crate) mod macos;

#[cfg(target_os = "macos")]
pub(crate) use macos::*;

#[cfg(target_os = "linux")]
pub(crate) mod linux;

#[cfg(target_os = "linux")]
pub(crate) use linux::*;

#[cfg(target_os = "windows")]
pub(crate) mod windows;

#[cfg(target_os = "windows")]
pub(crate) use windows::*;
