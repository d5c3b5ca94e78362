//! Internal utilities shared by the halite crates
//!
//! This crate collects the small, dependency-light helpers the rest of the
//! workspace is built on: constant-time comparison and selection, fixed-width
//! little/big-endian loads and stores, and hex/base64 conversion. Nothing in
//! here is algorithm-specific.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod constant_time;
#[cfg(feature = "alloc")]
pub mod encoding;
pub mod endian;
