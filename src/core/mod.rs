//! Core library components.
//!
//! Reusable logic for SSH config management, key provisioning, and
//! clipboard publishing. The external collaborators (ssh-keygen, platform
//! clipboard utilities) sit behind small traits so tests can swap in fakes.

pub mod clipboard;
pub mod config;
pub mod constants;
pub mod keys;
