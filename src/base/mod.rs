//! Base types and error handling.
//!
//! Provides foundational types mirroring Chromium's `net/base/`:
//! - [`NetError`](neterror::NetError): Network error codes matching `net_error_list.h`
//! - [`IoResultExt`](context::IoResultExt): IO-to-`NetError` context helpers

pub mod context;
pub mod neterror;

#[cfg(test)]
mod tests;
