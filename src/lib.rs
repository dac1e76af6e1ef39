// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Utilities for converting free-form titles into slugs.
//!
//! A slug contains only ASCII alphanumeric characters joined by a single
//! separator, with no separator at either end and never two in a row. The
//! conversion is a pure, total function: it holds no state, performs no I/O
//! and returns an empty string instead of failing. Helpers are provided for
//! loading [`SlugOptions`] from YAML and for slugging many inputs in parallel.

mod batch;
mod config;
mod error;
mod kludge;
mod slug;

pub use batch::{SlugRecord, slug_all, slug_records};
pub use config::{DEFAULT_SEPARATOR, SlugOptions};
pub use error::{Error, io_error};
pub use slug::{SlugStrategy, post_slug, post_slug_lossy, slugify};
