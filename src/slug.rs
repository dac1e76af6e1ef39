// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Utilities for deriving stable slugs from user-supplied strings.
//!
//! Slugs produced by this module contain only ASCII alphanumeric characters
//! joined by a single configurable separator, making them suitable for URLs
//! and filesystem paths across platforms. The transform is a fixed pipeline:
//!
//! 1. single code point kludges,
//! 2. multi code point kludges,
//! 3. HTML entity stripping,
//! 4. compatibility decomposition followed by dropping non-ASCII output,
//! 5. quote removal,
//! 6. optional lowercasing,
//! 7. collapsing every non-alphanumeric run into one separator,
//! 8. optional truncation on the last separator.
//!
//! Stage order is significant. Every stage is total, so the pipeline never
//! fails; input without slug-worthy characters yields an empty string.

use std::sync::LazyLock;

use regex::{NoExpand, Regex};
use tracing::trace;
use unicode_normalization::UnicodeNormalization;

use crate::{config::SlugOptions, kludge};

/// `&`, the shortest run of non-whitespace, then `;`. Matches entities such as
/// `&amp;` and anything else shaped like one.
static HTML_ENTITY: LazyLock<Regex,> =
    LazyLock::new(|| Regex::new(r"&\S*?;",).expect("HTML entity pattern must compile",),);

/// Quote-like characters removed without leaving a separator behind.
pub(crate) const QUOTES: &[char] = &['"', '\'', '`', '\u{2019}', '\u{00B4}'];

/// Converts `input` into a slug using the provided options.
///
/// # Examples
///
/// ```
/// use post_slug::{SlugOptions, slugify};
///
/// let options = SlugOptions::default();
/// assert_eq!(slugify("Barnes &amp; Noble", &options,), "barnes-noble");
/// ```
pub fn slugify(input: &str, options: &SlugOptions,) -> String
{
    if input.is_empty() {
        return String::new();
    }

    let separator = SlugOptions::sanitize_separator(options.separator,);
    let mut separator_buffer = [0_u8; 4];
    let separator_str: &str = separator.encode_utf8(&mut separator_buffer,);

    let substituted = kludge::apply_single_char(input,);
    let substituted = kludge::apply_multi_char(&substituted,);
    trace!(stage = "kludges", output = %substituted);

    let without_entities = HTML_ENTITY.replace_all(&substituted, NoExpand(separator_str,),);
    trace!(stage = "html_entities", output = %without_entities);

    let ascii = without_entities
        .nfkd()
        .filter(char::is_ascii,)
        .filter(|candidate| !QUOTES.contains(candidate,),)
        .map(|candidate| {
            if options.preserve_case { candidate } else { candidate.to_ascii_lowercase() }
        },);

    let slug = collapse(ascii, separator, input.len(),);
    trace!(stage = "collapse", output = %slug);

    truncate_on_separator(slug, separator, options.max_len,)
}

/// Joins alphanumeric runs with a single separator, dropping everything else.
fn collapse<I,>(characters: I, separator: char, capacity: usize,) -> String
where
    I: Iterator<Item = char,>,
{
    let mut slug = String::with_capacity(capacity,);
    let mut pending_separator = false;

    for candidate in characters {
        if candidate.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push(separator,);
            }
            pending_separator = false;
            slug.push(candidate,);
        } else {
            pending_separator = true;
        }
    }

    slug
}

/// Cuts `slug` to `max_len` characters, then back to the last separator in
/// the kept prefix. A prefix without a separator is kept as is.
fn truncate_on_separator(mut slug: String, separator: char, max_len: usize,) -> String
{
    if max_len == 0 {
        return slug;
    }

    let Some((cut, _,),) = slug.char_indices().nth(max_len,) else {
        return slug;
    };
    slug.truncate(cut,);

    if let Some(position,) = slug.rfind(separator,) {
        slug.truncate(position,);
    }
    trace!(stage = "truncate", max_len, output = %slug);

    slug
}

/// Converts a possibly absent string into a slug.
///
/// This is the positional form of [`slugify`]: `sep_char` goes through
/// [`SlugOptions::separator_from_str`], so an empty separator becomes `-` and
/// a longer one contributes its first character. `None` behaves like an empty
/// string. `max_len == 0` disables truncation.
///
/// # Examples
///
/// ```
/// use post_slug::post_slug;
///
/// assert_eq!(post_slug(Some("Hello, World!"), "-", false, 0,), "hello-world");
/// assert_eq!(post_slug(Some("Hello, World!"), "_", true, 0,), "Hello_World");
/// assert_eq!(post_slug(None, "-", false, 0,), "");
/// ```
pub fn post_slug(input: Option<&str,>, sep_char: &str, preserve_case: bool, max_len: usize,) -> String
{
    let options = SlugOptions {
        separator: SlugOptions::separator_from_str(sep_char,),
        preserve_case,
        max_len,
    };

    slugify(input.unwrap_or_default(), &options,)
}

/// Converts raw bytes into a slug, ignoring sequences that are not valid
/// UTF-8.
///
/// # Examples
///
/// ```
/// use post_slug::{SlugOptions, post_slug_lossy};
///
/// let slug = post_slug_lossy(b"caf\xff bar", &SlugOptions::default(),);
/// assert_eq!(slug, "caf-bar");
/// ```
pub fn post_slug_lossy(input: &[u8], options: &SlugOptions,) -> String
{
    slugify(&String::from_utf8_lossy(input,), options,)
}

/// Builder for slug strings that can be used for URLs and filenames.
#[derive(Debug, Clone, Copy,)]
pub struct SlugStrategy<'input,>
{
    source:  &'input str,
    options: SlugOptions,
}

impl<'input,> SlugStrategy<'input,>
{
    /// Creates a new slug builder for the provided string slice with default
    /// options.
    ///
    /// The builder retains a borrowed view of the source to avoid allocations
    /// until [`build`](Self::build) is invoked.
    pub fn builder(source: &'input str,) -> Self
    {
        Self {
            source,
            options: SlugOptions::default(),
        }
    }

    /// Replaces all options at once.
    pub fn options(mut self, options: SlugOptions,) -> Self
    {
        self.options = options;
        self
    }

    /// Sets the separator character. Characters that cannot separate words
    /// fall back to `-`, see [`SlugOptions::sanitize_separator`].
    pub fn separator(mut self, separator: char,) -> Self
    {
        self.options.separator = SlugOptions::sanitize_separator(separator,);
        self
    }

    /// Keeps the original letter casing when `true`.
    pub fn preserve_case(mut self, preserve_case: bool,) -> Self
    {
        self.options.preserve_case = preserve_case;
        self
    }

    /// Limits the slug to `max_len` characters; `0` means unlimited.
    pub fn max_len(mut self, max_len: usize,) -> Self
    {
        self.options.max_len = max_len;
        self
    }

    /// Builds a slug from the source string.
    ///
    /// # Examples
    ///
    /// ```
    /// use post_slug::SlugStrategy;
    ///
    /// let slug = SlugStrategy::builder(" Docs/Overview  ",).separator('_',).build();
    /// assert_eq!(slug, "docs_overview");
    /// ```
    pub fn build(self,) -> String
    {
        slugify(self.source, &self.options,)
    }
}
