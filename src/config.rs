// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Options controlling how slugs are produced.
//!
//! [`SlugOptions`] is a small copyable value that callers either build in code
//! or load from a YAML document. Every representable value is valid: the
//! separator is coerced rather than rejected, so loading never fails on a
//! well-formed document.
//!
//! Only ASCII punctuation other than quotes can separate words. Any other
//! separator falls back to [`DEFAULT_SEPARATOR`].

use std::{fs, path::Path};

use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    error::{self, Error},
    slug::QUOTES,
};

/// Separator used when none (or an empty one) is supplied.
pub const DEFAULT_SEPARATOR: char = '-';

/// Options applied by the slug pipeline.
///
/// # Examples
///
/// ```
/// use post_slug::SlugOptions;
///
/// let yaml = r#"
/// separator: "_"
/// preserve_case: true
/// max_len: 64
/// "#;
/// let options = SlugOptions::parse(yaml,).expect("valid options",);
/// assert_eq!(options.separator, '_');
/// assert!(options.preserve_case);
/// assert_eq!(options.max_len, 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize,)]
#[serde(default)]
pub struct SlugOptions
{
    /// Character joining the alphanumeric runs of the slug.
    #[serde(alias = "sep_char", alias = "sep", deserialize_with = "deserialize_separator")]
    pub separator: char,

    /// Keeps the original letter casing when `true`.
    #[serde(alias = "preserve-case", alias = "preserveCase")]
    pub preserve_case: bool,

    /// Maximum slug length in characters; `0` disables truncation.
    #[serde(alias = "max_length", alias = "max-len", alias = "maxLen")]
    pub max_len: usize,
}

impl Default for SlugOptions
{
    fn default() -> Self
    {
        Self {
            separator: DEFAULT_SEPARATOR, preserve_case: false, max_len: 0,
        }
    }
}

impl SlugOptions
{
    /// Coerces a separator string into the character used by the pipeline.
    ///
    /// An empty string yields [`DEFAULT_SEPARATOR`]; longer strings contribute
    /// only their first code point, which then goes through
    /// [`SlugOptions::sanitize_separator`].
    ///
    /// # Examples
    ///
    /// ```
    /// use post_slug::SlugOptions;
    ///
    /// assert_eq!(SlugOptions::separator_from_str(""), '-');
    /// assert_eq!(SlugOptions::separator_from_str("_"), '_');
    /// assert_eq!(SlugOptions::separator_from_str("::"), ':');
    /// assert_eq!(SlugOptions::separator_from_str("x"), '-');
    /// ```
    pub fn separator_from_str(raw: &str,) -> char
    {
        raw.chars().next().map_or(DEFAULT_SEPARATOR, Self::sanitize_separator,)
    }

    /// Returns `candidate` when it can separate words in a slug, otherwise
    /// [`DEFAULT_SEPARATOR`].
    ///
    /// # Examples
    ///
    /// ```
    /// use post_slug::SlugOptions;
    ///
    /// assert_eq!(SlugOptions::sanitize_separator('+'), '+');
    /// assert_eq!(SlugOptions::sanitize_separator('e'), '-');
    /// assert_eq!(SlugOptions::sanitize_separator('\''), '-');
    /// assert_eq!(SlugOptions::sanitize_separator('\u{00B7}'), '-');
    /// ```
    pub fn sanitize_separator(candidate: char,) -> char
    {
        if candidate.is_ascii_punctuation() && !QUOTES.contains(&candidate,) {
            candidate
        } else {
            DEFAULT_SEPARATOR
        }
    }

    /// Loads options from the YAML file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the file cannot be read and [`Error::Parse`]
    /// when the document is not valid option YAML.
    pub fn load(path: &Path,) -> Result<Self, Error,>
    {
        let contents = fs::read_to_string(path,).map_err(|source| error::io_error(path, source,),)?;
        Self::parse(&contents,)
    }

    /// Parses options from a YAML document. Missing keys keep their defaults
    /// and an empty document yields [`SlugOptions::default`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] when the YAML cannot be decoded, including a
    /// negative or non-integer `max_len`.
    pub fn parse(contents: &str,) -> Result<Self, Error,>
    {
        if contents.trim().is_empty() {
            return Ok(Self::default(),);
        }

        Ok(serde_yaml::from_str(contents,)?,)
    }
}

fn deserialize_separator<'de, D,>(deserializer: D,) -> Result<char, D::Error,>
where
    D: Deserializer<'de,>,
{
    let raw = String::deserialize(deserializer,)?;
    Ok(SlugOptions::separator_from_str(&raw,),)
}

#[cfg(test)]
mod tests
{
    use std::fs;

    use tempfile::tempdir;

    use super::{DEFAULT_SEPARATOR, SlugOptions};
    use crate::Error;

    #[test]
    fn defaults_match_function_contract()
    {
        let options = SlugOptions::default();
        assert_eq!(options.separator, '-');
        assert!(!options.preserve_case);
        assert_eq!(options.max_len, 0);
    }

    #[test]
    fn empty_document_yields_defaults()
    {
        assert_eq!(SlugOptions::parse("",).expect("empty document",), SlugOptions::default());
        assert_eq!(SlugOptions::parse("  \n",).expect("blank document",), SlugOptions::default());
    }

    #[test]
    fn partial_document_keeps_remaining_defaults()
    {
        let options = SlugOptions::parse("max_len: 255\n",).expect("valid options",);
        assert_eq!(options.max_len, 255);
        assert_eq!(options.separator, DEFAULT_SEPARATOR);
        assert!(!options.preserve_case);
    }

    #[test]
    fn empty_separator_is_coerced_to_hyphen()
    {
        let options = SlugOptions::parse("separator: \"\"\n",).expect("valid options",);
        assert_eq!(options.separator, '-');
    }

    #[test]
    fn multi_character_separator_keeps_first_code_point()
    {
        let options = SlugOptions::parse("separator: \"__\"\n",).expect("valid options",);
        assert_eq!(options.separator, '_');
    }

    #[test]
    fn word_characters_and_quotes_fall_back_to_hyphen()
    {
        for raw in ["x", "e", "7", "'", "\"", "`", " ", "\t", "\u{00B7}", "\u{2013}"] {
            assert_eq!(SlugOptions::separator_from_str(raw,), DEFAULT_SEPARATOR, "separator {raw:?}");
        }
    }

    #[test]
    fn ascii_punctuation_is_kept()
    {
        for candidate in ['-', '_', '.', '+', '~', ':', '$', '&', ';', '|'] {
            assert_eq!(SlugOptions::sanitize_separator(candidate,), candidate);
        }
    }

    #[test]
    fn yaml_letter_separator_is_coerced()
    {
        let options = SlugOptions::parse("separator: \"x\"\n",).expect("valid options",);
        assert_eq!(options.separator, DEFAULT_SEPARATOR);
    }

    #[test]
    fn aliases_are_accepted()
    {
        let yaml = "sep_char: \".\"\npreserve-case: true\nmax_length: 12\n";
        let options = SlugOptions::parse(yaml,).expect("valid options",);
        assert_eq!(
            options,
            SlugOptions {
                separator: '.', preserve_case: true, max_len: 12,
            }
        );
    }

    #[test]
    fn negative_max_len_is_a_parse_error()
    {
        let error = SlugOptions::parse("max_len: -1\n",).expect_err("expected parse error",);
        assert!(matches!(error, Error::Parse { .. }));
    }

    #[test]
    fn load_reads_options_from_file()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        let path = temp.path().join("slug.yaml",);
        fs::write(&path, "separator: \"_\"\npreserve_case: true\n",).expect("failed to write options",);

        let options = SlugOptions::load(&path,).expect("failed to load options",);
        assert_eq!(options.separator, '_');
        assert!(options.preserve_case);
    }

    #[test]
    fn load_reports_missing_file()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        let path = temp.path().join("missing.yaml",);

        match SlugOptions::load(&path,) {
            Err(Error::Io {
                path: stored, ..
            },) => assert_eq!(stored, path),
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn options_round_trip_through_yaml()
    {
        let options = SlugOptions {
            separator: '+', preserve_case: true, max_len: 80,
        };
        let yaml = serde_yaml::to_string(&options,).expect("serialization failed",);
        assert_eq!(SlugOptions::parse(&yaml,).expect("valid options",), options);
    }
}
