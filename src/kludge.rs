// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Substitution tables applied before ASCII folding.
//!
//! Compatibility decomposition either drops or mangles a handful of code
//! points that carry meaning in titles: dashes, vulgar fractions, stroke
//! letters, ligatures and trademark signs. The tables below rewrite them into
//! ASCII ahead of the folding stage so the resulting slug keeps the intent of
//! the source text.

use std::borrow::Cow;

/// Single code point substitutions. An empty replacement deletes the code
/// point outright.
pub(crate) const SINGLE_CHAR_KLUDGES: &[(char, &str,)] = &[
    ('\u{2013}', "-",), // en dash
    ('\u{00BD}', "-",), // one half
    ('\u{00BC}', "-",), // one quarter
    ('\u{0131}', "i",), // dotless i
    ('\u{2022}', "o",), // bullet
    ('\u{0142}', "l",),
    ('\u{2014}', "-",), // em dash
    ('\u{2605}', " ",), // black star
    ('\u{00F8}', "o",),
    ('\u{0110}', "D",),
    ('\u{00F0}', "d",), // eth
    ('\u{0111}', "d",),
    ('\u{0141}', "L",),
    ('\u{00B4}', "",),  // acute accent
    ('\u{02BC}', "",),  // modifier letter apostrophe
    ('\u{02BE}', "",),  // modifier letter right half ring
];

/// Literal substring substitutions, applied in declaration order. No key is a
/// substring of another key.
pub(crate) const MULTI_CHAR_KLUDGES: &[(&str, &str,)] = &[
    (" & ", " and ",),
    ("\u{0153}", "oe",),
    ("\u{2122}", "-TM",),
    ("\u{0152}", "OE",),
    ("\u{00DF}", "ss",),
    ("\u{00E6}", "ae",),
    ("\u{20AC}", "EUR",),
    ("\u{20B9}", "Rs",),
];

fn single_char_replacement(candidate: char,) -> Option<&'static str,>
{
    SINGLE_CHAR_KLUDGES
        .iter()
        .find(|(key, _,)| *key == candidate,)
        .map(|(_, replacement,)| *replacement,)
}

/// Replaces every code point listed in [`SINGLE_CHAR_KLUDGES`].
///
/// Returns the input unchanged (borrowed) when no listed code point occurs.
pub(crate) fn apply_single_char(input: &str,) -> Cow<'_, str,>
{
    if !input.chars().any(|candidate| single_char_replacement(candidate,).is_some(),) {
        return Cow::Borrowed(input,);
    }

    let mut output = String::with_capacity(input.len(),);
    for candidate in input.chars() {
        match single_char_replacement(candidate,) {
            Some(replacement,) => output.push_str(replacement,),
            None => output.push(candidate,),
        }
    }

    Cow::Owned(output,)
}

/// Replaces every literal occurrence of each [`MULTI_CHAR_KLUDGES`] key, one
/// entry at a time in declaration order.
pub(crate) fn apply_multi_char(input: &str,) -> Cow<'_, str,>
{
    let mut output = Cow::Borrowed(input,);
    for &(pattern, replacement,) in MULTI_CHAR_KLUDGES {
        if output.contains(pattern,) {
            output = Cow::Owned(output.replace(pattern, replacement,),);
        }
    }

    output
}
