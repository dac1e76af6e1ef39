// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// Parallel slugging of many inputs.
///
/// The transform holds no state, so inputs are fanned out across the rayon
/// pool without coordination. Output order always matches input order and
/// identical slugs are reported as is.
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{config::SlugOptions, slug::slugify};

/// Source string paired with the slug derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize,)]
pub struct SlugRecord
{
    /// Original input text.
    pub input: String,
    /// Slug produced for the input.
    pub slug:  String,
}

/// Slugs every input in parallel, preserving order.
///
/// # Example
///
/// ```
/// use post_slug::{SlugOptions, slug_all};
///
/// let slugs = slug_all(&["Hello, World!", "Straße"], &SlugOptions::default(),);
/// assert_eq!(slugs, vec!["hello-world", "strasse"]);
/// ```
pub fn slug_all<S,>(inputs: &[S], options: &SlugOptions,) -> Vec<String,>
where
    S: AsRef<str,> + Sync,
{
    debug!("slugging {} inputs", inputs.len());
    inputs.par_iter().map(|input| slugify(input.as_ref(), options,),).collect()
}

/// Slugs every input in parallel and keeps each source next to its slug.
pub fn slug_records<S,>(inputs: &[S], options: &SlugOptions,) -> Vec<SlugRecord,>
where
    S: AsRef<str,> + Sync,
{
    debug!("building {} slug records", inputs.len());
    inputs
        .par_iter()
        .map(|input| SlugRecord {
            input: input.as_ref().to_owned(),
            slug:  slugify(input.as_ref(), options,),
        },)
        .collect()
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn slug_all_preserves_order()
    {
        let inputs: Vec<String,> = (0..500).map(|index| format!("Title number {index}"),).collect();
        let slugs = slug_all(&inputs, &SlugOptions::default(),);

        assert_eq!(slugs.len(), inputs.len());
        for (index, slug,) in slugs.iter().enumerate() {
            assert_eq!(slug, &format!("title-number-{index}"));
        }
    }

    #[test]
    fn slug_all_keeps_duplicates()
    {
        let slugs = slug_all(&["Same Title", "same title!", ""], &SlugOptions::default(),);
        assert_eq!(slugs, vec!["same-title", "same-title", ""]);
    }

    #[test]
    fn slug_all_applies_options()
    {
        let options = SlugOptions {
            separator: '_', preserve_case: true, max_len: 5,
        };
        let slugs = slug_all(&["Hello World", "Hi There"], &options,);
        assert_eq!(slugs, vec!["Hello", "Hi"]);
    }

    #[test]
    fn slug_records_serialize_to_json()
    {
        let records = slug_records(&["Barnes &amp; Noble"], &SlugOptions::default(),);
        let json = serde_json::to_string(&records,).expect("serialization failed",);
        assert_eq!(json, r#"[{"input":"Barnes &amp; Noble","slug":"barnes-noble"}]"#);
    }

    #[test]
    fn slug_records_empty_input()
    {
        let records = slug_records::<&str,>(&[], &SlugOptions::default(),);
        assert!(records.is_empty());
    }
}
