// Copyright 2026 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input records: the nested data schema and its validation errors.

use alloc::string::String;
use alloc::vec::Vec;
use serde::Deserialize;

/// One record of the nested input data.
///
/// The schema is deliberately loose at the deserialization layer: missing
/// fields become defaults so that the single validation path lives in
/// [`TreeModel::build`](crate::TreeModel::build), which rejects records with
/// an empty `name` or a `url` kind without a `url`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Record {
    /// Display label. Must be non-empty.
    #[serde(default)]
    pub name: String,
    /// Optional kind discriminator. `"url"` marks an external link record;
    /// any other value is treated as plain.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Link target; required when `kind` is `"url"`.
    #[serde(default)]
    pub url: Option<String>,
    /// Ordered child records.
    #[serde(default)]
    pub children: Vec<Record>,
}

impl Record {
    /// True if this record is declared as an external link.
    pub fn is_url(&self) -> bool {
        self.kind.as_deref() == Some("url")
    }
}

/// Errors produced while building a model from records.
///
/// Any malformed record fails the whole build.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// A record has a missing or empty `name`.
    #[error("record under {parent_path:?} is missing a name")]
    MissingName {
        /// Slash-joined names of the ancestors of the offending record
        /// (empty for the root).
        parent_path: String,
    },
    /// A `url`-typed record is missing its `url` field.
    #[error("url record {name:?} has no url")]
    MissingUrl {
        /// Name of the offending record.
        name: String,
    },
}
