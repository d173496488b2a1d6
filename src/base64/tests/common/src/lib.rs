// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Message types with byte fields, shaped like the generated client types.

use google_cloud_base64::wire;
use std::collections::HashMap;

/// A message with every kind of `bytes` field.
///
/// A `null` singular field deserializes as empty, like a missing field.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MessageWithBytes {
    #[serde(skip_serializing_if = "bytes::Bytes::is_empty")]
    #[serde_as(as = "serde_with::DefaultOnNull<wire::Base64>")]
    pub singular: bytes::Bytes,

    #[serde_as(as = "Option<wire::Base64>")]
    pub optional: Option<bytes::Bytes>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(as = "Vec<wire::Base64>")]
    pub repeated: Vec<bytes::Bytes>,

    #[serde(skip_serializing_if = "HashMap::is_empty")]
    #[serde_as(as = "HashMap<_, wire::Base64>")]
    pub map: HashMap<String, bytes::Bytes>,
}

impl MessageWithBytes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [singular][MessageWithBytes::singular].
    pub fn set_singular<T: Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.singular = v.into();
        self
    }

    /// Sets the value of [optional][MessageWithBytes::optional].
    pub fn set_optional<T: Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.optional = Some(v.into());
        self
    }

    /// Sets or clears the value of [optional][MessageWithBytes::optional].
    pub fn set_or_clear_optional<T: Into<bytes::Bytes>>(mut self, v: Option<T>) -> Self {
        self.optional = v.map(Into::into);
        self
    }

    /// Sets the value of [repeated][MessageWithBytes::repeated].
    pub fn set_repeated<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<bytes::Bytes>,
    {
        self.repeated = v.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the value of [map][MessageWithBytes::map].
    pub fn set_map<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<bytes::Bytes>,
    {
        self.map = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

/// A file attached to a configuration resource.
///
/// Services return the contents with the standard alphabet, but clients
/// accept anything a ProtoJSON parser accepts.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ConfigFile {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub path: String,

    #[serde(skip_serializing_if = "bytes::Bytes::is_empty")]
    #[serde_as(as = "serde_with::DefaultOnNull<wire::ProtoJson>")]
    pub contents: bytes::Bytes,
}

impl ConfigFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [path][ConfigFile::path].
    pub fn set_path<T: Into<String>>(mut self, v: T) -> Self {
        self.path = v.into();
        self
    }

    /// Sets the value of [contents][ConfigFile::contents].
    pub fn set_contents<T: Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.contents = v.into();
        self
    }
}
