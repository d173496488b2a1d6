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

//! Serialize byte fields as base64 strings in JSON payloads.
//!
//! The types in this module implement [serde_with::SerializeAs] and
//! [serde_with::DeserializeAs], use them with `#[serde_as(as = ...)]`:
//!
//! ```
//! # use google_cloud_base64::wire;
//! #[serde_with::serde_as]
//! #[derive(Debug, PartialEq, serde::Deserialize, serde::Serialize)]
//! #[serde(rename_all = "camelCase")]
//! struct ConfigFile {
//!     path: String,
//!     #[serde_as(as = "wire::Base64")]
//!     contents: Vec<u8>,
//! }
//!
//! let file = ConfigFile { path: "a.yaml".into(), contents: b"Man".to_vec() };
//! let json = serde_json::to_value(&file)?;
//! assert_eq!(json, serde_json::json!({"path": "a.yaml", "contents": "TWFu"}));
//!
//! let bad = serde_json::json!({"path": "a.yaml", "contents": "TW!u"});
//! assert!(serde_json::from_value::<ConfigFile>(bad).is_err());
//! # Ok::<(), serde_json::Error>(())
//! ```
//!
//! Any value convertible to `&[u8]` can be serialized, and any value
//! constructible from a `Vec<u8>` (including `bytes::Bytes`) can be
//! deserialized. The adapters compose with `Option<_>`, `Vec<_>` and maps.

use crate::engine::Engine;

/// Strict base64 with the standard alphabet and canonical padding.
pub struct Base64;

/// Serializes as [Base64], deserializes any input a ProtoJSON parser accepts.
///
/// The input may use either the standard or URL-safe alphabet, and padding is
/// optional.
pub struct ProtoJson;

impl<T> serde_with::SerializeAs<T> for Base64
where
    T: AsRef<[u8]>,
{
    fn serialize_as<S>(source: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&Engine::STANDARD.encode(source))
    }
}

impl<'de, T> serde_with::DeserializeAs<'de, T> for Base64
where
    T: From<Vec<u8>>,
{
    fn deserialize_as<D>(deserializer: D) -> Result<T, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bytes = deserializer.deserialize_str(BytesVisitor(Engine::STANDARD))?;
        Ok(T::from(bytes))
    }
}

impl<T> serde_with::SerializeAs<T> for ProtoJson
where
    T: AsRef<[u8]>,
{
    fn serialize_as<S>(source: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&Engine::PROTOJSON.encode(source))
    }
}

impl<'de, T> serde_with::DeserializeAs<'de, T> for ProtoJson
where
    T: From<Vec<u8>>,
{
    fn deserialize_as<D>(deserializer: D) -> Result<T, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bytes = deserializer.deserialize_str(BytesVisitor(Engine::PROTOJSON))?;
        Ok(T::from(bytes))
    }
}

struct BytesVisitor(Engine);

impl serde::de::Visitor<'_> for BytesVisitor {
    type Value = Vec<u8>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a base64 encoded string")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        self.0.decode(value).map_err(|e| {
            tracing::debug!(length = value.len(), error = %e, "rejecting base64 field");
            E::custom(format!("cannot decode base64 field: {e}"))
        })
    }
}
