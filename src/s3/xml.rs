// MinIO Rust Library for Amazon S3 Compatible Cloud Storage
// Copyright 2025 MinIO, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Normalization of XML response bodies
//!
//! A parsed document becomes an [`XmlValue`] tree with three properties:
//! - every key is camel-cased (`ListBucketResult` becomes `listBucketResult`)
//! - elements listed in [`REPEATABLE_FIELDS`] are always [`XmlValue::List`],
//!   even when the document holds one or zero of them
//! - an `<Error>` document is hoisted into a [`ServiceFault`]

use crate::s3::error::{Error, ServiceFault, ValidationErr};
use bytes::{Buf, Bytes};
use futures_util::{Stream, StreamExt};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Read;
use std::sync::mpsc::{Receiver, channel};
use xmltree::{Element, ParserConfig};

/// Response shapes whose children may repeat, keyed by the camel-cased root
/// element, with the path of the child that must always be a list.
pub const REPEATABLE_FIELDS: &[(&str, &[&str])] = &[
    ("listAllMyBucketsResult", &["buckets", "bucket"]),
    ("listBucketResult", &["contents"]),
    ("listBucketResult", &["commonPrefixes"]),
];

/// Generic tree of a parsed XML document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum XmlValue {
    Text(String),
    List(Vec<XmlValue>),
    Map(BTreeMap<String, XmlValue>),
}

impl XmlValue {
    /// Returns the child under `key` when this is a map.
    pub fn get(&self, key: &str) -> Option<&XmlValue> {
        match self {
            XmlValue::Map(m) => m.get(key),
            _ => None,
        }
    }

    /// Follows `keys` through nested maps.
    pub fn path(&self, keys: &[&str]) -> Option<&XmlValue> {
        keys.iter().try_fold(self, |node, key| node.get(key))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            XmlValue::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[XmlValue]> {
        match self {
            XmlValue::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, XmlValue>> {
        match self {
            XmlValue::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Text of the child under `key`, or an empty string.
    pub fn text_or_default(&self, key: &str) -> String {
        self.get(key)
            .and_then(XmlValue::as_text)
            .unwrap_or_default()
            .to_string()
    }

    /// Builds the raw tree of a document: `{RootName: ...}` with element names
    /// as found. Leaf and empty elements become text (possibly empty); a name
    /// repeated under one parent becomes a list in document order.
    pub fn from_element(root: &Element) -> XmlValue {
        let mut top = BTreeMap::new();
        top.insert(root.name.clone(), element_value(root));
        XmlValue::Map(top)
    }
}

fn element_value(element: &Element) -> XmlValue {
    let children: Vec<&Element> = element
        .children
        .iter()
        .filter_map(|node| node.as_element())
        .collect();

    if children.is_empty() {
        return XmlValue::Text(
            element
                .get_text()
                .map(|t| t.into_owned())
                .unwrap_or_default(),
        );
    }

    let mut map: BTreeMap<String, XmlValue> = BTreeMap::new();
    for child in children {
        let value = element_value(child);
        let merged = match map.remove(&child.name) {
            None => value,
            Some(XmlValue::List(mut items)) => {
                items.push(value);
                XmlValue::List(items)
            }
            Some(first) => XmlValue::List(vec![first, value]),
        };
        map.insert(child.name.clone(), merged);
    }
    XmlValue::Map(map)
}

/// Converts a key to lower camel case.
///
/// Words break at `-`, `_` and whitespace, before an upper-case letter that
/// follows a lower-case letter or digit, and before the last capital of an
/// acronym that starts a new word (`XMLHttp` is `XML` + `Http`). The first word
/// is lower-cased; every later word gets an upper-case first letter and keeps
/// the rest. `ETag` becomes `eTag`, `ID` becomes `id`.
pub fn camel_case(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c == '-' || c == '_' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if !current.is_empty() && c.is_uppercase() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_numeric() || (prev.is_uppercase() && next_is_lower)
            {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }

    let mut out = String::with_capacity(key.len());
    for (i, word) in words.iter().enumerate() {
        if i == 0 {
            out.extend(word.chars().flat_map(char::to_lowercase));
        } else {
            let mut rest = word.chars();
            if let Some(first) = rest.next() {
                out.extend(first.to_uppercase());
                out.extend(rest);
            }
        }
    }
    out
}

/// Camel-cases every map key in the tree. Text values are left untouched.
///
/// Keys that camel-case to the same name (`Foo` and `foo`) are merged into
/// one list holding all their values.
pub fn camel_case_keys(value: XmlValue) -> XmlValue {
    match value {
        XmlValue::Text(t) => XmlValue::Text(t),
        XmlValue::List(items) => XmlValue::List(items.into_iter().map(camel_case_keys).collect()),
        XmlValue::Map(map) => {
            let mut out: BTreeMap<String, XmlValue> = BTreeMap::new();
            for (k, v) in map {
                let key = camel_case(&k);
                let value = camel_case_keys(v);
                let merged = match out.remove(&key) {
                    None => value,
                    Some(existing) => merge_values(existing, value),
                };
                out.insert(key, merged);
            }
            XmlValue::Map(out)
        }
    }
}

fn merge_values(existing: XmlValue, value: XmlValue) -> XmlValue {
    let mut items = match existing {
        XmlValue::List(items) => items,
        other => vec![other],
    };
    match value {
        XmlValue::List(more) => items.extend(more),
        other => items.push(other),
    }
    XmlValue::List(items)
}

fn as_map_mut(value: &mut XmlValue) -> Option<&mut BTreeMap<String, XmlValue>> {
    // an empty element parses as empty text, e.g. <Buckets/>
    if matches!(value, XmlValue::Text(t) if t.trim().is_empty()) {
        *value = XmlValue::Map(BTreeMap::new());
    }
    match value {
        XmlValue::Map(m) => Some(m),
        _ => None,
    }
}

fn force_list(node: &mut XmlValue, path: &[&str]) {
    let Some((last, parents)) = path.split_last() else {
        return;
    };
    let mut current = node;
    for key in parents {
        let Some(map) = as_map_mut(current) else {
            return;
        };
        current = map
            .entry(key.to_string())
            .or_insert_with(|| XmlValue::Map(BTreeMap::new()));
    }
    let Some(map) = as_map_mut(current) else {
        return;
    };
    let slot = map
        .entry(last.to_string())
        .or_insert_with(|| XmlValue::List(Vec::new()));
    if !matches!(slot, XmlValue::List(_)) {
        let single = std::mem::replace(slot, XmlValue::List(Vec::new()));
        *slot = XmlValue::List(vec![single]);
    }
}

/// Applies [`REPEATABLE_FIELDS`] to a camel-cased tree. Shapes whose root is
/// absent are left alone.
pub fn apply_repeatable_fields(value: &mut XmlValue) {
    for (root, path) in REPEATABLE_FIELDS {
        let XmlValue::Map(top) = value else {
            return;
        };
        if let Some(node) = top.get_mut(*root) {
            force_list(node, path);
        }
    }
}

fn extract_fault(value: &XmlValue) -> Option<ServiceFault> {
    let error = value.get("error")?;
    let text = |key: &str| error.get(key).and_then(XmlValue::as_text).map(String::from);
    Some(ServiceFault {
        status: None,
        code: text("code"),
        message: match error {
            XmlValue::Text(t) => t.clone(),
            _ => text("message").unwrap_or_default(),
        },
        resource: text("resource"),
        request_id: text("requestId"),
        host_id: text("hostId"),
    })
}

/// A normalized document and the fault it reports, if any.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedResponse {
    pub value: XmlValue,
    pub fault: Option<ServiceFault>,
}

impl NormalizedResponse {
    pub fn into_result(self) -> Result<XmlValue, ServiceFault> {
        match self.fault {
            Some(fault) => Err(fault),
            None => Ok(self.value),
        }
    }
}

/// Normalizes a raw tree. Running it again on its own output changes nothing.
pub fn normalize_value(raw: XmlValue) -> NormalizedResponse {
    let mut value = camel_case_keys(raw);
    apply_repeatable_fields(&mut value);
    let fault = extract_fault(&value);
    NormalizedResponse { value, fault }
}

// Whitespace-only text is kept so a key like `<Key>   </Key>` survives.
fn parser_config() -> ParserConfig {
    ParserConfig::new().whitespace_to_characters(true)
}

/// Parses and normalizes a complete XML body.
pub fn normalize(body: &[u8]) -> Result<NormalizedResponse, ValidationErr> {
    let root = Element::parse_with_config(body, parser_config())?;
    Ok(normalize_value(XmlValue::from_element(&root)))
}

/// Blocking reader over chunks sent from the async side; ends when the
/// sender is dropped.
struct ChannelReader {
    rx: Receiver<Bytes>,
    current: Bytes,
}

impl Read for ChannelReader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        while self.current.is_empty() {
            match self.rx.recv() {
                Ok(chunk) => self.current = chunk,
                Err(_) => return Ok(0),
            }
        }
        let n = buf.len().min(self.current.len());
        buf[..n].copy_from_slice(&self.current[..n]);
        self.current.advance(n);
        Ok(n)
    }
}

/// Parses and normalizes an XML body while it is still arriving.
///
/// Chunks are handed to a parser running on a blocking thread, so the body is
/// never collected in full. A failure of the stream itself is reported in
/// preference to the parse error it causes.
pub async fn normalize_stream<S, E>(mut body: S) -> Result<NormalizedResponse, Error>
where
    S: Stream<Item = Result<Bytes, E>> + Unpin + Send,
    E: Send,
    Error: From<E>,
{
    let (tx, rx) = channel::<Bytes>();
    let parser = async_std::task::spawn_blocking(move || {
        Element::parse_with_config(
            ChannelReader {
                rx,
                current: Bytes::new(),
            },
            parser_config(),
        )
    });

    let mut transport_err: Option<E> = None;
    while let Some(chunk) = body.next().await {
        match chunk {
            Ok(bytes) => {
                if tx.send(bytes).is_err() {
                    // parser already finished or failed
                    break;
                }
            }
            Err(e) => {
                transport_err = Some(e);
                break;
            }
        }
    }
    drop(tx);

    let parsed = parser.await;
    if let Some(e) = transport_err {
        return Err(Error::from(e));
    }
    let root = parsed.map_err(ValidationErr::from)?;
    Ok(normalize_value(XmlValue::from_element(&root)))
}
