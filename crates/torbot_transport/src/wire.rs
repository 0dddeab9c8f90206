use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

use crate::{FailureKind, LinkStatus, TransportError};

#[derive(Debug, Deserialize)]
struct LinksResponse {
    #[serde(default, deserialize_with = "ordered_links")]
    websites: Option<Vec<LinkStatus>>,
}

/// Decodes a `{"websites": {"<link>": <bool>, ...}}` body.
///
/// Entries come back in document order, repeated keys included; collapsing
/// duplicates is left to the caller. A missing or `null` `websites` field is
/// a malformed response.
pub fn decode_links_response(body: &[u8]) -> Result<Vec<LinkStatus>, TransportError> {
    let response: LinksResponse = serde_json::from_slice(body)
        .map_err(|err| TransportError::new(FailureKind::MalformedResponse, err.to_string()))?;
    response.websites.ok_or_else(|| {
        TransportError::new(
            FailureKind::MalformedResponse,
            "response has no `websites` map",
        )
    })
}

fn ordered_links<'de, D>(deserializer: D) -> Result<Option<Vec<LinkStatus>>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_option(OptionalLinksVisitor)
}

struct OptionalLinksVisitor;

impl<'de> Visitor<'de> for OptionalLinksVisitor {
    type Value = Option<Vec<LinkStatus>>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of link to reachability flag, or null")
    }

    fn visit_none<E>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(LinksVisitor).map(Some)
    }
}

struct LinksVisitor;

impl<'de> Visitor<'de> for LinksVisitor {
    type Value = Vec<LinkStatus>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of link to reachability flag")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut links = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((link, reachable)) = map.next_entry::<String, bool>()? {
            links.push(LinkStatus { link, reachable });
        }
        Ok(links)
    }
}
