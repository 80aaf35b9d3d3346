//! Client identity for rate limiting
//!
//! Order of preference: the configured proxy header (`CF-Connecting-IP` by
//! default), the first `X-Forwarded-For` hop, the TCP peer address.

use std::convert::Infallible;
use std::net::{IpAddr, SocketAddr};

use axum::extract::{ConnectInfo, FromRef, FromRequestParts};
use axum::http::header::{HeaderMap, HeaderName, InvalidHeaderName};
use axum::http::request::Parts;

use crate::domain::ClientId;

const FORWARDED_FOR: &str = "x-forwarded-for";

/// Name of the header carrying the real client IP.
#[derive(Debug, Clone)]
pub struct ClientIpHeader(HeaderName);

impl Default for ClientIpHeader {
    fn default() -> Self {
        Self(HeaderName::from_static("cf-connecting-ip"))
    }
}

impl ClientIpHeader {
    pub fn parse(name: &str) -> Result<Self, InvalidHeaderName> {
        HeaderName::from_bytes(name.trim().as_bytes()).map(Self)
    }
}

fn header_value<'a>(headers: &'a HeaderMap, name: impl axum::http::header::AsHeaderName) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

pub fn resolve_client_id(headers: &HeaderMap, header: &ClientIpHeader, peer: Option<IpAddr>) -> ClientId {
    let forwarded = || {
        header_value(headers, FORWARDED_FOR)
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    };

    match header_value(headers, &header.0).or_else(forwarded) {
        Some(ip) => ClientId::new(Some(ip)),
        None => match peer {
            Some(ip) => ClientId::new(Some(&ip.to_string())),
            None => ClientId::unknown(),
        },
    }
}

/// Extractor yielding the caller's [`ClientId`]. Never rejects.
pub struct ClientIp(pub ClientId);

impl<S> FromRequestParts<S> for ClientIp
where
    S: Send + Sync,
    ClientIpHeader: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let header = ClientIpHeader::from_ref(state);
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip());
        Ok(Self(resolve_client_id(&parts.headers, &header, peer)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn cf() -> ClientIpHeader {
        ClientIpHeader::parse("CF-Connecting-IP").unwrap()
    }

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (k, v) in pairs {
            map.insert(*k, HeaderValue::from_static(v));
        }
        map
    }

    #[test]
    fn proxy_header_wins() {
        let h = headers(&[("cf-connecting-ip", "203.0.113.9"), ("x-forwarded-for", "10.0.0.1")]);
        let id = resolve_client_id(&h, &cf(), Some("127.0.0.1".parse().unwrap()));
        assert_eq!(id.as_str(), "203.0.113.9");
    }

    #[test]
    fn first_forwarded_hop_is_used() {
        let h = headers(&[("x-forwarded-for", " 198.51.100.4 , 10.0.0.1")]);
        assert_eq!(resolve_client_id(&h, &cf(), None).as_str(), "198.51.100.4");
    }

    #[test]
    fn falls_back_to_peer_then_unknown() {
        let h = headers(&[("cf-connecting-ip", "  ")]);
        let peer = Some("192.0.2.1".parse().unwrap());
        assert_eq!(resolve_client_id(&h, &cf(), peer).as_str(), "192.0.2.1");
        assert_eq!(resolve_client_id(&h, &cf(), None), ClientId::unknown());
    }

    #[test]
    fn invalid_header_name_is_rejected() {
        assert!(ClientIpHeader::parse("bad header").is_err());
    }
}
