//! Client address extraction from HTTP requests.

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::{HeaderMap, request::Parts};
use std::convert::Infallible;
use std::net::SocketAddr;

/// Placeholder used when a request carries no address information at all.
pub const UNKNOWN_CLIENT: &str = "unknown";

/// Apparent address of the client that sent the request.
///
/// Resolution order:
/// 1. First entry of `X-Forwarded-For`
/// 2. `X-Real-IP`
/// 3. Peer IP from [`ConnectInfo`]
///
/// A header whose value is not visible ASCII is skipped, and lookup moves
/// on to the next source.
///
/// Never rejects; falls back to [`UNKNOWN_CLIENT`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientAddr(pub String);

impl<S> FromRequestParts<S> for ClientAddr
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);

        Ok(Self(client_addr_from_headers(&parts.headers, peer)))
    }
}

/// Picks the client address from proxy headers, falling back to the peer.
pub fn client_addr_from_headers(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    if let Some(first) = header_str(headers, "x-forwarded-for")
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
    {
        return first.to_string();
    }

    if let Some(real_ip) = header_str(headers, "x-real-ip")
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
    {
        return real_ip.to_string();
    }

    peer.map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}
