//! Just enough HTTP/1.1 to answer GET requests
//!
//! Requests are read up to the end of the header block; bodies are ignored.
//! Every response closes the connection.

use crate::model::{package_error, INTERNAL_ERROR_MESSAGE};
use serde::Serialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};

/// Upper bound on the request line plus headers
pub const MAX_HEAD_BYTES: usize = 8 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: String,
    /// Path without query string or fragment
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    Empty,
    MalformedRequestLine(String),
    UnsupportedVersion(String),
}

impl Request {
    pub fn get(path: &str) -> Self {
        Self {
            method: "GET".to_string(),
            path: path.to_string(),
        }
    }
}

/// Parses the request line out of a raw header block
pub fn parse_request_head(head: &str) -> Result<Request, RequestError> {
    let line = head.lines().next().ok_or(RequestError::Empty)?.trim();
    if line.is_empty() {
        return Err(RequestError::Empty);
    }

    let mut parts = line.split_whitespace();
    let (method, target, version) = match (parts.next(), parts.next(), parts.next(), parts.next())
    {
        (Some(m), Some(t), Some(v), None) => (m, t, v),
        _ => return Err(RequestError::MalformedRequestLine(line.to_string())),
    };

    if !version.starts_with("HTTP/1.") {
        return Err(RequestError::UnsupportedVersion(version.to_string()));
    }

    if !target.starts_with('/') {
        return Err(RequestError::MalformedRequestLine(line.to_string()));
    }

    let path = target
        .split(['?', '#'])
        .next()
        .unwrap_or(target)
        .to_string();

    Ok(Request {
        method: method.to_string(),
        path,
    })
}

/// Reads lines until the blank line ending the header block
///
/// At most `MAX_HEAD_BYTES + 1` bytes are taken from `reader`; anything
/// longer is rejected without buffering the rest.
pub async fn read_head<R>(reader: &mut R) -> std::io::Result<String>
where
    R: AsyncBufRead + Unpin,
{
    let mut limited = reader.take(MAX_HEAD_BYTES as u64 + 1);
    let mut head = String::new();
    loop {
        let before = head.len();
        let read = limited.read_line(&mut head).await?;
        if head.len() > MAX_HEAD_BYTES {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "request head too large",
            ));
        }
        if read == 0 {
            break;
        }
        let line = &head[before..];
        if line == "\r\n" || line == "\n" {
            break;
        }
    }
    Ok(head)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl Response {
    pub fn json<T: Serialize>(status: u16, value: &T) -> Self {
        match serde_json::to_string(value) {
            Ok(body) => Self {
                status,
                content_type: "application/json; charset=utf-8",
                body,
            },
            Err(e) => {
                tracing::error!("Failed to serialize response: {}", e);
                Self::error(500, INTERNAL_ERROR_MESSAGE)
            }
        }
    }

    /// Error envelope with the given status
    pub fn error(status: u16, message: &str) -> Self {
        let body = serde_json::to_string(&package_error(message))
            .unwrap_or_else(|_| format!("{{\"Error\":\"{}\"}}", INTERNAL_ERROR_MESSAGE));
        Self {
            status,
            content_type: "application/json; charset=utf-8",
            body,
        }
    }

    pub fn html(status: u16, body: String) -> Self {
        Self {
            status,
            content_type: "text/html; charset=utf-8",
            body,
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        format!(
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nAccess-Control-Allow-Origin: *\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            self.status,
            reason_phrase(self.status),
            self.content_type,
            self.body.len(),
            self.body,
        )
        .into_bytes()
    }
}

pub fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        405 => "Method Not Allowed",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        _ => "Unknown",
    }
}
