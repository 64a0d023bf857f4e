use core::fmt::Write;

use embedded_io::Read;

use super::Error;

pub type StatusCode = u16;

fn reason_phrase(code: StatusCode) -> &'static str {
    match code {
        200 => "OK",
        202 => "Accepted",
        204 => "No Content",
        400 => "Bad Request",
        404 => "Not Found",
        405 => "Method Not Allowed",
        414 => "URI Too Long",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

/// HTTP Content Type.
#[derive(Debug)]
pub enum ContentType {
    Json,
    TextPlain,
}

impl ContentType {
    /// Convert the content type to a string.
    pub(super) fn as_str(&self) -> &'static str {
        match self {
            ContentType::Json => "application/json",
            ContentType::TextPlain => "text/plain",
        }
    }
}

/// Text Encoding.
#[derive(Debug)]
pub enum TextEncoding {
    Utf8,
}

impl TextEncoding {
    /// Convert the text encoding to a string.
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
        }
    }
}

/// HTTP socket connection policy.
#[derive(Debug)]
pub(super) enum ConnectionPolicy {
    Close,
}

impl ConnectionPolicy {
    /// Convert the connection type to a string.
    pub(super) fn as_str(&self) -> &'static str {
        match self {
            ConnectionPolicy::Close => "close",
        }
    }
}

pub(super) trait TargetWriter {
    fn write_to(&self, writer: &mut impl Write) -> Result<(), core::fmt::Error>;
}

/// HTTP Content Headers.
pub struct ContentHeaders {
    content_type: ContentType,
    content_length: Option<usize>,
    text_encoding: Option<TextEncoding>,
}

impl ContentHeaders {
    /// Create a new content headers with a content type.
    pub const fn new(content_type: ContentType) -> Self {
        Self {
            content_type,
            content_length: None,
            text_encoding: None,
        }
    }

    /// Set the content length.
    #[must_use]
    pub const fn with_length(mut self, length: usize) -> Self {
        self.content_length = Some(length);
        self
    }

    /// Set the text encoding.
    #[must_use]
    pub const fn with_text_encoding(mut self, text_encoding: TextEncoding) -> Self {
        self.text_encoding = Some(text_encoding);
        self
    }
}

impl TargetWriter for ContentHeaders {
    fn write_to(&self, writer: &mut impl Write) -> Result<(), core::fmt::Error> {
        write!(writer, "Content-Type: {}", self.content_type.as_str())?;
        if let Some(text_encoding) = &self.text_encoding {
            write!(writer, "; charset={}", text_encoding.as_str())?;
        }
        write!(writer, "\r\n")?;
        if let Some(content_length) = self.content_length {
            write!(writer, "Content-Length: {}\r\n", content_length)?;
        }
        Ok(())
    }
}

/// Response Headers.
pub struct ResponseHeaders {
    status: StatusCode,
    connection: ConnectionPolicy,
    content: Option<ContentHeaders>,
}

impl ResponseHeaders {
    /// Create empty response headers with a status code.
    pub const fn from_code(status: StatusCode) -> Self {
        Self {
            status,
            content: None,
            connection: ConnectionPolicy::Close,
        }
    }

    pub const fn success() -> Self {
        Self::from_code(200)
    }

    /// Request queued, processing continues in the background
    pub const fn accepted() -> Self {
        Self::from_code(202)
    }

    pub const fn bad_request() -> Self {
        Self::from_code(400)
    }

    pub const fn not_found() -> Self {
        Self::from_code(404)
    }

    pub const fn method_not_allowed() -> Self {
        Self::from_code(405)
    }

    pub const fn uri_too_long() -> Self {
        Self::from_code(414)
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Set the content headers.
    #[must_use]
    pub const fn with_content(mut self, content: ContentHeaders) -> Self {
        self.content = Some(content);
        self
    }
}

impl TargetWriter for ResponseHeaders {
    /// Write the response headers to a writer.
    fn write_to(&self, writer: &mut impl Write) -> Result<(), core::fmt::Error> {
        let reason = reason_phrase(self.status);
        write!(writer, "HTTP/1.1 {} {}\r\n", self.status, reason)?;
        match &self.content {
            Some(content) => content.write_to(writer)?,
            None => write!(writer, "Content-Length: 0\r\n")?,
        }

        write!(writer, "Connection: {}\r\n", self.connection.as_str())?;
        write!(writer, "\r\n")?;
        Ok(())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
    Head,
}

impl HttpMethod {
    pub(super) fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "GET" => HttpMethod::Get,
            "POST" => HttpMethod::Post,
            "PUT" => HttpMethod::Put,
            "DELETE" => HttpMethod::Delete,
            "PATCH" => HttpMethod::Patch,
            "OPTIONS" => HttpMethod::Options,
            "HEAD" => HttpMethod::Head,
            _ => return None,
        })
    }
}

/// Parse the request line from the header string.
///
/// Returns the method and the path with any query string removed.
pub(super) fn parse_request_line(header_str: &str) -> Option<(HttpMethod, &str)> {
    let first_line = header_str
        .split_once("\r\n")
        .map_or(header_str, |(line, _)| line);
    let mut parts = first_line.split_whitespace();
    let method = parts.next().and_then(HttpMethod::parse)?;
    let target = parts.next()?;
    let path = target.split_once('?').map_or(target, |(path, _)| path);

    Some((method, path))
}

/// Read the start line and headers from the stream.
///
/// Returns the position of the end of the headers and the number of bytes
/// read. When the buffer fills up or the peer stops sending before the blank
/// line, everything read so far is treated as the heading.
pub(super) fn read_heading<S: Read>(
    buf: &mut [u8],
    stream: &mut S,
) -> Result<(usize, usize), Error> {
    let mut header_len = 0;
    loop {
        let n = stream.read(&mut buf[header_len..]).map_err(Error::io)?;
        if n == 0 {
            if header_len == 0 {
                return Err(Error::Closed);
            }
            return Ok((header_len, header_len));
        }
        header_len += n;
        // Check for end of headers
        if let Some(pos) = buf[..header_len].windows(4).position(|w| w == b"\r\n\r\n")
        {
            return Ok((pos + 4, header_len));
        }
        if header_len >= buf.len() {
            return Ok((header_len, header_len));
        }
    }
}

#[cfg(test)]
mod tests {
    use heapless::String;

    use super::*;

    #[test]
    fn request_line() {
        let (method, path) =
            parse_request_line("POST /led-strip/rainbow HTTP/1.1\r\nHost: x\r\n\r\n")
                .unwrap();
        assert_eq!(method, HttpMethod::Post);
        assert_eq!(path, "/led-strip/rainbow");
    }

    #[test]
    fn request_line_without_headers_or_with_query() {
        let (method, path) = parse_request_line("GET /led-strip/status?x=1 HTTP/1.1").unwrap();
        assert_eq!(method, HttpMethod::Get);
        assert_eq!(path, "/led-strip/status");
    }

    #[test]
    fn unknown_method_is_rejected() {
        assert!(parse_request_line("BREW /pot HTTP/1.1\r\n\r\n").is_none());
        assert!(parse_request_line("GET\r\n\r\n").is_none());
        assert!(parse_request_line("").is_none());
    }

    #[test]
    fn response_without_content() {
        let mut out = String::<128>::new();
        ResponseHeaders::accepted().write_to(&mut out).unwrap();
        assert_eq!(
            out.as_str(),
            "HTTP/1.1 202 Accepted\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
        );
    }

    #[test]
    fn response_with_text_content() {
        let mut out = String::<160>::new();
        ResponseHeaders::bad_request()
            .with_content(
                ContentHeaders::new(ContentType::TextPlain)
                    .with_text_encoding(TextEncoding::Utf8)
                    .with_length(5),
            )
            .write_to(&mut out)
            .unwrap();
        assert_eq!(
            out.as_str(),
            "HTTP/1.1 400 Bad Request\r\nContent-Type: text/plain; charset=utf-8\r\n\
             Content-Length: 5\r\nConnection: close\r\n\r\n"
        );
    }
}
