use embedded_io::{Read, Write};
use heapless::{String, Vec};
use serde::Serialize;

use super::{
    Error,
    HttpResult,
    headers::{
        ContentHeaders,
        ContentType,
        HttpMethod,
        ResponseHeaders,
        TargetWriter as _,
        TextEncoding,
        parse_request_line,
        read_heading,
    },
};

const HEADER_BUFFER_SIZE: usize = 512;
const BODY_BUFFER_SIZE: usize = 512;
const PATH_SIZE: usize = 128;
const STREAM_CHUNK_SIZE: usize = 256;

/// HTTP connection context
pub struct HttpConnection<S> {
    method: HttpMethod,
    path: String<PATH_SIZE>,

    stream: S,
    header_buf: Vec<u8, HEADER_BUFFER_SIZE>,
    body_buf: Vec<u8, BODY_BUFFER_SIZE>,
}

impl<S: Read + Write> HttpConnection<S> {
    /// Read the request heading from a stream.
    ///
    /// Request bodies are not consumed, every route is addressed by its path.
    /// A malformed request is answered with 400 (414 for an oversized path)
    /// before the error is returned.
    pub fn from_stream(mut stream: S) -> Result<Self, Error> {
        let mut header_buf = Vec::<u8, HEADER_BUFFER_SIZE>::new();
        header_buf
            .resize(HEADER_BUFFER_SIZE, 0)
            .map_err(|()| Error::Overflow)?;
        let (header_end, header_len) =
            read_heading(header_buf.as_mut_slice(), &mut stream)?;
        header_buf.truncate(header_len);

        let (method, path) = match parse_heading(&header_buf.as_slice()[..header_end]) {
            Ok(request) => request,
            Err(error) => {
                header_buf.clear();
                if let Err(e) = write_rejection(&mut stream, &mut header_buf, error) {
                    log::debug!("http: cannot answer malformed request: {:?}", e);
                }
                return Err(error);
            }
        };
        Ok(Self {
            method,
            path,
            stream,
            header_buf,
            body_buf: Vec::new(),
        })
    }

    /// Get request method and path
    pub fn route(&self) -> (HttpMethod, &'_ str) {
        (self.method, self.path.as_str())
    }

    /// Write the headers to the connection
    pub fn write_headers(&mut self, headers: &ResponseHeaders) -> HttpResult {
        self.header_buf.clear();
        headers.write_to(&mut self.header_buf)?;
        self.stream
            .write_all(self.header_buf.as_slice())
            .map_err(Error::io)?;
        self.stream.flush().map_err(Error::io)
    }

    /// Write the body to the connection
    pub fn write_body(&mut self, body: &[u8]) -> HttpResult {
        for chunk in body.chunks(STREAM_CHUNK_SIZE) {
            self.stream.write_all(chunk).map_err(Error::io)?;
        }
        self.stream.flush().map_err(Error::io)
    }

    /// Write a plain text response
    ///
    /// Writes both headers and body.
    pub fn write_text(&mut self, headers: ResponseHeaders, text: &str) -> HttpResult {
        let content = ContentHeaders::new(ContentType::TextPlain)
            .with_text_encoding(TextEncoding::Utf8)
            .with_length(text.len());
        self.write_headers(&headers.with_content(content))?;
        self.write_body(text.as_bytes())
    }

    /// Write JSON to the connection
    ///
    /// Writes both headers and body.
    pub fn write_json<T: Serialize>(&mut self, data: &T) -> HttpResult {
        self.body_buf.clear();
        self.body_buf
            .resize(BODY_BUFFER_SIZE, 0)
            .map_err(|()| Error::Overflow)?;
        let n = serde_json_core::to_slice(data, self.body_buf.as_mut_slice())
            .map_err(|_| Error::Overflow)?;
        self.body_buf.truncate(n);
        let headers = ResponseHeaders::success()
            .with_content(ContentHeaders::new(ContentType::Json).with_length(n));

        self.write_headers(&headers)?;
        self.stream
            .write_all(self.body_buf.as_slice())
            .map_err(Error::io)?;
        self.stream.flush().map_err(Error::io)
    }
}

/// Decode the request line, the rest of the heading is never inspected
fn parse_heading(heading: &[u8]) -> Result<(HttpMethod, String<PATH_SIZE>), Error> {
    let line_end = heading
        .windows(2)
        .position(|w| w == b"\r\n")
        .unwrap_or(heading.len());
    let line = &heading[..line_end];
    let line = match core::str::from_utf8(line) {
        Ok(line) => line,
        // character cut at the end of the buffer
        Err(e) if e.error_len().is_none() => {
            core::str::from_utf8(&line[..e.valid_up_to()]).map_err(|_| Error::Parse)?
        }
        Err(_) => return Err(Error::Parse),
    };
    let (method, raw_path) = parse_request_line(line).ok_or(Error::Parse)?;

    let mut path = String::new();
    path.push_str(raw_path).map_err(|()| Error::UriTooLong)?;
    Ok((method, path))
}

fn write_rejection<S: Write, const N: usize>(
    stream: &mut S,
    buf: &mut Vec<u8, N>,
    error: Error,
) -> HttpResult {
    let (headers, text) = match error {
        Error::UriTooLong => (ResponseHeaders::uri_too_long(), "URI Too Long"),
        _ => (ResponseHeaders::bad_request(), "Bad Request"),
    };
    let content = ContentHeaders::new(ContentType::TextPlain)
        .with_text_encoding(TextEncoding::Utf8)
        .with_length(text.len());
    headers.with_content(content).write_to(buf)?;
    stream.write_all(buf.as_slice()).map_err(Error::io)?;
    stream.write_all(text.as_bytes()).map_err(Error::io)?;
    stream.flush().map_err(Error::io)
}
