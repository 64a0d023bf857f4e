pub(crate) mod connection;
pub(crate) mod headers;
pub(crate) mod server;

pub use connection::HttpConnection;
pub use headers::{ContentHeaders, ContentType, HttpMethod, ResponseHeaders, TextEncoding};
pub use server::{HttpHandler, HttpServer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Peer closed the connection before sending a request
    Closed,
    /// Malformed request line
    Parse,
    /// Request path longer than the connection can hold
    UriTooLong,
    /// Response did not fit the buffer
    Overflow,
    FormatHeaders,
    Io(embedded_io::ErrorKind),
}

impl Error {
    pub(crate) fn io<E: embedded_io::Error>(err: E) -> Self {
        Error::Io(err.kind())
    }
}

impl From<core::fmt::Error> for Error {
    fn from(_error: core::fmt::Error) -> Self {
        Error::FormatHeaders
    }
}

pub type HttpResult = Result<(), Error>;
