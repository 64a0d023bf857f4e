use std::{net::TcpListener, time::Duration};

use embedded_io::{Read, Write};
use embedded_io_adapters::std::FromStd;

use super::{HttpResult, connection::HttpConnection};

pub trait HttpHandler {
    fn handle_request<S: Read + Write>(&self, conn: HttpConnection<S>) -> HttpResult;
}

pub struct HttpServer<'a, T: HttpHandler> {
    handler: &'a T,
}

impl<'a, T: HttpHandler> HttpServer<'a, T> {
    pub fn new(handler: &'a T) -> Self {
        Self { handler }
    }
}

impl<T: HttpHandler> HttpServer<'_, T> {
    /// Handle a single request on `stream`
    pub fn serve<S: Read + Write>(&self, stream: S) -> HttpResult {
        let conn = HttpConnection::from_stream(stream)?;
        self.handler.handle_request(conn)
    }

    /// Accept connections forever, one request per connection
    pub fn listen_and_serve(&self, listener: &TcpListener, timeout: Duration) -> ! {
        loop {
            let (socket, peer) = match listener.accept() {
                Ok(accepted) => accepted,
                Err(e) => {
                    log::warn!("http_server: accept error: {}", e);
                    continue;
                }
            };

            if let Err(e) = socket
                .set_read_timeout(Some(timeout))
                .and_then(|()| socket.set_write_timeout(Some(timeout)))
            {
                log::warn!("http_server: cannot set timeouts for {}: {}", peer, e);
                continue;
            }

            if let Err(e) = self.serve(FromStd::new(socket)) {
                log::warn!("http_server: connection error from {}: {:?}", peer, e);
            }
        }
    }
}
