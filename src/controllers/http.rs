use core::{fmt::Write as _, str::FromStr};

use embedded_io::{Read, Write};
use heapless::{String, Vec};
use led_strip_composer::Rgb;

use crate::{
    core::net::http::{
        HttpConnection, HttpHandler, HttpMethod, HttpResult, ResponseHeaders,
    },
    domain::{
        colors::color_from_name,
        ports::{LedStripUsecasesPort, StripError},
    },
};

const MESSAGE_SIZE: usize = 192;
const MAX_SEGMENTS: usize = 6;

/// Routes served by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route<'a> {
    Alive,
    Status,
    TurnOn(&'a str),
    TurnOff,
    Stop,
    Freeze,
    Rainbow,
    RainbowAscending,
    RainbowDescending,
    RandomColor,
    Strobe(&'a str),
    StrobeControlled(&'a str, &'a str, &'a str),
    RandomStrobe(&'a str),
    KnightRider(&'a str, &'a str, &'a str),
}

impl<'a> Route<'a> {
    fn parse(path: &'a str) -> Option<Self> {
        let mut segments = Vec::<&str, MAX_SEGMENTS>::new();
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            segments.push(segment).ok()?;
        }

        Some(match *segments.as_slice() {
            [] => Route::Alive,
            ["led-strip", ref rest @ ..] => match *rest {
                ["status"] => Route::Status,
                ["turn-on", color] => Route::TurnOn(color),
                ["turn-off"] => Route::TurnOff,
                ["stop"] => Route::Stop,
                ["freeze"] => Route::Freeze,
                ["rainbow"] => Route::Rainbow,
                ["rainbow", "scroll-ascending"] => Route::RainbowAscending,
                ["rainbow", "scroll-descending"] => Route::RainbowDescending,
                ["random-color"] => Route::RandomColor,
                ["strobo", "random-color", seconds] => Route::RandomStrobe(seconds),
                ["strobo", seconds] => Route::Strobe(seconds),
                ["strobo", seconds, on, off] => Route::StrobeControlled(seconds, on, off),
                ["knight-rider", color, loops, length] => {
                    Route::KnightRider(color, loops, length)
                }
                _ => return None,
            },
            _ => return None,
        })
    }

    fn method(self) -> HttpMethod {
        match self {
            Route::Alive | Route::Status => HttpMethod::Get,
            _ => HttpMethod::Post,
        }
    }
}

/// Request rejected by the controller before reaching the use cases
#[derive(Debug)]
enum Rejection {
    UnknownColor,
    InvalidNumber(&'static str),
    Strip(StripError),
}

impl From<StripError> for Rejection {
    fn from(error: StripError) -> Self {
        Self::Strip(error)
    }
}

/// HTTP front of the strip use cases
pub struct LedStripHttpController<'a> {
    usecases: &'a dyn LedStripUsecasesPort,
}

impl<'a> LedStripHttpController<'a> {
    pub fn new(usecases: &'a dyn LedStripUsecasesPort) -> Self {
        Self { usecases }
    }

    fn dispatch<'r>(&self, route: Route<'r>) -> Result<(), (Rejection, &'r str)> {
        let usecases = self.usecases;
        match route {
            Route::Alive | Route::Status => {}
            Route::TurnOn(color) => usecases.turn_on(parse_color(color)?),
            Route::TurnOff => usecases.turn_off(),
            Route::Stop => usecases.stop(),
            Route::Freeze => usecases.freeze(),
            Route::Rainbow => usecases.rainbow(),
            Route::RainbowAscending => usecases.rainbow_ascending(),
            Route::RainbowDescending => usecases.rainbow_descending(),
            Route::RandomColor => usecases.random_color(),
            Route::Strobe(seconds) => {
                let seconds = parse_number(seconds, "duration")?;
                usecases.strobe(seconds).map_err(strip_error)?;
            }
            Route::StrobeControlled(seconds, on, off) => {
                let seconds = parse_number(seconds, "duration")?;
                let on_ms = parse_number(on, "on time")?;
                let off_ms = parse_number(off, "off time")?;
                usecases
                    .strobe_controlled(seconds, on_ms, off_ms)
                    .map_err(strip_error)?;
            }
            Route::RandomStrobe(seconds) => {
                let seconds = parse_number(seconds, "duration")?;
                usecases.random_strobe(seconds).map_err(strip_error)?;
            }
            Route::KnightRider(color, loops, length) => {
                let color = parse_color(color)?;
                let loops = parse_number(loops, "loops")?;
                let length = parse_number(length, "length")?;
                usecases
                    .knight_rider(color, loops, length)
                    .map_err(strip_error)?;
            }
        }
        Ok(())
    }
}

impl HttpHandler for LedStripHttpController<'_> {
    fn handle_request<S: Read + Write>(&self, conn: HttpConnection<S>) -> HttpResult {
        let mut conn = conn;
        let (method, path) = conn.route();
        let Some(route) = Route::parse(path) else {
            log::debug!("http: no route for {:?} {}", method, path);
            return conn.write_text(ResponseHeaders::not_found(), "Not Found");
        };
        if route.method() != method {
            return conn.write_text(
                ResponseHeaders::method_not_allowed(),
                "Method Not Allowed",
            );
        }

        match route {
            Route::Alive => conn.write_text(ResponseHeaders::success(), "I'm alive"),
            Route::Status => {
                let status = self.usecases.status();
                conn.write_json(&status)
            }
            route => match self.dispatch(route) {
                Ok(()) => conn.write_headers(&ResponseHeaders::accepted()),
                Err((rejection, value)) => {
                    let mut message = String::<MESSAGE_SIZE>::new();
                    let headers = rejection_message(&mut message, &rejection, value)?;
                    log::warn!("http: {}", message);
                    conn.write_text(headers, &message)
                }
            },
        }
    }
}

fn parse_color(name: &str) -> Result<Rgb, (Rejection, &str)> {
    color_from_name(name).ok_or((Rejection::UnknownColor, name))
}

fn parse_number<'v, T: FromStr>(
    value: &'v str,
    what: &'static str,
) -> Result<T, (Rejection, &'v str)> {
    value
        .parse()
        .map_err(|_| (Rejection::InvalidNumber(what), value))
}

fn strip_error(error: StripError) -> (Rejection, &'static str) {
    (Rejection::Strip(error), "")
}

fn rejection_message(
    out: &mut String<MESSAGE_SIZE>,
    rejection: &Rejection,
    value: &str,
) -> Result<ResponseHeaders, core::fmt::Error> {
    Ok(match rejection {
        Rejection::UnknownColor => {
            write!(out, "unknown color {value}")?;
            ResponseHeaders::bad_request()
        }
        Rejection::InvalidNumber(what) => {
            write!(out, "invalid {what} {value}")?;
            ResponseHeaders::bad_request()
        }
        Rejection::Strip(error) => {
            write!(out, "{error}")?;
            ResponseHeaders::bad_request()
        }
    })
}
