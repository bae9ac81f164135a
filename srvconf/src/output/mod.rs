//! Content-negotiated rendering of facade outcomes.
//!
//! [`render`] is a pure mapping from an [`Outcome`] and a [`Format`] to a
//! [`RenderedResponse`]: a status plus a body in either a field-named
//! structured form or a bare plain form. The facade never sees formats,
//! and this module never looks at concrete error types beyond the
//! [`ErrorKind`] and the failing field.
//!
//! # Examples
//!
//! ```
//! use srvconf::output::{render, Format};
//! use srvconf::{ConfigurationFacade, SettingsStore};
//!
//! let facade = ConfigurationFacade::new(SettingsStore::in_memory());
//!
//! let response = render(&facade.get_base_url(), Format::from_preference("application/json"));
//! assert_eq!(response.http_status(), 404);
//! assert_eq!(response.content_type(), "application/json");
//! ```

mod formatters;

use crate::error::ErrorKind;
use crate::facade::{Confirmation, Failure, Outcome};
use crate::{BaseUrl, Port, ServerSettings};

pub use formatters::{PlainFormatter, StructuredFormatter};

/// Content type of structured responses.
pub const APPLICATION_JSON: &str = "application/json";
/// Content type of plain responses.
pub const TEXT_PLAIN: &str = "text/plain";

/// Trait for turning a response body into text.
pub trait ResponseFormatter {
    /// Format `body` for the wire.
    fn format(&self, body: &ResponseBody) -> String;
}

/// The caller's preferred representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Field-named JSON, e.g. `{"baseUrl": "..."}`.
    Structured,
    /// Bare text.
    #[default]
    Plain,
}

impl Format {
    /// Select a format from an Accept-style preference.
    ///
    /// Any entry of a comma-separated list naming `application/json`
    /// (parameters and case ignored), or the short token `json`, selects
    /// [`Format::Structured`]. Everything else is [`Format::Plain`].
    ///
    /// # Examples
    ///
    /// ```
    /// use srvconf::output::Format;
    ///
    /// assert_eq!(Format::from_preference("json"), Format::Structured);
    /// assert_eq!(
    ///     Format::from_preference("text/html, Application/JSON; q=0.9"),
    ///     Format::Structured
    /// );
    /// assert_eq!(Format::from_preference("text/plain"), Format::Plain);
    /// assert_eq!(Format::from_preference("*/*"), Format::Plain);
    /// ```
    #[must_use]
    pub fn from_preference(preference: &str) -> Self {
        let structured = preference.split(',').any(|entry| {
            let media_type = entry.split(';').next().unwrap_or_default().trim();
            media_type.eq_ignore_ascii_case(APPLICATION_JSON) || media_type.eq_ignore_ascii_case("json")
        });

        if structured {
            Self::Structured
        } else {
            Self::Plain
        }
    }

    /// The content type of responses in this format.
    #[must_use]
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Structured => APPLICATION_JSON,
            Self::Plain => TEXT_PLAIN,
        }
    }

    /// Create a formatter for this format.
    #[must_use]
    pub fn create_formatter(self) -> Box<dyn ResponseFormatter> {
        match self {
            Self::Structured => Box::new(StructuredFormatter),
            Self::Plain => Box::new(PlainFormatter),
        }
    }
}

/// Response status, independent of transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The operation succeeded.
    Ok,
    /// The request could not be honoured.
    BadInput,
    /// The requested value does not exist.
    NotFound,
}

impl Status {
    /// The matching HTTP status code.
    #[must_use]
    pub const fn http_code(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::BadInput => 400,
            Self::NotFound => 404,
        }
    }
}

impl From<ErrorKind> for Status {
    // Store faults are not told apart from bad input at the boundary.
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::InvalidInput | ErrorKind::StoreFault => Self::BadInput,
            ErrorKind::NotFound => Self::NotFound,
        }
    }
}

/// A field-level validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Wire name of the field.
    pub field: String,
    /// What was wrong with it.
    pub message: String,
}

/// Everything a response can carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseBody {
    /// The base URL.
    BaseUrl(BaseUrl),
    /// The port.
    Port(Port),
    /// Both settings.
    Settings(ServerSettings),
    /// A confirmation message.
    Message(String),
    /// A failure message with any field errors.
    Failure {
        /// The caller-facing message.
        message: String,
        /// Field errors; only input failures carry any.
        errors: Vec<FieldError>,
    },
}

/// Values that can be the success payload of a response.
pub trait IntoResponseBody {
    /// Build the response body for this value.
    fn to_response_body(&self) -> ResponseBody;
}

impl IntoResponseBody for BaseUrl {
    fn to_response_body(&self) -> ResponseBody {
        ResponseBody::BaseUrl(self.clone())
    }
}

impl IntoResponseBody for Port {
    fn to_response_body(&self) -> ResponseBody {
        ResponseBody::Port(*self)
    }
}

impl IntoResponseBody for ServerSettings {
    fn to_response_body(&self) -> ResponseBody {
        ResponseBody::Settings(self.clone())
    }
}

impl<T> IntoResponseBody for Confirmation<T> {
    fn to_response_body(&self) -> ResponseBody {
        ResponseBody::Message(self.message.to_string())
    }
}

impl From<&Failure> for ResponseBody {
    fn from(failure: &Failure) -> Self {
        let errors = match (failure.kind(), failure.field()) {
            (ErrorKind::InvalidInput, Some(field)) => vec![FieldError {
                field: field.to_string(),
                message: failure.cause().to_string(),
            }],
            _ => Vec::new(),
        };

        Self::Failure {
            message: failure.message().to_string(),
            errors,
        }
    }
}

/// A rendered outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedResponse {
    status: Status,
    format: Format,
    body: String,
}

impl RenderedResponse {
    /// The response status.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// The HTTP status code.
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.status.http_code()
    }

    /// The format the body is in.
    #[must_use]
    pub const fn format(&self) -> Format {
        self.format
    }

    /// The content type of the body.
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        self.format.content_type()
    }

    /// The body text.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Whether the outcome was a success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == Status::Ok
    }
}

/// Render an outcome in the requested format.
#[must_use]
pub fn render<T: IntoResponseBody>(outcome: &Outcome<T>, format: Format) -> RenderedResponse {
    let (status, body) = match outcome {
        Ok(value) => (Status::Ok, value.to_response_body()),
        Err(failure) => (Status::from(failure.kind()), ResponseBody::from(failure)),
    };

    RenderedResponse {
        status,
        format,
        body: format.create_formatter().format(&body),
    }
}
