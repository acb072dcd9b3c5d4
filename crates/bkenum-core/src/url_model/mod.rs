//! URL modeling: decomposition into protocol/host/directory/filename and
//! request-path encoding.
//!
//! Everything here is pure string handling; no I/O.

mod decompose;
mod encode;

pub use decompose::{decompose, DecomposeError};
pub use encode::encode_path;

use std::fmt;

/// Scheme of a page URL. Only plain HTTP and HTTPS are probed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    Http,
    Https,
}

impl Protocol {
    /// The exact prefix this protocol is recognised by, including `://`.
    pub fn prefix(self) -> &'static str {
        match self {
            Protocol::Http => "http://",
            Protocol::Https => "https://",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// A page URL split into the pieces the mutation engine works on.
///
/// `directory` always starts and ends with `/` (it may be just `/`);
/// `filename` never contains `/` and may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlComponents {
    pub protocol: Protocol,
    pub host: String,
    pub directory: String,
    pub filename: String,
}

impl UrlComponents {
    /// Raw (unencoded) request path: directory followed by filename.
    pub fn path(&self) -> String {
        format!("{}{}", self.directory, self.filename)
    }

    /// Reassemble `protocol + host + directory + filename`.
    pub fn to_url(&self) -> String {
        format!(
            "{}{}{}{}",
            self.protocol.prefix(),
            self.host,
            self.directory,
            self.filename
        )
    }
}

impl fmt::Display for UrlComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_url())
    }
}
