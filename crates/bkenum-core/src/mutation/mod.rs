//! URL mutation engine.
//!
//! Turns one page's [`UrlComponents`] into the candidate URLs where a
//! forgotten backup or editor copy of that page could live. Rules come from
//! an immutable [`MarkerCatalog`] and are applied in a fixed order, so the
//! candidate list for a page is always the same.

mod catalog;
mod generate;

pub use catalog::{
    Joiner, MarkerCatalog, MutationRule, Placement, ALL_POSITIONS, BACK_ONLY, FRONT_ONLY,
};
pub use generate::{candidate_count, generate};

use crate::url_model::{encode_path, Protocol, UrlComponents};

/// One mutated URL to probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub protocol: Protocol,
    pub host: String,
    pub directory: String,
    pub filename: String,
}

impl Candidate {
    pub fn from_components(components: &UrlComponents, filename: String) -> Self {
        Self {
            protocol: components.protocol,
            host: components.host.clone(),
            directory: components.directory.clone(),
            filename,
        }
    }

    /// Raw request path (directory + mutated filename).
    pub fn path(&self) -> String {
        format!("{}{}", self.directory, self.filename)
    }

    /// Full URL as sent on the wire, with the path percent-encoded.
    pub fn url(&self) -> String {
        format!(
            "{}{}{}",
            self.protocol.prefix(),
            self.host,
            encode_path(&self.path())
        )
    }
}
