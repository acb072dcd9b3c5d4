//! Marker catalog and the ordered mutation rules derived from it.

use crate::config::MarkerConfig;

/// Markers tried before, inside and after the filename, joined with a dot.
pub const ALL_POSITIONS: &[&str] = &[
    "bak", "txt", "src", "dev", "old", "inc", "orig", "copy", "cpy", "tmp", "bkup", "backup", "",
];

/// Suffixes appended verbatim; they carry their own separator (or none).
pub const BACK_ONLY: &[&str] = &[".zip", ".tar", ".gz", ".tar.gz", "~"];

/// Prefixes prepended verbatim (what file managers name duplicated files).
pub const FRONT_ONLY: &[&str] = &["Copy of "];

/// Where a marker goes relative to the original filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Front,
    Middle,
    Back,
}

/// How a marker is attached to the filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Joiner {
    /// Insert a `.` between marker and filename.
    Dot,
    /// Concatenate as-is.
    Bare,
}

/// One placement of one marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutationRule<'a> {
    pub placement: Placement,
    pub marker: &'a str,
    pub joiner: Joiner,
}

impl<'a> MutationRule<'a> {
    pub fn new(placement: Placement, marker: &'a str, joiner: Joiner) -> Self {
        Self {
            placement,
            marker,
            joiner,
        }
    }

    /// Applies the rule to `filename`.
    ///
    /// Returns `None` only for a middle placement on a filename without a
    /// dot. Middle placement splits at the first dot and keeps everything
    /// after it as the extension: `page.tar.gz` + `bak` → `page.bak.tar.gz`.
    pub fn apply(&self, filename: &str) -> Option<String> {
        let sep = match self.joiner {
            Joiner::Dot => ".",
            Joiner::Bare => "",
        };
        match self.placement {
            Placement::Front => Some(format!("{}{}{}", self.marker, sep, filename)),
            Placement::Back => Some(format!("{}{}{}", filename, sep, self.marker)),
            Placement::Middle => {
                let dot = filename.find('.')?;
                let (name, ext) = filename.split_at(dot);
                Some(format!("{}{}{}{}", name, sep, self.marker, ext))
            }
        }
    }
}

/// Immutable set of markers the generator draws from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerCatalog {
    pub front_only: Vec<String>,
    pub back_only: Vec<String>,
    pub all_positions: Vec<String>,
}

impl Default for MarkerCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl MarkerCatalog {
    /// The built-in backup/editor markers.
    pub fn standard() -> Self {
        Self {
            front_only: owned(FRONT_ONLY),
            back_only: owned(BACK_ONLY),
            all_positions: owned(ALL_POSITIONS),
        }
    }

    /// Standard catalog with any list present in `cfg` replacing its default.
    pub fn from_config(cfg: Option<&MarkerConfig>) -> Self {
        let mut catalog = Self::standard();
        if let Some(cfg) = cfg {
            if let Some(list) = &cfg.front_only {
                catalog.front_only = list.clone();
            }
            if let Some(list) = &cfg.back_only {
                catalog.back_only = list.clone();
            }
            if let Some(list) = &cfg.all_positions {
                catalog.all_positions = list.clone();
            }
        }
        catalog
    }

    /// All rules in probe order: front-only, back-only, then each
    /// all-positions marker at front, middle and back.
    pub fn rules(&self) -> impl Iterator<Item = MutationRule<'_>> + '_ {
        let front = self
            .front_only
            .iter()
            .map(|m| MutationRule::new(Placement::Front, m, Joiner::Bare));
        let back = self
            .back_only
            .iter()
            .map(|m| MutationRule::new(Placement::Back, m, Joiner::Bare));
        let all = self.all_positions.iter().flat_map(|m| {
            [Placement::Front, Placement::Middle, Placement::Back]
                .into_iter()
                .map(move |p| MutationRule::new(p, m, Joiner::Dot))
        });
        front.chain(back).chain(all)
    }
}

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}
