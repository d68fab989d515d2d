use super::{parse_evr, vercmp};

use anyhow::{format_err, Result};
use serde::{Deserialize, Serialize, Serializer};
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt;

/// An RPM style epoch-version-release triple.
///
/// Equality and ordering run through the staged comparison (epoch first,
/// then [`vercmp`](crate::vercmp) on version, then on release), not through
/// the raw
/// strings: `1.0` and `1_0` are different strings but equal versions. For
/// the same reason `Evr` does not implement `Hash`.
///
/// An absent epoch compares equal to an explicit epoch of 0, but the two
/// stay distinct values so that displaying a parsed string gives back what
/// was parsed.
#[derive(Clone, Debug, Deserialize)]
#[serde(try_from = "&str")]
pub struct Evr {
    pub epoch: Option<u32>,
    pub version: String,
    pub release: String,
}

impl Evr {
    pub fn new(epoch: Option<u32>, version: &str, release: &str) -> Self {
        Evr {
            epoch,
            version: version.to_owned(),
            release: release.to_owned(),
        }
    }

    /// Compare epoch and version only, leaving the release out.
    /// Requirement satisfaction works at this granularity.
    pub(crate) fn cmp_epoch_version(&self, other: &Self) -> Ordering {
        self.epoch
            .unwrap_or(0)
            .cmp(&other.epoch.unwrap_or(0))
            .then_with(|| vercmp(&self.version, &other.version))
    }
}

impl TryFrom<&str> for Evr {
    type Error = anyhow::Error;

    fn try_from(s: &str) -> Result<Self> {
        let (_, evr) = parse_evr(s).map_err(|e| format_err!("Malformed EVR string: {}", e))?;
        Ok(evr)
    }
}

impl fmt::Display for Evr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(epoch) = self.epoch {
            write!(f, "{}:", epoch)?;
        }
        write!(f, "{}", self.version)?;
        if !self.release.is_empty() {
            write!(f, "-{}", self.release)?;
        }
        Ok(())
    }
}

impl Serialize for Evr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl PartialEq for Evr {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Evr {}

impl Ord for Evr {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_epoch_version(other)
            .then_with(|| vercmp(&self.release, &other.release))
    }
}

impl PartialOrd for Evr {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
