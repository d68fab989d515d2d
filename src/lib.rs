//! RPM style version comparison and dependency requirement matching.
//!
//! This crate implements the rpmvercmp ordering over raw version strings,
//! a structured epoch-version-release value ([`Evr`]) with a total order
//! built on top of it, and a pairwise satisfaction check between named
//! dependency requirements ([`DepRequirement`]).
//!
//! # Examples
//!
//! Compare raw version strings:
//! ```
//! use rpmdep::vercmp;
//! use std::cmp::Ordering;
//!
//! assert_eq!(vercmp("1.10", "1.9"), Ordering::Greater);
//! assert_eq!(vercmp("1.0.0", "1_0_0"), Ordering::Equal);
//! ```
//!
//! Parse and order full EVR strings:
//! ```
//! use rpmdep::Evr;
//!
//! let prerelease = Evr::try_from("1.0~rc1-3").unwrap();
//! let released = Evr::try_from("1.0-1").unwrap();
//! assert!(prerelease < released);
//! ```
//!
//! Check whether two requirements on the same package are compatible:
//! ```
//! use rpmdep::DepRequirement;
//!
//! let provided = DepRequirement::try_from("pkgconfig(zlib) = 1.2.11").unwrap();
//! let wanted = DepRequirement::try_from("pkgconfig(zlib) >= 1.2").unwrap();
//! assert!(provided.satisfies(&wanted));
//! ```

mod requirement;
mod version;

pub use requirement::{parse_dep_requirement, DepOrdering, DepRequirement};
pub use version::{parse_evr, vercmp, Evr};
