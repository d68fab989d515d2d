mod parse;

pub use parse::parse_dep_requirement;

use crate::version::Evr;

use anyhow::{format_err, Result};
use serde::{Deserialize, Serialize, Serializer};
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt;

/// Comparison operator of a dependency requirement.
///
/// Five-way on purpose: `>=` and `<=` are single operators in requirement
/// strings, and the satisfaction check needs to know which sides of the
/// bound an operator accepts, so collapsing them into a three-way ordering
/// plus equality would lose information.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum DepOrdering {
    Less,
    LessOrEqual,
    Equal,
    GreaterOrEqual,
    Greater,
}

impl DepOrdering {
    /// Accepts versions strictly below the bound (`<`, `<=`).
    pub fn admits_lesser(&self) -> bool {
        matches!(self, DepOrdering::Less | DepOrdering::LessOrEqual)
    }

    /// Accepts the bound itself (`<=`, `=`, `>=`).
    pub fn admits_equal(&self) -> bool {
        matches!(
            self,
            DepOrdering::LessOrEqual | DepOrdering::Equal | DepOrdering::GreaterOrEqual
        )
    }

    /// Accepts versions strictly above the bound (`>=`, `>`).
    pub fn admits_greater(&self) -> bool {
        matches!(self, DepOrdering::GreaterOrEqual | DepOrdering::Greater)
    }
}

impl fmt::Display for DepOrdering {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let op = match self {
            DepOrdering::Less => "<",
            DepOrdering::LessOrEqual => "<=",
            DepOrdering::Equal => "=",
            DepOrdering::GreaterOrEqual => ">=",
            DepOrdering::Greater => ">",
        };
        write!(f, "{}", op)
    }
}

/// A named dependency requirement, like `foo >= 1.2-3`.
///
/// No constraint means any version of the package will do.
#[derive(PartialEq, Eq, Clone, Debug, Deserialize)]
#[serde(try_from = "&str")]
pub struct DepRequirement {
    pub name: String,
    pub constraint: Option<(DepOrdering, Evr)>,
}

impl DepRequirement {
    /// Check whether this requirement and `other` can be met by one and the
    /// same package.
    ///
    /// Names must match exactly. A requirement without a version constraint
    /// matches, and is matched by, anything carrying the same name. When
    /// both sides carry a bound, the check works on epoch and version; the
    /// release only matters through the bridging rule below.
    pub fn satisfies(&self, other: &DepRequirement) -> bool {
        if self.name != other.name {
            return false;
        }

        let ((o1, v1), (o2, v2)) = match (&self.constraint, &other.constraint) {
            (Some(c1), Some(c2)) => (c1, c2),
            _ => return true,
        };

        if bridges_releases(*o1, v1, v2) || bridges_releases(*o2, v2, v1) {
            return true;
        }

        match v1.cmp_epoch_version(v2) {
            Ordering::Less => o1.admits_greater() || o2.admits_lesser(),
            Ordering::Greater => o1.admits_lesser() || o2.admits_greater(),
            Ordering::Equal => {
                (o1.admits_lesser() && o2.admits_lesser())
                    || (o1.admits_equal() && o2.admits_equal())
                    || (o1.admits_greater() && o2.admits_greater())
            }
        }
    }
}

/// A bound stated without a release, like `= 1.0`, covers every build of
/// that exact version: it matches any `1.0-r` as long as its own operator
/// accepts the bound itself.
fn bridges_releases(op: DepOrdering, bound: &Evr, other: &Evr) -> bool {
    bound.release.is_empty()
        && !other.release.is_empty()
        && op.admits_equal()
        && bound.cmp_epoch_version(other) == Ordering::Equal
}

impl TryFrom<&str> for DepRequirement {
    type Error = anyhow::Error;

    /// Succeeds for any input: when the constraint part does not parse, the
    /// whole string degrades to a constraint-less name.
    fn try_from(s: &str) -> Result<Self> {
        let (_, req) = parse_dep_requirement(s)
            .map_err(|e| format_err!("Malformed requirement: {}", e))?;
        Ok(req)
    }
}

impl fmt::Display for DepRequirement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.constraint {
            Some((op, evr)) => write!(f, "{} {} {}", self.name, op, evr),
            None => write!(f, "{}", self.name),
        }
    }
}

impl Serialize for DepRequirement {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn req(s: &str) -> DepRequirement {
        DepRequirement::try_from(s).unwrap()
    }

    #[test]
    fn parse_requirement() {
        let r = req("foo >= 1.2-3");
        assert_eq!(r.name, "foo");
        let (op, evr) = r.constraint.unwrap();
        assert_eq!(op, DepOrdering::GreaterOrEqual);
        assert_eq!(evr.version, "1.2");
        assert_eq!(evr.release, "3");

        let r = req("bar = 1:2.0");
        let (op, evr) = r.constraint.unwrap();
        assert_eq!(op, DepOrdering::Equal);
        assert_eq!(evr.epoch, Some(1));
        assert_eq!(evr.release, "");

        // two-character operators win over their one-character prefixes
        let (op, _) = req("foo <= 1.0").constraint.unwrap();
        assert_eq!(op, DepOrdering::LessOrEqual);
        let (op, _) = req("foo < 1.0").constraint.unwrap();
        assert_eq!(op, DepOrdering::Less);
        let (op, _) = req("foo > 1.0").constraint.unwrap();
        assert_eq!(op, DepOrdering::Greater);
    }

    #[test]
    fn parse_fallback() {
        let source = vec![
            "foo",
            "libfoo(x86-64)",
            "foo >= bad-version-!!",
            "foo >> 1.0",
            "foo >= ",
            "foo >= 4294967296:1-1",
            "foo >= 1.0 trailing",
        ];

        for s in source {
            println!("Parsing {:?}", s);
            let r = req(s);
            assert_eq!(r.name, s);
            assert!(r.constraint.is_none());
        }
    }

    #[test]
    fn satisfies_names_and_bare_requirements() {
        assert!(!req("foo = 1.0").satisfies(&req("bar = 1.0")));
        assert!(!req("foo").satisfies(&req("Foo")));

        assert!(req("foo").satisfies(&req("foo")));
        assert!(req("foo").satisfies(&req("foo = 1.0")));
        assert!(req("foo < 1.0").satisfies(&req("foo")));
    }

    #[test]
    fn satisfies_ranges() {
        let source = vec![
            ("foo >= 1.0", true, "foo <= 2.0"),
            ("foo > 2.0", false, "foo < 1.0"),
            ("foo < 1.0", true, "foo > 0.5"),
            ("foo = 1.0", true, "foo = 1.0"),
            ("foo = 1.0", false, "foo = 2.0"),
            ("foo < 1.0", true, "foo <= 1.0"),
            ("foo < 1.0", false, "foo = 1.0"),
            ("foo >= 1.0", true, "foo = 1.0"),
            ("foo > 1.0", true, "foo >= 1.0"),
            ("foo > 1.0", false, "foo < 1.0"),
            ("foo <= 1.0", true, "foo >= 1.0"),
            ("foo >= 2:1.0", false, "foo <= 1:9.0"),
            ("foo = 0:1.0", true, "foo = 1.0"),
        ];

        for (x, expected, y) in source {
            println!("{} vs {}", x, y);
            assert_eq!(req(x).satisfies(&req(y)), expected);
            assert_eq!(req(y).satisfies(&req(x)), expected);
        }
    }

    #[test]
    fn satisfies_release_bridging() {
        // a bound without a release covers every build of that version
        assert!(req("x >= 1.0").satisfies(&req("x < 1.0-47")));
        assert!(req("x < 1.0-47").satisfies(&req("x >= 1.0")));
        assert!(req("x = 1.0").satisfies(&req("x > 1.0-2")));
        assert!(req("x <= 1.0").satisfies(&req("x = 1.0-2")));

        // strict operators do not bridge
        assert!(!req("x > 1.0").satisfies(&req("x < 1.0-47")));

        // no bridge once both sides carry a release
        assert!(!req("x >= 1.0-1").satisfies(&req("x < 1.0-47")));
        assert!(req("x >= 1.0-1").satisfies(&req("x >= 1.0-47")));
    }

    #[test]
    fn requirement_display() {
        let source = vec!["foo >= 1.2-3", "foo", "bar < 1:2.0", "foo >= bad !!"];

        for s in source {
            assert_eq!(req(s).to_string(), s);
        }
    }
}
