use std::cmp::Ordering;

/// Characters that take part in the comparison. Everything else only
/// separates segments and is never compared directly.
fn is_segment_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '~'
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Split off the maximal leading run of characters matching `pred`.
fn leading_run(s: &str, pred: fn(char) -> bool) -> (&str, &str) {
    s.split_at(s.find(|c| !pred(c)).unwrap_or(s.len()))
}

/// Digit runs compare as arbitrary precision integers: drop leading zeros,
/// then a longer run wins, then lexicographic order decides. Never parsed
/// into a machine integer, so any run length is fine.
fn cmp_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// the rpmvercmp algorithm
/// Check https://fedoraproject.org/wiki/Archive:Tools/RPM/VersionComparison
pub fn vercmp(a: &str, b: &str) -> Ordering {
    let mut a = a;
    let mut b = b;

    loop {
        a = a.trim_start_matches(|c| !is_segment_char(c));
        b = b.trim_start_matches(|c| !is_segment_char(c));

        // A tilde marks a pre-release and sorts below everything,
        // the empty string included
        match (a.strip_prefix('~'), b.strip_prefix('~')) {
            (Some(ra), Some(rb)) => {
                a = ra;
                b = rb;
                continue;
            }
            (Some(_), None) => return Ordering::Less,
            (None, Some(_)) => return Ordering::Greater,
            (None, None) => (),
        }

        if a.is_empty() || b.is_empty() {
            // Tilde is already handled, so whichever side still has
            // content is the newer one
            return a.len().cmp(&b.len());
        }

        let a_numeric = a.starts_with(is_digit);
        let b_numeric = b.starts_with(is_digit);
        let (a_run, a_rest) = leading_run(a, if a_numeric { is_digit } else { is_alpha });
        let (b_run, b_rest) = leading_run(b, if b_numeric { is_digit } else { is_alpha });

        let run_ord = match (a_numeric, b_numeric) {
            // A numeric segment outranks an alphabetic one no matter the value
            (true, false) => return Ordering::Greater,
            (false, true) => return Ordering::Less,
            (true, true) => cmp_digit_runs(a_run, b_run),
            (false, false) => a_run.cmp(b_run),
        };
        if run_ord != Ordering::Equal {
            return run_ord;
        }

        a = a_rest;
        b = b_rest;
    }
}
