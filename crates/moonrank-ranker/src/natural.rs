//! Natural ("human") string ordering: embedded digit runs compare as numbers,
//! so "Item 2" sorts before "Item 10".

use std::cmp::Ordering;

/// Compare two strings naturally.
///
/// Digit runs are compared by numeric value without parsing, so arbitrarily
/// long runs cannot overflow. Strings that are equal under that rule (for
/// example "a01" and "a1") fall back to byte order, which keeps the ordering
/// total.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let (mut x, mut y) = (a.as_bytes(), b.as_bytes());

    loop {
        match (x.first(), y.first()) {
            (None, None) => break,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(c), Some(d)) if c.is_ascii_digit() && d.is_ascii_digit() => {
                let (run_x, rest_x) = split_digits(x);
                let (run_y, rest_y) = split_digits(y);
                match cmp_digit_runs(run_x, run_y) {
                    Ordering::Equal => {
                        x = rest_x;
                        y = rest_y;
                    }
                    other => return other,
                }
            }
            (Some(c), Some(d)) => match c.cmp(d) {
                Ordering::Equal => {
                    x = &x[1..];
                    y = &y[1..];
                }
                other => return other,
            },
        }
    }

    a.cmp(b)
}

fn split_digits(s: &[u8]) -> (&[u8], &[u8]) {
    let end = s.iter().position(|c| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

fn cmp_digit_runs(a: &[u8], b: &[u8]) -> Ordering {
    let a = trim_leading_zeros(a);
    let b = trim_leading_zeros(b);
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn trim_leading_zeros(s: &[u8]) -> &[u8] {
    let start = s.iter().position(|&c| c != b'0').unwrap_or(s.len());
    &s[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_compare_by_value() {
        assert_eq!(natural_cmp("Item 2", "Item 10"), Ordering::Less);
        assert_eq!(natural_cmp("Item 10", "Item 2"), Ordering::Greater);
        assert_eq!(natural_cmp("Moon #99", "Moon #100"), Ordering::Less);
        assert_eq!(natural_cmp("a2b10", "a2b9"), Ordering::Greater);
    }

    #[test]
    fn test_text_compares_bytewise() {
        assert_eq!(natural_cmp("Apple", "Banana"), Ordering::Less);
        assert_eq!(natural_cmp("apple", "Banana"), Ordering::Greater);
        assert_eq!(natural_cmp("abc", "abcd"), Ordering::Less);
        assert_eq!(natural_cmp("", "a"), Ordering::Less);
        assert_eq!(natural_cmp("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_leading_zeros_fall_back_to_byte_order() {
        assert_eq!(natural_cmp("a01", "a1"), Ordering::Less);
        assert_eq!(natural_cmp("a1", "a01"), Ordering::Greater);
        assert_eq!(natural_cmp("a01b", "a1c"), Ordering::Less);
    }

    #[test]
    fn test_long_digit_runs_do_not_overflow() {
        let big = "n 123456789012345678901234567890";
        let bigger = "n 1234567890123456789012345678901";
        assert_eq!(natural_cmp(big, bigger), Ordering::Less);
    }

    #[test]
    fn test_sorting_with_natural_order() {
        let mut names = vec!["Moon #10", "Moon #2", "Moon #1", "Moon #20", "Moon"];
        names.sort_by(|a, b| natural_cmp(a, b));
        assert_eq!(names, vec!["Moon", "Moon #1", "Moon #2", "Moon #10", "Moon #20"]);
    }
}
