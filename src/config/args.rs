//! Command-line rewriting applied before layered loading.
//!
//! The layered loader treats `--verbose`/`-v` as a flag taking a value.
//! Operators also expect the counted form (`-v`, `-vv`, `-vvv`), so those
//! are folded into a single `--verbose N` first.

use std::ffi::OsString;

const VERBOSE_LONG: &str = "--verbose";

/// Rewrites counted verbosity flags into one `--verbose N` argument.
///
/// `-v N` with an explicit numeric level is passed through unchanged, as is
/// everything after a `--` separator. The count saturates at `u8::MAX`.
///
/// # Examples
///
/// ```
/// use std::ffi::OsString;
///
/// use github_slash::config::expand_verbosity_flags;
///
/// let args = expand_verbosity_flags(["github-slash", "-vv", "-p", "9000"]);
/// let expected = ["github-slash", "--verbose", "2", "-p", "9000"].map(OsString::from);
/// assert_eq!(args, expected);
/// ```
#[must_use]
pub fn expand_verbosity_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut expanded = Vec::new();
    let mut count: usize = 0;
    let mut after_separator = false;
    let mut pending = args.into_iter().map(Into::into).peekable();

    while let Some(arg) = pending.next() {
        if after_separator {
            expanded.push(arg);
            continue;
        }
        let text = arg.to_str();
        if text == Some("--") {
            after_separator = true;
            expanded.push(arg);
        } else if text == Some("-v") && pending.peek().is_some_and(is_level) {
            expanded.push(arg);
        } else if let Some(repeats) = text.and_then(counted_flag) {
            count = count.saturating_add(repeats);
        } else {
            expanded.push(arg);
        }
    }

    if count > 0 {
        let level = u8::try_from(count).unwrap_or(u8::MAX);
        let at = expanded.len().min(1);
        expanded.insert(at, OsString::from(level.to_string()));
        expanded.insert(at, OsString::from(VERBOSE_LONG));
    }
    expanded
}

/// Number of `v`s in a flag made only of them, such as `-vvv`.
fn counted_flag(flag: &str) -> Option<usize> {
    let letters = flag.strip_prefix('-')?;
    (!letters.is_empty() && letters.bytes().all(|byte| byte == b'v')).then_some(letters.len())
}

fn is_level(arg: &OsString) -> bool {
    arg.to_str().is_some_and(|value| value.parse::<u8>().is_ok())
}
