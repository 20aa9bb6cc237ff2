// src/cli/flags.rs
use std::ffi::OsString;

// Two-letter single-dash flags and their long equivalents
const LEGACY_FLAGS: [(&str, &str); 5] = [
    ("-mu", "--max-uppercase"),
    ("-ml", "--max-lowercase"),
    ("-md", "--max-digits"),
    ("-ms", "--max-special"),
    ("-me", "--max-emojis"),
];

/// Rewrite `-mu N`, `-mu=N` and `-muN` style flags into their `--max-*` form so
/// clap does not read them as clustered short flags. Nothing after a bare
/// `--` is touched.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut escaped = false;

    args.into_iter()
        .map(|arg| {
            if escaped {
                return arg;
            }
            match arg.to_str() {
                Some("--") => {
                    escaped = true;
                    arg
                }
                Some(text) => rewrite(text).map(OsString::from).unwrap_or(arg),
                None => arg,
            }
        })
        .collect()
}

fn rewrite(arg: &str) -> Option<String> {
    LEGACY_FLAGS.iter().find_map(|(short, long)| {
        let rest = arg.strip_prefix(short)?;
        if rest.is_empty() {
            Some(long.to_string())
        } else if let Some(value) = rest.strip_prefix('=') {
            Some(format!("{long}={value}"))
        } else if rest.chars().all(|c| c.is_ascii_digit()) {
            // Joined form, `-mu5`
            Some(format!("{long}={rest}"))
        } else {
            None
        }
    })
}
