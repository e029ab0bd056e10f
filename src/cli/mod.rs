//! CLI module for the json2dto binary

#[cfg(feature = "cli")]
pub mod commands;
#[cfg(feature = "cli")]
pub mod config;
#[cfg(feature = "cli")]
pub mod error;
#[cfg(feature = "cli")]
pub mod output;

#[cfg(feature = "cli")]
pub use error::CliError;

/// Multi-letter short flags accepted for compatibility, with their long forms
const LEGACY_FLAGS: &[(&str, &str)] = &[
    ("-ns", "--namespace"),
    ("-pr", "--prefix"),
    ("-su", "--suffix"),
    ("-rc", "--rootclass"),
    ("-ic", "--indentCount"),
];

/// Rewrite legacy short flags to their long forms so the argument parser
/// sees a conventional command line. Everything after `--` is left alone.
pub fn rewrite_legacy_flags<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut rewritten = Vec::new();
    let mut passthrough = false;

    for arg in args {
        if passthrough {
            rewritten.push(arg);
            continue;
        }
        if arg == "--" {
            passthrough = true;
            rewritten.push(arg);
            continue;
        }
        match LEGACY_FLAGS.iter().find(|(short, _)| *short == arg) {
            Some((_, long)) => rewritten.push((*long).to_string()),
            None => rewritten.push(arg),
        }
    }

    rewritten
}
