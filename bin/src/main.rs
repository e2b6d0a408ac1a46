extern crate campfire_rsvp;
#[macro_use]
extern crate failure_derive;
extern crate failure;
#[macro_use]
extern crate log;
extern crate env_logger;
extern crate clap;
#[cfg(test)] #[macro_use] extern crate matches;
#[cfg(test)] extern crate tempfile;

mod errors;

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process;
use env_logger::Builder;
use log::LevelFilter;
use clap::{CommandFactory, Parser};
use failure::Error;
use campfire_rsvp::campfire::GRAPHQL_ENDPOINT;
use campfire_rsvp::campfire::events::{event_id_from_url, load_event};
use campfire_rsvp::roster::{build_roster, export_roster};
use errors::ExportError;

/// Export the RSVPs of a campfire event to a CSV file
#[derive(Parser, Debug)]
#[command(version)]
struct Opts {
    /// The URL to the campfire event e.g. https://campfire.nianticlabs.com/discover/meetup/7d5719a2-e1a2-4d04-9638-e60eb35728bf
    #[arg(short, long)]
    url: Option<String>,
    /// Output file name
    #[arg(short, long, default_value = "export.csv")]
    output: PathBuf,
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
    /// GraphQL endpoint of the campfire API
    #[arg(long, env = "CAMPFIRE_GRAPHQL_ENDPOINT", default_value = GRAPHQL_ENDPOINT)]
    endpoint: String,
}

/// Rewrite the single dash long flags `-url` and `-debug` to their `--` form.
///
/// Arguments after a `--` terminator are left untouched.
fn long_flags<I: IntoIterator<Item = OsString>>(args: I) -> Vec<OsString> {
    let mut terminated = false;
    args.into_iter()
        .map(|arg| {
            if terminated {
                return arg;
            }
            if arg == "--" {
                terminated = true;
                return arg;
            }
            let rewritten = match arg.to_str() {
                Some(flag) if flag == "-url" || flag == "-debug" || flag.starts_with("-url=") => Some(format!("-{}", flag)),
                _ => None
            };
            rewritten.map(OsString::from).unwrap_or(arg)
        })
        .collect()
}

/// `RUST_LOG` directives with `info` as fallback, our crates raised to `debug` on `--debug`.
fn logger_builder(rust_log: Option<&str>, debug: bool) -> Builder {
    let mut builder = Builder::new();
    builder.filter_level(LevelFilter::Info);
    if let Some(filters) = rust_log {
        builder.parse_filters(filters);
    }
    if debug {
        builder.filter_module("campfire_rsvp", LevelFilter::Debug);
        builder.filter_module("campfire_rsvp_export", LevelFilter::Debug);
    }
    builder
}

fn init_logger(debug: bool) {
    let rust_log = env::var("RUST_LOG").ok();
    logger_builder(rust_log.as_ref().map(String::as_str), debug).init();
}

/// Error message followed by its causes, one per line.
fn fatal_message(err: &Error) -> String {
    err.iter_causes().fold(format!("{}", err), |message, cause| format!("{}\n  caused by: {}", message, cause))
}

fn export(url: &str, opts: &Opts) -> Result<(), Error> {
    let event_id = event_id_from_url(url)?;
    info!("Fetching RSVPs of event {}", event_id);

    let event = load_event(&opts.endpoint, &event_id)
        .map_err(|cause| ExportError::EventFetchError { url: opts.endpoint.clone(), cause })?;
    let roster = build_roster(&event);
    if !roster.unmatched.is_empty() {
        warn!("{} RSVPs skipped without matching member", roster.unmatched.len());
    }

    export_roster(&opts.output, &roster.rows)
        .map_err(|cause| ExportError::output(&opts.output, cause))?;
    info!("Wrote {} members to {}", event.members.edges.len(), opts.output.display());
    Ok(())
}

fn main() {
    let opts = Opts::parse_from(long_flags(env::args_os()));
    init_logger(opts.debug);

    let url = match opts.url {
        Some(ref url) => url,
        None => {
            if let Err(e) = Opts::command().print_help() {
                eprintln!("Unable to print usage : {}", e);
            }
            return;
        }
    };

    if let Err(err) = export(url, &opts) {
        // Bypasses the logger, RUST_LOG must never hide a fatal error
        eprintln!("{}", fatal_message(&err));
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;
    use log::{Level, Log, Metadata};
    use campfire_rsvp::campfire::errors::CampfireError;

    fn opts(args: &[&str]) -> Opts {
        Opts::try_parse_from(long_flags(args.iter().map(OsString::from))).unwrap()
    }

    #[test]
    fn test_opts_definition() {
        Opts::command().debug_assert();
    }

    #[test]
    fn test_opts() {
        let actual = opts(&["campfire-rsvp-export"]);
        assert_eq!(actual.url, None);
        assert_eq!(actual.output, PathBuf::from("export.csv"));
        assert!(!actual.debug);

        let actual = opts(&["campfire-rsvp-export", "-u", "https://campfire.nianticlabs.com/discover/meetup/abc-123", "-o", "rsvps.csv", "-d"]);
        assert_eq!(actual.url.as_ref().map(String::as_str), Some("https://campfire.nianticlabs.com/discover/meetup/abc-123"));
        assert_eq!(actual.output, PathBuf::from("rsvps.csv"));
        assert!(actual.debug);

        let actual = opts(&["campfire-rsvp-export", "--url", "https://example.com/e/1", "--endpoint", "http://localhost:4000/graphql"]);
        assert_eq!(actual.endpoint, "http://localhost:4000/graphql");
    }

    #[test]
    fn test_opts_single_dash_long_flags() {
        let actual = opts(&["campfire-rsvp-export", "-url", "https://campfire.nianticlabs.com/discover/meetup/abc-123", "-debug"]);
        assert_eq!(actual.url.as_ref().map(String::as_str), Some("https://campfire.nianticlabs.com/discover/meetup/abc-123"));
        assert!(actual.debug);

        let actual = opts(&["campfire-rsvp-export", "-debug", "-url=https://example.com/e/1", "-o", "rsvps.csv"]);
        assert_eq!(actual.url.as_ref().map(String::as_str), Some("https://example.com/e/1"));
        assert_eq!(actual.output, PathBuf::from("rsvps.csv"));
        assert!(actual.debug);
    }

    #[test]
    fn test_long_flags() {
        let args = ["campfire-rsvp-export", "-url", "u", "-debug", "-o", "out.csv", "--", "-debug"];
        let actual = long_flags(args.iter().map(OsString::from));
        assert_eq!(actual, ["campfire-rsvp-export", "--url", "u", "--debug", "-o", "out.csv", "--", "-debug"]);

        let actual = long_flags(vec![OsString::from("-url=https://example.com/e/1"), OsString::from("--url")]);
        assert_eq!(actual, ["--url=https://example.com/e/1", "--url"]);
    }

    fn enabled(builder: Builder, target: &str, level: Level) -> bool {
        let mut builder = builder;
        builder.build().enabled(&Metadata::builder().target(target).level(level).build())
    }

    #[test]
    fn test_logger_builder() {
        assert!(enabled(logger_builder(None, false), "campfire_rsvp::roster", Level::Info));
        assert!(!enabled(logger_builder(None, false), "campfire_rsvp::roster", Level::Debug));
        assert!(enabled(logger_builder(None, true), "campfire_rsvp::campfire::events", Level::Debug));
        assert!(!enabled(logger_builder(None, true), "reqwest::connect", Level::Debug));

        assert!(!enabled(logger_builder(Some("off"), false), "campfire_rsvp_export", Level::Error));
        assert!(enabled(logger_builder(Some("off"), true), "campfire_rsvp_export", Level::Debug));
        assert!(enabled(logger_builder(Some("warn,campfire_rsvp=trace"), false), "campfire_rsvp::roster", Level::Trace));
        assert!(!enabled(logger_builder(Some("warn"), false), "campfire_rsvp_export", Level::Info));
    }

    #[test]
    fn test_fatal_message() {
        let err: Error = ExportError::EventFetchError {
            url: "http://localhost/graphql".to_string(),
            cause: CampfireError::UnexpectedStatus { status: 502, body: "bad gateway".to_string() }.into(),
        }.into();
        assert_eq!(fatal_message(&err),
                   "Failed to fetch event from http://localhost/graphql\n  caused by: request failed with status code: 502, response: bad gateway");
    }

    #[test]
    fn test_export_rejects_url_without_event_id() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("export.csv");
        let opts = opts(&["campfire-rsvp-export", "-o", output.to_str().unwrap()]);

        let actual = export("https://campfire.nianticlabs.com/", &opts);
        assert_matches!(actual.unwrap_err().downcast::<CampfireError>(), Ok(CampfireError::EmptyEventId { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn test_export_failed_fetch_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("export.csv");
        let endpoint = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            format!("http://{}/graphql", listener.local_addr().unwrap())
        };
        let opts = opts(&["campfire-rsvp-export", "-o", output.to_str().unwrap(), "--endpoint", &endpoint]);

        let actual = export("https://campfire.nianticlabs.com/discover/meetup/abc-123", &opts);
        assert_matches!(actual.unwrap_err().downcast::<ExportError>(), Ok(ExportError::EventFetchError { .. }));
        assert!(!output.exists());
    }
}
