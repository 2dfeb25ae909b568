use crate::interface::codec::TransportMode;
use std::ffi::OsString;

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Profile name
    /// Profile to read the endpoint and transport mode from. Default is 'default'.
    /// If the profile is not configured, built-in defaults are used.
    #[clap(short = 'p', long, default_value = "default", help = "profile name")]
    profile: String,

    /// Transport mode
    /// Optional. Overrides the profile's transport mode.
    #[clap(short = 'm', long, value_enum, help = "payload transport mode")]
    mode: Option<TransportMode>,

    /// Endpoint URL
    /// Optional. Overrides the profile's processing endpoint.
    #[clap(short = 'e', long, help = "processing endpoint URL")]
    endpoint: Option<String>,

    /// Request timeout
    /// Optional. Abort a submission after this many milliseconds.
    #[clap(
        short = 't',
        long = "timeout-ms",
        value_parser = clap::value_parser!(u64).range(1..),
        help = "request timeout in milliseconds"
    )]
    timeout_ms: Option<u64>,

    /// Verbose mode
    /// Optional. Print verbose messages.
    #[clap(
        short = 'v',
        long,
        help = "Print verbose message",
        default_value = "false"
    )]
    verbose: bool,

    /// Input text
    /// Optional. Submit this text once and exit. Reads lines from stdin when absent.
    #[clap(help = "text to submit; reads stdin line by line when omitted")]
    input: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    profile: String,
    mode: Option<TransportMode>,
    endpoint: Option<String>,
    timeout_ms: Option<u64>,
    verbose: bool,
    input: Option<String>,
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            profile: args.profile,
            mode: args.mode,
            endpoint: args.endpoint,
            timeout_ms: args.timeout_ms,
            verbose: args.verbose,
            input: args.input,
        }
    }
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        ClapArgs::parse().into()
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::parse_from(itr).into()
    }

    pub fn profile(&self) -> &String {
        &self.profile
    }

    pub fn mode(&self) -> Option<TransportMode> {
        self.mode
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    pub fn timeout_ms(&self) -> Option<u64> {
        self.timeout_ms
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_args_profile_only() {
        let args = CommandLineArgs::parse_from(["program", "--profile", "test"]);
        assert_eq!(args.profile(), "test");
        assert!(!args.verbose());
        assert_eq!(args.mode(), None);
    }

    #[test]
    fn test_parse_args_short_flags() {
        let args = CommandLineArgs::parse_from([
            "program", "-p", "dev", "-m", "bytes", "-e", "http://h/api", "-t", "500", "-v",
        ]);
        assert_eq!(args.profile(), "dev");
        assert_eq!(args.mode(), Some(TransportMode::ByteArray));
        assert_eq!(args.endpoint(), Some("http://h/api"));
        assert_eq!(args.timeout_ms(), Some(500));
        assert!(args.verbose());
    }

    #[test]
    fn test_parse_args_mode_names() {
        let args = CommandLineArgs::parse_from(["program", "--mode", "plain-text"]);
        assert_eq!(args.mode(), Some(TransportMode::PlainText));

        let args = CommandLineArgs::parse_from(["program", "--mode", "byte-array"]);
        assert_eq!(args.mode(), Some(TransportMode::ByteArray));
    }

    #[test]
    fn test_parse_args_input() {
        let args = CommandLineArgs::parse_from(["program", "hello world"]);
        assert_eq!(args.input(), Some("hello world"));
    }

    #[test]
    fn test_default_values() {
        let args = CommandLineArgs::parse_from(["program"]);
        assert_eq!(args.profile(), "default");
        assert!(!args.verbose());
        assert_eq!(args.endpoint(), None);
        assert_eq!(args.timeout_ms(), None);
        assert_eq!(args.input(), None);
    }
}
