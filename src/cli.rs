//! Command-line argument handling for extension-cli.
//!
//! The argument list is a pass-through contract: the first token selects the
//! service, everything after it is forwarded verbatim (including the
//! `--output-file` pair), and the output path is scanned out of the full list
//! independent of position. clap is therefore used only as a raw capture;
//! nothing may be consumed or rejected on the way in.

use clap::Parser;
use std::path::PathBuf;

/// Flag token designating the output file path. External contract with
/// callers; must not change.
pub const OUTPUT_FILE_FLAG: &str = "--output-file";

/// Command dispatcher for GraphQL engine extension services.
#[derive(Parser, Debug)]
#[command(
    name = "extension-cli",
    disable_help_flag = true,
    disable_version_flag = true,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Raw invocation: service name followed by its arguments.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
    pub args: Vec<String>,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// A structured view of one process invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// The first argument, verbatim, even when it looks like a flag.
    pub root: Option<String>,
    /// Everything after the root token, forwarded to the service unmodified.
    pub service_args: Vec<String>,
    /// Value following [`OUTPUT_FILE_FLAG`], scanned over the whole list.
    /// `None` when the flag is absent or trailing; validated at the write
    /// step, not here.
    pub output_file: Option<PathBuf>,
}

impl Invocation {
    /// Builds an invocation from parsed CLI arguments.
    pub fn from_cli(cli: Cli) -> Self {
        Self::from_arg_list(cli.args)
    }

    /// Builds an invocation from a raw argument list (without argv[0]).
    pub fn from_arg_list(args: Vec<String>) -> Self {
        let output_file = flag_value(&args, OUTPUT_FILE_FLAG).map(PathBuf::from);
        let mut args = args.into_iter();
        let root = args.next();
        Self {
            root,
            service_args: args.collect(),
            output_file,
        }
    }
}

/// Returns the value following the first occurrence of `flag`, if any.
fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|idx| args.get(idx + 1))
        .map(String::as_str)
}
