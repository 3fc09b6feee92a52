//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;

pub(super) fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}


#[test]
fn cli_rejects_unknown_command() {
    assert!(Cli::try_parse_from(["fileops", "frobnicate"]).is_err());
}
