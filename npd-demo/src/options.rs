/////////////////////////////////
use clap::Parser;
/////////////////////////////////

/// Runs the null pointer dereference fixture: a value is created absent, passed through
/// one intermediate call and dereferenced, and the failure is reported once at the top level.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Options {}
