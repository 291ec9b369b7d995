use clap::Parser;

/// Exports the project next to this program into a single PDF.
///
/// There are no options: the exclusions and the output file are fixed.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
pub struct Cli {}
