use clap::Parser;
use std::path::PathBuf;

#[derive(Clone, Debug, Parser)]
/// Run stack scripts against a single stack of strings
pub struct Opt {
    /// Print nothing but errors.
    #[arg(long, short)]
    pub quiet: bool,

    /// Continue after popping or peeking an empty stack
    ///
    /// By default, the first operation on an empty stack aborts the run.
    /// When this flag is enabled, such operations are reported and skipped,
    /// leaving the stack unchanged.
    #[arg(long, short)]
    pub keep_going: bool,

    /// Log the size of the stack after all scripts have run.
    #[arg(long)]
    pub summary: bool,

    /// Scripts to run (cumulative)
    ///
    /// All scripts operate on the same stack, in the given order.
    /// To read from standard input, use "-" as file name
    /// or give no file at all.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

#[test]
fn parse_args() {
    let opt = Opt::parse_from(["lifo-run", "-k", "--summary", "a.stack", "-"]);
    assert!(opt.keep_going && opt.summary && !opt.quiet);
    assert_eq!(opt.files, [PathBuf::from("a.stack"), PathBuf::from("-")]);

    let opt = Opt::parse_from(["lifo-run"]);
    assert!(!opt.keep_going);
    assert!(opt.files.is_empty());
}
