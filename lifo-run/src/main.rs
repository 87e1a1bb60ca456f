//! Run scripts of stack operations against a single stack.

use clap::Parser;
use lifo_run::{run, Error, Opt, Script};
use std::io;

#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env("LOG").init();

    let opt = Opt::parse();

    let scripts = Script::from_pathbufs(&opt.files);
    run::consume(scripts, &opt, &mut io::stdout().lock())?;
    Ok(())
}
