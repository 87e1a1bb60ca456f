use crate::{Command, Error, Opt, Pos, Script};
use lifo::Stack;
use std::io::{self, Write};

/// Run the commands of a script on a stack, writing their output.
pub fn run<W: Write>(
    script: &Script,
    stack: &mut Stack<String>,
    opt: &Opt,
    out: &mut W,
) -> Result<(), Error> {
    log::info!("Run script {}", script.name);

    for (line, text) in script.lines() {
        let pos = || Pos {
            script: script.name.clone(),
            line,
        };
        let cmd = match Command::parse_line(text) {
            Some(cmd) => cmd.map_err(|e| Error::Parse(pos(), e))?,
            None => continue,
        };
        log::debug!("{}: {}", line, cmd);

        match cmd.apply(stack) {
            Ok(Some(output)) if !opt.quiet => writeln!(out, "{}", output)?,
            Ok(_) => (),
            Err(e) if opt.keep_going => {
                log::warn!("{}: {}, skipping", pos(), e);
                writeln!(out, "error: {}", e)?
            }
            Err(e) => return Err(Error::Stack(pos(), e)),
        }
    }
    Ok(())
}

/// Run all scripts in order on a single stack, and return the stack.
pub fn consume<I, W>(scripts: I, opt: &Opt, out: &mut W) -> Result<Stack<String>, Error>
where
    I: Iterator<Item = io::Result<Script>>,
    W: Write,
{
    let mut stack = Stack::new();
    for script in scripts {
        run(&script?, &mut stack, opt, out)?;
    }
    if opt.summary {
        log::info!("Final stack size: {}", stack.size());
    }
    Ok(stack)
}

#[cfg(test)]
fn run_str(text: &str, args: &[&str]) -> (Result<Stack<String>, Error>, String) {
    use clap::Parser;
    let opt = Opt::parse_from(std::iter::once("lifo-run").chain(args.iter().copied()));
    let mut out = Vec::new();
    let scripts = std::iter::once(Ok(Script::new("test", text)));
    let stack = consume(scripts, &opt, &mut out);
    (stack, String::from_utf8(out).unwrap())
}

#[test]
fn scenario() {
    let script = "push 1\nsize\npush 2\npop\nsize\npeek\nsize\npush 2\nclear\nsize\nempty\n";
    let (stack, out) = run_str(script, &[]);
    assert!(stack.unwrap().is_empty());
    assert_eq!(out, "1\n2\n1\n1\n1\n0\ntrue\n");
}

#[test]
fn comments_and_spaces() {
    let script = "# values with spaces\n\npush hello world\n  peek  \n";
    let (stack, out) = run_str(script, &[]);
    assert_eq!(stack.unwrap().into_vec(), ["hello world"]);
    assert_eq!(out, "hello world\n");
}

#[test]
fn quiet() {
    let (stack, out) = run_str("push 1\npeek\nsize\n", &["--quiet"]);
    assert_eq!(stack.unwrap().size(), 1);
    assert_eq!(out, "");
}

#[test]
fn empty_aborts() {
    let (stack, out) = run_str("push 1\npop\npop\npush 2\n", &[]);
    match stack {
        Err(Error::Stack(pos, lifo::Error::Empty)) => assert_eq!(pos.line, 3),
        _ => panic!("stack error expected"),
    }
    assert_eq!(out, "1\n");
}

#[test]
fn keep_going() {
    let (stack, out) = run_str("pop\npeek\npush 1\npop\n", &["--keep-going"]);
    assert!(stack.unwrap().is_empty());
    assert_eq!(out, "error: stack is empty\nerror: stack is empty\n1\n");
}

#[test]
fn parse_error() {
    let (stack, _) = run_str("push 1\n\nrotate\n", &[]);
    let err = stack.err().unwrap();
    assert_eq!(err.to_string(), "test:3: unknown command: rotate");
}

#[test]
fn shared_stack() -> Result<(), Error> {
    use clap::Parser;
    let opt = Opt::parse_from(["lifo-run"]);
    let scripts = vec![
        Ok(Script::new("a", "push 1\npush 2")),
        Ok(Script::new("b", "pop\npush 3")),
    ];
    let mut out = Vec::new();
    let stack = consume(scripts.into_iter(), &opt, &mut out)?;
    assert_eq!(stack.into_vec(), ["1", "3"]);
    assert_eq!(out, b"2\n");
    Ok(())
}
