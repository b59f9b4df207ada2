use std::io::{self, Write};
use std::process;

use litebrite::{Error, Highlighter, cli};

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    let args = cli::parse_args();

    let classes = match args.class_map() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("litebrite: {}", e);
            process::exit(2);
        }
    };
    let highlighter = Highlighter::new(classes);

    if let Err(e) = run(&args, &highlighter) {
        eprintln!("litebrite: {}", e);
        process::exit(1);
    }
}

fn run(args: &cli::Args, highlighter: &Highlighter) -> Result<(), Error> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for path in args.inputs() {
        let source = cli::read_source(&path)?;
        let html = highlighter.highlight(&source)?;
        writeln!(out, "{}", html).map_err(|source| Error::Io { path: "<stdout>".into(), source })?;
    }
    Ok(())
}
