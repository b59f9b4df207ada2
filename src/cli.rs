use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::error::Error;
use crate::format::ClassMap;

/// Highlight Go source as an HTML fragment.
///
/// Each input is printed as one `<pre><code class="golang">` block whose tokens
/// are wrapped in `<span class=..>` elements.
#[derive(Debug, Parser)]
#[command(name = "litebrite", version, about)]
#[command(after_help = "Examples:\n  \
    litebrite main.go > main.html\n  \
    litebrite --class keyword=kw --class ident=id main.go\n  \
    litebrite --plain --class comment=c < main.go")]
pub struct Args {
    /// Go source files; reads stdin when none are given or for `-`
    pub files: Vec<PathBuf>,

    /// Set the class for a category: keyword, identifier (ident), literal,
    /// operator or comment. `CATEGORY=` leaves that category unwrapped.
    #[arg(short, long = "class", value_name = "CATEGORY=CLASS")]
    pub classes: Vec<String>,

    /// Start from an empty class map instead of the default names
    #[arg(long)]
    pub plain: bool,
}

impl Args {
    /// The class map these arguments describe.
    pub fn class_map(&self) -> Result<ClassMap, Error> {
        let base = if self.plain { ClassMap::none() } else { ClassMap::default() };
        base.apply_pairs(&self.classes)
    }

    /// Inputs in the order given; `-` stands for stdin.
    #[must_use]
    pub fn inputs(&self) -> Vec<PathBuf> {
        if self.files.is_empty() {
            vec![PathBuf::from("-")]
        } else {
            self.files.clone()
        }
    }
}

pub fn parse_args() -> Args {
    Args::parse()
}

/// Read one input, treating `-` as stdin.
pub fn read_source(path: &Path) -> Result<String, Error> {
    let io_err = |source: io::Error| Error::Io { path: path.to_path_buf(), source };
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().lock().read_to_string(&mut buf).map_err(io_err)?;
        Ok(buf)
    } else {
        fs::read_to_string(path).map_err(io_err)
    }
}
