/// gridcheck - Replay a site list against a percolation grid
///
/// Reads a site list (first line is the grid dimension n, then one "row col"
/// pair per line; blank lines and #-comments are ignored), opens the sites in
/// order, and reports the open-site count and whether the system percolates.
use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

use percolate::percolation::Percolation;

#[derive(Parser)]
#[clap(name = "gridcheck", about = "Replay a site list against a percolation grid")]
struct Args {
    /// Input site list (reads stdin if not given)
    input: Option<String>,

    /// Report whether site (ROW, COL) is full after the replay
    #[clap(short = 'f', long = "full", num_args = 2, value_names = ["ROW", "COL"])]
    full: Option<Vec<usize>>,
}

fn parse_site(line: &str, lineno: usize) -> Result<(usize, usize)> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 2 {
        bail!(
            "line {}: expected 'row col', got {} field(s)",
            lineno,
            fields.len()
        );
    }
    let row = fields[0]
        .parse()
        .with_context(|| format!("line {lineno}: invalid row '{}'", fields[0]))?;
    let col = fields[1]
        .parse()
        .with_context(|| format!("line {lineno}: invalid col '{}'", fields[1]))?;
    Ok((row, col))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("cannot open {path}"))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut grid: Option<Percolation> = None;
    let mut opens = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        let lineno = idx + 1;

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match grid {
            None => {
                let n = line
                    .parse()
                    .with_context(|| format!("line {lineno}: invalid grid dimension '{line}'"))?;
                grid = Some(Percolation::new(n)?);
            }
            Some(ref mut g) => {
                let (row, col) = parse_site(line, lineno)?;
                g.open(row, col)
                    .with_context(|| format!("line {lineno}: cannot open ({row}, {col})"))?;
                opens += 1;
            }
        }
    }

    let mut grid = match grid {
        Some(g) => g,
        None => bail!("no grid dimension found in input"),
    };

    println!("{} by {} grid", grid.size(), grid.size());
    println!(
        "{} site opens, {} open sites",
        opens,
        grid.number_of_open_sites()
    );
    println!("percolates: {}", grid.percolates());

    if let Some(ref site) = args.full {
        let (row, col) = (site[0], site[1]);
        println!("full({}, {}): {}", row, col, grid.is_full(row, col)?);
    }

    Ok(())
}
