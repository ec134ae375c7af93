use crate::config::{LayoutConfig, SortOrder, load_config};
use crate::input::parse_tree;
use crate::layout::{Algorithm, layout_tree};
use crate::layout_dump::LayoutDump;
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "tmlr", version, about = "Treemap layout engine over weighted hierarchies")]
pub struct Args {
    /// Input hierarchy (.json/.json5) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file for the JSON layout dump. Defaults to stdout.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Layout algorithm (overrides config file)
    #[arg(short = 'a', long = "algorithm", value_enum)]
    pub algorithm: Option<AlgorithmArg>,

    /// Child ordering before layout (overrides config file)
    #[arg(short = 's', long = "sort", value_enum)]
    pub sort: Option<SortArg>,

    /// Config JSON file (layout options)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Width of the root rectangle
    #[arg(short = 'w', long = "width", default_value_t = 1200.0)]
    pub width: f32,

    /// Height of the root rectangle
    #[arg(short = 'H', long = "height", default_value_t = 800.0)]
    pub height: f32,

    /// Pretty-print the JSON output
    #[arg(short = 'p', long = "pretty")]
    pub pretty: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum AlgorithmArg {
    Squarify,
    Slice,
    Dice,
    SliceDice,
    BinaryTree,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Squarify => Algorithm::Squarify,
            AlgorithmArg::Slice => Algorithm::Slice,
            AlgorithmArg::Dice => Algorithm::Dice,
            AlgorithmArg::SliceDice => Algorithm::SliceDice,
            AlgorithmArg::BinaryTree => Algorithm::BinaryTree,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum SortArg {
    Unsorted,
    Ascending,
    Descending,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Unsorted => SortOrder::Unsorted,
            SortArg::Ascending => SortOrder::Ascending,
            SortArg::Descending => SortOrder::Descending,
        }
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let mut config: LayoutConfig = load_config(args.config.as_deref())?;
    if let Some(algorithm) = args.algorithm {
        config.algorithm = algorithm.into();
    }
    if let Some(sort) = args.sort {
        config.sort = sort.into();
    }

    let input = read_input(args.input.as_deref())?;
    let mut root = parse_tree(&input)?;
    match config.sort {
        SortOrder::Unsorted => {}
        SortOrder::Ascending => root.sort_ascending(),
        SortOrder::Descending => root.sort_descending(),
    }

    root.set_bounds(0.0, 0.0, args.width, args.height);
    layout_tree(&mut root, &config);

    let dump = LayoutDump::from_tree(&root, config.algorithm);
    let json = if args.pretty {
        serde_json::to_string_pretty(&dump)?
    } else {
        serde_json::to_string(&dump)?
    };
    write_output(&json, args.output.as_deref())?;
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        if path == Path::new("-") {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            return Ok(buf);
        }
        return Ok(std::fs::read_to_string(path)?);
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn write_output(json: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, json)?,
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(json.as_bytes())?;
            handle.write_all(b"\n")?;
        }
    }
    Ok(())
}
