//! gridpath: run grid searches from the terminal and show what they explored.

mod logger;

use std::error::Error;
use std::fmt;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;

use clap::{ArgAction, Parser};
use gridpath_map::{CellMap, MapGen, parse_layout};
use gridpath_paths::{Algorithm, DepthFirst, Graph, PathError, Pathfinder, SearchResult, vertex_name};
use log::debug;
use rand::RngExt;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser, Debug)]
#[command(
    name = "gridpath",
    version,
    about = "Find paths on a grid with Dijkstra, A*, best-first or depth-first search"
)]
struct Cli {
    /// ASCII layout to search (`.` empty, `#` wall, `S` start, `T` target); `-` reads stdin
    #[arg(long, value_name = "FILE", conflicts_with_all = ["random", "density", "seed"])]
    map: Option<PathBuf>,
    /// Generate a WIDTHxHEIGHT map with random walls [default: 20x20]
    #[arg(long, value_name = "WxH")]
    random: Option<Size>,
    /// Fraction of a generated map covered by walls
    #[arg(long, value_name = "0..1", default_value_t = 0.3, value_parser = parse_density)]
    density: f64,
    /// Seed for a generated map; a random seed is picked and printed otherwise
    #[arg(long)]
    seed: Option<u64>,
    /// Search to run
    #[arg(short, long, value_name = "NAME", default_value_t = Algorithm::default())]
    algorithm: Algorithm,
    /// Run every search, one after another
    #[arg(long, conflicts_with = "algorithm")]
    all: bool,
    /// Print only the summary lines, not the painted map
    #[arg(long)]
    no_render: bool,
    /// Stack frames depth-first search may expand before giving up; 0 for no limit
    #[arg(long, value_name = "FRAMES", default_value_t = 1_000_000)]
    dfs_limit: usize,
    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Size {
    width: i32,
    height: i32,
}

impl Size {
    const DEFAULT: Size = Size { width: 20, height: 20 };
}

impl FromStr for Size {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {s:?}"))?;
        let dim = |d: &str| match d.trim().parse::<i32>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(format!("{d:?} is not a positive size")),
        };
        Ok(Size { width: dim(w)?, height: dim(h)? })
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

fn parse_density(s: &str) -> Result<f64, String> {
    let d: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&d) {
        Ok(d)
    } else {
        Err(format!("{d} is not between 0 and 1"))
    }
}

/// Read a layout from `path`, or from stdin for `-`.
fn read_layout(path: &Path) -> Result<String, Box<dyn Error>> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()).into())
}

/// The map to search, and a line describing where it came from.
fn load_map(cli: &Cli) -> Result<(CellMap, String), Box<dyn Error>> {
    if let Some(path) = &cli.map {
        let map = parse_layout(&read_layout(path)?)?;
        return Ok((map, format!("layout {}", path.display())));
    }
    let size = cli.random.unwrap_or(Size::DEFAULT);
    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    let mut mapgen = MapGen::with_map(CellMap::with_size(size.width, size.height)?, StdRng::seed_from_u64(seed));
    let walls = mapgen.scatter_walls(cli.density);
    debug!("generated {size} map with {walls} walls from seed {seed}");
    Ok((mapgen.into_map(), format!("random {size}, density {:.2}, seed {seed}", cli.density)))
}

fn search(cli: &Cli, algorithm: Algorithm, graph: &Graph, start: &str, target: &str) -> Result<SearchResult, PathError> {
    match algorithm {
        Algorithm::DepthFirst if cli.dfs_limit > 0 => {
            DepthFirst::with_frame_limit(cli.dfs_limit).calculate_shortest_path(start, target, graph)
        }
        _ => algorithm.calculate_shortest_path(start, target, graph),
    }
}

fn summary(algorithm: Algorithm, result: &SearchResult) -> String {
    let visited = result.visited.len();
    match result.cost {
        Some(cost) => format!(
            "{algorithm:<12} visited {visited:>5}  path {:>4}  cost {cost}",
            result.path.len()
        ),
        None => format!("{algorithm:<12} visited {visited:>5}  no path"),
    }
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    let (map, source) = load_map(cli)?;
    let graph = map.graph();
    let start = vertex_name(map.start());
    let target = vertex_name(map.target());
    writeln!(
        out,
        "{source}: {}x{}, start {}, target {}",
        map.width(),
        map.height(),
        map.start(),
        map.target()
    )?;

    let algorithms: &[Algorithm] = if cli.all {
        &Algorithm::ALL
    } else {
        std::slice::from_ref(&cli.algorithm)
    };
    for &algorithm in algorithms {
        let result = match search(cli, algorithm, &graph, &start, &target) {
            Ok(result) => result,
            Err(PathError::FrameLimit(frames)) => {
                writeln!(out, "{algorithm:<12} gave up after {frames} frames")?;
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        if !cli.no_render {
            let mut painted = map.clone();
            painted.apply(&result);
            writeln!(out, "\n{painted}\n")?;
        }
        writeln!(out, "{}", summary(algorithm, &result))?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = logger::init(cli.verbose) {
        eprintln!("gridpath: {e}");
    }
    match run(&cli, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("gridpath: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("gridpath").chain(args.iter().copied())).unwrap()
    }

    fn output(args: &[&str]) -> String {
        let mut out = Vec::new();
        run(&cli(args), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn sizes_parse() {
        assert_eq!("12x7".parse(), Ok(Size { width: 12, height: 7 }));
        assert_eq!("3X4".parse(), Ok(Size { width: 3, height: 4 }));
        assert!("12".parse::<Size>().is_err());
        assert!("0x5".parse::<Size>().is_err());
        assert!("ax5".parse::<Size>().is_err());
        assert_eq!(Size::DEFAULT.to_string(), "20x20");
    }

    #[test]
    fn density_is_a_fraction() {
        assert_eq!(parse_density("0.25"), Ok(0.25));
        assert!(parse_density("1.5").is_err());
        assert!(parse_density("lots").is_err());
    }

    #[test]
    fn defaults() {
        let c = cli(&[]);
        assert_eq!(c.algorithm, Algorithm::AStar);
        assert!(!c.all);
        assert_eq!(c.dfs_limit, 1_000_000);
        let c = cli(&["-a", "dfs", "-vv"]);
        assert_eq!(c.algorithm, Algorithm::DepthFirst);
        assert_eq!(c.verbose, 2);
    }

    #[test]
    fn conflicting_options_are_rejected() {
        let parse = |args: &[&str]| Cli::try_parse_from(std::iter::once("gridpath").chain(args.iter().copied()));
        assert!(parse(&["--all", "--algorithm", "dijkstra"]).is_err());
        assert!(parse(&["--map", "x.txt", "--random", "5x5"]).is_err());
        assert!(parse(&["--algorithm", "teleport"]).is_err());
    }

    #[test]
    fn seeded_maps_repeat() {
        let args = ["--random", "15x10", "--seed", "99", "--density", "0.4"];
        let (a, source) = load_map(&cli(&args)).unwrap();
        let (b, _) = load_map(&cli(&args)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.width(), 15);
        assert!(source.contains("seed 99"));
    }

    #[test]
    fn summary_lines() {
        let r = SearchResult { visited: vec!["0,0".into(), "1,0".into()], path: Vec::new(), cost: None };
        assert_eq!(summary(Algorithm::BestFirst, &r), "best-first   visited     2  no path");
    }

    #[test]
    fn runs_one_search_on_an_open_map() {
        let text = output(&["--random", "5x5", "--density", "0", "--seed", "1", "-a", "dijkstra"]);
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("random 5x5, density 0.00, seed 1: 5x5, start (1, 1), target (3, 3)")
        );
        assert!(text.contains("S"));
        assert!(text.contains("*"));
        let last = text.lines().last().unwrap();
        assert!(last.starts_with("dijkstra     visited "), "{last}");
        assert!(last.ends_with("path    5  cost 4"), "{last}");
    }

    #[test]
    fn runs_every_search_without_rendering() {
        let text = output(&["--random", "8x6", "--seed", "3", "--all", "--no-render", "--dfs-limit", "20000"]);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        for (line, algorithm) in lines[1..].iter().zip(Algorithm::ALL) {
            assert!(line.starts_with(&algorithm.to_string()), "{line}");
        }
    }

    #[test]
    fn tight_dfs_limit_is_reported_not_fatal() {
        let text = output(&["--random", "6x6", "--density", "0", "--seed", "0", "-a", "dfs", "--dfs-limit", "1"]);
        assert_eq!(text.lines().last(), Some("depth-first  gave up after 1 frames"));
    }

    #[test]
    fn missing_layout_file_fails() {
        let mut out = Vec::new();
        let err = run(&cli(&["--map", "/nonexistent/gridpath.txt"]), &mut out).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/gridpath.txt"));
    }
}
