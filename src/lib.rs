#![deny(clippy::all)]

use clap::{value_t, App, Arg, ArgMatches};
use thiserror::Error;
use tracing::{debug, info};

use std::fs::File;
use std::io::{self, Read, Write};

use geometry::coord2d::maze::Maze;
use geometry::coord2d::Point;
use searcher::{SearchError, SearchOptions, Strategy};

type Error = anyhow::Error;

#[derive(Debug, Error)]
pub enum MazeSearchError {
    #[error("Maze not found: {0}")]
    MazeNotFound(String, #[source] io::Error),

    #[error("Unable to read maze")]
    Unreadable(#[from] io::Error),
}

/// Everything the command line can ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to a maze file, `-` for stdin, or `None` for the built-in maze.
    pub maze: Option<String>,
    pub strategies: Vec<Strategy>,
    pub options: SearchOptions,
    pub start: Option<Point>,
    pub goal: Option<Point>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            maze: None,
            strategies: Strategy::all().collect(),
            options: SearchOptions::default(),
            start: None,
            goal: None,
        }
    }
}

impl Config {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, Error> {
        let strategies: Vec<Strategy> = match matches.value_of("strategy") {
            None | Some("all") => Strategy::all().collect(),
            Some(name) => vec![name.parse::<Strategy>()?],
        };

        let limit = if matches.is_present("limit") {
            Some(value_t!(matches, "limit", usize)?)
        } else {
            None
        };

        let verbose = if matches.is_present("progress") {
            Some(value_t!(matches, "progress", usize)?)
        } else {
            None
        };

        Ok(Config {
            maze: matches.value_of("maze").map(str::to_string),
            strategies,
            options: SearchOptions { limit, verbose },
            start: matches.value_of("start").map(str::parse::<Point>).transpose()?,
            goal: matches.value_of("goal").map(str::parse::<Point>).transpose()?,
        })
    }
}

pub fn app() -> App<'static, 'static> {
    App::new("mazesearch")
        .version("0.1")
        .author("Alex Rudy <opensource@alexrudy.net>")
        .about("Solve mazes with classic search strategies")
        .arg(
            Arg::with_name("maze")
                .value_name("MAZE")
                .help("Maze file, or - to read from stdin")
                .required(false)
                .takes_value(true)
                .index(1),
        )
        .arg(
            Arg::with_name("strategy")
                .short("s")
                .long("strategy")
                .value_name("STRATEGY")
                .possible_values(&["dfs", "bfs", "greedy", "astar", "all"])
                .default_value("all")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("limit")
                .short("l")
                .long("limit")
                .value_name("STEPS")
                .help("Give up after expanding this many states")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("progress")
                .long("progress")
                .value_name("STEPS")
                .help("Log progress every STEPS expansions (at trace level)")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("start")
                .long("start")
                .value_name("X,Y")
                .help("Start somewhere other than A")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("goal")
                .long("goal")
                .value_name("X,Y")
                .help("Finish somewhere other than B")
                .takes_value(true),
        )
}

pub fn solver() -> Result<(), Error> {
    let matches = app().get_matches();
    let config = Config::from_matches(&matches)?;
    debug!(?config, "parsed arguments");

    let maze = load_maze(&config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&config, &maze, &mut out)
}

type BoxedRead = Box<dyn Read + 'static>;

fn get_input_reader(filename: &str) -> Result<BoxedRead, MazeSearchError> {
    let reader: BoxedRead = match filename {
        "-" => Box::new(io::stdin()),
        path => {
            let f = File::open(path)
                .map_err(|e| MazeSearchError::MazeNotFound(path.to_string(), e))?;
            Box::new(f)
        }
    };
    Ok(reader)
}

/// Read the maze the configuration points at, and move
/// its start and goal if asked to.
pub fn load_maze(config: &Config) -> Result<Maze, Error> {
    let mut maze = match config.maze.as_deref() {
        None => Maze::default(),
        Some(filename) => {
            let mut contents = String::new();
            get_input_reader(filename)?
                .read_to_string(&mut contents)
                .map_err(MazeSearchError::from)?;
            contents.parse()?
        }
    };

    if let Some(start) = config.start {
        maze = maze.with_start(start)?;
    }
    if let Some(goal) = config.goal {
        maze = maze.with_goal(goal)?;
    }

    info!(
        width = maze.width(),
        height = maze.height(),
        start = %maze.start(),
        goal = %maze.goal(),
        "loaded maze"
    );
    Ok(maze)
}

/// Solve the maze with each configured strategy, writing
/// the results to `out`.
pub fn run<W: Write>(config: &Config, maze: &Maze, out: &mut W) -> Result<(), Error> {
    writeln!(out, "Maze:")?;
    write!(out, "{}", maze)?;

    for strategy in config.strategies.iter() {
        writeln!(out)?;
        writeln!(out, "=== {} ===", strategy)?;

        match strategy.run(maze, config.options.clone()) {
            Ok(Some(solution)) => {
                writeln!(
                    out,
                    "Solution found with {} steps ({} states explored)",
                    solution.len(),
                    solution.explored()
                )?;
                write!(out, "{}", maze.render(&solution))?;
            }
            Ok(None) => writeln!(out, "No solution found")?,
            Err(e @ SearchError::StepLimitExhausted(_)) => writeln!(out, "Search gave up: {}", e)?,
        }
    }

    Ok(())
}
