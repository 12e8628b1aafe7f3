use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Args, Parser, Subcommand};
use crossterm::{
    queue,
    style::{Color, PrintStyledContent, Stylize},
};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

use dungen::{
    dungeon::{Cell, DungeonLayout, ObjectKind},
    generators::{DungeonGenerator, GeneratorConfig, Style, get_rng},
};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a dungeon floor and print it
    Generate(GenerateArgs),
    /// Check a layout saved as JSON
    Validate {
        /// Path to the layout file
        path: PathBuf,
    },
}

#[derive(Args)]
struct GenerateArgs {
    /// Decoration style: light, shadow or ambition
    #[arg(long, default_value_t = Style::Light)]
    style: Style,
    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
    /// Print the layout as JSON
    #[arg(long)]
    json: bool,
    /// Print the map without colors
    #[arg(long)]
    plain: bool,
    /// Room candidates proposed per attempt (0 forces the fallback layout)
    #[arg(long)]
    max_rooms: Option<u32>,
    /// Generation attempts before falling back (0 forces the fallback layout)
    #[arg(long)]
    max_attempts: Option<u32>,
    /// Water samples thrown by the shadow style
    #[arg(long)]
    water_drops: Option<u32>,
}

impl GenerateArgs {
    fn config(&self) -> GeneratorConfig {
        let defaults = GeneratorConfig::default();
        GeneratorConfig {
            max_rooms: self.max_rooms.unwrap_or(defaults.max_rooms),
            max_attempts: self.max_attempts.unwrap_or(defaults.max_attempts),
            water_drops: self.water_drops.unwrap_or(defaults.water_drops),
            ..defaults
        }
    }
}

/// Install the global subscriber. The returned guard must be held until exit
/// so buffered file logs are flushed.
fn init_logging(cli: &Cli) -> io::Result<Option<WorkerGuard>> {
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    match &cli.log_file {
        Some(path) => {
            let file = fs::File::create(path)?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_writer(io::stderr)
                .init();
            Ok(None)
        }
    }
}

fn print_layout(layout: &DungeonLayout, plain: bool) -> Result<(), Box<dyn std::error::Error>> {
    let grid = layout.grid()?;
    let start = layout.player_start().coord();
    let mut stdout = io::stdout().lock();

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let cell = grid[(x, y)];
            match (plain, (x, y) == start) {
                (true, true) => write!(stdout, "@")?,
                (true, false) => write!(stdout, "{cell}")?,
                (false, true) => queue!(stdout, PrintStyledContent('@'.with(Color::Cyan).bold()))?,
                (false, false) => queue!(stdout, PrintStyledContent(cell.styled()))?,
            }
        }
        writeln!(stdout)?;
    }

    writeln!(stdout, "player start: {}", layout.player_start())?;
    for kind in ObjectKind::ALL {
        if let Some(position) = layout.object_position(kind) {
            writeln!(stdout, "{} {}: {}", kind.symbol(), kind, position)?;
        }
    }
    if layout.is_fallback() {
        writeln!(stdout, "(fallback layout)")?;
    }
    stdout.flush()?;
    Ok(())
}

fn generate(args: &GenerateArgs) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let generator = DungeonGenerator::new(args.config())?;
    let mut rng = get_rng(args.seed);
    let layout = generator.generate(args.style, &mut rng);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&layout)?);
    } else {
        print_layout(&layout, args.plain)?;
    }
    Ok(ExitCode::SUCCESS)
}

fn validate(path: &Path) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let layout: DungeonLayout = serde_json::from_str(&fs::read_to_string(path)?)?;
    match layout.validate() {
        Ok(()) => {
            let water = layout.grid()?.count(Cell::Water);
            println!(
                "{}: valid ({} rooms, {} water cells)",
                path.display(),
                layout.rooms().len(),
                water
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{}: invalid layout: {}", path.display(), e);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _guard = init_logging(&cli)?;

    match &cli.command {
        Command::Generate(args) => generate(args),
        Command::Validate { path } => validate(path),
    }
}
