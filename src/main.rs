use std::cmp::max;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};

use ml_backgammon::ai::{Agent, AgentKind};
use ml_backgammon::config::AppConfig;
use ml_backgammon::game::{Board, Player, Roll, Turn, TurnGenerator};
use ml_backgammon::play::{play_game, GameResult, MatchMetrics};

/// Backgammon legal-turn generator and self-play runner.
#[derive(Parser, Debug)]
#[command(name = "ml_backgammon", version, about)]
struct Cli {
    #[command(flatten)]
    global_opts: GlobalOpts,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Clone, Copy)]
struct GlobalOpts {
    /// Raise the log level to at least debug
    #[arg(global = true, long, default_value_t = false)]
    debug: bool,

    /// Log level for the application
    #[arg(global = true, long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every maximal turn from the opening position
    Turns(TurnsArgs),
    /// Run self-play games between two agents
    Play(PlayArgs),
}

#[derive(Args, Debug)]
struct TurnsArgs {
    /// The two dice, e.g. `--roll 5 4`
    #[arg(long, num_args = 2, required = true)]
    roll: Vec<u8>,

    /// Side to move: X or O
    #[arg(long, default_value = "X")]
    player: char,

    /// Check whether this turn (e.g. `X;a4;e5`) is among the legal turns
    #[arg(long)]
    check: Option<String>,
}

#[derive(Args, Debug)]
struct PlayArgs {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override number of games
    #[arg(long)]
    games: Option<usize>,

    /// Override the random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Override X's agent (random or greedy)
    #[arg(long)]
    agent_x: Option<AgentKind>,

    /// Override O's agent (random or greedy)
    #[arg(long)]
    agent_o: Option<AgentKind>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.global_opts)?;
    log::debug!("Parsed arguments: {cli:?}");

    match cli.command {
        Commands::Turns(args) => run_turns(args),
        Commands::Play(args) => run_play(args),
    }
}

fn init_logging(opts: GlobalOpts) -> Result<()> {
    let level = if opts.debug {
        max(LevelFilter::Debug, opts.log_level)
    } else {
        opts.log_level
    };

    let mut config_builder = simplelog::ConfigBuilder::new();
    config_builder
        .set_time_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Off);

    TermLogger::init(
        level,
        config_builder.build(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .context("initialising logger")
}

fn run_turns(args: TurnsArgs) -> Result<()> {
    let roll = Roll::new(args.roll[0], args.roll[1]).context("reading --roll")?;
    let Some(player) = Player::from_symbol(args.player) else {
        bail!("unknown player '{}' (expected 'X' or 'O')", args.player);
    };

    let turns = TurnGenerator::new(Board::starting(), roll, player).generate();
    if turns.is_empty() {
        println!("{player} has no legal move with {roll}");
    }
    for turn in &turns {
        println!("{turn}");
    }
    log::info!("{} maximal turns for {player} with {roll}", turns.len());

    if let Some(text) = args.check {
        let wanted: Turn = text
            .parse()
            .with_context(|| format!("parsing turn '{text}'"))?;
        if turns.contains(&wanted) {
            println!("{wanted} is legal");
        } else {
            bail!("{wanted} is not a legal turn for {player} with {roll}");
        }
    }
    Ok(())
}

fn run_play(args: PlayArgs) -> Result<()> {
    let mut config = AppConfig::load_or_default(&args.config)
        .with_context(|| format!("loading config from {}", args.config.display()))?;

    // Apply CLI overrides
    if let Some(games) = args.games {
        config.play.num_games = games;
    }
    if args.seed.is_some() {
        config.play.seed = args.seed;
    }
    if let Some(kind) = args.agent_x {
        config.play.agent_x = kind;
    }
    if let Some(kind) = args.agent_o {
        config.play.agent_o = kind;
    }
    config.validate()?;
    let play = config.play;

    let mut rng = match play.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut agents: [Box<dyn Agent>; 2] = [
        play.agent_o.build(play.seed.map(|s| s.wrapping_add(1))),
        play.agent_x.build(play.seed.map(|s| s.wrapping_add(2))),
    ];

    log::info!(
        "Playing {} games: X = {}, O = {}",
        play.num_games,
        agents[Player::CounterClockwise.index()].name(),
        agents[Player::Clockwise.index()].name()
    );

    let mut metrics = MatchMetrics::new();
    for game in 1..=play.num_games {
        let record = play_game(&mut agents, &mut rng, play.max_plies)
            .with_context(|| format!("playing game {game}"))?;
        metrics.record_game(GameResult {
            outcome: record.outcome,
            game_length: record.game_length(),
        });

        if game % play.log_interval == 0 {
            let window = play.log_interval;
            log::info!(
                "Game {}/{} | X win_rate({}): {:.1}% | avg_len: {:.1}",
                game,
                play.num_games,
                window,
                metrics.win_rate(Player::CounterClockwise, window) * 100.0,
                metrics.average_game_length(window),
            );
        }
    }

    println!("-------------------------------------------");
    for player in [Player::CounterClockwise, Player::Clockwise] {
        println!(
            "{} ({}): {} wins, {} points",
            player,
            agents[player.index()].name(),
            metrics.wins(player),
            metrics.points(player)
        );
    }
    if metrics.unfinished() > 0 {
        println!("Unfinished: {}", metrics.unfinished());
    }
    Ok(())
}
