//! u-mentoring: mentor-startup session scheduling CLI.
//!
//! # Usage
//!
//! ```text
//! u-mentoring schedule --search ada --now "11:20 AM"
//! u-mentoring toggle mentor "Ada Lovelace"
//! u-mentoring stats --seed 7
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Local;
use clap::{Parser, Subcommand};
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use u_mentoring::config::Config;
use u_mentoring::models::{parse_clock, Exclusions, ScheduleResult, TimeSlot};
use u_mentoring::roster::{Roster, RosterKind};
use u_mentoring::scheduler::ScheduleStats;
use u_mentoring::view::{build_board, Board, Highlight};

#[derive(Parser)]
#[command(name = "u-mentoring", version, about = "Mentor-startup session scheduler")]
struct Cli {
    /// Event configuration file.
    #[arg(long, short, global = true, default_value = "mentoring.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute and show the schedule board
    Schedule {
        /// Only show mentors whose name contains this text (case-insensitive).
        #[arg(long, short, default_value = "")]
        search: String,

        /// Wall-clock time used for highlighting, e.g. "11:20 AM". Defaults to now.
        #[arg(long)]
        now: Option<String>,

        /// Seed for a reproducible schedule.
        #[arg(long)]
        seed: Option<u64>,

        /// Print the board as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Show session counts and matching statistics
    Stats {
        /// Seed for a reproducible schedule.
        #[arg(long)]
        seed: Option<u64>,

        /// Print stats as JSON.
        #[arg(long)]
        json: bool,
    },
    /// List the configured time slots
    Slots,
    /// Switch a mentor or startup off (or back on)
    Toggle {
        #[command(subcommand)]
        target: ToggleTarget,
    },
    /// List switched-off mentors and startups
    Exclusions,
}

#[derive(Subcommand)]
enum ToggleTarget {
    /// Toggle a mentor
    Mentor { name: String },
    /// Toggle a startup
    Startup { name: String },
}

/// Loaded event state shared by the commands.
struct Event {
    config: Config,
    roster: Roster,
    exclusions: Exclusions,
}

impl Event {
    fn load(config_path: &Path) -> anyhow::Result<Self> {
        let config = Config::load_or_default(config_path)
            .with_context(|| format!("loading config {}", config_path.display()))?;
        let roster = Roster::load(&config.mentors, &config.startups).context("loading rosters")?;
        let exclusions = Exclusions::load_or_default(&config.state)?;
        debug!(
            mentors = roster.mentors.len(),
            startups = roster.startups.len(),
            excluded_mentors = exclusions.mentors.len(),
            excluded_startups = exclusions.startups.len(),
            "event loaded"
        );
        Ok(Self {
            config,
            roster,
            exclusions,
        })
    }

    fn schedule(&self, seed: Option<u64>) -> anyhow::Result<(ScheduleResult, usize)> {
        let slots = self.config.time_slots()?;
        let slot_count = slots.len();
        let request = self.roster.to_request(slots, &self.exclusions);
        let scheduler = self.config.matching.scheduler();

        let result = match seed {
            Some(seed) => scheduler.schedule_with_rng(&request, &mut StdRng::seed_from_u64(seed)),
            None => scheduler.schedule(&request),
        }
        .context("scheduling failed")?;

        Ok((result, slot_count))
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Schedule {
            search,
            now,
            seed,
            json,
        } => {
            let event = Event::load(&cli.config)?;
            let (result, _) = event.schedule(seed)?;
            let now = match now {
                Some(text) => TimeSlot::at(parse_clock(&text)?),
                None => TimeSlot::at(Local::now().time()),
            };
            let board = build_board(&event.roster, &result, &event.exclusions, &search, Some(&now));
            if json {
                println!("{}", serde_json::to_string_pretty(&board)?);
            } else {
                print_board(&board);
            }
        }
        Command::Stats { seed, json } => {
            let event = Event::load(&cli.config)?;
            let (result, slot_count) = event.schedule(seed)?;
            let stats = ScheduleStats::calculate(&result, slot_count);
            if json {
                let out = serde_json::json!({
                    "stats": stats,
                    "startup_counts": result.startup_counts,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                print_stats(&stats, &result);
            }
        }
        Command::Slots => {
            let config = Config::load_or_default(&cli.config)?;
            for (i, slot) in config.time_slots()?.iter().enumerate() {
                println!("{:>2}. {slot}", i + 1);
            }
        }
        Command::Toggle { target } => {
            let mut event = Event::load(&cli.config)?;
            let (kind, name) = match target {
                ToggleTarget::Mentor { name } => (RosterKind::Mentor, name),
                ToggleTarget::Startup { name } => (RosterKind::Startup, name),
            };
            let excluded = event.roster.toggle(&mut event.exclusions, kind, &name)?;
            event.exclusions.save(&event.config.state)?;
            let kind = kind.as_str();
            info!(kind, name = %name, excluded, "exclusion toggled");
            println!("{kind} {name} turned {}", if excluded { "off" } else { "on" });
        }
        Command::Exclusions => {
            let config = Config::load_or_default(&cli.config)?;
            let exclusions = Exclusions::load_or_default(&config.state)?;
            if exclusions.is_empty() {
                println!("nothing is switched off");
            }
            for name in &exclusions.mentors {
                println!("mentor  {name}");
            }
            for name in &exclusions.startups {
                println!("startup {name}");
            }
        }
    }
    Ok(())
}

fn on_off(enabled: bool) -> colored::ColoredString {
    if enabled {
        "on".green()
    } else {
        "off".dimmed()
    }
}

fn print_board(board: &Board) {
    println!("{}", "Mentoring Schedule".bold());
    println!();

    for mentor in &board.mentors {
        println!(
            "{} {} [{}]",
            format!("Mentor: {}", mentor.name).bold(),
            mentor.preferences,
            on_off(mentor.enabled)
        );
        if mentor.sessions.is_empty() {
            println!("  (no sessions)");
        }
        for row in &mentor.sessions {
            let line = format!(
                "{} ({}) at {}",
                row.session.startup, row.session.sector, row.session.time_slot
            );
            let line = match row.highlight {
                Highlight::Current => line.red().bold(),
                Highlight::Next => line.green().bold(),
                Highlight::Normal => line.normal(),
            };
            println!("  - {line}");
        }
        println!();
    }

    println!("{}", "Mentoring Stats".bold());
    for startup in &board.startups {
        let count = startup
            .sessions
            .map_or_else(|| "-".to_string(), |n| n.to_string());
        println!(
            "  {}: {} sessions [{}]",
            startup.name.bold(),
            count,
            on_off(startup.enabled)
        );
        println!("    contact: {}", startup.contact);
    }
}

fn print_stats(stats: &ScheduleStats, result: &ScheduleResult) {
    println!("sessions:          {}", stats.total_sessions);
    println!("mentors:           {}", stats.mentors);
    println!("startups:          {}", stats.startups);
    println!(
        "sessions/startup:  {}..{}",
        stats.min_sessions, stats.max_sessions
    );
    println!(
        "preference draws:  {} ({:.0}%), by rank {:?}",
        stats.preference_sessions,
        stats.preference_rate * 100.0,
        stats.sessions_by_rank
    );
    println!("idle mentor slots: {}", stats.idle_pairs);
    if !stats.is_fully_covered() {
        println!(
            "{} {}",
            "uncovered:".yellow(),
            stats.uncovered_startups.join(", ")
        );
    }
    println!();
    for count in &result.startup_counts {
        println!("  {:<24} {}", count.startup, count.sessions);
    }
}
