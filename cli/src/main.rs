use clap::{Parser, Subcommand};
use hourglass::CliContext;
use hourglass::commands;
use hourglass::logging;
use hourglass::readline;
use std::io::Write;

#[tokio::main]
async fn main() -> Result<(), String> {
    logging::init();
    let ctx = CliContext::new();

    loop {
        let line = readline()?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match respond(line, &ctx).await {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                write!(std::io::stdout(), "{err}").map_err(|e| e.to_string())?;
                std::io::stdout().flush().map_err(|e| e.to_string())?;
            }
        }
    }

    ctx.shutdown().await;
    Ok(())
}

#[derive(Parser)]
#[command(version, about = "countdown timer cli")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Replace the whole duration; components above the display range are clamped
    Set {
        #[arg(long, default_value_t = 0)]
        hours: u64,
        #[arg(long, default_value_t = 0)]
        minutes: u64,
        #[arg(long, default_value_t = 0)]
        seconds: u64,
    },
    /// Replace only the hour component
    Hours { value: u64 },
    /// Replace only the minute component
    Minutes { value: u64 },
    /// Replace only the second component
    Seconds { value: u64 },
    Start,
    Stop,
    Status,
    /// Print every tick until the countdown stops
    Watch,
    Config,
    SavePreset,
    LoadPreset,
    Exit,
}

async fn respond(line: &str, ctx: &CliContext) -> Result<bool, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting")?;
    args.insert(0, "hourglass".to_string());
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;

    match &cli.command {
        Some(Commands::Set {
            hours,
            minutes,
            seconds,
        }) => commands::set(ctx, *hours, *minutes, *seconds).await,
        Some(Commands::Hours { value }) => commands::set_hours(ctx, *value).await,
        Some(Commands::Minutes { value }) => commands::set_minutes(ctx, *value).await,
        Some(Commands::Seconds { value }) => commands::set_seconds(ctx, *value).await,
        Some(Commands::Start) => commands::start(ctx).await,
        Some(Commands::Stop) => commands::stop(ctx).await,
        Some(Commands::Status) => commands::status(ctx),
        Some(Commands::Watch) => commands::watch(ctx).await,
        Some(Commands::Config) => commands::show_config(ctx).await,
        Some(Commands::SavePreset) => commands::save_preset(ctx).await,
        Some(Commands::LoadPreset) => commands::load_preset(ctx).await,
        Some(Commands::Exit) => {
            commands::exit();
            return Ok(true);
        }
        None => {}
    }
    Ok(false)
}
