use std::io::Write;

use hourglass_core::TimerDuration;

use crate::context::CliContext;

/// Display ranges enforced before edits reach the core; the value type
/// itself accepts any component.
pub const MAX_HOURS: u64 = 24;
pub const MAX_MINUTES: u64 = 60;
pub const MAX_SECONDS: u64 = 60;

fn clamp(value: u64, max: u64) -> u64 {
    value.min(max)
}

fn status_line(ctx: &CliContext) -> String {
    let state = if ctx.timer.is_running() {
        "running"
    } else {
        "stopped"
    };
    format!("{} ({state})", ctx.timer.duration())
}

pub async fn set(ctx: &CliContext, hours: u64, minutes: u64, seconds: u64) {
    if ctx.timer.is_running() {
        println!("stop the timer before editing");
        return;
    }

    let duration = TimerDuration::new(
        clamp(hours, MAX_HOURS),
        clamp(minutes, MAX_MINUTES),
        clamp(seconds, MAX_SECONDS),
    );
    if let Err(e) = ctx.timer.set_duration(duration).await {
        println!("error: {e}");
        return;
    }
    println!("set {duration}");
}

pub async fn set_hours(ctx: &CliContext, value: u64) {
    edit(ctx, |d| d.with_hours(clamp(value, MAX_HOURS))).await;
}

pub async fn set_minutes(ctx: &CliContext, value: u64) {
    edit(ctx, |d| d.with_minutes(clamp(value, MAX_MINUTES))).await;
}

pub async fn set_seconds(ctx: &CliContext, value: u64) {
    edit(ctx, |d| d.with_seconds(clamp(value, MAX_SECONDS))).await;
}

/// Apply a single-component edit to the current duration.
async fn edit(ctx: &CliContext, f: impl FnOnce(TimerDuration) -> TimerDuration) {
    if ctx.timer.is_running() {
        println!("stop the timer before editing");
        return;
    }

    let updated = f(ctx.timer.duration());
    if let Err(e) = ctx.timer.set_duration(updated).await {
        println!("error: {e}");
        return;
    }
    println!("set {updated}");
}

pub async fn start(ctx: &CliContext) {
    if ctx.timer.duration().is_zero() {
        println!("nothing to count down, set a duration first");
        return;
    }
    if let Err(e) = ctx.timer.start().await {
        println!("error: {e}");
        return;
    }
    println!("started");
}

pub async fn stop(ctx: &CliContext) {
    if let Err(e) = ctx.timer.stop().await {
        println!("error: {e}");
        return;
    }
    println!("stopped at {}", ctx.timer.duration());
}

pub fn status(ctx: &CliContext) {
    println!("{}", status_line(ctx));
}

/// Print every tick until the countdown stops or finishes.
pub async fn watch(ctx: &CliContext) {
    if !ctx.timer.is_running() {
        println!("{}", status_line(ctx));
        return;
    }

    let mut duration_rx = ctx.timer.watch_duration();
    let mut running_rx = ctx.timer.watch_running();

    println!("{}", *duration_rx.borrow_and_update());
    loop {
        tokio::select! {
            changed = duration_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                println!("{}", *duration_rx.borrow_and_update());
            }
            changed = running_rx.changed() => {
                if changed.is_err() || !*running_rx.borrow_and_update() {
                    break;
                }
            }
        }
    }
    println!("{}", status_line(ctx));
}

pub async fn show_config(ctx: &CliContext) {
    let config = ctx.config.read().await;
    println!("default duration: {}", config.default_duration);
    println!("current duration: {}", ctx.timer.duration());
}

/// Store the current duration as the startup preset.
pub async fn save_preset(ctx: &CliContext) {
    let current = ctx.timer.duration();

    let mut config = ctx.config.write().await;
    config.default_duration = current;
    if let Err(e) = config.save() {
        println!("error: {e}");
        return;
    }
    println!("saved preset {current}");
}

/// Replace the current duration with the stored preset.
pub async fn load_preset(ctx: &CliContext) {
    if ctx.timer.is_running() {
        println!("stop the timer before editing");
        return;
    }

    let preset = ctx.config.read().await.default_duration;
    if let Err(e) = ctx.timer.set_duration(preset).await {
        println!("error: {e}");
        return;
    }
    println!("loaded preset {preset}");
}

pub fn exit() {
    write!(std::io::stdout(), "quitting...").expect("error exiting");
    std::io::stdout().flush().expect("error flushing stdout");
}
