//! fastsine - precision report and listening test for the quarter-wave sine
//!
//! Run with:
//!   cargo run --bin fastsine                   # accuracy + distortion report
//!   cargo run --bin fastsine -- report 10      # report up to 1 << 10 steps
//!   cargo run --bin fastsine -- play 0.5 4     # pot position, seconds

mod play;
mod report;

use color_eyre::eyre::{bail, Result as EyreResult, WrapErr};

fn main() -> EyreResult<()> {
    color_eyre::install()?;

    let mut args = std::env::args().skip(1);
    let command = args.next().unwrap_or_else(|| "report".to_string());

    match command.as_str() {
        "report" => {
            let max_shift = parse_arg(args.next(), "max step shift", 12u32)?;
            report::run(max_shift)
        }
        "play" => {
            let pot = parse_arg(args.next(), "pot position", 0.5f32)?;
            let seconds = parse_arg(args.next(), "duration", 4.0f32)?;
            play::run(pot.clamp(0.0, 1.0), seconds)
        }
        other => bail!("unknown command {other:?} (expected `report` or `play`)"),
    }
}

fn parse_arg<T>(arg: Option<String>, what: &str, default: T) -> EyreResult<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match arg {
        Some(s) => s
            .parse()
            .wrap_err_with(|| format!("invalid {what}: {s:?}")),
        None => Ok(default),
    }
}
