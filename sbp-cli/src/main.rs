use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sbp_lib::frame::{MsgType, scan_header};
use sbp_lib::{SbpError, SbpMessage};
use tracing::debug;

/// Decode SBP frames from a capture file and print every recognized message.
///
/// The file is walked the way a transport reader would: try to decode at the
/// current offset, advance past the frame on success, advance a single byte
/// and rescan on failure.
#[derive(Parser)]
#[command(name = "sbp-cli")]
struct Cli {
    /// Capture file containing raw SBP frames
    input: PathBuf,

    /// Treat the input as a hex dump instead of raw bytes
    #[arg(long)]
    hex: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let raw = fs::read(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;
    let data = if cli.hex {
        let text: String = String::from_utf8_lossy(&raw).split_whitespace().collect();
        hex::decode(text).context("input is not a valid hex dump")?
    } else {
        raw
    };

    let mut offset = 0;
    let mut decoded = 0usize;
    let mut skipped = 0usize;
    while offset < data.len() {
        match SbpMessage::decode(&data[offset..]) {
            Ok(msg) => {
                print_message(offset, &msg);
                decoded += 1;
                offset += msg.frame_len();
            }
            Err(SbpError::BufferTooShort { expected, actual })
                if scan_header(
                    &data[offset..],
                    &[MsgType::Obs, MsgType::BaselineEcef],
                )
                .is_ok() =>
            {
                // a recognized frame starts here but the capture ends mid-frame
                println!(
                    "[{offset:#06x}] truncated frame at end of capture \
                     ({actual} of {expected} bytes)"
                );
                break;
            }
            Err(err) => {
                debug!(offset, %err, "resynchronizing");
                skipped += 1;
                offset += 1;
            }
        }
    }

    println!("{decoded} messages decoded, {skipped} bytes skipped");
    Ok(())
}

fn print_message(offset: usize, msg: &SbpMessage) {
    match msg {
        SbpMessage::Observations(obs) => {
            println!(
                "[{offset:#06x}] OBS tow {} ms  wn {}  fragment {}/{}  {} records",
                obs.header.tow_ms,
                obs.header.week,
                obs.header.fragment.index(),
                obs.header.fragment.total(),
                obs.records.len(),
            );
            for rec in &obs.records {
                println!(
                    "  sat {:3}  {:<9}  P {:>10}  L {}+{}/256  D {}+{}/256  cn0 {}  lock {}{}",
                    rec.sat_id,
                    rec.signal(),
                    rec.pseudorange,
                    rec.carrier_phase_int,
                    rec.carrier_phase_frac,
                    rec.doppler_int,
                    rec.doppler_frac,
                    rec.cn0,
                    rec.lock_time,
                    if rec.flags.raim_exclusion() {
                        "  RAIM-excluded"
                    } else {
                        ""
                    },
                );
            }
        }
        SbpMessage::BaselineEcef(baseline) => {
            println!(
                "[{offset:#06x}] BASELINE tow {} ms  x {} mm  y {} mm  z {} mm  \
                 accuracy {}  sats {}  flags {:#04x}",
                baseline.tow_ms,
                baseline.x_mm,
                baseline.y_mm,
                baseline.z_mm,
                baseline.accuracy,
                baseline.n_sats,
                baseline.flags,
            );
        }
    }
}
