// src/log.rs
use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

use flexi_logger::{DeferredNow, FileSpec, Logger, LoggerHandle};
use ::log::Record;

use crate::config::consts::{LOG_BASENAME, STORE_DIR};

static START: OnceLock<Instant> = OnceLock::new();
static HANDLE: OnceLock<LoggerHandle> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

/// `[elapsed][LEVEL] msg`, elapsed measured from the first log call.
fn elapsed_format(
    w: &mut dyn Write,
    _now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    let elapsed = fmt_elapsed(start().elapsed().as_millis());
    write!(w, "[{elapsed}][{}] {}", record.level(), record.args())
}

/// Start file logging under `.store/`. Level comes from `RUST_LOG` (default `info`).
/// Safe to call more than once; later calls are no-ops.
/// Failure to start the logger is reported on stderr and otherwise ignored.
pub fn init() {
    start();
    if HANDLE.get().is_some() {
        return;
    }

    let started = Logger::try_with_env_or_str("info").and_then(|logger| {
        logger
            .log_to_file(
                FileSpec::default()
                    .directory(STORE_DIR)
                    .basename(LOG_BASENAME)
                    .suppress_timestamp(),
            )
            .append()
            .format(elapsed_format)
            .start()
    });

    match started {
        Ok(handle) => {
            let _ = HANDLE.set(handle);
        }
        Err(e) => eprintln!("Warning: logging disabled ({e})"),
    }
}

#[cfg(test)]
mod tests {
    use super::fmt_elapsed;

    #[test]
    fn elapsed_is_zero_padded() {
        assert_eq!(fmt_elapsed(0), "00:00:00.000");
        assert_eq!(fmt_elapsed(3_723_004), "01:02:03.004");
    }
}
