//! Verbosity-gated output for CLI commands.

/// Output verbosity selected by the global `--verbose`/`--quiet` flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Errors only
    Quiet,
    /// Normal output
    Normal,
    /// Normal output plus diagnostics
    Verbose,
}

impl LogLevel {
    /// Resolve the level from the CLI flags; `--quiet` wins over
    /// `--verbose` when both are given
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            LogLevel::Quiet
        } else if verbose {
            LogLevel::Verbose
        } else {
            LogLevel::Normal
        }
    }
}

/// Print `msg` unless suppressed by the current level.
///
/// Messages with `verbose_only` set are emitted only at `Verbose`.
pub fn log(level: LogLevel, verbose_only: bool, msg: &str) {
    if level == LogLevel::Quiet {
        return;
    }
    if verbose_only && level != LogLevel::Verbose {
        return;
    }
    println!("{msg}");
}
