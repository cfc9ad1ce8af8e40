//! Leveled progress logging for the pipeline.
//!
//! All messages go to stderr so that JSON output from the `parse` command
//! stays clean on stdout.

/// Log level for display.
#[derive(Debug, Clone, Copy)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

fn emit(level: LogLevel, message: &str) {
    let prefix = match level {
        LogLevel::Info => "  ",
        LogLevel::Success => "  ✓",
        LogLevel::Warning => "  ⚠️",
        LogLevel::Error => "  ❌",
    };
    eprintln!("{} {}", prefix, message);
}

/// Log an informational message.
pub fn log_info(message: impl Into<String>) {
    emit(LogLevel::Info, &message.into());
}

/// Log a success message.
pub fn log_success(message: impl Into<String>) {
    emit(LogLevel::Success, &message.into());
}

/// Log a warning message.
pub fn log_warning(message: impl Into<String>) {
    emit(LogLevel::Warning, &message.into());
}

/// Log an error message.
pub fn log_error(message: impl Into<String>) {
    emit(LogLevel::Error, &message.into());
}
