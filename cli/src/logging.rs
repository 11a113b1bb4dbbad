use colored::*;
use std::env;

// Simple user-facing logging helpers, separate from the tracing pipeline

pub fn log_info(message: &str) {
    if env::var("ASKBOX_DEBUG").is_ok() {
        eprintln!("{} {}", "[INFO]".cyan(), message);
    }
}

pub fn log_error(message: &str) {
    eprintln!("{} {}", "[ERROR]".red().bold(), message);
}
