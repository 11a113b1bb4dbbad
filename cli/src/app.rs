use anyhow::{Context, Result};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::output::print_response;
use crate::widget::ChatWidget;
use askbox_core::client::QueryClient;

/// Runs a single query mode, sending one query to the backend and displaying the response
pub async fn run_single_query<C: QueryClient + 'static>(query: String, client: C) -> Result<()> {
    info!("Running single query: {}", query);

    let mut widget = ChatWidget::new(Arc::new(client));
    widget.set_input(query);

    // Display a spinner while waiting for response
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner} {msg}")
            .unwrap(),
    );
    spinner.set_message("Processing request...");
    spinner.enable_steady_tick(Duration::from_millis(120));

    // A failure is logged by the widget and leaves the display unchanged;
    // the display region is printed either way.
    widget.submit();
    widget.next_reply().await;
    spinner.finish_and_clear();

    print_response(widget.last_response());
    Ok(())
}

/// Runs an interactive chat session against the backend
pub async fn run_interactive_chat<C: QueryClient + 'static>(client: C) -> Result<()> {
    println!("Starting interactive chat session.");
    println!("Type 'exit' or 'quit' to end the session.");
    println!();

    let mut widget = ChatWidget::new(Arc::new(client));

    loop {
        // Prompt for user input
        print!("{}: ", "You".green().bold());
        io::stdout().flush().context("Failed to flush stdout")?;

        let mut input = String::new();
        let bytes_read = io::stdin()
            .read_line(&mut input)
            .context("Failed to read input")?;
        if bytes_read == 0 {
            // EOF ends the session
            println!();
            break;
        }

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        // Check for exit command
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            println!("Exiting chat session.");
            break;
        }

        widget.set_input(input);

        // Display a spinner while waiting for response
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("{spinner} {msg}")
                .unwrap(),
        );
        spinner.set_message("Processing request...");
        spinner.enable_steady_tick(Duration::from_millis(120));

        widget.submit();
        widget.next_reply().await;
        spinner.finish_and_clear();

        print_response(widget.last_response());
        println!(); // Add spacing between interactions
    }

    Ok(())
}
