use colored::*;

/// Print the response to the terminal, verbatim, with a colored prefix
pub fn print_response(response: &str) {
    println!("{}: {}", "Assistant".blue().bold(), response);
}

/// Show usage instructions when no query or action is provided
pub fn print_usage_instructions() {
    println!("{}", "Usage:".yellow().bold());
    println!("  {}", "askbox \"your question\"".green().bold());
    println!("    Send a single query to the backend");
    println!();
    println!("  {}", "askbox -i".green().bold());
    println!("    Start an interactive chat session");
    println!();
    println!("{}", "Options:".cyan());
    println!("  --api-url <URL>  Specify the backend query endpoint");
    println!("  --help           Show this help message");
    println!();
}
