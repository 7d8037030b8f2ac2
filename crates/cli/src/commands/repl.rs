//! Interactive mode — a thin command loop over the two components.
//!
//! The loop is deliberately dumb glue: it parses a line, calls into the
//! fetcher/writer, prints the result, and remembers the last successful
//! envelope so `save` can archive it. All contract behavior lives below
//! this layer.

use chrono::Utc;
use newsdesk_archive::json_file_stem;
use newsdesk_config::AppConfig;
use newsdesk_core::article::FeedEnvelope;
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "\
  news <category>   fetch news for a category (e.g. news Technology)
  save [name]       archive the last fetched envelope as JSON
  tools             list the registered tool definitions
  help              show this help
  exit              quit";

/// One parsed line of user input.
#[derive(Debug, PartialEq, Eq)]
enum ReplCommand {
    Help,
    Tools,
    News(String),
    Save(Option<String>),
    Quit,
    Unknown(String),
}

fn parse(line: &str) -> ReplCommand {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb.to_lowercase().as_str() {
        "help" | "?" => ReplCommand::Help,
        "tools" => ReplCommand::Tools,
        "exit" | "quit" => ReplCommand::Quit,
        "news" if !rest.is_empty() => ReplCommand::News(rest.to_string()),
        "save" => ReplCommand::Save((!rest.is_empty()).then(|| rest.to_string())),
        _ => ReplCommand::Unknown(line.to_string()),
    }
}

pub async fn run(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let (fetcher, writer) = super::build_components(config);

    println!();
    println!("  newsdesk — interactive mode");
    println!("  archive directory: {}", writer.directory().display());
    println!();
    println!("{HELP}");
    println!();

    // The only state the loop keeps: the last successful fetch.
    let mut last: Option<FeedEnvelope> = None;

    let stdin = tokio::io::stdin();
    let reader = BufReader::new(stdin);
    let mut lines = reader.lines();

    loop {
        print!("newsdesk > ");
        use std::io::Write;
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break; // EOF (Ctrl+D)
        };
        if line.trim().is_empty() {
            continue;
        }

        match parse(&line) {
            ReplCommand::Help => println!("{HELP}"),
            ReplCommand::Quit => break,
            ReplCommand::Tools => {
                let registry = newsdesk_tools::default_registry(fetcher.clone(), writer.clone());
                let mut names = registry.names().into_iter().map(String::from).collect::<Vec<_>>();
                names.sort();
                println!("  registered tools: {}", names.join(", "));
            }
            ReplCommand::News(category) => {
                let envelope = fetcher.get_news(&category).await;
                println!("{}", serde_json::to_string_pretty(&envelope)?);
                if envelope.is_success() {
                    last = Some(envelope);
                }
            }
            ReplCommand::Save(name) => match &last {
                None => println!("  nothing to save — fetch something first (news <category>)"),
                Some(envelope) => {
                    let stem = name.unwrap_or_else(|| {
                        json_file_stem(&envelope.category, Utc::now().date_naive())
                    });
                    let content = serde_json::to_string(envelope)?;
                    let result = writer.archive_json(&content, &stem).await;
                    match (result.path, result.message) {
                        (Some(path), _) => println!("  saved to {path}"),
                        (None, Some(message)) => println!("  save failed: {message}"),
                        (None, None) => println!("  save failed"),
                    }
                }
            },
            ReplCommand::Unknown(line) => {
                println!("  unrecognized command: {line:?} — try 'help'");
            }
        }
    }

    Ok(())
}
