// ABOUTME: Photon assistant CLI - ask the physics tutor and preview rendered replies
// ABOUTME: Handles one-shot questions, interactive sessions, and Markdown-subset rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Photon Learning
//!
//! Usage:
//! ```bash
//! # One-shot question, rendered to the terminal
//! photon-assistant ask "Why is the sky blue?"
//!
//! # Interactive tutoring session keeping conversation history
//! photon-assistant chat
//!
//! # Preview how a reply renders, from a file or stdin
//! photon-assistant render reply.md
//! cat reply.md | photon-assistant render
//!
//! # Exercise the offline fallback without touching the network
//! photon-assistant ask --offline "anything"
//! ```

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::debug;

use photon_assistant::config::AssistantConfig;
use photon_assistant::connectivity::ConnectivityFlag;
use photon_assistant::conversation::ConversationHistory;
use photon_assistant::errors::{AppError, AppResult};
use photon_assistant::llm::{ChatClient, TokenUsage};
use photon_assistant::logging::LoggingConfig;
use photon_assistant::render::{render_message, BlockNode, InlineNode, RenderedDocument};

#[derive(Parser)]
#[command(
    name = "photon-assistant",
    about = "Photon physics tutor CLI",
    long_about = "Command-line front end for the Photon assistant core: ask the physics tutor questions and preview how replies render."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Force the offline fallback path; no network request is made
    #[arg(long, global = true)]
    offline: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Ask the tutor one question and print the rendered reply
    Ask {
        /// The question to ask
        prompt: String,

        /// Print the raw reply text instead of the rendered blocks
        #[arg(long)]
        raw: bool,
    },

    /// Interactive tutoring session; history feeds each request
    Chat,

    /// Render Markdown-subset text from a file, or stdin if omitted
    Render {
        /// File to read; stdin when absent
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging; --verbose overrides the configured level
    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    if let Err(error) = logging.init() {
        eprintln!("error: failed to initialize logging: {error}");
        return ExitCode::FAILURE;
    }

    let result = match cli.command {
        Command::Ask { ref prompt, raw } => run_ask(prompt, raw, cli.offline).await,
        Command::Chat => run_chat(cli.offline).await,
        Command::Render { ref file } => run_render(file.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

/// Build the chat client, wiring the offline flag as the connectivity probe
fn build_client(offline: bool) -> AppResult<ChatClient> {
    let config = AssistantConfig::from_env();
    debug!(model = %config.model, offline, "Building chat client");

    let client = ChatClient::new(config)?;
    if offline {
        Ok(client.with_probe(Arc::new(ConnectivityFlag::new(false))))
    } else {
        Ok(client)
    }
}

async fn run_ask(prompt: &str, raw: bool, offline: bool) -> AppResult<()> {
    let client = build_client(offline)?;
    let reply = client.ask(prompt, &[]).await?;

    if raw {
        println!("{}", reply.message);
    } else {
        print_document(&render_message(&reply.message));
    }
    print_reply_footer(&reply.model, reply.usage.as_ref());
    Ok(())
}

async fn run_chat(offline: bool) -> AppResult<()> {
    let client = build_client(offline)?;
    let mut history = ConversationHistory::new();

    println!("Photon physics tutor. Empty line or 'exit' quits; '/clear' forgets the session.");

    let stdin = io::stdin();
    loop {
        print!("you> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(error) => {
                eprintln!("error: cannot read stdin: {error}");
                break;
            }
        }
        let input = line.trim();

        if input.is_empty() || input == "exit" || input == "quit" {
            break;
        }
        if input == "/clear" {
            history.clear();
            println!("(session cleared)");
            continue;
        }

        match client.ask(input, history.turns()).await {
            Ok(reply) => {
                print_document(&render_message(&reply.message));
                history.push_user(input);
                history.push_assistant(&reply.message, reply.usage);
            }
            Err(error) => eprintln!("error: {error}"),
        }
    }

    Ok(())
}

fn run_render(file: Option<&Path>) -> AppResult<()> {
    let text = match file {
        Some(path) => fs::read_to_string(path).map_err(|e| {
            AppError::invalid_input(format!("cannot read {}", path.display())).with_source(e)
        })?,
        None => {
            let mut buffer = String::new();
            for line in io::stdin().lock().lines() {
                match line {
                    Ok(line) => {
                        buffer.push_str(&line);
                        buffer.push('\n');
                    }
                    Err(e) => {
                        return Err(AppError::invalid_input("cannot read stdin").with_source(e))
                    }
                }
            }
            buffer
        }
    };

    print_document(&render_message(&text));
    Ok(())
}

// ANSI styling for the terminal preview
const BOLD: &str = "\x1b[1m";
const CYAN: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";

/// Flatten inline spans to a styled terminal string
fn format_spans(spans: &[InlineNode]) -> String {
    let mut out = String::new();
    for span in spans {
        match span {
            InlineNode::Text(text) => out.push_str(text),
            InlineNode::Bold(text) => {
                out.push_str(BOLD);
                out.push_str(text);
                out.push_str(RESET);
            }
            InlineNode::Code(text) => {
                out.push_str(CYAN);
                out.push_str(text);
                out.push_str(RESET);
            }
        }
    }
    out
}

/// Pretty-print a rendered document block by block
fn print_document(document: &RenderedDocument) {
    for block in &document.blocks {
        match block {
            BlockNode::Heading { level, spans } => {
                let marker = "#".repeat(usize::from(level.depth()));
                println!("{BOLD}{marker} {}{RESET}", format_spans(spans));
            }
            BlockNode::List { ordered, items } => {
                for (index, item) in items.iter().enumerate() {
                    if *ordered {
                        println!("  {}. {}", index + 1, format_spans(item));
                    } else {
                        println!("  - {}", format_spans(item));
                    }
                }
            }
            BlockNode::Paragraph { spans } => println!("{}", format_spans(spans)),
        }
    }
}

/// Print the model line and token usage, if reported
fn print_reply_footer(model: &str, usage: Option<&TokenUsage>) {
    match usage {
        Some(usage) => eprintln!("[{model}, {} tokens]", usage.total_tokens),
        None => eprintln!("[{model}]"),
    }
}
