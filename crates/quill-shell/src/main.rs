//! Interactive shell for the articles service.
//!
//! The shell is a plain view layer: it forwards user intents into
//! [`SessionController`] operations and renders the controller's state
//! (status line, article list, current screen) after each one. All
//! validation it performs is form-level gating; the controller and the
//! server own the real rules.

use std::borrow::Cow::{self, Borrowed, Owned};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use quill_application::SessionController;
use quill_core::article::{Article, ArticleDraft, Topic};
use quill_core::session::{Credentials, Screen};
use quill_infrastructure::{FileTokenStore, load_client_config, load_client_config_from};
use quill_transport::HttpArticleApi;

#[derive(Parser)]
#[command(name = "quill")]
#[command(about = "Quill - terminal client for the articles service", long_about = None)]
struct Cli {
    /// Base URL of the articles service (overrides the config file)
    #[arg(long, short = 's')]
    server: Option<String>,

    /// Path to an alternative config file
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Shell helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct ShellHelper {
    commands: Vec<String>,
}

impl ShellHelper {
    fn new() -> Self {
        Self {
            commands: vec![
                "/login".to_string(),
                "/articles".to_string(),
                "/new".to_string(),
                "/edit".to_string(),
                "/cancel".to_string(),
                "/delete".to_string(),
                "/logout".to_string(),
                "/help".to_string(),
            ],
        }
    }
}

impl Helper for ShellHelper {}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for ShellHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for ShellHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for ShellHelper {}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_client_config_from(path).await?,
        None => load_client_config().await?,
    };
    if let Some(server) = cli.server {
        config.base_url = server;
    }

    let api = Arc::new(HttpArticleApi::new(&config)?);
    let token_store = Arc::new(FileTokenStore::new()?);
    let mut controller = SessionController::new(api, token_store);
    controller.restore().await;

    let helper = ShellHelper::new();
    let mut rl = Editor::new()?;
    rl.set_helper(Some(helper));

    println!("{}", "=== Quill ===".bright_magenta().bold());
    println!("{}", format!("Connected to {}", config.base_url).bright_black());
    if controller.is_authenticated() {
        println!(
            "{}",
            "A saved session was found; /articles to load your articles.".bright_black()
        );
    }
    println!("{}", "Type /help for commands, or 'quit' to exit.".bright_black());
    println!();

    loop {
        let prompt = match controller.screen() {
            Screen::Login => "quill(login)> ",
            Screen::Articles => "quill(articles)> ",
        };

        let readline = rl.readline(prompt);
        let line = match readline {
            Ok(line) => line,
            Err(rustyline::error::ReadlineError::Interrupted)
            | Err(rustyline::error::ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("{}", format!("Input error: {err}").red());
                break;
            }
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed == "quit" || trimmed == "exit" {
            break;
        }
        let _ = rl.add_history_entry(&line);

        let mut parts = trimmed.split_whitespace();
        let command = parts.next().unwrap_or_default();

        match command {
            "/help" => print_help(),
            "/login" => {
                let Some(credentials) = read_credentials(&mut rl)? else {
                    continue;
                };
                wait_indicator();
                controller.login(credentials).await;
                render_status(&controller);
            }
            "/articles" => {
                wait_indicator();
                controller.load_articles().await;
                render_status(&controller);
                render_articles(controller.articles());
            }
            "/new" => {
                controller.cancel_edit();
                let Some(draft) = read_draft(&mut rl, None)? else {
                    continue;
                };
                wait_indicator();
                controller.resolve_submit(draft).await;
                render_status(&controller);
            }
            "/edit" => {
                let Some(article_id) = parse_id(parts.next()) else {
                    println!("{}", "Usage: /edit <article_id>".yellow());
                    continue;
                };
                controller.begin_edit(article_id);
                let Some(current) = controller.current_article().cloned() else {
                    println!("{}", "No cached article with that id; /articles first.".yellow());
                    continue;
                };
                let Some(draft) = read_draft(&mut rl, Some(&current))? else {
                    controller.cancel_edit();
                    continue;
                };
                wait_indicator();
                controller.resolve_submit(draft).await;
                render_status(&controller);
            }
            "/cancel" => {
                controller.cancel_edit();
                println!("{}", "Back to create mode.".bright_black());
            }
            "/delete" => {
                let Some(article_id) = parse_id(parts.next()) else {
                    println!("{}", "Usage: /delete <article_id>".yellow());
                    continue;
                };
                wait_indicator();
                controller.delete_article(article_id).await;
                render_status(&controller);
                render_articles(controller.articles());
            }
            "/logout" => {
                controller.logout().await;
                println!("{}", controller.status().bright_green());
            }
            _ => println!("{}", "Unknown command; /help lists them.".bright_black()),
        }
    }

    println!("{}", "Bye.".bright_green());
    Ok(())
}

/// The view-side blocking indicator, driven by the controller's busy window.
fn wait_indicator() {
    println!("{}", "please wait...".bright_black());
}

fn render_status(controller: &SessionController) {
    if !controller.status().is_empty() {
        println!("{}", controller.status().bright_blue());
    }
}

fn render_articles(articles: &[Article]) {
    if articles.is_empty() {
        println!("{}", "No articles yet.".bright_black());
        return;
    }
    for article in articles {
        println!(
            "{} {} {}",
            format!("#{}", article.article_id).bright_yellow(),
            format!("[{}]", article.topic).bright_magenta(),
            article.title.bold()
        );
        println!("    {}", article.text);
    }
}

fn print_help() {
    println!("{}", "Commands:".bold());
    println!("  /login              log in to the service");
    println!("  /articles           load and list your articles");
    println!("  /new                create an article");
    println!("  /edit <article_id>  edit a cached article");
    println!("  /cancel             leave edit mode without submitting");
    println!("  /delete <article_id>  delete an article");
    println!("  /logout             end the session");
    println!("  quit                exit the shell");
}

fn parse_id(raw: Option<&str>) -> Option<u64> {
    raw?.parse().ok()
}

/// Prompts for credentials, enforcing the login form's minimum lengths.
/// Returns `None` when the input does not pass the gate.
fn read_credentials(rl: &mut Editor<ShellHelper, rustyline::history::DefaultHistory>) -> Result<Option<Credentials>> {
    let username = rl.readline("Username: ")?;
    let password = rl.readline("Password: ")?;
    let credentials = Credentials::new(username.trim(), password.trim());

    if !credentials.is_submittable() {
        println!(
            "{}",
            "Username must be at least 3 characters and password at least 8.".yellow()
        );
        return Ok(None);
    }
    Ok(Some(credentials))
}

/// Prompts for the article form fields. In edit mode the current values are
/// shown and kept when the user submits an empty line. Returns `None` when
/// the draft does not pass validation.
fn read_draft(
    rl: &mut Editor<ShellHelper, rustyline::history::DefaultHistory>,
    current: Option<&Article>,
) -> Result<Option<ArticleDraft>> {
    let title = read_field(rl, "Title", current.map(|a| a.title.as_str()))?;
    let text = read_field(rl, "Text", current.map(|a| a.text.as_str()))?;
    let topic_raw = read_field(rl, "Topic (JavaScript/React/Node)", current.map(|a| {
        match a.topic {
            Topic::JavaScript => "JavaScript",
            Topic::React => "React",
            Topic::Node => "Node",
        }
    }))?;

    let Ok(topic) = topic_raw.trim().parse::<Topic>() else {
        println!("{}", "Topic must be JavaScript, React, or Node.".yellow());
        return Ok(None);
    };

    let draft = ArticleDraft::new(title.trim(), text.trim(), topic);
    if let Err(err) = draft.validate() {
        println!("{}", err.to_string().yellow());
        return Ok(None);
    }
    Ok(Some(draft))
}

fn read_field(
    rl: &mut Editor<ShellHelper, rustyline::history::DefaultHistory>,
    label: &str,
    default: Option<&str>,
) -> Result<String> {
    let prompt = match default {
        Some(default) => format!("{label} [{default}]: "),
        None => format!("{label}: "),
    };
    let input = rl.readline(&prompt)?;
    let trimmed = input.trim();
    if trimmed.is_empty() {
        if let Some(default) = default {
            return Ok(default.to_string());
        }
    }
    Ok(trimmed.to_string())
}
