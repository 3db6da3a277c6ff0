//! `wikiqa` terminal entrypoint.

use clap::Parser;
use mimalloc::MiMalloc;
use tokio::io::{AsyncBufReadExt, BufReader};

use wikiqa::config::Config;
use wikiqa::excerpt::ExcerptFormatter;
use wikiqa::retrieval::{Candidate, HttpBackend, RetrievalClient, RetrievalMode};
use wikiqa::session::{QuerySession, SubmitOutcome};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Ask trivia questions against the question-answering backend.
#[derive(Debug, Parser)]
#[command(name = "wikiqa", version)]
struct Cli {
    /// Question to ask. Reads questions from stdin when omitted.
    question: Option<String>,

    /// Retrieval mode: VEC_FT, VEC, FT or a menu label such as "vector only".
    #[arg(long, short)]
    mode: Option<RetrievalMode>,

    /// Show full passages instead of 50-character excerpts.
    #[arg(long, short)]
    expanded: bool,

    /// Print at most this many answers.
    #[arg(long, short)]
    limit: Option<usize>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    config.validate()?;

    tracing::info!(
        backend_url = %config.backend_url,
        timeout_secs = config.request_timeout_secs,
        "wikiqa starting"
    );

    let backend = HttpBackend::from_config(&config)?;
    let session = QuerySession::new(
        RetrievalClient::new(backend),
        cli.mode.unwrap_or(config.default_mode),
    );
    let mut view = View {
        formatter: ExcerptFormatter::from_config(&config),
        expanded: cli.expanded,
        limit: cli.limit,
    };

    if let Some(question) = cli.question.as_deref() {
        ask(&session, &view, question).await;
        return Ok(());
    }

    println!(
        "Ask a trivia question (mode: {}). Commands: :mode <type>, :expand, :collapse, :quit",
        session.mode()
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();

        match line.strip_prefix(':') {
            Some("quit") | Some("q") => break,
            Some("expand") => view.expanded = true,
            Some("collapse") => view.expanded = false,
            Some(cmd) if cmd.starts_with("mode") => {
                let value = cmd.trim_start_matches("mode").trim();
                match value.parse::<RetrievalMode>() {
                    Ok(mode) => {
                        session.select_mode(mode);
                        println!("search type: {mode}");
                    }
                    Err(e) => println!("! {e}"),
                }
            }
            Some(other) => println!("! unknown command ':{other}'"),
            None => ask(&session, &view, line).await,
        }
    }

    Ok(())
}

/// Presentation state owned by the shell, not the library.
struct View {
    formatter: ExcerptFormatter,
    expanded: bool,
    limit: Option<usize>,
}

async fn ask(session: &QuerySession<HttpBackend>, view: &View, question: &str) {
    match session.submit(question).await {
        Ok(SubmitOutcome::Applied { .. }) => render(&session.displayed(), view),
        Ok(SubmitOutcome::Ignored) | Ok(SubmitOutcome::Superseded { .. }) => {}
        Err(e) => println!("! something went wrong: {e}"),
    }
}

fn render(candidates: &[Candidate], view: &View) {
    if candidates.is_empty() {
        println!("no answers found");
        return;
    }

    let shown = view.limit.unwrap_or(candidates.len());
    for (rank, candidate) in candidates.iter().take(shown).enumerate() {
        match view.formatter.format(candidate) {
            Ok(excerpt) => {
                let (before, after) = excerpt.context(view.expanded);
                println!("{}. {}", rank + 1, excerpt.answer);
                println!(
                    "   confidence: {}, source article: {} <{}>",
                    excerpt.display_score, candidate.title, excerpt.deep_link
                );
                println!("   {before}[{}]{after}", excerpt.answer);
            }
            Err(e) => println!("{}. {} (! {e})", rank + 1, candidate.answer_text),
        }
    }
}
