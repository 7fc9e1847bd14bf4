use clap::{Arg, Command};
use paj_ajap::{Translator, load_store_from_file};
use paj_ajap_mt::{GroqProvider, HybridTranslator, MockCompleter, MockMode};
use std::env;
use std::path::Path;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("paj-mt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Translate between Paj Ajap and English with a completion fallback")
        .arg(
            Arg::new("text")
                .help("Text to translate; omit for an interactive session")
                .index(1),
        )
        .arg(
            Arg::new("mock")
                .long("mock")
                .short('m')
                .help("Use the echo mock instead of the Groq API")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("deterministic")
                .long("deterministic")
                .short('d')
                .help("Rules only, never call a completion provider")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Show the source and explanation of each answer")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let use_mock = matches.get_flag("mock");
    let deterministic = matches.get_flag("deterministic");
    let verbose = matches.get_flag("verbose");

    let default_filter = if verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let translator = match env::var("PAJ_AJAP_VOCABULARY") {
        Ok(path) => Translator::new(load_store_from_file(Path::new(&path))?),
        Err(_) => Translator::default(),
    };
    let translator = Arc::new(translator);
    let mut hybrid = HybridTranslator::new(Arc::clone(&translator));

    if use_mock {
        hybrid = hybrid.with_provider(Arc::new(MockCompleter::new(MockMode::Echo)));
    } else if !deterministic {
        // Check for API key
        if env::var("GROQ_API_KEY").is_err() {
            eprintln!("❌ GROQ_API_KEY environment variable not set");
            eprintln!("   Set it with: export GROQ_API_KEY=your_api_key");
            eprintln!("   Or use --mock or --deterministic");
            return Err("Missing API key".into());
        }
        hybrid = hybrid.with_provider(Arc::new(GroqProvider::from_env(translator.store())?));
    }

    if let Some(text) = matches.get_one::<String>("text") {
        print_answer(&hybrid, text, verbose).await;
        return Ok(());
    }

    // Interactive session until exit/quit or end of input
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    loop {
        stdout.write_all(b"Translate (or 'exit'): ").await?;
        stdout.flush().await?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let text = line.trim();
        if matches!(text.to_lowercase().as_str(), "exit" | "quit") {
            break;
        }
        if text.is_empty() {
            continue;
        }
        print_answer(&hybrid, text, verbose).await;
    }

    Ok(())
}

async fn print_answer(hybrid: &HybridTranslator, text: &str, verbose: bool) {
    let answer = hybrid.translate(text).await;
    println!("→ {}", answer.translated);
    if verbose {
        println!("  [{:?}]", answer.source);
    }
    if !answer.explanation.is_empty() {
        println!("  ({})", answer.explanation);
    }
}
