// Interactive console for the corpus search service.
//
// Plain lines are search queries; colon-prefixed lines are commands. The
// submit path goes through the interaction controller, so the one-request-
// in-flight rule holds here the same way it does in tests.

use anyhow::Result;
use clap::Parser;
use std::io::Write as _;
use tokio::io::{AsyncBufReadExt, BufReader};

use corposeek::{ClientConfig, SearchClient, SearchController, render_to_string};

#[derive(Parser)]
#[command(name = "corposeek", about = "Search a document corpus from the terminal")]
struct Args {
    /// Start with soundex phonetic matching enabled
    #[arg(long)]
    soundex: bool,

    /// Start with spell correction enabled
    #[arg(long)]
    spell_correction: bool,
}

const HELP: &str = "\
type a query to search, or:
  :soundex   toggle soundex matching
  :spell     toggle spell correction
  :corpus    list corpus documents
  :open <name>  print one document
  :rebuild   rebuild the service index
  :help      show this message
  :quit      exit";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = ClientConfig::builder().build()?;
    let client = SearchClient::new(&config)?;
    let mut controller = SearchController::with_top_k(config.default_top_k());
    if args.soundex {
        controller.toggle_soundex();
    }
    if args.spell_correction {
        controller.toggle_spell_correction();
    }

    println!("corposeek (service: {})", config.base_url());
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt()?;
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        match line {
            "" => {}
            ":quit" | ":q" => break,
            ":help" => println!("{HELP}"),
            ":soundex" => {
                controller.toggle_soundex();
                print!("{}", render_to_string(controller.state()));
            }
            ":spell" => {
                controller.toggle_spell_correction();
                print!("{}", render_to_string(controller.state()));
            }
            ":corpus" => match client.list_corpus_files().await {
                Ok(files) => {
                    for file in &files {
                        println!("{file}");
                    }
                    println!("{} documents", files.len());
                }
                Err(e) => eprintln!("error: {e}"),
            },
            ":rebuild" => match client.rebuild_index().await {
                Ok(message) => println!("{message}"),
                Err(e) => eprintln!("error: {e}"),
            },
            _ if line.starts_with(":open ") => {
                let name = line[":open ".len()..].trim();
                match client.get_document_content(name).await {
                    Ok(content) => println!("{content}"),
                    Err(e) => eprintln!("error: {e}"),
                }
            }
            _ if line.starts_with(':') => {
                eprintln!("unknown command: {line}");
                println!("{HELP}");
            }
            query => {
                controller.set_query(query);
                controller.run_submit(&client).await;
                print!("{}", render_to_string(controller.state()));
            }
        }
        prompt()?;
    }

    Ok(())
}

fn prompt() -> Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "> ")?;
    stdout.flush()?;
    Ok(())
}
