mod definitions;
mod mediawiki_api;
mod reqwest_client;
mod topics;
mod wikitext;

use dotenv::dotenv;
use itertools::Itertools;
use lazy_regex::regex_replace_all;

use crate::{
    reqwest_client::WikiClient,
    topics::Topic,
    wikitext::{ParsedDocument, RunKind, TextRun},
};

const USAGE: &str = "usage: wiki_reader [--json] <title>...
       wiki_reader search <query>
       wiki_reader topic [id]";

/// Terminal styling per run kind. Plain goes through untouched, links get an
/// underline since there is nowhere to click.
fn render_run(run: &TextRun) -> String {
    match run.kind {
        RunKind::Plain => run.content.clone(),
        RunKind::Bold => format!("\x1b[1m{}\x1b[0m", run.content),
        RunKind::Italic => format!("\x1b[3m{}\x1b[0m", run.content),
        RunKind::Link => format!("\x1b[4m{}\x1b[0m", run.content),
    }
}

fn render_document(title: &str, doc: &ParsedDocument) {
    println!("== {} ==", title.replace('_', " "));
    if !doc.description.is_empty() {
        println!("{}", doc.description);
    }

    if !doc.infobox.is_empty() {
        println!();
        let width = doc
            .infobox
            .keys()
            .map(|key| key.chars().count())
            .max()
            .unwrap_or(0);
        for (key, value) in doc.infobox.iter().sorted() {
            println!("  {:width$}  {}", key, value, width = width);
        }
    }

    for paragraph in &doc.paragraphs {
        println!();
        println!("{}", paragraph.runs.iter().map(render_run).join(""));
    }
}

fn render_topic(topic: &Topic) {
    println!("== {} ==", topic.name);
    if let Some(picture) = topic.picture() {
        println!("({})", picture);
    }
    println!("{}", topic.description);
    for (heading, entries) in [
        ("Facts", &topic.facts),
        ("Social", &topic.social_media),
        ("Links", &topic.links),
    ] {
        if entries.is_empty() {
            continue;
        }
        println!("\n{}:", heading);
        for (key, value) in entries {
            println!("  {}: {}", key, value);
        }
    }
}

async fn show_articles(client: &WikiClient, titles: &[String], json: bool) {
    for title in titles {
        match mediawiki_api::resolve_article(client.clone(), title.clone(), true).await {
            Ok(article) => {
                let name = article.title().unwrap_or(title).to_owned();
                let doc = article.into_parsed();
                if json {
                    match serde_json::to_string_pretty(&doc) {
                        Ok(body) => println!("{}", body),
                        Err(e) => log::error!("Failed to serialize {:?}: {:?}", name, e),
                    }
                } else {
                    render_document(&name, &doc);
                }
            }
            Err(e) => {
                log::error!("Failed to load {:?}: {:?}", title, e);
                println!("Failed to load content for {}", title);
            }
        }
    }
}

async fn show_search(client: &WikiClient, query: &str) {
    match mediawiki_api::search(client, query, 10).await {
        Ok(hits) if hits.is_empty() => println!("No results for {:?}", query),
        Ok(hits) => {
            for hit in hits {
                match hit.snippet {
                    // snippets come back with highlight markup baked in
                    Some(snippet) => println!(
                        "{} - {}",
                        hit.title,
                        regex_replace_all!(r"<.*?>", &snippet, "")
                    ),
                    None => println!("{}", hit.title),
                }
            }
        }
        Err(e) => log::error!("Search failed: {:?}", e),
    }
}

#[tokio::main]
async fn main() {
    env_logger::init();
    dotenv().ok();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let json = match args.iter().position(|arg| arg == "--json") {
        Some(pos) => {
            args.remove(pos);
            true
        }
        None => false,
    };

    if args.is_empty() {
        eprintln!("{}", USAGE);
        return;
    }

    match args[0].as_str() {
        "topic" if args.len() == 1 => {
            for topic in topics::all_topics() {
                println!("{}: {}", topic.id, topic.name);
            }
        }
        "topic" if args.len() == 2 => match topics::get_topic(&args[1]) {
            Some(topic) => render_topic(topic),
            None => println!("Topic not found"),
        },
        "search" if args.len() >= 2 => {
            let client = WikiClient::new(None, None);
            show_search(&client, &args[1..].join(" ")).await;
        }
        _ => {
            let client = WikiClient::new(None, None);
            show_articles(&client, &args, json).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_runs_render_untouched() {
        assert_eq!(render_run(&TextRun::plain("hello")), "hello");
    }

    #[test]
    fn styled_runs_are_wrapped_in_escapes() {
        assert_eq!(render_run(&TextRun::bold("b")), "\x1b[1mb\x1b[0m");
        assert_eq!(render_run(&TextRun::italic("i")), "\x1b[3mi\x1b[0m");
        assert_eq!(render_run(&TextRun::link("l")), "\x1b[4ml\x1b[0m");
    }
}
