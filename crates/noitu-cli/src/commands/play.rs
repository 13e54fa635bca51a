use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use noitu_core::{EngineConfig, LocationId, SpaceId, TurnEngine};

use crate::chat::{ChatMessage, ChatRouter};

/// A console instruction handled before chat routing.
#[derive(Debug, PartialEq)]
enum Console<'a> {
    Quit,
    Join(Option<&'a str>),
}

fn parse_console(input: &str) -> Option<Console<'_>> {
    let (head, rest) = input.split_once(char::is_whitespace).unwrap_or((input, ""));
    match head {
        ":quit" | ":q" => Some(Console::Quit),
        ":join" => Some(Console::Join(Some(rest.trim()).filter(|n| !n.is_empty()))),
        _ => None,
    }
}

pub fn run(
    dict_path: &Path,
    prefix: &str,
    seed: Option<u64>,
    space: &str,
    channel: &str,
) -> Result<(), String> {
    let dict = super::load_dictionary(dict_path);
    let words = dict.len();

    let mut config = EngineConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    let mut router = ChatRouter::new(TurnEngine::new(dict, config), prefix);

    let space = SpaceId::from(space);
    let mut location = LocationId::from(channel);

    println!("  {} Noitu word chain", "Starting".bold());
    println!("  Dictionary: {words} words | Space: {space}");
    println!(
        "  Type '{p}help' for commands, ':join <channel>' to switch channel, ':quit' to exit.\n",
        p = router.prefix()
    );

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("{location}> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim_end_matches(['\r', '\n']);
        match parse_console(input.trim()) {
            Some(Console::Quit) => break,
            Some(Console::Join(Some(name))) => {
                location = LocationId::from(name);
                continue;
            }
            Some(Console::Join(None)) => {
                println!("{}\n", "usage: :join <channel>".yellow());
                continue;
            }
            None => {}
        }

        let reply = router.handle(&ChatMessage {
            space: &space,
            location: &location,
            from_bot: false,
            text: input,
        });
        if let Some(reply) = reply {
            println!("{} {reply}\n", "bot:".bold());
        }
    }

    Ok(())
}
