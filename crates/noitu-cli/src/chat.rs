//! Chat-style message routing: commands, gameplay lines, and replies.
//!
//! This is the layer a chat bot would sit on. It decides whether a line is
//! a command or a move, keeps multi-word chatter away from the engine, and
//! turns [`MoveOutcome`]s into text.

use noitu_core::{LocationId, MoveOutcome, SpaceId, TurnEngine};

/// Prefix used when the configured one is blank.
pub const DEFAULT_PREFIX: &str = "!";

/// One incoming chat message.
#[derive(Debug, Clone)]
pub struct ChatMessage<'a> {
    pub space: &'a SpaceId,
    pub location: &'a LocationId,
    pub from_bot: bool,
    pub text: &'a str,
}

/// A prefixed command.
#[derive(Debug, Clone, PartialEq)]
enum ChatCommand {
    Help,
    SetChannel,
    Start { seed: Option<String> },
    End,
    Status,
    Unknown,
}

/// Parse `text` as a command. `None` if it does not carry the prefix.
fn parse_command(prefix: &str, text: &str) -> Option<ChatCommand> {
    let body = text.strip_prefix(prefix)?.trim();
    let mut words = body.split_whitespace();
    let cmd = words.next().unwrap_or("").to_lowercase();
    let rest: Vec<&str> = words.collect();

    Some(match cmd.as_str() {
        "help" => ChatCommand::Help,
        "setchannel" => ChatCommand::SetChannel,
        "start" => ChatCommand::Start {
            seed: (!rest.is_empty()).then(|| rest.join(" ")),
        },
        "end" => ChatCommand::End,
        "status" => ChatCommand::Status,
        _ => ChatCommand::Unknown,
    })
}

/// Routes chat messages to the turn engine and renders replies.
#[derive(Debug)]
pub struct ChatRouter {
    engine: TurnEngine,
    prefix: String,
}

impl ChatRouter {
    pub fn new(engine: TurnEngine, prefix: &str) -> Self {
        let prefix = match prefix.trim() {
            "" => DEFAULT_PREFIX.to_string(),
            p => p.to_string(),
        };
        Self { engine, prefix }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[cfg(test)]
    pub fn engine(&self) -> &TurnEngine {
        &self.engine
    }

    /// Handle one message. Returns the reply, if any.
    pub fn handle(&mut self, msg: &ChatMessage<'_>) -> Option<String> {
        if msg.from_bot {
            return None;
        }

        self.engine.ensure(msg.space);

        if let Some(command) = parse_command(&self.prefix, msg.text) {
            return self.run_command(command, msg);
        }

        let text = msg.text.trim();
        if text.is_empty() || text.split_whitespace().nth(1).is_some() {
            return None;
        }

        let outcome = self.engine.submit(msg.space, msg.location, text)?;
        Some(render_outcome(&outcome))
    }

    fn run_command(&mut self, command: ChatCommand, msg: &ChatMessage<'_>) -> Option<String> {
        match command {
            ChatCommand::Help => Some(self.help()),
            ChatCommand::SetChannel => {
                self.engine.bind(msg.space, msg.location.clone());
                Some(format!("{} is now the word-chain channel.", msg.location))
            }
            ChatCommand::Start { seed } => {
                let start = self.engine.start(msg.space, msg.location, seed.as_deref());
                let letter = start.required_letter.to_ascii_uppercase();
                Some(match (seed, start.seed) {
                    (Some(raw), Some(_)) => format!(
                        "Game started! First word: {raw}. Your word must start with {letter}."
                    ),
                    _ => format!("Game started! Required letter: {letter}. You go first."),
                })
            }
            ChatCommand::End => {
                self.engine.end(msg.space);
                Some(format!("Game over. Type {}start to play again.", self.prefix))
            }
            ChatCommand::Status => Some(self.status(msg.space)),
            ChatCommand::Unknown => None,
        }
    }

    fn help(&self) -> String {
        let p = &self.prefix;
        format!(
            "\
How to play:
  {p}setchannel     use this channel as the playground
  {p}start [word]   start a game (optional first word)
  {p}end            end the game
  {p}status         show the current game
  Type a single word to play. I answer with a word starting with your last letter."
        )
    }

    fn status(&self, space: &SpaceId) -> String {
        let Some(session) = self.engine.session(space) else {
            return "No game running.".to_string();
        };
        let channel = session
            .bound_location()
            .map(|l| l.to_string())
            .unwrap_or_else(|| "no channel".to_string());
        match session.required_letter() {
            Some(letter) => format!(
                "Game running in {channel}. Next letter: {}. Words used: {}.",
                letter.to_ascii_uppercase(),
                session.used_words().len()
            ),
            None => format!("No game running ({channel})."),
        }
    }
}

/// Render a move outcome as a chat reply.
pub fn render_outcome(outcome: &MoveOutcome) -> String {
    match outcome {
        MoveOutcome::Accepted { reply, next_letter } => format!(
            "{reply}\nNext letter: {}",
            next_letter.to_ascii_uppercase()
        ),
        MoveOutcome::NotInDictionary => "That word is not in the dictionary.".to_string(),
        MoveOutcome::AlreadyUsed => "That word has already been used.".to_string(),
        MoveOutcome::WrongStartLetter { expected } => format!(
            "Wrong letter! The word must start with {}.",
            expected.to_ascii_uppercase()
        ),
        MoveOutcome::PlayerWins { stuck_letter } => format!(
            "You win! I have no words starting with {}.",
            stuck_letter.to_ascii_uppercase()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noitu_core::{Dictionary, EngineConfig};

    fn router() -> ChatRouter {
        let engine = TurnEngine::new(
            Dictionary::load(["anh", "ha", "an", "nam", "hoa"]),
            EngineConfig::default().with_seed(5),
        );
        ChatRouter::new(engine, "!")
    }

    struct Chat {
        router: ChatRouter,
        space: SpaceId,
    }

    impl Chat {
        fn new() -> Self {
            Self {
                router: router(),
                space: SpaceId::from("guild"),
            }
        }

        fn say(&mut self, channel: &str, text: &str) -> Option<String> {
            let location = LocationId::from(channel);
            self.router.handle(&ChatMessage {
                space: &self.space,
                location: &location,
                from_bot: false,
                text,
            })
        }
    }

    #[test]
    fn parse_commands() {
        assert_eq!(parse_command("!", "!help"), Some(ChatCommand::Help));
        assert_eq!(parse_command("!", "! HELP "), Some(ChatCommand::Help));
        assert_eq!(
            parse_command("!", "!start Hà Nội"),
            Some(ChatCommand::Start {
                seed: Some("Hà Nội".to_string())
            })
        );
        assert_eq!(
            parse_command("!", "!start"),
            Some(ChatCommand::Start { seed: None })
        );
        assert_eq!(parse_command("!", "!dance"), Some(ChatCommand::Unknown));
        assert_eq!(parse_command("!", "hello"), None);
        assert_eq!(parse_command("nt>", "nt>end"), Some(ChatCommand::End));
    }

    #[test]
    fn blank_prefix_uses_default() {
        let engine = TurnEngine::new(Dictionary::fallback(), EngineConfig::default().with_seed(1));
        assert_eq!(ChatRouter::new(engine, "  ").prefix(), "!");
    }

    #[test]
    fn full_round() {
        let mut chat = Chat::new();
        let reply = chat.say("game", "!start anh").unwrap();
        assert!(reply.contains("First word: anh"));
        assert!(reply.contains("must start with H"));

        assert_eq!(chat.say("game", "ha").unwrap(), "an\nNext letter: N");
        assert_eq!(
            chat.say("game", "ha").unwrap(),
            "That word has already been used."
        );
        assert_eq!(
            chat.say("game", "xyz").unwrap(),
            "That word is not in the dictionary."
        );
        assert_eq!(
            chat.say("game", "hoa").unwrap(),
            "Wrong letter! The word must start with N."
        );
        assert_eq!(
            chat.say("game", "nam").unwrap(),
            "You win! I have no words starting with M."
        );
        // game over: moves are ignored
        assert_eq!(chat.say("game", "hoa"), None);
    }

    #[test]
    fn start_binds_the_channel() {
        let mut chat = Chat::new();
        chat.say("lobby", "!start anh");
        assert_eq!(chat.say("general", "ha"), None);
        assert!(chat.say("lobby", "ha").is_some());
    }

    #[test]
    fn setchannel_moves_play() {
        let mut chat = Chat::new();
        chat.say("lobby", "!start anh");
        let reply = chat.say("game", "!setchannel").unwrap();
        assert_eq!(reply, "#game is now the word-chain channel.");
        assert_eq!(chat.say("lobby", "ha"), None);
        assert!(chat.say("game", "ha").is_some());
    }

    #[test]
    fn commands_work_from_any_channel() {
        let mut chat = Chat::new();
        chat.say("game", "!start anh");
        assert!(chat.say("elsewhere", "!end").unwrap().contains("Game over"));
        assert!(!chat.router.engine().session(&chat.space).unwrap().is_active());
    }

    #[test]
    fn start_without_seed() {
        let mut chat = Chat::new();
        let reply = chat.say("game", "!start").unwrap();
        assert!(reply.starts_with("Game started! Required letter: "));
        assert!(reply.ends_with("You go first."));
    }

    #[test]
    fn unusable_seed_falls_back_to_random_letter() {
        let mut chat = Chat::new();
        let reply = chat.say("game", "!start ???").unwrap();
        assert!(reply.contains("Required letter"));
    }

    #[test]
    fn multi_word_and_empty_lines_are_ignored() {
        let mut chat = Chat::new();
        chat.say("game", "!start anh");
        assert_eq!(chat.say("game", "ha ha"), None);
        assert_eq!(chat.say("game", "   "), None);
        let used = chat
            .router
            .engine()
            .session(&chat.space)
            .unwrap()
            .used_words()
            .len();
        assert_eq!(used, 1);
    }

    #[test]
    fn bot_messages_are_ignored() {
        let mut chat = Chat::new();
        let location = LocationId::from("game");
        let reply = chat.router.handle(&ChatMessage {
            space: &chat.space,
            location: &location,
            from_bot: true,
            text: "!help",
        });
        assert!(reply.is_none());
    }

    #[test]
    fn unknown_commands_are_silent() {
        let mut chat = Chat::new();
        assert_eq!(chat.say("game", "!dance"), None);
    }

    #[test]
    fn help_mentions_prefix() {
        let mut chat = Chat::new();
        let help = chat.say("game", "!help").unwrap();
        assert!(help.contains("!setchannel"));
        assert!(help.contains("!start [word]"));
    }

    #[test]
    fn status_reports_game() {
        let mut chat = Chat::new();
        assert_eq!(
            chat.say("game", "!status").unwrap(),
            "No game running (no channel)."
        );
        chat.say("game", "!start anh");
        assert_eq!(
            chat.say("game", "!status").unwrap(),
            "Game running in #game. Next letter: H. Words used: 1."
        );
    }

    #[test]
    fn render_every_outcome() {
        assert_eq!(
            render_outcome(&MoveOutcome::WrongStartLetter { expected: 'h' }),
            "Wrong letter! The word must start with H."
        );
        assert_eq!(
            render_outcome(&MoveOutcome::PlayerWins { stuck_letter: 'o' }),
            "You win! I have no words starting with O."
        );
    }
}
