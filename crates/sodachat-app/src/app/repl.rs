use anyhow::{Context, Result};
use chrono::Utc;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use sodachat_api::{AskClient, HttpAskClient};
use sodachat_core::{prepare_input, ChatController, ConversationPersistence, FileStore, KeyValueStore};

use crate::app::render;
use crate::config::AppConfig;

/// One line of user input, interpreted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Send(String),
    New,
    List,
    Select(String),
    Show,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl ReplCommand {
    pub fn parse(line: &str) -> Self {
        let Some(input) = prepare_input(line) else {
            return ReplCommand::Empty;
        };

        match input {
            "exit" | "quit" | "/exit" | "/quit" => return ReplCommand::Quit,
            _ => {}
        }

        let Some(command) = input.strip_prefix('/') else {
            return ReplCommand::Send(input.to_string());
        };

        let mut parts = command.splitn(2, char::is_whitespace);
        let name = parts.next().unwrap_or_default();
        let arg = parts.next().map(str::trim).unwrap_or_default();

        match (name, arg) {
            ("new", _) => ReplCommand::New,
            ("list", _) => ReplCommand::List,
            ("show", _) => ReplCommand::Show,
            ("help", _) => ReplCommand::Help,
            ("select", target) if !target.is_empty() => ReplCommand::Select(target.to_string()),
            _ => ReplCommand::Unknown(input.to_string()),
        }
    }
}

/// Resolve a `/select` argument: a 1-based sidebar number, otherwise a conversation id
pub fn resolve_selection<C: AskClient, S: KeyValueStore>(
    controller: &ChatController<C, S>,
    target: &str,
) -> String {
    let conversations = controller.store().conversations();
    match target.parse::<usize>() {
        Ok(n) if n >= 1 && n <= conversations.len() => conversations[n - 1].id.clone(),
        _ => target.to_string(),
    }
}

/// Run interactive terminal chat
pub async fn run_repl_mode(config: &AppConfig) -> Result<()> {
    let store = FileStore::new(&config.data_dir)
        .with_context(|| format!("Failed to open data directory {}", config.data_dir.display()))?;
    let client = HttpAskClient::new(&config.api);

    println!("{}", render::render_header());
    println!("{}", format!("Backend: {}", client.endpoint()).bright_black());
    println!("{}", format!("Conversations saved in: {}", store.dir().display()).bright_black());
    println!("{}", "Type '/help' for commands, 'exit' or 'quit' to leave\n".bright_black());

    let mut controller = ChatController::start(client, ConversationPersistence::new(store));

    println!("{}", render::render_sidebar(controller.store(), Utc::now()));
    print_current(&controller);

    let mut rl = DefaultEditor::new().context("Failed to initialize line editor")?;

    loop {
        let readline = rl.readline(&format!("{} ", ">".bright_green().bold()));

        let line = match readline {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("{}", "Goodbye!".bright_cyan());
                break;
            }
            Err(e) => return Err(e).context("Failed to read input"),
        };

        let command = ReplCommand::parse(&line);
        if command != ReplCommand::Empty {
            let _ = rl.add_history_entry(line.as_str());
        }

        match command {
            ReplCommand::Empty => continue,
            ReplCommand::Quit => {
                println!("{}", "Goodbye!".bright_cyan());
                break;
            }
            ReplCommand::Help => println!("{}", render::render_help()),
            ReplCommand::List => println!("{}", render::render_sidebar(controller.store(), Utc::now())),
            ReplCommand::Show => print_current(&controller),
            ReplCommand::New => {
                controller.create_new_conversation();
                println!("{}", "Started a new conversation".green());
                print_current(&controller);
            }
            ReplCommand::Select(target) => {
                let id = resolve_selection(&controller, &target);
                controller.select_conversation(id);
                print_current(&controller);
            }
            ReplCommand::Unknown(input) => {
                println!("{}", format!("Unknown command: {} (try /help)", input).yellow());
            }
            ReplCommand::Send(content) => {
                println!("{}", render::render_loading());
                if controller.send_message(&content).await {
                    if let Some(reply) = controller
                        .store()
                        .current_conversation()
                        .and_then(|conv| conv.last_message())
                    {
                        println!("{}", render::render_message(reply));
                    }
                } else {
                    println!("{}", "No conversation selected. Use /new or /select.".yellow());
                }
            }
        }
    }

    Ok(())
}

fn print_current<C: AskClient, S: KeyValueStore>(controller: &ChatController<C, S>) {
    match controller.store().current_conversation() {
        Some(conv) => {
            println!("{}", format!("── {} ──", conv.title).bold());
            println!("{}\n", render::render_chat_screen(&conv.messages));
        }
        None => println!("{}", "No conversation selected. Use /new or /select.".yellow()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sodachat_api::ApiConfig;
    use sodachat_core::MemoryStore;

    /// Client pointed at the default URL; these tests never send
    fn idle_client() -> HttpAskClient {
        HttpAskClient::new(&ApiConfig::default())
    }

    #[test]
    fn test_parse_plain_text_is_a_send() {
        assert_eq!(
            ReplCommand::parse("  I want to buy a coke  "),
            ReplCommand::Send("I want to buy a coke".to_string())
        );
    }

    #[test]
    fn test_parse_blank_line() {
        assert_eq!(ReplCommand::parse("   "), ReplCommand::Empty);
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(ReplCommand::parse("/new"), ReplCommand::New);
        assert_eq!(ReplCommand::parse("/list"), ReplCommand::List);
        assert_eq!(ReplCommand::parse("/show"), ReplCommand::Show);
        assert_eq!(ReplCommand::parse("/help"), ReplCommand::Help);
        assert_eq!(ReplCommand::parse("quit"), ReplCommand::Quit);
        assert_eq!(ReplCommand::parse("/exit"), ReplCommand::Quit);
        assert_eq!(ReplCommand::parse("/select  2 "), ReplCommand::Select("2".to_string()));
        assert_eq!(ReplCommand::parse("/select"), ReplCommand::Unknown("/select".to_string()));
        assert_eq!(ReplCommand::parse("/dance"), ReplCommand::Unknown("/dance".to_string()));
    }

    #[test]
    fn test_resolve_selection_by_number_or_id() {
        let mut controller = ChatController::start(
            idle_client(),
            ConversationPersistence::new(MemoryStore::new()),
        );
        let older = controller.store().current_id().unwrap().to_string();
        let newer = controller.create_new_conversation();

        assert_eq!(resolve_selection(&controller, "1"), newer);
        assert_eq!(resolve_selection(&controller, "2"), older);
        assert_eq!(resolve_selection(&controller, "3"), "3");
        assert_eq!(resolve_selection(&controller, &older), older);
    }
}
