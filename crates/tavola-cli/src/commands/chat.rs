use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use tavola_application::ChatUseCase;
use tavola_core::chat::{ActionType, ConversationSession};
use tavola_interaction::HttpApiClient;

use super::render::print_message;

const RESET_COMMAND: &str = "/reset";
const QUIT_COMMAND: &str = "/quit";

/// Slash commands that make sense for the typed prefix.
///
/// `/reset` is only offered once the conversation has something to clear.
fn command_candidates(prefix: &str, has_history: bool) -> Vec<&'static str> {
    if !prefix.starts_with('/') || prefix.contains(' ') {
        return Vec::new();
    }
    [RESET_COMMAND, QUIT_COMMAND]
        .into_iter()
        .filter(|cmd| has_history || *cmd != RESET_COMMAND)
        .filter(|cmd| cmd.starts_with(prefix))
        .collect()
}

/// Completes and hints the REPL's slash commands.
struct ChatHelper {
    has_history: Arc<AtomicBool>,
}

impl ChatHelper {
    fn candidates(&self, line: &str, pos: usize) -> Vec<&'static str> {
        command_candidates(&line[..pos], self.has_history.load(Ordering::Relaxed))
    }
}

impl Helper for ChatHelper {}
impl Highlighter for ChatHelper {}
impl Validator for ChatHelper {}

impl Completer for ChatHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let pairs = self
            .candidates(line, pos)
            .into_iter()
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();
        Ok((0, pairs))
    }
}

impl Hinter for ChatHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        // Only hint when the prefix is unambiguous.
        match self.candidates(line, pos).as_slice() {
            [only] if only.len() > pos => Some(only[pos..].to_string()),
            _ => None,
        }
    }
}

fn print_pending_action(session: &ConversationSession) {
    let Some(action) = session.pending_action() else {
        return;
    };
    let hint = match action.action_type {
        ActionType::Search => "Assistant is searching. Refine or ask for more.",
        ActionType::PendingReservation => "Assistant is preparing a reservation. Use `tavola book` to pick a time.",
        ActionType::Unknown => return,
    };
    println!("{}", hint.bright_yellow());
}

/// Runs the chat REPL until `/quit` or EOF.
///
/// Turns run one at a time: the prompt is not shown again until the
/// previous reply (or its failure) has been rendered.
pub async fn run(client: HttpApiClient) -> Result<()> {
    let usecase = ChatUseCase::new(Arc::new(client));
    let mut session = ConversationSession::new();

    let has_history = Arc::new(AtomicBool::new(false));
    let mut rl = Editor::new()?;
    rl.set_helper(Some(ChatHelper {
        has_history: has_history.clone(),
    }));

    println!("{}", "=== Tavola Chat ===".bright_magenta().bold());
    println!(
        "{}",
        format!("Ask for restaurants. '{RESET_COMMAND}' starts over, '{QUIT_COMMAND}' exits.")
            .bright_black()
    );
    println!();

    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);

                match trimmed {
                    QUIT_COMMAND => {
                        println!("{}", "Goodbye!".bright_green());
                        break;
                    }
                    RESET_COMMAND => {
                        session.reset();
                        has_history.store(false, Ordering::Relaxed);
                        println!("{}", "Conversation cleared.".bright_black());
                        continue;
                    }
                    _ => {}
                }

                let before = session.messages().len();
                // Sent as typed; only the blank check above trims.
                session = usecase.send_message(session, &line).await;
                has_history.store(!session.messages().is_empty(), Ordering::Relaxed);
                // The user's own line is already on screen from the prompt.
                for message in session.messages().iter().skip(before + 1) {
                    print_message(message);
                }
                print_pending_action(&session);
                println!();
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", format!("CTRL-C detected. Type '{QUIT_COMMAND}' to exit.").yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {err:?}").red());
                break;
            }
        }
    }

    Ok(())
}
