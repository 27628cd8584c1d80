use crate::error::{AdvisorError, Result};
use crate::logic::{respond, AdvisoryService, QuickQuestion};
use crate::models::SessionState;
use dialoguer::Input;

/// Result of reading one chat line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    Ask(String),
    Quit,
}

/// Interpret a chat line. Quick-question ids (`why-crop`, `weather-risk`,
/// `next-step`) and their 1-3 shortcuts expand to the canned questions.
pub fn parse_chat_line(line: &str, state: &SessionState) -> ChatCommand {
    let line = line.trim();
    match line.to_lowercase().as_str() {
        "" | "quit" | "exit" | "q" => return ChatCommand::Quit,
        _ => {}
    }

    let quick = match line {
        "1" => Some(QuickQuestion::WhyCrop),
        "2" => Some(QuickQuestion::WeatherRisk),
        "3" => Some(QuickQuestion::NextStep),
        other => QuickQuestion::from_id(other),
    };

    match quick {
        Some(q) => ChatCommand::Ask(q.message(state)),
        None => ChatCommand::Ask(line.to_string()),
    }
}

/// Interactive assistant loop over the service's current session.
pub async fn run_chat(service: &AdvisoryService) -> Result<()> {
    println!();
    println!("Farm Assistant (empty line or 'quit' to leave)");
    println!("Quick questions: [1] why this crop  [2] weather risks  [3] next step");

    loop {
        let line: String = Input::new()
            .with_prompt("You")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| AdvisorError::InvalidInput(format!("Input error: {}", e)))?;

        let state = service.current().await;
        match parse_chat_line(&line, &state) {
            ChatCommand::Quit => break,
            ChatCommand::Ask(message) => {
                tracing::debug!("Assistant question: {}", message);
                if message != line.trim() {
                    println!("You: {}", message);
                }
                println!("Assistant: {}", respond(&message, &state));
            }
        }
    }

    Ok(())
}
