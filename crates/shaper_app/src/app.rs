use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use shaper_core::{update, AppState, Msg};
use shaper_engine::ServiceSettings;

use crate::effects::EffectRunner;
use crate::render;

/// Messages the shell loop consumes: core workflow messages plus app control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellMsg {
    Core(Msg),
    Quit,
}

pub fn run(settings: ServiceSettings) -> anyhow::Result<()> {
    let (msg_tx, msg_rx) = mpsc::channel::<ShellMsg>();

    let runner =
        EffectRunner::new(settings.clone(), msg_tx.clone()).context("start effect runner")?;
    spawn_input_loop(msg_tx);

    render::banner(&settings);

    let mut state = AppState::new();
    render::render(&state.view());

    while let Ok(msg) = msg_rx.recv() {
        let msg = match msg {
            ShellMsg::Quit => break,
            ShellMsg::Core(msg) => msg,
        };
        let (next, effects) = update(std::mem::take(&mut state), msg);
        state = next;
        runner.run(effects);
        if state.consume_dirty() {
            render::render(&state.view());
        }
    }

    Ok(())
}

fn spawn_input_loop(msg_tx: mpsc::Sender<ShellMsg>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            for msg in messages_for_line(&line) {
                if msg_tx.send(msg).is_err() {
                    return;
                }
            }
        }
        // Treat a closed stdin as a quit request.
        let _ = msg_tx.send(ShellMsg::Quit);
    });
}

/// Maps one input line onto shell messages. Free text submits the URL;
/// colon-prefixed words are commands.
fn messages_for_line(line: &str) -> Vec<ShellMsg> {
    match line.trim() {
        "" => Vec::new(),
        ":quit" | ":q" => vec![ShellMsg::Quit],
        ":copy" | ":c" => vec![ShellMsg::Core(Msg::CopyClicked)],
        ":new" | ":n" => vec![ShellMsg::Core(Msg::ResetClicked)],
        text => vec![
            ShellMsg::Core(Msg::InputChanged(text.to_string())),
            ShellMsg::Core(Msg::SubmitClicked),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_produce_no_messages() {
        assert!(messages_for_line("   ").is_empty());
    }

    #[test]
    fn free_text_edits_then_submits() {
        let msgs = messages_for_line(" https://example.com ");
        assert_eq!(
            msgs,
            vec![
                ShellMsg::Core(Msg::InputChanged("https://example.com".to_string())),
                ShellMsg::Core(Msg::SubmitClicked),
            ]
        );
    }

    #[test]
    fn commands_map_to_workflow_actions() {
        assert_eq!(messages_for_line(":copy"), vec![ShellMsg::Core(Msg::CopyClicked)]);
        assert_eq!(messages_for_line(":new"), vec![ShellMsg::Core(Msg::ResetClicked)]);
        assert_eq!(messages_for_line(":q"), vec![ShellMsg::Quit]);
    }
}
