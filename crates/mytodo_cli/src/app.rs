//! Terminal event loop for the to-do screen.
//!
//! # Responsibility
//! - Read one command per line, dispatch it as a screen intent, re-render.
//!
//! # Invariants
//! - Command errors are printed and never end the loop.
//! - The screen is redrawn after every state-changing command.

use crate::command::{parse_line, Command, CommandError, DeleteTarget, HELP_TEXT};
use crate::render::render_screen;
use log::info;
use mytodo_core::{IdGenerator, Intent, IntentOutcome, TodoScreen};
use std::io::{self, BufRead, Write};

/// Runs the loop until `quit` or end of input.
pub fn run<G, R, W, E>(
    screen: &mut TodoScreen<G>,
    input: R,
    out: &mut W,
    err: &mut E,
) -> io::Result<()>
where
    G: IdGenerator,
    R: BufRead,
    W: Write,
    E: Write,
{
    write!(out, "{}", render_screen(&screen.view()))?;

    for line in input.lines() {
        let command = match parse_line(&line?) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(error) => {
                writeln!(err, "{error}")?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => writeln!(out, "{HELP_TEXT}")?,
            Command::List => write!(out, "{}", render_screen(&screen.view()))?,
            Command::Json => {
                serde_json::to_writer_pretty(&mut *out, screen.list())?;
                writeln!(out)?;
            }
            Command::Draft(text) => {
                screen.dispatch(Intent::EditDraft(text));
                write!(out, "{}", render_screen(&screen.view()))?;
            }
            Command::Add(text) => {
                if let Some(text) = text {
                    screen.dispatch(Intent::EditDraft(text));
                }
                screen.dispatch(Intent::PressAdd);
                write!(out, "{}", render_screen(&screen.view()))?;
            }
            Command::Delete(target) => match resolve_target(screen, target) {
                Ok(id) => {
                    if let IntentOutcome::RemoveIgnored(id) =
                        screen.dispatch(Intent::PressDelete(id))
                    {
                        writeln!(err, "no item with id {id}")?;
                    }
                    write!(out, "{}", render_screen(&screen.view()))?;
                }
                Err(error) => writeln!(err, "{error}")?,
            },
        }
        out.flush()?;
    }

    info!(
        "event=cli_exit module=cli status=ok items={}",
        screen.list().len()
    );
    Ok(())
}

fn resolve_target<G: IdGenerator>(
    screen: &TodoScreen<G>,
    target: DeleteTarget,
) -> Result<mytodo_core::TodoId, CommandError> {
    match target {
        DeleteTarget::Id(id) => Ok(id),
        DeleteTarget::Row(row) => screen
            .list()
            .items()
            .get(row - 1)
            .map(|item| item.id())
            .ok_or_else(|| CommandError::BadRow(row.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::run;
    use mytodo_core::{SequentialIdGenerator, TodoList, TodoScreen};

    fn run_script(script: &str) -> (TodoScreen<SequentialIdGenerator>, String, String) {
        let mut screen =
            TodoScreen::with_list(TodoList::with_id_generator(SequentialIdGenerator::new()));
        let mut out = Vec::new();
        let mut err = Vec::new();
        run(&mut screen, script.as_bytes(), &mut out, &mut err).expect("in-memory io");
        (
            screen,
            String::from_utf8(out).expect("utf-8 stdout"),
            String::from_utf8(err).expect("utf-8 stderr"),
        )
    }

    #[test]
    fn scenario_script_ends_with_walk_dog() {
        let (screen, out, err) = run_script("add Buy milk\nadd   \nadd Walk dog\ndel 1\n");
        let values: Vec<_> = screen.list().iter().map(|item| item.value()).collect();
        assert_eq!(values, ["Walk dog"]);
        assert!(err.is_empty(), "unexpected stderr: {err}");
        assert!(out.ends_with("  1. Walk dog  [Delete]\n"));
    }

    #[test]
    fn draft_then_add_clears_input() {
        let (screen, out, _) = run_script("draft  Buy milk\nadd\n");
        assert_eq!(screen.draft(), "");
        assert_eq!(screen.list().items()[0].value(), "Buy milk");
        assert!(out.contains("[  Buy milk ] [Add]"));
    }

    #[test]
    fn bad_commands_report_and_keep_going() {
        let (screen, _, err) = run_script("frobnicate\ndel 3\nadd still works\n");
        assert!(err.contains("unknown command `frobnicate`"));
        assert!(err.contains("no row `3`"));
        assert_eq!(screen.list().len(), 1);
    }

    #[test]
    fn quit_stops_reading() {
        let (screen, _, _) = run_script("add one\nquit\nadd two\n");
        assert_eq!(screen.list().len(), 1);
    }

    #[test]
    fn json_prints_items() {
        let (_, out, _) = run_script("add Buy milk\njson\n");
        assert!(out.contains("\"value\": \"Buy milk\""));
        assert!(out.contains("\"id\": \"00000000-0000-0000-0000-000000000001\""));
    }
}
