use super::HandlerContext;
use crate::presentation::presenters::{
    present_collection_page, present_delete_result, present_edit_handoff, present_recipe_in,
};
use crate::presentation::view_models::CommandResultViewModel;
use anyhow::Result;
use cocina_engine::BrowseSession;
use cocina_runtime::Cocina;
use cocina_store::{ModeStore, RecordStore};
use cocina_types::{PresentationMode, SortDirection, ViewField};
use is_terminal::IsTerminal;
use std::io::{BufRead, Write};
use tracing::debug;

const HELP: &str = "\
Commands:
  sort <column> [asc|desc]   sort by id, dateAdded, name, source or tags (repeat to flip)
  filter <column> [text]     filter a column; no text clears it
  filter clear               clear every filter
  next | prev | page <n>     move between pages
  size <n>                   rows per page
  mode card|table            switch presentation
  show <n>                   show recipe #n
  edit <n>                   open recipe #n for editing
  delete <n>                 delete recipe #n
  help                       this text
  quit                       leave
";

/// One line of browse input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Sort(ViewField, Option<SortDirection>),
    Filter(ViewField, String),
    ClearFilters,
    Next,
    Prev,
    Page(usize),
    Size(usize),
    Mode(PresentationMode),
    Show(usize),
    Edit(usize),
    Delete(usize),
    Help,
    Quit,
}

impl BrowseCommand {
    /// Parse a line. `Ok(None)` for blank input.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        let Some((word, rest)) = split_word(line) else {
            return Ok(None);
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "sort" => {
                let (column, rest) = split_word(rest).ok_or("usage: sort <column> [asc|desc]")?;
                let column = parse_column(column)?;
                let direction = match split_word(rest) {
                    Some((dir, _)) => Some(dir.parse::<SortDirection>().map_err(|e| e.to_string())?),
                    None => None,
                };
                BrowseCommand::Sort(column, direction)
            }
            "filter" => {
                let (column, rest) = split_word(rest).ok_or("usage: filter <column> [text]")?;
                if column.eq_ignore_ascii_case("clear") {
                    BrowseCommand::ClearFilters
                } else {
                    BrowseCommand::Filter(parse_column(column)?, rest.trim().to_string())
                }
            }
            "next" | "n" => BrowseCommand::Next,
            "prev" | "p" => BrowseCommand::Prev,
            "page" => BrowseCommand::Page(parse_number(rest, "page <n>")?),
            "size" => BrowseCommand::Size(parse_number(rest, "size <n>")?),
            "mode" => {
                let mode = rest.trim().parse::<PresentationMode>().map_err(|e| e.to_string())?;
                BrowseCommand::Mode(mode)
            }
            "show" => BrowseCommand::Show(parse_number(rest, "show <n>")?),
            "edit" => BrowseCommand::Edit(parse_number(rest, "edit <n>")?),
            "delete" | "rm" => BrowseCommand::Delete(parse_number(rest, "delete <n>")?),
            "help" | "?" => BrowseCommand::Help,
            "quit" | "exit" | "q" => BrowseCommand::Quit,
            other => return Err(format!("unknown command '{}' (try 'help')", other)),
        };
        Ok(Some(command))
    }
}

fn split_word(text: &str) -> Option<(&str, &str)> {
    let text = text.trim_start();
    if text.is_empty() {
        return None;
    }
    Some(match text.find(char::is_whitespace) {
        Some(end) => (&text[..end], &text[end..]),
        None => (text, ""),
    })
}

fn parse_column(text: &str) -> Result<ViewField, String> {
    text.parse::<ViewField>().map_err(|e| e.to_string())
}

fn parse_number(text: &str, usage: &str) -> Result<usize, String> {
    text.trim()
        .trim_start_matches('#')
        .parse::<usize>()
        .map_err(|_| format!("usage: {}", usage))
}

pub fn handle<R: BufRead>(
    ctx: &HandlerContext,
    session_id: Option<String>,
    page_size: Option<usize>,
    input: R,
) -> Result<()> {
    // Only a named session can be resumed; a generated one is cleared on exit.
    let ephemeral = session_id.is_none();
    let session_id = session_id.unwrap_or_else(Cocina::new_session_id);
    let mut state = ctx.workspace.initial_state();
    if let Some(page_size) = page_size {
        state = state.with_page_size(page_size);
    }

    let mut session = ctx.workspace.browse(ctx.user.clone(), &session_id, state)?;
    debug!(session = %session_id, user = %ctx.user, "browse session opened");
    render_page(ctx, &session)?;

    let interactive = std::io::stdin().is_terminal() && !ctx.is_json();
    let mut lines = input.lines();
    loop {
        if interactive {
            print!("cocina> ");
            std::io::stdout().flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };

        let command = match BrowseCommand::parse(&line?) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                ctx.warn(&message);
                continue;
            }
        };

        if command == BrowseCommand::Quit {
            break;
        }
        execute(ctx, &mut session, command)?;
    }

    if ephemeral {
        ctx.workspace.end_session(&session_id)?;
    }
    Ok(())
}

fn execute<S: RecordStore + ModeStore>(
    ctx: &HandlerContext,
    session: &mut BrowseSession<S>,
    command: BrowseCommand,
) -> Result<()> {
    match command {
        BrowseCommand::Sort(column, Some(direction)) => {
            session.sort_with(column, direction);
        }
        BrowseCommand::Sort(column, None) => {
            session.sort_by(column);
        }
        BrowseCommand::Filter(column, query) => {
            session.set_filter(column, &query);
        }
        BrowseCommand::ClearFilters => {
            session.clear_filters();
        }
        BrowseCommand::Next => {
            session.next_page();
        }
        BrowseCommand::Prev => {
            session.prev_page();
        }
        BrowseCommand::Page(page) => {
            session.goto_page(page);
        }
        BrowseCommand::Size(size) => {
            session.set_page_size(size);
        }
        BrowseCommand::Mode(mode) => {
            session.set_mode(mode)?;
        }
        BrowseCommand::Show(display_id) => {
            let Some(storage_id) = session.resolve_display_id(display_id) else {
                ctx.warn(&format!("no recipe #{}", display_id));
                return Ok(());
            };
            if let Some(view) = present_recipe_in(session.records(), &storage_id) {
                ctx.render(CommandResultViewModel::new(view))?;
            }
            return Ok(());
        }
        BrowseCommand::Edit(display_id) => {
            let Some(storage_id) = session.resolve_display_id(display_id) else {
                ctx.warn(&format!("no recipe #{}", display_id));
                return Ok(());
            };
            if let Some(request) = session.edit(&storage_id)? {
                ctx.render(present_edit_handoff(&request, display_id))?;
            }
            return Ok(());
        }
        BrowseCommand::Delete(display_id) => {
            let Some(storage_id) = session.resolve_display_id(display_id) else {
                ctx.warn(&format!("no recipe #{}", display_id));
                return Ok(());
            };
            let outcome = session.delete(&storage_id)?;
            ctx.render(present_delete_result(&storage_id, &outcome))?;
        }
        BrowseCommand::Help => {
            print!("{}", HELP);
            return Ok(());
        }
        BrowseCommand::Quit => return Ok(()),
    }

    render_page(ctx, session)
}

fn render_page<S: RecordStore + ModeStore>(ctx: &HandlerContext, session: &BrowseSession<S>) -> Result<()> {
    ctx.render(present_collection_page(
        session.model(),
        session.user(),
        Some(session.session_id()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sort_with_and_without_direction() {
        assert_eq!(
            BrowseCommand::parse("sort name desc"),
            Ok(Some(BrowseCommand::Sort(ViewField::Name, Some(SortDirection::Desc))))
        );
        assert_eq!(
            BrowseCommand::parse("  sort date-added "),
            Ok(Some(BrowseCommand::Sort(ViewField::DateAdded, None)))
        );
    }

    #[test]
    fn test_parse_filter_keeps_spaces_in_query() {
        assert_eq!(
            BrowseCommand::parse("filter tags quick dinner"),
            Ok(Some(BrowseCommand::Filter(ViewField::Tags, "quick dinner".to_string())))
        );
        assert_eq!(
            BrowseCommand::parse("filter name"),
            Ok(Some(BrowseCommand::Filter(ViewField::Name, String::new())))
        );
        assert_eq!(BrowseCommand::parse("filter clear"), Ok(Some(BrowseCommand::ClearFilters)));
    }

    #[test]
    fn test_parse_numbers_and_blank_lines() {
        assert_eq!(BrowseCommand::parse("delete #3"), Ok(Some(BrowseCommand::Delete(3))));
        assert_eq!(BrowseCommand::parse("page 2"), Ok(Some(BrowseCommand::Page(2))));
        assert_eq!(BrowseCommand::parse("   "), Ok(None));
        assert!(BrowseCommand::parse("page two").is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_input() {
        assert!(BrowseCommand::parse("sort calories").is_err());
        assert!(BrowseCommand::parse("mode grid").is_err());
        assert!(BrowseCommand::parse("launch").is_err());
    }
}
