use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::traits::Renderer;
use crate::presentation::view_models::{CommandResultViewModel, CreateView, ViewOptions};

const DEFAULT_WIDTH: usize = 100;

pub struct ConsoleRenderer {
    json_mode: bool,
    options: ViewOptions,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool) -> Self {
        Self::with_options(json_mode, detect_options())
    }

    pub fn with_options(json_mode: bool, options: ViewOptions) -> Self {
        Self { json_mode, options }
    }

    pub fn options(&self) -> ViewOptions {
        self.options
    }

    pub fn is_json(&self) -> bool {
        self.json_mode
    }
}

fn detect_options() -> ViewOptions {
    let is_tty = std::io::stdout().is_terminal();
    let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    let width = terminal_size::terminal_size()
        .map(|(terminal_size::Width(w), _)| w as usize)
        .filter(|w| *w > 0)
        .unwrap_or(DEFAULT_WIDTH);

    ViewOptions {
        color: is_tty && !no_color,
        width,
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        if self.json_mode {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        if let Some(badge) = &result.badge {
            if self.options.color {
                println!("{} {}", badge.icon(), badge.label.bold());
            } else {
                println!("{} {}", badge.icon(), badge.label);
            }
            println!();
        }

        print!("{}", result.content.create_view(self.options));

        if !result.suggestions.is_empty() {
            if self.options.color {
                println!("\n{}", "Tips:".yellow().bold());
            } else {
                println!("\nTips:");
            }
            for tip in &result.suggestions {
                print!("  • {}", tip.description);
                if let Some(cmd) = &tip.command {
                    if self.options.color {
                        print!(": {}", cmd.cyan());
                    } else {
                        print!(": {}", cmd);
                    }
                }
                println!();
            }
        }

        Ok(())
    }

    fn warn(&self, message: &str) {
        if self.options.color {
            eprintln!("{} {}", "warning:".yellow().bold(), message);
        } else {
            eprintln!("warning: {}", message);
        }
    }
}
