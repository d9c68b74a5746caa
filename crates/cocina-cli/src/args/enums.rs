use clap::ValueEnum;
use cocina_types::{PresentationMode, SortDirection, ViewField};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColumnArg {
    #[value(name = "id")]
    Id,
    #[value(name = "dateAdded", alias = "date", alias = "date-added")]
    DateAdded,
    #[value(name = "name", alias = "title")]
    Name,
    #[value(name = "source")]
    Source,
    #[value(name = "tags")]
    Tags,
}

impl From<ColumnArg> for ViewField {
    fn from(column: ColumnArg) -> Self {
        match column {
            ColumnArg::Id => ViewField::Id,
            ColumnArg::DateAdded => ViewField::DateAdded,
            ColumnArg::Name => ViewField::Name,
            ColumnArg::Source => ViewField::Source,
            ColumnArg::Tags => ViewField::Tags,
        }
    }
}

impl fmt::Display for ColumnArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", ViewField::from(*self))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OrderArg {
    Asc,
    Desc,
}

impl From<OrderArg> for SortDirection {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Asc => SortDirection::Asc,
            OrderArg::Desc => SortDirection::Desc,
        }
    }
}

impl fmt::Display for OrderArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderArg::Asc => write!(f, "asc"),
            OrderArg::Desc => write!(f, "desc"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ModeArg {
    #[value(alias = "cards")]
    Card,
    Table,
}

impl From<ModeArg> for PresentationMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Card => PresentationMode::Card,
            ModeArg::Table => PresentationMode::Table,
        }
    }
}

impl fmt::Display for ModeArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", PresentationMode::from(*self))
    }
}
