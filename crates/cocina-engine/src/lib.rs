// View engine - turns a user's unordered recipe set into pages of rows
// Every render cycle recomputes display ids, filters, sort and page from scratch

pub mod filter;
pub mod gateway;
pub mod paginator;
pub mod pipeline;
pub mod projector;
pub mod session;
pub mod sort;
pub mod state;

pub use filter::{Filters, apply_filters};
pub use gateway::{DeleteOutcome, EditRequest, MutationGateway};
pub use paginator::{DEFAULT_PAGE_SIZE, PageInfo, paginate};
pub use pipeline::{RenderModel, RenderPhase, RenderRow, render};
pub use projector::{ViewRow, project, resolve_date_added};
pub use session::BrowseSession;
pub use sort::{SortSpec, sort_rows};
pub use state::ViewState;
