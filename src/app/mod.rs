//! View coordination: events, actions and the state machine between them.

mod action;
mod coordinator;
mod event;
mod form;
mod runtime;
mod view;

pub use action::AppAction;
pub use coordinator::{Coordinator, Notice, NoticeLevel};
pub use event::{AppEvent, RequestKind};
pub use form::{AuthField, AuthForm};
pub use runtime::Runtime;
pub use view::{MenuOption, View};
