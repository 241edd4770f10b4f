//! Pure decision core: which screen a user may view, where a fresh session
//! lands, and where a record routes next.
//!
//! Everything here is a synchronous function of its inputs. No storage, no
//! network, no panics on unexpected input: unmatched cases degrade to a safe
//! default (`None`, an unchanged state, or the login screen).

pub mod access;
pub mod approval;
pub mod landing;
pub mod screen;
pub mod session;
pub mod status_routing;

pub use access::{authorized_screens, is_authorized, menu_entries, MenuEntry};
pub use approval::{ApprovalActor, ApprovalStatus};
pub use landing::{default_screen_for_role, resolve_default_screen, NavigationStrategy};
pub use screen::Screen;
pub use session::SessionContext;
pub use status_routing::resolve_screen_for_status;
