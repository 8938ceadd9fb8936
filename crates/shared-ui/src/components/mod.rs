// Standalone components (no primitives)
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod form;
pub mod form_select;
pub mod input;
pub mod page_header;
pub mod search_bar;

// Primitive wrappers
pub mod confirm_dialog;
pub mod label;
pub mod modal_dialog;
pub mod toast;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use confirm_dialog::*;
pub use data_table::*;
pub use form::*;
pub use form_select::*;
pub use input::*;
pub use label::*;
pub use modal_dialog::*;
pub use page_header::*;
pub use search_bar::*;
pub use toast::*;
