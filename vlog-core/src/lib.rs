pub mod api;
pub mod confirm;
pub mod effects;
pub mod model;
pub mod page;
pub mod state;
pub mod view;

pub use api::VlogApi;
pub use confirm::{Confirm, FixedAnswer};
pub use model::{Comment, FormField, Health, NewComment, Post, PostForm};
pub use page::VlogPage;
pub use state::{Action, PageState};
pub use view::{CommentsView, PageView};
