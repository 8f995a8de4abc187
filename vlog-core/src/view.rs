//! What the page shows, independent of how it is drawn.

use crate::state::PageState;

pub const PAGE_TITLE: &str = "DailyLog Vlog";
pub const FORM_HEADING: &str = "Share your day";
pub const NO_COMMENTS: &str = "No comments yet.";
pub const WATCH_VIDEO: &str = "Watch Video";

#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub submit_label: &'static str,
    pub submit_disabled: bool,
    pub posts: Vec<PostView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostView {
    pub id: String,
    pub title: String,
    pub content: String,
    pub video_url: String,
    pub created_at: String,
    pub likes_label: String,
    pub draft: String,
    pub comments: CommentsView,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommentsView {
    /// Rendered as [`NO_COMMENTS`], never as an empty region.
    Empty,
    List(Vec<CommentView>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommentView {
    pub id: String,
    pub content: String,
    pub created_at: String,
}

impl CommentsView {
    pub fn len(&self) -> usize {
        match self {
            CommentsView::Empty => 0,
            CommentsView::List(comments) => comments.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CommentsView::Empty)
    }
}

impl From<&PageState> for PageView {
    fn from(state: &PageState) -> Self {
        let loading = state.is_loading();
        let posts = state
            .posts()
            .iter()
            .map(|post| PostView {
                id: post.id.clone(),
                title: post.title.clone(),
                content: post.content.clone(),
                video_url: post.video_url.clone(),
                created_at: post.created_at_display(),
                likes_label: format!("❤️ {} Likes", post.likes),
                draft: state.draft(&post.id).to_string(),
                comments: if post.comments.is_empty() {
                    CommentsView::Empty
                } else {
                    CommentsView::List(
                        post.comments
                            .iter()
                            .map(|c| CommentView {
                                id: c.id.clone(),
                                content: c.content.clone(),
                                created_at: c.created_at_display(),
                            })
                            .collect(),
                    )
                },
            })
            .collect();

        Self {
            submit_label: if loading { "Posting..." } else { "Post Vlog" },
            submit_disabled: loading,
            posts,
        }
    }
}
