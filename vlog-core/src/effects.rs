//! One remote call per user action.
//!
//! Every effect performs at most one request and returns the action to feed
//! into [`PageState`](crate::state::PageState). Failures are logged here and
//! otherwise leave the page untouched, so most effects return `None` on error.

use tracing::{debug, error};

use crate::api::VlogApi;
use crate::confirm::{Confirm, DELETE_COMMENT_PROMPT, DELETE_POST_PROMPT};
use crate::model::{NewComment, PostForm};
use crate::state::Action;

pub async fn fetch_posts<A: VlogApi>(api: &A, seq: u64) -> Option<Action> {
    match api.list_posts().await {
        Ok(posts) => {
            debug!(seq, count = posts.len(), "posts fetched");
            Some(Action::PostsLoaded { seq, posts })
        }
        Err(e) => {
            error!(seq, error = %e, "failed to fetch posts");
            None
        }
    }
}

/// Always yields an action so the loading flag is cleared either way.
pub async fn create_post<A: VlogApi>(api: &A, form: &PostForm) -> Action {
    match api.create_post(form).await {
        Ok(created) => Action::PostCreated { created },
        Err(e) => {
            error!(error = %e, "error creating post");
            Action::CreateFailed
        }
    }
}

pub async fn like_post<A: VlogApi>(api: &A, post_id: &str) -> Option<Action> {
    match api.like_post(post_id).await {
        Ok(()) => Some(Action::LikeRecorded {
            post_id: post_id.to_string(),
        }),
        Err(e) => {
            error!(post_id, error = %e, "error liking post");
            None
        }
    }
}

/// An empty draft is a no-op: nothing is sent.
pub async fn submit_comment<A: VlogApi>(api: &A, post_id: &str, draft: &str) -> Option<Action> {
    if draft.is_empty() {
        return None;
    }

    let comment = NewComment {
        content: draft.to_string(),
    };
    match api.add_comment(post_id, &comment).await {
        Ok(()) => Some(Action::CommentAdded {
            post_id: post_id.to_string(),
        }),
        Err(e) => {
            error!(post_id, error = %e, "error posting comment");
            None
        }
    }
}

pub async fn delete_post<A: VlogApi, C: Confirm>(
    api: &A,
    confirm: &C,
    post_id: &str,
) -> Option<Action> {
    if !confirm.confirm(DELETE_POST_PROMPT).await {
        debug!(post_id, "post deletion declined");
        return None;
    }

    match api.delete_post(post_id).await {
        Ok(()) => Some(Action::PostDeleted {
            post_id: post_id.to_string(),
        }),
        Err(e) => {
            error!(post_id, error = %e, "error deleting post");
            None
        }
    }
}

pub async fn delete_comment<A: VlogApi, C: Confirm>(
    api: &A,
    confirm: &C,
    post_id: &str,
    comment_id: &str,
) -> Option<Action> {
    if !confirm.confirm(DELETE_COMMENT_PROMPT).await {
        debug!(post_id, comment_id, "comment deletion declined");
        return None;
    }

    match api.delete_comment(comment_id).await {
        Ok(()) => Some(Action::CommentDeleted {
            post_id: post_id.to_string(),
            comment_id: comment_id.to_string(),
        }),
        Err(e) => {
            error!(post_id, comment_id, error = %e, "error deleting comment");
            None
        }
    }
}
