use std::collections::HashMap;

use crate::model::{FormField, Post, PostForm};

/// Everything the page knows. Only [`PageState::reduce`] produces a new one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageState {
    posts: Vec<Post>,
    form: PostForm,
    comment_drafts: HashMap<String, String>,
    loading: bool,
    issued_seq: u64,
    applied_seq: u64,
    tombstones: Vec<Tombstone>,
}

/// A local deletion that fetches issued at or before `seq` must not undo.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Tombstone {
    seq: u64,
    target: Deleted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Deleted {
    Post(String),
    Comment { post_id: String, comment_id: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    FormEdited { field: FormField, value: String },
    DraftEdited { post_id: String, text: String },
    FetchIssued,
    PostsLoaded { seq: u64, posts: Vec<Post> },
    CreateStarted,
    PostCreated { created: Option<Post> },
    CreateFailed,
    LikeRecorded { post_id: String },
    CommentAdded { post_id: String },
    PostDeleted { post_id: String },
    CommentDeleted { post_id: String, comment_id: String },
}

impl Action {
    /// Whether the full list must be refetched after applying this action.
    pub fn needs_refetch(&self) -> bool {
        matches!(
            self,
            Action::PostCreated { .. } | Action::LikeRecorded { .. } | Action::CommentAdded { .. }
        )
    }
}

impl PageState {
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn post(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    pub fn form(&self) -> &PostForm {
        &self.form
    }

    pub fn draft(&self, post_id: &str) -> &str {
        self.comment_drafts
            .get(post_id)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn can_submit(&self) -> bool {
        !self.loading && self.form.is_complete()
    }

    /// Sequence number of the most recently issued list fetch.
    pub fn issued_seq(&self) -> u64 {
        self.issued_seq
    }

    pub fn apply(&mut self, action: Action) {
        *self = std::mem::take(self).reduce(action);
    }

    /// Applies [`Action::FetchIssued`] and returns the sequence number to tag the fetch with.
    pub fn issue_fetch(&mut self) -> u64 {
        self.apply(Action::FetchIssued);
        self.issued_seq
    }

    pub fn reduce(mut self, action: Action) -> Self {
        match action {
            Action::FormEdited { field, value } => self.form.set(field, value),
            Action::DraftEdited { post_id, text } => {
                self.comment_drafts.insert(post_id, text);
            }
            Action::FetchIssued => self.issued_seq += 1,
            Action::PostsLoaded { seq, posts } => self.load(seq, posts),
            Action::CreateStarted => self.loading = true,
            Action::PostCreated { created } => {
                self.loading = false;
                self.form = PostForm::default();
                if let Some(post) = created {
                    if self.post(&post.id).is_none() {
                        self.posts.insert(0, post);
                    }
                }
            }
            Action::CreateFailed => self.loading = false,
            Action::LikeRecorded { .. } => {}
            Action::CommentAdded { post_id } => {
                self.comment_drafts.insert(post_id, String::new());
            }
            Action::PostDeleted { post_id } => {
                self.posts.retain(|p| p.id != post_id);
                self.comment_drafts.remove(&post_id);
                self.tombstones.push(Tombstone {
                    seq: self.issued_seq,
                    target: Deleted::Post(post_id),
                });
            }
            Action::CommentDeleted {
                post_id,
                comment_id,
            } => {
                if let Some(post) = self.posts.iter_mut().find(|p| p.id == post_id) {
                    post.comments.retain(|c| c.id != comment_id);
                }
                self.tombstones.push(Tombstone {
                    seq: self.issued_seq,
                    target: Deleted::Comment {
                        post_id,
                        comment_id,
                    },
                });
            }
        }
        self
    }

    fn load(&mut self, seq: u64, mut posts: Vec<Post>) {
        if seq < self.applied_seq {
            tracing::debug!(seq, applied = self.applied_seq, "discarding stale post list");
            return;
        }

        for tombstone in self.tombstones.iter().filter(|t| t.seq >= seq) {
            match &tombstone.target {
                Deleted::Post(id) => posts.retain(|p| &p.id != id),
                Deleted::Comment {
                    post_id,
                    comment_id,
                } => {
                    if let Some(post) = posts.iter_mut().find(|p| &p.id == post_id) {
                        post.comments.retain(|c| &c.id != comment_id);
                    }
                }
            }
        }
        self.tombstones.retain(|t| t.seq >= seq);

        self.applied_seq = seq;
        self.posts = posts;
    }
}
