use async_trait::async_trait;

pub const DELETE_POST_PROMPT: &str =
    "Are you sure you want to delete this vlog? This cannot be undone.";
pub const DELETE_COMMENT_PROMPT: &str = "Delete this comment?";

/// Asks the user before a destructive action.
#[async_trait(?Send)]
pub trait Confirm {
    async fn confirm(&self, prompt: &str) -> bool;
}

/// Answers every prompt with the same fixed value.
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

#[async_trait(?Send)]
impl Confirm for FixedAnswer {
    async fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}

#[async_trait(?Send)]
impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    async fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}
