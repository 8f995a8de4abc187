use tracing::debug;

use crate::api::VlogApi;
use crate::confirm::Confirm;
use crate::effects;
use crate::model::FormField;
use crate::state::{Action, PageState};
use crate::view::PageView;

/// The vlog page driven one action at a time.
///
/// Each user operation issues at most one request to the service, applies
/// the outcome to the page state and refetches the list when the action
/// asks for it.
pub struct VlogPage<A, C> {
    api: A,
    confirm: C,
    state: PageState,
}

impl<A: VlogApi, C: Confirm> VlogPage<A, C> {
    pub fn new(api: A, confirm: C) -> Self {
        Self {
            api,
            confirm,
            state: PageState::default(),
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn view(&self) -> PageView {
        PageView::from(&self.state)
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn dispatch(&mut self, action: Action) {
        self.state.apply(action);
    }

    pub fn edit_form(&mut self, field: FormField, value: impl Into<String>) {
        self.dispatch(Action::FormEdited {
            field,
            value: value.into(),
        });
    }

    pub fn edit_draft(&mut self, post_id: impl Into<String>, text: impl Into<String>) {
        self.dispatch(Action::DraftEdited {
            post_id: post_id.into(),
            text: text.into(),
        });
    }

    pub async fn refresh(&mut self) {
        let seq = self.state.issue_fetch();
        if let Some(action) = effects::fetch_posts(&self.api, seq).await {
            self.dispatch(action);
        }
    }

    /// Returns `false` when the form was incomplete or a submission is already pending.
    pub async fn submit_post(&mut self) -> bool {
        if !self.state.can_submit() {
            debug!(loading = self.state.is_loading(), "post submission rejected");
            return false;
        }

        let form = self.state.form().clone();
        self.dispatch(Action::CreateStarted);
        let action = effects::create_post(&self.api, &form).await;
        self.settle(Some(action)).await;
        true
    }

    pub async fn like(&mut self, post_id: &str) {
        let action = effects::like_post(&self.api, post_id).await;
        self.settle(action).await;
    }

    pub async fn submit_comment(&mut self, post_id: &str) {
        let draft = self.state.draft(post_id).to_string();
        let action = effects::submit_comment(&self.api, post_id, &draft).await;
        self.settle(action).await;
    }

    pub async fn delete_post(&mut self, post_id: &str) {
        let action = effects::delete_post(&self.api, &self.confirm, post_id).await;
        self.settle(action).await;
    }

    pub async fn delete_comment(&mut self, post_id: &str, comment_id: &str) {
        let action = effects::delete_comment(&self.api, &self.confirm, post_id, comment_id).await;
        self.settle(action).await;
    }

    async fn settle(&mut self, action: Option<Action>) {
        let Some(action) = action else {
            return;
        };
        let refetch = action.needs_refetch();
        self.dispatch(action);
        if refetch {
            self.refresh().await;
        }
    }
}
