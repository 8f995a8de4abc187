//! Controller tests against an in-memory stand-in for the remote service.

use std::cell::RefCell;

use async_trait::async_trait;
use thiserror::Error;
use vlog_core::{
    Comment, CommentsView, FixedAnswer, FormField, Health, NewComment, Post, PostForm, VlogApi,
    VlogPage,
};

#[derive(Debug, Error)]
enum FakeError {
    #[error("service unavailable")]
    Unavailable,
    #[error("not found")]
    NotFound,
}

#[derive(Default)]
struct FakeService {
    posts: RefCell<Vec<Post>>,
    calls: RefCell<Vec<String>>,
    failing: RefCell<bool>,
    echo_created: bool,
    next_id: RefCell<u32>,
}

impl FakeService {
    fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: RefCell::new(posts),
            ..Self::default()
        }
    }

    fn fail(&self, failing: bool) {
        *self.failing.borrow_mut() = failing;
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) -> Result<(), FakeError> {
        self.calls.borrow_mut().push(call);
        if *self.failing.borrow() {
            Err(FakeError::Unavailable)
        } else {
            Ok(())
        }
    }

    fn fresh_id(&self) -> String {
        let mut next = self.next_id.borrow_mut();
        *next += 1;
        format!("gen-{next}")
    }
}

#[async_trait(?Send)]
impl VlogApi for FakeService {
    type Error = FakeError;

    async fn list_posts(&self) -> Result<Vec<Post>, FakeError> {
        self.record("GET /posts".into())?;
        Ok(self.posts.borrow().clone())
    }

    async fn create_post(&self, form: &PostForm) -> Result<Option<Post>, FakeError> {
        self.record("POST /posts".into())?;
        let post = Post {
            id: self.fresh_id(),
            title: form.title.clone(),
            content: form.content.clone(),
            video_url: form.video_url.clone(),
            created_at: "2026-10-19T09:00:00".into(),
            likes: 0,
            comments: vec![],
        };
        self.posts.borrow_mut().insert(0, post.clone());
        Ok(self.echo_created.then_some(post))
    }

    async fn like_post(&self, post_id: &str) -> Result<(), FakeError> {
        self.record(format!("POST /posts/{post_id}/like"))?;
        let mut posts = self.posts.borrow_mut();
        let post = posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or(FakeError::NotFound)?;
        post.likes += 1;
        Ok(())
    }

    async fn add_comment(&self, post_id: &str, comment: &NewComment) -> Result<(), FakeError> {
        self.record(format!("POST /posts/{post_id}/comments"))?;
        let id = self.fresh_id();
        let mut posts = self.posts.borrow_mut();
        let post = posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or(FakeError::NotFound)?;
        post.comments.push(Comment {
            id,
            content: comment.content.clone(),
            created_at: String::new(),
        });
        Ok(())
    }

    async fn delete_post(&self, post_id: &str) -> Result<(), FakeError> {
        self.record(format!("DELETE /posts/{post_id}"))?;
        self.posts.borrow_mut().retain(|p| p.id != post_id);
        Ok(())
    }

    async fn delete_comment(&self, comment_id: &str) -> Result<(), FakeError> {
        self.record(format!("DELETE /comments/{comment_id}"))?;
        for post in self.posts.borrow_mut().iter_mut() {
            post.comments.retain(|c| c.id != comment_id);
        }
        Ok(())
    }

    async fn get_post(&self, post_id: &str) -> Result<Post, FakeError> {
        self.record(format!("GET /posts/{post_id}"))?;
        self.posts
            .borrow()
            .iter()
            .find(|p| p.id == post_id)
            .cloned()
            .ok_or(FakeError::NotFound)
    }

    async fn health(&self) -> Result<Health, FakeError> {
        self.record("GET /".into())?;
        Ok(Health {
            message: "DailyLog API is healthy".into(),
        })
    }
}

fn post(id: &str, likes: u64, comments: &[&str]) -> Post {
    Post {
        id: id.into(),
        title: format!("Vlog {id}"),
        content: "Today I learned Rust".into(),
        video_url: "http://youtube.com/fake".into(),
        created_at: "2026-10-19T08:00:00".into(),
        likes,
        comments: comments
            .iter()
            .map(|c| Comment {
                id: c.to_string(),
                content: format!("comment {c}"),
                created_at: String::new(),
            })
            .collect(),
    }
}

fn fill_form<A: VlogApi, C: vlog_core::Confirm>(page: &mut VlogPage<A, C>) {
    page.edit_form(FormField::Title, "My First Vlog");
    page.edit_form(FormField::Content, "Today I learned Rust");
    page.edit_form(FormField::VideoUrl, "http://youtube.com/fake");
}

#[tokio::test]
async fn initial_refresh_shows_every_post_and_comment() {
    let service = FakeService::with_posts(vec![post("1", 0, &[]), post("2", 1, &["a", "b"])]);
    let mut page = VlogPage::new(service, FixedAnswer(true));

    page.refresh().await;

    let view = page.view();
    assert_eq!(view.posts.len(), 2);
    assert_eq!(view.posts[0].comments, CommentsView::Empty);
    assert_eq!(view.posts[1].comments.len(), 2);
}

#[tokio::test]
async fn failed_refresh_keeps_previous_list() {
    let service = FakeService::with_posts(vec![post("1", 0, &[])]);
    let mut page = VlogPage::new(service, FixedAnswer(true));
    page.refresh().await;

    page.api().fail(true);
    page.refresh().await;

    assert_eq!(page.state().posts().len(), 1);
}

#[tokio::test]
async fn like_shows_the_server_count_after_refetch() {
    let service = FakeService::with_posts(vec![post("1", 3, &[])]);
    let mut page = VlogPage::new(service, FixedAnswer(true));
    page.refresh().await;

    page.like("1").await;

    assert_eq!(page.state().post("1").unwrap().likes, 4);
    assert_eq!(
        page.api().calls(),
        ["GET /posts", "POST /posts/1/like", "GET /posts"]
    );
}

#[tokio::test]
async fn failed_like_does_not_refetch() {
    let service = FakeService::with_posts(vec![post("1", 3, &[])]);
    let mut page = VlogPage::new(service, FixedAnswer(true));
    page.refresh().await;

    page.api().fail(true);
    page.like("1").await;

    assert_eq!(page.state().post("1").unwrap().likes, 3);
    assert_eq!(page.api().calls(), ["GET /posts", "POST /posts/1/like"]);
}

#[tokio::test]
async fn submitting_a_post_clears_the_form_and_refetches() {
    let mut page = VlogPage::new(FakeService::default(), FixedAnswer(true));
    fill_form(&mut page);

    assert!(page.submit_post().await);

    assert_eq!(page.state().form(), &PostForm::default());
    assert!(!page.state().is_loading());
    assert_eq!(page.state().posts().len(), 1);
    assert_eq!(page.api().calls(), ["POST /posts", "GET /posts"]);
}

#[tokio::test]
async fn echoed_post_is_not_duplicated_by_the_refetch() {
    let service = FakeService {
        echo_created: true,
        ..FakeService::with_posts(vec![post("1", 0, &[])])
    };
    let mut page = VlogPage::new(service, FixedAnswer(true));
    page.refresh().await;
    fill_form(&mut page);

    page.submit_post().await;

    let ids: Vec<_> = page.state().posts().iter().map(|p| p.id.clone()).collect();
    assert_eq!(ids, ["gen-1", "1"]);
}

#[tokio::test]
async fn failed_submission_keeps_the_form() {
    let service = FakeService::default();
    service.fail(true);
    let mut page = VlogPage::new(service, FixedAnswer(true));
    fill_form(&mut page);

    assert!(page.submit_post().await);

    assert_eq!(page.state().form().title, "My First Vlog");
    assert!(!page.state().is_loading());
    assert_eq!(page.api().calls(), ["POST /posts"]);
}

#[tokio::test]
async fn incomplete_form_sends_nothing() {
    let mut page = VlogPage::new(FakeService::default(), FixedAnswer(true));
    page.edit_form(FormField::Title, "Only a title");

    assert!(!page.submit_post().await);
    assert!(page.api().calls().is_empty());
}

#[tokio::test]
async fn empty_comment_draft_sends_nothing() {
    let service = FakeService::with_posts(vec![post("1", 0, &[])]);
    let mut page = VlogPage::new(service, FixedAnswer(true));
    page.refresh().await;
    let before = page.state().clone();

    page.submit_comment("1").await;
    page.edit_draft("1", "");
    page.submit_comment("1").await;

    assert_eq!(page.api().calls(), ["GET /posts"]);
    assert_eq!(page.state().posts(), before.posts());
}

#[tokio::test]
async fn comment_clears_draft_and_shows_after_refetch() {
    let service = FakeService::with_posts(vec![post("1", 0, &[])]);
    let mut page = VlogPage::new(service, FixedAnswer(true));
    page.refresh().await;

    page.edit_draft("1", "Nice one");
    page.submit_comment("1").await;

    assert_eq!(page.state().draft("1"), "");
    let comments = &page.state().post("1").unwrap().comments;
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].content, "Nice one");
}

#[tokio::test]
async fn failed_comment_keeps_the_draft() {
    let service = FakeService::with_posts(vec![post("1", 0, &[])]);
    let mut page = VlogPage::new(service, FixedAnswer(true));
    page.refresh().await;
    page.edit_draft("1", "Nice one");

    page.api().fail(true);
    page.submit_comment("1").await;

    assert_eq!(page.state().draft("1"), "Nice one");
    assert!(page.state().post("1").unwrap().comments.is_empty());
}

#[tokio::test]
async fn deleting_a_post_leaves_the_other_intact_without_refetch() {
    let service = FakeService::with_posts(vec![post("1", 0, &[]), post("2", 7, &["a", "b"])]);
    let mut page = VlogPage::new(service, FixedAnswer(true));
    page.refresh().await;
    let survivor = page.state().post("2").cloned().unwrap();

    page.delete_post("1").await;

    assert_eq!(page.state().posts(), [survivor]);
    assert_eq!(page.api().calls(), ["GET /posts", "DELETE /posts/1"]);
}

#[tokio::test]
async fn declined_confirmation_sends_nothing() {
    let service = FakeService::with_posts(vec![post("1", 0, &["a"])]);
    let mut page = VlogPage::new(service, FixedAnswer(false));
    page.refresh().await;
    let before = page.state().clone();

    page.delete_post("1").await;
    page.delete_comment("1", "a").await;

    assert_eq!(page.api().calls(), ["GET /posts"]);
    assert_eq!(page.state(), &before);
}

#[tokio::test]
async fn confirmation_sees_the_matching_prompt() {
    let prompts = RefCell::new(Vec::new());
    let recorder = |prompt: &str| {
        prompts.borrow_mut().push(prompt.to_string());
        true
    };
    let service = FakeService::with_posts(vec![post("1", 0, &["a"])]);
    let mut page = VlogPage::new(service, recorder);
    page.refresh().await;

    page.delete_comment("1", "a").await;
    page.delete_post("1").await;
    drop(page);

    assert_eq!(
        prompts.into_inner(),
        [
            vlog_core::confirm::DELETE_COMMENT_PROMPT,
            vlog_core::confirm::DELETE_POST_PROMPT
        ]
    );
}

#[tokio::test]
async fn deleting_a_comment_touches_only_that_comment() {
    let service = FakeService::with_posts(vec![post("1", 0, &["a", "b"]), post("2", 0, &["c"])]);
    let mut page = VlogPage::new(service, FixedAnswer(true));
    page.refresh().await;

    page.delete_comment("1", "a").await;

    let first: Vec<_> = page.state().post("1").unwrap().comments
        .iter()
        .map(|c| c.id.clone())
        .collect();
    assert_eq!(first, ["b"]);
    assert_eq!(page.state().post("2").unwrap().comments.len(), 1);
    assert_eq!(page.api().calls().last().unwrap(), "DELETE /comments/a");
}

#[tokio::test]
async fn failed_delete_leaves_the_list_unchanged() {
    let service = FakeService::with_posts(vec![post("1", 0, &["a"])]);
    let mut page = VlogPage::new(service, FixedAnswer(true));
    page.refresh().await;

    page.api().fail(true);
    page.delete_post("1").await;
    page.delete_comment("1", "a").await;

    assert_eq!(page.state().posts().len(), 1);
    assert_eq!(page.state().post("1").unwrap().comments.len(), 1);
}
