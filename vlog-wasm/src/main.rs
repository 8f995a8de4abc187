use crate::client::{BrowserConfirm, VlogClientHttp};
use dioxus::prelude::*;
use vlog_core::view::{CommentView, PostView, FORM_HEADING, NO_COMMENTS, PAGE_TITLE, WATCH_VIDEO};
use vlog_core::{effects, Action, CommentsView, FormField, PageState, PageView};

mod client;
mod error;

const BASE_URL: &str = "http://127.0.0.1:8000";

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

// Responses may land in any order; the sequence number on each fetch keeps the newest.
async fn refresh(mut state: Signal<PageState>, api: &VlogClientHttp) {
    let seq = state.with_mut(|s| s.issue_fetch());
    if let Some(action) = effects::fetch_posts(api, seq).await {
        state.with_mut(|s| s.apply(action));
    }
}

async fn settle(mut state: Signal<PageState>, api: &VlogClientHttp, action: Option<Action>) {
    let Some(action) = action else {
        return;
    };
    let refetch = action.needs_refetch();
    state.with_mut(|s| s.apply(action));
    if refetch {
        refresh(state, api).await;
    }
}

fn dispatch(mut state: Signal<PageState>, action: Action) {
    state.with_mut(|s| s.apply(action));
}

#[component]
fn App() -> Element {
    let state = use_signal(PageState::default);
    use_context_provider(|| state);
    let api = use_context_provider(|| VlogClientHttp::new(BASE_URL));

    use_future(move || {
        let api = api.clone();
        async move { refresh(state, &api).await }
    });

    let view = PageView::from(&*state.read());

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        main { class: "page",
            div { class: "container",
                h1 { class: "page-title", "{PAGE_TITLE}" }
                NewPostForm {}
                div { class: "posts",
                    for post in view.posts {
                        PostCard { key: "{post.id}", post }
                    }
                }
            }
        }
    }
}

#[component]
fn NewPostForm() -> Element {
    let state = use_context::<Signal<PageState>>();
    let api = use_context::<VlogClientHttp>();

    let form = state.read().form().clone();
    let view = PageView::from(&*state.read());

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if !state.read().can_submit() {
            return;
        }

        let form = state.read().form().clone();
        dispatch(state, Action::CreateStarted);
        let api = api.clone();
        spawn(async move {
            let action = effects::create_post(&api, &form).await;
            settle(state, &api, Some(action)).await;
        });
    };

    rsx! {
        div { class: "card",
            h2 { class: "card-title", "{FORM_HEADING}" }
            form {
                onsubmit: on_submit,
                class: "stack",
                input {
                    r#type: "text",
                    placeholder: "Title",
                    value: "{form.title}",
                    required: true,
                    oninput: move |evt| dispatch(state, Action::FormEdited { field: FormField::Title, value: evt.value() }),
                }
                textarea {
                    placeholder: "Content",
                    value: "{form.content}",
                    required: true,
                    oninput: move |evt| dispatch(state, Action::FormEdited { field: FormField::Content, value: evt.value() }),
                }
                input {
                    r#type: "url",
                    placeholder: "Video URL",
                    value: "{form.video_url}",
                    required: true,
                    oninput: move |evt| dispatch(state, Action::FormEdited { field: FormField::VideoUrl, value: evt.value() }),
                }
                button {
                    r#type: "submit",
                    class: "primary",
                    disabled: view.submit_disabled,
                    "{view.submit_label}"
                }
            }
        }
    }
}

#[component]
fn PostCard(post: PostView) -> Element {
    let state = use_context::<Signal<PageState>>();
    let api = use_context::<VlogClientHttp>();

    let on_like = {
        let api = api.clone();
        let id = post.id.clone();
        move |_: MouseEvent| {
            let api = api.clone();
            let id = id.clone();
            spawn(async move {
                let action = effects::like_post(&api, &id).await;
                settle(state, &api, action).await;
            });
        }
    };

    let on_delete = {
        let api = api.clone();
        let id = post.id.clone();
        move |_: MouseEvent| {
            let api = api.clone();
            let id = id.clone();
            spawn(async move {
                let action = effects::delete_post(&api, &BrowserConfirm, &id).await;
                settle(state, &api, action).await;
            });
        }
    };

    let on_draft = {
        let id = post.id.clone();
        move |evt: FormEvent| {
            dispatch(
                state,
                Action::DraftEdited {
                    post_id: id.clone(),
                    text: evt.value(),
                },
            )
        }
    };

    let on_reply = {
        let api = api.clone();
        let id = post.id.clone();
        move |_: MouseEvent| {
            let api = api.clone();
            let id = id.clone();
            let draft = state.read().draft(&id).to_string();
            spawn(async move {
                let action = effects::submit_comment(&api, &id, &draft).await;
                settle(state, &api, action).await;
            });
        }
    };

    rsx! {
        div { class: "card post",
            h3 { class: "post-title", "{post.title}" }
            p { class: "post-content", "{post.content}" }
            a { href: "{post.video_url}", target: "_blank", class: "video-link", "{WATCH_VIDEO}" }
            span { class: "timestamp", "{post.created_at}" }

            div { class: "likes",
                button { onclick: on_like, class: "like", "{post.likes_label}" }
            }

            button {
                onclick: on_delete,
                class: "delete-post",
                title: "Delete Post",
                "🗑️"
            }

            div { class: "comments",
                h4 { "Comments" }
                div { class: "comment-list",
                    match &post.comments {
                        CommentsView::Empty => rsx! { p { class: "no-comments", "{NO_COMMENTS}" } },
                        CommentsView::List(comments) => rsx! {
                            for comment in comments.iter() {
                                CommentRow { key: "{comment.id}", post_id: post.id.clone(), comment: comment.clone() }
                            }
                        },
                    }
                }

                div { class: "reply",
                    input {
                        r#type: "text",
                        placeholder: "Write a comment...",
                        value: "{post.draft}",
                        oninput: on_draft,
                    }
                    button { onclick: on_reply, "Reply" }
                }
            }
        }
    }
}

#[component]
fn CommentRow(post_id: String, comment: CommentView) -> Element {
    let state = use_context::<Signal<PageState>>();
    let api = use_context::<VlogClientHttp>();

    let on_delete = {
        let post_id = post_id.clone();
        let comment_id = comment.id.clone();
        move |_: MouseEvent| {
            let api = api.clone();
            let post_id = post_id.clone();
            let comment_id = comment_id.clone();
            spawn(async move {
                let action =
                    effects::delete_comment(&api, &BrowserConfirm, &post_id, &comment_id).await;
                settle(state, &api, action).await;
            });
        }
    };

    rsx! {
        div { class: "comment",
            span { "{comment.content}" }
            button {
                onclick: on_delete,
                class: "delete-comment",
                title: "Delete Comment",
                "✕"
            }
        }
    }
}
