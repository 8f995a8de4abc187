use std::io::{self, BufRead, Write};

use async_trait::async_trait;
use clap::{Parser, Subcommand};
use tracing::info;
use vlog_client::logging::init_logging;
use vlog_client::{ClientConfig, VlogClientHttp};
use vlog_core::view::{FORM_HEADING, NO_COMMENTS, PAGE_TITLE, WATCH_VIDEO};
use vlog_core::{CommentsView, Confirm, FormField, PageView, VlogApi, VlogPage};

#[derive(Parser, Debug)]
#[clap(name = "vlog", about = "DailyLog vlog client")]
struct Cli {
    /// Base URL of the vlog service; overrides VLOG_API_URL
    #[clap(short, long)]
    server: Option<String>,

    /// Answer yes to every confirmation prompt
    #[clap(short, long)]
    yes: bool,

    #[clap(long)]
    json_logs: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show every post with its likes and comments
    List,
    Show {
        id: String,
    },
    Health,
    Create {
        #[clap(long)]
        title: String,
        #[clap(long)]
        content: String,
        #[clap(long)]
        video_url: String,
    },
    Like {
        id: String,
    },
    Comment {
        post_id: String,
        #[clap(long)]
        content: String,
    },
    DeletePost {
        id: String,
    },
    DeleteComment {
        post_id: String,
        comment_id: String,
    },
}

/// Confirmation on the terminal, or a blanket yes with `--yes`.
enum Prompt {
    Terminal,
    AssumeYes,
}

#[async_trait(?Send)]
impl Confirm for Prompt {
    async fn confirm(&self, prompt: &str) -> bool {
        match self {
            Prompt::AssumeYes => true,
            Prompt::Terminal => {
                eprint!("{prompt} [y/N] ");
                let _ = io::stderr().flush();
                let mut answer = String::new();
                if io::stdin().lock().read_line(&mut answer).is_err() {
                    return false;
                }
                matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    let mut config = ClientConfig::from_env()?;
    if let Some(server) = args.server {
        config.api_url = server;
    }
    config.log_json |= args.json_logs;
    init_logging(&config);

    // 1. One client and one page for the whole run
    let client = VlogClientHttp::connect(&config.api_url).await?;
    info!(api_url = %client.base_url(), "using vlog service");
    let prompt = if args.yes {
        Prompt::AssumeYes
    } else {
        Prompt::Terminal
    };
    let mut page = VlogPage::new(client, prompt);

    // 2. Run the command
    match args.command {
        Command::Health => {
            let health = page.api().health().await?;
            println!("{}", health.message);
            return Ok(());
        }
        Command::Show { id } => {
            let post = page.api().get_post(&id).await?;
            println!("{post}");
            println!("  {}", post.content);
            println!("  {WATCH_VIDEO}: {}", post.video_url);
            println!("  created {}", post.created_at_display());
            for comment in &post.comments {
                println!("  - {comment}");
            }
            return Ok(());
        }
        command => {
            page.refresh().await;
            run(&mut page, command).await;
        }
    }

    render(&page.view());
    Ok(())
}

async fn run<A: VlogApi, C: Confirm>(page: &mut VlogPage<A, C>, command: Command) {
    match command {
        Command::List | Command::Health | Command::Show { .. } => {}
        Command::Create {
            title,
            content,
            video_url,
        } => {
            page.edit_form(FormField::Title, title);
            page.edit_form(FormField::Content, content);
            page.edit_form(FormField::VideoUrl, video_url);
            if !page.submit_post().await {
                eprintln!("Title, content and video URL are all required.");
            }
        }
        Command::Like { id } => page.like(&id).await,
        Command::Comment { post_id, content } => {
            page.edit_draft(post_id.as_str(), content);
            page.submit_comment(&post_id).await;
        }
        Command::DeletePost { id } => page.delete_post(&id).await,
        Command::DeleteComment {
            post_id,
            comment_id,
        } => page.delete_comment(&post_id, &comment_id).await,
    }
}

fn render(view: &PageView) {
    println!("{PAGE_TITLE}");
    println!("{}", "=".repeat(PAGE_TITLE.len()));
    println!("({FORM_HEADING}: `vlog create`)");

    for post in &view.posts {
        println!();
        println!("[{}] {}", post.id, post.title);
        println!("  {}", post.content);
        println!("  {WATCH_VIDEO}: {}", post.video_url);
        println!("  {}   {}", post.likes_label, post.created_at);
        println!("  Comments:");
        match &post.comments {
            CommentsView::Empty => println!("    {NO_COMMENTS}"),
            CommentsView::List(comments) => {
                for comment in comments {
                    println!("    [{}] {}", comment.id, comment.content);
                }
            }
        }
    }
}
