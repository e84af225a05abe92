/// Fan Page - headless shell
use clap::{Parser, Subcommand};
use fanpage::{headless_page, AppConfig, AppEvent, FanPage};
use fanpage_core::types::{ElementRef, PostId, TrackId};
use fanpage_playback::{classify, PlaybackEvent, TrackKind};
use fanpage_ui::{EditorField, PostListView};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "fanpage")]
#[command(about = "Fan page posts and media shelf, headless", long_about = None)]
struct Cli {
    /// Configuration file path (default: ./fanpage.toml if present)
    #[arg(short, long, global = true, env = "FANPAGE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage posts
    Posts {
        #[command(subcommand)]
        command: PostsCommand,
    },
    /// List the track catalog
    Tracks,
    /// Activate a track and follow the queue until it stops
    Play {
        /// Track id
        track_id: String,
    },
    /// Print the page fragments as HTML
    Render,
}

#[derive(Subcommand)]
enum PostsCommand {
    /// List posts, newest first
    List {
        /// Only posts whose title or excerpt contains this text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Create a post
    Create {
        #[arg(short, long)]
        title: String,
        #[arg(short, long)]
        excerpt: Option<String>,
        /// YYYY-MM-DD (default: today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Update fields of a post
    Update {
        id: String,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        excerpt: Option<String>,
        /// YYYY-MM-DD
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete a post
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let assume_yes = matches!(
        cli.command,
        Commands::Posts {
            command: PostsCommand::Delete { yes: true, .. }
        }
    );
    let (mut page, timers) = headless_page(&config, assume_yes)?;

    match cli.command {
        Commands::Posts { command } => run_posts(&mut page, command)?,
        Commands::Tracks => list_tracks(&page),
        Commands::Play { track_id } => {
            play(&mut page, &TrackId::new(track_id))?;
            timers.run_all(&mut page)?;
            print_events(&mut page);
        }
        Commands::Render => {
            let shelf = page.shelf_view();
            println!("<!-- posts -->\n{}", page.posts_view().to_html());
            println!("<!-- playlist -->\n{}", shelf.playlist_html());
            println!("<!-- vinyl -->\n{}", shelf.vinyl_html());
        }
    }

    Ok(())
}

fn run_posts(page: &mut FanPage, command: PostsCommand) -> anyhow::Result<()> {
    match command {
        PostsCommand::List { search } => {
            if let Some(query) = search {
                page.handle(AppEvent::SearchChanged { query })?;
            }
            print_posts(page.posts_view());
        }
        PostsCommand::Create {
            title,
            excerpt,
            date,
        } => {
            edit_fields(page, Some(title), excerpt, date)?;
            submit(page)?;
        }
        PostsCommand::Update {
            id,
            title,
            excerpt,
            date,
        } => {
            let id = PostId::new(id);
            page.handle(AppEvent::EditPost { id: id.clone() })?;
            if page.editor().editing_id() != Some(&id) {
                anyhow::bail!("Post not found: {id}");
            }
            edit_fields(page, title, excerpt, date)?;
            submit(page)?;
        }
        PostsCommand::Delete { id, .. } => {
            let before = page.post_renders();
            page.handle(AppEvent::DeletePost { id: PostId::new(id) })?;
            if page.post_renders() == before {
                println!("Cancelled");
            } else {
                print_posts(page.posts_view());
            }
        }
    }
    Ok(())
}

fn edit_fields(
    page: &mut FanPage,
    title: Option<String>,
    excerpt: Option<String>,
    date: Option<String>,
) -> anyhow::Result<()> {
    let fields = [
        (EditorField::Title, title),
        (EditorField::Excerpt, excerpt),
        (EditorField::Date, date),
    ];
    for (field, value) in fields {
        if let Some(value) = value {
            page.handle(AppEvent::EditorInput { field, value })?;
        }
    }
    Ok(())
}

fn submit(page: &mut FanPage) -> anyhow::Result<()> {
    let before = page.post_renders();
    page.handle(AppEvent::SubmitEditor)?;
    if page.post_renders() == before {
        anyhow::bail!("Post was not saved");
    }
    print_posts(page.posts_view());
    Ok(())
}

fn list_tracks(page: &FanPage) {
    for (i, track) in page.catalog().tracks().iter().enumerate() {
        let kind = match classify(&track.src) {
            TrackKind::LocalAudio => "local",
            TrackKind::External => "external",
        };
        println!(
            "{:>2}. {:<4} {} [{}] {}",
            i + 1,
            track.id.as_str(),
            track.now_playing_label(),
            kind,
            track.src
        );
    }
}

fn play(page: &mut FanPage, track_id: &TrackId) -> anyhow::Result<()> {
    let index = page
        .catalog()
        .position(track_id)
        .ok_or_else(|| anyhow::anyhow!("Unknown track: {}", track_id))?;

    page.handle(AppEvent::ActivateTrack {
        element: ElementRef::playlist(index),
    })?;

    // Each local track "plays through" until the queue stops
    let mut last = None;
    while let Some(current) = page.current_track_id().cloned() {
        if last.as_ref() == Some(&current) {
            break;
        }
        page.handle(AppEvent::AudioPlay)?;
        print_events(page);
        last = Some(current);
        page.handle(AppEvent::AudioEnded)?;
    }
    Ok(())
}

fn print_events(page: &mut FanPage) {
    for event in page.drain_events() {
        match event {
            PlaybackEvent::NowPlaying { text } => println!("Now playing: {text}"),
            PlaybackEvent::ExternalOpened { uri, .. } => println!("Opened externally: {uri}"),
            PlaybackEvent::ExternalFailed { message, .. } => println!("Could not open: {message}"),
            PlaybackEvent::PlaybackBlocked { message, .. } => println!("Blocked: {message}"),
            PlaybackEvent::QueueFinished { .. } => println!("End of playlist"),
            PlaybackEvent::TrackChanged { .. } => {}
        }
    }
}

fn print_posts(view: &PostListView) {
    match view {
        PostListView::Empty { message } => println!("{message}"),
        PostListView::Posts { cards } => {
            for card in cards {
                println!("{}  {}  {}", card.date, card.id, card.title);
                if !card.excerpt.is_empty() {
                    println!("    {}", card.excerpt);
                }
            }
        }
    }
}
