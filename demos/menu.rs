//! Menu Example - Two pipelines driving one shared cursor
//!
//! The main screen and a "serial mirror" below it are rendered from two
//! separate `SharedNav` forwarders bound to the same navigation chain.
//! Arrow keys / j k move, Enter opens submenus and edits fields, Esc or q
//! backs out. Leaving the top menu quits.
//!
//! Run with: cargo run --example menu 2>nav.log
//! Logs: RUST_LOG=spark_menu=trace

use std::cell::{Cell, RefCell};
use std::io::{self, Write, stdout};
use std::time::Duration;

use crossterm::event::KeyCode;
use crossterm::{cursor, execute, terminal};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use spark_menu::{
    ActRes, Cmd, Item, ItemList, ItemNav, KeyBindings, Nav, NavNode, NumField, Prompt, SharedNav, Tag,
    TextRenderer, poll_command, route,
};

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("spark_menu=info"));
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init();
}

fn main() -> io::Result<()> {
    init_logging();

    let volume = Cell::new(5);
    let contrast = Cell::new(40);
    let menu = ItemList::new("Main")
        .with(Prompt::new("Status: ok"))
        .with(
            ItemList::new("Settings")
                .with(NumField::new("Volume", &volume, 0, 10, 1))
                .with(NumField::new("Contrast", &contrast, 0, 100, 5)),
        )
        .with(Prompt::new("About"));

    let nav = RefCell::new(ItemNav::new(NavNode::new()));
    nav.borrow_mut().set_target(&menu);

    terminal::enable_raw_mode()?;
    execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
    let result = run(&nav);
    execute!(stdout(), cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result?;

    println!("volume={} contrast={}", volume.get(), contrast.get());
    Ok(())
}

fn run<'a>(nav: &RefCell<ItemNav<'a, NavNode<'a>>>) -> io::Result<()> {
    let keys = KeyBindings::default().bind(KeyCode::Char('q'), Cmd::ESC);
    let mut screen = SharedNav::new(nav);
    let mirror = SharedNav::new(nav);
    let screen_view = TextRenderer::default();
    let mirror_view = TextRenderer::new(Tag::CURSOR | Tag::INDEX);

    // Parent targets and positions, for backing out of submenus
    let mut stack: Vec<(&'a dyn Item, usize)> = Vec::new();

    loop {
        let screen_text = screen_view.render_to_string(&screen).map_err(io::Error::other)?;
        let mirror_text = mirror_view.render_to_string(&mirror).map_err(io::Error::other)?;
        draw(&screen_text, &mirror_text)?;

        let Some(cmd) = poll_command(&keys, Duration::from_millis(100))? else {
            continue;
        };
        match route(&mut screen, cmd) {
            ActRes::Stay => {}
            ActRes::Open => {
                let parent = screen.target();
                let child = parent.and_then(|t| t.get(screen.pos()));
                if let (Some(parent), Some(child)) = (parent, child) {
                    stack.push((parent, screen.pos()));
                    screen.set_target(child);
                    screen.idx(0);
                }
            }
            ActRes::Close => match stack.pop() {
                Some((parent, pos)) => {
                    screen.set_target(parent);
                    screen.idx(pos);
                }
                None => return Ok(()),
            },
        }
    }
}

fn draw(screen: &str, mirror: &str) -> io::Result<()> {
    let mut out = stdout();
    execute!(out, terminal::Clear(terminal::ClearType::All), cursor::MoveTo(0, 0))?;
    // Raw mode needs explicit carriage returns
    write!(out, "{}\r\n--- serial ---\r\n{}", screen.replace('\n', "\r\n"), mirror.replace('\n', "\r\n"))?;
    out.flush()
}
