use std::{env, io, sync::Arc, thread};

use crossbeam_channel::{select, unbounded, Receiver};
use env_logger::{Builder, Env};
use url::Url;

use streamsync::{
    cmd::Cmd,
    data::{AppState, AuthCallback, Category, Config, Nav, Service},
    delegate::Delegate,
    ui,
    webapi::WebApi,
};

const ENV_LOG: &str = "STREAMSYNC_LOG";
const ENV_LOG_STYLE: &str = "STREAMSYNC_LOG_STYLE";

fn main() {
    // Setup logging from the env variables, with defaults.
    Builder::from_env(
        Env::new()
            .filter_or(ENV_LOG, "info")
            .write_style(ENV_LOG_STYLE),
    )
    .init();

    // Load configuration, writing the defaults on first run.
    let config = Config::load().unwrap_or_else(|| {
        let config = Config::default();
        config.save();
        config
    });

    let web_api = match WebApi::new(&config.server_url) {
        Ok(web_api) => Arc::new(web_api),
        Err(err) => {
            log::error!("invalid server url {:?}: {}", config.server_url, err);
            return;
        }
    };
    let base = web_api.base().clone();

    let (sender, receiver) = unbounded();
    let mut state = AppState::default_with_config(config);
    let mut delegate = Delegate::new(web_api, sender.clone());

    // The first argument plays the role of the page's location; an auth
    // redirect back from the backend carries the outcome in its query.
    if let Some(location) = env::args().nth(1) {
        match Url::parse(&location) {
            Ok(url) => {
                if let Some(callback) = AuthCallback::from_url(&url) {
                    log::info!("cleaned location: {}", AuthCallback::strip(&url));
                    sender
                        .send(Cmd::AuthCallback(callback))
                        .expect("command channel closed");
                }
            }
            Err(err) => log::warn!("ignoring invalid location {location:?}: {err}"),
        }
    }

    let lines = spawn_stdin_reader();
    render(&state);

    loop {
        let cmd = select! {
            recv(receiver) -> msg => match msg {
                Ok(cmd) => Some(cmd),
                Err(_) => break,
            },
            recv(lines) -> line => match line {
                Ok(line) => parse_line(line.trim(), &state),
                Err(_) => break,
            },
        };
        let Some(cmd) = cmd else {
            continue;
        };
        if matches!(cmd, Cmd::Quit) {
            break;
        }
        if let Some(nav) = delegate.command(&mut state, cmd) {
            navigate(&base, &nav);
        }
        render(&state);
    }
}

fn spawn_stdin_reader() -> Receiver<String> {
    let (sender, receiver) = unbounded();
    thread::spawn(move || {
        for line in io::stdin().lines() {
            let Ok(line) = line else { break };
            if sender.send(line).is_err() {
                break;
            }
        }
    });
    receiver
}

/// Maps a typed shell line to a command, with the clickable things the
/// page would have: connect buttons, item buttons, accordion headers.
fn parse_line(line: &str, state: &AppState) -> Option<Cmd> {
    let mut words = line.split_whitespace();
    match words.next()? {
        "connect" => Service::from_key(words.next()?).map(Cmd::Connect),
        "load" => Some(Cmd::LoadLibrary),
        "toggle" => Category::from_key(words.next()?).map(Cmd::ToggleShelf),
        "select" => {
            let category = Category::from_key(words.next()?)?;
            let index: usize = words.next()?.parse().ok()?;
            let item = state.library.shelf(category).resolved_items().get(index)?;
            Some(Cmd::SelectItem(item.link()))
        }
        "sync" => Some(Cmd::SyncSelected),
        "quit" | "exit" => Some(Cmd::Quit),
        _ => {
            log::warn!("unknown command: {line:?}");
            None
        }
    }
}

fn navigate(base: &Url, nav: &Nav) {
    match nav.url(base) {
        Ok(url) => {
            log::info!("navigating to {url}");
            if let Err(err) = open::that(url.as_str()) {
                log::warn!("failed to open {url}: {err}");
            }
        }
        Err(err) => log::error!("failed to build navigation url: {err}"),
    }
}

fn render(state: &AppState) {
    println!();
    for service in Service::ALL {
        println!("[{}]", ui::connect_button_label(state, service));
    }
    if let Some(line) = ui::feedback_line(state) {
        println!("{line}");
    }
    for category in Category::ALL {
        println!("{}", ui::shelf_header(state, category));
        if state.library.shelf(category).open {
            for line in ui::shelf_lines(state, category) {
                println!("  {line}");
            }
        }
    }
}
