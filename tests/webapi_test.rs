use std::{sync::Arc, thread, time::Duration};

use crossbeam_channel::unbounded;
use tiny_http::{Header, Response, Server};

use streamsync::{
    cmd::Cmd,
    data::{AppState, Category, Config, PromiseState},
    delegate::Delegate,
    error::Error,
    ui,
    webapi::WebApi,
};

/// Local JSON server answering every request through `handler`.
fn serve(handler: impl Fn(&str) -> (u16, String) + Send + 'static) -> String {
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    thread::spawn(move || {
        for request in server.incoming_requests() {
            let (status, body) = handler(request.url());
            let header =
                Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap();
            let response = Response::from_string(body)
                .with_status_code(status)
                .with_header(header);
            let _ = request.respond(response);
        }
    });
    format!("http://{addr}")
}

#[test]
fn loads_and_formats_playlists() {
    let base = serve(|path| {
        assert_eq!(path, "/spotify-playlists");
        (
            200,
            r#"{"playlists": [{"id": "p1", "name": "Road Trip", "tracks_total": 2}]}"#.into(),
        )
    });
    let web_api = WebApi::new(&base).unwrap();

    let items = web_api.load_shelf(Category::Playlists).unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(&**items[0].id(), "p1");
    assert_eq!(items[0].label(), "Road Trip (2 tracks)");
}

#[test]
fn payload_error_field_is_an_api_error() {
    let base = serve(|_| (200, r#"{"error": "rate limited"}"#.into()));
    let web_api = WebApi::new(&base).unwrap();

    let err = web_api.load_shelf(Category::Artists).unwrap_err();

    assert!(matches!(err, Error::Api(message) if message == "rate limited"));
}

#[test]
fn non_success_status_is_a_status_error() {
    let base = serve(|_| (500, "{}".into()));
    let web_api = WebApi::new(&base).unwrap();

    let err = web_api.load_shelf(Category::Albums).unwrap_err();

    assert!(matches!(err, Error::Status(500)));
}

#[test]
fn missing_payload_key_is_an_empty_shelf() {
    let base = serve(|_| (200, "{}".into()));
    let web_api = WebApi::new(&base).unwrap();

    let items = web_api.load_shelf(Category::LikedSongs).unwrap();

    assert!(items.is_empty());
}

#[test]
fn unreachable_backend_is_a_transport_error() {
    let web_api = WebApi::new("http://127.0.0.1:1").unwrap();

    let err = web_api.load_shelf(Category::Playlists).unwrap_err();

    assert!(matches!(err, Error::Transport(_)));
}

#[test]
fn shelves_settle_independently() {
    let base = serve(|path| match path {
        "/spotify-playlists" => (
            200,
            r#"{"playlists": [{"id": "p1", "name": "Road Trip", "tracks_total": 2}]}"#.into(),
        ),
        "/spotify-liked-songs" => (200, r#"{"error": "rate limited"}"#.into()),
        "/spotify-albums" => (500, "{}".into()),
        "/spotify-artists" => (200, r#"{"artists": []}"#.into()),
        other => panic!("unexpected request: {other}"),
    });

    let (sender, receiver) = unbounded();
    let web_api = Arc::new(WebApi::new(&base).unwrap());
    let mut delegate = Delegate::new(web_api, sender);
    let mut state = AppState::default_with_config(Config::default());

    delegate.command(&mut state, Cmd::LoadLibrary);

    let mut settled = 0;
    while settled < 4 {
        let cmd = receiver
            .recv_timeout(Duration::from_secs(5))
            .expect("all shelves settle");
        if matches!(cmd, Cmd::UpdateShelf(..)) {
            settled += 1;
        }
        delegate.command(&mut state, cmd);
    }

    assert_eq!(state.library.playlists.items.state(), PromiseState::Resolved);
    assert_eq!(
        state.library.liked_songs.items.state(),
        PromiseState::Rejected
    );
    assert_eq!(state.library.albums.items.state(), PromiseState::Rejected);
    assert_eq!(state.library.artists.items.state(), PromiseState::Resolved);

    assert_eq!(
        ui::shelf_lines(&state, Category::LikedSongs),
        vec!["rate limited".to_string()]
    );
    assert_eq!(
        ui::shelf_lines(&state, Category::Artists),
        vec!["No followed artists found.".to_string()]
    );
}
