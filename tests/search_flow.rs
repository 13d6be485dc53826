//! Drives the plugin through the public API the way the Zellij shim does.

use std::collections::BTreeMap;
use std::time::Duration;

use movieseek::api::{HttpReply, RequestKind, RequestTag};
use movieseek::app::SearchStatus;
use movieseek::{handle_event, initialize, Action, AppState, Config, Event};

fn plugin(pairs: &[(&str, &str)]) -> AppState {
    let map: BTreeMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    initialize(&Config::from_zellij(&map))
}

/// Sends every event and performs timers immediately, returning the web
/// requests the plugin asked for.
fn run(state: &mut AppState, events: &[Event]) -> Vec<(String, RequestTag)> {
    let mut pending: Vec<Event> = events.to_vec();
    pending.reverse();
    let mut requests = vec![];

    while let Some(event) = pending.pop() {
        let (_, actions) = handle_event(state, &event).unwrap();
        for action in actions {
            match action {
                Action::ScheduleTimer(_) => pending.insert(0, Event::TimerElapsed),
                Action::WebRequest { url, tag } => requests.push((url, tag)),
                Action::CloseFocus => {}
            }
        }
    }
    requests
}

fn typed(text: &str) -> Vec<Event> {
    text.chars().map(Event::Char).collect()
}

fn search_reply(total: u64) -> HttpReply {
    HttpReply::Received {
        status: 200,
        body: format!(
            r#"{{"Search":[{{"Title":"Amélie","Year":"2001","imdbID":"tt0211915","Type":"movie","Poster":"N/A"}}],"totalResults":"{total}","Response":"True"}}"#
        )
        .into_bytes(),
    }
}

#[test]
fn configured_endpoint_and_debounce_are_used() {
    let mut state = plugin(&[
        ("base_url", "http://localhost:9000/omdb"),
        ("api_key", "k"),
        ("debounce_ms", "120"),
    ]);

    let (_, actions) = handle_event(&mut state, &Event::Char('a')).unwrap();
    assert!(actions.is_empty());
    let (_, actions) = handle_event(&mut state, &Event::Char('m')).unwrap();
    assert_eq!(actions, vec![Action::ScheduleTimer(Duration::from_millis(120))]);

    // The host still owes the tick for the timer armed by 'm'.
    let mut events = typed("élie");
    events.push(Event::TimerElapsed);
    let requests = run(&mut state, &events);
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].0,
        "http://localhost:9000/omdb?apikey=k&s=am%C3%A9lie&page=1"
    );
}

#[test]
fn ukrainian_messages_for_not_found_and_pager() {
    let mut state = plugin(&[("locale", "uk")]);
    let requests = run(&mut state, &typed("amelie"));
    let (_, tag) = requests[0].clone();

    handle_event(
        &mut state,
        &Event::WebReply {
            tag,
            reply: search_reply(12),
        },
    )
    .unwrap();
    let vm = state.compute_viewmodel(30, 90);
    assert_eq!(vm.pager.unwrap().label, "Сторінка 1 з 2");

    let requests = run(&mut state, &[Event::NextPage]);
    let (url, tag) = requests[0].clone();
    assert!(url.ends_with("page=2"));
    handle_event(
        &mut state,
        &Event::WebReply {
            tag,
            reply: HttpReply::Received {
                status: 200,
                body: br#"{"Response":"False","Error":"Movie not found!"}"#.to_vec(),
            },
        },
    )
    .unwrap();

    let vm = state.compute_viewmodel(30, 90);
    assert!(vm.pager.is_none());
    let empty = vm.empty_state.unwrap();
    assert!(!empty.is_error);
    assert_eq!(empty.subtitle, "Фільми не знайдено. Спробуйте інший запит.");
}

#[test]
fn server_and_network_errors_read_differently() {
    let mut messages = vec![];
    for reply in [
        HttpReply::Received {
            status: 503,
            body: vec![],
        },
        HttpReply::from_host(400, &BTreeMap::new(), b"dns lookup failed".to_vec()),
    ] {
        let mut state = plugin(&[]);
        let (_, tag) = run(&mut state, &typed("batman"))[0].clone();
        handle_event(&mut state, &Event::WebReply { tag, reply }).unwrap();
        assert!(matches!(state.status, SearchStatus::Problem(_)));
        messages.push(state.compute_viewmodel(30, 90).empty_state.unwrap());
    }

    assert!(messages.iter().all(|m| m.is_error));
    assert_eq!(messages[0].subtitle, "Server error: HTTP 503");
    assert_ne!(messages[0].subtitle, messages[1].subtitle);
}

#[test]
fn details_reply_for_closed_modal_is_dropped() {
    let mut state = plugin(&[]);
    let (_, tag) = run(&mut state, &typed("amelie"))[0].clone();
    handle_event(&mut state, &Event::WebReply { tag, reply: search_reply(1) }).unwrap();

    let requests = run(&mut state, &[Event::FocusResults, Event::OpenDetails, Event::CloseModal]);
    let (_, details_tag) = requests[0].clone();
    assert_eq!(details_tag.kind, RequestKind::Details);

    let (render, _) = handle_event(
        &mut state,
        &Event::WebReply {
            tag: details_tag,
            reply: HttpReply::Received {
                status: 200,
                body: r#"{"Title":"Amélie","Response":"True"}"#.as_bytes().to_vec(),
            },
        },
    )
    .unwrap();
    assert!(!render);
    assert!(state.compute_viewmodel(30, 90).modal.is_none());
}
