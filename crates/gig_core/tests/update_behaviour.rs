mod support;

use gig_core::{
    update, AppState, Effect, ListingOrigin, LoadFailure, LoadFailureKind, LoadStatus, LogoSource,
    LogoView, Msg, BOOKING_TITLE, BOOK_BUTTON_EMPTY_LABEL,
};
use pretty_assertions::assert_eq;
use support::{init_logging, sample_postings};

fn loaded_state() -> AppState {
    let (state, _) = update(AppState::new(), Msg::Started);
    let (mut state, _) = update(
        state,
        Msg::ListingLoaded {
            origin: ListingOrigin::Fetched,
            postings: sample_postings(),
        },
    );
    state.consume_dirty();
    state
}

fn tap(state: AppState, id: &str) -> (AppState, Vec<Effect>) {
    update(state, Msg::PostingTapped { id: id.to_string() })
}

#[test]
fn started_requests_listing_once() {
    init_logging();
    let (mut state, effects) = update(AppState::new(), Msg::Started);
    assert_eq!(effects, vec![Effect::LoadListing]);
    assert_eq!(state.view().status, LoadStatus::Loading);
    assert!(state.consume_dirty());

    let (_state, effects) = update(state, Msg::Started);
    assert!(effects.is_empty());
}

#[test]
fn fetched_listing_requests_each_logo_once() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::Started);
    let (state, effects) = update(
        state,
        Msg::ListingLoaded {
            origin: ListingOrigin::Fetched,
            postings: sample_postings(),
        },
    );

    assert_eq!(
        effects,
        vec![
            Effect::LoadLogo {
                url: "https://i.imgur.com/x8DcFXl.png".to_string()
            },
            Effect::LoadLogo {
                url: "https://i.imgur.com/wIPhLsM.jpg".to_string()
            },
        ]
    );
    let view = state.view();
    assert_eq!(view.status, LoadStatus::Ready(ListingOrigin::Fetched));
    assert_eq!(view.total_count, 5);
    assert!(view.rows.iter().all(|row| !row.selected));
}

#[test]
fn tap_selects_and_persists_full_snapshot() {
    init_logging();
    let (mut state, effects) = tap(loaded_state(), "2");

    assert!(state.consume_dirty());
    let snapshot = state.snapshot();
    assert_eq!(effects, vec![Effect::PersistSnapshot(snapshot.clone())]);
    assert_eq!(snapshot.len(), 5);
    assert_eq!(snapshot[1].selected, Some(true));

    let view = state.view();
    assert_eq!(view.selection.count, 1);
    assert_eq!(view.total_label, "900");
    assert!(view.book_button.enabled);
    assert_eq!(view.book_button.label, "Забронировать 1 подработку");
}

#[test]
fn tap_through_filter_updates_full_collection() {
    init_logging();
    let (state, _) = update(loaded_state(), Msg::QueryChanged("магнит".to_string()));
    let filtered = state.view();
    assert_eq!(filtered.visible_count, 1);
    let id = filtered.rows[0].id.clone();

    let (state, _) = tap(state, &id);
    assert!(state.view().rows[0].selected);

    let (state, _) = update(state, Msg::QueryChanged(String::new()));
    let full = state.view();
    assert_eq!(full.visible_count, 5);
    let row = full.rows.iter().find(|row| row.id == id).unwrap();
    assert!(row.selected);
    assert_eq!(full.selection.count, 1);
}

#[test]
fn deselect_through_filter_after_select_in_full_view() {
    init_logging();
    let (state, _) = tap(loaded_state(), "5");
    let (state, _) = update(state, Msg::QueryChanged("груз".to_string()));
    let (state, _) = tap(state, "5");
    let (state, _) = update(state, Msg::QueryChanged(String::new()));

    let view = state.view();
    assert!(view.rows.iter().all(|row| !row.selected));
    assert_eq!(view.selection.count, 0);
    assert_eq!(view.book_button.label, BOOK_BUTTON_EMPTY_LABEL);
    assert!(!view.book_button.enabled);
}

#[test]
fn unknown_tap_is_ignored() {
    init_logging();
    let state = loaded_state();
    let before = state.clone();

    let (mut next, effects) = tap(state, "missing");
    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
    assert_eq!(next, before);
}

#[test]
fn fetch_failure_leaves_store_empty_with_one_notice() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::Started);
    let (state, effects) = update(
        state,
        Msg::ListingFailed(LoadFailure {
            kind: LoadFailureKind::Transport,
            message: "connection refused".to_string(),
        }),
    );

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.status, LoadStatus::Failed);
    assert_eq!(view.total_count, 0);
    assert!(view.rows.is_empty());
    assert_eq!(
        view.notice.as_deref(),
        Some("could not reach the listing server: connection refused")
    );

    let (state, _) = update(state, Msg::NoticeDismissed);
    assert_eq!(state.view().notice, None);
}

#[test]
fn book_shows_summary_and_keeps_selection() {
    init_logging();
    let (state, _) = tap(loaded_state(), "1");
    let (state, _) = tap(state, "2");
    let (state, effects) = update(state, Msg::BookClicked);

    assert!(effects.is_empty());
    let view = state.view();
    let booking = view.booking.expect("booking summary");
    assert_eq!(booking.title, BOOKING_TITLE);
    assert_eq!(booking.message, "Вы заработали 1400 рублей =)");
    assert_eq!(view.selection.count, 2);

    let (state, _) = update(state, Msg::NoticeDismissed);
    assert_eq!(state.view().booking, None);
}

#[test]
fn book_with_empty_selection_does_nothing() {
    init_logging();
    let (mut state, effects) = update(loaded_state(), Msg::BookClicked);
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
    assert_eq!(state.view().booking, None);
}

#[test]
fn logos_resolve_per_url() {
    init_logging();
    let state = loaded_state();
    let view = state.view();
    assert_eq!(view.rows[0].logo, LogoView::Fallback);
    assert_eq!(view.rows[1].logo, LogoView::Pending);

    let (state, _) = update(
        state,
        Msg::LogoLoaded {
            url: "https://i.imgur.com/x8DcFXl.png".to_string(),
            source: LogoSource::Remote,
        },
    );
    let (state, _) = update(
        state,
        Msg::LogoLoaded {
            url: "https://i.imgur.com/wIPhLsM.jpg".to_string(),
            source: LogoSource::Fallback,
        },
    );

    let logos: Vec<_> = state.view().rows.iter().map(|row| row.logo).collect();
    assert_eq!(
        logos,
        vec![
            LogoView::Fallback,
            LogoView::Remote,
            LogoView::Fallback,
            LogoView::Fallback,
            LogoView::Remote,
        ]
    );
}

#[test]
fn rows_carry_formatted_labels() {
    init_logging();
    let view = loaded_state().view();
    let row = &view.rows[3];

    assert_eq!(row.salary_label, "111.11 ₽");
    assert_eq!(row.date_label, "06.11");
    assert_eq!(row.time_label, "01:52");
}
