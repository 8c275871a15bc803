use gig_logging::{gig_info, gig_warn};

use crate::{AppState, Effect, Msg, Toggle};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => {
            if state.begin_loading() {
                vec![Effect::LoadListing]
            } else {
                Vec::new()
            }
        }
        Msg::ListingLoaded { origin, postings } => {
            gig_info!("Listing loaded ({:?}, {} postings)", origin, postings.len());
            state.install_listing(origin, postings);
            state
                .store()
                .logo_urls()
                .into_iter()
                .map(|url| Effect::LoadLogo { url })
                .collect()
        }
        Msg::ListingFailed(failure) => {
            gig_warn!("Listing unavailable: {}", failure);
            state.fail_listing(&failure);
            Vec::new()
        }
        Msg::QueryChanged(query) => {
            state.set_query(query);
            Vec::new()
        }
        Msg::PostingTapped { id } => match state.toggle(&id) {
            Ok(toggled) => {
                let selected = toggled == Toggle::Selected;
                gig_info!("Posting {:?} selected={} ({} in ledger)", id, selected, state.ledger().len());
                vec![Effect::PersistSnapshot(state.snapshot())]
            }
            Err(err) => {
                gig_warn!("Ignoring tap: {}", err);
                Vec::new()
            }
        },
        Msg::BookClicked => {
            if !state.open_booking() {
                gig_info!("Book clicked with empty selection");
            }
            Vec::new()
        }
        Msg::NoticeDismissed => {
            state.dismiss_notice();
            Vec::new()
        }
        Msg::LogoLoaded { url, source } => {
            state.record_logo(url, source);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
