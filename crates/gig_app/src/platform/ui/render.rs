use gig_core::{AppViewModel, LoadStatus, LogoView, PostingRowView};

use crate::platform::effects::origin_label;

/// Renders the view model as terminal lines.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::with_capacity(view.rows.len() + 8);

    lines.push(status_line(view));
    if !view.query.is_empty() {
        lines.push(format!("Search: {:?}", view.query));
    }

    if view.rows.is_empty() {
        if matches!(view.status, LoadStatus::Ready(_)) {
            lines.push("  (no postings match)".to_string());
        }
    } else {
        lines.extend(view.rows.iter().map(row_line));
    }

    lines.push(format!(
        "Selected: {} | Total: {} ₽",
        view.selection.count, view.total_label
    ));
    lines.push(if view.book_button.enabled {
        format!("[ {} ]  (type `book`)", view.book_button.label)
    } else {
        format!("( {} )", view.book_button.label)
    });

    if let Some(booking) = &view.booking {
        lines.push(String::new());
        lines.push(format!("*** {} ***", booking.title));
        lines.push(booking.message.clone());
        lines.push("(type `ok` to close)".to_string());
    }
    if let Some(notice) = &view.notice {
        lines.push(String::new());
        lines.push(format!("! {notice}"));
        lines.push("(type `ok` to dismiss)".to_string());
    }

    lines
}

fn status_line(view: &AppViewModel) -> String {
    match view.status {
        LoadStatus::Idle => "Starting...".to_string(),
        LoadStatus::Loading => "Loading postings...".to_string(),
        LoadStatus::Ready(origin) => format!(
            "Postings: {} shown of {} | source: {}",
            view.visible_count,
            view.total_count,
            origin_label(origin)
        ),
        LoadStatus::Failed => "Postings unavailable".to_string(),
    }
}

fn row_line(row: &PostingRowView) -> String {
    let mark = if row.selected { "[x]" } else { "[ ]" };
    let logo = match row.logo {
        LogoView::Pending => "logo:...",
        LogoView::Remote => "logo:ok",
        LogoView::Fallback => "logo:--",
    };
    format!(
        "{mark} #{:<4} {} / {}  {}  {} {}  {logo}",
        row.id, row.profession, row.employer, row.salary_label, row.date_label, row.time_label
    )
}

#[cfg(test)]
mod tests {
    use super::render;
    use gig_core::{update, AppState, ListingOrigin, Msg, Posting};
    use pretty_assertions::assert_eq;

    fn loaded() -> AppState {
        let postings = vec![
            Posting {
                id: "1".to_string(),
                profession: "Слесарь".to_string(),
                employer: "Наша Мебель".to_string(),
                salary: 500.0,
                posted_at: "2023-11-05T23:05:43Z".to_string(),
                logo_url: None,
                selected: None,
            },
            Posting {
                id: "4".to_string(),
                profession: "iOS-разработчик".to_string(),
                employer: "MyGig".to_string(),
                salary: 111.11,
                posted_at: "2023-11-06T07:25:43Z".to_string(),
                logo_url: Some("https://logo.example/mygig.png".to_string()),
                selected: None,
            },
        ];
        let (state, _) = update(
            AppState::new(),
            Msg::ListingLoaded {
                origin: ListingOrigin::Fetched,
                postings,
            },
        );
        state
    }

    #[test]
    fn renders_rows_total_and_disabled_button() {
        let lines = render(&loaded().view());
        assert_eq!(
            lines,
            vec![
                "Postings: 2 shown of 2 | source: server".to_string(),
                "[ ] #1    Слесарь / Наша Мебель  500 ₽  05.11 23:05  logo:--".to_string(),
                "[ ] #4    iOS-разработчик / MyGig  111.11 ₽  06.11 07:25  logo:...".to_string(),
                "Selected: 0 | Total: 0 ₽".to_string(),
                "( Выберите подработки )".to_string(),
            ]
        );
    }

    #[test]
    fn renders_selection_and_booking() {
        let (state, _) = update(loaded(), Msg::PostingTapped { id: "4".to_string() });
        let (state, _) = update(state, Msg::BookClicked);
        let lines = render(&state.view());

        assert!(lines.contains(&"Selected: 1 | Total: 111.11 ₽".to_string()));
        assert!(lines.contains(&"[ Забронировать 1 подработку ]  (type `book`)".to_string()));
        assert!(lines.contains(&"Вы заработали 111.11 рублей =)".to_string()));
    }

    #[test]
    fn empty_search_result_is_called_out() {
        let (state, _) = update(loaded(), Msg::QueryChanged("пилот".to_string()));
        let lines = render(&state.view());
        assert_eq!(lines[1], "Search: \"пилот\"");
        assert_eq!(lines[2], "  (no postings match)");
    }
}
