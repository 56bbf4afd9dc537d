//! End-to-end behaviour of `MovieBrowserController` against scripted APIs.

mod support;

use std::time::Duration;

use browser::{BrowserConfig, EMPTY_RESULTS_MESSAGE, MovieBrowserController, ViewBody};
use catalog::{CatalogError, Movie, MoviePage};
use query::SortMode;
use support::{GatedApi, StaticApi, page_of, titles};
use tmdb_client::ApiError;

fn configured() -> BrowserConfig {
    BrowserConfig::new(Some("test-key".to_string()))
}

// ============================================================================
// Supersession
// ============================================================================

#[tokio::test]
async fn test_slow_earlier_response_never_overwrites_later_one() {
    let api = GatedApi::new();
    let mut controller = MovieBrowserController::new(&configured(), api.clone());

    controller.start();
    api.wait_for_calls(1).await;
    controller.set_search_term("al");
    api.wait_for_calls(2).await;
    controller.set_search_term("alien");
    api.wait_for_calls(3).await;

    // Latest request answers first
    assert!(api.release(2, Ok(page_of(&["Alien", "Aliens"], 1))));

    // The earlier requests were aborted; their answers go nowhere
    api.wait_until_abandoned(0).await;
    api.wait_until_abandoned(1).await;
    assert!(!api.release(1, Ok(page_of(&["Stale"], 1))));
    assert!(!api.release(0, Ok(page_of(&["Popular"], 1))));

    controller.settle().await;
    assert_eq!(titles(&controller.results().movies), vec!["Alien", "Aliens"]);
    assert_eq!(api.call(2).param("query"), Some("alien"));
}

#[tokio::test]
async fn test_cancelled_request_is_not_an_error() {
    let api = GatedApi::new();
    let mut controller = MovieBrowserController::new(&configured(), api.clone());

    controller.start();
    api.wait_for_calls(1).await;
    controller.set_search_term("matrix");
    api.wait_for_calls(2).await;
    api.wait_until_abandoned(0).await;

    api.release(1, Ok(page_of(&["The Matrix"], 1)));
    controller.settle().await;

    assert_eq!(controller.results().error, None);
    assert!(matches!(controller.view().body, ViewBody::Grid(_)));
}

#[tokio::test]
async fn test_loading_flag_tracks_pending_request() {
    let api = GatedApi::new();
    let mut controller = MovieBrowserController::new(&configured(), api.clone());

    controller.start();
    assert!(controller.results().is_loading);
    assert_eq!(controller.view().body, ViewBody::Loading);

    api.wait_for_calls(1).await;
    api.release(0, Ok(page_of(&["Dune"], 3)));
    assert!(controller.next_outcome().await);

    assert!(!controller.results().is_loading);
    assert!(!controller.next_outcome().await, "nothing left to settle");
}

// ============================================================================
// Configuration
// ============================================================================

#[tokio::test]
async fn test_missing_credential_makes_zero_calls() {
    let api = StaticApi::always(page_of(&["Never"], 1));
    let mut controller = MovieBrowserController::new(&BrowserConfig::new(None), api.clone());

    assert!(!controller.is_configured());
    assert!(controller.results().error.is_some(), "error is set before any input");

    controller.start();
    controller.set_search_term("anything");
    controller.go_next();
    controller.settle().await;

    assert!(api.calls().is_empty());
    assert!(!controller.results().is_loading);
    let view = controller.view();
    assert!(matches!(view.body, ViewBody::ConfigurationError(_)));
    assert!(view.message().unwrap().contains("API key is missing"));
}

#[tokio::test]
async fn test_blank_credential_counts_as_missing() {
    let api = StaticApi::always(MoviePage::empty());
    let mut controller =
        MovieBrowserController::new(&BrowserConfig::new(Some("   ".to_string())), api.clone());

    controller.start();
    controller.settle().await;

    assert!(api.calls().is_empty());
    assert!(controller.config_error().is_some());
}

// ============================================================================
// Pagination
// ============================================================================

#[tokio::test]
async fn test_display_caps_at_500_pages_and_next_stops_there() {
    let api = StaticApi::always(page_of(&["Popular"], 750));
    let mut controller = MovieBrowserController::new(&configured(), api.clone());

    controller.start();
    controller.settle().await;
    assert_eq!(controller.view().controls.unwrap().total_pages, 500);

    // Superseded requests are aborted before they ever run
    for _ in 1..500 {
        assert!(controller.go_next());
    }
    controller.settle().await;

    assert_eq!(controller.query().page(), 500);
    let controls = controller.view().controls.unwrap();
    assert!(!controls.next_enabled);
    assert!(controls.prev_enabled);

    assert!(!controller.go_next());
    assert!(!controller.is_in_flight());
    assert_eq!(controller.query().page(), 500);

    let calls = api.calls();
    assert_eq!(calls.last().unwrap().param("page"), Some("500"));
}

#[tokio::test]
async fn test_prev_is_a_noop_on_first_page() {
    let api = StaticApi::always(page_of(&["Popular"], 4));
    let mut controller = MovieBrowserController::new(&configured(), api.clone());

    controller.start();
    controller.settle().await;

    assert!(!controller.go_prev());
    assert_eq!(api.calls().len(), 1);

    assert!(controller.go_next());
    controller.settle().await;
    assert!(controller.go_prev());
    controller.settle().await;

    let pages: Vec<u32> = api.calls().iter().map(|c| c.page).collect();
    assert_eq!(pages, vec![1, 2, 1]);
}

#[tokio::test]
async fn test_go_to_page_is_clamped_to_reported_pages() {
    let api = StaticApi::always(page_of(&["Result"], 12));
    let mut controller = MovieBrowserController::new(&configured(), api.clone());

    controller.start();
    controller.settle().await;

    assert!(controller.go_to_page(40));
    controller.settle().await;
    assert_eq!(controller.query().page(), 12);
    assert!(!controller.go_to_page(12));

    let pages: Vec<u32> = api.calls().iter().map(|c| c.page).collect();
    assert_eq!(pages, vec![1, 12]);
}

#[tokio::test]
async fn test_new_search_term_resets_page() {
    let api = StaticApi::always(page_of(&["Result"], 10));
    let mut controller = MovieBrowserController::new(&configured(), api.clone());

    controller.start();
    controller.settle().await;
    controller.go_next();
    controller.settle().await;
    controller.go_next();
    controller.settle().await;
    assert_eq!(controller.query().page(), 3);

    assert!(controller.set_search_term("matrix"));
    assert_eq!(controller.query().page(), 1);
    controller.settle().await;

    let last = api.calls().last().cloned().unwrap();
    assert_eq!(last.path, "/search/movie");
    assert_eq!(last.param("query"), Some("matrix"));
    assert_eq!(last.param("page"), Some("1"));
}

#[tokio::test]
async fn test_shrinking_result_set_pulls_page_back_in_range() {
    let api = StaticApi::new(|request| {
        let total = if request.page == 1 { 5 } else { 2 };
        Ok(page_of(&["Result"], total))
    });
    let mut controller = MovieBrowserController::new(&configured(), api.clone());

    controller.start();
    controller.settle().await;
    for _ in 0..4 {
        controller.go_next();
    }
    controller.settle().await;

    assert_eq!(controller.query().page(), 2);
    let pages: Vec<u32> = api.calls().iter().map(|c| c.page).collect();
    assert_eq!(pages, vec![1, 5, 2]);
}

// ============================================================================
// Endpoint selection
// ============================================================================

#[tokio::test]
async fn test_empty_search_on_fresh_controller_fetches_discover() {
    let api = StaticApi::always(page_of(&["Popular"], 3));
    let mut controller = MovieBrowserController::new(&configured(), api.clone());

    controller.search("");
    controller.settle().await;

    let calls = api.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].path, "/discover/movie");
    assert_eq!(titles(&controller.results().movies), vec!["Popular"]);
}

#[tokio::test]
async fn test_empty_search_reports_fetch_failure() {
    let api = StaticApi::new(|_| Err(ApiError::Status { status: 503 }));
    let mut controller = MovieBrowserController::new(&configured(), api.clone());

    controller.search("");
    controller.settle().await;

    assert_eq!(api.calls().len(), 1);
    assert_eq!(controller.view().body, ViewBody::Error("Failed to fetch movies".to_string()));
}

#[tokio::test]
async fn test_search_with_new_term_sends_one_request() {
    let api = StaticApi::always(page_of(&["Heat"], 1));
    let mut controller = MovieBrowserController::new(&configured(), api.clone());

    controller.search("heat");
    controller.settle().await;

    let calls = api.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].param("query"), Some("heat"));
}

#[tokio::test]
async fn test_whitespace_term_uses_discover_mode() {
    let api = StaticApi::always(page_of(&["Popular"], 1));
    let mut controller = MovieBrowserController::new(&configured(), api.clone());

    controller.set_search_term("   ");
    controller.settle().await;

    let call = api.calls().last().cloned().unwrap();
    assert_eq!(call.path, "/discover/movie");
    assert_eq!(call.param("sort_by"), Some("popularity.desc"));
    assert_eq!(call.param("language"), Some("en-US"));
    assert_eq!(call.param("api_key"), Some("test-key"));
    assert_eq!(call.param("query"), None);
}

// ============================================================================
// Result states
// ============================================================================

#[tokio::test]
async fn test_empty_search_shows_no_movies_found() {
    let api = StaticApi::always(MoviePage::new(Vec::new(), 1));
    let mut controller = MovieBrowserController::new(&configured(), api.clone());

    controller.set_search_term("qwertyuiop");
    controller.settle().await;

    let view = controller.view();
    assert_eq!(view.body, ViewBody::Empty);
    assert_eq!(view.message(), Some(EMPTY_RESULTS_MESSAGE));
    assert_eq!(controller.results().error, None);
}

#[tokio::test]
async fn test_http_error_shows_generic_message() {
    let api = StaticApi::new(|_| Err(ApiError::Status { status: 500 }));
    let mut controller = MovieBrowserController::new(&configured(), api.clone());

    controller.start();
    controller.settle().await;

    assert_eq!(controller.results().error.as_deref(), Some("Failed to fetch movies"));
    assert!(controller.results().movies.is_empty());
    assert_eq!(controller.view().body, ViewBody::Error("Failed to fetch movies".to_string()));
    assert_eq!(api.calls().len(), 1, "no retry");
}

#[tokio::test]
async fn test_decode_error_is_surfaced_verbatim() {
    let api = StaticApi::new(|_| {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        Err(ApiError::InvalidResponse(CatalogError::Payload(err)))
    });
    let mut controller = MovieBrowserController::new(&configured(), api);

    controller.start();
    controller.settle().await;

    let message = controller.results().error.clone().unwrap();
    assert!(message.starts_with("Invalid response from movie API"), "{}", message);
}

#[tokio::test]
async fn test_changing_query_clears_previous_error() {
    let api = StaticApi::new(|request| {
        if request.endpoint.is_search() {
            Ok(page_of(&["Heat"], 1))
        } else {
            Err(ApiError::Status { status: 503 })
        }
    });
    let mut controller = MovieBrowserController::new(&configured(), api);

    controller.start();
    controller.settle().await;
    assert!(controller.results().error.is_some());

    controller.set_search_term("heat");
    controller.settle().await;
    assert_eq!(controller.results().error, None);
    assert_eq!(titles(&controller.results().movies), vec!["Heat"]);
}

// ============================================================================
// Sorting
// ============================================================================

#[tokio::test]
async fn test_sort_is_client_side_and_leaves_results_untouched() {
    let page = MoviePage::new(
        vec![
            Movie::new(1, "Unrated"),
            Movie::new(2, "Rated").with_vote_average(7.2),
            Movie::new(3, "Old").with_release_date("1979-05-25").with_vote_average(8.1),
        ],
        1,
    );
    let api = StaticApi::always(page);
    let mut controller = MovieBrowserController::new(&configured(), api.clone());

    controller.start();
    controller.settle().await;

    assert!(controller.set_sort_mode(SortMode::Rating));
    assert!(!controller.set_sort_mode(SortMode::Rating));
    assert!(!controller.is_in_flight());
    assert_eq!(api.calls().len(), 1);

    assert_eq!(titles(&controller.visible_movies()), vec!["Old", "Rated", "Unrated"]);
    assert_eq!(titles(&controller.results().movies), vec!["Unrated", "Rated", "Old"]);

    controller.set_sort_mode(SortMode::Date);
    assert_eq!(titles(&controller.visible_movies()), vec!["Old", "Unrated", "Rated"]);

    controller.set_sort_mode(SortMode::None);
    assert_eq!(titles(&controller.visible_movies()), vec!["Unrated", "Rated", "Old"]);
}

// ============================================================================
// Debounce and teardown
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_typing_burst_sends_one_request() {
    let api = StaticApi::always(page_of(&["Alien"], 1));
    let config = configured().with_debounce(Duration::from_millis(300));
    let mut controller = MovieBrowserController::new(&config, api.clone());

    for term in ["a", "al", "ali", "alie", "alien"] {
        controller.set_search_term(term);
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    controller.settle().await;

    let calls = api.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].param("query"), Some("alien"));
}

#[tokio::test]
async fn test_shutdown_aborts_pending_request() {
    let api = GatedApi::new();
    let mut controller = MovieBrowserController::new(&configured(), api.clone());

    controller.start();
    api.wait_for_calls(1).await;
    controller.shutdown();

    assert!(!controller.results().is_loading);
    api.wait_until_abandoned(0).await;
    assert!(!api.release(0, Ok(page_of(&["Late"], 1))));
    assert!(!controller.next_outcome().await);
    assert!(controller.results().movies.is_empty());
}

#[tokio::test]
async fn test_drop_aborts_pending_request() {
    let api = GatedApi::new();
    let mut controller = MovieBrowserController::new(&configured(), api.clone());

    controller.start();
    api.wait_for_calls(1).await;
    drop(controller);

    api.wait_until_abandoned(0).await;
    assert!(!api.release(0, Ok(page_of(&["Late"], 1))));
}
