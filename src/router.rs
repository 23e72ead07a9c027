use handle_errors::return_error;
use warp::{http::Method, Filter};

use crate::routes;
use crate::store::Store;

/// Compose the application's routes over the given store.
///
/// Kept separate from `main` so the whole application, including the
/// rejection handling, can be driven by `warp::test`.
pub fn router(
    store: Store,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let store_filter = warp::any().map(move || store.clone());

    let cors = warp::cors()
        .allow_any_origin()
        .allow_header("content-type")
        .allow_methods(&[Method::GET, Method::POST]);

    let index = warp::get()
        .and(warp::path("questions"))
        .and(warp::path::end())
        .and(warp::query())
        .and(store_filter.clone())
        .and_then(routes::question::index)
        .with(warp::trace(|info| {
            tracing::info_span!(
                "index request",
                method = %info.method(),
                path = %info.path(),
                id = %uuid::Uuid::new_v4(),
            )
        }));

    let detail = warp::get()
        .and(warp::path("questions"))
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .and(store_filter.clone())
        .and_then(routes::question::detail);

    let results = warp::get()
        .and(warp::path("questions"))
        .and(warp::path::param::<String>())
        .and(warp::path("results"))
        .and(warp::path::end())
        .and(store_filter.clone())
        .and_then(routes::choice::results);

    let add_question = warp::post()
        .and(warp::path("questions"))
        .and(warp::path::end())
        .and(store_filter.clone())
        .and(warp::body::json())
        .and_then(routes::question::add_question);

    let add_choice = warp::post()
        .and(warp::path("questions"))
        .and(warp::path::param::<String>())
        .and(warp::path("choices"))
        .and(warp::path::end())
        .and(store_filter.clone())
        .and(warp::body::form())
        .and_then(routes::choice::add_choice);

    let vote = warp::post()
        .and(warp::path("questions"))
        .and(warp::path::param::<String>())
        .and(warp::path("vote"))
        .and(warp::path::end())
        .and(store_filter.clone())
        .and(warp::body::form())
        .and_then(routes::choice::vote);

    index
        .or(detail)
        .or(results)
        .or(add_question)
        .or(add_choice)
        .or(vote)
        .with(cors)
        .with(warp::trace::request())
        .recover(return_error)
}
