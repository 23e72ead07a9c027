use std::collections::HashMap;

use chrono::Utc;
use handle_errors::Error;
use warp::http::StatusCode;
use warp::{Rejection, Reply};

use crate::routes::escape;
use crate::store::Store;
use crate::types::choice::{Choice, ChoiceId, NewChoice};
use crate::types::question::{Question, QuestionId};

/// GET /questions/{id}/results
///
/// Vote tallies for a question, guarded by the same visibility rule as the
/// detail page.
pub async fn results(id: String, store: Store) -> Result<impl Reply, Rejection> {
    let now = Utc::now();
    let question = store
        .visible_question(&QuestionId(id), now)
        .await
        .ok_or_else(|| warp::reject::custom(Error::QuestionNotFound))?;
    let choices = store.choices_for(&question.id).await;

    Ok(warp::reply::html(render_results(&question, &choices)))
}

/// POST /questions/{id}/vote
///
/// Counts a vote for the `choice` form field and replies with the updated
/// tallies.
pub async fn vote(
    id: String,
    store: Store,
    params: HashMap<String, String>,
) -> Result<impl Reply, Rejection> {
    let now = Utc::now();
    let question = store
        .visible_question(&QuestionId(id), now)
        .await
        .ok_or_else(|| warp::reject::custom(Error::QuestionNotFound))?;
    let selected = params
        .get("choice")
        .ok_or_else(|| warp::reject::custom(Error::MissingParameters))?;

    let choice = store
        .record_vote(&question.id, &ChoiceId(selected.to_string()))
        .await
        .map_err(warp::reject::custom)?;
    tracing::info!(question = %question.id.0, choice = %choice.id.0, "vote recorded");

    let choices = store.choices_for(&question.id).await;
    Ok(warp::reply::html(render_results(&question, &choices)))
}

/// POST /questions/{id}/choices
///
/// Adds a choice from the `choice_text` form field. Authoring is allowed
/// before the question is published, so only existence is checked.
pub async fn add_choice(
    id: String,
    store: Store,
    params: HashMap<String, String>,
) -> Result<impl Reply, Rejection> {
    let choice_text = params
        .get("choice_text")
        .ok_or_else(|| warp::reject::custom(Error::MissingParameters))?;

    store
        .add_choice(NewChoice {
            question_id: QuestionId(id),
            choice_text: choice_text.to_string(),
        })
        .await
        .map_err(warp::reject::custom)?;

    Ok(warp::reply::with_status("Choice added", StatusCode::OK))
}

fn render_results(question: &Question, choices: &[Choice]) -> String {
    let items: String = choices
        .iter()
        .map(|choice| {
            let label = if choice.votes == 1 { "vote" } else { "votes" };
            format!(
                "<li>{}: {} {}</li>\n",
                escape(&choice.choice_text),
                choice.votes,
                label
            )
        })
        .collect();
    format!(
        "<h1>{}</h1>\n<ul>\n{}</ul>\n",
        escape(&question.question_text),
        items
    )
}
