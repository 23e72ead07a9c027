use std::collections::HashMap;

use chrono::Utc;
use handle_errors::Error;
use warp::http::StatusCode;
use warp::{Rejection, Reply};

use crate::routes::escape;
use crate::store::Store;
use crate::types::choice::Choice;
use crate::types::pagination::extract_pagination;
use crate::types::question::{NewQuestion, Question, QuestionId};

/// GET /questions
///
/// Lists the published questions, most recent first. Questions whose
/// publication date is still in the future are left out. An optional
/// `start`/`end` query pair windows the listing.
pub async fn index(params: HashMap<String, String>, store: Store) -> Result<impl Reply, Rejection> {
    tracing::info!("querying questions");
    let now = Utc::now();
    let mut questions = store.visible_questions(now).await;

    if !params.is_empty() {
        let pagination = extract_pagination(params).map_err(warp::reject::custom)?;
        tracing::info!(pagination = true);
        let end = pagination.end.min(questions.len());
        let start = pagination.start.min(end);
        questions = questions[start..end].to_vec();
    }

    Ok(warp::reply::html(render_index(&questions)))
}

/// GET /questions/{id}
///
/// Shows a single question and its choices. An unpublished question and a
/// missing one both reject with the same not-found error.
pub async fn detail(id: String, store: Store) -> Result<impl Reply, Rejection> {
    let now = Utc::now();
    let question = store
        .visible_question(&QuestionId(id), now)
        .await
        .ok_or_else(|| warp::reject::custom(Error::QuestionNotFound))?;
    let choices = store.choices_for(&question.id).await;

    Ok(warp::reply::html(render_detail(&question, &choices)))
}

/// POST /questions
pub async fn add_question(
    store: Store,
    new_question: NewQuestion,
) -> Result<impl Reply, Rejection> {
    let question = store.add_question(new_question).await;
    tracing::info!(id = %question.id.0, "question added");

    Ok(warp::reply::with_status("Question added", StatusCode::OK))
}

fn render_index(questions: &[Question]) -> String {
    if questions.is_empty() {
        return "<p>No polls are available.</p>\n".to_string();
    }

    let items: String = questions
        .iter()
        .map(|question| {
            format!(
                "<li><a href=\"/questions/{}\">{}</a></li>\n",
                escape(&question.id.0),
                escape(&question.question_text)
            )
        })
        .collect();
    format!("<h1>Latest polls</h1>\n<ul>\n{}</ul>\n", items)
}

fn render_detail(question: &Question, choices: &[Choice]) -> String {
    let items: String = choices
        .iter()
        .map(|choice| format!("<li>{}</li>\n", escape(&choice.choice_text)))
        .collect();
    format!(
        "<h1>{}</h1>\n<ul>\n{}</ul>\n",
        escape(&question.question_text),
        items
    )
}
