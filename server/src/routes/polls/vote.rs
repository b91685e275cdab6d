use actix_web::{
    http::header,
    web::{block, Data, Form, Path},
    HttpResponse, Result,
};
use serde::{Deserialize, Serialize};

use db::{
    get_conn,
    models::{Choice, Question},
    PgPool,
};
use errors::Error;

#[derive(Deserialize, Serialize)]
pub struct VoteForm {
    pub choice: Option<String>,
}

fn validate_choice_selected(choice: &Option<String>) -> Result<&str, Error> {
    match choice {
        Some(value) if !value.trim().is_empty() => Ok(value.trim()),
        _ => Err(Error::ValidationError(vec![
            "You didn't select a choice".to_string(),
        ])),
    }
}

/// Records a vote for one of the question's choices, then redirects to
/// the results page. The increment happens in a single UPDATE at the
/// database, so simultaneous voters cannot clobber each other's counts.
pub async fn vote(
    pool: Data<PgPool>,
    question_id: Path<i32>,
    params: Form<VoteForm>,
) -> Result<HttpResponse, Error> {
    let question_id = question_id.into_inner();
    let params = params.into_inner();

    let results_path = block(move || {
        let conn = get_conn(&pool)?;

        let question = Question::find_by_id(&conn, question_id)?;

        let selected = validate_choice_selected(&params.choice)?;
        let choice_id = selected
            .parse::<i32>()
            .map_err(|_| Error::ValidationError(vec!["invalid choice".to_string()]))?;

        let updated = Choice::record_vote(&conn, question.id, choice_id)?;
        if updated == 0 {
            return Err(Error::ValidationError(vec!["invalid choice".to_string()]));
        }

        Ok(format!("/api/polls/{}/results", question.id))
    })
    .await??;

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, results_path))
        .finish())
}
