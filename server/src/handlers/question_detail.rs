use actix_web::web::block;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use db::models::{Choice, Question};
use db::Connection;
use errors::Error;

#[derive(Debug, Deserialize, Serialize)]
pub struct QuestionDetail {
    pub question: Question,
    pub choices: Vec<Choice>,
}

/// Shared lookup for the detail and results pages. Future-dated
/// questions come back as NotFound.
pub async fn get_question_detail(
    connection: Connection,
    question_id: i32,
    now: DateTime<Utc>,
) -> Result<QuestionDetail, Error> {
    let data: Result<(Question, Vec<Choice>), Error> = block(move || {
        let question = Question::find_published(&connection, question_id, now)?;
        let choices = Choice::find_by_question_id(&connection, question.id)?;
        Ok((question, choices))
    })
    .await?;

    let (question, choices) = data?;

    Ok(QuestionDetail { question, choices })
}
