use actix_web::{
    web::{Data, Json, Path},
    Result,
};
use chrono::Utc;

use db::{get_conn, PgPool};
use errors::Error;

use crate::handlers::{get_question_detail, QuestionDetail};

pub async fn detail(
    pool: Data<PgPool>,
    question_id: Path<i32>,
) -> Result<Json<QuestionDetail>, Error> {
    let connection = get_conn(&pool)?;

    let response = get_question_detail(connection, question_id.into_inner(), Utc::now()).await?;

    Ok(Json(response))
}
