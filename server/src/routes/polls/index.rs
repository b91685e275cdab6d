use actix_web::{
    web::{block, Data, Json},
    Result,
};

use db::{get_conn, models::Question, PgPool};
use errors::Error;

/// The five most recently published questions. Future-dated questions
/// are not filtered out of this list; only the detail and results
/// lookups apply the publish cutoff.
pub async fn index(pool: Data<PgPool>) -> Result<Json<Vec<Question>>, Error> {
    let connection = get_conn(&pool)?;

    let questions = block(move || Question::get_latest(&connection)).await??;

    Ok(Json(questions))
}
