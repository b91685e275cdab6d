use actix_web::{
    web::{Data, Json, Path},
    Result,
};
use chrono::Utc;

use db::{get_conn, PgPool};
use errors::Error;

use crate::handlers::{get_question_detail, QuestionDetail};

/// Same lookup contract as the detail page; the vote counts ride along
/// on the choices.
pub async fn results(
    pool: Data<PgPool>,
    question_id: Path<i32>,
) -> Result<Json<QuestionDetail>, Error> {
    let connection = get_conn(&pool)?;

    let response = get_question_detail(connection, question_id.into_inner(), Utc::now()).await?;

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use diesel::{PgConnection, RunQueryDsl};

    use db::{
        get_conn,
        models::{Choice, Question},
        new_pool,
        schema::{choices, questions},
    };
    use errors::ErrorResponse;

    use crate::handlers::QuestionDetail;
    use crate::tests::helpers::tests::{db_guard, test_get};

    fn clear_data(conn: &PgConnection) {
        diesel::delete(choices::table).execute(conn).unwrap();
        diesel::delete(questions::table).execute(conn).unwrap();
    }

    #[actix_rt::test]
    async fn test_results_shows_vote_counts() {
        let _lock = db_guard();
        let pool = new_pool();
        let conn = get_conn(&pool).unwrap();
        clear_data(&conn);

        let question =
            Question::create(&conn, "Past question".to_string(), Utc::now() - Duration::days(5))
                .unwrap();
        let choice = Choice::create(&conn, question.id, "Not much".to_string()).unwrap();
        Choice::record_vote(&conn, question.id, choice.id).unwrap();
        Choice::record_vote(&conn, question.id, choice.id).unwrap();

        let res: (u16, QuestionDetail) =
            test_get(&format!("/api/polls/{}/results", question.id)).await;
        assert_eq!(res.0, 200);

        assert_eq!(res.1.choices.len(), 1);
        assert_eq!(res.1.choices[0].votes, 2);

        clear_data(&conn);
    }

    #[actix_rt::test]
    async fn test_results_future_question_not_found() {
        let _lock = db_guard();
        let pool = new_pool();
        let conn = get_conn(&pool).unwrap();
        clear_data(&conn);

        let question =
            Question::create(&conn, "Future question".to_string(), Utc::now() + Duration::days(5))
                .unwrap();

        let res: (u16, ErrorResponse) =
            test_get(&format!("/api/polls/{}/results", question.id)).await;
        assert_eq!(res.0, 404);

        clear_data(&conn);
    }
}
