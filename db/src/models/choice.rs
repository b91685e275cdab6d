use diesel::{ExpressionMethods, PgConnection, QueryDsl, RunQueryDsl};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::models::Question;
use crate::schema::choices;

#[derive(Associations, Debug, Deserialize, Identifiable, Queryable, Serialize)]
#[belongs_to(Question)]
pub struct Choice {
    pub id: i32,
    pub question_id: i32,
    pub choice_text: String,
    pub votes: i32,
}

#[derive(Insertable)]
#[table_name = "choices"]
pub struct NewChoice {
    pub question_id: i32,
    pub choice_text: String,
}

impl Choice {
    pub fn create(
        conn: &PgConnection,
        question_id: i32,
        choice_text: String,
    ) -> Result<Choice, Error> {
        let choice = diesel::insert_into(choices::table)
            .values(NewChoice {
                question_id,
                choice_text,
            })
            .get_result(conn)?;

        Ok(choice)
    }

    pub fn find_by_question_id(
        conn: &PgConnection,
        question_id: i32,
    ) -> Result<Vec<Choice>, Error> {
        use choices::dsl::{choices as choices_table, id, question_id as question_id_field};

        let results = choices_table
            .filter(question_id_field.eq(question_id))
            .order(id.asc())
            .get_results(conn)?;

        Ok(results)
    }

    /// Records one vote as a single `votes = votes + 1` UPDATE, so
    /// concurrent votes for the same choice cannot lose increments.
    /// Returns the number of rows updated; zero means the choice does
    /// not exist or does not belong to the question.
    pub fn record_vote(
        conn: &PgConnection,
        question_id: i32,
        choice_id: i32,
    ) -> Result<usize, Error> {
        use choices::dsl::{choices as choices_table, id, question_id as question_id_field, votes};

        let updated = diesel::update(
            choices_table
                .filter(id.eq(choice_id))
                .filter(question_id_field.eq(question_id)),
        )
        .set(votes.eq(votes + 1))
        .execute(conn)?;

        Ok(updated)
    }
}
