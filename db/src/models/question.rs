use chrono::{DateTime, Duration, Utc};
use diesel::{ExpressionMethods, PgConnection, QueryDsl, RunQueryDsl};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::schema::questions;

#[derive(Debug, Deserialize, Identifiable, Queryable, Serialize)]
pub struct Question {
    pub id: i32,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

#[derive(Insertable)]
#[table_name = "questions"]
pub struct NewQuestion {
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

impl Question {
    pub fn create(
        conn: &PgConnection,
        question_text: String,
        pub_date: DateTime<Utc>,
    ) -> Result<Question, Error> {
        let question = diesel::insert_into(questions::table)
            .values(NewQuestion {
                question_text,
                pub_date,
            })
            .get_result(conn)?;

        Ok(question)
    }

    /// The five most recently published questions, newest first. Equal
    /// publish dates fall back to insertion order. Future-dated rows
    /// are not filtered here; detail lookups apply the cutoff.
    pub fn get_latest(conn: &PgConnection) -> Result<Vec<Question>, Error> {
        use questions::dsl::{id, pub_date, questions as questions_table};

        let results = questions_table
            .order(pub_date.desc())
            .then_order_by(id.asc())
            .limit(5)
            .get_results(conn)?;

        Ok(results)
    }

    pub fn find_by_id(conn: &PgConnection, question_id: i32) -> Result<Question, Error> {
        use questions::dsl::{id, questions as questions_table};

        let question = questions_table.filter(id.eq(question_id)).first(conn)?;

        Ok(question)
    }

    /// Lookup for detail/results pages. Questions with a publish date
    /// in the future are treated as not found.
    pub fn find_published(
        conn: &PgConnection,
        question_id: i32,
        now: DateTime<Utc>,
    ) -> Result<Question, Error> {
        use questions::dsl::{id, pub_date, questions as questions_table};

        let question = questions_table
            .filter(id.eq(question_id))
            .filter(pub_date.le(now))
            .first(conn)?;

        Ok(question)
    }

    /// True when the question was published within the day before `now`.
    pub fn was_published_recently(&self, now: DateTime<Utc>) -> bool {
        let one_day_ago = now - Duration::days(1);
        one_day_ago < self.pub_date && self.pub_date <= now
    }
}
