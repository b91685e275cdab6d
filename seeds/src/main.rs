use chrono::Utc;
use dotenv::dotenv;

use db::{
    get_conn,
    models::{Choice, Question},
    new_pool,
};

fn main() {
    dotenv().ok();

    let pool = new_pool();
    let conn = get_conn(&pool).unwrap();

    for (question_text, choice_texts) in &[
        ("What's new?", vec!["Not much", "The sky", "Just hacking again"]),
        ("What's your favourite editor?", vec!["vim", "emacs", "something else"]),
    ] {
        let question = Question::create(&conn, question_text.to_string(), Utc::now()).unwrap();

        for choice_text in choice_texts {
            Choice::create(&conn, question.id, choice_text.to_string()).unwrap();
        }
    }
}
