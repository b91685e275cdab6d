mod question_detail;

pub use self::question_detail::*;
