//! Bob, the lackadaisical teenager.

const SILENCE: &str = "Fine. Be that way!";
const YELLED_QUESTION: &str = "Calm down, I know what I'm doing!";
const YELLING: &str = "Whoa, chill out!";
const QUESTION: &str = "Sure.";
const OTHER: &str = "Whatever.";

/// Bob's reply to `remark`. Trailing whitespace is ignored.
pub fn response(remark: &str) -> &'static str {
    let remark = remark.trim_end();
    if remark.is_empty() {
        return SILENCE;
    }
    let question = remark.ends_with('?');
    match (is_yelling(remark), question) {
        (true, true) => YELLED_QUESTION,
        (true, false) => YELLING,
        (false, true) => QUESTION,
        (false, false) => OTHER,
    }
}

/// At least one uppercase letter and no lowercase ones.
fn is_yelling(remark: &str) -> bool {
    remark.chars().any(char::is_uppercase) && !remark.chars().any(char::is_lowercase)
}
