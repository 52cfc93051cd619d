use super::ReqScopedState;
use serde::Serialize;
use serde_json::{Map, Value};

pub trait LoggerInterface {
    fn info(&self, item: &str);
    fn warning(&self, item: &str);
    fn danger(&self, item: &str);
    fn debug(&self, item: &str);
}

/// リクエストに紐づくロガー.
#[derive(Clone, Debug)]
pub struct Logger<'a>(pub &'a ReqScopedState);

impl<'a> LoggerInterface for Logger<'a> {
    fn info(&self, item: &str) {
        log(&self.0.log_member, LogLevel::Info, item)
    }
    fn warning(&self, item: &str) {
        log(&self.0.log_member, LogLevel::Warning, item)
    }

    fn danger(&self, item: &str) {
        log(&self.0.log_member, LogLevel::Danger, item)
    }

    fn debug(&self, item: &str) {
        log(&self.0.log_member, LogLevel::Debug, item)
    }
}

/// リクエスト外 (起動時, panic 時) のロガー.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemLogger;

impl LoggerInterface for SystemLogger {
    fn info(&self, item: &str) {
        log(&Map::new(), LogLevel::Info, item)
    }
    fn warning(&self, item: &str) {
        log(&Map::new(), LogLevel::Warning, item)
    }

    fn danger(&self, item: &str) {
        log(&Map::new(), LogLevel::Danger, item)
    }

    fn debug(&self, item: &str) {
        log(&Map::new(), LogLevel::Debug, item)
    }
}

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
enum LogLevel {
    Info,
    Warning,
    Danger,
    Debug,
}

#[derive(Serialize)]
struct LogLine<'a> {
    #[serde(flatten)]
    member: &'a Map<String, Value>,
    log_level: LogLevel,
    message: &'a str,
}

fn render(member: &Map<String, Value>, level: LogLevel, item: &str) -> String {
    let line = LogLine {
        member,
        log_level: level,
        message: item,
    };
    serde_json::to_string(&line).unwrap_or_else(|e| format!("{{\"log_error\":\"{e}\"}}"))
}

fn log(member: &Map<String, Value>, level: LogLevel, item: &str) {
    println!("{}", render(member, level, item))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn line_carries_request_members_level_and_message() {
        let mut member = Map::new();
        member.insert("req_id".to_string(), json!("01HZX"));
        member.insert("uri".to_string(), json!("/company"));

        let line: Value = serde_json::from_str(&render(&member, LogLevel::Warning, "hello")).unwrap();

        assert_eq!(line["req_id"], "01HZX");
        assert_eq!(line["uri"], "/company");
        assert_eq!(line["log_level"], "warning");
        assert_eq!(line["message"], "hello");
    }

    #[test]
    fn system_line_has_only_level_and_message() {
        let line: Value = serde_json::from_str(&render(&Map::new(), LogLevel::Danger, "boom")).unwrap();

        assert_eq!(line, json!({ "log_level": "danger", "message": "boom" }));
    }
}
