use std::fmt;

/// 各ページに渡す読み取り専用の文脈.
#[derive(Clone, PartialEq, Eq)]
pub struct AmbientContext {
    company_id: i64,
    auth_token: String,
}

impl AmbientContext {
    pub fn new(company_id: i64, auth_token: impl Into<String>) -> Self {
        Self {
            company_id,
            auth_token: auth_token.into(),
        }
    }

    pub fn company_id(&self) -> i64 {
        self.company_id
    }

    pub fn auth_token(&self) -> &str {
        &self.auth_token
    }

    /// トークンのアカウント部分. `account:secret` の `account`.
    pub fn account(&self) -> &str {
        match self.auth_token.split_once(':') {
            Some((account, _)) => account,
            None => &self.auth_token,
        }
    }
}

// secret は出力しない
impl fmt::Debug for AmbientContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AmbientContext")
            .field("company_id", &self.company_id)
            .field("account", &self.account())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_is_the_part_before_the_colon() {
        let ctx = AmbientContext::new(1, "ykartal@example.edu:sdfasdf");
        assert_eq!(ctx.account(), "ykartal@example.edu");
    }

    #[test]
    fn account_without_colon_is_the_whole_token() {
        let ctx = AmbientContext::new(1, "anonymous");
        assert_eq!(ctx.account(), "anonymous");
    }

    #[test]
    fn debug_hides_the_secret() {
        let ctx = AmbientContext::new(7, "boss@example.com:hunter2");
        let printed = format!("{ctx:?}");

        assert!(printed.contains("company_id: 7"));
        assert!(printed.contains("boss@example.com"));
        assert!(!printed.contains("hunter2"));
    }
}
