//! ルート表. 起動時に一度だけ組み立て, パスの完全一致で解決する.

use std::collections::HashSet;

use crate::framework::system::AppError;

/// ルーティングされるページ.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    /// ダッシュボード
    Root,
    Company,
}

impl Page {
    pub fn title(self) -> &'static str {
        match self {
            Page::Root => "Dashboard",
            Page::Company => "Company",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub page: Page,
}

impl RouteEntry {
    pub const fn new(path: &'static str, page: Page) -> Self {
        Self { path, page }
    }
}

/// 解決結果. 一致しなければエラーページへ.
#[derive(Debug, PartialEq, Eq)]
pub enum Resolution<'a> {
    Matched(&'a RouteEntry),
    Fallback,
}

#[derive(Clone, Debug)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// 重複や曖昧なパスがあれば組み立てに失敗する.
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self, AppError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            validate_path(entry.path)?;
            if !seen.insert(entry.path) {
                return Err(AppError::RouteTable(format!(
                    "duplicate path {}",
                    entry.path
                )));
            }
        }
        Ok(Self { entries })
    }

    pub fn standard() -> Result<Self, AppError> {
        Self::new(vec![
            RouteEntry::new("/", Page::Root),
            RouteEntry::new("/company", Page::Company),
        ])
    }

    pub fn resolve(&self, path: &str) -> Resolution<'_> {
        self.entries
            .iter()
            .find(|entry| entry.path == path)
            .map_or(Resolution::Fallback, Resolution::Matched)
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }
}

fn validate_path(path: &str) -> Result<(), AppError> {
    let reject = |why: &str| Err(AppError::RouteTable(format!("{path:?} {why}")));

    if !path.starts_with('/') {
        return reject("must start with '/'");
    }
    if let Some(c) = path.chars().find(|c| matches!(c, ':' | '*' | '{' | '}')) {
        return reject(&format!("contains pattern character {c:?}"));
    }
    if path.contains(['?', '#']) {
        return reject("contains a query or fragment");
    }
    if path.contains("//") {
        return reject("contains an empty segment");
    }
    if path.len() > 1 && path.ends_with('/') {
        return reject("has a trailing slash");
    }
    Ok(())
}
