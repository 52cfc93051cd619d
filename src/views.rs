pub mod company;
pub mod error;
pub mod layout;
pub mod root;

use maud::Markup;

use crate::{
    framework::{context::AmbientContext, system::AppError},
    routes::Page,
};

/// ページを描画し, レイアウトに差し込む.
pub fn render(page: Page, ctx: &AmbientContext) -> Result<Markup, AppError> {
    let content = match page {
        Page::Root => root::view(ctx)?,
        Page::Company => company::view(ctx)?,
    };
    Ok(layout::frame(page.title(), content))
}

/// 会社IDは正の値でなければ描画しない.
fn require_company(ctx: &AmbientContext) -> Result<i64, AppError> {
    match ctx.company_id() {
        id if id > 0 => Ok(id),
        id => Err(AppError::Render(format!("company id must be positive, got {id}"))),
    }
}
