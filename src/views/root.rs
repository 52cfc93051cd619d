use maud::{html, Markup};

use super::require_company;
use crate::framework::{context::AmbientContext, system::AppError};

pub fn view(ctx: &AmbientContext) -> Result<Markup, AppError> {
    let company_id = require_company(ctx)?;

    Ok(html! {
        section id="root" data-company-id=(company_id) {
            h1 { "Dashboard" }
            p { "Signed in as " strong { (ctx.account()) } }
            p { "Company #" (company_id) }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_company_and_account_but_not_the_secret() {
        let ctx = AmbientContext::new(1, "ykartal@example.edu:sdfasdfadf");
        let markup = view(&ctx).unwrap().into_string();

        assert!(markup.contains(r#"data-company-id="1""#));
        assert!(markup.contains("ykartal@example.edu"));
        assert!(!markup.contains("sdfasdfadf"));
    }

    #[test]
    fn refuses_non_positive_company() {
        let ctx = AmbientContext::new(0, "a:b");
        assert!(matches!(view(&ctx), Err(AppError::Render(_))));
    }
}
