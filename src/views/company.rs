use maud::{html, Markup};

use super::require_company;
use crate::framework::{context::AmbientContext, system::AppError};

pub fn view(ctx: &AmbientContext) -> Result<Markup, AppError> {
    let company_id = require_company(ctx)?;

    Ok(html! {
        section id="company" data-company-id=(company_id) {
            h1 { "Company" }
            dl {
                dt { "Company ID" }
                dd { (company_id) }
                dt { "Supervisor" }
                dd { (ctx.account()) }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_company_id_and_supervisor() {
        let ctx = AmbientContext::new(3, "boss@example.com:pw");
        let markup = view(&ctx).unwrap().into_string();

        assert!(markup.contains(r#"data-company-id="3""#));
        assert!(markup.contains("<dd>3</dd>"));
        assert!(markup.contains("<dd>boss@example.com</dd>"));
        assert!(!markup.contains(":pw"));
    }

    #[test]
    fn refuses_negative_company() {
        let ctx = AmbientContext::new(-5, "a:b");
        let err = view(&ctx).unwrap_err();
        assert!(err.to_string().contains("-5"));
    }
}
