//! ヘッダとフッタで本文を挟む共通レイアウト.

use maud::{html, Markup, DOCTYPE};

use crate::settings::APP_TITLE;

const NAV_LINKS: [(&str, &str); 2] = [("/", "Dashboard"), ("/company", "Company")];

pub fn frame(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " - " (APP_TITLE) }
            }
            body {
                div class="min-h-screen flex justify-center w-screen max-w-screen" {
                    div class="flex flex-col justify-between" {
                        header { (header()) }
                        main id="content" { (content) }
                        footer { (footer()) }
                    }
                }
            }
        }
    }
}

fn header() -> Markup {
    html! {
        nav {
            strong { (APP_TITLE) }
            ul {
                @for (href, label) in NAV_LINKS {
                    li { a href=(href) { (label) } }
                }
            }
        }
    }
}

fn footer() -> Markup {
    html! {
        small { (APP_TITLE) " - Internship Management" }
    }
}
