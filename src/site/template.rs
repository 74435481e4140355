// src/site/template.rs

use std::collections::BTreeMap;

use maud::{html, Markup, DOCTYPE};

use crate::columns::ColumnRoles;
use crate::format::{format_timestamp, link_markup};

/// Everything the index page needs, assembled once per generation run.
pub struct PageContext<'a> {
    pub title: &'a str,
    pub subtitle: &'a str,
    pub headers: &'a [String],
    pub rows: &'a [Vec<String>],
    pub records: &'a [BTreeMap<String, String>],
    pub roles: ColumnRoles,
    pub generated_at: String,
    pub year: i32,
}

/// Render the full index page. Pure: same context, same markup.
pub fn render_index(ctx: &PageContext) -> Markup {
    html! {
        (DOCTYPE)
        html lang="zh-Hant" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (ctx.title) }
                link rel="stylesheet" href="static/style.css";
            }
            body {
                header.hero {
                    h1 { (ctx.title) }
                    p.subtitle { (ctx.subtitle) }
                }
                main {
                    (data_table(ctx))
                    (record_cards(ctx))
                }
                footer {
                    p { "產生時間：" (ctx.generated_at) }
                    p { "© " (ctx.year) }
                }
            }
        }
    }
}

/// The raw table view. Rows render as fetched, including rows whose cell
/// count disagrees with the header row.
fn data_table(ctx: &PageContext) -> Markup {
    html! {
        section.table-view {
            table {
                thead {
                    tr {
                        @for header in ctx.headers {
                            th { (header) }
                        }
                    }
                }
                tbody {
                    @for row in ctx.rows {
                        tr {
                            @for (idx, cell) in row.iter().enumerate() {
                                td { (cell_markup(ctx.roles, idx, cell)) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn cell_markup(roles: ColumnRoles, idx: usize, cell: &str) -> Markup {
    if roles.link == Some(idx) {
        link_markup(cell)
    } else if roles.timestamp == Some(idx) {
        html! { (format_timestamp(cell)) }
    } else {
        html! { (cell) }
    }
}

/// Card view fed from the name-keyed records; arity-mismatched rows never
/// reach this section.
fn record_cards(ctx: &PageContext) -> Markup {
    let field = |record: &BTreeMap<String, String>, idx: Option<usize>| -> Option<String> {
        idx.and_then(|i| ctx.headers.get(i))
            .and_then(|name| record.get(name))
            .cloned()
    };
    html! {
        section.cards {
            @for record in ctx.records {
                article.card {
                    @if let Some(author) = field(record, ctx.roles.author) {
                        h2 { (author) }
                    }
                    @if let Some(category) = field(record, ctx.roles.category) {
                        span.tag { (category) }
                    }
                    @if let Some(stamp) = field(record, ctx.roles.timestamp) {
                        time { (format_timestamp(&stamp)) }
                    }
                    @if let Some(link) = field(record, ctx.roles.link) {
                        p { (link_markup(&link)) }
                    }
                }
            }
        }
    }
}
