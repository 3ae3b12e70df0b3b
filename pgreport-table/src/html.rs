//! HTML rendering of sortable tables.
//!
//! Markup follows the sorttable conventions so existing stylesheets keep
//! working: the active header gets `sorttable_sorted` or
//! `sorttable_sorted_reverse` plus an indicator span, unsortable headers get
//! `sorttable_nosort`, and custom keys are emitted as `sorttable_customkey`.

use crate::model::{Row, Table};
use pgreport_common::{escape_html, SortDirection};

/// Render a table, optionally with an `id` attribute
pub fn render_table(table: &Table, id: Option<&str>) -> String {
    let mut html = String::new();

    match id {
        Some(id) => html.push_str(&format!(
            "<table class=\"sortable\" id=\"{}\">\n",
            escape_html(id)
        )),
        None => html.push_str("<table class=\"sortable\">\n"),
    }

    html.push_str("<thead><tr>");
    for header in table.header() {
        let label = escape_html(&header.label);
        match (header.sortable, header.indicator) {
            (false, _) => {
                html.push_str(&format!("<th class=\"sorttable_nosort\">{}</th>", label));
            }
            (true, Some(direction)) => {
                let (class, span_id) = match direction {
                    SortDirection::Ascending => ("sorttable_sorted", "sorttable_sortfwdind"),
                    SortDirection::Descending => {
                        ("sorttable_sorted_reverse", "sorttable_sortrevind")
                    }
                };
                html.push_str(&format!(
                    "<th class=\"{}\">{}<span id=\"{}\">&nbsp;{}</span></th>",
                    class,
                    label,
                    span_id,
                    direction.indicator()
                ));
            }
            (true, None) => html.push_str(&format!("<th>{}</th>", label)),
        }
    }
    html.push_str("</tr></thead>\n");

    html.push_str("<tbody>\n");
    for row in table.rows() {
        push_row(&mut html, row, table.column_count());
    }
    html.push_str("</tbody>\n");

    if !table.footer().is_empty() {
        html.push_str("<tfoot>\n");
        for row in table.footer() {
            push_row(&mut html, row, table.column_count());
        }
        html.push_str("</tfoot>\n");
    }

    html.push_str("</table>\n");
    html
}

fn push_row(html: &mut String, row: &Row, columns: usize) {
    html.push_str("<tr>");
    for index in 0..columns.max(row.cells.len()) {
        match row.cell(index) {
            Some(cell) => match &cell.custom_key {
                Some(key) => html.push_str(&format!(
                    "<td sorttable_customkey=\"{}\">{}</td>",
                    escape_html(key),
                    escape_html(&cell.text)
                )),
                None => html.push_str(&format!("<td>{}</td>", escape_html(&cell.text))),
            },
            None => html.push_str("<td></td>"),
        }
    }
    html.push_str("</tr>\n");
}
