//! HTML table rendering for license entries

use shared::LicenseEntry;

/// Render license entries into the fixed display table.
///
/// Pure and total: the zero-entry case still yields the header-only table.
/// Entries are rendered in source order.
pub fn render_table(entries: &[LicenseEntry]) -> String {
    let mut html = String::from(
        "<table border='1' cellpadding='5' cellspacing='0'>\
         <thead><tr><th>Product</th><th>Serial</th><th>Download</th></tr></thead><tbody>",
    );

    for entry in entries {
        let download_cell = match &entry.download {
            Some(url) => format!(
                r#"<a href="{}" target="_blank">Download</a>"#,
                escape_html(url)
            ),
            None => String::new(),
        };

        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&entry.product),
            escape_html(&entry.serial),
            download_cell,
        ));
    }

    html.push_str("</tbody></table>");
    html
}

/// Escape a value for interpolation into HTML text or attribute position.
fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
