//! Server-rendered index page.

use kinship_core::Person;

/// Render the landing page: everyone in the tree, then the people with no
/// parent or child links yet.
pub fn render_index(people: &[Person], isolated: &[Person]) -> String {
    let mut html = String::with_capacity(1024);
    html.push_str(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Family Tree</title>\n</head>\n<body>\n<h1>Family Tree</h1>\n",
    );

    html.push_str("<h2>People</h2>\n");
    push_people(&mut html, people);

    html.push_str("<h2>People without relationships</h2>\n");
    push_people(&mut html, isolated);

    html.push_str("</body>\n</html>\n");
    html
}

fn push_people(html: &mut String, people: &[Person]) {
    if people.is_empty() {
        html.push_str("<p>None yet.</p>\n");
        return;
    }
    html.push_str("<ul>\n");
    for p in people {
        html.push_str(&format!(
            "<li><strong>{}</strong> ({})",
            escape(&p.name),
            escape(&p.gender)
        ));
        if !p.desc.is_empty() {
            html.push_str(&format!(" - {}", escape(&p.desc)));
        }
        html.push_str("</li>\n");
    }
    html.push_str("</ul>\n");
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
