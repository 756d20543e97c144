//! Server-rendered HTML pages for the note routes.
//!
//! Every interpolated field is HTML-escaped, except note content, which
//! goes through the Markdown renderer instead.
use notedown::{escape_html, Note};

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape_html(title),
        body
    )
}

pub fn notes_index_page(notes: &[Note]) -> String {
    let mut body = String::from("<h1>Notes</h1>\n<ul>\n");
    for note in notes {
        body.push_str(&format!(
            "<li><a href=\"/notes/{}\">{}</a></li>\n",
            note.id,
            escape_html(&note.title)
        ));
    }
    body.push_str("</ul>\n<p><a href=\"/notes/new\">New note</a></p>\n");
    page("Notes", &body)
}

pub fn new_note_page() -> String {
    let body = "<h1>New note</h1>\n\
        <form action=\"/notes\" method=\"post\">\n\
        <p><label>Title <input type=\"text\" name=\"title\"></label></p>\n\
        <p><label>Content<br><textarea name=\"content\" rows=\"20\" cols=\"80\"></textarea></label></p>\n\
        <p><button type=\"submit\">Create</button></p>\n\
        </form>\n";
    page("New note", body)
}

pub fn note_page(note: &Note) -> String {
    let body = format!(
        "<h1>{}</h1>\n<div>\n{}</div>\n<p><a href=\"/notes\">Back to notes</a></p>\n",
        escape_html(&note.title),
        note.content_html()
    );
    page(&note.title, &body)
}
