use crate::html;
use actix_web::http::header::{self, ContentType};
use actix_web::{get, post, web, HttpResponse, Responder};
use notedown::errors::NoteStoreError;
use notedown::{BoxedNoteStore, NoteID};
use serde::Deserialize;

fn notestore_error_handler(e: &NoteStoreError) -> HttpResponse {
    match e {
        NoteStoreError::NoteNotExist(_) => HttpResponse::NotFound().body(e.to_string()),
        NoteStoreError::PostgreSQLError(_) => {
            error!("Note store internal error {:?}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/notes")]
#[instrument(skip(store))]
async fn notes_index(store: web::Data<BoxedNoteStore>) -> impl Responder {
    let result = store.as_ref().list_notes().await;
    match result {
        Ok(notes) => HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(html::notes_index_page(&notes)),
        Err(e) => notestore_error_handler(&e),
    }
}

#[get("/notes/new")]
#[instrument]
async fn notes_new() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(html::new_note_page())
}

#[derive(Deserialize)]
struct NoteFormData {
    title: String,
    content: String,
}

#[post("/notes")]
#[instrument(skip(store, form))]
async fn notes_create(
    store: web::Data<BoxedNoteStore>,
    form: web::Form<NoteFormData>,
) -> impl Responder {
    let form = form.into_inner();
    let result = store.as_ref().new_note(form.title, form.content).await;
    match result {
        Ok(note) => HttpResponse::SeeOther()
            .insert_header((header::LOCATION, format!("/notes/{}", note.id)))
            .finish(),
        Err(e) => notestore_error_handler(&e),
    }
}

#[get("/notes/{note_id}")]
#[instrument(
    skip(store, params),
    fields(
        note_id = %params.0
    )
)]
async fn notes_show(
    store: web::Data<BoxedNoteStore>,
    params: web::Path<(i64,)>,
) -> impl Responder {
    let (note_id,) = params.into_inner();
    let result = store.as_ref().get_note(NoteID::new(note_id)).await;
    match result {
        Ok(note) => HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(html::note_page(&note)),
        Err(e) => notestore_error_handler(&e),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    // notes_new must be registered before notes_show, so that the literal
    // /notes/new segment is not tried as a note ID
    cfg.service(notes_index)
        .service(notes_new)
        .service(notes_create)
        .service(notes_show);
}
