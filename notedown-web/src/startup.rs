use crate::routes::*;
use actix_web::dev::Server;
use actix_web::middleware::{NormalizePath, TrailingSlash};
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use notedown::BoxedNoteStore;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub fn run(listener: TcpListener, note_store: BoxedNoteStore) -> Result<Server, std::io::Error> {
    let store: Data<BoxedNoteStore> = Data::new(note_store);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(NormalizePath::new(TrailingSlash::Trim))
            .wrap(TracingLogger::default())
            .configure(index_config)
            .configure(notes_config)
            .app_data(store.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
