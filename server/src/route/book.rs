use crate::controller::Controller;
use crate::error::{BookAction, ErrorStatus};
use crate::handler::AppModule;
use crate::request::{
    BookRequest, BookTransformer, DeleteBookRequest, GetAllBookRequest, GetBookRequest,
};
use crate::response::BookPresenter;
use application::service::{
    CreateBookService, DeleteBookService, GetAllBookService, GetBookService, UpdateBookService,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};

pub trait BookRouter {
    fn route_book(self) -> Self;
}

impl BookRouter for Router<AppModule> {
    fn route_book(self) -> Self {
        self.route(
            "/books",
            get(
                |State(module): State<AppModule>, Query(req): Query<GetAllBookRequest>| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .intake(req)
                        .handle(|dto| async move { module.get_all_books(dto).await })
                        .await
                        .map_err(ErrorStatus::on(BookAction::List))
                },
            )
            .post(
                |State(module): State<AppModule>,
                 req: Result<Json<BookRequest>, JsonRejection>| async move {
                    let Json(req) = req?;
                    Controller::new(BookTransformer, BookPresenter)
                        .intake(req)
                        .handle(|dto| async move { module.create_book(dto).await })
                        .await
                        .map_err(ErrorStatus::on(BookAction::Add))
                },
            ),
        )
        .route(
            "/books/:id",
            get(
                |State(module): State<AppModule>, Path(id): Path<String>| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .intake(GetBookRequest::new(id))
                        .handle(|dto| async move { module.get_book(dto).await })
                        .await
                        .map_err(ErrorStatus::on(BookAction::Show))?
                        .ok_or_else(|| ErrorStatus::not_found(BookAction::Show))
                },
            )
            .put(
                |State(module): State<AppModule>,
                 Path(id): Path<String>,
                 req: Result<Json<BookRequest>, JsonRejection>| async move {
                    let Json(req) = req?;
                    Controller::new(BookTransformer, BookPresenter)
                        .intake((id, req))
                        .handle(|dto| async move { module.update_book(dto).await })
                        .await
                        .map_err(ErrorStatus::on(BookAction::Update))
                },
            )
            .delete(
                |State(module): State<AppModule>, Path(id): Path<String>| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .intake(DeleteBookRequest::new(id))
                        .handle(|dto| async move { module.delete_book(dto).await })
                        .await
                        .map_err(ErrorStatus::on(BookAction::Delete))
                },
            ),
        )
    }
}

#[cfg(test)]
mod test {
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use axum::Router;
    use kernel::prelude::entity::UpdateStamp;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::ServerConfig;
    use crate::handler::AppModule;
    use crate::route::router;

    fn app(update_stamp: UpdateStamp) -> Router {
        let config = ServerConfig {
            update_stamp,
            ..ServerConfig::default()
        };
        router(AppModule::new(&config))
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn moby_dick(read_page: i64) -> Value {
        json!({
            "name": "Moby Dick",
            "year": 1851,
            "author": "Melville",
            "summary": "...",
            "publisher": "Harper",
            "pageCount": 635,
            "readPage": read_page,
            "reading": false
        })
    }

    fn book(name: &str, read_page: i64, reading: bool) -> Value {
        json!({
            "name": name,
            "year": 2005,
            "author": "Andrea Hirata",
            "summary": "Lorem ipsum",
            "publisher": "Bentang Pustaka",
            "pageCount": 529,
            "readPage": read_page,
            "reading": reading
        })
    }

    async fn create(app: &Router, body: Value) -> String {
        let (status, body) = send(app, Method::POST, "/books", Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);
        body["data"]["bookId"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn moby_dick_scenario() {
        let app = app(UpdateStamp::InsertedAt);

        let (status, body) = send(&app, Method::POST, "/books", Some(moby_dick(635))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["status"], "success");
        assert_eq!(body["message"], "Buku berhasil ditambahkan");
        let id = body["data"]["bookId"].as_str().unwrap().to_string();

        let (status, body) = send(&app, Method::GET, &format!("/books/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        let created = body["data"]["book"].clone();
        assert_eq!(created["id"], id.as_str());
        assert_eq!(created["name"], "Moby Dick");
        assert_eq!(created["pageCount"], 635);
        assert_eq!(created["finished"], true);
        assert_eq!(created["insertedAt"], created["updatedAt"]);
        assert!(body.get("message").is_none());

        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let (status, body) =
            send(&app, Method::PUT, &format!("/books/{id}"), Some(moby_dick(100))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "success");
        assert_eq!(body["message"], "Buku berhasil diperbarui");
        assert!(body.get("data").is_none());

        let (_, body) = send(&app, Method::GET, &format!("/books/{id}"), None).await;
        let updated = &body["data"]["book"];
        assert_eq!(updated["readPage"], 100);
        assert_eq!(updated["finished"], false);
        assert_ne!(updated["insertedAt"], created["insertedAt"]);
        assert_eq!(updated["updatedAt"], created["updatedAt"]);

        let (status, body) = send(&app, Method::DELETE, &format!("/books/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Buku berhasil dihapus");
        assert_eq!(body["data"]["bookId"], id.as_str());

        let (status, body) = send(&app, Method::GET, &format!("/books/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status"], "fail");
        assert_eq!(body["message"], "Buku tidak ditemukan");

        let (status, body) = send(&app, Method::DELETE, &format!("/books/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Buku gagal dihapus. Id tidak ditemukan");
    }

    #[tokio::test]
    async fn update_stamp_can_target_updated_at() {
        let app = app(UpdateStamp::UpdatedAt);
        let id = create(&app, moby_dick(0)).await;
        let (_, before) = send(&app, Method::GET, &format!("/books/{id}"), None).await;

        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        send(&app, Method::PUT, &format!("/books/{id}"), Some(moby_dick(10))).await;
        let (_, after) = send(&app, Method::GET, &format!("/books/{id}"), None).await;

        let (before, after) = (&before["data"]["book"], &after["data"]["book"]);
        assert_eq!(before["insertedAt"], after["insertedAt"]);
        assert_ne!(before["updatedAt"], after["updatedAt"]);
    }

    #[tokio::test]
    async fn create_validation_failures() {
        let app = app(UpdateStamp::default());

        let mut nameless = moby_dick(0);
        nameless.as_object_mut().unwrap().remove("name");
        let (status, body) = send(&app, Method::POST, "/books", Some(nameless)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "fail");
        assert_eq!(body["message"], "Gagal menambahkan buku. Mohon isi nama buku");

        let (status, body) = send(&app, Method::POST, "/books", Some(json!({ "name": "" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Gagal menambahkan buku. Mohon isi nama buku");

        let (status, body) = send(&app, Method::POST, "/books", Some(moby_dick(636))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["message"],
            "Gagal menambahkan buku. readPage tidak boleh lebih besar dari pageCount"
        );

        let (status, body) = send(&app, Method::POST, "/books", Some(json!({ "name": 7 }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "fail");

        let (_, body) = send(&app, Method::GET, "/books", None).await;
        assert_eq!(body["data"]["books"], json!([]));
    }

    #[tokio::test]
    async fn partial_payload_is_stored_as_given() {
        let app = app(UpdateStamp::default());

        let partial = json!({ "name": "x", "pageCount": 10, "readPage": 5, "reading": false });
        let (status, body) = send(&app, Method::POST, "/books", Some(partial)).await;
        assert_eq!(status, StatusCode::CREATED);
        let id = body["data"]["bookId"].as_str().unwrap().to_string();

        let (_, body) = send(&app, Method::GET, &format!("/books/{id}"), None).await;
        let book = &body["data"]["book"];
        assert_eq!(book["year"], Value::Null);
        assert_eq!(book["summary"], Value::Null);
        assert_eq!(book["readPage"], 5);
        assert_eq!(book["finished"], false);

        let (_, body) = send(&app, Method::GET, "/books", None).await;
        assert_eq!(body["data"]["books"][0]["publisher"], Value::Null);

        let loose = json!({ "name": "y", "readPage": 900 });
        let id = create(&app, loose).await;
        let (_, body) = send(&app, Method::GET, &format!("/books/{id}"), None).await;
        assert_eq!(body["data"]["book"]["readPage"], 900);
        assert_eq!(body["data"]["book"]["pageCount"], Value::Null);
    }

    #[tokio::test]
    async fn update_failures() {
        let app = app(UpdateStamp::default());
        let id = create(&app, moby_dick(0)).await;

        let mut nameless = moby_dick(0);
        nameless["name"] = json!("");
        let (status, body) =
            send(&app, Method::PUT, &format!("/books/{id}"), Some(nameless.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Gagal memperbarui buku. Mohon isi nama buku");

        let (status, body) =
            send(&app, Method::PUT, &format!("/books/{id}"), Some(moby_dick(700))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["message"],
            "Gagal memperbarui buku. readPage tidak boleh lebih besar dari pageCount"
        );

        // Validation wins over the missing id.
        let (status, _) = send(&app, Method::PUT, "/books/unknown", Some(nameless)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = send(&app, Method::PUT, "/books/unknown", Some(moby_dick(1))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status"], "fail");
        assert_eq!(body["message"], "Gagal memperbarui buku. Id tidak ditemukan");

        let (_, body) = send(&app, Method::GET, &format!("/books/{id}"), None).await;
        assert_eq!(body["data"]["book"]["readPage"], 0);
    }

    #[tokio::test]
    async fn list_filters() {
        let app = app(UpdateStamp::default());
        let laskar = create(&app, book("Laskar Pelangi", 529, false)).await;
        let pemimpi = create(&app, book("Sang Pemimpi", 10, true)).await;
        let edensor = create(&app, book("Edensor", 0, false)).await;

        let ids = |body: &Value| {
            body["data"]["books"]
                .as_array()
                .unwrap()
                .iter()
                .map(|book| book["id"].as_str().unwrap().to_string())
                .collect::<Vec<_>>()
        };

        let (status, body) = send(&app, Method::GET, "/books", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "success");
        assert_eq!(ids(&body), vec![laskar.clone(), pemimpi.clone(), edensor.clone()]);
        assert_eq!(
            body["data"]["books"][0],
            json!({ "id": &laskar, "name": "Laskar Pelangi", "publisher": "Bentang Pustaka" })
        );

        let (_, body) = send(&app, Method::GET, "/books?name=pelangi", None).await;
        assert_eq!(ids(&body), vec![laskar.clone()]);

        let (_, body) = send(&app, Method::GET, "/books?reading=1", None).await;
        assert_eq!(ids(&body), vec![pemimpi.clone()]);

        let (_, body) = send(&app, Method::GET, "/books?reading=0", None).await;
        assert_eq!(ids(&body), vec![laskar.clone(), edensor.clone()]);

        let (_, body) = send(&app, Method::GET, "/books?reading=maybe", None).await;
        assert_eq!(ids(&body).len(), 3);

        let (_, body) = send(&app, Method::GET, "/books?finished=1", None).await;
        assert_eq!(ids(&body), vec![laskar.clone()]);

        let (_, body) = send(&app, Method::GET, "/books?finished=0&reading=0", None).await;
        assert_eq!(ids(&body), vec![edensor]);

        let (_, body) = send(&app, Method::GET, "/books?name=PEMIMPI&reading=1", None).await;
        assert_eq!(ids(&body), vec![pemimpi]);
    }
}
