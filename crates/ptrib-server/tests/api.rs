//! Integration tests for the HTTP surface.

use axum::Router;
use axum::body::Body;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_REQUEST_METHOD, CONTENT_TYPE, ORIGIN,
};
use axum::http::{HeaderValue, Method, Request, StatusCode};
use http_body_util::BodyExt;
use rust_xlsxwriter::Workbook;
use serde_json::Value;
use tower::ServiceExt;

use ptrib_server::config::ServerConfig;
use ptrib_server::router::build_app_router;
use ptrib_server::state::AppState;

const BOUNDARY: &str = "ptrib-test-boundary";

fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![HeaderValue::from_static("http://localhost:8080")],
        sheet: "Produto".to_string(),
        max_upload_bytes: 1024 * 1024,
    }
}

fn app() -> Router {
    build_app_router(AppState::new(test_config()))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// One-part multipart body.
fn multipart(field: &str, file_name: &str, contents: &[u8]) -> Body {
    let mut body = format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n\
         Content-Type: application/octet-stream\r\n\r\n"
    )
    .into_bytes();
    body.extend_from_slice(contents);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    Body::from(body)
}

/// Workbook with one sheet named `sheet`; `None` leaves the cell blank.
fn workbook(sheet: &str, rows: &[&[Option<&str>]]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet).unwrap();
    for (row, cells) in rows.iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            if let Some(value) = cell {
                worksheet.write_string(row as u32, col as u16, *value).unwrap();
            }
        }
    }
    workbook.save_to_buffer().unwrap()
}

fn product_sheet(sheet: &str) -> Vec<u8> {
    workbook(
        sheet,
        &[
            &[
                Some("Codigo"),
                Some("NCM"),
                Some("CST Origem"),
                Some("CSOSN"),
                Some("Tipo Item"),
            ],
            &[Some("1"), Some("1234"), Some("9"), Some("101"), Some("00")],
            &[Some("2"), None, Some("0"), Some("999"), Some("77")],
        ],
    )
}

fn upload(body: Body) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/validar")
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(body)
        .unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!({"status": "ok"}));
}

#[tokio::test]
async fn upload_without_file_field_is_rejected() {
    let response = app()
        .oneshot(upload(multipart("outro", "produtos.xlsx", b"x")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["erro"], "Arquivo não fornecido ou erro no upload");
    assert!(json["detalhes"].is_string());
}

#[tokio::test]
async fn non_xlsx_upload_is_rejected() {
    let response = app()
        .oneshot(upload(multipart("file", "produtos.csv", b"NCM\n1\n")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["erro"], "Apenas arquivos .xlsx são aceitos");
    assert!(json.get("detalhes").is_none());
}

#[tokio::test]
async fn unreadable_workbook_names_the_sheet() {
    let response = app()
        .oneshot(upload(multipart("file", "Produtos.XLSX", b"not a workbook")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(
        json["erro"]
            .as_str()
            .unwrap()
            .starts_with("Erro ao abrir arquivo:")
    );
    assert_eq!(
        json["detalhes"],
        "Verifique se o arquivo é um .xlsx válido com a aba 'Produto'"
    );
}

#[tokio::test]
async fn valid_workbook_returns_sorted_details() {
    let response = app()
        .oneshot(upload(multipart("file", "produtos.xlsx", &product_sheet("Produto"))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["nomeArquivo"], "produtos.xlsx");
    assert_eq!(json["totalErros"], 5);
    assert_eq!(json["errosVazias"], 1);
    assert_eq!(json["errosNCM"], 1);
    assert_eq!(json["errosCSTOrigem"], 1);
    assert_eq!(json["errosCSOSN"], 1);
    assert_eq!(json["errosTipoItem"], 1);
    assert!(json["processingTime"].is_string());

    let positions: Vec<(String, u64, String)> = json["detalhes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|detail| {
            (
                detail["coluna"].as_str().unwrap().to_string(),
                detail["linha"].as_u64().unwrap(),
                detail["tipo"].as_str().unwrap().to_string(),
            )
        })
        .collect();
    let expected: [(&str, u64, &str); 5] = [
        ("B", 2, "NCM"),
        ("B", 3, "VAZIA"),
        ("C", 2, "CST_ORIGEM"),
        ("D", 3, "CSOSN"),
        ("E", 3, "TIPO_ITEM"),
    ];
    assert_eq!(
        positions,
        expected
            .iter()
            .map(|(col, row, tag)| ((*col).to_string(), *row, (*tag).to_string()))
            .collect::<Vec<_>>()
    );
}

#[tokio::test]
async fn workbook_without_configured_sheet_is_rejected() {
    let response = app()
        .oneshot(upload(multipart("file", "produtos.xlsx", &product_sheet("Outra"))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json["erro"],
        "Erro ao abrir arquivo: sheet 'Produto' not found (available: Outra)"
    );
    assert_eq!(
        json["detalhes"],
        "Verifique se o arquivo é um .xlsx válido com a aba 'Produto'"
    );
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/nada")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn cors_preflight_allows_configured_origin() {
    let response = app()
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/validar")
                .header(ORIGIN, "http://localhost:8080")
                .header(ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN),
        Some(&HeaderValue::from_static("http://localhost:8080"))
    );
}
