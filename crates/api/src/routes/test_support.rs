//! Shared helpers for route tests.

use std::fmt::Write as _;
use std::path::Path;

use axum::response::Response;
use finmerge_core::ExtractionOrchestrator;
use finmerge_core::upload::UploadStore;
use finmerge_docai::DocumentAiClient;
use finmerge_shared::{DocumentAiConfig, UploadSettings};
use http_body_util::BodyExt;
use lopdf::{Object, Stream, dictionary};

use crate::{AppState, Processor};

/// Multipart boundary used by [`multipart_body`].
pub const BOUNDARY: &str = "finmerge-test-boundary";

fn store(dir: &Path) -> UploadStore {
    store_with_limit(dir, UploadSettings::default().max_request_bytes)
}

fn store_with_limit(dir: &Path, max_request_bytes: usize) -> UploadStore {
    UploadStore::from_settings(&UploadSettings {
        directory: dir.to_string_lossy().into_owned(),
        max_request_bytes,
        ..UploadSettings::default()
    })
    .expect("upload store")
}

/// Local-only state whose request body ceiling is `max_request_bytes`.
pub fn test_state_with_limit(dir: &Path, max_request_bytes: usize) -> AppState {
    AppState::new(
        Processor::new(
            ExtractionOrchestrator::new(None),
            store_with_limit(dir, max_request_bytes),
        ),
        false,
    )
}

/// State with local extraction only and uploads staged under `dir`.
pub fn test_state(dir: &Path, document_ai_enabled: bool) -> AppState {
    AppState::new(
        Processor::new(ExtractionOrchestrator::new(None), store(dir)),
        document_ai_enabled,
    )
}

/// State holding a Document AI client that points at a closed port, so
/// every cloud call fails and extraction falls back to local parsing.
pub fn test_state_with_cloud(dir: &Path, document_ai_enabled: bool) -> AppState {
    let client = DocumentAiClient::new(&DocumentAiConfig {
        enabled: document_ai_enabled,
        project_id: "acme".to_string(),
        processor_id: "abc123".to_string(),
        access_token: Some("token".to_string()),
        endpoint: Some("http://127.0.0.1:1".to_string()),
        timeout_secs: 2,
        ..DocumentAiConfig::default()
    })
    .expect("document ai client");
    AppState::new(
        Processor::new(ExtractionOrchestrator::new(Some(client)), store(dir)),
        document_ai_enabled,
    )
}

/// Reads a JSON response body.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}

/// One multipart part.
pub struct Part<'a> {
    name: &'a str,
    filename: Option<&'a str>,
    content: &'a [u8],
}

impl<'a> Part<'a> {
    pub fn file(name: &'a str, filename: &'a str, content: &'a [u8]) -> Self {
        Self {
            name,
            filename: Some(filename),
            content,
        }
    }

    pub fn text(name: &'a str, value: &'a str) -> Self {
        Self {
            name,
            filename: None,
            content: value.as_bytes(),
        }
    }
}

/// Encodes parts as `multipart/form-data` with [`BOUNDARY`].
pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        let mut head = format!("--{BOUNDARY}\r\n");
        match part.filename {
            Some(filename) => {
                write!(
                    head,
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{filename}\"\r\n\
                     Content-Type: application/pdf\r\n\r\n",
                    part.name
                )
                .unwrap();
            }
            None => {
                write!(
                    head,
                    "Content-Disposition: form-data; name=\"{}\"\r\n\r\n",
                    part.name
                )
                .unwrap();
            }
        }
        body.extend_from_slice(head.as_bytes());
        body.extend_from_slice(part.content);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// One-page PDF holding a fully ruled table.
pub fn statement_pdf(rows: &[&[&str]]) -> Vec<u8> {
    const LEFT: f32 = 72.0;
    const TOP: f32 = 700.0;
    const WIDTH: f32 = 120.0;
    const HEIGHT: f32 = 20.0;

    let columns = rows.iter().map(|r| r.len()).max().unwrap_or(0);
    let right = LEFT + columns as f32 * WIDTH;
    let bottom = TOP - rows.len() as f32 * HEIGHT;

    let mut content = String::new();
    for i in 0..=rows.len() {
        let y = TOP - i as f32 * HEIGHT;
        writeln!(content, "{LEFT} {y} m {right} {y} l S").unwrap();
    }
    for j in 0..=columns {
        let x = LEFT + j as f32 * WIDTH;
        writeln!(content, "{x} {bottom} m {x} {TOP} l S").unwrap();
    }
    content.push_str("BT /F1 10 Tf\n");
    for (i, row) in rows.iter().enumerate() {
        for (j, cell) in row.iter().enumerate() {
            let x = LEFT + j as f32 * WIDTH + 4.0;
            let y = TOP - (i + 1) as f32 * HEIGHT + 6.0;
            writeln!(content, "1 0 0 1 {x} {y} Tm ({cell}) Tj").unwrap();
        }
    }
    content.push_str("ET\n");

    let mut doc = lopdf::Document::with_version("1.5");
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));
    let pages_id = doc.new_object_id();
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => Object::Reference(pages_id),
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(612),
            Object::Integer(792),
        ],
        "Contents" => Object::Reference(content_id),
        "Resources" => dictionary! {
            "Font" => dictionary! { "F1" => Object::Reference(font_id) },
        },
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::Reference(page_id)],
            "Count" => Object::Integer(1),
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("serialize pdf");
    buf
}
