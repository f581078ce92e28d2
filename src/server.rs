//! Local preview server.
//!
//! Serves the page for a single visitor and turns form posts and uploads
//! into session events, standing in for the browser tab the page was
//! designed for.
//!
//! ## Routes
//!
//! - `GET /` - the rendered page
//! - `POST /newsletter` - form-urlencoded `email`
//! - `POST /gallery` - raw file body or JSON batch, prepended to the gallery
//! - `POST /gallery/reset` - restore the default gallery
//! - `POST /gallery/{index}` - replace one gallery image
//! - `POST /hero` - replace the hero background
//! - `POST /sounds/band` - replace the live band photo
//! - `POST /sounds/{artist}/{performer}` - replace a performer photo
//!
//! Single uploads carry the file's MIME type in `Content-Type` and its
//! percent-encoded name in `X-File-Name`. A gallery drop of several files
//! arrives as one `application/json` body, an array of
//! `{ "name", "type", "data" }` objects with base64 `data`, and is applied
//! all at once or not at all.

use crate::constants::{BATCH_CONTENT_TYPE, FALLBACK_MIME, MAX_UPLOAD_BYTES, SERVER_POLL_MS};
use crate::error::{MediaError, MediaResult, ServerError};
use crate::media::MediaFile;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;
use crate::session::Session;
use crate::storage::KeyValueStore;
use std::io::Read;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tiny_http::{Header, Response, Server, StatusCode};
use tracing::{debug, error, info, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Other,
}

/// One file inside a JSON batch upload.
#[derive(Debug, Deserialize)]
struct UploadPart {
    name: String,
    #[serde(rename = "type", default)]
    mime: String,
    /// Base64 payload, without the `data:` prefix
    data: String,
}

/// Transport-independent view of an incoming request.
#[derive(Clone, Debug)]
pub struct PageRequest {
    pub method: Method,
    /// Request target, query string included
    pub url: String,
    pub content_type: Option<String>,
    /// Percent-encoded upload file name
    pub file_name: Option<String>,
    pub body: Vec<u8>,
}

impl PageRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            content_type: None,
            file_name: None,
            body: Vec::new(),
        }
    }

    pub fn post(url: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            method: Method::Post,
            body,
            ..Self::get(url)
        }
    }

    /// A file upload as the page script sends it.
    pub fn upload(url: impl Into<String>, file: &MediaFile) -> Self {
        Self {
            content_type: Some(file.mime.clone()),
            file_name: Some(urlencoding::encode(&file.name).into_owned()),
            ..Self::post(url, file.bytes.clone())
        }
    }

    /// Several files in one request, as the page script sends a gallery drop.
    pub fn batch_upload(url: impl Into<String>, files: &[MediaFile]) -> Self {
        let parts: Vec<serde_json::Value> = files
            .iter()
            .map(|file| {
                serde_json::json!({
                    "name": file.name,
                    "type": file.mime,
                    "data": STANDARD.encode(&file.bytes),
                })
            })
            .collect();
        Self {
            content_type: Some(BATCH_CONTENT_TYPE.to_string()),
            ..Self::post(url, serde_json::Value::Array(parts).to_string().into_bytes())
        }
    }

    fn path(&self) -> &str {
        self.url.split(['?', '#']).next().unwrap_or("/")
    }

    fn mime(&self) -> &str {
        self.content_type
            .as_deref()
            .and_then(|ct| ct.split(';').next())
            .map(str::trim)
            .filter(|ct| !ct.is_empty())
            .unwrap_or(FALLBACK_MIME)
    }

    fn media_file(&self) -> MediaFile {
        let name = self
            .file_name
            .as_deref()
            .and_then(|n| urlencoding::decode(n).ok())
            .map(|n| n.into_owned())
            .unwrap_or_else(|| "upload".to_string());
        MediaFile::new(name, self.mime(), self.body.clone())
    }

    /// Every file in the body: a decoded JSON batch, or the raw body as one file.
    fn media_files(&self) -> MediaResult<Vec<MediaFile>> {
        if self.mime() != BATCH_CONTENT_TYPE {
            return Ok(vec![self.media_file()]);
        }

        let parts: Vec<UploadPart> = serde_json::from_slice(&self.body)
            .map_err(|e| MediaError::InvalidBatch(e.to_string()))?;
        parts
            .into_iter()
            .map(|part| {
                let bytes = STANDARD
                    .decode(part.data.as_bytes())
                    .map_err(|e| MediaError::InvalidBatch(format!("{}: {}", part.name, e)))?;
                let mime = if part.mime.is_empty() {
                    FALLBACK_MIME.to_string()
                } else {
                    part.mime
                };
                Ok(MediaFile::new(part.name, mime, bytes))
            })
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    Html(String),
    Redirect(String),
    Status(u16),
}

/// Value of `name` in a form-urlencoded body.
pub fn form_field(body: &str, name: &str) -> Option<String> {
    body.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if key != name {
            return None;
        }
        let value = value.replace('+', " ");
        urlencoding::decode(&value).ok().map(|v| v.into_owned())
    })
}

fn home() -> Reply {
    Reply::Redirect("/".to_string())
}

/// Route one request against the session.
pub fn handle<S: KeyValueStore>(session: &mut Session<S>, request: &PageRequest) -> Reply {
    let segments: Vec<&str> = request
        .path()
        .split('/')
        .filter(|s| !s.is_empty())
        .collect();

    match (request.method, segments.as_slice()) {
        (Method::Get, []) => Reply::Html(session.render()),
        (Method::Post, ["newsletter"]) => {
            let body = String::from_utf8_lossy(&request.body);
            let email = form_field(&body, "email").unwrap_or_default();
            session.submit_newsletter(&email);
            Reply::Redirect("/#cta".to_string())
        }
        (Method::Post, ["gallery"]) => match request.media_files() {
            Ok(files) => {
                let added = session.add_gallery_files(&files);
                debug!(added, total = files.len(), "Gallery upload");
                home()
            }
            Err(e) => {
                warn!("Rejected gallery upload: {}", e);
                Reply::Status(400)
            }
        },
        (Method::Post, ["gallery", "reset"]) => {
            session.reset_gallery();
            home()
        }
        (Method::Post, ["gallery", index]) => match index.parse::<usize>() {
            Ok(index) => {
                session.replace_gallery_src(index, &request.media_file());
                home()
            }
            Err(_) => Reply::Status(404),
        },
        (Method::Post, ["hero"]) => {
            session.drop_hero_file(&request.media_file());
            home()
        }
        (Method::Post, ["sounds", "band"]) => {
            session.set_band_image(&request.media_file());
            home()
        }
        (Method::Post, ["sounds", artist, performer]) => {
            match (artist.parse::<usize>(), performer.parse::<usize>()) {
                (Ok(artist), Ok(performer)) => {
                    session.set_performer_image(artist, performer, &request.media_file());
                    home()
                }
                _ => Reply::Status(404),
            }
        }
        (Method::Other, _) => Reply::Status(405),
        _ => Reply::Status(404),
    }
}

/// Helper to create HTTP headers, returning None if the bytes are invalid
fn create_header(name: &[u8], value: &[u8]) -> Option<Header> {
    Header::from_bytes(name, value).ok()
}

fn read_request(request: &mut tiny_http::Request) -> Result<PageRequest, Reply> {
    let method = match request.method() {
        tiny_http::Method::Get => Method::Get,
        tiny_http::Method::Post => Method::Post,
        _ => Method::Other,
    };
    let header = |name: &'static str| {
        request
            .headers()
            .iter()
            .find(|h| h.field.equiv(name))
            .map(|h| h.value.as_str().to_string())
    };
    let content_type = header("Content-Type");
    let file_name = header("X-File-Name");
    let url = request.url().to_string();

    let mut body = Vec::new();
    let limit = MAX_UPLOAD_BYTES as u64 + 1;
    if let Err(e) = Read::take(request.as_reader(), limit).read_to_end(&mut body) {
        warn!("Failed to read request body for {}: {}", url, e);
        return Err(Reply::Status(400));
    }
    if body.len() > MAX_UPLOAD_BYTES {
        return Err(Reply::Status(413));
    }

    Ok(PageRequest {
        method,
        url,
        content_type,
        file_name,
        body,
    })
}

fn respond(request: tiny_http::Request, reply: Reply) {
    let result = match reply {
        Reply::Html(html) => {
            let mut response = Response::from_string(html);
            if let Some(h) = create_header(&b"Content-Type"[..], &b"text/html; charset=utf-8"[..]) {
                response = response.with_header(h);
            }
            request.respond(response)
        }
        Reply::Redirect(location) => {
            let mut response = Response::empty(StatusCode(303));
            if let Some(h) = create_header(&b"Location"[..], location.as_bytes()) {
                response = response.with_header(h);
            }
            request.respond(response)
        }
        Reply::Status(code) => request.respond(Response::empty(StatusCode(code))),
    };
    if let Err(e) = result {
        debug!("Failed to send response: {}", e);
    }
}

/// Preview server running on its own thread until dropped or shut down.
pub struct PreviewServer {
    addr: String,
    shutdown_flag: Arc<AtomicBool>,
    server_thread: Option<JoinHandle<()>>,
}

impl PreviewServer {
    /// Bind `addr` and serve `session` on a background thread.
    pub fn start<S>(addr: &str, mut session: Session<S>) -> Result<Self, ServerError>
    where
        S: KeyValueStore + Send + Sync + 'static,
    {
        let server = Server::http(addr).map_err(|e| ServerError::Bind {
            addr: addr.to_string(),
            message: e.to_string(),
        })?;
        // Port 0 binds an ephemeral port; report the one we got
        let bound = server
            .server_addr()
            .to_ip()
            .map(|ip| ip.to_string())
            .unwrap_or_else(|| addr.to_string());
        let shutdown_flag = Arc::new(AtomicBool::new(false));
        let shutdown_flag_clone = Arc::clone(&shutdown_flag);

        let server_thread = thread::spawn(move || {
            loop {
                if shutdown_flag_clone.load(Ordering::Relaxed) {
                    break;
                }

                match server.recv_timeout(Duration::from_millis(SERVER_POLL_MS)) {
                    Ok(Some(mut request)) => {
                        let reply = match read_request(&mut request) {
                            Ok(page_request) => handle(&mut session, &page_request),
                            Err(reply) => reply,
                        };
                        debug!(url = %request.url(), kind = reply_kind(&reply), "Handled request");
                        respond(request, reply);
                    }
                    Ok(None) => {}
                    Err(e) => {
                        error!("Preview server stopped: {}", e);
                        break;
                    }
                }
            }
        });

        info!("Preview server listening on http://{}/", bound);
        Ok(Self {
            addr: bound,
            shutdown_flag,
            server_thread: Some(server_thread),
        })
    }

    /// Address actually bound.
    pub fn addr(&self) -> &str {
        &self.addr
    }

    /// Block until the server thread exits.
    pub fn wait(mut self) {
        if let Some(handle) = self.server_thread.take() {
            let _ = handle.join();
        }
    }

    /// Ask the server loop to stop after its current poll.
    pub fn shutdown(&self) {
        self.shutdown_flag.store(true, Ordering::SeqCst);
    }
}

fn reply_kind(reply: &Reply) -> &'static str {
    match reply {
        Reply::Html(_) => "html",
        Reply::Redirect(_) => "redirect",
        Reply::Status(_) => "status",
    }
}

impl Drop for PreviewServer {
    fn drop(&mut self) {
        self.shutdown_flag.store(true, Ordering::SeqCst);
        if let Some(handle) = self.server_thread.take() {
            let _ = handle.join();
        }
    }
}
