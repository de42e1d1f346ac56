use axum::body::to_bytes;
use axum::body::Body;
use axum::http::header::CONTENT_LENGTH;
use axum::http::{HeaderMap, Method, Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;
use std::time::Instant;

/// Middleware для логирования HTTP запросов
///
/// Выводит в консоль время, длительность, размер ответа, статус, метод и путь.
/// Отказы навигации (4xx) выделяются жёлтым. Тело буферизуется только когда
/// размер неизвестен (нет `Content-Length`), статика из `ServeDir` идёт потоком.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;

    if let Some(size) = content_length(response.headers()) {
        print_line(response.status(), start, &format_size(size), &method, uri.path());
        return response;
    }

    let (parts, body) = response.into_parts();

    // Размер неизвестен: читаем тело целиком
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            print_line(parts.status, start, "error", &method, uri.path());
            tracing::warn!("Failed to buffer response body for {}: {}", uri.path(), e);
            return Response::from_parts(parts, Body::default());
        }
    };

    print_line(parts.status, start, &format_size(bytes.len()), &method, uri.path());
    Response::from_parts(parts, Body::from(bytes))
}

fn print_line(status: StatusCode, start: Instant, size: &str, method: &Method, path: &str) {
    let color_code = if status.is_success() { "36" } else { "33" };

    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>10} | {} {:>6} {}",
        color_code,
        Local::now().format("%H:%M:%S"),
        start.elapsed().as_millis(),
        size,
        status.as_u16(),
        method,
        path
    );
}

/// Размер тела из заголовка `Content-Length`, если он есть и корректен
pub fn content_length(headers: &HeaderMap) -> Option<usize> {
    headers
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
}

/// Размер в байтах: `512 B`, `1.5 KB`, `2.0 MB`
pub fn format_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;

    let b = bytes as f64;
    if b < KB {
        format!("{} B", bytes)
    } else if b < MB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{:.1} MB", b / MB)
    }
}
