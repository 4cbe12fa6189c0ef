use axum::http::HeaderValue;

/// The dashboard origins allowed to call this service with credentials
pub const ORIGINS: [HeaderValue; 4] = [
    HeaderValue::from_static("http://localhost:3000"),
    HeaderValue::from_static("http://localhost:5173"),
    HeaderValue::from_static("https://dev.prospect.app"),
    HeaderValue::from_static("https://prospect.app"),
];
