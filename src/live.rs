//! Shareable mermaid.live URLs: the `#pako:` payload encoding, plus a
//! helper that opens a URL with the host's default browser.
//!
//! The viewer decodes the URL fragment as base64url → zlib inflate → JSON,
//! so every step here has to match that pipeline byte for byte.

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine as _;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use serde::Serialize;
use std::io::Write;
use std::process::Command;

use crate::error::{Error, Result};

/// Base address the encoded payload is appended to.
pub const LIVE_URL_BASE: &str = "https://mermaid.live/view/#pako:";

#[derive(Serialize)]
struct LiveState<'a> {
    code: &'a str,
    mermaid: MermaidConfig,
}

#[derive(Serialize)]
struct MermaidConfig {
    theme: &'static str,
}

/// Turn rendered diagram text into a mermaid.live view URL.
///
/// Pure, no network or file I/O. The payload is the JSON record
/// `{"code": …, "mermaid": {"theme": "default"}}`, zlib-compressed at the
/// maximum ratio and encoded with padded url-safe base64.
pub fn live_url(code: &str) -> Result<String> {
    let state = LiveState {
        code,
        mermaid: MermaidConfig { theme: "default" },
    };
    let json = serde_json::to_vec(&state)?;
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(&json)?;
    let compressed = encoder.finish()?;
    Ok(format!("{}{}", LIVE_URL_BASE, URL_SAFE.encode(compressed)))
}

/// Open a URL with the platform's default handler, non-blocking.
pub fn open_in_browser(url: &str) -> Result<()> {
    let mut command = match std::env::consts::OS {
        "linux" | "openbsd" => {
            let mut c = Command::new("xdg-open");
            c.arg(url);
            c
        }
        "macos" => {
            let mut c = Command::new("open");
            c.arg(url);
            c
        }
        "windows" => {
            let mut c = Command::new("rundll32");
            c.args(["url.dll,FileProtocolHandler", url]);
            c
        }
        other => return Err(Error::UnsupportedPlatform(other.to_string())),
    };
    command.spawn()?;
    Ok(())
}
