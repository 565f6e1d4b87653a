//! Browser side of the export pipeline.
//!
//! Rasterization uses html2canvas, which the web app loads as a page script.
//! All DOM work goes through `document::eval`; each script sends back a small
//! JSON object instead of throwing, so every failure maps onto an
//! [`ExportError`].

use card::{ExportError, ExportHost, RasterImage};
use dioxus::prelude::*;
use serde::Deserialize;

/// html2canvas build loaded by the web app.
pub const HTML2CANVAS_SRC: &str =
    "https://cdn.jsdelivr.net/npm/html2canvas@1.4.1/dist/html2canvas.min.js";

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserExportHost;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScriptReply {
    #[serde(default)]
    ok: bool,
    #[serde(default)]
    data_url: Option<String>,
    #[serde(default)]
    missing: bool,
    #[serde(default)]
    blocked: bool,
    #[serde(default)]
    error: Option<String>,
}

/// Quote a Rust string as a JavaScript string literal.
fn js_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

/// Run `body` as an async function and receive whatever it returns.
async fn run_script(body: &str) -> Result<ScriptReply, ExportError> {
    let js = format!(
        "(async () => {{ {body} }})().then(\
            (reply) => dioxus.send(reply), \
            (e) => dioxus.send({{ error: String(e) }}));"
    );
    let mut eval = document::eval(&js);
    eval.recv::<ScriptReply>()
        .await
        .map_err(|e| ExportError::Script(e.to_string()))
}

impl ExportHost for BrowserExportHost {
    async fn settle(&self, delay_ms: u32) {
        #[cfg(target_arch = "wasm32")]
        gloo_timers::future::TimeoutFuture::new(delay_ms).await;

        #[cfg(not(target_arch = "wasm32"))]
        {
            let js = format!(
                "await new Promise(r => setTimeout(r, {delay_ms})); return {{ ok: true }};"
            );
            if let Err(e) = run_script(&js).await {
                tracing::warn!("Settle delay failed: {}", e);
            }
        }
    }

    async fn rasterize(&self, element_id: &str, scale: f32) -> Result<RasterImage, ExportError> {
        let js = format!(
            r#"
            const el = document.getElementById({id});
            if (!el) return {{ missing: true }};
            if (typeof html2canvas !== "function") return {{ error: "html2canvas is not loaded" }};
            try {{
                const canvas = await html2canvas(el, {{
                    scale: {scale},
                    useCORS: true,
                    allowTaint: true,
                    onclone: (doc) => doc.querySelectorAll("*").forEach((node) => {{
                        if (node instanceof HTMLElement) node.style.visibility = "visible";
                    }}),
                }});
                return {{ ok: true, dataUrl: canvas.toDataURL("image/png") }};
            }} catch (e) {{
                return {{ error: String(e) }};
            }}
            "#,
            id = js_string(element_id),
        );
        let reply = run_script(&js).await?;
        if reply.missing {
            return Err(ExportError::MissingTarget(element_id.to_string()));
        }
        match (reply.ok, reply.data_url) {
            (true, Some(data_url)) => Ok(RasterImage { data_url }),
            _ => Err(ExportError::Rasterize(
                reply.error.unwrap_or_else(|| "no image returned".to_string()),
            )),
        }
    }

    async fn open_print_window(&self, html: &str) -> Result<(), ExportError> {
        let js = format!(
            r#"
            const win = window.open("", "_blank");
            if (!win) return {{ blocked: true }};
            win.document.write({html});
            win.document.close();
            return {{ ok: true }};
            "#,
            html = js_string(html),
        );
        let reply = run_script(&js).await?;
        if reply.blocked {
            return Err(ExportError::PopupBlocked);
        }
        if !reply.ok {
            return Err(ExportError::Script(
                reply.error.unwrap_or_else(|| "print window failed".to_string()),
            ));
        }
        Ok(())
    }

    async fn save_file(&self, file_name: &str, data_url: &str) -> Result<(), ExportError> {
        let js = format!(
            r#"
            try {{
                const link = document.createElement("a");
                link.download = {name};
                link.href = {href};
                document.body.appendChild(link);
                link.click();
                link.remove();
                return {{ ok: true }};
            }} catch (e) {{
                return {{ error: String(e) }};
            }}
            "#,
            name = js_string(file_name),
            href = js_string(data_url),
        );
        let reply = run_script(&js).await?;
        if !reply.ok {
            return Err(ExportError::Save(
                reply.error.unwrap_or_else(|| "download failed".to_string()),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_string_escapes() {
        assert_eq!(js_string("Asha Rao.png"), r#""Asha Rao.png""#);
        assert_eq!(js_string("a\"b</script>"), r#""a\"b</script>""#);
    }

    #[test]
    fn test_reply_parsing() {
        let reply: ScriptReply =
            serde_json::from_value(serde_json::json!({ "ok": true, "dataUrl": "data:x" })).unwrap();
        assert!(reply.ok);
        assert_eq!(reply.data_url.as_deref(), Some("data:x"));

        let reply: ScriptReply = serde_json::from_value(serde_json::json!({ "blocked": true })).unwrap();
        assert!(reply.blocked);
        assert!(!reply.ok);
    }
}
