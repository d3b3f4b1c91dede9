pub(super) fn enter_exclusive_script(retry_once: bool) -> String {
    format!(
        r#"(function() {{
                    const root = document.getElementById("attempt-root");
                    if (!root) return;
                    const request = () => {{
                        if (document.fullscreenElement) return;
                        const pending = root.requestFullscreen();
                        if (pending && pending.catch) {{
                            pending.catch((err) => console.warn("fullscreen request rejected:", err));
                        }}
                    }};
                    request();
                    const retryOnce = {retry_once};
                    if (retryOnce) {{
                        setTimeout(request, 400);
                    }}
                }})();"#,
        retry_once = retry_once,
    )
}

pub(super) const EXIT_EXCLUSIVE_SCRIPT: &str = r#"(function() {
                    if (!document.fullscreenElement) return;
                    const pending = document.exitFullscreen();
                    if (pending && pending.catch) {
                        pending.catch((err) => console.warn("exit fullscreen failed:", err));
                    }
                })();"#;

/// Reports every fullscreen change back to the view as a boolean
/// "currently fullscreen" flag. Installed once per window.
pub(super) const FULLSCREEN_WATCH_SCRIPT: &str = r#"(function() {
                    if (window.__attemptFullscreenWatch) return;
                    window.__attemptFullscreenWatch = true;
                    document.addEventListener("fullscreenchange", () => {
                        dioxus.send(document.fullscreenElement !== null);
                    });
                })();"#;
