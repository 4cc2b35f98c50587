//! HTML shell loaded into the webview panel.
//!
//! The page embeds the visualization app in a full-viewport iframe and runs
//! a small bridge script. Messages flagged `isFromApp` travel from the app
//! to the host; every other message came from the host and is forwarded
//! into the iframe.

/// Renders the panel document for an app served at `app_url`.
#[must_use]
pub fn render(app_url: &str, title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{title}</title>
    <style>
      body {{
        margin: 0;
        padding: 0;
        height: 100vh;
        overflow: hidden;
        scrollbar-width: none;
      }}
      iframe {{
        width: 100%;
        height: 100%;
      }}
    </style>
    <script>
      const host = acquireVsCodeApi();
      window.addEventListener('message', (event) => {{
        if (event.data && event.data.isFromApp) {{
          host.postMessage(event.data);
        }} else {{
          document.querySelector('iframe').contentWindow.postMessage(event.data, '*');
        }}
      }});
    </script>
  </head>
  <body>
    <iframe src="{src}" frameborder="0"></iframe>
  </body>
</html>
"#,
        title = escape(title),
        src = escape(app_url),
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_app_url_in_iframe() {
        let html = render("http://localhost:5173", "Visual File");
        assert!(html.contains(r#"<iframe src="http://localhost:5173" frameborder="0"></iframe>"#));
        assert!(html.contains("<title>Visual File</title>"));
    }

    #[test]
    fn bridge_routes_on_direction_flag() {
        let html = render("http://localhost:5173", "t");
        assert!(html.contains("event.data.isFromApp"));
        assert!(html.contains("host.postMessage(event.data)"));
    }

    #[test]
    fn escapes_attribute_breaking_characters() {
        let html = render(r#"http://x/"><script>alert(1)</script>"#, "a & b");
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
        assert!(html.contains("<title>a &amp; b</title>"));
    }
}
