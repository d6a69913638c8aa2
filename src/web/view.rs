//! HTML for the generator page. Presentation only: everything here is a
//! function of values the handlers already computed.

use crate::core::providers::PROVIDERS;
use crate::core::render::{View, PLACEHOLDER_TEXT};
use crate::core::state::QrState;

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Inner HTML of the code region.
pub fn code_region(view: &View) -> String {
    match view {
        View::Placeholder => format!(
            r#"<div class="placeholder" id="qr-placeholder">{}</div>"#,
            PLACEHOLDER_TEXT
        ),
        View::Code { svg, size } => format!(
            r#"<div class="qr-code" style="max-width: {size}px">{svg}</div>"#
        ),
    }
}

pub fn error_region(message: &str) -> String {
    format!(r#"<div class="placeholder error">{}</div>"#, escape_html(message))
}

fn provider_buttons() -> String {
    PROVIDERS
        .iter()
        .map(|entry| {
            format!(
                r#"<a class="button outline" id="provider-{id}" href="/open/{id}" target="_blank" rel="noopener noreferrer">{label}</a>"#,
                id = entry.id,
                label = entry.label
            )
        })
        .collect::<Vec<_>>()
        .join("\n                ")
}

/// The whole page, with the code region pre-rendered.
pub fn page(state: &QrState, region: &str) -> String {
    let disabled = if state.has_text() { "" } else { " disabled" };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>QR Code Generator</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, 'Open Sans', 'Helvetica Neue', sans-serif;
            background-color: #f8f9fa;
            max-width: 640px;
            margin: 0 auto;
            padding: 20px;
            color: #333;
        }}
        h1 {{
            color: #0d6efd;
            text-align: center;
        }}
        .card {{
            background: white;
            border-radius: 8px;
            padding: 24px;
            box-shadow: 0 4px 12px rgba(0, 0, 0, 0.1);
        }}
        .shortcuts {{
            background-color: #f8f9fa;
            border-radius: 8px;
            padding: 16px;
            margin-bottom: 24px;
            text-align: center;
        }}
        .row {{
            display: flex;
            flex-wrap: wrap;
            gap: 8px;
        }}
        .row > * {{
            flex: 1 1 140px;
        }}
        .button {{
            display: inline-block;
            background-color: #0d6efd;
            color: white;
            border: 1px solid #0d6efd;
            border-radius: 4px;
            padding: 10px 15px;
            font-size: 1rem;
            text-align: center;
            text-decoration: none;
            cursor: pointer;
        }}
        .button.outline {{
            background-color: white;
            color: #0d6efd;
        }}
        .button.secondary {{
            background-color: #6c757d;
            border-color: #6c757d;
        }}
        .button:disabled {{
            opacity: 0.65;
            cursor: not-allowed;
        }}
        #url-input {{
            width: 100%;
            box-sizing: border-box;
            padding: 12px;
            font-size: 1.1rem;
            border: 1px solid #ced4da;
            border-radius: 4px;
            margin-bottom: 24px;
        }}
        #qr-region {{
            text-align: center;
            margin-bottom: 24px;
        }}
        .qr-code svg {{
            width: 100%;
            height: auto;
        }}
        .placeholder {{
            border: 1px solid #dee2e6;
            border-radius: 4px;
            padding: 48px;
            color: #6c757d;
        }}
        .placeholder.error {{
            color: #dc3545;
        }}
    </style>
</head>
<body>
    <div class="card">
        <h1>QR Code Generator</h1>
        <div class="shortcuts">
            <p>Save your PDF to a cloud service and paste the sharing URL below:</p>
            <div class="row">
                {providers}
            </div>
        </div>
        <input type="text" id="url-input" placeholder="Enter URL or paste cloud storage sharing link" value="{value}" autocomplete="off">
        <div id="qr-region">{region}</div>
        <div class="row">
            <button class="button" id="download-button"{disabled}>Download QR Code</button>
            <button class="button secondary" id="reset-button">Refresh</button>
        </div>
    </div>

    <script>
        const input = document.getElementById('url-input');
        const region = document.getElementById('qr-region');
        const downloadButton = document.getElementById('download-button');

        function viewport() {{
            return Math.floor(window.innerWidth);
        }}

        function show(result) {{
            region.innerHTML = result.html;
            downloadButton.disabled = !result.has_text;
            if (input.value !== result.text) {{
                input.value = result.text;
            }}
        }}

        async function setText(text) {{
            const response = await fetch(`/api/text?viewport=${{viewport()}}`, {{
                method: 'PUT',
                headers: {{ 'Content-Type': 'application/json' }},
                body: JSON.stringify({{ text }}),
            }});
            const result = await response.json();
            // Ignore replies that a later keystroke has overtaken.
            if (result.text === input.value) {{
                show(result);
            }}
        }}

        async function resetText() {{
            const response = await fetch(`/api/reset?viewport=${{viewport()}}`, {{ method: 'POST' }});
            show(await response.json());
        }}

        async function refreshCode() {{
            const response = await fetch(`/api/code?viewport=${{viewport()}}`);
            show(await response.json());
        }}

        async function downloadCode() {{
            const response = await fetch(`/api/download?viewport=${{viewport()}}`, {{
                method: 'POST',
                headers: {{ 'Content-Type': 'application/json' }},
                body: JSON.stringify({{ text: input.value }}),
            }});
            if (!response.ok) {{
                const body = await response.json();
                alert(body.error);
                return;
            }}
            const blob = await response.blob();
            const href = URL.createObjectURL(blob);
            const link = document.createElement('a');
            link.href = href;
            link.download = 'qrcode.png';
            document.body.appendChild(link);
            link.click();
            document.body.removeChild(link);
            URL.revokeObjectURL(href);
        }}

        document.addEventListener('DOMContentLoaded', () => {{
            input.addEventListener('input', () => setText(input.value));
            downloadButton.addEventListener('click', downloadCode);
            document.getElementById('reset-button').addEventListener('click', resetText);
            window.addEventListener('resize', refreshCode);
            refreshCode();
        }});
    </script>
</body>
</html>"#,
        providers = provider_buttons(),
        value = escape_html(state.text()),
        region = region,
        disabled = disabled,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("https://example.com/doc"), "https://example.com/doc");
    }

    #[test]
    fn test_placeholder_region() {
        let html = code_region(&View::Placeholder);
        assert!(html.contains(PLACEHOLDER_TEXT));
        assert!(html.contains("qr-placeholder"));
    }

    #[test]
    fn test_code_region_embeds_svg() {
        let html = code_region(&View::Code {
            svg: "<svg></svg>".to_string(),
            size: 200,
        });
        assert!(html.contains("<svg></svg>"));
        assert!(html.contains("max-width: 200px"));
        assert!(!html.contains(PLACEHOLDER_TEXT));
    }

    #[test]
    fn test_page_lists_every_provider() {
        let html = page(&QrState::new(), "");
        for entry in PROVIDERS.iter() {
            assert!(html.contains(&format!("href=\"/open/{}\"", entry.id)));
            assert!(html.contains(entry.label));
        }
    }

    #[test]
    fn test_download_disabled_without_text() {
        let empty = page(&QrState::new(), "");
        assert!(empty.contains(r#"id="download-button" disabled"#));

        let mut state = QrState::new();
        state.set_text("https://example.com/doc");
        let filled = page(&state, "");
        assert!(!filled.contains(r#"id="download-button" disabled"#));
        assert!(filled.contains(r#"value="https://example.com/doc""#));
    }
}
