//! HTML template constants for the `HtmlFormatter`.
//!
//! Holds the style sheet backing the segment bar class contract.

/// Document head up to and including `<title>`; the title text follows.
pub const HTML_HEAD_START: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>"#;

/// Rest of the head (styles) and the opening of the body container.
pub const HTML_HEAD_END: &str = r#"</title>
    <style>
        :root {
            --color-bg: #f8fafc;
            --color-card: #ffffff;
            --color-border: #e2e8f0;
            --color-text: #1e293b;
            --color-text-muted: #64748b;
        }
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
            background: var(--color-bg);
            color: var(--color-text);
            line-height: 1.6;
            padding: 2rem;
        }
        .container { max-width: 1200px; margin: 0 auto; }
        h1 { font-size: 1.875rem; font-weight: 700; margin-bottom: 1.5rem; color: var(--color-text); }
        .chart-container { background: var(--color-card); border-radius: 0.5rem; padding: 1.25rem; border: 1px solid var(--color-border); margin-bottom: 1rem; }
        .segment-bar { display: flex; overflow: hidden; border-radius: 0.375rem; }
        .segment-item-wrapper { display: flex; flex-direction: column; justify-content: center; align-items: center; min-width: 0; overflow: hidden; color: var(--color-text); font-size: 0.75rem; white-space: nowrap; }
        .segment-item-percentage { font-weight: 600; }
        .segment-item-value { color: var(--color-text-muted); font-variant-numeric: tabular-nums; }
        .segment-item-title { font-size: 0.6875rem; text-overflow: ellipsis; overflow: hidden; max-width: 100%; }
        .segment-small .segment-item-title,
        .segment-small .segment-item-value { display: none; }
        .segment-small .segment-item-percentage { font-size: 0.625rem; }
        .footer { margin-top: 2rem; padding-top: 1rem; border-top: 1px solid var(--color-border); font-size: 0.75rem; color: var(--color-text-muted); text-align: center; }
    </style>
</head>
<body>
    <div class="container">
"#;

/// Closing markup after the chart.
pub const HTML_FOOTER: &str = r#"        <div class="footer">
            Generated by <strong>segment-bar</strong>
        </div>
    </div>
</body>
</html>
"#;
