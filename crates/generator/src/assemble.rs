use promptsite_core::STYLESHEET_FILE;

/// Combine a page body with the shared header and footer into a full document.
///
/// Pure and total: the three blobs are inserted verbatim, header before the
/// `<main>` region holding the body, footer after it.
pub fn assemble_page(body: &str, header: &str, footer: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0"/>
  <link rel="stylesheet" href="{STYLESHEET_FILE}"/>
</head>
<body>
{header}
<main>
{body}
</main>
{footer}
</body>
</html>
"#
    )
}
