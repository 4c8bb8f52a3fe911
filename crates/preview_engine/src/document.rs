use crate::assets::PreviewAssets;
use crate::escape::script_string_literal;
use crate::inject::marked_source;

/// What the host is editing, derived from its language identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Markdown: the source is marker-injected and converted client side.
    Markdown,
    /// Anything else previews as raw HTML, passed through untouched.
    Html,
}

impl DocumentKind {
    pub fn from_language_id(language_id: Option<&str>) -> Self {
        match language_id {
            Some("markdown") => Self::Markdown,
            _ => Self::Html,
        }
    }
}

/// Assemble the full preview document around the marker-injected source.
///
/// The injected text is embedded as a script-level string constant on
/// purpose: the bootstrap converts `str` into rendered markup inside
/// `#preview` only after the load completes, which is what realizes the
/// markers as element ids the resolver can find.
pub fn render_document(assets: &PreviewAssets, source: &str) -> String {
    let embedded = script_string_literal(&marked_source(source));
    format!(
        "
<html>
 <head>
  <style>{css}</style>
  <script>var str=\"{src}\";</script>
  <script>{converter}</script>
  <script>{bootstrap}</script>
 </head>
 <body>
  <div class=\"markdown-body\" id=\"preview\">
  </div>
 </body>
</html>
",
        css = assets.stylesheet,
        src = embedded,
        converter = assets.converter,
        bootstrap = assets.bootstrap,
    )
}

#[cfg(test)]
mod tests {
    use super::{render_document, DocumentKind};
    use crate::assets::PreviewAssets;

    #[test]
    fn only_the_markdown_language_selects_the_transform() {
        assert_eq!(
            DocumentKind::from_language_id(Some("markdown")),
            DocumentKind::Markdown
        );
        assert_eq!(
            DocumentKind::from_language_id(Some("html")),
            DocumentKind::Html
        );
        assert_eq!(DocumentKind::from_language_id(None), DocumentKind::Html);
    }

    #[test]
    fn document_embeds_assets_in_order() {
        let assets = PreviewAssets::from_parts("CSS", "CONVERTER", "BOOTSTRAP");
        let html = render_document(&assets, "hello");

        let style = html.find("<style>CSS</style>").expect("style block");
        let source = html.find("<script>var str=").expect("source block");
        let converter = html.find("<script>CONVERTER</script>").expect("converter");
        let bootstrap = html.find("<script>BOOTSTRAP</script>").expect("bootstrap");
        assert!(style < source && source < converter && converter < bootstrap);
        assert!(html.contains("<div class=\"markdown-body\" id=\"preview\">"));
    }
}
